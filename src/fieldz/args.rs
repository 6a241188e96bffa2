use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fieldz")]
#[command(version)]
#[command(about = "Interactive field-schema builder with JSON template preview", long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print the generated JSON template on exit
    #[arg(long)]
    pub json_on_exit: bool,
}
