use clap::Parser;
use fieldz::commands::{add, delete, update, FieldPatch};
use fieldz::error::{FieldzError, Result};
use fieldz::model::{Field, FieldId, FieldType};
use fieldz::{generate, index, validate};
use std::io::{self, BufRead, Write};

mod args;
mod cli;

use args::Cli;
use cli::{print, render};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

enum Session {
    Continue,
    Quit,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    print::info("fieldz — build a schema, preview its JSON template. Type `help` for commands.");

    // The forest is the whole session state; every mutation replaces it
    // with the value returned by the core.
    let mut forest: Vec<Field> = Vec::new();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        prompt()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        match dispatch(&mut forest, line.trim()) {
            Ok(Session::Continue) => {}
            Ok(Session::Quit) => break,
            Err(FieldzError::Usage(msg)) => print::error(&msg),
            Err(e) => return Err(e),
        }
    }

    if cli.json_on_exit {
        render::print_template(&generate::run(&forest))?;
    }
    Ok(())
}

fn prompt() -> Result<()> {
    print!("schema> ");
    io::stdout().flush()?;
    Ok(())
}

fn dispatch(forest: &mut Vec<Field>, line: &str) -> Result<Session> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&command) = tokens.first() else {
        return Ok(Session::Continue);
    };

    match command {
        "add" => handle_add(forest),
        "child" => handle_child(forest, &tokens),
        "name" => handle_name(forest, &tokens),
        "type" => handle_type(forest, &tokens),
        "del" | "rm" => handle_delete(forest, &tokens),
        "list" | "ls" => {
            render::print_fields(&index::index_fields(forest));
            Ok(Session::Continue)
        }
        "check" | "validate" => handle_check(forest),
        "json" | "preview" => {
            render::print_template(&generate::run(forest))?;
            Ok(Session::Continue)
        }
        "help" | "?" => {
            render::print_help();
            Ok(Session::Continue)
        }
        "quit" | "exit" | "q" => Ok(Session::Quit),
        other => Err(FieldzError::Usage(format!(
            "Unknown command: {}. Type `help` for commands.",
            other
        ))),
    }
}

fn handle_add(forest: &mut Vec<Field>) -> Result<Session> {
    *forest = add::root(forest);
    let ordinal = index::index_fields(forest).len();
    print::success(&format!("Field added ({})", ordinal));
    Ok(Session::Continue)
}

fn handle_child(forest: &mut Vec<Field>, tokens: &[&str]) -> Result<Session> {
    let row = resolve_row(forest, tokens.get(1).copied())?;
    if row.field.field_type != FieldType::Nested {
        return Err(FieldzError::Usage(format!(
            "Field {} is not Nested. Set `type {} nested` first.",
            row.ordinal, row.ordinal
        )));
    }
    *forest = add::child(forest, row.field.id);
    print::success(&format!("Nested field added under field {}", row.ordinal));
    Ok(Session::Continue)
}

fn handle_name(forest: &mut Vec<Field>, tokens: &[&str]) -> Result<Session> {
    let id = resolve_id(forest, tokens.get(1).copied())?;
    let text = tokens.get(2..).map(|t| t.join(" ")).unwrap_or_default();
    if text.is_empty() {
        return Err(FieldzError::Usage(
            "Missing name. Usage: name <n> <text>".into(),
        ));
    }
    *forest = update::run(forest, id, &FieldPatch::rename(&text));
    print::success(&format!("Field renamed: {}", text));
    Ok(Session::Continue)
}

fn handle_type(forest: &mut Vec<Field>, tokens: &[&str]) -> Result<Session> {
    let id = resolve_id(forest, tokens.get(1).copied())?;
    let arg = tokens.get(2).ok_or_else(|| {
        FieldzError::Usage("Missing type. Usage: type <n> <string|number|nested>".into())
    })?;
    let field_type: FieldType = arg.parse().map_err(FieldzError::Usage)?;
    *forest = update::run(forest, id, &FieldPatch::retype(field_type));
    print::success(&format!("Field type set to {}", field_type));
    Ok(Session::Continue)
}

fn handle_delete(forest: &mut Vec<Field>, tokens: &[&str]) -> Result<Session> {
    let row = resolve_row(forest, tokens.get(1).copied())?;
    *forest = delete::run(forest, row.field.id);
    print::success(&format!("Field deleted ({})", row.ordinal));
    Ok(Session::Continue)
}

fn handle_check(forest: &[Field]) -> Result<Session> {
    let issues = validate::run(forest);
    if issues.is_empty() {
        print::success("Schema is valid.");
    } else {
        print::error(&format!("Schema has {} error(s):", issues.len()));
        for issue in &issues {
            print::warning(&format!("  {}", issue));
        }
    }
    Ok(Session::Continue)
}

fn resolve_id(forest: &[Field], arg: Option<&str>) -> Result<FieldId> {
    let ordinal = parse_ordinal(arg)?;
    index::resolve(forest, ordinal)
        .ok_or_else(|| FieldzError::Usage(format!("No field {}. Try `list`.", ordinal)))
}

fn resolve_row(forest: &[Field], arg: Option<&str>) -> Result<index::DisplayField> {
    let ordinal = parse_ordinal(arg)?;
    index::index_fields(forest)
        .into_iter()
        .find(|row| row.ordinal == ordinal)
        .ok_or_else(|| FieldzError::Usage(format!("No field {}. Try `list`.", ordinal)))
}

fn parse_ordinal(arg: Option<&str>) -> Result<usize> {
    let arg =
        arg.ok_or_else(|| FieldzError::Usage("Missing field number. Try `list`.".into()))?;
    arg.parse()
        .map_err(|_| FieldzError::Usage(format!("Not a field number: {}", arg)))
}
