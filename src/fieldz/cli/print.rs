use colored::Colorize;

pub(crate) fn info(content: &str) {
    println!("{}", content.dimmed());
}

pub(crate) fn success(content: &str) {
    println!("{}", content.green());
}

pub(crate) fn warning(content: &str) {
    println!("{}", content.yellow());
}

pub(crate) fn error(content: &str) {
    println!("{}", content.red());
}
