use colored::Colorize;
use fieldz::index::DisplayField;
use fieldz::model::FieldType;
use unicode_width::UnicodeWidthStr;

const UNNAMED: &str = "(unnamed)";
const INDENT: &str = "  ";

pub(crate) fn print_fields(rows: &[DisplayField]) {
    if rows.is_empty() {
        println!("No fields yet. Type `add` to get started.");
        return;
    }

    // Align the type column on the widest indent+name combination.
    let name_width = rows
        .iter()
        .map(|row| row.depth * INDENT.width() + display_name(row).width())
        .max()
        .unwrap_or(0);

    for row in rows {
        let indent = INDENT.repeat(row.depth);
        let name = display_name(row);
        let padding = name_width - (indent.width() + name.width());

        let name_colored = if row.field.name.trim().is_empty() {
            name.dimmed()
        } else {
            name.normal()
        };
        let type_colored = match row.field.field_type {
            FieldType::Nested => row.field.field_type.to_string().yellow(),
            _ => row.field.field_type.to_string().cyan(),
        };

        println!(
            "{:>3}. {}{}{}  {}",
            row.ordinal,
            indent,
            name_colored,
            " ".repeat(padding),
            type_colored
        );
    }
}

fn display_name(row: &DisplayField) -> &str {
    if row.field.name.trim().is_empty() {
        UNNAMED
    } else {
        &row.field.name
    }
}

pub(crate) fn print_template(template: &serde_json::Value) -> fieldz::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(template)?);
    Ok(())
}

pub(crate) fn print_help() {
    println!("Commands:");
    println!("  add                add a field at the top level");
    println!("  child <n>          add a nested field under field <n>");
    println!("  name <n> <text>    rename field <n>");
    println!("  type <n> <type>    set field <n> to string, number or nested");
    println!("  del <n>            delete field <n> and everything under it");
    println!("  list               show the schema");
    println!("  check              validate the schema");
    println!("  json               preview the generated JSON template");
    println!("  help               show this help");
    println!("  quit               leave");
}
