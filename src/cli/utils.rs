//! Shared CLI helpers

use console::style;

/// Split a comma-separated flag value, dropping empty items.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|raw| {
        raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
    })
}

pub fn success(message: impl AsRef<str>) {
    println!("{} {}", style("✔").green().bold(), message.as_ref());
}

pub fn warning(message: impl AsRef<str>) {
    eprintln!("{} {}", style("!").yellow().bold(), style(message.as_ref()).yellow());
}
