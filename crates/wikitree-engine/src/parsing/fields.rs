//! Formatting of table cells into [`Setting`] fields.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::Setting;

/// Human-readable label for a raw variable token.
///
/// Underscores become spaces and the `col.` prefix becomes `Color `, then the
/// whole label is sentence-cased.
pub fn get_name(variable: &str) -> String {
    let name = variable.replace('_', " ").replace("col.", "Color ");
    sentence_case(&name)
}

/// Sentence-case a description and make sure it ends with a period.
pub fn format_description(description: &str) -> String {
    let mut formatted = sentence_case(description);
    if !formatted.ends_with('.') {
        formatted.push('.');
    }
    formatted
}

/// Contents of a trailing `[...]` segment, or an empty string.
pub fn get_range_or_option(description: &str) -> String {
    static RANGE_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = RANGE_REGEX
        .get_or_init(|| Regex::new(r"\[([^\]]+)\]$").expect("Invalid range regex"));

    re.captures(description)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Build a setting from a pipe-table data row.
///
/// Cells are `| variable | description | type | default |`. Returns `None`
/// for rows with fewer than four cells.
pub fn parse_row(line: &str) -> Option<Setting> {
    let mut cells = line.split('|').skip(1).map(str::trim);
    let variable = cells.next()?;
    let description = cells.next()?;
    let value_type = cells.next()?;
    let default_value = cells.next()?;

    Some(Setting {
        name: get_name(variable),
        variable: variable.to_string(),
        description: format_description(description),
        value_type: value_type.to_string(),
        default_value: default_value.to_string(),
        range: get_range_or_option(description),
    })
}

/// Lower-case everything, then upper-case the first character.
fn sentence_case(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
