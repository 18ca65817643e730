//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Grade with a fixed number of decimals, `--` when unset.
pub fn format_grade(grade: Option<f64>, decimals: usize) -> String {
    match grade {
        Some(g) => format!("{:.*}", decimals, g),
        None => "--".to_string(),
    }
}

/// "Yes" / "No" for the graduation flag (unset reads as "No").
pub fn graduated_label(value: Option<bool>) -> &'static str {
    if value == Some(true) { "Yes" } else { "No" }
}

/// Text field or `--` placeholder.
pub fn text_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "--".to_string(),
    }
}
