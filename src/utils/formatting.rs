//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn dim(s: &str) -> String {
    format!("\x1b[2m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Textual description and ANSI color for a status code.
/// Used in human-readable listings and the calendar legend.
pub fn describe_status(code: &str) -> (String, &'static str) {
    match code.to_uppercase().as_str() {
        "PRESENT" => ("Present".into(), "\x1b[32m"),
        "LEAVE" => ("Leave".into(), "\x1b[31m"),
        "HALF_DAY" => ("Half day".into(), "\x1b[33m"),
        "HOLIDAY" => ("Optional holiday".into(), "\x1b[35m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}
