//! Numeric parsing and formatting shared across the pipeline.

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Formats a floating-point number without trailing zeros.
///
/// "10.0" becomes "10", "10.50" becomes "10.5". Keeping one stable textual
/// form makes reruns of the pipeline byte-identical.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
