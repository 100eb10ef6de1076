//! Coercion of arbitrary suitability encodings to the tri-state flag.

use nutri_model::Suitability;

const TRUTHY: &[&str] = &[
    "1",
    "true",
    "yes",
    "y",
    "good",
    "safe",
    "suitable",
    "recommended",
];
const FALSY: &[&str] = &["0", "false", "no", "n", "bad", "unsafe", "avoid"];

/// Converts a raw cell to a tri-state suitability flag.
///
/// Known truthy/falsy words map directly; anything else parseable as a number
/// maps by sign (positive means suitable). Unparseable values stay `Unknown`
/// rather than defaulting either way.
pub fn parse_suitability(raw: &str) -> Suitability {
    let value = raw.trim().to_lowercase();
    if value.is_empty() {
        return Suitability::Unknown;
    }
    if TRUTHY.contains(&value.as_str()) {
        return Suitability::Suitable;
    }
    if FALSY.contains(&value.as_str()) {
        return Suitability::Unsuitable;
    }
    match value.parse::<f64>() {
        Ok(number) if number > 0.0 => Suitability::Suitable,
        Ok(_) => Suitability::Unsuitable,
        Err(_) => Suitability::Unknown,
    }
}
