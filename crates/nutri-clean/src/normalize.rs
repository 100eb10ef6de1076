//! Food-name normalization and header resolution.
//!
//! The normalization key is the sole join key across sources. A mismatch here
//! silently splits one food into two rows or fuses two foods into one, so the
//! function is pure, total, and idempotent.

/// Normalizes a food name for merging across datasets.
///
/// Lowercases, trims, collapses whitespace runs to single spaces, and strips
/// commas and periods that differ between sources. Empty input stays empty.
pub fn normalize_food_name(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    for part in raw.to_lowercase().split_whitespace() {
        let token: String = part.chars().filter(|ch| *ch != ',' && *ch != '.').collect();
        if token.is_empty() {
            continue;
        }
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(&token);
    }
    normalized
}

/// Finds the first candidate present in `headers`, case-insensitively.
///
/// Returns the header with its actual casing as it appears in the source.
/// Candidate order encodes priority; noisy real-world files can carry several
/// of these at once and the earliest candidate wins.
pub fn find_column(candidates: &[&str], headers: &[String]) -> Option<String> {
    find_column_index(candidates, headers).map(|idx| headers[idx].clone())
}

/// Index variant of [`find_column`].
pub fn find_column_index(candidates: &[&str], headers: &[String]) -> Option<usize> {
    for candidate in candidates {
        let wanted = candidate.to_lowercase();
        if let Some(idx) = headers.iter().position(|h| h.to_lowercase() == wanted) {
            return Some(idx);
        }
    }
    None
}
