//! Tri-state disease suitability flags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a food is appropriate for a given health condition.
///
/// Sources encode this many ways (1/0, yes/no, good/bad); anything that does
/// not parse cleanly stays `Unknown` rather than being guessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suitability {
    Suitable,
    Unsuitable,
    Unknown,
}

impl Suitability {
    /// Literal emitted in the unified CSV ("" for unknown, matching a missing cell).
    pub fn csv_literal(self) -> &'static str {
        match self {
            Suitability::Suitable => "1",
            Suitability::Unsuitable => "0",
            Suitability::Unknown => "",
        }
    }

    /// Integer flag used by the lookup interface; -1 denotes "unknown / not
    /// predicted yet" and tells the API layer to fall back to a classifier.
    pub fn as_flag(self) -> i8 {
        match self {
            Suitability::Suitable => 1,
            Suitability::Unsuitable => 0,
            Suitability::Unknown => -1,
        }
    }

    pub fn is_known(self) -> bool {
        self != Suitability::Unknown
    }

    /// Parses the unified CSV literal back into a flag.
    pub fn from_csv_literal(raw: &str) -> Suitability {
        match raw.trim() {
            "1" => Suitability::Suitable,
            "0" => Suitability::Unsuitable,
            _ => Suitability::Unknown,
        }
    }
}

impl fmt::Display for Suitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Suitability::Suitable => "suitable",
            Suitability::Unsuitable => "unsuitable",
            Suitability::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Health conditions tracked by the unified table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Condition {
    Diabetes,
    BloodPressure,
    Heart,
}

impl Condition {
    pub const ALL: [Condition; 3] = [
        Condition::Diabetes,
        Condition::BloodPressure,
        Condition::Heart,
    ];

    /// Column name in the unified table.
    pub fn code(self) -> &'static str {
        match self {
            Condition::Diabetes => "suitable_diabetes",
            Condition::BloodPressure => "suitable_blood_pressure",
            Condition::Heart => "suitable_heart",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
