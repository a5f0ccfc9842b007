//! Animal roster and identity matching.

mod matcher;

pub use matcher::{MatchResult, Roster};

use serde::{Deserialize, Serialize};

/// Sex of a registered animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "macho", alias = "Macho", alias = "MACHO")]
    Macho,
    #[serde(rename = "femea", alias = "Femea", alias = "FEMEA", alias = "fêmea")]
    Femea,
}

impl Sex {
    /// Parse a free-text sex label, case-insensitive and accent-tolerant.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "macho" => Some(Sex::Macho),
            "femea" | "fêmea" => Some(Sex::Femea),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Macho => "Macho",
            Sex::Femea => "Fêmea",
        }
    }

    /// Whether this is a male animal (gates scrotal-circumference capture).
    pub fn is_male(&self) -> bool {
        matches!(self, Sex::Macho)
    }
}

/// One registered animal, supplied by the caller and read-only during a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalRef {
    /// Persistence-layer identifier.
    pub id: i64,
    /// Herd-book series prefix (e.g. `CICS`).
    pub series_code: String,
    /// Registration number within the series.
    pub registration_number: String,
    /// Registered sex; authoritative over any sex token on a pasted line.
    pub sex: Sex,
}

impl AnimalRef {
    pub fn new(
        id: i64,
        series_code: impl Into<String>,
        registration_number: impl Into<String>,
        sex: Sex,
    ) -> Self {
        Self {
            id,
            series_code: series_code.into(),
            registration_number: registration_number.into(),
            sex,
        }
    }
}
