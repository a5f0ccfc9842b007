//! Per-line outcomes and the aggregated batch result.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category of a per-line error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Fewer than two tokens, or no field layout matched.
    InvalidFormat,
    /// The line matched an animal but its weight is not a positive number.
    InvalidWeight,
}

impl ErrorKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::InvalidFormat => "Invalid Format",
            ErrorKind::InvalidWeight => "Invalid Weight",
        }
    }
}

/// A line that matched a registered animal and normalized cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidRecord {
    /// 1-based line number in the pasted text.
    pub line_number: usize,
    /// Identifier of the matched animal.
    pub animal_id: i64,
    /// Weight in kilograms; always positive and finite.
    pub weight_kg: f64,
    /// Scrotal circumference in centimeters; only for male animals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrotal_cm: Option<f64>,
    /// Weighing date; falls back to the submission date when absent.
    pub date: NaiveDate,
    /// Free-text remarks, possibly empty.
    pub remarks: String,
}

/// A parsed line whose animal is not in the roster.
///
/// Fields are kept verbatim as extracted so a collaborator can build an
/// animal-creation request without re-parsing the original line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingRecord {
    /// 1-based line number in the pasted text.
    pub line_number: usize,
    /// Series token as written.
    pub series_code: String,
    /// Registration token as written, when the layout carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    /// Sex token as written, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex_label: Option<String>,
    /// Weight token, unparsed.
    pub weight_text: String,
    /// Date token, unparsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_text: Option<String>,
    /// Scrotal-circumference token, unparsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrotal_text: Option<String>,
    /// Free-text remarks, possibly empty.
    pub remarks: String,
    /// The original line text.
    pub raw: String,
}

/// A line that could not be imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// 1-based line number in the pasted text.
    pub line_number: usize,
    /// The original line text.
    pub raw: String,
    /// Error category.
    pub kind: ErrorKind,
    /// Human-readable reason shown to the operator.
    pub reason: String,
}

/// Terminal state of one pasted line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid(ValidRecord),
    Pending(PendingRecord),
    Error(ErrorRecord),
}

/// Result of classifying one whole submission.
///
/// Built in a single pass and immutable thereafter. Buckets preserve input
/// line order. For every submission:
/// `valid.len() + pending.len() + errors.len() + skipped_headers.len()`
/// equals `total_lines` (the number of non-empty lines).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Number of non-empty lines in the submission.
    pub total_lines: usize,
    /// Lines imported as weighing events.
    pub valid: Vec<ValidRecord>,
    /// Parsed lines awaiting animal creation.
    pub pending: Vec<PendingRecord>,
    /// Lines that could not be imported.
    pub errors: Vec<ErrorRecord>,
    /// Line numbers of discarded header rows.
    pub skipped_headers: Vec<usize>,
}

impl BatchResult {
    pub(crate) fn new() -> Self {
        Self {
            total_lines: 0,
            valid: Vec::new(),
            pending: Vec::new(),
            errors: Vec::new(),
            skipped_headers: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, outcome: ValidationOutcome) {
        match outcome {
            ValidationOutcome::Valid(record) => self.valid.push(record),
            ValidationOutcome::Pending(record) => self.pending.push(record),
            ValidationOutcome::Error(record) => self.errors.push(record),
        }
    }

    /// Whether every classified line imported cleanly.
    pub fn is_clean(&self) -> bool {
        self.pending.is_empty() && self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_serializes_with_tag() {
        let outcome = ValidationOutcome::Error(ErrorRecord {
            line_number: 3,
            raw: "XYZ abc".to_string(),
            kind: ErrorKind::InvalidFormat,
            reason: "invalid format, minimum SERIES WEIGHT".to_string(),
        });
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "error");
        assert_eq!(json["kind"], "invalid_format");
    }

    #[test]
    fn test_push_routes_to_buckets() {
        let mut result = BatchResult::new();
        result.push(ValidationOutcome::Pending(PendingRecord {
            line_number: 1,
            series_code: "F5678".to_string(),
            registration_number: None,
            sex_label: None,
            weight_text: "380".to_string(),
            date_text: Some("15/02/2026".to_string()),
            scrotal_text: None,
            remarks: String::new(),
            raw: "F5678 380 15/02/2026".to_string(),
        }));
        assert_eq!(result.pending.len(), 1);
        assert!(result.valid.is_empty());
        assert!(!result.is_clean());
    }
}
