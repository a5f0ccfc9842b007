//! Main importer struct and public API.

use chrono::{Local, NaiveDate};

use crate::error::{ImportError, Result};
use crate::normalize::{normalize_date, parse_decimal};
use crate::outcome::{
    BatchResult, ErrorKind, ErrorRecord, PendingRecord, ValidRecord, ValidationOutcome,
};
use crate::parse::{is_header_row, resolve_line, tokenize};
use crate::roster::{AnimalRef, MatchResult, Roster};

/// Reason attached to lines that do not fit any field layout.
const INVALID_FORMAT_REASON: &str = "invalid format, minimum SERIES WEIGHT";

/// Configuration for the importer.
#[derive(Debug, Clone, Default)]
pub struct ImporterConfig {
    /// Date used when a line carries no parseable date. `None` means the
    /// local date at call time; set it for deterministic replay.
    pub today: Option<NaiveDate>,
}

/// Classifies a pasted submission into valid, pending and error records.
pub struct Importer {
    config: ImporterConfig,
}

impl Importer {
    /// Create an importer with default configuration.
    pub fn new() -> Self {
        Self::with_config(ImporterConfig::default())
    }

    /// Create an importer with custom configuration.
    pub fn with_config(config: ImporterConfig) -> Self {
        Self { config }
    }

    /// Fix the fallback date, freezing the clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.config.today = Some(today);
        self
    }

    /// Classify a whole pasted submission against the roster.
    ///
    /// One synchronous pass in input order. Blank lines are ignored; header
    /// rows are skipped and recorded; every other line lands in exactly one
    /// bucket. Fails only on a blank submission.
    pub fn import(&self, text: &str, roster: &[AnimalRef]) -> Result<BatchResult> {
        if text.trim().is_empty() {
            return Err(ImportError::EmptySubmission);
        }

        let today = self
            .config
            .today
            .unwrap_or_else(|| Local::now().date_naive());
        let roster = Roster::new(roster);
        let mut result = BatchResult::new();

        for (index, raw) in text.lines().enumerate() {
            if raw.trim().is_empty() {
                continue;
            }
            let line_number = index + 1;
            result.total_lines += 1;

            let tokens = tokenize(raw);
            if is_header_row(&tokens) {
                result.skipped_headers.push(line_number);
                continue;
            }

            result.push(classify_line(line_number, raw, &tokens, &roster, today));
        }

        Ok(result)
    }
}

impl Default for Importer {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify one non-header line into its terminal state.
///
/// States are checked in order: unparseable ⇒ error; parsed but unmatched ⇒
/// pending regardless of weight validity, so the line stays available for
/// animal creation; matched with a bad weight ⇒ error; otherwise valid.
fn classify_line(
    line_number: usize,
    raw: &str,
    tokens: &[String],
    roster: &Roster<'_>,
    today: NaiveDate,
) -> ValidationOutcome {
    let Some(record) = resolve_line(tokens) else {
        return ValidationOutcome::Error(ErrorRecord {
            line_number,
            raw: raw.to_string(),
            kind: ErrorKind::InvalidFormat,
            reason: INVALID_FORMAT_REASON.to_string(),
        });
    };

    let animal = match roster.resolve(&record.series, record.registration.as_deref()) {
        MatchResult::Matched(animal) => animal,
        MatchResult::Unmatched => {
            return ValidationOutcome::Pending(PendingRecord {
                line_number,
                series_code: record.series,
                registration_number: record.registration,
                sex_label: record.sex_label,
                weight_text: record.weight_text,
                date_text: record.date_text,
                scrotal_text: record.scrotal_text,
                remarks: record.remarks,
                raw: raw.to_string(),
            });
        }
    };

    let weight = parse_decimal(&record.weight_text).filter(|w| *w > 0.0);
    let Some(weight_kg) = weight else {
        return ValidationOutcome::Error(ErrorRecord {
            line_number,
            raw: raw.to_string(),
            kind: ErrorKind::InvalidWeight,
            reason: format!("invalid weight '{}'", record.weight_text),
        });
    };

    // The matched animal's registered sex gates scrotal circumference; a
    // sex token on the line itself is not authoritative.
    let scrotal_cm = if animal.sex.is_male() {
        record.scrotal_text.as_deref().and_then(parse_decimal)
    } else {
        None
    };

    ValidationOutcome::Valid(ValidRecord {
        line_number,
        animal_id: animal.id,
        weight_kg,
        scrotal_cm,
        date: normalize_date(record.date_text.as_deref(), today),
        remarks: record.remarks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Sex;

    fn frozen_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
    }

    fn importer() -> Importer {
        Importer::new().with_today(frozen_today())
    }

    fn roster() -> Vec<AnimalRef> {
        vec![
            AnimalRef::new(1, "M1234", "10", Sex::Macho),
            AnimalRef::new(2, "F5678", "11", Sex::Femea),
        ]
    }

    #[test]
    fn test_empty_submission_rejected() {
        let err = importer().import("  \n \t\n", &roster()).unwrap_err();
        assert!(matches!(err, ImportError::EmptySubmission));
    }

    #[test]
    fn test_minimal_valid_line_defaults_date_to_today() {
        let result = importer().import("M1234 450.5", &roster()).unwrap();
        assert_eq!(result.valid.len(), 1);
        let valid = &result.valid[0];
        assert_eq!(valid.animal_id, 1);
        assert_eq!(valid.weight_kg, 450.5);
        assert_eq!(valid.scrotal_cm, None);
        assert_eq!(valid.date, frozen_today());
    }

    #[test]
    fn test_unmatched_line_is_pending_even_with_bad_weight() {
        let result = importer().import("ZZZ abc 30", &roster()).unwrap();
        assert_eq!(result.pending.len(), 1);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_matched_line_with_bad_weight_is_error() {
        let result = importer().import("M1234 0", &roster()).unwrap();
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].kind, ErrorKind::InvalidWeight);
    }

    #[test]
    fn test_scrotal_dropped_for_female_animal() {
        let result = importer().import("F5678 380 35", &roster()).unwrap();
        assert_eq!(result.valid.len(), 1);
        assert_eq!(result.valid[0].scrotal_cm, None);
    }

    #[test]
    fn test_scrotal_kept_for_male_animal() {
        let result = importer().import("M1234 450 35", &roster()).unwrap();
        assert_eq!(result.valid[0].scrotal_cm, Some(35.0));
    }

    #[test]
    fn test_blank_lines_not_counted() {
        let result = importer()
            .import("M1234 450\n\n   \nF5678 380\n", &roster())
            .unwrap();
        assert_eq!(result.total_lines, 2);
        // Line numbers reflect the raw submission
        assert_eq!(result.valid[0].line_number, 1);
        assert_eq!(result.valid[1].line_number, 4);
    }
}
