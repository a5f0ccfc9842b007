//! Line-format resolution.
//!
//! A tokenized line can match one of several competing field layouts. The
//! resolver is a guarded decision tree, most specific first, committing to
//! the first structural match rather than scoring candidates. Rule order is
//! load-bearing: later rules only fire when earlier guards fail, and
//! reordering changes behavior on ambiguous lines.

use serde::{Deserialize, Serialize};

use super::token::{is_date_like, is_numeric, is_sex_label};
use crate::normalize::parse_decimal;

/// Three-token lines are ambiguous between `SERIES REG WEIGHT` and
/// `SERIES WEIGHT CE`; a third token above this value is read as a weight.
const REG_WEIGHT_THRESHOLD: f64 = 50.0;

/// Named fields extracted from one line, still in raw textual form.
///
/// Identity tokens (`series`, `registration`) are always the first one or
/// two tokens of the line. Weight, scrotal circumference and date stay as
/// the original token text so unmatched lines can be surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecord {
    /// Series/brand prefix, always the first token.
    pub series: String,
    /// Registration number, when the layout carries one.
    pub registration: Option<String>,
    /// Sex token as written on the line, when present.
    pub sex_label: Option<String>,
    /// Weight token, unparsed.
    pub weight_text: String,
    /// Scrotal circumference token, unparsed.
    pub scrotal_text: Option<String>,
    /// Date token, unparsed.
    pub date_text: Option<String>,
    /// Remaining tokens joined with single spaces.
    pub remarks: String,
}

/// Resolve a non-header line of at least two tokens into named fields.
///
/// Returns `None` when no schema matches, which the caller reports as a
/// format error. The cascade:
///
/// 1. ≥7 tokens with sex at \[2\], date at \[3\], number at \[4\] ⇒
///    `SERIES REG SEX DATE WEIGHT [CE] [REMARKS…]`
/// 2. exactly 2 tokens ⇒ `SERIES WEIGHT` (weight must be numeric)
/// 3. exactly 3 tokens ⇒ `SERIES REG WEIGHT` when token\[2\] is a number
///    above the threshold, `SERIES WEIGHT DATE` when it is date-like,
///    `SERIES WEIGHT CE` otherwise
/// 4. ≥4 tokens ⇒ one of four layouts chosen by the shape of
///    tokens \[2\] and \[3\]
pub fn resolve_line(tokens: &[String]) -> Option<ParsedRecord> {
    let n = tokens.len();
    if n < 2 {
        return None;
    }

    // Rule 1: full row with an explicit sex column.
    if n >= 7 && is_sex_label(&tokens[2]) && is_date_like(&tokens[3]) && is_numeric(&tokens[4]) {
        let (scrotal, rest) = if is_numeric(&tokens[5]) {
            (Some(tokens[5].clone()), 6)
        } else {
            (None, 5)
        };
        return Some(ParsedRecord {
            series: tokens[0].clone(),
            registration: Some(tokens[1].clone()),
            sex_label: Some(tokens[2].clone()),
            weight_text: tokens[4].clone(),
            scrotal_text: scrotal,
            date_text: Some(tokens[3].clone()),
            remarks: join(&tokens[rest..]),
        });
    }

    // Rule 2: minimal SERIES WEIGHT pair.
    if n == 2 {
        if !is_numeric(&tokens[1]) {
            return None;
        }
        return Some(ParsedRecord {
            series: tokens[0].clone(),
            registration: None,
            sex_label: None,
            weight_text: tokens[1].clone(),
            scrotal_text: None,
            date_text: None,
            remarks: String::new(),
        });
    }

    // Rule 3: three tokens, disambiguated by the shape of the third.
    if n == 3 {
        let third_as_weight = is_numeric(&tokens[2])
            && parse_decimal(&tokens[2]).is_some_and(|v| v > REG_WEIGHT_THRESHOLD);
        if third_as_weight {
            return Some(ParsedRecord {
                series: tokens[0].clone(),
                registration: Some(tokens[1].clone()),
                sex_label: None,
                weight_text: tokens[2].clone(),
                scrotal_text: None,
                date_text: None,
                remarks: String::new(),
            });
        }
        let (scrotal, date) = if is_date_like(&tokens[2]) {
            (None, Some(tokens[2].clone()))
        } else {
            (Some(tokens[2].clone()), None)
        };
        return Some(ParsedRecord {
            series: tokens[0].clone(),
            registration: None,
            sex_label: None,
            weight_text: tokens[1].clone(),
            scrotal_text: scrotal,
            date_text: date,
            remarks: String::new(),
        });
    }

    // Rule 4: four or more tokens, shape of tokens [2]/[3] decides.
    let t2_date = is_date_like(&tokens[2]);
    let t2_num = is_numeric(&tokens[2]);
    let t3_date = is_date_like(&tokens[3]);
    let t3_num = is_numeric(&tokens[3]);

    if t2_date && t3_num {
        // SERIES REG DATE WEIGHT [CE] [REMARKS...]
        let (scrotal, rest) = optional_numeric(tokens, 4);
        return Some(ParsedRecord {
            series: tokens[0].clone(),
            registration: Some(tokens[1].clone()),
            sex_label: None,
            weight_text: tokens[3].clone(),
            scrotal_text: scrotal,
            date_text: Some(tokens[2].clone()),
            remarks: join(&tokens[rest..]),
        });
    }

    if t2_num && t3_date {
        // SERIES WEIGHT CE DATE [REMARKS...]
        return Some(ParsedRecord {
            series: tokens[0].clone(),
            registration: None,
            sex_label: None,
            weight_text: tokens[1].clone(),
            scrotal_text: Some(tokens[2].clone()),
            date_text: Some(tokens[3].clone()),
            remarks: join(&tokens[4..]),
        });
    }

    if t2_num {
        // SERIES WEIGHT CE [REMARKS...]
        return Some(ParsedRecord {
            series: tokens[0].clone(),
            registration: None,
            sex_label: None,
            weight_text: tokens[1].clone(),
            scrotal_text: Some(tokens[2].clone()),
            date_text: None,
            remarks: join(&tokens[3..]),
        });
    }

    // SERIES REG WEIGHT [DATE] [CE] [REMARKS...]
    let (date, mut rest) = if t3_date {
        (Some(tokens[3].clone()), 4)
    } else {
        (None, 3)
    };
    let scrotal = match tokens.get(rest) {
        Some(t) if is_numeric(t) => {
            rest += 1;
            Some(t.clone())
        }
        _ => None,
    };
    Some(ParsedRecord {
        series: tokens[0].clone(),
        registration: Some(tokens[1].clone()),
        sex_label: None,
        weight_text: tokens[2].clone(),
        scrotal_text: scrotal,
        date_text: date,
        remarks: join(&tokens[rest..]),
    })
}

/// Take token `idx` as an optional numeric field; returns the field and the
/// index where remarks start.
fn optional_numeric(tokens: &[String], idx: usize) -> (Option<String>, usize) {
    match tokens.get(idx) {
        Some(t) if is_numeric(t) => (Some(t.clone()), idx + 1),
        _ => (None, idx),
    }
}

fn join(tokens: &[String]) -> String {
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_tokens_series_weight() {
        let rec = resolve_line(&toks(&["M1234", "450.5"])).unwrap();
        assert_eq!(rec.series, "M1234");
        assert_eq!(rec.registration, None);
        assert_eq!(rec.weight_text, "450.5");
        assert_eq!(rec.date_text, None);
        assert_eq!(rec.scrotal_text, None);
    }

    #[test]
    fn test_two_tokens_non_numeric_weight_fails() {
        assert_eq!(resolve_line(&toks(&["XYZ", "abc"])), None);
    }

    #[test]
    fn test_fewer_than_two_tokens_fails() {
        assert_eq!(resolve_line(&toks(&["M1234"])), None);
        assert_eq!(resolve_line(&[]), None);
    }

    #[test]
    fn test_three_tokens_above_threshold_is_reg_weight() {
        let rec = resolve_line(&toks(&["CICS", "2", "450"])).unwrap();
        assert_eq!(rec.registration.as_deref(), Some("2"));
        assert_eq!(rec.weight_text, "450");
        assert_eq!(rec.scrotal_text, None);
    }

    #[test]
    fn test_three_tokens_at_or_below_threshold_is_weight_ce() {
        // 50 itself is not "greater than 50"
        let rec = resolve_line(&toks(&["M1234", "450", "50"])).unwrap();
        assert_eq!(rec.registration, None);
        assert_eq!(rec.weight_text, "450");
        assert_eq!(rec.scrotal_text.as_deref(), Some("50"));
    }

    #[test]
    fn test_three_tokens_with_trailing_date() {
        let rec = resolve_line(&toks(&["F5678", "380", "15/02/2026"])).unwrap();
        assert_eq!(rec.weight_text, "380");
        assert_eq!(rec.date_text.as_deref(), Some("15/02/2026"));
        assert_eq!(rec.scrotal_text, None);
    }

    #[test]
    fn test_full_row_with_sex_column() {
        let rec = resolve_line(&toks(&[
            "CICS", "2", "FEMEA", "11/02/2026", "165", "XX", "PIQUETE", "16",
        ]))
        .unwrap();
        assert_eq!(rec.series, "CICS");
        assert_eq!(rec.registration.as_deref(), Some("2"));
        assert_eq!(rec.sex_label.as_deref(), Some("FEMEA"));
        assert_eq!(rec.date_text.as_deref(), Some("11/02/2026"));
        assert_eq!(rec.weight_text, "165");
        assert_eq!(rec.scrotal_text, None);
        assert_eq!(rec.remarks, "XX PIQUETE 16");
    }

    #[test]
    fn test_full_row_with_sex_and_scrotal() {
        let rec = resolve_line(&toks(&[
            "CICS", "2", "Macho", "11/02/2026", "300", "35.5", "apartado",
        ]))
        .unwrap();
        assert_eq!(rec.scrotal_text.as_deref(), Some("35.5"));
        assert_eq!(rec.remarks, "apartado");
    }

    #[test]
    fn test_reg_date_weight_layout() {
        let rec = resolve_line(&toks(&["CICS", "2", "15/02/2026", "450", "36", "gordo"])).unwrap();
        assert_eq!(rec.registration.as_deref(), Some("2"));
        assert_eq!(rec.date_text.as_deref(), Some("15/02/2026"));
        assert_eq!(rec.weight_text, "450");
        assert_eq!(rec.scrotal_text.as_deref(), Some("36"));
        assert_eq!(rec.remarks, "gordo");
    }

    #[test]
    fn test_weight_ce_date_layout() {
        let rec = resolve_line(&toks(&[
            "M9012", "520.3", "35.5", "20/02/2026", "Animal", "em", "ótimo", "estado",
        ]))
        .unwrap();
        assert_eq!(rec.registration, None);
        assert_eq!(rec.weight_text, "520.3");
        assert_eq!(rec.scrotal_text.as_deref(), Some("35.5"));
        assert_eq!(rec.date_text.as_deref(), Some("20/02/2026"));
        assert_eq!(rec.remarks, "Animal em ótimo estado");
    }

    #[test]
    fn test_weight_ce_remarks_layout() {
        let rec = resolve_line(&toks(&["M1234", "450", "36", "sem", "data"])).unwrap();
        assert_eq!(rec.registration, None);
        assert_eq!(rec.weight_text, "450");
        assert_eq!(rec.scrotal_text.as_deref(), Some("36"));
        assert_eq!(rec.date_text, None);
        assert_eq!(rec.remarks, "sem data");
    }

    #[test]
    fn test_reg_weight_date_ce_fallback_layout() {
        let rec = resolve_line(&toks(&["CICS", "A2", "450", "15/02/2026", "36", "obs"])).unwrap();
        assert_eq!(rec.registration.as_deref(), Some("A2"));
        assert_eq!(rec.weight_text, "450");
        assert_eq!(rec.date_text.as_deref(), Some("15/02/2026"));
        assert_eq!(rec.scrotal_text.as_deref(), Some("36"));
        assert_eq!(rec.remarks, "obs");
    }

    #[test]
    fn test_fallback_layout_without_date() {
        let rec = resolve_line(&toks(&["CICS", "A2", "x450", "obs1", "obs2"])).unwrap();
        assert_eq!(rec.weight_text, "x450");
        assert_eq!(rec.date_text, None);
        // "obs1" is not numeric, so no scrotal field is taken
        assert_eq!(rec.scrotal_text, None);
        assert_eq!(rec.remarks, "obs1 obs2");
    }

    #[test]
    fn test_comma_decimal_weight_survives() {
        let rec = resolve_line(&toks(&["M1234", "450,5"])).unwrap();
        assert_eq!(rec.weight_text, "450,5");
    }
}
