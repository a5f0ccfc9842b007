//! Normalization of recognized tokens to canonical forms.

use chrono::NaiveDate;

/// Parse a decimal number, tolerating a comma as fractional separator.
///
/// Empty, unparseable or non-finite input yields `None`.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Normalize a date token to a calendar date.
///
/// `DD/MM/YYYY` is rewritten to ISO; already-ISO dates pass through.
/// Anything else — missing token, unrecognized format, or a calendar-invalid
/// date such as `31/02/2026` — falls back to `today`. A bad date must never
/// block an import, so the fallback is a date rather than an error.
pub fn normalize_date(text: Option<&str>, today: NaiveDate) -> NaiveDate {
    let Some(raw) = text.map(str::trim).filter(|s| !s.is_empty()) else {
        return today;
    };
    NaiveDate::parse_from_str(raw, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .unwrap_or(today)
}
