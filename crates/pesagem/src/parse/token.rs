//! Tokenization and token-class predicates.
//!
//! Pasted weighing records are delimited inconsistently: spreadsheet copies
//! come tab-separated, chat messages use spaces, paper transcriptions use
//! commas, semicolons or pipes. All of these split into tokens. The one
//! exception is a comma flanked by digits on both sides, which operators use
//! as a decimal separator (`450,5`), so it stays inside its token.

use once_cell::sync::Lazy;
use regex::Regex;

static DATE_BR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap());
static DATE_ISO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+([.,]\d+)?$").unwrap());

/// Split a raw line into order-significant tokens.
///
/// Delimiters are whitespace, tab, semicolon, pipe, and comma — except a
/// comma between two digits, which is kept as a decimal separator.
pub fn tokenize(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        let is_delimiter = match c {
            '\t' | ';' | '|' => true,
            ',' => {
                let digit_before = i
                    .checked_sub(1)
                    .and_then(|j| chars.get(j))
                    .is_some_and(|p| p.is_ascii_digit());
                let digit_after = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
                !(digit_before && digit_after)
            }
            c => c.is_whitespace(),
        };

        if is_delimiter {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Whether a token looks like a date (`DD/MM/YYYY` or `YYYY-MM-DD`).
pub fn is_date_like(token: &str) -> bool {
    DATE_BR.is_match(token) || DATE_ISO.is_match(token)
}

/// Whether a token is a plain number, with `.` or `,` as decimal separator.
pub fn is_numeric(token: &str) -> bool {
    NUMERIC.is_match(token)
}

/// Whether a token is a sex label (case-insensitive, accent-tolerant).
pub fn is_sex_label(token: &str) -> bool {
    matches!(token.to_lowercase().as_str(), "macho" | "femea" | "fêmea")
}
