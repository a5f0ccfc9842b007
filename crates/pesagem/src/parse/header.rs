//! Header-row detection.
//!
//! Pasted blocks routinely include the copied spreadsheet header row
//! (`Serie  RG  Peso  Data`). Such a row must be discarded before parsing,
//! not reported as malformed data.

/// Words that identify the first column of a header row.
const IDENTITY_HEADERS: &[&str] = &[
    "serie",
    "série",
    "animal",
    "brinco",
    "identificacao",
    "identificação",
];

/// Words that identify the second column of a header row.
const MEASUREMENT_HEADERS: &[&str] = &["peso", "data", "pesagem", "ce"];

/// Whether a tokenized line is a copied column-header row.
///
/// Any single rule matching short-circuits:
/// first token is an identity-header word, second token is a
/// weight/date/measurement-header word, third token is `sexo` on a line of
/// at least four tokens, or the last token is `local`.
pub fn is_header_row(tokens: &[String]) -> bool {
    let lowered = |i: usize| tokens.get(i).map(|t| t.to_lowercase());

    if lowered(0).is_some_and(|t| IDENTITY_HEADERS.contains(&t.as_str())) {
        return true;
    }
    if lowered(1).is_some_and(|t| MEASUREMENT_HEADERS.contains(&t.as_str())) {
        return true;
    }
    if tokens.len() >= 4 && lowered(2).is_some_and(|t| t == "sexo") {
        return true;
    }
    tokens
        .last()
        .is_some_and(|t| t.to_lowercase() == "local")
}
