//! Tokenization, header detection and line-format resolution.

mod header;
mod resolver;
mod token;

pub use header::is_header_row;
pub use resolver::{ParsedRecord, resolve_line};
pub use token::{is_date_like, is_numeric, is_sex_label, tokenize};
