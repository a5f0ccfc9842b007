//! Pesagem: free-text ingestion of pasted livestock weighing records.
//!
//! Operators paste weighing records copied from spreadsheets, paper logs or
//! chat messages. Pesagem tokenizes each line, discards copied header rows,
//! resolves the ambiguous column layout, matches the animal against a known
//! roster, and buckets every line into a valid, pending or error record.
//!
//! # Core principles
//!
//! - **Tolerant by design**: messy input is accommodated (comma decimals,
//!   missing dates, swapped identity fields) rather than rejected.
//! - **No line left behind**: a parsed line whose animal is unknown becomes
//!   a pending record for manual animal creation, never a silent error.
//! - **Pure transform**: no file formats, no I/O, no shared mutable state.
//!
//! # Example
//!
//! ```
//! use pesagem::{AnimalRef, Importer, Sex};
//!
//! let roster = vec![AnimalRef::new(1, "M1234", "10", Sex::Macho)];
//! let importer = Importer::new();
//! let result = importer.import("M1234 450.5\nF5678 380", &roster).unwrap();
//!
//! assert_eq!(result.valid.len(), 1);
//! assert_eq!(result.pending.len(), 1);
//! ```

pub mod error;
pub mod normalize;
pub mod outcome;
pub mod parse;
pub mod roster;

mod importer;

pub use crate::importer::{Importer, ImporterConfig};
pub use error::{ImportError, Result};
pub use outcome::{
    BatchResult, ErrorKind, ErrorRecord, PendingRecord, ValidRecord, ValidationOutcome,
};
pub use parse::ParsedRecord;
pub use roster::{AnimalRef, MatchResult, Roster, Sex};
