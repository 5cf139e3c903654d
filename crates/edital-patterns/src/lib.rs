//! Edital Pattern Store
//!
//! Compiled matchers shared by every extractor: ordered regex lists per
//! header field, keyword tables for modality and judgment criterion, the
//! document-type vocabulary, requirement rules and entity-ruler phrases.
//!
//! # Ordering
//!
//! Every group is an ordered list and the first entry to succeed wins.
//! Reordering a group changes results on ambiguous input, so the order in
//! [`sources`] is part of the behavior, not an implementation detail.
//!
//! # Example
//!
//! ```
//! use edital_patterns::PatternTable;
//!
//! let table = PatternTable::load().unwrap();
//! let number = table.process_number.first_capture("Processo nº 123/2024");
//! assert_eq!(number, Some("123/2024"));
//! ```

#![warn(missing_docs)]

mod error;
mod keywords;
mod ordered;
mod phrases;
pub mod sources;
mod table;

pub use error::PatternError;
pub use keywords::KeywordTable;
pub use ordered::OrderedPatterns;
pub use phrases::PhraseRule;
pub use table::{PatternCounts, PatternTable, RequirementRule};
