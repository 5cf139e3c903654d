//! Edital Extractor
//!
//! Heuristic extraction of header fields and habilitação requirements from
//! the plain text of an edital.
//!
//! # Overview
//!
//! Every extractor scans the full text with its own ordered pattern group
//! from [`edital_patterns::PatternTable`] and returns a typed value or
//! `None`. Absence is a normal outcome: a missing, rejected or unparsable
//! candidate never surfaces as an error.
//!
//! # Architecture
//!
//! ```text
//! Text → HeaderExtractor      → HeaderInfo
//!      → RequirementExtractor → [ExtractedRequirement]
//! ```
//!
//! # Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use edital_extractor::{HeaderExtractor, RequirementExtractor};
//! use edital_patterns::PatternTable;
//!
//! let patterns = Arc::new(PatternTable::load().unwrap());
//! let header = HeaderExtractor::new(Arc::clone(&patterns))
//!     .extract("Processo nº 123/2024 - Pregão Eletrônico");
//! assert_eq!(header.process_number.as_deref(), Some("123/2024"));
//!
//! let requirements = RequirementExtractor::new(patterns)
//!     .extract("Apresentar balanço patrimonial do último exercício;");
//! assert_eq!(requirements.len(), 1);
//! ```

#![warn(missing_docs)]

mod dates;
pub mod fields;
mod header;
mod money;
mod requirements;

#[cfg(test)]
mod tests;

pub use dates::parse_date;
pub use header::HeaderExtractor;
pub use money::parse_brl_amount;
pub use requirements::{RequirementExtractor, MIN_DESCRIPTION_CHARS};
