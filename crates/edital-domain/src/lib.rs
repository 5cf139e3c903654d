//! Edital Domain Layer
//!
//! Data model shared by every crate of the edital analysis engine. An
//! "edital" is a public-procurement notice; analyzing one produces an
//! [`AnalysisResult`] made of three independent parts:
//!
//! - **Header**: issuing body, modality, process number, dates, object,
//!   judgment criterion and estimated value ([`HeaderInfo`])
//! - **Entities**: spans tagged by a language model ([`ExtractedEntity`])
//! - **Requirements**: habilitação obligations, optionally mapped to the
//!   document type that satisfies them ([`ExtractedRequirement`])
//!
//! ## Architecture
//!
//! This crate holds values only. Matching, recognition and caching live in
//! the infrastructure crates that depend on it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod entity;
pub mod header;
pub mod requirement;

// Re-exports for convenience
pub use analysis::AnalysisResult;
pub use entity::{EntityCategory, ExtractedEntity};
pub use header::{HeaderInfo, JudgmentCriterion, Modality};
pub use requirement::{DocumentType, ExtractedRequirement, RequirementKind};
