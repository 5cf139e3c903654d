//! Edital Analyzer
//!
//! Entry point of the edital analysis engine: turns the plain text of a
//! procurement notice into an [`AnalysisResult`].
//!
//! # Architecture
//!
//! ```text
//! text → cache lookup ─hit──────────────────────────────────────→ result
//!              └─miss→ ┬ EntityRecognizer   (blocking worker, timeout) ┐
//!                      ├ HeaderExtractor                              ├→ assemble → cache write → result
//!                      └ RequirementExtractor                         ┘
//! ```
//!
//! Only initialization failures, empty input and model failures surface as
//! errors. Missing header fields are `None`; cache failures are misses.
//!
//! # Example Usage
//!
//! ```
//! # let rt = tokio::runtime::Runtime::new().unwrap();
//! # rt.block_on(async {
//! use edital_analyzer::{AnalyzerConfig, EditalAnalyzer};
//!
//! let mut analyzer = EditalAnalyzer::new(AnalyzerConfig::default());
//! analyzer.initialize().await.unwrap();
//!
//! let result = analyzer
//!     .analyze("Processo nº 123/2024 - Pregão Eletrônico - valor estimado R$ 1.500,00")
//!     .await
//!     .unwrap();
//! assert_eq!(result.header.process_number.as_deref(), Some("123/2024"));
//! # });
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod status;

pub use analyzer::EditalAnalyzer;
pub use config::{AnalyzerConfig, MAX_CACHE_TTL_SECS};
pub use error::AnalyzerError;
pub use status::AnalyzerStatus;

// Re-exports for convenience
pub use edital_domain::AnalysisResult;
