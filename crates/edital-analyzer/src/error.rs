//! Error types for the Analyzer

use edital_ner::NerError;
use edital_patterns::PatternError;
use thiserror::Error;

/// Errors that can surface from the analyzer
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Patterns or the language model could not be loaded
    #[error("Initialization failed: {0}")]
    Initialization(String),

    /// `analyze` was called before `initialize`
    #[error("Analyzer not initialized")]
    NotInitialized,

    /// The input text is empty or whitespace only
    #[error("Input text is empty")]
    EmptyInput,

    /// The language model failed
    #[error("Model inference failed: {0}")]
    ModelInference(String),

    /// The language model did not answer within the inference timeout
    #[error("Model inference timed out after {0}s")]
    InferenceTimeout(u64),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<PatternError> for AnalyzerError {
    fn from(e: PatternError) -> Self {
        AnalyzerError::Initialization(e.to_string())
    }
}

impl From<NerError> for AnalyzerError {
    fn from(e: NerError) -> Self {
        match e {
            NerError::ModelNotAvailable(_) => AnalyzerError::Initialization(e.to_string()),
            NerError::Inference(msg) => AnalyzerError::ModelInference(msg),
        }
    }
}
