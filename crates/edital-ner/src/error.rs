//! Error types for entity recognition

use thiserror::Error;

/// Errors that can occur while loading or running a language model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NerError {
    /// The requested model cannot be loaded
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// The model failed while annotating text
    #[error("Inference failed: {0}")]
    Inference(String),
}
