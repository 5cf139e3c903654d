//! Edital Entity Recognition
//!
//! Named-entity recognition for edital text behind a pluggable
//! [`LanguageModel`] trait.
//!
//! # Architecture
//!
//! ```text
//! text → truncate → EntityRuler (domain phrases) ─┐
//!                 → LanguageModel::annotate ──────┴→ drop overlaps → allow-list → sort
//! ```
//!
//! # Models
//!
//! - [`HeuristicModel`]: built-in Portuguese rule tagger (`pt_core_heuristic`)
//! - `OnnxModel`: transformer token classifier, behind the `onnx` feature
//! - [`MockModel`]: deterministic mock for testing
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use edital_domain::EntityCategory;
//! use edital_ner::{EntityRecognizer, EntityRuler, HeuristicModel};
//!
//! let recognizer = EntityRecognizer::new(Arc::new(HeuristicModel::new()), EntityRuler::default());
//! let entities = recognizer.recognize("Valor: R$ 1.500,00").unwrap();
//! assert_eq!(entities[0].category, EntityCategory::Money);
//! assert_eq!(entities[0].value, "R$ 1.500,00");
//! ```

#![warn(missing_docs)]

#[cfg(any(feature = "onnx", test))]
mod bio;
mod error;
mod heuristic;
mod mock;
mod model;
#[cfg(feature = "onnx")]
mod onnx;
mod recognizer;
mod ruler;

use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub use error::NerError;
pub use heuristic::{HeuristicModel, HEURISTIC_MODEL_NAME};
pub use mock::MockModel;
pub use model::{LanguageModel, ModelSpan};
#[cfg(feature = "onnx")]
pub use onnx::OnnxModel;
pub use recognizer::{
    category_for_label, EntityRecognizer, DEFAULT_MAX_TEXT_LENGTH, PLACEHOLDER_CONFIDENCE,
};
pub use ruler::EntityRuler;

/// Load a language model by identifier
///
/// - `pt_core_heuristic` (or `heuristic`): the built-in tagger
/// - `onnx:<dir>`: an ONNX model from `<dir>`
/// - `onnx`: an ONNX model from `model_path`
pub fn load_model(identifier: &str, model_path: &Path) -> Result<Arc<dyn LanguageModel>, NerError> {
    let model: Arc<dyn LanguageModel> = match identifier {
        HEURISTIC_MODEL_NAME | "heuristic" => Arc::new(HeuristicModel::new()),
        "onnx" => load_onnx(model_path)?,
        other => match other.strip_prefix("onnx:") {
            Some(dir) => load_onnx(Path::new(dir))?,
            None => {
                return Err(NerError::ModelNotAvailable(format!(
                    "unknown model '{identifier}'"
                )))
            }
        },
    };

    info!("Language model '{}' loaded", model.name());
    Ok(model)
}

#[cfg(feature = "onnx")]
fn load_onnx(dir: &Path) -> Result<Arc<dyn LanguageModel>, NerError> {
    let model = OnnxModel::load(dir).map_err(|e| NerError::ModelNotAvailable(format!("{e:#}")))?;
    Ok(Arc::new(model))
}

#[cfg(not(feature = "onnx"))]
fn load_onnx(dir: &Path) -> Result<Arc<dyn LanguageModel>, NerError> {
    Err(NerError::ModelNotAvailable(format!(
        "cannot load {}: built without the 'onnx' feature",
        dir.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_heuristic() {
        let model = load_model("pt_core_heuristic", Path::new("models")).unwrap();
        assert_eq!(model.name(), HEURISTIC_MODEL_NAME);
    }

    #[test]
    fn test_load_unknown_model() {
        let result = load_model("pt_core_news_lg", Path::new("models"));
        assert!(matches!(result, Err(NerError::ModelNotAvailable(_))));
    }

    #[cfg(not(feature = "onnx"))]
    #[test]
    fn test_onnx_requires_feature() {
        let result = load_model("onnx:/tmp/ner", Path::new("models"));
        assert!(matches!(result, Err(NerError::ModelNotAvailable(_))));
    }
}
