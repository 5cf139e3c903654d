//! ONNX Runtime token-classification backend
//!
//! Loads a BERT-style NER model exported to ONNX. The model directory must
//! contain `model.onnx`, `tokenizer.json` and the Hugging Face `config.json`
//! carrying the `id2label` map.

use crate::bio::{self, TaggedToken};
use crate::error::NerError;
use crate::model::{LanguageModel, ModelSpan};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use tokenizers::{Encoding, Tokenizer, TruncationParams};
use tracing::{debug, info};

/// Longest window fed to the model; longer text is split into windows
const MAX_SEQUENCE_LENGTH: usize = 512;

#[derive(Debug, Deserialize)]
struct ModelConfig {
    id2label: HashMap<String, String>,
}

/// Transformer NER model run with ONNX Runtime
///
/// The session needs exclusive access for a run, so concurrent callers are
/// serialized on an internal mutex.
pub struct OnnxModel {
    name: String,
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    labels: Vec<String>,
    uses_token_type_ids: bool,
}

impl OnnxModel {
    /// Load a model from a directory
    pub fn load(model_dir: &Path) -> anyhow::Result<Self> {
        let model_path = model_dir.join("model.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");
        let config_path = model_dir.join("config.json");

        anyhow::ensure!(model_path.exists(), "model.onnx not found in {model_dir:?}");
        anyhow::ensure!(
            tokenizer_path.exists(),
            "tokenizer.json not found in {model_dir:?}"
        );
        anyhow::ensure!(config_path.exists(), "config.json not found in {model_dir:?}");

        let config: ModelConfig = serde_json::from_str(&std::fs::read_to_string(&config_path)?)?;
        let labels = label_table(&config.id2label)?;

        let session = Session::builder()?.commit_from_file(&model_path)?;
        let uses_token_type_ids = session
            .inputs()
            .iter()
            .any(|input| input.name() == "token_type_ids");

        let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow::anyhow!("load tokenizer: {e}"))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: MAX_SEQUENCE_LENGTH,
                ..Default::default()
            }))
            .map_err(|e| anyhow::anyhow!("set truncation: {e}"))?;
        tokenizer.with_padding(None);

        let name = format!("onnx:{}", model_dir.display());
        info!(
            "Loaded ONNX NER model {} with {} labels",
            name,
            labels.len()
        );

        Ok(Self {
            name,
            session: Mutex::new(session),
            tokenizer,
            labels,
            uses_token_type_ids,
        })
    }

    fn run(&self, text: &str) -> anyhow::Result<Vec<ModelSpan>> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| anyhow::anyhow!("tokenize: {e}"))?;

        let mut windows = vec![&encoding];
        windows.extend(encoding.get_overflowing().iter());
        debug!("Running NER over {} window(s)", windows.len());

        let mut spans = Vec::new();
        for window in windows {
            let tags = self.classify(window)?;
            let tokens: Vec<TaggedToken<'_>> = window
                .get_offsets()
                .iter()
                .zip(window.get_special_tokens_mask())
                .zip(&tags)
                .filter(|((offsets, special), _)| **special == 0 && offsets.0 < offsets.1)
                .map(|(((start, end), _), tag)| TaggedToken {
                    start: *start,
                    end: *end,
                    tag: tag.as_str(),
                })
                .collect();
            spans.extend(bio::decode(&tokens));
        }
        Ok(spans)
    }

    /// Tag of every token in one window
    fn classify(&self, window: &Encoding) -> anyhow::Result<Vec<String>> {
        let seq_len = window.get_ids().len();
        let shape = [1i64, seq_len as i64];

        let ids: Vec<i64> = window.get_ids().iter().map(|&id| id as i64).collect();
        let mask: Vec<i64> = window
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();
        let type_ids: Vec<i64> = window.get_type_ids().iter().map(|&t| t as i64).collect();

        let ids_tensor = Tensor::from_array((shape, ids.into_boxed_slice()))?;
        let mask_tensor = Tensor::from_array((shape, mask.into_boxed_slice()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| anyhow::anyhow!("onnx session lock poisoned"))?;

        let outputs = if self.uses_token_type_ids {
            let type_tensor = Tensor::from_array((shape, type_ids.into_boxed_slice()))?;
            session.run(ort::inputs![
                "input_ids" => ids_tensor,
                "attention_mask" => mask_tensor,
                "token_type_ids" => type_tensor,
            ])?
        } else {
            session.run(ort::inputs![
                "input_ids" => ids_tensor,
                "attention_mask" => mask_tensor,
            ])?
        };

        // logits: [1, seq_len, num_labels]
        let (output_shape, logits) = outputs[0].try_extract_tensor::<f32>()?;
        let dims: &[i64] = output_shape;
        let num_labels = self.labels.len();
        anyhow::ensure!(
            dims.len() == 3 && dims[1] as usize == seq_len && dims[2] as usize == num_labels,
            "unexpected output shape: {dims:?}, expected [1, {seq_len}, {num_labels}]"
        );

        let tags = logits
            .chunks(num_labels)
            .map(|scores| {
                let best = scores
                    .iter()
                    .enumerate()
                    .max_by(|a, b| a.1.total_cmp(b.1))
                    .map(|(idx, _)| idx)
                    .unwrap_or(0);
                self.labels[best].clone()
            })
            .collect();
        Ok(tags)
    }
}

impl LanguageModel for OnnxModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn annotate(&self, text: &str) -> Result<Vec<ModelSpan>, NerError> {
        self.run(text)
            .map_err(|e| NerError::Inference(format!("{e:#}")))
    }
}

/// `id2label` keyed by stringified index, turned into a dense table
fn label_table(id2label: &HashMap<String, String>) -> anyhow::Result<Vec<String>> {
    let mut labels = vec![String::new(); id2label.len()];
    for (id, label) in id2label {
        let idx: usize = id.parse()?;
        anyhow::ensure!(idx < labels.len(), "id2label index {idx} out of range");
        labels[idx] = label.clone();
    }
    anyhow::ensure!(!labels.is_empty(), "config.json has an empty id2label");
    anyhow::ensure!(
        labels.iter().all(|l| !l.is_empty()),
        "id2label indices are not contiguous"
    );
    Ok(labels)
}
