//! Deterministic model for tests

use crate::error::NerError;
use crate::model::{LanguageModel, ModelSpan};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Mock language model
///
/// Tags fixed byte ranges and every occurrence of registered phrases. Clones
/// share the call counter and failure switch, so a test can keep a handle
/// after handing the model to an analyzer.
///
/// # Examples
///
/// ```
/// use edital_ner::{LanguageModel, MockModel};
///
/// let model = MockModel::new().with_phrase("ORG", "Prefeitura de Campinas");
/// let spans = model.annotate("A Prefeitura de Campinas publica").unwrap();
/// assert_eq!(spans.len(), 1);
/// assert_eq!((spans[0].start, spans[0].end), (2, 24));
/// assert_eq!(model.call_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockModel {
    spans: Vec<ModelSpan>,
    phrases: Vec<(String, String)>,
    delay: Option<Duration>,
    call_count: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl MockModel {
    /// Create a mock that tags nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Always return this byte range (when it fits the text)
    pub fn with_span(mut self, start: usize, end: usize, label: &str) -> Self {
        self.spans.push(ModelSpan::new(start, end, label));
        self
    }

    /// Tag every occurrence of `phrase` with `label`
    pub fn with_phrase(mut self, label: &str, phrase: &str) -> Self {
        self.phrases.push((label.to_string(), phrase.to_string()));
        self
    }

    /// Sleep this long on every call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Make subsequent calls fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of `annotate` calls so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call counter
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }
}

impl LanguageModel for MockModel {
    fn name(&self) -> &str {
        "mock"
    }

    fn annotate(&self, text: &str) -> Result<Vec<ModelSpan>, NerError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(NerError::Inference("Mock error".to_string()));
        }

        let mut spans: Vec<ModelSpan> = self
            .spans
            .iter()
            .filter(|span| span.fits(text))
            .cloned()
            .collect();

        for (label, phrase) in &self.phrases {
            if phrase.is_empty() {
                continue;
            }
            spans.extend(
                text.match_indices(phrase.as_str())
                    .map(|(start, found)| ModelSpan::new(start, start + found.len(), label.as_str())),
            );
        }

        Ok(spans)
    }
}
