//! The language-model seam

use crate::error::NerError;

/// A labeled span produced by a model or the entity ruler
///
/// Offsets are byte positions into the annotated text and always fall on
/// character boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelSpan {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Raw model label (`PER`, `ORG`, `MONEY`, ...)
    pub label: String,
}

impl ModelSpan {
    /// Create a span
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// True if the two spans share at least one byte
    pub fn overlaps(&self, other: &ModelSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True if the span can be sliced out of `text`
    pub fn fits(&self, text: &str) -> bool {
        self.start <= self.end
            && self.end <= text.len()
            && text.is_char_boundary(self.start)
            && text.is_char_boundary(self.end)
    }
}

/// A pretrained tagger that labels spans of text
///
/// Implementations are shared across concurrent analyses and called from a
/// blocking worker thread, so `annotate` may block.
pub trait LanguageModel: Send + Sync {
    /// Identifier reported in status output
    fn name(&self) -> &str;

    /// Tag every entity the model finds in `text`
    fn annotate(&self, text: &str) -> Result<Vec<ModelSpan>, NerError>;
}
