//! Entity-ruler phrases matched token by token ahead of the language model

/// A multi-word domain term with the label it is tagged with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseRule {
    /// Label assigned to matching spans, e.g. `MODALIDADE`
    pub label: String,
    /// Lower-cased tokens that must appear consecutively
    pub tokens: Vec<String>,
}

impl PhraseRule {
    /// Build a rule from a label and a whitespace-separated phrase
    pub fn new(label: &str, phrase: &str) -> Self {
        Self {
            label: label.to_string(),
            tokens: phrase.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// Number of tokens in the phrase
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True for an empty phrase
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
