//! Phrase rules applied before the language model

use crate::model::ModelSpan;
use edital_patterns::PhraseRule;
use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Token-sequence matcher for domain terms
///
/// Matching is case-insensitive and token based: "Tomada  de\nPreços" matches
/// the phrase "tomada de preços". At each token the longest matching phrase
/// wins and matching resumes after it, so ruler spans never overlap.
#[derive(Debug, Clone, Default)]
pub struct EntityRuler {
    rules: Vec<PhraseRule>,
}

impl EntityRuler {
    /// Create a ruler from phrase rules
    pub fn new(rules: Vec<PhraseRule>) -> Self {
        Self {
            rules: rules.into_iter().filter(|r| !r.is_empty()).collect(),
        }
    }

    /// Number of phrase rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the ruler has no phrases
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Spans claimed by the phrase rules, in text order
    pub fn find(&self, text: &str) -> Vec<ModelSpan> {
        if self.rules.is_empty() {
            return Vec::new();
        }

        let tokens: Vec<(usize, usize, String)> = WORD
            .find_iter(text)
            .map(|m| (m.start(), m.end(), m.as_str().to_lowercase()))
            .collect();

        let mut spans = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let best = self
                .rules
                .iter()
                .filter(|rule| matches_at(rule, &tokens[i..]))
                .max_by_key(|rule| rule.len());

            match best {
                Some(rule) => {
                    let last = i + rule.len() - 1;
                    spans.push(ModelSpan::new(tokens[i].0, tokens[last].1, rule.label.as_str()));
                    i = last + 1;
                }
                None => i += 1,
            }
        }
        spans
    }
}

fn matches_at(rule: &PhraseRule, tokens: &[(usize, usize, String)]) -> bool {
    rule.tokens.len() <= tokens.len()
        && rule
            .tokens
            .iter()
            .zip(tokens)
            .all(|(expected, (_, _, token))| expected == token)
}
