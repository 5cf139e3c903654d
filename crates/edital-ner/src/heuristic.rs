//! Built-in Portuguese rule tagger
//!
//! Needs no model files. Tuned for the vocabulary of procurement notices:
//! titled names, public bodies and companies, municipalities, `R$` amounts
//! and dates.

use crate::error::NerError;
use crate::model::{LanguageModel, ModelSpan};
use regex::Regex;
use std::sync::LazyLock;

/// Identifier of the built-in tagger
pub const HEURISTIC_MODEL_NAME: &str = "pt_core_heuristic";

const NAME_PART: &str = r"\p{Lu}\p{Ll}+";
const UF: &str = "AC|AL|AP|AM|BA|CE|DF|ES|GO|MA|MT|MS|MG|PA|PB|PR|PE|PI|RJ|RN|RS|RO|RR|SC|SP|SE|TO";

/// `(regex, label)`; group 1 is the span when present, otherwise the whole match
static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    let connector = r"(?:(?:da|de|do|das|dos|e)[ \t]+)?";
    let sources = [
        (
            format!(
                r"\b(?:Sr|Sra|Dr|Dra|Prof|Profa)\.[ \t]+({NAME_PART}(?:[ \t]+{connector}{NAME_PART})+)"
            ),
            "PER",
        ),
        (
            r"\b(?i:prefeitura|câmara|secretaria|governo|tribunal|universidade|instituto|ministério|fundação|companhia)(?:[ \t]+(?:(?:da|de|do|das|dos|DA|DE|DO|DAS|DOS)[ \t]+)?\p{Lu}\p{L}*)+"
                .to_string(),
            "ORG",
        ),
        (
            r"\b\p{Lu}[\p{Lu}\p{Nd}&]*(?:[ \t]+[\p{Lu}\p{Nd}&]+)*[ \t]+(?:LTDA|EIRELI|S/A|S\.A\.|ME|EPP)\b\.?"
                .to_string(),
            "ORG",
        ),
        (
            format!(
                r"\b(?:Município|Estado|Cidade|Comarca)[ \t]+(?:de|do|da)[ \t]+({NAME_PART}(?:[ \t]+{connector}{NAME_PART})*)"
            ),
            "LOC",
        ),
        (
            format!(r"\b({NAME_PART}(?:[ \t]+{connector}{NAME_PART})*[ \t]*[/\-][ \t]*(?:{UF}))\b"),
            "LOC",
        ),
        (
            r"R\$[ \t]*\d+(?:\.\d{3})*(?:,\d{1,2})?".to_string(),
            "MONEY",
        ),
        (r"\b\d{1,2}/\d{1,2}/\d{2,4}\b".to_string(), "DATE"),
        (
            r"(?i)\b\d{1,2}[ \t]+de[ \t]+(?:janeiro|fevereiro|março|marco|abril|maio|junho|julho|agosto|setembro|outubro|novembro|dezembro)[ \t]+de[ \t]+\d{4}\b"
                .to_string(),
            "DATE",
        ),
    ];

    sources
        .into_iter()
        .map(|(source, label)| (Regex::new(&source).unwrap(), label))
        .collect()
});

/// Rule-based tagger that stands in for a statistical model
///
/// Overlapping candidates are resolved by position: the earliest span wins,
/// and the longest among those starting at the same offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicModel;

impl HeuristicModel {
    /// Create the tagger
    pub fn new() -> Self {
        Self
    }
}

impl LanguageModel for HeuristicModel {
    fn name(&self) -> &str {
        HEURISTIC_MODEL_NAME
    }

    fn annotate(&self, text: &str) -> Result<Vec<ModelSpan>, NerError> {
        let mut candidates = Vec::new();
        for (regex, label) in RULES.iter() {
            for captures in regex.captures_iter(text) {
                let Some(m) = captures.get(1).or_else(|| captures.get(0)) else {
                    continue;
                };
                if m.start() < m.end() {
                    candidates.push(ModelSpan::new(m.start(), m.end(), *label));
                }
            }
        }

        candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut spans: Vec<ModelSpan> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if spans.last().is_some_and(|last| last.overlaps(&candidate)) {
                continue;
            }
            spans.push(candidate);
        }
        Ok(spans)
    }
}
