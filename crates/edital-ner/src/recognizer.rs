//! Entity recognition over a language model

use crate::error::NerError;
use crate::model::{LanguageModel, ModelSpan};
use crate::ruler::EntityRuler;
use edital_domain::{EntityCategory, ExtractedEntity};
use std::sync::Arc;
use tracing::{debug, warn};

/// Confidence attached to every entity; models do not expose span scores
pub const PLACEHOLDER_CONFIDENCE: f64 = 0.8;

/// Default truncation limit, in characters
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 1_000_000;

/// Map a raw model label onto the retained categories
///
/// Everything outside the allow-list, including entity-ruler labels, is
/// `None`.
pub fn category_for_label(label: &str) -> Option<EntityCategory> {
    match label.to_uppercase().as_str() {
        "PERSON" | "PER" | "PESSOA" => Some(EntityCategory::Person),
        "ORG" | "ORGANIZACAO" | "ORGANIZAÇÃO" => Some(EntityCategory::Organization),
        "GPE" | "LOC" | "LOCAL" => Some(EntityCategory::Place),
        "MONEY" | "VALOR" => Some(EntityCategory::Money),
        "DATE" | "TEMPO" => Some(EntityCategory::Date),
        _ => None,
    }
}

/// Runs the entity ruler and the language model, then filters and orders
/// the resulting spans
#[derive(Clone)]
pub struct EntityRecognizer {
    model: Arc<dyn LanguageModel>,
    ruler: EntityRuler,
    max_text_length: usize,
}

impl std::fmt::Debug for EntityRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityRecognizer")
            .field("model", &self.model.name())
            .field("ruler_phrases", &self.ruler.len())
            .field("max_text_length", &self.max_text_length)
            .finish()
    }
}

impl EntityRecognizer {
    /// Create a recognizer with the default truncation limit
    pub fn new(model: Arc<dyn LanguageModel>, ruler: EntityRuler) -> Self {
        Self {
            model,
            ruler,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }

    /// Truncate input to this many characters before recognition
    pub fn with_max_text_length(mut self, max_text_length: usize) -> Self {
        self.max_text_length = max_text_length;
        self
    }

    /// Identifier of the underlying model
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Recognize entities in `text`
    ///
    /// Offsets in the result are character positions into `text`.
    pub fn recognize(&self, text: &str) -> Result<Vec<ExtractedEntity>, NerError> {
        let text = truncate_chars(text, self.max_text_length);

        let ruled = self.ruler.find(text);
        let annotated = self.model.annotate(text)?;

        let mut spans: Vec<ModelSpan> = Vec::with_capacity(ruled.len() + annotated.len());
        for span in annotated {
            if !span.fits(text) {
                warn!(
                    "Model {} returned span {}..{} outside the text, skipping",
                    self.model.name(),
                    span.start,
                    span.end
                );
                continue;
            }
            if ruled.iter().any(|r| r.overlaps(&span)) {
                debug!("Span {}..{} claimed by the entity ruler", span.start, span.end);
                continue;
            }
            spans.push(span);
        }
        spans.extend(ruled);
        spans.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));

        let mut positions = CharPositions::new(text);
        let entities: Vec<ExtractedEntity> = spans
            .into_iter()
            .filter_map(|span| {
                let category = category_for_label(&span.label)?;
                let (start, end) = positions.convert(span.start, span.end);
                Some(ExtractedEntity {
                    category,
                    value: text[span.start..span.end].to_string(),
                    confidence: PLACEHOLDER_CONFIDENCE,
                    start,
                    end,
                })
            })
            .collect();

        debug!("Recognized {} entities", entities.len());
        Ok(entities)
    }
}

/// At most `max_chars` leading characters of `text`
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            debug!(
                "Truncating text to {} characters for entity recognition",
                max_chars
            );
            &text[..cut]
        }
        None => text,
    }
}

/// Byte-to-character offset conversion for spans visited in start order
struct CharPositions<'t> {
    text: &'t str,
    byte: usize,
    chars: usize,
}

impl<'t> CharPositions<'t> {
    fn new(text: &'t str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    fn convert(&mut self, start: usize, end: usize) -> (usize, usize) {
        self.chars += self.text[self.byte..start].chars().count();
        self.byte = start;
        let end_chars = self.chars + self.text[start..end].chars().count();
        (self.chars, end_chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockModel;
    use edital_patterns::PhraseRule;

    fn ruler() -> EntityRuler {
        EntityRuler::new(vec![
            PhraseRule::new("MODALIDADE", "pregão eletrônico"),
            PhraseRule::new("CRITERIO", "menor preço"),
        ])
    }

    #[test]
    fn test_labels_outside_allow_list_are_dropped() {
        let model = MockModel::new()
            .with_phrase("ORG", "Prefeitura")
            .with_phrase("MISC", "Edital")
            .with_phrase("CARDINAL", "123");
        let recognizer = EntityRecognizer::new(Arc::new(model), EntityRuler::default());

        let entities = recognizer.recognize("Edital 123 da Prefeitura").unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].category, EntityCategory::Organization);
        assert_eq!(entities[0].value, "Prefeitura");
    }

    #[test]
    fn test_label_aliases() {
        assert_eq!(category_for_label("PER"), Some(EntityCategory::Person));
        assert_eq!(category_for_label("pessoa"), Some(EntityCategory::Person));
        assert_eq!(category_for_label("LOCAL"), Some(EntityCategory::Place));
        assert_eq!(category_for_label("GPE"), Some(EntityCategory::Place));
        assert_eq!(category_for_label("VALOR"), Some(EntityCategory::Money));
        assert_eq!(category_for_label("TEMPO"), Some(EntityCategory::Date));
        assert_eq!(category_for_label("MODALIDADE"), None);
        assert_eq!(category_for_label("CRITERIO"), None);
    }

    #[test]
    fn test_ruler_claims_overlapping_model_spans() {
        // the model tags "Pregão" as an organization, the ruler owns "pregão eletrônico"
        let model = MockModel::new()
            .with_phrase("ORG", "Pregão")
            .with_phrase("LOC", "Campinas");
        let recognizer = EntityRecognizer::new(Arc::new(model), ruler());

        let entities = recognizer.recognize("Pregão Eletrônico em Campinas").unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].value, "Campinas");
        assert_eq!(entities[0].category, EntityCategory::Place);
    }

    #[test]
    fn test_offsets_are_characters_and_sorted() {
        let text = "Licitação em São Paulo por R$ 10,00";
        let model = MockModel::new()
            .with_phrase("MONEY", "R$ 10,00")
            .with_phrase("LOC", "São Paulo");
        let recognizer = EntityRecognizer::new(Arc::new(model), EntityRuler::default());

        let entities = recognizer.recognize(text).unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].value, "São Paulo");
        assert_eq!((entities[0].start, entities[0].end), (13, 22));
        assert_eq!((entities[1].start, entities[1].end), (27, 35));

        let chars: Vec<char> = text.chars().collect();
        for entity in &entities {
            let slice: String = chars[entity.start..entity.end].iter().collect();
            assert_eq!(slice, entity.value);
            assert_eq!(entity.confidence, PLACEHOLDER_CONFIDENCE);
        }
    }

    #[test]
    fn test_truncation_limits_recognition() {
        let model = MockModel::new().with_phrase("LOC", "Recife");
        let recognizer = EntityRecognizer::new(Arc::new(model), EntityRuler::default())
            .with_max_text_length(10);

        let entities = recognizer.recognize("Recife ... Recife").unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].start, 0);
    }

    #[test]
    fn test_model_failure_is_an_error() {
        let model = MockModel::new();
        model.set_failing(true);
        let recognizer = EntityRecognizer::new(Arc::new(model), ruler());
        assert!(matches!(
            recognizer.recognize("texto"),
            Err(NerError::Inference(_))
        ));
    }

    #[test]
    fn test_truncate_chars_on_multibyte_text() {
        assert_eq!(truncate_chars("ação", 2), "aç");
        assert_eq!(truncate_chars("ação", 10), "ação");
    }
}
