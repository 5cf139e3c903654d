//! The compiled pattern table

use crate::error::PatternError;
use crate::keywords::KeywordTable;
use crate::ordered::{compile_one, OrderedPatterns};
use crate::phrases::PhraseRule;
use crate::sources;
use edital_domain::{DocumentType, JudgmentCriterion, Modality, RequirementKind};
use regex::Regex;
use serde::Serialize;
use tracing::info;

/// A requirement regex and the category it assigns
#[derive(Debug, Clone)]
pub struct RequirementRule {
    /// Multi-line, case-insensitive expression; group 1 is the description
    pub regex: Regex,
    /// Category assigned to every match
    pub kind: RequirementKind,
}

/// Every matcher used by the extractors
///
/// Loaded once at startup and shared read-only (usually behind an `Arc`).
#[derive(Debug, Clone)]
pub struct PatternTable {
    /// Issuing organization patterns
    pub organization: OrderedPatterns,
    /// Process number patterns
    pub process_number: OrderedPatterns,
    /// CNPJ patterns
    pub cnpj: OrderedPatterns,
    /// Estimated value patterns
    pub estimated_value: OrderedPatterns,
    /// Proposal opening date patterns
    pub opening_date: OrderedPatterns,
    /// Public session date patterns
    pub session_date: OrderedPatterns,
    /// Bidding object patterns (multi-line)
    pub bidding_object: OrderedPatterns,
    /// Modality keyword table
    pub modality: KeywordTable<Modality>,
    /// Judgment criterion keyword table
    pub criterion: KeywordTable<JudgmentCriterion>,
    /// Document-type vocabulary
    pub document_types: KeywordTable<DocumentType>,
    /// Requirement rules, in order
    pub requirement_rules: Vec<RequirementRule>,
    /// Descriptions discarded by the requirement extractor
    pub stop_words: Vec<String>,
    /// Entity-ruler phrases
    pub entity_phrases: Vec<PhraseRule>,
}

/// Number of loaded matchers per group, for health reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PatternCounts {
    /// Header fields backed by regex groups
    pub field_groups: usize,
    /// Regexes across all header field groups
    pub field_patterns: usize,
    /// Modality keywords
    pub modality_keywords: usize,
    /// Judgment criterion keywords
    pub criterion_keywords: usize,
    /// Document-type vocabulary entries
    pub document_types: usize,
    /// Requirement rules
    pub requirement_rules: usize,
    /// Entity-ruler phrases
    pub entity_phrases: usize,
}

impl PatternTable {
    /// Compile the built-in tables
    pub fn load() -> Result<Self, PatternError> {
        let requirement_rules = sources::REQUIREMENT_RULES
            .iter()
            .map(|(source, kind)| {
                Ok(RequirementRule {
                    regex: compile_one("requirements", source, true)?,
                    kind: *kind,
                })
            })
            .collect::<Result<Vec<_>, PatternError>>()?;

        let table = Self {
            organization: OrderedPatterns::compile("organization", sources::ORGANIZATION)?,
            process_number: OrderedPatterns::compile("process_number", sources::PROCESS_NUMBER)?,
            cnpj: OrderedPatterns::compile("cnpj", sources::CNPJ)?,
            estimated_value: OrderedPatterns::compile(
                "estimated_value",
                sources::ESTIMATED_VALUE,
            )?,
            opening_date: OrderedPatterns::compile("opening_date", sources::OPENING_DATE)?,
            session_date: OrderedPatterns::compile("session_date", sources::SESSION_DATE)?,
            bidding_object: OrderedPatterns::compile_multi_line(
                "bidding_object",
                sources::BIDDING_OBJECT,
            )?,
            modality: KeywordTable::new(sources::MODALITY_KEYWORDS),
            criterion: KeywordTable::new(sources::CRITERION_KEYWORDS),
            document_types: KeywordTable::new(sources::DOCUMENT_TYPES),
            requirement_rules,
            stop_words: sources::REQUIREMENT_STOP_WORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
            entity_phrases: sources::ENTITY_PHRASES
                .iter()
                .map(|(label, phrase)| PhraseRule::new(label, phrase))
                .collect(),
        };

        let counts = table.counts();
        info!(
            "Pattern table loaded: {} field patterns in {} groups, {} requirement rules, {} document types",
            counts.field_patterns,
            counts.field_groups,
            counts.requirement_rules,
            counts.document_types
        );

        Ok(table)
    }

    /// Header field groups, in extraction order
    pub fn field_groups(&self) -> [&OrderedPatterns; 7] {
        [
            &self.organization,
            &self.process_number,
            &self.cnpj,
            &self.estimated_value,
            &self.opening_date,
            &self.session_date,
            &self.bidding_object,
        ]
    }

    /// Count the loaded matchers
    pub fn counts(&self) -> PatternCounts {
        let groups = self.field_groups();
        PatternCounts {
            field_groups: groups.len(),
            field_patterns: groups.iter().map(|g| g.len()).sum(),
            modality_keywords: self.modality.len(),
            criterion_keywords: self.criterion.len(),
            document_types: self.document_types.len(),
            requirement_rules: self.requirement_rules.len(),
            entity_phrases: self.entity_phrases.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_compiles() {
        let table = PatternTable::load();
        assert!(table.is_ok(), "built-in patterns must compile: {:?}", table.err());
    }

    #[test]
    fn test_counts() {
        let table = PatternTable::load().unwrap();
        let counts = table.counts();
        assert_eq!(counts.field_groups, 7);
        assert_eq!(counts.field_patterns, 20);
        assert_eq!(counts.modality_keywords, 7);
        assert_eq!(counts.criterion_keywords, 4);
        assert_eq!(counts.document_types, 20);
        assert_eq!(counts.requirement_rules, 5);
        assert_eq!(counts.entity_phrases, 5);
    }

    #[test]
    fn test_process_number_forms() {
        let table = PatternTable::load().unwrap();
        assert_eq!(
            table.process_number.first_capture("PROCESSO Nº 045/2023"),
            Some("045/2023")
        );
        assert_eq!(
            table.process_number.first_capture("Edital nº 12-2024"),
            Some("12-2024")
        );
        assert_eq!(
            table.process_number.first_capture("Licitação n° 7.2022"),
            Some("7.2022")
        );
        assert_eq!(
            table.process_number.first_capture("Processo nº 1/2024/01"),
            Some("1/2024/01")
        );
    }

    #[test]
    fn test_process_pattern_order_beats_text_position() {
        let table = PatternTable::load().unwrap();
        let text = "Edital nº 5/2023 ... Processo nº 123/2024";
        assert_eq!(table.process_number.first_capture(text), Some("123/2024"));
    }

    #[test]
    fn test_modality_table_order() {
        let table = PatternTable::load().unwrap();
        let lowered = "concurso de projetos na modalidade pregão eletrônico".to_string();
        assert_eq!(table.modality.find_in(&lowered), Some(Modality::PregaoEletronico));
    }

    #[test]
    fn test_document_vocabulary_first_declared_wins() {
        let table = PatternTable::load().unwrap();
        // contains both "certidão conjunta" (declared earlier) and "cndt" (declared later)
        let description = "certidão conjunta e cndt";
        assert_eq!(
            table.document_types.find_in(description),
            Some(DocumentType::CndFederal)
        );
    }

    #[test]
    fn test_cnpj_formats() {
        let table = PatternTable::load().unwrap();
        assert_eq!(
            table.cnpj.first_capture("CNPJ: 12.345.678/0001-90"),
            Some("12.345.678/0001-90")
        );
        assert_eq!(
            table.cnpj.first_capture("CNPJ 12345678000190"),
            Some("12345678000190")
        );
    }
}
