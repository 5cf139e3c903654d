//! Header extraction

use crate::fields;
use edital_domain::HeaderInfo;
use edital_patterns::PatternTable;
use std::sync::Arc;
use tracing::debug;

/// Fills a [`HeaderInfo`] from the full text of an edital
#[derive(Debug, Clone)]
pub struct HeaderExtractor {
    patterns: Arc<PatternTable>,
}

impl HeaderExtractor {
    /// Create an extractor over a shared pattern table
    pub fn new(patterns: Arc<PatternTable>) -> Self {
        Self { patterns }
    }

    /// Run every field extractor over `text`
    ///
    /// Fields are independent: one missing or rejected field never affects
    /// another.
    pub fn extract(&self, text: &str) -> HeaderInfo {
        let patterns = self.patterns.as_ref();
        let lowered = text.to_lowercase();

        let header = HeaderInfo {
            issuing_organization: fields::extract_organization(patterns, text),
            modality: fields::extract_modality(patterns, &lowered),
            process_number: fields::extract_process_number(patterns, text),
            cnpj: fields::extract_cnpj(patterns, text),
            proposal_opening: fields::extract_opening_date(patterns, text),
            public_session: fields::extract_session_date(patterns, text),
            bidding_object: fields::extract_bidding_object(patterns, text),
            judgment_criterion: fields::extract_criterion(patterns, &lowered),
            estimated_value: fields::extract_estimated_value(patterns, text),
        };

        debug!(
            "Header extraction found {} of 9 fields",
            header.found_fields()
        );

        header
    }
}
