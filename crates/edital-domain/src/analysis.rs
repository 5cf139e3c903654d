//! Analysis result - the complete output of one analysis call

use crate::{ExtractedEntity, ExtractedRequirement, HeaderInfo};
use serde::{Deserialize, Serialize};

/// Structured data extracted from one edital text
///
/// Produced once per analysis call and owned by the caller afterwards.
/// Entities are ordered by start offset; requirements by rule order, then
/// by position in the text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Header metadata
    pub header: HeaderInfo,

    /// Recognized named entities
    pub entities: Vec<ExtractedEntity>,

    /// Habilitação requirements
    pub requirements: Vec<ExtractedRequirement>,
}

impl AnalysisResult {
    /// True when nothing at all was extracted
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.entities.is_empty() && self.requirements.is_empty()
    }
}
