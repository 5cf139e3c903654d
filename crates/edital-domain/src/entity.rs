//! Entity module - spans tagged by the language model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse category of a recognized entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    /// A natural person
    Person,
    /// A company, agency or other institution
    Organization,
    /// A geopolitical place (city, state, country)
    Place,
    /// A monetary amount
    Money,
    /// A date or date expression
    Date,
}

impl EntityCategory {
    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityCategory::Person => "person",
            EntityCategory::Organization => "organization",
            EntityCategory::Place => "place",
            EntityCategory::Money => "money",
            EntityCategory::Date => "date",
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named entity found in the analyzed text
///
/// Offsets are character positions (Unicode scalar values, not bytes) into
/// the original input, with `start <= end <= text.chars().count()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedEntity {
    /// Entity category
    pub category: EntityCategory,

    /// Surface text of the span
    pub value: String,

    /// Confidence in [0.0, 1.0]
    pub confidence: f64,

    /// Start offset (inclusive, in characters)
    pub start: usize,

    /// End offset (exclusive, in characters)
    pub end: usize,
}

impl ExtractedEntity {
    /// Length of the span in characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a zero-length span
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check the offset invariant against a text of `text_len` characters
    pub fn is_within(&self, text_len: usize) -> bool {
        self.start <= self.end && self.end <= text_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(start: usize, end: usize) -> ExtractedEntity {
        ExtractedEntity {
            category: EntityCategory::Organization,
            value: "Prefeitura".to_string(),
            confidence: 0.8,
            start,
            end,
        }
    }

    #[test]
    fn test_span_bounds() {
        assert!(entity(0, 10).is_within(10));
        assert!(!entity(0, 11).is_within(10));
        assert!(!entity(5, 4).is_within(10));
    }

    #[test]
    fn test_len() {
        assert_eq!(entity(3, 13).len(), 10);
        assert!(entity(4, 4).is_empty());
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&EntityCategory::Organization).unwrap();
        assert_eq!(json, "\"organization\"");
    }
}
