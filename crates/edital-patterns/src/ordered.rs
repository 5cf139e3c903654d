//! Ordered regex lists with first-match-wins semantics

use crate::error::PatternError;
use regex::{Regex, RegexBuilder};

/// An ordered list of case-insensitive regular expressions
///
/// Patterns are tried in listed order. For each pattern only its first
/// match in the text is considered; the first pattern whose capture is
/// accepted wins, regardless of where later patterns would have matched.
#[derive(Debug, Clone)]
pub struct OrderedPatterns {
    group: &'static str,
    patterns: Vec<Regex>,
}

impl OrderedPatterns {
    /// Compile a group of single-line patterns
    pub fn compile(group: &'static str, sources: &[&str]) -> Result<Self, PatternError> {
        Self::build(group, sources, false)
    }

    /// Compile a group with multi-line mode enabled (`^`/`$` match at line breaks)
    pub fn compile_multi_line(
        group: &'static str,
        sources: &[&str],
    ) -> Result<Self, PatternError> {
        Self::build(group, sources, true)
    }

    fn build(
        group: &'static str,
        sources: &[&str],
        multi_line: bool,
    ) -> Result<Self, PatternError> {
        if sources.is_empty() {
            return Err(PatternError::EmptyGroup(group));
        }

        let patterns = sources
            .iter()
            .map(|source| compile_one(group, source, multi_line))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { group, patterns })
    }

    /// Name of the group, used in logs
    pub fn group(&self) -> &'static str {
        self.group
    }

    /// Number of patterns in the group
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True if the group has no patterns
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate over the patterns in order
    pub fn iter(&self) -> impl Iterator<Item = &Regex> {
        self.patterns.iter()
    }

    /// Capture of the first pattern that matches
    pub fn first_capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.first_match(text, Some)
    }

    /// Try each pattern in order and return the first accepted capture
    ///
    /// `accept` receives group 1 of the pattern's first match (group 0 when
    /// the pattern has no capture group). Returning `None` rejects the
    /// candidate and moves on to the next pattern.
    pub fn first_match<'t, T, F>(&self, text: &'t str, mut accept: F) -> Option<T>
    where
        F: FnMut(&'t str) -> Option<T>,
    {
        for pattern in &self.patterns {
            let Some(captures) = pattern.captures(text) else {
                continue;
            };
            let Some(candidate) = captures.get(1).or_else(|| captures.get(0)) else {
                continue;
            };
            if let Some(value) = accept(candidate.as_str()) {
                return Some(value);
            }
        }
        None
    }
}

pub(crate) fn compile_one(
    group: &'static str,
    source: &str,
    multi_line: bool,
) -> Result<Regex, PatternError> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .multi_line(multi_line)
        .build()
        .map_err(|e| PatternError::InvalidPattern {
            group,
            pattern: source.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_listed_pattern_wins_over_earlier_match() {
        // "edital" occurs first in the text, but "processo" is listed first
        let patterns = OrderedPatterns::compile(
            "test",
            &[r"processo\s+(\d+)", r"edital\s+(\d+)"],
        )
        .unwrap();

        let text = "Edital 7 referente ao Processo 42";
        assert_eq!(patterns.first_capture(text), Some("42"));
    }

    #[test]
    fn test_rejected_capture_falls_through() {
        let patterns = OrderedPatterns::compile("test", &[r"a(\w+)", r"b(\w+)"]).unwrap();

        let value = patterns.first_match("ax by", |c| (c.len() > 1).then(|| c.to_uppercase()));
        assert_eq!(value, None);

        let value = patterns.first_match("ax byz", |c| (c.len() > 1).then(|| c.to_uppercase()));
        assert_eq!(value, Some("YZ".to_string()));
    }

    #[test]
    fn test_only_first_match_of_each_pattern_is_considered() {
        let patterns = OrderedPatterns::compile("test", &[r"n(\d)"]).unwrap();
        let value = patterns.first_match("n1 n22 n3", |c| (c != "1").then_some(c));
        assert_eq!(value, None);
    }

    #[test]
    fn test_case_insensitive() {
        let patterns = OrderedPatterns::compile("test", &[r"pregão"]).unwrap();
        assert_eq!(patterns.first_capture("PREGÃO"), Some("PREGÃO"));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = OrderedPatterns::compile("broken", &[r"(unclosed"]);
        assert!(matches!(
            result,
            Err(PatternError::InvalidPattern { group: "broken", .. })
        ));
    }

    #[test]
    fn test_empty_group() {
        let result = OrderedPatterns::compile("nothing", &[]);
        assert!(matches!(result, Err(PatternError::EmptyGroup("nothing"))));
    }
}
