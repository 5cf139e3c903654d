//! Keyword tables: lower-cased phrase to canonical value

/// Ordered lookup table matched by substring containment
///
/// Keys are stored lower-cased. [`KeywordTable::find_in`] expects text that
/// the caller already lower-cased once, so a document is not lower-cased
/// again for every table.
#[derive(Debug, Clone)]
pub struct KeywordTable<T> {
    entries: Vec<(String, T)>,
}

impl<T: Copy> KeywordTable<T> {
    /// Build a table from `(keyword, value)` pairs, keeping their order
    pub fn new(entries: &[(&str, T)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(keyword, value)| (keyword.to_lowercase(), *value))
                .collect(),
        }
    }

    /// Value of the first entry (in table order) contained in `lowered`
    ///
    /// First in declared order wins, not the longest or earliest match.
    pub fn find_in(&self, lowered: &str) -> Option<T> {
        self.entries
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword.as_str()))
            .map(|(_, value)| *value)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(keyword, value)` in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
