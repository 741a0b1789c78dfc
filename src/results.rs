use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Case-folded word counts, kept in order of first occurrence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordFrequencies(IndexMap<String, u64>);

impl WordFrequencies {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `word`
    pub fn record(&mut self, word: &str) {
        match self.0.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.0.insert(word.to_string(), 1);
            }
        }
    }

    /// Occurrences of `word` (zero when it never appeared)
    pub fn get(&self, word: &str) -> u64 {
        self.0.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of tokens counted
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Words and their counts in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Words sorted by descending count, ties in first-occurrence order
    pub fn most_common(&self, n: usize) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

impl<'a> FromIterator<&'a str> for WordFrequencies {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = Self::new();
        for word in iter {
            table.record(word);
        }
        table
    }
}

/// Outcome of a complete survey run
#[derive(Debug, Clone, Serialize)]
pub struct SurveyReport {
    /// Page that was surveyed
    pub target_url: String,

    /// Externally hosted resources, in document order
    pub external_resources: Vec<String>,

    /// Absolute URL of the page the phrase link pointed at
    pub policy_url: String,

    /// Word counts of the linked page
    pub word_counts: WordFrequencies,

    /// Where the resource list was written
    pub resources_path: PathBuf,

    /// Where the word counts were written
    pub word_count_path: PathBuf,
}
