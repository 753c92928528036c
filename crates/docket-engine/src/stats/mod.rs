//! Word frequency statistics over document text.
//!
//! Words match `[_A-Za-z][_A-Za-z0-9]*` and are folded to ASCII lower case,
//! so `Cat`, `CAT` and `cat` count as one word and `3d` counts as `d`.

pub mod chart;

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

pub use chart::{COUNT_WIDTH, ChartLayout, render_chart};

/// One row of a frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Occurrence count per distinct, case-folded word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStatistics {
    counts: HashMap<String, usize>,
}

impl WordStatistics {
    pub fn from_text(text: &str) -> Self {
        static WORD_REGEX: OnceLock<Regex> = OnceLock::new();
        let word_regex = WORD_REGEX
            .get_or_init(|| Regex::new(r"[_A-Za-z][_A-Za-z0-9]*").expect("Invalid word regex"));

        let mut counts: HashMap<String, usize> = HashMap::new();
        for word in word_regex.find_iter(text) {
            *counts
                .entry(word.as_str().to_ascii_lowercase())
                .or_default() += 1;
        }
        Self { counts }
    }

    /// Occurrences of `word` (case-insensitive)
    pub fn count(&self, word: &str) -> usize {
        self.counts
            .get(&word.to_ascii_lowercase())
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Rows in display order: most frequent first, ties alphabetical
    pub fn entries(&self) -> Vec<WordCount> {
        let mut entries: Vec<WordCount> = self
            .counts
            .iter()
            .map(|(word, &count)| WordCount {
                word: word.clone(),
                count,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        entries
    }
}
