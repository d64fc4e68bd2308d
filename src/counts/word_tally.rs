use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Word-frequency table for one input file. Words are whitespace-delimited
/// tokens, lowercased before counting, so "The" and "the" share an entry.
///
/// A `BTreeMap` keeps iteration in byte-lexicographic key order: the
/// alphabetical listing is plain iteration, and the top-N listing gets a
/// deterministic tie order from a stable sort over it, so repeated runs on an
/// unmodified file produce identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTally {
    counts: BTreeMap<String, u64>,
    total_tokens: u64,
}

impl WordTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tally from a file. The content is read as raw bytes and
    /// lossily converted, so any encoding is treated as whitespace-delimited
    /// tokens rather than rejected.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path.as_ref())?;
        Ok(Self::from_text(&String::from_utf8_lossy(&bytes)))
    }

    pub fn from_text(text: &str) -> Self {
        let mut tally = Self::new();
        for line in text.lines() {
            tally.add_tokens(line);
        }
        tally
    }

    /// Split on runs of whitespace and count each lowercased token.
    pub fn add_tokens(&mut self, line: &str) {
        for token in line.split_whitespace() {
            *self.counts.entry(token.to_lowercase()).or_insert(0) += 1;
            self.total_tokens += 1;
        }
    }

    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    /// Total whitespace-delimited tokens seen. Always equals the sum of all
    /// per-word counts.
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Every (word, count) pair sorted ascending by word, byte-wise.
    pub fn alphabetical(&self) -> Vec<(&str, u64)> {
        self.counts
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect()
    }

    /// The `n` most frequent words, highest count first. Equal counts keep
    /// their alphabetical pre-sort order (stable sort). Fewer than `n`
    /// distinct words returns all of them.
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut entries = self.alphabetical();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}
