use std::collections::VecDeque;

use crate::shared::constants::HISTORY_CAPACITY;

/// Rolling list of past transcripts, most-recent-first, in memory only.
///
/// Only successful non-empty transcripts are recorded; the list never grows
/// beyond its capacity.
#[derive(Debug, Clone)]
pub struct SessionHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a transcript as the most recent entry, evicting the oldest
    /// when full. Blank transcripts are ignored.
    pub fn record(&mut self, transcript: &str) {
        if transcript.trim().is_empty() {
            return;
        }
        self.entries.push_front(transcript.to_string());
        self.entries.truncate(self.capacity);
    }

    /// Entries from most recent to oldest.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Fetch an entry by recency index (0 = most recent).
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_is_empty() {
        let history = SessionHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn test_record_puts_newest_first() {
        let mut history = SessionHistory::new();
        history.record("first");
        history.record("second");

        let entries: Vec<&str> = history.entries().collect();
        assert_eq!(entries, vec!["second", "first"]);
        assert_eq!(history.get(0), Some("second"));
        assert_eq!(history.get(1), Some("first"));
    }

    #[test]
    fn test_blank_transcripts_ignored() {
        let mut history = SessionHistory::new();
        history.record("");
        history.record("   \n");
        assert!(history.is_empty());
    }

    #[test]
    fn test_capacity_never_exceeded() {
        let mut history = SessionHistory::new();
        for i in 1..=6 {
            history.record(&format!("transcript {i}"));
            assert!(history.len() <= HISTORY_CAPACITY);
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
    }

    #[test]
    fn test_sixth_entry_evicts_oldest() {
        let mut history = SessionHistory::new();
        for i in 1..=6 {
            history.record(&format!("transcript {i}"));
        }

        let entries: Vec<&str> = history.entries().collect();
        assert_eq!(
            entries,
            vec![
                "transcript 6",
                "transcript 5",
                "transcript 4",
                "transcript 3",
                "transcript 2",
            ]
        );
        assert_eq!(history.get(4), Some("transcript 2"));
        assert_eq!(history.get(5), None);
    }

    #[test]
    fn test_restore_entry_as_current() {
        let mut history = SessionHistory::new();
        history.record("older");
        history.record("newer");

        let restored = history.get(1).unwrap().to_string();
        assert_eq!(restored, "older");
    }
}
