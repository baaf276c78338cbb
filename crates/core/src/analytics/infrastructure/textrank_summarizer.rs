use std::collections::HashSet;

use crate::analytics::domain::summarizer::Summarizer;
use crate::shared::constants::{NOTHING_TO_SUMMARIZE_MESSAGE, SUMMARY_FALLBACK_MESSAGE};

const DAMPING: f64 = 0.85;
const MAX_ITERATIONS: usize = 50;
const CONVERGENCE_EPSILON: f64 = 1e-4;

/// Extractive summarizer ranking sentences by graph centrality.
///
/// Sentences are nodes; edges are weighted by normalized word overlap.
/// A power-iteration PageRank picks the most central sentences, which are
/// emitted in their original document order.
pub struct TextRankSummarizer;

impl TextRankSummarizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextRankSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer for TextRankSummarizer {
    fn summarize(&self, text: &str, max_sentences: usize) -> String {
        if text.trim().is_empty() {
            return NOTHING_TO_SUMMARIZE_MESSAGE.to_string();
        }

        let sentences = split_sentences(text);
        let tokenized: Vec<HashSet<String>> = sentences.iter().map(|s| tokenize(s)).collect();

        // Sentences without a single word token can't be ranked or shown
        let candidates: Vec<usize> = (0..sentences.len())
            .filter(|&i| !tokenized[i].is_empty())
            .collect();
        if candidates.is_empty() {
            return SUMMARY_FALLBACK_MESSAGE.to_string();
        }

        if candidates.len() <= max_sentences {
            return candidates
                .iter()
                .map(|&i| sentences[i].as_str())
                .collect::<Vec<_>>()
                .join("\n");
        }

        let scores = rank(&candidates, &tokenized);
        let mut ranked: Vec<(usize, f64)> = candidates
            .iter()
            .copied()
            .zip(scores.iter().copied())
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut selected: Vec<usize> = ranked
            .into_iter()
            .take(max_sentences)
            .map(|(i, _)| i)
            .collect();
        selected.sort_unstable();

        selected
            .into_iter()
            .map(|i| sentences[i].as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            current.clear();
        }
    }
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    sentences
}

fn tokenize(sentence: &str) -> HashSet<String> {
    sentence
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Similarity per Mihalcea & Tarau: shared words over summed log lengths.
fn similarity(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let overlap = a.intersection(b).count();
    if overlap == 0 {
        return 0.0;
    }
    let denom = (a.len() as f64).ln() + (b.len() as f64).ln();
    if denom <= 0.0 {
        // Both sentences are a single word; full overlap means identical
        return 1.0;
    }
    overlap as f64 / denom
}

fn rank(candidates: &[usize], tokenized: &[HashSet<String>]) -> Vec<f64> {
    let n = candidates.len();
    let mut weights = vec![vec![0.0f64; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let w = similarity(&tokenized[candidates[i]], &tokenized[candidates[j]]);
            weights[i][j] = w;
            weights[j][i] = w;
        }
    }
    let out_sums: Vec<f64> = weights.iter().map(|row| row.iter().sum()).collect();

    let mut scores = vec![1.0f64; n];
    for _ in 0..MAX_ITERATIONS {
        let mut next = vec![0.0f64; n];
        for i in 0..n {
            let mut incoming = 0.0;
            for j in 0..n {
                if j != i && out_sums[j] > 0.0 {
                    incoming += weights[j][i] / out_sums[j] * scores[j];
                }
            }
            next[i] = (1.0 - DAMPING) + DAMPING * incoming;
        }
        let delta: f64 = next
            .iter()
            .zip(scores.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();
        scores = next;
        if delta < CONVERGENCE_EPSILON {
            break;
        }
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ARTICLE: &str = "The harbor town depends on the fishing fleet. \
        The fishing fleet brings fish to the harbor town market every morning. \
        Tourists sometimes photograph the old lighthouse. \
        The market sells the fleet's fish across the harbor town. \
        A cat slept on a bench. \
        Fishing remains the heart of the town and its market.";

    #[test]
    fn test_empty_input_returns_message() {
        let summarizer = TextRankSummarizer::new();
        assert_eq!(summarizer.summarize("", 3), NOTHING_TO_SUMMARIZE_MESSAGE);
        assert_eq!(summarizer.summarize("   \n", 3), NOTHING_TO_SUMMARIZE_MESSAGE);
    }

    #[test]
    fn test_untokenizable_input_returns_fallback() {
        let summarizer = TextRankSummarizer::new();
        assert_eq!(summarizer.summarize("... !!! ???", 3), SUMMARY_FALLBACK_MESSAGE);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(5)]
    fn test_summary_has_at_most_n_lines(#[case] n: usize) {
        let summarizer = TextRankSummarizer::new();
        let summary = summarizer.summarize(ARTICLE, n);
        assert!(summary.lines().count() <= n);
    }

    #[test]
    fn test_short_text_returned_whole() {
        let summarizer = TextRankSummarizer::new();
        let summary = summarizer.summarize("One sentence. Another one.", 5);
        assert_eq!(summary, "One sentence.\nAnother one.");
    }

    #[test]
    fn test_unpunctuated_transcript_is_one_sentence() {
        let summarizer = TextRankSummarizer::new();
        let text = "the quick brown fox jumps over the lazy dog";
        assert_eq!(summarizer.summarize(text, 3), text);
    }

    #[test]
    fn test_selected_sentences_keep_document_order() {
        let summarizer = TextRankSummarizer::new();
        let summary = summarizer.summarize(ARTICLE, 3);
        let originals = split_sentences(ARTICLE);
        let positions: Vec<usize> = summary
            .lines()
            .map(|line| originals.iter().position(|s| s == line).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_central_sentences_beat_outliers() {
        let summarizer = TextRankSummarizer::new();
        let summary = summarizer.summarize(ARTICLE, 3);
        // The cat sentence shares almost no vocabulary with the rest
        assert!(!summary.contains("cat slept"));
    }

    #[test]
    fn test_split_sentences_handles_mixed_terminators() {
        let parts = split_sentences("First one. Second one! Third one? Trailing bit");
        assert_eq!(
            parts,
            vec!["First one.", "Second one!", "Third one?", "Trailing bit"]
        );
    }

    #[test]
    fn test_similarity_zero_without_overlap() {
        let a = tokenize("alpha beta gamma");
        let b = tokenize("delta epsilon zeta");
        assert_eq!(similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_similarity_positive_with_overlap() {
        let a = tokenize("the harbor fleet sails");
        let b = tokenize("the fleet returns to harbor");
        assert!(similarity(&a, &b) > 0.0);
    }
}
