/// Domain interface for extractive summarization.
///
/// Total over any input: failures (blank or un-tokenizable text) come back
/// as descriptive strings, never as errors, because the summary is shown
/// directly to the user.
pub trait Summarizer {
    /// Produce at most `max_sentences` sentences joined by line breaks,
    /// in their original document order.
    fn summarize(&self, text: &str, max_sentences: usize) -> String;
}
