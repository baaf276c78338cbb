pub mod textrank_summarizer;
pub mod vader_analyzer;
