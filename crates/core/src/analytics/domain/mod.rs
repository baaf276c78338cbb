pub mod sentiment;
pub mod summarizer;
pub mod text_stats;
