pub mod incremental_recognizer;
pub mod language;
