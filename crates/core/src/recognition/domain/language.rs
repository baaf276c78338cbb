use serde::Serialize;

/// Languages with a pretrained acoustic model bundle available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    English,
    Spanish,
    French,
}

pub const DEFAULT_LANGUAGE: Language = Language::English;

impl Language {
    /// Directory name of the unpacked model bundle.
    pub fn model_name(&self) -> &'static str {
        match self {
            Language::English => "vosk-model-small-en-us-0.15",
            Language::Spanish => "vosk-model-small-es-0.42",
            Language::French => "vosk-model-small-fr-0.22",
        }
    }

    pub fn model_url(&self) -> &'static str {
        match self {
            Language::English => {
                "https://alphacephei.com/vosk/models/vosk-model-small-en-us-0.15.zip"
            }
            Language::Spanish => {
                "https://alphacephei.com/vosk/models/vosk-model-small-es-0.42.zip"
            }
            Language::French => "https://alphacephei.com/vosk/models/vosk-model-small-fr-0.22.zip",
        }
    }

    /// Map a language tag to a supported language, falling back to the
    /// default when the tag is unrecognized.
    pub fn from_tag(tag: &str) -> Language {
        match tag.to_lowercase().as_str() {
            "en" | "english" => Language::English,
            "es" | "spanish" => Language::Spanish,
            "fr" | "french" => Language::French,
            other => {
                log::warn!("Unrecognized language tag '{other}', using {DEFAULT_LANGUAGE}");
                DEFAULT_LANGUAGE
            }
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Spanish => write!(f, "Spanish"),
            Language::French => write!(f, "French"),
        }
    }
}
