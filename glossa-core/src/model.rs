use glossa_scanner::ScrapedPair;
use serde::{Deserialize, Serialize};

/// An English word (or phrase) with its Portuguese translation and, once
/// annotated, its phonetic transcription.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    pub section: String,
    pub subsection: String,
    pub source_word: String,
    pub target_word: String,
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub transcription: String,
    #[serde(default)]
    pub cleaned_transcription: String,
    #[serde(default)]
    pub reversed_cleaned_transcription: String,
}

impl WordPair {
    pub fn new(section: &str, subsection: &str, source_word: &str, target_word: &str) -> Self {
        Self {
            section: section.to_string(),
            subsection: subsection.to_string(),
            source_word: source_word.to_string(),
            target_word: target_word.to_string(),
            word_count: 0,
            transcription: String::new(),
            cleaned_transcription: String::new(),
            reversed_cleaned_transcription: String::new(),
        }
    }

    pub fn from_scraped(section: &str, subsection: &str, pair: ScrapedPair) -> Self {
        Self {
            section: section.to_string(),
            subsection: subsection.to_string(),
            source_word: pair.word,
            target_word: pair.translation,
            word_count: 0,
            transcription: String::new(),
            cleaned_transcription: String::new(),
            reversed_cleaned_transcription: String::new(),
        }
    }
}
