use serde::{Deserialize, Serialize};
use std::fmt;

/// How a catalog entry was found on the index page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    #[serde(rename = "category-link")]
    CategoryLink,
    #[serde(rename = "notepad", alias = "notepad2")]
    Notepad,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::CategoryLink => "category-link",
            EntryKind::Notepad => "notepad",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One vocabulary page listed on the index
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub section: String,
    pub subsection: String,
    pub url: String,
}

impl CatalogEntry {
    pub fn new(kind: EntryKind, section: &str, subsection: &str, url: &str) -> Self {
        Self {
            kind,
            section: section.to_string(),
            subsection: subsection.to_string(),
            url: url.to_string(),
        }
    }
}

/// A word and its translation as found on a single page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScrapedPair {
    pub word: String,
    pub translation: String,
}

impl ScrapedPair {
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
        }
    }
}
