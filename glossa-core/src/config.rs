// Pipeline settings, loaded from an optional TOML file

use crate::error::{PipelineError, Result};
use glossa_scanner::catalog::SITE_BASE;
use glossa_scanner::fetch::DEFAULT_USER_AGENT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "glossa.toml";

/// Replacement label for a catalog entry, matched on its label as discovered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelOverride {
    /// Restricts the match to one section when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub subsection: String,
    pub replacement: String,
}

impl LabelOverride {
    pub fn new(subsection: &str, replacement: &str) -> Self {
        Self {
            section: None,
            subsection: subsection.to_string(),
            replacement: replacement.to_string(),
        }
    }

    pub fn in_section(mut self, section: &str) -> Self {
        self.section = Some(section.to_string());
        self
    }
}

/// Literal fix for a scraped translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationCorrection {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub site_base: String,
    pub index_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,

    pub catalog_file: String,
    pub words_file: String,
    pub output_file: String,

    /// CMU Pronouncing Dictionary used for transcription
    pub dictionary: PathBuf,
    pub max_transcription_words: usize,

    /// The one subsection whose words arrive run together ("NorthAmerica")
    pub split_subsection: String,
    pub label_overrides: Vec<LabelOverride>,
    pub translation_corrections: Vec<TranslationCorrection>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_base: SITE_BASE.to_string(),
            index_url: format!("{}/inglês/vocabulário/", SITE_BASE),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
            catalog_file: "catalog.csv".to_string(),
            words_file: "words.csv".to_string(),
            output_file: "words.xlsx".to_string(),
            dictionary: PathBuf::from("cmudict.dict"),
            max_transcription_words: 2,
            split_subsection: "Europe (Europa)".to_string(),
            label_overrides: vec![
                LabelOverride::new("Skeleton", "The Skeleton(O esqueleto)"),
                LabelOverride::new("Continents", "Continents(Os continentes)"),
                LabelOverride::new("Europe", "Europe(Europa)"),
            ],
            translation_corrections: vec![TranslationCorrection {
                from: "A\n                              Ásia".to_string(),
                to: "A Ásia".to_string(),
            }],
        }
    }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| PipelineError::Config(e.to_string()))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
            .map_err(|e| PipelineError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn catalog_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.catalog_file)
    }

    pub fn words_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.words_file)
    }

    pub fn output_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.output_file)
    }
}
