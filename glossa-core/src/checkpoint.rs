// File-backed stage outputs that let a run skip work already done

use crate::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The persisted pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Catalog,
    Words,
    Annotated,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Catalog, Stage::Words, Stage::Annotated];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "catalog" | "urls" => Some(Stage::Catalog),
            "words" | "scrape" => Some(Stage::Words),
            "annotated" | "annotate" | "output" => Some(Stage::Annotated),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Catalog => "catalog",
            Stage::Words => "words",
            Stage::Annotated => "annotated",
        }
    }
}

/// Which stages must be recomputed even when their output exists.
///
/// Forcing a stage also forces every stage after it, since their outputs
/// were derived from the one being replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForceFrom(Option<Stage>);

impl ForceFrom {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn all() -> Self {
        Self(Some(Stage::Catalog))
    }

    pub fn stage(stage: Stage) -> Self {
        Self(Some(stage))
    }

    /// Combine requests, keeping the earliest stage
    pub fn with(self, stage: Stage) -> Self {
        match self.0 {
            Some(current) if current <= stage => self,
            _ => Self(Some(stage)),
        }
    }

    pub fn forces(&self, stage: Stage) -> bool {
        self.0.is_some_and(|first| stage >= first)
    }
}

pub struct Checkpoint {
    stage: Stage,
    path: PathBuf,
    force: bool,
}

impl Checkpoint {
    pub fn new(stage: Stage, path: impl Into<PathBuf>) -> Self {
        Self {
            stage,
            path: path.into(),
            force: false,
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Prior output exists and may be reused
    pub fn is_fresh(&self) -> bool {
        !self.force && self.path.exists()
    }

    /// Rows from the previous run, or `None` when the stage has to run.
    pub fn load<T: DeserializeOwned>(&self) -> Result<Option<Vec<T>>> {
        if !self.is_fresh() {
            if self.force && self.path.exists() {
                info!(
                    "Recomputing {} stage, ignoring {}",
                    self.stage.as_str(),
                    self.path.display()
                );
            }
            return Ok(None);
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let rows = reader
            .deserialize()
            .collect::<std::result::Result<Vec<T>, csv::Error>>()?;

        info!(
            "Loaded {} {} rows from {}",
            rows.len(),
            self.stage.as_str(),
            self.path.display()
        );
        Ok(Some(rows))
    }

    pub fn store<T: Serialize>(&self, rows: &[T]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut writer = csv::WriterBuilder::new().from_path(&self.path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        debug!(
            "Stored {} {} rows in {}",
            rows.len(),
            self.stage.as_str(),
            self.path.display()
        );
        Ok(())
    }
}
