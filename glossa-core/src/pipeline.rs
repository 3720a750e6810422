use crate::catalog::{discover_catalog, normalize_catalog};
use crate::checkpoint::{Checkpoint, ForceFrom, Stage};
use crate::config::Settings;
use crate::error::Result;
use crate::export::write_spreadsheet;
use crate::model::WordPair;
use crate::phonetic::{Transcriber, annotate};
use crate::scrape::scrape_catalog;
use crate::words::{WordRules, normalize_words};
use glossa_scanner::{CatalogEntry, PageFetcher};
use std::path::PathBuf;
use tracing::{info, warn};

/// Options for a pipeline run
pub struct PipelineOptions {
    pub settings: Settings,
    /// Directory holding the checkpoint files and the spreadsheet
    pub work_dir: PathBuf,
    pub force: ForceFrom,
    pub show_progress: bool,
}

/// What happened to a stage during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    /// Not needed because a later stage was served from disk
    Skipped,
    /// Output already on disk and left as is
    Existing,
    /// Rows loaded from a previous run
    Cached(usize),
    /// Rows produced in this run
    Computed(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    pub catalog: StageStatus,
    pub words: StageStatus,
    pub annotated: StageStatus,
    pub failed_urls: Vec<String>,
    pub output: PathBuf,
}

struct Stages {
    catalog: Checkpoint,
    words: Checkpoint,
    annotated: Checkpoint,
}

impl Stages {
    fn new(options: &PipelineOptions) -> Self {
        let settings = &options.settings;
        let dir = &options.work_dir;
        let force = options.force;

        Self {
            catalog: Checkpoint::new(Stage::Catalog, settings.catalog_path(dir))
                .with_force(force.forces(Stage::Catalog)),
            words: Checkpoint::new(Stage::Words, settings.words_path(dir))
                .with_force(force.forces(Stage::Words)),
            annotated: Checkpoint::new(Stage::Annotated, settings.output_path(dir))
                .with_force(force.forces(Stage::Annotated)),
        }
    }
}

/// Run the whole pipeline, reusing every stage output that is still valid.
///
/// Stages are resolved from the end: a fresh spreadsheet means nothing runs,
/// and a fresh words file means the catalog is never touched. When every
/// page fails and nothing was scraped, no words or spreadsheet file is
/// written, so the next run tries again.
pub async fn execute_pipeline<F, T>(
    options: PipelineOptions,
    fetcher: &F,
    transcriber: &T,
) -> Result<PipelineSummary>
where
    F: PageFetcher,
    T: Transcriber + ?Sized,
{
    let stages = Stages::new(&options);
    let settings = &options.settings;

    let mut summary = PipelineSummary {
        catalog: StageStatus::Skipped,
        words: StageStatus::Skipped,
        annotated: StageStatus::Skipped,
        failed_urls: Vec::new(),
        output: stages.annotated.path().to_path_buf(),
    };

    if stages.annotated.is_fresh() {
        info!(
            "{} already exists, nothing to do",
            stages.annotated.path().display()
        );
        summary.annotated = StageStatus::Existing;
        return Ok(summary);
    }

    let words = match stages.words.load::<WordPair>()? {
        Some(words) => {
            summary.words = StageStatus::Cached(words.len());
            words
        }
        None => {
            let (catalog, catalog_status) =
                resolve_catalog(&stages.catalog, settings, fetcher).await?;
            summary.catalog = catalog_status;

            let catalog = normalize_catalog(catalog, &settings.label_overrides);
            let outcome = scrape_catalog(&catalog, fetcher, options.show_progress).await;
            summary.failed_urls = outcome.failed_urls;

            let rules = WordRules {
                corrections: &settings.translation_corrections,
                split_subsection: &settings.split_subsection,
            };
            let words = normalize_words(outcome.pairs, &rules);
            if words.is_empty() && !summary.failed_urls.is_empty() {
                warn!(
                    "No words scraped and {} pages failed, leaving {} and {} unwritten",
                    summary.failed_urls.len(),
                    stages.words.path().display(),
                    stages.annotated.path().display()
                );
                summary.words = StageStatus::Computed(0);
                return Ok(summary);
            }
            stages.words.store(&words)?;
            summary.words = StageStatus::Computed(words.len());
            words
        }
    };

    let annotated = annotate(words, transcriber, settings.max_transcription_words);
    write_spreadsheet(&annotated, stages.annotated.path())?;
    summary.annotated = StageStatus::Computed(annotated.len());

    Ok(summary)
}

async fn resolve_catalog<F: PageFetcher>(
    checkpoint: &Checkpoint,
    settings: &Settings,
    fetcher: &F,
) -> Result<(Vec<CatalogEntry>, StageStatus)> {
    if let Some(entries) = checkpoint.load::<CatalogEntry>()? {
        let count = entries.len();
        return Ok((entries, StageStatus::Cached(count)));
    }

    let entries = discover_catalog(fetcher, &settings.index_url, &settings.site_base).await?;
    checkpoint.store(&entries)?;
    let count = entries.len();
    Ok((entries, StageStatus::Computed(count)))
}
