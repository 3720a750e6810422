pub mod catalog;
pub mod checkpoint;
pub mod cmudict;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod phonetic;
pub mod pipeline;
pub mod scrape;
pub mod words;

pub use checkpoint::{Checkpoint, ForceFrom, Stage};
pub use config::Settings;
pub use error::PipelineError;
pub use model::WordPair;
pub use pipeline::{PipelineOptions, PipelineSummary, StageStatus, execute_pipeline};
