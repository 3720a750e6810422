// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{build_transcriber, load_settings, parse_force, resolve_work_dir};

// Re-export pipeline entry points from glossa-core
pub use glossa_core::{PipelineOptions, PipelineSummary, StageStatus, execute_pipeline};
