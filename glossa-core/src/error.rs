use glossa_scanner::ScanError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Vocabulary index unavailable: {0}")]
    Discovery(ScanError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
