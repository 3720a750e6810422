pub mod catalog;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod result;

pub use catalog::parse_catalog;
pub use error::ScanError;
pub use extract::{extract_from_html, extract_pairs};
pub use fetch::{HttpFetcher, PageFetcher};
pub use result::{CatalogEntry, EntryKind, ScrapedPair};
