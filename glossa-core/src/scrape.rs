use crate::model::WordPair;
use crate::words::dedup_pairs;
use glossa_scanner::{CatalogEntry, PageFetcher, extract_from_html};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

/// Everything collected from one pass over the catalog
#[derive(Debug, Default)]
pub struct ScrapeOutcome {
    pub pairs: Vec<WordPair>,
    pub failed_urls: Vec<String>,
}

/// Scrape the pairs of a single fetched page.
pub fn scrape_page(body: &str, entry: &CatalogEntry) -> Vec<WordPair> {
    match extract_from_html(body, &entry.url) {
        Ok(pairs) => pairs
            .into_iter()
            .map(|pair| WordPair::from_scraped(&entry.section, &entry.subsection, pair))
            .collect(),
        Err(e) => {
            warn!("Extraction failed for {}: {}", entry.url, e);
            Vec::new()
        }
    }
}

/// Fetch every catalog page in order, one at a time, and collect their pairs.
///
/// A page that cannot be fetched is recorded in `failed_urls` and skipped.
/// The merged rows are deduplicated before returning.
pub async fn scrape_catalog<F: PageFetcher>(
    catalog: &[CatalogEntry],
    fetcher: &F,
    show_progress: bool,
) -> ScrapeOutcome {
    let progress_bar = if show_progress {
        let pb = ProgressBar::new(catalog.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Some(pb)
    } else {
        None
    };

    let mut outcome = ScrapeOutcome::default();

    for entry in catalog {
        if let Some(ref pb) = progress_bar {
            pb.set_message(format!("{} / {}", entry.section, entry.subsection));
        }
        debug!("Scraping {} / {} ({})", entry.section, entry.subsection, entry.url);

        match fetcher.fetch_html(&entry.url).await {
            Ok(body) => {
                let pairs = scrape_page(&body, entry);
                debug!("{} pairs from {}", pairs.len(), entry.url);
                outcome.pairs.extend(pairs);
            }
            Err(e) => {
                warn!("Skipping {}: {}", entry.url, e);
                outcome.failed_urls.push(entry.url.clone());
            }
        }

        if let Some(ref pb) = progress_bar {
            pb.inc(1);
        }
    }

    if let Some(ref pb) = progress_bar {
        pb.finish_with_message(format!("Scraped {} pages", catalog.len()));
    }

    let scraped = outcome.pairs.len();
    outcome.pairs = dedup_pairs(outcome.pairs);
    info!(
        "Scraped {} rows ({} after deduplication), {} pages failed",
        scraped,
        outcome.pairs.len(),
        outcome.failed_urls.len()
    );

    outcome
}
