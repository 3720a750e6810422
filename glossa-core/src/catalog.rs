// Catalog discovery and label normalization

use crate::config::LabelOverride;
use crate::error::{PipelineError, Result};
use glossa_scanner::{CatalogEntry, PageFetcher, parse_catalog};
use tracing::{info, warn};

/// Fetch the vocabulary index and parse it into a catalog.
///
/// The index is the root of everything downstream, so a failed fetch is
/// returned as `PipelineError::Discovery`.
pub async fn discover_catalog<F: PageFetcher>(
    fetcher: &F,
    index_url: &str,
    site_base: &str,
) -> Result<Vec<CatalogEntry>> {
    info!("Discovering vocabulary pages from {}", index_url);

    let body = fetcher
        .fetch_html(index_url)
        .await
        .map_err(PipelineError::Discovery)?;
    let entries = parse_catalog(&body, site_base)?;

    info!("Discovered {} vocabulary pages", entries.len());
    Ok(entries)
}

/// Apply label overrides, then separate trailing parenthetical text.
pub fn normalize_catalog(
    mut entries: Vec<CatalogEntry>,
    overrides: &[LabelOverride],
) -> Vec<CatalogEntry> {
    apply_label_overrides(&mut entries, overrides);

    for entry in entries.iter_mut() {
        entry.section = space_before_parens(&entry.section);
        entry.subsection = space_before_parens(&entry.subsection);
    }

    entries
}

/// Replace subsection labels matched by their discovered text. Returns how many rows changed.
pub fn apply_label_overrides(entries: &mut [CatalogEntry], overrides: &[LabelOverride]) -> usize {
    let mut changed = 0;

    for label in overrides {
        let mut matched = 0;
        for entry in entries.iter_mut() {
            let section_matches = label
                .section
                .as_ref()
                .is_none_or(|section| *section == entry.section);
            if section_matches && entry.subsection == label.subsection {
                entry.subsection = label.replacement.clone();
                matched += 1;
            }
        }

        if matched == 0 {
            warn!(
                "Label override for '{}' matched no catalog entry",
                label.subsection
            );
        }
        changed += matched;
    }

    changed
}

/// Insert a space before every '(' that does not already follow whitespace.
pub fn space_before_parens(label: &str) -> String {
    let mut out = String::with_capacity(label.len() + 4);
    let mut previous: Option<char> = None;

    for c in label.chars() {
        if c == '('
            && let Some(p) = previous
            && !p.is_whitespace()
        {
            out.push(' ');
        }
        out.push(c);
        previous = Some(c);
    }

    out
}
