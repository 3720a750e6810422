// Vocabulary index parsing

use crate::error::{Result, ScanError};
use crate::extract::{selector, stripped_text};
use crate::result::{CatalogEntry, EntryKind};
use scraper::{ElementRef, Html};
use std::collections::HashSet;
use tracing::{debug, warn};
use url::Url;

pub const SITE_BASE: &str = "https://www.languageguide.org";

/// Parse the vocabulary index into a deduplicated catalog, in document order.
///
/// A section that carries `notepad2` anchors is listed through those anchors
/// only; its category links are left out.
pub fn parse_catalog(html: &str, base: &str) -> Result<Vec<CatalogEntry>> {
    let base_url =
        Url::parse(base).map_err(|e| ScanError::InvalidUrl(format!("{}: {}", base, e)))?;

    let document = Html::parse_document(html);
    let section_selector = selector("div.section")?;
    let title_selector = selector("span.title")?;
    let category_selector = selector("div.category-link")?;
    let anchor_selector = selector("a")?;
    let notepad_selector = selector("a.notepad2")?;

    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for section in document.select(&section_selector) {
        let Some(title) = section.select(&title_selector).next() else {
            warn!("Skipping section without a title");
            continue;
        };
        let title = stripped_text(title);

        let notepads: Vec<ElementRef> = section.select(&notepad_selector).collect();

        let candidates: Vec<(EntryKind, ElementRef)> = if notepads.is_empty() {
            section
                .select(&category_selector)
                .filter_map(|link| link.select(&anchor_selector).next())
                .map(|anchor| (EntryKind::CategoryLink, anchor))
                .collect()
        } else {
            debug!(
                "Section '{}' has {} notepad links, ignoring category links",
                title,
                notepads.len()
            );
            notepads
                .into_iter()
                .map(|anchor| (EntryKind::Notepad, anchor))
                .collect()
        };

        for (kind, anchor) in candidates {
            let Some(href) = anchor.value().attr("href") else {
                debug!("Anchor without href in section '{}'", title);
                continue;
            };
            let Some(url) = resolve_href(&base_url, href) else {
                warn!("Could not resolve link '{}' in section '{}'", href, title);
                continue;
            };

            let entry = CatalogEntry::new(kind, &title, &stripped_text(anchor), &url);
            if seen.insert(entry.clone()) {
                entries.push(entry);
            }
        }
    }

    Ok(entries)
}

fn resolve_href(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with("javascript:") || href.starts_with('#') {
        return None;
    }

    base.join(href).ok().map(|u| u.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(href: &str, label: &str) -> String {
        format!(r#"<div class="category-link"><a href="{}">{}</a></div>"#, href, label)
    }

    #[test]
    fn test_category_links_in_document_order() {
        let html = format!(
            r#"<html><body>
            <div class="section"><span class="title">Body</span>{}{}</div>
            <div class="section"><span class="title">Food</span>{}</div>
            </body></html>"#,
            category("/en/body/skeleton/", "Skeleton<span>(O esqueleto)</span>"),
            category("/en/body/organs/", "Organs"),
            category("/en/food/fruit/", "Fruit"),
        );

        let entries = parse_catalog(&html, SITE_BASE).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].kind, EntryKind::CategoryLink);
        assert_eq!(entries[0].section, "Body");
        assert_eq!(entries[0].subsection, "Skeleton(O esqueleto)");
        assert_eq!(
            entries[0].url,
            "https://www.languageguide.org/en/body/skeleton/"
        );
        assert_eq!(entries[1].subsection, "Organs");
        assert_eq!(entries[2].section, "Food");
    }

    #[test]
    fn test_notepad_anchors_replace_category_links() {
        let mut html = String::from(r#"<div class="section"><span class="title">Places</span>"#);
        for i in 0..5 {
            html.push_str(&category(&format!("/en/places/{}/", i), &format!("Place {}", i)));
        }
        html.push_str(r#"<a class="notepad2" href="/en/places/continents/">Continents</a>"#);
        html.push_str(r#"<a class="notepad2" href="/en/places/europe/">Europe</a>"#);
        html.push_str("</div>");

        let entries = parse_catalog(&html, SITE_BASE).unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.kind == EntryKind::Notepad));
        assert_eq!(entries[0].subsection, "Continents");
        assert_eq!(entries[1].subsection, "Europe");
    }

    #[test]
    fn test_duplicates_are_collapsed() {
        let html = format!(
            r#"<div class="section"><span class="title">Body</span>{}{}</div>"#,
            category("/en/body/skeleton/", "Skeleton"),
            category("/en/body/skeleton/", "Skeleton"),
        );

        let entries = parse_catalog(&html, SITE_BASE).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let html = format!(
            r#"<div class="section"><span class="title">Body</span>{}{}</div>"#,
            category("/en/b/", "B"),
            category("/en/a/", "A"),
        );

        let first = parse_catalog(&html, SITE_BASE).unwrap();
        let second = parse_catalog(&html, SITE_BASE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_absolute_href_is_kept() {
        let html = format!(
            r#"<div class="section"><span class="title">X</span>{}</div>"#,
            category("https://other.example/page", "Other"),
        );

        let entries = parse_catalog(&html, SITE_BASE).unwrap();
        assert_eq!(entries[0].url, "https://other.example/page");
    }

    #[test]
    fn test_section_without_title_is_skipped() {
        let html = format!(r#"<div class="section">{}</div>"#, category("/en/a/", "A"));

        let entries = parse_catalog(&html, SITE_BASE).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let html = r#"<div class="section"><span class="title">X</span>
            <div class="category-link"><a>No link</a></div></div>"#;

        let entries = parse_catalog(html, SITE_BASE).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_invalid_base_is_error() {
        let result = parse_catalog("<html></html>", "not a base");
        assert!(matches!(result, Err(ScanError::InvalidUrl(_))));
    }
}
