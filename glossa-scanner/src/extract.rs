use crate::error::{Result, ScanError};
use crate::result::ScrapedPair;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScanError::ParseError(format!("selector '{}': {}", css, e)))
}

/// Every descendant text node, trimmed, joined without a separator
pub(crate) fn stripped_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn trimmed_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Parse a page body and run every extraction pattern over it
pub fn extract_from_html(html: &str, origin: &str) -> Result<Vec<ScrapedPair>> {
    let document = Html::parse_document(html);
    extract_pairs(&document, origin)
}

/// Run all four extraction patterns and concatenate their results.
///
/// `origin` only labels log lines. Nothing is deduplicated here.
pub fn extract_pairs(document: &Html, origin: &str) -> Result<Vec<ScrapedPair>> {
    let mut pairs = popup_pairs(document, origin)?;
    pairs.extend(audio_row_pairs(document)?);
    pairs.extend(audio_list_pairs(document)?);
    pairs.extend(blockquote_pairs(document)?);

    if pairs.is_empty() {
        debug!("No vocabulary markup matched on {}", origin);
    }

    Ok(pairs)
}

/// Pattern A: `div.pop_up` words zipped with `div.trans_popup` translations.
pub fn popup_pairs(document: &Html, origin: &str) -> Result<Vec<ScrapedPair>> {
    let word_selector = selector("div.pop_up")?;
    let translation_selector = selector("div.trans_popup")?;

    let words: Vec<String> = document
        .select(&word_selector)
        .map(trimmed_text)
        .filter(|w| !w.is_empty())
        .collect();
    let translations: Vec<String> = document
        .select(&translation_selector)
        .map(trimmed_text)
        .filter(|t| !t.is_empty())
        .collect();

    Ok(zip_popups(words, translations, origin))
}

/// Positional pairing; an empty translation list pairs every word with "".
pub fn zip_popups(words: Vec<String>, translations: Vec<String>, origin: &str) -> Vec<ScrapedPair> {
    if translations.is_empty() {
        return words
            .into_iter()
            .map(|word| ScrapedPair::new(word, ""))
            .collect();
    }

    if words.len() != translations.len() {
        warn!(
            "Pop-up lists differ in length on {} ({} words, {} translations), pairing by position",
            origin,
            words.len(),
            translations.len()
        );
    }

    words
        .into_iter()
        .zip(translations)
        .map(|(word, translation)| ScrapedPair::new(word, translation))
        .collect()
}

/// Pattern B: `tr.audio` rows with `span.word` / `span.translation` cells.
pub fn audio_row_pairs(document: &Html) -> Result<Vec<ScrapedPair>> {
    row_span_pairs(document, "span.word", "span.translation")
}

/// Pattern C: the same rows as pattern B, read through the list-item spans.
pub fn audio_list_pairs(document: &Html) -> Result<Vec<ScrapedPair>> {
    row_span_pairs(document, "span.list_word", "span.list_translation")
}

fn row_span_pairs(document: &Html, word_css: &str, translation_css: &str) -> Result<Vec<ScrapedPair>> {
    let row_selector = selector("tr.audio")?;
    let cell_selector = selector("td")?;
    let word_selector = selector(word_css)?;
    let translation_selector = selector(translation_css)?;

    let mut pairs = Vec::new();
    for row in document.select(&row_selector) {
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
        if cells.len() < 2 {
            continue;
        }

        let word = cells[0].select(&word_selector).next();
        let translation = cells[1].select(&translation_selector).next();
        if let (Some(word), Some(translation)) = (word, translation) {
            pairs.push(ScrapedPair::new(trimmed_text(word), trimmed_text(translation)));
        }
    }

    Ok(pairs)
}

/// Pattern D: `div.audio` blocks nested in a `blockquote`.
pub fn blockquote_pairs(document: &Html) -> Result<Vec<ScrapedPair>> {
    let block_selector = selector("blockquote div.audio")?;
    let word_selector = selector("span.bq_word")?;
    let translation_selector = selector("span.bq_translation")?;

    let mut pairs = Vec::new();
    for block in document.select(&block_selector) {
        let word = block.select(&word_selector).next();
        let translation = block.select(&translation_selector).next();
        if let (Some(word), Some(translation)) = (word, translation) {
            pairs.push(ScrapedPair::new(trimmed_text(word), trimmed_text(translation)));
        }
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{}</body></html>", body))
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_zip_popups_pairs_by_position() {
        let pairs = zip_popups(strings(&["cat", "dog"]), strings(&["gato", "cachorro"]), "t");
        assert_eq!(
            pairs,
            vec![
                ScrapedPair::new("cat", "gato"),
                ScrapedPair::new("dog", "cachorro")
            ]
        );
    }

    #[test]
    fn test_zip_popups_without_translations_keeps_words() {
        let pairs = zip_popups(strings(&["cat", "dog"]), Vec::new(), "t");
        assert_eq!(
            pairs,
            vec![ScrapedPair::new("cat", ""), ScrapedPair::new("dog", "")]
        );
    }

    #[test]
    fn test_zip_popups_length_mismatch_truncates() {
        let pairs = zip_popups(strings(&["a", "b", "c"]), strings(&["x"]), "t");
        assert_eq!(pairs, vec![ScrapedPair::new("a", "x")]);
    }

    #[test]
    fn test_popup_pairs_skip_blank_entries() {
        let document = doc(
            r#"<div class="pop_up"> cat </div><div class="pop_up">   </div>
               <div class="pop_up">dog</div>
               <div class="trans_popup">gato</div><div class="trans_popup">cachorro</div>"#,
        );

        let pairs = popup_pairs(&document, "t").unwrap();
        assert_eq!(
            pairs,
            vec![
                ScrapedPair::new("cat", "gato"),
                ScrapedPair::new("dog", "cachorro")
            ]
        );
    }

    #[test]
    fn test_audio_rows() {
        let document = doc(
            r#"<table>
               <tr class="audio"><td><span class="word">skull</span></td><td><span class="translation">o crânio</span></td></tr>
               <tr class="audio"><td><span class="word">rib</span></td></tr>
               <tr class="audio"><td><span class="word">spine</span></td><td>no span</td></tr>
               <tr><td><span class="word">ignored</span></td><td><span class="translation">x</span></td></tr>
               </table>"#,
        );

        let pairs = audio_row_pairs(&document).unwrap();
        assert_eq!(pairs, vec![ScrapedPair::new("skull", "o crânio")]);
    }

    #[test]
    fn test_audio_list_uses_its_own_spans() {
        let document = doc(
            r#"<table><tr class="audio">
               <td><span class="list_word">apple</span></td>
               <td><span class="list_translation">a maçã</span></td>
               </tr></table>"#,
        );

        assert!(audio_row_pairs(&document).unwrap().is_empty());
        assert_eq!(
            audio_list_pairs(&document).unwrap(),
            vec![ScrapedPair::new("apple", "a maçã")]
        );
    }

    #[test]
    fn test_blockquote_audio() {
        let document = doc(
            r#"<blockquote>
               <div class="audio"><span class="bq_word">Good morning</span><span class="bq_translation">Bom dia</span></div>
               <div class="audio"><span class="bq_word">lonely</span></div>
               </blockquote>
               <div class="audio"><span class="bq_word">outside</span><span class="bq_translation">fora</span></div>"#,
        );

        let pairs = blockquote_pairs(&document).unwrap();
        assert_eq!(pairs, vec![ScrapedPair::new("Good morning", "Bom dia")]);
    }

    #[test]
    fn test_extract_pairs_concatenates_patterns() {
        let document = doc(
            r#"<div class="pop_up">cat</div><div class="trans_popup">gato</div>
               <blockquote><div class="audio"><span class="bq_word">cat</span><span class="bq_translation">gato</span></div></blockquote>"#,
        );

        let pairs = extract_pairs(&document, "t").unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], pairs[1]);
    }

    #[test]
    fn test_extract_pairs_no_match() {
        let document = doc("<p>Nothing to see</p>");
        assert!(extract_pairs(&document, "t").unwrap().is_empty());
    }

    #[test]
    fn test_stripped_text_joins_without_separator() {
        let document = doc(r#"<a id="x"> Skeleton <span> (O esqueleto) </span></a>"#);
        let anchor = document.select(&selector("a").unwrap()).next().unwrap();
        assert_eq!(stripped_text(anchor), "Skeleton(O esqueleto)");
    }
}
