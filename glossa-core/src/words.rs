// Word-pair normalization

use crate::config::TranslationCorrection;
use crate::model::WordPair;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::{debug, info};

static RE_CAPITALIZED_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Lu}\p{Ll}*").unwrap());

pub struct WordRules<'a> {
    pub corrections: &'a [TranslationCorrection],
    pub split_subsection: &'a str,
}

/// Drop repeated rows, keeping the first occurrence in place.
pub fn dedup_pairs(pairs: Vec<WordPair>) -> Vec<WordPair> {
    let mut seen = HashSet::new();
    pairs
        .into_iter()
        .filter(|pair| seen.insert(pair.clone()))
        .collect()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// "NorthAmerica" -> ["North", "America"]. Text without a capitalized run
/// comes back whole.
pub fn split_capitalized(word: &str) -> Vec<String> {
    let runs: Vec<String> = RE_CAPITALIZED_RUN
        .find_iter(word)
        .map(|m| m.as_str().to_string())
        .collect();

    if runs.is_empty() {
        vec![word.to_string()]
    } else {
        runs
    }
}

pub fn correct_translation(target: &str, corrections: &[TranslationCorrection]) -> Option<String> {
    corrections
        .iter()
        .find(|c| c.from == target)
        .map(|c| c.to.clone())
}

/// Corrections, word counts, capitalized splitting for the configured
/// subsection, then deduplication of the expanded rows.
pub fn normalize_words(pairs: Vec<WordPair>, rules: &WordRules) -> Vec<WordPair> {
    let mut corrected = 0;
    let mut out = Vec::with_capacity(pairs.len());

    for mut pair in pairs {
        if let Some(fixed) = correct_translation(&pair.target_word, rules.corrections) {
            pair.target_word = fixed;
            corrected += 1;
        }

        pair.word_count = word_count(&pair.source_word);

        if pair.subsection != rules.split_subsection {
            out.push(pair);
            continue;
        }

        let tokens = split_capitalized(&pair.source_word);
        if tokens.len() > 1 {
            debug!("Split '{}' into {:?}", pair.source_word, tokens);
        }
        for token in tokens {
            let mut row = pair.clone();
            row.source_word = token;
            out.push(row);
        }
    }

    let out = dedup_pairs(out);
    info!(
        "Normalized {} word pairs ({} translations corrected)",
        out.len(),
        corrected
    );
    out
}
