// Phonetic annotation and rhyme-adjacent ordering

use crate::model::WordPair;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

static RE_STRESS_AND_LENGTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ˈˌː]").unwrap());
static RE_PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Converts a word or short phrase into a phonetic transcription.
///
/// `None` means the text could not be transcribed; that is an expected
/// outcome, not an error.
pub trait Transcriber {
    fn transcribe(&self, text: &str) -> Option<String>;
}

impl<F> Transcriber for F
where
    F: Fn(&str) -> Option<String>,
{
    fn transcribe(&self, text: &str) -> Option<String> {
        self(text)
    }
}

/// Used when no dictionary is available: every word is a miss.
pub struct NoTranscriber;

impl Transcriber for NoTranscriber {
    fn transcribe(&self, _text: &str) -> Option<String> {
        None
    }
}

/// Strip stress and length marks, then anything that is not a word character or whitespace.
pub fn clean_transcription(transcription: &str) -> String {
    let without_marks = RE_STRESS_AND_LENGTH.replace_all(transcription, "");
    RE_PUNCTUATION.replace_all(&without_marks, "").into_owned()
}

pub fn reverse_chars(text: &str) -> String {
    text.chars().rev().collect()
}

/// Transcribe short entries, derive the cleaned and reversed forms, and
/// sort by (word count, reversed cleaned transcription). The sort is stable.
pub fn annotate<T: Transcriber + ?Sized>(
    mut pairs: Vec<WordPair>,
    transcriber: &T,
    max_words: usize,
) -> Vec<WordPair> {
    let mut attempted = 0;
    let mut missed = 0;

    for pair in pairs.iter_mut() {
        if pair.word_count > max_words {
            pair.transcription.clear();
        } else {
            attempted += 1;
            match transcriber.transcribe(&pair.source_word) {
                Some(transcription) => pair.transcription = transcription,
                None => {
                    debug!("No transcription for '{}'", pair.source_word);
                    missed += 1;
                    pair.transcription.clear();
                }
            }
        }

        pair.cleaned_transcription = clean_transcription(&pair.transcription);
        pair.reversed_cleaned_transcription = reverse_chars(&pair.cleaned_transcription);
    }

    pairs.sort_by(|a, b| {
        a.word_count
            .cmp(&b.word_count)
            .then_with(|| {
                a.reversed_cleaned_transcription
                    .cmp(&b.reversed_cleaned_transcription)
            })
    });

    info!(
        "Annotated {} rows ({} transcription attempts, {} misses)",
        pairs.len(),
        attempted,
        missed
    );
    pairs
}
