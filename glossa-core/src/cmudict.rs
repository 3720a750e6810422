// ARPAbet to IPA transcription backed by the CMU Pronouncing Dictionary

use crate::error::Result;
use crate::phonetic::Transcriber;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub struct CmuDictionary {
    entries: HashMap<String, Vec<String>>,
}

impl CmuDictionary {
    /// Reads UTF-8 files as is. Anything else is taken as Latin-1, the
    /// encoding of the `cmudict-0.7b` distribution.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = decode_dictionary(fs::read(path)?);
        let dictionary = Self::parse(&text);
        info!(
            "Loaded {} pronunciations from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Accepts both `word  W ER1 D` and `word(2) W ER1 D` lines. The first
    /// pronunciation of a word wins; `;;;` lines are comments.
    pub fn parse(text: &str) -> Self {
        let mut entries = HashMap::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }

            let mut parts = line.split_whitespace();
            let Some(head) = parts.next() else {
                continue;
            };
            if head.ends_with(')') && head.contains('(') {
                continue;
            }

            // cmudict.dict appends "# comment" to some entries
            let phonemes: Vec<String> = parts
                .take_while(|p| !p.starts_with('#'))
                .map(|p| p.to_string())
                .collect();
            if phonemes.is_empty() {
                continue;
            }

            entries.entry(head.to_lowercase()).or_insert(phonemes);
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, word: &str) -> Option<String> {
        self.entries.get(word).map(|phonemes| arpabet_to_ipa(phonemes))
    }

    fn transcribe_token(&self, token: &str) -> Option<String> {
        let word = token
            .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
            .trim_matches('\'')
            .to_lowercase();
        if word.is_empty() {
            return None;
        }

        if let Some(ipa) = self.lookup(&word) {
            return Some(ipa);
        }

        if word.contains('-') {
            return word
                .split('-')
                .filter(|piece| !piece.is_empty())
                .map(|piece| self.lookup(piece))
                .collect::<Option<Vec<String>>>()
                .map(|pieces| pieces.concat());
        }

        None
    }
}

impl Transcriber for CmuDictionary {
    fn transcribe(&self, text: &str) -> Option<String> {
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|token| self.transcribe_token(token))
            .collect::<Option<Vec<String>>>()?;

        if tokens.is_empty() {
            None
        } else {
            Some(tokens.join(" "))
        }
    }
}

fn decode_dictionary(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!("Dictionary is not UTF-8, decoding as Latin-1");
            e.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

// Consonant clusters that may open an English syllable
const ONSET_CLUSTERS: &[&[&str]] = &[
    &["P", "R"], &["P", "L"], &["P", "Y"],
    &["B", "R"], &["B", "L"], &["B", "Y"],
    &["T", "R"], &["T", "W"],
    &["D", "R"], &["D", "W"],
    &["K", "R"], &["K", "L"], &["K", "W"], &["K", "Y"],
    &["G", "R"], &["G", "L"], &["G", "W"],
    &["F", "R"], &["F", "L"], &["F", "Y"],
    &["V", "Y"], &["M", "Y"], &["HH", "Y"],
    &["TH", "R"], &["TH", "W"], &["SH", "R"],
    &["S", "P"], &["S", "T"], &["S", "K"], &["S", "M"], &["S", "N"], &["S", "L"], &["S", "W"],
    &["S", "P", "R"], &["S", "P", "L"], &["S", "P", "Y"],
    &["S", "T", "R"], &["S", "K", "R"], &["S", "K", "W"], &["S", "K", "Y"],
];

fn is_onset(consonants: &[&str]) -> bool {
    match consonants {
        [] => true,
        [single] => *single != "NG",
        cluster => ONSET_CLUSTERS.contains(&cluster),
    }
}

/// Convert a phoneme sequence such as `["K", "AE1", "T"]` into "ˈkæt".
///
/// Stress marks open the stressed syllable: every consonant before the
/// first vowel, otherwise the longest valid onset after the previous vowel.
pub fn arpabet_to_ipa(phonemes: &[String]) -> String {
    let split: Vec<(&str, Option<char>)> = phonemes.iter().map(|p| split_stress(p)).collect();

    let mut marks: Vec<Option<char>> = vec![None; split.len()];
    let mut previous_vowel: Option<usize> = None;
    for (index, (_, stress)) in split.iter().enumerate() {
        let Some(stress) = *stress else {
            continue;
        };

        let onset_start = match previous_vowel {
            None => 0,
            Some(vowel) => {
                let consonants: Vec<&str> = split[vowel + 1..index].iter().map(|(b, _)| *b).collect();
                let kept = (0..=consonants.len())
                    .rev()
                    .find(|&len| is_onset(&consonants[consonants.len() - len..]))
                    .unwrap_or(0);
                index - kept
            }
        };

        match stress {
            '1' => marks[onset_start] = Some('ˈ'),
            '2' => marks[onset_start] = Some('ˌ'),
            _ => {}
        }
        previous_vowel = Some(index);
    }

    let mut out = String::new();
    for ((base, stress), mark) in split.iter().zip(marks) {
        if let Some(mark) = mark {
            out.push(mark);
        }
        out.push_str(ipa_symbol(base, *stress));
    }

    out
}

fn split_stress(phoneme: &str) -> (&str, Option<char>) {
    match phoneme.chars().last() {
        Some(c) if c.is_ascii_digit() => (&phoneme[..phoneme.len() - 1], Some(c)),
        _ => (phoneme, None),
    }
}

fn ipa_symbol(base: &str, stress: Option<char>) -> &'static str {
    match base {
        "AA" => "ɑ",
        "AE" => "æ",
        "AH" => match stress {
            Some('1') | Some('2') => "ʌ",
            _ => "ə",
        },
        "AO" => "ɔ",
        "AW" => "aʊ",
        "AY" => "aɪ",
        "B" => "b",
        "CH" => "ʧ",
        "D" => "d",
        "DH" => "ð",
        "EH" => "ɛ",
        "ER" => "ər",
        "EY" => "eɪ",
        "F" => "f",
        "G" => "g",
        "HH" => "h",
        "IH" => "ɪ",
        "IY" => "i",
        "JH" => "ʤ",
        "K" => "k",
        "L" => "l",
        "M" => "m",
        "N" => "n",
        "NG" => "ŋ",
        "OW" => "oʊ",
        "OY" => "ɔɪ",
        "P" => "p",
        "R" => "r",
        "S" => "s",
        "SH" => "ʃ",
        "T" => "t",
        "TH" => "θ",
        "UH" => "ʊ",
        "UW" => "u",
        "V" => "v",
        "W" => "w",
        "Y" => "j",
        "Z" => "z",
        "ZH" => "ʒ",
        _ => "",
    }
}
