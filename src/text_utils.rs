/*!
 * Text helpers shared by the codecs and the fix rules.
 *
 * Besides small string utilities this module holds the default
 * implementations of the pluggable text services the fix engine consumes:
 * - `ReadingSpeed`: the display-duration estimator
 * - `SimpleLineBreaker`: the auto line-break algorithm
 * - `StaticNameList`: names and abbreviations
 */

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Formatting tags understood by the model: `<i>`, `<b>`, `<u>` and `<font ...>`
static HTML_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)</?(?:i|b|u|font)(?:\s[^>]*)?>").expect("Invalid html tag regex")
});

/// SubStation override blocks such as `{\an8}`
static ASS_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\\[^}]*\}").expect("Invalid ass tag regex")
});

static MULTI_SPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r" {2,}").expect("Invalid multi space regex")
});

/// Remove formatting tags and override blocks, keeping the visible text.
pub fn remove_html_tags(text: &str) -> String {
    let without_html = HTML_TAG_REGEX.replace_all(text, "");
    ASS_TAG_REGEX.replace_all(&without_html, "").into_owned()
}

/// Count non-overlapping occurrences of `tag` in `text`.
pub fn count_tag_in_text(text: &str, tag: &str) -> usize {
    if tag.is_empty() {
        return 0;
    }
    text.matches(tag).count()
}

pub fn contains_letter(text: &str) -> bool {
    text.chars().any(char::is_alphabetic)
}

/// True when the text has letters and none of them is lowercase.
pub fn is_all_uppercase(text: &str) -> bool {
    contains_letter(text) && !text.chars().any(char::is_lowercase)
}

pub fn starts_with_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

pub fn starts_with_lowercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_lowercase)
}

/// Collapse runs of spaces to one.
pub fn collapse_spaces(text: &str) -> String {
    MULTI_SPACE_REGEX.replace_all(text, " ").into_owned()
}

/// The character at byte position `index`, if that is a char boundary.
pub fn char_at(text: &str, index: usize) -> Option<char> {
    text.get(index..).and_then(|rest| rest.chars().next())
}

/// The character ending right before byte position `index`.
pub fn char_before(text: &str, index: usize) -> Option<char> {
    text.get(..index).and_then(|head| head.chars().last())
}

/// Uppercase the first character of `text`.
pub fn uppercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Estimates how long a text needs to be on screen
pub trait DurationEstimator {
    fn display_milliseconds(&self, text: &str) -> i64;
}

/// Reading-speed model: characters per second with a floor and a ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadingSpeed {
    pub chars_per_second: f64,
    pub min_ms: i64,
    pub max_ms: i64,
}

impl Default for ReadingSpeed {
    fn default() -> Self {
        Self {
            chars_per_second: 14.7,
            min_ms: 1000,
            max_ms: 8000,
        }
    }
}

impl DurationEstimator for ReadingSpeed {
    fn display_milliseconds(&self, text: &str) -> i64 {
        let visible = remove_html_tags(text).replace('\n', "");
        let chars = visible.chars().count() as f64;
        let cps = if self.chars_per_second > 0.0 { self.chars_per_second } else { 14.7 };
        let ms = (chars * 1000.0 / cps).round() as i64;
        ms.max(self.min_ms).min(self.max_ms.max(self.min_ms))
    }
}

/// Re-flows a subtitle text into display lines
pub trait LineBreaker {
    /// Break `text` into at most two lines no longer than `max_length`, when possible.
    fn auto_break(&self, text: &str, max_length: usize) -> String;

    /// Join the lines of `text` back into one.
    fn unbreak(&self, text: &str) -> String;
}

/// Middle-out line breaker that prefers splitting after sentence punctuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleLineBreaker;

impl SimpleLineBreaker {
    /// Byte offsets of spaces that are not inside a `<...>` or `{...}` tag.
    fn split_candidates(text: &str) -> Vec<usize> {
        let mut candidates = Vec::new();
        let mut depth = 0i32;
        for (index, c) in text.char_indices() {
            match c {
                '<' | '{' => depth += 1,
                '>' | '}' => depth = (depth - 1).max(0),
                ' ' if depth == 0 => candidates.push(index),
                _ => {}
            }
        }
        candidates
    }

    fn is_dialogue(text: &str) -> bool {
        let lines: Vec<&str> = text.split('\n').collect();
        lines.len() == 2
            && lines
                .iter()
                .all(|line| remove_html_tags(line).trim_start().starts_with('-'))
    }
}

impl LineBreaker for SimpleLineBreaker {
    fn auto_break(&self, text: &str, max_length: usize) -> String {
        if Self::is_dialogue(text)
            && text
                .split('\n')
                .all(|line| remove_html_tags(line).chars().count() <= max_length)
        {
            return text.to_string();
        }

        let single = self.unbreak(text);
        let visible_len = remove_html_tags(&single).chars().count();
        if visible_len <= max_length {
            return single;
        }

        let candidates = Self::split_candidates(&single);
        if candidates.is_empty() {
            return single;
        }

        let middle = single.len() / 2;
        let quarter = (single.len() / 4).max(1);
        let best = candidates
            .iter()
            .copied()
            .min_by_key(|&index| {
                let distance = index.abs_diff(middle) as i64;
                let after_punctuation = char_before(&single, index)
                    .is_some_and(|c| matches!(c, '.' | '!' | '?' | ','));
                if after_punctuation && (distance as usize) < quarter {
                    distance - single.len() as i64
                } else {
                    distance
                }
            })
            .unwrap_or(middle);

        debug!("Breaking line at byte {} of {}", best, single.len());
        format!("{}\n{}", &single[..best], &single[best + 1..])
    }

    fn unbreak(&self, text: &str) -> String {
        if Self::is_dialogue(text) {
            return text.to_string();
        }
        let joined = text.replace("\r\n", "\n").replace('\n', " ");
        collapse_spaces(&joined).trim().to_string()
    }
}

/// Looks up personal names and abbreviations
pub trait NameList {
    /// True when `word` is a known name (case sensitive).
    fn is_name(&self, word: &str) -> bool;

    /// True when `word` (including its trailing period, e.g. `"Mr."`) is a
    /// known abbreviation.
    fn is_abbreviation(&self, word: &str) -> bool;
}

const DEFAULT_NAMES: &[&str] = &[
    "Ian", "Ivan", "Ida", "Ingrid", "Irene", "Iris", "Isaac", "Isabel", "Isabella",
    "Isak", "Ivy", "Igor", "Ines", "Inga", "Ike", "Iggy", "Imogen", "Isla", "Italy",
    "Iceland", "Ireland", "Israel", "Iran", "Iraq", "India", "Indiana", "Iowa",
    "Illinois", "Idaho", "Instagram", "McDonald", "McGregor", "MacGyver", "PhD",
    "John", "Sarah", "Anne", "Lars", "Peter", "Maria", "Juan", "Carlos",
];

const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "Mr.", "Mrs.", "Ms.", "Dr.", "Jr.", "Sr.", "St.", "Prof.", "Lt.", "Sgt.",
    "Capt.", "Col.", "Gen.", "Rev.", "Mt.", "vs.", "etc.", "Inc.", "Ltd.", "Co.",
    "Sra.", "Ud.", "Uds.", "hr.", "fr.",
];

/// Name and abbreviation list backed by an embedded default set plus an
/// optional user file (one entry per line, abbreviations end with `.`).
#[derive(Debug, Clone)]
pub struct StaticNameList {
    names: HashSet<String>,
    abbreviations: HashSet<String>,
}

impl Default for StaticNameList {
    fn default() -> Self {
        Self::from_entries(DEFAULT_NAMES.iter().chain(DEFAULT_ABBREVIATIONS).copied())
    }
}

impl StaticNameList {
    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
            abbreviations: HashSet::new(),
        }
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a str>) -> Self {
        let mut list = Self::empty();
        for entry in entries {
            list.add(entry);
        }
        list
    }

    pub fn add(&mut self, entry: &str) {
        let entry = entry.trim();
        if entry.is_empty() || entry.starts_with('#') {
            return;
        }
        if entry.ends_with('.') {
            self.abbreviations.insert(entry.to_string());
        } else {
            self.names.insert(entry.to_string());
        }
    }

    /// Defaults plus every entry of the given file.
    pub fn with_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read name list: {:?}", path))?;
        let mut list = Self::default();
        for line in content.lines() {
            list.add(line);
        }
        debug!(
            "Loaded name list {:?}: {} names, {} abbreviations",
            path,
            list.names.len(),
            list.abbreviations.len()
        );
        Ok(list)
    }
}

impl NameList for StaticNameList {
    fn is_name(&self, word: &str) -> bool {
        self.names.contains(word)
    }

    fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(word)
    }
}
