/*!
 * OCR error correction via a whole-word replace list.
 *
 * The list maps misrecognized words to their correct form. Entries match
 * whole words only; an entry may contain apostrophes and other
 * punctuation.
 */

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};
use regex::Regex;

use crate::subtitle::Subtitle;

use super::{FixContext, FixRule};

/// Corrects OCR mistakes in one paragraph
pub trait OcrFixer {
    /// Return the corrected `text` of the paragraph at `index`;
    /// `previous_line` is the already corrected text of the paragraph before.
    fn fix(&self, text: &str, index: usize, previous_line: &str) -> String;
}

const DEFAULT_REPLACEMENTS: &[(&str, &str)] = &[
    ("D0n't", "Don't"),
    ("l'm", "I'm"),
    ("l'll", "I'll"),
    ("l've", "I've"),
    ("l'd", "I'd"),
];

// @struct: Whole-word replacement compiled to regexes
#[derive(Debug, Clone)]
struct Replacement {
    pattern: Regex,
    to: String,
}

/// Replace-list based `OcrFixer`
#[derive(Debug, Clone)]
pub struct ReplaceListOcrFixer {
    replacements: Vec<Replacement>,
}

impl Default for ReplaceListOcrFixer {
    fn default() -> Self {
        let mut fixer = Self::empty();
        for (from, to) in DEFAULT_REPLACEMENTS {
            fixer.add(from, to);
        }
        fixer
    }
}

impl ReplaceListOcrFixer {
    pub fn empty() -> Self {
        Self { replacements: Vec::new() }
    }

    /// Add a whole-word replacement; entries that do not compile are skipped.
    pub fn add(&mut self, from: &str, to: &str) {
        if from.is_empty() {
            return;
        }
        let word_char = |c: char| c.is_alphanumeric() || c == '_';
        let starts = if from.chars().next().is_some_and(word_char) { r"\b" } else { "" };
        let ends = if from.chars().last().is_some_and(word_char) { r"\b" } else { "" };
        match Regex::new(&format!("{}{}{}", starts, regex::escape(from), ends)) {
            Ok(pattern) => self.replacements.push(Replacement {
                pattern,
                to: to.to_string(),
            }),
            Err(e) => warn!("Skipping OCR replacement '{}': {}", from, e),
        }
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Defaults plus the `from=to` lines of a file; `#` starts a comment.
    pub fn with_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read OCR replace list: {:?}", path))?;

        let mut fixer = Self::default();
        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.split_once('=') {
                Some((from, to)) => fixer.add(from.trim(), to.trim()),
                None => warn!("Ignoring OCR replace list line without '=': {}", line),
            }
        }
        debug!("Loaded OCR replace list {:?}: {} entries", path, fixer.len());
        Ok(fixer)
    }
}

impl OcrFixer for ReplaceListOcrFixer {
    fn fix(&self, text: &str, _index: usize, _previous_line: &str) -> String {
        self.replacements.iter().fold(text.to_string(), |text, replacement| {
            replacement
                .pattern
                .replace_all(&text, regex::NoExpand(&replacement.to))
                .into_owned()
        })
    }
}

pub fn fix_ocr_errors_via_replace_list(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    let rule = FixRule::OcrReplaceList;
    let mut last_line = String::new();
    let mut fixed = 0;

    for index in 0..subtitle.len() {
        let text = ctx.collaborators.ocr.fix(&subtitle.paragraphs[index].text, index, &last_line);
        if text != subtitle.paragraphs[index].text && ctx.allow(index + 1, rule) {
            let before = std::mem::replace(&mut subtitle.paragraphs[index].text, text.clone());
            ctx.record(index + 1, rule, before, text.clone());
            fixed += 1;
        }
        last_line = text;
    }

    if fixed > 0 {
        ctx.status(rule, &format!("{} common OCR errors fixed", fixed));
    }
}
