/*!
 * Rule engine for common subtitle errors.
 *
 * Every rule is a variant of the closed `FixRule` enum. A rule walks the
 * whole subtitle, asks the `FixContext` whether a change on a given line may
 * be committed, edits paragraphs in place and emits one `FixRecord` per
 * committed edit.
 *
 * Rules are grouped by concern:
 * - `timing`: empty lines, overlaps, too short and too long durations
 * - `italics`: unbalanced `<i>` tags
 * - `spacing`: unneeded and missing spaces
 * - `punctuation`: periods, quotes, dashes, brackets and other symbols
 * - `line_breaks`: long lines, short lines, paragraphs with 3+ lines
 * - `casing`: uppercase/lowercase repairs
 * - `ocr`: replace-list corrections
 * - `danish` and `spanish`: language specific rules
 *
 * `engine::FixSession` drives the rules in catalog order, with the empty
 * line rule always last.
 */

pub mod casing;
pub mod danish;
mod danish_phrases;
pub mod engine;
pub mod italics;
pub mod line_breaks;
pub mod ocr;
pub mod punctuation;
pub mod spacing;
pub mod spanish;
pub mod timing;

use std::fmt;

use anyhow::Result;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::app_config::{Config, FixSettings};
use crate::errors::FixError;
use crate::subtitle::Subtitle;
use crate::text_utils::{DurationEstimator, LineBreaker, NameList, SimpleLineBreaker, StaticNameList};

pub use engine::{FixSession, FixSummary, fix_all};
pub use ocr::{OcrFixer, ReplaceListOcrFixer};

/// Every fix rule, in catalog (and execution) order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FixRule {
    EmptyLines,
    OverlappingDisplayTime,
    TooShortDisplayTime,
    TooLongDisplayTime,
    InvalidItalicTags,
    UnneededSpaces,
    UnneededPeriods,
    MissingSpaces,
    BreakLongLines,
    MergeShortLines,
    UppercaseIInsideLowercaseWord,
    DoubleApostropheToQuote,
    MusicNotation,
    AddPeriodAfterParagraph,
    StartWithUppercaseAfterParagraph,
    StartWithUppercaseAfterPeriodInsideParagraph,
    AddMissingQuotes,
    FixHyphens,
    Fix3PlusLines,
    DoubleDash,
    DoubleGreaterThan,
    EllipsesStart,
    MissingOpenBracket,
    AloneLowercaseIToUppercaseIEnglish,
    OcrReplaceList,
    DanishLetterI,
    SpanishInvertedMarks,
}

impl FixRule {
    pub const ALL: [FixRule; 27] = [
        FixRule::EmptyLines,
        FixRule::OverlappingDisplayTime,
        FixRule::TooShortDisplayTime,
        FixRule::TooLongDisplayTime,
        FixRule::InvalidItalicTags,
        FixRule::UnneededSpaces,
        FixRule::UnneededPeriods,
        FixRule::MissingSpaces,
        FixRule::BreakLongLines,
        FixRule::MergeShortLines,
        FixRule::UppercaseIInsideLowercaseWord,
        FixRule::DoubleApostropheToQuote,
        FixRule::MusicNotation,
        FixRule::AddPeriodAfterParagraph,
        FixRule::StartWithUppercaseAfterParagraph,
        FixRule::StartWithUppercaseAfterPeriodInsideParagraph,
        FixRule::AddMissingQuotes,
        FixRule::FixHyphens,
        FixRule::Fix3PlusLines,
        FixRule::DoubleDash,
        FixRule::DoubleGreaterThan,
        FixRule::EllipsesStart,
        FixRule::MissingOpenBracket,
        FixRule::AloneLowercaseIToUppercaseIEnglish,
        FixRule::OcrReplaceList,
        FixRule::DanishLetterI,
        FixRule::SpanishInvertedMarks,
    ];

    /// Human readable rule name, also used as the log sender.
    pub fn name(self) -> &'static str {
        match self {
            FixRule::EmptyLines => "Remove empty lines/unused line breaks",
            FixRule::OverlappingDisplayTime => "Fix overlapping display times",
            FixRule::TooShortDisplayTime => "Fix short display times",
            FixRule::TooLongDisplayTime => "Fix long display times",
            FixRule::InvalidItalicTags => "Fix invalid italic tags",
            FixRule::UnneededSpaces => "Remove unneeded spaces",
            FixRule::UnneededPeriods => "Remove unneeded periods",
            FixRule::MissingSpaces => "Fix missing spaces",
            FixRule::BreakLongLines => "Break long lines",
            FixRule::MergeShortLines => "Remove line breaks in short texts",
            FixRule::UppercaseIInsideLowercaseWord => "Fix uppercase 'i' inside lowercase words",
            FixRule::DoubleApostropheToQuote => "Fix double apostrophe characters ('') to a single quote (\")",
            FixRule::MusicNotation => "Replace music symbols",
            FixRule::AddPeriodAfterParagraph => "Add period after lines where next line starts with uppercase letter",
            FixRule::StartWithUppercaseAfterParagraph => "Start with uppercase letter after paragraph",
            FixRule::StartWithUppercaseAfterPeriodInsideParagraph => "Start with uppercase letter after period inside paragraph",
            FixRule::AddMissingQuotes => "Add missing quotes (\")",
            FixRule::FixHyphens => "Fix hyphens (remove first hyphen of a one-speaker line)",
            FixRule::Fix3PlusLines => "Fix subtitles with more than two lines",
            FixRule::DoubleDash => "Fix double dash",
            FixRule::DoubleGreaterThan => "Remove >>",
            FixRule::EllipsesStart => "Remove leading ...",
            FixRule::MissingOpenBracket => "Fix missing [",
            FixRule::AloneLowercaseIToUppercaseIEnglish => "Fix alone lowercase 'i' to 'I' (English)",
            FixRule::OcrReplaceList => "Fix common OCR errors (using OCR replace list)",
            FixRule::DanishLetterI => "Fix Danish letter 'i'",
            FixRule::SpanishInvertedMarks => "Fix Spanish inverted question and exclamation marks",
        }
    }

    /// Short key used on the command line and in logs.
    pub fn key(self) -> &'static str {
        match self {
            FixRule::EmptyLines => "empty-lines",
            FixRule::OverlappingDisplayTime => "overlapping-display-time",
            FixRule::TooShortDisplayTime => "too-short-display-time",
            FixRule::TooLongDisplayTime => "too-long-display-time",
            FixRule::InvalidItalicTags => "invalid-italic-tags",
            FixRule::UnneededSpaces => "unneeded-spaces",
            FixRule::UnneededPeriods => "unneeded-periods",
            FixRule::MissingSpaces => "missing-spaces",
            FixRule::BreakLongLines => "break-long-lines",
            FixRule::MergeShortLines => "merge-short-lines",
            FixRule::UppercaseIInsideLowercaseWord => "uppercase-i-inside-lowercase-word",
            FixRule::DoubleApostropheToQuote => "double-apostrophe-to-quote",
            FixRule::MusicNotation => "music-notation",
            FixRule::AddPeriodAfterParagraph => "add-period-after-paragraph",
            FixRule::StartWithUppercaseAfterParagraph => "start-with-uppercase-after-paragraph",
            FixRule::StartWithUppercaseAfterPeriodInsideParagraph => {
                "start-with-uppercase-after-period-inside-paragraph"
            }
            FixRule::AddMissingQuotes => "add-missing-quotes",
            FixRule::FixHyphens => "fix-hyphens",
            FixRule::Fix3PlusLines => "fix-3plus-lines",
            FixRule::DoubleDash => "double-dash",
            FixRule::DoubleGreaterThan => "double-greater-than",
            FixRule::EllipsesStart => "ellipses-start",
            FixRule::MissingOpenBracket => "missing-open-bracket",
            FixRule::AloneLowercaseIToUppercaseIEnglish => "alone-lowercase-i-english",
            FixRule::OcrReplaceList => "ocr-replace-list",
            FixRule::DanishLetterI => "danish-letter-i",
            FixRule::SpanishInvertedMarks => "spanish-inverted-marks",
        }
    }

    pub fn example(self) -> &'static str {
        match self {
            FixRule::InvalidItalicTags => "<i>What do I care.<i> -> <i>What do I care.</i>",
            FixRule::UnneededSpaces => "What do  i care. -> What do i care.",
            FixRule::UnneededPeriods => "What do i care!. -> What do i care!",
            FixRule::MissingSpaces => "What do i care.I do. -> What do i care. I do.",
            FixRule::UppercaseIInsideLowercaseWord => "The Iight is on. -> The light is on.",
            FixRule::DoubleApostropheToQuote => "''Go!'' -> \"Go!\"",
            FixRule::MusicNotation => "â™ª sweet dreams â™ª -> ♪ sweet dreams ♪",
            FixRule::AddPeriodAfterParagraph => "Hey you -> Hey you.",
            FixRule::StartWithUppercaseAfterParagraph => "Bye. | see you -> Bye. | See you",
            FixRule::StartWithUppercaseAfterPeriodInsideParagraph => "Yes. no way. -> Yes. No way.",
            FixRule::AddMissingQuotes => "\"How are you? -> \"How are you?\"",
            FixRule::FixHyphens => "- Hello there! -> Hello there!",
            FixRule::DoubleDash => "Whoa-- um yeah! -> Whoa... um yeah!",
            FixRule::DoubleGreaterThan => ">> Robert: Sup dude! -> Robert: Sup dude!",
            FixRule::EllipsesStart => "...but never could. -> but never could.",
            FixRule::MissingOpenBracket => "clanks] Look out! -> [clanks] Look out!",
            FixRule::AloneLowercaseIToUppercaseIEnglish => "What do i care. -> What do I care.",
            FixRule::OcrReplaceList => "D0n't -> Don't",
            FixRule::DanishLetterI => "Jeg synes i er søde. -> Jeg synes I er søde.",
            FixRule::SpanishInvertedMarks => "Hablas bien castellano? -> ¿Hablas bien castellano?",
            _ => "",
        }
    }

    /// Every rule is on by default except the English-only lowercase "i" rule.
    pub fn default_enabled(self) -> bool {
        !matches!(self, FixRule::AloneLowercaseIToUppercaseIEnglish)
    }

    /// Rules only offered for a matching language (or short files).
    pub fn language(self) -> Option<&'static str> {
        match self {
            FixRule::DanishLetterI => Some("da"),
            FixRule::SpanishInvertedMarks => Some("es"),
            _ => None,
        }
    }

    /// Parse a rule from its key (`empty-lines`) or its catalog index.
    pub fn from_key(key: &str) -> Result<Self, FixError> {
        let key = key.trim();
        if let Ok(index) = key.parse::<usize>() {
            return Self::ALL
                .get(index)
                .copied()
                .ok_or_else(|| FixError::UnknownRule(key.to_string()));
        }
        Self::ALL
            .iter()
            .copied()
            .find(|rule| rule.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| FixError::UnknownRule(key.to_string()))
    }

    /// Run this rule over the whole subtitle.
    pub fn apply(self, subtitle: &mut Subtitle, ctx: &mut FixContext) {
        match self {
            FixRule::EmptyLines => timing::fix_empty_lines(subtitle, ctx),
            FixRule::OverlappingDisplayTime => timing::fix_overlapping_display_times(subtitle, ctx),
            FixRule::TooShortDisplayTime => timing::fix_short_display_times(subtitle, ctx),
            FixRule::TooLongDisplayTime => timing::fix_long_display_times(subtitle, ctx),
            FixRule::InvalidItalicTags => italics::fix_invalid_italic_tags(subtitle, ctx),
            FixRule::UnneededSpaces => spacing::fix_unneeded_spaces(subtitle, ctx),
            FixRule::UnneededPeriods => punctuation::fix_unneeded_periods(subtitle, ctx),
            FixRule::MissingSpaces => spacing::fix_missing_spaces(subtitle, ctx),
            FixRule::BreakLongLines => line_breaks::fix_long_lines(subtitle, ctx),
            FixRule::MergeShortLines => line_breaks::fix_short_lines(subtitle, ctx),
            FixRule::UppercaseIInsideLowercaseWord => casing::fix_uppercase_i_inside_words(subtitle, ctx),
            FixRule::DoubleApostropheToQuote => punctuation::fix_double_apostrophes(subtitle, ctx),
            FixRule::MusicNotation => punctuation::fix_music_notation(subtitle, ctx),
            FixRule::AddPeriodAfterParagraph => punctuation::fix_missing_periods_at_end_of_line(subtitle, ctx),
            FixRule::StartWithUppercaseAfterParagraph => casing::fix_start_with_uppercase_after_paragraph(subtitle, ctx),
            FixRule::StartWithUppercaseAfterPeriodInsideParagraph => {
                casing::fix_start_with_uppercase_after_period_inside_paragraph(subtitle, ctx)
            }
            FixRule::AddMissingQuotes => punctuation::add_missing_quotes(subtitle, ctx),
            FixRule::FixHyphens => punctuation::fix_hyphens(subtitle, ctx),
            FixRule::Fix3PlusLines => line_breaks::fix_3plus_lines(subtitle, ctx),
            FixRule::DoubleDash => punctuation::fix_double_dash(subtitle, ctx),
            FixRule::DoubleGreaterThan => punctuation::fix_double_greater_than(subtitle, ctx),
            FixRule::EllipsesStart => punctuation::fix_ellipses_start(subtitle, ctx),
            FixRule::MissingOpenBracket => punctuation::fix_missing_open_bracket(subtitle, ctx),
            FixRule::AloneLowercaseIToUppercaseIEnglish => casing::fix_alone_lowercase_i(subtitle, ctx),
            FixRule::OcrReplaceList => ocr::fix_ocr_errors_via_replace_list(subtitle, ctx),
            FixRule::DanishLetterI => danish::fix_danish_letter_i(subtitle, ctx),
            FixRule::SpanishInvertedMarks => spanish::fix_spanish_inverted_marks(subtitle, ctx),
        }
    }
}

impl fmt::Display for FixRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// @struct: One catalog entry as offered to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixItem {
    pub rule: FixRule,
    pub name: &'static str,
    pub example: &'static str,
    pub enabled: bool,
}

/// The rules offered for a subtitle: every general rule plus the language
/// specific ones whose language matches, or all of them for short files.
pub fn catalog(settings: &FixSettings, language: &str, paragraph_count: usize) -> Vec<FixItem> {
    FixRule::ALL
        .iter()
        .copied()
        .filter(|rule| match rule.language() {
            Some(code) => code == language || paragraph_count < settings.language_specific_rule_paragraph_limit,
            None => true,
        })
        .map(|rule| FixItem {
            rule,
            name: rule.name(),
            example: rule.example(),
            enabled: settings.is_enabled(rule),
        })
        .collect()
}

/// Whether the context only lists proposals or commits the selected ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixMode {
    ListOnly,
    Apply,
}

// @struct: Identity of a proposed change, stable across re-listing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixKey {
    pub line: usize,
    pub rule: FixRule,
    pub before: String,
}

// @struct: One applied or proposed change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixRecord {
    // @field: 1-based paragraph position at the time the rule ran
    pub line: usize,
    pub rule: FixRule,
    pub before: String,
    pub after: String,
    // @field: Whether the change is accepted for the next apply
    pub selected: bool,
}

impl FixRecord {
    pub fn key(&self) -> FixKey {
        FixKey {
            line: self.line,
            rule: self.rule,
            before: self.before.clone(),
        }
    }
}

/// Messages emitted while rules run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixLog {
    pub entries: Vec<String>,
    pub important: usize,
}

impl FixLog {
    fn push(&mut self, mode: FixMode, sender: &str, message: &str, important: bool) {
        let entry = match mode {
            FixMode::ListOnly => format!(" +  {}: {}", sender, message),
            FixMode::Apply => format!("OK -  {}: {}", sender, message),
        };
        self.entries.push(entry);
        if important {
            self.important += 1;
        }
    }

    pub fn text(&self) -> String {
        self.entries.join("\n")
    }
}

/// Text services the rules consume
pub struct Collaborators {
    pub line_breaker: Box<dyn LineBreaker>,
    pub names: Box<dyn NameList>,
    pub ocr: Box<dyn OcrFixer>,
    pub estimator: Box<dyn DurationEstimator>,
}

impl Collaborators {
    /// Built-in defaults; the estimator follows the settings' reading speed.
    pub fn from_settings(settings: &FixSettings) -> Self {
        Self {
            line_breaker: Box::new(SimpleLineBreaker),
            names: Box::new(StaticNameList::default()),
            ocr: Box::new(ReplaceListOcrFixer::default()),
            estimator: Box::new(settings.reading_speed()),
        }
    }

    /// Defaults extended with the name and OCR lists the config points to.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut collaborators = Self::from_settings(&config.fixes);
        if let Some(path) = &config.names_file {
            collaborators.names = Box::new(StaticNameList::with_file(path)?);
        }
        if let Some(path) = &config.ocr_replace_file {
            collaborators.ocr = Box::new(ReplaceListOcrFixer::with_file(path)?);
        }
        Ok(collaborators)
    }
}

/// Per-run state handed to every rule
pub struct FixContext<'a> {
    pub mode: FixMode,
    pub settings: &'a FixSettings,
    // @field: Resolved ISO 639-1 language of the subtitle
    pub language: &'a str,
    pub collaborators: &'a Collaborators,
    // @field: Records of the previous listing, consulted in apply mode
    selections: &'a [FixRecord],
    pub records: Vec<FixRecord>,
    pub log: FixLog,
    pub total_fixes: usize,
    pub total_errors: usize,
}

impl<'a> FixContext<'a> {
    pub fn new(
        mode: FixMode,
        settings: &'a FixSettings,
        language: &'a str,
        collaborators: &'a Collaborators,
        selections: &'a [FixRecord],
    ) -> Self {
        Self {
            mode,
            settings,
            language,
            collaborators,
            selections,
            records: Vec::new(),
            log: FixLog::default(),
            total_fixes: 0,
            total_errors: 0,
        }
    }

    /// May a change of `rule` on 1-based `line` be committed?
    ///
    /// Listing allows everything. Applying follows the first listed record
    /// for the same line and rule; lines without a listed record are left alone.
    pub fn allow(&self, line: usize, rule: FixRule) -> bool {
        match self.mode {
            FixMode::ListOnly => true,
            FixMode::Apply => self
                .selections
                .iter()
                .find(|record| record.line == line && record.rule == rule)
                .is_some_and(|record| record.selected),
        }
    }

    /// Register a committed change.
    pub fn record(&mut self, line: usize, rule: FixRule, before: impl Into<String>, after: impl Into<String>) {
        self.records.push(FixRecord {
            line,
            rule,
            before: before.into(),
            after: after.into(),
            selected: true,
        });
        self.total_fixes += 1;
    }

    pub fn status(&mut self, rule: FixRule, message: &str) {
        debug!("{}: {}", rule.key(), message);
        self.log.push(self.mode, rule.name(), message, false);
    }

    /// Log an unresolved problem that needs manual attention.
    pub fn unresolved(&mut self, rule: FixRule, message: &str) {
        warn!("{}: {}", rule.key(), message);
        self.log.push(self.mode, rule.name(), message, true);
        self.total_errors += 1;
    }

    pub fn display_ms(&self, text: &str) -> i64 {
        self.collaborators.estimator.display_milliseconds(text)
    }

    pub fn is_name(&self, word: &str) -> bool {
        self.collaborators.names.is_name(word)
    }

    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.collaborators.names.is_abbreviation(word)
    }
}

/// Apply a per-paragraph text transformation.
///
/// `fix` sees the subtitle as it is before paragraph `index` is touched and
/// returns the wanted text; a different text is committed when allowed.
/// Returns the number of committed changes, logged with `summary`.
pub(crate) fn fix_each_text<F>(subtitle: &mut Subtitle, ctx: &mut FixContext, rule: FixRule, summary: &str, mut fix: F) -> usize
where
    F: FnMut(&Subtitle, usize, &FixContext) -> String,
{
    let mut count = 0;
    for index in 0..subtitle.len() {
        let new_text = fix(subtitle, index, ctx);
        let old_text = &subtitle.paragraphs[index].text;
        if new_text != *old_text && ctx.allow(index + 1, rule) {
            let before = std::mem::replace(&mut subtitle.paragraphs[index].text, new_text.clone());
            ctx.record(index + 1, rule, before, new_text);
            count += 1;
        }
    }
    if count > 0 {
        ctx.status(rule, &format!("{} {}", count, summary));
    }
    count
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fromKey_withKeyOrIndex_shouldResolve() {
        assert_eq!(FixRule::from_key("missing-spaces").unwrap(), FixRule::MissingSpaces);
        assert_eq!(FixRule::from_key("0").unwrap(), FixRule::EmptyLines);
        assert_eq!(FixRule::from_key("26").unwrap(), FixRule::SpanishInvertedMarks);
        assert!(FixRule::from_key("nope").is_err());
    }

    #[test]
    fn test_catalog_withLongEnglishFile_shouldHideLanguageRules() {
        let settings = FixSettings::default();
        let items = catalog(&settings, "en", 100);
        assert_eq!(items.len(), 25);
        assert!(!items.iter().any(|item| item.rule == FixRule::DanishLetterI));

        let items = catalog(&settings, "da", 100);
        assert!(items.iter().any(|item| item.rule == FixRule::DanishLetterI));
        assert!(!items.iter().any(|item| item.rule == FixRule::SpanishInvertedMarks));

        assert_eq!(catalog(&settings, "en", 10).len(), 27);
    }

    #[test]
    fn test_catalog_defaults_shouldMatchSettings() {
        let settings = FixSettings::default();
        for item in catalog(&settings, "en", 0) {
            assert_eq!(item.enabled, item.rule.default_enabled(), "{}", item.rule.key());
        }
    }

    #[test]
    fn test_allow_inApplyMode_shouldFollowFirstMatchingRecord() {
        let settings = FixSettings::default();
        let collaborators = Collaborators::from_settings(&settings);
        let selections = vec![
            FixRecord {
                line: 2,
                rule: FixRule::UnneededSpaces,
                before: "a  b".into(),
                after: "a b".into(),
                selected: false,
            },
            FixRecord {
                line: 3,
                rule: FixRule::UnneededSpaces,
                before: "c  d".into(),
                after: "c d".into(),
                selected: true,
            },
        ];
        let ctx = FixContext::new(FixMode::Apply, &settings, "en", &collaborators, &selections);
        assert!(!ctx.allow(2, FixRule::UnneededSpaces));
        assert!(ctx.allow(3, FixRule::UnneededSpaces));
        assert!(!ctx.allow(3, FixRule::MissingSpaces));
        assert!(!ctx.allow(9, FixRule::UnneededSpaces));
    }

    #[test]
    fn test_log_shouldPrefixByMode() {
        let mut log = FixLog::default();
        log.push(FixMode::ListOnly, "Rule", "3 fixed", false);
        log.push(FixMode::Apply, "Rule", "stuck", true);
        assert_eq!(log.text(), " +  Rule: 3 fixed\nOK -  Rule: stuck");
        assert_eq!(log.important, 1);
    }
}
