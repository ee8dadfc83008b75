use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::{Path, PathBuf};

use crate::fixes::FixRule;
use crate::formats::ssa_style::SsaColor;
use crate::text_utils::ReadingSpeed;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Language code (ISO 639-1) of the subtitles, or "auto" to detect it
    #[serde(default = "default_language")]
    pub language: String,

    /// Rule toggles and thresholds for the fix engine
    #[serde(default)]
    pub fixes: FixSettings,

    /// Style used when writing SubStation files without a header
    #[serde(default)]
    pub ssa: SsaSettings,

    /// Plain text import options
    #[serde(default)]
    pub import: TextImportSettings,

    /// Optional extra names and abbreviations, one per line
    #[serde(default)]
    pub names_file: Option<PathBuf>,

    /// Optional OCR replace list with `wrong=right` lines
    #[serde(default)]
    pub ocr_replace_file: Option<PathBuf>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Fix rule toggles and thresholds
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FixSettings {
    pub empty_lines: bool,
    pub overlapping_display_time: bool,
    pub too_short_display_time: bool,
    pub too_long_display_time: bool,
    pub invalid_italic_tags: bool,
    pub unneeded_spaces: bool,
    pub unneeded_periods: bool,
    pub missing_spaces: bool,
    pub break_long_lines: bool,
    pub merge_short_lines: bool,
    pub uppercase_i_inside_lowercase_word: bool,
    pub double_apostrophe_to_quote: bool,
    pub music_notation: bool,
    pub add_period_after_paragraph: bool,
    pub start_with_uppercase_after_paragraph: bool,
    pub start_with_uppercase_after_period_inside_paragraph: bool,
    pub add_missing_quotes: bool,
    pub fix_hyphens: bool,
    pub fix_3plus_lines: bool,
    pub double_dash: bool,
    pub double_greater_than: bool,
    pub ellipses_start: bool,
    pub missing_open_bracket: bool,
    pub alone_lowercase_i_english: bool,
    pub ocr_replace_list: bool,
    pub danish_letter_i: bool,
    pub spanish_inverted_marks: bool,

    // @field: Longest single line before it is re-broken
    pub max_line_length: usize,

    // @field: Two-line paragraphs shorter than this are joined
    pub merge_lines_shorter_than: usize,

    // @field: Below estimate times this factor a paragraph is too short
    pub min_display_factor: f64,

    // @field: Above estimate times this factor a paragraph is too long
    pub max_display_factor: f64,

    // @field: Too long paragraphs are shrunk to estimate times this factor
    pub long_display_shrink_factor: f64,

    pub chars_per_second: f64,
    pub min_display_ms: i64,
    pub max_display_ms: i64,

    // @field: Symbol used for music notation
    pub music_symbol: String,

    // @field: Broken encodings of the music symbol to replace
    pub music_symbols_to_replace: Vec<String>,

    // @field: Danish and Spanish rules are offered for shorter files regardless of language
    pub language_specific_rule_paragraph_limit: usize,
}

impl Default for FixSettings {
    fn default() -> Self {
        Self {
            empty_lines: true,
            overlapping_display_time: true,
            too_short_display_time: true,
            too_long_display_time: true,
            invalid_italic_tags: true,
            unneeded_spaces: true,
            unneeded_periods: true,
            missing_spaces: true,
            break_long_lines: true,
            merge_short_lines: true,
            uppercase_i_inside_lowercase_word: true,
            double_apostrophe_to_quote: true,
            music_notation: true,
            add_period_after_paragraph: true,
            start_with_uppercase_after_paragraph: true,
            start_with_uppercase_after_period_inside_paragraph: true,
            add_missing_quotes: true,
            fix_hyphens: true,
            fix_3plus_lines: true,
            double_dash: true,
            double_greater_than: true,
            ellipses_start: true,
            missing_open_bracket: true,
            alone_lowercase_i_english: false,
            ocr_replace_list: true,
            danish_letter_i: true,
            spanish_inverted_marks: true,
            max_line_length: 43,
            merge_lines_shorter_than: 33,
            min_display_factor: 0.5,
            max_display_factor: 6.0,
            long_display_shrink_factor: 2.0,
            chars_per_second: 14.7,
            min_display_ms: 1000,
            max_display_ms: 8000,
            music_symbol: "♪".to_string(),
            music_symbols_to_replace: vec!["â™ª".to_string(), "â™«".to_string(), "¶".to_string()],
            language_specific_rule_paragraph_limit: 25,
        }
    }
}

// Maps each rule to its toggle field
macro_rules! rule_toggles {
    ($($rule:ident => $field:ident),* $(,)?) => {
        impl FixSettings {
            pub fn is_enabled(&self, rule: FixRule) -> bool {
                match rule {
                    $(FixRule::$rule => self.$field,)*
                }
            }

            pub fn set_enabled(&mut self, rule: FixRule, enabled: bool) {
                match rule {
                    $(FixRule::$rule => self.$field = enabled,)*
                }
            }
        }
    };
}

rule_toggles! {
    EmptyLines => empty_lines,
    OverlappingDisplayTime => overlapping_display_time,
    TooShortDisplayTime => too_short_display_time,
    TooLongDisplayTime => too_long_display_time,
    InvalidItalicTags => invalid_italic_tags,
    UnneededSpaces => unneeded_spaces,
    UnneededPeriods => unneeded_periods,
    MissingSpaces => missing_spaces,
    BreakLongLines => break_long_lines,
    MergeShortLines => merge_short_lines,
    UppercaseIInsideLowercaseWord => uppercase_i_inside_lowercase_word,
    DoubleApostropheToQuote => double_apostrophe_to_quote,
    MusicNotation => music_notation,
    AddPeriodAfterParagraph => add_period_after_paragraph,
    StartWithUppercaseAfterParagraph => start_with_uppercase_after_paragraph,
    StartWithUppercaseAfterPeriodInsideParagraph => start_with_uppercase_after_period_inside_paragraph,
    AddMissingQuotes => add_missing_quotes,
    FixHyphens => fix_hyphens,
    Fix3PlusLines => fix_3plus_lines,
    DoubleDash => double_dash,
    DoubleGreaterThan => double_greater_than,
    EllipsesStart => ellipses_start,
    MissingOpenBracket => missing_open_bracket,
    AloneLowercaseIToUppercaseIEnglish => alone_lowercase_i_english,
    OcrReplaceList => ocr_replace_list,
    DanishLetterI => danish_letter_i,
    SpanishInvertedMarks => spanish_inverted_marks,
}

impl FixSettings {
    // @returns: Reading speed model built from the thresholds
    pub fn reading_speed(&self) -> ReadingSpeed {
        ReadingSpeed {
            chars_per_second: self.chars_per_second,
            min_ms: self.min_display_ms,
            max_ms: self.max_display_ms,
        }
    }
}

/// Default style for synthesized SubStation headers
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SsaSettings {
    pub font_name: String,
    pub font_size: i32,

    // @field: Primary color as #rrggbb
    pub color: String,
}

impl Default for SsaSettings {
    fn default() -> Self {
        Self {
            font_name: "Arial".to_string(),
            font_size: 20,
            color: "#FFFFFF".to_string(),
        }
    }
}

impl SsaSettings {
    pub fn primary_color(&self) -> Result<SsaColor> {
        SsaColor::from_html(&self.color).ok_or_else(|| anyhow!("Invalid SSA color: {}", self.color))
    }
}

/// How plain text is cut into paragraphs
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// One line of text is one paragraph
    #[default]
    Line,
    /// Sentences are re-flowed to fit the maximum line length
    Auto,
}

/// Plain text import options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TextImportSettings {
    pub split_mode: SplitMode,
    pub remove_empty_lines: bool,
    pub remove_lines_without_letters: bool,
    pub merge_short_lines: bool,

    // @field: Pause between consecutive paragraphs
    pub gap_ms: i64,

    // @field: Fixed duration, reading speed estimate when absent
    pub fixed_duration_ms: Option<i64>,
}

impl Default for TextImportSettings {
    fn default() -> Self {
        Self {
            split_mode: SplitMode::Line,
            remove_empty_lines: true,
            remove_lines_without_letters: false,
            merge_short_lines: false,
            gap_ms: 150,
            fixed_duration_ms: None,
        }
    }
}

fn default_language() -> String {
    "auto".to_string()
}

impl Config {
    /// Read a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write config file: {:?}", path))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.language != "auto" {
            crate::language_utils::get_language_name(&self.language)?;
        }

        let fixes = &self.fixes;
        if fixes.max_line_length < 10 {
            return Err(anyhow!("max_line_length must be at least 10, got {}", fixes.max_line_length));
        }
        if fixes.merge_lines_shorter_than > fixes.max_line_length {
            return Err(anyhow!(
                "merge_lines_shorter_than ({}) cannot exceed max_line_length ({})",
                fixes.merge_lines_shorter_than,
                fixes.max_line_length
            ));
        }
        if fixes.chars_per_second <= 0.0 {
            return Err(anyhow!("chars_per_second must be positive"));
        }
        if fixes.min_display_factor <= 0.0
            || fixes.max_display_factor <= fixes.min_display_factor
            || fixes.long_display_shrink_factor <= 0.0
        {
            return Err(anyhow!(
                "Display factors must be positive with min ({}) below max ({})",
                fixes.min_display_factor,
                fixes.max_display_factor
            ));
        }
        if fixes.min_display_ms < 0 || fixes.max_display_ms < fixes.min_display_ms {
            return Err(anyhow!(
                "Display time bounds are inconsistent: {}..{} ms",
                fixes.min_display_ms,
                fixes.max_display_ms
            ));
        }
        if fixes.music_symbol.is_empty() {
            return Err(anyhow!("music_symbol cannot be empty"));
        }

        if self.ssa.font_size <= 0 {
            return Err(anyhow!("SSA font size must be positive"));
        }
        self.ssa.primary_color()?;

        if self.import.gap_ms < 0 || self.import.fixed_duration_ms.is_some_and(|ms| ms <= 0) {
            return Err(anyhow!("Import gap and fixed duration must be positive"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            language: default_language(),
            fixes: FixSettings::default(),
            ssa: SsaSettings::default(),
            import: TextImportSettings::default(),
            names_file: None,
            ocr_replace_file: None,
            log_level: LogLevel::default(),
        }
    }
}
