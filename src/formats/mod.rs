/*!
 * Subtitle format codecs.
 *
 * Every codec implements `SubtitleFormat`:
 * - `is_mine`: cheap text sniff followed by a trial load
 * - `load`: line oriented parse into a `Subtitle` plus a `LoadReport`
 * - `to_text`: serialize a `Subtitle` back to the format
 *
 * Malformed lines never abort a load. They are counted in the report and
 * the caller decides whether a mostly parsed file is good enough.
 */

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::FormatError;
use crate::subtitle::Subtitle;

pub mod ass;
pub mod plain_text;
pub mod sony_dvd_architect;
pub mod ssa_style;
pub mod subrip;

pub use ass::AdvancedSubStationAlpha;
pub use plain_text::TextImporter;
pub use sony_dvd_architect::SonyDvdArchitect;
pub use subrip::SubRip;

/// Diagnostic text stops growing once it reaches this many bytes
pub const MAX_ERROR_TEXT_LENGTH: usize = 2000;

// @struct: Outcome of a load besides the paragraphs themselves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    // @field: Number of lines or blocks that could not be read
    pub errors: usize,

    // @field: One message per error, capped at MAX_ERROR_TEXT_LENGTH
    pub error_text: String,
}

impl LoadReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a malformed line and keep its message while there is room.
    pub fn record(&mut self, line_number: usize, line: &str, message: &str) {
        self.errors += 1;
        debug!("Line {} unreadable ({}): {}", line_number, message, line);
        if self.error_text.len() < MAX_ERROR_TEXT_LENGTH {
            self.error_text.push_str(&format!(
                "Line {} - {}: {}\n",
                line_number, message, line
            ));
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

/// A subtitle file format
pub trait SubtitleFormat {
    /// Display name, e.g. "SubRip"
    fn name(&self) -> &'static str;

    /// File extension including the dot
    fn extension(&self) -> &'static str;

    /// Parse `lines` into a subtitle. Never fails; problems go in the report.
    fn load(&self, lines: &[String], file_name: &str) -> (Subtitle, LoadReport);

    /// Serialize the subtitle; `title` is used where the format has one.
    fn to_text(&self, subtitle: &Subtitle, title: &str) -> String;

    /// Cheap text check that must pass before a trial load is attempted.
    fn sniff(&self, _lines: &[String], _file_name: &str) -> bool {
        true
    }

    /// True when the text sniff passes and a trial load reads more
    /// paragraphs than it had errors.
    fn is_mine(&self, lines: &[String], file_name: &str) -> bool {
        if !self.sniff(lines, file_name) {
            return false;
        }
        let (subtitle, report) = self.load(lines, file_name);
        subtitle.len() > report.errors
    }

    /// Strip format specific inline codes, keeping the model's own markup.
    fn remove_native_formatting(&self, _subtitle: &mut Subtitle) {}
}

/// The codecs that can be read and written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Ass,
    Srt,
    Sony,
}

impl FormatKind {
    pub const ALL: [FormatKind; 3] = [FormatKind::Ass, FormatKind::Srt, FormatKind::Sony];

    pub fn codec(self) -> Box<dyn SubtitleFormat> {
        match self {
            FormatKind::Ass => Box::new(AdvancedSubStationAlpha::default()),
            FormatKind::Srt => Box::new(SubRip),
            FormatKind::Sony => Box::new(SonyDvdArchitect),
        }
    }

    pub fn extension(self) -> &'static str {
        self.codec().extension()
    }

    /// Resolve a short name ("ass", "srt", "sony") or an extension.
    pub fn from_name(name: &str) -> Result<Self, FormatError> {
        match name.trim().trim_start_matches('.').to_lowercase().as_str() {
            "ass" | "ssa" => Ok(FormatKind::Ass),
            "srt" | "subrip" => Ok(FormatKind::Srt),
            "sony" | "sub" => Ok(FormatKind::Sony),
            other => Err(FormatError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.codec().name())
    }
}

/// Find the first format that claims the input, trying the one matching
/// the file extension first.
pub fn detect(lines: &[String], file_name: &str) -> Option<FormatKind> {
    let by_extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| FormatKind::from_name(ext).ok());

    let candidates = by_extension
        .into_iter()
        .chain(FormatKind::ALL.into_iter().filter(|kind| Some(*kind) != by_extension));

    for kind in candidates {
        if kind.codec().is_mine(lines, file_name) {
            debug!("Detected {} for {}", kind, file_name);
            return Some(kind);
        }
    }
    None
}

/// Detect the format and load the subtitle in one step.
pub fn load_any(lines: &[String], file_name: &str) -> Result<(FormatKind, Subtitle, LoadReport), FormatError> {
    let kind = detect(lines, file_name)
        .ok_or_else(|| FormatError::UnknownFormat(file_name.to_string()))?;
    let (mut subtitle, report) = kind.codec().load(lines, file_name);
    if report.has_errors() {
        warn!(
            "{}: {} line(s) could not be read as {}",
            file_name, report.errors, kind
        );
    }
    if subtitle.is_empty() {
        return Err(FormatError::NoParagraphs(file_name.to_string()));
    }
    subtitle.file_name = Some(file_name.to_string());
    Ok((kind, subtitle, report))
}

/// Split text into lines the way codecs expect them.
pub fn split_lines(text: &str) -> Vec<String> {
    text.trim_start_matches('\u{feff}')
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}
