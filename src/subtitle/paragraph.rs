use std::fmt;

use super::time_code::TimeCode;

// @module: Timed text entity

// @struct: One timed subtitle entry
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    // @field: Display label, reset by renumbering
    pub number: i32,

    // @field: Start time
    pub start_time: TimeCode,

    // @field: End time
    pub end_time: TimeCode,

    // @field: Text, lines joined by '\n', inline markup kept as-is
    pub text: String,

    // @field: Format specific tag, the style name for SubStation files
    pub extra: Option<String>,

    // @field: Comment entries are kept for round trips but not shown
    pub is_comment: bool,
}

impl Paragraph {
    pub fn new(start_ms: i64, end_ms: i64, text: impl Into<String>) -> Self {
        Self {
            number: 0,
            start_time: TimeCode::from_millis(start_ms),
            end_time: TimeCode::from_millis(end_ms),
            text: text.into(),
            extra: None,
            is_comment: false,
        }
    }

    /// End minus start. Negative until the timing rules have run.
    pub fn duration_ms(&self) -> i64 {
        self.end_time - self.start_time
    }

    pub fn start_ms(&self) -> i64 {
        self.start_time.total_milliseconds()
    }

    pub fn end_ms(&self) -> i64 {
        self.end_time.total_milliseconds()
    }

    pub fn set_start_ms(&mut self, ms: i64) {
        self.start_time.set_total_milliseconds(ms);
    }

    pub fn set_end_ms(&mut self, ms: i64) {
        self.end_time.set_total_milliseconds(ms);
    }

    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }

    pub fn line_count(&self) -> usize {
        if self.text.is_empty() {
            0
        } else {
            self.text.split('\n').count()
        }
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "#{} {} --> {} {}",
            self.number,
            self.start_time,
            self.end_time,
            self.text.replace('\n', " | ")
        )
    }
}
