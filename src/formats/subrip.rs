use once_cell::sync::Lazy;
use regex::Regex;

use crate::subtitle::{Paragraph, Subtitle, TimeCode};

use super::{LoadReport, SubtitleFormat};

// @module: SubRip (.srt) codec

// @const: SRT time range line, tolerant of '.' and short fractions
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(-?\d+):(\d{1,2}):(\d{1,2})[,.](\d{1,3})\s*-->\s*(-?\d+):(\d{1,2}):(\d{1,2})[,.](\d{1,3})")
        .expect("Invalid SRT timestamp regex")
});

// @struct: SubRip codec
#[derive(Debug, Clone, Copy, Default)]
pub struct SubRip;

/// Parse one side of a time range; fractions shorter than three digits are
/// right-padded (`,5` is 500 ms).
fn parse_timestamp(captures: &regex::Captures, first: usize) -> Option<TimeCode> {
    let number = |index: usize| -> Option<i64> { captures.get(index)?.as_str().parse().ok() };
    let fraction = captures.get(first + 3)?.as_str();
    let millis: i64 = format!("{:0<3}", fraction).parse().ok()?;

    let hours = number(first)?;
    let time = TimeCode::from_hms(hours.abs(), number(first + 1)?, number(first + 2)?, millis);
    if captures.get(first)?.as_str().starts_with('-') {
        Some(TimeCode::from_millis(-time.total_milliseconds()))
    } else {
        Some(time)
    }
}

// @struct: Block being assembled while reading
#[derive(Default)]
struct PendingBlock {
    has_number: bool,
    times: Option<(TimeCode, TimeCode)>,
    text: Vec<String>,
    first_line: usize,
}

impl PendingBlock {
    fn finish(&mut self, subtitle: &mut Subtitle, report: &mut LoadReport) {
        let block = std::mem::take(self);
        match block.times {
            Some((start, end)) => {
                let mut paragraph = Paragraph::new(0, 0, block.text.join("\n"));
                paragraph.start_time = start;
                paragraph.end_time = end;
                subtitle.paragraphs.push(paragraph);
            }
            None if block.has_number || !block.text.is_empty() => {
                let line = block.text.first().map(String::as_str).unwrap_or_default();
                report.record(block.first_line, line, "missing time code");
            }
            None => {}
        }
    }
}

impl SubtitleFormat for SubRip {
    fn name(&self) -> &'static str {
        "SubRip"
    }

    fn extension(&self) -> &'static str {
        ".srt"
    }

    fn sniff(&self, lines: &[String], _file_name: &str) -> bool {
        lines.iter().any(|line| TIMESTAMP_REGEX.is_match(line))
    }

    fn load(&self, lines: &[String], _file_name: &str) -> (Subtitle, LoadReport) {
        let mut subtitle = Subtitle::new();
        let mut report = LoadReport::new();
        let mut block = PendingBlock::default();

        for (index, line) in lines.iter().enumerate() {
            let line_number = index + 1;
            let trimmed = line.trim();

            // A time line always opens a new block, even without a blank line first
            if let Some(captures) = TIMESTAMP_REGEX.captures(trimmed) {
                if block.times.is_some() {
                    // A counter line glued to the previous text belongs to this block
                    if block.text.last().is_some_and(|last| last.trim().parse::<u32>().is_ok()) {
                        block.text.pop();
                    }
                    block.finish(&mut subtitle, &mut report);
                }
                match (parse_timestamp(&captures, 1), parse_timestamp(&captures, 5)) {
                    (Some(start), Some(end)) => {
                        if block.first_line == 0 {
                            block.first_line = line_number;
                        }
                        block.times = Some((start, end));
                        block.text.clear();
                    }
                    _ => report.record(line_number, line, "invalid time code"),
                }
                continue;
            }

            if trimmed.is_empty() {
                if block.times.is_some() {
                    block.finish(&mut subtitle, &mut report);
                }
                continue;
            }

            if block.times.is_none() && !block.has_number && trimmed.parse::<u32>().is_ok() {
                block.has_number = true;
                block.first_line = line_number;
                continue;
            }

            if block.times.is_some() {
                block.text.push(line.trim_end().to_string());
            } else {
                report.record(line_number, line, "text before time code");
                block = PendingBlock::default();
            }
        }
        block.finish(&mut subtitle, &mut report);

        subtitle.renumber(1);
        (subtitle, report)
    }

    fn to_text(&self, subtitle: &Subtitle, _title: &str) -> String {
        let mut out = String::new();
        for (index, paragraph) in subtitle.paragraphs.iter().enumerate() {
            out.push_str(&format!(
                "{}\n{} --> {}\n{}\n\n",
                index + 1,
                paragraph.start_time.to_srt_string(),
                paragraph.end_time.to_srt_string(),
                paragraph.text
            ));
        }
        out.trim_end().to_string()
    }
}
