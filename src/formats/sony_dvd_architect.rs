/*!
 * Sony DVD Architect subtitle lists (`.sub`).
 *
 * One paragraph per line:
 *
 * ```text
 * 00:04:10:92 - 00:04:13:32  	Raise Yourself To Help Mankind
 * ```
 *
 * The fourth time field is hundredths of a second and `|` separates lines.
 * There is no markup, so tags are dropped when writing.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::subtitle::{Paragraph, Subtitle, TimeCode};
use crate::text_utils::remove_html_tags;

use super::{LoadReport, SubtitleFormat};

static TIME_RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d\d):(\d\d):(\d\d):(\d\d) +- +(\d\d):(\d\d):(\d\d):(\d\d)")
        .expect("Invalid Sony DVD Architect time regex")
});

/// Lines this short cannot hold both time codes and text
const MIN_LINE_LENGTH: usize = 27;

#[derive(Debug, Clone, Copy, Default)]
pub struct SonyDvdArchitect;

fn format_time(time: TimeCode) -> String {
    format!(
        "{:02}:{:02}:{:02}:{:02}",
        time.hours(),
        time.minutes(),
        time.seconds(),
        time.centiseconds()
    )
}

fn parse_line(line: &str) -> Option<Paragraph> {
    if line.len() < MIN_LINE_LENGTH {
        return None;
    }
    let captures = TIME_RANGE_REGEX.captures(line)?;
    let field = |index: usize| -> Option<i64> { captures.get(index)?.as_str().parse().ok() };

    let start = TimeCode::from_hms(field(1)?, field(2)?, field(3)?, field(4)? * 10);
    let end = TimeCode::from_hms(field(5)?, field(6)?, field(7)?, field(8)? * 10);
    let matched = captures.get(0)?.end();
    let text = line[matched..].trim_start().replace('|', "\n");

    let mut paragraph = Paragraph::new(0, 0, text);
    paragraph.start_time = start;
    paragraph.end_time = end;
    Some(paragraph)
}

impl SubtitleFormat for SonyDvdArchitect {
    fn name(&self) -> &'static str {
        "Sony DVDArchitect"
    }

    fn extension(&self) -> &'static str {
        ".sub"
    }

    fn load(&self, lines: &[String], _file_name: &str) -> (Subtitle, LoadReport) {
        let mut subtitle = Subtitle::new();
        let mut report = LoadReport::new();

        for (index, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line) {
                Some(paragraph) => subtitle.paragraphs.push(paragraph),
                None => report.record(index + 1, line, "not a time code line"),
            }
        }

        subtitle.renumber(1);
        (subtitle, report)
    }

    fn to_text(&self, subtitle: &Subtitle, _title: &str) -> String {
        let mut out = String::new();
        for paragraph in &subtitle.paragraphs {
            let text = remove_html_tags(&paragraph.text).replace('\n', "|");
            out.push_str(&format!(
                "{} - {}  \t{}\n",
                format_time(paragraph.start_time),
                format_time(paragraph.end_time),
                text
            ));
        }
        out.trim().to_string()
    }
}
