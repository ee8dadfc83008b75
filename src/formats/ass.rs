/*!
 * Advanced Sub Station Alpha (`.ass`) codec.
 *
 * Loading walks the file with a small section state machine (header,
 * events, fonts). Event columns are resolved from the `Format:` line, so
 * files that reorder them still load. Inline override codes are mapped to
 * the model's html-like tags and back:
 *
 * - `{\i1}`/`{\i0}`, `{\b1}`/`{\b0}`, `{\u1}`/`{\u0}` to `<i>`, `<b>`, `<u>`
 * - `{\fnName}`, `{\fsN}` to `<font face="Name">`, `<font size="N">`
 * - `{\c&HBBGGRR&}`, `{\1c&HBBGGRR&}` to `<font color="#rrggbb">`
 *
 * Lossy on purpose: every other override code is kept verbatim in the text,
 * closing font tags always move to the end of the paragraph, and time codes
 * are stored in hundredths of a second.
 */

use crate::errors::FormatError;
use crate::subtitle::{Paragraph, Subtitle, TimeCode};
use crate::text_utils::count_tag_in_text;

use super::ssa_style::{SsaColor, ssa_color_string, styles_from_header};
use super::{LoadReport, SubtitleFormat};

/// Event column layout written by this codec
pub const EVENTS_FORMAT_LINE: &str =
    "Format: Layer, Start, End, Style, Actor, MarginL, MarginR, MarginV, Effect, Text";

const STYLES_FORMAT_LINE: &str = "Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding";

/// `<font>` attributes mapped to override codes: (attribute, quote, code, close)
const FONT_ATTRIBUTES: [(&str, &str, &str, &str); 8] = [
    ("face=\"", "\"", "fn", "}"),
    ("face='", "'", "fn", "}"),
    ("name=\"", "\"", "fn", "}"),
    ("name='", "'", "fn", "}"),
    ("size=\"", "\"", "fs", "}"),
    ("size='", "'", "fs", "}"),
    ("color=\"", "\"", "c&H", "&}"),
    ("color='", "'", "c&H", "&}"),
];

const SIMPLE_TAGS: [(&str, &str); 6] = [
    ("<i>", "{\\i1}"),
    ("</i>", "{\\i0}"),
    ("<u>", "{\\u1}"),
    ("</u>", "{\\u0}"),
    ("<b>", "{\\b1}"),
    ("</b>", "{\\b0}"),
];

const MAX_TAG_PASSES: usize = 10;

/// Column positions of the fields the model cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventColumns {
    pub start: usize,
    pub end: usize,
    pub style: usize,
    pub text: usize,
}

impl Default for EventColumns {
    fn default() -> Self {
        Self { start: 1, end: 2, style: 3, text: 9 }
    }
}

impl EventColumns {
    /// Map the comma separated names after `Format:`; unknown names keep
    /// their default positions.
    pub fn from_format(columns: &str) -> Self {
        let mut mapped = Self::default();
        for (index, column) in columns.split(',').enumerate() {
            match column.trim().to_lowercase().as_str() {
                "start" => mapped.start = index,
                "end" => mapped.end = index,
                "style" => mapped.style = index,
                "text" => mapped.text = index,
                _ => {}
            }
        }
        mapped
    }
}

// @struct: ASS codec with the settings used for synthesized headers
#[derive(Debug, Clone)]
pub struct AdvancedSubStationAlpha {
    pub font_name: String,
    pub font_size: i32,
    pub primary_color: SsaColor,
}

impl Default for AdvancedSubStationAlpha {
    fn default() -> Self {
        Self {
            font_name: "Arial".to_string(),
            font_size: 20,
            primary_color: SsaColor::WHITE,
        }
    }
}

impl AdvancedSubStationAlpha {
    pub fn new(font_name: &str, font_size: i32, primary_color: SsaColor) -> Self {
        Self {
            font_name: font_name.to_string(),
            font_size,
            primary_color,
        }
    }

    /// The `Style: Default,...` line used when no header is available.
    pub fn default_style(&self) -> String {
        format!(
            "Style: Default,{},{},{},&H0300FFFF,&H00000000,&H02000000,0,0,0,0,100,100,0,0,1,2,2,2,10,10,10,1",
            self.font_name,
            self.font_size,
            ssa_color_string(self.primary_color)
        )
    }

    fn default_header(&self, title: &str) -> String {
        format!(
            "[Script Info]\n\
             ; This is an Advanced Sub Station Alpha v4+ script.\n\
             Title: {}\n\
             ScriptType: v4.00+\n\
             Collisions: Normal\n\
             PlayDepth: 0\n\
             \n\
             [V4+ Styles]\n\
             {}\n\
             {}\n\
             \n\
             [Events]\n\
             {}",
            title,
            STYLES_FORMAT_LINE,
            self.default_style(),
            EVENTS_FORMAT_LINE
        )
    }
}

fn format_time(time: TimeCode) -> String {
    format!(
        "{}:{:02}:{:02}.{:02}",
        time.hours(),
        time.minutes(),
        time.seconds(),
        time.centiseconds()
    )
}

/// Swap the last six hex digits between `rrggbb` and `bbggrr`.
fn swap_color_channels(color: &str) -> String {
    if color.len() < 6 || !color.is_ascii() {
        return color.to_string();
    }
    let split = color.len() - 6;
    format!(
        "{}{}{}{}",
        &color[..split],
        &color[split + 4..],
        &color[split + 2..split + 4],
        &color[split..split + 2]
    )
}

/// Move one attribute of a removed `<font>` tag into an override code at `start`.
fn format_tag(text: &mut String, start: usize, font_tag: &mut String, attribute: (&str, &str, &str, &str)) {
    let (name, quote, code, close) = attribute;
    let Some(attribute_start) = font_tag.find(name) else {
        return;
    };
    let value_start = attribute_start + name.len();
    let Some(value_length) = font_tag[value_start..].find(quote) else {
        return;
    };
    let value_end = value_start + value_length;

    let mut value = font_tag[value_start..value_end].to_string();
    if name.starts_with("color") {
        value = swap_color_channels(&value.replace('#', ""));
    }
    font_tag.replace_range(attribute_start..value_end + quote.len(), "");
    text.insert_str(start, &format!("{{\\{}{}{}", code, value, close));
}

/// Convert model markup to ASS override codes.
pub fn to_ass_text(text: &str) -> String {
    let mut text = text.replace("\r\n", "\n").replace('\n', "\\N");
    for (html, ass) in SIMPLE_TAGS {
        text = text.replace(html, ass);
    }

    for _ in 0..MAX_TAG_PASSES {
        let Some(start) = text.find("<font ") else {
            break;
        };
        let Some(length) = text[start..].find('>') else {
            break;
        };
        let end = start + length;
        let mut font_tag = text[start + 4..end].to_string();
        let head = text[..start].replace("</font>", "");
        let tail = text[end + 1..].replace("</font>", "");
        let start = head.len();
        text = head + &tail;
        for attribute in FONT_ATTRIBUTES {
            format_tag(&mut text, start, &mut font_tag, attribute);
        }
    }
    text
}

/// Closing offset of the `{...}` block opened at `start`.
fn block_end(text: &str, start: usize) -> Option<usize> {
    text[start..].find('}').map(|offset| start + offset)
}

fn color_override_to_html(text: &mut String, prefix: &str, value_offset: usize) {
    let Some(start) = text.find(prefix) else {
        return;
    };
    let Some(end) = block_end(text, start) else {
        return;
    };
    let Some(raw) = text.get(start + value_offset..end) else {
        return;
    };

    let mut color = raw.to_string();
    let mut next_tag = String::new();
    if let Some(next) = color.find('\\').filter(|&index| index > 1) {
        next_tag = format!("{{{}}}", &color[next..]);
        color.truncate(next);
    }
    let color = color.replace('&', "");
    let color = format!("{:0>6}", color.trim_start_matches('H'));
    let html = format!("#{}", swap_color_channels(&color)).to_lowercase();

    text.replace_range(start..=end, &format!("<font color=\"{}\">{}", html, next_tag));
    text.push_str("</font>");
}

/// Convert ASS override codes to model markup.
pub fn from_ass_text(text: &str) -> String {
    let mut text = text.replace("\\N", "\n").replace("\\n", "\n");

    for _ in 0..MAX_TAG_PASSES {
        if let Some(start) = text.find("{\\fn") {
            if let Some(end) = block_end(&text, start) {
                let font_name = text[start + 4..end].to_string();
                text.replace_range(start..=end, &format!("<font face=\"{}\">", font_name));
                text.push_str("</font>");
            }
        }

        if let Some(start) = text.find("{\\fs") {
            if let Some(end) = block_end(&text, start) {
                let font_size = text[start + 4..end].to_string();
                if font_size.parse::<i32>().is_ok() {
                    text.replace_range(start..=end, &format!("<font size=\"{}\">", font_size));
                    text.push_str("</font>");
                }
            }
        }

        color_override_to_html(&mut text, "{\\c", 4);
        color_override_to_html(&mut text, "{\\1c", 5);
    }

    for (open, close, ass_open, ass_close) in [
        ("<i>", "</i>", "{\\i1}", "{\\i0}"),
        ("<u>", "</u>", "{\\u1}", "{\\u0}"),
        ("<b>", "</b>", "{\\b1}", "{\\b0}"),
    ] {
        text = text.replace(ass_open, open).replace(ass_close, close);
        if count_tag_in_text(&text, open) > count_tag_in_text(&text, close) {
            text.push_str(close);
        }
    }
    text
}

fn parse_event(line: &str, lower: &str, columns: &EventColumns) -> Result<Paragraph, FormatError> {
    let trimmed = line.trim();
    let fields_text = if lower.starts_with("dialogue:") {
        trimmed.get(9..).unwrap_or_default()
    } else {
        trimmed
    };

    let mut start = "";
    let mut end = "";
    let mut style = "";
    let mut text = String::new();
    for (index, field) in fields_text.split(',').enumerate() {
        if index == columns.start {
            start = field.trim();
        } else if index == columns.end {
            end = field.trim();
        } else if index == columns.style {
            style = field.trim();
        } else if index == columns.text {
            text = field.to_string();
        } else if index > columns.text {
            text.push(',');
            text.push_str(field);
        }
    }

    let mut paragraph = Paragraph::new(0, 0, from_ass_text(&text));
    paragraph.start_time = TimeCode::parse_fields(start, &[':', '.'], 10)?;
    paragraph.end_time = TimeCode::parse_fields(end, &[':', '.'], 10)?;
    if !style.is_empty() {
        paragraph.extra = Some(style.to_string());
    }
    paragraph.is_comment = lower.starts_with("comment:");
    Ok(paragraph)
}

impl SubtitleFormat for AdvancedSubStationAlpha {
    fn name(&self) -> &'static str {
        "Advanced Sub Station Alpha"
    }

    fn extension(&self) -> &'static str {
        ".ass"
    }

    fn sniff(&self, lines: &[String], _file_name: &str) -> bool {
        lines.iter().any(|line| line.contains("[V4+ Styles]"))
    }

    fn load(&self, lines: &[String], _file_name: &str) -> (Subtitle, LoadReport) {
        let mut subtitle = Subtitle::new();
        let mut report = LoadReport::new();
        let mut columns = EventColumns::default();
        let mut events_started = false;
        let mut fonts_started = false;
        let mut header = String::new();
        let mut fonts = String::new();

        for (index, line) in lines.iter().enumerate() {
            let trimmed = line.trim();
            let lower = trimmed.to_lowercase();

            if !events_started && !fonts_started {
                header.push_str(line);
                header.push('\n');
            }

            if lower.starts_with("dialogue:") {
                events_started = true;
                fonts_started = false;
            }

            if lower == "[events]" {
                events_started = true;
                fonts_started = false;
            } else if lower == "[fonts]" {
                events_started = false;
                fonts_started = true;
                fonts.push_str("[fonts]\n");
            } else if fonts_started {
                fonts.push_str(line);
                fonts.push('\n');
            } else if events_started && !lower.is_empty() {
                if lower.starts_with("format:") {
                    if let Some(names) = trimmed.get(7..).filter(|_| trimmed.len() > 10) {
                        columns = EventColumns::from_format(names);
                    }
                } else {
                    match parse_event(line, &lower, &columns) {
                        Ok(paragraph) => subtitle.paragraphs.push(paragraph),
                        Err(e) => report.record(index + 1, line, &e.to_string()),
                    }
                }
            }
        }

        if !header.is_empty() {
            subtitle.header = Some(header);
        }
        if !fonts.is_empty() {
            subtitle.footer = Some(fonts);
        }
        subtitle.renumber(1);
        (subtitle, report)
    }

    fn to_text(&self, subtitle: &Subtitle, title: &str) -> String {
        let header = subtitle
            .header
            .as_deref()
            .filter(|header| header.contains("[V4+ Styles]"));

        let mut out = String::new();
        let styles = match header {
            Some(header) => {
                out.push_str(header.trim());
                out.push('\n');
                out.push_str(EVENTS_FORMAT_LINE);
                out.push('\n');
                styles_from_header(header)
            }
            None => {
                out.push_str(&self.default_header(title));
                out.push('\n');
                Vec::new()
            }
        };

        for paragraph in &subtitle.paragraphs {
            let style = paragraph
                .extra
                .as_deref()
                .filter(|extra| styles.iter().any(|s| s == extra))
                .unwrap_or("Default");
            let kind = if paragraph.is_comment { "Comment" } else { "Dialogue" };
            out.push_str(&format!(
                "{}: 0,{},{},{},Default,0000,0000,0000,,{}\n",
                kind,
                format_time(paragraph.start_time),
                format_time(paragraph.end_time),
                style,
                to_ass_text(&paragraph.text)
            ));
        }

        if let Some(footer) = subtitle.footer.as_deref().filter(|f| f.contains("[fonts]\n")) {
            out.push('\n');
            out.push_str(footer);
            out.push('\n');
        }
        out.trim().to_string()
    }

    /// Remove `{...}` override blocks; a `{\anN}` position tag is kept at the front.
    fn remove_native_formatting(&self, subtitle: &mut Subtitle) {
        for paragraph in &mut subtitle.paragraphs {
            let mut pre = String::new();
            let mut text = paragraph.text.clone();
            while let Some(begin) = text.find('{') {
                let Some(end) = block_end(&text, begin) else {
                    break;
                };
                let block = &text[begin..=end];
                if block.len() == 6
                    && block.starts_with("{\\an")
                    && block.as_bytes()[4].is_ascii_digit()
                    && block.as_bytes()[4] != b'0'
                {
                    pre = block.to_string();
                }
                text.replace_range(begin..=end, "");
            }
            paragraph.text = pre + &text;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::split_lines;

    const SAMPLE: &str = "[Script Info]\n\
Title: sample\n\
ScriptType: v4.00+\n\
\n\
[V4+ Styles]\n\
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding\n\
Style: Default,Arial,20,&H00FFFFFF,&H0300FFFF,&H00000000,&H02000000,0,0,0,0,100,100,0,0,1,2,2,2,10,10,10,1\n\
Style: Sign,Arial,30,&H00FFFFFF,&H0300FFFF,&H00000000,&H02000000,0,0,0,0,100,100,0,0,1,2,2,8,10,10,10,1\n\
\n\
[Events]\n\
Format: Layer, Start, End, Style, Actor, MarginL, MarginR, MarginV, Effect, Text\n\
Dialogue: 0,0:00:01.00,0:00:03.50,Default,,0000,0000,0000,,{\\i1}Hello,{\\i0} world\\Nsecond line\n\
Comment: 0,0:00:04.00,0:00:05.00,Sign,,0000,0000,0000,,a note\n\
Dialogue: 0,0:00:06.00,0:00:07.25,Sign,,0000,0000,0000,,{\\c&H0000FF&}red\n";

    fn load(text: &str) -> (Subtitle, LoadReport) {
        AdvancedSubStationAlpha::default().load(&split_lines(text), "sample.ass")
    }

    #[test]
    fn test_load_withSample_shouldMapTagsAndTimes() {
        let (subtitle, report) = load(SAMPLE);
        assert_eq!(report.errors, 0);
        assert_eq!(subtitle.len(), 3);

        let first = &subtitle.paragraphs[0];
        assert_eq!(first.start_ms(), 1000);
        assert_eq!(first.end_ms(), 3500);
        assert_eq!(first.text, "<i>Hello,</i> world\nsecond line");
        assert_eq!(first.extra.as_deref(), Some("Default"));

        assert!(subtitle.paragraphs[1].is_comment);
        assert_eq!(subtitle.paragraphs[2].text, "<font color=\"#ff0000\">red</font>");
        assert!(subtitle.header.as_deref().unwrap().contains("[Events]"));
    }

    #[test]
    fn test_toText_withLoadedHeader_shouldRoundTrip() {
        let format = AdvancedSubStationAlpha::default();
        let (subtitle, _) = load(SAMPLE);
        let written = format.to_text(&subtitle, "ignored");
        let (reloaded, report) = load(&written);

        assert_eq!(report.errors, 0);
        assert_eq!(reloaded.len(), subtitle.len());
        for (a, b) in subtitle.paragraphs.iter().zip(&reloaded.paragraphs) {
            assert_eq!(a.start_time, b.start_time);
            assert_eq!(a.end_time, b.end_time);
            assert_eq!(a.text, b.text);
            assert_eq!(a.extra, b.extra);
            assert_eq!(a.is_comment, b.is_comment);
        }
        assert!(written.contains("Comment: 0,0:00:04.00,0:00:05.00,Sign,Default,0000,0000,0000,,a note"));
    }

    #[test]
    fn test_toText_withoutHeader_shouldSynthesizeDefaultStyle() {
        let mut subtitle = Subtitle::from_paragraphs(vec![Paragraph::new(61_230, 62_000, "<b>Hi</b>")]);
        subtitle.paragraphs[0].extra = Some("Unknown".to_string());
        let text = AdvancedSubStationAlpha::default().to_text(&subtitle, "My title");
        assert!(text.starts_with("[Script Info]"));
        assert!(text.contains("Title: My title"));
        assert!(text.contains("Style: Default,Arial,20,&H00FFFFFF,&H0300FFFF"));
        assert!(text.ends_with("Dialogue: 0,0:01:01.23,0:01:02.00,Default,Default,0000,0000,0000,,{\\b1}Hi{\\b0}"));
    }

    #[test]
    fn test_load_withReorderedColumns_shouldUseFormatLine() {
        let text = "[V4+ Styles]\n[Events]\nFormat: Layer, Style, End, Start, Text\nDialogue: 0,Default,0:00:02.00,0:00:01.00,Hi, there";
        let (subtitle, report) = load(text);
        assert_eq!(report.errors, 0);
        assert_eq!(subtitle.paragraphs[0].start_ms(), 1000);
        assert_eq!(subtitle.paragraphs[0].end_ms(), 2000);
        assert_eq!(subtitle.paragraphs[0].text, "Hi, there");
    }

    #[test]
    fn test_load_withBadTimeCodes_shouldCountErrors() {
        let text = "[V4+ Styles]\n[Events]\nDialogue: 0,0:00:xx.00,0:00:02.00,Default,,0,0,0,,bad\nDialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,good";
        let (subtitle, report) = load(text);
        assert_eq!(subtitle.len(), 1);
        assert_eq!(report.errors, 1);
        assert!(report.error_text.contains("Line 3"));
    }

    #[test]
    fn test_isMine_withMarkerButNoEvents_shouldBeFalse() {
        let format = AdvancedSubStationAlpha::default();
        let lines = split_lines("Some text mentioning [V4+ Styles]\n[Events]\nDialogue: broken");
        assert!(!format.is_mine(&lines, "x.txt"));
        assert!(format.is_mine(&split_lines(SAMPLE), "x.txt"));
    }

    #[test]
    fn test_fontsSection_shouldPassThroughFooter() {
        let text = format!("{}\n[Fonts]\nfontname: a.ttf\nABCDEF\n", SAMPLE);
        let (subtitle, _) = load(&text);
        assert_eq!(subtitle.footer.as_deref(), Some("[fonts]\nfontname: a.ttf\nABCDEF\n"));
        let written = AdvancedSubStationAlpha::default().to_text(&subtitle, "");
        assert!(written.ends_with("[fonts]\nfontname: a.ttf\nABCDEF"));
    }

    #[test]
    fn test_toAssText_withFontAttributes_shouldEmitOverrides() {
        assert_eq!(
            to_ass_text("<font color=\"#ff8000\">hot</font>"),
            "{\\c&H0080ff&}hot"
        );
        assert_eq!(to_ass_text("<font face=\"Verdana\">x</font>"), "{\\fnVerdana}x");
        assert_eq!(to_ass_text("a\nb"), "a\\Nb");
    }

    #[test]
    fn test_fromAssText_withColorAndNextTag_shouldKeepNextTag() {
        assert_eq!(
            from_ass_text("{\\c&H0000FF&\\i1}x"),
            "<font color=\"#ff0000\"><i>x</font></i>"
        );
        assert_eq!(from_ass_text("{\\fs28}big"), "<font size=\"28\">big</font>");
        assert_eq!(from_ass_text("{\\i1}open"), "<i>open</i>");
    }

    #[test]
    fn test_removeNativeFormatting_shouldKeepPositionTag() {
        let mut subtitle = Subtitle::from_paragraphs(vec![Paragraph::new(0, 1, "{\\an8}{\\pos(1,2)}Top {\\blur2}text")]);
        AdvancedSubStationAlpha::default().remove_native_formatting(&mut subtitle);
        assert_eq!(subtitle.paragraphs[0].text, "{\\an8}Top text");
    }
}
