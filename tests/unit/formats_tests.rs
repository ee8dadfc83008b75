/*!
 * Tests for format detection and the codecs
 */

use subfix::formats::{self, FormatKind, SubtitleFormat, split_lines};
use subfix::errors::FormatError;
use subfix::subtitle::{Paragraph, Subtitle};
use crate::common;

const SONY_SAMPLE: &str = "00:00:01:00 - 00:00:03:50  \tFirst line|second line
00:00:04:00 - 00:00:05:25  \tNext";

/// Test that detection finds SubRip content whatever the extension
#[test]
fn test_detect_withSrtContent_shouldFindSubRip() {
    let lines = split_lines(common::CLEAN_SRT);
    assert_eq!(formats::detect(&lines, "movie.srt"), Some(FormatKind::Srt));
    assert_eq!(formats::detect(&lines, "movie.txt"), Some(FormatKind::Srt));
}

/// Test that Sony DVD Architect lines are detected and parsed
#[test]
fn test_loadAny_withSonyContent_shouldParseLinesAndBreaks() {
    let lines = split_lines(SONY_SAMPLE);
    let (kind, subtitle, report) = formats::load_any(&lines, "list.sub").unwrap();

    assert_eq!(kind, FormatKind::Sony);
    assert_eq!(report.errors, 0);
    assert_eq!(subtitle.len(), 2);
    assert_eq!(subtitle.paragraphs[0].text, "First line\nsecond line");
    assert_eq!(subtitle.paragraphs[0].end_ms(), 3500);
    assert_eq!(subtitle.file_name.as_deref(), Some("list.sub"));
}

/// Test that unknown input is reported as such
#[test]
fn test_loadAny_withPlainProse_shouldFailWithUnknownFormat() {
    let lines = split_lines("Just some words.\nNothing timed here.");
    assert!(matches!(formats::load_any(&lines, "notes.txt"), Err(FormatError::UnknownFormat(_))));
}

/// Test that malformed SubRip blocks are counted, not fatal
#[test]
fn test_subRip_withBrokenBlock_shouldCountError() {
    let text = "1\n00:00:01,000 --> 00:00:02,000\nGood\n\n2\nno time here\n\n3\n00:00:05,000 --> 00:00:06,000\nAlso good\n";
    let (subtitle, report) = FormatKind::Srt.codec().load(&split_lines(text), "x.srt");

    assert_eq!(subtitle.len(), 2);
    assert_eq!(report.errors, 1);
    assert_eq!(subtitle.paragraphs[1].number, 2);
}

/// Test that SubRip output reads back to the same paragraphs
#[test]
fn test_subRip_toText_shouldReloadIdentically() {
    let subtitle = Subtitle::from_paragraphs(vec![
        Paragraph::new(1_000, 2_500, "<i>One</i>"),
        Paragraph::new(3_723_004, 3_724_000, "Two\nlines"),
    ]);
    let codec = FormatKind::Srt.codec();
    let text = codec.to_text(&subtitle, "");

    assert!(text.contains("01:02:03,004 --> 01:02:04,000"));
    let (reloaded, report) = codec.load(&split_lines(&text), "x.srt");
    assert_eq!(report.errors, 0);
    assert_eq!(reloaded.paragraphs, subtitle.paragraphs);
}

/// Test that a SubRip subtitle survives a trip through ASS
#[test]
fn test_assConversion_shouldKeepTextAndTimes() {
    let lines = split_lines(common::CLEAN_SRT);
    let (_, subtitle, _) = formats::load_any(&lines, "in.srt").unwrap();

    let ass = FormatKind::Ass.codec();
    let text = ass.to_text(&subtitle, "Title");
    assert!(text.starts_with("[Script Info]"));

    let (kind, reloaded, report) = formats::load_any(&split_lines(&text), "out.ass").unwrap();
    assert_eq!(kind, FormatKind::Ass);
    assert_eq!(report.errors, 0);
    let texts = |s: &Subtitle| s.paragraphs.iter().map(|p| (p.start_ms(), p.end_ms(), p.text.clone())).collect::<Vec<_>>();
    assert_eq!(texts(&reloaded), texts(&subtitle));
}

/// Test that format names and extensions resolve
#[test]
fn test_formatKind_fromName_shouldAcceptNamesAndExtensions() {
    assert_eq!(FormatKind::from_name("SubRip").unwrap(), FormatKind::Srt);
    assert_eq!(FormatKind::from_name(".sub").unwrap(), FormatKind::Sony);
    assert_eq!(FormatKind::Ass.extension(), ".ass");
    assert_eq!(FormatKind::Srt.to_string(), "SubRip");
    assert!(matches!(FormatKind::from_name("vtt"), Err(FormatError::UnknownFormat(_))));
}
