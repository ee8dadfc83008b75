/*!
 * Integration tests for conversion, detection and text import
 */

use anyhow::Result;
use subfix::app_config::{Config, SplitMode};
use subfix::app_controller::Controller;
use subfix::formats::FormatKind;
use crate::common;

/// Test that converting SubRip to ASS writes a detectable ASS file
#[test]
fn test_convert_withSrtToAss_shouldWriteAssFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "movie.srt")?;
    let controller = Controller::with_config(Config::default())?;

    let written = controller.convert(&input, FormatKind::Ass, None, false)?;

    assert_eq!(written, temp_dir.path().join("movie.ass"));
    let report = controller.detect(&written)?;
    assert_eq!(report.format, FormatKind::Ass);
    assert_eq!(report.paragraphs, 3);
    assert_eq!(report.errors, 0);
    Ok(())
}

/// Test that the configured style is used for ASS output
#[test]
fn test_convert_withCustomStyle_shouldUseConfiguredFont() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "movie.srt")?;
    let mut config = Config::default();
    config.ssa.font_name = "Verdana".to_string();
    config.ssa.font_size = 32;

    let written = Controller::with_config(config)?.convert(&input, FormatKind::Ass, None, false)?;

    let text = std::fs::read_to_string(written)?;
    assert!(text.contains("Style: Default,Verdana,32,"));
    Ok(())
}

/// Test that converting onto an existing file needs force, and onto itself never works
#[test]
fn test_convert_withExistingTarget_shouldRequireForce() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "movie.srt")?;
    common::create_test_file(temp_dir.path(), "movie.sub", "old")?;
    let controller = Controller::with_config(Config::default())?;

    assert!(controller.convert(&input, FormatKind::Sony, None, false).is_err());
    assert!(controller.convert(&input, FormatKind::Sony, None, true).is_ok());
    assert!(controller.convert(&input, FormatKind::Srt, None, true).is_err());
    Ok(())
}

/// Test that detection reports the language of the text
#[test]
fn test_detect_withDanishSubtitle_shouldReportDanish() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = "1\n00:00:01,000 --> 00:00:03,000\nJeg ved ikke hvad du mener.\n\n2\n00:00:04,000 --> 00:00:06,000\nHvorfor skal vi det?\n";
    let input = common::create_test_file(temp_dir.path(), "film.srt", content)?;

    let report = Controller::with_config(Config::default())?.detect(&input)?;

    assert_eq!(report.format, FormatKind::Srt);
    assert_eq!(report.language, "da");
    Ok(())
}

/// Test that a text file becomes one paragraph per line with sequential times
#[test]
fn test_import_text_withLineMode_shouldCreateTimedParagraphs() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "script.txt", "First line.\n\nSecond line.\nThird line.\n")?;
    let mut config = Config::default();
    config.import.split_mode = SplitMode::Line;
    config.import.remove_empty_lines = true;
    let controller = Controller::with_config(config)?;

    let written = controller.import_text(&input, FormatKind::Srt, None, false)?;

    assert_eq!(written, temp_dir.path().join("script.srt"));
    let (_, subtitle) = controller.load(&written)?;
    let texts: Vec<&str> = subtitle.paragraphs.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec!["First line.", "Second line.", "Third line."]);
    assert!(subtitle.paragraphs.windows(2).all(|pair| pair[0].end_ms() < pair[1].start_ms()));
    Ok(())
}

/// Test that importing an empty text file fails
#[test]
fn test_import_text_withEmptyFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "empty.txt", "\n\n")?;
    let controller = Controller::with_config(Config::default())?;
    assert!(controller.import_text(&input, FormatKind::Srt, None, false).is_err());
    Ok(())
}
