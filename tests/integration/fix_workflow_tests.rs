/*!
 * Integration tests for the fix workflow: load, fix, save
 */

use anyhow::Result;
use subfix::app_config::Config;
use subfix::app_controller::{Controller, FixOptions};
use subfix::file_utils::FileManager;
use subfix::formats::FormatKind;
use crate::common;

fn controller() -> Result<Controller> {
    common::init_logging();
    let mut config = Config::default();
    config.language = "en".to_string();
    Controller::with_config(config)
}

/// Test that a broken file is fixed and written next to the input
#[test]
fn test_fix_file_withBrokenSrt_shouldWriteFixedCopy() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "broken.srt", common::BROKEN_SRT)?;

    let report = controller()?.fix_file(&input, &FixOptions::default())?;

    let output = report.output.clone().unwrap();
    assert_eq!(output, temp_dir.path().join("broken.fixed.srt"));
    assert!(report.summary.as_ref().unwrap().fixes > 0);

    let (kind, fixed) = controller()?.load(&output)?;
    assert_eq!(kind, FormatKind::Srt);
    assert_eq!(fixed.len(), 3, "the empty paragraph is removed");
    assert_eq!(fixed.paragraphs[0].text, "Hello there, how are you?");
    assert!(fixed.paragraphs[0].end_ms() < fixed.paragraphs[1].start_ms());
    assert!(fixed.paragraphs[1].text.starts_with("I am fine. Thanks"));
    assert_eq!(fixed.paragraphs[2].text, "<i>See you later.</i>");

    // The input is left alone
    assert_eq!(FileManager::read_to_string(&input)?, common::BROKEN_SRT);
    Ok(())
}

/// Test that list-only mode reports proposals and writes nothing
#[test]
fn test_fix_file_withListOnly_shouldNotWrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "broken.srt", common::BROKEN_SRT)?;
    let options = FixOptions {
        list_only: true,
        ..FixOptions::default()
    };

    let report = controller()?.fix_file(&input, &options)?;

    assert!(!report.records.is_empty());
    assert!(report.records.iter().all(|record| record.selected));
    assert!(report.summary.is_none());
    assert!(!FileManager::file_exists(temp_dir.path().join("broken.fixed.srt")));
    Ok(())
}

/// Test that an existing output is only replaced when forced
#[test]
fn test_fix_file_withExistingOutput_shouldRequireForce() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "clean.srt")?;
    common::create_test_file(temp_dir.path(), "clean.fixed.srt", "old")?;

    let controller = controller()?;
    assert!(controller.fix_file(&input, &FixOptions::default()).is_err());

    let options = FixOptions {
        force_overwrite: true,
        ..FixOptions::default()
    };
    let report = controller.fix_file(&input, &options)?;
    assert_eq!(report.summary.unwrap().fixes, 0);
    assert_ne!(FileManager::read_to_string(temp_dir.path().join("clean.fixed.srt"))?, "old");
    Ok(())
}

/// Test that a format override changes the written format and extension
#[test]
fn test_fix_file_withFormatOverride_shouldWriteAss() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "clean.srt")?;
    let out_dir = temp_dir.path().join("out");
    let options = FixOptions {
        output_dir: Some(out_dir.clone()),
        format: Some(FormatKind::Ass),
        ..FixOptions::default()
    };

    let report = controller()?.fix_file(&input, &options)?;

    assert_eq!(report.output.unwrap(), out_dir.join("clean.fixed.ass"));
    let (kind, subtitle) = controller()?.load(&out_dir.join("clean.fixed.ass"))?;
    assert_eq!(kind, FormatKind::Ass);
    assert_eq!(subtitle.len(), 3);
    Ok(())
}

/// Test that a folder run fixes every readable file and skips the rest
#[test]
fn test_fix_folder_withBadFile_shouldContinue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "a.srt", common::BROKEN_SRT)?;
    common::create_test_subtitle(temp_dir.path(), "b.srt")?;
    common::create_test_file(temp_dir.path(), "c.srt", "not a subtitle at all")?;

    let controller = controller()?;
    let reports = controller.fix_folder(temp_dir.path(), &FixOptions::default())?;

    assert_eq!(reports.len(), 2);
    assert!(FileManager::file_exists(temp_dir.path().join("a.fixed.srt")));
    assert!(FileManager::file_exists(temp_dir.path().join("b.fixed.srt")));

    // A second run ignores the fixed copies
    let options = FixOptions {
        force_overwrite: true,
        ..FixOptions::default()
    };
    let reports = controller.fix_folder(temp_dir.path(), &options)?;
    assert_eq!(reports.len(), 2);
    Ok(())
}

/// Test that a missing input is an error
#[test]
fn test_fix_file_withMissingInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let result = controller()?.fix_file(&temp_dir.path().join("missing.srt"), &FixOptions::default());
    assert!(result.is_err());
    Ok(())
}
