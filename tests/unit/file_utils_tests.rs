/*!
 * Tests for file utility functions
 */

use std::path::Path;
use anyhow::Result;
use subfix::file_utils::FileManager;
use subfix::formats::FormatKind;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "exists.srt", "content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::dir_exists(&test_file));
    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.srt"));
}

/// Test that generate_output_path builds the fixed file name
#[test]
fn test_generate_output_path_withFixedSuffix_shouldCreateCorrectPath() {
    let output_path = FileManager::generate_output_path(
        Path::new("/tmp/input/movie.srt"),
        Path::new("/tmp/output"),
        "fixed",
        ".ass",
    );
    assert_eq!(output_path, Path::new("/tmp/output/movie.fixed.ass"));
}

/// Test that write_to_file creates missing parent directories
#[test]
fn test_write_to_file_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("a").join("b").join("out.srt");

    FileManager::write_to_file(&target, "text")?;

    assert_eq!(FileManager::read_to_string(&target)?, "text");
    Ok(())
}

/// Test that read_lines splits CRLF files into plain lines
#[test]
fn test_read_lines_withCrlf_shouldSplitCleanly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "crlf.srt", "1\r\n00:00:01,000 --> 00:00:02,000\r\nHi\r\n")?;

    let lines = FileManager::read_lines(&file)?;

    assert_eq!(lines, vec!["1", "00:00:01,000 --> 00:00:02,000", "Hi"]);
    Ok(())
}

/// Test that find_subtitle_files only returns known subtitle extensions
#[test]
fn test_find_subtitle_files_withMixedFiles_shouldReturnSubtitlesOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_subtitle(temp_dir.path(), "one.srt")?;
    common::create_test_file(temp_dir.path(), "two.ssa", "")?;
    common::create_test_file(temp_dir.path(), "video.mkv", "")?;

    let files = FileManager::find_subtitle_files(temp_dir.path())?;

    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.extension().unwrap() != "mkv"));
    Ok(())
}

/// Test that format_from_extension maps known extensions
#[test]
fn test_format_from_extension_withKnownExtensions_shouldResolve() {
    assert_eq!(FileManager::format_from_extension("a.srt"), Some(FormatKind::Srt));
    assert_eq!(FileManager::format_from_extension("a.SSA"), Some(FormatKind::Ass));
    assert_eq!(FileManager::format_from_extension("a.sub"), Some(FormatKind::Sony));
    assert_eq!(FileManager::format_from_extension("a.txt"), None);
}
