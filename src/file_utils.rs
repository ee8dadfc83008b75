use anyhow::{Result, Context, anyhow};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::formats::{FormatKind, split_lines};

// @module: File and directory utilities

/// Extensions picked up when a folder is scanned for subtitles
pub const SUBTITLE_EXTENSIONS: [&str; 4] = ["srt", "ass", "ssa", "sub"];

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    // @generates: Output path for a processed subtitle
    // @params: input_file, output_dir, suffix (may be empty), extension with or without dot
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
        suffix: &str,
        extension: &str,
    ) -> PathBuf {
        let input_file = input_file.as_ref();
        let stem = input_file.file_stem().unwrap_or_default();

        let mut output_filename = stem.to_string_lossy().to_string();
        if !suffix.is_empty() {
            output_filename.push('.');
            output_filename.push_str(suffix);
        }
        output_filename.push('.');
        output_filename.push_str(extension.trim_start_matches('.'));

        output_dir.as_ref().join(output_filename)
    }

    /// Find subtitle files below a directory, sorted by path
    pub fn find_subtitle_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            let is_subtitle = path.is_file()
                && path.extension().is_some_and(|ext| {
                    let ext = ext.to_string_lossy();
                    SUBTITLE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known))
                });
            if is_subtitle {
                result.push(path.to_path_buf());
            }
        }

        result.sort();
        debug!("Found {} subtitle file(s) in {:?}", result.len(), dir.as_ref());
        Ok(result)
    }

    /// Read a text file, replacing invalid UTF-8 rather than failing
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        let bytes = fs::read(path).with_context(|| format!("Failed to read file: {:?}", path))?;
        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!("{:?} is not valid UTF-8, invalid bytes were replaced", path);
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }

    /// Read a file as the line list the codecs consume
    pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
        Ok(split_lines(&Self::read_to_string(path)?))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Refuse to write over an existing file unless forced
    pub fn check_overwrite<P: AsRef<Path>>(path: P, force_overwrite: bool) -> Result<()> {
        let path = path.as_ref();
        if path.exists() && !force_overwrite {
            return Err(anyhow!("Output file already exists: {:?} (use -f to force overwrite)", path));
        }
        Ok(())
    }

    /// Guess the format from the file extension alone
    pub fn format_from_extension<P: AsRef<Path>>(path: P) -> Option<FormatKind> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| FormatKind::from_name(ext).ok())
    }
}
