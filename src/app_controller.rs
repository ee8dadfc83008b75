use anyhow::{Result, Context, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::fixes::{Collaborators, FixRecord, FixSession, FixSummary};
use crate::formats::{self, AdvancedSubStationAlpha, FormatKind, SubtitleFormat, TextImporter};
use crate::language_utils;
use crate::subtitle::Subtitle;

// @module: Application controller for subtitle processing

/// File name suffix of fixed subtitles written next to their input
pub const FIXED_SUFFIX: &str = "fixed";

/// How a fix run should behave
#[derive(Debug, Clone, Default)]
pub struct FixOptions {
    // @field: Only list the proposed fixes, write nothing
    pub list_only: bool,

    // @field: Directory for fixed files; defaults to the input's directory
    pub output_dir: Option<PathBuf>,

    // @field: Write in this format instead of the input's
    pub format: Option<FormatKind>,

    pub force_overwrite: bool,
}

/// What happened to one input file
#[derive(Debug, Clone)]
pub struct FileReport {
    pub input: PathBuf,
    pub format: FormatKind,
    pub language: String,

    // @field: Proposed fixes (list mode) or those still pending after apply
    pub records: Vec<FixRecord>,

    // @field: Set when fixes were applied
    pub summary: Option<FixSummary>,

    pub output: Option<PathBuf>,
}

/// Result of format and language detection
#[derive(Debug, Clone, PartialEq)]
pub struct DetectReport {
    pub format: FormatKind,
    pub paragraphs: usize,
    pub errors: usize,
    pub language: String,
}

/// Main application controller for subtitle fixing
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The codec for a format, with the configured style for ASS output
    pub fn codec(&self, kind: FormatKind) -> Result<Box<dyn SubtitleFormat>> {
        Ok(match kind {
            FormatKind::Ass => {
                let ssa = &self.config.ssa;
                Box::new(AdvancedSubStationAlpha::new(&ssa.font_name, ssa.font_size, ssa.primary_color()?))
            }
            other => other.codec(),
        })
    }

    /// Read a subtitle file in whatever supported format it is
    pub fn load(&self, input_file: &Path) -> Result<(FormatKind, Subtitle)> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }
        let lines = FileManager::read_lines(input_file)?;
        let file_name = input_file.to_string_lossy();
        let (kind, subtitle, report) = formats::load_any(&lines, &file_name)
            .with_context(|| format!("Failed to load subtitle: {:?}", input_file))?;
        debug!(
            "Loaded {} paragraph(s) from {:?} as {} ({} error(s))",
            subtitle.len(),
            input_file,
            kind,
            report.errors
        );
        Ok((kind, subtitle))
    }

    /// Serialize for `target`, dropping inline codes of `source` when the format changes
    fn to_text(&self, source: FormatKind, target: FormatKind, subtitle: &Subtitle, input_file: &Path) -> Result<String> {
        let title = input_file.file_stem().unwrap_or_default().to_string_lossy().to_string();
        if source == target {
            return Ok(self.codec(target)?.to_text(subtitle, &title));
        }
        let mut converted = subtitle.clone();
        source.codec().remove_native_formatting(&mut converted);
        Ok(self.codec(target)?.to_text(&converted, &title))
    }

    /// Detect format and language of a subtitle file
    pub fn detect(&self, input_file: &Path) -> Result<DetectReport> {
        let lines = FileManager::read_lines(input_file)?;
        let file_name = input_file.to_string_lossy();
        let (format, subtitle, report) = formats::load_any(&lines, &file_name)
            .with_context(|| format!("Failed to detect subtitle format: {:?}", input_file))?;
        let language = language_utils::resolve_language(&self.config.language, &subtitle.all_text())?;
        Ok(DetectReport {
            format,
            paragraphs: subtitle.len(),
            errors: report.errors,
            language,
        })
    }

    /// List or apply the enabled fixes on one file
    pub fn fix_file(&self, input_file: &Path, options: &FixOptions) -> Result<FileReport> {
        let start_time = Instant::now();
        let (format, subtitle) = self.load(input_file)?;
        let collaborators = Collaborators::from_config(&self.config)?;
        let mut session = FixSession::new(subtitle, self.config.fixes.clone(), &self.config.language, collaborators)
            .with_context(|| format!("Failed to prepare fixes for {:?}", input_file))?;

        let mut report = FileReport {
            input: input_file.to_path_buf(),
            format,
            language: session.language().to_string(),
            records: Vec::new(),
            summary: None,
            output: None,
        };

        if options.list_only {
            report.records = session.list_fixes().to_vec();
            info!("{:?}: {} fix(es) proposed", input_file, report.records.len());
            return Ok(report);
        }

        let target = options.format.unwrap_or(format);
        let output_dir = options
            .output_dir
            .clone()
            .unwrap_or_else(|| input_file.parent().unwrap_or(Path::new(".")).to_path_buf());
        let output_path = FileManager::generate_output_path(input_file, &output_dir, FIXED_SUFFIX, target.extension());
        FileManager::check_overwrite(&output_path, options.force_overwrite)?;

        let summary = session.apply();
        if summary.important > 0 {
            warn!("{:?}: {} problem(s) need manual attention", input_file, summary.important);
        }
        let text = self.to_text(format, target, session.subtitle(), input_file)?;
        FileManager::write_to_file(&output_path, &text)?;

        info!(
            "Fixed {:?}: {} fix(es), {} error(s) in {}",
            input_file,
            summary.fixes,
            summary.errors,
            Self::format_duration(start_time.elapsed())
        );
        report.records = session.records().to_vec();
        report.summary = Some(summary);
        report.output = Some(output_path);
        Ok(report)
    }

    /// Fix every subtitle file below a directory; failures are logged and skipped
    pub fn fix_folder(&self, input_dir: &Path, options: &FixOptions) -> Result<Vec<FileReport>> {
        let start_time = Instant::now();
        let files = FileManager::find_subtitle_files(input_dir)?;
        if files.is_empty() {
            warn!("No subtitle files found in {:?}", input_dir);
            return Ok(Vec::new());
        }

        let folder_pb = ProgressBar::new(files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));

        let mut reports = Vec::new();
        let mut failed = 0;
        for file in &files {
            folder_pb.set_message(file.file_name().unwrap_or_default().to_string_lossy().to_string());
            let is_own_output = file
                .file_stem()
                .is_some_and(|stem| stem.to_string_lossy().ends_with(&format!(".{}", FIXED_SUFFIX)));
            if is_own_output {
                debug!("Skipping already fixed file {:?}", file);
            } else {
                match folder_pb.suspend(|| self.fix_file(file, options)) {
                    Ok(report) => reports.push(report),
                    Err(e) => {
                        failed += 1;
                        folder_pb.suspend(|| error!("Error processing {:?}: {:#}", file, e));
                    }
                }
            }
            folder_pb.inc(1);
        }
        folder_pb.finish_and_clear();

        info!(
            "Finished {} file(s), {} failed, in {}",
            reports.len(),
            failed,
            Self::format_duration(start_time.elapsed())
        );
        Ok(reports)
    }

    /// Convert a subtitle file to another format; returns the written path
    pub fn convert(&self, input_file: &Path, target: FormatKind, output: Option<PathBuf>, force_overwrite: bool) -> Result<PathBuf> {
        let (source, subtitle) = self.load(input_file)?;
        let output_path = output.unwrap_or_else(|| {
            let dir = input_file.parent().unwrap_or(Path::new("."));
            FileManager::generate_output_path(input_file, dir, "", target.extension())
        });
        if output_path == input_file {
            return Err(anyhow!("Refusing to convert {:?} onto itself", input_file));
        }
        FileManager::check_overwrite(&output_path, force_overwrite)?;

        let text = self.to_text(source, target, &subtitle, input_file)?;
        FileManager::write_to_file(&output_path, &text)?;
        info!("Converted {:?} from {} to {}: {:?}", input_file, source, target, output_path);
        Ok(output_path)
    }

    /// Turn a plain text file into a timed subtitle
    pub fn import_text(&self, input_file: &Path, target: FormatKind, output: Option<PathBuf>, force_overwrite: bool) -> Result<PathBuf> {
        let lines = FileManager::read_lines(input_file)?;
        let collaborators = Collaborators::from_config(&self.config)?;
        let importer = TextImporter::new(
            self.config.import.clone(),
            self.config.fixes.max_line_length,
            collaborators.line_breaker.as_ref(),
            collaborators.estimator.as_ref(),
        );
        let subtitle = importer.import(&lines);
        if subtitle.is_empty() {
            return Err(anyhow!("No text to import in {:?}", input_file));
        }

        let output_path = output.unwrap_or_else(|| {
            let dir = input_file.parent().unwrap_or(Path::new("."));
            FileManager::generate_output_path(input_file, dir, "", target.extension())
        });
        FileManager::check_overwrite(&output_path, force_overwrite)?;

        let text = self.to_text(target, target, &subtitle, input_file)?;
        FileManager::write_to_file(&output_path, &text)?;
        info!("Imported {} paragraph(s) from {:?}: {:?}", subtitle.len(), input_file, output_path);
        Ok(output_path)
    }

    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
