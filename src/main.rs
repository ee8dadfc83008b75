// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use subfix::app_config::{self, Config};
use subfix::app_controller::{Controller, FileReport, FixOptions};
use subfix::fixes::{FixRule, catalog};
use subfix::formats::FormatKind;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for FormatKind to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFormat {
    Ass,
    Srt,
    Sony,
}

impl From<CliFormat> for FormatKind {
    fn from(cli_format: CliFormat) -> Self {
        match cli_format {
            CliFormat::Ass => FormatKind::Ass,
            CliFormat::Srt => FormatKind::Srt,
            CliFormat::Sony => FormatKind::Sony,
        }
    }
}

/// Options shared by every subcommand
#[derive(Parser, Debug, Clone)]
struct CommonArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct FixArgs {
    /// Subtitle file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Only print the proposed fixes
    #[arg(long)]
    list_only: bool,

    /// Output directory (defaults to the input's directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the fixed subtitle in this format
    #[arg(long, value_enum)]
    format: Option<CliFormat>,

    /// Disable a rule by key or catalog index (repeatable)
    #[arg(short, long, value_name = "RULE")]
    disable: Vec<String>,

    /// Language code (e.g. 'en', 'da', 'es') or 'auto'
    #[arg(long)]
    language: Option<String>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fix common errors in subtitle files (default command)
    Fix(FixArgs),

    /// Convert a subtitle file to another format
    Convert {
        /// Subtitle file to convert
        input: PathBuf,

        /// Target format
        #[arg(short, long, value_enum)]
        to: CliFormat,

        /// Output file (defaults to the input name with the new extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Force overwrite of existing output files
        #[arg(short, long)]
        force_overwrite: bool,
    },

    /// Print the detected format and language of a subtitle file
    Detect {
        /// Subtitle file to inspect
        input: PathBuf,
    },

    /// Create a timed subtitle from a plain text file
    ImportText {
        /// Text file to import
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "srt")]
        to: CliFormat,

        /// Output file (defaults to the input name with the format's extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Force overwrite of existing output files
        #[arg(short, long)]
        force_overwrite: bool,
    },

    /// List the fix rules with examples
    Rules,

    /// Generate shell completions for subfix
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// subfix - subtitle error fixer
///
/// Detects and fixes common errors in subtitle files: timing, spacing,
/// punctuation, casing, italics and OCR mistakes.
#[derive(Parser, Debug)]
#[command(name = "subfix")]
#[command(version)]
#[command(about = "Fix common errors in subtitle files")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "subfix reads SubRip, Advanced Sub Station Alpha and Sony DVD Architect subtitles,
fixes common errors and writes the result next to the input as <name>.fixed.<ext>.

EXAMPLES:
    subfix movie.srt                            # Fix using the default config
    subfix fix --list-only movie.srt            # Show the proposed fixes only
    subfix fix -d break-long-lines movie.srt    # Skip a rule
    subfix fix --language da /subs/             # Fix a whole directory as Danish
    subfix convert movie.srt --to ass           # Convert to Advanced Sub Station Alpha
    subfix import-text script.txt               # Build a timed subtitle from text
    subfix rules                                # List all rules
    subfix completions bash > subfix.bash       # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    fix: Option<FixArgs>,

    #[command(flatten)]
    common: CommonArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // The logger itself lets everything through; log::set_max_level filters
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Prefix and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("✖", "1;31"),
            Level::Warn => ("!", "1;33"),
            Level::Info => (" ", "1;32"),
            Level::Debug => ("·", "1;36"),
            Level::Trace => ("»", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (prefix, color) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                color,
                now,
                prefix,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();
    let common = cli.common;

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subfix", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Rules) => {
            let config = load_config(&common)?;
            print_rules(&config);
            Ok(())
        }
        Some(Commands::Fix(args)) => run_fix(&common, args),
        Some(Commands::Convert { input, to, output, force_overwrite }) => {
            let controller = Controller::with_config(load_config(&common)?)?;
            let written = controller.convert(&input, to.into(), output, force_overwrite)?;
            info!("Success: {:?}", written);
            Ok(())
        }
        Some(Commands::Detect { input }) => {
            let controller = Controller::with_config(load_config(&common)?)?;
            let report = controller.detect(&input)?;
            println!(
                "{}\t{}\tparagraphs={}\terrors={}\tlanguage={}",
                input.display(),
                report.format,
                report.paragraphs,
                report.errors,
                report.language
            );
            Ok(())
        }
        Some(Commands::ImportText { input, to, output, force_overwrite }) => {
            let controller = Controller::with_config(load_config(&common)?)?;
            let written = controller.import_text(&input, to.into(), output, force_overwrite)?;
            info!("Success: {:?}", written);
            Ok(())
        }
        None => {
            // Default behavior: top-level args are the fix command's
            let args = cli.fix.ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;
            run_fix(&common, args)
        }
    }
}

/// Load the config file, creating a default one when missing, and apply the log level
fn load_config(common: &CommonArgs) -> Result<Config> {
    if let Some(cmd_log_level) = &common.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let config_path = Path::new(&common.config_path);
    let mut config = if config_path.exists() {
        Config::from_file(config_path)?
    } else if let Some(user_config) = user_config_path().filter(|path| path.exists()) {
        info!("Using configuration from {:?}", user_config);
        Config::from_file(user_config)?
    } else {
        warn!("Config file not found at '{}', creating default config.", common.config_path);
        let config = Config::default();
        config.save(config_path)?;
        config
    };

    match &common.log_level {
        Some(log_level) => config.log_level = log_level.clone().into(),
        None => log::set_max_level(config.log_level.to_level_filter()),
    }
    Ok(config)
}

/// Per-user configuration, used when the working directory has none
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("subfix").join("conf.json"))
}

fn run_fix(common: &CommonArgs, args: FixArgs) -> Result<()> {
    let mut config = load_config(common)?;
    if let Some(language) = &args.language {
        config.language = language.clone();
    }
    for key in &args.disable {
        let rule = FixRule::from_key(key)?;
        config.fixes.set_enabled(rule, false);
    }

    let controller = Controller::with_config(config)?;
    let options = FixOptions {
        list_only: args.list_only,
        output_dir: args.output,
        format: args.format.map(Into::into),
        force_overwrite: args.force_overwrite,
    };

    let reports = if args.input_path.is_file() {
        vec![controller.fix_file(&args.input_path, &options)?]
    } else if args.input_path.is_dir() {
        controller.fix_folder(&args.input_path, &options)?
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", args.input_path));
    };

    for report in &reports {
        print_report(report, args.list_only);
    }
    Ok(())
}

fn print_report(report: &FileReport, list_only: bool) {
    let one_line = |text: &str| text.replace('\n', " | ");

    if list_only {
        println!("{} ({}, {})", report.input.display(), report.format, report.language);
        for record in &report.records {
            println!(
                "  #{:<5} {:<45} {}  ->  {}",
                record.line,
                record.rule.key(),
                one_line(&record.before),
                one_line(&record.after)
            );
        }
        return;
    }

    if let (Some(summary), Some(output)) = (&report.summary, &report.output) {
        for entry in &summary.log.entries {
            println!("{}", entry);
        }
        println!(
            "{} -> {}: {} fix(es), {} error(s)",
            report.input.display(),
            output.display(),
            summary.fixes,
            summary.errors
        );
    }
}

fn print_rules(config: &Config) {
    // Language-specific rules are listed as if the file were short
    let items = catalog(&config.fixes, &config.language, 0);
    for (index, item) in items.iter().enumerate() {
        let language = item.rule.language().map(|code| format!(" [{}]", code)).unwrap_or_default();
        println!(
            "{:>2} [{}] {}{} ({})",
            index,
            if item.enabled { "x" } else { " " },
            item.name,
            language,
            item.rule.key()
        );
        if !item.example.is_empty() {
            println!("      {}", item.example);
        }
    }
}
