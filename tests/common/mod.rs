/*!
 * Common test utilities for the subfix test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;

use subfix::app_config::Config;
use subfix::fixes::{FixRule, FixSession, Collaborators};
use subfix::subtitle::{Paragraph, Subtitle};

/// SubRip file with several fixable problems
pub const BROKEN_SRT: &str = "1
00:00:01,000 --> 00:00:04,000
Hello there ,how are you ?

2
00:00:03,500 --> 00:00:07,000
i am fine.thanks

3
00:00:08,000 --> 00:00:10,000


4
00:00:11,000 --> 00:00:14,000
<i>See you later.<i>
";

/// Clean SubRip file
pub const CLEAN_SRT: &str = "1
00:00:01,000 --> 00:00:04,000
This is a test subtitle.

2
00:00:05,000 --> 00:00:09,000
It contains multiple entries.

3
00:00:10,000 --> 00:00:14,000
For testing purposes.
";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample subtitle file for testing
pub fn create_test_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, CLEAN_SRT)
}

/// Config with only the given rules enabled
pub fn config_with_rules(rules: &[FixRule]) -> Config {
    let mut config = Config::default();
    config.language = "en".to_string();
    for rule in FixRule::ALL {
        config.fixes.set_enabled(rule, rules.contains(&rule));
    }
    config
}

/// Paragraphs four seconds apart, each shown for three seconds
pub fn subtitle(texts: &[&str]) -> Subtitle {
    let paragraphs = texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let start = i as i64 * 4000;
            Paragraph::new(start, start + 3000, *text)
        })
        .collect();
    Subtitle::from_paragraphs(paragraphs)
}

/// Session over `texts` with only `rules` enabled
pub fn session_with_rules(texts: &[&str], rules: &[FixRule], language: &str) -> Result<FixSession> {
    let config = config_with_rules(rules);
    let collaborators = Collaborators::from_settings(&config.fixes);
    FixSession::new(subtitle(texts), config.fixes, language, collaborators)
}

/// Texts of all paragraphs
pub fn texts(subtitle: &Subtitle) -> Vec<String> {
    subtitle.paragraphs.iter().map(|p| p.text.clone()).collect()
}

/// Route library logs to the test output; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
