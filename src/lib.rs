/*!
 * # subfix - subtitle error fixer
 *
 * A Rust library for detecting and fixing common errors in subtitle files.
 *
 * ## Features
 *
 * - Read and write subtitle formats:
 *   - SubRip (.srt)
 *   - Advanced Sub Station Alpha (.ass/.ssa)
 *   - Sony DVD Architect (.sub)
 * - Fix timing errors: overlaps, too short and too long display times
 * - Fix text errors: spacing, punctuation, casing, italics, line breaks
 * - Language specific rules for Danish and Spanish
 * - List proposed fixes, select them, then apply
 * - Import plain text as a timed subtitle
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `subtitle`: The subtitle model (time codes, paragraphs, stripable text)
 * - `formats`: Format codecs with detection and tolerant loading
 * - `fixes`: The fix rules and the session driving them:
 *   - `fixes::engine`: Listing, selection and application of fixes
 * - `text_utils`: Line breaking, reading speed and name lists
 * - `language_utils`: ISO language codes and language detection
 * - `app_config`: Configuration management
 * - `app_controller`: File level workflows
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod fixes;
pub mod formats;
pub mod language_utils;
pub mod subtitle;
pub mod text_utils;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, FixError, FormatError, TimeCodeError};
pub use fixes::{FixRecord, FixRule, FixSession, FixSummary, fix_all};
pub use formats::{FormatKind, SubtitleFormat};
pub use subtitle::{Paragraph, Subtitle, TimeCode};
