/*!
 * Subtitle document model.
 *
 * - `time_code`: signed millisecond offsets
 * - `paragraph`: one timed text entry
 * - `container`: the ordered `Subtitle` collection
 * - `stripable_text`: leading/trailing markup splitting used by text rules
 */

pub mod time_code;
pub mod paragraph;
pub mod container;
pub mod stripable_text;

pub use time_code::TimeCode;
pub use paragraph::Paragraph;
pub use container::Subtitle;
pub use stripable_text::StripableText;
