/*!
 * Plain text import.
 *
 * Turns untimed text into a subtitle:
 * - line mode: every input line becomes one paragraph
 * - auto mode: the text is split into sentences and re-flowed through the
 *   line breaker until every line fits
 *
 * Optionally continuation lines are merged in pairs. Durations come from
 * the reading-speed estimate (times 1.2) or a fixed value, and start times
 * are laid out one after another with a gap.
 */

use log::debug;

use crate::app_config::{SplitMode, TextImportSettings};
use crate::subtitle::{Paragraph, Subtitle};
use crate::text_utils::{DurationEstimator, LineBreaker, contains_letter};

/// Duration given to empty paragraphs
pub const EMPTY_PARAGRAPH_MS: i64 = 2000;

/// Auto durations are the reading-speed estimate times this factor
const AUTO_DURATION_FACTOR: f64 = 1.2;

// @struct: Text importer bound to its collaborators
pub struct TextImporter<'a> {
    pub settings: TextImportSettings,
    pub max_line_length: usize,
    breaker: &'a dyn LineBreaker,
    estimator: &'a dyn DurationEstimator,
}

impl<'a> TextImporter<'a> {
    pub fn new(
        settings: TextImportSettings,
        max_line_length: usize,
        breaker: &'a dyn LineBreaker,
        estimator: &'a dyn DurationEstimator,
    ) -> Self {
        Self {
            settings,
            max_line_length,
            breaker,
            estimator,
        }
    }

    /// Build a timed subtitle from text lines.
    pub fn import(&self, lines: &[String]) -> Subtitle {
        let texts = match self.settings.split_mode {
            SplitMode::Line => self.line_mode(lines.iter().map(String::as_str)),
            SplitMode::Auto => self.auto_split(lines),
        };

        let mut paragraphs: Vec<Paragraph> = texts.into_iter().map(|text| Paragraph::new(0, 0, text)).collect();
        if self.settings.merge_short_lines {
            paragraphs = self.merge_lines_with_continuation(paragraphs);
        }

        let mut subtitle = Subtitle::from_paragraphs(paragraphs);
        self.fix_durations(&mut subtitle);
        self.make_pseudo_start_times(&mut subtitle);
        debug!("Imported {} paragraph(s) from {} text line(s)", subtitle.len(), lines.len());
        subtitle
    }

    /// Filter lines by the empty/letterless settings, trimming the survivors.
    fn line_mode<'l>(&self, lines: impl Iterator<Item = &'l str>) -> Vec<String> {
        let mut texts = Vec::new();
        for line in lines {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                if !self.settings.remove_empty_lines {
                    texts.push(String::new());
                }
            } else if !contains_letter(trimmed) {
                if !self.settings.remove_lines_without_letters {
                    texts.push(trimmed.to_string());
                }
            } else {
                texts.push(trimmed.to_string());
            }
        }
        texts
    }

    fn auto_split(&self, lines: &[String]) -> Vec<String> {
        let kept = self.line_mode(lines.iter().map(String::as_str));
        let joined = kept.join(" ");
        let text = joined.split_whitespace().collect::<Vec<_>>().join(" ");

        let mut pieces = Vec::new();
        for sentence in split_sentences(&text) {
            self.split_to_fit(&mut pieces, &sentence);
        }
        pieces
    }

    /// Break `line` until every piece is shorter than the maximum line length.
    fn split_to_fit(&self, pieces: &mut Vec<String>, line: &str) {
        let broken = self.breaker.auto_break(line, self.max_line_length);
        let parts: Vec<&str> = broken.split('\n').filter(|part| !part.trim().is_empty()).collect();
        let unsplittable = parts.len() < 2;
        for part in parts {
            if part.chars().count() < self.max_line_length || unsplittable {
                pieces.push(part.trim().to_string());
            } else {
                self.split_to_fit(pieces, part);
            }
        }
    }

    /// Pair up consecutive one-line paragraphs that continue a sentence.
    fn merge_lines_with_continuation(&self, paragraphs: Vec<Paragraph>) -> Vec<Paragraph> {
        let limit = self.max_line_length.saturating_sub(5);
        let mut merged = Vec::with_capacity(paragraphs.len());
        let mut iter = paragraphs.into_iter().peekable();

        while let Some(paragraph) = iter.next() {
            let mergeable = iter.peek().is_some_and(|next| {
                let ends_sentence = paragraph.text.trim_end().ends_with(['.', '!', '?']);
                !paragraph.text.contains('\n')
                    && !ends_sentence
                    && paragraph.text.chars().count() < limit
                    && next.text.chars().count() < limit
            });

            match iter.next_if(|_| mergeable) {
                Some(next) => merged.push(Paragraph::new(0, 0, format!("{}\n{}", paragraph.text, next.text))),
                None => merged.push(paragraph),
            }
        }
        merged
    }

    fn fix_durations(&self, subtitle: &mut Subtitle) {
        for paragraph in &mut subtitle.paragraphs {
            let duration = if paragraph.text.is_empty() {
                EMPTY_PARAGRAPH_MS
            } else if let Some(fixed) = self.settings.fixed_duration_ms {
                fixed
            } else {
                (self.estimator.display_milliseconds(&paragraph.text) as f64 * AUTO_DURATION_FACTOR).round() as i64
            };
            paragraph.set_end_ms(paragraph.start_ms() + duration);
        }
    }

    fn make_pseudo_start_times(&self, subtitle: &mut Subtitle) {
        let gap = self.settings.gap_ms;
        let mut position = gap;
        for paragraph in &mut subtitle.paragraphs {
            let duration = paragraph.duration_ms();
            paragraph.set_start_ms(position);
            paragraph.set_end_ms(position + duration);
            position += duration + gap;
        }
    }
}

/// Split after each `.`, `!` or `?` that ends a word.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        current.push(c);
        let at_boundary = matches!(c, '.' | '!' | '?') && chars.peek().is_none_or(|next| *next == ' ');
        if at_boundary {
            sentences.push(current.trim().to_string());
            current.clear();
        }
    }
    if !current.trim().is_empty() {
        sentences.push(current.trim().to_string());
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_utils::{ReadingSpeed, SimpleLineBreaker};

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(String::from).collect()
    }

    #[test]
    fn test_import_withLineMode_shouldLayOutTimes() {
        let settings = TextImportSettings {
            fixed_duration_ms: Some(1000),
            ..TextImportSettings::default()
        };
        let speed = ReadingSpeed::default();
        let importer = TextImporter::new(settings, 43, &SimpleLineBreaker, &speed);
        let subtitle = importer.import(&lines("First line\n\n---\nSecond line"));

        let texts: Vec<&str> = subtitle.paragraphs.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["First line", "---", "Second line"]);
        assert_eq!(subtitle.paragraphs[0].start_ms(), 150);
        assert_eq!(subtitle.paragraphs[0].end_ms(), 1150);
        assert_eq!(subtitle.paragraphs[1].start_ms(), 1300);
        assert_eq!(subtitle.paragraphs[2].number, 3);
    }

    #[test]
    fn test_import_withLetterlessFilter_shouldDropSymbols() {
        let settings = TextImportSettings {
            remove_lines_without_letters: true,
            ..TextImportSettings::default()
        };
        let speed = ReadingSpeed::default();
        let importer = TextImporter::new(settings, 43, &SimpleLineBreaker, &speed);
        let subtitle = importer.import(&lines("Hello\n***\n123"));
        assert_eq!(subtitle.len(), 1);
        assert_eq!(subtitle.paragraphs[0].duration_ms(), 1200);
    }

    #[test]
    fn test_import_withAutoSplit_shouldFitEveryLine() {
        let settings = TextImportSettings {
            split_mode: SplitMode::Auto,
            ..TextImportSettings::default()
        };
        let speed = ReadingSpeed::default();
        let importer = TextImporter::new(settings, 20, &SimpleLineBreaker, &speed);
        let subtitle = importer.import(&lines(
            "This story begins on a cold night.\nNobody saw it coming! Did you?",
        ));
        assert!(subtitle.len() >= 4);
        for paragraph in &subtitle.paragraphs {
            assert!(paragraph.text.chars().count() < 20, "{}", paragraph.text);
        }
        assert_eq!(subtitle.paragraphs.last().map(|p| p.text.as_str()), Some("Did you?"));
    }

    #[test]
    fn test_import_withMergeShortLines_shouldJoinContinuations() {
        let settings = TextImportSettings {
            merge_short_lines: true,
            ..TextImportSettings::default()
        };
        let speed = ReadingSpeed::default();
        let importer = TextImporter::new(settings, 43, &SimpleLineBreaker, &speed);
        let subtitle = importer.import(&lines("I think that\nwe should go.\nReally.\nNow"));
        let texts: Vec<&str> = subtitle.paragraphs.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["I think that\nwe should go.", "Really.", "Now"]);
    }
}
