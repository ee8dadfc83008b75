/*!
 * Ordered collection of paragraphs.
 *
 * - Vector order is the display order; `Paragraph::number` is only a label
 * - Neighbor lookups return `None` when out of range instead of panicking
 * - Header and footer hold format specific blocks kept for round trips
 */

use std::fmt;

use super::paragraph::Paragraph;

/// One file worth of subtitles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subtitle {
    /// Paragraphs in display order
    pub paragraphs: Vec<Paragraph>,

    /// Format specific header, e.g. the SubStation script info and styles
    pub header: Option<String>,

    /// Format specific footer, e.g. an embedded `[Fonts]` section
    pub footer: Option<String>,

    /// Name of the file this was loaded from, if any
    pub file_name: Option<String>,
}

impl Subtitle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_paragraphs(paragraphs: Vec<Paragraph>) -> Self {
        let mut subtitle = Self {
            paragraphs,
            ..Self::default()
        };
        subtitle.renumber(1);
        subtitle
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Reset every paragraph number to `start`, `start + 1`, ...
    pub fn renumber(&mut self, start: i32) {
        for (offset, paragraph) in self.paragraphs.iter_mut().enumerate() {
            paragraph.number = start + offset as i32;
        }
    }

    /// The number of the first paragraph, or 1 for an empty subtitle.
    pub fn first_number(&self) -> i32 {
        self.paragraphs.first().map_or(1, |p| p.number)
    }

    pub fn get(&self, index: usize) -> Option<&Paragraph> {
        self.paragraphs.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Paragraph> {
        self.paragraphs.get_mut(index)
    }

    /// Lookup by a possibly negative index; anything out of range is `None`.
    pub fn get_or_none(&self, index: isize) -> Option<&Paragraph> {
        if index < 0 {
            None
        } else {
            self.paragraphs.get(index as usize)
        }
    }

    pub fn previous(&self, index: usize) -> Option<&Paragraph> {
        index.checked_sub(1).and_then(|i| self.paragraphs.get(i))
    }

    pub fn next(&self, index: usize) -> Option<&Paragraph> {
        self.paragraphs.get(index + 1)
    }

    /// Index of the paragraph carrying `number`
    pub fn index_of_number(&self, number: i32) -> Option<usize> {
        self.paragraphs.iter().position(|p| p.number == number)
    }

    pub fn remove(&mut self, index: usize) -> Option<Paragraph> {
        if index < self.paragraphs.len() {
            Some(self.paragraphs.remove(index))
        } else {
            None
        }
    }

    /// Every paragraph's text, one paragraph per line; used by language detection.
    pub fn all_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Subtitle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle")?;
        if let Some(name) = &self.file_name {
            writeln!(f, "Source: {}", name)?;
        }
        writeln!(f, "Paragraphs: {}", self.paragraphs.len())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Subtitle {
        Subtitle::from_paragraphs(vec![
            Paragraph::new(0, 1000, "one"),
            Paragraph::new(1000, 2000, "two"),
            Paragraph::new(2000, 3000, "three"),
        ])
    }

    #[test]
    fn test_neighbors_atEdges_shouldReturnNone() {
        let subtitle = sample();
        assert!(subtitle.previous(0).is_none());
        assert!(subtitle.next(2).is_none());
        assert!(subtitle.get_or_none(-1).is_none());
        assert!(subtitle.get_or_none(3).is_none());
        assert_eq!(subtitle.next(0).map(|p| p.text.as_str()), Some("two"));
    }

    #[test]
    fn test_renumber_withExplicitStart_shouldAssignSequentialNumbers() {
        let mut subtitle = sample();
        subtitle.renumber(5);
        let numbers: Vec<i32> = subtitle.paragraphs.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![5, 6, 7]);
        assert_eq!(subtitle.index_of_number(6), Some(1));
    }
}
