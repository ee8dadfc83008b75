/*!
 * Unneeded and missing spaces around punctuation and tags.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::subtitle::Subtitle;
use crate::text_utils::char_at;

use super::{FixContext, FixRule, fix_each_text};

/// One cleanup step of the unneeded-space rule
enum SpaceEdit {
    /// Replace until the pattern no longer occurs
    Collapse(&'static str, &'static str),
    Replace(&'static str, &'static str),
    /// Rewrite a trailing pattern
    Suffix(&'static str, &'static str),
    /// Rewrite a leading pattern
    Prefix(&'static str, &'static str),
    TrimEnd,
}

// Applied in order
const SPACE_EDITS: &[SpaceEdit] = &[
    SpaceEdit::Collapse("  ", " "),
    SpaceEdit::Collapse(" ,", ","),
    SpaceEdit::Replace(" \n", "\n"),
    SpaceEdit::TrimEnd,
    SpaceEdit::Suffix(" .", "."),
    SpaceEdit::Suffix(" \"", "\""),
    SpaceEdit::Suffix(" !", "!"),
    SpaceEdit::Suffix(" ?</i>", "?</i>"),
    SpaceEdit::Suffix(" ?", "?"),
    SpaceEdit::Suffix(" </i>", "</i>"),
    SpaceEdit::Suffix(" </I>", "</I>"),
    SpaceEdit::Replace(" \"\n", "\"\n"),
    SpaceEdit::Replace(" .\n", ".\n"),
    SpaceEdit::Replace(" !\n", "!\n"),
    SpaceEdit::Replace("! </i>\n", "!</i>\n"),
    SpaceEdit::Replace(" !</i>\n", "!</i>\n"),
    SpaceEdit::Replace(" ?\n", "?\n"),
    SpaceEdit::Replace(" ?</i>\n", "?</i>\n"),
    SpaceEdit::Replace("? </i>\n", "?</i>\n"),
    SpaceEdit::Replace(" </i>\n", "</i>\n"),
    SpaceEdit::Replace(" </I>\n", "</I>\n"),
    SpaceEdit::Prefix("<i> ", "<i>"),
    SpaceEdit::Prefix("<I> ", "<I>"),
    SpaceEdit::Replace("\n<i> ", "\n<i>"),
    SpaceEdit::Replace("\n<I> ", "\n<I>"),
];

impl SpaceEdit {
    fn apply(&self, text: String) -> String {
        match self {
            SpaceEdit::Collapse(from, to) => {
                let mut text = text;
                while text.contains(from) {
                    text = text.replace(from, to);
                }
                text
            }
            SpaceEdit::Replace(from, to) => text.replace(from, to),
            SpaceEdit::Suffix(from, to) => match text.strip_suffix(from) {
                Some(head) => format!("{}{}", head, to),
                None => text,
            },
            SpaceEdit::Prefix(from, to) => match text.strip_prefix(from) {
                Some(tail) => format!("{}{}", to, tail),
                None => text,
            },
            SpaceEdit::TrimEnd => text.trim_end().to_string(),
        }
    }
}

/// Remove spaces before punctuation, line breaks and closing tags.
pub fn remove_unneeded_spaces(text: &str) -> String {
    SPACE_EDITS.iter().fold(text.to_string(), |text, edit| edit.apply(text))
}

pub fn fix_unneeded_spaces(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(
        subtitle,
        ctx,
        FixRule::UnneededSpaces,
        "unneeded spaces removed",
        |subtitle, index, _| remove_unneeded_spaces(&subtitle.paragraphs[index].text),
    );
}

/// Punctuation directly followed by a non-space character
static MISSING_SPACE_REGEXES: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        Regex::new(r"[^\s\d],[^\s]").expect("Invalid comma regex"),
        Regex::new(r"[^\s\d]\?[a-zA-Z]").expect("Invalid question mark regex"),
        Regex::new(r"[^\s\d]![a-zA-Z]").expect("Invalid exclamation mark regex"),
        Regex::new(r"[^\s\d]:[a-zA-Z]").expect("Invalid colon regex"),
    ]
});

static MISSING_SPACE_AFTER_PERIOD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-z]\.[a-zA-Z]").expect("Invalid period regex")
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\w\.(com|net|org)\b").expect("Invalid url regex")
});

/// Byte offset of the punctuation inside a match: the first char is the
/// letter before it.
fn punctuation_offset(text: &str, match_start: usize) -> usize {
    match_start + char_at(text, match_start).map_or(1, char::len_utf8)
}

/// Insert a space after every punctuation mark matched by `regex`, unless
/// `skip` rejects the position.
fn insert_spaces<F>(text: &str, regex: &Regex, mut skip: F) -> String
where
    F: FnMut(&str, usize) -> bool,
{
    let mut text = text.to_string();
    let mut from = 0;
    while let Some(found) = regex.find_at(&text, from) {
        let mark = punctuation_offset(&text, found.start());
        let after = mark + 1;
        from = after;
        if skip(&text, mark) {
            continue;
        }
        text.insert(after, ' ');
        from = after + 1;
    }
    text
}

/// Whole word around byte offset `at`, delimited by whitespace.
fn word_around(text: &str, at: usize) -> &str {
    let start = text[..at].rfind(char::is_whitespace).map_or(0, |i| i + 1);
    let end = text[at..].find(char::is_whitespace).map_or(text.len(), |i| at + i);
    &text[start..end]
}

/// "e.g.", "a.k.a" and similar dotted initialisms.
fn is_dotted_initialism(word: &str) -> bool {
    let segments: Vec<&str> = word.trim_end_matches('.').split('.').collect();
    segments.len() > 1 && segments.iter().all(|segment| segment.chars().count() == 1)
}

fn add_missing_spaces(text: &str, ctx: &FixContext) -> String {
    let mut text = text.to_string();
    for regex in MISSING_SPACE_REGEXES.iter() {
        text = insert_spaces(&text, regex, |text, mark| {
            matches!(char_at(text, mark + 1), Some('"') | Some('<'))
        });
    }

    let lowered = text.to_lowercase();
    if lowered.contains("www.") || lowered.contains("http://") || lowered.contains("https://") || URL_REGEX.is_match(&lowered) {
        return text;
    }

    insert_spaces(&text, &MISSING_SPACE_AFTER_PERIOD_REGEX, |text, mark| {
        let word = word_around(text, mark);
        let bare = word.trim_matches(|c: char| !c.is_alphanumeric() && c != '.');
        is_dotted_initialism(bare)
            || bare.to_lowercase().contains("ph.d")
            || bare.find('.').is_some_and(|dot| ctx.is_abbreviation(&bare[..=dot]))
    })
}

pub fn fix_missing_spaces(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(
        subtitle,
        ctx,
        FixRule::MissingSpaces,
        "missing spaces added",
        |subtitle, index, ctx| add_missing_spaces(&subtitle.paragraphs[index].text, ctx),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixes::test_support::{run_rule, subtitle, texts};

    #[test]
    fn test_removeUnneededSpaces_shouldCleanPunctuationAndTags() {
        assert_eq!(remove_unneeded_spaces("Hello  there ,you ."), "Hello there,you.");
        assert_eq!(remove_unneeded_spaces("What ?\nNo !"), "What?\nNo!");
        assert_eq!(remove_unneeded_spaces("<i> Quiet </i>"), "<i>Quiet</i>");
        assert_eq!(remove_unneeded_spaces("Hi \n<i> there</i> "), "Hi\n<i>there</i>");
    }

    #[test]
    fn test_missingSpaces_shouldInsertAfterPunctuation() {
        let mut sub = subtitle(&["Hello,world", "Really?Yes!Go", "Note:done", "It's 1,000 km"]);
        let records = run_rule(FixRule::MissingSpaces, &mut sub, "en");
        assert_eq!(records.len(), 3);
        assert_eq!(texts(&sub), vec!["Hello, world", "Really? Yes! Go", "Note: done", "It's 1,000 km"]);
    }

    #[test]
    fn test_missingSpaces_withPeriod_shouldSkipAbbreviationsAndUrls() {
        let mut sub = subtitle(&[
            "It ended.Then we left.",
            "Bring snacks, e.g. chips.",
            "Visit www.example.com now.",
            "Mr.Smith is here.",
        ]);
        run_rule(FixRule::MissingSpaces, &mut sub, "en");
        assert_eq!(
            texts(&sub),
            vec![
                "It ended. Then we left.",
                "Bring snacks, e.g. chips.",
                "Visit www.example.com now.",
                "Mr.Smith is here.",
            ]
        );
    }

    #[test]
    fn test_missingSpaces_withQuoteOrTagAfterComma_shouldKeep() {
        let mut sub = subtitle(&["\"Yes,\" he said.", "Well,<i>maybe</i>"]);
        let records = run_rule(FixRule::MissingSpaces, &mut sub, "en");
        assert!(records.is_empty());
    }
}
