/*!
 * Uppercase/lowercase repairs.
 *
 * - an OCR'd uppercase `I` inside a lowercase word becomes `l`
 * - a paragraph, a second line or a dialogue line starts uppercase after a
 *   finished sentence
 * - a sentence inside a paragraph starts uppercase after `.`, `!` or `?`
 * - a lone lowercase `i` becomes `I` (English)
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::subtitle::{StripableText, Subtitle};
use crate::text_utils::{char_at, char_before, remove_html_tags, uppercase_first};

use super::{FixContext, FixRule, fix_each_text};

static LOWERCASE_THEN_I_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zæøåäöé]I").expect("Invalid lowercase-I regex")
});

static I_THEN_LOWERCASE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"I[a-zæøåäöé]").expect("Invalid I-lowercase regex")
});

static ALONE_I_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bi\b").expect("Invalid alone-i regex")
});

/// Characters that end a word for name lookups
const WORD_BOUNDARIES: &str = "\n ,.!?\"'=()/-";

/// Words starting with `I` that must never become `l`
const REAL_I_WORDS: [&str; 3] = ["internal", "island", "islands"];

/// Prefixes kept in front of the letter that gets uppercased
const ITALIC_PREFIXES: [&str; 4] = ["<i> ", "<i>", "<I> ", "<I>"];

/// Line starts that mark a dialogue line after a line break
const DIALOGUE_BREAKS: [&str; 4] = ["\n -", "\n-", "\n<i>-", "\n<i> -"];

/// The word containing byte offset `at`.
fn whole_word(text: &str, at: usize) -> &str {
    let start = text[..at].rfind(|c| WORD_BOUNDARIES.contains(c)).map_or(0, |i| i + 1);
    let end = text[at..].find(|c| WORD_BOUNDARIES.contains(c)).map_or(text.len(), |i| at + i);
    &text[start..end]
}

fn replace_i_with_l(text: &mut String, at: usize) {
    text.replace_range(at..at + 1, "l");
}

pub fn fix_uppercase_i_inside_words(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(
        subtitle,
        ctx,
        FixRule::UppercaseIInsideLowercaseWord,
        "uppercase 'I's inside lowercase words fixed",
        |subtitle, index, ctx| fix_uppercase_i(&subtitle.paragraphs[index].text, ctx),
    );
}

fn fix_uppercase_i(text: &str, ctx: &FixContext) -> String {
    let mut text = text.to_string();

    // "HeIlo" -> "Hello"; Irish names keep their capital
    let after_lowercase: Vec<usize> = LOWERCASE_THEN_I_REGEX
        .find_iter(&text)
        .filter(|found| !(found.as_str().starts_with('c') && char_before(&text, found.start()) == Some('M')))
        .map(|found| found.end() - 1)
        .filter(|&at| !ctx.is_name(whole_word(&text, at)))
        .collect();
    for at in after_lowercase {
        replace_i_with_l(&mut text, at);
    }

    // "The Iast" -> "The last", judged on the text without markup
    let mut st = StripableText::new(&text);
    let before_lowercase: Vec<usize> = I_THEN_LOWERCASE_REGEX
        .find_iter(&st.stripped_text)
        .map(|found| found.start())
        .filter(|&at| {
            let stripped = st.stripped_text.as_str();
            let word = whole_word(stripped, at);
            if at == 0 || ctx.is_name(word) || REAL_I_WORDS.contains(&word.to_lowercase().as_str()) {
                return false;
            }
            let continues_sentence = |before: Option<char>| before.is_some_and(|c| c.is_alphanumeric() || c == ',');
            match char_before(stripped, at) {
                Some(' ') | Some('\n') if at > 2 => continues_sentence(char_before(stripped, at - 1)),
                Some(' ') | Some('\n') => true,
                Some('"') | Some('>') if at > 1 => false,
                Some('c') if at >= 2 && char_before(stripped, at - 1) == Some('M') => false,
                _ => true,
            }
        })
        .collect();
    if !before_lowercase.is_empty() {
        for at in before_lowercase {
            replace_i_with_l(&mut st.stripped_text, at);
        }
        text = st.merged_string();
    }

    text
}

pub fn fix_start_with_uppercase_after_paragraph(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(
        subtitle,
        ctx,
        FixRule::StartWithUppercaseAfterParagraph,
        "paragraphs now start uppercase",
        |subtitle, index, ctx| {
            let previous = subtitle.previous(index).map(|prev| remove_html_tags(&prev.text));
            start_paragraph_uppercase(&subtitle.paragraphs[index].text, previous.as_deref(), ctx.language)
        },
    );
}

/// Does `previous` end a sentence so that the next text starts a new one?
fn ends_sentence(previous: &str, language: &str) -> bool {
    let finished = previous.chars().count() > 1
        && !previous.ends_with("...")
        && previous.ends_with(['.', '!', '?', ':', ';']);
    let known_abbreviation =
        language == "en" && [" o.r.", " a.m.", " p.m."].iter().any(|abbr| previous.ends_with(abbr));
    finished && !known_abbreviation
}

/// Uppercase the first letter of `line`, behind an optional italic tag.
fn uppercase_line_start(line: &str, previous: &str, language: &str) -> Option<String> {
    if line.chars().count() <= 1 {
        return None;
    }
    let (pre, rest) = ITALIC_PREFIXES
        .iter()
        .find_map(|prefix| line.strip_prefix(prefix).filter(|rest| !rest.is_empty()).map(|rest| (*prefix, rest)))
        .unwrap_or(("", line));

    let starts_lowercase = rest.chars().next().is_some_and(char::is_lowercase);
    if starts_lowercase && !rest.starts_with("www.") && ends_sentence(previous, language) {
        Some(format!("{}{}", pre, uppercase_first(rest)))
    } else {
        None
    }
}

fn start_paragraph_uppercase(text: &str, previous: Option<&str>, language: &str) -> String {
    let mut text = uppercase_line_start(text, previous.unwrap_or(" ."), language).unwrap_or_else(|| text.to_string());

    let lines: Vec<&str> = text.split('\n').collect();
    if let [first, second] = lines.as_slice() {
        if let Some(fixed) = uppercase_line_start(second, &remove_html_tags(first), language) {
            text = format!("{}\n{}", first, fixed);
        }
    }

    if text.chars().count() > 4 {
        let dialogue = text
            .get(1..)
            .and_then(|tail| DIALOGUE_BREAKS.iter().find_map(|pattern| tail.find(pattern)))
            .map(|i| i + 2);
        if let Some(line_start) = dialogue {
            let mut st = StripableText::new(&text[line_start..]);
            if st.first_char().is_some_and(char::is_lowercase) {
                st.uppercase_first();
                text = format!("{}{}", &text[..line_start], st.merged_string());
            }
        }
    }

    text
}

pub fn fix_start_with_uppercase_after_period_inside_paragraph(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(
        subtitle,
        ctx,
        FixRule::StartWithUppercaseAfterPeriodInsideParagraph,
        "sentences now start uppercase",
        |subtitle, index, ctx| uppercase_after_periods(&subtitle.paragraphs[index].text, ctx),
    );
}

fn is_abbreviation_at(chars: &[char], at: usize, ctx: &FixContext) -> bool {
    if chars[at] != '.' {
        return false;
    }
    // "O.R." and friends
    if at >= 2 && chars[at - 1] != '.' && chars[at - 2] == '.' {
        return true;
    }
    let word_start = chars[..at]
        .iter()
        .rposition(|c| !c.is_alphabetic())
        .map_or(0, |i| i + 1);
    let word: String = chars[word_start..at].iter().collect();
    !word.is_empty() && ctx.is_abbreviation(&format!("{}.", word))
}

fn uppercase_after_periods(text: &str, ctx: &FixContext) -> String {
    if text.chars().count() <= 3 {
        return text.to_string();
    }
    let st = StripableText::new(text);
    let mut chars: Vec<char> = st.stripped_text.replace("  ", " ").chars().collect();
    let mut changed = false;

    let is_mark = |c: &char| matches!(c, '.' | '!' | '?');
    let mut next_mark = chars.iter().position(is_mark);
    while let Some(at) = next_mark {
        let after_number = at > 0 && chars[at - 1].is_ascii_digit();
        if !after_number && at + 4 < chars.len() && chars[at + 1] == ' ' && !is_abbreviation_at(&chars, at, ctx) {
            let rest: String = chars[at + 2..].iter().collect();
            let mut sentence = StripableText::new(&rest);
            if sentence.first_char().is_some_and(char::is_lowercase) && sentence.stripped_text.chars().count() > 1 {
                sentence.uppercase_first();
                chars.truncate(at + 2);
                chars.extend(sentence.merged_string().chars());
                changed = true;
            }
        }
        let from = at + 4;
        next_mark = chars.get(from..).and_then(|tail| tail.iter().position(is_mark)).map(|i| from + i);
    }

    if changed {
        format!("{}{}{}", st.pre, chars.into_iter().collect::<String>(), st.post)
    } else {
        text.to_string()
    }
}

pub fn fix_alone_lowercase_i(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(
        subtitle,
        ctx,
        FixRule::AloneLowercaseIToUppercaseIEnglish,
        "lone 'i's changed to 'I'",
        |subtitle, index, _| uppercase_alone_i(&subtitle.paragraphs[index].text),
    );
}

fn uppercase_alone_i(text: &str) -> String {
    if !text.contains('i') {
        return text.to_string();
    }
    let mut text = text.replace(">i</", ">I</").replace(">i ", ">I ").replace(">i\n", ">I\n");

    let positions: Vec<usize> = ALONE_I_REGEX
        .find_iter(&text)
        .map(|found| found.start())
        .filter(|&at| char_before(&text, at) != Some('>') && char_at(&text, at + 1) != Some('>'))
        .collect();
    for at in positions {
        text.replace_range(at..at + 1, "I");
    }
    text
}
