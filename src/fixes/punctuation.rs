/*!
 * Punctuation rules: unneeded and missing periods, quotes, apostrophes,
 * music symbols, hyphens, dashes, `>>` markers, leading ellipses and
 * brackets.
 */

use crate::subtitle::{StripableText, Subtitle};
use crate::text_utils::{count_tag_in_text, remove_html_tags, starts_with_uppercase};

use super::{FixContext, FixRule, fix_each_text};

/// A paragraph ending in one of these needs no period
const SENTENCE_END_CHARS: &str = "\",.!?:;>-])♪♫";

/// Delimiters for the first word of a paragraph
const WORD_DELIMITERS: &[char] = &[
    ' ', '.', ',', '-', '?', '!', ':', ';', '"', '(', ')', '[', ']', '{', '}', '|', '<', '>', '/', '+', '\r', '\n',
];

/// Line starts that mark a dialogue line after a line break
const DIALOGUE_BREAKS: [&str; 4] = ["\n -", "\n-", "\n<i>-", "\n<i> -"];

pub fn fix_unneeded_periods(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(
        subtitle,
        ctx,
        FixRule::UnneededPeriods,
        "unneeded periods removed",
        |subtitle, index, _| remove_unneeded_periods(&subtitle.paragraphs[index].text),
    );
}

fn remove_unneeded_periods(text: &str) -> String {
    let mut text = text.replace("!.\n", "!\n").replace("?.\n", "?\n");
    if text.ends_with("!.") || text.ends_with("?.") {
        text = text.trim_end_matches('.').to_string();
    }
    text.replace("!. ", "! ").replace("?. ", "? ")
}

pub fn fix_double_apostrophes(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(
        subtitle,
        ctx,
        FixRule::DoubleApostropheToQuote,
        "double apostrophes fixed",
        |subtitle, index, _| subtitle.paragraphs[index].text.replace("''", "\""),
    );
}

pub fn fix_music_notation(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(subtitle, ctx, FixRule::MusicNotation, "music symbols fixed", |subtitle, index, ctx| {
        let settings = ctx.settings;
        let mut text = subtitle.paragraphs[index].text.clone();
        for symbol in settings.music_symbols_to_replace.iter().filter(|s| !s.is_empty()) {
            text = text.replace(symbol.as_str(), &settings.music_symbol);
            text = text.replace(&symbol.to_uppercase(), &settings.music_symbol);
        }
        text
    });
}

pub fn fix_missing_periods_at_end_of_line(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(
        subtitle,
        ctx,
        FixRule::AddPeriodAfterParagraph,
        "periods added",
        |subtitle, index, ctx| add_missing_periods(subtitle, index, ctx),
    );
}

/// All-caps lines are shouted or signs and need no period.
fn has_lowercase(text: &str) -> bool {
    text.chars().any(char::is_lowercase)
}

fn add_missing_periods(subtitle: &Subtitle, index: usize, ctx: &FixContext) -> String {
    let mut text = subtitle.paragraphs[index].text.clone();

    if let Some(next) = subtitle.next(index) {
        let next_text = next.text.as_str();
        let last = text.chars().last();
        let next_starts_uppercase = starts_with_uppercase(next_text);

        if next_starts_uppercase && last.is_some_and(|c| !SENTENCE_END_CHARS.contains(c)) {
            let first_word = next_text.split(WORD_DELIMITERS).next().unwrap_or_default();
            if has_lowercase(&text)
                && !next_text.starts_with("I ")
                && !next_text.starts_with("I'")
                && !ctx.is_name(first_word)
            {
                text.push('.');
            }
        } else if last.is_some_and(char::is_alphanumeric) && has_lowercase(&text) {
            let next_stripped = StripableText::new(next_text).stripped_text;
            if starts_with_uppercase(&next_stripped) && has_lowercase(&next_stripped) {
                let end_sign = match text.chars().rev().find(|c| ".!?¿¡".contains(*c)) {
                    Some('¿') => '?',
                    Some('¡') => '!',
                    _ => '.',
                };
                text.push(end_sign);
            }
        }
    }

    add_period_before_dialogue_line(&text)
}

/// "Go home\n- No" gets a period before the second speaker.
fn add_period_before_dialogue_line(text: &str) -> String {
    if text.chars().count() <= 4 {
        return text.to_string();
    }
    let Some(tail) = text.get(3..) else {
        return text.to_string();
    };
    let Some(break_at) = DIALOGUE_BREAKS.iter().find_map(|pattern| tail.find(pattern)).map(|i| i + 3) else {
        return text.to_string();
    };
    if !text[..break_at].chars().last().is_some_and(char::is_alphabetic) {
        return text.to_string();
    }

    let first_line = StripableText::new(&text[..break_at]);
    let pre = first_line.pre.trim_end();
    let end_sign = if pre.ends_with('¿') {
        "?"
    } else if pre.ends_with('¡') {
        "!"
    } else {
        "."
    };

    let mut fixed = text.to_string();
    fixed.insert_str(break_at, end_sign);
    fixed
}

pub fn add_missing_quotes(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(subtitle, ctx, FixRule::AddMissingQuotes, "missing quotes added", |subtitle, index, _| {
        let text = &subtitle.paragraphs[index].text;
        if count_tag_in_text(text, "\"") != 1 {
            return text.clone();
        }
        if text.starts_with('"') {
            if subtitle.next(index).is_none_or(|next| !next.text.contains('"')) {
                return format!("{}\"", text);
            }
        } else if text.ends_with('"') && subtitle.previous(index).is_none_or(|prev| !prev.text.contains('"')) {
            return format!("\"{}", text);
        }
        text.clone()
    });
}

fn starts_dialogue(text: &str) -> bool {
    const STARTS: [&str; 5] = ["-", "<i>-", "<i> -", "<I>-", "<I> -"];
    let trimmed = text.trim();
    STARTS.iter().any(|start| trimmed.starts_with(start))
        || STARTS.iter().any(|start| text.contains(&format!("\n{}", start)))
        || text.contains("\n -")
}

pub fn fix_hyphens(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(subtitle, ctx, FixRule::FixHyphens, "hyphens fixed", |subtitle, index, _| {
        let text = &subtitle.paragraphs[index].text;
        let continues_previous = subtitle
            .previous(index)
            .is_some_and(|prev| remove_html_tags(&prev.text).trim().ends_with('-'));

        // A lone dash cannot be a dialogue between two speakers
        if starts_dialogue(text) && !continues_previous && count_tag_in_text(text, "-") == 1 {
            text.replace(" - ", "").replace(" -", "").replace("- ", "").replace('-', "")
        } else {
            text.clone()
        }
    });
}

pub fn fix_double_dash(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(subtitle, ctx, FixRule::DoubleDash, "double dashes fixed", |subtitle, index, _| {
        let mut text = subtitle.paragraphs[index].text.clone();
        if text.contains("--") {
            text = text.replace("--", "... ").replace("...  ", "... ").replace(" ...", "...");
            text = text.split('\n').map(str::trim_end).collect::<Vec<_>>().join("\n");
        }
        if let Some(head) = text.strip_suffix('-') {
            text = format!("{}...", head).replace(" ...", "...");
        }
        text
    });
}

pub fn fix_double_greater_than(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(subtitle, ctx, FixRule::DoubleGreaterThan, "'>>' removed", |subtitle, index, _| {
        let text = subtitle.paragraphs[index].text.as_str();
        let text = text.strip_prefix(">> ").unwrap_or(text);
        text.strip_prefix(">>").unwrap_or(text).to_string()
    });
}

pub fn fix_ellipses_start(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(subtitle, ctx, FixRule::EllipsesStart, "leading ellipses removed", |subtitle, index, _| {
        let text = subtitle.paragraphs[index].text.as_str();
        text.strip_prefix("...").unwrap_or(text).replace(": ...", ": ")
    });
}

pub fn fix_missing_open_bracket(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(subtitle, ctx, FixRule::MissingOpenBracket, "missing '[' added", |subtitle, index, _| {
        let text = subtitle.paragraphs[index].text.as_str();
        if !text.contains(']') || text.contains('[') {
            return text.to_string();
        }
        let bracket = if text.contains(" ]") { "[ " } else { "[" };
        match text.strip_prefix("<i>").filter(|_| text.len() > 3) {
            Some(rest) => format!("<i>{}{}", bracket, rest),
            None => format!("{}{}", bracket, text),
        }
    });
}
