/*!
 * Danish: the pronoun "I" (you, plural) written as lowercase "i".
 *
 * Lowercase "i" is also the preposition "in", so only occurrences inside a
 * known phrase are changed. Words where the preposition was fused with the
 * next word ("idag") are split again.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::subtitle::Subtitle;

use super::danish_phrases::DANISH_I_PHRASES;
use super::{FixContext, FixRule, fix_each_text};

static LITTLE_I_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bi\b").expect("Invalid little i regex")
});

// Spaces in the phrases match any run of spaces and line breaks
static PHRASE_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    DANISH_I_PHRASES
        .iter()
        .map(|phrase| Regex::new(&phrase.replace(' ', "[ \n]+")).expect("Invalid Danish phrase regex"))
        .collect()
});

static FUSED_PREPOSITIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        ("idag", "i dag"),
        ("igår", "i går"),
        ("imorgen", "i morgen"),
        ("ialt", "i alt"),
        ("igang", "i gang"),
        ("istand", "i stand"),
        ("iøvrigt", "i øvrigt"),
    ]
    .into_iter()
    .map(|(fused, split)| {
        let regex = Regex::new(&format!(r"\b{}\b", fused)).expect("Invalid fused preposition regex");
        (regex, split)
    })
    .collect()
});

pub fn fix_danish_letter_i(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(
        subtitle,
        ctx,
        FixRule::DanishLetterI,
        "lowercase 'i's changed to 'I'",
        |subtitle, index, _| fix_danish_i(&subtitle.paragraphs[index].text),
    );
}

fn fix_danish_i(text: &str) -> String {
    let mut text = text.to_string();

    if LITTLE_I_REGEX.is_match(&text) {
        for regex in PHRASE_REGEXES.iter() {
            let pronouns: Vec<usize> = regex
                .find_iter(&text)
                .filter_map(|phrase| LITTLE_I_REGEX.find(phrase.as_str()).map(|i| phrase.start() + i.start()))
                .collect();
            for at in pronouns {
                text.replace_range(at..at + 1, "I");
            }
        }
    }

    for (regex, split) in FUSED_PREPOSITIONS.iter() {
        if regex.is_match(&text) {
            text = regex.replace_all(&text, *split).into_owned();
        }
    }
    text
}
