/*!
 * Repair of broken `<i>` markup: wrong case, stray spaces inside tags,
 * doubled, unbalanced and misordered tags.
 */

use crate::text_utils::count_tag_in_text;
use crate::subtitle::Subtitle;

use super::{FixContext, FixRule, fix_each_text};

const BEGIN_TAG: &str = "<i>";
const END_TAG: &str = "</i>";

/// Spacing and case variants normalized before counting
const TAG_VARIANTS: &[(&str, &str)] = &[
    ("<I>", BEGIN_TAG),
    ("</I>", END_TAG),
    ("< i>", BEGIN_TAG),
    ("<i >", BEGIN_TAG),
    ("< I>", BEGIN_TAG),
    ("<I >", BEGIN_TAG),
    ("< /i>", END_TAG),
    ("</ i>", END_TAG),
    ("< /I>", END_TAG),
    ("</ I>", END_TAG),
];

pub fn fix_invalid_italic_tags(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(
        subtitle,
        ctx,
        FixRule::InvalidItalicTags,
        "italic tags fixed",
        |subtitle, index, _| fix_italic_tags(&subtitle.paragraphs[index].text),
    );
}

/// Normalize and balance the italic tags of one paragraph.
pub fn fix_italic_tags(text: &str) -> String {
    if !text.contains('<') {
        return text.to_string();
    }

    let mut text = text.to_string();
    for (variant, tag) in TAG_VARIANTS {
        if text.contains(variant) {
            text = text.replace(variant, tag);
        }
    }

    if text.contains("<i/>") {
        text = if text.contains(BEGIN_TAG) {
            text.replace("<i/>", END_TAG)
        } else {
            text.replace("<i/>", "")
        };
    }

    while text.contains("<i><i>") {
        text = text.replace("<i><i>", BEGIN_TAG);
    }
    while text.contains("</i></i>") {
        text = text.replace("</i></i>", END_TAG);
    }

    let begins = count_tag_in_text(&text, BEGIN_TAG);
    let ends = count_tag_in_text(&text, END_TAG);

    match (begins, ends) {
        (1, 1) => {
            if let (Some(begin), Some(end)) = (text.find(BEGIN_TAG), text.find(END_TAG)) {
                if begin > end {
                    text.replace_range(begin..begin + BEGIN_TAG.len(), END_TAG);
                    text.replace_range(end..end + END_TAG.len(), BEGIN_TAG);
                }
            }
        }
        (2, 0) => {
            if let Some(last) = text.rfind(BEGIN_TAG) {
                text.replace_range(last..last + BEGIN_TAG.len(), END_TAG);
            }
        }
        (1, 2) => {
            if let Some(first) = text.find(END_TAG) {
                text.replace_range(first..first + END_TAG.len(), "");
            }
        }
        (2, 1) => {
            if let Some(last) = text.rfind(BEGIN_TAG) {
                text.replace_range(last..last + BEGIN_TAG.len(), "");
            }
        }
        (1, 0) => {
            if text.starts_with(BEGIN_TAG) {
                text.push_str(END_TAG);
            } else {
                text = text.replace(BEGIN_TAG, "");
            }
        }
        (0, 1) => {
            text = text.replace(END_TAG, "");
        }
        _ => {}
    }

    text.replace("<i></i>", "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixes::test_support::{run_rule, subtitle, texts};

    #[test]
    fn test_fixItalicTags_withTwoBeginTags_shouldCloseTheSecond() {
        assert_eq!(fix_italic_tags("<i>Hello <i>world"), "<i>Hello </i>world");
    }

    #[test]
    fn test_fixItalicTags_withSwappedTags_shouldSwapBack() {
        assert_eq!(fix_italic_tags("</i>Hello<i>"), "<i>Hello</i>");
    }

    #[test]
    fn test_fixItalicTags_withVariants_shouldNormalize() {
        assert_eq!(fix_italic_tags("< I>Hello</ I>"), "<i>Hello</i>");
        assert_eq!(fix_italic_tags("<i>Hello<i/>"), "<i>Hello</i>");
        assert_eq!(fix_italic_tags("<i><i>Hi</i></i>"), "<i>Hi</i>");
    }

    #[test]
    fn test_fixItalicTags_withUnbalancedTags_shouldBalance() {
        assert_eq!(fix_italic_tags("<i>Hello"), "<i>Hello</i>");
        assert_eq!(fix_italic_tags("Hello <i>there"), "Hello there");
        assert_eq!(fix_italic_tags("Hello</i>"), "Hello");
        assert_eq!(fix_italic_tags("<i>Hi</i> you</i>"), "<i>Hi you</i>");
        assert_eq!(fix_italic_tags("<i>Hi <i>you</i>"), "<i>Hi you</i>");
        assert_eq!(fix_italic_tags("Hi <i></i>there"), "Hi there");
    }

    #[test]
    fn test_rule_withValidTags_shouldNotRecord() {
        let mut sub = subtitle(&["<i>Fine</i>", "Also fine", "<i>Broken"]);
        let records = run_rule(FixRule::InvalidItalicTags, &mut sub, "en");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].line, 3);
        assert_eq!(texts(&sub), vec!["<i>Fine</i>", "Also fine", "<i>Broken</i>"]);
    }
}
