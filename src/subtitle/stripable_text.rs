/*!
 * Split a text line into leading markup, content and trailing markup.
 *
 * Most text rules need the first or last "real" character of a line while
 * subtitle lines routinely start with `<i>`, a dialogue dash or a `{\an8}`
 * override. `StripableText` peels those off so a rule can edit the content
 * and glue the decoration back on unchanged.
 */

/// Characters peeled from the start of a line
pub const DEFAULT_STRIP_START: &str = " >-\"”“['‘`´¶(♪¿¡.…—";

/// Characters peeled from the end of a line
pub const DEFAULT_STRIP_END: &str = " -\"”“]'`´¶)♪.!?:…—";

const CLOSING_TAGS: [&str; 4] = ["</i>", "</b>", "</u>", "</font>"];

/// A text line decomposed into `pre`, `stripped_text` and `post`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripableText {
    pub original_text: String,
    pub pre: String,
    pub stripped_text: String,
    pub post: String,
}

impl StripableText {
    pub fn new(text: &str) -> Self {
        Self::with_characters(text, DEFAULT_STRIP_START, DEFAULT_STRIP_END)
    }

    pub fn with_characters(text: &str, strip_start: &str, strip_end: &str) -> Self {
        let mut rest = text;
        let mut pre = String::new();

        if rest.chars().next().is_some_and(|c| !c.is_alphanumeric()) {
            for _ in 0..5 {
                while let Some(c) = rest.chars().next() {
                    if !strip_start.contains(c) {
                        break;
                    }
                    pre.push(c);
                    rest = &rest[c.len_utf8()..];
                }

                if rest.starts_with("{\\") {
                    if let Some(end) = rest.find('}') {
                        pre.push_str(&rest[..=end]);
                        rest = &rest[end + 1..];
                    }
                }

                if rest.starts_with('<') {
                    if let Some(end) = rest.find('>') {
                        pre.push_str(&rest[..=end]);
                        rest = &rest[end + 1..];
                    }
                }
            }
        }

        let mut post = String::new();
        if rest.chars().last().is_some_and(|c| !c.is_alphanumeric()) {
            for _ in 0..5 {
                while let Some(c) = rest.chars().last() {
                    if !strip_end.contains(c) {
                        break;
                    }
                    post.insert(0, c);
                    rest = &rest[..rest.len() - c.len_utf8()];
                }

                for tag in CLOSING_TAGS {
                    if ends_with_ignore_ascii_case(rest, tag) {
                        let cut = rest.len() - tag.len();
                        post.insert_str(0, &rest[cut..]);
                        rest = &rest[..cut];
                    }
                }
            }
        }

        Self {
            original_text: text.to_string(),
            pre,
            stripped_text: rest.to_string(),
            post,
        }
    }

    /// `pre + stripped_text + post`; equals the input when nothing was edited.
    pub fn merged_string(&self) -> String {
        format!("{}{}{}", self.pre, self.stripped_text, self.post)
    }

    pub fn first_char(&self) -> Option<char> {
        self.stripped_text.chars().next()
    }

    pub fn last_char(&self) -> Option<char> {
        self.stripped_text.chars().last()
    }

    /// Uppercase the first content character.
    pub fn uppercase_first(&mut self) {
        let mut chars = self.stripped_text.chars();
        if let Some(first) = chars.next() {
            self.stripped_text = first.to_uppercase().chain(chars).collect();
        }
    }
}

fn ends_with_ignore_ascii_case(text: &str, suffix: &str) -> bool {
    text.len() >= suffix.len()
        && text.is_char_boundary(text.len() - suffix.len())
        && text[text.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
