/*!
 * Spanish: questions and exclamations open with `¿` and `¡`.
 *
 * For every `?` (and `!`) without a matching opening mark the start of the
 * sentence is searched backwards: up to the previous sentence end, the
 * paragraph start or a dialogue dash. Abbreviations such as "Sr." do not
 * end a sentence. A speaker label like "(JUAN)" or "[JUAN]" stays in front
 * of the inserted mark.
 *
 * When the previous paragraph did not finish its sentence, the opening mark
 * belongs there instead and is added to the previous paragraph.
 */

use crate::subtitle::{StripableText, Subtitle};
use crate::text_utils::NameList;

use super::{FixContext, FixRule};

/// Abbreviations that never end a Spanish sentence, lowercase
const SPANISH_ABBREVIATIONS: [&str; 5] = ["dr", "sr", "sra", "ud", "uds"];

fn index_of(chars: &[char], c: char, from: usize) -> Option<usize> {
    chars.get(from..)?.iter().position(|x| *x == c).map(|i| from + i)
}

fn ends_with_chars(chars: &[char], suffix: &str) -> bool {
    let suffix: Vec<char> = suffix.chars().collect();
    chars.ends_with(&suffix)
}

/// Is the period at `at` part of an abbreviation rather than a sentence end?
fn is_spanish_abbreviation(chars: &[char], at: usize, names: &dyn NameList) -> bool {
    if chars[at] != '.' {
        return false;
    }
    // Either period of "O.R."
    if at + 3 < chars.len() && chars[at + 2] == '.' {
        return true;
    }
    if at > 3 && chars[at - 1] != '.' && chars[at - 2] == '.' {
        return true;
    }

    let word_start = chars[..at]
        .iter()
        .rposition(|c| !c.is_alphabetic())
        .map_or(0, |i| i + 1);
    let word: String = chars[word_start..at].iter().collect();
    SPANISH_ABBREVIATIONS.contains(&word.to_lowercase().as_str()) || names.is_abbreviation(&format!("{}.", word))
}

/// Do the characters right before `at` form a line break plus dialogue dash?
fn follows_dialogue_dash(chars: &[char], at: usize) -> bool {
    let before = &chars[..at];
    ["\n-", "\n -", "\n<i>-"].iter().any(|pattern| ends_with_chars(before, pattern))
}

/// State of one paragraph while its marks are fixed
struct MarkPass<'n> {
    text: Vec<char>,
    last: Option<Vec<char>>,
    last_changed: bool,
    may_edit_last: bool,
    // @field: Whether the previous sentence is finished
    closed: bool,
    names: &'n dyn NameList,
}

impl MarkPass<'_> {
    fn fix_inverted(&mut self, mark: char, inverse: char) {
        if !self.text.contains(&mark) {
            return;
        }

        let continues_last = self.last.as_ref().is_some_and(|last| {
            !self.text.contains(&inverse) && last.contains(&inverse) && !last.contains(&mark)
        });
        if !continues_last {
            self.insert_marks(mark, inverse);
        }

        // "¿Qué?..." reads "¿Qué...?"
        let mut tail = String::from(mark);
        tail.push_str("...");
        if self.text.len() > 4 && ends_with_chars(&self.text, &tail) {
            let cut = self.text.len() - 4;
            self.text.truncate(cut);
            self.text.extend(['.', '.', '.', mark]);
        }
    }

    fn insert_marks(&mut self, mark: char, inverse: char) {
        let mut next_mark = index_of(&self.text, mark, 0);
        let Some(first_mark) = next_mark else {
            return;
        };

        let ends_earlier_sentence = ['!', '?', '.']
            .iter()
            .any(|c| index_of(&self.text, *c, 0).is_some_and(|at| at > 0 && at < first_mark));
        if !self.closed && ends_earlier_sentence {
            self.closed = true;
        }

        let mut start = 0;
        while let Some(at) = next_mark {
            if at == 0 || start >= self.text.len() {
                break;
            }
            let inverse_at = index_of(&self.text, inverse, start);
            let unopened = inverse_at.is_none_or(|inv| inv > at);

            if self.closed && unopened {
                self.open_sentence(start, at, mark, inverse);
            } else if !self.closed && unopened && start == 0 && self.may_edit_last {
                self.open_in_last(inverse);
            }

            start = at + 2;
            next_mark = if start < self.text.len() { index_of(&self.text, mark, start) } else { None };
            self.closed = true;
        }
    }

    /// Insert `inverse` at the start of the sentence ending at `at`.
    fn open_sentence(&mut self, start: usize, at: usize, mark: char, inverse: char) {
        let chars = &self.text;
        let is_end = |c: char| matches!(c, '.' | '!' | '?');

        let mut j = at - 1;
        while j > start && is_end(chars[j]) {
            j -= 1;
        }
        while j > start
            && (chars[j] != '.' || is_spanish_abbreviation(chars, j, self.names))
            && chars[j] != '!'
            && chars[j] != '?'
            && !follows_dialogue_dash(chars, j)
        {
            j -= 1;
        }

        if is_end(chars[j]) {
            j += 1;
        }
        if j + 2 < chars.len() && chars[j + 1] == '\n' {
            j += 2;
        } else if j + 1 < chars.len() && chars[j] == '\n' {
            j += 1;
        }
        if j < start || j > at {
            return;
        }

        let mut part: Vec<char> = chars[j..=at].to_vec();
        let mut speaker: Vec<char> = Vec::new();
        for (open, close) in [('(', ')'), ('[', ']')] {
            if part.first() != Some(&open) {
                continue;
            }
            let mark_at = index_of(&part, mark, 0);
            if let Some(mut end) = index_of(&part, close, 0).filter(|end| *end > 0 && mark_at.is_some_and(|m| *end < m)) {
                while part.get(end + 1) == Some(&'\n') {
                    end += 1;
                }
                speaker = part[..=end].to_vec();
                part = part[end + 1..].to_vec();
            }
        }

        let st = StripableText::new(&part.iter().collect::<String>());
        let mut replacement = speaker;
        replacement.extend(st.pre.chars());
        replacement.push(inverse);
        replacement.extend(st.stripped_text.chars());
        replacement.extend(st.post.chars());
        let rest = self.text.split_off(at + 1);
        self.text.truncate(j);
        self.text.extend(replacement);
        self.text.extend(rest);
    }

    /// The question started in the previous paragraph: open it there.
    fn open_in_last(&mut self, inverse: char) {
        let Some(last) = self.last.as_mut() else {
            return;
        };
        if last.contains(&inverse) {
            return;
        }

        let boundary = (1..last.len().saturating_sub(1))
            .rev()
            .find(|&at| matches!(last[at], '.' | '!' | '?') && last[at + 1] == ' ')
            .map(|at| at + 2);
        let insert_at = boundary.unwrap_or_else(|| {
            let text: String = last.iter().collect();
            StripableText::new(&text).pre.chars().count()
        });

        last.insert(insert_at.min(last.len()), inverse);
        self.last_changed = true;
    }
}

/// Is the sentence of the previous paragraph finished before `text` starts?
fn was_last_line_closed(last: Option<&str>, text: &str) -> bool {
    let Some(last) = last else {
        return true;
    };
    let mut closed = last.ends_with(['?', '!', '.', ':', ')', ']']);
    let continues_lowercase = text
        .trim_start_matches(['-', ' '])
        .chars()
        .next()
        .is_some_and(|c| !c.is_uppercase());
    if last.ends_with("...") && continues_lowercase {
        closed = false;
    }
    if !closed && last == last.to_uppercase() {
        closed = true;
    }
    closed
}

pub fn fix_spanish_inverted_marks(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    let rule = FixRule::SpanishInvertedMarks;
    let mut fixed = 0;

    for index in 0..subtitle.len() {
        let text = subtitle.paragraphs[index].text.clone();
        let last = subtitle.previous(index).map(|prev| prev.text.clone());

        let mut pass = MarkPass {
            text: text.chars().collect(),
            last: last.as_ref().map(|l| l.chars().collect()),
            last_changed: false,
            may_edit_last: index > 0 && ctx.allow(index, rule),
            closed: was_last_line_closed(last.as_deref(), &text),
            names: ctx.collaborators.names.as_ref(),
        };
        pass.fix_inverted('?', '¿');
        pass.fix_inverted('!', '¡');

        let new_text: String = pass.text.iter().collect();
        let new_last: Option<String> = pass.last_changed.then(|| pass.last.iter().flatten().collect());

        if let Some(new_last) = new_last {
            let before = std::mem::replace(&mut subtitle.paragraphs[index - 1].text, new_last.clone());
            ctx.record(index, rule, before, new_last);
            fixed += 1;
        }
        if new_text != text && ctx.allow(index + 1, rule) {
            subtitle.paragraphs[index].text = new_text.clone();
            ctx.record(index + 1, rule, text, new_text);
            fixed += 1;
        }
    }

    if fixed > 0 {
        ctx.status(rule, &format!("{} inverted marks added", fixed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixes::test_support::{run_rule, subtitle, texts};

    fn fixed(input: &[&str]) -> Vec<String> {
        let mut sub = subtitle(input);
        run_rule(FixRule::SpanishInvertedMarks, &mut sub, "es");
        texts(&sub).into_iter().map(String::from).collect()
    }

    #[test]
    fn test_question_withoutOpeningMark_shouldAddIt() {
        assert_eq!(fixed(&["Es un secreto?"]), vec!["¿Es un secreto?"]);
    }

    #[test]
    fn test_question_afterEarlierSentence_shouldOpenAtSentenceStart() {
        assert_eq!(fixed(&["Ven. Es un secreto?"]), vec!["Ven. ¿Es un secreto?"]);
        assert_eq!(fixed(&["¡Hola! Qué pasa?"]), vec!["¡Hola! ¿Qué pasa?"]);
    }

    #[test]
    fn test_question_withAbbreviation_shouldNotStopAtPeriod() {
        assert_eq!(fixed(&["Sr. García, viene usted?"]), vec!["¿Sr. García, viene usted?"]);
    }

    #[test]
    fn test_question_inDialogue_shouldOpenAfterDash() {
        assert_eq!(fixed(&["- Hola.\n- Qué tal?"]), vec!["- Hola.\n- ¿Qué tal?"]);
    }

    #[test]
    fn test_exclamation_withSpeakerLabel_shouldKeepLabelFirst() {
        assert_eq!(fixed(&["(JUAN) Cuidado!"]), vec!["(JUAN) ¡Cuidado!"]);
    }

    #[test]
    fn test_question_withTrailingEllipsis_shouldMoveMark() {
        assert_eq!(fixed(&["Es verdad?..."]), vec!["¿Es verdad...?"]);
    }

    #[test]
    fn test_question_continuingOpenLine_shouldSkip() {
        assert_eq!(fixed(&["¿Vienes", "conmigo?"]), vec!["¿Vienes", "conmigo?"]);
    }

    #[test]
    fn test_question_continuingUnfinishedLine_shouldOpenInPreviousParagraph() {
        let mut sub = subtitle(&["Dime una cosa,", "lo sabes?"]);
        let records = run_rule(FixRule::SpanishInvertedMarks, &mut sub, "es");
        assert_eq!(texts(&sub), vec!["¿Dime una cosa,", "lo sabes?"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].line, 1);
    }

    #[test]
    fn test_wasLastLineClosed_shouldFollowPunctuationAndCase() {
        assert!(was_last_line_closed(None, "hola"));
        assert!(was_last_line_closed(Some("Bien."), "hola"));
        assert!(!was_last_line_closed(Some("Pues..."), "no sé"));
        assert!(was_last_line_closed(Some("GRITOS"), "hola"));
    }
}
