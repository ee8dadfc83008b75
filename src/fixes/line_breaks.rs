//! Line layout rules: break too long lines, merge short two-line
//! paragraphs and re-flow paragraphs with three or more lines.

use crate::subtitle::Subtitle;
use crate::text_utils::{collapse_spaces, remove_html_tags};

use super::{FixContext, FixRule, fix_each_text};

pub fn fix_long_lines(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(subtitle, ctx, FixRule::BreakLongLines, "line breaks added", |subtitle, index, ctx| {
        let text = &subtitle.paragraphs[index].text;
        let max = ctx.settings.max_line_length;
        let too_long = text
            .split(['\r', '\n'])
            .any(|line| remove_html_tags(line).chars().count() > max);
        if too_long {
            ctx.collaborators.line_breaker.auto_break(text, max)
        } else {
            text.clone()
        }
    });
}

pub fn fix_short_lines(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(subtitle, ctx, FixRule::MergeShortLines, "short lines merged", |subtitle, index, ctx| {
        let text = &subtitle.paragraphs[index].text;
        if text.chars().count() >= ctx.settings.merge_lines_shorter_than || !text.contains('\n') {
            return text.clone();
        }
        let core = text.trim_end_matches(['.', '?', '!', ':', ';']).trim_start_matches('-');
        let single_sentence = !core.contains(['.', '?', '!', ':', ';', '-']);
        if single_sentence && *text != text.to_uppercase() {
            collapse_spaces(&text.replace('\n', " "))
        } else {
            text.clone()
        }
    });
}

pub fn fix_3plus_lines(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    fix_each_text(subtitle, ctx, FixRule::Fix3PlusLines, "paragraphs with 3+ lines fixed", |subtitle, index, ctx| {
        let text = &subtitle.paragraphs[index].text;
        if text.matches('\n').count() > 1 {
            ctx.collaborators.line_breaker.auto_break(text, ctx.settings.max_line_length)
        } else {
            text.clone()
        }
    });
}
