/*!
 * Timing rules: empty paragraphs, negative and overlapping display times,
 * too short and too long durations.
 *
 * Durations are measured against the reading-speed estimate of the
 * collaborator `DurationEstimator`. When no safe adjustment exists the
 * paragraph is left untouched and an unresolved error is logged.
 */

use crate::subtitle::{Paragraph, Subtitle};
use crate::text_utils::remove_html_tags;

use super::{FixContext, FixRule};

/// A paragraph with a negative duration gets at most this much when the
/// next paragraph leaves no room for its wanted duration
const FALLBACK_DISPLAY_MS: i64 = 500;

/// Neighbors starting and ending within this distance share their timing
const SAME_TIME_TOLERANCE_MS: i64 = 10;

/// Time range and text, without the renumbered label.
fn describe(paragraph: &Paragraph) -> String {
    format!(
        "{} --> {} {}",
        paragraph.start_time,
        paragraph.end_time,
        paragraph.text.replace('\n', " | ")
    )
}

pub fn fix_empty_lines(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    let rule = FixRule::EmptyLines;
    if subtitle.is_empty() {
        return;
    }
    let first_number = subtitle.first_number();
    let mut removed = 0;

    for index in (0..subtitle.len()).rev() {
        let text = &subtitle.paragraphs[index].text;
        if text.trim().is_empty() {
            continue;
        }
        let trimmed = text.trim_matches(' ');
        if !trimmed.starts_with('\n') && !trimmed.ends_with('\n') {
            continue;
        }
        let fixed = trimmed.trim_matches(['\n', '\r']).to_string();
        if ctx.allow(index + 1, rule) {
            let before = std::mem::replace(&mut subtitle.paragraphs[index].text, fixed.clone());
            ctx.record(index + 1, rule, before, fixed);
            removed += 1;
        }
    }

    // Deleting last keeps the line numbers of the trim pass valid
    for index in (0..subtitle.len()).rev() {
        if subtitle.paragraphs[index].text.trim().is_empty() && ctx.allow(index + 1, rule) {
            if let Some(paragraph) = subtitle.remove(index) {
                ctx.record(index + 1, rule, paragraph.text, "[removed empty line]");
                removed += 1;
            }
        }
    }

    if removed > 0 {
        ctx.status(rule, &format!("{} empty lines removed", removed));
        subtitle.renumber(first_number);
    }
}

pub fn fix_overlapping_display_times(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    let rule = FixRule::OverlappingDisplayTime;
    let mut fixed = fix_negative_durations(subtitle, ctx);
    fixed += fix_overlaps(subtitle, ctx);
    if fixed > 0 {
        ctx.status(rule, &format!("{} overlapping timestamps fixed", fixed));
    }
}

/// Paragraphs ending before they start.
fn fix_negative_durations(subtitle: &mut Subtitle, ctx: &mut FixContext) -> usize {
    let rule = FixRule::OverlappingDisplayTime;
    let mut fixed = 0;

    for index in 0..subtitle.len() {
        let paragraph = &subtitle.paragraphs[index];
        if paragraph.duration_ms() >= 0 {
            continue;
        }
        let wanted = ctx.display_ms(&paragraph.text);
        let start = paragraph.start_ms();
        let next_start = subtitle.next(index).map(Paragraph::start_ms);
        let previous_end = subtitle.previous(index).map(Paragraph::end_ms);

        let new_range = match next_start {
            None => Some((start, start + wanted)),
            Some(next) if next > start + wanted => Some((start, start + wanted)),
            Some(next) if next > start + FALLBACK_DISPLAY_MS => Some((start, start + FALLBACK_DISPLAY_MS)),
            Some(next) if previous_end.is_none_or(|end| next - wanted > end) => Some((next - wanted, next - 1)),
            Some(_) => None,
        };

        match new_range {
            Some((new_start, new_end)) => {
                if ctx.allow(index + 1, rule) {
                    let paragraph = &mut subtitle.paragraphs[index];
                    let before = describe(paragraph);
                    paragraph.set_start_ms(new_start);
                    paragraph.set_end_ms(new_end);
                    let after = describe(paragraph);
                    ctx.status(rule, &format!("Start time is later than end time: {} -> {}", before, after));
                    ctx.record(index + 1, rule, before, after);
                    fixed += 1;
                }
            }
            None => {
                let message = format!(
                    "Unable to fix start time later than end time: #{} {}",
                    index + 1,
                    describe(&subtitle.paragraphs[index])
                );
                ctx.unresolved(rule, &message);
            }
        }
    }
    fixed
}

/// Paragraphs starting before the previous one ends.
fn fix_overlaps(subtitle: &mut Subtitle, ctx: &mut FixContext) -> usize {
    let rule = FixRule::OverlappingDisplayTime;
    let mut fixed = 0;

    for index in 1..subtitle.len() {
        let (head, tail) = subtitle.paragraphs.split_at_mut(index);
        let previous = &mut head[index - 1];
        let current = &mut tail[0];
        if current.start_ms() > previous.end_ms() {
            continue;
        }

        let previous_wanted = ctx.display_ms(&previous.text);
        let current_wanted = ctx.display_ms(&current.text);
        let line = index + 1;

        if previous_wanted <= current.start_ms() - previous.start_ms() {
            if ctx.allow(line, rule) {
                let before = describe(previous);
                previous.set_end_ms(current.start_ms() - 1);
                ctx.record(line, rule, before, describe(previous));
                fixed += 1;
            }
        } else if current_wanted <= current.end_ms() - previous.end_ms() {
            if ctx.allow(line, rule) {
                let before = describe(current);
                current.set_start_ms(previous.end_ms() + 1);
                ctx.record(line, rule, before, describe(current));
                fixed += 1;
            }
        } else if (current.start_ms() - previous.end_ms()).abs() < SAME_TIME_TOLERANCE_MS && current.duration_ms() > 1 {
            if ctx.allow(line, rule) {
                let before = describe(current);
                current.set_start_ms(current.start_ms() + 1);
                ctx.record(line, rule, before, describe(current));
                fixed += 1;
            }
        } else if (current.start_ms() - previous.start_ms()).abs() < SAME_TIME_TOLERANCE_MS
            && (current.end_ms() - previous.end_ms()).abs() < SAME_TIME_TOLERANCE_MS
        {
            if ctx.allow(line, rule) {
                let before = describe(current);
                merge_as_dialogue(previous, current);
                ctx.record(line, rule, before, describe(current));
                fixed += 1;
            }
        } else if ctx.allow(line, rule) {
            let message = format!(
                "Unable to fix overlap between #{} {} and #{} {}",
                index,
                describe(previous),
                line,
                describe(current)
            );
            ctx.unresolved(rule, &message);
        }
    }
    fixed
}

/// Two paragraphs with the same timing become one two-speaker paragraph;
/// the emptied second one is removed later by the empty line rule.
fn merge_as_dialogue(previous: &mut Paragraph, current: &mut Paragraph) {
    let mut previous_text = previous.text.replace('\n', " ");
    let mut current_text = current.text.replace('\n', " ");

    if !remove_html_tags(&previous_text).trim_start().starts_with("- ") {
        previous_text = format!("- {}", previous_text.trim_start());
    }
    if !remove_html_tags(&current_text).trim_start().starts_with("- ") {
        current_text = format!("- {}", current_text.trim_start());
    }

    previous.text = format!("{}\n{}", previous_text.trim(), current_text);
    current.text.clear();
    current.set_start_ms(previous.end_ms() + 1);
    current.set_end_ms(current.start_ms() + 1);
}

pub fn fix_short_display_times(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    let rule = FixRule::TooShortDisplayTime;
    let mut fixed = 0;

    for index in 0..subtitle.len() {
        let paragraph = &subtitle.paragraphs[index];
        let wanted = ctx.display_ms(&paragraph.text);
        let minimum = wanted as f64 * ctx.settings.min_display_factor;
        if (paragraph.duration_ms() as f64) >= minimum {
            continue;
        }

        let fits = subtitle
            .next(index)
            .is_none_or(|next| paragraph.start_ms() + wanted < next.start_ms());
        if fits {
            if ctx.allow(index + 1, rule) {
                let paragraph = &mut subtitle.paragraphs[index];
                let before = describe(paragraph);
                paragraph.set_end_ms(paragraph.start_ms() + wanted);
                ctx.record(index + 1, rule, before, describe(paragraph));
                fixed += 1;
            }
        } else {
            let message = format!("Unable to fix text #{}: {}", index + 1, describe(paragraph));
            ctx.status(rule, &message);
            ctx.total_errors += 1;
        }
    }

    if fixed > 0 {
        ctx.status(rule, &format!("{} display times prolonged", fixed));
    }
}

pub fn fix_long_display_times(subtitle: &mut Subtitle, ctx: &mut FixContext) {
    let rule = FixRule::TooLongDisplayTime;
    let mut fixed = 0;

    for index in 0..subtitle.len() {
        let paragraph = &subtitle.paragraphs[index];
        let wanted = ctx.display_ms(&paragraph.text) as f64;
        if (paragraph.duration_ms() as f64) <= wanted * ctx.settings.max_display_factor {
            continue;
        }
        if ctx.allow(index + 1, rule) {
            let shrunk = (wanted * ctx.settings.long_display_shrink_factor).round() as i64;
            let paragraph = &mut subtitle.paragraphs[index];
            let before = describe(paragraph);
            paragraph.set_end_ms(paragraph.start_ms() + shrunk);
            ctx.record(index + 1, rule, before, describe(paragraph));
            fixed += 1;
        }
    }

    if fixed > 0 {
        ctx.status(rule, &format!("{} display times shortened", fixed));
    }
}
