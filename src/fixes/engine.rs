/*!
 * Fix session: list proposals, let the caller toggle them, apply.
 *
 * A session owns the subtitle being fixed. Listing runs every enabled rule
 * on a copy and keeps the resulting records; applying runs the rules again
 * on a copy, committing only the changes whose record is still selected,
 * and makes the result the new subtitle. After every change to the
 * subtitle the proposals are listed again and earlier deselections are
 * carried over by key.
 */

use std::collections::HashSet;

use anyhow::Result;
use log::{debug, info, warn};
use serde::Serialize;

use crate::app_config::FixSettings;
use crate::errors::FixError;
use crate::language_utils::resolve_language;
use crate::subtitle::Subtitle;

use super::{Collaborators, FixContext, FixItem, FixKey, FixLog, FixMode, FixRecord, FixRule, catalog};

/// Outcome of an apply run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FixSummary {
    pub fixes: usize,
    pub errors: usize,
    // @field: Log entries that need manual attention
    pub important: usize,
    #[serde(skip)]
    pub log: FixLog,
}

// @struct: Listing, selection and application of fixes on one subtitle
pub struct FixSession {
    subtitle: Subtitle,
    settings: FixSettings,
    language: String,
    collaborators: Collaborators,
    items: Vec<FixItem>,
    records: Vec<FixRecord>,
    log: FixLog,
    total_fixes: usize,
    total_errors: usize,
}

/// Result of running the enabled rules once
struct RunOutcome {
    records: Vec<FixRecord>,
    log: FixLog,
    fixes: usize,
    errors: usize,
}

impl FixSession {
    /// Start a session; `language_hint` is an ISO code or "auto".
    pub fn new(subtitle: Subtitle, settings: FixSettings, language_hint: &str, collaborators: Collaborators) -> Result<Self> {
        let language = resolve_language(language_hint, &subtitle.all_text())?;
        let items = catalog(&settings, &language, subtitle.len());
        info!("Fixing {} paragraph(s) as '{}' with {} rule(s) offered", subtitle.len(), language, items.len());

        if settings.is_enabled(FixRule::AloneLowercaseIToUppercaseIEnglish) && language != "en" {
            warn!(
                "'{}' is enabled but the subtitle language is '{}'",
                FixRule::AloneLowercaseIToUppercaseIEnglish,
                language
            );
        }

        let mut session = Self {
            subtitle,
            settings,
            language,
            collaborators,
            items,
            records: Vec::new(),
            log: FixLog::default(),
            total_fixes: 0,
            total_errors: 0,
        };
        session.list_fixes();
        Ok(session)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn catalog(&self) -> &[FixItem] {
        &self.items
    }

    pub fn subtitle(&self) -> &Subtitle {
        &self.subtitle
    }

    pub fn into_subtitle(self) -> Subtitle {
        self.subtitle
    }

    pub fn records(&self) -> &[FixRecord] {
        &self.records
    }

    pub fn log(&self) -> &FixLog {
        &self.log
    }

    pub fn total_fixes(&self) -> usize {
        self.total_fixes
    }

    pub fn total_errors(&self) -> usize {
        self.total_errors
    }

    /// Turn a rule on or off for this session and list again.
    pub fn set_rule_enabled(&mut self, rule: FixRule, enabled: bool) {
        self.settings.set_enabled(rule, enabled);
        for item in self.items.iter_mut().filter(|item| item.rule == rule) {
            item.enabled = enabled;
        }
        self.refresh();
    }

    /// Enabled rules in catalog order; removing empty lines runs last so
    /// line numbers stay valid for every other rule.
    fn enabled_rules(&self) -> Vec<FixRule> {
        let mut rules: Vec<FixRule> = self
            .items
            .iter()
            .filter(|item| item.enabled && item.rule != FixRule::EmptyLines)
            .map(|item| item.rule)
            .collect();
        if self.items.iter().any(|item| item.enabled && item.rule == FixRule::EmptyLines) {
            rules.push(FixRule::EmptyLines);
        }
        rules
    }

    fn run(&self, subtitle: &mut Subtitle, mode: FixMode, selections: &[FixRecord]) -> RunOutcome {
        let mut ctx = FixContext::new(mode, &self.settings, &self.language, &self.collaborators, selections);
        for rule in self.enabled_rules() {
            rule.apply(subtitle, &mut ctx);
        }
        RunOutcome {
            records: ctx.records,
            log: ctx.log,
            fixes: ctx.total_fixes,
            errors: ctx.total_errors,
        }
    }

    /// Compute the proposals for the current subtitle; all start selected.
    pub fn list_fixes(&mut self) -> &[FixRecord] {
        let mut preview = self.subtitle.clone();
        let outcome = self.run(&mut preview, FixMode::ListOnly, &[]);
        debug!("Listed {} proposal(s), {} unresolved", outcome.fixes, outcome.errors);

        self.records = outcome.records;
        self.log = outcome.log;
        self.total_fixes = outcome.fixes;
        self.total_errors = outcome.errors;
        &self.records
    }

    pub fn set_selected(&mut self, key: &FixKey, selected: bool) -> Result<(), FixError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.key() == *key)
            .ok_or_else(|| FixError::InvalidSelection(format!("line {} / {}", key.line, key.rule.key())))?;
        record.selected = selected;
        Ok(())
    }

    pub fn select_all(&mut self) {
        for record in &mut self.records {
            record.selected = true;
        }
    }

    pub fn invert_selection(&mut self) {
        for record in &mut self.records {
            record.selected = !record.selected;
        }
    }

    /// Commit the selected proposals and list again on the result.
    pub fn apply(&mut self) -> FixSummary {
        let mut fixed = self.subtitle.clone();
        let outcome = self.run(&mut fixed, FixMode::Apply, &self.records);
        self.subtitle = fixed;

        let summary = FixSummary {
            fixes: outcome.fixes,
            errors: outcome.errors,
            important: outcome.log.important,
            log: outcome.log,
        };
        info!("Applied {} fix(es), {} unresolved problem(s)", summary.fixes, summary.errors);
        self.refresh();
        summary
    }

    fn deselected_keys(&self) -> HashSet<FixKey> {
        self.records.iter().filter(|record| !record.selected).map(FixRecord::key).collect()
    }

    fn restore_deselected(&mut self, deselected: &HashSet<FixKey>) {
        for record in &mut self.records {
            if deselected.contains(&record.key()) {
                record.selected = false;
            }
        }
    }

    /// List again, keeping the deselections that still apply.
    pub fn refresh(&mut self) {
        let deselected = self.deselected_keys();
        self.list_fixes();
        self.restore_deselected(&deselected);
    }

    /// Delete paragraphs by 0-based index and renumber the rest.
    pub fn delete_paragraphs(&mut self, indices: &[usize]) -> Result<(), FixError> {
        if let Some(&bad) = indices.iter().find(|&&index| index >= self.subtitle.len()) {
            return Err(FixError::ParagraphOutOfRange(bad));
        }
        let mut indices = indices.to_vec();
        indices.sort_unstable();
        indices.dedup();

        // Deselections follow their paragraph to its new line number
        let deselected: HashSet<FixKey> = self
            .deselected_keys()
            .into_iter()
            .filter(|key| indices.binary_search(&(key.line - 1)).is_err())
            .map(|key| {
                let shift = indices.iter().filter(|&&index| index < key.line - 1).count();
                FixKey {
                    line: key.line - shift,
                    ..key
                }
            })
            .collect();

        let first_number = self.subtitle.first_number();
        for &index in indices.iter().rev() {
            self.subtitle.remove(index);
        }
        self.subtitle.renumber(first_number);
        debug!("Deleted {} paragraph(s)", indices.len());

        self.list_fixes();
        self.restore_deselected(&deselected);
        Ok(())
    }

    /// Merge paragraph `index` with the one after it into a two-line paragraph.
    pub fn merge_with_next(&mut self, index: usize) -> Result<(), FixError> {
        if index + 1 >= self.subtitle.len() {
            return Err(FixError::ParagraphOutOfRange(index + 1));
        }
        let merged_line = index + 1;
        let removed_line = index + 2;
        let deselected: HashSet<FixKey> = self
            .deselected_keys()
            .into_iter()
            .filter(|key| key.line != removed_line)
            .map(|key| {
                let line = if key.line > removed_line { key.line - 1 } else { key.line };
                FixKey { line, ..key }
            })
            .collect();

        let first_number = self.subtitle.first_number();
        if let Some(next) = self.subtitle.remove(index + 1) {
            let current = &mut self.subtitle.paragraphs[index];
            current.text = format!("{}\n{}", current.text.replace('\n', " "), next.text.replace('\n', " "));
            current.end_time = next.end_time;
        }
        self.subtitle.renumber(first_number);
        debug!("Merged line {} with line {}", merged_line, removed_line);

        self.list_fixes();
        self.restore_deselected(&deselected);
        Ok(())
    }
}

/// Apply every enabled rule once without interactive selection.
pub fn fix_all(
    subtitle: Subtitle,
    settings: FixSettings,
    language_hint: &str,
    collaborators: Collaborators,
) -> Result<(Subtitle, FixSummary)> {
    let mut session = FixSession::new(subtitle, settings, language_hint, collaborators)?;
    let summary = session.apply();
    Ok((session.into_subtitle(), summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixes::test_support::{subtitle, texts};

    fn settings() -> FixSettings {
        let mut settings = FixSettings::default();
        settings.set_enabled(FixRule::DanishLetterI, false);
        settings.set_enabled(FixRule::SpanishInvertedMarks, false);
        settings
    }

    fn session(input: &[&str]) -> FixSession {
        let settings = settings();
        let collaborators = Collaborators::from_settings(&settings);
        FixSession::new(subtitle(input), settings, "en", collaborators).unwrap()
    }

    const SAMPLE: [&str; 4] = [
        "Hello there ,how are you ?",
        "i think so.but why not",
        "<i>Going home</i>",
        "- Wait--\n- What?",
    ];

    #[test]
    fn test_apply_withSample_shouldFixEverything() {
        let mut session = session(&SAMPLE);
        assert!(!session.records().is_empty());
        let summary = session.apply();

        assert_eq!(
            texts(session.subtitle()),
            vec![
                "Hello there, how are you?",
                "I think so. But why not.",
                "<i>Going home</i>",
                "- Wait...\n- What?",
            ]
        );
        assert_eq!(summary.fixes, 7);
        assert_eq!(summary.errors, 0);
    }

    #[test]
    fn test_apply_twice_shouldFindNothingTheSecondTime() {
        let mut session = session(&SAMPLE);
        session.apply();
        assert!(session.records().is_empty());
        let second = session.apply();
        assert_eq!(second.fixes, 0);
    }

    #[test]
    fn test_apply_withDeselectedRecord_shouldSkipIt() {
        let mut session = session(&SAMPLE);
        let key = session
            .records()
            .iter()
            .find(|record| record.rule == FixRule::DoubleDash)
            .map(FixRecord::key)
            .unwrap();
        session.set_selected(&key, false).unwrap();
        session.apply();

        assert_eq!(session.subtitle().paragraphs[3].text, "- Wait--\n- What?");
        // Still proposed but kept deselected
        assert_eq!(session.records().len(), 1);
        assert!(!session.records()[0].selected);
    }

    #[test]
    fn test_setSelected_withUnknownKey_shouldFail() {
        let mut session = session(&SAMPLE);
        let key = FixKey {
            line: 99,
            rule: FixRule::DoubleDash,
            before: String::new(),
        };
        assert!(matches!(session.set_selected(&key, false), Err(FixError::InvalidSelection(_))));
    }

    #[test]
    fn test_invertSelection_thenSelectAll_shouldToggleEveryRecord() {
        let mut session = session(&SAMPLE);
        session.invert_selection();
        assert!(session.records().iter().all(|record| !record.selected));
        let summary = session.apply();
        assert_eq!(summary.fixes, 0);
        session.select_all();
        assert!(session.records().iter().all(|record| record.selected));
    }

    #[test]
    fn test_deleteParagraphs_shouldRenumberAndKeepDeselection() {
        let mut session = session(&SAMPLE);
        let key = session
            .records()
            .iter()
            .find(|record| record.rule == FixRule::DoubleDash)
            .map(FixRecord::key)
            .unwrap();
        session.set_selected(&key, false).unwrap();

        session.delete_paragraphs(&[0, 2]).unwrap();
        assert_eq!(session.subtitle().len(), 2);
        assert_eq!(session.subtitle().paragraphs[1].number, 2);

        let dash = session
            .records()
            .iter()
            .find(|record| record.rule == FixRule::DoubleDash)
            .unwrap();
        assert_eq!(dash.line, 2);
        assert!(!dash.selected);
        assert!(matches!(session.delete_paragraphs(&[5]), Err(FixError::ParagraphOutOfRange(5))));
    }

    #[test]
    fn test_mergeWithNext_shouldJoinTextsAndTimes() {
        let mut session = session(&["First line", "second line.", "Third"]);
        session.merge_with_next(0).unwrap();
        let merged = &session.subtitle().paragraphs[0];
        assert_eq!(merged.text, "First line\nsecond line.");
        assert_eq!(merged.end_ms(), 7000);
        assert_eq!(session.subtitle().len(), 2);
        assert!(session.merge_with_next(1).is_err());
    }

    #[test]
    fn test_new_withEnglishOnlyRuleOffered_shouldListIt() {
        let mut settings = settings();
        settings.set_enabled(FixRule::AloneLowercaseIToUppercaseIEnglish, true);
        let collaborators = Collaborators::from_settings(&settings);
        let mut session = FixSession::new(subtitle(&["so i said no."]), settings, "auto", collaborators).unwrap();
        assert_eq!(session.language(), "en");
        session.apply();
        assert_eq!(session.subtitle().paragraphs[0].text, "So I said no.");
    }

    #[test]
    fn test_fixAll_shouldRemoveEmptyParagraphsLast() {
        let settings = settings();
        let collaborators = Collaborators::from_settings(&settings);
        let (fixed, summary) = fix_all(subtitle(&["Hello.", "   ", "Bye."]), settings, "en", collaborators).unwrap();
        assert_eq!(texts(&fixed), vec!["Hello.", "Bye."]);
        // The blank paragraph is first trimmed, then removed
        assert_eq!(summary.fixes, 2);
    }
}
