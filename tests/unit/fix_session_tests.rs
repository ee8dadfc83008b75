/*!
 * Tests for the fix rule catalog and the fix session
 */

use anyhow::Result;
use subfix::app_config::FixSettings;
use subfix::errors::FixError;
use subfix::fixes::{FixRule, catalog};
use crate::common::{self, session_with_rules, texts};

/// Test that every rule key parses back to its rule
#[test]
fn test_fromKey_withEveryRule_shouldRoundTrip() {
    for (index, rule) in FixRule::ALL.into_iter().enumerate() {
        assert_eq!(FixRule::from_key(rule.key()).unwrap(), rule);
        assert_eq!(FixRule::from_key(&index.to_string()).unwrap(), rule);
    }
    assert!(matches!(FixRule::from_key("no-such-rule"), Err(FixError::UnknownRule(_))));
    assert!(FixRule::from_key("27").is_err());
}

/// Test that language rules are only offered for their language on long files
#[test]
fn test_catalog_withLongFile_shouldFilterLanguageRules() {
    let settings = FixSettings::default();
    let limit = settings.language_specific_rule_paragraph_limit;

    let english: Vec<FixRule> = catalog(&settings, "en", limit).into_iter().map(|item| item.rule).collect();
    assert!(!english.contains(&FixRule::DanishLetterI));
    assert!(!english.contains(&FixRule::SpanishInvertedMarks));
    assert_eq!(english.len(), FixRule::ALL.len() - 2);

    let danish: Vec<FixRule> = catalog(&settings, "da", limit).into_iter().map(|item| item.rule).collect();
    assert!(danish.contains(&FixRule::DanishLetterI));
    assert!(!danish.contains(&FixRule::SpanishInvertedMarks));

    assert_eq!(catalog(&settings, "en", limit - 1).len(), FixRule::ALL.len());
}

/// Test that listing proposes changes without touching the subtitle
#[test]
fn test_listFixes_shouldNotModifySubtitle() -> Result<()> {
    let mut session = session_with_rules(&["Hello  world", "Fine"], &[FixRule::UnneededSpaces], "en")?;

    let records = session.list_fixes().to_vec();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].line, 1);
    assert_eq!(records[0].before, "Hello  world");
    assert_eq!(records[0].after, "Hello world");
    assert_eq!(texts(session.subtitle()), vec!["Hello  world", "Fine"]);
    Ok(())
}

/// Test that applying commits the fixes and writes the apply log
#[test]
fn test_apply_shouldCommitAndLog() -> Result<()> {
    let mut session = session_with_rules(&["Hello  world", "Wait--what?"], &[FixRule::UnneededSpaces, FixRule::DoubleDash], "en")?;

    let summary = session.apply();

    assert_eq!(texts(session.subtitle()), vec!["Hello world", "Wait... what?"]);
    assert_eq!(summary.fixes, 2);
    assert!(summary.log.entries.iter().all(|entry| entry.starts_with("OK -  ")));
    assert!(session.records().is_empty());
    Ok(())
}

/// Test that disabling a rule removes its proposals
#[test]
fn test_setRuleEnabled_shouldRelist() -> Result<()> {
    let mut session = session_with_rules(&["Hello  world", "Wait--what?"], &[FixRule::UnneededSpaces, FixRule::DoubleDash], "en")?;
    assert_eq!(session.records().len(), 2);

    session.set_rule_enabled(FixRule::DoubleDash, false);

    assert_eq!(session.records().len(), 1);
    assert_eq!(session.records()[0].rule, FixRule::UnneededSpaces);
    Ok(())
}

/// Test that a deselected fix stays deselected after a refresh
#[test]
fn test_refresh_shouldPreserveDeselection() -> Result<()> {
    let mut session = session_with_rules(&["Hello  world", "Bye  now"], &[FixRule::UnneededSpaces], "en")?;
    let key = session.records()[1].key();
    session.set_selected(&key, false)?;

    session.refresh();

    assert!(session.records()[0].selected);
    assert!(!session.records()[1].selected);

    session.apply();
    assert_eq!(texts(session.subtitle()), vec!["Hello world", "Bye  now"]);
    Ok(())
}

/// Test that the Danish rule runs when the subtitle is detected as Danish
#[test]
fn test_session_withDanishText_shouldDetectAndFix() -> Result<()> {
    let lines = ["Jeg ved ikke hvad du mener.", "Hvad gør i det?", "Det er godt, vi skal det."];
    let mut session = session_with_rules(&lines, &[FixRule::DanishLetterI], "auto")?;
    assert_eq!(session.language(), "da");

    session.apply();

    assert_eq!(session.subtitle().paragraphs[1].text, "Hvad gør I det?");
    Ok(())
}

/// Test that overlapping paragraphs are moved apart
#[test]
fn test_apply_withOverlap_shouldEndBeforeNextStart() -> Result<()> {
    let mut subtitle = common::subtitle(&["First one here.", "Second one here."]);
    subtitle.paragraphs[0].set_end_ms(4_500);
    let config = common::config_with_rules(&[FixRule::OverlappingDisplayTime]);
    let collaborators = subfix::fixes::Collaborators::from_settings(&config.fixes);

    let (fixed, summary) = subfix::fix_all(subtitle, config.fixes, "en", collaborators)?;

    assert_eq!(summary.fixes, 1);
    assert!(fixed.paragraphs[0].end_ms() < fixed.paragraphs[1].start_ms());
    Ok(())
}
