/*!
 * Tests for language code handling and detection
 */

use subfix::language_utils::{
    auto_detect_language, get_language_name, language_codes_match, normalize_to_part1_or_part2t,
    normalize_to_part2t, resolve_language,
};

/// Test that 2 and 3 letter codes normalize to the same language
#[test]
fn test_normalize_withBothCodeLengths_shouldAgree() {
    assert_eq!(normalize_to_part2t("es").unwrap(), "spa");
    assert_eq!(normalize_to_part1_or_part2t("spa").unwrap(), "es");
    assert_eq!(normalize_to_part1_or_part2t("fre").unwrap(), "fr");
    assert!(language_codes_match("da", "dan"));
    assert!(!language_codes_match("da", "de"));
}

/// Test that unknown codes are rejected
#[test]
fn test_getLanguageName_withInvalidCode_shouldFail() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert!(get_language_name("zz").is_err());
    assert!(normalize_to_part2t("english").is_err());
}

/// Test that Spanish subtitle text is recognized
#[test]
fn test_autoDetect_withSpanishText_shouldReturnEs() {
    let text = "¿Qué está pasando?\nNo lo sé, señor.\nPero eso es muy raro.";
    assert_eq!(auto_detect_language(text), "es");
}

/// Test that text without enough common words falls back to English
#[test]
fn test_autoDetect_withTooFewHits_shouldFallBackToEnglish() {
    assert_eq!(auto_detect_language("Zorro!"), "en");
    assert_eq!(auto_detect_language(""), "en");
}

/// Test that a configured hint wins over detection
#[test]
fn test_resolveLanguage_withHint_shouldSkipDetection() {
    let danish = "Jeg ved ikke hvad du mener. Hvorfor skal vi det?";
    assert_eq!(resolve_language("auto", danish).unwrap(), "da");
    assert_eq!(resolve_language("", danish).unwrap(), "da");
    assert_eq!(resolve_language("spa", danish).unwrap(), "es");
    assert!(resolve_language("xx", danish).is_err());
}
