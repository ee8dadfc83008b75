use anyhow::{Result, anyhow};
use isolang::Language;
use log::debug;

/// Language utilities for ISO language code handling
///
/// This module normalizes ISO 639-1 (2-letter) and ISO 639-2 (3-letter)
/// language codes and guesses the language of subtitle text by counting
/// common words.
/// ISO 639-2/B codes that differ from their ISO 639-2/T form
const PART2B_TO_PART2T: [(&str, &str); 18] = [
    ("fre", "fra"),
    ("ger", "deu"),
    ("dut", "nld"),
    ("gre", "ell"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("ice", "isl"),
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("per", "fas"),
    ("geo", "kat"),
    ("may", "msa"),
    ("mac", "mkd"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("wel", "cym"),
];

/// Language chosen when detection finds nothing convincing
pub const FALLBACK_LANGUAGE: &str = "en";

/// Fewer hits than this and the detection falls back
const MIN_DETECTION_HITS: usize = 3;

/// Frequent short words per language, lowercase
const COMMON_WORDS: &[(&str, &[&str])] = &[
    ("en", &["the", "you", "and", "what", "is", "it", "this", "that", "have", "are", "not", "with", "was", "don't", "i'm", "he", "she"]),
    ("da", &["jeg", "du", "og", "ikke", "det", "er", "har", "hvad", "vi", "skal", "kan", "ved", "hvorfor", "godt", "nej", "mig", "dig"]),
    ("sv", &["jag", "inte", "och", "det", "är", "har", "vad", "vi", "ska", "kan", "vet", "varför", "bra", "nej", "mig", "dig", "hon"]),
    ("no", &["jeg", "ikke", "og", "det", "er", "har", "hva", "vi", "skal", "kan", "vet", "hvorfor", "bra", "nei", "meg", "deg", "hun"]),
    ("es", &["el", "la", "que", "de", "y", "los", "es", "no", "por", "qué", "está", "una", "pero", "señor", "sí", "muy", "eso"]),
    ("de", &["ich", "nicht", "und", "das", "ist", "du", "sie", "wir", "was", "ein", "eine", "mit", "auf", "hier", "ja", "nein", "haben"]),
    ("fr", &["je", "vous", "et", "le", "la", "les", "est", "pas", "que", "une", "qui", "nous", "il", "elle", "oui", "non", "c'est"]),
    ("it", &["che", "non", "il", "di", "è", "la", "un", "per", "sono", "mi", "ti", "cosa", "questo", "sì", "bene", "lo", "gli"]),
    ("nl", &["ik", "niet", "en", "het", "is", "je", "een", "wat", "we", "van", "dat", "hij", "zij", "ja", "nee", "maar", "hier"]),
    ("pt", &["não", "que", "de", "o", "a", "é", "um", "uma", "você", "eu", "isso", "para", "com", "está", "sim", "muito", "aqui"]),
];

fn to_part2t(code: &str) -> &str {
    PART2B_TO_PART2T
        .iter()
        .find(|(part2b, _)| *part2b == code)
        .map_or(code, |(_, part2t)| part2t)
}

fn lookup(code: &str) -> Option<Language> {
    let normalized = code.trim().to_lowercase();
    match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => Language::from_639_3(to_part2t(&normalized)),
        _ => None,
    }
}

/// Normalize a language code to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(code: &str) -> Result<String> {
    lookup(code)
        .map(|lang| lang.to_639_3().to_string())
        .ok_or_else(|| anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Normalize a language code to ISO 639-1 (2-letter) format if possible
/// Falls back to ISO 639-2/T if no ISO 639-1 code exists
pub fn normalize_to_part1_or_part2t(code: &str) -> Result<String> {
    let lang = lookup(code).ok_or_else(|| anyhow!("Cannot normalize invalid language code: {}", code))?;
    Ok(lang
        .to_639_1()
        .map_or_else(|| lang.to_639_3().to_string(), str::to_string))
}

/// Check if two language codes match (represent the same language)
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (lookup(code1), lookup(code2)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Get the language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let lang = lookup(code).ok_or_else(|| anyhow!("Invalid language code: {}", code))?;
    Ok(lang.to_name().to_string())
}

/// Guess the language of `text` from common word frequencies.
///
/// Returns an ISO 639-1 code; `FALLBACK_LANGUAGE` when no language has
/// enough hits.
pub fn auto_detect_language(text: &str) -> String {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !(c.is_alphabetic() || c == '\''))
        .filter(|word| !word.is_empty())
        .collect();

    let mut best = (FALLBACK_LANGUAGE, 0usize);
    for (code, common) in COMMON_WORDS {
        let hits = words.iter().filter(|word| common.contains(word)).count();
        if hits > best.1 {
            best = (code, hits);
        }
    }

    debug!("Language detection: '{}' with {} hit(s) over {} word(s)", best.0, best.1, words.len());
    if best.1 < MIN_DETECTION_HITS {
        FALLBACK_LANGUAGE.to_string()
    } else {
        best.0.to_string()
    }
}

/// Resolve a configured language hint against the text: "auto" or an
/// empty hint detects, anything else is normalized to ISO 639-1.
pub fn resolve_language(hint: &str, text: &str) -> Result<String> {
    let hint = hint.trim();
    if hint.is_empty() || hint.eq_ignore_ascii_case("auto") {
        Ok(auto_detect_language(text))
    } else {
        normalize_to_part1_or_part2t(hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_withPart2bCode_shouldMapToPart1() {
        assert_eq!(normalize_to_part1_or_part2t("ger").unwrap(), "de");
        assert_eq!(normalize_to_part2t("da").unwrap(), "dan");
        assert!(language_codes_match("es", "spa"));
        assert!(get_language_name("xx").is_err());
    }

    #[test]
    fn test_autoDetect_withDanishText_shouldReturnDa() {
        let text = "Jeg ved ikke hvad du mener.\nHvorfor skal vi det?\nDet er godt.";
        assert_eq!(auto_detect_language(text), "da");
    }

    #[test]
    fn test_autoDetect_withSpanishText_shouldReturnEs() {
        let text = "¿Qué es eso?\nNo lo sé, pero la casa está muy lejos.";
        assert_eq!(auto_detect_language(text), "es");
    }

    #[test]
    fn test_autoDetect_withTooLittleText_shouldFallBack() {
        assert_eq!(auto_detect_language("Xyzzy plugh."), FALLBACK_LANGUAGE);
    }

    #[test]
    fn test_resolveLanguage_withExplicitHint_shouldNormalize() {
        assert_eq!(resolve_language("dan", "whatever").unwrap(), "da");
        assert_eq!(resolve_language("auto", "the cat is what you have").unwrap(), "en");
    }
}
