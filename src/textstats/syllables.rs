//! Syllable counting via vowel-group runs with exception handling.

use once_cell::sync::Lazy;
use regex::Regex;

// Words the vowel-group heuristic gets wrong.
static PROBLEM_WORDS: &[(&str, u32)] = &[("simile", 3), ("forever", 3), ("shoreline", 2)];

// Syllables counted once too often: silent endings and fused vowel pairs.
static SUBTRACT_ONE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        "cial",
        "tia",
        "cius",
        "cious",
        "giu",
        "ion",
        "iou",
        "sia$",
        "[^aeiuoyt]{2,}ed$",
        ".ely$",
        "[cg]h?e[rsd]?$",
        "rved?$",
        "[aeiouy][dt]es?$",
        "[aeiouy][^aeiuoyts]es?$",
        "^[dr]e[aeiou][^aeiou]+$",
        "[aeiouy]rse$",
    ])
});

// Syllables the vowel-group split misses: diphthongs that are spoken apart.
static ADD_ONE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        "ia",
        "riet",
        "dien",
        "iu",
        "io",
        "ii",
        "[aeiouym]bl$",
        "[aeiou]{3}",
        "^mc",
        "ism$",
        "asm$",
        "(?:bb|cc|dd|ff|gg|kk|ll|mm|nn|pp|rr|ss|tt|zz)l$",
        "[^l]lien",
        "^coa[dglx].",
        "[^gq]ua[^auieo]",
        "dnt$",
        "uity$",
        "ie(?:r|st)$",
    ])
});

// Single-syllable affixes stripped before the vowel-group split.
static AFFIXES: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(&["^un", "^fore", "ly$", "less$", "ful$", "ers?$", "ings?$"]));

static VOWEL_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new("[aeiouy]+").expect("valid pattern"));

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("valid pattern"))
        .collect()
}

/// Count syllables in a single word.
///
/// Returns 0 for tokens with no letters (numbers, stray punctuation);
/// every real word counts at least 1.
pub fn syllable_count(word: &str) -> u32 {
    let normalized: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect();
    if normalized.is_empty() {
        return 0;
    }
    if let Some((_, count)) = PROBLEM_WORDS.iter().find(|(w, _)| *w == normalized) {
        return *count;
    }

    let mut stripped = normalized;
    let mut adjustment: i64 = 0;
    for affix in AFFIXES.iter() {
        if affix.is_match(&stripped) {
            stripped = affix.replace(&stripped, "").into_owned();
            adjustment += 1;
        }
    }

    let vowel_groups = VOWEL_RUNS.find_iter(&stripped).count() as i64;
    for pattern in SUBTRACT_ONE.iter() {
        if pattern.is_match(&stripped) {
            adjustment -= 1;
        }
    }
    for pattern in ADD_ONE.iter() {
        if pattern.is_match(&stripped) {
            adjustment += 1;
        }
    }

    (vowel_groups + adjustment).max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_syllables(word: &str, expected: u32) {
        assert_eq!(syllable_count(word), expected, "word: {:?}", word);
    }

    #[test]
    fn test_single_syllable_words() {
        assert_syllables("the", 1);
        assert_syllables("cat", 1);
        assert_syllables("strength", 1);
        assert_syllables("make", 1);
        assert_syllables("scores", 1);
    }

    #[test]
    fn test_multi_syllable_words() {
        assert_syllables("window", 2);
        assert_syllables("sentence", 2);
        assert_syllables("paragraph", 3);
        assert_syllables("analyzer", 4);
    }

    #[test]
    fn test_problem_words() {
        assert_syllables("simile", 3);
        assert_syllables("forever", 3);
        assert_syllables("shoreline", 2);
    }

    #[test]
    fn test_non_letter_tokens() {
        assert_syllables("42", 0);
        assert_syllables("-", 0);
        assert_syllables("", 0);
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        assert_eq!(syllable_count("Reading"), syllable_count("reading"));
        assert_eq!(syllable_count("don't"), syllable_count("dont"));
    }
}
