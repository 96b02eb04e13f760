//! The five classic readability formulas as pure functions of sample counts.
//!
//! Each takes pre-computed ratios and returns the published score rounded to
//! one decimal. Range clamping is the caller's job: per-element scores floor
//! at 0, the document-level display score stays within [0, 100].

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Flesch-Kincaid Reading Ease. Higher is easier; 0-100 nominal range.
pub fn flesch_kincaid_reading_ease(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    round1(206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word)
}

/// Flesch-Kincaid Grade Level (US school grade).
pub fn flesch_kincaid_grade_level(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    round1(0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59)
}

/// Gunning Fog. `percent_complex` is the share of words with 3+ syllables,
/// already scaled to 0-100.
pub fn gunning_fog(words_per_sentence: f64, percent_complex: f64) -> f64 {
    round1(0.4 * (words_per_sentence + percent_complex))
}

/// Coleman-Liau index over letters and sentences per 100 words.
pub fn coleman_liau(letters_per_100_words: f64, sentences_per_100_words: f64) -> f64 {
    round1(0.0588 * letters_per_100_words - 0.296 * sentences_per_100_words - 15.8)
}

/// SMOG index over polysyllable density.
pub fn smog(polysyllables: f64, sentences: f64) -> f64 {
    round1(1.0430 * (polysyllables * (30.0 / sentences)).sqrt() + 3.1291)
}

/// Automated Readability Index.
pub fn automated_readability(letters_per_word: f64, words_per_sentence: f64) -> f64 {
    round1(4.71 * letters_per_word + 0.5 * words_per_sentence - 21.43)
}
