//! Text statistics engine: deterministic sentence, word and syllable counts
//! plus the five classic readability formulas.
//!
//! A [`TextSample`] is immutable once constructed; every count is computed
//! lazily on first access and cached for the life of the sample. The engine
//! performs no I/O. Empty input is the caller's problem: ratio terms over a
//! zero count are IEEE infinities/NaN, so scan code filters empty samples
//! before scoring (see `scan`).

pub mod clean;
pub mod formulas;
pub mod syllables;

use once_cell::unsync::OnceCell;

/// One immutable sample of analyzed content.
#[derive(Debug, Clone, Default)]
pub struct TextSample {
    text: String,
    sentences: OnceCell<usize>,
    words: OnceCell<usize>,
    syllables: OnceCell<u32>,
    letters: OnceCell<usize>,
    polysyllables: OnceCell<usize>,
}

impl TextSample {
    /// Build a sample from raw element content. Cleaning runs eagerly,
    /// counting is deferred until a count is asked for.
    pub fn new(raw: &str) -> Self {
        Self {
            text: clean::clean_text(raw),
            ..Self::default()
        }
    }

    /// The cleaned text backing every count.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the sample holds no countable words.
    pub fn is_empty(&self) -> bool {
        self.word_count() == 0
    }

    fn word_tokens(&self) -> impl Iterator<Item = &str> {
        self.text
            .split_whitespace()
            .filter(|token| token.chars().any(|c| c.is_alphanumeric()))
    }

    pub fn sentence_count(&self) -> usize {
        *self
            .sentences
            .get_or_init(|| self.text.matches('.').count())
    }

    pub fn word_count(&self) -> usize {
        *self.words.get_or_init(|| self.word_tokens().count())
    }

    pub fn syllable_count(&self) -> u32 {
        *self
            .syllables
            .get_or_init(|| self.word_tokens().map(syllables::syllable_count).sum())
    }

    /// Alphanumeric characters in the cleaned text.
    pub fn letter_count(&self) -> usize {
        *self
            .letters
            .get_or_init(|| self.text.chars().filter(|c| c.is_alphanumeric()).count())
    }

    /// Words with three or more syllables.
    pub fn polysyllable_count(&self) -> usize {
        *self.polysyllables.get_or_init(|| {
            self.word_tokens()
                .filter(|word| syllables::syllable_count(word) >= 3)
                .count()
        })
    }

    pub fn average_words_per_sentence(&self) -> f64 {
        self.word_count() as f64 / self.sentence_count() as f64
    }

    pub fn average_syllables_per_word(&self) -> f64 {
        f64::from(self.syllable_count()) / self.word_count() as f64
    }

    /// Share of 3+ syllable words, scaled to 0-100.
    pub fn percent_complex_words(&self) -> f64 {
        100.0 * self.polysyllable_count() as f64 / self.word_count() as f64
    }

    pub fn flesch_kincaid_reading_ease(&self) -> f64 {
        formulas::flesch_kincaid_reading_ease(
            self.average_words_per_sentence(),
            self.average_syllables_per_word(),
        )
    }

    pub fn flesch_kincaid_grade_level(&self) -> f64 {
        formulas::flesch_kincaid_grade_level(
            self.average_words_per_sentence(),
            self.average_syllables_per_word(),
        )
    }

    pub fn gunning_fog_score(&self) -> f64 {
        formulas::gunning_fog(
            self.average_words_per_sentence(),
            self.percent_complex_words(),
        )
    }

    pub fn coleman_liau_index(&self) -> f64 {
        let per_100 = 100.0 / self.word_count() as f64;
        formulas::coleman_liau(
            self.letter_count() as f64 * per_100,
            self.sentence_count() as f64 * per_100,
        )
    }

    pub fn smog_index(&self) -> f64 {
        formulas::smog(
            self.polysyllable_count() as f64,
            self.sentence_count() as f64,
        )
    }

    pub fn automated_readability_index(&self) -> f64 {
        formulas::automated_readability(
            self.letter_count() as f64 / self.word_count() as f64,
            self.average_words_per_sentence(),
        )
    }
}
