use super::ReadabilityScorer;
use super::types::Readability;

/// Flesch-Kincaid grade level and Flesch reading ease.
///
/// ```text
/// FKGL = 0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59
/// FRE  = 206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)
/// ```
///
/// Syllables are estimated from vowel groups with adjustments for a silent
/// trailing `e` and consonant + `le` endings. Text without words scores
/// `0.0` on both scales.
#[derive(Debug, Clone, Copy, Default)]
pub struct FleschScorer;

impl FleschScorer {
    pub fn new() -> Self {
        Self
    }
}

impl ReadabilityScorer for FleschScorer {
    fn score(&self, text: &str) -> Readability {
        let words: Vec<&str> = text
            .split_whitespace()
            .filter(|w| w.chars().any(char::is_alphanumeric))
            .collect();

        if words.is_empty() {
            return Readability { fkgl: 0.0, fre: 0.0 };
        }

        let word_count = words.len() as f64;
        let sentence_count = count_sentences(text).max(1) as f64;
        let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();

        let words_per_sentence = word_count / sentence_count;
        let syllables_per_word = syllable_count as f64 / word_count;

        Readability {
            fkgl: 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59,
            fre: 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word,
        }
    }
}

/// Sentences are runs of text terminated by `.`, `!` or `?` that contain a word.
pub fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| segment.chars().any(char::is_alphanumeric))
        .count()
}

/// Heuristic syllable count for a single word (minimum 1).
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if letters.is_empty() {
        // Numbers and symbols count as one spoken unit.
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut groups: usize = 0;
    let mut previous_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            groups += 1;
        }
        previous_vowel = vowel;
    }

    let n = letters.len();
    if n > 2 && letters[n - 1] == 'e' && !is_vowel(letters[n - 2]) {
        let consonant_le = letters[n - 2] == 'l' && !is_vowel(letters[n - 3]);
        if !consonant_le {
            groups = groups.saturating_sub(1);
        }
    }

    if n > 2
        && letters.ends_with(&['e', 'd'])
        && !is_vowel(letters[n - 3])
        && !matches!(letters[n - 3], 't' | 'd')
    {
        groups = groups.saturating_sub(1);
    }

    groups.max(1)
}
