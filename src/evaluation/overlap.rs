//! Reference-based n-gram overlap (ROUGE-1 and ROUGE-L F-measures).
//!
//! Tokens are lowercased alphanumeric runs; tokens longer than three characters
//! pass through a light suffix stemmer (plural, `-ed`/`-ing`, terminal `y`).

use std::collections::HashMap;

use super::types::OverlapScores;
use crate::text::round_to;

/// ROUGE scores of `summary` against `reference`.
///
/// Returns `None` for a blank reference.
pub fn overlap_scores(summary: &str, reference: &str) -> Option<OverlapScores> {
    if reference.trim().is_empty() {
        return None;
    }

    let candidate = tokenize_for_overlap(summary);
    let target = tokenize_for_overlap(reference);

    Some(OverlapScores {
        rouge1_f: round_to(unigram_f(&candidate, &target), 4),
        rouge_l_f: round_to(lcs_f(&candidate, &target), 4),
    })
}

pub fn tokenize_for_overlap(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| if t.len() > 3 { stem(t) } else { t.to_string() })
        .collect()
}

fn unigram_f(candidate: &[String], target: &[String]) -> f64 {
    if candidate.is_empty() || target.is_empty() {
        return 0.0;
    }

    let mut target_counts: HashMap<&str, usize> = HashMap::new();
    for token in target {
        *target_counts.entry(token.as_str()).or_default() += 1;
    }

    let mut overlap = 0usize;
    for token in candidate {
        if let Some(count) = target_counts.get_mut(token.as_str())
            && *count > 0
        {
            *count -= 1;
            overlap += 1;
        }
    }

    f_measure(overlap, candidate.len(), target.len())
}

fn lcs_f(candidate: &[String], target: &[String]) -> f64 {
    if candidate.is_empty() || target.is_empty() {
        return 0.0;
    }
    f_measure(lcs_len(candidate, target), candidate.len(), target.len())
}

fn lcs_len(a: &[String], b: &[String]) -> usize {
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];

    for x in a {
        for (j, y) in b.iter().enumerate() {
            current[j + 1] = if x == y {
                previous[j] + 1
            } else {
                current[j].max(previous[j + 1])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

fn f_measure(matches: usize, candidate_len: usize, target_len: usize) -> f64 {
    let precision = matches as f64 / candidate_len as f64;
    let recall = matches as f64 / target_len as f64;
    if precision + recall == 0.0 {
        return 0.0;
    }
    2.0 * precision * recall / (precision + recall)
}

fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
}

fn stem(token: &str) -> String {
    let mut word = token.to_string();

    if let Some(stripped) = word.strip_suffix("sses") {
        word = format!("{stripped}ss");
    } else if let Some(stripped) = word.strip_suffix("ies") {
        word = format!("{stripped}i");
    } else if !word.ends_with("ss")
        && let Some(stripped) = word.strip_suffix('s')
    {
        word = stripped.to_string();
    }

    for suffix in ["ing", "ed"] {
        if let Some(stripped) = word.strip_suffix(suffix)
            && has_vowel(stripped)
        {
            word = stripped.to_string();
            break;
        }
    }

    if let Some(stripped) = word.strip_suffix('y')
        && has_vowel(stripped)
    {
        word = format!("{stripped}i");
    }

    word
}
