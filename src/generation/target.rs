use serde::{Deserialize, Serialize};

use crate::constants::{
    SUMMARY_CEILING, SUMMARY_FLOOR, SUMMARY_MIN_SPAN, SUMMARY_RATIO_HIGH, SUMMARY_RATIO_LOW,
};

/// Inclusive word-count window a summary must land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRange {
    pub min_words: usize,
    pub max_words: usize,
}

impl TargetRange {
    pub fn new(min_words: usize, max_words: usize) -> Self {
        Self {
            min_words,
            max_words,
        }
    }

    pub fn contains(&self, word_count: usize) -> bool {
        (self.min_words..=self.max_words).contains(&word_count)
    }
}

impl std::fmt::Display for TargetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min_words, self.max_words)
    }
}

/// Derives a [`TargetRange`] from an article's word count.
///
/// ```text
/// lo = min(max(floor, trunc(ratio_low * n)), ceiling)
/// hi = min(max(lo + min_span, trunc(ratio_high * n)), ceiling)
/// ```
///
/// Ratio products are truncated toward zero. Long articles clamp both bounds
/// to `ceiling`, the only case where `lo == hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangePolicy {
    pub ratio_low: f64,
    pub ratio_high: f64,
    pub floor: usize,
    pub ceiling: usize,
    pub min_span: usize,
}

impl Default for RangePolicy {
    fn default() -> Self {
        Self {
            ratio_low: SUMMARY_RATIO_LOW,
            ratio_high: SUMMARY_RATIO_HIGH,
            floor: SUMMARY_FLOOR,
            ceiling: SUMMARY_CEILING,
            min_span: SUMMARY_MIN_SPAN,
        }
    }
}

impl RangePolicy {
    pub fn bounds(&self, input_word_count: usize) -> TargetRange {
        let n = input_word_count as f64;
        let lo = ((self.ratio_low * n) as usize)
            .max(self.floor)
            .min(self.ceiling);
        let hi = ((self.ratio_high * n) as usize)
            .max(lo + self.min_span)
            .min(self.ceiling);
        TargetRange::new(lo, hi)
    }
}

/// `(lo, hi)` under the default [`RangePolicy`].
pub fn summary_bounds(input_word_count: usize) -> (usize, usize) {
    let range = RangePolicy::default().bounds(input_word_count);
    (range.min_words, range.max_words)
}
