// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The arithmetic behind the SEO score.
//!
//! ```text
//! score = KEYWORD_MATCH_SCORE * coverage + length_bonus
//! ```
//!
//! where `coverage` is the number of supplied keywords that occur anywhere in
//! the text (case-insensitive substring), and `length_bonus` depends on whether
//! the text fits the length search engines show in a result snippet.
//!
//! # Key Invariant: Coverage Dominance
//!
//! ```text
//! KEYWORD_MATCH_SCORE > IN_RANGE_LENGTH_BONUS - OUT_OF_RANGE_LENGTH_BONUS   (10 > 5)
//! ```
//!
//! One more matched keyword always outweighs the difference between the two
//! length bonuses.
//!
//! # Degenerate input
//!
//! Empty text or an empty keyword set scores exactly 0. Any other input scores
//! at least `OUT_OF_RANGE_LENGTH_BONUS`.

use serde::Serialize;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Points for each keyword that occurs in the text.
pub const KEYWORD_MATCH_SCORE: u32 = 10;

/// Length bonus when the character count lies in [`PREFERRED_LENGTH`].
pub const IN_RANGE_LENGTH_BONUS: u32 = 10;

/// Length bonus for every other non-empty text.
pub const OUT_OF_RANGE_LENGTH_BONUS: u32 = 5;

/// Character counts that earn the full length bonus (inclusive).
pub const PREFERRED_LENGTH: std::ops::RangeInclusive<usize> = 50..=160;

// =============================================================================
// SCORING FUNCTIONS
// =============================================================================

/// Score `text` against `keywords`.
///
/// ```
/// let score = seomark::score("Buy the best running shoes today", &["running", "shoes"]);
/// assert_eq!(score, 25);
/// ```
pub fn score<S: AsRef<str>>(text: &str, keywords: &[S]) -> u32 {
    score_breakdown(text, keywords).total
}

/// Number of keywords that occur in `text`, ignoring case.
///
/// Each keyword counts at most once, however often it repeats in the text.
/// Duplicate entries in `keywords` are counted individually.
pub fn keyword_coverage<S: AsRef<str>>(text: &str, keywords: &[S]) -> usize {
    let haystack = text.to_lowercase();
    keywords
        .iter()
        .filter(|keyword| contains_folded(&haystack, keyword.as_ref()))
        .count()
}

/// Length bonus for `text`, measured in characters rather than bytes.
pub fn length_bonus(text: &str) -> u32 {
    if PREFERRED_LENGTH.contains(&text.chars().count()) {
        IN_RANGE_LENGTH_BONUS
    } else {
        OUT_OF_RANGE_LENGTH_BONUS
    }
}

/// Itemized score for `text`. `total` is what [`score`] returns.
pub fn score_breakdown<S: AsRef<str>>(text: &str, keywords: &[S]) -> ScoreBreakdown {
    let char_len = text.chars().count();

    if text.is_empty() || keywords.is_empty() {
        return ScoreBreakdown {
            char_len,
            ..ScoreBreakdown::default()
        };
    }

    let haystack = text.to_lowercase();
    let (matched, missing): (Vec<String>, Vec<String>) = keywords
        .iter()
        .map(|keyword| keyword.as_ref().to_string())
        .partition(|keyword| contains_folded(&haystack, keyword));

    let length_bonus = length_bonus(text);
    let total = KEYWORD_MATCH_SCORE * matched.len() as u32 + length_bonus;

    ScoreBreakdown {
        matched,
        missing,
        char_len,
        length_bonus,
        total,
    }
}

/// `haystack` must already be lowercased.
///
/// This is full lowercasing, which differs from the simple case folding the
/// highlighter's regex uses wherever a lowercase mapping changes length.
/// `İ` lowercases to `i̇`, so `"i"` counts as covered in `"İstanbul"` here
/// while [`crate::highlight`] leaves that text unmarked.
fn contains_folded(haystack: &str, keyword: &str) -> bool {
    haystack.contains(&keyword.to_lowercase())
}

/// How a score was put together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// Keywords found in the text, in the order given.
    pub matched: Vec<String>,
    /// Keywords not found in the text, in the order given.
    pub missing: Vec<String>,
    /// Length of the text in characters.
    pub char_len: usize,
    /// 0 for degenerate input, otherwise one of the two length bonuses.
    pub length_bonus: u32,
    pub total: u32,
}

impl ScoreBreakdown {
    /// Matched keyword count.
    pub fn coverage(&self) -> usize {
        self.matched.len()
    }
}
