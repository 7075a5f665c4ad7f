// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Scores must be deterministic, bounded, and zero exactly on degenerate input.
//! Arbitrary Unicode goes in, including case mappings that change length
//! (`İ` lowercases to two chars), so byte and char counts disagree often.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seomark::{
    score, score_breakdown, IN_RANGE_LENGTH_BONUS, KEYWORD_MATCH_SCORE,
    OUT_OF_RANGE_LENGTH_BONUS,
};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    keywords: Vec<String>,
}

fuzz_target!(|input: Input| {
    // Cap sizes so the fuzzer explores shapes, not throughput
    let text: String = input.text.chars().take(400).collect();
    let keywords: Vec<String> = input.keywords.into_iter().take(16).collect();

    let first = score(&text, &keywords);
    let second = score(&text, &keywords);

    // INVARIANT 1: Deterministic
    assert_eq!(first, second, "Same input scored differently");

    // INVARIANT 2: Degenerate input scores zero, anything else has a floor
    if text.is_empty() || keywords.is_empty() {
        assert_eq!(first, 0, "Degenerate input scored {}", first);
        return;
    }
    assert!(
        first >= OUT_OF_RANGE_LENGTH_BONUS,
        "Score {} below floor",
        first
    );

    // INVARIANT 3: Upper bound
    let ceiling = KEYWORD_MATCH_SCORE * keywords.len() as u32 + IN_RANGE_LENGTH_BONUS;
    assert!(first <= ceiling, "Score {} above ceiling {}", first, ceiling);

    // INVARIANT 4: Breakdown agrees with the total and partitions the keywords
    let breakdown = score_breakdown(&text, &keywords);
    assert_eq!(breakdown.total, first);
    assert_eq!(
        breakdown.matched.len() + breakdown.missing.len(),
        keywords.len(),
        "Keywords lost in breakdown"
    );
    assert_eq!(
        breakdown.total,
        KEYWORD_MATCH_SCORE * breakdown.coverage() as u32 + breakdown.length_bonus
    );
});
