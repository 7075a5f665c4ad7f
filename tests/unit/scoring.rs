//! Scoring against the documented examples and boundaries.

use seomark::{
    keyword_coverage, score, score_breakdown, IN_RANGE_LENGTH_BONUS, KEYWORD_MATCH_SCORE,
    OUT_OF_RANGE_LENGTH_BONUS,
};

const NO_KEYWORDS: &[&str] = &[];

// ============================================================================
// DEGENERATE INPUT
// ============================================================================

#[test]
fn test_empty_text_scores_zero() {
    assert_eq!(score("", &["running", "shoes"]), 0);
}

#[test]
fn test_empty_keywords_scores_zero() {
    assert_eq!(score("Buy the best running shoes today", NO_KEYWORDS), 0);
}

#[test]
fn test_whitespace_text_is_not_empty() {
    // Only the empty string is degenerate; whitespace still earns the length bonus.
    assert_eq!(score("   ", &["shoes"]), OUT_OF_RANGE_LENGTH_BONUS);
}

// ============================================================================
// WORKED EXAMPLES
// ============================================================================

#[test]
fn test_short_product_line() {
    assert_eq!(score("Buy the best running shoes today", &["running", "shoes"]), 25);
}

#[test]
fn test_snippet_length_description() {
    let text = "Lightweight trail running shoes with a grippy outsole for muddy climbs.";
    let len = text.chars().count();
    assert!((50..=160).contains(&len), "fixture length {} out of range", len);

    let keywords = ["trail", "running", "outsole"];
    assert_eq!(
        score(text, &keywords),
        KEYWORD_MATCH_SCORE * 3 + IN_RANGE_LENGTH_BONUS
    );
}

#[test]
fn test_overlong_description() {
    let text = "running shoes ".repeat(20);
    assert!(text.chars().count() > 160);
    assert_eq!(score(&text, &["running"]), KEYWORD_MATCH_SCORE + OUT_OF_RANGE_LENGTH_BONUS);
}

#[test]
fn test_partial_coverage() {
    let keywords = ["running", "sandals", "shoes", "boots"];
    assert_eq!(keyword_coverage("Running Shoes", &keywords), 2);
    assert_eq!(score("Running Shoes", &keywords), 25);
}

#[test]
fn test_keyword_matches_inside_words() {
    // Substring semantics: "run" is found inside "running".
    assert_eq!(keyword_coverage("running", &["run"]), 1);
}

#[test]
fn test_multiword_keyword() {
    assert_eq!(keyword_coverage("Best Trail Running Shoes", &["trail running"]), 1);
    assert_eq!(keyword_coverage("Best Trail and Running Shoes", &["trail running"]), 0);
}

#[test]
fn test_empty_keyword_string_counts() {
    // The empty string is a substring of every text.
    assert_eq!(score("shoes", &[""]), KEYWORD_MATCH_SCORE + OUT_OF_RANGE_LENGTH_BONUS);
}

#[test]
fn test_accepts_owned_keywords() {
    let keywords: Vec<String> = vec!["running".into(), "shoes".into()];
    assert_eq!(score("Buy the best running shoes today", &keywords), 25);
}

#[test]
fn test_breakdown_total_matches_score() {
    let text = "Buy the best running shoes today";
    let keywords = ["running", "socks"];
    let breakdown = score_breakdown(text, &keywords);
    assert_eq!(breakdown.total, score(text, &keywords));
    assert_eq!(breakdown.length_bonus, OUT_OF_RANGE_LENGTH_BONUS);
    assert_eq!(breakdown.missing, vec!["socks"]);
}
