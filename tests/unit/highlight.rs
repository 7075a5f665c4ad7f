//! Highlighting behavior, including the overlapping-keyword cases.

use seomark::{highlight, highlight_with, keyword_coverage, Marker};

const NO_KEYWORDS: &[&str] = &[];

#[test]
fn test_documented_example() {
    assert_eq!(
        highlight("Best Running Shoes", &["running"]),
        "Best <mark>Running</mark> Shoes"
    );
}

#[test]
fn test_identity_without_keywords() {
    let text = "Nothing <b>to</b> see here";
    assert_eq!(highlight(text, NO_KEYWORDS), text);
}

#[test]
fn test_absent_keyword_leaves_text() {
    assert_eq!(highlight("Best Running Shoes", &["sandals"]), "Best Running Shoes");
}

#[test]
fn test_empty_text() {
    assert_eq!(highlight("", &["shoes"]), "");
}

#[test]
fn test_keywords_applied_in_order() {
    assert_eq!(
        highlight("Trail Running Shoes", &["running", "trail"]),
        "<mark>Trail</mark> <mark>Running</mark> Shoes"
    );
}

#[test]
fn test_substring_inside_word() {
    assert_eq!(highlight("Runners", &["run"]), "<mark>Run</mark>ners");
}

#[test]
fn test_repeated_keyword_doubles_markers() {
    assert_eq!(
        highlight("shoes", &["shoes", "shoes"]),
        "<mark><mark>shoes</mark></mark>"
    );
}

#[test]
fn test_shorter_keyword_first_breaks_longer_match() {
    // After "shoes" is wrapped, "running shoes" no longer occurs contiguously.
    assert_eq!(
        highlight("running shoes", &["shoes", "running shoes"]),
        "running <mark>shoes</mark>"
    );
}

#[test]
fn test_custom_marker() {
    let marker = Marker::new("[[", "]]");
    assert_eq!(
        highlight_with("Red SHOES", &["shoes"], &marker),
        "Red [[SHOES]]"
    );
}

#[test]
fn test_regex_syntax_in_keyword() {
    assert_eq!(highlight("(new) shoes", &["(new)"]), "<mark>(new)</mark> shoes");
    assert_eq!(highlight("price $50", &["$50"]), "price <mark>$50</mark>");
    assert_eq!(highlight("a|b", &["|"]), "a<mark>|</mark>b");
}

#[test]
fn test_marker_wrap() {
    assert_eq!(Marker::span("hl").wrap("x"), r#"<span class="hl">x</span>"#);
}

#[test]
fn test_dotted_capital_i_scored_but_not_marked() {
    // Scoring lowercases fully ("İ" becomes "i̇"); highlighting uses simple folding.
    assert_eq!(keyword_coverage("İstanbul", &["i"]), 1);
    assert_eq!(highlight("İstanbul", &["i"]), "İstanbul");
}
