//! Parsing model answers and building reports.

use crate::common::OPTIMIZATION_ANSWER;
use seomark::{parse_optimization, Marker, OptimizationReport, ProductInput, ProductSeo};

#[test]
fn test_parse_fixture() {
    let seo = parse_optimization(OPTIMIZATION_ANSWER);
    assert_eq!(seo.title, "Trail Running Shoes");
    assert_eq!(seo.description, "Running shoes for trails");
    assert_eq!(seo.alt_text, "Grey trail running shoes on a rock");
    assert_eq!(seo.keywords, vec!["running", "trail"]);
}

#[test]
fn test_parse_numbered_list() {
    let answer = "\
1. SEO Title: Waterproof Hiking Boots
2. Meta Description: Stay dry on every trail.
3. Image Alt Text: Brown leather hiking boot
4. Suggested Keywords: hiking boots, waterproof boots";

    let seo = parse_optimization(answer);
    assert_eq!(seo.title, "Waterproof Hiking Boots");
    assert_eq!(seo.description, "Stay dry on every trail.");
    assert_eq!(seo.alt_text, "Brown leather hiking boot");
    assert_eq!(seo.keywords, vec!["hiking boots", "waterproof boots"]);
}

#[test]
fn test_parse_quoted_keywords() {
    let seo = parse_optimization(r#"Keywords: "boots", 'hiking', `trail`"#);
    assert_eq!(seo.keywords, vec!["boots", "hiking", "trail"]);
}

#[test]
fn test_parse_crlf() {
    let seo = parse_optimization("Title: Boots\r\nDescription: Dry feet\r\n");
    assert_eq!(seo.title, "Boots");
    assert_eq!(seo.description, "Dry feet");
}

#[test]
fn test_title_label_wins_over_description_on_same_line() {
    let seo = parse_optimization("Title: Boots | Description: Dry feet");
    assert_eq!(seo.title, "Boots | Description: Dry feet");
    assert!(seo.description.is_empty());
}

#[test]
fn test_report_without_keywords() {
    let input = ProductInput::new("Boots", "Leather boots");
    let seo = ProductSeo {
        title: "Boots".into(),
        description: "Great boots".into(),
        ..ProductSeo::default()
    };

    let report = OptimizationReport::build(&input, seo, &Marker::default());
    assert_eq!(report.original_score, 0);
    assert_eq!(report.optimized_score, 0);
    assert_eq!(report.optimized_title, "Boots");
}

#[test]
fn test_report_serializes_endpoint_shape() {
    let input = ProductInput::new("Shoes", "Good shoes");
    let report =
        OptimizationReport::build(&input, parse_optimization(OPTIMIZATION_ANSWER), &Marker::default());
    let json = serde_json::to_value(&report).unwrap();

    for field in [
        "optimized_title",
        "optimized_description",
        "alt_text",
        "keywords",
        "original_score",
        "optimized_score",
    ] {
        assert!(json.get(field).is_some(), "missing field {}", field);
    }
    assert_eq!(json["original_score"], 5);
    assert_eq!(json["optimized_score"], 25);
}
