//! Optimizer and Enhancer against a scripted provider.

use crate::common::{ScriptedProvider, ENHANCED_PROMPT, OPTIMIZATION_ANSWER};
use seomark::optimize::SYSTEM_PROMPT;
use seomark::{
    EnhanceError, Enhancer, LlmError, Marker, OptimizeError, Optimizer, ProductInput, Role,
};
use std::sync::Arc;

#[tokio::test]
async fn test_optimize_round_trip() {
    let provider = Arc::new(ScriptedProvider::replying(OPTIMIZATION_ANSWER));
    let optimizer = Optimizer::new(provider.clone());

    let report = optimizer
        .optimize(&ProductInput::new("Shoes", "Good shoes"))
        .await
        .unwrap();

    assert_eq!(report.optimized_title, "<mark>Trail</mark> <mark>Running</mark> Shoes");
    assert_eq!(
        report.optimized_description,
        "<mark>Running</mark> shoes for <mark>trail</mark>s"
    );
    assert_eq!(report.alt_text, "Grey trail running shoes on a rock");
    assert_eq!(report.keywords, vec!["running", "trail"]);
    assert_eq!(report.original_score, 5);
    assert_eq!(report.optimized_score, 25);
}

#[tokio::test]
async fn test_optimize_sends_system_and_product() {
    let provider = Arc::new(ScriptedProvider::replying(OPTIMIZATION_ANSWER));
    Optimizer::new(provider.clone())
        .optimize(&ProductInput::new("Shoes", "Good shoes"))
        .await
        .unwrap();

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    let messages = &requests[0].messages;
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[0].content, SYSTEM_PROMPT);
    assert_eq!(messages[1].role, Role::User);
    assert!(messages[1].content.contains("Title: Shoes\nDescription: Good shoes"));
    assert_eq!(requests[0].temperature, None);
}

#[tokio::test]
async fn test_optimize_custom_marker() {
    let provider = Arc::new(ScriptedProvider::replying(OPTIMIZATION_ANSWER));
    let report = Optimizer::new(provider)
        .with_marker(Marker::span("highlight"))
        .optimize(&ProductInput::new("Shoes", "Good shoes"))
        .await
        .unwrap();

    assert!(report
        .optimized_title
        .starts_with(r#"<span class="highlight">Trail</span>"#));
}

#[tokio::test]
async fn test_optimize_rejects_blank_input_without_calling_model() {
    let provider = Arc::new(ScriptedProvider::replying(OPTIMIZATION_ANSWER));
    let result = Optimizer::new(provider.clone())
        .optimize(&ProductInput::new("Shoes", "  "))
        .await;

    assert!(matches!(result, Err(OptimizeError::MissingField("description"))));
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn test_optimize_surfaces_upstream_error() {
    let provider = Arc::new(ScriptedProvider::failing(401));
    let result = Optimizer::new(provider)
        .optimize(&ProductInput::new("Shoes", "Good shoes"))
        .await;

    assert!(matches!(
        result,
        Err(OptimizeError::Llm(LlmError::Status { status: 401, .. }))
    ));
}

#[tokio::test]
async fn test_enhance_round_trip() {
    let provider = Arc::new(ScriptedProvider::replying(ENHANCED_PROMPT));
    let enhanced = Enhancer::new(provider.clone())
        .enhance("draw a cat")
        .await
        .unwrap();

    assert_eq!(enhanced, ENHANCED_PROMPT);

    let requests = provider.requests();
    assert_eq!(requests[0].temperature, Some(0.7));
    assert_eq!(requests[0].max_tokens, Some(1000));
    assert_eq!(requests[0].messages.len(), 1);
    assert!(requests[0].messages[0].content.ends_with("draw a cat"));
}

#[tokio::test]
async fn test_enhance_blank_prompt() {
    let provider = Arc::new(ScriptedProvider::replying(ENHANCED_PROMPT));
    let result = Enhancer::new(provider.clone()).enhance("\n\t ").await;

    assert!(matches!(result, Err(EnhanceError::EmptyPrompt)));
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn test_enhance_empty_completion() {
    let provider = Arc::new(ScriptedProvider::empty());
    let result = Enhancer::new(provider).enhance("draw a cat").await;

    assert!(matches!(result, Err(EnhanceError::Llm(LlmError::EmptyCompletion))));
}
