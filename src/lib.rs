//! SEO keyword scoring and highlighting, plus the LLM round trips built on them.
//!
//! The core is two pure functions over `(text, keywords)`:
//!
//! - [`score`]: `10 × matched keywords + length bonus (10 inside 50..=160 chars, else 5)`,
//!   or 0 when either input is empty.
//! - [`highlight`]: wrap every case-insensitive keyword occurrence in a [`Marker`],
//!   keeping the original casing.
//!
//! Around that sit the collaborators that call a chat-completion model:
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   llm/       │────▶│ optimize.rs  │────▶│   server/    │
//! │ (Completion- │     │ enhance.rs   │     │ (axum routes)│
//! │  Provider)   │     └──────────────┘     └──────────────┘
//! └──────────────┘            │
//!                             ▼
//!              ┌───────────────────────────┐
//!              │ scoring/  +  highlight.rs │
//!              │     (pure, no I/O)        │
//!              └───────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use seomark::{highlight, score};
//!
//! let keywords = ["running", "shoes"];
//! assert_eq!(score("Buy the best running shoes today", &keywords), 25);
//! assert_eq!(
//!     highlight("Best Running Shoes", &["running"]),
//!     "Best <mark>Running</mark> Shoes"
//! );
//! ```

pub mod enhance;
pub mod highlight;
pub mod llm;
pub mod optimize;
mod scoring;
pub mod server;

// Re-exports for public API
pub use enhance::{EnhanceError, Enhancer};
pub use highlight::{escape_html, highlight, highlight_escaped, highlight_with, Marker};
pub use llm::{
    ChatCompletionsClient, ChatMessage, CompletionProvider, CompletionRequest, LlmConfig,
    LlmError, Role,
};
pub use optimize::{
    parse_optimization, OptimizationReport, OptimizeError, Optimizer, ProductInput, ProductSeo,
};
pub use scoring::{
    keyword_coverage, length_bonus, score, score_breakdown, ScoreBreakdown,
    IN_RANGE_LENGTH_BONUS, KEYWORD_MATCH_SCORE, OUT_OF_RANGE_LENGTH_BONUS, PREFERRED_LENGTH,
};
pub use server::{router, serve, AppState, ServerConfig};

/// Split a comma separated keyword list, trimming entries and dropping blanks.
///
/// ```
/// assert_eq!(seomark::split_keywords(" running, shoes ,,"), vec!["running", "shoes"]);
/// ```
pub fn split_keywords(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}
