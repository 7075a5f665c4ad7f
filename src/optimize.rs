// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Product copy optimization.
//!
//! The model is asked for an SEO title, description, image alt text and keyword
//! list. Its free-form answer is parsed line by line, then both the original
//! and the rewritten copy are scored against the suggested keywords so the
//! caller can see whether the rewrite helped.
//!
//! ```text
//! ProductInput ──prompt──▶ CompletionProvider ──text──▶ parse_optimization
//!                                                            │
//!                                   OptimizationReport ◀─────┘ score + highlight
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

use crate::highlight::{highlight_escaped, highlight_with, Marker};
use crate::llm::{CompletionProvider, CompletionRequest, LlmError};
use crate::scoring::score;

pub const SYSTEM_PROMPT: &str = "You are an SEO expert helping to optimize product data.";

const TITLE_LABEL: &str = "Title:";
const DESCRIPTION_LABEL: &str = "Description:";
const ALT_TEXT_LABEL: &str = "Alt Text:";
const KEYWORDS_LABEL: &str = "Keywords:";

/// Product copy as the user wrote it. Missing or `null` fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInput {
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
}

pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProductInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Both fields must contain something other than whitespace.
    pub fn validate(&self) -> Result<(), OptimizeError> {
        if self.title.trim().is_empty() {
            return Err(OptimizeError::MissingField("title"));
        }
        if self.description.trim().is_empty() {
            return Err(OptimizeError::MissingField("description"));
        }
        Ok(())
    }

    /// Title and description joined by a space, the text that gets scored.
    pub fn combined(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

/// Fields recovered from the model's answer. Missing fields stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSeo {
    pub title: String,
    pub description: String,
    pub alt_text: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// Prompt sent as the user message.
pub fn optimization_prompt(input: &ProductInput) -> String {
    format!(
        "Optimize the following product data for SEO purposes:\n\n\
         Title: {}\nDescription: {}\n\n\
         Provide an SEO-optimized title, description, alt text for the product image, \
         and keyword suggestions.",
        input.title, input.description
    )
}

/// Parse the model's answer.
///
/// Each line is checked for the labels `Title:`, `Description:`, `Alt Text:`
/// and `Keywords:` in that order; the first label found decides which field the
/// rest of the line fills. A later line with the same label overwrites an
/// earlier one. Markdown emphasis and quotes around values are dropped, so
/// `**SEO Title:** "Trail Shoes"` yields `Trail Shoes`.
pub fn parse_optimization(output: &str) -> ProductSeo {
    let mut seo = ProductSeo::default();

    for line in output.lines() {
        if let Some(value) = value_after(line, TITLE_LABEL) {
            seo.title = value;
        } else if let Some(value) = value_after(line, DESCRIPTION_LABEL) {
            seo.description = value;
        } else if let Some(value) = value_after(line, ALT_TEXT_LABEL) {
            seo.alt_text = value;
        } else if let Some(value) = value_after(line, KEYWORDS_LABEL) {
            seo.keywords = value
                .split(',')
                .map(clean_value)
                .filter(|keyword| !keyword.is_empty())
                .collect();
        }
    }

    seo
}

fn value_after(line: &str, label: &str) -> Option<String> {
    line.find(label)
        .map(|at| clean_value(&line[at + label.len()..]))
}

fn clean_value(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || matches!(c, '*' | '_' | '"' | '\'' | '`'))
        .to_string()
}

/// What the `/optimize` endpoint returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationReport {
    /// Optimized title with keywords highlighted. Escaped when the marker is HTML.
    pub optimized_title: String,
    /// Optimized description with keywords highlighted. Escaped when the marker is HTML.
    pub optimized_description: String,
    pub alt_text: String,
    pub keywords: Vec<String>,
    pub original_score: u32,
    pub optimized_score: u32,
}

impl OptimizationReport {
    /// Score the original and optimized copy against the suggested keywords.
    ///
    /// The title and description are model output, so with an HTML marker
    /// they go through [`highlight_escaped`]. `alt_text` and `keywords` stay
    /// plain text.
    pub fn build(input: &ProductInput, seo: ProductSeo, marker: &Marker) -> Self {
        let original_score = score(&input.combined(), &seo.keywords);
        let optimized_score = score(
            &format!("{} {}", seo.title, seo.description),
            &seo.keywords,
        );

        let mark = |text: &str| {
            if marker.html {
                highlight_escaped(text, &seo.keywords, marker)
            } else {
                highlight_with(text, &seo.keywords, marker)
            }
        };
        let optimized_title = mark(&seo.title);
        let optimized_description = mark(&seo.description);

        Self {
            optimized_title,
            optimized_description,
            alt_text: seo.alt_text,
            keywords: seo.keywords,
            original_score,
            optimized_score,
        }
    }

    /// Points gained (or lost) by the rewrite.
    pub fn improvement(&self) -> i64 {
        i64::from(self.optimized_score) - i64::from(self.original_score)
    }
}

/// Runs the whole optimization round trip against a provider.
pub struct Optimizer<P: ?Sized> {
    provider: Arc<P>,
    marker: Marker,
}

impl<P: ?Sized> Clone for Optimizer<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            marker: self.marker.clone(),
        }
    }
}

impl<P: CompletionProvider + ?Sized> Optimizer<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            marker: Marker::default(),
        }
    }

    /// Marker used for the highlighted fields of the report.
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub async fn optimize(&self, input: &ProductInput) -> Result<OptimizationReport, OptimizeError> {
        input.validate()?;

        let request = CompletionRequest::user(optimization_prompt(input)).with_system(SYSTEM_PROMPT);
        let output = self.provider.complete(request).await?;
        let seo = parse_optimization(&output);

        if seo.keywords.is_empty() {
            tracing::warn!("model answer contained no keyword line");
        }

        let report = OptimizationReport::build(input, seo, &self.marker);
        tracing::info!(
            original = report.original_score,
            optimized = report.optimized_score,
            keywords = report.keywords.len(),
            "optimized product copy"
        );
        Ok(report)
    }
}
