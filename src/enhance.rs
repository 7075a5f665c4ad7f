// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prompt enhancement: ask the model to rewrite a prompt so it is clearer and
//! more detailed.

use std::sync::Arc;

use crate::llm::{CompletionProvider, CompletionRequest, LlmError};

pub const ENHANCE_TEMPERATURE: f32 = 0.7;

pub const ENHANCE_MAX_TOKENS: u32 = 1000;

#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    #[error("prompt is required")]
    EmptyPrompt,
    #[error(transparent)]
    Llm(#[from] LlmError),
}

pub fn enhancement_prompt(prompt: &str) -> String {
    format!(
        "Enhance this prompt to make it clearer, detailed, and engaging \
         and please don't add inverted commas: {}",
        prompt
    )
}

pub struct Enhancer<P: ?Sized> {
    provider: Arc<P>,
}

impl<P: ?Sized> Clone for Enhancer<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

impl<P: CompletionProvider + ?Sized> Enhancer<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Rewrite `prompt`. Blank prompts are rejected before any request is made.
    pub async fn enhance(&self, prompt: &str) -> Result<String, EnhanceError> {
        if prompt.trim().is_empty() {
            return Err(EnhanceError::EmptyPrompt);
        }

        let request = CompletionRequest::user(enhancement_prompt(prompt))
            .temperature(ENHANCE_TEMPERATURE)
            .max_tokens(ENHANCE_MAX_TOKENS);

        let enhanced = self.provider.complete(request).await?;
        tracing::info!(
            input_chars = prompt.chars().count(),
            output_chars = enhanced.chars().count(),
            "enhanced prompt"
        );
        Ok(enhanced)
    }
}
