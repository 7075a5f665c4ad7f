//! Shared test utilities and fixtures.

#![allow(dead_code)]

use async_trait::async_trait;
use seomark::{CompletionProvider, CompletionRequest, LlmError};
use std::sync::Mutex;

// ============================================================================
// FIXTURES
// ============================================================================

/// A model answer in the markdown-ish shape chat models tend to produce.
pub const OPTIMIZATION_ANSWER: &str = "\
Here is the optimized product data:

**Title:** Trail Running Shoes
**Description:** Running shoes for trails
**Alt Text:** Grey trail running shoes on a rock
**Keywords:** running, trail
";

pub const ENHANCED_PROMPT: &str =
    "Draw a detailed watercolor illustration of a curious orange cat exploring a sunlit garden.";

// ============================================================================
// SCRIPTED PROVIDER
// ============================================================================

enum Reply {
    Text(String),
    Status(u16),
    Empty,
}

/// A [`CompletionProvider`] that answers every request the same way and keeps
/// a copy of what it was asked.
pub struct ScriptedProvider {
    reply: Reply,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    pub fn replying(text: &str) -> Self {
        Self::with(Reply::Text(text.to_string()))
    }

    /// Every call fails as if the endpoint answered with `status`.
    pub fn failing(status: u16) -> Self {
        Self::with(Reply::Status(status))
    }

    /// Every call fails as if the endpoint returned no text.
    pub fn empty() -> Self {
        Self::with(Reply::Empty)
    }

    fn with(reply: Reply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Status(status) => Err(LlmError::Status {
                status: *status,
                body: "upstream said no".to_string(),
            }),
            Reply::Empty => Err(LlmError::EmptyCompletion),
        }
    }
}
