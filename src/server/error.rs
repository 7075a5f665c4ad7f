// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::enhance::EnhanceError;
use crate::llm::LlmError;
use crate::optimize::OptimizeError;

pub const MISSING_PRODUCT_FIELDS: &str = "Title and description are required!";
pub const MISSING_PROMPT: &str = "Prompt is required!";

/// Error half of every JSON endpoint. Rendered as `{"error": ..., "kind": ...}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(&'static str),
    /// The body could not be read as the endpoint's JSON shape.
    InvalidBody(JsonRejection),
    Upstream(LlmError),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidBody(_) => "invalid_request",
            ApiError::Upstream(LlmError::MissingApiKey) => "not_configured",
            ApiError::Upstream(LlmError::Transport(_)) => "upstream_unreachable",
            ApiError::Upstream(LlmError::Status { .. }) => "upstream_rejected",
            ApiError::Upstream(LlmError::Decode(_) | LlmError::EmptyCompletion) => {
                "upstream_invalid_response"
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}

impl From<OptimizeError> for ApiError {
    fn from(err: OptimizeError) -> Self {
        match err {
            OptimizeError::MissingField(_) => ApiError::BadRequest(MISSING_PRODUCT_FIELDS),
            OptimizeError::Llm(e) => ApiError::Upstream(e),
        }
    }
}

impl From<EnhanceError> for ApiError {
    fn from(err: EnhanceError) -> Self {
        match err {
            EnhanceError::EmptyPrompt => ApiError::BadRequest(MISSING_PROMPT),
            EnhanceError::Llm(e) => ApiError::Upstream(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let (status, message) = match &self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.to_string()),
            ApiError::InvalidBody(rejection) => {
                tracing::debug!(error = %rejection, "rejected request body");
                (rejection.status(), rejection.body_text())
            }
            ApiError::Upstream(e) => {
                tracing::error!(error = %e, kind, "language model request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Language model request failed".to_string(),
                )
            }
        };
        (status, Json(serde_json::json!({ "error": message, "kind": kind }))).into_response()
    }
}
