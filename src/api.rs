//! HTTP API endpoints.
//!
//! One stateless proxy to the topic provider. Errors are reported
//! structurally here; in-process callers that want the silent fallback go
//! through [`TopicService::generate`](crate::topics::TopicService::generate)
//! instead.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;
use crate::topics::{self, TopicError};
use crate::types::Topic;

#[derive(Debug, Deserialize)]
pub struct GenerateTopicsRequest {
    #[serde(rename = "userInput", default)]
    pub user_input: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateTopicsResponse {
    pub topics: Vec<Topic>,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Generate discussion topics.
///
/// POST /api/generate-topics
///
/// Body: `{"userInput": "..."}`. A single attempt against the provider; no
/// retry. An empty or missing hint falls back to the default order text.
pub async fn generate_topics(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateTopicsRequest>,
) -> Response {
    let hint = request
        .user_input
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(topics::DEFAULT_HINT);

    match state.topics.try_generate(hint).await {
        Ok(topics) => (StatusCode::OK, Json(GenerateTopicsResponse { topics })).into_response(),
        Err(TopicError::NotConfigured) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiErrorResponse {
                error: "GEMINI_API_KEY is not configured".to_string(),
                details: None,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error generating topics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiErrorResponse {
                    error: "Failed to generate topics".to_string(),
                    details: Some(e.to_string()),
                }),
            )
                .into_response()
        }
    }
}
