//! Fulfillment Wire Types
//!
//! Request and response payloads exchanged with the agent platform, plus the
//! webhook error type. Wire names are the platform's camelCase forms.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use thiserror::Error;

/// Incoming intent-recognition payload.
///
/// The platform envelope carries more fields than this service reads;
/// everything optional defaults instead of rejecting, and unknown fields are
/// ignored. Only a missing `result` fails the request (see [`WebhookError`]).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    /// Platform request id (diagnostic only).
    pub id: Option<String>,
    /// When the platform produced the payload (diagnostic only).
    pub timestamp: Option<DateTime<Utc>>,
    /// Recognized language tag (diagnostic only).
    pub lang: Option<String>,
    /// Conversation session id (diagnostic only).
    pub session_id: Option<String>,
    /// Recognition result; the part this webhook acts on.
    pub result: Option<QueryResult>,
}

/// The `result` sub-object of an intent request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryResult {
    /// Intent action identifier; absent or null counts as unrecognized.
    pub action: Option<String>,
    /// Intent-specific slots extracted from user input.
    pub parameters: Option<Map<String, Value>>,
    /// Raw user utterance (diagnostic only).
    pub resolved_query: Option<String>,
    /// Active conversation contexts.
    pub contexts: Vec<Context>,
    /// Intent metadata attached by the platform.
    pub metadata: Metadata,
}

/// Intent metadata attached by the platform.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    pub intent_id: Option<String>,
    pub intent_name: Option<String>,
}

/// Conversation-state carryover object.
///
/// Present in requests when the conversation has active contexts. Responses
/// never set any today: `contextOut` is always empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    pub name: String,
    #[serde(default)]
    pub lifespan: u32,
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

/// Outgoing fulfillment payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentResponse {
    /// Spoken text.
    pub speech: String,
    /// Display text; same as `speech` for current responders.
    pub display_text: String,
    /// Auxiliary URL or content reference.
    pub data: String,
    /// Contexts to carry into the next turn (always empty today).
    pub context_out: Vec<Context>,
    /// Identifies this integration to the platform.
    pub source: String,
}

/// Webhook errors. All current variants are client errors.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("invalid JSON payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    #[error("missing result object")]
    MissingResult,
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidPayload(_) | Self::MissingResult => StatusCode::BAD_REQUEST,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
