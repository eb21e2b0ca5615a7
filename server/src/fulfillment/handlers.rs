//! Fulfillment Webhook Handler
//!
//! POST /webhook entry point called by the agent platform whenever a
//! recognized intent wants fulfillment.

use axum::body::Bytes;
use axum::Json;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

use super::responders;
use super::types::{IntentRequest, WebhookError};

/// POST /webhook
///
/// The platform does not always send `Content-Type: application/json`, so the
/// body is read raw and parsed here instead of going through the `Json`
/// extractor. Parsing failures and a missing `result` object become 400s with
/// a JSON error body; an unrecognized action is not an error and gets an
/// empty object back.
#[instrument(skip(body))]
pub async fn webhook(body: Bytes) -> Result<Json<Value>, WebhookError> {
    debug!(bytes = body.len(), "Received fulfillment request");

    let request: IntentRequest = serde_json::from_slice(&body)?;
    debug!(
        id = request.id.as_deref().unwrap_or("-"),
        session_id = request.session_id.as_deref().unwrap_or("-"),
        lang = request.lang.as_deref().unwrap_or("-"),
        "Parsed intent request"
    );

    let result = request.result.ok_or(WebhookError::MissingResult)?;
    let action = result.action.unwrap_or_default();
    let parameters = result.parameters.unwrap_or_default();

    info!(action = %action, parameters = ?parameters, "Dispatching intent action");

    let response = match responders::dispatch(&action, &parameters) {
        Some(fulfillment) => serde_json::to_value(&fulfillment).unwrap_or_default(),
        None => Value::Object(Map::new()),
    };

    info!(response = %response, "Sending fulfillment response");

    Ok(Json(response))
}
