//! Intent Responders
//!
//! One function per fulfillable intent, plus the action dispatch. The
//! responses are canned stand-ins for what a real deployment would look up
//! in an events database.

use serde_json::{Map, Value};

use super::actions::IntentAction;
use super::types::IntentResponse;

/// Integration identifier sent in every response `source` field.
pub const RESPONSE_SOURCE: &str = "demo-tour-guide";

/// Schedule line returned for `inquiry.parades`.
const PARADES_SPEECH: &str = "Chinese New Year Parade in Chinatown from 5pm to 8pm.";

/// Illustration returned alongside the parade schedule.
const PARADES_IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/f/f1/Year_of_Ox_Chinese_New_Year_Parade_San_Francisco_2009.jpg";

/// Dispatch an action string to its responder.
///
/// Returns `None` for actions this webhook does not fulfill; the handler
/// then answers with an empty object and the platform falls back to its own
/// response.
#[must_use]
pub fn dispatch(action: &str, parameters: &Map<String, Value>) -> Option<IntentResponse> {
    let action = IntentAction::parse_str(action)?;

    let response = match action {
        IntentAction::InquiryParades => parades_response(parameters),
    };

    Some(response)
}

/// Respond to a parade schedule inquiry.
///
/// The slots are accepted but unused: the schedule is a fixed value standing
/// in for an events-database query.
#[must_use]
pub fn parades_response(_parameters: &Map<String, Value>) -> IntentResponse {
    IntentResponse {
        speech: PARADES_SPEECH.to_string(),
        display_text: PARADES_SPEECH.to_string(),
        data: PARADES_IMAGE_URL.to_string(),
        context_out: Vec::new(),
        source: RESPONSE_SOURCE.to_string(),
    }
}
