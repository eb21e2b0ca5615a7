//! Agent Fulfillment
//!
//! Receives intent-recognition payloads from the conversational-agent
//! platform, dispatches on the action string, and answers with canned
//! responses.

pub mod actions;
pub mod handlers;
pub mod responders;
pub mod types;
