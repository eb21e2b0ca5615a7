//! Tour Guide Server
//!
//! Fulfillment webhook backend for the demo tour guide conversational agent.
//! The agent platform posts recognized intents here; the server answers with
//! canned responses.

pub mod api;
pub mod config;
pub mod fulfillment;
