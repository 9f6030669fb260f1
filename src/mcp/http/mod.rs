//! HTTP communication with the hosted agent runtime.
//!
//! Used by the `invoke-agent` driver to send prompts to the agent that
//! fronts the leave tools, including session handling and reply streaming.

mod client;

pub use client::{AGENT_ALIAS_ID, AGENT_ID, AGENT_RUNTIME_URL, AgentClient, new_session_id};
