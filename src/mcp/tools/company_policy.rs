//! Tool for looking up company leave and workplace policies by topic.

use crate::mcp::{
    directory::{POLICIES, PolicyEntry, policy_topics},
    error::LeaveError,
};
use rmcp::{ErrorData, handler::server::wrapper::Parameters, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize, Deserialize, JsonSchema)]
pub struct PolicyRequest {
    #[serde(default)]
    #[schemars(description = "Policy topic: pto, sick leave, remote work, bereavement or parental")]
    pub topic: String,
}

/// Matches the topic against the catalog keys after lowercasing, trimming and
/// replacing spaces with underscores. Either side may be a substring of the
/// other; the first catalog entry that matches wins.
///
/// # Errors
///
/// Returns `LeaveError::PolicyNotFound`, listing the catalog topics, when
/// nothing matches.
pub fn find_policy(topic: &str) -> Result<PolicyEntry, LeaveError> {
    let normalized = topic.to_lowercase().trim().replace(' ', "_");

    POLICIES
        .iter()
        .find(|entry| {
            normalized.contains(entry.topic) || entry.topic.contains(normalized.as_str())
        })
        .copied()
        .inspect(|entry| debug!(topic, matched = entry.topic, "policy lookup"))
        .ok_or_else(|| LeaveError::PolicyNotFound {
            topic: topic.to_string(),
            available: policy_topics(),
        })
}

/// # Errors
///
/// Returns `INVALID_PARAMS` for an unknown topic.
pub fn get_company_policy(
    Parameters(args): Parameters<PolicyRequest>,
) -> Result<CallToolResult, ErrorData> {
    let policy = find_policy(&args.topic)?;
    let value = serde_json::to_value(policy).map_err(LeaveError::from)?;
    Ok(CallToolResult::structured(value))
}
