//! Error types for the leave management backend.
//!
//! `LeaveError` covers both the lookup failures the tools report back to the
//! caller (unknown employee, team, policy topic or function) and the transport
//! failures of the agent driver. It converts into:
//! - RMCP's `ErrorData` for MCP protocol compliance
//! - an axum response for the action-group endpoint

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rmcp::{ErrorData, model::ErrorCode};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeaveError {
    #[error("No employee found with ID {0}")]
    EmployeeNotFound(String),

    #[error("Unknown team '{team}'. Available: {available}")]
    UnknownTeam { team: String, available: String },

    #[error("No policy found for '{topic}'. Available: {available}")]
    PolicyNotFound { topic: String, available: String },

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    #[error("Agent runtime returned {status}: {body}")]
    AgentRuntime { status: u16, body: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP middleware error: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LeaveError {
    /// Lookup failures are answered to the caller as an `{error}` body instead
    /// of failing the request.
    #[must_use]
    pub const fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            Self::EmployeeNotFound(_)
                | Self::UnknownTeam { .. }
                | Self::PolicyNotFound { .. }
                | Self::UnknownFunction(_)
        )
    }
}

impl From<LeaveError> for ErrorData {
    fn from(err: LeaveError) -> Self {
        let code = if err.is_lookup_failure() {
            ErrorCode::INVALID_PARAMS
        } else {
            ErrorCode::INTERNAL_ERROR
        };
        Self::new(code, err.to_string(), None)
    }
}

// Lookup failures never get here: the router answers them as `{error}` bodies.
impl IntoResponse for LeaveError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_failures_map_to_invalid_params() {
        let data = ErrorData::from(LeaveError::EmployeeNotFound("EMP999".to_string()));
        assert_eq!(data.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(data.message, "No employee found with ID EMP999");
    }

    #[test]
    fn transport_failures_map_to_internal_error() {
        let data = ErrorData::from(LeaveError::MissingConfig("AGENT_RUNTIME_URL".to_string()));
        assert_eq!(data.code, ErrorCode::INTERNAL_ERROR);
        assert!(data.message.contains("AGENT_RUNTIME_URL"));
    }

    #[test]
    fn unknown_function_message() {
        let err = LeaveError::UnknownFunction("approve_everything".to_string());
        assert!(err.is_lookup_failure());
        assert_eq!(err.to_string(), "Unknown function: approve_everything");
    }

    #[test]
    fn http_response_is_internal_server_error() {
        let response = LeaveError::MissingConfig("AGENT_RUNTIME_URL".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
