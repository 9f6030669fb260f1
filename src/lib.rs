//! HR leave management backend.
//!
//! Serves four leave operations (balance lookup, leave submission, policy
//! lookup, team calendar) to a conversational agent, either through an
//! action-group webhook or as MCP tools.

pub mod mcp;

use axum::{
    Json, Router,
    routing::{get, post},
};
use rmcp::transport::{
    StreamableHttpServerConfig, StreamableHttpService,
    streamable_http_server::session::local::LocalSessionManager,
};

use crate::mcp::{
    LeaveMCPFactory,
    error::LeaveError,
    router::{self, ActionGroupEvent, ActionGroupResponse},
};

async fn action_group(
    Json(event): Json<ActionGroupEvent>,
) -> Result<Json<ActionGroupResponse>, LeaveError> {
    router::handle_event(event).map(Json)
}

async fn livez() -> &'static str {
    "ok"
}

/// Builds the HTTP application: the action-group webhook, a liveness check and
/// the streamable HTTP MCP service.
#[must_use]
pub fn app() -> Router {
    let mcp_service = StreamableHttpService::new(
        || Ok(LeaveMCPFactory::new()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );

    Router::new()
        .route("/action-group", post(action_group))
        .route("/livez", get(livez))
        .nest_service("/mcp", mcp_service)
}
