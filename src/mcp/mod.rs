//! HR leave management Model Context Protocol implementation.
//!
//! The implementation is organized into:
//!
//! - `directory`: Read-only employee, calendar and policy tables
//! - `error`: Error types and conversions
//! - `http`: Agent runtime client used by the `invoke-agent` driver
//! - `router`: Action-group envelope dispatch
//! - `tools`: Individual leave tools
//!
//! The main entry point is the `LeaveMCPFactory` which provides the MCP server
//! implementation and manages all tools.

pub mod directory;
pub mod error;
pub mod http;
pub mod router;
pub mod tools;

use axum::http::request;
use rmcp::{
    ErrorData, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Implementation, InitializeRequestParam, InitializeResult, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use tracing::info;

use crate::mcp::tools::{
    company_policy::{self, PolicyRequest},
    leave_balance::{self, EmployeeRequest},
    leave_request::{self, LeaveRequestParams},
    team_calendar::{self, TeamCalendarRequest},
};

#[derive(Clone)]
pub struct LeaveMCPFactory {
    tool_router: ToolRouter<Self>,
}

impl Default for LeaveMCPFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
#[allow(clippy::unused_self)]
impl LeaveMCPFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    // Thin delegating methods so the `tool_router` proc-macro can register the
    // tools; the implementations live in `mcp::tools::*`.

    #[tool(
        description = "Check how many PTO and sick days an employee has remaining, along with the annual allowance, by employee ID (e.g. EMP001)."
    )]
    fn check_leave_balance(
        &self,
        params: Parameters<EmployeeRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        leave_balance::check_leave_balance(params)
    }

    #[tool(
        description = "Submit a leave request for an employee between two YYYY-MM-DD dates (inclusive). PTO and sick requests are denied when the remaining balance is too low."
    )]
    fn submit_leave_request(
        &self,
        params: Parameters<LeaveRequestParams>,
    ) -> Result<CallToolResult, ErrorData> {
        leave_request::submit_leave_request(params)
    }

    #[tool(
        description = "Look up a company policy by topic: pto, sick leave, remote work, bereavement or parental."
    )]
    fn get_company_policy(
        &self,
        params: Parameters<PolicyRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        company_policy::get_company_policy(params)
    }

    #[tool(
        description = "List who on a team (engineering, marketing, sales) is out of office in a month, given as YYYY-MM or a month name."
    )]
    fn get_team_calendar(
        &self,
        params: Parameters<TeamCalendarRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        team_calendar::get_team_calendar(params)
    }
}

#[tool_handler]
impl ServerHandler for LeaveMCPFactory {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "HR leave assistant: leave balances, leave requests, company policies and team calendars"
                    .to_string(),
            ),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, ErrorData> {
        if let Some(http_request_part) = context.extensions.get::<request::Parts>() {
            let initialize_headers = &http_request_part.headers;
            let initialize_uri = &http_request_part.uri;
            info!(?initialize_headers, %initialize_uri, "initialize from http server");
        }
        Ok(self.get_info())
    }
}
