//! HTTP client for talking to the hosted agent runtime.
//!
//! This module provides:
//! - Environment-based configuration (runtime URL, agent and alias ids)
//! - A tracing-instrumented client shared across invocations
//! - `invoke_agent`, which sends a prompt into a session and collects the
//!   streamed reply

use std::{env, sync::LazyLock, time::Duration};

use anyhow::{Result, anyhow};
use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Result as MiddlewareResult};
use reqwest_tracing::{
    ReqwestOtelSpanBackend, TracingMiddleware, default_on_request_end, reqwest_otel_span,
};
use serde::Serialize;
use tracing::{Span, debug, info};
use uuid::Uuid;

use crate::mcp::error::LeaveError;

pub static AGENT_RUNTIME_URL: LazyLock<Result<String>> = LazyLock::new(|| {
    env::var("AGENT_RUNTIME_URL").map_err(|e| anyhow!("AGENT_RUNTIME_URL must be set: {e}"))
});

pub static AGENT_ID: LazyLock<String> =
    LazyLock::new(|| env::var("AGENT_ID").unwrap_or_else(|_| "YOUR_AGENT_ID".to_string()));

/// Built-in test alias.
pub static AGENT_ALIAS_ID: LazyLock<String> =
    LazyLock::new(|| env::var("AGENT_ALIAS_ID").unwrap_or_else(|_| "TSTALIASID".to_string()));

const INVOKE_TIMEOUT: Duration = Duration::from_secs(120);

// Only ever used as the type parameter of `TracingMiddleware`.
#[allow(dead_code)]
struct AgentRuntimeTracing;

impl ReqwestOtelSpanBackend for AgentRuntimeTracing {
    fn on_request_start(req: &Request, _extension: &mut Extensions) -> Span {
        reqwest_otel_span!(
            name = "agent-runtime-request",
            req,
            request_body = req
                .body()
                .and_then(|b| b.as_bytes())
                .map(String::from_utf8_lossy)
                .as_deref(),
        )
    }

    fn on_request_end(
        span: &Span,
        outcome: &MiddlewareResult<Response>,
        _extension: &mut Extensions,
    ) {
        default_on_request_end(span, outcome);
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InvokeAgentRequest<'a> {
    input_text: &'a str,
}

/// Fresh conversational session id (UUID v4).
#[must_use]
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

pub struct AgentClient {
    client: ClientWithMiddleware,
    base_url: String,
    agent_id: String,
    alias_id: String,
}

impl AgentClient {
    /// # Errors
    ///
    /// Returns `LeaveError::Http` if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str, agent_id: &str, alias_id: &str) -> Result<Self, LeaveError> {
        let client = reqwest::Client::builder().timeout(INVOKE_TIMEOUT).build()?;
        Ok(Self {
            client: ClientBuilder::new(client)
                .with(TracingMiddleware::<AgentRuntimeTracing>::new())
                .build(),
            base_url: base_url.trim_end_matches('/').to_string(),
            agent_id: agent_id.to_string(),
            alias_id: alias_id.to_string(),
        })
    }

    /// Builds a client from `AGENT_RUNTIME_URL`, `AGENT_ID` and `AGENT_ALIAS_ID`.
    ///
    /// # Errors
    ///
    /// Returns `LeaveError::MissingConfig` when `AGENT_RUNTIME_URL` is not set.
    pub fn from_env() -> Result<Self, LeaveError> {
        let base_url = AGENT_RUNTIME_URL
            .as_ref()
            .map_err(|e| LeaveError::MissingConfig(e.to_string()))?;
        Self::new(base_url, &AGENT_ID, &AGENT_ALIAS_ID)
    }

    #[must_use]
    pub fn session_url(&self, session_id: &str) -> String {
        format!(
            "{}/agents/{}/agentAliases/{}/sessions/{session_id}/text",
            self.base_url, self.agent_id, self.alias_id
        )
    }

    /// Sends `prompt` into a conversational session and returns the session id
    /// together with the agent's reply.
    ///
    /// A fresh session is opened when none is given. The reply is decoded once
    /// all chunks have arrived, so characters split across chunks survive.
    ///
    /// # Errors
    ///
    /// Returns `LeaveError::AgentRuntime` for a non-2xx status, and
    /// `LeaveError::Http`/`LeaveError::HttpMiddleware` on transport failures.
    pub async fn invoke_agent(
        &self,
        prompt: &str,
        session_id: Option<&str>,
    ) -> Result<(String, String), LeaveError> {
        let session_id = session_id.map_or_else(new_session_id, str::to_string);
        info!(session = %session_id, prompt, "invoking agent");

        let mut response = self
            .client
            .post(self.session_url(&session_id))
            .json(&InvokeAgentRequest { input_text: prompt })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LeaveError::AgentRuntime {
                status: status.as_u16(),
                body,
            });
        }

        let mut reply = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            debug!(bytes = chunk.len(), "completion chunk");
            reply.extend_from_slice(&chunk);
        }

        Ok((session_id, String::from_utf8_lossy(&reply).into_owned()))
    }
}
