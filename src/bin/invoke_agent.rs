//! Drives the hosted HR leave agent with canned prompts.
//!
//! Configure the runtime with `AGENT_RUNTIME_URL`, `AGENT_ID` and
//! `AGENT_ALIAS_ID` (a `.env` file works too).

use anyhow::Result;
use dotenv::dotenv;
use leave_mcp::mcp::http::{AgentClient, new_session_id};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const RULE: &str = "============================================================";

/// Sends one prompt, opening a fresh session unless one is given, and returns
/// the session id for follow-up turns.
async fn invoke(client: &AgentClient, prompt: &str, session_id: Option<&str>) -> Result<String> {
    let session_id = session_id.map_or_else(new_session_id, str::to_string);
    println!("\n{RULE}");
    println!("User: {prompt}");
    println!("Session: {}...", session_id.chars().take(8).collect::<String>());
    println!("{RULE}");

    let (session_id, answer) = client.invoke_agent(prompt, Some(&session_id)).await?;
    println!("\nAgent: {answer}");
    Ok(session_id)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = AgentClient::from_env()?;

    println!("{RULE}");
    println!("HR Leave Agent - Live Tests");
    println!("{RULE}");

    println!("\n>>> TEST 1: Check leave balance");
    invoke(&client, "How many PTO days does employee EMP001 have left?", None).await?;

    println!("\n>>> TEST 2: Policy lookup");
    invoke(&client, "What's the remote work policy?", None).await?;

    println!("\n>>> TEST 3: Team calendar");
    invoke(&client, "Who on the engineering team is out in March?", None).await?;

    println!("\n>>> TEST 4: Submit leave request");
    invoke(
        &client,
        "Submit a PTO request for EMP003 from March 20 to March 24, 2026.",
        None,
    )
    .await?;

    println!("\n>>> TEST 5: Multi-turn conversation");
    let session_id = invoke(&client, "I'm employee EMP004. How much PTO do I have?", None).await?;
    invoke(&client, "Can I take March 10 off as PTO?", Some(&session_id)).await?;

    println!("\n{RULE}");
    println!("All tests complete.");
    Ok(())
}
