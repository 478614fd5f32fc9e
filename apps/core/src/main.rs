// AFOA Navigation Assistant entry point
// Keyword FAQ chat for the Airport Fire Officers Association website

mod brain;
mod chat;
mod config;
mod error;
mod models;

#[cfg(test)]
mod tests;

use anyhow::Context;
use brain::IntentMatcher;
use chat::{ChatSession, Console};
use config::AssistantConfig;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // stdout belongs to the chat
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AssistantConfig::load().context("Failed to load assistant configuration")?;
    info!(?config, "Configuration loaded");

    let matcher = IntentMatcher::default();
    let mut session = ChatSession::new(matcher, config.reply_delay());
    let mut console = Console::new(std::io::stdout(), &config);

    console
        .run(&mut session, BufReader::new(tokio::io::stdin()))
        .await
        .context("Chat session failed")?;

    Ok(())
}
