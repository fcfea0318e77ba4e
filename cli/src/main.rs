//! CLI entrypoint for Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod cli;
mod output;
mod progress;

use anyhow::{bail, Result};
use clap::Parser;
use cli::{Cli, OutputFormat};
use council_application::{
    DeliberationOrchestrator, NoObserver, RunDeliberationError,
};
use council_application::ports::conversation::ConversationPort;
use council_domain::{DeliberationRecord, Prompt};
use council_infrastructure::{ConfigLoader, InMemoryConversation, SimulatedProviderGateway};
use output::ConsoleFormatter;
use progress::ConsoleObserver;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Council");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?
    };
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;

    let roster = config.to_roster()?;

    let prompt = Prompt::try_new(cli.prompt)?;

    // === Dependency Injection ===
    let gateway = Arc::new(SimulatedProviderGateway::new(
        config.deliberation.min_latency(),
        config.deliberation.max_latency(),
    ));

    let orchestrator = Arc::new(
        DeliberationOrchestrator::new(gateway, roster)
            .with_stream_delay(config.deliberation.stream_delay())
            .with_sentinel(config.deliberation.sentinel.clone()),
    );
    let conversation = InMemoryConversation::new();

    // Print header
    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|                 Council - Persona Deliberation             |");
        println!("+============================================================+");
        println!();
        println!("Prompt: {}", prompt);
        println!(
            "Roster: {}",
            orchestrator
                .roster()
                .iter()
                .map(|p| p.name().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
    }

    // Ctrl-C requests cooperative cancellation
    {
        let orchestrator = Arc::clone(&orchestrator);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                orchestrator.cancel();
            }
        });
    }

    // Execute with or without progress reporting
    let result = if cli.quiet {
        orchestrator.dispatch(prompt.clone(), &conversation, &NoObserver).await
    } else {
        let observer = ConsoleObserver::new();
        orchestrator.dispatch(prompt.clone(), &conversation, &observer).await
    };

    match result {
        Ok(()) => {}
        Err(RunDeliberationError::Cancelled) => return Ok(()),
        Err(e) => bail!(e),
    }

    // The verdict lives in the assistant message the run streamed into
    let verdict = conversation
        .messages()
        .last()
        .map(|m| m.content.clone())
        .unwrap_or_default();
    let record = DeliberationRecord::from_snapshot(
        prompt.content(),
        orchestrator.roster(),
        &orchestrator.snapshot(),
        verdict,
    );

    let formatted = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&record),
        OutputFormat::Verdict => ConsoleFormatter::format_verdict_only(&record),
        OutputFormat::Json => ConsoleFormatter::format_json(&record),
    };

    println!("{}", formatted);

    Ok(())
}
