use std::process::exit;

use anyhow::{Context, Result};
use command_publisher::commands::definitions;
use command_publisher::config::Config;
use command_publisher::publisher::Publisher;
use tracing::{error, info};

/// Gather everything needed before touching the network
fn setup() -> Result<Publisher> {
    // Get the discord token and application id from a .env file
    dotenv::dotenv().ok();
    let config = Config::from_env()
        .context("Expected a discord token and an application id in the environment")?;
    Ok(Publisher::new(config))
}

#[tokio::main]
async fn main() {
    // Setup tracing
    let subscriber = tracing_subscriber::FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eprintln!("Unable to set global default subscriber: {e}"))
        .ok();

    let publisher = setup().unwrap_or_else(|e| {
        error!("Unable to configure the publisher: {e:#}");
        exit(1);
    });

    let commands = definitions();
    info!("Started refreshing application (/) commands.");
    match publisher.publish(&commands).await {
        Ok(()) => info!("Successfully reloaded application (/) commands."),
        // The failure is only reported through the log, there is no retry
        Err(e) => error!("{e}"),
    }
}
