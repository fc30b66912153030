use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use thiserror::Error;

use crate::commands::spec::Command;
use crate::config::Config;

/// Root of the REST API the commands are pushed to
pub const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

/// Returned when the registered command set could not be replaced
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Failed to reach the command endpoint: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Command registration rejected with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

/// Pushes a command list to the bulk overwrite endpoint of one application
pub struct Publisher {
    client: reqwest::Client,
    base_url: String,
    config: Config,
}

impl Publisher {
    /// A publisher talking to the real Discord API
    pub fn new(config: Config) -> Self {
        Self::with_base_url(config, DISCORD_API_BASE)
    }

    /// A publisher talking to an arbitrary API root, mostly useful for tests
    pub fn with_base_url(config: Config, base_url: &str) -> Self {
        Publisher {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            config,
        }
    }

    /// Replace the whole registered command set with `commands`
    /// One PUT, no retry: either everything is replaced or an error comes back
    pub async fn publish(&self, commands: &[Command]) -> Result<(), PublishError> {
        let url = format!(
            "{}/applications/{}/commands",
            self.base_url, self.config.application_id
        );
        let response = self
            .client
            .put(&url)
            .header(AUTHORIZATION, format!("Bot {}", self.config.token))
            .json(commands)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::Rejected { status, body });
        }
        Ok(())
    }
}
