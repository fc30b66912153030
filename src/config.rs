use std::env;

use thiserror::Error;

/// Environment variable holding the bot token
pub const TOKEN_VAR: &str = "DISCORD_TOKEN";
/// Environment variable holding the application id
pub const APP_ID_VAR: &str = "APP_ID";

/// Returned when the runtime configuration is unusable
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing the {0} environment variable")]
    MissingVariable(&'static str),
    #[error("The {0} configuration value is empty")]
    EmptyValue(&'static str),
}

/// Everything the publisher needs to know about its environment
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub application_id: String,
}

impl Config {
    /// Build a config from explicit values, rejecting empty ones
    pub fn new(token: &str, application_id: &str) -> Result<Self, ConfigError> {
        if token.is_empty() {
            return Err(ConfigError::EmptyValue(TOKEN_VAR));
        }
        if application_id.is_empty() {
            return Err(ConfigError::EmptyValue(APP_ID_VAR));
        }
        Ok(Config {
            token: token.to_string(),
            application_id: application_id.to_string(),
        })
    }

    /// Read the config from the process environment, once, at startup
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = env::var(TOKEN_VAR).map_err(|_| ConfigError::MissingVariable(TOKEN_VAR))?;
        let application_id =
            env::var(APP_ID_VAR).map_err(|_| ConfigError::MissingVariable(APP_ID_VAR))?;
        Config::new(&token, &application_id)
    }
}
