//! CLI argument definitions for the REST populator.

use crate::client::RestClient;
use crate::error::PopulateError;
use clap::Args;
use seed_populate::CommonPopulateArgs;
use std::time::Duration;

/// Connection to the hosted backend.
#[derive(Args, Clone, Debug)]
pub struct RestConnectionArgs {
    /// Base URL of the backend (e.g., https://project.example.co)
    #[arg(long, env = "SEED_API_URL")]
    pub api_url: Option<String>,

    /// API key sent as `apikey` and bearer token
    #[arg(long, env = "SEED_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,
}

impl RestConnectionArgs {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build a client. URL and key are only required once a request is made,
    /// so dry runs can omit them.
    pub fn build_client(&self) -> Result<RestClient, PopulateError> {
        let url = self
            .api_url
            .as_deref()
            .ok_or(PopulateError::MissingConnection("--api-url"))?;
        let key = self
            .api_key
            .as_deref()
            .ok_or(PopulateError::MissingConnection("--api-key"))?;
        RestClient::new(url, key, self.timeout())
    }
}

/// REST-specific populate arguments.
#[derive(Args, Clone, Debug)]
pub struct RestPopulateArgs {
    #[command(flatten)]
    pub connection: RestConnectionArgs,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}

/// Mask an API key for logging, keeping only the last four characters.
pub fn mask_api_key(key: &str) -> String {
    let count = key.chars().count();
    if count <= 8 {
        return "***".to_string();
    }
    let tail: String = key.chars().skip(count - 4).collect();
    format!("***{tail}")
}
