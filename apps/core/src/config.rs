use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;
use tracing::info;
use validator::Validate;

pub const ENV_REPLY_DELAY_MS: &str = "ASSISTANT_REPLY_DELAY_MS";
pub const ENV_QUICK_ACTION_DELAY_MS: &str = "ASSISTANT_QUICK_ACTION_DELAY_MS";
pub const ENV_ASSISTANT_NAME: &str = "ASSISTANT_NAME";
pub const ENV_WEBSITE_URL: &str = "ASSISTANT_WEBSITE_URL";

/// Runtime settings of the assistant.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct AssistantConfig {
    /// Simulated "thinking" time before each reply, in milliseconds.
    #[validate(range(max = 10_000))]
    pub reply_delay_ms: u64,
    /// Pause between picking a quick action and submitting it, in milliseconds.
    #[validate(range(max = 5_000))]
    pub quick_action_delay_ms: u64,
    /// Name shown in the header and next to assistant messages.
    #[validate(length(min = 1))]
    pub assistant_name: String,
    /// Website linked in the footer.
    #[validate(url)]
    pub website_url: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            quick_action_delay_ms: 100,
            assistant_name: "AFOA Navigation Assistant".to_string(),
            website_url: "https://www.afoa.org.uk".to_string(),
        }
    }
}

impl AssistantConfig {
    /// Loads `.env` (if any) then reads overrides from the environment.
    pub fn load() -> Result<Self, AppError> {
        Self::load_with(None)
    }

    /// Like [`load`](Self::load), but an explicit env file must exist.
    ///
    /// Variables already set in the process win over the file.
    pub fn load_with(env_file: Option<&Path>) -> Result<Self, AppError> {
        let loaded = match env_file {
            Some(path) => {
                dotenv::from_path(path).map_err(|e| {
                    AppError::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                Some(path.to_path_buf())
            }
            None => dotenv::dotenv().ok(),
        };
        if let Some(path) = loaded {
            info!("Loaded environment from {:?}", path);
        }
        Self::from_env()
    }

    /// Builds the configuration from the process environment only.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(value) = read_var(ENV_REPLY_DELAY_MS) {
            config.reply_delay_ms = parse_millis(ENV_REPLY_DELAY_MS, &value)?;
        }
        if let Some(value) = read_var(ENV_QUICK_ACTION_DELAY_MS) {
            config.quick_action_delay_ms = parse_millis(ENV_QUICK_ACTION_DELAY_MS, &value)?;
        }
        if let Some(value) = read_var(ENV_ASSISTANT_NAME) {
            config.assistant_name = value;
        }
        if let Some(value) = read_var(ENV_WEBSITE_URL) {
            config.website_url = value;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn quick_action_delay(&self) -> Duration {
        Duration::from_millis(self.quick_action_delay_ms)
    }

    /// Website without its scheme, as displayed in the footer.
    pub fn website_display(&self) -> &str {
        self.website_url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
    }
}

fn read_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_millis(key: &str, value: &str) -> Result<u64, AppError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| AppError::Config(format!("{} must be a number of milliseconds: {}", key, e)))
}
