use chrono_tz::Tz;
use eyre::{eyre, Result};
use std::env;

/// Configuration for the booking backend client.
///
/// This struct contains all the connection parameters the client needs,
/// including the backend base URL, the optional bearer token, and the
/// timezone the hourly slot grid is rendered in.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the booking API (required)
    pub base_url: String,
    /// Bearer token attached to every request (optional)
    pub api_token: Option<String>,
    /// Timezone the slot grid is rendered in (defaults to UTC)
    pub timezone: Tz,
}

impl ClientConfig {
    /// Build a configuration programmatically, with no token and UTC slots.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: None,
            timezone: Tz::UTC,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("FIELDBOOK_API_URL")
            .map_err(|_| eyre!("FIELDBOOK_API_URL environment variable not set"))?;

        let api_token = env::var("FIELDBOOK_API_TOKEN").ok();

        // Optional IANA timezone name for the slot grid
        let timezone = match env::var("FIELDBOOK_TIMEZONE") {
            Ok(name) => name
                .parse::<Tz>()
                .map_err(|_| eyre!("FIELDBOOK_TIMEZONE must be a valid IANA timezone name"))?,
            Err(_) => Tz::UTC,
        };

        Ok(Self {
            base_url,
            api_token,
            timezone,
        })
    }

    /// Get the API base URL without a trailing slash
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
