use crate::error::{GtmError, GtmResult};
use serde::Deserialize;
use std::time::Duration;

/// Schema versions of the GTM configuration API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum SchemaVersion {
    #[serde(rename = "1.3")]
    V1_3,
    #[default]
    #[serde(rename = "1.4")]
    V1_4,
}

impl SchemaVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVersion::V1_3 => "1.3",
            SchemaVersion::V1_4 => "1.4",
        }
    }

    /// Media type sent in `Accept` and `Content-Type`
    pub fn media_type(&self) -> String {
        format!("application/vnd.config-gtm.v{}+json", self.as_str())
    }

    pub fn parse(value: &str) -> GtmResult<Self> {
        match value.trim() {
            "1.3" => Ok(SchemaVersion::V1_3),
            "1.4" => Ok(SchemaVersion::V1_4),
            other => Err(GtmError::Config(format!("unsupported schema version: {}", other))),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API host, e.g. `https://akab-xxxx.luna.akamaiapis.net`
    pub base_url: String,
    pub schema_version: SchemaVersion,
    pub user_agent: String,
    /// Per-request timeout in milliseconds; `None` leaves reqwest's default
    pub timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost".to_string(),
            schema_version: SchemaVersion::default(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_ms: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_schema_version(mut self, version: SchemaVersion) -> Self {
        self.schema_version = version;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Load from `GTM_BASE_URL` (required), `GTM_SCHEMA_VERSION` and
    /// `GTM_TIMEOUT_MS`
    pub fn from_env() -> GtmResult<Self> {
        let base_url = std::env::var("GTM_BASE_URL")
            .map_err(|_| GtmError::Config("GTM_BASE_URL is not set".to_string()))?;
        let mut config = Self::new(base_url);

        if let Ok(version) = std::env::var("GTM_SCHEMA_VERSION") {
            config.schema_version = SchemaVersion::parse(&version)?;
        }
        if let Ok(timeout) = std::env::var("GTM_TIMEOUT_MS") {
            let millis = timeout
                .trim()
                .parse::<u64>()
                .map_err(|e| GtmError::Config(format!("invalid GTM_TIMEOUT_MS: {}", e)))?;
            config.timeout_ms = Some(millis);
        }

        Ok(config)
    }
}
