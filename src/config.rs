//! Client configuration with multi-source merging

use crate::AskError;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Project-level config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "ask.toml";

/// Prefix of the environment variables that override file settings,
/// e.g. `ASK_ENDPOINT`, `ASK_TIMEOUT_SECS`.
pub const ENV_PREFIX: &str = "ASK_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AskConfig {
    /// Full URL the question is POSTed to. Has no default: it is a
    /// deployment setting.
    pub endpoint: Option<String>,
    /// Whole-request timeout. Unset means no client-side timeout.
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for AskConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: None,
            user_agent: concat!("ask-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl AskConfig {
    /// Load configuration from all sources.
    ///
    /// Priority (highest to lowest):
    /// 1. `ASK_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project file `./ask.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&Path>) -> Result<Self, AskError> {
        Self::figment(config_path)
            .extract()
            .map_err(|e| AskError::Config(e.to_string()))
    }

    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let project = PathBuf::from(PROJECT_CONFIG_FILE);
        if project.exists() {
            figment = figment.merge(Toml::file(project));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Request timeout, if one is configured. Zero would fail every request
    /// before it is sent, so it is refused.
    pub fn timeout(&self) -> Result<Option<Duration>, AskError> {
        match self.timeout_secs {
            Some(0) => Err(AskError::Config(
                "timeout_secs must be at least 1 (leave it unset for no timeout)".into(),
            )),
            secs => Ok(secs.map(Duration::from_secs)),
        }
    }

    /// The endpoint as a parsed URL, or a configuration error if it is
    /// missing or not an http(s) URL.
    pub fn endpoint_url(&self) -> Result<Url, AskError> {
        let raw = self
            .endpoint
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                AskError::Config(format!(
                    "no endpoint configured (set {ENV_PREFIX}ENDPOINT, `endpoint` in {PROJECT_CONFIG_FILE}, or --endpoint)"
                ))
            })?;

        let url = Url::parse(raw.trim())
            .map_err(|e| AskError::Config(format!("invalid endpoint {raw:?}: {e}")))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(AskError::Config(format!(
                "unsupported endpoint scheme {other:?}"
            ))),
        }
    }
}
