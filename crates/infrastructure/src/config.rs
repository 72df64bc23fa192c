//! Client configuration.
//!
//! Settings come from serde sources (field defaults apply to missing keys)
//! or from the environment:
//!
//! | Variable | Default |
//! |---|---|
//! | `FITFLOW_BASE_URL` | `http://localhost:5000/` |
//! | `FITFLOW_USER_AGENT` | `FitFlow/<crate version>` |

use fitflow_application::ports::TransportError;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::adapters::ReqwestTransport;

const DEFAULT_BASE_URL: &str = "http://localhost:5000/";

/// Environment variable holding the API origin.
pub const BASE_URL_VAR: &str = "FITFLOW_BASE_URL";
/// Environment variable holding the user agent.
pub const USER_AGENT_VAR: &str = "FITFLOW_USER_AGENT";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL does not parse.
    #[error("invalid FITFLOW_BASE_URL '{value}': {source}")]
    InvalidBaseUrl {
        /// The rejected value.
        value: String,
        /// Parse failure.
        source: url::ParseError,
    },

    /// The base URL cannot serve as an origin (e.g. `mailto:`).
    #[error("FITFLOW_BASE_URL '{0}' cannot be used as a base URL")]
    NotABase(String),
}

/// Settings of the API client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientSettings {
    /// Origin that request paths are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: Url,

    /// `User-Agent` sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[allow(clippy::expect_used)]
fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}

fn default_user_agent() -> String {
    format!("FitFlow/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientSettings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `FITFLOW_BASE_URL` is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for unset
    /// or blank variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is set but unusable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = match get(BASE_URL_VAR) {
            Some(value) => parse_base_url(value.trim())?,
            None => default_base_url(),
        };
        let user_agent = get(USER_AGENT_VAR).unwrap_or_else(default_user_agent);

        Ok(Self {
            base_url,
            user_agent,
        })
    }

    /// Builds the reqwest transport for these settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn build_transport(&self) -> Result<ReqwestTransport, TransportError> {
        ReqwestTransport::new(self.base_url.clone(), &self.user_agent)
    }
}

fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidBaseUrl {
        value: value.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::NotABase(value.to_string()));
    }
    Ok(url)
}
