//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from `LUMERA__`-prefixed environment
//! variables (e.g. `LUMERA__AUTH__TOKEN_SECRET`).

use serde::Deserialize;

/// Server configuration composed from section configs.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the upstream commerce API.
    pub api_base_url: String,

    /// Session configuration.
    #[serde(default)]
    pub session: SessionConfig,

    /// Session token configuration.
    pub auth: AuthConfig,

    /// Route policy configuration.
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Session-related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Maximum session duration in minutes. The cookie never outlives the
    /// token's own expiry; stateless tokens cannot be revoked early, so
    /// short durations bound the revocation latency.
    #[serde(default = "default_session_duration_minutes")]
    pub duration_minutes: i64,

    /// Whether to set the Secure flag on cookies (requires HTTPS).
    /// Defaults to true for production safety; set to false for local HTTP development.
    #[serde(default = "default_secure_cookies")]
    pub secure_cookies: bool,
}

/// Session token configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared HMAC secret for validating tokens issued by the upstream API.
    pub token_secret: String,
}

/// Route policy configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// When true, paths without a policy entry are denied instead of open.
    #[serde(default)]
    pub default_deny: bool,
}

fn default_session_duration_minutes() -> i64 {
    60
}

fn default_secure_cookies() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_minutes: default_session_duration_minutes(),
            secure_cookies: default_secure_cookies(),
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            default_deny: false,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("LUMERA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_config_has_correct_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.duration_minutes, 60);
        assert!(config.secure_cookies);
    }

    #[test]
    fn policy_defaults_to_open() {
        let config = PolicyConfig::default();
        assert!(!config.default_deny);
    }
}
