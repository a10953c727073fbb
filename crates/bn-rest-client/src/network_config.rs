// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Network configuration types
//!
//! The base URL is selected once, when the client is constructed: an
//! explicit override wins, then the production flag, then a per-platform
//! development default. Development emulators reach the host machine
//! differently per platform, hence the branch.

use serde::{Deserialize, Serialize};

/// Production backend base URL, used when no override is configured
pub const PRODUCTION_URL: &str = "https://barbernet-backend-q8id.onrender.com/api";

const DEV_URL_ANDROID: &str = "http://10.0.2.2:8787/api";
const DEV_URL_DEFAULT: &str = "http://localhost:8787/api";

/// Network configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Use the production base URL regardless of environment
    pub production: bool,
    /// Explicit base URL, winning over every other rule
    #[serde(rename = "base-url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl NetworkConfig {
    /// Configuration from the process environment (`BN_ENV=production`
    /// selects the production URL)
    pub fn from_env() -> Self {
        let production = std::env::var("BN_ENV").map(|v| v == "production").unwrap_or(false);
        Self {
            production,
            base_url: None,
        }
    }

    /// Configuration pinned to the production backend
    pub fn production() -> Self {
        Self {
            production: true,
            base_url: None,
        }
    }

    /// Resolve the base URL for this configuration
    pub fn resolve_base_url(&self) -> String {
        if let Some(url) = &self.base_url {
            return url.clone();
        }

        if self.production {
            return std::env::var("BN_API_URL_PRODUCTION")
                .unwrap_or_else(|_| PRODUCTION_URL.to_string());
        }

        if cfg!(target_os = "android") {
            std::env::var("BN_API_URL_ANDROID").unwrap_or_else(|_| DEV_URL_ANDROID.to_string())
        } else if cfg!(target_os = "ios") {
            std::env::var("BN_API_URL_IOS").unwrap_or_else(|_| DEV_URL_DEFAULT.to_string())
        } else {
            std::env::var("BN_API_URL_WEB").unwrap_or_else(|_| DEV_URL_DEFAULT.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_url_wins() {
        let config = NetworkConfig {
            production: true,
            base_url: Some("http://127.0.0.1:9999/api".to_string()),
        };
        assert_eq!(config.resolve_base_url(), "http://127.0.0.1:9999/api");
    }

    #[test]
    fn test_production_flag_selects_production_url() {
        let config = NetworkConfig::production();
        assert_eq!(config.resolve_base_url(), PRODUCTION_URL);
    }
}
