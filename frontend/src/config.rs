use serde::Deserialize;
use std::time::Duration;

/// Runtime settings for the client.
///
/// Defaults match a same-origin deployment behind the API server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix prepended to every `/api/...` path. Empty means same origin.
    pub api_base: String,
    /// LocalStorage key holding the bearer token.
    pub token_key: String,
    pub history_limit: u32,
    pub login_redirect_delay_ms: u64,
    pub register_switch_delay_ms: u64,
    pub history_refresh_delay_ms: u64,
    pub auth_path: String,
    pub dashboard_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            token_key: "token".to_string(),
            history_limit: 10,
            login_redirect_delay_ms: 1000,
            register_switch_delay_ms: 2000,
            history_refresh_delay_ms: 1000,
            auth_path: "/index.html".to_string(),
            dashboard_path: "/dashboard.html".to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by values baked in at build time.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(base) = option_env!("TUMORSCAN_API_BASE") {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(key) = option_env!("TUMORSCAN_TOKEN_KEY") {
            config.token_key = key.to_string();
        }
        config
    }

    pub fn login_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.login_redirect_delay_ms)
    }

    pub fn register_switch_delay(&self) -> Duration {
        Duration::from_millis(self.register_switch_delay_ms)
    }

    pub fn history_refresh_delay(&self) -> Duration {
        Duration::from_millis(self.history_refresh_delay_ms)
    }
}
