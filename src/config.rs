//! Auth modal configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::AuthError;
use crate::modal::{Tab, TabSwitchPolicy};

pub const DEFAULT_DEMO_LATENCY_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthConfig {
    pub default_tab: Tab,
    pub tab_switch_policy: TabSwitchPolicy,
    /// Simulated sink latency used by the demo harness.
    pub demo_latency_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            default_tab: Tab::Login,
            tab_switch_policy: TabSwitchPolicy::Always,
            demo_latency_ms: DEFAULT_DEMO_LATENCY_MS,
        }
    }
}

impl AuthConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `AUTH_DEFAULT_TAB`: `login` (default) or `register`
    /// - `AUTH_TAB_SWITCH_POLICY`: `always` (default) or `block_while_submitting`
    /// - `AUTH_DEMO_LATENCY_MS`: default 1000
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set to an unrecognized value.
    pub fn from_env() -> Result<Self, AuthError> {
        let default_tab = match std::env::var("AUTH_DEFAULT_TAB") {
            Ok(raw) => raw.parse()?,
            Err(_) => Tab::Login,
        };
        let tab_switch_policy = match std::env::var("AUTH_TAB_SWITCH_POLICY") {
            Ok(raw) => raw.parse()?,
            Err(_) => TabSwitchPolicy::Always,
        };
        let demo_latency_ms = match std::env::var("AUTH_DEMO_LATENCY_MS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| AuthError::ConfigParse(format!("AUTH_DEMO_LATENCY_MS '{raw}': {e}")))?,
            Err(_) => DEFAULT_DEMO_LATENCY_MS,
        };

        Ok(Self { default_tab, tab_switch_policy, demo_latency_ms })
    }
}
