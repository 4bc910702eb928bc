//! # Configuration State
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PARAPHARM_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization. The viewport width is the exception: it
//! is copied into the store's notification policy and updated there.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use parapharm_core::ToastPosition;

use super::notifier::{NotificationPolicy, DEFAULT_QUIET_BELOW_PX};

/// Overrides the database file location.
pub const ENV_DB_PATH: &str = "PARAPHARM_DB_PATH";
const ENV_STORE_NAME: &str = "PARAPHARM_STORE_NAME";
const ENV_QUIET_BELOW_PX: &str = "PARAPHARM_QUIET_BELOW_PX";
const ENV_VIEWPORT_WIDTH: &str = "PARAPHARM_VIEWPORT_WIDTH";
const ENV_TOAST_POSITION: &str = "PARAPHARM_TOAST_POSITION";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (page titles, log lines)
    pub store_name: String,

    /// Notifications are quiet on viewports narrower than this.
    pub quiet_below_px: u32,

    /// Initial viewport width, if known before the front end reports it.
    pub viewport_width: Option<u32>,

    pub toast_position: ToastPosition,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Parapharm"
    /// - Quiet below 768px, toasts bottom-right
    fn default() -> Self {
        ConfigState {
            store_name: "Parapharm".to_string(),
            quiet_below_px: DEFAULT_QUIET_BELOW_PX,
            viewport_width: None,
            toast_position: ToastPosition::default(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PARAPHARM_STORE_NAME`: Override store name
    /// - `PARAPHARM_QUIET_BELOW_PX`: Quiet-notification breakpoint (e.g. "768")
    /// - `PARAPHARM_VIEWPORT_WIDTH`: Initial viewport width
    /// - `PARAPHARM_TOAST_POSITION`: e.g. "top-right"
    pub fn from_env() -> Self {
        ConfigState::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    /// Unparsable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup(ENV_STORE_NAME) {
            config.store_name = store_name;
        }

        if let Some(px) = parse_var(&lookup, ENV_QUIET_BELOW_PX) {
            config.quiet_below_px = px;
        }

        if let Some(width) = parse_var(&lookup, ENV_VIEWPORT_WIDTH) {
            config.viewport_width = Some(width);
        }

        if let Some(position) = parse_var(&lookup, ENV_TOAST_POSITION) {
            config.toast_position = position;
        }

        config
    }

    pub fn notification_policy(&self) -> NotificationPolicy {
        NotificationPolicy {
            quiet_below_px: self.quiet_below_px,
            viewport_width: self.viewport_width,
            position: self.toast_position,
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key = %key, value = %raw, "Ignoring unparsable configuration value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = ConfigState::from_lookup(lookup(&[]));
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.notification_policy(), NotificationPolicy::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = ConfigState::from_lookup(lookup(&[
            (ENV_STORE_NAME, "Parapharm Rabat"),
            (ENV_QUIET_BELOW_PX, "1024"),
            (ENV_VIEWPORT_WIDTH, "800"),
            (ENV_TOAST_POSITION, "top-left"),
        ]));

        assert_eq!(config.store_name, "Parapharm Rabat");
        let policy = config.notification_policy();
        assert_eq!(policy.quiet_below_px, 1024);
        assert_eq!(policy.position, ToastPosition::TopLeft);
        assert!(policy.is_quiet());
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config = ConfigState::from_lookup(lookup(&[
            (ENV_QUIET_BELOW_PX, "wide"),
            (ENV_TOAST_POSITION, "middle"),
        ]));

        assert_eq!(config.quiet_below_px, DEFAULT_QUIET_BELOW_PX);
        assert_eq!(config.toast_position, ToastPosition::BottomRight);
    }
}
