//! # Shell Configuration
//!
//! Defaults match a packaged desktop build. Every value can be overridden
//! from the environment; unparsable overrides are logged and ignored.

use std::env;
use std::time::Duration;

use nano_telemetry::TelemetryConfig;
use thiserror::Error;
use tracing::warn;

use crate::domain::activation::is_valid_scheme;
use crate::domain::Platform;

/// Complete shell configuration.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub window: WindowConfig,
    /// Deep link scheme registered with the OS.
    pub protocol: String,
    pub updater: UpdaterConfig,
    pub platform: Platform,
    pub telemetry: TelemetryConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            protocol: "lisk".to_string(),
            updater: UpdaterConfig::default(),
            platform: Platform::current(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl ShellConfig {
    /// Defaults overridden from the environment.
    ///
    /// - `LN_PROTOCOL`: deep link scheme (default: lisk)
    /// - `LN_UI_URL`: UI entry page
    /// - `LN_UPDATE_FEED`: update feed base URL
    /// - `LN_UPDATE_INTERVAL_SECS`: seconds between update checks
    /// - `LN_UPDATES_ENABLED`: set to `false` to skip update checks
    /// - `LN_PLATFORM`: win32, darwin or linux
    pub fn from_env() -> Self {
        let mut config = Self {
            telemetry: TelemetryConfig::for_component("shell"),
            ..Self::default()
        };

        if let Ok(protocol) = env::var("LN_PROTOCOL") {
            config.protocol = protocol;
        }
        if let Ok(url) = env::var("LN_UI_URL") {
            config.window.ui_url = url;
        }
        if let Ok(feed) = env::var("LN_UPDATE_FEED") {
            config.updater.feed_base = feed;
        }
        if let Ok(secs) = env::var("LN_UPDATE_INTERVAL_SECS") {
            match secs.parse() {
                Ok(secs) => config.updater.interval = Duration::from_secs(secs),
                Err(_) => warn!(value = %secs, "LN_UPDATE_INTERVAL_SECS is not a number, ignoring"),
            }
        }
        if let Ok(enabled) = env::var("LN_UPDATES_ENABLED") {
            config.updater.enabled = !matches!(enabled.to_lowercase().as_str(), "0" | "false" | "no");
        }
        if let Ok(platform) = env::var("LN_PLATFORM") {
            match platform.parse() {
                Ok(platform) => config.platform = platform,
                Err(e) => warn!(error = %e, "LN_PLATFORM ignored"),
            }
        }

        config
    }

    /// Check the configuration before the shell starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_scheme(&self.protocol) {
            return Err(ConfigError::InvalidProtocol(self.protocol.clone()));
        }
        if self.window.ui_url.is_empty() {
            return Err(ConfigError::MissingUiUrl);
        }
        if self.updater.enabled {
            let feed = self.updater.feed_base.as_str();
            if !(feed.starts_with("https://") || feed.starts_with("http://")) {
                return Err(ConfigError::InvalidFeedUrl(feed.to_string()));
            }
            if self.updater.interval.is_zero() {
                return Err(ConfigError::ZeroUpdateInterval);
            }
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid deep link scheme: {0:?}")]
    InvalidProtocol(String),

    #[error("UI entry URL is empty. Set LN_UI_URL")]
    MissingUiUrl,

    #[error("Update feed must be an http(s) URL, got {0:?}")]
    InvalidFeedUrl(String),

    #[error("Update interval must be greater than zero")]
    ZeroUpdateInterval,
}

/// Main window configuration.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Entry page loaded into the window.
    pub ui_url: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            ui_url: "file://./app/build/index.html".to_string(),
        }
    }
}

/// Auto-update configuration.
#[derive(Debug, Clone)]
pub struct UpdaterConfig {
    pub enabled: bool,
    /// Feed base URL; version and platform are appended as query parameters.
    pub feed_base: String,
    pub interval: Duration,
    /// Version reported to the feed.
    pub current_version: String,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            feed_base: "https://localhost:8082".to_string(),
            interval: Duration::from_secs(24 * 60 * 60),
            current_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.protocol, "lisk");
        assert_eq!(config.updater.interval, Duration::from_secs(86_400));
        assert_eq!(config.updater.feed_base, "https://localhost:8082");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_protocol() {
        let mut config = ShellConfig::default();
        config.protocol = "li sk".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidProtocol("li sk".into()))
        );
    }

    #[test]
    fn test_validate_rejects_bad_feed() {
        let mut config = ShellConfig::default();
        config.updater.feed_base = "ftp://feed".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFeedUrl(_))
        ));

        config.updater.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = ShellConfig::default();
        config.updater.interval = Duration::ZERO;
        assert_eq!(config.validate(), Err(ConfigError::ZeroUpdateInterval));
    }
}
