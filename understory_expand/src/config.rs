// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable parameters for hover expansion.
//!
//! [`ExpandConfig::default`] reproduces the built-in behavior: a one second delay, suppressed
//! while a quick drop hint is showing.
//!
//! ## Loading
//!
//! With the `config` feature, a configuration can be loaded from TOML:
//!
//! ```toml
//! delay_ms = 600
//! suppress_alerts = "DELETE_DROP_HINT | COPY_ONE_DROP_HINT"
//! ```
//!
//! ```rust,ignore
//! let config = ExpandConfig::from_toml_file("expand.toml")?;
//! ```
//!
//! Loaded configurations are validated before they are returned.

use core::time::Duration;

use crate::types::AlertKind;

/// Default hover expansion delay in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Hover expansion configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct ExpandConfig {
    /// Quiet period before a scheduled expansion fires, in milliseconds.
    pub delay_ms: u64,
    /// Alerts that cancel a due expansion when showing at fire time.
    pub suppress_alerts: AlertKind,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            suppress_alerts: AlertKind::QUICK_DROP,
        }
    }
}

/// Errors produced while loading or validating an [`ExpandConfig`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A zero delay would expand on the next poll, defeating the debounce.
    #[error("hover expand delay must be greater than zero")]
    ZeroDelay,
    /// TOML parse error.
    #[cfg(feature = "config")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// I/O error reading a file.
    #[cfg(feature = "config")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExpandConfig {
    /// The delay as a [`Duration`].
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Check that all parameters are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delay_ms == 0 {
            return Err(ConfigError::ZeroDelay);
        }
        Ok(())
    }

    /// Load and validate from a TOML string. Missing fields take their defaults.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate from a TOML file.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), delay_ms = config.delay_ms, "loaded hover expand config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_builtin_behavior() {
        let c = ExpandConfig::default();
        assert_eq!(c.delay(), crate::debounce::EXPAND_HOVER_DELAY);
        assert_eq!(c.suppress_alerts, AlertKind::QUICK_DROP);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_delay_is_rejected() {
        let c = ExpandConfig {
            delay_ms: 0,
            ..ExpandConfig::default()
        };
        assert!(matches!(c.validate(), Err(ConfigError::ZeroDelay)));
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_overrides_fields() {
        let c = ExpandConfig::from_toml_str(
            "delay_ms = 400\nsuppress_alerts = \"DELETE_DROP_HINT | CLIPBOARD\"\n",
        )
        .unwrap();
        assert_eq!(c.delay_ms, 400);
        assert_eq!(
            c.suppress_alerts,
            AlertKind::DELETE_DROP_HINT | AlertKind::CLIPBOARD
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_missing_fields_take_defaults() {
        let c = ExpandConfig::from_toml_str("delay_ms = 250\n").unwrap();
        assert_eq!(c.delay_ms, 250);
        assert_eq!(c.suppress_alerts, AlertKind::QUICK_DROP);
        assert_eq!(
            ExpandConfig::from_toml_str("").unwrap(),
            ExpandConfig::default()
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_zero_delay_and_garbage_are_errors() {
        assert!(matches!(
            ExpandConfig::from_toml_str("delay_ms = 0\n"),
            Err(ConfigError::ZeroDelay)
        ));
        assert!(matches!(
            ExpandConfig::from_toml_str("delay = 10\n"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[cfg(feature = "config")]
    #[test]
    fn missing_file_is_io_error() {
        let err = ExpandConfig::from_toml_file("/nonexistent/understory/expand.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
