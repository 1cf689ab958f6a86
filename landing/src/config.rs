//! Site configuration.
//!
//! Defaults are compiled in. A deployment can override them at build time:
//!
//! ```text
//! SYNLINK_DEMO_URL=https://calendly.com/acme/30min \
//! SYNLINK_COPY_RESET_MS=1500 \
//! SYNLINK_LOG=debug trunk build --release
//! ```

use std::time::Duration;

use thiserror::Error;

/// Scheduling link opened by the "Schedule Demo" button.
pub const DEMO_URL: &str = "https://calendly.com/synlink-demo/30min";

/// How long the copy button keeps saying "Copied!".
pub const COPY_RESET: Duration = Duration::from_millis(2000);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("demo url must start with http:// or https://, got {0:?}")]
    InvalidDemoUrl(String),
    #[error("copy reset delay must be a positive number of milliseconds, got {0:?}")]
    InvalidDelay(String),
    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub demo_url: &'static str,
    pub copy_reset: Duration,
    pub log_level: log::Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            demo_url: DEMO_URL,
            copy_reset: COPY_RESET,
            log_level: log::Level::Info,
        }
    }
}

impl SiteConfig {
    /// Config baked in by the build environment.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_overrides(
            option_env!("SYNLINK_DEMO_URL"),
            option_env!("SYNLINK_COPY_RESET_MS"),
            option_env!("SYNLINK_LOG"),
        )
    }

    /// Applies optional overrides on top of [`SiteConfig::default`].
    pub fn from_overrides(
        demo_url: Option<&'static str>,
        copy_reset_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = demo_url.map(str::trim).filter(|u| !u.is_empty()) {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::InvalidDemoUrl(url.to_string()));
            }
            config.demo_url = url;
        }

        if let Some(raw) = copy_reset_ms.map(str::trim).filter(|r| !r.is_empty()) {
            let millis = raw
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| ConfigError::InvalidDelay(raw.to_string()))?;
            config.copy_reset = Duration::from_millis(millis);
        }

        if let Some(raw) = log_level.map(str::trim).filter(|l| !l.is_empty()) {
            config.log_level = raw
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_published_page() {
        let config = SiteConfig::default();
        assert_eq!(config.demo_url, "https://calendly.com/synlink-demo/30min");
        assert_eq!(config.copy_reset, Duration::from_millis(2000));
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn no_overrides_is_default() {
        assert_eq!(
            SiteConfig::from_overrides(None, None, None),
            Ok(SiteConfig::default())
        );
        assert_eq!(
            SiteConfig::from_overrides(Some("  "), Some(""), Some(" ")),
            Ok(SiteConfig::default())
        );
    }

    #[test]
    fn applies_valid_overrides() {
        let config = SiteConfig::from_overrides(
            Some("https://calendly.com/acme/15min"),
            Some("1500"),
            Some("debug"),
        )
        .unwrap();
        assert_eq!(config.demo_url, "https://calendly.com/acme/15min");
        assert_eq!(config.copy_reset, Duration::from_millis(1500));
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn rejects_non_http_demo_url() {
        assert_eq!(
            SiteConfig::from_overrides(Some("javascript:alert(1)"), None, None),
            Err(ConfigError::InvalidDemoUrl("javascript:alert(1)".into()))
        );
    }

    #[test]
    fn rejects_zero_or_garbage_delay() {
        assert_eq!(
            SiteConfig::from_overrides(None, Some("0"), None),
            Err(ConfigError::InvalidDelay("0".into()))
        );
        assert_eq!(
            SiteConfig::from_overrides(None, Some("2s"), None),
            Err(ConfigError::InvalidDelay("2s".into()))
        );
    }

    #[test]
    fn rejects_unknown_level() {
        let err = SiteConfig::from_overrides(None, None, Some("loud")).unwrap_err();
        assert_eq!(err.to_string(), "unknown log level \"loud\"");
    }
}
