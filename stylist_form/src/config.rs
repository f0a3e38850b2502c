//! Site configuration.
//!
//! Values are baked in at build time (`trunk build` forwards the environment to
//! rustc), so a static host can serve the site under a sub-path without a
//! server-side rewrite.

use std::time::Duration;

use crate::copy::Locale;
use crate::error::ConfigError;
use crate::submit::DEFAULT_SUBMIT_DELAY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    base_path: Option<String>,
    pub locale: Locale,
    pub submit_delay: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: None,
            locale: Locale::default(),
            submit_delay: DEFAULT_SUBMIT_DELAY,
        }
    }
}

impl SiteConfig {
    /// Reads `STYLIST_BASE_PATH`, `STYLIST_LOCALE` and `STYLIST_SUBMIT_DELAY_MS`
    /// as captured from the build environment.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("STYLIST_BASE_PATH"),
            option_env!("STYLIST_LOCALE"),
            option_env!("STYLIST_SUBMIT_DELAY_MS"),
        )
    }

    /// Builds a config from raw optional values; `None` keeps the default.
    pub fn from_values(
        base_path: Option<&str>,
        locale: Option<&str>,
        submit_delay_ms: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self {
            base_path: base_path.and_then(normalize_base_path),
            ..Self::default()
        };

        if let Some(raw) = locale.filter(|raw| !raw.trim().is_empty()) {
            config.locale = raw.parse()?;
        }

        if let Some(raw) = submit_delay_ms.filter(|raw| !raw.trim().is_empty()) {
            let millis: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidDelay(raw.to_owned()))?;
            config.submit_delay = Duration::from_millis(millis);
        }

        Ok(config)
    }

    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.base_path = normalize_base_path(base_path);
        self
    }

    /// Normalized base path (`/app`), or `None` for root-relative navigation.
    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }
}

/// `app`, `/app/`, `//app` all become `/app`; empty and `/` mean root.
pub fn normalize_base_path(raw: &str) -> Option<String> {
    let segments: Vec<&str> = raw
        .trim()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();
    if segments.is_empty() {
        None
    } else {
        Some(format!("/{}", segments.join("/")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base_path_normalization() {
        assert_eq!(normalize_base_path(""), None);
        assert_eq!(normalize_base_path("/"), None);
        assert_eq!(normalize_base_path("stylist"), Some("/stylist".into()));
        assert_eq!(normalize_base_path("/stylist/"), Some("/stylist".into()));
        assert_eq!(normalize_base_path("//mein//stylist/"), Some("/mein/stylist".into()));
    }

    #[test]
    fn base_path_is_normalized_on_set() {
        let config = SiteConfig::default().with_base_path("/mein-stylist/");
        assert_eq!(config.base_path(), Some("/mein-stylist"));
        assert_eq!(SiteConfig::default().with_base_path("/").base_path(), None);
    }

    #[test]
    fn values_override_defaults() {
        let config = SiteConfig::from_values(Some("site"), Some("en"), Some("250")).unwrap();
        assert_eq!(config.base_path(), Some("/site"));
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.submit_delay, Duration::from_millis(250));
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = SiteConfig::from_values(Some(""), Some("  "), None).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn bad_values_are_reported() {
        assert_eq!(
            SiteConfig::from_values(None, None, Some("soon")),
            Err(ConfigError::InvalidDelay("soon".into()))
        );
        assert_eq!(
            SiteConfig::from_values(None, Some("klingon"), None),
            Err(ConfigError::UnknownLocale("klingon".into()))
        );
    }
}
