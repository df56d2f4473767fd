//! Configuration types shared across the embedding orchestrator and hosts.

use serde::{Deserialize, Serialize};

/// Default base URL for vendor widget scripts; the per-widget script slug
/// and `.js` suffix are appended to it.
pub const DEFAULT_SCRIPT_BASE_URL: &str =
    "https://s3.tradingview.com/external-embedding/embed-widget-";

/// Policy applied when `ensure` is called for a URL whose previous load failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FailurePolicy {
    /// Keep the cached failure; every later `ensure` for the URL resolves
    /// to the same error without a new fetch.
    #[default]
    Sticky,
    /// Discard the failed entry and start a fresh fetch on the next `ensure`.
    RetryOnEnsure,
}

/// Color theme forwarded into derived widget configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Theme {
    /// Dark chrome, the dashboard default.
    #[default]
    Dark,
    /// Light chrome.
    Light,
}

impl Theme {
    /// Stable identifier used inside widget configuration objects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Global configuration for the embedding orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedConfig {
    /// Base URL that per-widget script slugs are appended to.
    pub script_base_url: String,
    /// Behavior of the script registry for URLs whose load previously failed.
    pub failure_policy: FailurePolicy,
    /// Color theme forwarded into every derived widget configuration.
    pub theme: Theme,
    /// Locale string forwarded into every derived widget configuration.
    pub locale: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            script_base_url: DEFAULT_SCRIPT_BASE_URL.to_string(),
            failure_policy: FailurePolicy::default(),
            theme: Theme::default(),
            locale: "en".to_string(),
        }
    }
}
