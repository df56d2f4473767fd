//! Widget specifications and their opaque per-vendor configurations.

use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The fixed set of dashboard panels a symbol page is composed of.
///
/// Each kind carries its script slug (the two chart kinds share one script
/// and differ only in configuration), its container slug, and the region
/// height the page layout reserves for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum WidgetKind {
    /// Compact symbol header with price and day change.
    SymbolInfo,
    /// Full-size candlestick chart.
    CandleChart,
    /// Full-size baseline (area) chart.
    BaselineChart,
    /// Technical-analysis gauge panel.
    TechnicalAnalysis,
    /// Company financials table.
    Financials,
}

impl WidgetKind {
    /// Stable, kebab-case identifier used for container ids and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SymbolInfo => "symbol-info",
            Self::CandleChart => "candle-chart",
            Self::BaselineChart => "baseline-chart",
            Self::TechnicalAnalysis => "technical-analysis",
            Self::Financials => "financials",
        }
    }

    /// Script slug appended to the embed base URL.
    ///
    /// Candle and baseline charts are both served by the vendor's
    /// advanced-chart script.
    #[must_use]
    pub const fn script_slug(self) -> &'static str {
        match self {
            Self::SymbolInfo => "symbol-info",
            Self::CandleChart | Self::BaselineChart => "advanced-chart",
            Self::TechnicalAnalysis => "technical-analysis",
            Self::Financials => "financials",
        }
    }

    /// Region height in pixels reserved by the page layout.
    #[must_use]
    pub const fn default_height(self) -> u32 {
        match self {
            Self::SymbolInfo => 170,
            Self::CandleChart | Self::BaselineChart => 600,
            Self::TechnicalAnalysis => 400,
            Self::Financials => 500,
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque, JSON-serializable widget configuration.
///
/// The backing map is ordered by key, so serialization is deterministic and
/// equality ignores insertion order; two configs that differ only in the
/// order keys were added compare equal, which change detection relies on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetConfig(Map<String, Value>);

impl WidgetConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, consuming and returning the config.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of keys in the configuration.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the configuration holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for WidgetConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for WidgetConfig {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Everything needed to embed one widget instance into a page region.
///
/// A spec is an immutable value: a symbol or configuration change produces a
/// new spec rather than mutating the old one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSpec {
    /// Remote script URL the widget is delivered by.
    pub script_url: String,
    /// Vendor configuration applied to this instance.
    pub config: WidgetConfig,
    /// Region height in pixels; fixed for the lifetime of the instance.
    pub height: u32,
    /// Identifier of the mount region this instance renders into.
    pub container_id: String,
}

impl WidgetSpec {
    /// Construct a spec from its parts.
    #[must_use]
    pub fn new(
        script_url: impl Into<String>,
        config: WidgetConfig,
        height: u32,
        container_id: impl Into<String>,
    ) -> Self {
        Self {
            script_url: script_url.into(),
            config,
            height,
            container_id: container_id.into(),
        }
    }
}
