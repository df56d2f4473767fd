//! Re-export of foundational types from `pano-types`.
// Consolidated re-exports so downstream crates can depend on `pano-core` only

pub use pano_types::{PanoError, RequestHeaders, Session, StockListing, User};

pub use pano_types::{EmbedFailure, EmbedReport};

pub use pano_types::{DEFAULT_SCRIPT_BASE_URL, EmbedConfig, FailurePolicy, Theme};

pub use pano_types::{WidgetConfig, WidgetKind, WidgetSpec};
