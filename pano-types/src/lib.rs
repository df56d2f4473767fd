//! Pano-specific data transfer objects and configuration primitives for widget embedding.
#![warn(missing_docs)]

mod config;
mod error;
mod reports;
mod session;
mod widget;

pub use config::{DEFAULT_SCRIPT_BASE_URL, EmbedConfig, FailurePolicy, Theme};
pub use error::PanoError;
pub use reports::{EmbedFailure, EmbedReport};
pub use session::{RequestHeaders, Session, StockListing, User};
pub use widget::{WidgetConfig, WidgetKind, WidgetSpec};
