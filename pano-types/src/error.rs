use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the pano workspace.
///
/// Covers script load failures, widget initialization failures, host-tagged
/// collaborator errors, and argument validation errors.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PanoError {
    /// A remote widget script could not be fetched or executed.
    #[error("script load failed for {url}: {msg}")]
    ScriptLoad {
        /// Script URL that failed to load.
        url: String,
        /// Human-readable failure message.
        msg: String,
    },

    /// A script loaded but its widget could not be initialized (constructor
    /// absent or the constructor itself errored).
    #[error("widget init failed in {container_id}: {msg}")]
    WidgetInit {
        /// Mount region the widget was being rendered into.
        container_id: String,
        /// Human-readable failure message.
        msg: String,
    },

    /// An external host (session, search, script host) returned an error.
    #[error("{host} failed: {msg}")]
    Host {
        /// Host name that failed.
        host: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl PanoError {
    /// Helper: build a `ScriptLoad` error for a script URL.
    pub fn script_load(url: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::ScriptLoad {
            url: url.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `WidgetInit` error for a mount region.
    pub fn widget_init(container_id: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::WidgetInit {
            container_id: container_id.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Host` error with the host name and message.
    pub fn host(host: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Host {
            host: host.into(),
            msg: msg.into(),
        }
    }

    /// Returns true if this failure is contained to a single widget region.
    ///
    /// Widget-scoped failures leave the region empty at its declared height
    /// and must not prevent sibling widgets from loading. Everything else is
    /// page-scoped.
    #[must_use]
    pub const fn is_widget_scoped(&self) -> bool {
        matches!(self, Self::ScriptLoad { .. } | Self::WidgetInit { .. })
    }
}
