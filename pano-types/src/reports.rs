//! Report envelopes produced by page composition.

use serde::{Deserialize, Serialize};

use crate::error::PanoError;

/// One widget that failed to embed, identified by its mount region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFailure {
    /// Mount region of the failed widget.
    pub container_id: String,
    /// The contained, widget-scoped failure.
    pub error: PanoError,
}

/// Summary of mounting (or re-configuring) a page's widgets.
///
/// Failures are contained per widget: a populated `failures` list never
/// implies that the widgets in `rendered` were affected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EmbedReport {
    /// Mount regions that rendered successfully, in completion order.
    pub rendered: Vec<String>,
    /// Widgets that failed, with their contained errors.
    pub failures: Vec<EmbedFailure>,
}

impl EmbedReport {
    /// True when every widget rendered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
