use pano_core::{PanoError, WidgetSpec};

use crate::container::{AttachOutcome, WidgetContainer};

/// Binds one [`WidgetSpec`] to one [`WidgetContainer`] across the widget's
/// visible lifetime.
///
/// The instance is the unit page composition works with: mount on first
/// visibility, apply new specs as the symbol changes, unmount on removal.
/// Unmount also runs from `Drop` as a best-effort guard so a forgotten
/// instance cannot leave a region (or the external widget's timers) behind.
pub struct WidgetInstance {
    container: WidgetContainer,
    spec: WidgetSpec,
}

impl WidgetInstance {
    /// Bind `spec` to `container` without mounting yet.
    #[must_use]
    pub const fn new(container: WidgetContainer, spec: WidgetSpec) -> Self {
        Self { container, spec }
    }

    /// The spec this instance is currently bound to.
    #[must_use]
    pub const fn spec(&self) -> &WidgetSpec {
        &self.spec
    }

    /// Attach the bound spec into the container.
    ///
    /// # Errors
    /// Propagates the container's widget-scoped attach errors.
    pub async fn mount(&self) -> Result<AttachOutcome, PanoError> {
        self.container.attach(&self.spec).await
    }

    /// Apply a new spec, e.g. after a symbol change.
    ///
    /// An unchanged spec is a no-op; config equality ignores key insertion
    /// order, so a config rebuilt in a different order does not re-render.
    /// Height is fixed by the spec and never re-applied here, so the region
    /// cannot flicker on config updates.
    ///
    /// # Errors
    /// Propagates the container's widget-scoped update errors.
    pub async fn apply(&mut self, spec: WidgetSpec) -> Result<AttachOutcome, PanoError> {
        if spec == self.spec {
            return Ok(AttachOutcome::Unchanged);
        }
        self.spec = spec;
        self.container.update(&self.spec).await
    }

    /// Synchronously tear down the widget and its mount region.
    ///
    /// Idempotent; safe to call before giving up ownership. A script load
    /// still pending for this instance resolves as a stale no-op afterwards.
    pub fn unmount(&self) {
        self.container.detach();
    }
}

impl Drop for WidgetInstance {
    fn drop(&mut self) {
        self.container.detach();
    }
}
