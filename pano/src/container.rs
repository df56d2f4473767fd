use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pano_core::{DomHost, PanoError, ScriptHost, ScriptLoader, WidgetSpec};

/// Result of an attach or update that did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttachOutcome {
    /// The widget rendered into its mount region.
    Rendered,
    /// The spec was already applied; nothing was touched.
    Unchanged,
    /// The container was detached or re-targeted while the script load was
    /// pending; the resolved load was discarded without touching the DOM.
    Stale,
}

#[derive(Default)]
struct MountState {
    spec: Option<WidgetSpec>,
    attached: bool,
    epoch: u64,
}

/// Owner of one widget mount region.
///
/// A container binds a mount point in the [`DomHost`] to the shared
/// [`ScriptLoader`] and the script host's registered constructors. Every
/// attach, update, and detach bumps an internal epoch; an `attach` that
/// resumes from its script-load await with an outdated epoch is stale and
/// returns [`AttachOutcome::Stale`] without writing anything.
pub struct WidgetContainer {
    dom: Arc<dyn DomHost>,
    scripts: Arc<ScriptLoader>,
    host: Arc<dyn ScriptHost>,
    state: Mutex<MountState>,
}

impl WidgetContainer {
    /// Create a detached container.
    #[must_use]
    pub fn new(
        dom: Arc<dyn DomHost>,
        scripts: Arc<ScriptLoader>,
        host: Arc<dyn ScriptHost>,
    ) -> Self {
        Self {
            dom,
            scripts,
            host,
            state: Mutex::new(MountState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, MountState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The spec currently bound to this container, if attached.
    #[must_use]
    pub fn current_spec(&self) -> Option<WidgetSpec> {
        self.state().spec.clone()
    }

    /// Whether the container currently owns a mount region.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.state().attached
    }

    /// Allocate the mount region and embed the widget described by `spec`.
    ///
    /// The region is created at `spec.height` before the script load starts,
    /// so the layout holds its shape even when the load fails. A load
    /// failure leaves the region empty and is returned as a widget-scoped
    /// error; the caller decides whether to surface or contain it.
    ///
    /// # Errors
    /// `ScriptLoad` when the script cannot be fetched or executed;
    /// `WidgetInit` when the script registered no constructor or the
    /// constructor rejected the config.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pano::container::attach",
            skip(self, spec),
            fields(container_id = %spec.container_id, script_url = %spec.script_url),
        )
    )]
    pub async fn attach(&self, spec: &WidgetSpec) -> Result<AttachOutcome, PanoError> {
        let epoch = {
            let mut state = self.state();
            state.epoch += 1;
            state.attached = true;
            state.spec = Some(spec.clone());
            state.epoch
        };

        self.dom.create_region(&spec.container_id, spec.height)?;
        let load = self.scripts.ensure(&spec.script_url).await;

        if self.is_stale(epoch) {
            #[cfg(feature = "tracing")]
            tracing::debug!(container_id = %spec.container_id, "stale attach ignored");
            return Ok(AttachOutcome::Stale);
        }
        load?;

        self.render(spec)
    }

    /// Re-configure the mounted widget with a new spec.
    ///
    /// With an unchanged script URL and mount region, the region content is
    /// torn down and the constructor re-invoked in place; the script is not
    /// fetched again and the region keeps its height. A changed script URL
    /// (or region) behaves as a full detach followed by an attach.
    ///
    /// # Errors
    /// Same as [`attach`](Self::attach).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "pano::container::update",
            skip(self, spec),
            fields(container_id = %spec.container_id, script_url = %spec.script_url),
        )
    )]
    pub async fn update(&self, spec: &WidgetSpec) -> Result<AttachOutcome, PanoError> {
        let in_place = {
            let state = self.state();
            state.attached
                && state.spec.as_ref().is_some_and(|cur| {
                    cur.script_url == spec.script_url && cur.container_id == spec.container_id
                })
        };
        if !in_place {
            self.detach();
            return self.attach(spec).await;
        }

        let epoch = {
            let mut state = self.state();
            state.epoch += 1;
            state.spec = Some(spec.clone());
            state.epoch
        };

        self.dom.clear_region(&spec.container_id)?;
        // Cache hit for an already-loaded script; also covers an update that
        // arrives while the original load is still pending.
        let load = self.scripts.ensure(&spec.script_url).await;

        if self.is_stale(epoch) {
            #[cfg(feature = "tracing")]
            tracing::debug!(container_id = %spec.container_id, "stale update ignored");
            return Ok(AttachOutcome::Stale);
        }
        load?;

        self.render(spec)
    }

    /// Tear down the mount region and everything the widget rendered into it.
    ///
    /// Synchronous and idempotent: the second call is a no-op. Bumping the
    /// epoch here is what turns a still-pending attach into a stale no-op.
    pub fn detach(&self) {
        let spec = {
            let mut state = self.state();
            if !state.attached {
                return;
            }
            state.attached = false;
            state.epoch += 1;
            state.spec.take()
        };
        if let Some(spec) = spec {
            self.dom.remove_region(&spec.container_id);
        }
    }

    fn is_stale(&self, epoch: u64) -> bool {
        let state = self.state();
        !state.attached || state.epoch != epoch
    }

    fn render(&self, spec: &WidgetSpec) -> Result<AttachOutcome, PanoError> {
        let ctor = self.host.constructor_for(&spec.script_url).ok_or_else(|| {
            PanoError::widget_init(
                &spec.container_id,
                format!("no constructor registered by {}", spec.script_url),
            )
        })?;
        ctor.render(&spec.container_id, &spec.config)
            .map_err(|e| PanoError::widget_init(&spec.container_id, e.to_string()))?;
        Ok(AttachOutcome::Rendered)
    }
}
