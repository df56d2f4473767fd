use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use pano_core::{DomHost, PanoError};

/// Snapshot of one mount region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Height the region was allocated with.
    pub height: u32,
    /// Rendered widget content, `None` while the region is empty.
    pub content: Option<String>,
}

/// In-memory mount-region registry standing in for the document.
///
/// Regions are keyed by container id; widget constructors created by
/// [`MockScriptHost`](crate::MockScriptHost) render their content here so
/// tests can assert on what ended up in each region.
#[derive(Default)]
pub struct MockDom {
    regions: Mutex<BTreeMap<String, Region>>,
}

impl MockDom {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn regions(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, Region>> {
        self.regions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of a region, if allocated.
    #[must_use]
    pub fn region(&self, container_id: &str) -> Option<Region> {
        self.regions().get(container_id).cloned()
    }

    /// Rendered content of a region, if any.
    #[must_use]
    pub fn content(&self, container_id: &str) -> Option<String> {
        self.regions().get(container_id).and_then(|r| r.content.clone())
    }

    /// Number of currently allocated regions.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions().len()
    }

    /// Write rendered content into an existing region.
    ///
    /// # Errors
    /// Returns a widget-init error when the region does not exist; rendering
    /// into a removed mount point is exactly the stale write the embedding
    /// core must prevent.
    pub fn set_content(&self, container_id: &str, content: String) -> Result<(), PanoError> {
        let mut regions = self.regions();
        let region = regions.get_mut(container_id).ok_or_else(|| {
            PanoError::widget_init(container_id, "render into missing mount region")
        })?;
        region.content = Some(content);
        Ok(())
    }
}

impl DomHost for MockDom {
    fn create_region(&self, container_id: &str, height: u32) -> Result<(), PanoError> {
        self.regions().insert(
            container_id.to_string(),
            Region {
                height,
                content: None,
            },
        );
        Ok(())
    }

    fn clear_region(&self, container_id: &str) -> Result<(), PanoError> {
        let mut regions = self.regions();
        let region = regions
            .get_mut(container_id)
            .ok_or_else(|| PanoError::widget_init(container_id, "clear of missing mount region"))?;
        region.content = None;
        Ok(())
    }

    fn remove_region(&self, container_id: &str) {
        self.regions().remove(container_id);
    }
}
