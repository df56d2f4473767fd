use std::sync::Arc;

use async_trait::async_trait;

use pano_types::{PanoError, RequestHeaders, Session, StockListing, WidgetConfig};

/// The global constructor a vendor script registers once it has executed.
///
/// This is deliberately a narrow capability: the external entry point is a
/// loosely-typed function that accepts a mount region id and a JSON
/// configuration object, nothing more. Keeping the trait this small avoids
/// coupling the core to any one vendor's actual API shape.
pub trait WidgetConstructor: Send + Sync {
    /// Render the widget into the given mount region with the given config.
    ///
    /// # Errors
    /// Returns an error when the vendor entry point rejects the region or
    /// the configuration; the caller maps it to a widget-init failure.
    fn render(&self, container_id: &str, config: &WidgetConfig) -> Result<(), PanoError>;
}

/// Host that fetches, executes, and indexes remote widget scripts.
#[async_trait]
pub trait ScriptHost: Send + Sync {
    /// A stable identifier for error tagging and logs.
    fn name(&self) -> &'static str;

    /// Fetch the script at `url` and execute it exactly once.
    ///
    /// Executing a vendor script has the side effect of registering its
    /// global constructor; `ScriptLoader` guarantees this method is called
    /// at most once per URL per page session (once per retry under
    /// `FailurePolicy::RetryOnEnsure`).
    ///
    /// # Errors
    /// Returns an error when the fetch or the execution fails.
    async fn fetch_and_execute(&self, url: &str) -> Result<(), PanoError>;

    /// Look up the constructor registered by an already-executed script.
    ///
    /// Returns `None` when the script has not executed yet or did not
    /// register an entry point; callers treat the latter as a widget-init
    /// failure.
    fn constructor_for(&self, url: &str) -> Option<Arc<dyn WidgetConstructor>>;
}

/// Host owning the page's mount regions.
///
/// All operations are synchronous, matching the document model they stand
/// in for; `remove_region` is infallible and idempotent so teardown can run
/// unconditionally on detach.
pub trait DomHost: Send + Sync {
    /// Allocate an empty mount region with a fixed height.
    ///
    /// # Errors
    /// Returns an error when the region cannot be allocated.
    fn create_region(&self, container_id: &str, height: u32) -> Result<(), PanoError>;

    /// Remove a region's content while keeping the region allocated at its
    /// declared height.
    ///
    /// # Errors
    /// Returns an error when no such region exists.
    fn clear_region(&self, container_id: &str) -> Result<(), PanoError>;

    /// Remove the region entirely. Removing an absent region is a no-op.
    fn remove_region(&self, container_id: &str);
}

/// Provider resolving an authenticated session from request headers.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Resolve the session for a request; `None` means unauthenticated.
    ///
    /// # Errors
    /// Returns an error when the provider itself fails (as opposed to
    /// resolving no session).
    async fn get_session(&self, headers: &RequestHeaders) -> Result<Option<Session>, PanoError>;
}

/// Provider of the header's initial stock search results.
#[async_trait]
pub trait StockSearchProvider: Send + Sync {
    /// Fetch the ordered stock listings shown by the navigation header.
    ///
    /// # Errors
    /// Returns an error when the upstream search source fails.
    async fn search_stocks(&self) -> Result<Vec<StockListing>, PanoError>;
}
