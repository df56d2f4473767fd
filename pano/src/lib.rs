//! Pano coordinates the embedding lifecycle of script-delivered dashboard widgets.
//!
//! Overview
//! - Gates the symbol page behind the session provider; unauthenticated
//!   requests are redirected before any widget is constructed.
//! - Derives the fixed, ordered widget set for a symbol page from the route
//!   parameter alone.
//! - Loads each remote widget script at most once per page session through
//!   the shared `pano_core::ScriptLoader`, no matter how many instances
//!   reference it.
//! - Contains embed failures per widget: a failed region stays empty at its
//!   declared height and never blocks its siblings.
//!
//! Key behaviors and trade-offs
//! - Script failure policy: `FailurePolicy::Sticky` (default) caches a
//!   failed load for the rest of the session; `RetryOnEnsure` trades extra
//!   fetches for self-healing after transient failures.
//! - Symbol navigation re-configures widgets in place: same script, same
//!   region, new config. Only a changed script URL pays for a full
//!   detach/attach cycle.
//! - Teardown is synchronous and idempotent, so a detach during a pending
//!   load cannot leave configuration applied to a removed mount point.
//!
//! Examples
//! Building a coordinator against real hosts:
//! ```rust,ignore
//! use std::sync::Arc;
//! use pano::Pano;
//!
//! let pano = Pano::builder()
//!     .with_dom_host(dom)
//!     .with_script_host(scripts)
//!     .with_session_provider(auth)
//!     .with_stock_search(finnhub)
//!     .build()?;
//! ```
//!
//! Opening and mounting a symbol page:
//! ```rust,ignore
//! use pano::PageView;
//!
//! match pano.open_symbol_page(&headers, "AAPL").await? {
//!     PageView::SignInRedirect => redirect_to_sign_in(),
//!     PageView::Page(shell) => {
//!         let report = shell.widgets.mount().await;
//!         for failure in &report.failures {
//!             // the region stays empty at its declared height
//!         }
//!     }
//! }
//! ```
//!
//! Navigating between symbols without refetching scripts:
//! ```rust,ignore
//! let mut page = pano.symbol_page("AAPL")?;
//! page.mount().await;
//! page.navigate("MSFT").await; // reuses every loaded script
//! page.close();
//! ```
#![warn(missing_docs)]

mod container;
pub(crate) mod core;
mod instance;
mod page;

pub use container::{AttachOutcome, WidgetContainer};
pub use core::{Pano, PanoBuilder};
pub use instance::WidgetInstance;
pub use page::nav::{NAV_ITEMS, NavLink, is_active, links_for};
pub use page::shell::{Header, PageShell, PageView};
pub use page::symbol::{SymbolPage, widget_specs};

// Re-export core types for convenience
pub use pano_core::{
    // Foundational types
    DEFAULT_SCRIPT_BASE_URL,
    DomHost,
    EmbedConfig,
    EmbedFailure,
    EmbedReport,
    FailurePolicy,
    PanoError,
    RequestHeaders,
    ScriptHost,
    ScriptLoader,
    ScriptState,
    Session,
    SessionProvider,
    StockListing,
    StockSearchProvider,
    Theme,
    User,
    WidgetConfig,
    WidgetConstructor,
    WidgetKind,
    WidgetSpec,
};
