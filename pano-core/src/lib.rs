//! pano-core
//!
//! Core traits and machinery shared across the pano ecosystem.
//!
//! - `host`: capability traits for the external collaborators (script host,
//!   DOM host, session provider, stock search provider).
//! - `loader`: the keyed script load registry that deduplicates concurrent
//!   loads of the same remote script.
//!
//! Async runtime (Tokio)
//! ---------------------
//! This crate assumes the Tokio ecosystem as the async runtime. The
//! `ScriptLoader` spawns the fetch/execute of each script as a detached
//! `tokio::spawn` task and fans completion out to waiters over
//! `tokio::sync::oneshot` channels, so code that loads scripts must run
//! under a Tokio 1.x runtime.
//!
#![warn(missing_docs)]

/// Capability traits for external hosts and the vendor widget entry point.
pub mod host;
/// Keyed registry deduplicating remote script loads.
pub mod loader;
pub mod types;

pub use host::{DomHost, ScriptHost, SessionProvider, StockSearchProvider, WidgetConstructor};
pub use loader::{ScriptLoader, ScriptState};
pub use types::*;
