//! Deterministic in-memory hosts for CI-safe tests and examples.
//!
//! - [`MockDom`]: mount-region registry standing in for the document.
//! - [`MockScriptHost`]: scriptable script host whose executed scripts
//!   register widget constructors that render into the `MockDom`.
//! - [`MockSessionProvider`] / [`MockStockSearch`]: fixture-backed session
//!   and header-search providers.

use async_trait::async_trait;

use pano_core::{
    PanoError, RequestHeaders, Session, SessionProvider, StockListing, StockSearchProvider, User,
};

mod dom;
pub mod fixtures;
mod script;

pub use dom::{MockDom, Region};
pub use script::{MockScriptHost, MockScriptHostBuilder};

/// Session provider backed by a fixed, cloneable session value.
pub struct MockSessionProvider {
    session: Option<Session>,
}

impl MockSessionProvider {
    /// Provider that resolves an authenticated session for `user`.
    #[must_use]
    pub const fn signed_in(user: User) -> Self {
        Self {
            session: Some(Session { user }),
        }
    }

    /// Provider that resolves no session for any request.
    #[must_use]
    pub const fn signed_out() -> Self {
        Self { session: None }
    }
}

#[async_trait]
impl SessionProvider for MockSessionProvider {
    async fn get_session(&self, _headers: &RequestHeaders) -> Result<Option<Session>, PanoError> {
        Ok(self.session.clone())
    }
}

/// Stock search provider returning a fixed listing set.
pub struct MockStockSearch {
    listings: Vec<StockListing>,
}

impl Default for MockStockSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStockSearch {
    /// Provider backed by the static [`fixtures::stocks`] set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listings: fixtures::stocks(),
        }
    }

    /// Provider backed by an explicit listing set.
    #[must_use]
    pub const fn with_listings(listings: Vec<StockListing>) -> Self {
        Self { listings }
    }
}

#[async_trait]
impl StockSearchProvider for MockStockSearch {
    async fn search_stocks(&self) -> Result<Vec<StockListing>, PanoError> {
        Ok(self.listings.clone())
    }
}
