//! The session-gated page shell: header, navigation, and the widget page.

use pano_core::{StockListing, User};

use crate::page::nav::{NavLink, links_for};
use crate::page::symbol::SymbolPage;

/// The navigation header shown above every protected page.
#[derive(Debug)]
pub struct Header {
    /// Navigation links with their active state resolved for the current path.
    pub links: Vec<NavLink>,
    /// Initial stock listings backing the header's search command.
    pub stocks: Vec<StockListing>,
}

impl Header {
    pub(crate) fn build(current_path: &str, stocks: Vec<StockListing>) -> Self {
        Self {
            links: links_for(current_path),
            stocks,
        }
    }
}

/// A fully composed, authenticated symbol page.
///
/// Constructed only after the session gate passed; holds the identity the
/// header renders and the (not yet mounted) widget set.
pub struct PageShell {
    /// The authenticated user.
    pub user: User,
    /// Header with navigation and initial search results.
    pub header: Header,
    /// The page's widget set; call [`SymbolPage::mount`] to embed it.
    pub widgets: SymbolPage,
}

/// Outcome of opening a protected page.
///
/// The redirect branch is decided before any widget or header work happens,
/// so an unauthenticated request never constructs (let alone mounts) a
/// widget.
pub enum PageView {
    /// No session: the caller must redirect to sign-in.
    SignInRedirect,
    /// Authenticated: the composed page shell.
    Page(Box<PageShell>),
}
