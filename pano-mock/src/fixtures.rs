//! Static fixtures shared by tests and examples.

use pano_core::{StockListing, User};

/// Deterministic user for signed-in scenarios.
#[must_use]
pub fn user() -> User {
    User {
        id: "usr_0001".to_string(),
        name: "Ada Dashwood".to_string(),
        email: "ada@example.com".to_string(),
    }
}

/// Deterministic header-search listings, watchlist flags included.
#[must_use]
pub fn stocks() -> Vec<StockListing> {
    [
        ("AAPL", "Apple Inc", true),
        ("MSFT", "Microsoft Corporation", false),
        ("NVDA", "NVIDIA Corporation", true),
        ("TSLA", "Tesla Inc", false),
        ("GOOGL", "Alphabet Inc", false),
    ]
    .into_iter()
    .map(|(symbol, name, watchlisted)| StockListing {
        symbol: symbol.to_string(),
        name: name.to_string(),
        watchlisted,
    })
    .collect()
}
