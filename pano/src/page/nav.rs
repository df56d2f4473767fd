//! Navigation header links and their active state.

/// The dashboard's fixed navigation entries as `(href, label)` pairs.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/search", "Search"),
    ("/watchlist", "Watchlist"),
];

/// One resolved navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Link target.
    pub href: &'static str,
    /// Visible label.
    pub label: &'static str,
    /// Whether the link matches the current path.
    pub active: bool,
}

/// Link-state rule: `/` matches only itself, any other href matches by prefix.
#[must_use]
pub fn is_active(href: &str, current_path: &str) -> bool {
    if href == "/" {
        return current_path == "/";
    }
    current_path.starts_with(href)
}

/// Resolve the navigation links for the current path.
#[must_use]
pub fn links_for(current_path: &str) -> Vec<NavLink> {
    NAV_ITEMS
        .iter()
        .map(|&(href, label)| NavLink {
            href,
            label,
            active: is_active(href, current_path),
        })
        .collect()
}
