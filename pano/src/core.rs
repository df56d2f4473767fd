use std::sync::Arc;

use pano_core::{
    DomHost, EmbedConfig, FailurePolicy, PanoError, RequestHeaders, ScriptHost, ScriptLoader,
    SessionProvider, StockSearchProvider, Theme,
};

use crate::container::WidgetContainer;
use crate::page::shell::{Header, PageShell, PageView};
use crate::page::symbol::SymbolPage;

/// Coordinator wiring the external hosts to page composition.
///
/// Owns the session's [`ScriptLoader`] registry explicitly: it is created
/// when the coordinator is built and cleared via [`end_session`](Self::end_session),
/// never hidden in a global.
pub struct Pano {
    dom: Arc<dyn DomHost>,
    script_host: Arc<dyn ScriptHost>,
    session: Arc<dyn SessionProvider>,
    stocks: Arc<dyn StockSearchProvider>,
    scripts: Arc<ScriptLoader>,
    cfg: EmbedConfig,
}

impl std::fmt::Debug for Pano {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pano").field("cfg", &self.cfg).finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Pano`] coordinator with custom configuration.
pub struct PanoBuilder {
    dom: Option<Arc<dyn DomHost>>,
    script_host: Option<Arc<dyn ScriptHost>>,
    session: Option<Arc<dyn SessionProvider>>,
    stocks: Option<Arc<dyn StockSearchProvider>>,
    cfg: EmbedConfig,
}

impl Default for PanoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PanoBuilder {
    /// Create a new builder with default embed configuration.
    ///
    /// All four hosts are required; [`build`](Self::build) rejects a partial
    /// wiring rather than falling back to stubs.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dom: None,
            script_host: None,
            session: None,
            stocks: None,
            cfg: EmbedConfig::default(),
        }
    }

    /// Register the host owning the page's mount regions.
    #[must_use]
    pub fn with_dom_host(mut self, dom: Arc<dyn DomHost>) -> Self {
        self.dom = Some(dom);
        self
    }

    /// Register the host that fetches and executes widget scripts.
    #[must_use]
    pub fn with_script_host(mut self, host: Arc<dyn ScriptHost>) -> Self {
        self.script_host = Some(host);
        self
    }

    /// Register the session provider gating protected pages.
    #[must_use]
    pub fn with_session_provider(mut self, session: Arc<dyn SessionProvider>) -> Self {
        self.session = Some(session);
        self
    }

    /// Register the stock search provider backing the header.
    #[must_use]
    pub fn with_stock_search(mut self, stocks: Arc<dyn StockSearchProvider>) -> Self {
        self.stocks = Some(stocks);
        self
    }

    /// Replace the whole embed configuration.
    #[must_use]
    pub fn config(mut self, cfg: EmbedConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Override the base URL widget script slugs are appended to.
    #[must_use]
    pub fn script_base_url(mut self, base: impl Into<String>) -> Self {
        self.cfg.script_base_url = base.into();
        self
    }

    /// Select what `ensure` does for a script whose previous load failed.
    #[must_use]
    pub const fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.cfg.failure_policy = policy;
        self
    }

    /// Select the color theme forwarded into widget configs.
    #[must_use]
    pub const fn theme(mut self, theme: Theme) -> Self {
        self.cfg.theme = theme;
        self
    }

    /// Select the locale forwarded into widget configs.
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.cfg.locale = locale.into();
        self
    }

    /// Build the coordinator.
    ///
    /// # Errors
    /// Returns `InvalidArg` when a host is missing or the script base URL
    /// does not parse as an absolute URL.
    pub fn build(self) -> Result<Pano, PanoError> {
        let dom = self
            .dom
            .ok_or_else(|| PanoError::InvalidArg("no DOM host registered".to_string()))?;
        let script_host = self
            .script_host
            .ok_or_else(|| PanoError::InvalidArg("no script host registered".to_string()))?;
        let session = self
            .session
            .ok_or_else(|| PanoError::InvalidArg("no session provider registered".to_string()))?;
        let stocks = self
            .stocks
            .ok_or_else(|| PanoError::InvalidArg("no stock search provider registered".to_string()))?;

        url::Url::parse(&self.cfg.script_base_url).map_err(|e| {
            PanoError::InvalidArg(format!(
                "script base URL {:?} is not a valid URL: {e}",
                self.cfg.script_base_url
            ))
        })?;

        let scripts = Arc::new(ScriptLoader::new(
            Arc::clone(&script_host),
            self.cfg.failure_policy,
        ));

        Ok(Pano {
            dom,
            script_host,
            session,
            stocks,
            scripts,
            cfg: self.cfg,
        })
    }
}

impl Pano {
    /// Start building a new coordinator.
    #[must_use]
    pub fn builder() -> PanoBuilder {
        PanoBuilder::new()
    }

    /// The active embed configuration.
    #[must_use]
    pub const fn config(&self) -> &EmbedConfig {
        &self.cfg
    }

    /// The session's script load registry.
    #[must_use]
    pub const fn scripts(&self) -> &Arc<ScriptLoader> {
        &self.scripts
    }

    /// Create a fresh, detached widget container bound to this session's
    /// script registry.
    #[must_use]
    pub fn container(&self) -> WidgetContainer {
        WidgetContainer::new(
            Arc::clone(&self.dom),
            Arc::clone(&self.scripts),
            Arc::clone(&self.script_host),
        )
    }

    /// Compose (without mounting) the widget set for a symbol page.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an empty or whitespace-containing symbol;
    /// the symbol is otherwise used verbatim in configs and container slugs.
    pub fn symbol_page(&self, symbol: &str) -> Result<SymbolPage, PanoError> {
        if symbol.is_empty() || symbol.chars().any(char::is_whitespace) {
            return Err(PanoError::InvalidArg(format!(
                "invalid symbol: {symbol:?}"
            )));
        }
        Ok(SymbolPage::compose(
            &self.dom,
            &self.scripts,
            &self.script_host,
            self.cfg.clone(),
            symbol,
        ))
    }

    /// Open the protected symbol detail page for a request.
    ///
    /// The session is resolved first: an absent session short-circuits to
    /// [`PageView::SignInRedirect`] before the header or any widget is
    /// constructed. With a session present, the header's initial stock
    /// listings are fetched and the widget set composed; mounting is left
    /// to the caller.
    ///
    /// # Errors
    /// Propagates session/search provider failures and symbol validation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "pano::core::open_symbol_page", skip(self, headers))
    )]
    pub async fn open_symbol_page(
        &self,
        headers: &RequestHeaders,
        symbol: &str,
    ) -> Result<PageView, PanoError> {
        let Some(session) = self.session.get_session(headers).await? else {
            return Ok(PageView::SignInRedirect);
        };

        let listings = self.stocks.search_stocks().await?;
        let header = Header::build(&format!("/stocks/{symbol}"), listings);
        let widgets = self.symbol_page(symbol)?;

        Ok(PageView::Page(Box::new(PageShell {
            user: session.user,
            header,
            widgets,
        })))
    }

    /// Drop every cached script entry, e.g. when the session ends.
    pub async fn end_session(&self) {
        self.scripts.clear().await;
    }
}
