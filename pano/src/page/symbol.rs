//! Symbol detail page: spec derivation and the widget set's lifecycle.

use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};

use pano_core::{
    DomHost, EmbedConfig, EmbedFailure, EmbedReport, ScriptHost, ScriptLoader, WidgetConfig,
    WidgetKind, WidgetSpec,
};

use crate::container::{AttachOutcome, WidgetContainer};
use crate::instance::WidgetInstance;

/// Fixed panel order of the symbol detail page: symbol info and the two
/// charts in the left column, analysis and financials in the right.
const PAGE_WIDGETS: &[WidgetKind] = &[
    WidgetKind::SymbolInfo,
    WidgetKind::CandleChart,
    WidgetKind::BaselineChart,
    WidgetKind::TechnicalAnalysis,
    WidgetKind::Financials,
];

/// Derive the ordered widget specs for a symbol page.
///
/// Pure derivation from the route symbol: same symbol, same specs. The two
/// chart widgets share the advanced-chart script URL and are distinguished
/// only by their configs. Container ids are per-slot, not per-symbol, so a
/// symbol change re-configures regions in place instead of recreating them.
#[must_use]
pub fn widget_specs(cfg: &EmbedConfig, symbol: &str) -> Vec<WidgetSpec> {
    PAGE_WIDGETS
        .iter()
        .map(|&kind| {
            WidgetSpec::new(
                format!("{}{}.js", cfg.script_base_url, kind.script_slug()),
                config_for(cfg, kind, symbol),
                kind.default_height(),
                format!("pano-{kind}"),
            )
        })
        .collect()
}

fn config_for(cfg: &EmbedConfig, kind: WidgetKind, symbol: &str) -> WidgetConfig {
    let base = WidgetConfig::new()
        .with("symbol", symbol)
        .with("colorTheme", cfg.theme.as_str())
        .with("locale", cfg.locale.clone());

    match kind {
        WidgetKind::SymbolInfo => base.with("isTransparent", true).with("width", "100%"),
        WidgetKind::CandleChart => base
            .with("interval", "D")
            .with("style", "1")
            .with("allow_symbol_change", false)
            .with("autosize", true),
        WidgetKind::BaselineChart => base
            .with("interval", "D")
            .with("style", "10")
            .with("allow_symbol_change", false)
            .with("autosize", true),
        WidgetKind::TechnicalAnalysis => base
            .with("interval", "1h")
            .with("displayMode", "single")
            .with("isTransparent", true),
        WidgetKind::Financials => base
            .with("displayMode", "regular")
            .with("isTransparent", true),
        _ => base,
    }
}

/// The symbol detail page's widget set.
///
/// Owns one [`WidgetInstance`] per panel. Mounting attaches all widgets
/// concurrently; navigation re-derives the specs for the new symbol and
/// applies them in declaration order, reusing every already-loaded script.
pub struct SymbolPage {
    symbol: String,
    cfg: EmbedConfig,
    widgets: Vec<WidgetInstance>,
}

impl std::fmt::Debug for SymbolPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolPage")
            .field("symbol", &self.symbol)
            .field("cfg", &self.cfg)
            .field("widgets", &self.widgets.len())
            .finish()
    }
}

impl SymbolPage {
    pub(crate) fn compose(
        dom: &Arc<dyn DomHost>,
        scripts: &Arc<ScriptLoader>,
        host: &Arc<dyn ScriptHost>,
        cfg: EmbedConfig,
        symbol: &str,
    ) -> Self {
        let widgets = widget_specs(&cfg, symbol)
            .into_iter()
            .map(|spec| {
                WidgetInstance::new(
                    WidgetContainer::new(
                        Arc::clone(dom),
                        Arc::clone(scripts),
                        Arc::clone(host),
                    ),
                    spec,
                )
            })
            .collect();
        Self {
            symbol: symbol.to_string(),
            cfg,
            widgets,
        }
    }

    /// The symbol this page is currently showing.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The declared specs, in page order.
    #[must_use]
    pub fn specs(&self) -> Vec<&WidgetSpec> {
        self.widgets.iter().map(WidgetInstance::spec).collect()
    }

    /// Attach every widget concurrently.
    ///
    /// Failures are contained per widget and collected in the report; one
    /// widget failing never prevents its siblings from rendering.
    pub async fn mount(&self) -> EmbedReport {
        let mut tasks: FuturesUnordered<_> = self
            .widgets
            .iter()
            .map(|w| async move { (w.spec().container_id.clone(), w.mount().await) })
            .collect();

        let mut report = EmbedReport::default();
        while let Some((container_id, res)) = tasks.next().await {
            match res {
                Ok(AttachOutcome::Rendered) => report.rendered.push(container_id),
                Ok(AttachOutcome::Unchanged | AttachOutcome::Stale) => {}
                Err(error) => report.failures.push(EmbedFailure {
                    container_id,
                    error,
                }),
            }
        }
        report
    }

    /// Re-target the page at another symbol.
    ///
    /// Re-derives all specs and applies them in declaration order. Scripts
    /// stay loaded: the only changes are the configs, so no fetch happens.
    pub async fn navigate(&mut self, symbol: &str) -> EmbedReport {
        self.symbol = symbol.to_string();
        let specs = widget_specs(&self.cfg, symbol);

        let mut report = EmbedReport::default();
        for (widget, spec) in self.widgets.iter_mut().zip(specs) {
            let container_id = spec.container_id.clone();
            match widget.apply(spec).await {
                Ok(AttachOutcome::Rendered) => report.rendered.push(container_id),
                Ok(AttachOutcome::Unchanged | AttachOutcome::Stale) => {}
                Err(error) => report.failures.push(EmbedFailure {
                    container_id,
                    error,
                }),
            }
        }
        report
    }

    /// Synchronously detach every widget, e.g. on route exit.
    pub fn close(&self) {
        for widget in &self.widgets {
            widget.unmount();
        }
    }
}
