#![allow(dead_code)]

use std::sync::Arc;

use pano::{Pano, WidgetConfig, WidgetSpec};
use pano_mock::{
    MockDom, MockScriptHost, MockScriptHostBuilder, MockSessionProvider, MockStockSearch, fixtures,
};

/// Base URL used by every test; slugs and `.js` are appended.
pub const BASE: &str = "https://cdn.example.com/embed-widget-";

pub const AAPL: &str = "AAPL";
pub const MSFT: &str = "MSFT";

/// Full script URL for a widget slug.
pub fn url(slug: &str) -> String {
    format!("{BASE}{slug}.js")
}

/// A wired coordinator plus handles to its mock document and script host.
pub struct TestBed {
    pub dom: Arc<MockDom>,
    pub host: Arc<MockScriptHost>,
    pub pano: Pano,
}

/// Signed-in testbed with default mock hosts.
pub fn testbed() -> TestBed {
    testbed_with(|b| b)
}

/// Signed-in testbed with a customized script host.
pub fn testbed_with(
    customize: impl FnOnce(MockScriptHostBuilder) -> MockScriptHostBuilder,
) -> TestBed {
    build(customize, true)
}

/// Testbed whose session provider resolves no session.
pub fn testbed_signed_out() -> TestBed {
    build(|b| b, false)
}

fn build(
    customize: impl FnOnce(MockScriptHostBuilder) -> MockScriptHostBuilder,
    signed_in: bool,
) -> TestBed {
    let dom = MockDom::new();
    let host = customize(MockScriptHost::builder(Arc::clone(&dom))).build();
    let session = if signed_in {
        MockSessionProvider::signed_in(fixtures::user())
    } else {
        MockSessionProvider::signed_out()
    };

    let pano = Pano::builder()
        .with_dom_host(dom.clone())
        .with_script_host(host.clone())
        .with_session_provider(Arc::new(session))
        .with_stock_search(Arc::new(MockStockSearch::new()))
        .script_base_url(BASE)
        .build()
        .expect("testbed wiring is complete");

    TestBed { dom, host, pano }
}

/// Minimal spec with a symbol-only config.
pub fn spec(slug: &str, height: u32, container_id: &str, symbol: &str) -> WidgetSpec {
    WidgetSpec::new(
        url(slug),
        WidgetConfig::new().with("symbol", symbol),
        height,
        container_id,
    )
}
