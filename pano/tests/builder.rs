mod helpers;

use std::sync::Arc;

use pano::{Pano, PanoError};
use pano_mock::{MockDom, MockScriptHost, MockSessionProvider, MockStockSearch, fixtures};

use helpers::testbed;

#[tokio::test]
async fn build_rejects_missing_hosts() {
    let err = Pano::builder().build().unwrap_err();
    assert!(matches!(err, PanoError::InvalidArg(_)));
}

#[tokio::test]
async fn build_rejects_a_relative_script_base_url() {
    let dom = MockDom::new();
    let host = MockScriptHost::builder(Arc::clone(&dom)).build();

    let err = Pano::builder()
        .with_dom_host(dom)
        .with_script_host(host)
        .with_session_provider(Arc::new(MockSessionProvider::signed_in(fixtures::user())))
        .with_stock_search(Arc::new(MockStockSearch::new()))
        .script_base_url("embed-widget-")
        .build()
        .unwrap_err();

    assert!(matches!(err, PanoError::InvalidArg(_)));
}

#[tokio::test]
async fn symbol_validation_rejects_empty_and_whitespace() {
    let bed = testbed();
    assert!(matches!(
        bed.pano.symbol_page("").unwrap_err(),
        PanoError::InvalidArg(_)
    ));
    assert!(matches!(
        bed.pano.symbol_page("BRK B").unwrap_err(),
        PanoError::InvalidArg(_)
    ));
}
