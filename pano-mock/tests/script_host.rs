use std::sync::Arc;
use std::time::Duration;

use pano_core::{DomHost, PanoError, ScriptHost, WidgetConfig};
use pano_mock::{MockDom, MockScriptHost};

const CHART_JS: &str = "https://cdn.example.com/embed-widget-advanced-chart.js";

#[tokio::test]
async fn executed_script_registers_a_rendering_constructor() {
    let dom = MockDom::new();
    let host = MockScriptHost::builder(Arc::clone(&dom)).build();

    assert!(host.constructor_for(CHART_JS).is_none());
    host.fetch_and_execute(CHART_JS).await.unwrap();
    let ctor = host.constructor_for(CHART_JS).expect("constructor registered");

    dom.create_region("chart", 600).unwrap();
    ctor.render("chart", &WidgetConfig::new().with("symbol", "AAPL"))
        .unwrap();

    let content = dom.content("chart").unwrap();
    assert!(content.starts_with("embed-widget-advanced-chart"));
    assert!(content.contains("AAPL"));
}

#[tokio::test]
async fn rendering_into_a_missing_region_fails() {
    let dom = MockDom::new();
    let host = MockScriptHost::builder(Arc::clone(&dom)).build();
    host.fetch_and_execute(CHART_JS).await.unwrap();
    let ctor = host.constructor_for(CHART_JS).unwrap();

    let err = ctor
        .render("nowhere", &WidgetConfig::new())
        .unwrap_err();
    assert!(matches!(err, PanoError::WidgetInit { .. }));
}

#[tokio::test]
async fn fails_times_recovers_after_the_scripted_failures() {
    let dom = MockDom::new();
    let host = MockScriptHost::builder(dom).fails_times(CHART_JS, 2).build();

    assert!(host.fetch_and_execute(CHART_JS).await.is_err());
    assert!(host.fetch_and_execute(CHART_JS).await.is_err());
    host.fetch_and_execute(CHART_JS).await.unwrap();
    assert_eq!(host.execution_count(CHART_JS), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn held_url_blocks_until_released() {
    let dom = MockDom::new();
    let host = MockScriptHost::builder(dom).held(CHART_JS).build();

    let task = {
        let host = Arc::clone(&host);
        tokio::spawn(async move { host.fetch_and_execute(CHART_JS).await })
    };

    // still parked on the gate
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!task.is_finished());
    assert_eq!(host.execution_count(CHART_JS), 0);

    host.release(CHART_JS);
    task.await.unwrap().unwrap();
    assert_eq!(host.execution_count(CHART_JS), 1);
}
