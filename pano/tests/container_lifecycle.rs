mod helpers;

use std::sync::Arc;
use std::time::Duration;

use pano::{AttachOutcome, PanoError, ScriptState, WidgetInstance};

use helpers::{AAPL, MSFT, spec, testbed, testbed_with, url};

#[tokio::test]
async fn attach_renders_widget_into_region() {
    let bed = testbed();
    let container = bed.pano.container();
    let s = spec("advanced-chart", 600, "pano-candle-chart", AAPL);

    let outcome = container.attach(&s).await.unwrap();

    assert_eq!(outcome, AttachOutcome::Rendered);
    let region = bed.dom.region("pano-candle-chart").unwrap();
    assert_eq!(region.height, 600);
    let content = region.content.unwrap();
    assert!(content.contains("advanced-chart"));
    assert!(content.contains(AAPL));
}

#[tokio::test]
async fn detach_removes_region_and_is_idempotent() {
    let bed = testbed();
    let container = bed.pano.container();
    container
        .attach(&spec("symbol-info", 170, "pano-symbol-info", AAPL))
        .await
        .unwrap();
    assert_eq!(bed.dom.region_count(), 1);

    container.detach();
    assert_eq!(bed.dom.region_count(), 0);
    assert!(!container.is_attached());

    // second detach is a no-op
    container.detach();
    assert_eq!(bed.dom.region_count(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn detach_before_load_resolves_never_writes() {
    let chart = url("advanced-chart");
    let bed = testbed_with(|b| b.held(chart.clone()));
    let container = Arc::new(bed.pano.container());
    let s = spec("advanced-chart", 600, "pano-candle-chart", AAPL);

    let task = {
        let container = Arc::clone(&container);
        let s = s.clone();
        tokio::spawn(async move { container.attach(&s).await })
    };
    // let the attach allocate its region and park on the script load
    tokio::time::sleep(Duration::from_millis(20)).await;

    container.detach();
    bed.host.release(&chart);

    let outcome = task.await.unwrap().unwrap();
    assert_eq!(outcome, AttachOutcome::Stale);

    // no stale DOM write: the mount point is gone and stays gone
    assert_eq!(bed.dom.region_count(), 0);
    assert_eq!(bed.dom.content("pano-candle-chart"), None);

    // the load itself completed and stays cached for future instances
    assert_eq!(
        bed.pano.scripts().state(&chart).await,
        Some(ScriptState::Ready)
    );
}

#[tokio::test]
async fn update_with_same_script_reconfigures_without_refetch() {
    let bed = testbed();
    let container = bed.pano.container();
    container
        .attach(&spec("advanced-chart", 600, "pano-candle-chart", AAPL))
        .await
        .unwrap();

    let outcome = container
        .update(&spec("advanced-chart", 600, "pano-candle-chart", MSFT))
        .await
        .unwrap();

    assert_eq!(outcome, AttachOutcome::Rendered);
    assert_eq!(bed.host.execution_count(&url("advanced-chart")), 1);
    assert_eq!(bed.pano.scripts().fetch_count(&url("advanced-chart")).await, 1);

    let content = bed.dom.content("pano-candle-chart").unwrap();
    assert!(content.contains(MSFT));
    assert!(!content.contains(AAPL));
}

#[tokio::test]
async fn update_with_changed_script_fetches_once_and_replaces_content() {
    let bed = testbed();
    let container = bed.pano.container();
    container
        .attach(&spec("advanced-chart", 600, "pano-chart-slot", AAPL))
        .await
        .unwrap();

    let outcome = container
        .update(&spec("financials", 500, "pano-chart-slot", AAPL))
        .await
        .unwrap();

    assert_eq!(outcome, AttachOutcome::Rendered);
    assert_eq!(bed.host.execution_count(&url("advanced-chart")), 1);
    assert_eq!(bed.host.execution_count(&url("financials")), 1);

    let region = bed.dom.region("pano-chart-slot").unwrap();
    assert_eq!(region.height, 500);
    let content = region.content.unwrap();
    assert!(content.contains("financials"));
    assert!(!content.contains("advanced-chart"));
}

#[tokio::test]
async fn update_to_new_region_tears_the_old_one_down() {
    let bed = testbed();
    let container = bed.pano.container();
    container
        .attach(&spec("symbol-info", 170, "pano-slot-a", AAPL))
        .await
        .unwrap();

    container
        .update(&spec("symbol-info", 170, "pano-slot-b", AAPL))
        .await
        .unwrap();

    assert!(bed.dom.region("pano-slot-a").is_none());
    assert!(bed.dom.content("pano-slot-b").is_some());
    assert_eq!(bed.dom.region_count(), 1);
}

#[tokio::test]
async fn script_failure_leaves_region_empty_at_declared_height() {
    let chart = url("advanced-chart");
    let bed = testbed_with(|b| b.fails(chart.clone()));
    let container = bed.pano.container();

    let err = container
        .attach(&spec("advanced-chart", 600, "pano-candle-chart", AAPL))
        .await
        .unwrap_err();

    assert!(matches!(err, PanoError::ScriptLoad { .. }));
    assert!(err.is_widget_scoped());

    // layout stability: the region exists at its height, with nothing in it
    let region = bed.dom.region("pano-candle-chart").unwrap();
    assert_eq!(region.height, 600);
    assert_eq!(region.content, None);
}

#[tokio::test]
async fn missing_constructor_is_a_widget_init_failure() {
    let info = url("symbol-info");
    let bed = testbed_with(|b| b.without_constructor(info));
    let container = bed.pano.container();

    let err = container
        .attach(&spec("symbol-info", 170, "pano-symbol-info", AAPL))
        .await
        .unwrap_err();

    assert!(matches!(err, PanoError::WidgetInit { .. }));
    assert!(err.is_widget_scoped());
}

#[tokio::test]
async fn unchanged_spec_with_reordered_config_is_a_noop() {
    let bed = testbed();

    let first = pano::WidgetSpec::new(
        url("financials"),
        pano::WidgetConfig::new()
            .with("symbol", AAPL)
            .with("displayMode", "regular"),
        500,
        "pano-financials",
    );
    let mut instance = WidgetInstance::new(bed.pano.container(), first);
    instance.mount().await.unwrap();
    let before = bed.dom.content("pano-financials");

    // same keys, inserted in the opposite order
    let reordered = pano::WidgetSpec::new(
        url("financials"),
        pano::WidgetConfig::new()
            .with("displayMode", "regular")
            .with("symbol", AAPL),
        500,
        "pano-financials",
    );
    let outcome = instance.apply(reordered).await.unwrap();

    assert_eq!(outcome, AttachOutcome::Unchanged);
    assert_eq!(bed.dom.content("pano-financials"), before);
    assert_eq!(bed.host.execution_count(&url("financials")), 1);
}

#[tokio::test]
async fn dropping_an_instance_detaches_its_region() {
    let bed = testbed();
    {
        let instance = WidgetInstance::new(
            bed.pano.container(),
            spec("symbol-info", 170, "pano-symbol-info", AAPL),
        );
        instance.mount().await.unwrap();
        assert_eq!(bed.dom.region_count(), 1);
    }
    assert_eq!(bed.dom.region_count(), 0);
}
