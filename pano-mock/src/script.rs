use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Semaphore;

use pano_core::{PanoError, ScriptHost, WidgetConfig, WidgetConstructor};

use crate::dom::MockDom;

/// Scriptable script host for tests.
///
/// Each successfully executed script registers a [`WidgetConstructor`] that
/// renders `"<script-slug> <config-json>"` into the target region of the
/// shared [`MockDom`]. Behavior can be tailored per URL: artificial latency,
/// forced failures (always or for the first N fetches), scripts that
/// "forget" to register a constructor, and held URLs whose fetch blocks
/// until the test releases it.
pub struct MockScriptHost {
    dom: Arc<MockDom>,
    delay: Option<Duration>,
    failing: Mutex<HashMap<String, u64>>,
    skip_constructor: HashSet<String>,
    gates: HashMap<String, Arc<Semaphore>>,
    executed: Mutex<Vec<String>>,
    constructors: Mutex<HashMap<String, Arc<dyn WidgetConstructor>>>,
}

impl MockScriptHost {
    /// Start building a host that renders into `dom`.
    #[must_use]
    pub fn builder(dom: Arc<MockDom>) -> MockScriptHostBuilder {
        MockScriptHostBuilder {
            dom,
            delay: None,
            failing: HashMap::new(),
            skip_constructor: HashSet::new(),
            held: Vec::new(),
        }
    }

    /// URLs executed so far, in completion order.
    #[must_use]
    pub fn executions(&self) -> Vec<String> {
        self.executed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of times the script at `url` has executed.
    #[must_use]
    pub fn execution_count(&self, url: &str) -> usize {
        self.executions().iter().filter(|u| *u == url).count()
    }

    /// Release one fetch of a held URL (see
    /// [`MockScriptHostBuilder::held`]). Releasing an unheld URL is a no-op.
    pub fn release(&self, url: &str) {
        if let Some(gate) = self.gates.get(url) {
            gate.add_permits(1);
        }
    }
}

#[async_trait]
impl ScriptHost for MockScriptHost {
    fn name(&self) -> &'static str {
        "pano-mock"
    }

    async fn fetch_and_execute(&self, url: &str) -> Result<(), PanoError> {
        if let Some(gate) = self.gates.get(url) {
            let permit = gate
                .acquire()
                .await
                .map_err(|_| PanoError::host(self.name(), "gate closed"))?;
            permit.forget();
        }
        if let Some(d) = self.delay {
            tokio::time::sleep(d).await;
        }

        {
            let mut failing = self.failing.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(remaining) = failing.get_mut(url) {
                if *remaining > 0 {
                    if *remaining != u64::MAX {
                        *remaining -= 1;
                    }
                    return Err(PanoError::host(self.name(), format!("fetch refused: {url}")));
                }
            }
        }

        self.executed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());

        if !self.skip_constructor.contains(url) {
            let ctor = Arc::new(MockWidget {
                dom: Arc::clone(&self.dom),
                slug: script_slug(url),
            });
            self.constructors
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(url.to_string(), ctor);
        }
        Ok(())
    }

    fn constructor_for(&self, url: &str) -> Option<Arc<dyn WidgetConstructor>> {
        self.constructors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(url)
            .cloned()
    }
}

/// Builder for [`MockScriptHost`].
pub struct MockScriptHostBuilder {
    dom: Arc<MockDom>,
    delay: Option<Duration>,
    failing: HashMap<String, u64>,
    skip_constructor: HashSet<String>,
    held: Vec<String>,
}

impl MockScriptHostBuilder {
    /// Add artificial latency to every fetch.
    #[must_use]
    pub const fn delay(mut self, d: Duration) -> Self {
        self.delay = Some(d);
        self
    }

    /// Make every fetch of `url` fail.
    #[must_use]
    pub fn fails(mut self, url: impl Into<String>) -> Self {
        self.failing.insert(url.into(), u64::MAX);
        self
    }

    /// Make the first `n` fetches of `url` fail, then succeed.
    #[must_use]
    pub fn fails_times(mut self, url: impl Into<String>, n: u64) -> Self {
        self.failing.insert(url.into(), n);
        self
    }

    /// Make the script at `url` execute without registering a constructor.
    #[must_use]
    pub fn without_constructor(mut self, url: impl Into<String>) -> Self {
        self.skip_constructor.insert(url.into());
        self
    }

    /// Hold fetches of `url` until the test calls
    /// [`MockScriptHost::release`]; each release lets one fetch through.
    #[must_use]
    pub fn held(mut self, url: impl Into<String>) -> Self {
        self.held.push(url.into());
        self
    }

    /// Build the host.
    #[must_use]
    pub fn build(self) -> Arc<MockScriptHost> {
        let gates = self
            .held
            .into_iter()
            .map(|url| (url, Arc::new(Semaphore::new(0))))
            .collect();
        Arc::new(MockScriptHost {
            dom: self.dom,
            delay: self.delay,
            failing: Mutex::new(self.failing),
            skip_constructor: self.skip_constructor,
            gates,
            executed: Mutex::new(Vec::new()),
            constructors: Mutex::new(HashMap::new()),
        })
    }
}

struct MockWidget {
    dom: Arc<MockDom>,
    slug: String,
}

impl WidgetConstructor for MockWidget {
    fn render(&self, container_id: &str, config: &WidgetConfig) -> Result<(), PanoError> {
        let config_json = serde_json::to_string(config)
            .map_err(|e| PanoError::widget_init(container_id, e.to_string()))?;
        self.dom
            .set_content(container_id, format!("{} {config_json}", self.slug))
    }
}

fn script_slug(url: &str) -> String {
    url.rsplit('/')
        .next()
        .unwrap_or(url)
        .trim_end_matches(".js")
        .to_string()
}
