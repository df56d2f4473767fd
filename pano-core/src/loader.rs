use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, oneshot};

use crate::host::ScriptHost;
use pano_types::{FailurePolicy, PanoError};

/// Externally observable load state of one script URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScriptState {
    /// A fetch is in flight; callers are queued as waiters.
    Pending,
    /// The script executed; later `ensure` calls are cache hits.
    Ready,
    /// The fetch or execution failed; `FailurePolicy` decides what a later
    /// `ensure` call does.
    Failed,
}

enum EntryState {
    Pending(Vec<oneshot::Sender<Result<(), PanoError>>>),
    Ready,
    Failed(String),
}

struct ScriptEntry {
    state: EntryState,
    fetches: u64,
}

/// Process-wide registry of script load state, keyed by script URL.
///
/// The registry guarantees that a given remote script is fetched and
/// executed at most once across all concurrently mounted widget instances,
/// and notifies every waiter, in registration order, when the load reaches
/// a terminal state. It is an explicit object owned by the composition
/// root: created at session start and dropped (or [`cleared`](Self::clear))
/// at session end, never a hidden singleton.
///
/// The fetch itself runs on a detached task, so a caller that loses
/// interest (a widget detached mid-load) can drop its `ensure` future
/// without stranding the other waiters for the same URL.
pub struct ScriptLoader {
    host: Arc<dyn ScriptHost>,
    policy: FailurePolicy,
    entries: Arc<Mutex<HashMap<String, ScriptEntry>>>,
}

impl ScriptLoader {
    /// Create a registry that loads scripts through `host`.
    #[must_use]
    pub fn new(host: Arc<dyn ScriptHost>, policy: FailurePolicy) -> Self {
        Self {
            host,
            policy,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Ensure the script at `url` is loaded and executed.
    ///
    /// - First request for a URL starts the fetch and registers the caller
    ///   as the first waiter.
    /// - While the fetch is pending, further callers are appended as
    ///   waiters; no second fetch is started.
    /// - A `Ready` entry resolves immediately.
    /// - A `Failed` entry resolves immediately with the cached error under
    ///   [`FailurePolicy::Sticky`], or starts a fresh fetch under
    ///   [`FailurePolicy::RetryOnEnsure`].
    ///
    /// # Errors
    /// Returns `ScriptLoad` when the fetch or the script's execution fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "pano::loader::ensure", skip(self))
    )]
    pub async fn ensure(&self, url: &str) -> Result<(), PanoError> {
        let rx = {
            let mut entries = self.entries.lock().await;
            match entries.get_mut(url) {
                None => {
                    let (tx, rx) = oneshot::channel();
                    entries.insert(
                        url.to_string(),
                        ScriptEntry {
                            state: EntryState::Pending(vec![tx]),
                            fetches: 1,
                        },
                    );
                    self.spawn_fetch(url.to_string());
                    rx
                }
                Some(entry) => match &mut entry.state {
                    EntryState::Pending(waiters) => {
                        let (tx, rx) = oneshot::channel();
                        waiters.push(tx);
                        rx
                    }
                    EntryState::Ready => return Ok(()),
                    EntryState::Failed(msg) => match self.policy {
                        FailurePolicy::Sticky => {
                            return Err(PanoError::script_load(url, msg.clone()));
                        }
                        FailurePolicy::RetryOnEnsure => {
                            let (tx, rx) = oneshot::channel();
                            entry.state = EntryState::Pending(vec![tx]);
                            entry.fetches += 1;
                            self.spawn_fetch(url.to_string());
                            rx
                        }
                        _ => {
                            return Err(PanoError::script_load(url, msg.clone()));
                        }
                    },
                },
            }
        };

        rx.await.unwrap_or_else(|_| {
            Err(PanoError::script_load(
                url,
                "load task dropped before completion",
            ))
        })
    }

    /// Snapshot of the load state for `url`, if the URL has ever been requested.
    pub async fn state(&self, url: &str) -> Option<ScriptState> {
        let entries = self.entries.lock().await;
        entries.get(url).map(|e| match e.state {
            EntryState::Pending(_) => ScriptState::Pending,
            EntryState::Ready => ScriptState::Ready,
            EntryState::Failed(_) => ScriptState::Failed,
        })
    }

    /// Number of fetches started for `url` (0 if never requested).
    ///
    /// Stays at 1 for any number of concurrent or repeated `ensure` calls
    /// unless a failed entry is retried.
    pub async fn fetch_count(&self, url: &str) -> u64 {
        let entries = self.entries.lock().await;
        entries.get(url).map_or(0, |e| e.fetches)
    }

    /// Drop every cached entry, e.g. at session end.
    ///
    /// Fetches still in flight complete against the cleared registry and
    /// are discarded; their waiters resolve with an error.
    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    fn spawn_fetch(&self, url: String) {
        let host = Arc::clone(&self.host);
        let entries = Arc::clone(&self.entries);
        tokio::spawn(async move {
            let res = host.fetch_and_execute(&url).await;
            let mut entries = entries.lock().await;
            let Some(entry) = entries.get_mut(&url) else {
                // registry cleared while the fetch was in flight
                return;
            };
            let EntryState::Pending(waiters) = &mut entry.state else {
                return;
            };
            let waiters = std::mem::take(waiters);
            match res {
                Ok(()) => {
                    entry.state = EntryState::Ready;
                    for tx in waiters {
                        let _ = tx.send(Ok(()));
                    }
                }
                Err(e) => {
                    let msg = e.to_string();
                    entry.state = EntryState::Failed(msg.clone());
                    for tx in waiters {
                        let _ = tx.send(Err(PanoError::script_load(&url, msg.clone())));
                    }
                }
            }
        });
    }
}
