use super::source::StatusSource;
use super::store::StatusStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

// Refreshes the status store while the dashboard view is mounted: one fetch
// immediately on start, then one per poll interval. Ticks fire on schedule
// whether or not the previous fetch has returned, so overlapping requests
// are possible and the store keeps whichever response lands last.
pub struct StatusPoller {
    source: Arc<dyn StatusSource>,
    store: Arc<StatusStore>,
    poll_interval_ms: u64,
    handle: Arc<RwLock<Option<JoinHandle<()>>>>,
}

impl StatusPoller {
    pub fn new(source: Arc<dyn StatusSource>, store: Arc<StatusStore>, poll_interval_ms: u64) -> Self {
        Self {
            source,
            store,
            poll_interval_ms,
            handle: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn start(&self) -> Result<(), String> {
        let mut handle = self.handle.write().await;
        if handle.is_some() {
            return Err("Status poller already running".to_string());
        }

        let source = self.source.clone();
        let store = self.store.clone();
        let period = Duration::from_millis(self.poll_interval_ms);

        *handle = Some(tokio::spawn(async move {
            let mut ticker = interval(period);
            loop {
                ticker.tick().await;

                // Each fetch runs as its own task so a slow response never
                // delays the next tick
                let source = source.clone();
                let store = store.clone();
                tokio::spawn(async move {
                    match source.fetch_status().await {
                        Ok(snapshot) => store.apply_snapshot(snapshot).await,
                        Err(e) => eprintln!("[StatusPoller] Failed to fetch status: {}", e),
                    }
                });
            }
        }));

        Ok(())
    }

    // Fetches already in flight run to completion and may still land in the
    // store, but no further ticks fire.
    pub async fn stop(&self) {
        if let Some(handle) = self.handle.write().await.take() {
            handle.abort();
        }
    }

    pub async fn is_running(&self) -> bool {
        self.handle.read().await.is_some()
    }
}
