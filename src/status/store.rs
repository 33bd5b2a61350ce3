use crate::backend::StatusSnapshot;
use std::sync::Arc;
use tokio::sync::RwLock;

// Holds the last known backend status. Snapshots are replaced wholesale in
// the order they arrive; a failed poll never clears the previous value, so
// the dashboard shows stale data over no data.
pub struct StatusStore {
    snapshot: Arc<RwLock<StatusSnapshot>>,
    metrics: Arc<RwLock<Option<serde_json::Value>>>,
}

impl StatusStore {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(StatusSnapshot::default())),
            metrics: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn apply_snapshot(&self, snapshot: StatusSnapshot) {
        *self.snapshot.write().await = snapshot;
    }

    pub async fn snapshot(&self) -> StatusSnapshot {
        self.snapshot.read().await.clone()
    }

    pub async fn set_metrics(&self, metrics: serde_json::Value) {
        *self.metrics.write().await = Some(metrics);
    }

    pub async fn metrics(&self) -> Option<serde_json::Value> {
        self.metrics.read().await.clone()
    }
}

impl Default for StatusStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_at_epoch(epoch: u32) -> StatusSnapshot {
        StatusSnapshot {
            is_training: true,
            last_run: None,
            current_epoch: epoch,
            total_epochs: 10,
            logs: vec![format!("Epoch {}/10", epoch)],
        }
    }

    #[tokio::test]
    async fn test_initial_snapshot_is_idle() {
        let store = StatusStore::new();
        let snapshot = store.snapshot().await;

        assert!(!snapshot.is_training);
        assert!(snapshot.last_run.is_none());
        assert_eq!(snapshot.current_epoch, 0);
        assert!(snapshot.logs.is_empty());
    }

    #[tokio::test]
    async fn test_apply_replaces_snapshot_wholesale() {
        let store = StatusStore::new();

        store.apply_snapshot(snapshot_at_epoch(2)).await;
        store
            .apply_snapshot(StatusSnapshot {
                is_training: false,
                last_run: Some("Success".to_string()),
                current_epoch: 0,
                total_epochs: 0,
                logs: Vec::new(),
            })
            .await;

        let snapshot = store.snapshot().await;
        assert!(!snapshot.is_training);
        assert_eq!(snapshot.last_run.as_deref(), Some("Success"));
        // The epoch-2 logs are gone: nothing is merged across snapshots
        assert!(snapshot.logs.is_empty());
    }

    #[tokio::test]
    async fn test_last_applied_snapshot_wins() {
        let store = StatusStore::new();

        store.apply_snapshot(snapshot_at_epoch(5)).await;
        store.apply_snapshot(snapshot_at_epoch(3)).await;

        // No sequence guard: whichever apply happened last is what is kept,
        // even if it carries an older epoch
        assert_eq!(store.snapshot().await.current_epoch, 3);
    }

    #[tokio::test]
    async fn test_metrics_cell() {
        let store = StatusStore::new();
        assert!(store.metrics().await.is_none());

        store
            .set_metrics(serde_json::json!({ "val_accuracy": 0.92 }))
            .await;

        let metrics = store.metrics().await.unwrap();
        assert_eq!(metrics["val_accuracy"], 0.92);
    }
}
