use crate::backend::MlApiClient;
use crate::status::StatusStore;
use std::sync::Arc;

pub struct TrainingService {
    client: Arc<MlApiClient>,
    status_store: Arc<StatusStore>,
}

impl TrainingService {
    pub fn new(client: Arc<MlApiClient>, status_store: Arc<StatusStore>) -> Self {
        Self {
            client,
            status_store,
        }
    }

    // Kicks off a training job on the backend. The reply is informational
    // only (including when a job is already running), so failures are
    // logged and otherwise ignored. A status fetch follows right away so
    // the view reflects the new job without waiting for the next poll tick.
    pub async fn start_training(&self, smoke_test: bool) {
        match self.client.start_training(smoke_test).await {
            Ok(response) => {
                println!("[TrainingService] {}", response.message);
            }
            Err(e) => eprintln!("[TrainingService] Start training failed: {}", e),
        }

        match self.client.get_status().await {
            Ok(snapshot) => self.status_store.apply_snapshot(snapshot).await,
            Err(e) => eprintln!("[TrainingService] Failed to refresh status: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_start_training_refreshes_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/train"))
            .and(query_param("smoke_test", "true"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "message": "Training started in background" })),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "is_training": true,
                "last_run": null,
                "current_epoch": 0,
                "total_epochs": 1,
                "logs": []
            })))
            .mount(&mock_server)
            .await;

        let store = Arc::new(StatusStore::new());
        let service = TrainingService::new(Arc::new(MlApiClient::new(&mock_server.uri())), store.clone());

        service.start_training(true).await;

        let snapshot = store.snapshot().await;
        assert!(snapshot.is_training);
        assert_eq!(snapshot.total_epochs, 1);
    }

    #[tokio::test]
    async fn test_failed_start_leaves_snapshot_untouched() {
        // Nothing listening: both the train call and the follow-up status
        // fetch fail, and the store keeps its previous value
        let store = Arc::new(StatusStore::new());
        let service =
            TrainingService::new(Arc::new(MlApiClient::new("http://127.0.0.1:59999")), store.clone());

        store
            .apply_snapshot(crate::backend::StatusSnapshot {
                is_training: false,
                last_run: Some("Success".to_string()),
                current_epoch: 0,
                total_epochs: 0,
                logs: Vec::new(),
            })
            .await;

        service.start_training(false).await;

        assert_eq!(store.snapshot().await.last_run.as_deref(), Some("Success"));
    }
}
