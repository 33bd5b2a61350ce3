use super::store::InferenceStore;
use crate::backend::MlApiClient;
use std::sync::Arc;

pub const DEFAULT_MODEL: &str = "CustomCNN";

pub struct InferenceService {
    client: Arc<MlApiClient>,
    store: Arc<InferenceStore>,
}

impl InferenceService {
    pub fn new(client: Arc<MlApiClient>, store: Arc<InferenceStore>) -> Self {
        Self { client, store }
    }

    pub fn store(&self) -> Arc<InferenceStore> {
        self.store.clone()
    }

    // Uploads the selected file and stores the classification. A failed
    // call leaves the result pane empty rather than showing an error state,
    // and the loading flag ends false either way.
    pub async fn run_inference(&self) -> Result<(), String> {
        let upload = self
            .store
            .pending_file()
            .await
            .ok_or_else(|| "No file selected".to_string())?;
        if self.store.is_loading().await {
            return Err("An inference request is already in flight".to_string());
        }

        self.store.clear_result().await;
        self.store.set_loading(true).await;

        match self
            .client
            .predict(DEFAULT_MODEL, &upload.file_name, upload.bytes)
            .await
        {
            Ok(result) => {
                println!(
                    "[InferenceService] {} classified as {} ({:.2}%)",
                    upload.file_name,
                    result.class_name,
                    result.confidence * 100.0
                );
                self.store.set_result(result).await;
            }
            Err(e) => eprintln!("[InferenceService] Inference failed: {}", e),
        }

        self.store.set_loading(false).await;
        Ok(())
    }
}
