use super::types::PendingUpload;
use crate::backend::InferenceResult;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct InferenceStore {
    pending_file: Arc<RwLock<Option<PendingUpload>>>,
    result: Arc<RwLock<Option<InferenceResult>>>,
    loading: Arc<RwLock<bool>>,
}

impl InferenceStore {
    pub fn new() -> Self {
        Self {
            pending_file: Arc::new(RwLock::new(None)),
            result: Arc::new(RwLock::new(None)),
            loading: Arc::new(RwLock::new(false)),
        }
    }

    // Picking a new file invalidates whatever the previous file classified
    // as, so the result pane is cleared here too
    pub async fn select_file(&self, file_name: &str, bytes: Vec<u8>) {
        *self.pending_file.write().await = Some(PendingUpload {
            file_name: file_name.to_string(),
            bytes,
        });
        *self.result.write().await = None;
    }

    pub async fn pending_file(&self) -> Option<PendingUpload> {
        self.pending_file.read().await.clone()
    }

    pub async fn clear_result(&self) {
        *self.result.write().await = None;
    }

    pub async fn set_result(&self, result: InferenceResult) {
        *self.result.write().await = Some(result);
    }

    pub async fn result(&self) -> Option<InferenceResult> {
        self.result.read().await.clone()
    }

    pub async fn set_loading(&self, loading: bool) {
        *self.loading.write().await = loading;
    }

    pub async fn is_loading(&self) -> bool {
        *self.loading.read().await
    }
}

impl Default for InferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_for(class_name: &str) -> InferenceResult {
        InferenceResult {
            model: "CustomCNN".to_string(),
            class_id: 0,
            class_name: class_name.to_string(),
            confidence: 0.9,
        }
    }

    #[tokio::test]
    async fn test_select_file_clears_previous_result() {
        let store = InferenceStore::new();

        store.select_file("shirt.png", vec![1, 2, 3]).await;
        store.set_result(result_for("Shirt")).await;
        assert!(store.result().await.is_some());

        store.select_file("boot.png", vec![4, 5, 6]).await;

        assert!(store.result().await.is_none());
        assert_eq!(store.pending_file().await.unwrap().file_name, "boot.png");
    }

    #[tokio::test]
    async fn test_result_lifecycle() {
        let store = InferenceStore::new();
        assert!(store.result().await.is_none());

        store.set_result(result_for("Sneaker")).await;
        assert_eq!(store.result().await.unwrap().class_name, "Sneaker");

        store.clear_result().await;
        assert!(store.result().await.is_none());
    }
}
