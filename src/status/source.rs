use crate::backend::{MlApiClient, StatusSnapshot};
use async_trait::async_trait;

/// Where the poller gets its snapshots from
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_status(&self) -> Result<StatusSnapshot, String>;
}

#[async_trait]
impl StatusSource for MlApiClient {
    async fn fetch_status(&self) -> Result<StatusSnapshot, String> {
        self.get_status().await.map_err(|e| e.to_string())
    }
}
