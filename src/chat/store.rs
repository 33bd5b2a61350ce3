use super::types::*;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct ChatStore {
    messages: Arc<RwLock<Vec<ChatMessage>>>,
    loading: Arc<RwLock<bool>>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
            loading: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn add_message(&self, role: ChatRole, content: &str) {
        let message = ChatMessage {
            id: format!("msg-{}", Uuid::new_v4()),
            role,
            content: content.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        };

        self.messages.write().await.push(message);
    }

    pub async fn clear_messages(&self) {
        self.messages.write().await.clear();
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.messages.read().await.clone()
    }

    pub async fn message_count(&self) -> usize {
        self.messages.read().await.len()
    }

    pub async fn set_loading(&self, loading: bool) {
        *self.loading.write().await = loading;
    }

    pub async fn is_loading(&self) -> bool {
        *self.loading.read().await
    }
}

impl Default for ChatStore {
    fn default() -> Self {
        Self::new()
    }
}
