use super::decoder::StreamDecoder;
use super::store::ChatStore;
use super::types::*;
use futures::StreamExt;
use reqwest::Client;
use std::sync::Arc;

// Shown as the assistant's reply whenever a send fails
pub const FALLBACK_REPLY: &str = "Sorry, there was an error processing your request.";

pub struct ChatService {
    client: Client,
    base_url: String,
    store: Arc<ChatStore>,
}

impl ChatService {
    pub fn new(base_url: &str, store: Arc<ChatStore>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
        }
    }

    pub fn store(&self) -> Arc<ChatStore> {
        self.store.clone()
    }

    // Sends one user turn and appends exactly one assistant reply. The busy
    // flag is raised before the request starts and lowered on every exit
    // path: the input control must never stay disabled after a send has
    // resolved.
    pub async fn send_message(&self, input: &str) -> Result<(), String> {
        let text = input.trim();
        if text.is_empty() {
            return Err("Cannot send an empty message".to_string());
        }
        if self.store.is_loading().await {
            return Err("A chat request is already in flight".to_string());
        }

        self.store.set_loading(true).await;
        self.store.add_message(ChatRole::User, text).await;

        let history = self.store.messages().await;
        let reply = match self.stream_completion(&history).await {
            Ok(content) => content,
            Err(e) => {
                eprintln!("[ChatService] Chat request failed: {}", e);
                FALLBACK_REPLY.to_string()
            }
        };

        self.store.add_message(ChatRole::Assistant, &reply).await;
        self.store.set_loading(false).await;
        Ok(())
    }

    // Drains the streamed response body into a single string. No message is
    // created per chunk; the caller appends the accumulated text once the
    // stream has ended.
    async fn stream_completion(&self, history: &[ChatMessage]) -> Result<String, String> {
        let url = format!("{}/api/chat", self.base_url);
        let payload = ChatRequest {
            messages: history.iter().map(OutgoingMessage::from).collect(),
        };

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("Request failed with status: {}", response.status()));
        }

        let mut stream = response.bytes_stream();
        let mut decoder = StreamDecoder::new();
        let mut accumulated = String::new();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| format!("Stream error: {}", e))?;
            accumulated.push_str(&decoder.decode(&chunk));
        }
        accumulated.push_str(&decoder.finish());

        Ok(accumulated)
    }
}
