use serde::{Deserialize, Serialize};

/// Training status reported by the backend; replaced wholesale on every poll
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusSnapshot {
    pub is_training: bool,
    pub last_run: Option<String>,
    pub current_epoch: u32,
    pub total_epochs: u32,
    #[serde(default)]
    pub logs: Vec<String>,
}

impl Default for StatusSnapshot {
    fn default() -> Self {
        Self {
            is_training: false,
            last_run: None,
            current_epoch: 0,
            total_epochs: 0,
            logs: Vec::new(),
        }
    }
}

/// Classification returned by the predict endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InferenceResult {
    pub model: String,
    pub class_id: u32,
    pub class_name: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainResponse {
    pub message: String,
}
