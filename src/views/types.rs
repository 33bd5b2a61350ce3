use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    Dashboard,
    Prediction,
    Training,
    Chat,
}

impl ActiveView {
    // Unknown identifiers fall back to the dashboard rather than erroring
    pub fn parse(id: &str) -> Self {
        match id {
            "prediction" => ActiveView::Prediction,
            "training" => ActiveView::Training,
            "chat" => ActiveView::Chat,
            _ => ActiveView::Dashboard,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            ActiveView::Dashboard => "dashboard",
            ActiveView::Prediction => "prediction",
            ActiveView::Training => "training",
            ActiveView::Chat => "chat",
        }
    }
}
