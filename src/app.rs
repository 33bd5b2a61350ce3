use crate::backend::MlApiClient;
use crate::chat::{ChatService, ChatStore};
use crate::config::DashboardConfig;
use crate::inference::{InferenceService, InferenceStore};
use crate::status::{StatusPoller, StatusStore};
use crate::training::TrainingService;
use crate::views::{ActiveView, ViewController};
use std::sync::Arc;

// Application root: builds every store and service once at startup and
// hands them out by reference. All session state lives here for exactly as
// long as the app does; nothing is persisted.
pub struct DashboardApp {
    config: DashboardConfig,
    chat_store: Arc<ChatStore>,
    chat_service: Arc<ChatService>,
    status_store: Arc<StatusStore>,
    status_poller: Arc<StatusPoller>,
    inference_store: Arc<InferenceStore>,
    inference_service: Arc<InferenceService>,
    training_service: Arc<TrainingService>,
    view_controller: ViewController,
}

impl DashboardApp {
    pub fn new(config: DashboardConfig) -> Self {
        let client = Arc::new(MlApiClient::new(&config.base_url));

        let chat_store = Arc::new(ChatStore::new());
        let chat_service = Arc::new(ChatService::new(&config.base_url, chat_store.clone()));

        let status_store = Arc::new(StatusStore::new());
        let status_poller = Arc::new(StatusPoller::new(
            client.clone(),
            status_store.clone(),
            config.poll_interval_ms,
        ));

        let inference_store = Arc::new(InferenceStore::new());
        let inference_service = Arc::new(InferenceService::new(
            client.clone(),
            inference_store.clone(),
        ));

        let training_service = Arc::new(TrainingService::new(client, status_store.clone()));

        Self {
            config,
            chat_store,
            chat_service,
            status_store,
            status_poller,
            inference_store,
            inference_service,
            training_service,
            view_controller: ViewController::new(),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn chat_store(&self) -> Arc<ChatStore> {
        self.chat_store.clone()
    }

    pub fn chat_service(&self) -> Arc<ChatService> {
        self.chat_service.clone()
    }

    pub fn status_store(&self) -> Arc<StatusStore> {
        self.status_store.clone()
    }

    pub fn status_poller(&self) -> Arc<StatusPoller> {
        self.status_poller.clone()
    }

    pub fn inference_store(&self) -> Arc<InferenceStore> {
        self.inference_store.clone()
    }

    pub fn inference_service(&self) -> Arc<InferenceService> {
        self.inference_service.clone()
    }

    pub fn training_service(&self) -> Arc<TrainingService> {
        self.training_service.clone()
    }

    // Mounts the initial view. The session opens on the dashboard, so this
    // is where its poll schedule first comes up.
    pub async fn start(&self) {
        if self.view_controller.active().await == ActiveView::Dashboard {
            if let Err(e) = self.status_poller.start().await {
                eprintln!("[DashboardApp] {}", e);
            }
        }
    }

    pub async fn active_view(&self) -> ActiveView {
        self.view_controller.active().await
    }

    // Switches views and runs the mount/unmount behavior of the views
    // involved: the status poller only runs while the dashboard is showing.
    pub async fn activate_view(&self, id: &str) -> ActiveView {
        let next = ActiveView::parse(id);
        let previous = self.view_controller.set_active(next).await;

        if previous == next {
            return next;
        }

        if previous == ActiveView::Dashboard {
            self.status_poller.stop().await;
        }
        if next == ActiveView::Dashboard {
            if let Err(e) = self.status_poller.start().await {
                eprintln!("[DashboardApp] {}", e);
            }
        }

        next
    }

    pub async fn shutdown(&self) {
        self.status_poller.stop().await;
    }
}
