use super::types::ActiveView;
use std::sync::Arc;
use tokio::sync::RwLock;

// Pure view-selection state: which top-level view is showing. Mount
// behavior for the selected view (starting the status poller, etc.) is
// wired up by the application root, not here.
pub struct ViewController {
    active: Arc<RwLock<ActiveView>>,
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            active: Arc::new(RwLock::new(ActiveView::Dashboard)),
        }
    }

    pub async fn active(&self) -> ActiveView {
        *self.active.read().await
    }

    // Switches the active view and returns the one it replaced
    pub async fn set_active(&self, view: ActiveView) -> ActiveView {
        let mut active = self.active.write().await;
        let previous = *active;
        *active = view;
        previous
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}
