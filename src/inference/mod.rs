pub mod service;
pub mod store;
pub mod types;

pub use service::{InferenceService, DEFAULT_MODEL};
pub use store::InferenceStore;
pub use types::PendingUpload;
