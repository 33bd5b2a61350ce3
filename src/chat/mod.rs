pub mod decoder;
pub mod service;
pub mod store;
pub mod types;

pub use decoder::StreamDecoder;
pub use service::{ChatService, FALLBACK_REPLY};
pub use store::ChatStore;
pub use types::*;
