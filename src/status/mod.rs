pub mod poller;
pub mod source;
pub mod store;

pub use poller::StatusPoller;
pub use source::StatusSource;
pub use store::StatusStore;
