pub mod api_client;
pub mod error;
pub mod types;

pub use api_client::MlApiClient;
pub use error::ApiError;
pub use types::*;
