pub mod api_client;
pub mod api_error;

pub use api_client::ApiClient;
pub use api_error::ApiError;
