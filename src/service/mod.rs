pub use activity_client::{ActivityApi, ActivityClient};
pub use api_error::ApiError;

mod activity_client;
mod api_error;
mod rest_client;
