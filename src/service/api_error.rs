use hyper::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    Request(#[from] http::Error),
    #[error("request failed: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),
    #[error("reading response failed: {0}")]
    Body(#[from] hyper::Error),
    #[error("response is not valid json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("server responded with {0}")]
    Status(StatusCode),
}
