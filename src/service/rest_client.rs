use std::sync::Arc;

use bytes::Bytes;
use http_body_util::BodyExt;
use hyper::{Method, Request, StatusCode};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use tracing::debug;

use crate::misc::join_base;
use crate::service::ApiError;

pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

#[derive(Clone)]
pub struct RestClient {
    base_url: String,
    client: Arc<Client<HttpsConnector<HttpConnector>, String>>,
}

impl RestClient {
    pub fn create(base_url: String) -> RestClient {
        RestClient {
            base_url,
            client: Arc::new(Client::builder(TokioExecutor::new()).build(HttpsConnector::new())),
        }
    }

    /// Sends a bodiless request to `path` and reads the whole response.
    pub async fn send(&self, method: Method, path: &str) -> Result<RawResponse, ApiError> {
        let uri = join_base(&self.base_url, path);
        let request = Request::builder()
            .uri(&uri)
            .method(method.clone())
            .header(hyper::header::ACCEPT, "application/json")
            .body(String::new())?;
        let response = self.client.request(request).await?;
        let status = response.status();
        let body = response.into_body().collect().await?.to_bytes();
        debug!("{method} {uri} -> {status} ({} bytes)", body.len());
        Ok(RawResponse { status, body })
    }
}
