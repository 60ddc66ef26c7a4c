use async_trait::async_trait;
use hyper::Method;
use serde_json::Value;

use crate::misc::{participant_path, ACTIVITIES_PATH};
use crate::model::{Catalog, Reply, ServerMessage};
use crate::service::rest_client::{RawResponse, RestClient};
use crate::service::ApiError;

/// The three endpoints of the activities server.
#[async_trait]
pub trait ActivityApi: Send + Sync + 'static {
    /// GET /activities. Any non-2xx status is an error.
    async fn activities(&self) -> Result<Catalog, ApiError>;

    /// POST /activities/{activity}/signup?email={email}
    async fn signup(&self, activity: &str, email: &str) -> Result<Reply, ApiError>;

    /// DELETE /activities/{activity}/participants?email={email}
    async fn unregister(&self, activity: &str, email: &str) -> Result<Reply, ApiError>;
}

pub struct ActivityClient {
    rest: RestClient,
}

impl ActivityClient {
    pub fn create(base_url: String) -> ActivityClient {
        ActivityClient {
            rest: RestClient::create(base_url),
        }
    }
}

fn to_reply(response: RawResponse) -> Result<Reply, ApiError> {
    let value: Value = serde_json::from_slice(&response.body)?;
    Ok(Reply {
        status: response.status,
        body: ServerMessage::from_value(&value),
    })
}

#[async_trait]
impl ActivityApi for ActivityClient {
    async fn activities(&self) -> Result<Catalog, ApiError> {
        let response = self.rest.send(Method::GET, ACTIVITIES_PATH).await?;
        if !response.status.is_success() {
            return Err(ApiError::Status(response.status));
        }
        Ok(serde_json::from_slice(&response.body)?)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<Reply, ApiError> {
        let path = participant_path(activity, "signup", email);
        to_reply(self.rest.send(Method::POST, &path).await?)
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<Reply, ApiError> {
        let path = participant_path(activity, "participants", email);
        to_reply(self.rest.send(Method::DELETE, &path).await?)
    }
}
