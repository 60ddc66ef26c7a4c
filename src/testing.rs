//! In-process stand-ins for the activities server.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::header::CONTENT_TYPE;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use querystring::querify;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use urlencoding::decode;

use crate::app::Confirm;
use crate::model::{Catalog, Reply, ServerMessage};
use crate::service::{ActivityApi, ApiError};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
}

impl RecordedRequest {
    pub fn param(&self, name: &str) -> Option<String> {
        querify(self.query.as_deref()?)
            .into_iter()
            .find(|(key, _)| *key == name)
            .and_then(|(_, value)| decode(value).ok())
            .map(|e| e.into_owned())
    }
}

type Route = dyn Fn(&Method, &str) -> (StatusCode, String) + Send + Sync;

/// A hyper server answering every request through `route`.
pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    accept_loop: JoinHandle<()>,
}

impl StubServer {
    pub async fn start<F>(route: F) -> StubServer
    where
        F: Fn(&Method, &str) -> (StatusCode, String) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let route: Arc<Route> = Arc::new(route);

        let recorded = requests.clone();
        let accept_loop = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let recorded = recorded.clone();
                let route = route.clone();
                tokio::spawn(async move {
                    let service = service_fn(move |req: Request<Incoming>| {
                        let recorded = recorded.clone();
                        let route = route.clone();
                        async move {
                            let uri = req.uri();
                            recorded.lock().unwrap().push(RecordedRequest {
                                method: req.method().clone(),
                                path: uri.path().to_string(),
                                query: uri.query().map(|e| e.to_string()),
                            });
                            let (status, body) = route(req.method(), uri.path());
                            let response = Response::builder()
                                .status(status)
                                .header(CONTENT_TYPE, "application/json")
                                .body(Full::new(Bytes::from(body)))
                                .unwrap();
                            Ok::<_, Infallible>(response)
                        }
                    });
                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        StubServer { addr, requests, accept_loop }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.accept_loop.abort();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Activities,
    Signup { activity: String, email: String },
    Unregister { activity: String, email: String },
}

/// Scripted `ActivityApi` that answers without any I/O.
///
/// Bodies go through the same JSON parsing as the real client, so a body
/// that is not JSON stands in for a request that failed.
pub struct FakeApi {
    calls: Mutex<Vec<Call>>,
    catalog: Mutex<(StatusCode, String)>,
    signup: Mutex<(StatusCode, String)>,
    unregister: Mutex<(StatusCode, String)>,
    catalog_delays: Mutex<VecDeque<Duration>>,
}

impl FakeApi {
    pub fn new(catalog: &str) -> Arc<FakeApi> {
        Arc::new(FakeApi {
            calls: Mutex::new(Vec::new()),
            catalog: Mutex::new((StatusCode::OK, catalog.to_string())),
            signup: Mutex::new((StatusCode::OK, r#"{"message": "Signed up!"}"#.to_string())),
            unregister: Mutex::new((StatusCode::OK, r#"{"message": "Unregistered"}"#.to_string())),
            catalog_delays: Mutex::new(VecDeque::new()),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_catalog(&self, status: StatusCode, body: &str) {
        *self.catalog.lock().unwrap() = (status, body.to_string());
    }

    pub fn set_signup(&self, status: StatusCode, body: &str) {
        *self.signup.lock().unwrap() = (status, body.to_string());
    }

    pub fn set_unregister(&self, status: StatusCode, body: &str) {
        *self.unregister.lock().unwrap() = (status, body.to_string());
    }

    /// The next list request answers after `delay`.
    pub fn delay_next_catalog(&self, delay: Duration) {
        self.catalog_delays.lock().unwrap().push_back(delay);
    }

    fn reply(&self, scripted: &Mutex<(StatusCode, String)>) -> Result<Reply, ApiError> {
        let (status, body) = scripted.lock().unwrap().clone();
        let value: Value = serde_json::from_str(&body)?;
        Ok(Reply {
            status,
            body: ServerMessage::from_value(&value),
        })
    }
}

#[async_trait]
impl ActivityApi for FakeApi {
    async fn activities(&self) -> Result<Catalog, ApiError> {
        self.calls.lock().unwrap().push(Call::Activities);
        let (status, body) = self.catalog.lock().unwrap().clone();
        let delay = self.catalog_delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<Reply, ApiError> {
        self.calls.lock().unwrap().push(Call::Signup {
            activity: activity.to_string(),
            email: email.to_string(),
        });
        self.reply(&self.signup)
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<Reply, ApiError> {
        self.calls.lock().unwrap().push(Call::Unregister {
            activity: activity.to_string(),
            email: email.to_string(),
        });
        self.reply(&self.unregister)
    }
}

/// Answers every confirmation with a fixed choice and remembers the questions.
#[derive(Clone)]
pub struct FixedAnswer {
    answer: bool,
    questions: Arc<Mutex<Vec<String>>>,
}

impl FixedAnswer {
    pub fn new(answer: bool) -> FixedAnswer {
        FixedAnswer {
            answer,
            questions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

#[async_trait]
impl Confirm for FixedAnswer {
    async fn confirm(&self, question: &str) -> bool {
        self.questions.lock().unwrap().push(question.to_string());
        self.answer
    }
}
