#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use moip_core::{HttpClient, HttpError, HttpRequest, HttpResponse, Moip};

pub const TOKEN: &str = "TOKEN";
pub const KEY: &str = "KEY";
/// `Basic base64("TOKEN:KEY")`
pub const BASIC_AUTH: &str = "Basic VE9LRU46S0VZ";
pub const APP_ID: &str = "APP-Q8LV9GZD8C4K";
pub const APP_SECRET: &str = "2b9c4f0ea2d84b6c9d1e7c3a5f8b0d11";

/// Transport double: records every request and replays scripted results.
/// Once the script runs out, the last scripted result is repeated.
#[derive(Debug)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    last: Mutex<Result<HttpResponse, HttpError>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new(first: Result<HttpResponse, HttpError>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(VecDeque::new()),
            last: Mutex::new(first),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn status(status: u16, body: &str) -> Arc<Self> {
        Self::new(Ok(HttpResponse::new(status, body)))
    }

    pub fn ok(body: &str) -> Arc<Self> {
        Self::status(200, body)
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Self::new(Err(HttpError::new(message)))
    }

    /// Serve `first` for the next call, then continue with the existing script.
    pub fn push_front(&self, first: Result<HttpResponse, HttpError>) {
        self.script
            .lock()
            .expect("script should not be poisoned")
            .push_front(first);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request log should not be poisoned")
            .clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests()
            .pop()
            .expect("at least one request should have been sent")
    }
}

impl HttpClient for ScriptedTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request log should not be poisoned")
            .push(request);
        let next = self
            .script
            .lock()
            .expect("script should not be poisoned")
            .pop_front();
        let result = match next {
            Some(result) => result,
            None => self.last.lock().expect("script should not be poisoned").clone(),
        };
        Box::pin(async move { result })
    }
}

pub fn sandbox_client(transport: Arc<ScriptedTransport>) -> Moip {
    Moip::builder(TOKEN, KEY)
        .app_id(APP_ID)
        .app_secret(APP_SECRET)
        .http_client(transport)
        .build()
        .expect("test credentials are valid")
}

pub fn production_client(transport: Arc<ScriptedTransport>) -> Moip {
    Moip::builder(TOKEN, KEY)
        .production(true)
        .http_client(transport)
        .build()
        .expect("test credentials are valid")
}

pub fn json_body(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_str(request.body.as_deref().unwrap_or_default())
        .expect("request body should be JSON")
}
