//! Shared test doubles

use crate::actions::Action;
use crate::domain_models::Product;
use crate::notifier::Notifier;
use crate::state::AppState;
use crate::store::AppStore;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use stock_client::{ApiError, StockApi};
use stock_store::{ActionKind, Dispatcher, Middleware};

pub fn product(id: i64, name: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        product_type_id: None,
        provider_id: None,
        attributes: Map::new(),
    }
}

/// Mock API answering from a route table keyed by (method, path)
///
/// Unknown routes answer `404`.
#[derive(Default)]
pub struct MockApi {
    routes: HashMap<(String, String), Result<Value, u16>>,
    requests: Mutex<Vec<(String, String, Option<Value>)>>,
}

impl MockApi {
    pub fn respond(mut self, method: &str, path: &str, body: Value) -> Self {
        self.routes
            .insert((method.to_string(), path.to_string()), Ok(body));
        self
    }

    pub fn fail(mut self, method: &str, path: &str, status: u16) -> Self {
        self.routes
            .insert((method.to_string(), path.to_string()), Err(status));
        self
    }

    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(method, path, _)| (method.clone(), path.clone()))
            .collect()
    }

    pub fn last_body(&self) -> Option<Value> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .and_then(|(_, _, body)| body.clone())
    }

    fn answer(&self, method: &str, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        self.requests
            .lock()
            .unwrap()
            .push((method.to_string(), path.to_string(), body.cloned()));

        match self.routes.get(&(method.to_string(), path.to_string())) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(status_error(path, *status)),
            None => Err(status_error(path, 404)),
        }
    }
}

fn status_error(path: &str, status: u16) -> ApiError {
    ApiError::Status {
        url: format!("http://localhost/api/{}", path),
        status,
        message: format!("mock status {}", status),
    }
}

#[async_trait]
impl StockApi for MockApi {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.answer("GET", path, None)
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.answer("POST", path, Some(body))
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.answer("PUT", path, Some(body))
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.answer("DELETE", path, None).map(|_| ())
    }
}

#[derive(Default)]
pub struct CountingNotifier {
    count: AtomicUsize,
}

impl CountingNotifier {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Notifier for CountingNotifier {
    fn notify(&self, _error: &ApiError) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Middleware recording the kind of every action it sees
pub struct RecordingMiddleware {
    kinds: Arc<Mutex<Vec<&'static str>>>,
}

impl RecordingMiddleware {
    pub fn attach(store: &mut AppStore) -> Arc<Mutex<Vec<&'static str>>> {
        let kinds = Arc::new(Mutex::new(Vec::new()));
        store.add_middleware(RecordingMiddleware {
            kinds: Arc::clone(&kinds),
        });
        kinds
    }
}

impl Middleware<AppState, Action> for RecordingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher<Action>) -> bool {
        self.kinds.lock().unwrap().push(action.kind());
        true
    }
}

pub fn kinds_of(recorded: &Arc<Mutex<Vec<&'static str>>>) -> Vec<&'static str> {
    recorded.lock().unwrap().clone()
}
