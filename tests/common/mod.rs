#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::{from_fn_with_state, Next},
    response::Response,
    Router,
};
use jboard::config::Config;
use jboard::session::MemorySessionStore;
use jboard::JobBoardApp;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value as JsonValue};
use tokio::net::TcpListener;

#[derive(Debug, Clone, PartialEq)]
pub struct SeenRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
}

/// What the fake backend saw, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    requests: Arc<Mutex<Vec<SeenRequest>>>,
    bodies: Arc<Mutex<Vec<JsonValue>>>,
}

impl Recorder {
    pub fn requests(&self) -> Vec<SeenRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn bodies(&self) -> Vec<JsonValue> {
        self.bodies.lock().unwrap().clone()
    }

    pub fn push_body(&self, body: JsonValue) {
        self.bodies.lock().unwrap().push(body);
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

async fn record(State(recorder): State<Recorder>, req: Request, next: Next) -> Response {
    let seen = SeenRequest {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        authorization: req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };
    recorder.requests.lock().unwrap().push(seen);
    next.run(req).await
}

/// Serves `router` on an ephemeral port and returns its base URL.
pub async fn spawn(router: Router, recorder: &Recorder) -> String {
    let router = router.layer(from_fn_with_state(recorder.clone(), record));
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{}", addr)
}

pub fn app(base_url: &str) -> JobBoardApp {
    let config = Config::new(base_url).expect("config");
    JobBoardApp::new(&config, Arc::new(MemorySessionStore::new())).expect("app")
}

/// A signed token the way the backend issues them; the client only reads
/// the payload.
pub fn token(username: &str, role: &str) -> String {
    encode(
        &Header::default(),
        &json!({ "sub": username, "role": role, "exp": 4102444800u64 }),
        &EncodingKey::from_secret(b"test_secret_key"),
    )
    .expect("token")
}

pub fn job(id: u64, title: &str, level: &str, field: &str, published: &str) -> JsonValue {
    json!({
        "id": id,
        "title": title,
        "company": "Acme",
        "seniorityLevel": level,
        "field": field,
        "employmentType": "CLT",
        "workplaceType": "Remoto",
        "publishedDate": published,
        "updatedAt": null,
        "applicationDeadline": null,
        "url": format!("https://jobs.example/{}", id),
    })
}
