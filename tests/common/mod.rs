use axum::{
    http::{header, StatusCode},
    routing::post,
    Json, Router,
};
use move_relay::config::Config;
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

/// Stand-in for the chat completions API.
pub struct StubUpstream {
    pub base_url: String,
    calls: Arc<AtomicUsize>,
    last_payload: Arc<Mutex<Option<Value>>>,
}

impl StubUpstream {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_payload(&self) -> Option<Value> {
        self.last_payload.lock().unwrap().clone()
    }
}

/// Chat completions body whose first choice says `text`.
pub fn chat_reply(text: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": text },
            "finish_reason": "stop"
        }]
    })
}

/// Serve a fixed status and JSON body on an ephemeral port.
pub async fn spawn_upstream(status: StatusCode, body: Value) -> StubUpstream {
    spawn_upstream_raw(status, "application/json", body.to_string()).await
}

/// Serve a fixed status and body verbatim, whatever it contains.
pub async fn spawn_upstream_raw(
    status: StatusCode,
    content_type: &'static str,
    body: String,
) -> StubUpstream {
    let calls = Arc::new(AtomicUsize::new(0));
    let last_payload = Arc::new(Mutex::new(None));

    let handler = {
        let calls = calls.clone();
        let last_payload = last_payload.clone();
        move |Json(payload): Json<Value>| {
            let calls = calls.clone();
            let last_payload = last_payload.clone();
            let body = body.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                *last_payload.lock().unwrap() = Some(payload);
                (status, [(header::CONTENT_TYPE, content_type)], body)
            }
        }
    };

    let app = Router::new().route("/v1/chat/completions", post(handler));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubUpstream {
        base_url: format!("http://{addr}/v1"),
        calls,
        last_payload,
    }
}

/// Relay config pointed at the given upstream.
pub fn config_for(upstream: &StubUpstream) -> Config {
    let mut config = Config::from_vars(|_| None);
    config.api_key = Some("test-key".to_string());
    config.base_url = upstream.base_url.clone();
    config.upstream_timeout_secs = 5;
    config
}

/// Run the relay on an ephemeral port and return its base URL.
pub async fn spawn_relay(config: Config) -> String {
    let app = move_relay::app::router(&config).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Build a reqwest client for tests.
pub fn client() -> Client {
    Client::new()
}

/// Generate a unique suffix based on timestamp to avoid collisions.
pub fn unique_suffix() -> String {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}", ts % 1_000_000_000)
}
