//! OpenAI Chat Completions compatible client for the upstream model.

use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::Config;
use crate::error::AppError;
use crate::relay::prompt::UpstreamPrompt;

#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    url: String,
    api_key: Option<String>,
    model: String,
    temperature: Option<f32>,
}

impl ChatClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent("MoveRelay/1.0")
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: format!("{}/chat/completions", config.base_url),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    fn payload(&self, prompt: &UpstreamPrompt) -> Value {
        let mut payload = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": prompt.system },
                { "role": "user", "content": prompt.user },
            ],
            "stream": false,
        });
        if let Some(t) = self.temperature {
            payload["temperature"] = json!(t);
        }
        payload
    }

    /// Send one completion request and return the reply text. No retries.
    pub async fn complete(&self, prompt: &UpstreamPrompt) -> Result<String, AppError> {
        let mut req = self.client.post(&self.url).json(&self.payload(prompt));
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(str::to_string));

            return Err(AppError::Upstream(match detail {
                Some(msg) => format!("Upstream error: {status}: {msg}"),
                None => format!("Upstream error: {status}"),
            }));
        }

        let data: Value = resp.json().await?;
        reply_text(&data).ok_or(AppError::EmptyReply)
    }
}

/// `choices[0].message.content`, if it carries any non-blank text.
fn reply_text(data: &Value) -> Option<String> {
    data["choices"][0]["message"]["content"]
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}
