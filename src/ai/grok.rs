use serde_json::{json, Value};
use std::thread;
use std::time::Duration;

use super::AiError;
use crate::config::AppConfig;

const MODEL: &str = "grok-beta";
const MAX_ATTEMPTS: u32 = 3;

/// Send a chat-completion request and return the first choice's text.
/// 429 responses are retried with exponential backoff; any other non-2xx
/// fails with the upstream status. Fails fast when no API key is set.
pub fn complete(config: &AppConfig, prompt: &str, max_tokens: u32) -> Result<String, AiError> {
    let api_key = config
        .grok_api_key
        .as_deref()
        .ok_or_else(|| AiError("Grok API is not configured. Set GROK_API_KEY.".into()))?;

    let url = format!(
        "{}/chat/completions",
        config.grok_base_url.trim_end_matches('/')
    );
    let body = json!({
        "model": MODEL,
        "messages": [{"role": "user", "content": prompt}],
        "max_tokens": max_tokens,
        "temperature": 0.7,
    });

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(120))
        .build()
        .map_err(|e| AiError(format!("HTTP client error: {}", e)))?;

    let mut backoff = Duration::from_secs(2);
    for attempt in 1..=MAX_ATTEMPTS {
        let resp = client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .map_err(|e| AiError(format!("Grok request failed: {}", e)))?;

        let status = resp.status();
        if status.as_u16() == 429 && attempt < MAX_ATTEMPTS {
            log::warn!(
                "[ai] Grok rate limited (attempt {}/{}), backing off {:?}",
                attempt,
                MAX_ATTEMPTS,
                backoff
            );
            thread::sleep(backoff);
            backoff *= 2;
            continue;
        }

        if !status.is_success() {
            let text = resp.text().unwrap_or_default();
            return Err(AiError(format!("Grok returned {}: {}", status, text)));
        }

        let parsed: Value = resp
            .json()
            .map_err(|e| AiError(format!("Grok JSON parse error: {}", e)))?;

        let text = parsed
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .unwrap_or("")
            .to_string();

        return Ok(text);
    }

    Err(AiError("Grok request retries exhausted".into()))
}
