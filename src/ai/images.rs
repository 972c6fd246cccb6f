use serde_json::{json, Value};
use std::time::Duration;

use super::{prompts, AiError};
use crate::config::AppConfig;

const IMAGE_MODEL: &str = "grok-2-image-generation";
const PHOTO_SERVICE: &str = "https://picsum.photos/800/600";

const BACKGROUND_COLORS: &[&str] = &["0f172a", "1e293b", "334155", "0f1419", "1a1a2e"];
const ACCENT_COLORS: &[&str] = &["00d4aa", "8b5cf6", "3b82f6", "06b6d4", "10b981"];

/// Resolve a cover image URL for the given title. Tries the hosted image
/// model first; every failure path lands on a deterministic placeholder,
/// so callers always get a usable URL.
pub fn generate(config: &AppConfig, title: &str) -> String {
    let api_key = match config.grok_api_key.as_deref() {
        Some(key) => key,
        None => {
            log::warn!("[images] Grok API not configured, using placeholder image");
            return picsum_url(title);
        }
    };

    match request_generation(config, api_key, title) {
        Ok(url) => url,
        Err(e) => {
            log::warn!("[images] Image generation failed ({}), using placeholder", e);
            picsum_url(title)
        }
    }
}

fn request_generation(config: &AppConfig, api_key: &str, title: &str) -> Result<String, AiError> {
    let url = format!(
        "{}/images/generations",
        config.grok_base_url.trim_end_matches('/')
    );
    let body = json!({
        "prompt": prompts::cover_image(title),
        "model": IMAGE_MODEL,
        "n": 1,
        "response_format": "url",
    });

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(120))
        .build()
        .map_err(|e| AiError(format!("HTTP client error: {}", e)))?;

    let resp = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .map_err(|e| AiError(format!("image request failed: {}", e)))?;

    if !resp.status().is_success() {
        return Err(AiError(format!("image endpoint returned {}", resp.status())));
    }

    let parsed: Value = resp
        .json()
        .map_err(|e| AiError(format!("image JSON parse error: {}", e)))?;

    // The endpoint has returned both `url` and `b64_json` shapes
    if let Some(first) = parsed.get("data").and_then(|d| d.get(0)) {
        if let Some(u) = first.get("url").and_then(|v| v.as_str()) {
            return Ok(u.to_string());
        }
        if let Some(b64) = first.get("b64_json").and_then(|v| v.as_str()) {
            return Ok(format!("data:image/png;base64,{}", b64));
        }
    }
    if let Some(u) = parsed.get("url").and_then(|v| v.as_str()) {
        return Ok(u.to_string());
    }

    Err(AiError("unexpected image response shape".into()))
}

/// Deterministic seed in 0..1000 derived from the title, so the same title
/// always maps to the same photo.
pub fn title_seed(title: &str) -> u32 {
    let mut hash: i32 = 0;
    for ch in title.chars() {
        hash = hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(ch as i32);
    }
    hash.unsigned_abs() % 1000
}

/// Seeded photo-service URL, stable per title.
pub fn picsum_url(title: &str) -> String {
    format!("{}?random={}", PHOTO_SERVICE, title_seed(title))
}

/// Last-resort placeholder: background and accent colors picked by hashing
/// the title against fixed palettes, with the title (truncated to 40 chars)
/// as the caption.
pub fn placeholder_url(title: &str) -> String {
    let hash: usize = title.chars().map(|c| c as usize).sum();
    let bg = BACKGROUND_COLORS[hash % BACKGROUND_COLORS.len()];
    let accent = ACCENT_COLORS[hash % ACCENT_COLORS.len()];

    let caption: String = title.chars().take(40).collect();
    let encoded: String = url::form_urlencoded::byte_serialize(caption.as_bytes()).collect();

    format!("https://via.placeholder.com/800x600/{}/{}?text={}", bg, accent, encoded)
}
