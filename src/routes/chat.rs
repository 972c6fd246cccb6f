use std::time::Duration;

use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::tokio::task;
use rocket::State;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::AppConfig;

const PROXY_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
pub struct ChatForm {
    pub message: Option<String>,
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// Canned degraded answer used whenever the main app is unreachable.
/// Chat failures never surface as 5xx to the widget.
fn fallback_response() -> Json<Value> {
    Json(json!({
        "response": "## ShieldNest Assistant 🛡️\n\n\
            I'm currently having trouble connecting to my central knowledge base. In the meantime:\n\n\
            • Visit [v1.shieldnest.org](https://v1.shieldnest.org) for the full app experience\n\
            • Learn about our enterprise-grade validator infrastructure\n\
            • Explore Shield NFT benefits\n\n\
            Please try again in a few moments!",
        "suggestions": ["Visit the app", "Tell me about staking", "What is ShieldNest?"],
        "canExpand": false
    }))
}

#[post("/chat", format = "json", data = "<form>")]
pub async fn chat_submit(
    config: &State<AppConfig>,
    form: Json<ChatForm>,
) -> Result<Json<Value>, status::Custom<Json<Value>>> {
    let message = match form.message.as_deref().map(str::trim) {
        Some(m) if !m.is_empty() => m.to_string(),
        _ => {
            return Err(status::Custom(
                Status::BadRequest,
                Json(json!({"error": "Message is required"})),
            ))
        }
    };

    let session_id = form.session_id.clone().unwrap_or_default();
    log::info!(
        "[chat] Proxying message for session {} to {}",
        session_id,
        config.main_app_url
    );

    let config = config.inner().clone();
    match task::spawn_blocking(move || proxy_chat(&config, &message, &session_id)).await {
        Ok(Ok(body)) => Ok(Json(body)),
        Ok(Err(e)) => {
            log::error!("[chat] proxy failed: {}", e);
            Ok(fallback_response())
        }
        Err(e) => {
            log::error!("[chat] proxy task panicked: {}", e);
            Ok(fallback_response())
        }
    }
}

fn proxy_chat(config: &AppConfig, message: &str, session_id: &str) -> Result<Value, String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(PROXY_TIMEOUT)
        .build()
        .map_err(|e| e.to_string())?;

    let resp = client
        .post(format!("{}/api/chat", config.main_app_url.trim_end_matches('/')))
        .json(&json!({
            "message": message,
            "sessionId": session_id,
            "project": "shieldnest-marketing",
            "expand": false,
        }))
        .send()
        .map_err(|e| e.to_string())?;

    if !resp.status().is_success() {
        return Err(format!("main app chat API returned {}", resp.status()));
    }

    resp.json::<Value>().map_err(|e| e.to_string())
}

/// CORS preflight for the embedded chat widget.
pub struct CorsPreflight;

impl<'r> rocket::response::Responder<'r, 'static> for CorsPreflight {
    fn respond_to(self, _: &'r rocket::Request<'_>) -> rocket::response::Result<'static> {
        rocket::Response::build()
            .status(Status::Ok)
            .raw_header("Access-Control-Allow-Origin", "*")
            .raw_header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .raw_header("Access-Control-Allow-Headers", "Content-Type, Accept")
            .ok()
    }
}

#[options("/chat")]
pub fn chat_preflight() -> CorsPreflight {
    CorsPreflight
}
