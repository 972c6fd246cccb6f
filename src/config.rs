use std::env;

/// Runtime configuration, read once at startup from the environment and
/// shared via Rocket managed state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bearer key for the text and image generation APIs. Absent means the
    /// text pipeline fails fast and images fall back to placeholders.
    pub grok_api_key: Option<String>,
    pub grok_base_url: String,
    /// Shared secret for the scheduler-triggered generation endpoint.
    /// Absent means that endpoint rejects every request.
    pub cron_secret_token: Option<String>,
    /// Main app the chat widget proxies to.
    pub main_app_url: String,
    pub db_path: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            grok_api_key: non_empty(env::var("GROK_API_KEY")),
            grok_base_url: non_empty(env::var("GROK_BASE_URL"))
                .unwrap_or_else(|| "https://api.x.ai/v1".to_string()),
            cron_secret_token: non_empty(env::var("CRON_SECRET_TOKEN")),
            main_app_url: non_empty(env::var("MAIN_APP_URL"))
                .unwrap_or_else(|| "https://v1.shieldnest.org".to_string()),
            db_path: non_empty(env::var("SHIELDNEST_DB"))
                .unwrap_or_else(|| "website/db/shieldnest.db".to_string()),
        }
    }
}

fn non_empty(var: Result<String, env::VarError>) -> Option<String> {
    var.ok().filter(|v| !v.trim().is_empty())
}
