use std::sync::Arc;

use chrono::Utc;
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome, Request};
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::tokio::task;
use rocket::State;
use serde_json::{json, Value};

use crate::config::AppConfig;
use crate::db::DbPool;
use crate::generator;
use crate::models::lock::RunLock;
use crate::rate_limit::TokenBucket;

const GENERATION_LOCK: &str = "generate_posts";
const LOCK_TTL_SECS: i64 = 600;
const POSTS_PER_RUN: usize = 10;

/// Shared-secret bearer guard for scheduler-triggered endpoints. An
/// unconfigured token rejects every request.
pub struct CronAuth;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for CronAuth {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let expected = match request
            .rocket()
            .state::<AppConfig>()
            .and_then(|c| c.cron_secret_token.as_deref())
        {
            Some(token) => token,
            None => return Outcome::Error((Status::Unauthorized, ())),
        };

        match request.headers().get_one("Authorization") {
            Some(header) if header == format!("Bearer {}", expected) => {
                Outcome::Success(CronAuth)
            }
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

#[get("/cron/generate-posts")]
pub async fn generate_posts(
    _auth: CronAuth,
    pool: &State<DbPool>,
    config: &State<AppConfig>,
    bucket: &State<Arc<TokenBucket>>,
) -> status::Custom<Json<Value>> {
    match RunLock::acquire(pool, GENERATION_LOCK, LOCK_TTL_SECS) {
        Ok(true) => {}
        Ok(false) => {
            return status::Custom(
                Status::Conflict,
                Json(json!({"error": "A generation run is already in progress"})),
            )
        }
        Err(e) => {
            log::error!("[cron] lock error: {}", e);
            return status::Custom(
                Status::InternalServerError,
                Json(json!({"error": "Failed to acquire generation lock"})),
            );
        }
    }

    log::info!("[cron] Starting daily blog post generation...");

    let run_pool = pool.inner().clone();
    let run_config = config.inner().clone();
    let run_bucket = bucket.inner().clone();
    let posts = task::spawn_blocking(move || {
        generator::generate_and_save_posts(&run_pool, &run_config, &run_bucket, POSTS_PER_RUN)
    })
    .await
    .unwrap_or_else(|e| {
        log::error!("[cron] generation task panicked: {}", e);
        Vec::new()
    });

    if let Err(e) = RunLock::release(pool, GENERATION_LOCK) {
        log::warn!("[cron] failed to release generation lock: {}", e);
    }

    log::info!("[cron] Generated and saved {} blog posts", posts.len());

    status::Custom(
        Status::Ok,
        Json(json!({
            "success": true,
            "message": format!("Generated {} blog posts", posts.len()),
            "posts": posts
                .iter()
                .map(|p| json!({"title": p.title, "slug": p.slug}))
                .collect::<Vec<_>>(),
            "timestamp": Utc::now().to_rfc3339(),
        })),
    )
}

/// Schedulers only ever GET this path.
#[post("/cron/generate-posts")]
pub fn generate_posts_not_allowed() -> status::Custom<Json<Value>> {
    status::Custom(
        Status::MethodNotAllowed,
        Json(json!({"error": "Method not allowed"})),
    )
}
