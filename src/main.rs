#[macro_use]
extern crate rocket;

use std::sync::Arc;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Method};
use rocket::serde::json::Json;
use rocket::{Build, Rocket};
use serde_json::{json, Value};

mod boot;
mod config;
mod db;
mod generator;
mod rate_limit;
mod security;
mod tasks;

mod ai;
mod content;
mod models;
mod routes;

#[cfg(test)]
mod tests;

use config::AppConfig;
use rate_limit::{RateLimiter, TokenBucket};

/// Blog responses are CDN-cacheable: 5 minutes fresh, then
/// stale-while-revalidate for an hour.
pub struct CdnCache;

#[rocket::async_trait]
impl Fairing for CdnCache {
    fn info(&self) -> Info {
        Info { name: "CDN Cache Headers", kind: Kind::Response }
    }

    async fn on_response<'r>(&self, req: &'r rocket::Request<'_>, res: &mut rocket::Response<'r>) {
        if req.method() == Method::Get && req.uri().path().as_str() == "/api/blog" {
            res.set_header(Header::new(
                "Cache-Control",
                "public, s-maxage=300, stale-while-revalidate=3600",
            ));
        }
    }
}

#[catch(401)]
fn unauthorized() -> Json<Value> {
    Json(json!({"error": "Unauthorized"}))
}

#[catch(404)]
fn not_found() -> Json<Value> {
    Json(json!({"error": "Not found"}))
}

#[catch(500)]
fn server_error() -> Json<Value> {
    Json(json!({"error": "Internal server error"}))
}

/// Assemble the server from an initialized pool and configuration.
/// Split out of `rocket()` so tests can boot against an in-memory store.
pub fn build_rocket(pool: db::DbPool, config: AppConfig) -> Rocket<Build> {
    // One upstream call per second, matching the generation APIs' documented limits
    let bucket = Arc::new(TokenBucket::new(1.0, 1));

    rocket::build()
        .manage(pool)
        .manage(config)
        .manage(Arc::new(RateLimiter::new()))
        .manage(bucket)
        .attach(CdnCache)
        .attach(tasks::BackgroundTasks)
        .mount("/api", routes::api_routes())
        .register("/", catchers![unauthorized, not_found, server_error])
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    // Boot check — verify/create directories, warn about missing configuration
    boot::run();

    let config = AppConfig::from_env();
    let pool = db::init_pool(&config.db_path).expect("Failed to initialize database pool");
    db::run_migrations(&pool).expect("Failed to run database migrations");

    build_rocket(pool, config)
}
