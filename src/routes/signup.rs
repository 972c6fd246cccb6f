use std::sync::Arc;
use std::time::Duration;

use regex::Regex;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::State;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db::DbPool;
use crate::models::signup::{BetaSignup, SignupOutcome};
use crate::rate_limit::RateLimiter;
use crate::security::{self, ClientIp};

const SIGNUP_MAX_ATTEMPTS: u64 = 10;
const SIGNUP_WINDOW: Duration = Duration::from_secs(15 * 60);

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub email: Option<String>,
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

#[post("/beta-signup", format = "json", data = "<form>")]
pub fn signup_submit(
    pool: &State<DbPool>,
    limiter: &State<Arc<RateLimiter>>,
    client_ip: ClientIp,
    form: Json<SignupForm>,
) -> status::Custom<Json<Value>> {
    let rate_key = format!("signup:{}", security::hash_ip(&client_ip.0));
    if !limiter.check_and_record(&rate_key, SIGNUP_MAX_ATTEMPTS, SIGNUP_WINDOW) {
        return status::Custom(
            Status::TooManyRequests,
            Json(json!({"error": "Too many signup attempts. Please try again later."})),
        );
    }

    let email = match form.email.as_deref().map(str::trim) {
        Some(e) if !e.is_empty() => e,
        _ => {
            return status::Custom(
                Status::BadRequest,
                Json(json!({"error": "Email is required"})),
            )
        }
    };

    if !is_valid_email(email) {
        return status::Custom(
            Status::BadRequest,
            Json(json!({"error": "Invalid email format"})),
        );
    }

    match BetaSignup::create(pool, email) {
        Ok(SignupOutcome::Created) => status::Custom(
            Status::Ok,
            Json(json!({
                "success": true,
                "message": "Successfully signed up for beta access!"
            })),
        ),
        Ok(SignupOutcome::Duplicate) => status::Custom(
            Status::Conflict,
            Json(json!({"error": "Email already registered"})),
        ),
        Err(e) => {
            log::error!("[signup] store error: {}", e);
            status::Custom(
                Status::InternalServerError,
                Json(json!({"error": "Internal server error"})),
            )
        }
    }
}

#[get("/beta-signup")]
pub fn signup_count(pool: &State<DbPool>) -> Json<Value> {
    Json(json!({"count": BetaSignup::count(pool)}))
}
