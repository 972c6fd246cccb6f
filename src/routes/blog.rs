use chrono::Utc;
use rocket::serde::json::Json;
use rocket::State;
use serde_json::{json, Value};

use crate::db::DbPool;
use crate::models::post::BlogPost;

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 50;

#[derive(Debug, FromForm)]
pub struct BlogQuery {
    /// today | history | single
    #[field(name = "type")]
    pub kind: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub id: Option<i64>,
}

#[get("/blog?<q..>")]
pub fn blog_index(pool: &State<DbPool>, q: BlogQuery) -> Json<Value> {
    let kind = q.kind.as_deref().unwrap_or("today");
    let limit = q.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = q.offset.unwrap_or(0).max(0);

    let posts: Vec<BlogPost> = match (kind, q.id) {
        ("single", Some(id)) => BlogPost::find_by_id(pool, id).into_iter().collect(),
        ("history", _) => BlogPost::paginated(pool, offset, limit),
        ("today", _) => {
            let todays = BlogPost::todays(pool);
            // An empty day falls back to the most recent posts
            if todays.is_empty() {
                BlogPost::paginated(pool, 0, limit)
            } else {
                todays
            }
        }
        _ => BlogPost::paginated(pool, 0, limit),
    };

    let mut meta = json!({
        "total": posts.len(),
        "type": kind,
        "generatedAt": Utc::now().to_rfc3339(),
    });
    if kind == "history" {
        meta["offset"] = json!(offset);
        meta["hasMore"] = json!(posts.len() as i64 == limit);
    }

    Json(json!({ "posts": posts, "meta": meta }))
}
