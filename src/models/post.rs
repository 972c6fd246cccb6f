use chrono::{NaiveDateTime, NaiveTime, Utc};
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

/// Byline on every generated post.
pub const AUTHOR: &str = "Shield Nest Team";

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub keywords: Vec<String>,
    pub reading_time: i64,
    pub published_at: NaiveDateTime,
    pub author: String,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug)]
pub struct PostForm {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub keywords: Vec<String>,
    pub reading_time: i64,
    pub published_at: NaiveDateTime,
    pub author: String,
    pub image_url: Option<String>,
}

impl BlogPost {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let keywords_json: String = row.get("keywords")?;
        Ok(BlogPost {
            id: row.get("id")?,
            title: row.get("title")?,
            slug: row.get("slug")?,
            excerpt: row.get("excerpt")?,
            content: row.get("content")?,
            keywords: serde_json::from_str(&keywords_json).unwrap_or_default(),
            reading_time: row.get("reading_time")?,
            published_at: row.get("published_at")?,
            author: row.get("author")?,
            image_url: row.get("image_url")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    pub fn find_by_id(pool: &DbPool, id: i64) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM blog_posts WHERE id = ?1",
            params![id],
            Self::from_row,
        )
        .ok()
    }

    /// Posts published within the current UTC calendar day, newest first.
    pub fn todays(pool: &DbPool) -> Vec<Self> {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return vec![],
        };

        let start = Utc::now().date_naive().and_time(NaiveTime::MIN);
        let end = start + chrono::Duration::days(1);

        let mut stmt = match conn.prepare(
            "SELECT * FROM blog_posts WHERE published_at >= ?1 AND published_at < ?2
             ORDER BY published_at DESC",
        ) {
            Ok(s) => s,
            Err(_) => return vec![],
        };

        stmt.query_map(params![start, end], Self::from_row)
            .map(|rows| rows.filter_map(|r| r.ok()).collect())
            .unwrap_or_default()
    }

    /// Newest-first window over the full history.
    pub fn paginated(pool: &DbPool, offset: i64, limit: i64) -> Vec<Self> {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return vec![],
        };

        let mut stmt = match conn.prepare(
            "SELECT * FROM blog_posts ORDER BY published_at DESC LIMIT ?1 OFFSET ?2",
        ) {
            Ok(s) => s,
            Err(_) => return vec![],
        };

        stmt.query_map(params![limit, offset], Self::from_row)
            .map(|rows| rows.filter_map(|r| r.ok()).collect())
            .unwrap_or_default()
    }

    pub fn count(pool: &DbPool) -> i64 {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return 0,
        };
        conn.query_row("SELECT COUNT(*) FROM blog_posts", [], |row| row.get(0))
            .unwrap_or(0)
    }

    /// Insert a generated post and read the stored row back.
    /// Store errors are logged and surface as `None` — callers must check.
    pub fn create(pool: &DbPool, form: &PostForm) -> Option<Self> {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(e) => {
                log::error!("[store] pool unavailable: {}", e);
                return None;
            }
        };

        let keywords = serde_json::to_string(&form.keywords).unwrap_or_else(|_| "[]".to_string());

        let result = conn.execute(
            "INSERT INTO blog_posts
             (title, slug, excerpt, content, keywords, reading_time, published_at, author, image_url)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                form.title,
                form.slug,
                form.excerpt,
                form.content,
                keywords,
                form.reading_time,
                form.published_at,
                form.author,
                form.image_url,
            ],
        );

        match result {
            Ok(_) => Self::find_by_id(pool, conn.last_insert_rowid()),
            Err(e) => {
                log::error!("[store] failed to save post \"{}\": {}", form.title, e);
                None
            }
        }
    }

    /// Rows still lacking a cover image (historical posts from before the
    /// placeholder fallback policy).
    pub fn without_image(pool: &DbPool) -> Vec<Self> {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return vec![],
        };

        let mut stmt = match conn.prepare(
            "SELECT * FROM blog_posts WHERE image_url IS NULL OR image_url = ''
             ORDER BY created_at DESC",
        ) {
            Ok(s) => s,
            Err(_) => return vec![],
        };

        stmt.query_map([], Self::from_row)
            .map(|rows| rows.filter_map(|r| r.ok()).collect())
            .unwrap_or_default()
    }

    pub fn update_image(pool: &DbPool, id: i64, image_url: &str) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "UPDATE blog_posts SET image_url = ?1, updated_at = CURRENT_TIMESTAMP WHERE id = ?2",
            params![image_url, id],
        )
        .map_err(|e| e.to_string())?;
        Ok(())
    }
}
