use rusqlite::params;

use crate::db::DbPool;

/// Outcome of a signup attempt. Duplicates are detected by the store's
/// primary key, not a read-then-write, so two racing requests cannot both
/// succeed.
#[derive(Debug, PartialEq)]
pub enum SignupOutcome {
    Created,
    Duplicate,
}

pub struct BetaSignup;

impl BetaSignup {
    /// Record a signup. Emails are stored lowercased, so the duplicate
    /// check is case-insensitive.
    pub fn create(pool: &DbPool, email: &str) -> Result<SignupOutcome, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        let inserted = conn
            .execute(
                "INSERT OR IGNORE INTO beta_signups (email) VALUES (?1)",
                params![email.to_lowercase()],
            )
            .map_err(|e| e.to_string())?;

        Ok(if inserted > 0 {
            SignupOutcome::Created
        } else {
            SignupOutcome::Duplicate
        })
    }

    pub fn count(pool: &DbPool) -> i64 {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return 0,
        };
        conn.query_row("SELECT COUNT(*) FROM beta_signups", [], |row| row.get(0))
            .unwrap_or(0)
    }
}
