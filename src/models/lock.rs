use rusqlite::params;

use crate::db::DbPool;

/// Expiring lock row for externally triggered jobs. Two overlapping cron
/// firings cannot both start a generation run: the second sees a live lock
/// and backs off. A crashed run self-heals once the TTL passes.
pub struct RunLock;

impl RunLock {
    /// Try to take the named lock for `ttl_secs`. Returns false when a
    /// live lock is held by another run; expired locks are reclaimed.
    pub fn acquire(pool: &DbPool, name: &str, ttl_secs: i64) -> Result<bool, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        let changed = conn
            .execute(
                "INSERT INTO cron_locks (name, locked_until)
                 VALUES (?1, DATETIME('now', '+' || ?2 || ' seconds'))
                 ON CONFLICT(name) DO UPDATE SET locked_until = excluded.locked_until
                 WHERE cron_locks.locked_until <= DATETIME('now')",
                params![name, ttl_secs],
            )
            .map_err(|e| e.to_string())?;
        Ok(changed > 0)
    }

    pub fn release(pool: &DbPool, name: &str) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute("DELETE FROM cron_locks WHERE name = ?1", params![name])
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}
