use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = Pool<SqliteConnectionManager>;

pub fn init_pool(path: &str) -> Result<DbPool, Box<dyn std::error::Error>> {
    let manager = SqliteConnectionManager::file(path);
    let pool = Pool::builder().max_size(10).build(manager)?;

    // Enable WAL mode for better concurrent read performance
    let conn = pool.get()?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

    Ok(pool)
}

pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error>> {
    let conn = pool.get()?;

    conn.execute_batch(
        "
        -- Generated blog posts. Slugs are derived from titles and are
        -- deliberately not unique: two posts with the same title share one.
        CREATE TABLE IF NOT EXISTS blog_posts (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            slug TEXT NOT NULL,
            excerpt TEXT NOT NULL DEFAULT '',
            content TEXT NOT NULL DEFAULT '',
            keywords TEXT NOT NULL DEFAULT '[]',
            reading_time INTEGER NOT NULL DEFAULT 3,
            published_at DATETIME NOT NULL,
            author TEXT NOT NULL DEFAULT 'Shield Nest Team',
            image_url TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS idx_blog_posts_published_at
            ON blog_posts(published_at DESC);

        -- Beta programme signups, keyed by lowercased email
        CREATE TABLE IF NOT EXISTS beta_signups (
            email TEXT PRIMARY KEY,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        -- Expiring locks for externally triggered jobs
        CREATE TABLE IF NOT EXISTS cron_locks (
            name TEXT PRIMARY KEY,
            locked_until DATETIME NOT NULL
        );
        ",
    )?;

    Ok(())
}
