use std::sync::Arc;
use std::time::Duration;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::tokio;
use rocket::{Orbit, Rocket};

use crate::config::AppConfig;
use crate::db::DbPool;
use crate::generator;
use crate::rate_limit::{RateLimiter, TokenBucket};

const BACKFILL_INTERVAL: Duration = Duration::from_secs(6 * 60 * 60);
const LIMITER_CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60);
const LIMITER_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

pub struct BackgroundTasks;

#[rocket::async_trait]
impl Fairing for BackgroundTasks {
    fn info(&self) -> Info {
        Info {
            name: "Background Tasks",
            kind: Kind::Liftoff,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let pool = rocket
            .state::<DbPool>()
            .expect("DbPool not found in managed state")
            .clone();
        let config = rocket
            .state::<AppConfig>()
            .expect("AppConfig not found in managed state")
            .clone();
        let bucket = rocket
            .state::<Arc<TokenBucket>>()
            .expect("TokenBucket not found in managed state")
            .clone();
        let limiter = rocket
            .state::<Arc<RateLimiter>>()
            .expect("RateLimiter not found in managed state")
            .clone();

        // Image backfill task — repairs historical posts without a cover image
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(BACKFILL_INTERVAL).await;

                let pool = pool.clone();
                let config = config.clone();
                let bucket = Arc::clone(&bucket);
                match tokio::task::spawn_blocking(move || {
                    generator::backfill_images(&pool, &config, &bucket)
                })
                .await
                {
                    Ok(count) => {
                        if count > 0 {
                            log::info!("[task] Backfilled cover images for {} posts", count);
                        }
                    }
                    Err(e) => log::error!("[task] Image backfill failed: {}", e),
                }
            }
        });

        // Signup limiter cleanup task
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(LIMITER_CLEANUP_INTERVAL).await;
                limiter.cleanup(LIMITER_MAX_AGE);
            }
        });

        log::info!("[task] Background tasks started");
    }
}
