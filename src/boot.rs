use log::{error, info, warn};
use std::fs;
use std::path::Path;

/// Required directories that will be created if missing
const REQUIRED_DIRS: &[&str] = &["website", "website/db"];

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing directories and warns about configuration the
/// generation pipeline needs at runtime.
pub fn run() {
    info!("ShieldNest boot check starting...");

    for dir in REQUIRED_DIRS {
        let path = Path::new(dir);
        if !path.exists() {
            match fs::create_dir_all(path) {
                Ok(_) => info!("  Created directory: {}", dir),
                Err(e) => error!("  FAILED to create directory {}: {}", dir, e),
            }
        }
    }

    if is_unset("GROK_API_KEY") {
        warn!("  GROK_API_KEY is not set — post generation will fail and cover images will use placeholders");
    }
    if is_unset("CRON_SECRET_TOKEN") {
        warn!("  CRON_SECRET_TOKEN is not set — the generation endpoint will reject all requests");
    }

    info!("Boot check complete");
}

fn is_unset(key: &str) -> bool {
    std::env::var(key).map(|v| v.trim().is_empty()).unwrap_or(true)
}
