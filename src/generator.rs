use chrono::Utc;

use crate::ai::{grok, images, prompts, PostDraft};
use crate::config::AppConfig;
use crate::content;
use crate::db::DbPool;
use crate::models::post::{BlogPost, PostForm, AUTHOR};
use crate::rate_limit::TokenBucket;

const TEXT_TOKEN_BUDGET: u32 = 2000;

/// URL slug derived from the post title. Deterministic; not guaranteed
/// unique across posts with identical titles.
pub fn generate_slug(title: &str) -> String {
    slug::slugify(title)
}

/// Run the full pipeline `count` times: pick a weighted topic, draft the
/// post with the text model, resolve a cover image, persist. A failure at
/// any step skips only that iteration. All upstream calls are paced
/// through `bucket`.
pub fn generate_and_save_posts(
    pool: &DbPool,
    config: &AppConfig,
    bucket: &TokenBucket,
    count: usize,
) -> Vec<BlogPost> {
    let mut rng = rand::thread_rng();
    let mut saved = Vec::new();

    for _ in 0..count {
        let category = content::select_weighted_category(&mut rng);
        let topic = match content::random_topic(&mut rng, category) {
            Some(t) => t,
            None => {
                log::warn!(
                    "[generator] category \"{}\" has no topics, skipping",
                    category.name
                );
                continue;
            }
        };

        log::info!("[generator] Generating blog post for topic: {}", topic);

        let context = prompts::prompt_context(
            category,
            topic,
            &content::random_value_props(&mut rng, 2),
            content::random_comparison(&mut rng),
            &content::random_keywords(&mut rng, 5),
        );

        bucket.acquire();
        let raw = match grok::complete(config, &prompts::generate_post(&context), TEXT_TOKEN_BUDGET)
        {
            Ok(text) => text,
            Err(e) => {
                log::error!("[generator] text generation failed for \"{}\": {}", topic, e);
                continue;
            }
        };

        let draft = match PostDraft::from_text(&raw) {
            Some(d) => d,
            None => {
                log::error!("[generator] failed to parse model response for \"{}\"", topic);
                continue;
            }
        };

        bucket.acquire();
        let image_url = images::generate(config, &draft.title);

        let form = PostForm {
            slug: generate_slug(&draft.title),
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            keywords: draft.keywords,
            reading_time: draft.reading_time,
            published_at: Utc::now().naive_utc(),
            author: AUTHOR.to_string(),
            image_url: Some(image_url),
        };

        match BlogPost::create(pool, &form) {
            Some(post) => {
                log::info!("[generator] Saved post: {}", post.title);
                saved.push(post);
            }
            None => log::error!("[generator] failed to save post \"{}\"", form.title),
        }
    }

    saved
}

/// Maintenance pass for historical posts saved without a cover image:
/// resolve one through the normal fallback chain and rewrite the row.
pub fn backfill_images(pool: &DbPool, config: &AppConfig, bucket: &TokenBucket) -> usize {
    let missing = BlogPost::without_image(pool);
    if missing.is_empty() {
        return 0;
    }

    log::info!("[generator] Backfilling images for {} posts", missing.len());
    let mut updated = 0;

    for post in missing {
        bucket.acquire();
        let url = images::generate(config, &post.title);
        match BlogPost::update_image(pool, post.id, &url) {
            Ok(()) => updated += 1,
            Err(e) => {
                log::error!(
                    "[generator] failed to update image for \"{}\": {}",
                    post.title,
                    e
                );
            }
        }
    }

    updated
}
