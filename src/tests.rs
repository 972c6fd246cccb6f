#![cfg(test)]

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use rocket::http::{ContentType, Header, Status};
use rocket::local::blocking::Client;
use serde_json::Value;

use crate::ai::{images, parse_json_from_text, PostDraft};
use crate::config::AppConfig;
use crate::content;
use crate::db::{run_migrations, DbPool};
use crate::generator;
use crate::models::lock::RunLock;
use crate::models::post::{BlogPost, PostForm, AUTHOR};
use crate::models::signup::{BetaSignup, SignupOutcome};
use crate::rate_limit::{RateLimiter, TokenBucket};
use crate::routes::signup::is_valid_email;
use crate::security;

/// Atomic counter for unique shared-cache DB names so parallel tests don't collide.
static TEST_DB_COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

/// Create a fresh in-memory SQLite pool with all migrations applied.
/// Uses a named shared-cache in-memory DB so multiple connections see the
/// same data.
fn test_pool() -> DbPool {
    let id = TEST_DB_COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    let uri = format!("file:testdb_{}?mode=memory&cache=shared", id);
    let manager = SqliteConnectionManager::file(uri);
    let pool = Pool::builder()
        .max_size(2)
        .build(manager)
        .expect("Failed to create test pool");
    run_migrations(&pool).expect("Failed to run migrations");
    pool
}

/// Config with no API key and upstreams pointing at a closed local port,
/// so nothing in a test ever leaves the machine.
fn test_config() -> AppConfig {
    AppConfig {
        grok_api_key: None,
        grok_base_url: "http://127.0.0.1:9".to_string(),
        cron_secret_token: Some("test-cron-secret".to_string()),
        main_app_url: "http://127.0.0.1:9".to_string(),
        db_path: ":memory:".to_string(),
    }
}

fn test_client_with(config: AppConfig) -> (Client, DbPool) {
    let pool = test_pool();
    let client = Client::tracked(crate::build_rocket(pool.clone(), config))
        .expect("valid rocket instance");
    (client, pool)
}

fn test_client() -> (Client, DbPool) {
    test_client_with(test_config())
}

fn fast_bucket() -> TokenBucket {
    TokenBucket::new(1_000_000.0, 10)
}

fn sample_form(title: &str, seconds_ago: i64) -> PostForm {
    PostForm {
        title: title.to_string(),
        slug: generator::generate_slug(title),
        excerpt: "A short summary.".to_string(),
        content: "Body text long enough to count as content.".to_string(),
        keywords: vec!["Coreum blockchain".to_string(), "DeFi".to_string()],
        reading_time: 3,
        published_at: Utc::now().naive_utc() - chrono::Duration::seconds(seconds_ago),
        author: AUTHOR.to_string(),
        image_url: Some("https://picsum.photos/800/600?random=1".to_string()),
    }
}

// ═══════════════════════════════════════════════════════════
// Slugs
// ═══════════════════════════════════════════════════════════

#[test]
fn slug_from_title() {
    assert_eq!(
        generator::generate_slug("Coreum Staking: 5 Tips!"),
        "coreum-staking-5-tips"
    );
}

#[test]
fn slug_is_deterministic() {
    let a = generator::generate_slug("IBC protocol: The internet of blockchains explained");
    let b = generator::generate_slug("IBC protocol: The internet of blockchains explained");
    assert_eq!(a, b);
}

#[test]
fn slug_shape() {
    let s = generator::generate_slug("  --Weird__Title with   SPACES & symbols!?  ");
    assert!(!s.is_empty());
    assert!(!s.starts_with('-') && !s.ends_with('-'));
    assert!(s
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    assert!(!s.contains("--"));
}

// ═══════════════════════════════════════════════════════════
// Placeholder images
// ═══════════════════════════════════════════════════════════

#[test]
fn title_seed_stable_and_bounded() {
    let title = "Why enterprises choose compliant-first blockchains";
    assert_eq!(images::title_seed(title), images::title_seed(title));
    assert!(images::title_seed(title) < 1000);
    // Known values of the rolling hash
    assert_eq!(images::title_seed("a"), 97);
    assert_eq!(images::title_seed("Coreum"), 919);
}

#[test]
fn picsum_url_stable_per_title() {
    assert_eq!(images::picsum_url("Coreum"), "https://picsum.photos/800/600?random=919");
    assert_eq!(images::picsum_url("Some Title"), images::picsum_url("Some Title"));
}

#[test]
fn placeholder_url_truncates_and_encodes() {
    let long_title = "A".repeat(60);
    let url = images::placeholder_url(&long_title);
    assert!(url.starts_with("https://via.placeholder.com/800x600/"));
    let caption = url.split("?text=").nth(1).unwrap();
    assert_eq!(caption.len(), 40);

    assert_eq!(images::placeholder_url(&long_title), url);

    let encoded = images::placeholder_url("Coreum Staking!");
    assert!(encoded.contains("Coreum+Staking%21"));
}

// ═══════════════════════════════════════════════════════════
// Content strategy
// ═══════════════════════════════════════════════════════════

#[test]
fn weighted_category_distribution() {
    let mut rng = rand::thread_rng();
    let total_weight: u32 = content::CATEGORIES.iter().map(|c| c.weight).sum();
    let draws = 10_000;

    let mut counts: HashMap<&str, u32> = HashMap::new();
    for _ in 0..draws {
        let cat = content::select_weighted_category(&mut rng);
        *counts.entry(cat.name).or_default() += 1;
    }

    for category in content::CATEGORIES {
        let expected = category.weight as f64 / total_weight as f64;
        let observed = *counts.get(category.name).unwrap_or(&0) as f64 / draws as f64;
        assert!(
            (observed - expected).abs() < 0.03,
            "category {} drawn {:.3}, expected {:.3}",
            category.name,
            observed,
            expected
        );
    }
}

#[test]
fn random_topic_empty_pool_is_none() {
    let empty = content::Category {
        name: "empty",
        weight: 1,
        topics: &[],
    };
    let mut rng = rand::thread_rng();
    assert!(content::random_topic(&mut rng, &empty).is_none());
}

#[test]
fn random_samples_have_requested_sizes() {
    let mut rng = rand::thread_rng();

    let props = content::random_value_props(&mut rng, 2);
    assert_eq!(props.len(), 2);
    assert!(props.iter().all(|p| content::VALUE_PROPS.contains(p)));

    let keywords = content::random_keywords(&mut rng, 5);
    assert_eq!(keywords.len(), 5);
    assert!(keywords.iter().all(|k| content::SEO_KEYWORDS.contains(k)));

    let comparison = content::random_comparison(&mut rng);
    assert!(!comparison.chain.is_empty());
}

#[test]
fn prompt_embeds_strategy_context() {
    let mut rng = rand::thread_rng();
    let category = &content::CATEGORIES[0];
    let topic = category.topics[0];
    let props = content::random_value_props(&mut rng, 2);
    let comparison = content::random_comparison(&mut rng);
    let keywords = vec!["Coreum blockchain", "DeFi"];

    let context =
        crate::ai::prompts::prompt_context(category, topic, &props, comparison, &keywords);
    assert!(context.contains(category.name));
    assert!(context.contains(topic));
    assert!(context.contains(comparison.respect));
    assert!(context.contains("Coreum blockchain, DeFi"));

    let prompt = crate::ai::prompts::generate_post(&context);
    assert!(prompt.contains("Return as valid JSON"));
    assert!(prompt.contains("\"readingTime\""));
}

// ═══════════════════════════════════════════════════════════
// AI response parsing
// ═══════════════════════════════════════════════════════════

#[test]
fn parse_json_direct() {
    let v = parse_json_from_text(r#"{"title": "T"}"#).unwrap();
    assert_eq!(v["title"], "T");
}

#[test]
fn parse_json_in_fences() {
    let text = "```json\n{\"title\": \"Fenced\"}\n```";
    let v = parse_json_from_text(text).unwrap();
    assert_eq!(v["title"], "Fenced");
}

#[test]
fn parse_json_wrapped_in_prose() {
    let text = "Sure, here is your post:\n{\"title\": \"Wrapped\", \"nested\": {\"ok\": true}}\nEnjoy!";
    let v = parse_json_from_text(text).unwrap();
    assert_eq!(v["title"], "Wrapped");
    assert_eq!(v["nested"]["ok"], true);
}

#[test]
fn parse_json_garbage_is_none() {
    assert!(parse_json_from_text("no json here at all").is_none());
}

#[test]
fn post_draft_full() {
    let text = r#"{"title": "T", "excerpt": "E", "content": "C",
                   "keywords": ["k1", "k2"], "readingTime": 4}"#;
    let draft = PostDraft::from_text(text).unwrap();
    assert_eq!(draft.title, "T");
    assert_eq!(draft.excerpt, "E");
    assert_eq!(draft.content, "C");
    assert_eq!(draft.keywords, vec!["k1", "k2"]);
    assert_eq!(draft.reading_time, 4);
}

#[test]
fn post_draft_defaults() {
    let draft = PostDraft::from_text(r#"{"title": "Only Title"}"#).unwrap();
    assert!(draft.keywords.is_empty());
    assert_eq!(draft.reading_time, 3);
}

#[test]
fn post_draft_requires_title() {
    assert!(PostDraft::from_text(r#"{"excerpt": "no title"}"#).is_none());
    assert!(PostDraft::from_text(r#"{"title": "   "}"#).is_none());
}

// ═══════════════════════════════════════════════════════════
// Post store
// ═══════════════════════════════════════════════════════════

#[test]
fn post_create_roundtrip() {
    let pool = test_pool();
    let post = BlogPost::create(&pool, &sample_form("Roundtrip Post", 0)).unwrap();

    assert!(post.id > 0);
    assert_eq!(post.title, "Roundtrip Post");
    assert_eq!(post.slug, "roundtrip-post");
    assert_eq!(post.keywords, vec!["Coreum blockchain", "DeFi"]);
    assert_eq!(post.author, AUTHOR);
    assert!(post.image_url.is_some());

    let fetched = BlogPost::find_by_id(&pool, post.id).unwrap();
    assert_eq!(fetched.title, post.title);
    assert!(BlogPost::find_by_id(&pool, 9999).is_none());
}

#[test]
fn todays_window_excludes_other_days() {
    let pool = test_pool();

    BlogPost::create(&pool, &sample_form("Today A", 0)).unwrap();
    BlogPost::create(&pool, &sample_form("Today B", 1)).unwrap();
    // Yesterday and tomorrow both fall outside the UTC day window
    BlogPost::create(&pool, &sample_form("Yesterday", 60 * 60 * 24 + 60)).unwrap();
    BlogPost::create(&pool, &sample_form("Tomorrow", -(60 * 60 * 24 + 60))).unwrap();

    let todays = BlogPost::todays(&pool);
    let titles: Vec<&str> = todays.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Today A", "Today B"]);
}

#[test]
fn paginated_is_newest_first() {
    let pool = test_pool();
    for i in 0..6 {
        BlogPost::create(&pool, &sample_form(&format!("Post {}", i), i)).unwrap();
    }

    let page = BlogPost::paginated(&pool, 0, 5);
    assert_eq!(page.len(), 5);
    assert_eq!(page[0].title, "Post 0");
    assert_eq!(page[4].title, "Post 4");

    let rest = BlogPost::paginated(&pool, 5, 5);
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].title, "Post 5");

    assert_eq!(BlogPost::count(&pool), 6);
}

#[test]
fn image_backfill_targets_only_missing() {
    let pool = test_pool();

    let mut missing = sample_form("Needs Image", 0);
    missing.image_url = None;
    let needs = BlogPost::create(&pool, &missing).unwrap();
    BlogPost::create(&pool, &sample_form("Has Image", 1)).unwrap();

    assert_eq!(BlogPost::without_image(&pool).len(), 1);

    let updated = generator::backfill_images(&pool, &test_config(), &fast_bucket());
    assert_eq!(updated, 1);

    let repaired = BlogPost::find_by_id(&pool, needs.id).unwrap();
    // Unconfigured key resolves straight to the deterministic photo URL
    assert_eq!(repaired.image_url.unwrap(), images::picsum_url("Needs Image"));
    assert!(BlogPost::without_image(&pool).is_empty());
}

#[test]
fn generation_without_api_key_saves_nothing() {
    let pool = test_pool();
    let posts = generator::generate_and_save_posts(&pool, &test_config(), &fast_bucket(), 3);
    assert!(posts.is_empty());
    assert_eq!(BlogPost::count(&pool), 0);
}

// ═══════════════════════════════════════════════════════════
// Beta signups
// ═══════════════════════════════════════════════════════════

#[test]
fn signup_store_dedupes_case_insensitively() {
    let pool = test_pool();
    assert_eq!(BetaSignup::create(&pool, "A@B.com").unwrap(), SignupOutcome::Created);
    assert_eq!(BetaSignup::create(&pool, "a@b.com").unwrap(), SignupOutcome::Duplicate);
    assert_eq!(BetaSignup::count(&pool), 1);
}

#[test]
fn email_validation() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("user.name+tag@sub.example.org"));
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("missing@tld"));
    assert!(!is_valid_email("spaces in@address.com"));
    assert!(!is_valid_email("@no-user.com"));
}

// ═══════════════════════════════════════════════════════════
// Run lock
// ═══════════════════════════════════════════════════════════

#[test]
fn run_lock_mutual_exclusion() {
    let pool = test_pool();
    assert!(RunLock::acquire(&pool, "job", 600).unwrap());
    assert!(!RunLock::acquire(&pool, "job", 600).unwrap());

    // Independent names don't contend
    assert!(RunLock::acquire(&pool, "other", 600).unwrap());

    RunLock::release(&pool, "job").unwrap();
    assert!(RunLock::acquire(&pool, "job", 600).unwrap());
}

#[test]
fn run_lock_expires() {
    let pool = test_pool();
    assert!(RunLock::acquire(&pool, "job", 0).unwrap());
    // TTL of zero is immediately reclaimable
    assert!(RunLock::acquire(&pool, "job", 600).unwrap());
}

// ═══════════════════════════════════════════════════════════
// Rate limiting
// ═══════════════════════════════════════════════════════════

#[test]
fn rate_limiter_basic() {
    let rl = RateLimiter::new();
    let window = Duration::from_secs(60);

    assert!(rl.check_and_record("signup:1.2.3.4", 3, window));
    assert!(rl.check_and_record("signup:1.2.3.4", 3, window));
    assert!(rl.check_and_record("signup:1.2.3.4", 3, window));
    // 4th should be blocked
    assert!(!rl.check_and_record("signup:1.2.3.4", 3, window));

    // Different key is independent
    assert!(rl.check_and_record("signup:5.6.7.8", 3, window));
}

#[test]
fn rate_limiter_cleanup() {
    let rl = RateLimiter::new();
    let window = Duration::from_secs(60);

    rl.check_and_record("a", 1, window);
    assert!(!rl.check_and_record("a", 1, window));

    // Cleanup with zero max_age removes everything
    rl.cleanup(Duration::from_secs(0));
    assert!(rl.check_and_record("a", 1, window));
}

#[test]
fn token_bucket_caps_burst() {
    // Effectively no refill: only the initial burst is available
    let bucket = TokenBucket::new(1e-9, 2);
    assert!(bucket.try_acquire().is_none());
    assert!(bucket.try_acquire().is_none());

    let wait = bucket.try_acquire().expect("bucket should be empty");
    assert!(wait > Duration::from_secs(0));
}

#[test]
fn token_bucket_acquire_returns_quickly_when_refilled() {
    let bucket = fast_bucket();
    for _ in 0..20 {
        bucket.acquire();
    }
}

#[test]
fn ip_hash_is_stable_and_opaque() {
    let h = security::hash_ip("1.2.3.4");
    assert_eq!(h, security::hash_ip("1.2.3.4"));
    assert_ne!(h, security::hash_ip("1.2.3.5"));
    assert_eq!(h.len(), 64);
    assert!(!h.contains('.'));
}

// ═══════════════════════════════════════════════════════════
// Blog API
// ═══════════════════════════════════════════════════════════

#[test]
fn blog_api_empty_store() {
    let (client, _pool) = test_client();
    let resp = client.get("/api/blog").dispatch();
    assert_eq!(resp.status(), Status::Ok);
    assert_eq!(
        resp.headers().get_one("Cache-Control"),
        Some("public, s-maxage=300, stale-while-revalidate=3600")
    );

    let body: Value = resp.into_json().unwrap();
    assert!(body["posts"].as_array().unwrap().is_empty());
    assert_eq!(body["meta"]["total"], 0);
    assert_eq!(body["meta"]["type"], "today");
}

#[test]
fn blog_api_history_pagination() {
    let (client, pool) = test_client();
    for i in 0..6 {
        BlogPost::create(&pool, &sample_form(&format!("Post {}", i), i)).unwrap();
    }

    let body: Value = client
        .get("/api/blog?type=history&limit=5&offset=0")
        .dispatch()
        .into_json()
        .unwrap();
    assert_eq!(body["posts"].as_array().unwrap().len(), 5);
    assert_eq!(body["meta"]["hasMore"], true);
    assert_eq!(body["meta"]["offset"], 0);
    assert_eq!(body["posts"][0]["title"], "Post 0");

    let rest: Value = client
        .get("/api/blog?type=history&limit=5&offset=5")
        .dispatch()
        .into_json()
        .unwrap();
    assert_eq!(rest["posts"].as_array().unwrap().len(), 1);
    assert_eq!(rest["meta"]["hasMore"], false);
}

#[test]
fn blog_api_single_post() {
    let (client, pool) = test_client();
    let post = BlogPost::create(&pool, &sample_form("Single Post", 0)).unwrap();

    let body: Value = client
        .get(format!("/api/blog?type=single&id={}", post.id))
        .dispatch()
        .into_json()
        .unwrap();
    let posts = body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "Single Post");
    assert_eq!(posts[0]["readingTime"], 3);
    assert_eq!(posts[0]["author"], AUTHOR);

    let missing: Value = client
        .get("/api/blog?type=single&id=424242")
        .dispatch()
        .into_json()
        .unwrap();
    assert!(missing["posts"].as_array().unwrap().is_empty());
}

#[test]
fn blog_api_today_falls_back_to_recent() {
    let (client, pool) = test_client();
    // Only a historical post exists
    BlogPost::create(&pool, &sample_form("Old Post", 60 * 60 * 24 * 3)).unwrap();

    let body: Value = client.get("/api/blog?type=today").dispatch().into_json().unwrap();
    let posts = body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "Old Post");
}

// ═══════════════════════════════════════════════════════════
// Beta signup API
// ═══════════════════════════════════════════════════════════

#[test]
fn signup_api_then_conflict() {
    let (client, _pool) = test_client();

    let first = client
        .post("/api/beta-signup")
        .header(ContentType::JSON)
        .body(r#"{"email": "a@b.com"}"#)
        .dispatch();
    assert_eq!(first.status(), Status::Ok);
    let body: Value = first.into_json().unwrap();
    assert_eq!(body["success"], true);

    let second = client
        .post("/api/beta-signup")
        .header(ContentType::JSON)
        .body(r#"{"email": "a@b.com"}"#)
        .dispatch();
    assert_eq!(second.status(), Status::Conflict);
    let body: Value = second.into_json().unwrap();
    assert_eq!(body["error"], "Email already registered");
}

#[test]
fn signup_api_validates_email() {
    let (client, _pool) = test_client();

    let missing = client
        .post("/api/beta-signup")
        .header(ContentType::JSON)
        .body("{}")
        .dispatch();
    assert_eq!(missing.status(), Status::BadRequest);

    let invalid = client
        .post("/api/beta-signup")
        .header(ContentType::JSON)
        .body(r#"{"email": "not-an-email"}"#)
        .dispatch();
    assert_eq!(invalid.status(), Status::BadRequest);
    let body: Value = invalid.into_json().unwrap();
    assert_eq!(body["error"], "Invalid email format");
}

#[test]
fn signup_api_count() {
    let (client, _pool) = test_client();
    for email in ["one@example.com", "two@example.com"] {
        client
            .post("/api/beta-signup")
            .header(ContentType::JSON)
            .body(format!(r#"{{"email": "{}"}}"#, email))
            .dispatch();
    }

    let body: Value = client.get("/api/beta-signup").dispatch().into_json().unwrap();
    assert_eq!(body["count"], 2);
}

#[test]
fn signup_api_rate_limited_per_ip() {
    let (client, _pool) = test_client();

    // All requests from the local client share one IP bucket
    for i in 0..10 {
        let resp = client
            .post("/api/beta-signup")
            .header(ContentType::JSON)
            .body(format!(r#"{{"email": "user{}@example.com"}}"#, i))
            .dispatch();
        assert_eq!(resp.status(), Status::Ok);
    }

    let blocked = client
        .post("/api/beta-signup")
        .header(ContentType::JSON)
        .body(r#"{"email": "user11@example.com"}"#)
        .dispatch();
    assert_eq!(blocked.status(), Status::TooManyRequests);

    // A different client IP is an independent bucket
    let other = client
        .post("/api/beta-signup")
        .header(ContentType::JSON)
        .header(Header::new("X-Real-IP", "10.0.0.7"))
        .body(r#"{"email": "fresh@example.com"}"#)
        .dispatch();
    assert_eq!(other.status(), Status::Ok);
}

// ═══════════════════════════════════════════════════════════
// Chat API
// ═══════════════════════════════════════════════════════════

#[test]
fn chat_api_requires_message() {
    let (client, _pool) = test_client();
    let resp = client
        .post("/api/chat")
        .header(ContentType::JSON)
        .body("{}")
        .dispatch();
    assert_eq!(resp.status(), Status::BadRequest);
}

#[test]
fn chat_api_degrades_to_fallback() {
    // Upstream is a closed port, so the proxy fails and the canned
    // fallback comes back with a 200
    let (client, _pool) = test_client();
    let resp = client
        .post("/api/chat")
        .header(ContentType::JSON)
        .body(r#"{"message": "What is ShieldNest?", "sessionId": "s1"}"#)
        .dispatch();
    assert_eq!(resp.status(), Status::Ok);

    let body: Value = resp.into_json().unwrap();
    assert!(body["response"].as_str().unwrap().contains("ShieldNest Assistant"));
    assert_eq!(body["canExpand"], false);
}

#[test]
fn chat_api_preflight_allows_cors() {
    let (client, _pool) = test_client();
    let resp = client.options("/api/chat").dispatch();
    assert_eq!(resp.status(), Status::Ok);
    assert_eq!(resp.headers().get_one("Access-Control-Allow-Origin"), Some("*"));
}

// ═══════════════════════════════════════════════════════════
// Cron endpoint
// ═══════════════════════════════════════════════════════════

#[test]
fn cron_rejects_missing_or_bad_token() {
    let (client, pool) = test_client();

    let missing = client.get("/api/cron/generate-posts").dispatch();
    assert_eq!(missing.status(), Status::Unauthorized);

    let wrong = client
        .get("/api/cron/generate-posts")
        .header(Header::new("Authorization", "Bearer wrong-secret"))
        .dispatch();
    assert_eq!(wrong.status(), Status::Unauthorized);

    // No generation side effects
    assert_eq!(BlogPost::count(&pool), 0);
}

#[test]
fn cron_rejects_when_token_unconfigured() {
    let mut config = test_config();
    config.cron_secret_token = None;
    let (client, _pool) = test_client_with(config);

    let resp = client
        .get("/api/cron/generate-posts")
        .header(Header::new("Authorization", "Bearer anything"))
        .dispatch();
    assert_eq!(resp.status(), Status::Unauthorized);
}

#[test]
fn cron_post_is_method_not_allowed() {
    let (client, _pool) = test_client();
    let resp = client.post("/api/cron/generate-posts").dispatch();
    assert_eq!(resp.status(), Status::MethodNotAllowed);
}

#[test]
fn cron_conflicts_while_run_in_progress() {
    let (client, pool) = test_client();
    assert!(RunLock::acquire(&pool, "generate_posts", 600).unwrap());

    let resp = client
        .get("/api/cron/generate-posts")
        .header(Header::new("Authorization", "Bearer test-cron-secret"))
        .dispatch();
    assert_eq!(resp.status(), Status::Conflict);
    assert_eq!(BlogPost::count(&pool), 0);
}
