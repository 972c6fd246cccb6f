pub mod blog;
pub mod chat;
pub mod cron;
pub mod signup;

pub fn api_routes() -> Vec<rocket::Route> {
    routes![
        blog::blog_index,
        signup::signup_submit,
        signup::signup_count,
        chat::chat_submit,
        chat::chat_preflight,
        cron::generate_posts,
        cron::generate_posts_not_allowed,
    ]
}
