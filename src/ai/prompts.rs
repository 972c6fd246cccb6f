use crate::content::{self, Category, ChainComparison};

/// Context block embedded ahead of the post instructions: category, topic,
/// value propositions, a chain comparison, brand voice, and keyword subset.
pub fn prompt_context(
    category: &Category,
    topic: &str,
    value_props: &[&str],
    comparison: &ChainComparison,
    keywords: &[&str],
) -> String {
    let props = value_props
        .iter()
        .map(|p| format!("- {}", p))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "CONTENT CATEGORY: {}\n\
         TOPIC: {}\n\n\
         COREUM VALUE PROPOSITIONS TO WEAVE IN:\n{}\n\n\
         CHAIN COMPARISON CONTEXT (if relevant):\n\
         - Respect for {}: {}\n\
         - Their limitation: {}\n\
         - Coreum solution: {}\n\n\
         BRAND VOICE GUIDELINES:\n\
         - Tone: {}\n\
         - Approach: {}\n\
         - CTAs: {}\n\
         - Competitor mentions: {}\n\n\
         SEO KEYWORDS TO INCLUDE: {}\n\n\
         IMPORTANT: Create engaging content that naturally brings readers to discover Coreum and SHIELDNEST. \
         Don't just talk about security - cover the hot topic in a way that positions Coreum as the solution.",
        category.name,
        topic,
        props,
        comparison.chain,
        comparison.respect,
        comparison.limitation,
        comparison.coreum_solution,
        content::BRAND_TONE,
        content::BRAND_APPROACH,
        content::BRAND_CTA,
        content::BRAND_COMPETITORS,
        keywords.join(", ")
    )
}

/// Generate ONE SEO-optimized blog post as strict JSON.
pub fn generate_post(context: &str) -> String {
    format!(
        "You are a crypto security expert writing for SHIELDNEST, a Coreum blockchain security platform.\n\n\
         {}\n\n\
         Generate ONE high-quality, SEO-optimized blog post.\n\n\
         Requirements:\n\
         - Title: Compelling and SEO-friendly (max 70 characters)\n\
         - Excerpt: 1-2 sentences, engaging summary (max 160 characters)\n\
         - Content: 200-400 words, informative, practical advice, include SHIELDNEST benefits\n\
         - Keywords: 3-5 relevant SEO keywords\n\
         - Reading time: Estimate based on content length\n\
         - Author: \"Shield Nest Team\"\n\n\
         Return as valid JSON with this exact structure:\n\
         {{\n  \"title\": \"Blog Post Title\",\n  \"excerpt\": \"Brief description...\",\n  \"content\": \"Full blog content...\",\n  \"keywords\": [\"keyword1\", \"keyword2\", \"keyword3\"],\n  \"readingTime\": 3\n}}",
        context
    )
}

/// Themed prompt for a post's cover illustration.
pub fn cover_image(title: &str) -> String {
    format!(
        "Create a professional illustration for a blog post titled: \"{}\". \
         Style: modern tech, blockchain/cryptocurrency theme, clean and minimal design with dark background. \
         Focus on security, innovation, and digital concepts.",
        title
    )
}
