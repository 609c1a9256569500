// LLM prompt constants for blog post generation.

/// System message sent with every generation call.
pub const BLOG_SYSTEM: &str = "You are a helpful AI content writer.";

/// Blog post prompt template.
/// Replace: {search_volume}, {difficulty}, {keyword}
pub const BLOG_PROMPT_TEMPLATE: &str = r#"
You are an SEO copywriter. Write a well-structured blog post in Markdown about "{keyword}".

Include:
- An engaging introduction
- A subheading on why {keyword} is trending (mention the search volume: {search_volume})
- A subheading on challenges or competition (mention keyword difficulty: {difficulty})
- A section recommending 2–3 products or services, using affiliate link placeholders (like {AFF_LINK_1})
- A conclusion with a call to action

Ensure the tone is informative but casual. Length: ~500 words.
"#;

/// Number of `{AFF_LINK_n}` placeholders substituted after generation.
pub const AFFILIATE_LINK_COUNT: usize = 3;

/// Dummy destination for affiliate placeholder `n`.
pub fn affiliate_url(n: usize) -> String {
    format!("https://example.com/product{n}")
}
