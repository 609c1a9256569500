//! Blog generation: orchestrates the full generate-and-save pipeline.
//!
//! Flow: fetch_seo_metrics → build prompt → one completion call →
//!       affiliate placeholder substitution → persist JSON + HTML.
//!
//! Shared by the HTTP handlers and the periodic scheduler job.

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{
    affiliate_url, AFFILIATE_LINK_COUNT, BLOG_PROMPT_TEMPLATE, BLOG_SYSTEM,
};
use crate::llm_client::CompletionModel;
use crate::models::post::BlogPost;
use crate::seo::{fetch_seo_metrics, SeoMetrics};
use crate::storage::{PostStore, SavedPost};

/// Result of one generate-and-save run.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPost {
    pub post: BlogPost,
    pub saved: SavedPost,
}

/// Fills the prompt template with the keyword and its metrics.
pub fn build_blog_prompt(keyword: &str, seo: &SeoMetrics) -> String {
    BLOG_PROMPT_TEMPLATE
        .replace("{search_volume}", &seo.search_volume.to_string())
        .replace("{difficulty}", &seo.keyword_difficulty.to_string())
        .replace("{keyword}", keyword)
}

/// Replaces `{AFF_LINK_1}`..`{AFF_LINK_3}` with dummy product URLs.
/// Any other placeholder is left untouched.
pub fn substitute_affiliate_links(content: &str) -> String {
    (1..=AFFILIATE_LINK_COUNT).fold(content.to_string(), |text, n| {
        text.replace(&format!("{{AFF_LINK_{n}}}"), &affiliate_url(n))
    })
}

/// Generates the Markdown body for `keyword` with a single completion call.
pub async fn generate_blog_post(
    llm: &dyn CompletionModel,
    keyword: &str,
    seo: &SeoMetrics,
) -> Result<String, AppError> {
    let prompt = build_blog_prompt(keyword, seo);
    let content = llm
        .complete(BLOG_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;
    Ok(substitute_affiliate_links(&content))
}

/// Runs lookup → generation → persistence for one keyword.
///
/// `prefix` is prepended to the file stem (`daily_report_` for scheduled runs).
pub async fn generate_and_save(
    llm: &dyn CompletionModel,
    store: &PostStore,
    keyword: &str,
    prefix: &str,
) -> Result<GeneratedPost, AppError> {
    let seo = fetch_seo_metrics(keyword);
    info!(
        "Generating blog post for '{keyword}' (volume={}, difficulty={})",
        seo.search_volume, seo.keyword_difficulty
    );

    let content = generate_blog_post(llm, keyword, &seo).await?;

    let post = BlogPost {
        keyword: keyword.to_string(),
        seo,
        content,
    };
    let saved = store.save(&post, prefix).await?;

    Ok(GeneratedPost { post, saved })
}
