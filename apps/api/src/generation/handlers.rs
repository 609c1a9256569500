//! Axum route handlers for the Generation API.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::generator::generate_and_save;
use crate::models::post::BlogPost;
use crate::seo::SeoMetrics;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateQuery {
    pub keyword: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateBody {
    pub keyword: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub keyword: String,
    pub seo_data: SeoMetrics,
    pub blog_post: String,
}

#[derive(Debug, Serialize)]
pub struct ApiGenerateResponse {
    pub success: bool,
    pub keyword: String,
    pub filename: String,
    pub data: BlogPost,
    pub message: String,
}

/// Returns the keyword if present and not blank.
fn require_keyword(keyword: Option<String>) -> Result<String, AppError> {
    keyword
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(AppError::missing_keyword)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /generate?keyword=<text>
///
/// Generates and saves a post, returning the raw metrics and Markdown body.
pub async fn handle_generate(
    State(state): State<AppState>,
    Query(query): Query<GenerateQuery>,
) -> Result<Json<GenerateResponse>, AppError> {
    let keyword = require_keyword(query.keyword)?;

    let generated = generate_and_save(state.llm.as_ref(), &state.store, &keyword, "").await?;

    Ok(Json(GenerateResponse {
        keyword: generated.post.keyword,
        seo_data: generated.post.seo,
        blog_post: generated.post.content,
    }))
}

/// POST /api/generate
///
/// Dashboard-facing variant: JSON body in, `{success, filename, data}` out.
pub async fn handle_api_generate(
    State(state): State<AppState>,
    body: Result<Json<GenerateBody>, JsonRejection>,
) -> Result<Json<ApiGenerateResponse>, AppError> {
    let Json(body) = body.map_err(|_| AppError::missing_keyword())?;
    let keyword = require_keyword(body.keyword)?;

    let generated = generate_and_save(state.llm.as_ref(), &state.store, &keyword, "").await?;

    Ok(Json(ApiGenerateResponse {
        success: true,
        message: format!("Blog post generated successfully for '{keyword}'"),
        keyword,
        filename: generated.saved.json_filename,
        data: generated.post,
    }))
}
