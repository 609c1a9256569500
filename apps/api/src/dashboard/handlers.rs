//! Axum route handlers for the dashboard and the post listing API.

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};

use crate::dashboard::render::render_dashboard;
use crate::errors::AppError;
use crate::models::post::{BlogPost, StoredPost};
use crate::state::AppState;

/// GET /
pub async fn handle_dashboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let posts = state.store.list_posts().await?;
    Ok(Html(render_dashboard(&posts)))
}

/// GET /api/posts
///
/// Newest first. Malformed files are skipped, not reported.
pub async fn handle_list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<StoredPost>>, AppError> {
    Ok(Json(state.store.list_posts().await?))
}

/// GET /api/posts/:filename
pub async fn handle_get_post(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<BlogPost>, AppError> {
    Ok(Json(state.store.get_post(&filename).await?))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::generation::generator::generate_and_save;
    use crate::routes::build_router;
    use crate::test_support::{test_state, StubModel, CANNED_POST};

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_dashboard_empty_state() {
        let dir = TempDir::new().unwrap();
        let app = build_router(test_state(&dir, Arc::new(StubModel::replying(CANNED_POST))));

        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(page.contains("No blog posts found"));
    }

    #[tokio::test]
    async fn test_listing_skips_malformed_files() {
        let dir = TempDir::new().unwrap();
        let model = Arc::new(StubModel::replying(CANNED_POST));
        let state = test_state(&dir, model.clone());

        let generated = generate_and_save(model.as_ref(), &state.store, "standing desk", "")
            .await
            .unwrap();
        std::fs::write(state.store.posts_dir().join("garbage.json"), "[1, 2").unwrap();

        let app = build_router(state);

        let response = app.clone().oneshot(get("/api/posts")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let posts: Value = serde_json::from_str(&body_text(response).await).unwrap();
        let posts = posts.as_array().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["filename"], generated.saved.json_filename.as_str());
        assert_eq!(posts[0]["data"]["keyword"], "standing desk");

        let page = body_text(app.oneshot(get("/")).await.unwrap()).await;
        assert!(page.contains("Standing Desk"));
        assert!(page.contains("90,000"));
    }

    #[tokio::test]
    async fn test_get_post_by_filename() {
        let dir = TempDir::new().unwrap();
        let model = Arc::new(StubModel::replying(CANNED_POST));
        let state = test_state(&dir, model.clone());
        let generated = generate_and_save(model.as_ref(), &state.store, "gadgets", "")
            .await
            .unwrap();
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(get(&format!("/api/posts/{}", generated.saved.json_filename)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let post: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(post["keyword"], "gadgets");
        assert_eq!(post["seo"]["avg_cpc"], 0.5);

        let missing = app
            .oneshot(get("/api/posts/missing_20240101-000000.json"))
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_generated_html_is_served() {
        let dir = TempDir::new().unwrap();
        let model = Arc::new(StubModel::replying(CANNED_POST));
        let state = test_state(&dir, model.clone());
        let generated = generate_and_save(model.as_ref(), &state.store, "gadgets", "")
            .await
            .unwrap();
        let app = build_router(state);

        let response = app
            .oneshot(get(&format!("/html/{}", generated.saved.html_filename)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(page.contains("<title>Blog Post: gadgets</title>"));
    }
}
