pub mod health;

use axum::{routing::get, routing::post, Router};
use tower_http::services::ServeDir;

use crate::dashboard::handlers as dashboard;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let html_files = ServeDir::new(state.store.html_dir());

    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/generate", get(generation::handle_generate))
        .route("/api/generate", post(generation::handle_api_generate))
        // Dashboard
        .route("/", get(dashboard::handle_dashboard))
        .route("/api/posts", get(dashboard::handle_list_posts))
        .route("/api/posts/:filename", get(dashboard::handle_get_post))
        .nest_service("/html", html_files)
        .with_state(state)
}
