pub mod health;
pub mod home;
pub mod quiz;
pub mod tutor;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::AppState;

/// The full HTTP surface. `static_dir` is served under `/static`.
pub fn app(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(home::home))
        .route("/buscar", post(tutor::buscar))
        .route("/test", get(quiz::test_page))
        .route("/health", get(health::health))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
