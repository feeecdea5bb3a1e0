use axum::{extract::State, response::Html};

use crate::error::Result;
use crate::AppState;

#[axum::debug_handler]
pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    state.pages.home()
}
