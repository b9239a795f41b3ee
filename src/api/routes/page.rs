//! Page Routes
//!
//! - GET / - Full dashboard page (`?state=` selects the per-state chart)
//! - GET /sections/category-by-state - Per-state section fragment

use axum::{
    extract::{Query, State},
    response::Html,
};
use std::sync::Arc;

use crate::api::dto::StateParams;
use crate::api::state::AppState;

/// GET /
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StateParams>,
) -> Html<String> {
    tracing::debug!(state = ?params.state, "Rendering dashboard page");
    Html(state.dashboard.render_page(params.state.as_deref()))
}

/// GET /sections/category-by-state
///
/// Re-renders only the section driven by the state selector.
pub async fn state_section(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StateParams>,
) -> Html<String> {
    tracing::debug!(state = ?params.state, "Rendering state section");
    Html(state.dashboard.render_state_section(params.state.as_deref()))
}
