//! Chart Routes
//!
//! - GET /charts/:file - One chart as a standalone SVG, e.g. `payments.svg`
//!
//! `category-by-state.svg` honours `?state=`.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::dto::StateParams;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::page::ChartKind;

/// GET /charts/:file
pub async fn chart_svg(
    State(state): State<Arc<AppState>>,
    Path(file): Path<String>,
    Query(params): Query<StateParams>,
) -> ApiResult<Response> {
    let kind = parse_chart_file(&file)?;
    let svg = state
        .dashboard
        .figure(kind, params.state.as_deref())
        .to_svg();

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        svg,
    )
        .into_response())
}

fn parse_chart_file(file: &str) -> ApiResult<ChartKind> {
    let (stem, extension) = file
        .rsplit_once('.')
        .ok_or_else(|| ApiError::Validation(format!("Missing file extension: {}", file)))?;

    if extension != "svg" {
        return Err(ApiError::Validation(format!(
            "Unsupported chart format: {}",
            extension
        )));
    }

    ChartKind::from_slug(stem).ok_or_else(|| ApiError::NotFound(format!("Chart {}", stem)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chart_file() {
        assert_eq!(parse_chart_file("payments.svg").unwrap(), ChartKind::Payments);
        assert_eq!(
            parse_chart_file("category-by-state.svg").unwrap(),
            ChartKind::CategoryByState
        );
        assert!(matches!(parse_chart_file("payments.png"), Err(ApiError::Validation(_))));
        assert!(matches!(parse_chart_file("payments"), Err(ApiError::Validation(_))));
        assert!(matches!(parse_chart_file("nope.svg"), Err(ApiError::NotFound(_))));
    }
}
