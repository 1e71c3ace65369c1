// HTTP request handlers
use crate::domain::dashboard::{ChartId, Dashboard};
use crate::domain::tooltip::TooltipContent;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct HoverQuery {
    pub index: Option<usize>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// The full dashboard view model
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Dashboard>, ApiError> {
    let dashboard = state.dashboard_service.get_dashboard().await?;
    Ok(Json(dashboard))
}

/// Hover simulation: tooltip content for one chart point. Responds with
/// 204 when no point is active (missing or out-of-range index).
pub async fn chart_tooltip(
    Path(chart): Path<String>,
    Query(query): Query<HoverQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let chart = ChartId::parse(&chart).ok_or(ApiError::UnknownChart(chart))?;

    let content: Option<TooltipContent> =
        state.dashboard_service.tooltip(chart, query.index).await?;

    match content {
        Some(tooltip) => Ok(Json(tooltip).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::infrastructure::demo_repository::DemoRepository;

    fn state() -> Arc<AppState> {
        let repository = Arc::new(DemoRepository::new());
        Arc::new(AppState {
            dashboard_service: DashboardService::new(repository),
        })
    }

    #[tokio::test]
    async fn test_get_dashboard_serializes_camel_case() {
        let Json(dashboard) = get_dashboard(State(state())).await.unwrap();
        let json = serde_json::to_value(&dashboard).unwrap();

        assert_eq!(json["statusBadge"], "Live (Demo)");
        assert_eq!(json["tiles"].as_array().unwrap().len(), 4);
        assert_eq!(json["tiles"][1]["entrance"]["delay"], 0.08);
        assert_eq!(json["charts"][0]["seriesKey"], "kits");
        assert_eq!(json["charts"][1]["kind"], "line");
        assert_eq!(json["operators"]["rows"][0]["fill"]["toPct"], 92.0);
        assert_eq!(json["operators"]["rows"][0]["fill"]["duration"], 0.8);
    }

    #[tokio::test]
    async fn test_tooltip_for_known_point() {
        let response = chart_tooltip(
            Path("throughput".to_string()),
            Query(HoverQuery { index: Some(4) }),
            State(state()),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_tooltip_without_active_point_is_no_content() {
        let response = chart_tooltip(
            Path("errors".to_string()),
            Query(HoverQuery { index: None }),
            State(state()),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_tooltip_for_unknown_chart_fails() {
        let result = chart_tooltip(
            Path("latency".to_string()),
            Query(HoverQuery { index: Some(0) }),
            State(state()),
        )
        .await;
        assert!(matches!(result, Err(ApiError::UnknownChart(_))));
    }
}
