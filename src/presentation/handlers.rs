// HTTP request handlers
use crate::application::dashboard_service::LOAD_FAILURE_MESSAGE;
use crate::domain::map::MarkerId;
use crate::presentation::app_state::AppState;
use crate::presentation::page::DASHBOARD_HTML;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct StatusResponse {
    pub ready: bool,
    pub message: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn unavailable(state: &AppState) -> Response {
    let error = state
        .status
        .message()
        .unwrap_or_else(|| LOAD_FAILURE_MESSAGE.to_string());
    (StatusCode::SERVICE_UNAVAILABLE, Json(ErrorBody { error })).into_response()
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard page
pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        ready: state.ready,
        message: state.status.message(),
    })
}

/// Current map: view, tile layer and markers
pub async fn map_view(State(state): State<Arc<AppState>>) -> Response {
    if !state.ready {
        return unavailable(&state);
    }
    let snapshot = {
        let _turn = state.ui_turn();
        state.canvas.snapshot()
    };
    Json(snapshot).into_response()
}

/// Live figure per chart target
pub async fn charts(State(state): State<Arc<AppState>>) -> Response {
    if !state.ready {
        return unavailable(&state);
    }
    let plots = {
        let _turn = state.ui_turn();
        state.plots.snapshot()
    };
    Json(plots).into_response()
}

/// Click a marker and return the charts it produced
pub async fn select_marker(
    Path(id): Path<usize>,
    State(state): State<Arc<AppState>>,
) -> Response {
    if !state.ready {
        return unavailable(&state);
    }

    let plots = {
        let _turn = state.ui_turn();
        if !state.canvas.click(MarkerId(id)) {
            None
        } else {
            Some(state.plots.snapshot())
        }
    };

    match plots {
        Some(plots) => Json(plots).into_response(),
        None => {
            tracing::debug!("Select on unknown marker {}", id);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: format!("Unknown marker {}", id),
                }),
            )
                .into_response()
        }
    }
}
