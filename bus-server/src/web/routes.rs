//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::arrivals::ArrivalsError;
use crate::query::run_query;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/arrivals", get(arrivals))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Board with every region hidden.
async fn index_page() -> Result<Response, AppError> {
    let template = IndexTemplate {
        stop_input: String::new(),
        display: DisplayState::hidden(),
    };
    render(&template).map(|html| Html(html).into_response())
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Look up arrivals for a stop.
async fn arrivals(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<ArrivalsRequest>,
) -> Result<Response, AppError> {
    let html = accepts_html(&headers);

    let outcome = match run_query(state.arrivals.as_ref(), &req.id, Utc::now()).await {
        Ok(outcome) => outcome,
        Err(e) => return upstream_failure(&req.id, e, html),
    };

    let display = DisplayState::from_outcome(&outcome, state.offset_now());

    if html {
        let template = IndexTemplate {
            stop_input: req.id.trim().to_string(),
            display,
        };
        render(&template).map(|html| Html(html).into_response())
    } else {
        Ok(Json(BoardResponse::from_display(&display)).into_response())
    }
}

/// Respond to a transport or upstream server failure.
///
/// The board has no warning for these; the request fails with 502.
fn upstream_failure(
    raw_input: &str,
    err: ArrivalsError,
    html: bool,
) -> Result<Response, AppError> {
    error!(stop = raw_input.trim(), error = %err, "arrivals request failed");

    if !html {
        return Err(AppError::Upstream {
            message: err.to_string(),
        });
    }

    let template = ErrorTemplate {
        title: "Bus arrival service unavailable".to_string(),
        message: err.to_string(),
        stop_input: raw_input.trim().to_string(),
    };
    let page = render(&template)?;
    Ok((StatusCode::BAD_GATEWAY, Html(page)).into_response())
}

fn render(template: &impl Template) -> Result<String, AppError> {
    template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    Upstream { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // Already logged where the upstream call failed
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => {
                error!(error = %message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
