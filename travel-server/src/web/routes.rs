//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::extract::rejection::FormRejection;
use axum::{
    Form, Json, Router,
    extract::{OriginalUri, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use chrono::{Local, TimeDelta};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::domain::{DomainError, SearchParams, TravelOption};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Days between today and the start date the search form suggests.
const DEFAULT_LEAD_DAYS: i64 = 14;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/results", get(results_page))
        .route("/api/options", post(api_options))
        .route("/booking", get(booking_redirect).post(booking_page))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form.
async fn index_page() -> impl IntoResponse {
    let start = Local::now().date_naive() + TimeDelta::days(DEFAULT_LEAD_DAYS);
    Html(
        IndexTemplate::new(start.format("%Y-%m-%d").to_string())
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Run a search submitted through the form.
///
/// Browsers get the results page, or are sent back to the form when origin
/// or start date is missing. Other clients get JSON.
async fn results_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<SearchQuery>,
) -> Result<Response, AppError> {
    let html = accepts_html(&headers);
    let params = query.into_params();

    if let Err(e) = params.validate() {
        if html {
            info!(error = %e, "incomplete search, back to the form");
            return Ok(Redirect::to("/").into_response());
        }
        return Err(e.into());
    }

    let options = state.generator.generate(&params).await;

    if html {
        let template = ResultsTemplate {
            summary: SearchSummary::from_params(&params),
            options: options.iter().map(OptionView::from_option).collect(),
            back: uri.to_string(),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(options).into_response())
    }
}

/// Generate itineraries for a JSON search.
async fn api_options(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<TravelOption>>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let params: SearchParams = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid search JSON");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;
    params.validate()?;

    Ok(Json(state.generator.generate(&params).await))
}

/// Booking details for the option posted from the results page.
async fn booking_page(form: Result<Form<BookingForm>, FormRejection>) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(e) => {
            warn!(error = %e, "unreadable booking form");
            return Redirect::to("/results").into_response();
        }
    };

    let Some(option) = form.option.as_deref().and_then(|raw| {
        serde_json::from_str::<TravelOption>(raw)
            .map_err(|e| warn!(error = %e, "invalid option in booking form"))
            .ok()
    }) else {
        return Redirect::to("/results").into_response();
    };

    let template = BookingTemplate {
        option: OptionView::from_option(&option),
        back: back_link(form.back.as_deref()),
    };
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => AppError::Internal {
            message: format!("Template error: {}", e),
        }
        .into_response(),
    }
}

/// Direct visits carry no selection, so go back to the results.
async fn booking_redirect() -> Redirect {
    Redirect::to("/results")
}

/// Only links back into the results page are honoured.
fn back_link(back: Option<&str>) -> String {
    back.filter(|b| *b == "/results" || b.starts_with("/results?"))
        .unwrap_or("/results")
        .to_string()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
