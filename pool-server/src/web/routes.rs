//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::browse::{SortKey, available_dates, cards_for_date, sort_cards};
use crate::domain::{minutes_now, today_key};
use crate::routing::{RoutingClient, RoutingConfig, enrich};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(browse_page))
        .route("/health", get(health))
        .route("/enrich", post(start_enrichment))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The browser page for a date and sort order.
async fn browse_page(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> Result<Response, AppError> {
    let date = query.date.unwrap_or_else(today_key);
    let sort = query.sort.unwrap_or_default();

    let facilities = state.facilities.snapshot().await;

    // Filter, then order; sorting never re-runs the filter.
    let mut cards = cards_for_date(&date, &facilities, &state.cards);
    sort_cards(&mut cards, sort, minutes_now());

    let template = IndexTemplate {
        dates: available_dates(&facilities),
        sort_options: SortKey::ALL
            .iter()
            .map(|key| SortOptionView {
                value: key.value(),
                label: key.label(),
                selected: *key == sort,
            })
            .collect(),
        cards: cards.iter().map(CardView::from_card).collect(),
        statuses: state
            .status
            .snapshot()
            .await
            .iter()
            .map(StatusView::from_entry)
            .collect(),
        has_stored_key: state.keys.load().is_some(),
        selected_date: date,
    };

    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {e}"),
    })?;

    Ok(Html(html).into_response())
}

/// Kick off an enrichment run for the submitted address.
///
/// The run is spawned and NOT awaited: the redirect lands immediately and
/// each batch surfaces its outcome through the status log as it completes.
async fn start_enrichment(
    State(state): State<AppState>,
    Form(form): Form<EnrichForm>,
) -> Result<Response, AppError> {
    let address = form.address.trim().to_string();
    if address.is_empty() {
        return Err(AppError::BadRequest {
            message: "address must not be empty".into(),
        });
    }

    // A freshly supplied key is persisted before use; failing to persist is
    // not fatal, the key still works for this run.
    let supplied = form
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string);

    if let Some(key) = &supplied {
        if let Err(e) = state.keys.save(key) {
            state
                .status
                .warning(format!("could not persist API key: {e}"))
                .await;
        }
    }

    let Some(api_key) = supplied.or_else(|| state.keys.load()) else {
        state
            .status
            .error("no API key available; enter one to look up travel times")
            .await;
        return Ok(Redirect::to("/").into_response());
    };

    let mut config = RoutingConfig::new(api_key);
    if let Some(url) = &state.routing_base_url {
        config = config.with_base_url(url);
    }

    let client = match RoutingClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            state
                .status
                .error(format!("travel lookup unavailable: {e}"))
                .await;
            return Ok(Redirect::to("/").into_response());
        }
    };

    let facilities = state.facilities.clone();
    let cards = state.cards.clone();
    let status = state.status.clone();
    tokio::spawn(async move {
        enrich(&client, &facilities, &cards, &status, &address).await;
    });

    Ok(Redirect::to("/").into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
