//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::planner::{SearchError, SearchRequest, SearchStrategy, UnknownStrategy};

use super::dto::*;
use super::state::AppState;

/// Results returned by station search when no limit is given.
const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Upper bound on station search results.
const MAX_SEARCH_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/stations/search", get(search_stations))
        .route("/api/lines", get(list_lines))
        .route("/api/route", get(plan_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All stations in catalog order.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .catalog()
        .stations()
        .iter()
        .map(|s| StationResult::from_station(s))
        .collect();

    Json(StationsResponse { stations })
}

/// Search stations by name or id.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .min(MAX_SEARCH_LIMIT);

    let stations = state
        .catalog()
        .search_stations(&req.q, limit)
        .into_iter()
        .map(|s| StationResult::from_station(s))
        .collect();

    Json(StationSearchResponse { stations })
}

/// The line table.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let lines = state
        .catalog()
        .lines()
        .iter()
        .map(LineResult::from_line)
        .collect();

    Json(LinesResponse { lines })
}

/// Plan the quickest route between two stations.
async fn plan_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let strategy = match req.strategy.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => s.parse::<SearchStrategy>().map_err(AppError::from)?,
        None => state.config.strategy,
    };
    let config = state.config.with_strategy(strategy);

    let request = SearchRequest::parse(&req.from, &req.to)?;
    let outcome = state.planner.search(&request, &config).await;

    match outcome.as_ref() {
        Ok(path) => Ok(Json(RouteResponse::from_path(path, &request, strategy))),
        Err(e) => Err(e.clone().into()),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        let message = e.to_string();
        match e {
            SearchError::InvalidStation(_) => AppError::BadRequest { message },
            SearchError::Unreachable { .. } => AppError::NotFound { message },
            _ => AppError::Internal { message },
        }
    }
}

impl From<UnknownStrategy> for AppError {
    fn from(e: UnknownStrategy) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
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
