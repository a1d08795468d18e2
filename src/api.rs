//! HTTP API over the region service.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::models::{Axis, GeoPoint};
use crate::pip::RegionService;

pub const NOT_FOUND_MESSAGE: &str = "given geolocation does not lie in India";

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Build the router with all region endpoints
pub fn router(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/states/all", get(states_handler))
        .route("/states/with-ut", get(states_with_ut_handler))
        .route("/states/find", post(find_handler))
        .route("/states/{scope}/{direction}", get(order_handler))
        .route("/regions/{name}", get(region_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Health check endpoint
async fn health_handler(State(service): State<Arc<RegionService>>) -> Json<HealthResponse> {
    let regions = service.index().len();
    Json(HealthResponse {
        status: if regions > 0 { "ok" } else { "empty" },
        regions,
    })
}

/// States only
async fn states_handler(State(service): State<Arc<RegionService>>) -> Json<Vec<String>> {
    Json(service.list_names(false))
}

/// States and union territories
async fn states_with_ut_handler(State(service): State<Arc<RegionService>>) -> Json<Vec<String>> {
    Json(service.list_names(true))
}

/// Ordered listing: `/states/{all|with-ut}/{west-east|north-south}`
async fn order_handler(
    State(service): State<Arc<RegionService>>,
    Path((scope, direction)): Path<(String, String)>,
) -> Result<Json<Vec<String>>, ApiError> {
    let include_union_territories = match scope.as_str() {
        "all" => false,
        "with-ut" => true,
        _ => return Err(error(StatusCode::NOT_FOUND, format!("unknown scope '{}'", scope))),
    };
    let axis = Axis::from_slug(&direction).ok_or_else(|| {
        error(
            StatusCode::NOT_FOUND,
            format!("unknown direction '{}'", direction),
        )
    })?;

    Ok(Json(service.order_by(axis, include_union_territories)))
}

/// Locate the region containing a point
async fn find_handler(
    State(service): State<Arc<RegionService>>,
    payload: Result<Json<LocateRequest>, JsonRejection>,
) -> Result<Json<LocateResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Malformed locate request: {}", rejection.body_text());
        error(
            StatusCode::BAD_REQUEST,
            format!("Error in decoding JSON: {}", rejection.body_text()),
        )
    })?;

    let location = GeoPoint::new(request.latitude, request.longitude);
    match service.locate(location) {
        Some(state) => Ok(Json(LocateResponse {
            latitude: request.latitude,
            longitude: request.longitude,
            state: state.to_string(),
        })),
        None => {
            debug!(
                "No region contains ({}, {})",
                request.latitude, request.longitude
            );
            Err(error(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE))
        }
    }
}

/// Details for a single region
async fn region_handler(
    State(service): State<Arc<RegionService>>,
    Path(name): Path<String>,
) -> Result<Json<RegionResponse>, ApiError> {
    let region = service
        .index()
        .get(&name)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, format!("unknown region '{}'", name)))?;

    Ok(Json(RegionResponse {
        name: region.name().to_string(),
        union_territory: region.is_union_territory,
        centroid: region.centroid.map(GeoPoint::from),
    }))
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocateRequest {
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LocateResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub state: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegionResponse {
    pub name: String,
    pub union_territory: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centroid: Option<GeoPoint>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    regions: usize,
}
