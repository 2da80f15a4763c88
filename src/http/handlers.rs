//! HTTP handlers for the REST API.
//!
//! Each handler is a single linear path: validate the input, make one
//! bounded call to the upstream provider, apply the conversion, respond.
//! Provider failures are mapped onto status codes per endpoint; the
//! mappings are deliberately not uniform across endpoints because the
//! wire behavior of each is part of its contract.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use tracing::warn;

use super::dto::{
    DistanceResponse, RadiusRequest, RadiusResponse, StatusResponse, TiltQuery, TiltResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::provider::ProviderError;
use crate::services::{degrees_to_radians, radius_from_surface_area, round4};

/// Identifier reported by the liveness probe.
const SERVICE_ID: &str = "planet-query";

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /test
///
/// Liveness probe. Always returns 200 with a fixed status payload,
/// regardless of upstream availability.
pub async fn service_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "active".to_string(),
        id: SERVICE_ID.to_string(),
    })
}

// =============================================================================
// Planet Attributes
// =============================================================================

/// POST /radius
///
/// Derive a planet's radius from its surface area via `r = sqrt(A / 4π)`,
/// rounded to 4 fractional digits.
///
/// Failure mapping: missing or unreadable body, or missing `planet`
/// field → 400; upstream non-success or missing `area` field → 404;
/// malformed upstream payload or transport failure → 500 with the failure
/// description.
pub async fn get_planet_radius(
    State(state): State<AppState>,
    body: Result<Json<RadiusRequest>, JsonRejection>,
) -> HandlerResult<RadiusResponse> {
    // Extract the body ourselves so every rejection wears the ApiError
    // envelope instead of axum's plain-text one.
    let planet = body
        .ok()
        .and_then(|Json(request)| request.planet)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing parameter 'planet'".to_string()))?;

    let area = state
        .provider
        .surface_area_sq_miles(&planet)
        .await
        .map_err(|err| match err {
            ProviderError::NoData { .. } => {
                AppError::NotFound(format!("Could not retrieve data for {}", planet))
            }
            ProviderError::Transport(e) => {
                warn!(planet = %planet, error = %e, "surface-area lookup failed");
                AppError::Internal(e.to_string())
            }
            err @ ProviderError::MalformedPayload { .. } => {
                warn!(planet = %planet, error = %err, "surface-area payload malformed");
                AppError::Internal(err.to_string())
            }
        })?;

    let radius = round4(radius_from_surface_area(area));

    Ok(Json(RadiusResponse {
        planet,
        radius,
        units: "miles".to_string(),
        calculation_method: "inverse_surface_area".to_string(),
    }))
}

/// GET /distance/{planet}
///
/// Average distance of the planet, fetched from the upstream provider in
/// miles. The response labels the value "AU" without conversion — a
/// preserved inconsistency of the reference wire format (see DESIGN.md).
///
/// Failure mapping: upstream responded but with no parseable or usable
/// data → 404; transport failure (refused, timeout) → 503.
pub async fn get_planet_distance(
    State(state): State<AppState>,
    Path(planet): Path<String>,
) -> HandlerResult<DistanceResponse> {
    let distance = state
        .provider
        .average_distance_miles(&planet)
        .await
        .map_err(|err| match err {
            ProviderError::NoData { .. } | ProviderError::MalformedPayload { .. } => {
                AppError::NotFound("Data unavailable".to_string())
            }
            ProviderError::Transport(e) => {
                warn!(planet = %planet, error = %e, "distance lookup failed");
                AppError::UpstreamUnavailable("External API connection failed".to_string())
            }
        })?;

    Ok(Json(DistanceResponse {
        planet,
        distance,
        units: "AU".to_string(),
    }))
}

/// GET /tilt?planet=
///
/// Axial tilt converted from degrees to radians. Unlike `/radius`, no
/// rounding is applied; the full floating-point value passes through.
///
/// Failure mapping: missing or empty `planet` query parameter → 400;
/// upstream non-success or missing `tilt` field → 404; malformed upstream
/// payload or transport failure → 500.
pub async fn get_planet_tilt(
    State(state): State<AppState>,
    Query(query): Query<TiltQuery>,
) -> HandlerResult<TiltResponse> {
    let planet = query
        .planet
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::BadRequest("Query parameter 'planet' is required".to_string()))?;

    let degrees = state
        .provider
        .axial_tilt_degrees(&planet)
        .await
        .map_err(|err| match err {
            ProviderError::NoData { .. } => AppError::NotFound("Invalid planet name".to_string()),
            err @ (ProviderError::Transport(_) | ProviderError::MalformedPayload { .. }) => {
                warn!(planet = %planet, error = %err, "axial-tilt lookup failed");
                AppError::Internal("Processing error".to_string())
            }
        })?;

    Ok(Json(TiltResponse {
        planet,
        tilt_radians: degrees_to_radians(degrees),
        tilt_degrees: degrees,
        units: "radians".to_string(),
    }))
}
