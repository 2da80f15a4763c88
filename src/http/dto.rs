//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Every value is request-scoped: constructed once, serialized, discarded.

use serde::{Deserialize, Serialize};

/// Liveness probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Fixed service status
    pub status: String,
    /// Service identifier
    pub id: String,
}

/// Request body for the radius endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadiusRequest {
    /// Planet name; required and non-empty
    #[serde(default)]
    pub planet: Option<String>,
}

/// Radius derived from the planet's surface area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadiusResponse {
    pub planet: String,
    /// Radius rounded to 4 fractional digits
    pub radius: f64,
    pub units: String,
    pub calculation_method: String,
}

/// Average distance of a planet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceResponse {
    pub planet: String,
    pub distance: f64,
    pub units: String,
}

/// Query parameters for the tilt endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TiltQuery {
    /// Planet name; required and non-empty
    #[serde(default)]
    pub planet: Option<String>,
}

/// Axial tilt in both degrees (as supplied upstream) and radians.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiltResponse {
    pub planet: String,
    /// Converted tilt, full floating-point precision
    pub tilt_radians: f64,
    /// Tilt as reported by the upstream provider
    pub tilt_degrees: f64,
    pub units: String,
}
