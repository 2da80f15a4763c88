//! Upstream planetary-data provider client.
//!
//! The provider exposes raw planetary measurements over HTTP. This module
//! defines the [`PlanetDataProvider`] trait that handlers depend on, and
//! [`HttpPlanetProvider`], the reqwest-backed implementation. Every call is
//! a single attempt bounded by [`crate::config::UPSTREAM_TIMEOUT`].

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::config::UPSTREAM_TIMEOUT;

/// Errors from the upstream planetary-data provider.
///
/// Transport failures and "no usable data" are kept separate because some
/// endpoints report them with different status codes.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure: connection refused, DNS failure, timeout.
    #[error("failed to reach the planetary-data provider: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider responded, but with no usable data for the planet.
    /// Covers both a non-success status and a success response whose body
    /// lacks the expected field.
    #[error("no data available for planet '{planet}'")]
    NoData { planet: String },

    /// The provider returned a success response whose body is not valid
    /// JSON at all.
    #[error("malformed payload from the planetary-data provider for planet '{planet}': {reason}")]
    MalformedPayload { planet: String, reason: String },
}

impl ProviderError {
    fn no_data(planet: &str) -> Self {
        Self::NoData {
            planet: planet.to_string(),
        }
    }

    fn malformed(planet: &str, err: reqwest::Error) -> Self {
        Self::MalformedPayload {
            planet: planet.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Read access to raw planetary measurements.
///
/// Handlers hold this as a trait object so tests can point the service at a
/// mock provider without touching the HTTP layer.
#[async_trait]
pub trait PlanetDataProvider: Send + Sync {
    /// Surface area of the planet, in square miles.
    async fn surface_area_sq_miles(&self, planet: &str) -> Result<f64, ProviderError>;

    /// Average distance of the planet, in miles.
    async fn average_distance_miles(&self, planet: &str) -> Result<f64, ProviderError>;

    /// Axial tilt of the planet, in degrees.
    async fn axial_tilt_degrees(&self, planet: &str) -> Result<f64, ProviderError>;
}

#[derive(Debug, Deserialize)]
struct SurfaceAreaBody {
    area: f64,
}

#[derive(Debug, Deserialize)]
struct DistanceBody {
    distance: f64,
}

#[derive(Debug, Deserialize)]
struct TiltBody {
    tilt: f64,
}

/// HTTP implementation of [`PlanetDataProvider`].
#[derive(Debug, Clone)]
pub struct HttpPlanetProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPlanetProvider {
    /// Create a provider client for the given base URL.
    ///
    /// The underlying client enforces the 5-second upstream timeout on
    /// every request.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl PlanetDataProvider for HttpPlanetProvider {
    async fn surface_area_sq_miles(&self, planet: &str) -> Result<f64, ProviderError> {
        let url = format!("{}/surface-area/{}", self.base_url, planet);
        let response = self
            .client
            .get(&url)
            .query(&[("units", "miles")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::no_data(planet));
        }
        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::malformed(planet, e))?;
        let body: SurfaceAreaBody =
            serde_json::from_value(value).map_err(|_| ProviderError::no_data(planet))?;
        Ok(body.area)
    }

    async fn average_distance_miles(&self, planet: &str) -> Result<f64, ProviderError> {
        let url = format!("{}/average-distance/{}", self.base_url, planet);
        // The provider's distance API takes the desired units as a POST body.
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "units": "miles" }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::no_data(planet));
        }
        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::malformed(planet, e))?;
        let body: DistanceBody =
            serde_json::from_value(value).map_err(|_| ProviderError::no_data(planet))?;
        Ok(body.distance)
    }

    async fn axial_tilt_degrees(&self, planet: &str) -> Result<f64, ProviderError> {
        let url = format!("{}/axial-tilt/{}", self.base_url, planet);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "units": "degrees" }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::no_data(planet));
        }
        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::malformed(planet, e))?;
        let body: TiltBody =
            serde_json::from_value(value).map_err(|_| ProviderError::no_data(planet))?;
        Ok(body.tilt)
    }
}
