//! HTTP client for the Google Directions JSON API.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use super::{ProviderLeg, RouteLegProvider, RouteRequest};
use crate::{
    config::RoutingConfig,
    error::{ConfigResultExt, ErrandError, Result},
    models::Coordinate,
};

/// Directions API response statuses that mean "asked fine, no route".
const NO_ROUTE_STATUSES: &[&str] = &["ZERO_RESULTS", "NOT_FOUND"];

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    #[serde(default)]
    legs: Vec<DirectionsLeg>,
    #[serde(default)]
    overview_polyline: Option<EncodedPolyline>,
}

#[derive(Debug, Deserialize)]
struct EncodedPolyline {
    points: String,
}

#[derive(Debug, Deserialize)]
struct DirectionsLeg {
    distance: TextValue,
    duration: TextValue,
    start_location: Coordinate,
    end_location: Coordinate,
    #[serde(default)]
    end_address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    text: String,
    value: u64,
}

/// Directions API client with a per-request timeout.
pub struct DirectionsClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl DirectionsClient {
    /// Creates a client for the given endpoint and key.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .config_context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Creates a client from routing configuration, reading the API key
    /// from the configured environment variable.
    pub fn from_config(config: &RoutingConfig) -> Result<Self> {
        let api_key = config.api_key()?;
        Self::new(
            config.base_url.clone(),
            api_key,
            Duration::from_millis(config.timeout_ms),
        )
    }

    fn query(&self, request: &RouteRequest) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("origin", request.origin.to_string()),
            ("destination", request.destination.to_string()),
            ("mode", request.travel_mode.as_str().to_string()),
            ("departure_time", "now".to_string()),
            ("key", self.api_key.clone()),
        ];

        let prefs = request.preferences;
        let avoid: Vec<&str> = [
            (prefs.avoid_tolls, "tolls"),
            (prefs.avoid_highways, "highways"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();
        if !avoid.is_empty() {
            query.push(("avoid", avoid.join("|")));
        }

        // Single origin/destination requests carry no waypoints to reorder.
        if prefs.deprioritize_reordering {
            debug!("Waypoint reordering already disabled for point-to-point request");
        }

        query
    }
}

#[async_trait]
impl RouteLegProvider for DirectionsClient {
    async fn route_leg(&self, request: &RouteRequest) -> Result<Option<ProviderLeg>> {
        let unavailable = || ErrandError::routing(request.origin, request.destination);

        debug!(
            "Requesting directions {} -> {} ({})",
            request.origin,
            request.destination,
            request.travel_mode.as_str()
        );

        let response = self
            .http
            .get(&self.base_url)
            .query(&self.query(request))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    unavailable().because("request timed out")
                } else {
                    unavailable().because(format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(unavailable().because(format!("HTTP status {status}")));
        }

        let body: DirectionsResponse = response
            .json()
            .await
            .map_err(|e| unavailable().because(format!("invalid response body: {e}")))?;

        leg_from_response(request, body)
    }
}

/// Interprets a decoded Directions response for `request`.
fn leg_from_response(request: &RouteRequest, body: DirectionsResponse) -> Result<Option<ProviderLeg>> {
    if NO_ROUTE_STATUSES.contains(&body.status.as_str()) {
        return Ok(None);
    }

    if body.status != "OK" {
        let detail = body
            .error_message
            .map(|m| format!("{}: {m}", body.status))
            .unwrap_or(body.status);
        return Err(ErrandError::routing(request.origin, request.destination).because(detail));
    }

    let Some(route) = body.routes.into_iter().next() else {
        return Ok(None);
    };
    let polyline = route
        .overview_polyline
        .map(|p| p.points)
        .unwrap_or_default();
    let Some(leg) = route.legs.into_iter().next() else {
        return Ok(None);
    };

    Ok(Some(ProviderLeg {
        duration_seconds: leg.duration.value,
        distance_meters: leg.distance.value,
        duration_text: leg.duration.text,
        distance_text: leg.distance.text,
        start_location: leg.start_location,
        end_location: leg.end_location,
        end_address: leg.end_address,
        polyline,
    }))
}
