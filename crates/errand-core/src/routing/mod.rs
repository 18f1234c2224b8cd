//! Routing collaborator boundary.
//!
//! The itinerary builder never talks to a mapping service directly. It asks a
//! [`RouteLegProvider`] for one point-to-point leg at a time and treats an
//! empty answer as fatal. This module defines that boundary and ships two
//! implementations:
//!
//! - [`DirectionsClient`]: an HTTP client for the Google Directions JSON API
//! - [`CachedRouteProvider`]: a decorator that serves repeated requests from
//!   a shared [`RouteCache`]

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{Coordinate, TravelMode},
};

mod cached;
mod directions;

pub use cached::{CachedRouteProvider, RouteCache};
pub use directions::DirectionsClient;

/// Routing flags passed through to the provider unchanged.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RoutePreferences {
    pub avoid_tolls: bool,
    pub avoid_highways: bool,
    /// Keep stops in the requested order rather than letting the provider
    /// reorder waypoints
    pub deprioritize_reordering: bool,
}

/// A single point-to-point leg request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub travel_mode: TravelMode,
    pub preferences: RoutePreferences,
}

impl RouteRequest {
    /// Stable key identifying this request, rounding coordinates to six
    /// decimals.
    pub fn cache_key(&self) -> String {
        let p = self.preferences;
        format!(
            "{}|{}|{}|{}{}{}",
            self.origin,
            self.destination,
            self.travel_mode.as_str(),
            u8::from(p.avoid_tolls),
            u8::from(p.avoid_highways),
            u8::from(p.deprioritize_reordering),
        )
    }
}

/// A leg as reported by the routing provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderLeg {
    pub duration_seconds: u64,
    pub distance_meters: u64,
    /// Human-readable duration, e.g. "1 hour 5 mins"
    pub duration_text: String,
    /// Human-readable distance, e.g. "12.3 km"
    pub distance_text: String,
    pub start_location: Coordinate,
    pub end_location: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_address: Option<String>,
    /// Opaque encoded path
    #[serde(default)]
    pub polyline: String,
}

/// Source of travel legs between two coordinates.
///
/// `Ok(None)` means the provider answered but found no route; errors are
/// reserved for failures to get an answer at all. Callers in this crate
/// treat both as fatal for the itinerary being built.
#[async_trait]
pub trait RouteLegProvider: Send + Sync {
    async fn route_leg(&self, request: &RouteRequest) -> Result<Option<ProviderLeg>>;
}

#[async_trait]
impl<P: RouteLegProvider + ?Sized> RouteLegProvider for Arc<P> {
    async fn route_leg(&self, request: &RouteRequest) -> Result<Option<ProviderLeg>> {
        (**self).route_leg(request).await
    }
}
