//! Route sequencing and timing.
//!
//! This module holds the algorithms that turn a list of errands into a timed
//! itinerary, plus the [`RoutePlanner`] facade that ties them together.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   partition /   │    │   Itinerary     │    │     totals /    │
//! │   build_tour    │───▶│    Builder      │───▶│    advisories   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   visiting order        timed legs via          summaries
//!                          RouteLegProvider
//! ```
//!
//! ## Submodules
//!
//! - [`partition`]: constraint and deadline ordering
//! - [`tour`]: greedy nearest-neighbour ordering for delivery mode
//! - [`itinerary`]: leg-by-leg timing against a route provider
//! - [`totals`]: duration and distance summaries
//! - [`advisory`]: rest stops, departure suggestions and mode savings
//! - [`builder`]: factory for configured [`RoutePlanner`] instances
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use errand_core::{
//!     config::Config,
//!     models::{ClockTime, Coordinate, Task},
//!     params::PlanRoute,
//!     routing::{CachedRouteProvider, DirectionsClient},
//!     RoutePlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load(None)?;
//! let provider = CachedRouteProvider::new(
//!     DirectionsClient::from_config(&config.routing)?,
//!     config.cache.build(),
//! );
//!
//! let planner = RoutePlannerBuilder::new()
//!     .with_provider(Arc::new(provider))
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .plan_route(&PlanRoute {
//!         tasks: vec![Task::new("pharmacy").at(Coordinate::new(-23.55, -46.64))],
//!         origin: Coordinate::new(-23.56, -46.65),
//!         departure: Some("15:00".parse::<ClockTime>()?),
//!         ..PlanRoute::default()
//!     })
//!     .await?;
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use crate::{models::TravelMode, routing::RouteLegProvider};

pub mod advisory;
pub mod builder;
pub mod favorite_ops;
pub mod itinerary;
pub mod leg_text;
pub mod partition;
pub mod route_ops;
pub mod totals;
pub mod tour;

#[cfg(test)]
mod tests;

pub use advisory::{mode_savings, rest_stops, suggest_departure};
pub use builder::RoutePlannerBuilder;
pub use favorite_ops::favorite_overlap;
pub use itinerary::ItineraryBuilder;
pub use partition::partition;
pub use totals::totals;
pub use tour::build_tour;

/// Minutes spent at each stop before leaving for the next one.
pub const DWELL_MINUTES: u64 = 10;

/// Label of the synthetic final leg back to the starting point.
pub const RETURN_LEG_LABEL: &str = "Return to start";

/// Main planner interface for routing errands and managing favorites.
pub struct RoutePlanner {
    pub(crate) provider: Option<Arc<dyn RouteLegProvider>>,
    pub(crate) db_path: PathBuf,
    pub(crate) travel_mode: TravelMode,
    pub(crate) rest_stop_minutes: u64,
}
