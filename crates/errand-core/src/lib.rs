//! Core library for the errand route planner.
//!
//! This crate orders a list of errands, times each leg against a routing
//! service and summarises the resulting itinerary. It also keeps named
//! favorite routes per user in SQLite.
//!
//! # Pipeline
//!
//! 1. [`planning::partition`] (or [`planning::build_tour`] in delivery mode)
//!    fixes the visiting order.
//! 2. [`planning::ItineraryBuilder`] requests one leg per stop from a
//!    [`routing::RouteLegProvider`] and computes arrival times and deadline
//!    warnings.
//! 3. [`planning::totals`] sums duration and distance; the optional
//!    advisories add rest stops and a departure suggestion.
//!
//! [`RoutePlanner`] wires the steps together.
//!
//! # Quick Start
//!
//! ```rust
//! use errand_core::{
//!     models::{ClockTime, Constraint, Task},
//!     params::OrderTasks,
//!     RoutePlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = RoutePlannerBuilder::new()
//!     .with_database_path(Some("errands.db"))
//!     .build()
//!     .await?;
//!
//! let order = planner.order_tasks(&OrderTasks {
//!     tasks: vec![
//!         Task::new("groceries"),
//!         Task::new("bank").with_closing_time("16:00".parse::<ClockTime>()?),
//!         Task::new("coffee").with_constraint(Constraint::First),
//!     ],
//!     ..OrderTasks::default()
//! })?;
//!
//! assert_eq!(order[0].name, "coffee");
//! assert_eq!(order[1].name, "bank");
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planning;
pub mod routing;

// Re-export commonly used types
pub use cache::{CacheStats, TtlCache};
pub use config::Config;
pub use db::Database;
pub use display::{DeleteResult, Favorites, SaveResult, VisitingOrder};
pub use error::{ErrandError, Result};
pub use models::{
    ClockTime, Constraint, Coordinate, FavoriteRoute, Itinerary, RouteLeg, RouteMode, RoutePlan,
    Task, Totals, Warning,
};
pub use params::{FavoriteKey, ListFavorites, MatchFavorite, OrderTasks, PlanRoute, SaveFavorite};
pub use planning::{RoutePlanner, RoutePlannerBuilder};
