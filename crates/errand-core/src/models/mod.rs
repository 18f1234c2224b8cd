//! Data models for errands, route legs and planning reports.
//!
//! This module contains the core domain models of the errand planner.
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures separate from
//! presentation logic.
//!
//! # Model Overview
//!
//! - [`Task`]: a single errand with an optional location, closing time and
//!   ordering [`Constraint`]
//! - [`RouteLeg`]: one traversal segment, with provider text and a computed
//!   arrival time
//! - [`Itinerary`]: the ordered legs plus advisory [`Warning`]s
//! - [`RoutePlan`]: everything reported back for one planning request
//! - [`FavoriteRoute`]: a named route persisted per user
//!
//! # Examples
//!
//! ```rust
//! use errand_core::models::{Bucket, ClockTime, Constraint, Coordinate, Task};
//!
//! let bank = Task::new("bank")
//!     .with_closing_time("16:00".parse::<ClockTime>().unwrap())
//!     .at(Coordinate::new(-23.56, -46.65));
//!
//! assert_eq!(bank.bucket(), Bucket::Deadline);
//! assert!(bank.location().is_some());
//!
//! let bakery = Task::new("bakery").with_constraint(Constraint::Last);
//! assert_eq!(bakery.bucket(), Bucket::Last);
//! ```

pub mod clock;
pub mod constraint;
pub mod favorite;
pub mod leg;
pub mod location;
pub mod report;
pub mod task;


pub use clock::ClockTime;
pub use constraint::{Bucket, Constraint, RouteMode, TravelMode};
pub use favorite::{FavoriteMatch, FavoriteRoute};
pub use leg::{Itinerary, RouteLeg, Warning};
pub use location::Coordinate;
pub use report::{DepartureSuggestion, ModeSavings, RestStop, RestStopPlan, RoutePlan, Totals};
pub use task::Task;
