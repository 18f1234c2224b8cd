//! Parameter structures for planner operations
//!
//! These structures are shared by every interface to the planner and carry no
//! framework-specific derives. Interface layers (the CLI today) define their
//! own argument types with clap or serde attributes and convert them into the
//! core parameters:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │
//! │  (clap derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```ignore
//! // In the CLI crate
//! #[derive(Args)]
//! pub struct FavoriteNameArgs {
//!     pub name: String,
//!     #[arg(long)]
//!     pub user: Option<String>,
//! }
//!
//! impl From<FavoriteNameArgs> for FavoriteKey {
//!     fn from(args: FavoriteNameArgs) -> Self {
//!         FavoriteKey::new(args.user, args.name)
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{ClockTime, Coordinate, Itinerary, RouteMode, Task};

/// User id applied when a request does not name one.
pub const DEFAULT_USER: &str = "default_user";

fn default_user() -> String {
    DEFAULT_USER.to_string()
}

/// Parameters for planning a route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanRoute {
    /// Errands to visit
    pub tasks: Vec<Task>,

    /// Where the route starts and ends
    pub origin: Coordinate,

    /// Departure time today; the current local time when absent
    #[serde(default)]
    pub departure: Option<ClockTime>,

    /// Route preference profile
    #[serde(default)]
    pub mode: RouteMode,

    /// Order by proximity instead of by constraints
    #[serde(default)]
    pub delivery: bool,

    /// Include rest stop suggestions
    #[serde(default)]
    pub rest_stops: bool,

    /// Include a departure time suggestion
    #[serde(default)]
    pub suggest_departure: bool,

    /// Look for a similar saved favorite for this user
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Parameters for ordering tasks without routing them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderTasks {
    pub tasks: Vec<Task>,

    /// Required when `delivery` is set
    #[serde(default)]
    pub origin: Option<Coordinate>,

    #[serde(default)]
    pub delivery: bool,
}

/// Parameters for saving a favorite route.
///
/// Saving under an existing name replaces the stored tasks and itinerary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFavorite {
    #[serde(default = "default_user")]
    pub user_id: String,

    pub name: String,

    pub task_names: Vec<String>,

    #[serde(default)]
    pub itinerary: Option<Itinerary>,
}

/// Identifies a single favorite route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteKey {
    #[serde(default = "default_user")]
    pub user_id: String,

    pub name: String,
}

impl FavoriteKey {
    /// Builds a key, falling back to [`DEFAULT_USER`].
    pub fn new(user_id: Option<String>, name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.unwrap_or_else(default_user),
            name: name.into(),
        }
    }
}

/// Parameters for listing a user's favorites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFavorites {
    #[serde(default = "default_user")]
    pub user_id: String,
}

impl Default for ListFavorites {
    fn default() -> Self {
        Self {
            user_id: default_user(),
        }
    }
}

/// Parameters for finding a favorite similar to a set of task names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchFavorite {
    #[serde(default = "default_user")]
    pub user_id: String,

    pub task_names: Vec<String>,
}
