//! Favorite route models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Itinerary;

/// A named route saved by a user for reuse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteRoute {
    /// Unique identifier for the favorite
    pub id: u64,

    /// Owner of the favorite
    pub user_id: String,

    /// Name chosen by the user, unique per user
    pub name: String,

    /// Names of the tasks making up the route
    pub task_names: Vec<String>,

    /// Itinerary captured when the favorite was saved, if one was planned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<Itinerary>,

    /// How many times the favorite has been matched by a new request
    pub usage_count: u32,

    /// Timestamp when the favorite was saved (UTC)
    pub created_at: Timestamp,

    /// Timestamp of the most recent match (UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<Timestamp>,
}

/// A saved favorite that resembles the tasks being planned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteMatch {
    /// Name of the matching favorite
    pub name: String,

    /// Share of the current task names also present in the favorite (0.0-1.0)
    pub overlap: f64,

    /// Usage count after recording this match
    pub usage_count: u32,
}
