//! Planning report returned to callers.

use serde::{Deserialize, Serialize};

use super::{ClockTime, FavoriteMatch, Itinerary, Task};

/// Summed travel time and distance of an itinerary.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    /// Travel plus dwell minutes, excluding the return leg
    pub minutes: u64,

    /// Travel distance in kilometers, excluding the return leg
    pub kilometers: f64,
}

impl Totals {
    /// Human-readable duration, e.g. `"1h 35min"` or `"45min"`.
    pub fn duration_label(&self) -> String {
        let hours = self.minutes / 60;
        let minutes = self.minutes % 60;
        if hours > 0 {
            format!("{hours}h {minutes}min")
        } else {
            format!("{minutes}min")
        }
    }

    /// Human-readable distance with one decimal, e.g. `"2.5 km"`.
    pub fn distance_label(&self) -> String {
        format!("{:.1} km", self.kilometers)
    }
}

/// A suggested break after a long stretch of driving.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RestStop {
    /// Task after which to take the break
    pub after_stop: String,

    /// Minutes driven since the previous break
    pub driven_minutes: u64,
}

/// Rest stop advice for an itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RestStopPlan {
    pub needs_rest: bool,
    pub suggestions: Vec<RestStop>,
    pub total_driving_minutes: u64,
}

/// Advice on when to set off.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DepartureSuggestion {
    /// No stop has a closing time
    AnyTime,

    /// Leaving by `depart_by` should reach every stop before it closes
    LeaveBy {
        depart_by: ClockTime,
        earliest_closing: ClockTime,
    },
}

/// Estimated benefit of the selected route mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ModeSavings {
    /// Avoiding tolls and highways
    Economy {
        toll_savings: f64,
        fuel_saved_liters: f64,
        fuel_cost_saved: f64,
    },

    /// Trading distance for travel time
    Fast { minutes_saved: u64 },
}

impl ModeSavings {
    /// Money saved in total; zero for time-based savings.
    pub fn total_cost_saved(&self) -> f64 {
        match self {
            ModeSavings::Economy {
                toll_savings,
                fuel_cost_saved,
                ..
            } => toll_savings + fuel_cost_saved,
            ModeSavings::Fast { .. } => 0.0,
        }
    }
}

/// Complete result of planning a route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutePlan {
    /// Tasks in visiting order
    pub order: Vec<Task>,

    pub itinerary: Itinerary,

    pub totals: Totals,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings: Option<ModeSavings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_stops: Option<RestStopPlan>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure: Option<DepartureSuggestion>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_match: Option<FavoriteMatch>,
}
