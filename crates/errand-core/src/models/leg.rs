//! Route leg and itinerary models.

use serde::{Deserialize, Serialize};

use super::{ClockTime, Coordinate};

/// One traversal segment of a finished itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteLeg {
    /// Name of the task reached at the end of this leg
    pub task_label: String,

    /// Address of the destination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Distance as reported by the routing provider (e.g. "2.3 km")
    pub distance: String,

    /// Duration as reported by the routing provider (e.g. "1 hour 5 mins")
    pub duration: String,

    /// Distance in meters
    pub distance_meters: u64,

    /// Travel time in seconds
    pub duration_seconds: u64,

    /// Computed arrival time at the destination
    pub arrival_time: ClockTime,

    /// Closing time of the destination, absent on the return leg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_time: Option<ClockTime>,

    pub start_location: Coordinate,

    pub end_location: Coordinate,

    /// Opaque encoded path returned by the routing provider
    #[serde(default)]
    pub polyline: String,

    /// Whether this is the synthetic leg back to the starting point
    #[serde(default)]
    pub is_return: bool,
}

/// Advisory emitted while planning.
///
/// Warnings never change control flow; they are reported alongside the
/// itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// The stop will be reached after it closes
    Deadline {
        task: String,
        arrival: ClockTime,
        closing: ClockTime,
    },

    /// Stops were ordered by nearest-neighbour delivery tour
    DeliveryMode,

    /// Route avoids tolls and highways
    EconomyMode,

    /// Route favours travel time
    FastMode,
}

/// Ordered legs of a planned route plus the warnings raised while building
/// them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Itinerary {
    pub legs: Vec<RouteLeg>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Warning>,
}

impl Itinerary {
    /// Legs that end at a task, excluding the return leg.
    pub fn task_legs(&self) -> &[RouteLeg] {
        match self.legs.last() {
            Some(last) if last.is_return => &self.legs[..self.legs.len() - 1],
            _ => &self.legs,
        }
    }

    /// The synthetic leg back to the start, if present.
    pub fn return_leg(&self) -> Option<&RouteLeg> {
        self.legs.last().filter(|leg| leg.is_return)
    }

    /// Deadline warnings only.
    pub fn missed_deadlines(&self) -> impl Iterator<Item = &Warning> {
        self.warnings
            .iter()
            .filter(|w| matches!(w, Warning::Deadline { .. }))
    }
}
