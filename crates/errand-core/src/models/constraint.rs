//! Ordering hints, visiting buckets and routing modes.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::routing::RoutePreferences;

/// Soft ordering hint attached to a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Constraint {
    /// Visit before anything else
    First,

    /// Visit after everything else
    Last,

    /// Visit early, ordered by closing time
    Urgent,

    /// No explicit hint
    #[default]
    None,
}

impl FromStr for Constraint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" => Ok(Constraint::First),
            "last" => Ok(Constraint::Last),
            "urgent" => Ok(Constraint::Urgent),
            "none" | "" => Ok(Constraint::None),
            _ => Err(format!("Invalid constraint: {s}")),
        }
    }
}

impl Constraint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Constraint::First => "first",
            Constraint::Last => "last",
            Constraint::Urgent => "urgent",
            Constraint::None => "none",
        }
    }
}

/// Deserializes a constraint leniently.
///
/// Matching is case-insensitive. `null` and unrecognised hints both become
/// [`Constraint::None`], so the task is ordered as a normal stop.
pub fn deserialize_constraint<'de, D>(deserializer: D) -> Result<Constraint, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|value| value.parse().ok())
        .unwrap_or_default())
}

/// Visiting bucket a task falls into.
///
/// The derived ordering is the visiting precedence: every `First` task comes
/// before every `Deadline` task, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    First,
    Deadline,
    Normal,
    Last,
}

/// Route preference profile requested by the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RouteMode {
    #[default]
    Balanced,

    /// Avoid tolls and highways
    Economy,

    /// Prefer travel time over distance
    Fast,
}

impl FromStr for RouteMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "balanced" => Ok(RouteMode::Balanced),
            "economy" => Ok(RouteMode::Economy),
            "fast" => Ok(RouteMode::Fast),
            _ => Err(format!("Invalid route mode: {s}")),
        }
    }
}

impl RouteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteMode::Balanced => "balanced",
            RouteMode::Economy => "economy",
            RouteMode::Fast => "fast",
        }
    }

    /// Routing flags this mode asks the provider for.
    pub fn preferences(&self) -> RoutePreferences {
        match self {
            RouteMode::Balanced => RoutePreferences::default(),
            RouteMode::Economy => RoutePreferences {
                avoid_tolls: true,
                avoid_highways: true,
                ..RoutePreferences::default()
            },
            RouteMode::Fast => RoutePreferences {
                deprioritize_reordering: true,
                ..RoutePreferences::default()
            },
        }
    }
}

/// Means of travel between stops.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit => "transit",
        }
    }
}
