//! Task model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{
    clock::{self, ClockTime},
    constraint::{deserialize_constraint, Bucket, Constraint},
    Coordinate,
};

/// A single errand to run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Display label for the errand
    pub name: String,

    /// Category or search term used to find a place for the errand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_name: Option<String>,

    /// Resolved street address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Resolved latitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    /// Resolved longitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,

    /// Time after which the place is assumed closed
    #[serde(
        default,
        deserialize_with = "clock::deserialize_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub closing_time: Option<ClockTime>,

    /// Ordering hint
    #[serde(default, deserialize_with = "deserialize_constraint")]
    pub constraint: Constraint,
}

impl Task {
    /// Creates an unresolved task with no deadline and no ordering hint.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            place_name: None,
            address: None,
            lat: None,
            lng: None,
            closing_time: None,
            constraint: Constraint::None,
        }
    }

    /// Sets the ordering hint.
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraint = constraint;
        self
    }

    /// Sets the closing time.
    pub fn with_closing_time(mut self, closing_time: ClockTime) -> Self {
        self.closing_time = Some(closing_time);
        self
    }

    /// Sets the resolved coordinates.
    pub fn at(mut self, location: Coordinate) -> Self {
        self.lat = Some(location.lat);
        self.lng = Some(location.lng);
        self
    }

    /// Attaches the outcome of location resolution.
    pub fn resolve(&mut self, address: impl Into<String>, location: Coordinate) {
        self.address = Some(address.into());
        self.lat = Some(location.lat);
        self.lng = Some(location.lng);
    }

    /// Resolved coordinates, if both latitude and longitude are known.
    pub fn location(&self) -> Option<Coordinate> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinate { lat, lng }),
            _ => None,
        }
    }

    /// Visiting bucket derived from the constraint and the closing time.
    ///
    /// `first` and `last` win over any deadline; `urgent` and a bare closing
    /// time share the deadline bucket.
    pub fn bucket(&self) -> Bucket {
        match self.constraint {
            Constraint::First => Bucket::First,
            Constraint::Last => Bucket::Last,
            Constraint::Urgent => Bucket::Deadline,
            Constraint::None if self.closing_time.is_some() => Bucket::Deadline,
            Constraint::None => Bucket::Normal,
        }
    }
}
