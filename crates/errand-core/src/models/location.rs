//! Geographic coordinates.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ErrandError, Result};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Straight-line distance in raw degree units.
    ///
    /// This is a planar approximation and not a geodesic distance; it is only
    /// meaningful for comparing nearby candidates against each other.
    pub fn planar_distance(&self, other: &Coordinate) -> f64 {
        ((self.lat - other.lat).powi(2) + (self.lng - other.lng).powi(2)).sqrt()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

impl FromStr for Coordinate {
    type Err = ErrandError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            ErrandError::invalid_input("coordinate")
                .with_reason(format!("expected LAT,LNG, got '{s}'"))
        };

        let (lat, lng) = s.split_once(',').ok_or_else(invalid)?;
        let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;

        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(ErrandError::invalid_input("coordinate")
                .with_reason(format!("'{s}' is outside valid latitude/longitude ranges")));
        }

        Ok(Self { lat, lng })
    }
}
