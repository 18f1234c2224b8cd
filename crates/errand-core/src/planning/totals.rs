//! Itinerary totals.

use super::{
    leg_text::{parse_kilometers, parse_minutes},
    DWELL_MINUTES,
};
use crate::{
    error::Result,
    models::{RouteLeg, Totals},
};

/// Sums travel time and distance over every leg except the last.
///
/// The last leg is the trip back to the start and is not counted. Each
/// counted leg also adds the fixed dwell time spent at its stop. Durations
/// and distances come from the provider's text, not the numeric fields.
///
/// # Errors
///
/// Returns [`crate::ErrandError::MalformedLegText`] if any counted leg's
/// text is not recognised.
pub fn totals(legs: &[RouteLeg]) -> Result<Totals> {
    let counted = &legs[..legs.len().saturating_sub(1)];

    let mut minutes = 0;
    let mut kilometers = 0.0;
    for leg in counted {
        minutes += parse_minutes(&leg.duration)?;
        kilometers += parse_kilometers(&leg.distance)?;
    }
    minutes += DWELL_MINUTES * counted.len() as u64;

    Ok(Totals {
        minutes,
        kilometers,
    })
}
