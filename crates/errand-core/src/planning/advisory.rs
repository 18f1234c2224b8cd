//! Rest stop and departure time advice.

use super::leg_text::{parse_kilometers, parse_minutes};
use crate::{
    error::Result,
    models::{
        ClockTime, DepartureSuggestion, ModeSavings, RestStop, RestStopPlan, RouteLeg, RouteMode,
        Task,
    },
};

/// Minutes budgeted per stop when estimating a route's length up front.
const MINUTES_PER_STOP: i32 = 15;

/// Travel buffer added on top of the per-stop estimate.
const BASE_TRAVEL_MINUTES: i32 = 30;

/// No departure is suggested before this time of day.
const EARLIEST_DEPARTURE_MINUTES: i32 = 8 * 60;

/// Two tolls avoided at an average of 15 each.
const ECONOMY_TOLL_SAVINGS: f64 = 2.0 * 15.0;

/// Fuel saved per kilometer driven in economy mode.
const ECONOMY_FUEL_LITERS_PER_KM: f64 = 0.05;

const FUEL_PRICE_PER_LITER: f64 = 5.50;

/// Share of travel time a fast route is assumed to save, in percent.
const FAST_TIME_SAVED_PERCENT: u64 = 20;

/// Suggests breaks once continuous driving reaches `threshold_minutes`.
///
/// The counter resets after each suggested break. No break is suggested
/// after the final leg.
pub fn rest_stops(legs: &[RouteLeg], threshold_minutes: u64) -> Result<RestStopPlan> {
    let mut suggestions = Vec::new();
    let mut since_break = 0;
    let mut total = 0;

    for (index, leg) in legs.iter().enumerate() {
        let minutes = parse_minutes(&leg.duration)?;
        since_break += minutes;
        total += minutes;

        if since_break >= threshold_minutes && index + 1 < legs.len() {
            suggestions.push(RestStop {
                after_stop: leg.task_label.clone(),
                driven_minutes: since_break,
            });
            since_break = 0;
        }
    }

    Ok(RestStopPlan {
        needs_rest: !suggestions.is_empty(),
        suggestions,
        total_driving_minutes: total,
    })
}

/// Suggests when to leave so every stop is reached before it closes.
///
/// The estimate allows a fixed amount of time per task plus a travel buffer,
/// and counts back from the earliest closing time. The suggestion is never
/// earlier than `now` or 08:00.
pub fn suggest_departure(tasks: &[Task], now: ClockTime) -> Result<DepartureSuggestion> {
    let Some(earliest_closing) = tasks.iter().filter_map(|t| t.closing_time).min() else {
        return Ok(DepartureSuggestion::AnyTime);
    };

    let task_count = i32::try_from(tasks.len()).unwrap_or(i32::MAX / MINUTES_PER_STOP);
    let estimate = task_count
        .saturating_mul(MINUTES_PER_STOP)
        .saturating_add(BASE_TRAVEL_MINUTES);
    let latest = earliest_closing.minutes_since_midnight() - estimate;

    let depart_by = latest
        .max(EARLIEST_DEPARTURE_MINUTES)
        .max(now.minutes_since_midnight())
        .min(ClockTime::END_OF_DAY.minutes_since_midnight());

    Ok(DepartureSuggestion::LeaveBy {
        depart_by: ClockTime::from_minutes(depart_by)?,
        earliest_closing,
    })
}

/// Estimates what the selected mode saves over the whole route.
///
/// Every leg counts, including the trip back, and only travel time is
/// considered. Balanced routes have nothing to report.
///
/// # Errors
///
/// Returns [`crate::ErrandError::MalformedLegText`] if any leg's text is not
/// recognised.
pub fn mode_savings(legs: &[RouteLeg], mode: RouteMode) -> Result<Option<ModeSavings>> {
    match mode {
        RouteMode::Balanced => Ok(None),
        RouteMode::Economy => {
            let mut kilometers = 0.0;
            for leg in legs {
                kilometers += parse_kilometers(&leg.distance)?;
            }
            let fuel_saved_liters = kilometers * ECONOMY_FUEL_LITERS_PER_KM;

            Ok(Some(ModeSavings::Economy {
                toll_savings: ECONOMY_TOLL_SAVINGS,
                fuel_saved_liters,
                fuel_cost_saved: fuel_saved_liters * FUEL_PRICE_PER_LITER,
            }))
        }
        RouteMode::Fast => {
            let mut minutes = 0;
            for leg in legs {
                minutes += parse_minutes(&leg.duration)?;
            }

            Ok(Some(ModeSavings::Fast {
                minutes_saved: minutes * FAST_TIME_SAVED_PERCENT / 100,
            }))
        }
    }
}
