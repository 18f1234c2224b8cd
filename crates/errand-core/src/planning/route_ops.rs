//! Route planning operations for the RoutePlanner.

use jiff::{civil::DateTime, Zoned};
use log::info;

use super::{
    advisory::{mode_savings, rest_stops, suggest_departure},
    build_tour, partition, totals, ItineraryBuilder, RoutePlanner,
};
use crate::{
    error::{ErrandError, Result},
    models::{ClockTime, RouteMode, RoutePlan, Task, Warning},
    params::{MatchFavorite, OrderTasks, PlanRoute},
};

impl RoutePlanner {
    /// Orders, routes and times a list of errands.
    ///
    /// Tasks are ordered by constraint and deadline, or by proximity in
    /// delivery mode, then every leg is requested from the route provider in
    /// visiting order. Economy and fast modes report their estimated savings.
    /// Rest stops, a departure suggestion and a favorite match are added when
    /// requested.
    ///
    /// # Errors
    ///
    /// Returns [`ErrandError::Configuration`] if the planner has no route
    /// provider, [`ErrandError::RoutingUnavailable`] if any leg cannot be
    /// routed and [`ErrandError::MalformedLegText`] if the provider's text
    /// cannot be summed.
    pub async fn plan_route(&self, params: &PlanRoute) -> Result<RoutePlan> {
        let provider = self.provider.as_deref().ok_or_else(|| ErrandError::Configuration {
            message: "No route provider configured".to_string(),
        })?;

        let mut warnings = Vec::new();
        match params.mode {
            RouteMode::Balanced => {}
            RouteMode::Economy => warnings.push(Warning::EconomyMode),
            RouteMode::Fast => warnings.push(Warning::FastMode),
        }
        info!("Planning {} tasks in {} mode", params.tasks.len(), params.mode.as_str());

        let order = if params.delivery {
            warnings.push(Warning::DeliveryMode);
            build_tour(params.origin, params.tasks.clone())
        } else {
            partition(params.tasks.clone())
        };

        let mut itinerary = ItineraryBuilder::new(provider, params.origin, departure(params.departure))
            .with_travel_mode(self.travel_mode)
            .with_preferences(params.mode.preferences())
            .build(&order)
            .await?;
        warnings.append(&mut itinerary.warnings);
        itinerary.warnings = warnings;

        let totals = totals(&itinerary.legs)?;
        let savings = mode_savings(&itinerary.legs, params.mode)?;

        let rest_stops = if params.rest_stops {
            Some(rest_stops(&itinerary.legs, self.rest_stop_minutes)?)
        } else {
            None
        };

        let departure = if params.suggest_departure {
            let now = ClockTime::from_time(Zoned::now().time());
            Some(suggest_departure(&params.tasks, now)?)
        } else {
            None
        };

        let favorite_match = match &params.user_id {
            Some(user_id) => {
                self.match_favorite(&MatchFavorite {
                    user_id: user_id.clone(),
                    task_names: params.tasks.iter().map(|t| t.name.clone()).collect(),
                })
                .await?
            }
            None => None,
        };

        Ok(RoutePlan {
            order,
            itinerary,
            totals,
            savings,
            rest_stops,
            departure,
            favorite_match,
        })
    }

    /// Computes the visiting order without contacting the route provider.
    ///
    /// # Errors
    ///
    /// Returns [`ErrandError::InvalidInput`] if delivery ordering is asked
    /// for without an origin.
    pub fn order_tasks(&self, params: &OrderTasks) -> Result<Vec<Task>> {
        if !params.delivery {
            return Ok(partition(params.tasks.clone()));
        }

        let origin = params.origin.ok_or_else(|| {
            ErrandError::invalid_input("origin").with_reason("required for delivery ordering")
        })?;
        Ok(build_tour(origin, params.tasks.clone()))
    }
}

/// Departure as a local civil date-time: today at `at`, or right now.
fn departure(at: Option<ClockTime>) -> DateTime {
    let now = Zoned::now();
    match at {
        Some(time) => now.date().to_datetime(time.as_time()),
        None => now.datetime(),
    }
}
