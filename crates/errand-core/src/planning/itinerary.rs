//! Leg-by-leg itinerary timing.

use jiff::{civil::DateTime, SignedDuration};
use log::debug;

use super::{DWELL_MINUTES, RETURN_LEG_LABEL};
use crate::{
    error::{ErrandError, Result},
    models::{ClockTime, Coordinate, Itinerary, RouteLeg, Task, TravelMode, Warning},
    routing::{ProviderLeg, RouteLegProvider, RoutePreferences, RouteRequest},
};

/// Walks an ordered task list, timing each leg against a route provider.
///
/// Requests are issued strictly one after another: each leg starts where
/// the previous one ended, and its arrival time depends on every leg before
/// it.
pub struct ItineraryBuilder<'a, P: ?Sized> {
    provider: &'a P,
    origin: Coordinate,
    departure: DateTime,
    travel_mode: TravelMode,
    preferences: RoutePreferences,
}

impl<'a, P: RouteLegProvider + ?Sized> ItineraryBuilder<'a, P> {
    /// Creates a builder starting and ending at `origin`, leaving at
    /// `departure`.
    pub fn new(provider: &'a P, origin: Coordinate, departure: DateTime) -> Self {
        Self {
            provider,
            origin,
            departure,
            travel_mode: TravelMode::default(),
            preferences: RoutePreferences::default(),
        }
    }

    pub fn with_travel_mode(mut self, travel_mode: TravelMode) -> Self {
        self.travel_mode = travel_mode;
        self
    }

    /// Routing flags forwarded verbatim with every leg request.
    pub fn with_preferences(mut self, preferences: RoutePreferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Builds the itinerary for `ordered`, in that order.
    ///
    /// Tasks without coordinates are skipped. The result holds one leg per
    /// resolved task followed by a single leg back to the origin.
    ///
    /// # Errors
    ///
    /// Returns [`ErrandError::RoutingUnavailable`] as soon as any leg,
    /// including the return leg, cannot be routed. No partial itinerary is
    /// returned.
    pub async fn build(&self, ordered: &[Task]) -> Result<Itinerary> {
        // Closing times refer to the day of departure.
        let closing_day = self.departure.date();
        let dwell = SignedDuration::from_mins(DWELL_MINUTES as i64);

        let mut current = self.origin;
        let mut clock = self.departure;
        let mut legs = Vec::with_capacity(ordered.len() + 1);
        let mut warnings = Vec::new();

        for task in ordered {
            let Some(destination) = task.location() else {
                debug!("Skipping '{}': location unresolved", task.name);
                continue;
            };

            let leg = self.request(current, destination).await?;
            clock = advance(clock, SignedDuration::from_secs(to_secs(leg.duration_seconds)))?;
            let arrival = ClockTime::from_time(clock.time());

            if let Some(closing) = task.closing_time {
                // Lateness is judged at the minute precision arrivals are reported in.
                let arrived = clock.date().to_datetime(arrival.as_time());
                if arrived > closing_day.to_datetime(closing.as_time()) {
                    warnings.push(Warning::Deadline {
                        task: task.name.clone(),
                        arrival,
                        closing,
                    });
                }
            }

            let address = task.address.clone().or_else(|| leg.end_address.clone());
            let mut stop = route_leg(task.name.clone(), address, leg, arrival, current, destination);
            stop.closing_time = task.closing_time;
            legs.push(stop);

            clock = advance(clock, dwell)?;
            current = destination;
        }

        let leg = self.request(current, self.origin).await?;
        clock = advance(clock, SignedDuration::from_secs(to_secs(leg.duration_seconds)))?;
        let address = leg.end_address.clone();
        let mut home = route_leg(
            RETURN_LEG_LABEL.to_string(),
            address,
            leg,
            ClockTime::from_time(clock.time()),
            current,
            self.origin,
        );
        home.is_return = true;
        legs.push(home);

        Ok(Itinerary { legs, warnings })
    }

    async fn request(&self, from: Coordinate, to: Coordinate) -> Result<ProviderLeg> {
        let request = RouteRequest {
            origin: from,
            destination: to,
            travel_mode: self.travel_mode,
            preferences: self.preferences,
        };

        self.provider
            .route_leg(&request)
            .await?
            .ok_or_else(|| ErrandError::routing(from, to).because("provider returned no route"))
    }
}

fn route_leg(
    task_label: String,
    address: Option<String>,
    leg: ProviderLeg,
    arrival_time: ClockTime,
    start_location: Coordinate,
    end_location: Coordinate,
) -> RouteLeg {
    RouteLeg {
        task_label,
        address,
        distance: leg.distance_text,
        duration: leg.duration_text,
        distance_meters: leg.distance_meters,
        duration_seconds: leg.duration_seconds,
        arrival_time,
        closing_time: None,
        start_location,
        end_location,
        polyline: leg.polyline,
        is_return: false,
    }
}

fn to_secs(seconds: u64) -> i64 {
    i64::try_from(seconds).unwrap_or(i64::MAX)
}

fn advance(clock: DateTime, by: SignedDuration) -> Result<DateTime> {
    clock.checked_add(by).map_err(|e| {
        ErrandError::invalid_input("duration").with_reason(format!("itinerary clock overflow: {e}"))
    })
}
