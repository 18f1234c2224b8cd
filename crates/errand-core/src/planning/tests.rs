//! Tests for the planning module.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use jiff::{
    civil::{date, DateTime},
    Zoned,
};

use super::*;
use crate::{
    error::{ErrandError, Result},
    models::{
        ClockTime, Constraint, Coordinate, DepartureSuggestion, ModeSavings, RouteLeg, RouteMode,
        Task, Warning,
    },
    params::{FavoriteKey, ListFavorites, MatchFavorite, OrderTasks, PlanRoute, SaveFavorite},
    routing::{ProviderLeg, RouteLegProvider, RoutePreferences, RouteRequest},
};

/// Provider answering from a fixed script and recording every request.
struct ScriptedProvider {
    responses: Mutex<VecDeque<Result<Option<ProviderLeg>>>>,
    requests: Mutex<Vec<RouteRequest>>,
}

impl ScriptedProvider {
    fn new(responses: Vec<Result<Option<ProviderLeg>>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request gets a leg taking `minutes`.
    fn uniform(minutes: u64, count: usize) -> Self {
        Self::new(
            (0..count)
                .map(|_| Ok(Some(provider_leg(minutes * 60, &format!("{minutes} mins"), "1.0 km"))))
                .collect(),
        )
    }

    fn requests(&self) -> Vec<RouteRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RouteLegProvider for ScriptedProvider {
    async fn route_leg(&self, request: &RouteRequest) -> Result<Option<ProviderLeg>> {
        self.requests.lock().unwrap().push(*request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("provider script exhausted")
    }
}

fn provider_leg(seconds: u64, duration: &str, distance: &str) -> ProviderLeg {
    ProviderLeg {
        duration_seconds: seconds,
        distance_meters: 1000,
        duration_text: duration.to_string(),
        distance_text: distance.to_string(),
        start_location: Coordinate::new(9.0, 9.0),
        end_location: Coordinate::new(9.0, 9.0),
        end_address: Some("Provider Street 1".to_string()),
        polyline: "abc".to_string(),
    }
}

fn departure_at(hour: i8, minute: i8) -> DateTime {
    date(2025, 1, 6).at(hour, minute, 0, 0)
}

fn clock(s: &str) -> ClockTime {
    s.parse().unwrap()
}

fn names(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.name.as_str()).collect()
}

fn route_leg(duration: &str, distance: &str, is_return: bool) -> RouteLeg {
    RouteLeg {
        task_label: if is_return { RETURN_LEG_LABEL } else { "stop" }.to_string(),
        address: None,
        distance: distance.to_string(),
        duration: duration.to_string(),
        distance_meters: 0,
        duration_seconds: 0,
        arrival_time: clock("12:00"),
        closing_time: None,
        start_location: Coordinate::default(),
        end_location: Coordinate::default(),
        polyline: String::new(),
        is_return,
    }
}

const ORIGIN: Coordinate = Coordinate { lat: 0.0, lng: 0.0 };

// Ordering

#[test]
fn test_partition_buckets_and_deadlines() {
    let tasks = vec![
        Task::new("A"),
        Task::new("B").with_constraint(Constraint::First),
        Task::new("C")
            .with_constraint(Constraint::Urgent)
            .with_closing_time(clock("12:00")),
        Task::new("D")
            .with_constraint(Constraint::Urgent)
            .with_closing_time(clock("09:00")),
    ];

    assert_eq!(names(&partition(tasks)), ["B", "D", "C", "A"]);
}

#[test]
fn test_partition_last_beats_deadline_and_is_stable() {
    let tasks = vec![
        Task::new("late").with_constraint(Constraint::Last),
        Task::new("n1"),
        Task::new("shop").with_closing_time(clock("18:00")),
        Task::new("urgent-no-time").with_constraint(Constraint::Urgent),
        Task::new("n2"),
        Task::new("last-with-deadline")
            .with_constraint(Constraint::Last)
            .with_closing_time(clock("08:00")),
        Task::new("first-with-deadline")
            .with_constraint(Constraint::First)
            .with_closing_time(clock("07:00")),
    ];

    let ordered = partition(tasks);
    assert_eq!(
        names(&ordered),
        [
            "first-with-deadline",
            "shop",
            "urgent-no-time",
            "n1",
            "n2",
            "late",
            "last-with-deadline"
        ]
    );
    // Nothing is duplicated or dropped.
    assert_eq!(ordered.len(), 7);
}

#[test]
fn test_tour_nearest_neighbour() {
    let tasks = vec![
        Task::new("far").at(Coordinate::new(1.0, 1.0)),
        Task::new("near").at(Coordinate::new(0.1, 0.1)),
        Task::new("farthest").at(Coordinate::new(5.0, 5.0)),
    ];

    assert_eq!(names(&build_tour(ORIGIN, tasks)), ["near", "far", "farthest"]);
}

#[test]
fn test_tour_small_inputs_untouched() {
    let tasks = vec![
        Task::new("far").at(Coordinate::new(5.0, 5.0)),
        Task::new("unresolved"),
    ];

    assert_eq!(names(&build_tour(ORIGIN, tasks)), ["far", "unresolved"]);
}

#[test]
fn test_tour_drops_unresolved_and_breaks_ties_by_input_order() {
    let tasks = vec![
        Task::new("east").at(Coordinate::new(0.0, 1.0)),
        Task::new("unresolved"),
        Task::new("north").at(Coordinate::new(1.0, 0.0)),
        Task::new("zero").at(Coordinate::new(0.0, 0.0)),
    ];

    // The origin itself counts as a resolved location.
    assert_eq!(names(&build_tour(ORIGIN, tasks)), ["zero", "east", "north"]);
}

// Itinerary

#[tokio::test]
async fn test_itinerary_chains_legs_and_returns_home() {
    let provider = ScriptedProvider::uniform(10, 3);
    let a = Coordinate::new(0.1, 0.1);
    let b = Coordinate::new(0.2, 0.2);
    let tasks = vec![
        Task::new("A").at(a),
        Task::new("unresolved"),
        Task::new("B").at(b),
    ];

    let itinerary = ItineraryBuilder::new(&provider, ORIGIN, departure_at(9, 0))
        .build(&tasks)
        .await
        .unwrap();

    assert_eq!(itinerary.legs.len(), 3);
    assert_eq!(itinerary.legs[0].start_location, ORIGIN);
    for pair in itinerary.legs.windows(2) {
        assert_eq!(pair[0].end_location, pair[1].start_location);
    }

    let home = itinerary.return_leg().unwrap();
    assert_eq!(home.task_label, RETURN_LEG_LABEL);
    assert_eq!(home.end_location, ORIGIN);
    assert!(home.closing_time.is_none());

    // 09:00 +10 = 09:10, +10 dwell +10 = 09:30, +10 dwell +10 = 09:50
    let arrivals: Vec<String> = itinerary.legs.iter().map(|l| l.arrival_time.to_string()).collect();
    assert_eq!(arrivals, ["09:10", "09:30", "09:50"]);

    let requests = provider.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].origin, ORIGIN);
    assert_eq!(requests[0].destination, a);
    assert_eq!(requests[1].origin, a);
    assert_eq!(requests[1].destination, b);
    assert_eq!(requests[2].destination, ORIGIN);
}

#[tokio::test]
async fn test_itinerary_prefers_task_address() {
    let provider = ScriptedProvider::uniform(5, 3);
    let mut known = Task::new("known");
    known.resolve("Known Street 5", Coordinate::new(0.1, 0.1));
    let tasks = vec![known, Task::new("other").at(Coordinate::new(0.2, 0.2))];

    let itinerary = ItineraryBuilder::new(&provider, ORIGIN, departure_at(9, 0))
        .build(&tasks)
        .await
        .unwrap();

    assert_eq!(itinerary.legs[0].address.as_deref(), Some("Known Street 5"));
    assert_eq!(itinerary.legs[1].address.as_deref(), Some("Provider Street 1"));
}

#[tokio::test]
async fn test_deadline_warning_after_closing() {
    let provider = ScriptedProvider::new(vec![
        Ok(Some(provider_leg(65 * 60, "1 hour 5 mins", "30 km"))),
        Ok(Some(provider_leg(600, "10 mins", "5 km"))),
    ]);
    let tasks = vec![Task::new("bank")
        .with_closing_time(clock("16:00"))
        .at(Coordinate::new(0.1, 0.1))];

    let itinerary = ItineraryBuilder::new(&provider, ORIGIN, departure_at(15, 0))
        .build(&tasks)
        .await
        .unwrap();

    assert_eq!(itinerary.legs[0].arrival_time, clock("16:05"));
    assert_eq!(itinerary.legs[0].closing_time, Some(clock("16:00")));
    assert_eq!(
        itinerary.warnings,
        vec![Warning::Deadline {
            task: "bank".to_string(),
            arrival: clock("16:05"),
            closing: clock("16:00"),
        }]
    );
}

#[tokio::test]
async fn test_no_warning_before_or_at_closing() {
    for (minutes, expected) in [(59, "15:59"), (60, "16:00")] {
        let provider = ScriptedProvider::uniform(minutes, 2);
        let tasks = vec![Task::new("bank")
            .with_closing_time(clock("16:00"))
            .at(Coordinate::new(0.1, 0.1))];

        let itinerary = ItineraryBuilder::new(&provider, ORIGIN, departure_at(15, 0))
            .build(&tasks)
            .await
            .unwrap();

        assert_eq!(itinerary.legs[0].arrival_time, clock(expected));
        assert!(itinerary.warnings.is_empty());
    }
}

#[tokio::test]
async fn test_deadline_judged_to_the_minute() {
    // 3630 s lands at 16:00:30, reported as 16:00: not late.
    // 3690 s lands at 16:01:30, reported as 16:01: late.
    for (seconds, expected, late) in [(3630, "16:00", false), (3690, "16:01", true)] {
        let provider = ScriptedProvider::new(vec![
            Ok(Some(provider_leg(seconds, "1 hour 1 min", "30 km"))),
            Ok(Some(provider_leg(600, "10 mins", "5 km"))),
        ]);
        let tasks = vec![Task::new("bank")
            .with_closing_time(clock("16:00"))
            .at(Coordinate::new(0.1, 0.1))];

        let itinerary = ItineraryBuilder::new(&provider, ORIGIN, departure_at(15, 0))
            .build(&tasks)
            .await
            .unwrap();

        assert_eq!(itinerary.legs[0].arrival_time, clock(expected));
        assert_eq!(itinerary.missed_deadlines().count(), usize::from(late), "{seconds}s leg");
    }
}

#[tokio::test]
async fn test_deadline_ignores_departure_seconds() {
    let provider = ScriptedProvider::uniform(60, 2);
    let tasks = vec![Task::new("bank")
        .with_closing_time(clock("16:00"))
        .at(Coordinate::new(0.1, 0.1))];

    let departure = date(2025, 1, 6).at(15, 0, 45, 0);
    let itinerary = ItineraryBuilder::new(&provider, ORIGIN, departure)
        .build(&tasks)
        .await
        .unwrap();

    assert_eq!(itinerary.legs[0].arrival_time, clock("16:00"));
    assert!(itinerary.warnings.is_empty());
}

#[tokio::test]
async fn test_deadline_warning_past_midnight() {
    let provider = ScriptedProvider::uniform(20, 2);
    let tasks = vec![Task::new("pharmacy")
        .with_closing_time(clock("23:55"))
        .at(Coordinate::new(0.1, 0.1))];

    let itinerary = ItineraryBuilder::new(&provider, ORIGIN, departure_at(23, 50))
        .build(&tasks)
        .await
        .unwrap();

    assert_eq!(itinerary.legs[0].arrival_time, clock("00:10"));
    assert_eq!(itinerary.missed_deadlines().count(), 1);
}

#[tokio::test]
async fn test_no_route_is_fatal() {
    let provider = ScriptedProvider::new(vec![
        Ok(Some(provider_leg(600, "10 mins", "1 km"))),
        Ok(None),
    ]);
    let tasks = vec![
        Task::new("A").at(Coordinate::new(0.1, 0.1)),
        Task::new("island").at(Coordinate::new(0.2, 0.2)),
    ];

    let error = ItineraryBuilder::new(&provider, ORIGIN, departure_at(9, 0))
        .build(&tasks)
        .await
        .unwrap_err();

    match error {
        ErrandError::RoutingUnavailable { from, to, .. } => {
            assert_eq!(from, Coordinate::new(0.1, 0.1));
            assert_eq!(to, Coordinate::new(0.2, 0.2));
        }
        other => panic!("Expected RoutingUnavailable, got {other:?}"),
    }
    assert_eq!(provider.requests().len(), 2);
}

#[tokio::test]
async fn test_failed_return_leg_is_fatal() {
    let provider = ScriptedProvider::new(vec![
        Ok(Some(provider_leg(600, "10 mins", "1 km"))),
        Err(ErrandError::routing(Coordinate::new(0.1, 0.1), ORIGIN).because("timeout")),
    ]);
    let tasks = vec![Task::new("A").at(Coordinate::new(0.1, 0.1))];

    let result = ItineraryBuilder::new(&provider, ORIGIN, departure_at(9, 0))
        .build(&tasks)
        .await;

    assert!(matches!(result, Err(ErrandError::RoutingUnavailable { .. })));
}

#[tokio::test]
async fn test_empty_task_list_routes_home_only() {
    let provider = ScriptedProvider::uniform(0, 1);

    let itinerary = ItineraryBuilder::new(&provider, ORIGIN, departure_at(9, 0))
        .build(&[])
        .await
        .unwrap();

    assert_eq!(itinerary.legs.len(), 1);
    assert!(itinerary.legs[0].is_return);
    assert!(itinerary.task_legs().is_empty());
}

// Totals and advisories

#[test]
fn test_totals_exclude_return_leg_and_add_dwell() {
    let legs = vec![
        route_leg("10 mins", "1,5 km", false),
        route_leg("1 hour 5 mins", "1000 m", false),
        route_leg("3 hours", "200 km", true),
    ];

    let totals = totals(&legs).unwrap();
    assert_eq!(totals.minutes, 95);
    assert_eq!(totals.duration_label(), "1h 35min");
    assert_eq!(totals.distance_label(), "2.5 km");
}

#[test]
fn test_totals_empty_and_malformed() {
    assert_eq!(totals(&[]).unwrap().minutes, 0);
    // A lone leg is the return leg and is never parsed.
    assert_eq!(totals(&[route_leg("soon", "far", true)]).unwrap().minutes, 0);

    let legs = vec![route_leg("soon", "1 km", false), route_leg("5 mins", "1 km", true)];
    assert!(matches!(
        totals(&legs),
        Err(ErrandError::MalformedLegText { field: "duration", .. })
    ));
}

#[test]
fn test_rest_stops_reset_after_break() {
    let legs = vec![
        route_leg("50 mins", "1 km", false),
        route_leg("45 mins", "1 km", false),
        route_leg("1 hour 30 mins", "1 km", false),
        route_leg("2 hours", "1 km", true),
    ];

    let plan = rest_stops(&legs, 90).unwrap();
    assert!(plan.needs_rest);
    assert_eq!(plan.suggestions.len(), 2);
    assert_eq!(plan.suggestions[0].driven_minutes, 95);
    assert_eq!(plan.suggestions[1].driven_minutes, 90);
    assert_eq!(plan.total_driving_minutes, 305);
}

#[test]
fn test_rest_stops_short_route() {
    let legs = vec![route_leg("20 mins", "1 km", false), route_leg("2 hours", "1 km", true)];

    let plan = rest_stops(&legs, 90).unwrap();
    assert!(!plan.needs_rest);
    assert_eq!(plan.total_driving_minutes, 140);
}

#[test]
fn test_departure_suggestion() {
    let tasks = vec![
        Task::new("bank").with_closing_time(clock("16:00")),
        Task::new("post").with_closing_time(clock("12:00")),
        Task::new("bakery"),
    ];

    // 12:00 - (3 * 15 + 30) = 10:45
    assert_eq!(
        suggest_departure(&tasks, clock("07:00")).unwrap(),
        DepartureSuggestion::LeaveBy {
            depart_by: clock("10:45"),
            earliest_closing: clock("12:00"),
        }
    );

    // Never before now.
    assert!(matches!(
        suggest_departure(&tasks, clock("11:30")).unwrap(),
        DepartureSuggestion::LeaveBy { depart_by, .. } if depart_by == clock("11:30")
    ));

    // Never before 08:00.
    let early = vec![Task::new("market").with_closing_time(clock("08:30"))];
    assert!(matches!(
        suggest_departure(&early, clock("05:00")).unwrap(),
        DepartureSuggestion::LeaveBy { depart_by, .. } if depart_by == clock("08:00")
    ));
}

#[test]
fn test_departure_any_time_without_closing_times() {
    let tasks = vec![Task::new("bakery")];
    assert_eq!(
        suggest_departure(&tasks, clock("09:00")).unwrap(),
        DepartureSuggestion::AnyTime
    );
}

fn savings_legs() -> Vec<RouteLeg> {
    vec![
        route_leg("10 mins", "1,5 km", false),
        route_leg("1 hour 5 mins", "1000 m", false),
        route_leg("45 mins", "7.5 km", true),
    ]
}

#[test]
fn test_economy_savings_cover_whole_route() {
    let Some(ModeSavings::Economy {
        toll_savings,
        fuel_saved_liters,
        fuel_cost_saved,
    }) = mode_savings(&savings_legs(), RouteMode::Economy).unwrap()
    else {
        panic!("expected economy savings");
    };

    // 10 km including the trip back.
    assert_eq!(toll_savings, 30.0);
    assert!((fuel_saved_liters - 0.5).abs() < 1e-9);
    assert!((fuel_cost_saved - 2.75).abs() < 1e-9);
}

#[test]
fn test_fast_savings_from_travel_time() {
    // 120 travel minutes, no dwell.
    assert_eq!(
        mode_savings(&savings_legs(), RouteMode::Fast).unwrap(),
        Some(ModeSavings::Fast { minutes_saved: 24 })
    );
}

#[test]
fn test_balanced_and_malformed_savings() {
    assert_eq!(mode_savings(&savings_legs(), RouteMode::Balanced).unwrap(), None);

    let legs = vec![route_leg("10 mins", "far", false), route_leg("5 mins", "1 km", true)];
    assert!(matches!(
        mode_savings(&legs, RouteMode::Economy),
        Err(ErrandError::MalformedLegText { field: "distance", .. })
    ));
    assert!(mode_savings(&legs, RouteMode::Fast).is_ok());
}

#[test]
fn test_favorite_overlap() {
    let current: Vec<String> = ["a", "b", "c", "d", "a"].iter().map(|s| s.to_string()).collect();
    let saved: Vec<String> = ["a", "b", "c", "x"].iter().map(|s| s.to_string()).collect();

    assert_eq!(favorite_overlap(&current, &saved), 0.75);
    assert_eq!(favorite_overlap(&[], &saved), 0.0);
}

// Planner

async fn create_test_planner(provider: Option<ScriptedProvider>) -> (tempfile::TempDir, RoutePlanner) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let mut builder = RoutePlannerBuilder::new().with_database_path(Some(&db_path));
    if let Some(provider) = provider {
        builder = builder.with_provider(Arc::new(provider));
    }
    let planner = builder.build().await.expect("Failed to create planner");
    (temp_dir, planner)
}

#[tokio::test]
async fn test_plan_route_orders_warns_and_totals() {
    let (_temp_dir, planner) = create_test_planner(Some(ScriptedProvider::uniform(10, 3))).await;

    let plan = planner
        .plan_route(&PlanRoute {
            tasks: vec![
                Task::new("groceries").at(Coordinate::new(0.2, 0.2)),
                Task::new("bank")
                    .with_closing_time(clock("09:05"))
                    .at(Coordinate::new(0.1, 0.1)),
            ],
            origin: ORIGIN,
            departure: Some(clock("09:00")),
            mode: RouteMode::Economy,
            rest_stops: true,
            suggest_departure: true,
            ..PlanRoute::default()
        })
        .await
        .expect("Failed to plan route");

    assert_eq!(names(&plan.order), ["bank", "groceries"]);
    assert_eq!(plan.itinerary.warnings[0], Warning::EconomyMode);
    assert!(matches!(plan.itinerary.warnings[1], Warning::Deadline { .. }));
    assert_eq!(plan.totals.minutes, 40);
    assert!(matches!(plan.savings, Some(ModeSavings::Economy { .. })));
    assert!(plan.rest_stops.is_some());
    assert!(plan.departure.is_some());
    assert!(plan.favorite_match.is_none());
}

#[tokio::test]
async fn test_plan_route_without_provider() {
    let (_temp_dir, planner) = create_test_planner(None).await;

    let result = planner
        .plan_route(&PlanRoute {
            tasks: vec![Task::new("bank").at(Coordinate::new(0.1, 0.1))],
            ..PlanRoute::default()
        })
        .await;

    assert!(matches!(result, Err(ErrandError::Configuration { .. })));
}

#[tokio::test]
async fn test_order_tasks_delivery_needs_origin() {
    let (_temp_dir, planner) = create_test_planner(None).await;

    let result = planner.order_tasks(&OrderTasks {
        tasks: vec![Task::new("a"), Task::new("b"), Task::new("c")],
        origin: None,
        delivery: true,
    });

    assert!(matches!(result, Err(ErrandError::InvalidInput { .. })));
}

fn save_params(name: &str, tasks: &[&str]) -> SaveFavorite {
    SaveFavorite {
        user_id: "ana".to_string(),
        name: name.to_string(),
        task_names: tasks.iter().map(|s| s.to_string()).collect(),
        itinerary: None,
    }
}

#[tokio::test]
async fn test_favorite_lifecycle() {
    let (_temp_dir, planner) = create_test_planner(None).await;

    planner
        .save_favorite(&save_params("weekday", &["bank", "gym"]))
        .await
        .expect("Failed to save favorite");
    planner
        .save_favorite(&save_params("saturday", &["bakery", "market", "bank"]))
        .await
        .expect("Failed to save favorite");

    let favorites = planner
        .list_favorites(&ListFavorites {
            user_id: "ana".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(favorites.len(), 2);
    assert_eq!(favorites[0].name, "saturday");

    // Another user's list is separate.
    assert!(planner
        .list_favorites(&ListFavorites::default())
        .await
        .unwrap()
        .is_empty());

    planner
        .delete_favorite(&FavoriteKey::new(Some("ana".to_string()), "weekday"))
        .await
        .expect("Failed to delete favorite");

    let result = planner
        .delete_favorite(&FavoriteKey::new(Some("ana".to_string()), "weekday"))
        .await;
    assert!(matches!(result, Err(ErrandError::FavoriteNotFound { .. })));
}

#[tokio::test]
async fn test_favorite_match_threshold_and_usage() {
    let (_temp_dir, planner) = create_test_planner(None).await;
    planner
        .save_favorite(&save_params("saturday", &["bakery", "market", "bank"]))
        .await
        .unwrap();

    let request = |tasks: &[&str]| MatchFavorite {
        user_id: "ana".to_string(),
        task_names: tasks.iter().map(|s| s.to_string()).collect(),
    };

    // 2 of 3 is below 70%.
    let miss = planner
        .match_favorite(&request(&["bakery", "market", "gym"]))
        .await
        .unwrap();
    assert!(miss.is_none());

    let hit = planner
        .match_favorite(&request(&["bakery", "market", "bank"]))
        .await
        .unwrap()
        .expect("Expected a favorite match");
    assert_eq!(hit.name, "saturday");
    assert_eq!(hit.overlap, 1.0);
    assert_eq!(hit.usage_count, 1);

    let favorites = planner
        .list_favorites(&ListFavorites {
            user_id: "ana".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(favorites[0].usage_count, 1);
    assert!(favorites[0].last_used.is_some());

    assert!(planner.match_favorite(&request(&[])).await.unwrap().is_none());
}

async fn create_shared_planner(
    provider: &Arc<ScriptedProvider>,
) -> (tempfile::TempDir, RoutePlanner) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let planner = RoutePlannerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_provider(provider.clone())
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

#[tokio::test]
async fn test_plan_route_forwards_mode_preferences() {
    for mode in [RouteMode::Balanced, RouteMode::Economy, RouteMode::Fast] {
        let provider = Arc::new(ScriptedProvider::uniform(10, 2));
        let (_temp_dir, planner) = create_shared_planner(&provider).await;

        let plan = planner
            .plan_route(&PlanRoute {
                tasks: vec![Task::new("bank").at(Coordinate::new(0.1, 0.1))],
                departure: Some(clock("09:00")),
                mode,
                ..PlanRoute::default()
            })
            .await
            .expect("Failed to plan route");

        let requests = provider.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r.preferences == mode.preferences()));
        assert_eq!(plan.savings.is_none(), mode == RouteMode::Balanced);
    }

    assert_eq!(
        RouteMode::Economy.preferences(),
        RoutePreferences {
            avoid_tolls: true,
            avoid_highways: true,
            deprioritize_reordering: false,
        }
    );
}

#[tokio::test]
async fn test_departure_suggestion_counts_unresolved_delivery_tasks() {
    let provider = Arc::new(ScriptedProvider::uniform(10, 3));
    let (_temp_dir, planner) = create_shared_planner(&provider).await;

    let tasks = vec![
        Task::new("bank")
            .with_closing_time(clock("23:59"))
            .at(Coordinate::new(0.1, 0.1)),
        Task::new("market").at(Coordinate::new(0.2, 0.2)),
        Task::new("somewhere"),
    ];

    let before = ClockTime::from_time(Zoned::now().time());
    let plan = planner
        .plan_route(&PlanRoute {
            tasks,
            departure: Some(clock("09:00")),
            delivery: true,
            suggest_departure: true,
            ..PlanRoute::default()
        })
        .await
        .expect("Failed to plan route");
    let after = ClockTime::from_time(Zoned::now().time());

    // The unresolved task is not routed but still counts: 23:59 - (3 * 15 + 30).
    assert_eq!(plan.order.len(), 2);
    let latest = clock("22:44");
    let Some(DepartureSuggestion::LeaveBy { depart_by, .. }) = plan.departure else {
        panic!("expected a departure time");
    };
    assert!(depart_by == latest.max(before) || depart_by == latest.max(after));
}
