use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use errand_core::{
    routing::{ProviderLeg, RouteLegProvider, RouteRequest},
    Result, RoutePlanner, RoutePlannerBuilder,
};
use tempfile::TempDir;

/// Provider that derives each leg from the planar distance between its
/// endpoints: one degree takes 60 minutes and covers 100 km.
#[derive(Default)]
pub struct GridProvider {
    calls: AtomicUsize,
}

impl GridProvider {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RouteLegProvider for GridProvider {
    async fn route_leg(&self, request: &RouteRequest) -> Result<Option<ProviderLeg>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let degrees = request.origin.planar_distance(&request.destination);
        let minutes = (degrees * 60.0).round() as u64;
        let kilometers = degrees * 100.0;

        Ok(Some(ProviderLeg {
            duration_seconds: minutes * 60,
            distance_meters: (kilometers * 1000.0).round() as u64,
            duration_text: format!("{minutes} mins"),
            distance_text: format!("{kilometers:.1} km"),
            start_location: request.origin,
            end_location: request.destination,
            end_address: None,
            polyline: String::new(),
        }))
    }
}

/// Helper function to create a test planner backed by `provider`
pub async fn create_test_planner(provider: Arc<GridProvider>) -> (TempDir, RoutePlanner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = RoutePlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_provider(provider)
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}
