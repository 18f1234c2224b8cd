//! Builder for creating and configuring RoutePlanner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::task;

use super::RoutePlanner;
use crate::{
    config::Config,
    db::Database,
    error::{ErrandError, Result},
    models::TravelMode,
    routing::RouteLegProvider,
};

/// Builder for creating and configuring RoutePlanner instances.
#[derive(Clone, Default)]
pub struct RoutePlannerBuilder {
    provider: Option<Arc<dyn RouteLegProvider>>,
    database_path: Option<PathBuf>,
    travel_mode: TravelMode,
    rest_stop_minutes: Option<u64>,
}

impl RoutePlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the provider used to route itinerary legs.
    ///
    /// Without a provider the planner can still order tasks and manage
    /// favorites, but [`RoutePlanner::plan_route`] fails.
    pub fn with_provider(mut self, provider: Arc<dyn RouteLegProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Sets a custom favorites database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/errand/errand.db` or `~/.local/share/errand/errand.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the travel mode requested for every leg.
    pub fn with_travel_mode(mut self, travel_mode: TravelMode) -> Self {
        self.travel_mode = travel_mode;
        self
    }

    /// Sets the continuous driving time after which a break is suggested.
    pub fn with_rest_stop_threshold(mut self, minutes: u64) -> Self {
        self.rest_stop_minutes = Some(minutes);
        self
    }

    /// Applies the routing and advisory sections of a loaded configuration.
    pub fn with_config(self, config: &Config) -> Self {
        self.with_travel_mode(config.routing.travel_mode)
            .with_rest_stop_threshold(config.advisory.rest_stop_minutes)
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `ErrandError::FileSystem` if the database directory cannot be
    /// created.
    /// Returns `ErrandError::Database` if database initialization fails.
    pub async fn build(self) -> Result<RoutePlanner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ErrandError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), ErrandError>(())
        })
        .await
        .map_err(ErrandError::join)??;

        Ok(RoutePlanner {
            provider: self.provider,
            db_path,
            travel_mode: self.travel_mode,
            rest_stop_minutes: self
                .rest_stop_minutes
                .unwrap_or(crate::config::AdvisoryConfig::default().rest_stop_minutes),
        })
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("errand")
            .place_data_file("errand.db")
            .map_err(|e| ErrandError::XdgDirectory(e.to_string()))
    }
}
