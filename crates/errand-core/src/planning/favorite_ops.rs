//! Favorite route operations for the RoutePlanner.

use std::collections::HashSet;

use log::{debug, info};
use tokio::task;

use super::RoutePlanner;
use crate::{
    db::Database,
    error::{ErrandError, Result},
    models::{FavoriteMatch, FavoriteRoute},
    params::{FavoriteKey, ListFavorites, MatchFavorite, SaveFavorite},
};

/// Share of the current task names a favorite must contain to match.
pub const MATCH_THRESHOLD: f64 = 0.7;

/// Fraction of the distinct `current` names that also appear in `saved`.
///
/// Returns 0.0 when `current` is empty.
pub fn favorite_overlap(current: &[String], saved: &[String]) -> f64 {
    let current: HashSet<&str> = current.iter().map(String::as_str).collect();
    if current.is_empty() {
        return 0.0;
    }

    let saved: HashSet<&str> = saved.iter().map(String::as_str).collect();
    current.intersection(&saved).count() as f64 / current.len() as f64
}

impl RoutePlanner {
    /// Saves a favorite route, replacing any favorite with the same name for
    /// the same user.
    pub async fn save_favorite(&self, params: &SaveFavorite) -> Result<FavoriteRoute> {
        if params.name.trim().is_empty() {
            return Err(ErrandError::invalid_input("name").with_reason("must not be empty"));
        }

        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.save_favorite(
                &params.user_id,
                &params.name,
                &params.task_names,
                params.itinerary.as_ref(),
            )
        })
        .await
        .map_err(ErrandError::join)?
    }

    /// Lists a user's favorites ordered by name.
    pub async fn list_favorites(&self, params: &ListFavorites) -> Result<Vec<FavoriteRoute>> {
        let db_path = self.db_path.clone();
        let user_id = params.user_id.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_favorites(&user_id)
        })
        .await
        .map_err(ErrandError::join)?
    }

    /// Deletes a favorite route.
    ///
    /// # Errors
    ///
    /// Returns [`ErrandError::FavoriteNotFound`] if the user has no favorite
    /// with that name.
    pub async fn delete_favorite(&self, params: &FavoriteKey) -> Result<()> {
        let db_path = self.db_path.clone();
        let key = params.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            if db.delete_favorite(&key.user_id, &key.name)? {
                Ok(())
            } else {
                Err(ErrandError::FavoriteNotFound {
                    user_id: key.user_id,
                    name: key.name,
                })
            }
        })
        .await
        .map_err(ErrandError::join)?
    }

    /// Finds the first favorite, by name, that covers at least 70% of the
    /// given task names, and records the match.
    pub async fn match_favorite(&self, params: &MatchFavorite) -> Result<Option<FavoriteMatch>> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let favorites = db.list_favorites(&params.user_id)?;

            let Some((favorite, overlap)) = favorites
                .into_iter()
                .map(|f| {
                    let overlap = favorite_overlap(&params.task_names, &f.task_names);
                    (f, overlap)
                })
                .find(|(_, overlap)| *overlap >= MATCH_THRESHOLD)
            else {
                debug!("No favorite matches for user '{}'", params.user_id);
                return Ok(None);
            };

            let usage_count = db
                .record_favorite_use(&params.user_id, &favorite.name)?
                .map_or(favorite.usage_count + 1, |f| f.usage_count);
            info!(
                "Matched favorite '{}' ({:.0}% overlap)",
                favorite.name,
                overlap * 100.0
            );

            Ok(Some(FavoriteMatch {
                name: favorite.name,
                overlap,
                usage_count,
            }))
        })
        .await
        .map_err(ErrandError::join)?
    }
}
