//! Favorite route CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{FavoriteRoute, Itinerary},
};

const UPSERT_FAVORITE_SQL: &str = "INSERT INTO favorite_routes (user_id, name, task_names, itinerary, usage_count, created_at)
     VALUES (?1, ?2, ?3, ?4, 0, ?5)
     ON CONFLICT(user_id, name) DO UPDATE SET task_names = excluded.task_names, itinerary = excluded.itinerary, usage_count = 0, last_used = NULL";
const FAVORITE_COLUMNS: &str =
    "id, user_id, name, task_names, itinerary, usage_count, created_at, last_used";
const DELETE_FAVORITE_SQL: &str = "DELETE FROM favorite_routes WHERE user_id = ?1 AND name = ?2";
const RECORD_USE_SQL: &str = "UPDATE favorite_routes SET usage_count = usage_count + 1, last_used = ?1 WHERE user_id = ?2 AND name = ?3";

impl super::Database {
    /// Saves a favorite, replacing the tasks and itinerary of an existing
    /// favorite with the same name and resetting its usage statistics.
    pub fn save_favorite(
        &mut self,
        user_id: &str,
        name: &str,
        task_names: &[String],
        itinerary: Option<&Itinerary>,
    ) -> Result<FavoriteRoute> {
        let task_names_json = serde_json::to_string(task_names)?;
        let itinerary_json = itinerary.map(serde_json::to_string).transpose()?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            UPSERT_FAVORITE_SQL,
            params![
                user_id,
                name,
                &task_names_json,
                itinerary_json.as_deref(),
                Timestamp::now().to_string()
            ],
        )
        .db_context("Failed to save favorite route")?;

        let favorite = tx
            .query_row(
                &format!("SELECT {FAVORITE_COLUMNS} FROM favorite_routes WHERE user_id = ?1 AND name = ?2"),
                params![user_id, name],
                favorite_from_row,
            )
            .db_context("Failed to read saved favorite route")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(favorite)
    }

    /// Retrieves a favorite by owner and name.
    pub fn get_favorite(&self, user_id: &str, name: &str) -> Result<Option<FavoriteRoute>> {
        self.connection
            .query_row(
                &format!("SELECT {FAVORITE_COLUMNS} FROM favorite_routes WHERE user_id = ?1 AND name = ?2"),
                params![user_id, name],
                favorite_from_row,
            )
            .optional()
            .db_context("Failed to query favorite route")
    }

    /// Lists a user's favorites ordered by name.
    pub fn list_favorites(&self, user_id: &str) -> Result<Vec<FavoriteRoute>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {FAVORITE_COLUMNS} FROM favorite_routes WHERE user_id = ?1 ORDER BY name"
            ))
            .db_context("Failed to prepare query")?;

        let favorites = stmt
            .query_map(params![user_id], favorite_from_row)
            .db_context("Failed to query favorite routes")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read favorite routes")?;

        Ok(favorites)
    }

    /// Deletes a favorite. Returns whether a row was removed.
    pub fn delete_favorite(&self, user_id: &str, name: &str) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_FAVORITE_SQL, params![user_id, name])
            .db_context("Failed to delete favorite route")?;

        Ok(removed > 0)
    }

    /// Bumps the usage counter and last-used timestamp of a favorite.
    pub fn record_favorite_use(&self, user_id: &str, name: &str) -> Result<Option<FavoriteRoute>> {
        self.connection
            .execute(
                RECORD_USE_SQL,
                params![Timestamp::now().to_string(), user_id, name],
            )
            .db_context("Failed to record favorite route use")?;

        self.get_favorite(user_id, name)
    }
}

fn favorite_from_row(row: &Row<'_>) -> rusqlite::Result<FavoriteRoute> {
    let task_names: Vec<String> = serde_json::from_str(&row.get::<_, String>(3)?)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    let itinerary = row
        .get::<_, Option<String>>(4)?
        .map(|json| serde_json::from_str::<Itinerary>(&json))
        .transpose()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

    let last_used = row
        .get::<_, Option<String>>(7)?
        .map(|s| s.parse::<Timestamp>())
        .transpose()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e)))?;

    Ok(FavoriteRoute {
        id: row.get::<_, i64>(0)? as u64,
        user_id: row.get(1)?,
        name: row.get(2)?,
        task_names,
        itinerary,
        usage_count: row.get::<_, i64>(5)? as u32,
        created_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
        })?,
        last_used,
    })
}
