//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{models::FavoriteRoute, params::FavoriteKey};

/// Wrapper type for displaying the result of saving a favorite.
///
/// # Examples
///
/// ```rust
/// use errand_core::{display::SaveResult, models::FavoriteRoute};
/// use jiff::Timestamp;
///
/// let favorite = FavoriteRoute {
///     id: 1,
///     user_id: "default_user".to_string(),
///     name: "saturday".to_string(),
///     task_names: vec!["bakery".to_string(), "bank".to_string()],
///     itinerary: None,
///     usage_count: 0,
///     created_at: Timestamp::now(),
///     last_used: None,
/// };
///
/// let output = SaveResult::new(favorite).to_string();
/// assert!(output.starts_with("Saved favorite 'saturday' with 2 errands"));
/// ```
pub struct SaveResult<T> {
    pub resource: T,
}

impl<T> SaveResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for SaveResult<FavoriteRoute> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Saved favorite '{}' with {} errands",
            self.resource.name,
            self.resource.task_names.len()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<FavoriteKey> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted favorite '{}' for user '{}'",
            self.resource.name, self.resource.user_id
        )
    }
}
