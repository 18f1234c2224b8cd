//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper formats its items with consistent structure and handles the
//! empty case itself.

use std::fmt;

use crate::models::{FavoriteRoute, Task};

/// Newtype wrapper for displaying a user's saved favorites.
///
/// # Examples
///
/// ```rust
/// use errand_core::display::Favorites;
///
/// let output = format!("{}", Favorites(vec![]));
/// assert_eq!(output, "No favorite routes saved.\n");
/// ```
pub struct Favorites(pub Vec<FavoriteRoute>);

impl Favorites {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FavoriteRoute> {
        self.0.iter()
    }
}

impl fmt::Display for Favorites {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No favorite routes saved.");
        }

        for favorite in &self.0 {
            write!(f, "{favorite}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying tasks in visiting order.
///
/// # Examples
///
/// ```rust
/// use errand_core::{display::VisitingOrder, models::Task};
///
/// let order = VisitingOrder(vec![Task::new("bakery"), Task::new("bank")]);
/// let output = format!("{order}");
/// assert!(output.contains("1. **bakery**"));
/// assert!(output.contains("2. **bank**"));
/// ```
pub struct VisitingOrder(pub Vec<Task>);

impl fmt::Display for VisitingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No errands to visit.");
        }

        for (index, task) in self.0.iter().enumerate() {
            writeln!(f, "{}. {task}", index + 1)?;
        }
        Ok(())
    }
}
