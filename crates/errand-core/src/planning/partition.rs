//! Constraint-driven visiting order.

use crate::models::{Bucket, ClockTime, Task};

/// Orders tasks by bucket: `first`, then deadline tasks by ascending closing
/// time, then unconstrained tasks, then `last`.
///
/// Deadline tasks without a closing time (plain `urgent`) sort as if they
/// closed at 23:59. The sort is stable, so input order is kept within a
/// bucket and among equal closing times.
pub fn partition(tasks: Vec<Task>) -> Vec<Task> {
    let mut ordered = tasks;
    ordered.sort_by_key(|task| {
        let bucket = task.bucket();
        let deadline = match bucket {
            Bucket::Deadline => task.closing_time.unwrap_or(ClockTime::END_OF_DAY),
            _ => ClockTime::MIDNIGHT,
        };
        (bucket, deadline)
    });
    ordered
}
