//! Greedy nearest-neighbour tour for delivery runs.

use log::debug;

use crate::models::{Coordinate, Task};

/// Builds a visiting order by repeatedly moving to the closest unvisited
/// stop.
///
/// Distances are planar in raw degrees. Tasks without resolved coordinates
/// are dropped from the tour, and ties go to the task that came first in
/// the input. With two tasks or fewer the input is returned untouched.
pub fn build_tour(origin: Coordinate, tasks: Vec<Task>) -> Vec<Task> {
    if tasks.len() <= 2 {
        return tasks;
    }

    let mut remaining: Vec<(Task, Coordinate)> = tasks
        .into_iter()
        .filter_map(|task| match task.location() {
            Some(location) => Some((task, location)),
            None => {
                debug!("Dropping '{}' from delivery tour: location unresolved", task.name);
                None
            }
        })
        .collect();

    let mut ordered = Vec::with_capacity(remaining.len());
    let mut current = origin;

    while !remaining.is_empty() {
        let mut nearest = 0;
        let mut nearest_distance = f64::INFINITY;
        for (index, (_, location)) in remaining.iter().enumerate() {
            let distance = current.planar_distance(location);
            if distance < nearest_distance {
                nearest = index;
                nearest_distance = distance;
            }
        }

        // `remove` keeps the rest in input order for later tie-breaks.
        let (task, location) = remaining.remove(nearest);
        current = location;
        ordered.push(task);
    }

    ordered
}
