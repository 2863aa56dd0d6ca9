// In-memory workout collection, append-only within a session

use crate::domain::workout::Workout;

/// Ordered collection of workouts. Appended to during the session and
/// replaced wholesale when a persisted snapshot is rehydrated at startup.
/// No dedup by id and no capacity limit.
#[derive(Debug, Default)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    /// Linear scan, first match. Resolves a list click back to its record.
    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|workout| workout.id == id)
    }

    /// Full sequence in insertion order.
    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    /// Install rehydrated records verbatim. They are not re-validated and
    /// their derived metrics are not recomputed.
    pub fn replace_all(&mut self, workouts: Vec<Workout>) {
        self.workouts = workouts;
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}
