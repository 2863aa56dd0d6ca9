// Tracker use cases: validate, construct, append, persist, locate

use crate::application::validation::{all_finite, all_positive};
use crate::application::workout_repository::WorkoutRepository;
use crate::application::workout_store::WorkoutStore;
use crate::domain::geo::GeoPoint;
use crate::domain::workout::Workout;
use crate::error::TrackerError;
use chrono::Utc;
use std::sync::Arc;

/// Not-yet-validated input for a new record, one variant per workout type.
/// Numeric fields arrive already coerced: non-numeric form input shows up
/// here as NaN and is rejected by the validator.
#[derive(Debug, Clone, Copy)]
pub enum WorkoutDraft {
    Running {
        coords: GeoPoint,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    },
    Cycling {
        coords: GeoPoint,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    },
}

impl WorkoutDraft {
    /// Combined validation policy. Elevation gain is checked for finiteness
    /// only: elevation loss is a valid ride.
    fn is_valid(&self) -> bool {
        match *self {
            WorkoutDraft::Running {
                distance_km,
                duration_min,
                cadence_spm,
                ..
            } => {
                all_finite(&[distance_km, duration_min, cadence_spm])
                    && all_positive(&[distance_km, duration_min, cadence_spm])
            }
            WorkoutDraft::Cycling {
                distance_km,
                duration_min,
                elevation_gain_m,
                ..
            } => {
                all_finite(&[distance_km, duration_min, elevation_gain_m])
                    && all_positive(&[distance_km, duration_min])
            }
        }
    }

    fn sport_tag(&self) -> &'static str {
        match self {
            WorkoutDraft::Running { .. } => "running",
            WorkoutDraft::Cycling { .. } => "cycling",
        }
    }
}

/// Application service owning the store and the persistence collaborator.
/// The store is mutated only here, one event at a time.
pub struct TrackerService {
    store: WorkoutStore,
    repository: Arc<dyn WorkoutRepository>,
}

impl TrackerService {
    pub fn new(repository: Arc<dyn WorkoutRepository>) -> Self {
        Self {
            store: WorkoutStore::new(),
            repository,
        }
    }

    /// Install the persisted snapshot, if any. An absent or unreadable
    /// snapshot means the store starts empty; the two cases are not
    /// distinguished. Returns the number of restored records.
    pub async fn rehydrate(&mut self) -> usize {
        match self.repository.load().await {
            Ok(Some(workouts)) => {
                let restored = workouts.len();
                self.store.replace_all(workouts);
                restored
            }
            Ok(None) => 0,
            Err(e) => {
                tracing::warn!(error = %e, "could not read workout snapshot, starting empty");
                0
            }
        }
    }

    /// Validate the draft and append the constructed record. Returns a copy
    /// of the appended record for rendering. On rejection nothing mutates.
    pub fn create_workout(&mut self, draft: WorkoutDraft) -> Result<Workout, TrackerError> {
        if !draft.is_valid() {
            return Err(TrackerError::InvalidInput(format!(
                "{} inputs must be positive finite numbers",
                draft.sport_tag()
            )));
        }

        let created_at = Utc::now();
        let workout = match draft {
            WorkoutDraft::Running {
                coords,
                distance_km,
                duration_min,
                cadence_spm,
            } => Workout::running(coords, distance_km, duration_min, cadence_spm, created_at),
            WorkoutDraft::Cycling {
                coords,
                distance_km,
                duration_min,
                elevation_gain_m,
            } => Workout::cycling(
                coords,
                distance_km,
                duration_min,
                elevation_gain_m,
                created_at,
            ),
        };

        self.store.append(workout.clone());
        Ok(workout)
    }

    /// Write the full record sequence to the snapshot.
    pub async fn persist(&self) -> Result<(), TrackerError> {
        self.repository
            .save(self.store.all())
            .await
            .map_err(TrackerError::Storage)
    }

    /// Resolve a list click back to its record.
    pub fn locate(&self, id: &str) -> Result<&Workout, TrackerError> {
        self.store
            .find_by_id(id)
            .ok_or_else(|| TrackerError::NotFound(id.to_string()))
    }

    pub fn workouts(&self) -> &[Workout] {
        self.store.all()
    }
}
