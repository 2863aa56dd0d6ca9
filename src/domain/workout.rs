// Workout record model and per-sport derived metrics

use crate::domain::geo::GeoPoint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The two supported workout types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sport {
    Running,
    Cycling,
}

impl Sport {
    /// Parse the lowercase tag used by the form's type selector.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "running" => Some(Sport::Running),
            "cycling" => Some(Sport::Cycling),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Sport::Running => "running",
            Sport::Cycling => "cycling",
        }
    }

    /// Capitalized name used in record descriptions.
    pub fn label(self) -> &'static str {
        match self {
            Sport::Running => "Running",
            Sport::Cycling => "Cycling",
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Sport-specific input metric together with the metric derived from it at
/// construction time. Derived values are stored exactly as computed and are
/// never recomputed, even after rehydration from a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running {
        cadence_spm: f64,
        pace_min_per_km: f64,
    },
    Cycling {
        elevation_gain_m: f64,
        speed_km_per_h: f64,
    },
}

impl WorkoutDetails {
    pub fn sport(&self) -> Sport {
        match self {
            WorkoutDetails::Running { .. } => Sport::Running,
            WorkoutDetails::Cycling { .. } => Sport::Cycling,
        }
    }
}

/// A single logged workout. All fields except `click_count` are fixed at
/// construction; validation of distance and duration happens upstream, the
/// constructors trust their caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub coords: GeoPoint,
    pub distance_km: f64,
    pub duration_min: f64,
    pub description: String,
    #[serde(default)]
    pub click_count: u32,
    #[serde(flatten)]
    pub details: WorkoutDetails,
}

impl Workout {
    pub fn running(
        coords: GeoPoint,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        let pace_min_per_km = duration_min / distance_km;
        Self::build(
            coords,
            distance_km,
            duration_min,
            created_at,
            WorkoutDetails::Running {
                cadence_spm,
                pace_min_per_km,
            },
        )
    }

    pub fn cycling(
        coords: GeoPoint,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        let speed_km_per_h = distance_km / (duration_min / 60.0);
        Self::build(
            coords,
            distance_km,
            duration_min,
            created_at,
            WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_km_per_h,
            },
        )
    }

    fn build(
        coords: GeoPoint,
        distance_km: f64,
        duration_min: f64,
        created_at: DateTime<Utc>,
        details: WorkoutDetails,
    ) -> Self {
        Self {
            id: workout_id(created_at),
            created_at,
            coords,
            distance_km,
            duration_min,
            description: describe(details.sport(), created_at),
            click_count: 0,
            details,
        }
    }

    pub fn sport(&self) -> Sport {
        self.details.sport()
    }

    /// Interaction counter. Kept as an inert capability: no UI event is wired
    /// to it.
    pub fn click(&mut self) {
        self.click_count += 1;
    }
}

/// Id scheme: the last ten digits of the creation time in milliseconds.
/// Records created within the same millisecond collide; accepted for a
/// single-user tracker.
fn workout_id(created_at: DateTime<Utc>) -> String {
    format!(
        "{:010}",
        created_at.timestamp_millis().rem_euclid(10_000_000_000)
    )
}

fn describe(sport: Sport, created_at: DateTime<Utc>) -> String {
    format!("{} on {}", sport.label(), created_at.format("%B %-d"))
}
