// Display formatting. Metrics are stored exact and rounded here only.

use crate::domain::workout::{Sport, Workout, WorkoutDetails};

pub fn sport_icon(sport: Sport) -> &'static str {
    match sport {
        Sport::Running => "🏃",
        Sport::Cycling => "🚴",
    }
}

/// Popup label for a map marker.
pub fn marker_label(workout: &Workout) -> String {
    format!("{} {}", sport_icon(workout.sport()), workout.description)
}

/// One-line metric summary for a list entry, derived metric rounded to one
/// decimal place.
pub fn metric_summary(workout: &Workout) -> String {
    match workout.details {
        WorkoutDetails::Running {
            cadence_spm,
            pace_min_per_km,
        } => format!("{pace_min_per_km:.1} min/km, {cadence_spm:.0} spm"),
        WorkoutDetails::Cycling {
            elevation_gain_m,
            speed_km_per_h,
        } => format!("{speed_km_per_h:.1} km/h, {elevation_gain_m:.0} m climbed"),
    }
}
