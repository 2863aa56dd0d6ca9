// UI controller: turns host events into application calls and render requests

use crate::application::tracker_service::{TrackerService, WorkoutDraft};
use crate::domain::geo::GeoPoint;
use crate::domain::workout::{Sport, Workout};
use crate::error::TrackerError;
use crate::infrastructure::config::MapSettings;
use crate::presentation::events::{FormFields, UiEvent};
use crate::presentation::format;
use crate::presentation::views::{FormView, ListView, MapView};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::StreamExt;

const INVALID_INPUT_ALERT: &str = "Inputs have to be positive numbers!";
const GEOLOCATION_ALERT: &str = "Could not get your position";

/// The single owner of session state. Constructed once by the host at
/// startup and driven from its event loop; handlers are plain methods over
/// explicit state, one event at a time.
pub struct TrackerController {
    service: TrackerService,
    map: Arc<dyn MapView>,
    form: Arc<dyn FormView>,
    list: Arc<dyn ListView>,
    zoom_level: u8,
    pending_click: Option<GeoPoint>,
}

impl TrackerController {
    pub fn new(
        service: TrackerService,
        map: Arc<dyn MapView>,
        form: Arc<dyn FormView>,
        list: Arc<dyn ListView>,
        map_settings: &MapSettings,
    ) -> Self {
        Self {
            service,
            map,
            form,
            list,
            zoom_level: map_settings.zoom_level,
            pending_click: None,
        }
    }

    /// Rehydrate the persisted snapshot and render a list entry per record.
    /// Markers wait until the map reports a position.
    pub async fn start(&mut self) {
        let restored = self.service.rehydrate().await;
        if restored > 0 {
            tracing::info!(restored, "restored workouts from snapshot");
        }
        for workout in self.service.workouts() {
            self.list.render_entry(workout);
        }
    }

    /// Drain the event channel until the host closes it, then hand the
    /// controller back so the driver can inspect final state.
    pub async fn run(mut self, events: mpsc::Receiver<UiEvent>) -> Self {
        let mut events = ReceiverStream::new(events);
        while let Some(event) = events.next().await {
            self.handle(event).await;
        }
        self
    }

    pub async fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::Geolocated(position) => self.on_geolocated(position),
            UiEvent::MapClick(coords) => self.on_map_click(coords),
            UiEvent::SportToggled => self.form.toggle_metric_inputs(),
            UiEvent::FormSubmit(fields) => self.on_form_submit(fields).await,
            UiEvent::ListClick { workout_id } => self.on_list_click(&workout_id),
        }
    }

    pub fn workouts(&self) -> &[Workout] {
        self.service.workouts()
    }

    fn on_geolocated(&mut self, position: Option<GeoPoint>) {
        let Some(position) = position else {
            tracing::warn!("geolocation unavailable, map stays unloaded");
            self.form.alert(GEOLOCATION_ALERT);
            return;
        };

        self.map.center_on(position, self.zoom_level);
        for workout in self.service.workouts() {
            self.map
                .place_marker(workout.coords, &format::marker_label(workout));
        }
    }

    fn on_map_click(&mut self, coords: GeoPoint) {
        self.pending_click = Some(coords);
        self.form.open();
    }

    async fn on_form_submit(&mut self, fields: FormFields) {
        let Some(coords) = self.pending_click else {
            tracing::warn!("form submitted without a map click, ignoring");
            return;
        };
        let Some(sport) = Sport::from_tag(fields.sport.trim()) else {
            tracing::warn!(sport = %fields.sport, "unknown workout type, ignoring submission");
            return;
        };

        let distance_km = numeric(&fields.distance);
        let duration_min = numeric(&fields.duration);
        let draft = match sport {
            Sport::Running => WorkoutDraft::Running {
                coords,
                distance_km,
                duration_min,
                cadence_spm: optional_numeric(fields.cadence.as_deref()),
            },
            Sport::Cycling => WorkoutDraft::Cycling {
                coords,
                distance_km,
                duration_min,
                elevation_gain_m: optional_numeric(fields.elevation.as_deref()),
            },
        };

        let workout = match self.service.create_workout(draft) {
            Ok(workout) => workout,
            Err(TrackerError::InvalidInput(reason)) => {
                // Form stays open for correction.
                tracing::debug!(%reason, "rejected workout input");
                self.form.alert(INVALID_INPUT_ALERT);
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not create workout");
                return;
            }
        };

        self.map
            .place_marker(workout.coords, &format::marker_label(&workout));
        self.list.render_entry(&workout);
        self.form.clear_and_hide();
        self.pending_click = None;

        if let Err(e) = self.service.persist().await {
            tracing::warn!(error = %e, "could not persist workouts, keeping session state");
        }
    }

    fn on_list_click(&mut self, workout_id: &str) {
        match self.service.locate(workout_id) {
            Ok(workout) => self.map.center_on(workout.coords, self.zoom_level),
            Err(e) => tracing::warn!(error = %e, "list entry does not resolve to a workout"),
        }
    }
}

/// Coerce a raw form field. Anything non-numeric becomes NaN, which the
/// validator rejects.
fn numeric(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

fn optional_numeric(raw: Option<&str>) -> f64 {
    raw.map(numeric).unwrap_or(f64::NAN)
}
