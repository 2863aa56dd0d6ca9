// End-to-end controller flow against recording collaborator doubles and the
// real JSON snapshot repository.

use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::sync::mpsc;
use workout_tracker::application::tracker_service::TrackerService;
use workout_tracker::domain::geo::GeoPoint;
use workout_tracker::domain::workout::{Sport, Workout, WorkoutDetails};
use workout_tracker::infrastructure::config::MapSettings;
use workout_tracker::infrastructure::file_repository::JsonFileRepository;
use workout_tracker::presentation::controller::TrackerController;
use workout_tracker::presentation::events::{FormFields, UiEvent};
use workout_tracker::presentation::views::{FormView, ListView, MapView};

#[derive(Default)]
struct RecordingMap {
    markers: Mutex<Vec<(GeoPoint, String)>>,
    centers: Mutex<Vec<(GeoPoint, u8)>>,
}

impl MapView for RecordingMap {
    fn place_marker(&self, coords: GeoPoint, label: &str) {
        self.markers.lock().unwrap().push((coords, label.to_string()));
    }

    fn center_on(&self, coords: GeoPoint, zoom: u8) {
        self.centers.lock().unwrap().push((coords, zoom));
    }
}

#[derive(Default)]
struct RecordingForm {
    opened: Mutex<u32>,
    cleared: Mutex<u32>,
    toggled: Mutex<u32>,
    alerts: Mutex<Vec<String>>,
}

impl FormView for RecordingForm {
    fn open(&self) {
        *self.opened.lock().unwrap() += 1;
    }

    fn clear_and_hide(&self) {
        *self.cleared.lock().unwrap() += 1;
    }

    fn toggle_metric_inputs(&self) {
        *self.toggled.lock().unwrap() += 1;
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
struct RecordingList {
    entry_ids: Mutex<Vec<String>>,
}

impl ListView for RecordingList {
    fn render_entry(&self, workout: &Workout) {
        self.entry_ids.lock().unwrap().push(workout.id.clone());
    }
}

struct Harness {
    controller: TrackerController,
    map: Arc<RecordingMap>,
    form: Arc<RecordingForm>,
    list: Arc<RecordingList>,
    _dir: TempDir,
}

fn harness() -> Harness {
    let dir = tempfile::tempdir().unwrap();
    harness_at(dir)
}

fn harness_at(dir: TempDir) -> Harness {
    let repository = Arc::new(JsonFileRepository::new(dir.path().join("workouts.json")));
    let map = Arc::new(RecordingMap::default());
    let form = Arc::new(RecordingForm::default());
    let list = Arc::new(RecordingList::default());
    let controller = TrackerController::new(
        TrackerService::new(repository),
        map.clone(),
        form.clone(),
        list.clone(),
        &MapSettings::default(),
    );
    Harness {
        controller,
        map,
        form,
        list,
        _dir: dir,
    }
}

fn running_submit(distance: &str, duration: &str, cadence: &str) -> UiEvent {
    UiEvent::FormSubmit(FormFields {
        sport: "running".into(),
        distance: distance.into(),
        duration: duration.into(),
        cadence: Some(cadence.into()),
        elevation: None,
    })
}

fn cycling_submit(distance: &str, duration: &str, elevation: &str) -> UiEvent {
    UiEvent::FormSubmit(FormFields {
        sport: "cycling".into(),
        distance: distance.into(),
        duration: duration.into(),
        cadence: None,
        elevation: Some(elevation.into()),
    })
}

#[tokio::test]
async fn running_submission_appends_renders_and_persists() {
    let mut h = harness();
    h.controller.start().await;

    h.controller
        .handle(UiEvent::MapClick(GeoPoint::new(10.0, 20.0)))
        .await;
    assert_eq!(*h.form.opened.lock().unwrap(), 1);

    h.controller.handle(running_submit("5", "30", "150")).await;

    let workouts = h.controller.workouts();
    assert_eq!(workouts.len(), 1);
    let workout = &workouts[0];
    assert_eq!(workout.sport(), Sport::Running);
    assert_eq!(workout.coords, GeoPoint::new(10.0, 20.0));
    match workout.details {
        WorkoutDetails::Running {
            pace_min_per_km, ..
        } => assert_eq!(pace_min_per_km, 6.0),
        _ => panic!("expected a running record"),
    }

    // Marker, list entry, and a cleared form
    assert_eq!(h.map.markers.lock().unwrap().len(), 1);
    assert_eq!(h.list.entry_ids.lock().unwrap().as_slice(), &[workout.id.clone()]);
    assert_eq!(*h.form.cleared.lock().unwrap(), 1);
    assert!(h.form.alerts.lock().unwrap().is_empty());

    // Snapshot written
    assert!(h._dir.path().join("workouts.json").exists());
}

#[tokio::test]
async fn cycling_submission_derives_speed() {
    let mut h = harness();
    h.controller
        .handle(UiEvent::MapClick(GeoPoint::new(0.0, 0.0)))
        .await;
    h.controller.handle(cycling_submit("20", "60", "400")).await;

    let workouts = h.controller.workouts();
    assert_eq!(workouts.len(), 1);
    match workouts[0].details {
        WorkoutDetails::Cycling { speed_km_per_h, .. } => assert_eq!(speed_km_per_h, 20.0),
        _ => panic!("expected a cycling record"),
    }
}

#[tokio::test]
async fn invalid_distance_alerts_and_leaves_store_empty() {
    let mut h = harness();
    h.controller
        .handle(UiEvent::MapClick(GeoPoint::new(1.0, 1.0)))
        .await;
    h.controller.handle(running_submit("-5", "30", "150")).await;

    assert!(h.controller.workouts().is_empty());
    assert_eq!(
        h.form.alerts.lock().unwrap().as_slice(),
        &["Inputs have to be positive numbers!".to_string()]
    );
    // Form was not cleared, no render requests went out, nothing was saved
    assert_eq!(*h.form.cleared.lock().unwrap(), 0);
    assert!(h.map.markers.lock().unwrap().is_empty());
    assert!(h.list.entry_ids.lock().unwrap().is_empty());
    assert!(!h._dir.path().join("workouts.json").exists());
}

#[tokio::test]
async fn non_numeric_input_is_rejected_like_a_negative_one() {
    let mut h = harness();
    h.controller
        .handle(UiEvent::MapClick(GeoPoint::new(1.0, 1.0)))
        .await;
    h.controller.handle(running_submit("5k", "30", "150")).await;

    assert!(h.controller.workouts().is_empty());
    assert_eq!(h.form.alerts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn submit_without_map_click_is_ignored() {
    let mut h = harness();
    h.controller.handle(running_submit("5", "30", "150")).await;

    assert!(h.controller.workouts().is_empty());
    assert!(h.form.alerts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn list_click_centers_map_on_the_right_record() {
    let mut h = harness();
    h.controller
        .handle(UiEvent::MapClick(GeoPoint::new(10.0, 20.0)))
        .await;
    h.controller.handle(running_submit("5", "30", "150")).await;
    // Ids derive from the creation millisecond; space the records out so
    // they stay distinct.
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    h.controller
        .handle(UiEvent::MapClick(GeoPoint::new(30.0, 40.0)))
        .await;
    h.controller.handle(cycling_submit("20", "60", "400")).await;

    let target_id = h.controller.workouts()[1].id.clone();
    h.controller
        .handle(UiEvent::ListClick {
            workout_id: target_id,
        })
        .await;

    let centers = h.map.centers.lock().unwrap();
    let (coords, zoom) = centers.last().copied().unwrap();
    assert_eq!(coords, GeoPoint::new(30.0, 40.0));
    assert_eq!(zoom, 13);
}

#[tokio::test]
async fn unknown_list_id_is_a_no_op() {
    let mut h = harness();
    h.controller
        .handle(UiEvent::ListClick {
            workout_id: "no-such-id".into(),
        })
        .await;

    assert!(h.map.centers.lock().unwrap().is_empty());
    assert!(h.form.alerts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn denied_geolocation_alerts_and_loads_no_markers() {
    let mut h = harness();
    h.controller.handle(UiEvent::Geolocated(None)).await;

    assert_eq!(
        h.form.alerts.lock().unwrap().as_slice(),
        &["Could not get your position".to_string()]
    );
    assert!(h.map.centers.lock().unwrap().is_empty());
}

#[tokio::test]
async fn restart_rehydrates_list_entries_and_markers() {
    let dir = tempfile::tempdir().unwrap();

    // First session logs two workouts
    let mut first = harness_at(dir);
    first.controller.start().await;
    first
        .controller
        .handle(UiEvent::MapClick(GeoPoint::new(10.0, 20.0)))
        .await;
    first.controller.handle(running_submit("5", "30", "150")).await;
    first
        .controller
        .handle(UiEvent::MapClick(GeoPoint::new(30.0, 40.0)))
        .await;
    first.controller.handle(cycling_submit("20", "60", "400")).await;
    let saved: Vec<Workout> = first.controller.workouts().to_vec();
    let dir = first._dir;

    // Second session sees the same records, in order, as stored
    let mut second = harness_at(dir);
    second.controller.start().await;
    assert_eq!(second.controller.workouts(), saved.as_slice());
    assert_eq!(second.list.entry_ids.lock().unwrap().len(), 2);

    // Markers appear once the map has a position
    second
        .controller
        .handle(UiEvent::Geolocated(Some(GeoPoint::new(0.0, 0.0))))
        .await;
    assert_eq!(second.map.markers.lock().unwrap().len(), 2);
    assert_eq!(second.map.centers.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn event_channel_drives_the_loop_until_closed() {
    let h = harness();
    let (tx, rx) = mpsc::channel(8);

    tx.send(UiEvent::MapClick(GeoPoint::new(10.0, 20.0)))
        .await
        .unwrap();
    tx.send(running_submit("5", "30", "150")).await.unwrap();
    tx.send(UiEvent::SportToggled).await.unwrap();
    drop(tx);

    let controller = h.controller.run(rx).await;
    assert_eq!(controller.workouts().len(), 1);
    assert_eq!(*h.form.toggled.lock().unwrap(), 1);
}
