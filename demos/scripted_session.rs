// Scripted end-to-end session with console-backed collaborators. Stands in
// for a host shell: wires the controller the way a real UI would, then feeds
// it a short sequence of events.

use std::sync::Arc;
use tokio::sync::mpsc;
use workout_tracker::application::tracker_service::TrackerService;
use workout_tracker::domain::geo::GeoPoint;
use workout_tracker::domain::workout::Workout;
use workout_tracker::infrastructure::config::load_tracker_config;
use workout_tracker::infrastructure::file_repository::JsonFileRepository;
use workout_tracker::presentation::controller::TrackerController;
use workout_tracker::presentation::events::{FormFields, UiEvent};
use workout_tracker::presentation::format;
use workout_tracker::presentation::views::{FormView, ListView, MapView};

struct ConsoleMap;

impl MapView for ConsoleMap {
    fn place_marker(&self, coords: GeoPoint, label: &str) {
        println!("[map] marker at ({:.4}, {:.4}): {}", coords.lat, coords.lng, label);
    }

    fn center_on(&self, coords: GeoPoint, zoom: u8) {
        println!(
            "[map] centered on ({:.4}, {:.4}) at zoom {}",
            coords.lat, coords.lng, zoom
        );
    }
}

struct ConsoleForm;

impl FormView for ConsoleForm {
    fn open(&self) {
        println!("[form] opened");
    }

    fn clear_and_hide(&self) {
        println!("[form] cleared and hidden");
    }

    fn toggle_metric_inputs(&self) {
        println!("[form] toggled cadence/elevation inputs");
    }

    fn alert(&self, message: &str) {
        println!("[form] ALERT: {}", message);
    }
}

struct ConsoleList;

impl ListView for ConsoleList {
    fn render_entry(&self, workout: &Workout) {
        println!(
            "[list] #{} {} ({})",
            workout.id,
            workout.description,
            format::metric_summary(workout)
        );
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    workout_tracker::init_tracing();

    // Wire the controller the way a host shell would at startup
    let config = load_tracker_config()?;
    let repository = Arc::new(JsonFileRepository::new(&config.storage.snapshot_path));
    let service = TrackerService::new(repository);
    let mut controller = TrackerController::new(
        service,
        Arc::new(ConsoleMap),
        Arc::new(ConsoleForm),
        Arc::new(ConsoleList),
        &config.map,
    );
    controller.start().await;

    // A short session: locate the user, then log one run and one ride
    let (tx, rx) = mpsc::channel(16);
    let script = vec![
        UiEvent::Geolocated(Some(GeoPoint::new(46.9480, 7.4474))),
        UiEvent::MapClick(GeoPoint::new(46.9585, 7.4396)),
        UiEvent::FormSubmit(FormFields {
            sport: "running".into(),
            distance: "5".into(),
            duration: "30".into(),
            cadence: Some("150".into()),
            elevation: None,
        }),
        UiEvent::MapClick(GeoPoint::new(46.9312, 7.4102)),
        UiEvent::SportToggled,
        UiEvent::FormSubmit(FormFields {
            sport: "cycling".into(),
            distance: "20".into(),
            duration: "60".into(),
            cadence: None,
            elevation: Some("400".into()),
        }),
    ];
    for event in script {
        tx.send(event).await.expect("event channel closed early");
    }
    drop(tx);

    let controller = controller.run(rx).await;
    println!(
        "session closed with {} stored workouts",
        controller.workouts().len()
    );

    Ok(())
}
