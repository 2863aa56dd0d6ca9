// UI events delivered by the host shell

use crate::domain::geo::GeoPoint;

/// Discrete user actions and the one-shot geolocation result, delivered over
/// the controller's event channel. One event is handled at a time.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Startup geolocation callback. `None` when the position was denied or
    /// unavailable; the map then never loads.
    Geolocated(Option<GeoPoint>),
    /// The user clicked a point on the map.
    MapClick(GeoPoint),
    /// The form's type selector changed between running and cycling.
    SportToggled,
    /// The form was submitted with its raw field values.
    FormSubmit(FormFields),
    /// A rendered list entry was clicked.
    ListClick { workout_id: String },
}

/// Field values exactly as the form captured them. Coercion to numbers (and
/// rejection of anything non-numeric) is the controller's job.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub sport: String,
    pub distance: String,
    pub duration: String,
    pub cadence: Option<String>,
    pub elevation: Option<String>,
}
