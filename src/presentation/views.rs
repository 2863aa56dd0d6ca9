// Collaborator boundaries owned by the host UI

use crate::domain::geo::GeoPoint;
use crate::domain::workout::Workout;

/// Map collaborator: accepts marker and re-center requests.
pub trait MapView: Send + Sync {
    fn place_marker(&self, coords: GeoPoint, label: &str);
    fn center_on(&self, coords: GeoPoint, zoom: u8);
}

/// Form collaborator. `alert` is the blocking user-facing warning surface.
pub trait FormView: Send + Sync {
    fn open(&self);
    fn clear_and_hide(&self);
    fn toggle_metric_inputs(&self);
    fn alert(&self, message: &str);
}

/// List collaborator: each rendered entry carries the record's id as the
/// click-to-locate key.
pub trait ListView: Send + Sync {
    fn render_entry(&self, workout: &Workout);
}
