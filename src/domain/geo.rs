// Geographic coordinates as handed over by the map collaborator

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair. The core treats it as opaque: coordinates are
/// never validated or transformed, only carried between the map and the store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
