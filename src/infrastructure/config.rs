use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TrackerConfig {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub map: MapSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    /// Location of the JSON workout snapshot, relative to the host's working
    /// directory unless absolute.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MapSettings {
    /// Zoom level the map is asked to use when centering on a position.
    #[serde(default = "default_zoom_level")]
    pub zoom_level: u8,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            zoom_level: default_zoom_level(),
        }
    }
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("data/workouts.json")
}

fn default_zoom_level() -> u8 {
    13
}

/// Load `config/tracker.toml`. A missing file or missing keys fall back to
/// the defaults above.
pub fn load_tracker_config() -> anyhow::Result<TrackerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/tracker").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
