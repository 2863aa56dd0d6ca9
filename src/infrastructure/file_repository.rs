// JSON snapshot repository, the local-storage stand-in

use crate::application::workout_repository::WorkoutRepository;
use crate::domain::workout::Workout;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Persists the record sequence as a pretty-printed JSON file. Each save
/// rewrites the whole snapshot; each load hands the records back as stored,
/// without re-validation or re-derivation.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl WorkoutRepository for JsonFileRepository {
    async fn save(&self, workouts: &[Workout]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create snapshot directory {}", parent.display())
                })?;
            }
        }

        let json = serde_json::to_vec_pretty(workouts).context("Failed to serialize workouts")?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write snapshot {}", self.path.display()))?;

        tracing::debug!(count = workouts.len(), path = %self.path.display(), "snapshot written");
        Ok(())
    }

    async fn load(&self) -> Result<Option<Vec<Workout>>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read snapshot {}", self.path.display())
                });
            }
        };

        let workouts = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse snapshot {}", self.path.display()))?;
        Ok(Some(workouts))
    }
}
