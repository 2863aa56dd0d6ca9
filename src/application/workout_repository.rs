// Repository trait for the persisted workout snapshot

use crate::domain::workout::Workout;
use async_trait::async_trait;

/// Persistence collaborator. The snapshot is a direct structural encoding of
/// the stored records; `load` hands them back exactly as saved.
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    /// Overwrite the snapshot with the full record sequence.
    async fn save(&self, workouts: &[Workout]) -> anyhow::Result<()>;

    /// Read the snapshot. `None` means nothing has been saved yet.
    async fn load(&self) -> anyhow::Result<Option<Vec<Workout>>>;
}
