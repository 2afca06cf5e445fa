//! Mission source backed by a JSON file on disk.
use std::path::PathBuf;

use async_trait::async_trait;
use rover_content::MissionLoader;
use rover_core::CommandPlan;
use rover_runtime::{PlanProvider, Result, RuntimeError};

/// Reads the mission file each time a plan is requested, so edits between
/// launches are picked up.
pub struct MissionFileProvider {
    path: PathBuf,
}

impl MissionFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PlanProvider for MissionFileProvider {
    async fn provide_plan(&self) -> Result<CommandPlan> {
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || MissionLoader::load(&path))
            .await
            .map_err(RuntimeError::WorkerJoin)?
            .map_err(|e| RuntimeError::Provider(format!("{e:#}")))
    }
}
