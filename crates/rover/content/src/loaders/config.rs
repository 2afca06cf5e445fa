//! Engine settings loader.

use std::path::Path;

use rover_core::{CollisionPolicy, GridDimensions, SimulationConfig};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Settings file contents. Every field is optional; omitted fields fall back
/// to the engine defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoverSettings {
    pub grid: Option<GridDimensions>,
    pub collision: Option<CollisionPolicy>,
    pub step_delay_ms: Option<u64>,
}

impl RoverSettings {
    /// Applies the file's grid and collision settings over `base`.
    pub fn simulation(&self, base: SimulationConfig) -> SimulationConfig {
        SimulationConfig {
            grid: self.grid.unwrap_or(base.grid),
            collision: self.collision.unwrap_or(base.collision),
        }
    }
}

/// Loader for engine settings from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from a TOML file.
    ///
    /// Grid dimensions are validated here so a bad file fails before any run
    /// is attempted.
    pub fn load(path: &Path) -> LoadResult<RoverSettings> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load settings {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<RoverSettings> {
        let settings: RoverSettings = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if let Some(grid) = settings.grid {
            grid.validate()?;
        }

        Ok(settings)
    }
}
