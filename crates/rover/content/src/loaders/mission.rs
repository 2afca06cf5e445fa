//! Mission plan loader.
//!
//! Reads the JSON document a mission service returns and converts it into a
//! [`CommandPlan`]. Obstacles are called "weirs" on the wire.

use std::path::Path;

use rover_core::{CommandPlan, Position};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Wire shape of a mission document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MissionJson {
    start_point: Position,
    #[serde(default)]
    weirs: Vec<Position>,
    command: String,
}

/// Loader for mission plans from JSON files.
pub struct MissionLoader;

impl MissionLoader {
    /// Load a mission plan from a JSON file.
    ///
    /// The plan is decoded only; [`CommandPlan::validate`] runs when the
    /// engine accepts it.
    pub fn load(path: &Path) -> LoadResult<CommandPlan> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load mission {}: {}", path.display(), e))
    }

    /// Decode a mission plan from a JSON string.
    pub fn parse(json: &str) -> LoadResult<CommandPlan> {
        let data: MissionJson = serde_json::from_str(json)
            .map_err(|e| anyhow::anyhow!("Failed to parse mission JSON: {}", e))?;

        Ok(CommandPlan::new(data.start_point, data.weirs, data.command))
    }

    /// Encode a plan back into the mission wire shape.
    pub fn to_json(plan: &CommandPlan) -> LoadResult<String> {
        let data = MissionJson {
            start_point: plan.start(),
            weirs: plan.obstacles().iter().copied().collect(),
            command: plan.commands().to_owned(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }
}
