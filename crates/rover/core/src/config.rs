use crate::grid::{GridDimensions, GridError};

/// When the engine checks the rover against obstacles.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CollisionPolicy {
    /// A move into an obstacle crashes at once, reporting the obstacle cell.
    /// The move is not committed.
    #[default]
    OnEntry,
    /// Only the current cell is checked, at the start of each step. A rover
    /// that drives onto an obstacle is flagged on the following character,
    /// or never if none follows.
    BeforeStep,
}

/// Rules for a simulation: the grid and the collision policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    pub grid: GridDimensions,
    pub collision: CollisionPolicy,
}

impl SimulationConfig {
    pub fn new(grid: GridDimensions) -> Self {
        Self {
            grid,
            collision: CollisionPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_collision(mut self, collision: CollisionPolicy) -> Self {
        self.collision = collision;
        self
    }

    pub fn validate(&self) -> Result<(), GridError> {
        self.grid.validate()
    }
}
