use std::collections::BTreeSet;

use crate::command::Command;
use crate::grid::GridError;
use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("command plan has no commands")]
    EmptyCommands,

    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
}

/// Immutable mission input: where the rover lands, what it must avoid, and
/// what to do.
///
/// Start and obstacle coordinates are taken as given. Only positions produced
/// by moves are range-checked, by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandPlan {
    start: Position,
    obstacles: BTreeSet<Position>,
    commands: String,
}

impl CommandPlan {
    pub fn new(
        start: Position,
        obstacles: impl IntoIterator<Item = Position>,
        commands: impl Into<String>,
    ) -> Self {
        Self {
            start,
            obstacles: obstacles.into_iter().collect(),
            commands: commands.into(),
        }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn obstacles(&self) -> &BTreeSet<Position> {
        &self.obstacles
    }

    pub fn is_obstacle(&self, position: Position) -> bool {
        self.obstacles.contains(&position)
    }

    pub fn commands(&self) -> &str {
        &self.commands
    }

    /// Number of paced steps a full run takes, ignored characters included.
    pub fn step_count(&self) -> usize {
        self.commands.chars().count()
    }

    /// Number of characters that decode to a [`Command`].
    pub fn recognized_count(&self) -> usize {
        self.commands
            .chars()
            .filter(|code| Command::from_code(*code).is_some())
            .count()
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        if self.commands.is_empty() {
            return Err(PlanError::EmptyCommands);
        }
        Ok(())
    }
}
