use crate::state::{Position, RoverState};

/// Result of interpreting one character of the command string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "outcome", rename_all = "snake_case"))]
pub enum StepOutcome {
    /// The character was not a recognized command.
    Skipped { code: char },

    /// The rover rotated in place.
    Turned { rover: RoverState },

    /// The rover advanced one cell. The cell it left is the last entry of
    /// [`Simulation::path`](crate::Simulation::path).
    Moved { rover: RoverState },

    /// The rover hit an obstacle at `position`. Terminal.
    Crashed { position: Position },

    /// A move would have left the grid; `position` is the rejected cell, or
    /// the rover's own cell when the one ahead is past the `i32` range.
    /// Terminal.
    OutOfBounds { position: Position },

    /// Every character has been interpreted. Terminal.
    Completed,
}

impl StepOutcome {
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            StepOutcome::Crashed { .. } | StepOutcome::OutOfBounds { .. } | StepOutcome::Completed
        )
    }
}
