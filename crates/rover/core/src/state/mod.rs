//! Rover state types shared by the engine and its observers.
mod common;
mod heading;

pub use common::Position;
pub use heading::Heading;

/// Where the rover is and which way it faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoverState {
    pub position: Position,
    pub heading: Heading,
}

impl RoverState {
    /// Every run starts facing north.
    pub const fn landed_at(position: Position) -> Self {
        Self {
            position,
            heading: Heading::North,
        }
    }

    pub fn turn_left(&mut self) {
        self.heading = self.heading.turn_left();
    }

    pub fn turn_right(&mut self) {
        self.heading = self.heading.turn_right();
    }

    /// Cell one move ahead, not range-checked against any grid. `None` when
    /// the cell lies past the `i32` coordinate range.
    pub const fn ahead(&self) -> Option<Position> {
        self.position.offset(self.heading.delta())
    }
}

/// Lifecycle of a single run.
///
/// `Idle → Running → {Completed, Crashed, OutOfBounds, Cancelled}`; the four
/// outcomes are final.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum RunPhase {
    #[default]
    Idle,
    Running,
    Completed,
    Crashed,
    OutOfBounds,
    Cancelled,
}

impl RunPhase {
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            RunPhase::Completed | RunPhase::Crashed | RunPhase::OutOfBounds | RunPhase::Cancelled
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landed_rover_faces_north() {
        let rover = RoverState::landed_at(Position::new(3, 4));
        assert_eq!(rover.heading, Heading::North);
        assert_eq!(rover.ahead(), Some(Position::new(3, 5)));
    }

    #[test]
    fn turning_never_moves_the_rover() {
        let mut rover = RoverState::landed_at(Position::new(2, 2));
        rover.turn_right();
        rover.turn_right();
        rover.turn_left();
        assert_eq!(rover.position, Position::new(2, 2));
        assert_eq!(rover.heading, Heading::East);
        assert_eq!(rover.ahead(), Some(Position::new(3, 2)));
    }

    #[test]
    fn only_outcomes_are_terminal() {
        assert!(!RunPhase::Idle.is_terminal());
        assert!(!RunPhase::Running.is_terminal());
        assert!(RunPhase::Completed.is_terminal());
        assert!(RunPhase::Crashed.is_terminal());
        assert!(RunPhase::OutOfBounds.is_terminal());
        assert!(RunPhase::Cancelled.is_terminal());
        assert_eq!(RunPhase::OutOfBounds.to_string(), "out_of_bounds");
    }
}
