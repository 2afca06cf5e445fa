//! Event and status types published by run tasks.

use std::fmt;

use rover_core::{Heading, PathSegment, Position, RoverState, RunPhase};
use serde::{Deserialize, Serialize};

/// Identifier of one accepted `start` call. Increases monotonically per
/// runtime, starting at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RunId(pub u64);

impl RunId {
    pub const FIRST: Self = Self(1);

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run#{}", self.0)
    }
}

/// State change observed during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoverEvent {
    /// The rover has landed at the plan's start, facing north.
    RunStarted {
        rover: RoverState,
        obstacles: Vec<Position>,
    },

    /// Position or heading changed (moves and turns).
    RoverMoved { position: Position, heading: Heading },

    /// The full trail so far, resent after every committed move.
    PathUpdated { segments: Vec<PathSegment> },

    /// The rover hit an obstacle. Terminal.
    Crashed { position: Position },

    /// A move would have left the grid at `position`. Terminal.
    OutOfBounds { position: Position },

    /// The run was cancelled before finishing. Terminal.
    Cancelled,

    /// Every command was interpreted. Terminal.
    Completed,
}

impl RoverEvent {
    pub fn is_terminal(&self) -> bool {
        self.phase().is_some()
    }

    /// Terminal phase this event reports, if any.
    pub fn phase(&self) -> Option<RunPhase> {
        match self {
            RoverEvent::Crashed { .. } => Some(RunPhase::Crashed),
            RoverEvent::OutOfBounds { .. } => Some(RunPhase::OutOfBounds),
            RoverEvent::Cancelled => Some(RunPhase::Cancelled),
            RoverEvent::Completed => Some(RunPhase::Completed),
            _ => None,
        }
    }

    pub fn as_snake_case(&self) -> &'static str {
        match self {
            RoverEvent::RunStarted { .. } => "run_started",
            RoverEvent::RoverMoved { .. } => "rover_moved",
            RoverEvent::PathUpdated { .. } => "path_updated",
            RoverEvent::Crashed { .. } => "crashed",
            RoverEvent::OutOfBounds { .. } => "out_of_bounds",
            RoverEvent::Cancelled => "cancelled",
            RoverEvent::Completed => "completed",
        }
    }
}

/// Event envelope tagging each event with the run that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub run: RunId,
    /// Zero-based emission index within the run.
    pub sequence: u64,
    pub event: RoverEvent,
}

impl Event {
    pub fn is_terminal(&self) -> bool {
        self.event.is_terminal()
    }
}

/// Snapshot of the most recent run, as seen by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunStatus {
    pub run: Option<RunId>,
    pub phase: RunPhase,
    pub rover: Option<RoverState>,
    /// Characters interpreted so far, ignored ones included.
    pub steps_taken: usize,
    pub path_len: usize,
    /// Events emitted by the run so far; the next event's sequence number.
    pub events_emitted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_outcomes_are_terminal() {
        let moved = RoverEvent::RoverMoved {
            position: Position::ORIGIN,
            heading: Heading::North,
        };
        assert!(!moved.is_terminal());
        assert!(RoverEvent::Cancelled.is_terminal());
        assert_eq!(
            RoverEvent::OutOfBounds {
                position: Position::new(0, 20)
            }
            .phase(),
            Some(RunPhase::OutOfBounds)
        );
    }

    #[test]
    fn events_serialize_with_a_type_tag() {
        let event = Event {
            run: RunId::FIRST,
            sequence: 3,
            event: RoverEvent::Crashed {
                position: Position::new(1, 0),
            },
        };
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["run"], 1);
        assert_eq!(json["event"]["type"], "crashed");
        assert_eq!(json["event"]["position"]["x"], 1);
    }

    #[test]
    fn run_ids_increase() {
        assert_eq!(RunId::FIRST.next(), RunId(2));
        assert_eq!(RunId(7).to_string(), "run#7");
    }
}
