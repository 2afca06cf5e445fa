//! Synchronous observer interface for run events.
//!
//! Observers are invoked from the run task itself, one event at a time, in
//! emission order. Implementations that need another execution context (a UI
//! thread, an async task) should hand the event off rather than block.
use rover_core::{Heading, PathSegment, Position, RoverState};

use crate::events::{Event, EventBus, RoverEvent, RunId};

/// Receives run events as they happen.
///
/// Every callback has an empty default, so implementors override only what
/// they care about. [`RunObserver::notify`] dispatches an [`Event`] to the
/// matching callback; override it instead to consume whole envelopes.
pub trait RunObserver: Send + Sync {
    fn on_run_started(&self, _run: RunId, _rover: RoverState, _obstacles: &[Position]) {}

    fn on_rover_moved(&self, _position: Position, _heading: Heading) {}

    fn on_path_updated(&self, _segments: &[PathSegment]) {}

    fn on_crashed(&self, _position: Position) {}

    fn on_out_of_bounds(&self, _position: Position) {}

    fn on_cancelled(&self) {}

    fn on_completed(&self) {}

    fn notify(&self, event: &Event) {
        match &event.event {
            RoverEvent::RunStarted { rover, obstacles } => {
                self.on_run_started(event.run, *rover, obstacles)
            }
            RoverEvent::RoverMoved { position, heading } => self.on_rover_moved(*position, *heading),
            RoverEvent::PathUpdated { segments } => self.on_path_updated(segments),
            RoverEvent::Crashed { position } => self.on_crashed(*position),
            RoverEvent::OutOfBounds { position } => self.on_out_of_bounds(*position),
            RoverEvent::Cancelled => self.on_cancelled(),
            RoverEvent::Completed => self.on_completed(),
        }
    }
}

impl RunObserver for EventBus {
    fn notify(&self, event: &Event) {
        self.publish(event.clone());
    }
}
