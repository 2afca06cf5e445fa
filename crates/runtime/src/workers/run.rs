//! Background task that drives one [`Simulation`] to a terminal phase.
//!
//! The task sleeps for the step delay before every character, then applies
//! the step and emits its events without yielding in between, so a step is
//! never interrupted halfway. Cancellation is observed only while waiting.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

use rover_core::{RunPhase, Simulation, StepOutcome};

use crate::api::RunObserver;
use crate::events::{Event, RoverEvent, RunId, RunStatus};

pub(crate) struct RunTask {
    id: RunId,
    simulation: Simulation,
    step_delay: Duration,
    cancel_rx: watch::Receiver<bool>,
    status_tx: watch::Sender<RunStatus>,
    observers: Arc<[Arc<dyn RunObserver>]>,
    sequence: u64,
}

impl RunTask {
    pub(crate) fn new(
        id: RunId,
        simulation: Simulation,
        step_delay: Duration,
        cancel_rx: watch::Receiver<bool>,
        status_tx: watch::Sender<RunStatus>,
        observers: Arc<[Arc<dyn RunObserver>]>,
    ) -> Self {
        Self {
            id,
            simulation,
            step_delay,
            cancel_rx,
            status_tx,
            observers,
            sequence: 0,
        }
    }

    /// Steps until the simulation reaches a terminal phase and returns it.
    pub(crate) async fn run(mut self) -> RunPhase {
        let rover = self.simulation.rover();
        info!(
            target: "rover::engine",
            run = %self.id,
            start = %rover.position,
            steps = self.simulation.plan().step_count(),
            obstacles = self.simulation.plan().obstacles().len(),
            "Run started"
        );

        let obstacles = self.simulation.plan().obstacles().iter().copied().collect();
        self.emit(RoverEvent::RunStarted { rover, obstacles });

        loop {
            if self.simulation.has_pending() {
                let interrupted = tokio::select! {
                    biased;
                    () = cancellation(&mut self.cancel_rx) => true,
                    () = tokio::time::sleep(self.step_delay) => false,
                };
                if interrupted {
                    self.simulation.cancel();
                    self.emit(RoverEvent::Cancelled);
                    break;
                }
            }

            let Some(outcome) = self.simulation.step() else {
                break;
            };
            self.publish(outcome);
            self.update_status();

            if outcome.is_terminal() {
                break;
            }
        }

        self.update_status();
        let phase = self.simulation.phase();
        info!(
            target: "rover::engine",
            run = %self.id,
            phase = %phase,
            position = %self.simulation.rover().position,
            path_len = self.simulation.path().len(),
            "Run finished"
        );
        phase
    }

    fn publish(&mut self, outcome: StepOutcome) {
        debug!(
            target: "rover::engine",
            run = %self.id,
            step = self.simulation.steps_taken(),
            outcome = ?outcome,
            "Step applied"
        );

        match outcome {
            StepOutcome::Skipped { .. } => {}
            StepOutcome::Turned { rover } => self.emit(RoverEvent::RoverMoved {
                position: rover.position,
                heading: rover.heading,
            }),
            StepOutcome::Moved { rover } => {
                let segments = self.simulation.path().to_vec();
                self.emit(RoverEvent::PathUpdated { segments });
                self.emit(RoverEvent::RoverMoved {
                    position: rover.position,
                    heading: rover.heading,
                });
            }
            StepOutcome::Crashed { position } => self.emit(RoverEvent::Crashed { position }),
            StepOutcome::OutOfBounds { position } => {
                self.emit(RoverEvent::OutOfBounds { position })
            }
            StepOutcome::Completed => self.emit(RoverEvent::Completed),
        }
    }

    fn emit(&mut self, event: RoverEvent) {
        let event = Event {
            run: self.id,
            sequence: self.sequence,
            event,
        };
        self.sequence += 1;
        self.update_status();

        for observer in self.observers.iter() {
            observer.notify(&event);
        }
    }

    fn update_status(&self) {
        self.status_tx.send_replace(RunStatus {
            run: Some(self.id),
            phase: self.simulation.phase(),
            rover: Some(self.simulation.rover()),
            steps_taken: self.simulation.steps_taken(),
            path_len: self.simulation.path().len(),
            events_emitted: self.sequence,
        });
    }
}

/// Resolves once cancellation is requested. A dropped sender means the
/// controller is gone, which counts as a request.
async fn cancellation(cancel_rx: &mut watch::Receiver<bool>) {
    let _ = cancel_rx.wait_for(|requested| *requested).await;
}
