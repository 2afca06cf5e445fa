//! Controller worker that owns the lifecycle of runs.
//!
//! Receives commands from [`RoverHandle`](crate::RoverHandle), validates
//! plans, and makes sure at most one [`RunTask`] is alive at a time: a new
//! `Start` cancels and awaits the previous run before spawning the next.
//! A run task that dies without reaching a terminal phase is closed out
//! here as cancelled, so observers and `status()` never see it hang.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, info, warn};

use rover_core::{CommandPlan, RunPhase, Simulation, SimulationConfig};

use super::run::RunTask;
use crate::api::{Result, RunObserver};
use crate::events::{Event, RoverEvent, RunId, RunStatus};

/// Commands that can be sent to the controller worker
pub enum Command {
    /// Start a run, replacing any active one.
    Start {
        plan: CommandPlan,
        reply: oneshot::Sender<Result<RunId>>,
    },
    /// Cancel the active run and reply once it has stopped.
    Cancel { reply: oneshot::Sender<()> },
    /// Query the most recent run (read-only).
    QueryStatus { reply: oneshot::Sender<RunStatus> },
    /// Stop the active run and exit the worker loop.
    Shutdown { reply: oneshot::Sender<()> },
}

struct ActiveRun {
    id: RunId,
    cancel_tx: watch::Sender<bool>,
    task: JoinHandle<RunPhase>,
}

/// Background task that processes run commands.
pub struct ControllerWorker {
    simulation: SimulationConfig,
    step_delay: Duration,
    command_rx: mpsc::Receiver<Command>,
    observers: Arc<[Arc<dyn RunObserver>]>,
    next_id: RunId,
    active: Option<ActiveRun>,
    status: watch::Sender<RunStatus>,
}

impl ControllerWorker {
    /// Creates a new controller worker.
    pub fn new(
        simulation: SimulationConfig,
        step_delay: Duration,
        command_rx: mpsc::Receiver<Command>,
        observers: Arc<[Arc<dyn RunObserver>]>,
    ) -> Self {
        info!(
            "ControllerWorker initialized: grid {}x{}, collision {}, step delay {:?}, {} observers",
            simulation.grid.width,
            simulation.grid.height,
            simulation.collision,
            step_delay,
            observers.len()
        );

        Self {
            simulation,
            step_delay,
            command_rx,
            observers,
            next_id: RunId::FIRST,
            active: None,
            status: watch::Sender::new(RunStatus::default()),
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => {
                    let Some(cmd) = cmd else { break };
                    if !self.handle_command(cmd).await {
                        return;
                    }
                }
                result = finished(&mut self.active) => {
                    if let Some(active) = self.active.take() {
                        self.reap(active.id, result);
                    }
                }
            }
        }

        debug!("Command channel closed");
        self.stop_active().await;
    }

    /// Returns false once the worker should exit.
    async fn handle_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Start { plan, reply } => {
                let result = self.handle_start(plan).await;
                if reply.send(result).is_err() {
                    debug!("Start reply channel closed (caller dropped)");
                }
            }
            Command::Cancel { reply } => {
                self.stop_active().await;
                if reply.send(()).is_err() {
                    debug!("Cancel reply channel closed (caller dropped)");
                }
            }
            Command::QueryStatus { reply } => {
                let status = self.status.borrow().clone();
                if reply.send(status).is_err() {
                    debug!("QueryStatus reply channel closed (caller dropped)");
                }
            }
            Command::Shutdown { reply } => {
                info!("Shutdown command received");
                self.stop_active().await;
                if reply.send(()).is_err() {
                    debug!("Shutdown reply channel closed (caller dropped)");
                }
                return false;
            }
        }
        true
    }

    fn prepare(&self, plan: CommandPlan) -> Result<Simulation> {
        Simulation::new(self.simulation, plan).map_err(|error| {
            warn!(error = %error, "Rejected command plan");
            error.into()
        })
    }

    async fn handle_start(&mut self, plan: CommandPlan) -> Result<RunId> {
        // Reject bad input before disturbing the active run.
        let simulation = self.prepare(plan)?;

        self.stop_active().await;

        let id = self.next_id;
        self.next_id = id.next();

        let (cancel_tx, cancel_rx) = watch::channel(false);
        self.status.send_replace(RunStatus {
            run: Some(id),
            phase: RunPhase::Running,
            rover: Some(simulation.rover()),
            ..RunStatus::default()
        });

        let task = RunTask::new(
            id,
            simulation,
            self.step_delay,
            cancel_rx,
            self.status.clone(),
            Arc::clone(&self.observers),
        );
        let task = tokio::spawn(task.run());

        self.active = Some(ActiveRun {
            id,
            cancel_tx,
            task,
        });
        Ok(id)
    }

    /// Requests cancellation of the active run, if any, and waits for its
    /// task to finish. Runs that already ended are simply reaped.
    async fn stop_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        // Fails only when the task already dropped its receiver (finished).
        let _ = active.cancel_tx.send(true);

        let result = active.task.await;
        self.reap(active.id, result);
    }

    fn reap(&self, id: RunId, result: std::result::Result<RunPhase, JoinError>) {
        match result {
            Ok(phase) => debug!(run = %id, phase = %phase, "Run stopped"),
            Err(e) => {
                error!(run = %id, error = %e, "Run task failed");
                self.close_failed(id);
            }
        }
    }

    /// Moves a run whose task died mid-flight to `Cancelled` and tells
    /// observers, unless it had already reached a terminal phase.
    fn close_failed(&self, id: RunId) {
        let mut sequence = None;
        self.status.send_if_modified(|status| {
            if status.run != Some(id) || status.phase.is_terminal() {
                return false;
            }
            status.phase = RunPhase::Cancelled;
            sequence = Some(status.events_emitted);
            status.events_emitted += 1;
            true
        });

        if let Some(sequence) = sequence {
            let event = Event {
                run: id,
                sequence,
                event: RoverEvent::Cancelled,
            };
            for observer in self.observers.iter() {
                observer.notify(&event);
            }
        }
    }
}

/// Resolves when the active run task ends; pending while there is none.
async fn finished(active: &mut Option<ActiveRun>) -> std::result::Result<RunPhase, JoinError> {
    match active {
        Some(run) => (&mut run.task).await,
        None => std::future::pending().await,
    }
}
