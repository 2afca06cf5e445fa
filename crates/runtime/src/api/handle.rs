//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RoverHandle`] hides channel plumbing and offers async helpers for
//! starting and cancelling runs or streaming their events.
use tokio::sync::{broadcast, mpsc, oneshot};

use rover_core::CommandPlan;

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, RunId, RunStatus};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RoverHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RoverHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    pub(crate) fn command_tx(&self) -> &mpsc::Sender<Command> {
        &self.command_tx
    }

    /// Start a run for `plan`.
    ///
    /// An active run is cancelled and awaited first. The plan is validated
    /// before anything else happens; a rejected plan leaves the active run
    /// untouched.
    pub async fn start(&self, plan: CommandPlan) -> Result<RunId> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Start {
                plan,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Cancel the active run and wait until it has stopped.
    ///
    /// A no-op when nothing is running, including after a run finished on its
    /// own or was already cancelled.
    pub async fn cancel(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Cancel { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Query the most recent run (read-only snapshot)
    pub async fn status(&self) -> Result<RunStatus> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryStatus { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to run events
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut events = handle.subscribe();
    /// handle.start(plan).await?;
    /// while let Ok(event) = events.recv().await {
    ///     if event.is_terminal() {
    ///         break;
    ///     }
    /// }
    /// ```
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe()
    }
}
