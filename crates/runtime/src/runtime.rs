//! High-level runtime orchestrator.
//!
//! The runtime owns the controller worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive runs.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;

use rover_core::{CollisionPolicy, CommandPlan, GridDimensions, SimulationConfig};

use crate::api::{PlanProvider, Result, RoverHandle, RunObserver, RuntimeError};
use crate::events::{Event, EventBus, RunId, RunStatus};
use crate::workers::{Command, ControllerWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub simulation: SimulationConfig,
    /// Pause before every step's effects are applied.
    pub step_delay: Duration,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_STEP_DELAY: Duration = Duration::from_secs(1);

    #[must_use]
    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    #[must_use]
    pub fn with_simulation(mut self, simulation: SimulationConfig) -> Self {
        self.simulation = simulation;
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ROVER_GRID_WIDTH` - Grid width in cells (default: 10)
    /// - `ROVER_GRID_HEIGHT` - Grid height in cells (default: 20)
    /// - `ROVER_COLLISION` - `on_entry` or `before_step` (default: on_entry)
    /// - `ROVER_STEP_DELAY_MS` - Pause before each step (default: 1000)
    /// - `ROVER_EVENT_BUFFER` - Event bus capacity (default: 256)
    ///
    /// Unparseable values are ignored. Dimensions are validated when the
    /// runtime is built.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<u32>("ROVER_GRID_WIDTH") {
            config.simulation.grid = GridDimensions {
                width,
                ..config.simulation.grid
            };
        }

        if let Some(height) = read_env::<u32>("ROVER_GRID_HEIGHT") {
            config.simulation.grid = GridDimensions {
                height,
                ..config.simulation.grid
            };
        }

        if let Some(collision) = read_env::<CollisionPolicy>("ROVER_COLLISION") {
            config.simulation.collision = collision;
        }

        if let Some(delay_ms) = read_env::<u64>("ROVER_STEP_DELAY_MS") {
            config.step_delay = Duration::from_millis(delay_ms);
        }

        if let Some(capacity) = read_env::<usize>("ROVER_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }

        config
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            step_delay: Self::DEFAULT_STEP_DELAY,
            event_buffer_size: 256,
            command_buffer_size: 32,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Main runtime that orchestrates rover runs
///
/// Design: Runtime owns the controller worker and coordinates execution.
/// [`RoverHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RoverHandle,

    // Mission source (injected by user)
    plan_provider: Option<Box<dyn PlanProvider>>,

    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RoverHandle {
        self.handle.clone()
    }

    /// Subscribe to run events
    pub fn subscribe_events(&self) -> broadcast::Receiver<Event> {
        self.handle.subscribe()
    }

    pub async fn start(&self, plan: CommandPlan) -> Result<RunId> {
        self.handle.start(plan).await
    }

    pub async fn cancel(&self) -> Result<()> {
        self.handle.cancel().await
    }

    pub async fn status(&self) -> Result<RunStatus> {
        self.handle.status().await
    }

    /// Fetch a plan from the configured provider and start it.
    pub async fn launch(&self) -> Result<RunId> {
        let provider = self
            .plan_provider
            .as_ref()
            .ok_or(RuntimeError::ProviderNotSet)?;

        let plan = provider.provide_plan().await?;
        self.handle.start(plan).await
    }

    /// Set the mission source
    pub fn set_plan_provider(&mut self, provider: impl PlanProvider + 'static) {
        self.plan_provider = Some(Box::new(provider));
    }

    /// Shutdown the runtime gracefully
    ///
    /// Any active run is cancelled (observers see its `Cancelled` event)
    /// before the worker exits.
    pub async fn shutdown(self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        // A closed channel means the worker already exited; joining is enough.
        if self
            .handle
            .command_tx()
            .send(Command::Shutdown { reply: reply_tx })
            .await
            .is_ok()
        {
            reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?;
        }

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    plan_provider: Option<Box<dyn PlanProvider>>,
    observers: Vec<Arc<dyn RunObserver>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            plan_provider: None,
            observers: Vec::new(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the mission source used by [`Runtime::launch`] (optional)
    pub fn plan_provider(mut self, provider: impl PlanProvider + 'static) -> Self {
        self.plan_provider = Some(Box::new(provider));
        self
    }

    /// Register an observer called synchronously for every event.
    ///
    /// Observers run in registration order, before the event reaches bus
    /// subscribers.
    pub fn observer(mut self, observer: impl RunObserver + 'static) -> Self {
        self.observers.push(Arc::new(observer));
        self
    }

    /// Register an observer that is shared with the caller.
    pub fn shared_observer(mut self, observer: Arc<dyn RunObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Build the runtime
    pub async fn build(self) -> Result<Runtime> {
        self.config
            .simulation
            .validate()
            .map_err(RuntimeError::InvalidConfig)?;

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RoverHandle::new(command_tx, event_bus.clone());

        let mut observers = self.observers;
        observers.push(Arc::new(event_bus));

        let worker = ControllerWorker::new(
            self.config.simulation,
            self.config.step_delay,
            command_rx,
            observers.into(),
        );

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            plan_provider: self.plan_provider,
            worker_handle,
        })
    }
}
