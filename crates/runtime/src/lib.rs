//! Runtime orchestration for the rover command engine.
//!
//! This crate wraps the synchronous [`rover_core::Simulation`] with everything
//! a live run needs: a paced background task per run, cancellation at step
//! boundaries, ordered event delivery, and a cloneable [`RoverHandle`] for
//! callers. Consumers build a [`Runtime`], start plans, and observe runs
//! either through the broadcast [`EventBus`] or a [`RunObserver`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] defines run events and the broadcast bus
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{FixedPlanProvider, PlanProvider, Result, RoverHandle, RunObserver, RuntimeError};
pub use events::{Event, EventBus, RoverEvent, RunId, RunStatus};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
