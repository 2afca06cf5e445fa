//! Deterministic rover model and command state machine.
//!
//! `rover-core` defines the canonical rules for a single rover on a bounded
//! grid: headings and the movement table, command decoding, mission plans,
//! path bookkeeping and the step-by-step [`engine::Simulation`]. Everything
//! here is synchronous and free of I/O so the runtime can wrap it with
//! pacing, cancellation and event delivery.
pub mod command;
pub mod config;
pub mod engine;
pub mod grid;
pub mod path;
pub mod plan;
pub mod state;

pub use command::Command;
pub use config::{CollisionPolicy, SimulationConfig};
pub use engine::{Simulation, StepOutcome};
pub use grid::{GridDimensions, GridError};
pub use path::PathSegment;
pub use plan::{CommandPlan, PlanError};
pub use state::{Heading, Position, RoverState, RunPhase};
