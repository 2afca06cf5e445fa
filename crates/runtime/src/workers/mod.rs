//! Worker tasks that back the runtime orchestration.
//!
//! The controller worker serializes run lifecycle commands; each accepted
//! plan gets its own run task that paces and applies steps.

mod controller;
mod run;

pub use controller::{Command, ControllerWorker};
