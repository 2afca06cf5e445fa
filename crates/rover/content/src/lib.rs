//! Data-driven mission and settings loaders.
//!
//! This crate turns files into `rover-core` values:
//! - Mission plans in the JSON shape the mission service hands out
//!   (`start_point`, `weirs`, `command`)
//! - Engine settings (grid size, collision policy, step pacing) from TOML
//!
//! Content is consumed by the client before a run starts and never appears
//! in run state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, MissionLoader, RoverSettings};
