//! Run events and the bus that carries them.
//!
//! Run tasks emit [`Event`]s synchronously from their step loop; the
//! [`EventBus`] fans them out to any number of async subscribers.

mod bus;
mod types;

pub use bus::EventBus;
pub use types::{Event, RoverEvent, RunId, RunStatus};
