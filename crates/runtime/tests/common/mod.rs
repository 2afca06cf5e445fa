//! Shared helpers for runtime integration tests.
#![allow(dead_code)]

use rover_core::{Heading, Position};
use rover_runtime::{Event, RoverEvent, Runtime, RuntimeConfig};
use tokio::sync::broadcast;

pub async fn runtime() -> Runtime {
    Runtime::builder()
        .config(RuntimeConfig::default())
        .build()
        .await
        .expect("runtime should build with default config")
}

/// Receives events until (and including) the first terminal one.
pub async fn until_terminal(rx: &mut broadcast::Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    loop {
        let event = rx.recv().await.expect("event stream closed early");
        let done = event.is_terminal();
        events.push(event);
        if done {
            return events;
        }
    }
}

pub fn kinds(events: &[Event]) -> Vec<&'static str> {
    events.iter().map(|e| e.event.as_snake_case()).collect()
}

pub fn moves(events: &[Event]) -> Vec<(Position, Heading)> {
    events
        .iter()
        .filter_map(|e| match e.event {
            RoverEvent::RoverMoved { position, heading } => Some((position, heading)),
            _ => None,
        })
        .collect()
}
