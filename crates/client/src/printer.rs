//! Observer that writes one line per run event to stdout.
use std::io::{self, Write};

use rover_runtime::{Event, RoverEvent, RunObserver};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub struct EventPrinter {
    format: OutputFormat,
}

impl EventPrinter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn render(&self, event: &Event) -> String {
        match self.format {
            OutputFormat::Text => describe(event),
            OutputFormat::Json => serde_json::to_string(event).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to encode event");
                describe(event)
            }),
        }
    }
}

impl RunObserver for EventPrinter {
    fn notify(&self, event: &Event) {
        let line = self.render(event);
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{line}") {
            tracing::debug!(error = %e, "stdout closed");
        }
    }
}

fn describe(event: &Event) -> String {
    let body = match &event.event {
        RoverEvent::RunStarted { rover, obstacles } => format!(
            "landed at {} facing {}, {} obstacle(s)",
            rover.position,
            rover.heading,
            obstacles.len()
        ),
        RoverEvent::RoverMoved { position, heading } => {
            format!("rover at {position} facing {heading}")
        }
        RoverEvent::PathUpdated { segments } => format!("path has {} segment(s)", segments.len()),
        RoverEvent::Crashed { position } => format!("crashed into obstacle at {position}"),
        RoverEvent::OutOfBounds { position } => format!("left the grid at {position}"),
        RoverEvent::Cancelled => "cancelled".to_string(),
        RoverEvent::Completed => "mission completed".to_string(),
    };

    format!("[{} #{}] {}", event.run, event.sequence, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rover_core::{Heading, Position};
    use rover_runtime::RunId;

    fn event(event: RoverEvent) -> Event {
        Event {
            run: RunId::FIRST,
            sequence: 3,
            event,
        }
    }

    #[test]
    fn text_lines_name_the_run_and_sequence() {
        let printer = EventPrinter::new(OutputFormat::Text);

        assert_eq!(
            printer.render(&event(RoverEvent::RoverMoved {
                position: Position::new(0, 4),
                heading: Heading::West,
            })),
            "[run#1 #3] rover at (0, 4) facing west"
        );
        assert_eq!(
            printer.render(&event(RoverEvent::OutOfBounds {
                position: Position::new(0, 20),
            })),
            "[run#1 #3] left the grid at (0, 20)"
        );
    }

    #[test]
    fn json_lines_decode_back_to_the_event() {
        let printer = EventPrinter::new(OutputFormat::Json);
        let original = event(RoverEvent::Crashed {
            position: Position::new(1, 0),
        });

        let line = printer.render(&original);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["event"]["type"], "crashed");
        assert_eq!(value["event"]["position"]["x"], 1);
        assert_eq!(value["run"], 1);
    }
}
