mod common;

use std::sync::{Arc, Mutex};

use rover_core::{CommandPlan, Heading, PathSegment, Position, RoverState, RunPhase};
use rover_runtime::{Event, RoverEvent, RunId, RunObserver, Runtime};

use common::until_terminal;

/// Captures whole envelopes in arrival order.
#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<Event>>,
}

impl RunObserver for Recorder {
    fn notify(&self, event: &Event) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Relies on the default dispatch to the typed callbacks.
#[derive(Default)]
struct Callbacks {
    log: Mutex<Vec<String>>,
}

impl Callbacks {
    fn push(&self, line: String) {
        self.log.lock().unwrap().push(line);
    }
}

impl RunObserver for Callbacks {
    fn on_run_started(&self, run: RunId, rover: RoverState, obstacles: &[Position]) {
        self.push(format!("{run} start {} {}", rover.position, obstacles.len()));
    }

    fn on_rover_moved(&self, position: Position, heading: Heading) {
        self.push(format!("moved {position} {heading}"));
    }

    fn on_path_updated(&self, segments: &[PathSegment]) {
        self.push(format!("path {}", segments.len()));
    }

    fn on_crashed(&self, position: Position) {
        self.push(format!("crashed {position}"));
    }

    fn on_completed(&self) {
        self.push("completed".to_string());
    }
}

#[tokio::test(start_paused = true)]
async fn observers_see_the_same_sequence_as_subscribers() {
    let recorder = Arc::new(Recorder::default());
    let runtime = Runtime::builder()
        .shared_observer(recorder.clone())
        .build()
        .await
        .unwrap();
    let mut events = runtime.subscribe_events();

    runtime
        .start(CommandPlan::new(Position::ORIGIN, [], "MRMxL"))
        .await
        .unwrap();
    let published = until_terminal(&mut events).await;

    assert_eq!(*recorder.events.lock().unwrap(), published);
}

#[tokio::test(start_paused = true)]
async fn typed_callbacks_follow_emission_order() {
    let callbacks = Arc::new(Callbacks::default());
    let runtime = Runtime::builder()
        .shared_observer(callbacks.clone())
        .build()
        .await
        .unwrap();
    let mut events = runtime.subscribe_events();

    runtime
        .start(CommandPlan::new(
            Position::ORIGIN,
            [Position::new(1, 1)],
            "MRM",
        ))
        .await
        .unwrap();
    until_terminal(&mut events).await;

    assert_eq!(
        *callbacks.log.lock().unwrap(),
        vec![
            "run#1 start (0, 0) 1",
            "path 1",
            "moved (0, 1) north",
            "moved (0, 1) east",
            "crashed (1, 1)",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn observers_run_before_the_bus_delivers() {
    struct Stamp(Mutex<Option<u64>>);

    impl RunObserver for Stamp {
        fn notify(&self, event: &Event) {
            *self.0.lock().unwrap() = Some(event.sequence);
        }
    }

    let stamp = Arc::new(Stamp(Mutex::new(None)));
    let runtime = Runtime::builder()
        .shared_observer(stamp.clone())
        .build()
        .await
        .unwrap();
    let mut events = runtime.subscribe_events();

    runtime
        .start(CommandPlan::new(Position::ORIGIN, [], "L"))
        .await
        .unwrap();

    // Whatever the subscriber holds, the observer has already seen it.
    while let Ok(event) = events.recv().await {
        let seen = stamp.0.lock().unwrap().expect("observer saw nothing");
        assert!(seen >= event.sequence);
        if event.is_terminal() {
            break;
        }
    }
}

/// Fails the run task the first time the rover moves.
struct Faulty;

impl RunObserver for Faulty {
    fn on_rover_moved(&self, _position: Position, _heading: Heading) {
        panic!("observer failure");
    }
}

#[tokio::test(start_paused = true)]
async fn a_dying_run_task_still_ends_the_run() {
    let runtime = Runtime::builder().observer(Faulty).build().await.unwrap();
    let mut events = runtime.subscribe_events();

    runtime
        .start(CommandPlan::new(Position::ORIGIN, [], "MMM"))
        .await
        .unwrap();
    let events = until_terminal(&mut events).await;

    let kinds: Vec<_> = events.iter().map(|e| e.event.as_snake_case()).collect();
    assert_eq!(kinds, vec!["run_started", "path_updated", "cancelled"]);
    // The move event that never reached the bus still used up its number.
    assert_eq!(events.last().unwrap().sequence, 3);

    let status = runtime.status().await.unwrap();
    assert_eq!(status.phase, RunPhase::Cancelled);
    assert_eq!(status.events_emitted, 4);

    // The runtime keeps accepting work afterwards.
    let mut events = runtime.subscribe_events();
    runtime
        .start(CommandPlan::new(Position::ORIGIN, [], "L"))
        .await
        .unwrap();
    assert_eq!(
        until_terminal(&mut events).await.last().unwrap().event,
        RoverEvent::Cancelled
    );
}
