//! Step-by-step state machine for a single run.
//!
//! [`Simulation`] owns the run state (rover, trail, cursor into the command
//! string, phase) and advances it one character per [`Simulation::step`].
//! It knows nothing about time: the runtime decides when to call `step` and
//! when to [`Simulation::cancel`].
mod outcome;

pub use outcome::StepOutcome;

use crate::command::Command;
use crate::config::{CollisionPolicy, SimulationConfig};
use crate::path::PathSegment;
use crate::plan::{CommandPlan, PlanError};
use crate::state::{Heading, Position, RoverState, RunPhase};

/// Run state for one plan, from landing to a terminal phase.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
    plan: CommandPlan,
    commands: Vec<char>,
    cursor: usize,
    rover: RoverState,
    path: Vec<PathSegment>,
    last_exit: Heading,
    phase: RunPhase,
}

impl Simulation {
    /// Validates the configuration and plan and lands the rover at the plan's
    /// start, facing north. The returned simulation is already `Running`.
    pub fn new(config: SimulationConfig, plan: CommandPlan) -> Result<Self, PlanError> {
        config.validate()?;
        plan.validate()?;

        let rover = RoverState::landed_at(plan.start());
        let commands = plan.commands().chars().collect();

        Ok(Self {
            config,
            plan,
            commands,
            cursor: 0,
            rover,
            path: Vec::new(),
            last_exit: rover.heading,
            phase: RunPhase::Running,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn plan(&self) -> &CommandPlan {
        &self.plan
    }

    pub fn rover(&self) -> RoverState {
        self.rover
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Trail recorded so far, in traversal order.
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Characters interpreted so far, skipped ones included.
    pub fn steps_taken(&self) -> usize {
        self.cursor
    }

    /// True while a character remains to be interpreted. The runtime paces
    /// only these steps; the final transition to `Completed` is immediate.
    pub fn has_pending(&self) -> bool {
        self.phase == RunPhase::Running && self.cursor < self.commands.len()
    }

    /// Interprets the next character, or completes the run when none remain.
    ///
    /// Returns `None` once the run has reached a terminal phase.
    pub fn step(&mut self) -> Option<StepOutcome> {
        if self.phase != RunPhase::Running {
            return None;
        }

        let Some(&code) = self.commands.get(self.cursor) else {
            self.phase = RunPhase::Completed;
            return Some(StepOutcome::Completed);
        };
        self.cursor += 1;

        // The cell left by the previous step (or the landing cell).
        if self.plan.is_obstacle(self.rover.position) {
            return Some(self.crash(self.rover.position));
        }

        let outcome = match Command::from_code(code) {
            Some(Command::Move) => self.advance(),
            Some(Command::TurnLeft) => {
                self.rover.turn_left();
                StepOutcome::Turned { rover: self.rover }
            }
            Some(Command::TurnRight) => {
                self.rover.turn_right();
                StepOutcome::Turned { rover: self.rover }
            }
            None => StepOutcome::Skipped { code },
        };
        Some(outcome)
    }

    /// Stops a running simulation. Returns false when the run had already
    /// reached a terminal phase.
    pub fn cancel(&mut self) -> bool {
        if self.phase.is_terminal() {
            return false;
        }
        self.phase = RunPhase::Cancelled;
        true
    }

    fn advance(&mut self) -> StepOutcome {
        let candidate = match self.rover.ahead() {
            Some(cell) if self.config.grid.contains(cell) => cell,
            beyond => {
                self.phase = RunPhase::OutOfBounds;
                return StepOutcome::OutOfBounds {
                    position: beyond.unwrap_or(self.rover.position),
                };
            }
        };

        if self.config.collision == CollisionPolicy::OnEntry && self.plan.is_obstacle(candidate) {
            return self.crash(candidate);
        }

        let segment = PathSegment::new(self.last_exit, self.rover.heading, self.rover.position);
        self.path.push(segment);
        self.last_exit = self.rover.heading;
        self.rover.position = candidate;

        StepOutcome::Moved { rover: self.rover }
    }

    fn crash(&mut self, position: Position) -> StepOutcome {
        self.phase = RunPhase::Crashed;
        StepOutcome::Crashed { position }
    }
}
