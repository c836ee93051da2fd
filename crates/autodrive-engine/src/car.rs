//! A single car: identity, pose, command script, and collision state.

use std::fmt;

use autodrive_core::{AgentName, Bounds, Command, Orientation, Position, Script, StepId};
use smallvec::SmallVec;

/// Names of the other cars sharing a cell. Almost always one.
pub(crate) type Partners = SmallVec<[AgentName; 2]>;

/// Per-car state machine.
///
/// A car starts [`Active`](CarState::Active) and moves to
/// [`Collided`](CarState::Collided) at most once, during the collision
/// phase of a step. The transition is irreversible: a collided car never
/// executes another command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CarState {
    /// Still executing its script (or finished without incident).
    Active,
    /// Ended a step on the same cell as at least one other car.
    Collided {
        /// The step at which the collision was detected.
        step: StepId,
        /// Every other car on the cell, sorted by name.
        with: SmallVec<[AgentName; 2]>,
    },
}

/// What a call to [`Car::execute_next`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Execution {
    /// No pending command; nothing changed.
    Idle,
    /// Rotated in place to the new heading.
    Turned(Orientation),
    /// Moved forward to the new position.
    Moved(Position),
    /// A forward move would have left the field; the car stayed put.
    Clamped {
        /// The rejected out-of-bounds target.
        target: Position,
    },
}

/// A car on the grid.
///
/// Created fully formed and handed to a [`Field`](crate::Field), which is
/// the only thing that mutates it afterwards.
///
/// # Examples
///
/// ```
/// use autodrive_core::{AgentName, Bounds, Orientation, Position};
/// use autodrive_engine::{Car, Execution};
///
/// let mut car = Car::new(
///     AgentName::new("A").unwrap(),
///     Position::new(9, 5),
///     Orientation::East,
///     "F".parse().unwrap(),
/// );
/// let bounds = Bounds::new(10, 10).unwrap();
/// assert!(matches!(car.execute_next(bounds), Execution::Clamped { .. }));
/// assert_eq!(car.position(), Position::new(9, 5));
/// assert!(!car.has_pending_command());
/// ```
#[derive(Clone, Debug)]
pub struct Car {
    name: AgentName,
    position: Position,
    heading: Orientation,
    script: Script,
    cursor: usize,
    state: CarState,
}

impl Car {
    /// Create an active car at the start of its script.
    pub fn new(name: AgentName, position: Position, heading: Orientation, script: Script) -> Self {
        Self {
            name,
            position,
            heading,
            script,
            cursor: 0,
            state: CarState::Active,
        }
    }

    /// The car's unique name.
    pub fn name(&self) -> &AgentName {
        &self.name
    }

    /// Current cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current heading.
    pub fn heading(&self) -> Orientation {
        self.heading
    }

    /// The full command script.
    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Index of the next command to execute.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current state.
    pub fn state(&self) -> &CarState {
        &self.state
    }

    /// The cell one step ahead along the current heading.
    pub fn peek_forward_position(&self) -> Position {
        let (dx, dy) = self.heading.offset();
        self.position.offset(dx, dy)
    }

    /// True iff commands remain and the car has not collided.
    pub fn has_pending_command(&self) -> bool {
        self.cursor < self.script.len() && self.state == CarState::Active
    }

    /// Number of commands this car will still execute if nothing stops it.
    pub fn remaining_commands(&self) -> usize {
        if self.has_pending_command() {
            self.script.len() - self.cursor
        } else {
            0
        }
    }

    /// The step at which this car collided, if it has.
    pub fn collision_step(&self) -> Option<StepId> {
        match &self.state {
            CarState::Active => None,
            CarState::Collided { step, .. } => Some(*step),
        }
    }

    /// Names of the cars this one collided with, sorted and joined by `", "`.
    pub fn collided_with(&self) -> Option<String> {
        match &self.state {
            CarState::Active => None,
            CarState::Collided { with, .. } => Some(join_names(with)),
        }
    }

    /// Whether the car has collided.
    pub fn is_collided(&self) -> bool {
        matches!(self.state, CarState::Collided { .. })
    }

    /// Execute the command under the cursor against `bounds`.
    ///
    /// Turns always succeed. A forward move is committed only if the
    /// target lies inside `bounds`; otherwise the car stays where it is.
    /// Either way the cursor advances by one. Does nothing when there is
    /// no pending command.
    pub fn execute_next(&mut self, bounds: Bounds) -> Execution {
        if !self.has_pending_command() {
            return Execution::Idle;
        }
        let Some(command) = self.script.get(self.cursor) else {
            return Execution::Idle;
        };
        self.cursor += 1;

        match command {
            Command::TurnLeft => {
                self.heading = self.heading.turn_left();
                Execution::Turned(self.heading)
            }
            Command::TurnRight => {
                self.heading = self.heading.turn_right();
                Execution::Turned(self.heading)
            }
            Command::Forward => {
                let target = self.peek_forward_position();
                if bounds.contains(target) {
                    self.position = target;
                    Execution::Moved(target)
                } else {
                    Execution::Clamped { target }
                }
            }
        }
    }

    /// Record a collision. Has no effect on a car that already collided.
    pub(crate) fn collide(&mut self, step: StepId, mut with: Partners) {
        if self.is_collided() {
            return;
        }
        with.sort();
        with.dedup();
        self.state = CarState::Collided { step, with };
    }
}

impl fmt::Display for Car {
    /// `<name>, (<x>,<y>) <heading>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} {}", self.name, self.position, self.heading)
    }
}

pub(crate) fn join_names(names: &[AgentName]) -> String {
    names
        .iter()
        .map(AgentName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
