//! The field: grid bounds, the cars on it, and the synchronous step loop.
//!
//! # Step semantics
//!
//! Each step has two phases. In the movement phase every car with a
//! pending command executes exactly one, in insertion order. Cars never
//! read each other's positions while moving, so the order does not affect
//! where anyone ends up. In the collision phase every unordered pair of
//! not-yet-collided cars is compared; all cars that share a cell are
//! marked collided at this step and the run stops.
//!
//! Two cars that swap cells within one step therefore do not collide:
//! they never share a cell at the end of a step.
//!
//! # Ownership model
//!
//! `Field` is [`Send`]. Cars are moved in by [`add_car()`](Field::add_car)
//! and only ever handed back out as shared references, so nothing outside
//! the field can mutate them mid-run.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use autodrive_core::{AgentName, Bounds, Position, StepId};
use indexmap::IndexMap;
use tracing::{debug, info, trace};

use crate::car::{Car, CarState, Execution, Partners};
use crate::config::{ConfigError, FieldConfig};
use crate::metrics::RunMetrics;
use crate::report::{CollisionRecord, FinalState, RunReport};

// Compile-time assertion: Field is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Field>();
    }
};

// ── PlacementError ──────────────────────────────────────────────

/// Errors from [`Field::add_car()`]. The field is unchanged on error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// Another car already has this name.
    DuplicateName {
        /// The duplicated name.
        name: AgentName,
    },
    /// The initial position lies outside the field.
    OutOfBounds {
        /// The rejected car.
        name: AgentName,
        /// Its requested initial position.
        position: Position,
        /// The field bounds it violated.
        bounds: Bounds,
    },
    /// Another car already occupies the initial position.
    OverlapAtStart {
        /// The rejected car.
        name: AgentName,
        /// The car already on that cell.
        occupant: AgentName,
        /// The contested cell.
        position: Position,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { name } => {
                write!(f, "a car named {name} already exists")
            }
            Self::OutOfBounds {
                name,
                position,
                bounds,
            } => write!(
                f,
                "initial position {position} of car {name} is outside the field bounds of {bounds}"
            ),
            Self::OverlapAtStart {
                name,
                occupant,
                position,
            } => write!(
                f,
                "car {name} would collide with {occupant} at initial position {position}"
            ),
        }
    }
}

impl Error for PlacementError {}

// ── Field ───────────────────────────────────────────────────────

/// A bounded grid and the cars driving on it.
///
/// Created from a [`FieldConfig`]. Cars are added one by one with
/// [`add_car()`](Field::add_car), then [`run()`](Field::run) steps them
/// until every script is consumed or a collision occurs.
///
/// # Example
///
/// ```
/// use autodrive_core::{AgentName, Orientation, Position};
/// use autodrive_engine::{Car, Field, FieldConfig};
///
/// let mut field = Field::new(FieldConfig::new(10, 10)).unwrap();
/// let car = |name: &str, x, y, heading| {
///     Car::new(AgentName::new(name).unwrap(), Position::new(x, y), heading, "F".parse().unwrap())
/// };
/// field.add_car(car("C", 2, 1, Orientation::North)).unwrap();
/// field.add_car(car("D", 1, 2, Orientation::East)).unwrap();
///
/// assert_eq!(
///     field.run().lines(),
///     vec![
///         "C, collides with D at (2,2) at step 1".to_string(),
///         "D, collides with C at (2,2) at step 1".to_string(),
///     ],
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Field {
    bounds: Bounds,
    cars: IndexMap<AgentName, Car>,
    step: StepId,
    metrics: RunMetrics,
}

impl Field {
    /// Create an empty field, validating the configuration.
    pub fn new(config: FieldConfig) -> Result<Self, ConfigError> {
        let bounds = config.validate()?;
        Ok(Self {
            bounds,
            cars: IndexMap::new(),
            step: StepId(0),
            metrics: RunMetrics::default(),
        })
    }

    /// Add a car to the field.
    ///
    /// Checks, in order: the name is unused, the initial position is in
    /// bounds, and no existing car occupies that position.
    pub fn add_car(&mut self, car: Car) -> Result<(), PlacementError> {
        if let Err(e) = self.check_placement(&car) {
            debug!(car = %car.name(), error = %e, "placement rejected");
            return Err(e);
        }
        debug!(
            car = %car.name(),
            position = %car.position(),
            heading = %car.heading(),
            commands = car.script().len(),
            "car added"
        );
        self.cars.insert(car.name().clone(), car);
        Ok(())
    }

    fn check_placement(&self, car: &Car) -> Result<(), PlacementError> {
        if self.cars.contains_key(car.name()) {
            return Err(PlacementError::DuplicateName {
                name: car.name().clone(),
            });
        }
        if !self.bounds.contains(car.position()) {
            return Err(PlacementError::OutOfBounds {
                name: car.name().clone(),
                position: car.position(),
                bounds: self.bounds,
            });
        }
        if let Some(occupant) = self
            .cars
            .values()
            .find(|other| other.position() == car.position())
        {
            return Err(PlacementError::OverlapAtStart {
                name: car.name().clone(),
                occupant: occupant.name().clone(),
                position: car.position(),
            });
        }
        Ok(())
    }

    /// Run the simulation to completion or to the first collision.
    ///
    /// Executes as many steps as the longest remaining script. Step
    /// numbers continue from any earlier run of this field. Once a
    /// collision has been recorded the field is terminal: further calls
    /// execute nothing and return the same collision report.
    pub fn run(&mut self) -> RunReport {
        let started = Instant::now();

        if !self.has_collision() {
            let max_steps = self
                .cars
                .values()
                .map(Car::remaining_commands)
                .max()
                .unwrap_or(0);

            for _ in 0..max_steps {
                self.step = self.step.next();
                self.execute_movement(self.step);
                if self.detect_collisions(self.step) {
                    break;
                }
            }
        }

        self.metrics.last_run_us = started.elapsed().as_micros() as u64;
        let report = self.report();
        match &report {
            RunReport::Completed { steps, cars } => {
                info!(steps, cars = cars.len(), "run completed without collision")
            }
            RunReport::Collided { step, collisions } => {
                info!(step = step.0, cars = collisions.len(), "run stopped by collision")
            }
        }
        report
    }

    /// Movement phase: every car with a pending command executes one.
    fn execute_movement(&mut self, step: StepId) {
        let bounds = self.bounds;
        let mut active = 0usize;
        for car in self.cars.values_mut() {
            if !car.has_pending_command() {
                continue;
            }
            active += 1;
            let execution = car.execute_next(bounds);
            self.metrics.commands_executed += 1;
            match execution {
                Execution::Moved(_) => self.metrics.moves_accepted += 1,
                Execution::Clamped { target } => {
                    self.metrics.moves_clamped += 1;
                    debug!(step = step.0, car = %car.name(), %target, "forward move clamped at boundary");
                }
                Execution::Turned(_) | Execution::Idle => {}
            }
            trace!(step = step.0, car = %car.name(), ?execution, "command executed");
        }
        self.metrics.steps_executed += 1;
        debug!(step = step.0, active, "step executed");
    }

    /// Collision phase. Returns `true` if any collision was recorded.
    fn detect_collisions(&mut self, step: StepId) -> bool {
        let cars: Vec<&Car> = self.cars.values().collect();
        let mut partners: Vec<Partners> = vec![Partners::new(); cars.len()];
        let mut found = false;

        for i in 0..cars.len() {
            if cars[i].is_collided() {
                continue;
            }
            for j in (i + 1)..cars.len() {
                if cars[j].is_collided() || cars[i].position() != cars[j].position() {
                    continue;
                }
                partners[i].push(cars[j].name().clone());
                partners[j].push(cars[i].name().clone());
                found = true;
            }
        }

        if !found {
            return false;
        }

        for (idx, with) in partners.into_iter().enumerate() {
            if with.is_empty() {
                continue;
            }
            if let Some((_, car)) = self.cars.get_index_mut(idx) {
                car.collide(step, with);
                debug!(
                    step = step.0,
                    car = %car.name(),
                    position = %car.position(),
                    with = %car.collided_with().unwrap_or_default(),
                    "collision detected"
                );
            }
        }
        true
    }

    /// Materialize the report for the field's current state.
    fn report(&self) -> RunReport {
        let mut collided: Vec<&Car> = self.cars.values().filter(|c| c.is_collided()).collect();

        if collided.is_empty() {
            let mut cars: Vec<FinalState> = self
                .cars
                .values()
                .map(|c| FinalState {
                    name: c.name().clone(),
                    position: c.position(),
                    heading: c.heading(),
                })
                .collect();
            cars.sort_by(|a, b| a.name.cmp(&b.name));
            return RunReport::Completed {
                steps: self.step.0,
                cars,
            };
        }

        collided.sort_by(|a, b| a.name().cmp(b.name()));
        let collisions: Vec<CollisionRecord> = collided
            .into_iter()
            .filter_map(|c| match c.state() {
                CarState::Collided { step, with } => Some(CollisionRecord {
                    name: c.name().clone(),
                    with: with.to_vec(),
                    position: c.position(),
                    step: *step,
                }),
                CarState::Active => None,
            })
            .collect();
        // Every collision of a run is recorded in the same step.
        let step = collisions.first().map_or(self.step, |c| c.step);
        RunReport::Collided { step, collisions }
    }

    /// Look up a car by name.
    pub fn car(&self, name: &str) -> Option<&Car> {
        self.cars.get(name)
    }

    /// All cars, in insertion order.
    pub fn cars(&self) -> impl Iterator<Item = &Car> {
        self.cars.values()
    }

    /// Number of cars on the field.
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Whether the field has no cars.
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// The field extent.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Steps executed across all runs so far.
    pub fn steps_executed(&self) -> u32 {
        self.step.0
    }

    /// Whether any car has collided.
    pub fn has_collision(&self) -> bool {
        self.cars.values().any(Car::is_collided)
    }

    /// Counters accumulated across runs.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }
}
