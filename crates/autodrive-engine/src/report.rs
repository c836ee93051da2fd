//! Terminal run reports.
//!
//! A run ends in exactly one of two shapes: every car's final pose, or the
//! cars involved in the collision that stopped it. Both are always sorted
//! by car name, independent of insertion order.

use std::fmt;

use autodrive_core::{AgentName, Orientation, Position, StepId};

use crate::car::join_names;

/// Final pose of one car after a collision-free run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalState {
    /// The car.
    pub name: AgentName,
    /// Where it ended.
    pub position: Position,
    /// Which way it faces.
    pub heading: Orientation,
}

impl fmt::Display for FinalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} {}", self.name, self.position, self.heading)
    }
}

/// One car's view of the collision that ended a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollisionRecord {
    /// The car.
    pub name: AgentName,
    /// The other cars on the same cell, sorted by name.
    pub with: Vec<AgentName>,
    /// The shared cell.
    pub position: Position,
    /// The step at which the collision happened.
    pub step: StepId,
}

impl fmt::Display for CollisionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, collides with {} at {} at step {}",
            self.name,
            join_names(&self.with),
            self.position,
            self.step
        )
    }
}

/// Outcome of [`Field::run`](crate::Field::run).
///
/// # Examples
///
/// ```
/// use autodrive_core::{AgentName, Orientation, Position};
/// use autodrive_engine::{Car, Field, FieldConfig, RunReport};
///
/// let mut field = Field::new(FieldConfig::new(10, 10)).unwrap();
/// field
///     .add_car(Car::new(
///         AgentName::new("A").unwrap(),
///         Position::new(1, 1),
///         Orientation::North,
///         "FF".parse().unwrap(),
///     ))
///     .unwrap();
///
/// let report = field.run();
/// assert!(matches!(report, RunReport::Completed { steps: 2, .. }));
/// assert_eq!(report.lines(), vec!["A, (1,3) N".to_string()]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunReport {
    /// All scripts were consumed without two cars ever sharing a cell.
    Completed {
        /// Total steps executed on the field.
        steps: u32,
        /// Every car's final pose, sorted by name.
        cars: Vec<FinalState>,
    },
    /// The run stopped at the first step that ended with a shared cell.
    Collided {
        /// The step at which the run stopped.
        step: StepId,
        /// One record per collided car, sorted by name.
        collisions: Vec<CollisionRecord>,
    },
}

impl RunReport {
    /// The report as display lines, in name order.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Completed { cars, .. } => cars.iter().map(ToString::to_string).collect(),
            Self::Collided { collisions, .. } => {
                collisions.iter().map(ToString::to_string).collect()
            }
        }
    }

    /// Whether the run ended in a collision.
    pub fn is_collision(&self) -> bool {
        matches!(self, Self::Collided { .. })
    }
}

impl fmt::Display for RunReport {
    /// One report line per row, newline-separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(n: &str) -> AgentName {
        AgentName::new(n).unwrap()
    }

    #[test]
    fn collision_line_format() {
        let rec = CollisionRecord {
            name: name("C"),
            with: vec![name("D")],
            position: Position::new(2, 2),
            step: StepId(1),
        };
        assert_eq!(rec.to_string(), "C, collides with D at (2,2) at step 1");
    }

    #[test]
    fn collision_line_with_several_partners() {
        let rec = CollisionRecord {
            name: name("A"),
            with: vec![name("B"), name("C")],
            position: Position::new(0, 4),
            step: StepId(12),
        };
        assert_eq!(
            rec.to_string(),
            "A, collides with B, C at (0,4) at step 12"
        );
    }

    #[test]
    fn final_state_line_format() {
        let s = FinalState {
            name: name("B"),
            position: Position::new(3, 3),
            heading: Orientation::West,
        };
        assert_eq!(s.to_string(), "B, (3,3) W");
    }

    #[test]
    fn display_joins_lines() {
        let report = RunReport::Completed {
            steps: 0,
            cars: vec![
                FinalState {
                    name: name("A"),
                    position: Position::new(0, 0),
                    heading: Orientation::North,
                },
                FinalState {
                    name: name("B"),
                    position: Position::new(1, 0),
                    heading: Orientation::South,
                },
            ],
        };
        assert_eq!(report.to_string(), "A, (0,0) N\nB, (1,0) S");
        assert!(!report.is_collision());
    }

    #[test]
    fn empty_completed_report_has_no_lines() {
        let report = RunReport::Completed {
            steps: 0,
            cars: Vec::new(),
        };
        assert!(report.lines().is_empty());
        assert_eq!(report.to_string(), "");
    }
}
