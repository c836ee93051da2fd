//! Canonical scenarios with known outcomes.
//!
//! Each fixture returns a ready-to-run [`Field`] together with the report
//! lines it must produce.

use autodrive_core::Orientation;
use autodrive_engine::Field;

use crate::TestFieldBuilder;

/// A field plus its expected report.
pub struct Scenario {
    pub name: &'static str,
    pub field: Field,
    pub expected: Vec<&'static str>,
}

/// Two cars converge on (2,2) in the first step.
pub fn perpendicular_collision() -> Scenario {
    Scenario {
        name: "perpendicular_collision",
        field: TestFieldBuilder::new(10, 10)
            .car("C", 2, 1, Orientation::North, "F")
            .car("D", 1, 2, Orientation::East, "F")
            .build(),
        expected: vec![
            "C, collides with D at (2,2) at step 1",
            "D, collides with C at (2,2) at step 1",
        ],
    }
}

/// Two cars drive north side by side.
pub fn parallel_paths() -> Scenario {
    Scenario {
        name: "parallel_paths",
        field: TestFieldBuilder::new(10, 10)
            .car("A", 1, 1, Orientation::North, "FF")
            .car("B", 3, 1, Orientation::North, "FF")
            .build(),
        expected: vec!["A, (1,3) N", "B, (3,3) N"],
    }
}

/// A single car with a long mixed script, no collision.
pub fn single_car_long_script() -> Scenario {
    Scenario {
        name: "single_car_long_script",
        field: TestFieldBuilder::new(10, 10)
            .car("A", 1, 2, Orientation::North, "FFRFFFFRRL")
            .build(),
        expected: vec!["A, (5,4) S"],
    }
}

/// Two cars on crossing routes that meet after several turns.
pub fn crossing_routes() -> Scenario {
    Scenario {
        name: "crossing_routes",
        field: TestFieldBuilder::new(10, 10)
            .car("A", 1, 2, Orientation::North, "FFRFFFFRRL")
            .car("B", 7, 8, Orientation::West, "FFLFFFFFFF")
            .build(),
        expected: vec![
            "A, collides with B at (5,4) at step 7",
            "B, collides with A at (5,4) at step 7",
        ],
    }
}

/// Three cars converge on one cell from three sides.
pub fn three_way_pileup() -> Scenario {
    Scenario {
        name: "three_way_pileup",
        field: TestFieldBuilder::new(10, 10)
            .car("C", 5, 4, Orientation::North, "F")
            .car("A", 4, 5, Orientation::East, "F")
            .car("B", 6, 5, Orientation::West, "F")
            .build(),
        expected: vec![
            "A, collides with B, C at (5,5) at step 1",
            "B, collides with A, C at (5,5) at step 1",
            "C, collides with A, B at (5,5) at step 1",
        ],
    }
}

/// Every fixture above.
pub fn all() -> Vec<Scenario> {
    vec![
        perpendicular_collision(),
        parallel_paths(),
        single_car_long_script(),
        crossing_routes(),
        three_way_pileup(),
    ]
}
