//! End-to-end scenarios and properties of the step engine.
//!
//! These tests drive the public `Field` API only.

use autodrive_core::{AgentName, Orientation, Position, Script};
use autodrive_engine::{Car, Field, FieldConfig, RunReport};
use autodrive_test_utils::{car, field, fixtures};
use proptest::prelude::*;

#[test]
fn fixtures_produce_expected_reports() {
    for mut scenario in fixtures::all() {
        let lines = scenario.field.run().lines();
        assert_eq!(lines, scenario.expected, "scenario {}", scenario.name);
    }
}

#[test]
fn boundary_clamp_scenario() {
    let mut f = field(10, 10, [car("A", 9, 5, Orientation::East, "F")]);
    assert_eq!(f.run().lines(), vec!["A, (9,5) E"]);
}

#[test]
fn corner_cars_clamp_outward_moves() {
    let mut f = field(
        3,
        3,
        [
            car("SW", 0, 0, Orientation::South, "FFLFFF"),
            car("NE", 2, 2, Orientation::North, "FFRFFF"),
        ],
    );
    let report = f.run();
    // SW: clamped twice heading south, then twice to the east edge and clamped once more.
    // NE: clamped twice heading north, then three times heading east.
    assert_eq!(report.lines(), vec!["NE, (2,2) E", "SW, (2,0) E"]);
    assert_eq!(f.metrics().moves_clamped, 3 + 5);
}

#[test]
fn collision_symmetry() {
    let mut f = fixtures::perpendicular_collision().field;
    f.run();
    let c = f.car("C").unwrap();
    let d = f.car("D").unwrap();
    assert_eq!(c.collided_with().as_deref(), Some("D"));
    assert_eq!(d.collided_with().as_deref(), Some("C"));
    assert_eq!(c.collision_step(), d.collision_step());
    assert_eq!(c.position(), d.position());
}

#[test]
fn rejection_leaves_field_unchanged() {
    let mut f = field(10, 10, [car("B", 5, 5, Orientation::North, "F")]);
    let before: Vec<String> = f.cars().map(ToString::to_string).collect();
    assert!(f.add_car(car("A", 5, 5, Orientation::North, "F")).is_err());
    let after: Vec<String> = f.cars().map(ToString::to_string).collect();
    assert_eq!(before, after);
    assert_eq!(f.run().lines(), vec!["B, (5,6) N"]);
}

#[test]
fn one_by_one_field_only_turns() {
    let mut f = field(1, 1, [car("Solo", 0, 0, Orientation::West, "FRFRFRF")]);
    assert_eq!(f.run().lines(), vec!["Solo, (0,0) S"]);
}

#[test]
fn long_and_short_scripts_run_for_the_longest() {
    let mut f = field(
        10,
        10,
        [
            car("A", 0, 0, Orientation::North, "F"),
            car("B", 5, 0, Orientation::North, "FFFFFF"),
        ],
    );
    let report = f.run();
    assert!(matches!(report, RunReport::Completed { steps: 6, .. }));
    assert_eq!(report.lines(), vec!["A, (0,1) N", "B, (5,6) N"]);
}

// ── Properties ──────────────────────────────────────────────────

const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

fn arb_heading() -> impl Strategy<Value = Orientation> {
    prop_oneof![
        Just(Orientation::North),
        Just(Orientation::South),
        Just(Orientation::East),
        Just(Orientation::West),
    ]
}

fn arb_script() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just('L'), Just('R'), Just('F')], 0..12)
        .prop_map(|cs| cs.into_iter().collect())
}

/// A small field with up to six cars on distinct cells.
fn arb_field() -> impl Strategy<Value = (i32, i32, Vec<(usize, i32, i32, Orientation, String)>)> {
    (2i32..7, 2i32..7).prop_flat_map(|(w, h)| {
        let car = (0..w, 0..h, arb_heading(), arb_script());
        (
            Just(w),
            Just(h),
            proptest::collection::vec(car, 1..=NAMES.len()),
        )
            .prop_map(|(w, h, cars)| {
                let mut seen = std::collections::HashSet::new();
                let placed = cars
                    .into_iter()
                    .enumerate()
                    .filter(|(_, (x, y, _, _))| seen.insert((*x, *y)))
                    .map(|(i, (x, y, o, s))| (i, x, y, o, s))
                    .collect();
                (w, h, placed)
            })
    })
}

fn build(w: i32, h: i32, cars: &[(usize, i32, i32, Orientation, String)], reverse: bool) -> Field {
    let mut f = Field::new(FieldConfig::new(w, h)).unwrap();
    let mut order: Vec<_> = cars.iter().collect();
    if reverse {
        order.reverse();
    }
    for (i, x, y, o, s) in order {
        let car = Car::new(
            AgentName::new(NAMES[*i]).unwrap(),
            Position::new(*x, *y),
            *o,
            Script::parse(s).unwrap(),
        );
        f.add_car(car).unwrap();
    }
    f
}

proptest! {
    #[test]
    fn runs_are_deterministic((w, h, cars) in arb_field()) {
        let a = build(w, h, &cars, false).run();
        let b = build(w, h, &cars, false).run();
        prop_assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn insertion_order_does_not_change_report((w, h, cars) in arb_field()) {
        let forward = build(w, h, &cars, false).run();
        let reversed = build(w, h, &cars, true).run();
        prop_assert_eq!(forward, reversed);
    }

    #[test]
    fn report_lines_sorted_by_name((w, h, cars) in arb_field()) {
        let report = build(w, h, &cars, true).run();
        let names: Vec<String> = report
            .lines()
            .iter()
            .map(|l| l.split(',').next().unwrap_or_default().to_string())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        prop_assert_eq!(names, sorted);
    }

    #[test]
    fn cars_never_leave_the_field((w, h, cars) in arb_field()) {
        let mut f = build(w, h, &cars, false);
        f.run();
        let bounds = f.bounds();
        for c in f.cars() {
            prop_assert!(bounds.contains(c.position()), "{} left the field", c);
        }
    }

    #[test]
    fn collisions_are_symmetric((w, h, cars) in arb_field()) {
        let mut f = build(w, h, &cars, false);
        f.run();
        let collided: Vec<&Car> = f.cars().filter(|c| c.is_collided()).collect();
        for a in &collided {
            for b in &collided {
                if a.name() == b.name() || a.position() != b.position() {
                    continue;
                }
                let a_with = a.collided_with().unwrap_or_default();
                prop_assert!(a_with.split(", ").any(|n| n == b.name().as_str()));
                prop_assert_eq!(a.collision_step(), b.collision_step());
            }
        }
        // Without a collision every car consumed its whole script.
        if collided.is_empty() {
            for c in f.cars() {
                prop_assert_eq!(c.cursor(), c.script().len());
            }
        }
    }
}
