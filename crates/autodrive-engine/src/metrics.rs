//! Per-field run metrics.
//!
//! [`RunMetrics`] accumulates counters across every [`run()`] of a field.
//! The counters are observational only and never influence the outcome.
//!
//! [`run()`]: crate::Field::run

/// Counters collected while a field runs.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Synchronized steps executed so far.
    pub steps_executed: u64,
    /// Commands consumed across all cars, including clamped moves.
    pub commands_executed: u64,
    /// Forward moves that changed a car's position.
    pub moves_accepted: u64,
    /// Forward moves refused at the field boundary.
    pub moves_clamped: u64,
    /// Wall-clock time of the most recent `run()`, in microseconds.
    pub last_run_us: u64,
}
