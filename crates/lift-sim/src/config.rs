//! Simulation configuration.

/// Every knob of a run.
///
/// Counts are signed so that out-of-range input coming from a file or a
/// command line can be represented and then rejected by
/// [`SimBuilder::build`][crate::SimBuilder::build] with the offending value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Seed of the single random stream.  Same seed, same run.
    pub seed: u64,

    /// Probability *p* that an idle employee requests another floor on a
    /// given tick.
    pub probability_p: f64,

    /// Probability *q* that a client arrives on a given tick.
    pub probability_q: f64,

    /// Probability that a maintenance crew arrives on a given tick.  Drawn
    /// from the same uniform value as *q*, on the interval `[q, q + m)`.
    pub probability_maintenance: f64,

    pub floors: i64,
    pub elevator_capacity: i64,

    /// Employees spawned on the first tick.
    pub non_developers: i64,
    pub goggles: i64,
    pub mugtomes: i64,

    /// Call `SimObserver::on_snapshot` every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            probability_p: 0.001,
            probability_q: 0.002,
            probability_maintenance: 0.005,
            floors: 7,
            elevator_capacity: 4,
            non_developers: 10,
            goggles: 5,
            mugtomes: 5,
            snapshot_interval_ticks: 0,
        }
    }
}
