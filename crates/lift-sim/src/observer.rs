//! Simulation observer trait for progress reporting and data collection.

use lift_building::{Building, DoorState};
use lift_core::{FloorId, Tick};

/// What happened during one tick, plus the state at its end.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickSummary {
    pub tick:           Tick,
    /// Riders inside the building after the tick.
    pub occupancy:      u64,
    /// Riders that entered during the tick.
    pub arrivals:       u64,
    /// Riders that left during the tick.
    pub exits:          u64,
    /// Complaints filed during the tick.
    pub complaints:     u64,
    /// Running average wait over all closed records (`NaN` if none).
    pub average_wait:   f64,
    pub elevator_floor: FloorId,
    pub doors:          DoorState,
    /// Space taken inside the elevator.
    pub load:           usize,
}

/// Callbacks invoked by [`Simulation::run_ticks`][crate::Simulation::run_ticks]
/// at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: complaint watcher
///
/// ```rust,ignore
/// struct Complaints(u64);
///
/// impl SimObserver for Complaints {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         self.0 += summary.complaints;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before arrivals.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once the tick has fully completed.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called every `snapshot_interval_ticks` ticks, after `on_tick_end`.
    ///
    /// Provides read-only access to every floor, rider and the elevator so
    /// output writers can record a snapshot without the simulation knowing
    /// about any specific format.
    fn on_snapshot(&mut self, _tick: Tick, _building: &Building) {}

    /// Called once after the final tick of a `run_ticks` call.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
