//! Aggregate counters fed by building notifications.

use lift_building::BuildingEvents;
use lift_core::{RiderId, Tick};

use crate::WaitingStatistics;

/// Running totals since tick 0.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counters {
    pub arrivals:   u64,
    pub exits:      u64,
    pub complaints: u64,
}

impl Counters {
    /// Riders currently inside the building.
    #[inline]
    pub fn occupancy(&self) -> u64 {
        self.arrivals.saturating_sub(self.exits)
    }
}

/// The simulation's side of [`BuildingEvents`].
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    pub(crate) counters:   Counters,
    pub(crate) statistics: WaitingStatistics,
}

impl BuildingEvents for Ledger {
    fn rider_entered(&mut self, _rider: RiderId, _now: Tick) {
        self.counters.arrivals += 1;
    }

    fn queue_joined(&mut self, rider: RiderId, now: Tick) {
        self.statistics.queue_joined(rider, now);
    }

    fn serving_started(&mut self, rider: RiderId, now: Tick) {
        self.statistics.serving_started(rider, now);
    }

    fn complaint_filed(&mut self, _rider: RiderId, _now: Tick) {
        self.counters.complaints += 1;
    }

    fn rider_exited(&mut self, _rider: RiderId, _now: Tick) {
        self.counters.exits += 1;
    }
}
