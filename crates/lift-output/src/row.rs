//! Plain data row types written by output backends.

use lift_building::{Building, DoorState};
use lift_core::Tick;
use lift_rider::Rider;
use lift_sim::TickSummary;

/// Building-wide state at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub occupancy:      u64,
    pub arrivals:       u64,
    pub exits:          u64,
    pub complaints:     u64,
    /// `NaN` until the first rider has been served.
    pub average_wait:   f64,
    pub elevator_floor: u32,
    pub doors_open:     bool,
    pub load:           u64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:           s.tick.0,
            occupancy:      s.occupancy,
            arrivals:       s.arrivals,
            exits:          s.exits,
            complaints:     s.complaints,
            average_wait:   s.average_wait,
            elevator_floor: s.elevator_floor.0,
            doors_open:     s.doors == DoorState::Open,
            load:           s.load as u64,
        }
    }
}

/// Where one rider was at a given tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiderSnapshotRow {
    pub rider_id:  u32,
    pub label:     String,
    pub kind:      String,
    pub tick:      u64,
    /// `None` while outside or after departure.
    pub floor:     Option<u32>,
    pub placement: &'static str,
}

impl RiderSnapshotRow {
    pub fn capture(building: &Building, rider: &Rider, tick: Tick) -> Self {
        let placement = building.placement(rider.id());
        Self {
            rider_id:  rider.id().0,
            label:     rider.label().to_owned(),
            kind:      rider.kind().to_string(),
            tick:      tick.0,
            floor:     placement.floor().map(|f| f.0),
            placement: placement.label(),
        }
    }
}
