//! Rider arrivals.

use lift_building::{Building, TickContext};
use lift_core::error::{check_headcount, check_probability};
use lift_core::{ConfigResult, RiderId, Tick};
use lift_rider::RiderKind;
use tracing::debug;

/// Spawns the initial staff on tick 0, then at most one visitor per tick.
///
/// Every tick consumes exactly one uniform draw `u`: a client arrives when
/// `u < q`, a maintenance crew when `q <= u < q + m`.
#[derive(Clone, Debug)]
pub struct ArrivalSimulator {
    probability_client:      f64,
    probability_maintenance: f64,
    goggles:                 usize,
    mugtomes:                usize,
    non_developers:          usize,
    clients:                 usize,
    maintenance_crews:       usize,
}

impl ArrivalSimulator {
    /// Validates, in order: `q`, maintenance probability, non-developers,
    /// Goggles, Mugtomes.
    pub fn new(
        probability_client:      f64,
        probability_maintenance: f64,
        non_developers:          i64,
        goggles:                 i64,
        mugtomes:                i64,
    ) -> ConfigResult<Self> {
        Ok(Self {
            probability_client: check_probability("clients", probability_client)?,
            probability_maintenance: check_probability("maintenance crews", probability_maintenance)?,
            non_developers: check_headcount("non-developers", non_developers)?,
            goggles: check_headcount("Goggles", goggles)?,
            mugtomes: check_headcount("Mugtomes", mugtomes)?,
            clients: 0,
            maintenance_crews: 0,
        })
    }

    pub fn tick(&mut self, building: &mut Building, ctx: &mut TickContext<'_>) {
        if ctx.now == Tick::ZERO {
            self.populate(building, ctx);
        }

        let draw = ctx.rng.next_f64();
        if draw < self.probability_client {
            self.clients += 1;
            admit(building, RiderKind::Client, ctx);
        } else if draw < self.probability_client + self.probability_maintenance {
            self.maintenance_crews += 1;
            admit(building, RiderKind::MaintenanceCrew, ctx);
        }
    }

    fn populate(&self, building: &mut Building, ctx: &mut TickContext<'_>) {
        let staff = [
            (RiderKind::Goggle, self.goggles),
            (RiderKind::Mugtome, self.mugtomes),
            (RiderKind::NonDeveloper, self.non_developers),
        ];
        for (kind, count) in staff {
            for _ in 0..count {
                admit(building, kind, ctx);
            }
        }
        debug!(
            goggles = self.goggles,
            mugtomes = self.mugtomes,
            non_developers = self.non_developers,
            "staff arrived"
        );
    }

    /// Goggles plus Mugtomes, as configured.
    pub fn total_developers(&self) -> usize {
        self.goggles + self.mugtomes
    }

    pub fn total_non_developers(&self) -> usize {
        self.non_developers
    }

    /// Clients spawned so far.
    pub fn total_clients(&self) -> usize {
        self.clients
    }

    /// Maintenance crews spawned so far.
    pub fn total_maintenance_crews(&self) -> usize {
        self.maintenance_crews
    }

    pub fn probability_client(&self) -> f64 {
        self.probability_client
    }

    pub fn probability_maintenance(&self) -> f64 {
        self.probability_maintenance
    }
}

/// Create a rider of `kind` and walk it in through the ground floor.
pub(crate) fn admit(building: &mut Building, kind: RiderKind, ctx: &mut TickContext<'_>) -> Option<RiderId> {
    let id = building.spawn(kind);
    building.enter(id, ctx).then_some(id)
}
