//! The `Simulation` struct and its tick loop.

use lift_building::{Building, TickContext};
use lift_core::{RiderId, SimRng, Tick};
use lift_rider::RiderKind;

use crate::arrivals::admit;
use crate::ledger::{Counters, Ledger};
use crate::{ArrivalSimulator, SimConfig, SimObserver, TickSummary, WaitingStatistics};

/// The main simulation runner.
///
/// Owns the random stream, the tick counter, the building and every
/// aggregate.  Each [`tick`][Self::tick] runs:
///
/// 1. **Arrivals**: staff on tick 0, then at most one visitor.
/// 2. **Building**: every floor's occupants, then one elevator step.
///
/// Notifications raised along the way land in the ledger immediately.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Simulation {
    pub(crate) config:   SimConfig,
    pub(crate) rng:      SimRng,
    pub(crate) now:      Tick,
    pub(crate) building: Building,
    pub(crate) arrivals: ArrivalSimulator,
    pub(crate) ledger:   Ledger,
}

impl Simulation {
    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance one tick and report what happened.
    pub fn tick(&mut self) -> TickSummary {
        let now = self.now;
        let before = self.ledger.counters;

        let mut ctx = TickContext::new(now, &mut self.rng, &mut self.ledger);
        self.arrivals.tick(&mut self.building, &mut ctx);
        self.building.tick(&mut ctx);

        self.now = now.next();
        self.summarize(now, before)
    }

    /// Run exactly `n` ticks, calling observer hooks at every boundary.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        let interval = self.config.snapshot_interval_ticks;
        for _ in 0..n {
            let now = self.now;
            observer.on_tick_start(now);
            let summary = self.tick();
            observer.on_tick_end(&summary);
            if interval > 0 && now.0.is_multiple_of(interval) {
                observer.on_snapshot(now, &self.building);
            }
        }
        observer.on_sim_end(self.now);
    }

    fn summarize(&self, tick: Tick, before: Counters) -> TickSummary {
        let after = self.ledger.counters;
        let elevator = self.building.elevator();
        TickSummary {
            tick,
            occupancy: after.occupancy(),
            arrivals: after.arrivals - before.arrivals,
            exits: after.exits - before.exits,
            complaints: after.complaints - before.complaints,
            average_wait: self.average_wait(),
            elevator_floor: elevator.current_floor(),
            doors: elevator.doors(),
            load: elevator.capacity() - elevator.available_space(),
        }
    }

    // ── Outside interference ──────────────────────────────────────────────

    /// Create a rider of `kind` and let it in right now, outside the regular
    /// arrival process.  Counts as an arrival.
    pub fn admit(&mut self, kind: RiderKind) -> Option<RiderId> {
        self.intervene(|building, ctx| admit(building, kind, ctx))
    }

    /// Run `f` against the building with a context for the current tick.
    /// Notifications raised inside `f` are recorded as usual.
    pub fn intervene<R>(&mut self, f: impl FnOnce(&mut Building, &mut TickContext<'_>) -> R) -> R {
        let mut ctx = TickContext::new(self.now, &mut self.rng, &mut self.ledger);
        f(&mut self.building, &mut ctx)
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// The next tick to be simulated (equivalently, ticks completed so far).
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.now
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn building(&self) -> &Building {
        &self.building
    }

    pub fn arrival_simulator(&self) -> &ArrivalSimulator {
        &self.arrivals
    }

    pub fn statistics(&self) -> &WaitingStatistics {
        &self.ledger.statistics
    }

    pub fn counters(&self) -> Counters {
        self.ledger.counters
    }

    /// Arrivals minus exits.
    pub fn occupancy(&self) -> u64 {
        self.ledger.counters.occupancy()
    }

    pub fn complaints(&self) -> u64 {
        self.ledger.counters.complaints
    }

    /// Mean queue wait in ticks; `NaN` until someone has been served.
    pub fn average_wait(&self) -> f64 {
        self.ledger.statistics.average()
    }
}
