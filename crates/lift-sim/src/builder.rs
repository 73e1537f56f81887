//! Fluent builder for constructing a [`Simulation`].

use lift_building::Building;
use lift_core::error::check_probability;
use lift_core::{SimRng, Tick};
use tracing::info;

use crate::ledger::Ledger;
use crate::{ArrivalSimulator, SimConfig, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// Every setting has a default (see [`SimConfig::default`]):
///
/// | Method                         | Default |
/// |--------------------------------|---------|
/// | `.seed(s)`                     | 0       |
/// | `.probability_p(p)`            | 0.001   |
/// | `.probability_q(q)`            | 0.002   |
/// | `.probability_maintenance(m)`  | 0.005   |
/// | `.floors(n)`                   | 7       |
/// | `.elevator_capacity(c)`        | 4       |
/// | `.non_developers(n)`           | 10      |
/// | `.goggles(n)`                  | 5       |
/// | `.mugtomes(n)`                 | 5       |
/// | `.snapshot_interval(n)`        | 0 (off) |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new()
///     .seed(42)
///     .floors(10)
///     .probability_q(0.01)
///     .build()?;
/// sim.run_ticks(2_880, &mut NoopObserver);
/// println!("average wait: {:.2}", sim.average_wait());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimBuilder {
    config: SimConfig,
}

impl SimBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. one loaded from a file.
    pub fn from_config(config: SimConfig) -> Self {
        Self { config }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn probability_p(mut self, p: f64) -> Self {
        self.config.probability_p = p;
        self
    }

    pub fn probability_q(mut self, q: f64) -> Self {
        self.config.probability_q = q;
        self
    }

    pub fn probability_maintenance(mut self, m: f64) -> Self {
        self.config.probability_maintenance = m;
        self
    }

    pub fn floors(mut self, floors: i64) -> Self {
        self.config.floors = floors;
        self
    }

    pub fn elevator_capacity(mut self, capacity: i64) -> Self {
        self.config.elevator_capacity = capacity;
        self
    }

    pub fn non_developers(mut self, n: i64) -> Self {
        self.config.non_developers = n;
        self
    }

    pub fn goggles(mut self, n: i64) -> Self {
        self.config.goggles = n;
        self
    }

    pub fn mugtomes(mut self, n: i64) -> Self {
        self.config.mugtomes = n;
        self
    }

    /// Snapshot every `ticks` ticks; 0 disables snapshots.
    pub fn snapshot_interval(mut self, ticks: u64) -> Self {
        self.config.snapshot_interval_ticks = ticks;
        self
    }

    /// Validate and assemble a simulation at tick 0.
    ///
    /// Checks run in a fixed order (floors, capacity, *p*, *q*, maintenance,
    /// non-developers, Goggles, Mugtomes) and the first violation is returned.
    pub fn build(self) -> SimResult<Simulation> {
        let c = self.config;

        let building = Building::new(c.floors, c.elevator_capacity, c.probability_p)?;
        check_probability("floor changes", c.probability_p)?;
        let arrivals = ArrivalSimulator::new(
            c.probability_q,
            c.probability_maintenance,
            c.non_developers,
            c.goggles,
            c.mugtomes,
        )?;

        info!(
            seed = c.seed,
            floors = c.floors,
            capacity = c.elevator_capacity,
            "simulation created"
        );

        Ok(Simulation {
            rng: SimRng::new(c.seed),
            now: Tick::ZERO,
            building,
            arrivals,
            ledger: Ledger::default(),
            config: c,
        })
    }
}
