//! `lift-sim`: tick loop orchestrator for the rust_lift building simulator.
//!
//! # Tick loop
//!
//! ```text
//! for each tick:
//!   ① Arrivals  : tick 0 spawns Goggles, then Mugtomes, then non-developers;
//!                 every tick draws once for a client or maintenance crew.
//!   ② Floors    : level order; present riders then queued riders plan and
//!                 act (floor requests, complaints, departures).
//!   ③ Elevator  : one dispatch step (alight/board, open/close, or move).
//!   ④ Observers : on_tick_end, then on_snapshot at the configured interval.
//! ```
//!
//! Everything stochastic draws from one `SimRng` in this fixed order, so a
//! seed fully determines a run.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new().seed(7).build()?;
//! sim.run_ticks(2_880, &mut NoopObserver);
//! println!("{} complaints, average wait {:.1}", sim.complaints(), sim.average_wait());
//! ```

pub mod arrivals;
pub mod builder;
pub mod config;
pub mod error;
pub mod ledger;
pub mod observer;
pub mod sim;
pub mod stats;


pub use arrivals::ArrivalSimulator;
pub use builder::SimBuilder;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use ledger::Counters;
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use sim::Simulation;
pub use stats::{WaitRecord, WaitingStatistics};
