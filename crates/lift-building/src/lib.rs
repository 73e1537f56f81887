//! `lift-building`: floors, the elevator and the building that owns them.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`floor`]    | `Floor`, `QueueEntry`: present set and ordered queue          |
//! | [`premises`] | `Premises`: floors + riders and the rider-side operations     |
//! | [`elevator`] | `Elevator`, `Direction`, `DoorState`: dispatch state machine  |
//! | [`building`] | `Building`: entry/exit boundary, per-tick occupant pass       |
//! | [`events`]   | `BuildingEvents`, `NoopEvents`, `TickContext`                 |
//!
//! # Ownership
//!
//! The building owns every floor, every rider and the elevator.  Floors and
//! the elevator refer to riders by `RiderId` only; riders refer to floors by
//! `FloorId`.  Bookkeeping that belongs to the owner (arrival counts, wait
//! statistics, complaints) is pushed upward through [`BuildingEvents`] in a
//! [`TickContext`] rather than reached for through a back pointer.
//!
//! # Per-tick order
//!
//! 1. Floors in level order.  For each floor, present riders then queued
//!    riders, from a snapshot taken before any of them acts.
//! 2. One elevator step.

pub mod building;
pub mod elevator;
pub mod events;
pub mod floor;
pub mod premises;

#[cfg(test)]
mod tests;

pub use building::Building;
pub use elevator::{Direction, DoorState, Elevator};
pub use events::{BuildingEvents, NoopEvents, TickContext};
pub use floor::{Floor, QueueEntry};
pub use premises::Premises;
