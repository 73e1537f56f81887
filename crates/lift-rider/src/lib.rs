//! `lift-rider`: rider kinds, floor requests and per-rider behaviour.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`kind`]    | `RiderKind` and the strategies each kind is composed of         |
//! | [`request`] | `FloorRequest`: source/target binding with a `done` flag        |
//! | [`intent`]  | `RiderIntent`, `Placement`, `TickView`                          |
//! | [`rider`]   | `Rider`: per-rider state and the per-tick `plan` step           |
//! | [`store`]   | `RiderStore`: arena indexed by `RiderId`, label counters        |
//! | [`error`]   | `RequestError`, `RequestResult<T>`                              |
//!
//! # Design notes
//!
//! Riders never touch floors or the elevator directly.  Each tick the
//! building hands a rider a read-only [`TickView`] of where it is and asks it
//! to [`plan`][Rider::plan]; the rider returns [`RiderIntent`]s which the
//! building applies immediately, in order.  This keeps ownership singular
//! (the building owns floors, riders and elevator) and the per-tick call
//! graph acyclic.
//!
//! Rider kinds form a closed set.  Every kind maps to a [`RiderProfile`], a
//! bundle of independent strategies that the shared rider code consults.

pub mod error;
pub mod intent;
pub mod kind;
pub mod request;
pub mod rider;
pub mod store;


pub use error::{RequestError, RequestResult};
pub use intent::{Placement, RiderIntent, TickView};
pub use kind::{Faction, FloorAccess, RiderKind, RiderProfile, Routine, StayWindow};
pub use request::FloorRequest;
pub use rider::{Rider, VisitState};
pub use store::RiderStore;
