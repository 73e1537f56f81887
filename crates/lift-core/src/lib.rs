//! `lift-core`: foundational types for the `rust_lift` building simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RiderId`, `FloorId`                                  |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng`, the single shared random stream             |
//! | [`error`]       | `ConfigError`, `ConfigResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and `Tick`.          |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ConfigError, ConfigResult};
pub use ids::{FloorId, RiderId};
pub use rng::SimRng;
pub use time::Tick;
