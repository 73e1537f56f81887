//! Rider intents and the read-only view a rider plans from.

use lift_core::{FloorId, Tick};

/// Where a rider currently is, as seen from outside.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Created but not (yet) landed on any floor.
    Outside,
    /// Idle among the present occupants of a floor.
    OnFloor(FloorId),
    /// Waiting in a floor's elevator queue.
    Queued(FloorId),
    /// Inside the elevator, currently at the given floor.
    Aboard(FloorId),
    /// Left the building for good.
    Departed,
}

impl Placement {
    /// The floor the rider is associated with, if any.
    pub fn floor(self) -> Option<FloorId> {
        match self {
            Placement::OnFloor(f) | Placement::Queued(f) | Placement::Aboard(f) => Some(f),
            Placement::Outside | Placement::Departed => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Placement::Outside => "outside",
            Placement::OnFloor(_) => "on_floor",
            Placement::Queued(_) => "queued",
            Placement::Aboard(_) => "aboard",
            Placement::Departed => "departed",
        }
    }
}

/// The snapshot a rider sees when asked to plan its tick.
#[derive(Copy, Clone, Debug)]
pub struct TickView {
    pub now:                       Tick,
    pub placement:                 Placement,
    /// Probability *p* that an idle employee changes floor this tick.
    pub floor_change_probability:  f64,
}

/// An action a rider wants the building to carry out.
///
/// Intents are applied by the building immediately and in order, so a later
/// intent observes the effects of an earlier one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RiderIntent {
    /// Create a new floor request.  `None` means the rider had nothing to
    /// pick from; the building reports and absorbs that as a request error.
    RequestFloor(Option<FloorId>),

    /// File a complaint about the wait.
    Complain,

    /// Leave the building through the ground floor.
    Quit,
}
