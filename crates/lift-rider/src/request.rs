//! `FloorRequest`: a rider's wish to travel from one floor to another.

use lift_core::{FloorId, RiderId};

use crate::{RequestError, RequestResult, Rider};

/// Binds a rider to a source and target floor.  Everything except the `done`
/// flag is fixed at creation; `done` only ever goes from `false` to `true`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorRequest {
    rider:  RiderId,
    source: FloorId,
    target: FloorId,
    done:   bool,
}

impl FloorRequest {
    /// Create a request for `rider` to travel to `target`.
    ///
    /// The source is the rider's current floor.  Fails when there is no
    /// target or the target is outside the rider's accessible floors.
    pub fn new(rider: &Rider, target: Option<FloorId>) -> RequestResult<Self> {
        let target = target.ok_or_else(|| RequestError::NoTarget {
            rider: rider.label().to_owned(),
        })?;
        if !rider.can_access(target) {
            return Err(RequestError::InaccessibleFloor {
                rider: rider.label().to_owned(),
                floor: target,
            });
        }
        Ok(Self {
            rider: rider.id(),
            source: rider.current_floor(),
            target,
            done: false,
        })
    }

    /// Mark the request done if `current` is the target.  Returns whether the
    /// target has been reached.
    pub fn mark_done(&mut self, current: FloorId) -> bool {
        let reached = current == self.target;
        if reached {
            self.done = true;
        }
        reached
    }

    #[inline]
    pub fn rider(&self) -> RiderId {
        self.rider
    }

    #[inline]
    pub fn source(&self) -> FloorId {
        self.source
    }

    #[inline]
    pub fn target(&self) -> FloorId {
        self.target
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }
}
