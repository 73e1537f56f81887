//! Upward notifications and the per-tick context.

use lift_core::{RiderId, SimRng, Tick};

/// Receiver for everything the building reports upward.
///
/// The building never polls its owner; instead every bookkeeping-relevant
/// change is pushed through this trait at the moment it happens.  All methods
/// default to no-ops so implementors only override what they track.
pub trait BuildingEvents {
    /// A rider landed on the ground floor from outside.
    fn rider_entered(&mut self, _rider: RiderId, _now: Tick) {}

    /// A rider joined (or rejoined) a floor queue and holds a fresh ticket.
    fn queue_joined(&mut self, _rider: RiderId, _now: Tick) {}

    /// A queued rider was accepted aboard the elevator.
    fn serving_started(&mut self, _rider: RiderId, _now: Tick) {}

    /// A rider gave up waiting.
    fn complaint_filed(&mut self, _rider: RiderId, _now: Tick) {}

    /// A rider left the building through the ground floor.
    fn rider_exited(&mut self, _rider: RiderId, _now: Tick) {}
}

/// Discards every notification.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopEvents;

impl BuildingEvents for NoopEvents {}

/// Mutable state lent to the building for one tick.
///
/// Built by the simulation from split borrows of its own fields; the random
/// stream is never cloned or recreated.
pub struct TickContext<'a> {
    pub now:    Tick,
    pub rng:    &'a mut SimRng,
    pub events: &'a mut dyn BuildingEvents,
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(now: Tick, rng: &'a mut SimRng, events: &'a mut dyn BuildingEvents) -> Self {
        Self { now, rng, events }
    }
}
