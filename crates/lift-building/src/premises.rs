//! Floors plus riders: the rider-side operations of the building.
//!
//! `Premises` is split from the elevator so the elevator can borrow it
//! mutably during its dispatch step while still owning its own state.

use lift_core::{FloorId, RiderId};
use lift_rider::{FloorRequest, Placement, Rider, RiderStore};
use tracing::debug;

use crate::{Floor, TickContext};

#[derive(Clone, Debug)]
pub struct Premises {
    floors: Vec<Floor>,
    riders: RiderStore,
}

impl Premises {
    pub(crate) fn new(floor_count: usize) -> Self {
        let floors = (0..floor_count).map_while(|l| FloorId::try_from(l).ok()).map(Floor::new).collect();
        Self { floors, riders: RiderStore::new() }
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn floor(&self, id: FloorId) -> Option<&Floor> {
        self.floors.get(id.index())
    }

    pub fn riders(&self) -> &RiderStore {
        &self.riders
    }

    pub fn rider(&self, id: RiderId) -> Option<&Rider> {
        self.riders.get(id)
    }

    /// Where `id` sits from the floors' point of view.  Riders not held by
    /// their current floor are either aboard (if `aboard` says so), departed,
    /// or outside.
    pub(crate) fn placement(&self, id: RiderId, aboard: bool) -> Placement {
        let Some(rider) = self.riders.get(id) else {
            return Placement::Outside;
        };
        if rider.has_departed() {
            return Placement::Departed;
        }
        let here = rider.current_floor();
        if aboard {
            return Placement::Aboard(here);
        }
        match self.floor(here) {
            Some(f) if f.is_present(id) => Placement::OnFloor(here),
            Some(f) if f.is_queued(id) => Placement::Queued(here),
            _ => Placement::Outside,
        }
    }

    // ── Mutation used by the building and the elevator ────────────────────

    pub(crate) fn riders_mut(&mut self) -> &mut RiderStore {
        &mut self.riders
    }

    pub(crate) fn floor_mut(&mut self, id: FloorId) -> Option<&mut Floor> {
        self.floors.get_mut(id.index())
    }

    /// Land `id` on its tracked current floor.
    pub(crate) fn land(&mut self, id: RiderId) -> bool {
        let Some(rider) = self.riders.get(id) else {
            return false;
        };
        match self.floors.get_mut(rider.current_floor().index()) {
            Some(floor) => floor.land(rider),
            None => false,
        }
    }

    /// Remove `id` from its current floor's containers.
    pub(crate) fn leave(&mut self, id: RiderId) -> bool {
        let Some(here) = self.riders.get(id).map(Rider::current_floor) else {
            return false;
        };
        self.floor_mut(here).is_some_and(|f| f.leave(id))
    }

    /// Put `id` at the back of its current floor's queue (priority aside).
    /// No-op returning `false` if the rider is unknown or its floor does not
    /// hold it.
    pub(crate) fn join_queue(&mut self, id: RiderId, ctx: &mut TickContext<'_>) -> bool {
        let Some(rider) = self.riders.get(id) else {
            return false;
        };
        let Some(ticket) = self.floors.get_mut(rider.current_floor().index()).and_then(|f| f.join_queue(rider)) else {
            return false;
        };
        self.riders[id].assign_ticket(ticket, ctx.now);
        ctx.events.queue_joined(id, ctx.now);
        true
    }

    /// Give `id` a new request for `target`.
    ///
    /// Invalid targets are logged and dropped; the rider keeps its previous
    /// request.  A request for the current floor is satisfied on the spot.
    /// Unknown riders are ignored.
    pub(crate) fn request_floor(&mut self, id: RiderId, target: Option<FloorId>, ctx: &mut TickContext<'_>) {
        let Some(rider) = self.riders.get(id) else {
            return;
        };
        let request = match FloorRequest::new(rider, target) {
            Ok(request) => request,
            Err(err) => {
                debug!(rider = rider.label(), ?target, reason = %err, "floor request rejected");
                return;
            }
        };
        let here = rider.current_floor();
        self.riders[id].set_request(request);
        if request.target() != here {
            self.join_queue(id, ctx);
        } else {
            self.target_reached(id, ctx);
        }
    }

    /// Complete the rider's request if it stands on the target, then land it.
    pub(crate) fn target_reached(&mut self, id: RiderId, ctx: &mut TickContext<'_>) {
        let Some(rider) = self.riders.get_mut(id) else {
            return;
        };
        if rider.complete_request() {
            rider.note_arrival(ctx.now, ctx.rng);
            self.land(id);
        }
    }

    /// The elevator took `id` aboard: start serving and clear floor state.
    pub(crate) fn request_accepted(&mut self, id: RiderId, ctx: &mut TickContext<'_>) {
        let Some(rider) = self.riders.get_mut(id) else {
            return;
        };
        rider.set_waiting_for_next(false);
        ctx.events.serving_started(id, ctx.now);
        self.leave(id);
    }

    /// Let `id` out through the ground floor.  Fails unless the ground floor
    /// holds the rider.
    pub(crate) fn quit(&mut self, id: RiderId, ctx: &mut TickContext<'_>) -> bool {
        let Some(rider) = self.riders.get_mut(id) else {
            return false;
        };
        let left = rider.current_floor().is_ground()
            && self.floors.first_mut().is_some_and(|g| g.leave(id));
        if left {
            debug!(rider = rider.label(), tick = ctx.now.0, "rider left the building");
            rider.mark_departed();
            ctx.events.rider_exited(id, ctx.now);
        }
        left
    }
}
