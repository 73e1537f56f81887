//! `Building`: floors, riders and the one elevator, plus the entry/exit
//! boundary and the per-tick occupant pass.

use lift_core::{ConfigError, ConfigResult, FloorId, RiderId};
use lift_rider::{Placement, Rider, RiderIntent, RiderKind, TickView};
use tracing::debug;

use crate::{Elevator, Floor, Premises, TickContext};

#[derive(Clone, Debug)]
pub struct Building {
    premises: Premises,
    elevator: Elevator,
    /// Probability that an idle employee changes floor on a given tick.
    floor_change_probability: f64,
}

impl Building {
    /// Validates `1 <= floor_count <= u32::MAX` first, then `capacity >= 1`.
    pub fn new(floor_count: i64, capacity: i64, floor_change_probability: f64) -> ConfigResult<Self> {
        let floors = u32::try_from(floor_count)
            .ok()
            .filter(|&n| n >= 1)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or(ConfigError::InvalidFloorCount(floor_count))?;
        let elevator = Elevator::new(capacity)?;
        Ok(Self {
            premises: Premises::new(floors),
            elevator,
            floor_change_probability,
        })
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn floor_count(&self) -> usize {
        self.premises.floor_count()
    }

    pub fn floors(&self) -> &[Floor] {
        self.premises.floors()
    }

    pub fn floor(&self, id: FloorId) -> Option<&Floor> {
        self.premises.floor(id)
    }

    pub fn elevator(&self) -> &Elevator {
        &self.elevator
    }

    pub fn rider(&self, id: RiderId) -> Option<&Rider> {
        self.premises.rider(id)
    }

    /// Every rider ever created, departed ones included.
    pub fn riders(&self) -> impl Iterator<Item = &Rider> {
        self.premises.riders().iter()
    }

    /// Riders of `kind` created so far.
    pub fn spawned(&self, kind: RiderKind) -> usize {
        self.premises.riders().spawned(kind)
    }

    pub fn placement(&self, id: RiderId) -> Placement {
        self.premises.placement(id, self.elevator.is_aboard(id))
    }

    #[inline]
    pub fn floor_change_probability(&self) -> f64 {
        self.floor_change_probability
    }

    // ── Boundary ──────────────────────────────────────────────────────────

    /// Create a rider of `kind`.  It stays outside until [`enter`][Self::enter].
    pub fn spawn(&mut self, kind: RiderKind) -> RiderId {
        let floors = self.floor_count();
        self.premises.riders_mut().spawn(kind, floors)
    }

    /// Land `id` on the ground floor and give it a first request, drawn
    /// uniformly from its accessible floors.  Returns `false` if the rider
    /// could not land (already inside, or unknown).
    pub fn enter(&mut self, id: RiderId, ctx: &mut TickContext<'_>) -> bool {
        let Some(rider) = self.premises.rider(id) else {
            return false;
        };
        if rider.has_departed() || self.elevator.is_aboard(id) || !self.premises.land(id) {
            return false;
        }
        ctx.events.rider_entered(id, ctx.now);
        let first = ctx.rng.choose(self.premises.riders()[id].accessible_floors()).copied();
        self.premises.request_floor(id, first, ctx);
        true
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Tick every floor's occupants in level order, then step the elevator.
    ///
    /// Each floor's present and queued lists are snapshotted before any of
    /// its occupants act; a rider that has moved off the floor since the
    /// snapshot is skipped.
    pub fn tick(&mut self, ctx: &mut TickContext<'_>) {
        for level in 0..self.floor_count() {
            let Ok(here) = FloorId::try_from(level) else {
                break;
            };
            let Some(floor) = self.premises.floor(here) else {
                continue;
            };
            let snapshot: Vec<RiderId> = floor.present().iter().copied().chain(floor.queued_riders()).collect();
            for id in snapshot {
                self.tick_rider(id, here, ctx);
            }
        }
        self.elevator.tick(&mut self.premises, ctx);
    }

    fn tick_rider(&mut self, id: RiderId, here: FloorId, ctx: &mut TickContext<'_>) {
        let placement = self.placement(id);
        if placement.floor() != Some(here) || matches!(placement, Placement::Aboard(_)) {
            return;
        }
        let view = TickView {
            now: ctx.now,
            placement,
            floor_change_probability: self.floor_change_probability,
        };
        let intents = self.premises.riders_mut()[id].plan(view, ctx.rng);
        for intent in intents {
            self.apply(id, intent, ctx);
        }
    }

    fn apply(&mut self, id: RiderId, intent: RiderIntent, ctx: &mut TickContext<'_>) {
        match intent {
            RiderIntent::RequestFloor(target) => self.premises.request_floor(id, target, ctx),
            RiderIntent::Complain => {
                debug!(rider = self.premises.riders()[id].label(), tick = ctx.now.0, "complaint filed");
                ctx.events.complaint_filed(id, ctx.now);
            }
            RiderIntent::Quit => {
                self.premises.quit(id, ctx);
            }
        }
    }

    // ── Direct manipulation ───────────────────────────────────────────────

    /// Queue `id` on its current floor.  Exposed for scenario set-up.
    pub fn join_queue(&mut self, id: RiderId, ctx: &mut TickContext<'_>) -> bool {
        self.premises.join_queue(id, ctx)
    }

    /// Give `id` a request for `target`, exactly as the rider itself would.
    pub fn request_floor(&mut self, id: RiderId, target: Option<FloorId>, ctx: &mut TickContext<'_>) {
        self.premises.request_floor(id, target, ctx);
    }

    /// Let `id` out through the ground floor.
    pub fn quit(&mut self, id: RiderId, ctx: &mut TickContext<'_>) -> bool {
        self.premises.quit(id, ctx)
    }

    /// Land `id` on its tracked floor without giving it a request.
    pub fn land(&mut self, id: RiderId) -> bool {
        self.premises.rider(id).is_some() && self.premises.land(id)
    }
}
