//! Per-rider state and the per-tick planning step.

use std::fmt;

use lift_core::{FloorId, RiderId, SimRng, Tick};

use crate::{FloorRequest, Placement, RiderIntent, RiderKind, RiderProfile, Routine, TickView};

/// Progress of a visitor through its single visit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitState {
    /// Set when the first requested floor has been reached.
    pub arrived:        bool,
    /// Tick at which the visitor heads back to the ground floor.
    pub leave_at:       Option<Tick>,
    /// Set once the stay is over; the visitor quits as soon as it is idle on
    /// the ground floor.
    pub ready_to_leave: bool,
}

/// A person in (or about to enter) the building.
///
/// A rider is always in exactly one of: outside, present on a floor, queued
/// on a floor, aboard the elevator, departed.  The building owns that
/// placement; the rider only remembers its `current_floor`.
#[derive(Clone, Debug)]
pub struct Rider {
    id:               RiderId,
    label:            String,
    profile:          RiderProfile,
    current_floor:    FloorId,
    /// Sorted ascending, no duplicates.
    accessible:       Vec<FloorId>,
    request:          Option<FloorRequest>,
    ticket:           Option<u64>,
    waiting_for_next: bool,
    queue_joined_at:  Option<Tick>,
    visit:            VisitState,
    departed:         bool,
}

impl Rider {
    pub fn new(id: RiderId, label: String, kind: RiderKind, floor_count: usize) -> Self {
        let profile = kind.profile();
        Self {
            id,
            label,
            profile,
            current_floor: FloorId::GROUND,
            accessible: profile.access.floors(floor_count),
            request: None,
            ticket: None,
            waiting_for_next: false,
            queue_joined_at: None,
            visit: VisitState::default(),
            departed: false,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> RiderId {
        self.id
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn kind(&self) -> RiderKind {
        self.profile.kind
    }

    #[inline]
    pub fn profile(&self) -> &RiderProfile {
        &self.profile
    }

    #[inline]
    pub fn required_space(&self) -> usize {
        self.profile.required_space
    }

    #[inline]
    pub fn current_floor(&self) -> FloorId {
        self.current_floor
    }

    pub fn accessible_floors(&self) -> &[FloorId] {
        &self.accessible
    }

    pub fn can_access(&self, floor: FloorId) -> bool {
        self.accessible.binary_search(&floor).is_ok()
    }

    #[inline]
    pub fn request(&self) -> Option<&FloorRequest> {
        self.request.as_ref()
    }

    #[inline]
    pub fn ticket(&self) -> Option<u64> {
        self.ticket
    }

    #[inline]
    pub fn is_waiting_for_next(&self) -> bool {
        self.waiting_for_next
    }

    #[inline]
    pub fn queue_joined_at(&self) -> Option<Tick> {
        self.queue_joined_at
    }

    #[inline]
    pub fn visit(&self) -> &VisitState {
        &self.visit
    }

    #[inline]
    pub fn has_departed(&self) -> bool {
        self.departed
    }

    /// Impatient riders are served ahead of everyone else in floor queues.
    #[inline]
    pub fn has_priority(&self) -> bool {
        self.profile.patience.is_some()
    }

    /// Rivalry is symmetric and only exists between developer factions.
    pub fn is_rival_of(&self, other: &Rider) -> bool {
        match (self.profile.faction, other.profile.faction) {
            (Some(mine), Some(theirs)) => mine.rival() == theirs,
            _ => false,
        }
    }

    // ── Mutators used by the building ─────────────────────────────────────

    pub fn set_current_floor(&mut self, floor: FloorId) {
        self.current_floor = floor;
    }

    pub fn set_request(&mut self, request: FloorRequest) {
        self.request = Some(request);
    }

    /// Mark the current request done if the rider stands on its target.
    /// Returns `false` when there is no request or the target differs.
    pub fn complete_request(&mut self) -> bool {
        let current = self.current_floor;
        self.request.as_mut().is_some_and(|r| r.mark_done(current))
    }

    pub fn assign_ticket(&mut self, ticket: u64, now: Tick) {
        self.ticket = Some(ticket);
        self.queue_joined_at = Some(now);
    }

    pub fn set_waiting_for_next(&mut self, waiting: bool) {
        self.waiting_for_next = waiting;
    }

    /// Add `floor` to the accessible set.  Visitors use this to reach the
    /// ground floor on their way out.
    pub fn widen_access(&mut self, floor: FloorId) {
        if let Err(at) = self.accessible.binary_search(&floor) {
            self.accessible.insert(at, floor);
        }
    }

    /// Called when the rider has landed on its requested floor.  A visitor's
    /// first arrival starts its stay; draws once from `rng` in that case.
    pub fn note_arrival(&mut self, now: Tick, rng: &mut SimRng) {
        if let Routine::Visiting(stay) = self.profile.routine {
            if !self.visit.arrived {
                self.visit.arrived = true;
                self.visit.leave_at = Some(now + stay.draw(rng));
            }
        }
    }

    pub fn mark_departed(&mut self) {
        self.departed = true;
        self.request = None;
        self.ticket = None;
        self.queue_joined_at = None;
        self.waiting_for_next = false;
    }

    // ── Per-tick behaviour ────────────────────────────────────────────────

    /// Decide what to do this tick.  Only called for riders present or
    /// queued on a floor.
    pub fn plan(&mut self, view: TickView, rng: &mut SimRng) -> Vec<RiderIntent> {
        let mut intents = Vec::new();
        match self.profile.routine {
            Routine::Roaming => self.plan_roaming(view, rng, &mut intents),
            Routine::Visiting(_) => self.plan_visit(view, &mut intents),
        }
        if let Some(limit) = self.profile.patience {
            self.check_patience(view, limit, &mut intents);
        }
        intents
    }

    fn plan_roaming(&self, view: TickView, rng: &mut SimRng, intents: &mut Vec<RiderIntent>) {
        if !matches!(view.placement, Placement::OnFloor(_)) {
            return;
        }
        if rng.next_f64() < view.floor_change_probability {
            let candidates: Vec<FloorId> = self
                .accessible
                .iter()
                .copied()
                .filter(|&f| f != self.current_floor)
                .collect();
            intents.push(RiderIntent::RequestFloor(rng.choose(&candidates).copied()));
        }
    }

    fn plan_visit(&mut self, view: TickView, intents: &mut Vec<RiderIntent>) {
        if self.visit.arrived && self.visit.leave_at == Some(view.now) {
            self.visit.ready_to_leave = true;
            if !self.current_floor.is_ground() {
                self.widen_access(FloorId::GROUND);
                intents.push(RiderIntent::RequestFloor(Some(FloorId::GROUND)));
            }
        }
        if self.visit.ready_to_leave && view.placement == Placement::OnFloor(FloorId::GROUND) {
            intents.push(RiderIntent::Quit);
        }
    }

    fn check_patience(&self, view: TickView, limit: u64, intents: &mut Vec<RiderIntent>) {
        if view.placement != Placement::Queued(FloorId::GROUND) || intents.contains(&RiderIntent::Quit) {
            return;
        }
        let waited = self.queue_joined_at.map(|t| view.now.since(t));
        if waited.is_some_and(|w| w > limit) {
            intents.push(RiderIntent::Complain);
            intents.push(RiderIntent::Quit);
        }
    }
}

impl fmt::Display for Rider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.request {
            Some(r) => write!(f, "{}[{}]", self.label, r.target().index()),
            None => write!(f, "{}[*]", self.label),
        }
    }
}
