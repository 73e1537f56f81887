//! The elevator dispatch state machine.
//!
//! # One step
//!
//! ```text
//! doors open   ─┬─ floor actionable ──► alight, then board (stay open)
//!               └─ otherwise ─────────► close, drop floor from targets,
//!                                       clear waiting flags on this floor
//! doors closed ─┬─ actionable ahead ──► move one floor, open if actionable
//!               ├─ actionable behind ─► flip direction, same as above
//!               ├─ floor actionable ──► open in place
//!               └─ above ground ──────► move one floor down, stay closed
//! ```
//!
//! A floor is *actionable* when it is a pending target, or some rider queued
//! there fits into the free space and is not deferring to the next cycle.

use std::collections::BTreeSet;
use std::fmt;

use lift_core::{ConfigError, ConfigResult, FloorId, RiderId};
use lift_rider::Rider;
use tracing::{debug, trace};

use crate::{Premises, TickContext};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
        })
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoorState {
    Open,
    #[default]
    Closed,
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DoorState::Open => "OPEN",
            DoorState::Closed => "CLOSED",
        })
    }
}

/// Why a queued rider was not taken aboard.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Refusal {
    NoRequest,
    AlreadyDone,
    UnknownTarget,
    AlreadyAboard,
    NoRoom,
    RivalAboard,
}

#[derive(Clone, Debug)]
pub struct Elevator {
    capacity:   usize,
    available:  usize,
    current:    FloorId,
    direction:  Direction,
    doors:      DoorState,
    /// Boarding order.
    passengers: Vec<RiderId>,
    targets:    BTreeSet<FloorId>,
}

impl Elevator {
    /// An idle elevator on the ground floor, doors closed, heading up.
    pub fn new(capacity: i64) -> ConfigResult<Self> {
        let cap = usize::try_from(capacity)
            .ok()
            .filter(|&c| c >= 1)
            .ok_or(ConfigError::InvalidCapacity(capacity))?;
        Ok(Self {
            capacity: cap,
            available: cap,
            current: FloorId::GROUND,
            direction: Direction::default(),
            doors: DoorState::default(),
            passengers: Vec::new(),
            targets: BTreeSet::new(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn available_space(&self) -> usize {
        self.available
    }

    #[inline]
    pub fn current_floor(&self) -> FloorId {
        self.current
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn doors(&self) -> DoorState {
        self.doors
    }

    pub fn passengers(&self) -> &[RiderId] {
        &self.passengers
    }

    pub fn pending_targets(&self) -> impl Iterator<Item = FloorId> + '_ {
        self.targets.iter().copied()
    }

    pub fn is_aboard(&self, rider: RiderId) -> bool {
        self.passengers.contains(&rider)
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// Advance the state machine by one step.
    pub fn tick(&mut self, premises: &mut Premises, ctx: &mut TickContext<'_>) {
        match self.doors {
            DoorState::Open => self.step_open(premises, ctx),
            DoorState::Closed => self.step_closed(premises),
        }
    }

    fn step_open(&mut self, premises: &mut Premises, ctx: &mut TickContext<'_>) {
        if self.is_actionable(premises, self.current) {
            self.alight(premises, ctx);
            self.board(premises, ctx);
            return;
        }
        self.doors = DoorState::Closed;
        self.targets.remove(&self.current);
        let queued: Vec<RiderId> = premises
            .floor(self.current)
            .map(|f| f.queued_riders().collect())
            .unwrap_or_default();
        let riders = premises.riders_mut();
        for id in queued {
            riders[id].set_waiting_for_next(false);
        }
        debug!(floor = %self.current, "doors closed");
    }

    fn step_closed(&mut self, premises: &mut Premises) {
        let ahead = self.direction;
        let behind = ahead.opposite();
        if self.has_work_towards(premises, ahead) {
            self.travel(premises, ahead);
        } else if self.has_work_towards(premises, behind) {
            self.direction = behind;
            self.travel(premises, behind);
        } else if self.is_actionable(premises, self.current) {
            self.open();
        } else if !self.current.is_ground() {
            self.shift(premises, Direction::Down);
        }
    }

    /// Move one floor and open if there is something to do on arrival.
    fn travel(&mut self, premises: &mut Premises, towards: Direction) {
        self.shift(premises, towards);
        if self.is_actionable(premises, self.current) {
            self.open();
        }
    }

    fn open(&mut self) {
        self.doors = DoorState::Open;
        debug!(floor = %self.current, "doors opened");
    }

    fn shift(&mut self, premises: &mut Premises, towards: Direction) {
        self.current = match towards {
            Direction::Up => self.current.up(),
            Direction::Down => self.current.down(),
        };
        let riders = premises.riders_mut();
        for &id in &self.passengers {
            riders[id].set_current_floor(self.current);
        }
        debug!(floor = %self.current, direction = %towards, "elevator moved");
    }

    fn has_work_towards(&self, premises: &Premises, towards: Direction) -> bool {
        let here = self.current.index();
        match towards {
            Direction::Up => (here + 1..premises.floor_count())
                .filter_map(|l| FloorId::try_from(l).ok())
                .any(|l| self.is_actionable(premises, l)),
            Direction::Down => (0..here)
                .rev()
                .filter_map(|l| FloorId::try_from(l).ok())
                .any(|l| self.is_actionable(premises, l)),
        }
    }

    fn is_actionable(&self, premises: &Premises, floor: FloorId) -> bool {
        if self.targets.contains(&floor) {
            return true;
        }
        let Some(f) = premises.floor(floor) else {
            return false;
        };
        let riders = premises.riders();
        f.queued_riders().any(|id| {
            let r = &riders[id];
            r.required_space() <= self.available && !r.is_waiting_for_next()
        })
    }

    // ── Transfers ─────────────────────────────────────────────────────────

    fn alight(&mut self, premises: &mut Premises, ctx: &mut TickContext<'_>) {
        let here = self.current;
        for id in self.passengers.clone() {
            let rider = &premises.riders()[id];
            if rider.request().map(|r| r.target()) != Some(here) {
                continue;
            }
            let space = rider.required_space();
            premises.target_reached(id, ctx);
            self.passengers.retain(|&p| p != id);
            self.available += space;
            self.targets.remove(&here);
            trace!(rider = premises.riders()[id].label(), floor = %here, "alighted");
        }
    }

    fn board(&mut self, premises: &mut Premises, ctx: &mut TickContext<'_>) {
        let waiting: Vec<RiderId> = premises
            .floor(self.current)
            .map(|f| f.queued_riders().collect())
            .unwrap_or_default();

        for id in waiting {
            if self.available == 0 {
                break;
            }
            match self.verdict(premises, &premises.riders()[id]) {
                Ok(target) => {
                    self.passengers.push(id);
                    self.available -= premises.riders()[id].required_space();
                    self.targets.insert(target);
                    premises.request_accepted(id, ctx);
                    trace!(rider = premises.riders()[id].label(), target = %target, "boarded");
                }
                Err(Refusal::RivalAboard) => {
                    premises.riders_mut()[id].set_waiting_for_next(true);
                    premises.join_queue(id, ctx);
                    trace!(rider = premises.riders()[id].label(), "deferred: rival aboard");
                }
                Err(refusal) => {
                    trace!(rider = premises.riders()[id].label(), ?refusal, "not boarded");
                }
            }
        }
    }

    /// Decide whether `rider` may board; on success returns its target.
    fn verdict(&self, premises: &Premises, rider: &Rider) -> Result<FloorId, Refusal> {
        let request = rider.request().ok_or(Refusal::NoRequest)?;
        if request.is_done() {
            return Err(Refusal::AlreadyDone);
        }
        let target = request.target();
        if premises.floor(target).is_none() {
            return Err(Refusal::UnknownTarget);
        }
        if self.is_aboard(rider.id()) {
            return Err(Refusal::AlreadyAboard);
        }
        if rider.required_space() > self.available {
            return Err(Refusal::NoRoom);
        }
        let riders = premises.riders();
        if self.passengers.iter().any(|&p| rider.is_rival_of(&riders[p])) {
            return Err(Refusal::RivalAboard);
        }
        Ok(target)
    }
}

impl fmt::Display for Elevator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "elevator at {}, going {}, doors {}, {}/{} free",
            self.current, self.direction, self.doors, self.available, self.capacity
        )
    }
}
