//! A single floor: idle occupants and the elevator queue.

use std::fmt;

use lift_core::{FloorId, RiderId};
use lift_rider::Rider;

/// One slot in a floor queue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueEntry {
    pub rider:    RiderId,
    pub ticket:   u64,
    /// Served ahead of every non-priority entry.
    pub priority: bool,
}

impl QueueEntry {
    /// Sort key: priority riders first, then ticket order.  Tickets are unique
    /// per floor so the order is total.
    #[inline]
    fn order_key(&self) -> (bool, u64) {
        (!self.priority, self.ticket)
    }
}

/// Occupant bookkeeping for one level.
///
/// `present` and `queue` are disjoint.  Mutators return `bool` (or `Option`)
/// for "did anything change"; none of them error.
#[derive(Clone, Debug)]
pub struct Floor {
    id:          FloorId,
    present:     Vec<RiderId>,
    queue:       Vec<QueueEntry>,
    next_ticket: u64,
}

impl Floor {
    pub fn new(id: FloorId) -> Self {
        Self { id, present: Vec::new(), queue: Vec::new(), next_ticket: 0 }
    }

    #[inline]
    pub fn id(&self) -> FloorId {
        self.id
    }

    /// Idle occupants in landing order.
    pub fn present(&self) -> &[RiderId] {
        &self.present
    }

    /// Queue in service order.
    pub fn queue(&self) -> &[QueueEntry] {
        &self.queue
    }

    pub fn queued_riders(&self) -> impl Iterator<Item = RiderId> + '_ {
        self.queue.iter().map(|e| e.rider)
    }

    /// Number of tickets handed out so far.
    #[inline]
    pub fn tickets_issued(&self) -> u64 {
        self.next_ticket
    }

    pub fn is_present(&self, rider: RiderId) -> bool {
        self.present.contains(&rider)
    }

    pub fn is_queued(&self, rider: RiderId) -> bool {
        self.queue.iter().any(|e| e.rider == rider)
    }

    #[inline]
    pub fn holds(&self, rider: RiderId) -> bool {
        self.is_present(rider) || self.is_queued(rider)
    }

    /// Add `rider` to the present occupants.  Fails if it is already held by
    /// this floor or it is tracked as being somewhere else.
    pub fn land(&mut self, rider: &Rider) -> bool {
        if self.holds(rider.id()) || rider.current_floor() != self.id {
            return false;
        }
        self.present.push(rider.id());
        true
    }

    /// Remove `rider` from whichever container holds it.
    pub fn leave(&mut self, rider: RiderId) -> bool {
        if let Some(at) = self.present.iter().position(|&r| r == rider) {
            self.present.remove(at);
            return true;
        }
        if let Some(at) = self.queue.iter().position(|e| e.rider == rider) {
            self.queue.remove(at);
            return true;
        }
        false
    }

    /// Move a present or already-queued rider to a fresh place in the queue.
    ///
    /// Returns the new ticket, or `None` (with no mutation) when the rider is
    /// not on this floor.
    pub fn join_queue(&mut self, rider: &Rider) -> Option<u64> {
        if !self.leave(rider.id()) {
            return None;
        }
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.queue.push(QueueEntry { rider: rider.id(), ticket, priority: rider.has_priority() });
        self.queue.sort_by_key(QueueEntry::order_key);
        Some(ticket)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}
