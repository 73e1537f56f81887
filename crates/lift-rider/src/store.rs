//! `RiderStore`: every rider a building has ever created, indexed by id.

use std::ops::{Index, IndexMut};

use lift_core::RiderId;

use crate::{Rider, RiderKind};

/// Arena of riders.  Ids are dense and never reused; departed riders stay in
/// the store so their history remains inspectable.
#[derive(Clone, Debug, Default)]
pub struct RiderStore {
    riders:  Vec<Rider>,
    /// Riders created so far, per kind (indexed by `RiderKind::ordinal`).
    spawned: [u32; 5],
}

impl RiderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rider of `kind` on the ground floor of a building with
    /// `floor_count` floors.  The label numbers riders of each kind from 1.
    pub fn spawn(&mut self, kind: RiderKind, floor_count: usize) -> RiderId {
        let id = RiderId(self.riders.len() as u32);
        let counter = &mut self.spawned[kind.ordinal()];
        *counter += 1;
        let label = format!("{}{:02}", kind.prefix(), counter);
        self.riders.push(Rider::new(id, label, kind, floor_count));
        id
    }

    #[inline]
    pub fn get(&self, id: RiderId) -> Option<&Rider> {
        self.riders.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: RiderId) -> Option<&mut Rider> {
        self.riders.get_mut(id.index())
    }

    /// Number of riders of `kind` created so far.
    pub fn spawned(&self, kind: RiderKind) -> usize {
        self.spawned[kind.ordinal()] as usize
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.riders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rider> {
        self.riders.iter()
    }
}

impl Index<RiderId> for RiderStore {
    type Output = Rider;

    fn index(&self, id: RiderId) -> &Rider {
        &self.riders[id.index()]
    }
}

impl IndexMut<RiderId> for RiderStore {
    fn index_mut(&mut self, id: RiderId) -> &mut Rider {
        &mut self.riders[id.index()]
    }
}
