//! Waiting-time statistics.

use std::collections::BTreeMap;

use lift_core::{RiderId, Tick};

/// One stay in a queue.  Open until the rider is taken aboard.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitRecord {
    pub joined: Tick,
    pub served: Option<Tick>,
}

impl WaitRecord {
    /// Ticks waited, once the record is closed.
    #[inline]
    pub fn wait(&self) -> Option<u64> {
        self.served.map(|s| s.since(self.joined))
    }
}

/// Per-rider history of queue stays.
///
/// A rider rejoining a queue (for example after deferring to a rival) opens
/// a fresh record; only the most recent record can be closed.
#[derive(Clone, Debug, Default)]
pub struct WaitingStatistics {
    records: BTreeMap<RiderId, Vec<WaitRecord>>,
}

impl WaitingStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_joined(&mut self, rider: RiderId, now: Tick) {
        self.records
            .entry(rider)
            .or_default()
            .push(WaitRecord { joined: now, served: None });
    }

    /// Close the rider's most recent record.  No-op if it has none or the
    /// last one is already closed.
    pub fn serving_started(&mut self, rider: RiderId, now: Tick) {
        let last = self.records.get_mut(&rider).and_then(|r| r.last_mut());
        if let Some(record) = last.filter(|r| r.served.is_none()) {
            record.served = Some(now);
        }
    }

    pub fn records(&self, rider: RiderId) -> &[WaitRecord] {
        self.records.get(&rider).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of closed records.
    pub fn samples(&self) -> usize {
        self.closed().count()
    }

    /// Mean wait over closed records; `NaN` when there are none.
    pub fn average(&self) -> f64 {
        let (count, total) = self.closed().fold((0u64, 0u64), |(n, sum), w| (n + 1, sum + w));
        if count == 0 {
            f64::NAN
        } else {
            total as f64 / count as f64
        }
    }

    fn closed(&self) -> impl Iterator<Item = u64> + '_ {
        self.records.values().flatten().filter_map(WaitRecord::wait)
    }
}
