//! Bounded record of the state changes a machine has applied.
//!
//! Every jump made during transition resolution is recorded with the tick
//! it happened in, so chained jumps within a single tick share a stamp.

use super::state::StateId;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of records kept by a machine.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// Record of a single applied transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransitionRecord {
    /// The state being exited
    pub from: StateId,
    /// The state being entered
    pub to: StateId,
    /// Tick during which the jump happened
    pub tick: u64,
}

/// FIFO of the most recent transitions, oldest first.
///
/// Once `capacity` records are held, recording drops the oldest one. A
/// capacity of zero disables recording entirely.
#[derive(Debug, Clone)]
pub struct TransitionHistory {
    records: VecDeque<TransitionRecord>,
    capacity: usize,
}

impl Default for TransitionHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl TransitionHistory {
    /// History keeping at most `capacity` records.
    ///
    /// Storage grows on demand; only the default bound is reserved up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            capacity,
        }
    }

    pub fn record(&mut self, record: TransitionRecord) {
        if self.capacity == 0 {
            return;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub fn records(&self) -> impl Iterator<Item = &TransitionRecord> + '_ {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    /// Records stamped with `tick`, in the order they were applied.
    pub fn in_tick(&self, tick: u64) -> impl Iterator<Item = &TransitionRecord> + '_ {
        self.records.iter().filter(move |record| record.tick == tick)
    }

    /// States traversed: the first record's origin, then every destination.
    pub fn path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|record| record.to));
        path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
