// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the search context and incremented by the
//! engine: once per visit, and once per branch a pruning rule aborts.
//! They are diagnostic only and never influence the route count.

use crate::pruning::PruneRule;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Every call of the recursive visit.
    Calls,
    /// Visits of the last unvisited cell.
    Leaves,
    /// Visits that passed every rule and recursed into their neighbours.
    Expansions,
}

const COUNT: usize = Counters::COUNT + PruneRule::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Record a branch aborted by `rule`.
    pub fn record_prune(&mut self, rule: PruneRule) {
        self.stats[Counters::COUNT + rule as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Branches aborted by `rule`.
    pub fn pruned(&self, rule: PruneRule) -> u64 {
        self.stats[Counters::COUNT + rule as usize]
    }

    /// Branches aborted by any rule.
    pub fn total_pruned(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }

    /// Per-rule counts in evaluation order, keyed by rule name.
    pub fn pruned_by_rule(&self) -> Vec<(&'static str, u64)> {
        PruneRule::iter()
            .map(|rule| (rule.name(), self.pruned(rule)))
            .collect()
    }

    pub fn reset(&mut self) {
        self.stats = [0; COUNT];
    }
}
