// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search tunables.
//!
//! None of these change the count; they trade pruning work against the
//! number of visits, or switch diagnostics on.

use crate::error::{SearchError, MIN_LOOKAHEAD_DEPTH};
use crate::pruning::{PruneRule, RuleSet, DEFAULT_LOOKAHEAD_DEPTH};

pub use crate::pruning::ScanSchedule;

/// Configuration for a single search.
///
/// # Example
///
/// ```
/// use lattice_search::{ScanSchedule, SearchConfig};
///
/// let config = SearchConfig::default()
///     .with_verbose(true)
///     .with_fork_lookahead_depth(5)
///     .with_scan_schedule(ScanSchedule::Always);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Report per-rule diagnostics with the count.
    pub verbose: bool,
    /// Breadth-first layers examined when resolving a fork.
    pub fork_lookahead_depth: usize,
    /// When the full reachability scan runs.
    pub scan_schedule: ScanSchedule,
    /// Enabled pruning rules.
    pub rules: RuleSet,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_fork_lookahead_depth(mut self, depth: usize) -> Self {
        self.fork_lookahead_depth = depth;
        self
    }

    pub fn with_scan_schedule(mut self, schedule: ScanSchedule) -> Self {
        self.scan_schedule = schedule;
        self
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn without_rule(mut self, rule: PruneRule) -> Self {
        self.rules = self.rules.without(rule);
        self
    }

    /// Reject settings that would make the search discard real routes.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.fork_lookahead_depth < MIN_LOOKAHEAD_DEPTH {
            return Err(SearchError::InvalidLookaheadDepth {
                depth: self.fork_lookahead_depth,
            });
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            fork_lookahead_depth: DEFAULT_LOOKAHEAD_DEPTH,
            scan_schedule: ScanSchedule::default(),
            rules: RuleSet::all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert!(!config.verbose);
        assert_eq!(config.fork_lookahead_depth, 3);
        assert_eq!(config.scan_schedule, ScanSchedule::Tapered);
        assert_eq!(config.rules, RuleSet::all());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_shallow_lookahead_rejected() {
        for depth in 0..3 {
            let config = SearchConfig::default().with_fork_lookahead_depth(depth);
            assert_eq!(
                config.validate(),
                Err(SearchError::InvalidLookaheadDepth { depth })
            );
        }
        assert!(SearchConfig::default()
            .with_fork_lookahead_depth(10)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_without_rule() {
        let config = SearchConfig::default().without_rule(PruneRule::InaccessibleCell);
        assert!(!config.rules.contains(PruneRule::InaccessibleCell));
        assert_eq!(config.rules.len(), 5);
    }
}
