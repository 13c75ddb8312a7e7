// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pruning oracle.
//!
//! Before a cell is added to the route, the engine asks the oracle whether
//! the route could still be completed through it. The oracle evaluates six
//! independent necessary conditions, cheapest and most decisive first, and
//! stops at the first that fails:
//!
//! 1. **NoValidEnd**: some valid end cell is still unvisited
//! 2. **DeadEnd**: the candidate has an unvisited neighbour
//! 3. **InaccessibleCorner**: no unvisited corner is cut off (`corners`)
//! 4. **RouteBlocked**: no completed row/column splits the grid (`blocks`)
//! 5. **DeadEndCreated**: the two exits of a fork can meet (`fork`)
//! 6. **InaccessibleCell**: every unvisited cell can be entered
//!    (`reachability`, only when the scan schedule says so)
//!
//! None of them ever rejects a prefix that extends to a complete route, so
//! any subset of them yields the same count.
//!
//! # Example
//!
//! ```
//! use lattice_search::geometry::Grid;
//! use lattice_search::pruning::{PruneReason, PruningOracle};
//! use lattice_search::state::SearchState;
//! use lattice_search::SearchConfig;
//!
//! let grid = Grid::new(3).unwrap();
//! let mut state = SearchState::new(grid);
//! let mut oracle = PruningOracle::new(&grid, &SearchConfig::default());
//!
//! // 0 -> 3 -> 4: the centre is the only valid end and it is taken.
//! state.lock(0);
//! state.lock(3);
//! state.lock(4);
//! let exits = state.available_neighbors(5);
//! assert_eq!(oracle.check(&mut state, 5, &exits), Err(PruneReason::NoValidEnd));
//! ```

pub mod blocks;
pub mod corners;
pub mod errors;
pub mod fork;
pub mod reachability;
pub mod rules;

pub use blocks::check_blocks;
pub use corners::check_corners;
pub use errors::{Axis, PruneReason};
pub use fork::{ForkProbe, DEFAULT_LOOKAHEAD_DEPTH};
pub use reachability::{check_reachability, ScanSchedule};
pub use rules::{PruneRule, RuleSet};

use crate::config::SearchConfig;
use crate::geometry::{CellId, Grid};
use crate::state::SearchState;

/// The composed gate evaluated before every non-final visit.
#[derive(Debug, Clone)]
pub struct PruningOracle {
    rules: RuleSet,
    fork_lookahead_depth: usize,
    scan_schedule: ScanSchedule,
    corners: [CellId; 3],
    fork: ForkProbe,
}

impl PruningOracle {
    pub fn new(grid: &Grid, config: &SearchConfig) -> Self {
        Self {
            rules: config.rules,
            fork_lookahead_depth: config.fork_lookahead_depth,
            scan_schedule: config.scan_schedule,
            corners: grid.other_corners(),
            fork: ForkProbe::new(),
        }
    }

    /// Enabled rules.
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Decide whether `candidate`, not yet on the route, can extend it.
    ///
    /// `exits` are the candidate's unvisited neighbours. `state` is only
    /// borrowed mutably for the fork probe and is unchanged on return.
    pub fn check(
        &mut self,
        state: &mut SearchState,
        candidate: CellId,
        exits: &[CellId],
    ) -> Result<(), PruneReason> {
        let rules = self.rules;

        if rules.contains(PruneRule::NoValidEnd) && state.valid_end_remaining() == 0 {
            return Err(PruneReason::NoValidEnd);
        }

        if rules.contains(PruneRule::DeadEnd) && exits.is_empty() {
            return Err(PruneReason::DeadEnd { cell: candidate });
        }

        if rules.contains(PruneRule::InaccessibleCorner) {
            check_corners(state, &self.corners, candidate)?;
        }

        if rules.contains(PruneRule::RouteBlocked) {
            check_blocks(state, candidate)?;
        }

        if rules.contains(PruneRule::DeadEndCreated) {
            self.fork
                .check(state, candidate, exits, self.fork_lookahead_depth)?;
        }

        if rules.contains(PruneRule::InaccessibleCell)
            && self
                .scan_schedule
                .is_due(state.remaining(), state.grid().cell_count())
        {
            check_reachability(state)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(n: usize, route: &[CellId], config: &SearchConfig) -> (SearchState, PruningOracle) {
        let grid = Grid::new(n).unwrap();
        let mut state = SearchState::new(grid);
        for &cell in route {
            state.lock(cell);
        }
        (state, PruningOracle::new(&grid, config))
    }

    #[test]
    fn test_open_move_passes() {
        let (mut state, mut oracle) = setup(4, &[0], &SearchConfig::default());
        let exits = state.available_neighbors(4);
        assert_eq!(oracle.check(&mut state, 4, &exits), Ok(()));
    }

    #[test]
    fn test_dead_end() {
        let config = SearchConfig::default().without_rule(PruneRule::NoValidEnd);
        let (mut state, mut oracle) = setup(3, &[0, 3, 4, 1, 5], &config);
        let exits = state.available_neighbors(2);
        assert!(exits.is_empty());
        assert_eq!(
            oracle.check(&mut state, 2, &exits),
            Err(PruneReason::DeadEnd { cell: 2 })
        );
    }

    #[test]
    fn test_rule_order_reports_first_failure() {
        // Both NoValidEnd and DeadEnd apply; the cheaper rule wins.
        let (mut state, mut oracle) = setup(3, &[0, 3, 4, 1, 5], &SearchConfig::default());
        let exits = state.available_neighbors(2);
        assert_eq!(
            oracle.check(&mut state, 2, &exits),
            Err(PruneReason::NoValidEnd)
        );
    }

    #[test]
    fn test_disabled_rules_pass() {
        let config = SearchConfig::default().with_rules(RuleSet::empty());
        let (mut state, mut oracle) = setup(3, &[0, 3, 4, 1, 5], &config);
        let exits = state.available_neighbors(2);
        assert_eq!(oracle.check(&mut state, 2, &exits), Ok(()));
    }

    #[test]
    fn test_check_leaves_state_unchanged() {
        let (mut state, mut oracle) = setup(4, &[0, 4, 8, 9], &SearchConfig::default());
        let before: Vec<bool> = (0..16).map(|cell| state.is_occupied(cell)).collect();
        let exits = state.available_neighbors(5);
        let _ = oracle.check(&mut state, 5, &exits);
        let after: Vec<bool> = (0..16).map(|cell| state.is_occupied(cell)).collect();
        assert_eq!(before, after);
        assert_eq!(state.remaining(), 12);
    }
}
