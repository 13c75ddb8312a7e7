// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Plain backtracking with only the symmetry reduction.
//!
//! Used as a reference count for the pruned engine, and behind the CLI's
//! `--exhaustive` flag. Tractable up to n = 6.

use super::RouteFinder;
use crate::error::SearchError;
use crate::geometry::{CellId, Grid, ORIGIN};
use crate::state::SearchState;
use crate::symmetry;
use tracing::info;

#[derive(Debug, Clone)]
pub struct ExhaustiveRouteFinder {
    state: SearchState,
    calls: u64,
}

impl ExhaustiveRouteFinder {
    pub fn new(n: usize) -> Result<Self, SearchError> {
        Ok(Self::with_grid(Grid::new(n)?))
    }

    pub fn with_grid(grid: Grid) -> Self {
        Self {
            state: SearchState::new(grid),
            calls: 0,
        }
    }

    pub fn grid(&self) -> Grid {
        self.state.grid()
    }

    /// Visits made by the most recent run.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    fn walk(state: &mut SearchState, calls: &mut u64, index: CellId) -> u64 {
        *calls += 1;
        if state.remaining() == 1 {
            return u64::from(state.is_valid_end(index));
        }
        let next = state.available_neighbors(index);
        let mut guard = state.lock_guard(index);
        next.iter()
            .map(|&cell| Self::walk(&mut guard, calls, cell))
            .sum()
    }
}

impl RouteFinder for ExhaustiveRouteFinder {
    fn run(&mut self) -> Result<u64, SearchError> {
        self.state.reset();
        self.calls = 0;
        let n = self.state.grid().n();
        info!(n, "starting exhaustive search");

        let raw = Self::walk(&mut self.state, &mut self.calls, ORIGIN);
        let total = symmetry::expand(raw)?;

        info!(n, raw, total, calls = self.calls, "search complete");
        Ok(total)
    }

    fn name(&self) -> &str {
        "exhaustive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SearchEngine;
    use crate::state::Counters;
    use crate::SearchConfig;

    #[test]
    fn test_small_counts() {
        for (n, expected) in [(3, 8), (4, 64), (5, 1456)] {
            let mut finder = ExhaustiveRouteFinder::new(n).unwrap();
            assert_eq!(finder.run(), Ok(expected), "n = {n}");
        }
    }

    #[test]
    fn test_visits_more_than_pruned() {
        let mut exhaustive = ExhaustiveRouteFinder::new(5).unwrap();
        let mut pruned = SearchEngine::new(5, SearchConfig::default()).unwrap();
        assert_eq!(exhaustive.run(), pruned.run());
        let pruned_calls = pruned.statistics().get(Counters::Calls);
        assert!(exhaustive.calls() > pruned_calls);
    }

    #[test]
    fn test_rejects_small_grid() {
        assert_eq!(
            ExhaustiveRouteFinder::new(1).unwrap_err(),
            SearchError::InvalidGridSize { n: 1 }
        );
    }
}
