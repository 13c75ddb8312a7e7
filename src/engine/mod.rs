// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking route search.
//!
//! The engine extends a route one cell at a time from the origin corner.
//! Each call of the recursive visit either
//!
//! - reaches the last unvisited cell (a *leaf*), which completes a route iff
//!   that cell is a valid end,
//! - is rejected by exactly one pruning rule, or
//! - passes every rule (an *expansion*), locks the cell and recurses into
//!   each of its unvisited neighbours in `up, down, left, right` order.
//!
//! so `calls == leaves + expansions + pruned` holds for every run.
//!
//! The lock taken by an expansion is a [`LockGuard`]; the recursion below
//! works through the guard and the cell is unlocked when it drops. The
//! origin's right-hand neighbour is never a successor (see
//! [`crate::geometry::Grid::neighbors`]), and the raw count is scaled by
//! [`crate::symmetry::SYMMETRY_FACTOR`] at the end.
//!
//! # Example
//!
//! ```
//! use lattice_search::engine::{RouteFinder, SearchEngine};
//! use lattice_search::SearchConfig;
//!
//! let mut engine = SearchEngine::new(4, SearchConfig::default()).unwrap();
//! assert_eq!(engine.run().unwrap(), 64);
//! assert_eq!(engine.name(), "pruned");
//! ```

pub mod exhaustive;

pub use exhaustive::ExhaustiveRouteFinder;

use crate::config::SearchConfig;
use crate::context::SearchContext;
use crate::error::SearchError;
use crate::geometry::{CellId, Grid, ORIGIN};
use crate::pruning::PruningOracle;
use crate::state::{Counters, LockGuard, SearchState, Statistics};
use crate::symmetry;
use tracing::{debug, info};

/// A way of counting routes on one grid.
pub trait RouteFinder {
    /// Count every route, including those removed by symmetry.
    fn run(&mut self) -> Result<u64, SearchError>;

    /// Short label used in logs and benchmark ids.
    fn name(&self) -> &str;
}

/// The pruned search.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    ctx: SearchContext,
    oracle: PruningOracle,
    config: SearchConfig,
}

impl SearchEngine {
    /// Create an engine for an `n`×`n` grid.
    ///
    /// Fails before allocating any search state if `n < 3` or the
    /// configuration is unsound.
    pub fn new(n: usize, config: SearchConfig) -> Result<Self, SearchError> {
        let grid = Grid::new(n)?;
        config.validate()?;
        Ok(Self::with_context(SearchContext::with_grid(grid), config))
    }

    fn with_context(ctx: SearchContext, config: SearchConfig) -> Self {
        let oracle = PruningOracle::new(&ctx.grid, &config);
        Self {
            ctx,
            oracle,
            config,
        }
    }

    pub fn grid(&self) -> Grid {
        self.ctx.grid
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters from the most recent run.
    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }

    /// Run the search from a clean state and return the full route count.
    pub fn search(&mut self) -> Result<u64, SearchError> {
        self.ctx.reset();
        let grid = self.ctx.grid;
        info!(
            n = grid.n(),
            cells = grid.cell_count(),
            valid_ends = self.ctx.state.valid_end_remaining(),
            "starting pruned search"
        );

        let raw = visit(
            &mut self.ctx.state,
            &mut self.ctx.statistics,
            &mut self.oracle,
            ORIGIN,
        );
        let total = symmetry::expand(raw)?;

        info!(n = grid.n(), raw, total, "search complete");
        if self.config.verbose {
            let stats = &self.ctx.statistics;
            debug!(
                calls = stats.get(Counters::Calls),
                leaves = stats.get(Counters::Leaves),
                expansions = stats.get(Counters::Expansions),
                pruned = stats.total_pruned(),
                "visit counts"
            );
            for (rule, count) in stats.pruned_by_rule() {
                debug!(rule, count, "pruned");
            }
        }
        Ok(total)
    }
}

impl RouteFinder for SearchEngine {
    fn run(&mut self) -> Result<u64, SearchError> {
        self.search()
    }

    fn name(&self) -> &str {
        "pruned"
    }
}

/// Count routes that extend the current prefix through `index`.
///
/// `index` is unoccupied on entry and the state is unchanged on return.
fn visit(
    state: &mut SearchState,
    statistics: &mut Statistics,
    oracle: &mut PruningOracle,
    index: CellId,
) -> u64 {
    statistics.increment(Counters::Calls);

    if state.remaining() == 1 {
        statistics.increment(Counters::Leaves);
        return u64::from(state.is_valid_end(index));
    }

    let next = state.available_neighbors(index);
    if let Err(reason) = oracle.check(state, index, &next) {
        statistics.record_prune(reason.rule());
        return 0;
    }
    statistics.increment(Counters::Expansions);

    let mut guard: LockGuard<'_> = state.lock_guard(index);
    next.iter()
        .map(|&cell| visit(&mut guard, statistics, oracle, cell))
        .sum()
}
