// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counting corner-to-middle Hamiltonian paths on an n×n grid.
//!
//! A *route* starts on the top-left corner (the origin), moves between
//! orthogonally adjacent cells, visits every cell exactly once, and ends on
//! a cell away from the border. [`count_lattice_paths`] returns how many
//! such routes exist.
//!
//! # Architecture
//!
//! ## Topology
//!
//! [`geometry::Grid`] classifies cells (corner, edge, middle, valid end) and
//! lists neighbours in a fixed `up, down, left, right` order.
//!
//! ## Search state
//!
//! [`state::SearchState`] tracks which cells are on the route, together with
//! counters (cells remaining, valid ends remaining, per-row and per-column
//! remaining) that the pruning rules read in constant time. Cells are
//! locked for the duration of a recursive call through a
//! [`state::LockGuard`].
//!
//! ## Pruning
//!
//! [`pruning::PruningOracle`] runs six necessary conditions before each
//! extension. Each is sound on its own, so enabling any subset gives the
//! same count as an unpruned search.
//!
//! ## Search
//!
//! [`engine::SearchEngine`] is a depth-first backtracking search from the
//! origin. Only routes whose first step is downwards are explored; the
//! result is scaled by the eight symmetries of the square
//! ([`symmetry::SYMMETRY_FACTOR`]).
//!
//! # Known counts
//!
//! | n | routes |
//! |---|--------|
//! | 3 | 8 |
//! | 4 | 64 |
//! | 5 | 1456 |
//! | 6 | 44880 |
//! | 7 | 3438352 |
//!
//! # Example
//!
//! ```
//! let report = lattice_search::count_lattice_paths(5, false).unwrap();
//! assert_eq!(report.path_count, 1456);
//! assert!(report.diagnostics.is_none());
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod pruning;
pub mod state;
pub mod symmetry;

// Re-export commonly used types
pub use config::{ScanSchedule, SearchConfig};
pub use context::SearchContext;
pub use engine::{ExhaustiveRouteFinder, RouteFinder, SearchEngine};
pub use error::SearchError;
pub use geometry::Grid;
pub use pruning::{PruneRule, RuleSet};
pub use state::Statistics;

/// Per-rule prune counts and visit counts of one search.
pub type Diagnostics = Statistics;

/// Result of one count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Grid size.
    pub n: usize,
    /// Number of routes, all symmetries included.
    pub path_count: u64,
    /// Present when the search ran verbose.
    pub diagnostics: Option<Diagnostics>,
}

/// Count all routes on an `n`×`n` grid with the default tunables.
pub fn count_lattice_paths(n: usize, verbose: bool) -> Result<SearchReport, SearchError> {
    count_lattice_paths_with(n, &SearchConfig::default().with_verbose(verbose))
}

/// Count all routes on an `n`×`n` grid.
///
/// The grid size and configuration are validated before any search state
/// is allocated.
pub fn count_lattice_paths_with(
    n: usize,
    config: &SearchConfig,
) -> Result<SearchReport, SearchError> {
    let mut engine = SearchEngine::new(n, *config)?;
    let path_count = engine.search()?;
    let diagnostics = config.verbose.then(|| engine.statistics().clone());
    Ok(SearchReport {
        n,
        path_count,
        diagnostics,
    })
}
