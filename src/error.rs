// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for setting up a search.
//!
//! All of these are raised before any search state is allocated. Once a
//! search has started it cannot fail: every pruning rule is total and the
//! recursion always terminates.

use thiserror::Error;

/// Smallest grid size for which corner, edge and middle cells are distinct.
pub const MIN_GRID_SIZE: usize = 3;

/// Smallest fork lookahead depth that never discards a completable route.
pub const MIN_LOOKAHEAD_DEPTH: usize = 3;

/// Errors reported by [`crate::count_lattice_paths`] and friends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The grid is too small for corner/edge/middle classification.
    #[error(
        "grid size {n} is too small (expected n >= {min})",
        min = MIN_GRID_SIZE
    )]
    InvalidGridSize { n: usize },

    /// The fork lookahead would reject forks that can still be joined.
    #[error(
        "fork lookahead depth {depth} is too shallow (expected depth >= {min})",
        min = MIN_LOOKAHEAD_DEPTH
    )]
    InvalidLookaheadDepth { depth: usize },

    /// Applying the symmetry factor to the raw count overflowed.
    #[error(
        "route count overflow: {raw} routes cannot be scaled by the symmetry factor"
    )]
    CountOverflow { raw: u64 },
}
