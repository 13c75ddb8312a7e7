// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-run search context.
//!
//! Everything a search mutates lives here and is owned by one engine, so
//! independent searches (different grid sizes, or the same size run twice)
//! never share state.
//!
//! ```text
//! SearchContext {
//!     grid: Grid,              // immutable topology
//!     state: SearchState,      // occupancy and remaining counters
//!     statistics: Statistics,  // visit and prune counters
//! }
//! ```

use crate::geometry::Grid;
use crate::state::{SearchState, Statistics};

#[derive(Debug, Clone)]
pub struct SearchContext {
    pub grid: Grid,
    pub state: SearchState,
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context with every cell of `grid` unvisited.
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            state: SearchState::new(grid),
            statistics: Statistics::new(),
        }
    }

    /// Clear the route and all counters, ready for another run.
    pub fn reset(&mut self) {
        self.state.reset();
        self.statistics.reset();
    }
}
