// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable per-run search state.
//!
//! - `search_state`: Occupancy of the route under construction, with the
//!   remaining-cell counters every pruning rule reads
//! - `statistics`: Diagnostic counters (visits and pruned branches per rule)
//!
//! Only the backtracking engine mutates the occupancy, and every lock is
//! paired with an unlock before the frame that made it returns.

pub mod search_state;
pub mod statistics;

pub use search_state::{LockGuard, SearchState};
pub use statistics::{Counters, Statistics};
