// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Whole-grid reachability scan.
//!
//! An unvisited cell without unvisited neighbours can never be entered: the
//! route head is the only occupied cell that could still lead into it, and
//! the candidate is not yet occupied. The scan touches every cell, so it
//! only runs when its [`ScanSchedule`] says so.

use super::PruneReason;
use crate::state::SearchState;
use std::fmt;
use std::str::FromStr;

/// When the reachability scan runs, as a function of the unvisited cell
/// count. Every schedule gives the same route count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanSchedule {
    /// On every visit.
    Always,
    /// Never; the rule is effectively disabled.
    Never,
    /// On every other visit once at most two thirds of the cells are left,
    /// and on every visit once at most one third is left.
    #[default]
    Tapered,
}

impl ScanSchedule {
    /// Whether the scan is due with `remaining` of `total` cells unvisited.
    pub fn is_due(self, remaining: usize, total: usize) -> bool {
        match self {
            ScanSchedule::Always => true,
            ScanSchedule::Never => false,
            ScanSchedule::Tapered => {
                remaining * 3 <= total * 2 && (remaining * 3 <= total || remaining % 2 == 0)
            }
        }
    }
}

impl fmt::Display for ScanSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanSchedule::Always => f.write_str("always"),
            ScanSchedule::Never => f.write_str("never"),
            ScanSchedule::Tapered => f.write_str("tapered"),
        }
    }
}

impl FromStr for ScanSchedule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "always" => Ok(ScanSchedule::Always),
            "never" => Ok(ScanSchedule::Never),
            "tapered" => Ok(ScanSchedule::Tapered),
            _ => Err(format!("unknown scan schedule '{}'", s)),
        }
    }
}

/// Fail on the first unvisited cell that has no unvisited neighbour.
pub fn check_reachability(state: &SearchState) -> Result<(), PruneReason> {
    for cell in 0..state.grid().cell_count() {
        if !state.is_occupied(cell) && state.available_count(cell) == 0 {
            return Err(PruneReason::InaccessibleCell { cell });
        }
    }
    Ok(())
}
