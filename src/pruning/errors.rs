// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reasons a branch of the search was pruned.

use super::PruneRule;
use crate::geometry::CellId;
use std::fmt;
use thiserror::Error;

/// Direction of a fully visited line of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Why a candidate cell cannot extend the route into a complete one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PruneReason {
    /// Every valid end cell is already on the route.
    #[error("no valid end cell remains unvisited")]
    NoValidEnd,

    /// The candidate has nowhere to go next.
    #[error("cell {cell} has no unvisited neighbour")]
    DeadEnd { cell: CellId },

    /// An unvisited corner has no usable edge left, or only one that does
    /// not lead from the candidate, so it could only be the route end.
    #[error("corner {corner} becomes inaccessible")]
    InaccessibleCorner { corner: CellId },

    /// Visiting the candidate completes a line with unvisited cells on
    /// both sides of it.
    #[error("completing {axis} {line} splits the unvisited cells")]
    RouteBlocked { axis: Axis, line: usize },

    /// The candidate's two exits cannot be joined through unvisited cells.
    #[error("fork at cell {cell} strands part of the grid")]
    DeadEndCreated { cell: CellId },

    /// Some unvisited cell can no longer be entered.
    #[error("cell {cell} is inaccessible")]
    InaccessibleCell { cell: CellId },
}

impl PruneReason {
    /// The rule that produced this reason.
    pub fn rule(&self) -> PruneRule {
        match self {
            PruneReason::NoValidEnd => PruneRule::NoValidEnd,
            PruneReason::DeadEnd { .. } => PruneRule::DeadEnd,
            PruneReason::InaccessibleCorner { .. } => PruneRule::InaccessibleCorner,
            PruneReason::RouteBlocked { .. } => PruneRule::RouteBlocked,
            PruneReason::DeadEndCreated { .. } => PruneRule::DeadEndCreated,
            PruneReason::InaccessibleCell { .. } => PruneRule::InaccessibleCell,
        }
    }
}
