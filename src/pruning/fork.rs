// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fork resolution.
//!
//! When the candidate has exactly two unvisited neighbours, the route leaves
//! through one of them and must later come back for the other. Both must
//! therefore be joined by unvisited cells that avoid the candidate.
//!
//! On a grid this only needs a short lookahead. The two exits are never
//! adjacent, and the only length-2 join between them runs through the cell
//! diagonal to the candidate. When that join is missing, the route prefix
//! together with the candidate already encloses one exit, so a breadth-first
//! search over three layers (distance <= 2) decides the rule for every
//! state the search reaches.

use super::PruneReason;
use crate::geometry::CellId;
use crate::state::SearchState;
use std::mem;

/// Default number of breadth-first layers examined.
pub const DEFAULT_LOOKAHEAD_DEPTH: usize = 3;

/// Reusable buffers for the bounded breadth-first search.
#[derive(Debug, Default, Clone)]
pub struct ForkProbe {
    layer: Vec<CellId>,
    next_layer: Vec<CellId>,
    marked: Vec<CellId>,
}

impl ForkProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the two exits of `candidate` can still meet.
    ///
    /// Cells reached by the search are marked occupied while it runs so that
    /// no cell is expanded twice; all marks are cleared before returning, so
    /// the state is unchanged afterwards.
    pub fn check(
        &mut self,
        state: &mut SearchState,
        candidate: CellId,
        exits: &[CellId],
        depth: usize,
    ) -> Result<(), PruneReason> {
        let (start, target) = match *exits {
            [start, target] => (start, target),
            _ => return Ok(()),
        };

        let found = self.search(state, candidate, start, target, depth);
        for cell in self.marked.drain(..) {
            state.clear_probe(cell);
        }

        if found {
            Ok(())
        } else {
            Err(PruneReason::DeadEndCreated { cell: candidate })
        }
    }

    fn search(
        &mut self,
        state: &mut SearchState,
        candidate: CellId,
        start: CellId,
        target: CellId,
        depth: usize,
    ) -> bool {
        let grid = state.grid();
        self.marked.clear();
        self.layer.clear();

        if state.mark_probe(candidate) {
            self.marked.push(candidate);
        }
        self.layer.push(start);

        for _ in 0..depth {
            if self.layer.is_empty() {
                break;
            }
            self.next_layer.clear();
            for &cell in &self.layer {
                if cell == target {
                    return true;
                }
                if !state.mark_probe(cell) {
                    continue;
                }
                self.marked.push(cell);
                for &next in grid.neighbors(cell).iter() {
                    if !state.is_occupied(next) {
                        self.next_layer.push(next);
                    }
                }
            }
            mem::swap(&mut self.layer, &mut self.next_layer);
        }
        false
    }
}
