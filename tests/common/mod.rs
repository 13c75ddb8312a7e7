// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.
//!
//! The walker here is independent of the crate: its own adjacency, no
//! pruning, no symmetry, and a route end is accepted on any middle cell
//! (the colouring argument is not assumed).

#![allow(dead_code)]

/// Known totals, all symmetries included.
pub const KNOWN_COUNTS: [(usize, u64); 5] = [(3, 8), (4, 64), (5, 1456), (6, 44880), (7, 3438352)];

/// What one naive walk saw.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkTally {
    /// Route prefixes entered, one per call of the walker.
    pub calls: u64,
    /// Prefixes covering every cell.
    pub complete: u64,
    /// Complete prefixes ending on a middle cell.
    pub routes: u64,
}

fn is_middle(n: usize, cell: usize) -> bool {
    let (row, column) = (cell / n, cell % n);
    row > 0 && row < n - 1 && column > 0 && column < n - 1
}

fn walk(
    n: usize,
    visited: &mut [bool],
    cell: usize,
    depth: usize,
    skip_first_right: bool,
    tally: &mut WalkTally,
) {
    tally.calls += 1;
    if depth == n * n {
        tally.complete += 1;
        tally.routes += u64::from(is_middle(n, cell));
        return;
    }
    let (row, column) = (cell / n, cell % n);
    let mut moves = Vec::with_capacity(4);
    if row > 0 {
        moves.push(cell - n);
    }
    if row + 1 < n {
        moves.push(cell + n);
    }
    if column > 0 {
        moves.push(cell - 1);
    }
    if column + 1 < n && !(skip_first_right && cell == 0) {
        moves.push(cell + 1);
    }

    for next in moves {
        if !visited[next] {
            visited[next] = true;
            walk(n, visited, next, depth + 1, skip_first_right, tally);
            visited[next] = false;
        }
    }
}

/// Walk every route prefix from the top-left corner.
///
/// With `skip_first_right`, prefixes whose first step is to the right are
/// not entered.
pub fn naive_corner_walk(n: usize, skip_first_right: bool) -> WalkTally {
    let mut visited = vec![false; n * n];
    visited[0] = true;
    let mut tally = WalkTally::default();
    walk(n, &mut visited, 0, 1, skip_first_right, &mut tally);
    tally
}

/// Routes from the top-left corner to a middle cell.
pub fn naive_corner_count(n: usize, skip_first_right: bool) -> u64 {
    naive_corner_walk(n, skip_first_right).routes
}
