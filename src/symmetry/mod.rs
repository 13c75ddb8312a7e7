// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry reduction.
//!
//! The square has eight symmetries (the dihedral group D4). Four of them map
//! the origin corner to each of the four corners, and of the two that fix
//! the origin, the main-diagonal reflection swaps its two neighbours. The
//! engine therefore starts every route at the origin, forbids the first
//! step to the right, and multiplies what it finds by [`SYMMETRY_FACTOR`].

use crate::error::SearchError;

/// Size of D4: four corners times two first moves.
pub const SYMMETRY_FACTOR: u64 = 8;

/// Scale a raw count (origin start, first move down) to the full count.
pub fn expand(raw: u64) -> Result<u64, SearchError> {
    raw.checked_mul(SYMMETRY_FACTOR)
        .ok_or(SearchError::CountOverflow { raw })
}
