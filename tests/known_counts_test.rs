// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Regression tests against the known route counts.

mod common;

use common::{naive_corner_count, KNOWN_COUNTS};
use lattice_search::{count_lattice_paths, SearchError};

#[test]
fn test_known_counts_up_to_six() {
    for &(n, expected) in KNOWN_COUNTS.iter().filter(|(n, _)| *n <= 6) {
        let report = count_lattice_paths(n, false).unwrap();
        assert_eq!(report.n, n);
        assert_eq!(report.path_count, expected, "n = {n}");
    }
}

#[test]
#[ignore] // Slow: about 3e7 visits
fn test_known_count_seven() {
    let report = count_lattice_paths(7, false).unwrap();
    assert_eq!(report.path_count, 3438352);
}

#[test]
fn test_counts_divisible_by_symmetry() {
    for n in 3..=6 {
        let count = count_lattice_paths(n, false).unwrap().path_count;
        assert_eq!(count % 8, 0, "n = {n}");
    }
}

#[test]
fn test_counts_increase_with_size() {
    let counts: Vec<u64> = (3..=6)
        .map(|n| count_lattice_paths(n, false).unwrap().path_count)
        .collect();
    assert!(counts.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_matches_independent_count() {
    for n in 3..=5 {
        let raw = naive_corner_count(n, true);
        assert_eq!(count_lattice_paths(n, false).unwrap().path_count, raw * 8);
    }
}

#[test]
fn test_first_move_symmetry() {
    // Routes starting right mirror routes starting down.
    for n in 3..=5 {
        assert_eq!(
            naive_corner_count(n, false),
            2 * naive_corner_count(n, true)
        );
    }
}

#[test]
fn test_small_sizes_rejected() {
    for n in [0, 1, 2] {
        assert_eq!(
            count_lattice_paths(n, false),
            Err(SearchError::InvalidGridSize { n })
        );
    }
}
