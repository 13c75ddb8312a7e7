// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    process::exit(lattice_search::cli::run_cli(&args));
}
