// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end for the `lattice` binary.

use crate::engine::{ExhaustiveRouteFinder, RouteFinder};
use crate::error::SearchError;
use crate::geometry::Grid;
use crate::pruning::PruneRule;
use crate::{count_lattice_paths_with, ScanSchedule, SearchConfig, SearchReport};
use getopts::{Matches, Options};
use std::io::{self, Write};
use std::time::Instant;
use thiserror::Error;
use tracing::Level;

/// Rules in the order the verbose report lists them. Fork resolution is
/// reported before row/column blocks, although it is evaluated after them.
const REPORT_ORDER: [PruneRule; 6] = [
    PruneRule::NoValidEnd,
    PruneRule::DeadEnd,
    PruneRule::InaccessibleCorner,
    PruneRule::DeadEndCreated,
    PruneRule::RouteBlocked,
    PruneRule::InaccessibleCell,
];

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Getopts(#[from] getopts::Fail),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("missing grid size N")]
    MissingGridSize,
    #[error("unrecognized argument for option '{0}'")]
    UnrecognizedArgument(&'static str),
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub n: usize,
    pub config: SearchConfig,
    pub exhaustive: bool,
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Count(CliOptions),
    Help,
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optflag("v", "verbose", "report valid ends and pruning diagnostics");
    opts.optopt("", "depth", "fork lookahead depth (at least 3)", "D");
    opts.optopt(
        "",
        "scan",
        "when to scan for inaccessible cells: always, never or tapered",
        "WHEN",
    );
    opts.optflag("", "exhaustive", "run the unpruned reference search");
    opts.optflag("h", "help", "print this help");
    opts
}

fn parse_integer_argument(
    matches: &Matches,
    name: &'static str,
    default: usize,
) -> Result<usize, CliError> {
    match matches.opt_str(name) {
        Some(s) => s
            .parse::<usize>()
            .map_err(|_| CliError::UnrecognizedArgument(name)),
        None => Ok(default),
    }
}

/// Parse the arguments following the program name.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let matches = options().parse(args)?;
    if matches.opt_present("h") {
        return Ok(Command::Help);
    }

    let n = matches
        .free
        .first()
        .ok_or(CliError::MissingGridSize)?
        .parse::<usize>()
        .map_err(|_| CliError::UnrecognizedArgument("N"))?;
    if matches.free.len() > 1 {
        return Err(CliError::UnrecognizedArgument("N"));
    }

    let defaults = SearchConfig::default();
    let depth = parse_integer_argument(&matches, "depth", defaults.fork_lookahead_depth)?;
    let scan_schedule = match matches.opt_str("scan") {
        Some(s) => s
            .parse::<ScanSchedule>()
            .map_err(|_| CliError::UnrecognizedArgument("scan"))?,
        None => defaults.scan_schedule,
    };

    let config = defaults
        .with_verbose(matches.opt_present("v"))
        .with_fork_lookahead_depth(depth)
        .with_scan_schedule(scan_schedule);
    Ok(Command::Count(CliOptions {
        n,
        config,
        exhaustive: matches.opt_present("exhaustive"),
    }))
}

/// Usage text for `--help`.
pub fn usage(program: &str) -> String {
    let brief = format!("Usage: {program} [options] N");
    options().usage(&brief)
}

/// Count routes and write the result lines to `out`.
pub fn execute<W: Write>(options: &CliOptions, out: &mut W) -> Result<SearchReport, CliError> {
    let n = options.n;
    let grid = Grid::new(n)?;
    options.config.validate()?;
    writeln!(out, "Finding number of valid routes for an {n} by {n} grid")?;
    let start = Instant::now();

    if options.config.verbose {
        writeln!(
            out,
            "There are {} squares that it is possible for a valid route to end on",
            grid.valid_end_cells().count()
        )?;
    }

    let report = if options.exhaustive {
        let mut finder = ExhaustiveRouteFinder::with_grid(grid);
        SearchReport {
            n,
            path_count: finder.run()?,
            diagnostics: None,
        }
    } else {
        count_lattice_paths_with(n, &options.config)?
    };

    if let Some(diagnostics) = &report.diagnostics {
        writeln!(out)?;
        writeln!(
            out,
            "Optimisation methods successfully aborted the following number of routes"
        )?;
        for (number, rule) in (1..).zip(REPORT_ORDER) {
            writeln!(
                out,
                "({}) {}: {}",
                number,
                rule.description(),
                diagnostics.pruned(rule)
            )?;
        }
    }

    writeln!(out, "{} routes possible", report.path_count)?;
    writeln!(
        out,
        "Completed in {:.2} seconds",
        start.elapsed().as_secs_f64()
    )?;
    Ok(report)
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();
}

/// Entry point of the binary; returns the process exit code.
pub fn run_cli(args: &[String]) -> i32 {
    let program = args.first().map(String::as_str).unwrap_or("lattice");
    let rest = args.get(1..).unwrap_or_default();

    let result = parse_args(rest).and_then(|command| match command {
        Command::Help => {
            print!("{}", usage(program));
            Ok(())
        }
        Command::Count(options) => {
            init_logging(options.config.verbose);
            let stdout = io::stdout();
            execute(&options, &mut stdout.lock()).map(|_| ())
        }
    });

    match result {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(err, CliError::Getopts(_) | CliError::MissingGridSize) {
                eprint!("{}", usage(program));
            }
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn count_options(list: &[&str]) -> CliOptions {
        match parse_args(&args(list)).unwrap() {
            Command::Count(options) => options,
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn test_parse_defaults() {
        let options = count_options(&["5"]);
        assert_eq!(options.n, 5);
        assert_eq!(options.config, SearchConfig::default());
        assert!(!options.exhaustive);
    }

    #[test]
    fn test_parse_flags() {
        let options = count_options(&[
            "-v",
            "--depth",
            "6",
            "--scan",
            "always",
            "--exhaustive",
            "4",
        ]);
        assert_eq!(options.n, 4);
        assert!(options.config.verbose);
        assert_eq!(options.config.fork_lookahead_depth, 6);
        assert_eq!(options.config.scan_schedule, ScanSchedule::Always);
        assert!(options.exhaustive);
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), Command::Help);
        assert!(usage("lattice").contains("Usage: lattice [options] N"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_args(&args(&[])),
            Err(CliError::MissingGridSize)
        ));
        assert!(matches!(
            parse_args(&args(&["five"])),
            Err(CliError::UnrecognizedArgument("N"))
        ));
        assert!(matches!(
            parse_args(&args(&["--depth", "x", "5"])),
            Err(CliError::UnrecognizedArgument("depth"))
        ));
        assert!(matches!(
            parse_args(&args(&["--scan", "often", "5"])),
            Err(CliError::UnrecognizedArgument("scan"))
        ));
        assert!(matches!(
            parse_args(&args(&["--frobnicate", "5"])),
            Err(CliError::Getopts(_))
        ));
    }

    #[test]
    fn test_execute_output() {
        let mut out = Vec::new();
        let report = execute(&count_options(&["4"]), &mut out).unwrap();
        assert_eq!(report.path_count, 64);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Finding number of valid routes for an 4 by 4 grid"
        );
        assert_eq!(lines[1], "64 routes possible");
        assert!(lines[2].starts_with("Completed in "));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_execute_verbose_output() {
        let mut out = Vec::new();
        execute(&count_options(&["-v", "4"]), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[..11],
            [
                "Finding number of valid routes for an 4 by 4 grid",
                "There are 2 squares that it is possible for a valid route to end on",
                "",
                "Optimisation methods successfully aborted the following number of routes",
                "(1) Valid end remaining: 38",
                "(2) Dead end hit: 1",
                "(3) Inaccessible corner: 10",
                "(4) Dead end created: 20",
                "(5) Route blocked: 5",
                "(6) Inaccessible square: 0",
                "64 routes possible",
            ]
        );
        assert!(lines[11].starts_with("Completed in "));
    }

    #[test]
    fn test_execute_rejects_bad_input() {
        let mut out = Vec::new();
        assert!(matches!(
            execute(&count_options(&["2"]), &mut out),
            Err(CliError::Search(SearchError::InvalidGridSize { n: 2 }))
        ));
        assert!(matches!(
            execute(&count_options(&["--depth", "2", "4"]), &mut out),
            Err(CliError::Search(SearchError::InvalidLookaheadDepth {
                depth: 2
            }))
        ));
    }

    #[test]
    fn test_exhaustive_matches() {
        let mut out = Vec::new();
        let report = execute(&count_options(&["--exhaustive", "5"]), &mut out).unwrap();
        assert_eq!(report.path_count, 1456);
        assert!(report.diagnostics.is_none());
    }
}
