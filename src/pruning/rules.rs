// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The six pruning rules and sets of them.
//!
//! Rules are listed in evaluation order: cheap and decisive checks first,
//! the full grid scan last.

use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// One pruning rule. Each is a necessary condition for the current route
/// prefix to be completable into a full route ending on a valid end cell.
#[derive(EnumCountMacro, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PruneRule {
    /// No unvisited valid end cell is left.
    NoValidEnd,
    /// The candidate has no unvisited neighbour.
    DeadEnd,
    /// An unvisited corner is cut off or forced to be the route end.
    InaccessibleCorner,
    /// A completed row or column separates unvisited cells.
    RouteBlocked,
    /// The two exits of a fork cannot reach each other.
    DeadEndCreated,
    /// Some unvisited cell has no unvisited neighbour.
    InaccessibleCell,
}

impl PruneRule {
    /// Stable kebab-case name, used as the diagnostics key.
    pub fn name(self) -> &'static str {
        match self {
            PruneRule::NoValidEnd => "no-valid-end",
            PruneRule::DeadEnd => "dead-end",
            PruneRule::InaccessibleCorner => "inaccessible-corner",
            PruneRule::RouteBlocked => "route-blocked",
            PruneRule::DeadEndCreated => "dead-end-created",
            PruneRule::InaccessibleCell => "inaccessible-cell",
        }
    }

    /// Human readable description for reports.
    pub fn description(self) -> &'static str {
        match self {
            PruneRule::NoValidEnd => "Valid end remaining",
            PruneRule::DeadEnd => "Dead end hit",
            PruneRule::InaccessibleCorner => "Inaccessible corner",
            PruneRule::RouteBlocked => "Route blocked",
            PruneRule::DeadEndCreated => "Dead end created",
            PruneRule::InaccessibleCell => "Inaccessible square",
        }
    }
}

impl fmt::Display for PruneRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of enabled rules, stored as a bitset with bit `rule as u8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleSet(u8);

impl RuleSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        PruneRule::iter().fold(Self::empty(), Self::with)
    }

    /// A copy of this set with `rule` added.
    pub fn with(self, rule: PruneRule) -> Self {
        Self(self.0 | 1 << rule as u8)
    }

    /// A copy of this set with `rule` removed.
    pub fn without(self, rule: PruneRule) -> Self {
        Self(self.0 & !(1 << rule as u8))
    }

    pub fn contains(self, rule: PruneRule) -> bool {
        (self.0 >> rule as u8) & 1 != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Enabled rules in evaluation order.
    pub fn iter(self) -> impl Iterator<Item = PruneRule> {
        PruneRule::iter().filter(move |&rule| self.contains(rule))
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<PruneRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = PruneRule>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}
