//! Non-fatal conditions raised while simulating.
//!
//! Every loop over the contact grid that could run away on malformed
//! input is bounded. When a bound is hit the computation carries on with
//! the state it last observed and records a [`Diagnostic`]. Each one is
//! logged through `log::warn!` the moment it is raised.

use std::fmt;

use crate::coord::CnCoord;

/// Which bounded column search produced a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchKind {
    /// Looking below an unanchored loop for a potential cell to anchor.
    Anchor,
    /// Looking below a missed needle for the loop it keeps lifted.
    Lift,
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anchor => f.write_str("anchor"),
            Self::Lift => f.write_str("lift"),
        }
    }
}

/// One non-fatal condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A column search hit its step limit.
    SearchExhausted {
        /// What was searched for.
        kind: SearchKind,
        /// Cell the search started from.
        from: CnCoord,
        /// Steps taken.
        steps: usize,
    },
    /// A column search reached row 0 without a hit.
    SearchBottomedOut {
        /// What was searched for.
        kind: SearchKind,
        /// Cell the search started from.
        from: CnCoord,
    },
    /// Resolving a loop's final resting place hit its step limit.
    ChaseExhausted {
        /// Nominal cell of the loop.
        from: CnCoord,
        /// Steps taken.
        steps: usize,
    },
    /// The path walk used up its step budget.
    TraversalExhausted {
        /// Whether a first point had been found.
        started: bool,
        /// Steps taken.
        steps: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SearchExhausted { kind, from, steps } => {
                write!(f, "{kind} search from {from} gave up after {steps} steps")
            }
            Self::SearchBottomedOut { kind, from } => {
                write!(f, "{kind} search from {from} reached row 0 without a match")
            }
            Self::ChaseExhausted { from, steps } => {
                write!(
                    f,
                    "final location of {from} unresolved after {steps} steps"
                )
            }
            Self::TraversalExhausted { started, steps } => {
                let stage = if *started { "path walk" } else { "path start-up" };
                write!(f, "{stage} stopped after {steps} steps")
            }
        }
    }
}

/// Ordered collection of diagnostics raised by one computation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log `diagnostic` at warn level and record it.
    pub fn raise(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    /// Append already-raised diagnostics without logging them again.
    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    /// Number of diagnostics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing was raised.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Diagnostics in the order they were raised.
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Iterate in the order they were raised.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Consume into the underlying vector.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
