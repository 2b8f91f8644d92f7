//! Contact-neighbourhood automaton.
//!
//! Knitting a chart row by row decides, for every potential yarn rest
//! point ("contact neighbourhood", CN), whether a loop actually rests
//! there and how far it was displaced. The [`ContactAutomaton`] replays
//! the carriage over a [`StitchGrid`](skein_chart::StitchGrid) in
//! boustrophedon order and fills a [`ContactGrid`] of `(2M) x (N + 1)`
//! cells. Processing order is significant: each op reads state written
//! by the ops before it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod automaton;
pub mod grid;
mod rules;
pub mod search;

pub use automaton::{ContactAutomaton, ContactAutomatonBuilder, ContactRun};
pub use grid::{CnStitch, ContactCell, ContactGrid};
pub use search::SearchOutcome;
