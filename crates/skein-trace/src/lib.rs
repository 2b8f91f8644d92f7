//! Yarn-path reconstruction.
//!
//! The [`YarnPathTracer`] walks a filled
//! [`ContactGrid`](skein_automaton::ContactGrid) the way the yarn travels:
//! two legs at the bottom of each stitch, two head points one row up, row
//! after row in alternating directions. Loops displaced by tucks and
//! misses are drawn where they finally rest, carriage turnarounds are
//! bridged, and every point is tagged so consecutive points can be
//! classified into [`YarnLink`]s.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod link;
pub mod location;
pub mod path;
pub mod tag;
pub mod tracer;

pub use cursor::{Cursor, Phase};
pub use link::{derive_links, LinkLayer, YarnLink};
pub use location::{final_location, Resting};
pub use path::{YarnPath, YarnPathPoint};
pub use tag::{CnTag, Layer, Order, Side};
pub use tracer::{YarnPathTracer, YarnPathTracerBuilder};
