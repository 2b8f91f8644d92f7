//! Hashing of simulation output for determinism checks.
//!
//! Uses FNV-1a for fast, deterministic hashing. These hashes are not
//! cryptographically secure; they exist to compare two runs cheaply.

use skein_automaton::ContactGrid;
use skein_core::{ActualizationValue as Av, StitchOp};
use skein_trace::{Layer, LinkLayer, Order, Side, YarnLink, YarnPathPoint};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Byte fed for "no stitch".
const NO_STITCH: u8 = 0xFF;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_i32(hash: u64, v: i32) -> u64 {
    fnv1a_u32(hash, v as u32)
}

fn av_byte(av: Av) -> u8 {
    match av {
        Av::Ecn => 0,
        Av::Pcn => 1,
        Av::Acn => 2,
        Av::Uacn => 3,
    }
}

fn stitch_byte(stitch: Option<StitchOp>) -> u8 {
    stitch.map_or(NO_STITCH, StitchOp::code)
}

fn tag_byte(point: &YarnPathPoint) -> u8 {
    let side = match point.tag.side {
        Side::First => 0,
        Side::Last => 1,
    };
    let layer = match point.tag.layer {
        Layer::Leg => 0,
        Layer::Head => 2,
    };
    let order = match point.tag.order {
        Order::A => 0,
        Order::B => 4,
    };
    side | layer | order
}

fn link_byte(link: &YarnLink) -> u8 {
    let layer = match link.layer {
        LinkLayer::Front => 0,
        LinkLayer::Back => 1,
        LinkLayer::Mid => 2,
    };
    layer | (u8::from(link.crossing) << 2)
}

/// Hash grid dimensions and cells, then path points, then links.
///
/// Section lengths are folded in at each boundary so that moving an
/// entry from one section to the next changes the hash.
pub(crate) fn fingerprint(grid: &ContactGrid, points: &[YarnPathPoint], links: &[YarnLink]) -> u64 {
    let mut hash = FNV_OFFSET;

    hash = fnv1a_u32(hash, grid.width());
    hash = fnv1a_u32(hash, grid.height());
    for cell in grid.cells() {
        hash = fnv1a_byte(hash, av_byte(cell.av));
        hash = fnv1a_i32(hash, cell.mv.dcol);
        hash = fnv1a_i32(hash, cell.mv.drow);
        hash = fnv1a_byte(hash, stitch_byte(cell.stitch));
    }

    hash = fnv1a_u32(hash, points.len() as u32);
    for point in points {
        hash = fnv1a_i32(hash, point.at.i);
        hash = fnv1a_i32(hash, point.at.j);
        hash = fnv1a_u32(hash, point.stitch_row);
        hash = fnv1a_byte(hash, tag_byte(point));
        hash = fnv1a_byte(hash, stitch_byte(point.stitch));
    }

    hash = fnv1a_u32(hash, links.len() as u32);
    for link in links {
        hash = fnv1a_byte(hash, link_byte(link));
    }

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_hashes_dimensions_only() {
        let a = fingerprint(&ContactGrid::for_chart(1, 1).unwrap(), &[], &[]);
        let b = fingerprint(&ContactGrid::for_chart(2, 1).unwrap(), &[], &[]);
        assert_ne!(a, FNV_OFFSET);
        assert_ne!(a, b);
    }

    #[test]
    fn fnv1a_known_vector() {
        // FNV-1a("a") from the reference test suite.
        assert_eq!(fnv1a_byte(FNV_OFFSET, b'a'), 0xaf63dc4c8601ec8c);
    }
}
