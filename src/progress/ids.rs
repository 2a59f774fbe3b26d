//! Progress domain: stable identity for tracked level instances.

use bevy::prelude::*;

/// Grid resolution for position-derived identities. A tenth of a world
/// unit; instances closer than this collapse to the same id.
const GRID_SCALE: f32 = 10.0;

const LANE_BITS: u64 = 21;
const LANE_MASK: u64 = (1 << LANE_BITS) - 1;

/// Stable identifier for a placed collectible (or door) instance.
///
/// Authored content may assign one explicitly; otherwise the id is derived
/// once from the spawn world position, before any interaction, and never
/// changes. Identity is an integer key so membership tests are plain
/// equality rather than float comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectibleId(pub u64);

impl CollectibleId {
    /// Derive an identity from a spawn position. Pure and deterministic.
    /// Two instances collide only when they share a grid cell; co-located
    /// duplicates are a content error (see content validation).
    pub fn from_position(position: Vec3) -> Self {
        let x = quantize(position.x);
        let y = quantize(position.y);
        let z = quantize(position.z);
        // 21 bits per lane covers roughly +/-100k world units at the
        // tenth-unit grid.
        let packed = ((x & LANE_MASK) << (2 * LANE_BITS)) | ((y & LANE_MASK) << LANE_BITS)
            | (z & LANE_MASK);
        Self(packed)
    }
}

fn quantize(value: f32) -> u64 {
    (value * GRID_SCALE).round() as i64 as u64
}
