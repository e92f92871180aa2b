//! Lane offsets and spawn/recycle depth placement for the obstacle pool.
//!
//! Random inputs (lane rolls, depth jitter) are sampled by the caller
//! and passed in as plain values, so placement stays deterministic and
//! directly assertable.

use crate::constants::{field, lanes};

/// X offset of a discrete lane. Valid indices are `0..lanes::COUNT`,
/// centered so the middle lane sits on x = 0.
pub fn lane_x(index: usize) -> f32 {
    (index as i32 - lanes::CENTER_INDEX) as f32 * lanes::SPACING
}

/// All lane offsets, ordered left to right.
pub fn lane_offsets() -> [f32; lanes::COUNT] {
    let mut offsets = [0.0; lanes::COUNT];
    for (i, slot) in offsets.iter_mut().enumerate() {
        *slot = lane_x(i);
    }
    offsets
}

/// Spawn depth for a pool slot at population or reset.
///
/// Slots are staggered one spacing apart with per-slot jitter so the
/// field never arrives in lockstep. `jitter` is sampled from
/// `[0, field::SPAWN_JITTER)` at startup and `[0, field::RESET_JITTER)`
/// on reset.
pub fn spawn_z(slot: usize, jitter: f32) -> f32 {
    field::SPAWN_BASE_Z - slot as f32 * field::SPAWN_SPACING - jitter
}

/// Whether an obstacle has scrolled past the runner and must recycle.
pub fn past_runner(z: f32) -> bool {
    z > field::RECYCLE_Z
}

/// Depth an obstacle recycles back to; `jitter` is sampled from
/// `[0, field::RECYCLE_JITTER)`.
pub fn recycle_z(jitter: f32) -> f32 {
    field::RESPAWN_Z - jitter
}
