//! Axis-aligned proximity test between an obstacle and the runner.
//!
//! Collision is an open-box containment check of the separation vector
//! between the obstacle center and the runner's torso centroid; the
//! crouch pose never changes the volume.

use crate::constants::hitbox;

/// Half-extents of the volume within which an obstacle registers a hit.
#[derive(Debug, Clone, Copy)]
pub struct HitVolume {
    pub half_x: f32,
    pub half_y: f32,
    pub half_z: f32,
}

impl HitVolume {
    /// The reference runner proximity volume.
    pub const RUNNER: Self = Self {
        half_x: hitbox::HALF_X,
        half_y: hitbox::HALF_Y,
        half_z: hitbox::HALF_Z,
    };

    /// Strict containment of a separation vector (boundary misses).
    pub fn contains(&self, dx: f32, dy: f32, dz: f32) -> bool {
        dx.abs() < self.half_x && dy.abs() < self.half_y && dz.abs() < self.half_z
    }
}

/// Height of the runner's torso centroid above their ground position.
pub fn torso_center(runner_y: f32) -> f32 {
    runner_y + hitbox::TORSO_OFFSET
}

/// Whether an obstacle centered at `(ox, oy, oz)` hits a runner whose
/// feet are at `(px, py, pz)`.
pub fn obstacle_hits_runner(ox: f32, oy: f32, oz: f32, px: f32, py: f32, pz: f32) -> bool {
    HitVolume::RUNNER.contains(ox - px, oy - torso_center(py), oz - pz)
}
