//! World geometry and reference rates.
//!
//! Plain `f32`/`usize` constants with no framework dependency. Rates
//! that a host may want to adjust are mirrored in [`crate::tuning`];
//! geometry (corridor, lanes, hit volume, spawn layout) is fixed.

/// Reference movement rates for the runner.
pub mod player {
    /// Lateral/depth steering speed, units per second.
    pub const SIDE_SPEED: f32 = 10.0;
    /// Upward velocity applied on jump, units per second.
    pub const JUMP_SPEED: f32 = 14.0;
    /// Downward acceleration while airborne, units per second squared.
    pub const GRAVITY: f32 = 34.0;
    /// Air dash duration, seconds.
    pub const DASH_DURATION: f32 = 0.22;
    /// Extra forward speed while the dash timer runs, units per second.
    pub const DASH_SPEED: f32 = 30.0;
    /// Height scale the pose eases toward while crouching.
    pub const CROUCH_SCALE: f32 = 0.57;
    /// Height scale the pose eases toward while standing.
    pub const STAND_SCALE: f32 = 1.0;
    /// Blend fraction per reference-rate tick of the crouch ease.
    pub const CROUCH_EASE: f32 = 0.22;
    /// Tick rate the crouch ease fraction is calibrated against.
    pub const EASE_REFERENCE_HZ: f32 = 60.0;
}

/// The playable corridor the runner is clamped into.
pub mod corridor {
    pub const MIN_X: f32 = -7.2;
    pub const MAX_X: f32 = 7.2;
    pub const MIN_Z: f32 = -8.0;
    pub const MAX_Z: f32 = 4.0;
}

/// Discrete lane layout for obstacle placement.
pub mod lanes {
    /// Number of lanes obstacles can occupy.
    pub const COUNT: usize = 5;
    /// Index of the lane centered on x = 0.
    pub const CENTER_INDEX: i32 = 2;
    /// Distance between adjacent lane centers.
    pub const SPACING: f32 = 2.0;
}

/// Obstacle field scrolling, spawning and recycling.
pub mod field {
    /// World scroll speed toward the runner, units per second.
    pub const RUN_SPEED: f32 = 23.0;
    /// Score gained per unit of forward scroll.
    pub const SCORE_RATE: f32 = 0.55;
    /// Number of obstacles in the recycled pool.
    pub const POOL_SIZE: usize = 22;
    /// Resting height of every obstacle's center.
    pub const REST_Y: f32 = 1.1;
    /// Depth behind the runner past which an obstacle recycles.
    pub const RECYCLE_Z: f32 = 16.0;
    /// Base depth an obstacle recycles back to.
    pub const RESPAWN_Z: f32 = -360.0;
    /// Random extra depth applied on recycle, sampled from [0, this).
    pub const RECYCLE_JITTER: f32 = 60.0;
    /// Depth of the nearest slot at initial population.
    pub const SPAWN_BASE_Z: f32 = -30.0;
    /// Depth between consecutive pool slots at population.
    pub const SPAWN_SPACING: f32 = 18.0;
    /// Random extra depth per slot at initial population, [0, this).
    pub const SPAWN_JITTER: f32 = 10.0;
    /// Random extra depth per slot on reset, [0, this).
    pub const RESET_JITTER: f32 = 6.0;
}

/// Proximity volume within which an obstacle hits the runner's torso.
pub mod hitbox {
    pub const HALF_X: f32 = 1.55;
    pub const HALF_Y: f32 = 1.6;
    pub const HALF_Z: f32 = 1.5;
    /// Height of the torso centroid above the runner's ground position.
    pub const TORSO_OFFSET: f32 = 1.0;
}

/// Longest frame step the simulation will integrate in one update.
pub const MAX_FRAME_STEP: f32 = 0.032;
