//! Runner avatar components.

use serde::{Deserialize, Serialize};

/// Marker for the single runner entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Vertical and dash state for the runner.
///
/// Invariant: `grounded` is true exactly when the runner's height is 0
/// and `vertical_velocity` is 0; the kinematics system maintains this
/// every step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Upward velocity, units per second. Negative while falling.
    pub vertical_velocity: f32,
    /// Standing on the ground (height exactly 0).
    pub grounded: bool,
    /// The one air dash of the current airborne period is still unspent.
    pub can_air_dash: bool,
    /// Seconds of dash pull remaining; 0 when inactive.
    pub air_dash_timer: f32,
}

impl Default for PlayerBody {
    fn default() -> Self {
        Self {
            vertical_velocity: 0.0,
            grounded: true,
            can_air_dash: true,
            air_dash_timer: 0.0,
        }
    }
}

/// Smoothed crouch height scale. Visual pose only - the hit volume
/// never changes with it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CrouchPose {
    pub scale: f32,
}

impl Default for CrouchPose {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}
