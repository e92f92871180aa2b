//! Runtime tuning for the runner simulation.
//!
//! Hosts construct the engine from a [`Tuning`]; the default is the
//! reference configuration from [`crate::constants`]. The struct
//! round-trips through serde so harnesses can load a checked-in
//! manifest, and [`validate_tuning`] sweeps a loaded value for
//! nonsense before it reaches the engine.

use serde::{Deserialize, Serialize};

use crate::constants::{field, player, MAX_FRAME_STEP};

/// Adjustable gameplay rates. Geometry (corridor, lanes, hit volume,
/// spawn layout) is fixed in [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// World scroll speed toward the runner, units per second.
    pub run_speed: f32,
    /// Lateral/depth steering speed, units per second.
    pub side_speed: f32,
    /// Downward acceleration while airborne, units per second squared.
    pub gravity: f32,
    /// Upward velocity applied on jump, units per second.
    pub jump_speed: f32,
    /// Air dash duration, seconds.
    pub dash_duration: f32,
    /// Extra forward speed while the dash timer runs, units per second.
    pub dash_speed: f32,
    /// Score gained per unit of forward scroll.
    pub score_rate: f32,
    /// Number of obstacles in the recycled pool.
    pub pool_size: usize,
    /// Longest frame step integrated in one update, seconds.
    pub max_frame_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            run_speed: field::RUN_SPEED,
            side_speed: player::SIDE_SPEED,
            gravity: player::GRAVITY,
            jump_speed: player::JUMP_SPEED,
            dash_duration: player::DASH_DURATION,
            dash_speed: player::DASH_SPEED,
            score_rate: field::SCORE_RATE,
            pool_size: field::POOL_SIZE,
            max_frame_step: MAX_FRAME_STEP,
        }
    }
}

/// A rejected tuning value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TuningError {
    /// A rate that must be strictly positive was zero or negative.
    NonPositiveRate(&'static str, f32),
    /// The obstacle pool was empty.
    EmptyPool,
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveRate(name, value) => {
                write!(f, "{name} must be positive, got {value}")
            }
            Self::EmptyPool => write!(f, "obstacle pool must hold at least one obstacle"),
        }
    }
}

/// Sweep a tuning value for rejected fields. Empty result = usable.
pub fn validate_tuning(tuning: &Tuning) -> Vec<TuningError> {
    let mut errors = Vec::new();

    let rates = [
        ("run_speed", tuning.run_speed),
        ("side_speed", tuning.side_speed),
        ("gravity", tuning.gravity),
        ("jump_speed", tuning.jump_speed),
        ("dash_duration", tuning.dash_duration),
        ("dash_speed", tuning.dash_speed),
        ("score_rate", tuning.score_rate),
        ("max_frame_step", tuning.max_frame_step),
    ];
    for (name, value) in rates {
        if value <= 0.0 {
            errors.push(TuningError::NonPositiveRate(name, value));
        }
    }

    if tuning.pool_size == 0 {
        errors.push(TuningError::EmptyPool);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reference_configuration() {
        let t = Tuning::default();
        assert_eq!(t.run_speed, 23.0);
        assert_eq!(t.jump_speed, 14.0);
        assert_eq!(t.gravity, 34.0);
        assert_eq!(t.pool_size, 22);
        assert!(validate_tuning(&t).is_empty());
    }

    #[test]
    fn rejects_nonpositive_rates() {
        let mut t = Tuning::default();
        t.run_speed = 0.0;
        t.gravity = -1.0;
        let errors = validate_tuning(&t);
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .any(|e| matches!(e, TuningError::NonPositiveRate("run_speed", _))));
    }

    #[test]
    fn rejects_empty_pool() {
        let mut t = Tuning::default();
        t.pool_size = 0;
        assert_eq!(validate_tuning(&t), vec![TuningError::EmptyPool]);
    }

    #[test]
    fn partial_manifest_fills_defaults() {
        // serde(default) lets a manifest override a single field.
        let t: Tuning = serde_json::from_str(r#"{ "run_speed": 30.0 }"#).unwrap();
        assert_eq!(t.run_speed, 30.0);
        assert_eq!(t.jump_speed, 14.0);
    }
}
