//! Pure runner kinematics — steering axes, vertical integration,
//! corridor clamping, air-dash decay, crouch-pose easing.
//!
//! All functions take plain values and return plain values; the engine
//! decides what to do with a [`VerticalStep::Landed`] (snap, zero
//! velocity, clear the dash timer).

use crate::constants::{corridor, player};

/// Signed steering axis from a held positive/negative key pair.
/// Both held (or neither) cancels to 0.
pub fn steer_axis(positive: bool, negative: bool) -> f32 {
    (positive as i32 - negative as i32) as f32
}

/// Clamp a lateral/depth position into the visible corridor.
pub fn clamp_to_corridor(x: f32, z: f32) -> (f32, f32) {
    (
        x.clamp(corridor::MIN_X, corridor::MAX_X),
        z.clamp(corridor::MIN_Z, corridor::MAX_Z),
    )
}

/// Outcome of one vertical integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalStep {
    /// Still above the ground after integrating.
    Airborne { height: f32, velocity: f32 },
    /// Reached (or stayed on) the ground this step.
    Landed,
}

/// Integrate the vertical axis for one step.
///
/// Gravity acts only while airborne; a grounded body with zero velocity
/// stays exactly at height 0 and reports [`VerticalStep::Landed`] every
/// step, which is what keeps the live-score readout current.
pub fn vertical_step(height: f32, velocity: f32, grounded: bool, gravity: f32, delta: f32) -> VerticalStep {
    let velocity = if grounded {
        velocity
    } else {
        velocity - gravity * delta
    };
    let height = height + velocity * delta;
    if height <= 0.0 {
        VerticalStep::Landed
    } else {
        VerticalStep::Airborne { height, velocity }
    }
}

/// Decay an air-dash timer by one step.
///
/// Returns the remaining time and the forward pull to apply this step.
/// The full pull applies on the final partial step; landing clears any
/// residual negative timer.
pub fn dash_step(timer: f32, dash_speed: f32, delta: f32) -> (f32, f32) {
    if timer > 0.0 {
        (timer - delta, dash_speed * delta)
    } else {
        (timer, 0.0)
    }
}

/// Target height scale for the crouch pose.
pub fn crouch_target(crouching: bool) -> f32 {
    if crouching {
        player::CROUCH_SCALE
    } else {
        player::STAND_SCALE
    }
}

/// Ease the crouch scale toward its target.
///
/// The blend fraction is calibrated as 0.22 per 60 Hz tick and scaled
/// exponentially by `delta`, so the ease speed does not depend on frame
/// rate. At `delta` = 1/60 s this is exactly a 0.22 step.
pub fn ease_crouch_scale(current: f32, target: f32, delta: f32) -> f32 {
    let kept = (1.0 - player::CROUCH_EASE).powf(delta * player::EASE_REFERENCE_HZ);
    target + (current - target) * kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::player::GRAVITY;

    const DT: f32 = 1.0 / 60.0;

    // --- Steering ---

    #[test]
    fn steer_axis_signs() {
        assert_eq!(steer_axis(true, false), 1.0);
        assert_eq!(steer_axis(false, true), -1.0);
        assert_eq!(steer_axis(true, true), 0.0);
        assert_eq!(steer_axis(false, false), 0.0);
    }

    #[test]
    fn corridor_clamps_both_axes() {
        assert_eq!(clamp_to_corridor(100.0, 100.0), (7.2, 4.0));
        assert_eq!(clamp_to_corridor(-100.0, -100.0), (-7.2, -8.0));
        assert_eq!(clamp_to_corridor(1.0, -2.0), (1.0, -2.0));
    }

    // --- Vertical integration ---

    #[test]
    fn grounded_body_stays_landed() {
        assert_eq!(vertical_step(0.0, 0.0, true, GRAVITY, DT), VerticalStep::Landed);
    }

    #[test]
    fn jump_arc_rises_then_lands() {
        let mut height = 0.0;
        let mut velocity = 14.0;
        let mut peak = 0.0_f32;
        let mut steps = 0;
        loop {
            match vertical_step(height, velocity, false, GRAVITY, DT) {
                VerticalStep::Airborne { height: h, velocity: v } => {
                    assert!(h > 0.0, "airborne height must stay positive");
                    height = h;
                    velocity = v;
                    peak = peak.max(h);
                }
                VerticalStep::Landed => break,
            }
            steps += 1;
            assert!(steps < 200, "jump arc never landed");
        }
        // v^2 / 2g minus one discrete step of error
        assert!((peak - 14.0 * 14.0 / (2.0 * GRAVITY)).abs() < 0.3, "peak={peak}");
    }

    #[test]
    fn descent_lands_exactly_once() {
        // Falling from just above the ground overshoots and lands.
        let step = vertical_step(0.02, -2.0, false, GRAVITY, DT);
        assert_eq!(step, VerticalStep::Landed);
    }

    // --- Air dash ---

    #[test]
    fn dash_pulls_while_timer_runs() {
        let (remaining, pull) = dash_step(0.22, 30.0, DT);
        assert!((remaining - (0.22 - DT)).abs() < 1e-6);
        assert!((pull - 30.0 * DT).abs() < 1e-6);
    }

    #[test]
    fn expired_dash_has_no_pull() {
        assert_eq!(dash_step(0.0, 30.0, DT), (0.0, 0.0));
        assert_eq!(dash_step(-0.01, 30.0, DT), (-0.01, 0.0));
    }

    #[test]
    fn dash_total_pull_matches_duration() {
        let mut timer = 0.22;
        let mut total = 0.0;
        while timer > 0.0 {
            let (t, pull) = dash_step(timer, 30.0, DT);
            timer = t;
            total += pull;
        }
        // 0.22s at 30 u/s, quantized up to whole steps
        assert!(total >= 0.22 * 30.0, "total={total}");
        assert!(total <= (0.22 + DT) * 30.0, "total={total}");
    }

    // --- Crouch ease ---

    #[test]
    fn crouch_targets() {
        assert_eq!(crouch_target(true), 0.57);
        assert_eq!(crouch_target(false), 1.0);
    }

    #[test]
    fn ease_matches_reference_step_at_60hz() {
        let next = ease_crouch_scale(1.0, 0.57, DT);
        let reference = 1.0 + (0.57 - 1.0) * 0.22;
        assert!((next - reference).abs() < 1e-4, "next={next}");
    }

    #[test]
    fn ease_converges_monotonically() {
        let mut scale = 1.0;
        for _ in 0..120 {
            let next = ease_crouch_scale(scale, 0.57, DT);
            assert!(next < scale, "ease must move toward the target");
            assert!(next > 0.57, "ease must not overshoot");
            scale = next;
        }
        assert!((scale - 0.57).abs() < 0.01, "scale={scale}");
    }

    #[test]
    fn ease_is_frame_rate_independent() {
        // One 2*dt step lands where two dt steps do.
        let twice = ease_crouch_scale(ease_crouch_scale(1.0, 0.57, DT), 0.57, DT);
        let once = ease_crouch_scale(1.0, 0.57, 2.0 * DT);
        assert!((twice - once).abs() < 1e-4, "twice={twice} once={once}");
    }
}
