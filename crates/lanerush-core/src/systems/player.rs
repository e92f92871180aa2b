//! Runner kinematics system - steering, gravity, dash pull, crouch pose.

use hecs::World;
use lanerush_logic::kinematics::{self, VerticalStep};
use lanerush_logic::tuning::Tuning;

use crate::components::{CrouchPose, PlayerBody, Position};
use crate::input::Steering;

/// What the kinematics step observed about the runner.
#[derive(Debug, Clone, Copy, Default)]
pub struct KinematicsOutcome {
    /// The runner is in ground contact after this step. True on the
    /// landing step and on every grounded step after it.
    pub ground_contact: bool,
}

/// Integrate the runner for one step.
///
/// Order matters and matches the field scroll: steer and clamp into the
/// corridor, integrate the vertical axis, apply any dash pull (which may
/// leave the corridor until the next step's clamp), then ease the
/// crouch pose.
pub fn player_kinematics_system(
    world: &mut World,
    steering: Steering,
    crouching: bool,
    tuning: &Tuning,
    delta: f32,
) -> KinematicsOutcome {
    let mut outcome = KinematicsOutcome::default();

    for (_, (pos, body, pose)) in
        world.query_mut::<(&mut Position, &mut PlayerBody, &mut CrouchPose)>()
    {
        pos.world.x += steering.horizontal * tuning.side_speed * delta;
        pos.world.z += steering.depth * tuning.side_speed * delta;
        let (x, z) = kinematics::clamp_to_corridor(pos.world.x, pos.world.z);
        pos.world.x = x;
        pos.world.z = z;

        match kinematics::vertical_step(
            pos.world.y,
            body.vertical_velocity,
            body.grounded,
            tuning.gravity,
            delta,
        ) {
            VerticalStep::Airborne { height, velocity } => {
                pos.world.y = height;
                body.vertical_velocity = velocity;
            }
            VerticalStep::Landed => {
                pos.world.y = 0.0;
                body.vertical_velocity = 0.0;
                body.grounded = true;
                body.air_dash_timer = 0.0;
                outcome.ground_contact = true;
            }
        }

        let (timer, pull) = kinematics::dash_step(body.air_dash_timer, tuning.dash_speed, delta);
        body.air_dash_timer = timer;
        pos.world.z -= pull;

        let target = kinematics::crouch_target(crouching);
        pose.scale = kinematics::ease_crouch_scale(pose.scale, target, delta);
    }

    outcome
}
