//! Obstacle field system - scroll, recycle, collision.

use hecs::World;
use rand::Rng;

use lanerush_logic::collision;
use lanerush_logic::constants::field;
use lanerush_logic::constants::lanes::COUNT as LANE_COUNT;
use lanerush_logic::lanes;

use crate::components::{Obstacle, Position, Vec3};

/// Advance the field one step: scroll every obstacle toward the runner,
/// recycle the ones that scrolled past, and test each against the
/// runner's torso. Returns true if any obstacle hit the runner.
///
/// The world scrolls by moving obstacles, not the runner; a recycled
/// obstacle is relocated in the same step it crosses the threshold, so
/// its depth never leaves the field range. Obstacles after a hit still
/// advance - the run is already over, further hits are redundant.
pub fn obstacle_field_system(
    world: &mut World,
    runner: Vec3,
    forward_step: f32,
    rng: &mut impl Rng,
) -> bool {
    let mut hit = false;

    for (_, (pos, _)) in world.query_mut::<(&mut Position, &Obstacle)>() {
        pos.world.z += forward_step;
        if lanes::past_runner(pos.world.z) {
            pos.world.z = lanes::recycle_z(rng.gen_range(0.0..field::RECYCLE_JITTER));
            pos.world.x = lanes::lane_x(rng.gen_range(0..LANE_COUNT));
        }

        if collision::obstacle_hits_runner(
            pos.world.x,
            pos.world.y,
            pos.world.z,
            runner.x,
            runner.y,
            runner.z,
        ) {
            hit = true;
        }
    }

    hit
}
