//! World population - the runner entity and the recycled obstacle pool.

use hecs::{Entity, World};
use rand::Rng;

use lanerush_logic::constants::field;
use lanerush_logic::constants::lanes::COUNT as LANE_COUNT;
use lanerush_logic::lanes;

use crate::components::{CrouchPose, Obstacle, Player, PlayerBody, Position};

/// Spawn the runner at the corridor origin with default body state.
pub fn spawn_runner(world: &mut World) -> Entity {
    world.spawn((
        Player,
        Position::default(),
        PlayerBody::default(),
        CrouchPose::default(),
    ))
}

/// Populate the obstacle pool, staggered into the distance with a
/// random lane and per-slot depth jitter so the field never arrives in
/// lockstep. Called exactly once per world.
pub fn populate_obstacles(world: &mut World, pool_size: usize, rng: &mut impl Rng) -> Vec<Entity> {
    (0..pool_size)
        .map(|slot| {
            let z = lanes::spawn_z(slot, rng.gen_range(0.0..field::SPAWN_JITTER));
            let x = lanes::lane_x(rng.gen_range(0..LANE_COUNT));
            world.spawn((Obstacle { slot }, Position::new(x, field::REST_Y, z)))
        })
        .collect()
}

/// Re-stagger every pooled obstacle after a reset. Entities are reused,
/// never despawned and respawned.
pub fn respawn_obstacles(world: &mut World, rng: &mut impl Rng) {
    for (_, (pos, obstacle)) in world.query_mut::<(&mut Position, &Obstacle)>() {
        pos.world.z = lanes::spawn_z(obstacle.slot, rng.gen_range(0.0..field::RESET_JITTER));
        pos.world.x = lanes::lane_x(rng.gen_range(0..LANE_COUNT));
        pos.world.y = field::REST_Y;
    }
}
