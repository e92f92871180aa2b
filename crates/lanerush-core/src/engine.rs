//! Simulation engine - main entry point for running a runner session.

use hecs::{Entity, World};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lanerush_logic::tuning::Tuning;

use crate::components::{CrouchPose, Obstacle, PlayerBody, Position, Vec3};
use crate::generation::{populate_obstacles, respawn_obstacles, spawn_runner};
use crate::input::InputLatch;
use crate::systems::{obstacle_field_system, player_kinematics_system};

/// Status banner reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Initial prompt, shown until the first ground contact.
    Ready,
    /// Live score; refreshed on every grounded step.
    Score(u64),
    /// Air-dash notification; persists until the next landing.
    AirDash,
    /// Collision banner with the final score.
    Crashed(u64),
    /// Post-reset banner, replaced on the next grounded step.
    Restarted,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready => write!(f, "Run!"),
            Self::Score(points) => {
                write!(f, "Score: {points} (dodge the obstacles, R to restart)")
            }
            Self::AirDash => write!(f, "Air dash!"),
            Self::Crashed(points) => {
                write!(f, "Hit an obstacle! Final score: {points}. Press R to restart.")
            }
            Self::Restarted => write!(f, "Back on the track!"),
        }
    }
}

/// Observable runner state for one frame.
#[derive(Debug, Clone, Copy)]
pub struct PlayerView {
    pub position: Vec3,
    pub crouch_scale: f32,
    pub grounded: bool,
}

/// Observable simulation state handed to the host each frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameState {
    pub player: PlayerView,
    pub score: f32,
    pub game_over: bool,
    pub status: Status,
}

/// The runner simulation. Owns the ECS world, the input latch, the
/// run state and the random source; hosts drive it with [`Self::update`]
/// once per frame and read the returned [`FrameState`].
pub struct RunnerSim<R: Rng = StdRng> {
    /// ECS world holding the runner and the obstacle pool.
    pub world: World,
    /// Key-state boundary; hosts write transitions, updates poll it.
    pub input: InputLatch,
    tuning: Tuning,
    rng: R,
    player: Entity,
    score: f32,
    game_over: bool,
    status: Status,
}

impl RunnerSim<StdRng> {
    /// Simulation with an entropy-seeded random source.
    pub fn new(tuning: Tuning) -> Self {
        Self::with_rng(tuning, StdRng::from_entropy())
    }
}

impl<R: Rng> RunnerSim<R> {
    /// Simulation with an explicit random source, for deterministic runs.
    pub fn with_rng(tuning: Tuning, mut rng: R) -> Self {
        let mut world = World::new();
        let player = spawn_runner(&mut world);
        populate_obstacles(&mut world, tuning.pool_size, &mut rng);

        Self {
            world,
            input: InputLatch::new(),
            tuning,
            rng,
            player,
            score: 0.0,
            game_over: false,
            status: Status::Ready,
        }
    }

    /// Advance the simulation by `delta` seconds and report the frame.
    ///
    /// Zero, negative, or non-finite deltas are no-op steps; oversized
    /// deltas are clamped to the tuned maximum frame step. A latched
    /// reset consumes its tick. While the run is over, updates only
    /// watch for the reset action.
    pub fn update(&mut self, delta: f32) -> FrameState {
        if delta <= 0.0 || !delta.is_finite() {
            return self.frame_state();
        }
        let delta = delta.min(self.tuning.max_frame_step);

        let actions = self.input.drain_actions();
        if actions.reset && self.game_over {
            self.reset();
            return self.frame_state();
        }
        if self.game_over {
            return self.frame_state();
        }

        if actions.jump || actions.air_dash {
            self.apply_edge_actions(actions.jump, actions.air_dash);
        }

        let steering = self.input.steering();
        let crouching = self.input.crouching();
        let outcome =
            player_kinematics_system(&mut self.world, steering, crouching, &self.tuning, delta);
        if outcome.ground_contact {
            self.status = Status::Score(self.points());
        }

        let forward_step = self.tuning.run_speed * delta;
        self.score += forward_step * self.tuning.score_rate;

        let runner = self.player_position();
        if obstacle_field_system(&mut self.world, runner, forward_step, &mut self.rng) {
            self.game_over = true;
            self.status = Status::Crashed(self.points());
            info!("run over at {} points", self.points());
        }

        self.frame_state()
    }

    /// Restore the start-of-run state: runner at the origin with default
    /// body state, zero score, fresh obstacle stagger. Held keys survive
    /// a reset - they are physical key state owned by the host.
    pub fn reset(&mut self) {
        if let Ok((pos, body)) = self
            .world
            .query_one_mut::<(&mut Position, &mut PlayerBody)>(self.player)
        {
            pos.world = Vec3::ZERO;
            *body = PlayerBody::default();
        }
        respawn_obstacles(&mut self.world, &mut self.rng);

        self.score = 0.0;
        self.game_over = false;
        self.status = Status::Restarted;
        info!("run reset");
    }

    fn apply_edge_actions(&mut self, jump: bool, air_dash: bool) {
        if let Ok(body) = self.world.query_one_mut::<&mut PlayerBody>(self.player) {
            if jump && body.grounded {
                body.vertical_velocity = self.tuning.jump_speed;
                body.grounded = false;
                body.can_air_dash = true;
            }
            // A jump and a dash latched in the same window resolve in
            // event order: the jump lifts off, then the dash spends.
            if air_dash && !body.grounded && body.can_air_dash {
                body.air_dash_timer = self.tuning.dash_duration;
                body.can_air_dash = false;
                self.status = Status::AirDash;
                debug!("air dash spent");
            }
        }
    }

    /// Tuning the simulation was built with.
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Raw score accumulator.
    pub fn score(&self) -> f32 {
        self.score
    }

    /// Whole-point score as shown to the player.
    pub fn points(&self) -> u64 {
        self.score as u64
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current status banner.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Observable runner state.
    pub fn player_view(&self) -> PlayerView {
        let position = self.player_position();
        let crouch_scale = self
            .world
            .get::<&CrouchPose>(self.player)
            .map(|pose| pose.scale)
            .unwrap_or(1.0);
        let grounded = self
            .world
            .get::<&PlayerBody>(self.player)
            .map(|body| body.grounded)
            .unwrap_or(true);

        PlayerView {
            position,
            crouch_scale,
            grounded,
        }
    }

    /// Obstacle centers ordered by pool slot.
    pub fn obstacle_positions(&self) -> Vec<Vec3> {
        let mut positions = vec![Vec3::ZERO; self.tuning.pool_size];
        for (_, (pos, obstacle)) in self.world.query::<(&Position, &Obstacle)>().iter() {
            if let Some(entry) = positions.get_mut(obstacle.slot) {
                *entry = pos.world;
            }
        }
        positions
    }

    fn player_position(&self) -> Vec3 {
        self.world
            .get::<&Position>(self.player)
            .map(|pos| pos.world)
            .unwrap_or(Vec3::ZERO)
    }

    fn frame_state(&self) -> FrameState {
        FrameState {
            player: self.player_view(),
            score: self.score,
            game_over: self.game_over,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Action, HeldKey};
    use rand::rngs::mock::StepRng;

    const DT: f32 = 1.0 / 60.0;

    fn seeded_sim() -> RunnerSim<StdRng> {
        RunnerSim::with_rng(Tuning::default(), StdRng::seed_from_u64(42))
    }

    /// Move the obstacle in `slot` to an absolute position.
    fn place_obstacle<R: Rng>(sim: &mut RunnerSim<R>, slot: usize, x: f32, y: f32, z: f32) {
        for (_, (pos, obstacle)) in sim.world.query_mut::<(&mut Position, &Obstacle)>() {
            if obstacle.slot == slot {
                pos.world = Vec3::new(x, y, z);
            }
        }
    }

    #[test]
    fn test_engine_creation() {
        let sim = seeded_sim();
        assert_eq!(sim.score(), 0.0);
        assert!(!sim.game_over());
        assert_eq!(sim.status(), Status::Ready);
        assert_eq!(sim.obstacle_positions().len(), 22);
        assert_eq!(sim.player_view().position, Vec3::ZERO);
    }

    #[test]
    fn test_degenerate_deltas_are_noop() {
        let mut sim = seeded_sim();
        let before = sim.obstacle_positions();
        for delta in [0.0, -1.0, f32::NAN] {
            let frame = sim.update(delta);
            assert_eq!(frame.score, 0.0);
            assert_eq!(frame.status, Status::Ready);
        }
        assert_eq!(sim.obstacle_positions(), before);
    }

    #[test]
    fn test_score_is_monotonic_while_running() {
        let mut sim = seeded_sim();
        let mut last = 0.0;
        for _ in 0..300 {
            let frame = sim.update(DT);
            if frame.game_over {
                break;
            }
            assert!(frame.score >= last);
            last = frame.score;
        }
    }

    #[test]
    fn test_first_grounded_update_reports_live_score() {
        let mut sim = seeded_sim();
        let frame = sim.update(DT);
        assert_eq!(frame.status, Status::Score(0));
    }

    #[test]
    fn test_jump_requires_ground() {
        let mut sim = seeded_sim();
        sim.input.trigger(Action::Jump);
        sim.update(DT);
        assert!(!sim.player_view().grounded);
        let airborne_velocity = sim
            .world
            .get::<&PlayerBody>(sim.player)
            .unwrap()
            .vertical_velocity;

        // A second jump latched while airborne changes nothing.
        sim.input.trigger(Action::Jump);
        sim.update(DT);
        let body = sim.world.get::<&PlayerBody>(sim.player).unwrap();
        assert!(
            body.vertical_velocity < airborne_velocity,
            "gravity alone must act on the airborne runner"
        );
    }

    #[test]
    fn test_air_dash_is_single_use_per_airborne_period() {
        let mut sim = seeded_sim();
        sim.input.trigger(Action::Jump);
        sim.update(DT);

        sim.input.trigger(Action::AirDash);
        sim.update(DT);
        assert_eq!(sim.status(), Status::AirDash);
        let timer_after_first = sim
            .world
            .get::<&PlayerBody>(sim.player)
            .unwrap()
            .air_dash_timer;
        assert!(timer_after_first > 0.0);

        // The second dash of the same airborne period is refused.
        sim.input.trigger(Action::AirDash);
        sim.update(DT);
        let body = sim.world.get::<&PlayerBody>(sim.player).unwrap();
        assert!(!body.can_air_dash);
        assert!(body.air_dash_timer < timer_after_first);
    }

    #[test]
    fn test_dash_on_the_ground_is_refused() {
        let mut sim = seeded_sim();
        sim.update(DT);
        sim.input.trigger(Action::AirDash);
        sim.update(DT);
        assert_ne!(sim.status(), Status::AirDash);
        assert_eq!(
            sim.world
                .get::<&PlayerBody>(sim.player)
                .unwrap()
                .air_dash_timer,
            0.0
        );
    }

    #[test]
    fn test_dead_center_obstacle_ends_the_run() {
        let mut sim = seeded_sim();
        place_obstacle(&mut sim, 0, 0.0, 1.1, 0.0);
        let frame = sim.update(DT);
        assert!(frame.game_over);
        assert!(matches!(frame.status, Status::Crashed(_)));
    }

    #[test]
    fn test_game_over_freezes_the_world() {
        let mut sim = seeded_sim();
        place_obstacle(&mut sim, 0, 0.0, 1.1, 0.0);
        sim.update(DT);
        assert!(sim.game_over());

        let score = sim.score();
        let obstacles = sim.obstacle_positions();
        sim.input.set_held(HeldKey::Right, true);
        sim.input.trigger(Action::Jump);
        for _ in 0..10 {
            sim.update(DT);
        }
        assert_eq!(sim.score(), score);
        assert_eq!(sim.obstacle_positions(), obstacles);
        assert_eq!(sim.player_view().position, Vec3::ZERO);
    }

    #[test]
    fn test_reset_only_acts_after_game_over() {
        let mut sim = seeded_sim();
        sim.update(DT);
        let score = sim.score();
        sim.input.trigger(Action::Reset);
        sim.update(DT);
        assert!(sim.score() > score, "reset mid-run must be refused");
    }

    #[test]
    fn test_reset_restores_the_run() {
        let mut sim = seeded_sim();
        sim.input.set_held(HeldKey::Right, true);
        for _ in 0..30 {
            sim.update(DT);
        }
        let here = sim.player_view().position;
        place_obstacle(&mut sim, 3, here.x, 1.1, here.z);
        sim.update(DT);
        assert!(sim.game_over());

        sim.input.trigger(Action::Reset);
        let frame = sim.update(DT);

        assert!(!frame.game_over);
        assert_eq!(frame.score, 0.0);
        assert_eq!(frame.status, Status::Restarted);
        assert_eq!(frame.player.position, Vec3::ZERO);
        let body = sim.world.get::<&PlayerBody>(sim.player).unwrap();
        assert!(body.grounded && body.can_air_dash);
        drop(body);

        for (slot, pos) in sim.obstacle_positions().iter().enumerate() {
            let base = -30.0 - slot as f32 * 18.0;
            assert!(pos.z <= base && pos.z > base - 6.0, "slot {slot} z={}", pos.z);
            assert!([-4.0, -2.0, 0.0, 2.0, 4.0].contains(&pos.x));
        }

        // Held steering survives the reset and applies next tick.
        sim.update(DT);
        assert!(sim.player_view().position.x > 0.0);
    }

    #[test]
    fn test_recycle_happens_in_the_crossing_tick() {
        let mut sim = RunnerSim::with_rng(Tuning::default(), StepRng::new(0, 0));
        // Keep the runner clear of the recycled lane at x = -4.
        place_obstacle(&mut sim, 0, 4.0, 1.1, 15.99);
        sim.update(DT);
        let recycled = sim.obstacle_positions()[0];
        assert_eq!(recycled.z, -360.0);
        assert_eq!(recycled.x, -4.0);
    }
}
