//! LaneRush Headless Simulation Harness
//!
//! Validates the pure runner math and full engine runs without any
//! rendering host. Runs entirely in-process — no windowing, no GPU.
//!
//! Usage:
//!   cargo run -p lanerush-simtest
//!   cargo run -p lanerush-simtest -- --verbose

use lanerush_core::prelude::*;
use lanerush_logic::collision::obstacle_hits_runner;
use lanerush_logic::kinematics::{vertical_step, VerticalStep};
use lanerush_logic::lanes::{lane_offsets, recycle_z, spawn_z};
use lanerush_logic::tuning::validate_tuning;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Tuning manifest (reference configuration as shipped) ───────────────
const TUNING_JSON: &str = include_str!("../../../data/tuning.json");

const DT: f32 = 1.0 / 60.0;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn new(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

fn main() {
    env_logger::init();
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== LaneRush Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Tuning manifest validation
    results.extend(validate_tuning_manifest(verbose));

    // 2. Jump arc sweep
    results.extend(validate_jump_arc(verbose));

    // 3. Lane and spawn placement
    results.extend(validate_placement(verbose));

    // 4. Collision volume sweep
    results.extend(validate_collision_volume(verbose));

    // 5. Scripted approach run
    results.extend(validate_scripted_approach(verbose));

    // 6. Crash / reset / rerun cycle
    results.extend(validate_crash_reset_cycle(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Tuning manifest ──────────────────────────────────────────────────

fn validate_tuning_manifest(_verbose: bool) -> Vec<TestResult> {
    println!("--- Tuning Manifest ---");
    let mut results = Vec::new();

    let tuning: Tuning = match serde_json::from_str(TUNING_JSON) {
        Ok(t) => t,
        Err(e) => {
            results.push(TestResult::new(
                "tuning_parse",
                false,
                format!("JSON parse error: {}", e),
            ));
            return results;
        }
    };

    let errors = validate_tuning(&tuning);
    results.push(TestResult::new(
        "tuning_validates",
        errors.is_empty(),
        if errors.is_empty() {
            "all rates positive, pool populated".to_string()
        } else {
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ")
        },
    ));

    results.push(TestResult::new(
        "tuning_is_reference",
        tuning == Tuning::default(),
        "shipped manifest matches the reference configuration",
    ));

    results
}

// ── 2. Jump arc ─────────────────────────────────────────────────────────

fn validate_jump_arc(verbose: bool) -> Vec<TestResult> {
    println!("--- Jump Arc ---");
    let mut results = Vec::new();
    let tuning = Tuning::default();

    let mut height = 0.0_f32;
    let mut velocity = tuning.jump_speed;
    let mut peak = 0.0_f32;
    let mut airborne_ticks = 0u32;
    loop {
        match vertical_step(height, velocity, false, tuning.gravity, DT) {
            VerticalStep::Airborne {
                height: h,
                velocity: v,
            } => {
                height = h;
                velocity = v;
                peak = peak.max(h);
                airborne_ticks += 1;
            }
            VerticalStep::Landed => break,
        }
        if airborne_ticks > 600 {
            break;
        }
    }

    if verbose {
        println!("  peak {:.2} over {} ticks", peak, airborne_ticks);
    }

    let analytic_peak = tuning.jump_speed * tuning.jump_speed / (2.0 * tuning.gravity);
    results.push(TestResult::new(
        "jump_peak_near_analytic",
        (peak - analytic_peak).abs() < 0.3,
        format!("peak {:.2} vs analytic {:.2}", peak, analytic_peak),
    ));

    // Clearing an obstacle needs 0.7 of headroom over the rest height
    // (torso offset 1.0 against half-extent 1.6 around y = 1.1).
    results.push(TestResult::new(
        "jump_clears_rest_height",
        peak > 1.7,
        format!("peak {:.2} vs clearance 1.7", peak),
    ));

    let analytic_ticks = (2.0 * tuning.jump_speed / tuning.gravity / DT) as u32;
    results.push(TestResult::new(
        "jump_duration_near_analytic",
        airborne_ticks.abs_diff(analytic_ticks) <= 2,
        format!("{} ticks vs analytic {}", airborne_ticks, analytic_ticks),
    ));

    results
}

// ── 3. Placement ────────────────────────────────────────────────────────

fn validate_placement(_verbose: bool) -> Vec<TestResult> {
    println!("--- Lane & Spawn Placement ---");
    let mut results = Vec::new();

    let offsets = lane_offsets();
    results.push(TestResult::new(
        "lanes_centered",
        offsets == [-4.0, -2.0, 0.0, 2.0, 4.0],
        format!("{:?}", offsets),
    ));

    let deepest_spawn = spawn_z(21, 10.0);
    let deepest_recycle = recycle_z(60.0);
    results.push(TestResult::new(
        "placement_stays_in_field",
        deepest_spawn >= -420.0 && deepest_recycle >= -420.0,
        format!(
            "deepest spawn {:.0}, deepest recycle {:.0}",
            deepest_spawn, deepest_recycle
        ),
    ));

    results.push(TestResult::new(
        "spawn_slots_do_not_overlap",
        (0..21).all(|slot| spawn_z(slot, 10.0) > spawn_z(slot + 1, 0.0)),
        "max jitter never reorders adjacent slots",
    ));

    results
}

// ── 4. Collision volume ─────────────────────────────────────────────────

fn validate_collision_volume(_verbose: bool) -> Vec<TestResult> {
    println!("--- Collision Volume ---");
    let mut results = Vec::new();

    let grounded_hit = obstacle_hits_runner(0.0, 1.1, 0.0, 0.0, 0.0, 0.0);
    let lane_miss = !obstacle_hits_runner(2.0, 1.1, 0.0, 0.0, 0.0, 0.0);
    let jump_miss = !obstacle_hits_runner(0.0, 1.1, 0.0, 0.0, 1.8, 0.0);
    results.push(TestResult::new(
        "collision_axes",
        grounded_hit && lane_miss && jump_miss,
        format!(
            "grounded hit={}, adjacent lane miss={}, high jump miss={}",
            grounded_hit, lane_miss, jump_miss
        ),
    ));

    // Sweep the depth axis: the hit window must be exactly |dz| < 1.5.
    let mut window_ok = true;
    for i in -40..=40 {
        let dz = i as f32 * 0.1;
        let hit = obstacle_hits_runner(0.0, 1.1, dz, 0.0, 0.0, 0.0);
        if hit != (dz.abs() < 1.5) {
            window_ok = false;
        }
    }
    results.push(TestResult::new(
        "collision_depth_window",
        window_ok,
        "hit exactly when |dz| < 1.5",
    ));

    results
}

// ── 5. Scripted approach ────────────────────────────────────────────────

fn validate_scripted_approach(verbose: bool) -> Vec<TestResult> {
    println!("--- Scripted Approach ---");
    let mut results = Vec::new();

    // Zero rng parks the whole pool in the x = -4 lane; the one planted
    // obstacle approaches a stationary runner on the center line.
    let mut sim = RunnerSim::with_rng(Tuning::default(), StepRng::new(0, 0));
    for (_, (pos, obstacle)) in sim.world.query_mut::<(&mut Position, &Obstacle)>() {
        if obstacle.slot == 0 {
            pos.world = Vec3::new(0.0, 1.1, -30.0);
        }
    }

    let mut outcome = TestResult::new("approach_never_hit", false, "obstacle never arrived");
    for tick in 0..600 {
        let before = sim.obstacle_positions()[0].z;
        let frame = sim.update(DT);
        let after = sim.obstacle_positions()[0].z;
        if frame.game_over {
            let first_entry = before <= -1.5 && after > -1.5 && after < 1.5;
            outcome = TestResult::new(
                "approach_ends_at_window_entry",
                first_entry,
                format!("tick {}: z {:.3} -> {:.3}", tick, before, after),
            );
            if verbose {
                println!("  game over at tick {}, z={:.3}", tick, after);
            }
            break;
        }
    }
    results.push(outcome);

    results
}

// ── 6. Crash / reset / rerun ────────────────────────────────────────────

fn validate_crash_reset_cycle(verbose: bool) -> Vec<TestResult> {
    println!("--- Crash / Reset / Rerun ---");
    let mut results = Vec::new();

    let mut sim = RunnerSim::with_rng(Tuning::default(), StdRng::seed_from_u64(2024));

    // Run with periodic jumps until a crash; the pool must get there.
    let mut crashed_at = None;
    let mut score_monotonic = true;
    let mut height_non_negative = true;
    let mut last_score = 0.0_f32;
    for tick in 0..20_000 {
        if tick % 45 == 0 {
            sim.input.trigger(Action::Jump);
        }
        let frame = sim.update(DT);
        if frame.player.position.y < 0.0 {
            height_non_negative = false;
        }
        if frame.game_over {
            crashed_at = Some(tick);
            break;
        }
        if frame.score < last_score {
            score_monotonic = false;
        }
        last_score = frame.score;
    }

    results.push(TestResult::new(
        "run_eventually_crashes",
        crashed_at.is_some(),
        match crashed_at {
            Some(tick) => format!("crashed at tick {} with {} points", tick, sim.points()),
            None => "survived 20k ticks standing in the center lane".to_string(),
        },
    ));
    results.push(TestResult::new(
        "score_monotonic_until_crash",
        score_monotonic,
        "score never decreased while running",
    ));
    results.push(TestResult::new(
        "height_never_negative",
        height_non_negative,
        "runner never sank below the ground",
    ));

    if verbose {
        println!("  final status: {}", sim.status());
    }

    // Reset and verify the restored field.
    sim.input.trigger(Action::Reset);
    let frame = sim.update(DT);
    let spacing_ok = sim
        .obstacle_positions()
        .iter()
        .enumerate()
        .all(|(slot, pos)| {
            let base = -30.0 - slot as f32 * 18.0;
            pos.z <= base && pos.z > base - 6.0
        });
    results.push(TestResult::new(
        "reset_restores_run",
        !frame.game_over && frame.score == 0.0 && frame.player.position == Vec3::ZERO && spacing_ok,
        format!(
            "game_over={}, score={}, spacing_ok={}",
            frame.game_over, frame.score, spacing_ok
        ),
    ));

    // The rerun scrolls again immediately.
    let frame = sim.update(DT);
    results.push(TestResult::new(
        "rerun_accrues_score",
        !frame.game_over && frame.score > 0.0,
        format!("score {:.3} one tick after reset", frame.score),
    ));

    results
}
