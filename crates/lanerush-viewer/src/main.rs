//! LaneRush Viewer - Bevy-based presentation for the runner simulation
//!
//! Feeds key transitions and frame timing into the core and applies the
//! observable state to transforms, the camera, and the status readout.
//! No simulation decisions live here.

use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;

use lanerush_core::engine::RunnerSim;
use lanerush_core::input::{Action, HeldKey};
use lanerush_core::prelude::Tuning;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "LaneRush".to_string(),
                resolution: (1280.0, 720.0).into(),
                present_mode: bevy::window::PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb_u8(0x12, 0x1a, 0x2f)))
        .insert_resource(SimWrapper(RunnerSim::new(Tuning::default())))
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                collect_input,
                step_simulation,
                sync_runner,
                sync_obstacles,
                follow_camera,
                update_status_text,
            )
                .chain(),
        )
        .run();
}

#[derive(Resource)]
struct SimWrapper(RunnerSim);

/// The runner's visible body (scaled by the crouch pose).
#[derive(Component)]
struct RunnerBody;

/// Visual box for one obstacle pool slot.
#[derive(Component)]
struct ObstacleVisual(usize);

#[derive(Component)]
struct StatusText;

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim: Res<SimWrapper>,
) {
    // Camera at the reference start pose, with matching linear fog.
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 4.5, 10.0).looking_at(Vec3::new(0.0, 1.5, -8.0), Vec3::Y),
        DistanceFog {
            color: Color::srgb_u8(0x12, 0x1a, 0x2f),
            falloff: FogFalloff::Linear {
                start: 25.0,
                end: 110.0,
            },
            ..default()
        },
    ));

    // Hemisphere-style fill plus one directional key light.
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.71, 0.86, 1.0),
        brightness: 300.0,
    });
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            ..default()
        },
        Transform::from_xyz(-6.0, 14.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Ground and the three lane guide strips.
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(80.0, 420.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x1d, 0x2b, 0x47),
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, -130.0),
    ));

    let guide_mesh = meshes.add(Cuboid::new(0.18, 0.02, 420.0));
    let guide_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x3f, 0x87, 0xff),
        ..default()
    });
    for i in -1..=1 {
        commands.spawn((
            Mesh3d(guide_mesh.clone()),
            MeshMaterial3d(guide_material.clone()),
            Transform::from_xyz(i as f32 * 4.0, 0.01, -130.0),
        ));
    }

    // Runner body: feet at the simulation height, center half a body up.
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(1.2, 2.1, 1.2))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x4d, 0xe4, 0xb9),
            perceptual_roughness: 0.45,
            ..default()
        })),
        Transform::from_xyz(0.0, 1.05, 0.0),
        RunnerBody,
    ));

    // One box per pool slot, placed from the core's current state.
    let obstacle_mesh = meshes.add(Cuboid::new(2.2, 2.2, 2.2));
    let obstacle_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xff, 0x8b, 0x5f),
        perceptual_roughness: 0.3,
        ..default()
    });
    for (slot, pos) in sim.0.obstacle_positions().into_iter().enumerate() {
        commands.spawn((
            Mesh3d(obstacle_mesh.clone()),
            MeshMaterial3d(obstacle_material.clone()),
            Transform::from_xyz(pos.x, pos.y, pos.z),
            ObstacleVisual(slot),
        ));
    }

    // Status readout, top-left.
    commands.spawn((
        Text::new(sim.0.status().to_string()),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        StatusText,
    ));
}

/// Map raw key transitions onto the core's input latch. Keys outside
/// this mapping never reach the simulation.
fn collect_input(keyboard: Res<ButtonInput<KeyCode>>, mut sim: ResMut<SimWrapper>) {
    const HELD: [(KeyCode, HeldKey); 5] = [
        (KeyCode::KeyW, HeldKey::Forward),
        (KeyCode::KeyS, HeldKey::Back),
        (KeyCode::KeyA, HeldKey::Left),
        (KeyCode::KeyD, HeldKey::Right),
        (KeyCode::KeyK, HeldKey::Crouch),
    ];
    for (code, key) in HELD {
        if keyboard.just_pressed(code) {
            sim.0.input.set_held(key, true);
        }
        if keyboard.just_released(code) {
            sim.0.input.set_held(key, false);
        }
    }

    if keyboard.just_pressed(KeyCode::KeyJ) {
        sim.0.input.trigger(Action::Jump);
    }
    if keyboard.just_pressed(KeyCode::KeyL) {
        sim.0.input.trigger(Action::AirDash);
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        sim.0.input.trigger(Action::Reset);
    }
}

fn step_simulation(time: Res<Time>, mut sim: ResMut<SimWrapper>) {
    let max_step = sim.0.tuning().max_frame_step;
    sim.0.update(time.delta_secs().min(max_step));
}

fn sync_runner(sim: Res<SimWrapper>, mut query: Query<&mut Transform, With<RunnerBody>>) {
    let view = sim.0.player_view();
    for mut transform in &mut query {
        transform.scale.y = view.crouch_scale;
        transform.translation = Vec3::new(
            view.position.x,
            view.position.y + 1.05 * view.crouch_scale,
            view.position.z,
        );
    }
}

fn sync_obstacles(sim: Res<SimWrapper>, mut query: Query<(&ObstacleVisual, &mut Transform)>) {
    let positions = sim.0.obstacle_positions();
    for (visual, mut transform) in &mut query {
        if let Some(pos) = positions.get(visual.0) {
            transform.translation = Vec3::new(pos.x, pos.y, pos.z);
        }
    }
}

/// Trail the runner with the reference follow constants.
fn follow_camera(sim: Res<SimWrapper>, mut query: Query<&mut Transform, With<Camera3d>>) {
    let view = sim.0.player_view();
    for mut transform in &mut query {
        let target = Vec3::new(
            view.position.x * 0.55,
            4.2 + view.position.y * 0.45,
            10.0 + view.position.z * 0.45,
        );
        let current = transform.translation;
        transform.translation = Vec3::new(
            current.x + (target.x - current.x) * 0.07,
            current.y + (target.y - current.y) * 0.08,
            current.z + (target.z - current.z) * 0.08,
        );

        let focus = Vec3::new(view.position.x * 0.7, 1.5 + view.position.y * 0.2, -8.0);
        transform.look_at(focus, Vec3::Y);
    }
}

fn update_status_text(sim: Res<SimWrapper>, mut query: Query<&mut Text, With<StatusText>>) {
    let banner = sim.0.status().to_string();
    for mut text in &mut query {
        if text.0 != banner {
            text.0.clone_from(&banner);
        }
    }
}
