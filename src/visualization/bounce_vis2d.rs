use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::boundary::{reflect_walls, Bounds};
use crate::simulation::driver::DriverMode;
use crate::simulation::scenario::Scenario;

/// Component tagging the ball's screen entity
#[derive(Component)]
struct BallSprite;

/// Component tagging the dots left behind at each physics step
#[derive(Component)]
struct TrailDot;

/// Component tagging the delta readout text
#[derive(Component)]
struct ReadoutText;

/// Render-rate timer for the fixed-rate update path, plus the real time
/// accumulated since that path last stepped (the host-measured inter-frame
/// duration handed to `step`, which may drift from the configured target)
#[derive(Resource)]
struct FixedTick {
    timer: Timer,
    accum_ms: f64,
}

/// Most recent elapsed-time deltas of the two update paths, for the overlay
#[derive(Resource, Default)]
struct DeltaReadout {
    fixed_ms: f64,
    variable_ms: f64,
}

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D viewer, driver = {:?}", scenario.engine.mode);

    let period = (1.0 / scenario.engine.target_fps) as f32;
    App::new()
        .insert_resource(FixedTick {
            timer: Timer::from_seconds(period, TimerMode::Repeating),
            accum_ms: 0.0,
        })
        .init_resource::<DeltaReadout>()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_scene_system)
        .add_systems(
            Update,
            (
                toggle_mode_system,
                fixed_step_system,
                variable_step_system,
                sync_transforms_system,
                readout_text_system,
                clear_trail_system,
            ),
        )
        .run();
}

/// Map canvas coordinates (origin top-left, y down) to world coordinates
/// (origin at canvas center, y up)
fn canvas_to_world(bounds: &Bounds, x: f64, y: f64) -> Vec3 {
    Vec3::new(
        x as f32 - bounds.width as f32 * 0.5,
        bounds.height as f32 * 0.5 - y as f32,
        0.0,
    )
}

/// Ball tint per mode, same cue as the original demo's stroke color
fn ball_color(mode: DriverMode) -> Color {
    match mode {
        DriverMode::FixedRate => Color::WHITE,
        DriverMode::VariableRate => Color::srgb(1.0, 0.2, 0.2),
    }
}

/// Startup system: spawn camera, canvas backdrop, ball, and text overlay
fn setup_scene_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let bounds = &scenario.bounds;

    // Backdrop so the canvas edges the ball bounces off are visible
    commands.spawn(SpriteBundle {
        sprite: Sprite {
            color: Color::srgb(0.12, 0.12, 0.12),
            custom_size: Some(Vec2::new(bounds.width as f32, bounds.height as f32)),
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, 0.0, -1.0),
        ..Default::default()
    });

    // Ball, kept visible even at small configured diameters
    let ball = &scenario.ball;
    let radius_screen = (ball.body.diameter as f32 * 0.5).max(2.0);

    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
            material: materials.add(ColorMaterial::from(ball_color(scenario.engine.mode))),
            transform: Transform::from_translation(
                canvas_to_world(bounds, ball.body.x.x, ball.body.x.y).with_z(1.0),
            ),
            ..Default::default()
        },
        BallSprite,
    ));

    // Overlay: deltaTime (fixed path), dT (variable path), active driver
    let style = TextStyle {
        font_size: 18.0,
        color: Color::WHITE,
        ..Default::default()
    };
    commands.spawn((
        TextBundle::from_sections([
            TextSection::new("deltaTime: ", style.clone()),
            TextSection::from_style(style.clone()),
            TextSection::new("\ndT: ", style.clone()),
            TextSection::from_style(style.clone()),
            TextSection::new("\ndriver: ", style.clone()),
            TextSection::from_style(style),
        ])
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..Default::default()
        }),
        ReadoutText,
    ));
}

/// Space toggles the active update path (the checkbox analog) and retints
/// the ball. The variable driver's last-timestamp bookkeeping is left
/// alone on purpose: re-enabling it later produces one catch-up delta
fn toggle_mode_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut scenario: ResMut<Scenario>,
    ball_query: Query<&Handle<ColorMaterial>, With<BallSprite>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if !keys.just_pressed(KeyCode::Space) {
        return;
    }
    scenario.engine.mode = scenario.engine.mode.toggled();

    if let Ok(handle) = ball_query.get_single() {
        if let Some(material) = materials.get_mut(handle) {
            material.color = ball_color(scenario.engine.mode);
        }
    }
}

/// Fixed-rate update path: steps the ball when the render-rate timer
/// fires, passing the measured real time since the previous fixed step
fn fixed_step_system(
    time: Res<Time>,
    mut tick: ResMut<FixedTick>,
    mut scenario: ResMut<Scenario>,
    mut readout: ResMut<DeltaReadout>,
    mut commands: Commands,
) {
    if scenario.engine.mode != DriverMode::FixedRate {
        return;
    }

    tick.accum_ms += time.delta_seconds_f64() * 1000.0;
    tick.timer.tick(time.delta());
    if !tick.timer.just_finished() {
        return;
    }

    let elapsed_ms = tick.accum_ms;
    tick.accum_ms = 0.0;
    readout.fixed_ms = elapsed_ms;

    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario { ball, bounds, .. } = &mut *scenario;

    ball.step(elapsed_ms);
    reflect_walls(&mut ball.body, bounds);
    spawn_trail_dot(&mut commands, bounds, ball.body.x.x, ball.body.x.y);
}

/// Variable-rate update path: steps the ball every host frame using the
/// driver's own timestamp bookkeeping against the monotonic clock
fn variable_step_system(
    time: Res<Time>,
    mut scenario: ResMut<Scenario>,
    mut readout: ResMut<DeltaReadout>,
    mut commands: Commands,
) {
    if scenario.engine.mode != DriverMode::VariableRate {
        return;
    }

    let timestamp_ms = time.elapsed_seconds_f64() * 1000.0;

    let Scenario { ball, bounds, driver, .. } = &mut *scenario;

    let elapsed_ms = driver.tick(timestamp_ms);
    readout.variable_ms = elapsed_ms;

    ball.step(elapsed_ms);
    reflect_walls(&mut ball.body, bounds);
    spawn_trail_dot(&mut commands, bounds, ball.body.x.x, ball.body.x.y);
}

/// Leave a dot at the ball's post-step position; the dot density makes the
/// step frequency of the two paths visible side by side
fn spawn_trail_dot(commands: &mut Commands, bounds: &Bounds, x: f64, y: f64) {
    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                color: Color::srgb(0.45, 0.45, 0.45),
                custom_size: Some(Vec2::splat(2.0)),
                ..Default::default()
            },
            transform: Transform::from_translation(canvas_to_world(bounds, x, y)),
            ..Default::default()
        },
        TrailDot,
    ));
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    mut query: Query<&mut Transform, With<BallSprite>>,
) {
    for mut transform in &mut query {
        let pos = canvas_to_world(&scenario.bounds, scenario.ball.body.x.x, scenario.ball.body.x.y);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
    }
}

fn readout_text_system(
    scenario: Res<Scenario>,
    readout: Res<DeltaReadout>,
    mut query: Query<&mut Text, With<ReadoutText>>,
) {
    for mut text in &mut query {
        text.sections[1].value = format!("{:.2}", readout.fixed_ms);
        text.sections[3].value = format!("{:.2}", readout.variable_ms);
        text.sections[5].value = format!("{:?}", scenario.engine.mode);
    }
}

/// R clears the trail (the clear-canvas button analog); the ball itself
/// is untouched
fn clear_trail_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    dots: Query<Entity, With<TrailDot>>,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }
    for entity in &dots {
        commands.entity(entity).despawn();
    }
}
