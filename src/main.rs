use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier2d::prelude::*;

use platfolio::config::{self, GameConfig};
use platfolio::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use platfolio::graphics;
use platfolio::interaction::InteractionPlugin;
use platfolio::player::PlayerPlugin;
use platfolio::popup::PopupPlugin;
use platfolio::world::WorldPlugin;

/// Configure Rapier for arcade platforming: a constant downward pull on every
/// dynamic body, straight from the loaded config.
fn setup_physics_config(
    mut rapier_config: Query<&mut RapierConfiguration>,
    config: Res<GameConfig>,
) {
    for mut cfg in rapier_config.iter_mut() {
        cfg.gravity = Vec2::new(0.0, -config.gravity);
    }
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Platfolio".into(),
                resolution: WindowResolution::new(WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.53, 0.81, 0.92)))
        // Insert GameConfig with compiled defaults; load_game_config will
        // overwrite it from assets/game.toml (if present) in the Startup schedule.
        .insert_resource(GameConfig::default())
        // pixels_per_meter(1.0) keeps world units pixel-sized, so gravity and
        // velocity constants read directly as px/s² and px/s.
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0))
        .add_plugins((WorldPlugin, PlayerPlugin, InteractionPlugin, PopupPlugin))
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the final values.
                config::load_game_config,
                graphics::setup_camera.after(config::load_game_config),
                graphics::setup_controls_hint,
                setup_physics_config.after(config::load_game_config),
            ),
        )
        .add_systems(Update, graphics::camera_follow_system)
        .run();
}
