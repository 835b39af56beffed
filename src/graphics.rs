//! Camera setup, dead-zone follow behaviour, and the fixed controls hint.

use crate::config::GameConfig;
use crate::player::Player;
use bevy::prelude::*;

/// Marker for the controls hint HUD node.
#[derive(Component)]
pub struct ControlsHint;

/// Setup camera for 2D rendering, centred on the start of the world.
pub fn setup_camera(mut commands: Commands, config: Res<GameConfig>) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(
            config.window_width * 0.5,
            config.window_height * 0.5,
            0.0,
        ),
    ));
}

/// Spawn the permanent controls hint in the bottom-left corner.
pub fn setup_controls_hint(mut commands: Commands) {
    commands.spawn((
        ControlsHint,
        Text::new("←/→ move · ↑/space jump · land on a labelled platform"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgba(0.10, 0.10, 0.14, 0.85)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            bottom: Val::Px(8.0),
            ..default()
        },
    ));
}

/// Follow the player with a dead-zone, clamped to the world bounds.
///
/// The camera stays still while the player moves inside the dead-zone box and
/// tracks only the overshoot, which reads much smoother than hard centring.
pub fn camera_follow_system(
    q_player: Query<&Transform, With<Player>>,
    mut q_camera: Query<&mut Transform, (With<Camera>, Without<Player>)>,
    config: Res<GameConfig>,
) {
    let Ok(player) = q_player.single() else {
        return;
    };
    let Ok(mut cam) = q_camera.single_mut() else {
        return;
    };

    let dz_half_w = config.camera_deadzone_width * 0.5;
    let dz_half_h = config.camera_deadzone_height * 0.5;
    let mut target = cam.translation.truncate();

    if player.translation.x > target.x + dz_half_w {
        target.x = player.translation.x - dz_half_w;
    } else if player.translation.x < target.x - dz_half_w {
        target.x = player.translation.x + dz_half_w;
    }
    if player.translation.y > target.y + dz_half_h {
        target.y = player.translation.y - dz_half_h;
    } else if player.translation.y < target.y - dz_half_h {
        target.y = player.translation.y + dz_half_h;
    }

    let half_view_w = config.window_width * 0.5;
    let half_view_h = config.window_height * 0.5;
    let max_x = (config.world_width - half_view_w).max(half_view_w);
    let max_y = (config.world_height - half_view_h).max(half_view_h);

    cam.translation.x = target.x.clamp(half_view_w, max_x);
    cam.translation.y = target.y.clamp(half_view_h, max_y);
}
