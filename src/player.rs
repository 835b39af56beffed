//! Player spawn, input, and movement systems.
//!
//! ## Pipeline (runs in order every `Update` frame)
//!
//! 1. [`crate::interaction::platform_landing_system`] — refreshes ground
//!    contact and feeds the interaction gate.
//! 2. [`keyboard_to_intent_system`] — translates arrow/space keys into
//!    [`PlayerIntent`] fields.
//! 3. [`apply_player_intent_system`] — converts `PlayerIntent` into `Velocity`
//!    writes and, on an executed jump, ends the gate's landing episode.
//!
//! The **input abstraction layer** (`PlayerIntent`) makes the movement logic
//! fully testable: tests populate the resource directly and run only
//! [`apply_player_intent_system`].

use crate::config::GameConfig;
use crate::interaction::{GroundContact, InteractionState};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

// ── Components & Resources ────────────────────────────────────────────────────

/// Marker component for the player sprite.
#[derive(Component)]
pub struct Player;

/// Aggregated player intent for the current frame, derived from the keyboard.
///
/// Rebuilt from scratch by [`keyboard_to_intent_system`] each frame and read
/// by [`apply_player_intent_system`].  Tests can populate this directly to
/// drive movement without a real input device.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct PlayerIntent {
    /// Horizontal run direction: −1.0 (left), 0.0, or +1.0 (right).
    pub run: f32,
    /// Jump key held this frame.  Only takes effect while grounded.
    pub jump: bool,
}

fn player_color() -> Color {
    Color::srgb(0.85, 0.30, 0.25)
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerIntent>()
            .add_systems(
                Startup,
                spawn_player.after(crate::config::load_game_config),
            )
            .add_systems(
                Update,
                (
                    keyboard_to_intent_system,
                    apply_player_intent_system
                        .after(keyboard_to_intent_system)
                        .after(crate::interaction::platform_landing_system),
                ),
            );
    }
}

// ── Spawn ─────────────────────────────────────────────────────────────────────

/// Spawn the player at the start of the platform run.
///
/// A dynamic body with locked rotation: gravity and collision response come
/// from Rapier, while the movement systems write horizontal and jump
/// velocities directly for an arcade feel.  The small restitution gives a
/// visible landing bounce.
pub fn spawn_player(mut commands: Commands, config: Res<GameConfig>) {
    commands.spawn((
        Player,
        Sprite::from_color(
            player_color(),
            Vec2::new(
                config.player_half_width * 2.0,
                config.player_half_height * 2.0,
            ),
        ),
        Transform::from_xyz(config.player_start_x, config.player_start_y, 0.5),
        RigidBody::Dynamic,
        Collider::cuboid(config.player_half_width, config.player_half_height),
        LockedAxes::ROTATION_LOCKED,
        Velocity::zero(),
        Restitution::coefficient(config.player_bounce),
        // Zero friction keeps the sprite from sticking to platform sides
        // mid-jump; horizontal speed is set explicitly every frame anyway.
        Friction::coefficient(0.0),
    ));

    info!(
        "Player spawned at ({}, {})",
        config.player_start_x, config.player_start_y
    );
}

// ── Input → Intent ────────────────────────────────────────────────────────────

/// Translate arrow / space keys into [`PlayerIntent`].
///
/// - **←** → `run = −1.0`, **→** → `run = +1.0` (left wins if both are held)
/// - **↑** or **Space** → `jump = true`
pub fn keyboard_to_intent_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut intent: ResMut<PlayerIntent>,
) {
    *intent = PlayerIntent::default();

    if keys.pressed(KeyCode::ArrowLeft) {
        intent.run = -1.0;
    } else if keys.pressed(KeyCode::ArrowRight) {
        intent.run = 1.0;
    }
    if keys.pressed(KeyCode::ArrowUp) || keys.pressed(KeyCode::Space) {
        intent.jump = true;
    }
}

// ── Intent → Physics ──────────────────────────────────────────────────────────

/// Convert [`PlayerIntent`] into `Velocity` writes on the player body.
///
/// This is the **only** system that writes player physics outputs.  Horizontal
/// velocity is set every frame (instant stop on key release, as in classic
/// platformers).  A jump fires only while grounded; executing one also calls
/// [`InteractionState::on_jump`], ending the current landing episode so the
/// next landing re-triggers its popup.
pub fn apply_player_intent_system(
    mut q: Query<&mut Velocity, With<Player>>,
    intent: Res<PlayerIntent>,
    ground: Res<GroundContact>,
    mut gate: ResMut<InteractionState>,
    config: Res<GameConfig>,
) {
    let Ok(mut velocity) = q.single_mut() else {
        return;
    };

    velocity.linvel.x = intent.run * config.move_speed;

    if intent.jump && ground.grounded {
        velocity.linvel.y = config.jump_speed;
        gate.on_jump();
    }
}
