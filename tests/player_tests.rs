//! Headless tests for the player intent pipeline.
//!
//! [`PlayerIntent`] decouples input reading from physics writes, so these
//! tests populate the resource directly and run only
//! [`apply_player_intent_system`]: no keyboard, no Rapier pipeline, just a
//! spawned `Velocity` component to observe.

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;
use platfolio::config::GameConfig;
use platfolio::constants::{JUMP_SPEED, MOVE_SPEED};
use platfolio::content::SectionId;
use platfolio::interaction::{GroundContact, InteractionState};
use platfolio::player::{apply_player_intent_system, Player, PlayerIntent};
use platfolio::world::PlatformId;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn player_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(GameConfig::default());
    app.init_resource::<PlayerIntent>();
    app.init_resource::<GroundContact>();
    app.init_resource::<InteractionState>();
    app.add_systems(Update, apply_player_intent_system);
    app.world_mut().spawn((Player, Velocity::zero()));
    app
}

fn player_velocity(app: &mut App) -> Velocity {
    let mut query = app.world_mut().query_filtered::<&Velocity, With<Player>>();
    *query.single(app.world()).unwrap()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// Run intent maps directly onto horizontal velocity, in both directions.
#[test]
fn run_intent_sets_horizontal_velocity() {
    let mut app = player_app();

    app.world_mut().resource_mut::<PlayerIntent>().run = 1.0;
    app.update();
    assert_eq!(player_velocity(&mut app).linvel.x, MOVE_SPEED);

    app.world_mut().resource_mut::<PlayerIntent>().run = -1.0;
    app.update();
    assert_eq!(player_velocity(&mut app).linvel.x, -MOVE_SPEED);

    app.world_mut().resource_mut::<PlayerIntent>().run = 0.0;
    app.update();
    assert_eq!(player_velocity(&mut app).linvel.x, 0.0);
}

/// A grounded jump sets the jump velocity and ends the landing episode, so
/// the same platform can re-trigger its popup on the next landing.
#[test]
fn grounded_jump_launches_and_ends_landing_episode() {
    let mut app = player_app();

    app.world_mut()
        .resource_mut::<InteractionState>()
        .on_land(PlatformId(0), Some(SectionId::About));
    app.world_mut().resource_mut::<GroundContact>().grounded = true;
    app.world_mut().resource_mut::<PlayerIntent>().jump = true;

    app.update();

    assert_eq!(player_velocity(&mut app).linvel.y, JUMP_SPEED);
    assert_eq!(
        app.world().resource::<InteractionState>().last_landed(),
        None,
        "an executed jump must clear the gate's platform memory"
    );
}

/// Holding jump in the air does nothing: no velocity change, and the landing
/// episode survives until an actual grounded jump.
#[test]
fn airborne_jump_is_ignored() {
    let mut app = player_app();

    let platform = PlatformId(4);
    app.world_mut()
        .resource_mut::<InteractionState>()
        .on_land(platform, Some(SectionId::Education));
    app.world_mut().resource_mut::<GroundContact>().grounded = false;
    app.world_mut().resource_mut::<PlayerIntent>().jump = true;

    app.update();

    assert_eq!(player_velocity(&mut app).linvel.y, 0.0);
    assert_eq!(
        app.world().resource::<InteractionState>().last_landed(),
        Some(platform)
    );
}
