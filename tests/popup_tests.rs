//! Headless integration tests for the popup presenter.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering, no physics —
//! so they run fast and deterministically in CI.  UI components (`Node`,
//! `Text`, `Visibility`) are plain data here; the systems under test mutate
//! them exactly as they would in a windowed session.
//!
//! Covered scenarios:
//! 1. A `SectionActivated` message shows the overlay with the registry's
//!    exact title and body shape.
//! 2. A second activation overwrites the surface in place, not a second overlay.
//! 3. The close button hides the overlay and clears the presenter state.
//! 4. Closing leaves the interaction gate's landing episode intact (the
//!    documented close/jump asymmetry).

use bevy::prelude::*;
use platfolio::config::GameConfig;
use platfolio::content::{ContentRegistry, SectionId};
use platfolio::interaction::{InteractionState, SectionActivated};
use platfolio::popup::{self, PopupBody, PopupCloseButton, PopupRoot, PopupState, PopupTitle};
use platfolio::world::PlatformId;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a minimal headless app with the popup presenter wired up.
fn popup_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(GameConfig::default());
    app.init_resource::<ContentRegistry>();
    app.init_resource::<PopupState>();
    app.init_resource::<InteractionState>();
    app.add_message::<SectionActivated>();
    app.add_systems(Startup, popup::setup_popup);
    app.add_systems(
        Update,
        (popup::popup_activation_system, popup::popup_close_system),
    );
    app.update(); // run Startup so the overlay exists
    app
}

fn activate(app: &mut App, platform: u32, section: SectionId) {
    app.world_mut()
        .resource_mut::<Messages<SectionActivated>>()
        .write(SectionActivated {
            platform: PlatformId(platform),
            section,
        });
    app.update();
}

fn title_text(app: &mut App) -> String {
    let mut query = app
        .world_mut()
        .query_filtered::<&Text, With<PopupTitle>>();
    query.single(app.world()).unwrap().0.clone()
}

fn root_visibility(app: &mut App) -> Visibility {
    let mut query = app
        .world_mut()
        .query_filtered::<&Visibility, With<PopupRoot>>();
    *query.single(app.world()).unwrap()
}

fn body_block_count(app: &mut App) -> usize {
    let mut query = app
        .world_mut()
        .query_filtered::<&Children, With<PopupBody>>();
    query
        .single(app.world())
        .map(|children| children.len())
        .unwrap_or(0)
}

fn press_close(app: &mut App) {
    let mut query = app
        .world_mut()
        .query_filtered::<Entity, With<PopupCloseButton>>();
    let button = query.single(app.world()).unwrap();
    app.world_mut()
        .entity_mut(button)
        .insert(Interaction::Pressed);
    app.update();
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// Activating `Contact` shows the overlay with the registry's exact content.
#[test]
fn activation_shows_section_content() {
    let mut app = popup_app();
    assert_eq!(root_visibility(&mut app), Visibility::Hidden);

    activate(&mut app, 8, SectionId::Contact);

    let state = app.world().resource::<PopupState>();
    assert!(state.visible());
    assert_eq!(state.active_section(), Some(SectionId::Contact));
    assert_eq!(root_visibility(&mut app), Visibility::Visible);
    assert_eq!(title_text(&mut app), "Contact");

    let registry = app.world().resource::<ContentRegistry>();
    let expected_blocks = registry.entry(SectionId::Contact).unwrap().body.len();
    assert_eq!(body_block_count(&mut app), expected_blocks);
}

/// A second activation overwrites the single overlay in place.
#[test]
fn activation_overwrites_previous_content() {
    let mut app = popup_app();
    activate(&mut app, 0, SectionId::About);
    activate(&mut app, 2, SectionId::Experience);

    assert_eq!(title_text(&mut app), "Experience");
    assert_eq!(
        app.world().resource::<PopupState>().active_section(),
        Some(SectionId::Experience)
    );

    // Still exactly one overlay: the surface is mutated, never recreated.
    let mut roots = app.world_mut().query_filtered::<(), With<PopupRoot>>();
    assert_eq!(roots.iter(app.world()).count(), 1);
}

/// The close button hides the overlay and clears the presenter state.
#[test]
fn close_hides_overlay_and_clears_state() {
    let mut app = popup_app();
    activate(&mut app, 6, SectionId::Projects);
    assert!(app.world().resource::<PopupState>().visible());

    press_close(&mut app);

    let state = app.world().resource::<PopupState>();
    assert!(!state.visible());
    assert_eq!(state.active_section(), None);
    assert_eq!(root_visibility(&mut app), Visibility::Hidden);
}

/// Closing the popup must NOT end the landing episode: walking off the same
/// platform and back without jumping does not reopen it.  Only a jump resets
/// the gate.
#[test]
fn close_leaves_landing_episode_intact() {
    let mut app = popup_app();

    let platform = PlatformId(6);
    app.world_mut()
        .resource_mut::<InteractionState>()
        .on_land(platform, Some(SectionId::Projects));
    activate(&mut app, 6, SectionId::Projects);

    press_close(&mut app);

    let gate = app.world().resource::<InteractionState>();
    assert_eq!(
        gate.last_landed(),
        Some(platform),
        "close() must leave the gate's platform memory unchanged"
    );
}
