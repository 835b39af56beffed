//! Centralised gameplay and layout constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::GameConfig`] mirrors every constant and can override any
//! of them from `assets/game.toml` without recompiling.

// ── World Bounds ──────────────────────────────────────────────────────────────

/// Total traversable world width (world units, 1 unit = 1 px at default zoom).
///
/// The platform run ends around x = 2200; the remaining width gives the camera
/// room to settle at the right edge.
pub const WORLD_WIDTH: f32 = 2500.0;

/// Total world height. Matches the window height, so the camera only ever
/// scrolls horizontally.
pub const WORLD_HEIGHT: f32 = 600.0;

/// Window width in physical pixels.
pub const WINDOW_WIDTH: f32 = 800.0;

/// Window height in physical pixels.
pub const WINDOW_HEIGHT: f32 = 600.0;

/// Half-thickness of the invisible boundary colliders enclosing the world.
pub const BOUNDARY_HALF_THICKNESS: f32 = 20.0;

// ── Physics ───────────────────────────────────────────────────────────────────

/// Downward gravity applied to the player (units/s²).
///
/// Tuned together with `JUMP_SPEED`: at 300/330 a full jump clears the 50-unit
/// height step between adjacent platforms with a comfortable margin.
pub const GRAVITY: f32 = 300.0;

/// Horizontal run speed while an arrow key is held (units/s).
pub const MOVE_SPEED: f32 = 160.0;

/// Upward velocity applied on jump (units/s).
pub const JUMP_SPEED: f32 = 330.0;

/// Player restitution. A small bounce on landing reads as weight without
/// launching the sprite back off the platform.
pub const PLAYER_BOUNCE: f32 = 0.2;

// ── Entity Geometry ───────────────────────────────────────────────────────────

/// Player collider half-width (world units).
pub const PLAYER_HALF_WIDTH: f32 = 16.0;

/// Player collider half-height (world units).
pub const PLAYER_HALF_HEIGHT: f32 = 24.0;

/// Platform collider half-width (world units).
///
/// 120 units across leaves a 30-unit horizontal gap between adjacent platforms
/// in the shipped layout: jumpable, but not walkable.
pub const PLATFORM_HALF_WIDTH: f32 = 60.0;

/// Platform collider half-height (world units).
pub const PLATFORM_HALF_HEIGHT: f32 = 12.0;

/// Player spawn position (world units, y-up, ground at y = 0).
pub const PLAYER_START_X: f32 = 100.0;
pub const PLAYER_START_Y: f32 = 150.0;

// ── Landing Detection ─────────────────────────────────────────────────────────

/// Vertical slack when classifying a contact as a top-of-platform landing.
///
/// The player's bottom edge must sit no more than this far below the platform's
/// top edge. Too small and genuine landings are missed on the frame the solver
/// still reports slight penetration; too large and side brushes near the top
/// corner count as landings.
pub const LANDING_TOLERANCE: f32 = 6.0;

// ── Camera ────────────────────────────────────────────────────────────────────

/// Width of the camera dead-zone: the player can move this far horizontally
/// before the camera starts tracking.
pub const CAMERA_DEADZONE_WIDTH: f32 = 160.0;

/// Height of the camera dead-zone.
pub const CAMERA_DEADZONE_HEIGHT: f32 = 300.0;

// ── Labels & Popup ────────────────────────────────────────────────────────────

/// Vertical offset of a section label above its platform centre (world units).
pub const LABEL_OFFSET_Y: f32 = 50.0;

/// Font size of the floating section labels.
pub const LABEL_FONT_SIZE: f32 = 24.0;

/// Font size of the popup title slot.
pub const POPUP_TITLE_FONT_SIZE: f32 = 26.0;

/// Font size of item headings inside the popup body.
pub const POPUP_HEADING_FONT_SIZE: f32 = 16.0;

/// Font size of paragraph and detail text inside the popup body.
pub const POPUP_BODY_FONT_SIZE: f32 = 15.0;
