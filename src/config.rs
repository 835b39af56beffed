//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<GameConfig>` to any system parameter list and read values
//! with `config.move_speed`, `config.jump_speed`, etc.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`.

use crate::constants::*;
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable gameplay and layout configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset by setting the value in
/// `assets/game.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── World Bounds ─────────────────────────────────────────────────────────
    pub world_width: f32,
    pub world_height: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub boundary_half_thickness: f32,

    // ── Physics ──────────────────────────────────────────────────────────────
    pub gravity: f32,
    pub move_speed: f32,
    pub jump_speed: f32,
    pub player_bounce: f32,

    // ── Entity Geometry ──────────────────────────────────────────────────────
    pub player_half_width: f32,
    pub player_half_height: f32,
    pub platform_half_width: f32,
    pub platform_half_height: f32,
    pub player_start_x: f32,
    pub player_start_y: f32,

    // ── Landing Detection ────────────────────────────────────────────────────
    pub landing_tolerance: f32,

    // ── Camera ───────────────────────────────────────────────────────────────
    pub camera_deadzone_width: f32,
    pub camera_deadzone_height: f32,

    // ── Labels & Popup ───────────────────────────────────────────────────────
    pub label_offset_y: f32,
    pub label_font_size: f32,
    pub popup_title_font_size: f32,
    pub popup_heading_font_size: f32,
    pub popup_body_font_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // World Bounds
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            boundary_half_thickness: BOUNDARY_HALF_THICKNESS,
            // Physics
            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            jump_speed: JUMP_SPEED,
            player_bounce: PLAYER_BOUNCE,
            // Entity Geometry
            player_half_width: PLAYER_HALF_WIDTH,
            player_half_height: PLAYER_HALF_HEIGHT,
            platform_half_width: PLATFORM_HALF_WIDTH,
            platform_half_height: PLATFORM_HALF_HEIGHT,
            player_start_x: PLAYER_START_X,
            player_start_y: PLAYER_START_Y,
            // Landing Detection
            landing_tolerance: LANDING_TOLERANCE,
            // Camera
            camera_deadzone_width: CAMERA_DEADZONE_WIDTH,
            camera_deadzone_height: CAMERA_DEADZONE_HEIGHT,
            // Labels & Popup
            label_offset_y: LABEL_OFFSET_Y,
            label_font_size: LABEL_FONT_SIZE,
            popup_title_font_size: POPUP_TITLE_FONT_SIZE,
            popup_heading_font_size: POPUP_HEADING_FONT_SIZE,
            popup_body_font_size: POPUP_BODY_FONT_SIZE,
        }
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  TOML parse errors are printed
/// to stderr but do not abort the game.  A missing file is silently ignored
/// (defaults are already in place from `insert_resource`).
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    let path = "assets/game.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<GameConfig>(&contents) {
            Ok(loaded) => {
                *config = loaded;
                println!("✓ Loaded game config from {path}");
            }
            Err(e) => {
                eprintln!("⚠ Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            println!("ℹ No {path} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let config: GameConfig = toml::from_str("jump_speed = 400.0").unwrap();
        assert_eq!(config.jump_speed, 400.0);
        assert_eq!(config.move_speed, MOVE_SPEED);
        assert_eq!(config.world_width, WORLD_WIDTH);
    }

    #[test]
    fn empty_toml_yields_compiled_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config.gravity, GRAVITY);
        assert_eq!(config.landing_tolerance, LANDING_TOLERANCE);
    }
}
