//! World construction: the platform graph, its validation, and the spawn pass.
//!
//! The platform graph is a fixed ordered sequence of [`PlatformDescriptor`]s
//! produced by [`platform_layout`]: pure, deterministic, run once.  The spawn
//! pass turns each descriptor into a static Rapier collider plus a coloured
//! sprite, hangs a [`Text2d`] label over every section-bearing platform, and
//! encloses the world in boundary colliders so the player cannot leave it.
//!
//! Layout validation is fatal: a malformed descriptor is configuration data,
//! not runtime data, so the spawn system fails fast instead of limping on.

use crate::config::GameConfig;
use crate::content::SectionId;
use crate::error::{GameError, GameResult};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

// ── Platform graph ────────────────────────────────────────────────────────────

/// Stable identity of a platform in the graph: its depth-first index in the
/// layout.  The interaction gate stores these instead of ECS entity ids so the
/// gating logic stays independent of the spawn pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformId(pub u32);

/// One platform in the fixed world layout.  Immutable after construction.
#[derive(Debug, Clone)]
pub struct PlatformDescriptor {
    /// Centre position in world units (y-up, ground at y = 0).
    pub position: Vec2,
    /// `None` marks a structural stepping-stone that never opens a popup.
    pub section: Option<SectionId>,
    /// Nested child platforms for multi-entry sections.  The shipped layout
    /// has none; construction, validation and spawning all recurse over this,
    /// so a nested section reuses the gate contract unchanged.
    pub children: Vec<PlatformDescriptor>,
}

impl PlatformDescriptor {
    fn section(x: f32, y: f32, section: SectionId) -> Self {
        Self {
            position: Vec2::new(x, y),
            section: Some(section),
            children: Vec::new(),
        }
    }

    fn structural(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            section: None,
            children: Vec::new(),
        }
    }
}

/// The fixed platform run: five section platforms interleaved with structural
/// stepping stones, rising and falling across the 2500-unit world.
pub fn platform_layout() -> Vec<PlatformDescriptor> {
    vec![
        PlatformDescriptor::section(250.0, 100.0, SectionId::About),
        PlatformDescriptor::structural(400.0, 150.0),
        PlatformDescriptor::section(550.0, 200.0, SectionId::Experience),
        PlatformDescriptor::structural(700.0, 250.0),
        PlatformDescriptor::section(850.0, 300.0, SectionId::Education),
        PlatformDescriptor::structural(1000.0, 250.0),
        PlatformDescriptor::section(1150.0, 200.0, SectionId::Projects),
        PlatformDescriptor::structural(1300.0, 150.0),
        PlatformDescriptor::section(1450.0, 100.0, SectionId::Contact),
        PlatformDescriptor::structural(1600.0, 150.0),
        PlatformDescriptor::structural(1750.0, 200.0),
        PlatformDescriptor::structural(1900.0, 250.0),
        PlatformDescriptor::structural(2050.0, 300.0),
        PlatformDescriptor::structural(2200.0, 350.0),
    ]
}

/// Reject layouts containing non-finite or out-of-bounds positions, recursing
/// into child descriptors.  Returns the total descriptor count on success.
pub fn validate_layout(
    layout: &[PlatformDescriptor],
    world_width: f32,
    world_height: f32,
) -> GameResult<u32> {
    fn walk(
        descriptors: &[PlatformDescriptor],
        world_width: f32,
        world_height: f32,
        next_index: &mut u32,
    ) -> GameResult<()> {
        for descriptor in descriptors {
            let Vec2 { x, y } = descriptor.position;
            let in_bounds =
                x.is_finite() && y.is_finite() && (0.0..=world_width).contains(&x) && (0.0..=world_height).contains(&y);
            if !in_bounds {
                return Err(GameError::InvalidPlatformPosition {
                    index: *next_index as usize,
                    x,
                    y,
                });
            }
            *next_index += 1;
            walk(&descriptor.children, world_width, world_height, next_index)?;
        }
        Ok(())
    }

    let mut count = 0;
    walk(layout, world_width, world_height, &mut count)?;
    Ok(count)
}

// ── Components ────────────────────────────────────────────────────────────────

/// ECS side of a spawned platform: graph identity plus its section key.
#[derive(Component, Debug, Clone, Copy)]
pub struct Platform {
    pub id: PlatformId,
    pub section: Option<SectionId>,
}

/// Marker for the world floor.  Grounds the player for jumping but never
/// participates in section activation.
#[derive(Component)]
pub struct Floor;

/// Marker for the remaining boundary colliders (walls and ceiling).
#[derive(Component)]
pub struct WorldBoundary;

/// Marker for the floating section labels.
#[derive(Component)]
pub struct SectionLabel;

// ── Colours ───────────────────────────────────────────────────────────────────

fn platform_color() -> Color {
    Color::srgb(0.36, 0.25, 0.16)
}
fn platform_top_color() -> Color {
    Color::srgb(0.30, 0.62, 0.28)
}
fn label_color() -> Color {
    Color::srgb(0.10, 0.10, 0.12)
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            spawn_world.after(crate::config::load_game_config),
        );
    }
}

// ── Spawn pass ────────────────────────────────────────────────────────────────

/// Validate the layout, then spawn every platform (depth-first, so
/// [`PlatformId`]s match validation indices), the section labels, and the
/// world boundary colliders.
pub fn spawn_world(mut commands: Commands, config: Res<GameConfig>) {
    let layout = platform_layout();
    let count = match validate_layout(&layout, config.world_width, config.world_height) {
        Ok(count) => count,
        Err(err) => panic!("world layout rejected: {err}"),
    };

    let mut next_id = 0;
    spawn_platforms(&mut commands, &layout, &config, &mut next_id);
    spawn_boundaries(&mut commands, &config);

    info!("Spawned {count} platforms across a {}×{} world", config.world_width, config.world_height);
}

fn spawn_platforms(
    commands: &mut Commands,
    descriptors: &[PlatformDescriptor],
    config: &GameConfig,
    next_id: &mut u32,
) {
    for descriptor in descriptors {
        let id = PlatformId(*next_id);
        *next_id += 1;

        let size = Vec2::new(
            config.platform_half_width * 2.0,
            config.platform_half_height * 2.0,
        );
        let color = if descriptor.section.is_some() {
            platform_top_color()
        } else {
            platform_color()
        };

        commands.spawn((
            Platform {
                id,
                section: descriptor.section,
            },
            Sprite::from_color(color, size),
            Transform::from_translation(descriptor.position.extend(0.0)),
            RigidBody::Fixed,
            Collider::cuboid(config.platform_half_width, config.platform_half_height),
            Friction::coefficient(1.0),
        ));

        if let Some(section) = descriptor.section {
            commands.spawn((
                SectionLabel,
                Text2d::new(section.label()),
                TextFont {
                    font_size: config.label_font_size,
                    ..default()
                },
                TextColor(label_color()),
                Transform::from_translation(
                    (descriptor.position + Vec2::new(0.0, config.label_offset_y)).extend(1.0),
                ),
            ));
        }

        spawn_platforms(commands, &descriptor.children, config, next_id);
    }
}

/// Enclose the world: a floor the player can stand on, two walls, and a
/// ceiling.  All static, all invisible.
fn spawn_boundaries(commands: &mut Commands, config: &GameConfig) {
    let w = config.world_width;
    let h = config.world_height;
    let t = config.boundary_half_thickness;

    // Floor sits just below y = 0 so the player's feet rest on the ground line.
    commands.spawn((
        Floor,
        RigidBody::Fixed,
        Collider::cuboid(w * 0.5 + t, t),
        Transform::from_xyz(w * 0.5, -t, 0.0),
        Friction::coefficient(1.0),
    ));

    for (x, y, half_x, half_y) in [
        (-t, h * 0.5, t, h * 0.5 + t),     // left wall
        (w + t, h * 0.5, t, h * 0.5 + t),  // right wall
        (w * 0.5, h + t, w * 0.5 + t, t),  // ceiling
    ] {
        commands.spawn((
            WorldBoundary,
            RigidBody::Fixed,
            Collider::cuboid(half_x, half_y),
            Transform::from_xyz(x, y, 0.0),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};

    #[test]
    fn shipped_layout_validates() {
        let layout = platform_layout();
        assert_eq!(validate_layout(&layout, WORLD_WIDTH, WORLD_HEIGHT), Ok(14));
    }

    #[test]
    fn sections_appear_in_resume_order() {
        let sections: Vec<_> = platform_layout()
            .iter()
            .filter_map(|d| d.section)
            .collect();
        assert_eq!(sections, SectionId::ALL);
    }

    #[test]
    fn layout_alternates_sections_with_stepping_stones() {
        let layout = platform_layout();
        for pair in layout[..9].windows(2) {
            assert_ne!(
                pair[0].section.is_some(),
                pair[1].section.is_some(),
                "section platforms must be separated by structural ones"
            );
        }
    }

    #[test]
    fn out_of_bounds_position_is_rejected() {
        let mut layout = platform_layout();
        layout[3].position.x = WORLD_WIDTH + 1.0;
        assert_eq!(
            validate_layout(&layout, WORLD_WIDTH, WORLD_HEIGHT),
            Err(GameError::InvalidPlatformPosition {
                index: 3,
                x: WORLD_WIDTH + 1.0,
                y: 250.0,
            })
        );
    }

    #[test]
    fn non_finite_position_is_rejected() {
        let mut layout = platform_layout();
        layout[0].position.y = f32::NAN;
        assert!(validate_layout(&layout, WORLD_WIDTH, WORLD_HEIGHT).is_err());
    }

    #[test]
    fn child_descriptors_are_validated_and_counted() {
        let mut layout = platform_layout();
        layout[4]
            .children
            .push(PlatformDescriptor::structural(900.0, 400.0));
        assert_eq!(validate_layout(&layout, WORLD_WIDTH, WORLD_HEIGHT), Ok(15));

        layout[4].children[0].position.y = -50.0;
        // Child index follows its parent depth-first: platform #4's first
        // child is descriptor #5.
        assert_eq!(
            validate_layout(&layout, WORLD_WIDTH, WORLD_HEIGHT),
            Err(GameError::InvalidPlatformPosition {
                index: 5,
                x: 900.0,
                y: -50.0,
            })
        );
    }
}
