//! Landing-episode gating: turns the raw per-step stream of player↔platform
//! contact reports into a deduplicated stream of [`SectionActivated`] messages.
//!
//! ## Flow
//!
//! 1. Rapier keeps a contact pair alive for every physics step the player and
//!    a platform stay in touch, so the same platform is re-reported every
//!    frame while the player rests on it.
//! 2. [`platform_landing_system`] polls those pairs once per frame, keeps the
//!    ones where the player's feet sit on the platform's top face, and feeds
//!    them through [`InteractionState::on_land`].
//! 3. The gate emits at most one activation per *landing episode*: the
//!    interval from first contact until the player jumps.  Walking off a
//!    platform and back without jumping does **not** start a new episode.
//! 4. The same poll derives [`GroundContact`], which the jump logic consumes;
//!    an executed jump calls [`InteractionState::on_jump`] and resets the
//!    episode, so a jump-in-place re-arms the same platform's popup.

use crate::config::GameConfig;
use crate::content::SectionId;
use crate::player::Player;
use crate::world::{Floor, Platform, PlatformId};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

// ── Messages ──────────────────────────────────────────────────────────────────

/// Deduplicated "player landed on a section platform" notification.
/// Exactly one is written per landing episode on a section-bearing platform.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionActivated {
    pub platform: PlatformId,
    pub section: SectionId,
}

// ── Resources ─────────────────────────────────────────────────────────────────

/// The interaction gate: remembers which platform the current landing episode
/// belongs to.  One per session, owned by the `App`.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionState {
    last_landed: Option<PlatformId>,
}

impl InteractionState {
    /// Process one landing report.  Returns the section to activate, or `None`
    /// when the report is a no-op:
    ///
    /// - structural platform (`section == None`): ignored, gate memory kept;
    /// - same platform as the current episode: already active.
    pub fn on_land(
        &mut self,
        platform: PlatformId,
        section: Option<SectionId>,
    ) -> Option<SectionId> {
        let section = section?;
        if self.last_landed == Some(platform) {
            return None;
        }
        self.last_landed = Some(platform);
        Some(section)
    }

    /// End the current landing episode.  Called when a jump is executed, so
    /// the next landing (even on the same platform) activates again.
    pub fn on_jump(&mut self) {
        self.last_landed = None;
    }

    /// The platform of the current landing episode, if any.
    pub fn last_landed(&self) -> Option<PlatformId> {
        self.last_landed
    }
}

/// True while the player stands on a platform or the world floor this frame.
/// Recomputed by [`platform_landing_system`] every frame.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct GroundContact {
    pub grounded: bool,
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionState>()
            .init_resource::<GroundContact>()
            .add_message::<SectionActivated>()
            .add_systems(Update, platform_landing_system);
    }
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Poll the player's active contact pairs, classify top-face contacts as
/// landings, and drive the gate.
///
/// A contact only counts as a landing when the player's bottom edge sits at or
/// above the platform's top edge (within `landing_tolerance`); side brushes
/// against a platform's edge neither ground the player nor open popups.
pub fn platform_landing_system(
    rapier_context: ReadRapierContext,
    q_player: Query<(Entity, &Transform), With<Player>>,
    q_platforms: Query<(&Transform, &Platform)>,
    q_floor: Query<(), With<Floor>>,
    mut gate: ResMut<InteractionState>,
    mut ground: ResMut<GroundContact>,
    mut activations: MessageWriter<SectionActivated>,
    config: Res<GameConfig>,
) {
    let Ok((player_entity, player_transform)) = q_player.single() else {
        return;
    };
    let Ok(rapier) = rapier_context.single() else {
        return;
    };

    let player_bottom = player_transform.translation.y - config.player_half_height;
    let mut grounded = false;

    for contact_pair in rapier.contact_pairs_with(player_entity) {
        if !contact_pair.has_any_active_contact() {
            continue;
        }
        let Some(e1) = contact_pair.collider1() else {
            continue;
        };
        let Some(e2) = contact_pair.collider2() else {
            continue;
        };
        let other = if e1 == player_entity {
            e2
        } else if e2 == player_entity {
            e1
        } else {
            continue;
        };

        if q_floor.contains(other) {
            grounded = true;
            continue;
        }

        let Ok((platform_transform, platform)) = q_platforms.get(other) else {
            continue;
        };
        let platform_top = platform_transform.translation.y + config.platform_half_height;
        if player_bottom < platform_top - config.landing_tolerance {
            continue;
        }

        grounded = true;
        if let Some(section) = gate.on_land(platform.id, platform.section) {
            info!("Landed on '{section}' platform (#{})", platform.id.0);
            activations.write(SectionActivated {
                platform: platform.id,
                section,
            });
        }
    }

    ground.grounded = grounded;
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: PlatformId = PlatformId(0);
    const P2: PlatformId = PlatformId(1);
    const P3: PlatformId = PlatformId(2);

    #[test]
    fn repeated_landing_reports_activate_once() {
        let mut gate = InteractionState::default();
        let mut activations = 0;
        for _ in 0..5 {
            if gate.on_land(P1, Some(SectionId::About)).is_some() {
                activations += 1;
            }
        }
        assert_eq!(activations, 1);
        assert_eq!(gate.last_landed(), Some(P1));
    }

    #[test]
    fn switching_platforms_activates_both_in_order() {
        let mut gate = InteractionState::default();
        let first = gate.on_land(P1, Some(SectionId::About));
        let second = gate.on_land(P2, Some(SectionId::Contact));
        assert_eq!(first, Some(SectionId::About));
        assert_eq!(second, Some(SectionId::Contact));
        assert_eq!(gate.last_landed(), Some(P2));
    }

    #[test]
    fn jump_rearms_the_same_platform() {
        let mut gate = InteractionState::default();
        assert!(gate.on_land(P1, Some(SectionId::Projects)).is_some());
        assert!(gate.on_land(P1, Some(SectionId::Projects)).is_none());

        gate.on_jump();
        assert_eq!(gate.last_landed(), None);
        assert_eq!(
            gate.on_land(P1, Some(SectionId::Projects)),
            Some(SectionId::Projects)
        );
    }

    #[test]
    fn structural_platforms_never_activate_and_keep_gate_memory() {
        let mut gate = InteractionState::default();
        assert!(gate.on_land(P1, Some(SectionId::About)).is_some());

        // Stepping onto a structural platform is invisible to the gate.
        assert!(gate.on_land(P2, None).is_none());
        assert_eq!(gate.last_landed(), Some(P1));
    }

    #[test]
    fn same_section_on_two_platforms_activates_twice() {
        // P1 and P3 both carry 'About'; P2 is structural.  The sequence
        // land(P1), land(P1), land(P2), land(P3) must yield exactly two
        // activations: the gate keys on platform identity, not section.
        let mut gate = InteractionState::default();
        let calls = [
            gate.on_land(P1, Some(SectionId::About)),
            gate.on_land(P1, Some(SectionId::About)),
            gate.on_land(P2, None),
            gate.on_land(P3, Some(SectionId::About)),
        ];
        let activated: Vec<_> = calls.into_iter().flatten().collect();
        assert_eq!(activated, [SectionId::About, SectionId::About]);
    }
}
