//! Popup presenter: the singleton modal overlay that displays résumé sections.
//!
//! The overlay is spawned **once** at startup and then only mutated in place:
//! title text overwritten, body children replaced, visibility toggled.  It is
//! never despawned or respawned, so repeated activations cause no UI churn.
//!
//! Layout (appears centred over the game world):
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                                             │
//! │        ┌───────────────────────┐  [X]       │
//! │        │  Experience           │            │
//! │        │  Backend Engineer …   │            │
//! │        │  Software Intern …    │            │
//! │        └───────────────────────┘            │
//! │                                             │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Only the systems in this module may mutate [`PopupState`] or the popup
//! entities; everything else observes them through the read accessors.  The
//! player input systems are not gated on popup visibility, so the keyboard
//! keeps driving the sprite while a popup is open.

use crate::config::GameConfig;
use crate::content::{ContentBlock, ContentRegistry, SectionId};
use crate::interaction::SectionActivated;
use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

// ── State ─────────────────────────────────────────────────────────────────────

/// Singleton presenter state, bound 1:1 to the overlay entity tree.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupState {
    visible: bool,
    active_section: Option<SectionId>,
}

impl PopupState {
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn active_section(&self) -> Option<SectionId> {
        self.active_section
    }

    fn set_active(&mut self, section: SectionId) {
        self.visible = true;
        self.active_section = Some(section);
    }

    fn clear(&mut self) {
        self.visible = false;
        self.active_section = None;
    }
}

// ── Component markers ─────────────────────────────────────────────────────────

/// Root node of the overlay; visibility is toggled here.
#[derive(Component)]
pub struct PopupRoot;

/// The single title text slot.
#[derive(Component)]
pub struct PopupTitle;

/// The single body container; its children are replaced per activation.
#[derive(Component)]
pub struct PopupBody;

/// The "X" close button.
#[derive(Component)]
pub struct PopupCloseButton;

// ── Colours ───────────────────────────────────────────────────────────────────

fn card_bg() -> Color {
    Color::srgba(0.97, 0.96, 0.92, 0.97)
}
fn card_border() -> Color {
    Color::srgb(0.25, 0.22, 0.18)
}
fn title_color() -> Color {
    Color::srgb(0.13, 0.12, 0.10)
}
fn heading_color() -> Color {
    Color::srgb(0.20, 0.18, 0.15)
}
fn body_color() -> Color {
    Color::srgb(0.32, 0.30, 0.28)
}
fn link_color() -> Color {
    Color::srgb(0.12, 0.32, 0.65)
}
fn close_bg() -> Color {
    Color::srgb(0.28, 0.06, 0.06)
}
fn close_border() -> Color {
    Color::srgb(0.60, 0.12, 0.12)
}
fn close_text() -> Color {
    Color::srgb(1.0, 0.65, 0.65)
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct PopupPlugin;

impl Plugin for PopupPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PopupState>()
            .init_resource::<ContentRegistry>()
            .add_systems(Startup, setup_popup)
            .add_systems(
                Update,
                (
                    popup_activation_system
                        .after(crate::interaction::platform_landing_system),
                    popup_close_system,
                ),
            );
    }
}

// ── Startup: spawn the overlay once ───────────────────────────────────────────

/// Spawn the hidden overlay: full-screen centring node → card → close button,
/// title slot, body container.
pub fn setup_popup(mut commands: Commands, config: Res<GameConfig>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            Visibility::Hidden,
            ZIndex(100),
            PopupRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::FlexStart,
                        padding: UiRect::all(Val::Px(24.0)),
                        row_gap: Val::Px(10.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(380.0),
                        max_width: Val::Px(540.0),
                        ..default()
                    },
                    BackgroundColor(card_bg()),
                    BorderColor::all(card_border()),
                ))
                .with_children(|card| {
                    // Close button, pinned to the card's top-right corner.
                    card.spawn((
                        Button,
                        Node {
                            width: Val::Px(28.0),
                            height: Val::Px(28.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            align_self: AlignSelf::FlexEnd,
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                        BackgroundColor(close_bg()),
                        BorderColor::all(close_border()),
                        PopupCloseButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("X"),
                            TextFont {
                                font_size: 14.0,
                                ..default()
                            },
                            TextColor(close_text()),
                        ));
                    });

                    // Title slot, overwritten in place on every activation.
                    card.spawn((
                        PopupTitle,
                        Text::new(""),
                        TextFont {
                            font_size: config.popup_title_font_size,
                            ..default()
                        },
                        TextColor(title_color()),
                    ));

                    // Body container; children replaced on every activation.
                    card.spawn((
                        PopupBody,
                        Node {
                            flex_direction: FlexDirection::Column,
                            row_gap: Val::Px(8.0),
                            max_width: Val::Px(480.0),
                            ..default()
                        },
                    ));
                });
        });
}

// ── Update: activation ────────────────────────────────────────────────────────

/// Consume [`SectionActivated`] messages and show the matching content.
///
/// An activation while a different section is visible overwrites the content
/// in place: no stacking, no queueing.  Accordingly only the newest message
/// is rendered: the body children can be despawned at most once per frame,
/// and earlier same-frame activations would be overwritten anyway.  An
/// unknown section is logged and dropped; the session keeps running.
pub fn popup_activation_system(
    mut commands: Commands,
    mut activations: MessageReader<SectionActivated>,
    registry: Res<ContentRegistry>,
    config: Res<GameConfig>,
    mut state: ResMut<PopupState>,
    mut q_root: Query<&mut Visibility, With<PopupRoot>>,
    mut q_title: Query<&mut Text, With<PopupTitle>>,
    q_body: Query<(Entity, Option<&Children>), With<PopupBody>>,
) {
    let Some(activation) = activations.read().last() else {
        return;
    };
    let entry = match registry.entry(activation.section) {
        Ok(entry) => entry,
        Err(err) => {
            error!("Dropping popup activation: {err}");
            return;
        }
    };
    let Ok(mut root_visibility) = q_root.single_mut() else {
        return;
    };
    let Ok(mut title) = q_title.single_mut() else {
        return;
    };
    let Ok((body_entity, body_children)) = q_body.single() else {
        return;
    };

    *title = Text::new(entry.title);

    if let Some(children) = body_children {
        for child in children.iter() {
            commands.entity(child).despawn();
        }
    }
    commands.entity(body_entity).with_children(|body| {
        for block in &entry.body {
            spawn_block(body, block, &config);
        }
    });

    *root_visibility = Visibility::Visible;
    state.set_active(activation.section);
}

/// Render one [`ContentBlock`] into the body container.
fn spawn_block(body: &mut ChildSpawnerCommands<'_>, block: &ContentBlock, config: &GameConfig) {
    match block {
        ContentBlock::Paragraph(text) => {
            body.spawn((
                Text::new(*text),
                TextFont {
                    font_size: config.popup_body_font_size,
                    ..default()
                },
                TextColor(body_color()),
            ));
        }
        ContentBlock::Item { heading, detail } => {
            body.spawn(Node {
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(2.0),
                ..default()
            })
            .with_children(|item| {
                item.spawn((
                    Text::new(*heading),
                    TextFont {
                        font_size: config.popup_heading_font_size,
                        ..default()
                    },
                    TextColor(heading_color()),
                ));
                item.spawn((
                    Text::new(*detail),
                    TextFont {
                        font_size: config.popup_body_font_size,
                        ..default()
                    },
                    TextColor(body_color()),
                ));
            });
        }
        ContentBlock::Link { label, url, detail } => {
            body.spawn(Node {
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(2.0),
                ..default()
            })
            .with_children(|item| {
                item.spawn((
                    Text::new(format!("{label} — {url}")),
                    TextFont {
                        font_size: config.popup_heading_font_size,
                        ..default()
                    },
                    TextColor(link_color()),
                ));
                item.spawn((
                    Text::new(*detail),
                    TextFont {
                        font_size: config.popup_body_font_size,
                        ..default()
                    },
                    TextColor(body_color()),
                ));
            });
        }
    }
}

// ── Update: close ─────────────────────────────────────────────────────────────

/// Handle the close button: hide the overlay and clear the presenter state.
///
/// The interaction gate is deliberately left untouched here: walking off a
/// platform and back onto it without jumping does not reopen its popup.
pub fn popup_close_system(
    q_button: Query<(&Interaction, &Children), (Changed<Interaction>, With<PopupCloseButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut state: ResMut<PopupState>,
    mut q_root: Query<&mut Visibility, With<PopupRoot>>,
) {
    for (interaction, children) in q_button.iter() {
        match interaction {
            Interaction::Pressed => {
                let Ok(mut root_visibility) = q_root.single_mut() else {
                    return;
                };
                *root_visibility = Visibility::Hidden;
                state.clear();
            }
            Interaction::Hovered => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(Color::WHITE);
                    }
                }
            }
            Interaction::None => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(close_text());
                    }
                }
            }
        }
    }
}
