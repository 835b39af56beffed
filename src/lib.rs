//! Platfolio — a side-scrolling platformer that is also a résumé.
//!
//! The playable sprite runs and jumps across a fixed sequence of platforms;
//! landing on a labelled platform opens a modal overlay with that section of
//! the résumé.  Physics, collision detection and rendering are delegated to
//! Bevy + Rapier; this crate owns the platform graph, the landing-episode
//! gating, the content registry, and the popup presenter.

pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod graphics;
pub mod interaction;
pub mod player;
pub mod popup;
pub mod world;
