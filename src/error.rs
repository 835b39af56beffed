//! Game-specific error types.
//!
//! The taxonomy is deliberately small: a popup activation can reference a
//! section the registry does not know (recoverable; gameplay must continue),
//! and the platform layout can be malformed (fatal; this is configuration
//! data, so failing fast at world construction is correct).  Everything else
//! (repeated contacts, popup already open, jump with no platform memory) is
//! normal control flow, not an error.

use crate::content::SectionId;
use std::fmt;

/// Top-level error enum for the game core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameError {
    /// A popup activation referenced a section absent from the content
    /// registry.  Should never occur with the closed `SectionId` enum, but
    /// the contract guards it: the presenter logs and drops the activation.
    UnknownSection {
        /// The section that failed to resolve.
        section: SectionId,
    },

    /// A platform descriptor carries a non-finite coordinate or a position
    /// outside the world bounds.
    InvalidPlatformPosition {
        /// Depth-first index of the offending descriptor in the layout.
        index: usize,
        /// The rejected coordinates.
        x: f32,
        y: f32,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::UnknownSection { section } => {
                write!(f, "no content registered for section '{}'", section)
            }
            GameError::InvalidPlatformPosition { index, x, y } => write!(
                f,
                "platform descriptor #{} has invalid position ({}, {})",
                index, x, y
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;
