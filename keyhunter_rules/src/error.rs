//! Errors raised by rule lookups.

use thiserror::Error;

use crate::world_state::LocationId;

/// Failures resolving a choice against the rules.
///
/// None of these occur in normal play: they mean the graph is malformed or a
/// console returned a value outside the option set it was offered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("location {0} is not part of the graph")]
    UnknownLocation(LocationId),

    #[error("option {choice} is not available at {location}")]
    InvalidChoice { location: LocationId, choice: u8 },

    #[error("option {0} is not a combat choice")]
    InvalidCombatChoice(u8),

    #[error("option {0} is not a hazard choice")]
    InvalidHazardChoice(u8),
}
