//! Engine-level errors.

use keyhunter_rules::RulesError;
use thiserror::Error;

use crate::console::ConsoleError;

/// Failures that stop the state machine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error(transparent)]
    Rules(#[from] RulesError),
}

impl EngineError {
    /// Check if the player simply stopped providing input.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, EngineError::Console(ConsoleError::Closed))
    }
}
