//! The console collaborator - how the state machine asks and tells the player.
//!
//! The machine only ever needs three things from the outside world:
//! - a bounded choice between numbered options
//! - a free-text line (names, minigame tokens)
//! - a place to send [`Event`]s

mod scripted;
mod terminal;

pub use scripted::*;
pub use terminal::*;

use thiserror::Error;

use crate::events::Event;

/// Errors talking to the player.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The input stream ended; nobody is left to answer.
    #[error("input closed")]
    Closed,

    #[error("console I/O failed")]
    Io(#[from] std::io::Error),
}

/// The prompt collaborator consumed by the state machine.
pub trait Console {
    /// Ask until the answer is one of `options`. Never returns anything else.
    fn choose(&mut self, question: &str, options: &[u8]) -> Result<u8, ConsoleError>;

    /// Ask for a single line of free text, without the line ending.
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    /// Report an event to the player.
    fn show(&mut self, event: &Event) -> Result<(), ConsoleError>;
}

/// Why an answer to a bounded choice was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceError {
    NotANumber,
    NotOffered,
}

/// Validate one answer against the offered options.
pub fn parse_choice(input: &str, options: &[u8]) -> Result<u8, ChoiceError> {
    let choice: u8 = input.trim().parse().map_err(|_| ChoiceError::NotANumber)?;
    if options.contains(&choice) {
        Ok(choice)
    } else {
        Err(ChoiceError::NotOffered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("2", &[1, 2]), Ok(2));
        assert_eq!(parse_choice(" 4\n", &[2, 3, 4]), Ok(4));
        assert_eq!(parse_choice("1", &[2, 3, 4]), Err(ChoiceError::NotOffered));
        assert_eq!(parse_choice("north", &[1, 2]), Err(ChoiceError::NotANumber));
        assert_eq!(parse_choice("", &[1]), Err(ChoiceError::NotANumber));
        assert_eq!(parse_choice("-1", &[1]), Err(ChoiceError::NotANumber));
        assert_eq!(parse_choice("300", &[1]), Err(ChoiceError::NotANumber));
    }
}
