//! # Keyhunter
//!
//! The game engine for Keyhunter: The Lost Temple of Cranmore. This crate
//! drives `keyhunter_rules` through an explicit state machine and talks to the
//! player through a [`Console`].
//!
//! ## Core Components
//!
//! - **machine**: The game state machine (main menu, playing, won, lost)
//! - **console**: The bounded-choice prompt collaborator and its implementations
//! - **events**: Everything observable the machine reports to the console
//! - **narration**: Text for events and locations
//! - **ledger**: The append-only previous-winners list
//! - **config**: Optional `keyhunter.toml` settings

pub mod config;
pub mod console;
pub mod error;
pub mod events;
pub mod ledger;
pub mod machine;
pub mod narration;

pub use config::*;
pub use console::*;
pub use error::*;
pub use events::*;
pub use ledger::*;
pub use machine::*;
