//! # Keyhunter Rules
//!
//! The rules crate - items, the inventory store, the location graph and the
//! challenge mechanics. Everything here is deterministic and free of I/O; the
//! `keyhunter` crate drives it through a state machine and a console.

pub mod entities;
pub mod error;
pub mod mechanics;
pub mod world_state;

pub use entities::*;
pub use error::*;
pub use mechanics::*;
pub use world_state::*;
