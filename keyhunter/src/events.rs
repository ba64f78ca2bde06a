//! Game events - everything the state machine reports to the console.

use keyhunter_rules::{
    DrillKind, EffectOutcome, Foe, HazardKind, Inventory, Item, LocationId, Refusal,
};
use serde::Serialize;

/// A single observable happening, in the order it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Event {
    // Main menu
    Title,
    HowTo,
    Credits,
    Winners(Vec<String>),
    Welcome { name: String },

    // Movement
    Arrived { location: LocationId, first_visit: bool },
    Refused(Refusal),

    // Inventory
    ItemGained(Item),
    ItemAlreadyHeld(Item),
    InventoryShown(Inventory),
    LifeRestored { lives: u32 },
    LivesAlreadyFull,

    // Challenges
    DrillStroke { kind: DrillKind, remaining: u32 },
    DrillCompleted(DrillKind),
    CombatWon(Foe),
    CombatLost(Foe),
    HazardTaken(HazardKind),
    HazardAvoided(HazardKind),

    // Lives
    LifeLost { remaining: u32 },
    Respawned { lives: u32 },

    // Endings
    Victory,
    Defeat,
    WinnerRecorded { name: String },
    LedgerUnavailable,
    Farewell,
}

impl Event {
    /// Check if this event reports a blocked path that loops back to the same menu.
    pub fn is_dead_end(&self) -> bool {
        matches!(self, Event::Refused(Refusal::DeadEnd(_)))
    }

    /// Check if this event ends a run.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Event::Victory | Event::Defeat)
    }
}

impl From<EffectOutcome> for Event {
    fn from(outcome: EffectOutcome) -> Self {
        match outcome {
            EffectOutcome::Gained(item) => Event::ItemGained(item),
            EffectOutcome::AlreadyHeld(item) => Event::ItemAlreadyHeld(item),
            EffectOutcome::LifeRestored { lives } => Event::LifeRestored { lives },
            EffectOutcome::LivesFull => Event::LivesAlreadyFull,
        }
    }
}
