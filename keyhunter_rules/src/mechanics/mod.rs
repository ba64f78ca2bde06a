//! Game mechanics: arrival effects, the challenge shapes and the life-loss transition.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entities::{Inventory, Item};
use crate::error::RulesError;
use crate::world_state::LocationId;

/// Confirmations a repeated-confirmation minigame needs.
pub const DRILL_REPETITIONS: u32 = 5;

/// Something that happens to the inventory when a location is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Pick an item up. Already-held items are left untouched.
    Grant(Item),
    /// Eat a meal and recover one life, up to the cap.
    RestoreLife,
}

/// What applying an [`Effect`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectOutcome {
    Gained(Item),
    AlreadyHeld(Item),
    LifeRestored { lives: u32 },
    LivesFull,
}

impl Effect {
    /// Apply the effect. Pickups are idempotent: a held item is never counted twice.
    pub fn apply(&self, inventory: &mut Inventory) -> EffectOutcome {
        match *self {
            Effect::Grant(item) if inventory.has(item) => EffectOutcome::AlreadyHeld(item),
            Effect::Grant(item) => {
                inventory.increment(item, 1);
                EffectOutcome::Gained(item)
            }
            Effect::RestoreLife => {
                if inventory.gain_life() {
                    EffectOutcome::LifeRestored {
                        lives: inventory.lives(),
                    }
                } else {
                    EffectOutcome::LivesFull
                }
            }
        }
    }
}

/// The interactive challenges a location can hand off to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Challenge {
    /// Type a token [`DRILL_REPETITIONS`] times, then move on.
    Drill { kind: DrillKind, then: LocationId },
    Combat(Combat),
    Hazard(Hazard),
}

/// Repeated-confirmation minigames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrillKind {
    /// Digging up a grave.
    Dig,
    /// Pulling free of a spider web.
    WebEscape,
}

impl DrillKind {
    /// The literal token the player has to type.
    pub fn token(&self) -> &'static str {
        match self {
            DrillKind::Dig => "dig",
            DrillKind::WebEscape => "p",
        }
    }
}

/// Result of submitting one line to a [`Drill`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillProgress {
    /// Input did not match; nothing was counted.
    Rejected,
    Confirmed { remaining: u32 },
    Completed,
}

/// State of a repeated-confirmation minigame in progress.
///
/// There is no failure branch; it only paces the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drill {
    kind: DrillKind,
    required: u32,
    confirmed: u32,
}

impl Drill {
    /// Start a drill needing [`DRILL_REPETITIONS`] confirmations.
    pub fn new(kind: DrillKind) -> Self {
        Self {
            kind,
            required: DRILL_REPETITIONS,
            confirmed: 0,
        }
    }

    pub fn kind(&self) -> DrillKind {
        self.kind
    }

    /// Confirmations still needed.
    pub fn remaining(&self) -> u32 {
        self.required - self.confirmed
    }

    pub fn is_complete(&self) -> bool {
        self.confirmed >= self.required
    }

    /// Submit one line of input. Matching ignores case and surrounding whitespace.
    pub fn submit(&mut self, input: &str) -> DrillProgress {
        if self.is_complete() {
            return DrillProgress::Completed;
        }
        if !input.trim().eq_ignore_ascii_case(self.kind.token()) {
            return DrillProgress::Rejected;
        }

        self.confirmed += 1;
        debug!(kind = ?self.kind, remaining = self.remaining(), "drill confirmation");
        if self.is_complete() {
            DrillProgress::Completed
        } else {
            DrillProgress::Confirmed {
                remaining: self.remaining(),
            }
        }
    }
}

/// Creatures that can be fought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Foe {
    GiantSpider,
}

/// A resource-choice fight: pick an item, and only one of them works.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combat {
    pub foe: Foe,
    /// Offered as options `1..=options.len()`.
    pub options: Vec<Item>,
    pub winning: Item,
    pub victory: LocationId,
}

/// Result of a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Victory(LocationId),
    Defeat,
}

impl Combat {
    /// Option numbers to offer.
    pub fn choices(&self) -> Vec<u8> {
        (1..=self.options.len() as u8).collect()
    }

    /// Item picked by an option number.
    pub fn item_for(&self, choice: u8) -> Result<Item, RulesError> {
        choice
            .checked_sub(1)
            .and_then(|index| self.options.get(index as usize))
            .copied()
            .ok_or(RulesError::InvalidCombatChoice(choice))
    }

    /// Resolve a choice. Winning requires picking the winning item while actually holding it.
    pub fn resolve(&self, choice: u8, inventory: &Inventory) -> Result<CombatOutcome, RulesError> {
        let item = self.item_for(choice)?;
        if item == self.winning && inventory.has(item) {
            Ok(CombatOutcome::Victory(self.victory))
        } else {
            Ok(CombatOutcome::Defeat)
        }
    }
}

/// Dangers that can be risked or avoided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardKind {
    /// The church basement stairs, slick with water from a burst pipe.
    FloodedStairs,
}

/// A yes/no decision where "yes" always costs a life.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hazard {
    pub kind: HazardKind,
    pub safe: LocationId,
}

/// Result of a hazard decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardOutcome {
    Injured,
    Avoided(LocationId),
}

impl Hazard {
    pub const PROCEED: u8 = 1;
    pub const TURN_BACK: u8 = 2;

    /// Option numbers to offer.
    pub fn choices(&self) -> Vec<u8> {
        vec![Self::PROCEED, Self::TURN_BACK]
    }

    pub fn resolve(&self, choice: u8) -> Result<HazardOutcome, RulesError> {
        match choice {
            Self::PROCEED => Ok(HazardOutcome::Injured),
            Self::TURN_BACK => Ok(HazardOutcome::Avoided(self.safe)),
            other => Err(RulesError::InvalidHazardChoice(other)),
        }
    }
}

/// Result of the shared life-loss transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeLoss {
    /// Lives remain; the player wakes at the hub with items kept.
    Respawn { remaining: u32 },
    Dead,
}

/// Take one life and decide whether the run continues.
pub fn lose_life(inventory: &mut Inventory) -> LifeLoss {
    let remaining = inventory.lose_life();
    if remaining == 0 {
        LifeLoss::Dead
    } else {
        LifeLoss::Respawn { remaining }
    }
}
