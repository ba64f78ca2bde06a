//! Item definitions for the hunt.

mod inventory;

pub use inventory::*;

use serde::{Deserialize, Serialize};

/// The four major areas around the crossroads, each hiding one skeleton key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Area {
    Town,
    Mine,
    Lake,
    Forest,
}

impl Area {
    /// Every area, in the order the keys are listed.
    pub const ALL: [Area; 4] = [Area::Town, Area::Mine, Area::Lake, Area::Forest];

    /// Lowercase name used inside item names.
    pub fn name(&self) -> &'static str {
        match self {
            Area::Town => "town",
            Area::Mine => "mine",
            Area::Lake => "lake",
            Area::Forest => "forest",
        }
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the player can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Item {
    /// One of the four win-gating keys.
    SkeletonKey(Area),
    OrnateKey,
    Matches,
    Pickaxe,
    Crowbar,
    Machete,
    DivingGear,
    /// Listed in the inventory; no location hands it out yet.
    CabinKey,
    GraveClue,
}

impl Item {
    /// The skeleton keys required to win.
    pub const SKELETON_KEYS: [Item; 4] = [
        Item::SkeletonKey(Area::Town),
        Item::SkeletonKey(Area::Mine),
        Item::SkeletonKey(Area::Lake),
        Item::SkeletonKey(Area::Forest),
    ];

    /// Check if this is one of the four skeleton keys.
    pub fn is_skeleton_key(&self) -> bool {
        matches!(self, Item::SkeletonKey(_))
    }

    /// Display name, e.g. `skeleton key(town)` or `diving gear`.
    pub fn as_string(&self) -> String {
        match self {
            Item::SkeletonKey(area) => format!("skeleton key({})", area),
            Item::OrnateKey => "ornate key".to_string(),
            Item::Matches => "matches".to_string(),
            Item::Pickaxe => "pickaxe".to_string(),
            Item::Crowbar => "crowbar".to_string(),
            Item::Machete => "machete".to_string(),
            Item::DivingGear => "diving gear".to_string(),
            Item::CabinKey => "cabin key".to_string(),
            Item::GraveClue => "grave clue".to_string(),
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
