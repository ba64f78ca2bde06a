//! World state: where the player is and where they have been.

mod graph;

pub use graph::*;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::entities::{Area, Inventory, MAX_LIVES};

/// Every location (and sub-location) in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LocationId {
    /// The hub. Area routes and respawns lead back here.
    Crossroads,

    // Cranmore Town
    Town,
    Inn,
    LeavingInn,
    BurntHouse,
    Locker,
    LeavingBurntHouse,
    Church,
    ChurchAltar,
    LeavingChurch,

    // Cranmore Forest
    ForestClearing,
    ManorGrounds,
    Shed,
    ManorKitchen,
    LivingRoom,
    Graveyard,
    Coffin,
    Temple,

    // Lacey Lake
    Lake,
    LakeFromMine,
    LakeDepths,

    // Old Steel Mine
    MineEntrance,
    MineTunnel,
    Torch,
    LeaveMine,
    LightTorch,
    MineCollapse,
    MineRoutes,
    WebRoute,
    CartRide,
    SpiderLair,
    SpiderSlain,
}

impl LocationId {
    pub const ALL: [LocationId; 32] = [
        LocationId::Crossroads,
        LocationId::Town,
        LocationId::Inn,
        LocationId::LeavingInn,
        LocationId::BurntHouse,
        LocationId::Locker,
        LocationId::LeavingBurntHouse,
        LocationId::Church,
        LocationId::ChurchAltar,
        LocationId::LeavingChurch,
        LocationId::ForestClearing,
        LocationId::ManorGrounds,
        LocationId::Shed,
        LocationId::ManorKitchen,
        LocationId::LivingRoom,
        LocationId::Graveyard,
        LocationId::Coffin,
        LocationId::Temple,
        LocationId::Lake,
        LocationId::LakeFromMine,
        LocationId::LakeDepths,
        LocationId::MineEntrance,
        LocationId::MineTunnel,
        LocationId::Torch,
        LocationId::LeaveMine,
        LocationId::LightTorch,
        LocationId::MineCollapse,
        LocationId::MineRoutes,
        LocationId::WebRoute,
        LocationId::CartRide,
        LocationId::SpiderLair,
        LocationId::SpiderSlain,
    ];

    /// The major area a location belongs to. The crossroads belongs to none.
    pub fn area(&self) -> Option<Area> {
        use LocationId::*;
        match self {
            Crossroads => None,
            Town | Inn | LeavingInn | BurntHouse | Locker | LeavingBurntHouse | Church
            | ChurchAltar | LeavingChurch => Some(Area::Town),
            ForestClearing | ManorGrounds | Shed | ManorKitchen | LivingRoom | Graveyard
            | Coffin | Temple => Some(Area::Forest),
            Lake | LakeFromMine | LakeDepths => Some(Area::Lake),
            MineEntrance | MineTunnel | Torch | LeaveMine | LightTorch | MineCollapse
            | MineRoutes | WebRoute | CartRide | SpiderLair | SpiderSlain => Some(Area::Mine),
        }
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The player's position within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub location: LocationId,
    /// Mirrors the inventory's life counter.
    pub lives: u32,
    pub visited: HashSet<LocationId>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            location: LocationGraph::HUB,
            lives: MAX_LIVES,
            visited: HashSet::new(),
        }
    }
}

impl PlayerState {
    /// Create a player standing at the hub, nowhere visited yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to a location. Returns true if this is the first visit.
    pub fn arrive(&mut self, location: LocationId) -> bool {
        self.location = location;
        self.visited.insert(location)
    }

    /// Check if a location has been visited this run.
    pub fn has_visited(&self, location: LocationId) -> bool {
        self.visited.contains(&location)
    }

    /// Wake up at the hub after losing a life. Visits are kept.
    pub fn respawn(&mut self) {
        self.arrive(LocationGraph::HUB);
    }

    /// Copy the life counter from the inventory.
    pub fn sync_lives(&mut self, inventory: &Inventory) {
        self.lives = inventory.lives();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrive_tracks_first_visit() {
        let mut player = PlayerState::new();
        assert_eq!(player.location, LocationId::Crossroads);
        assert!(player.arrive(LocationId::Crossroads));
        assert!(player.arrive(LocationId::Town));
        assert!(!player.arrive(LocationId::Crossroads));
        assert!(player.has_visited(LocationId::Town));
        assert!(!player.has_visited(LocationId::Lake));
    }

    #[test]
    fn test_respawn_keeps_visits() {
        let mut player = PlayerState::new();
        player.arrive(LocationId::ManorKitchen);
        player.respawn();

        assert_eq!(player.location, LocationId::Crossroads);
        assert!(player.has_visited(LocationId::ManorKitchen));
    }

    #[test]
    fn test_all_locations_are_distinct() {
        let unique: HashSet<_> = LocationId::ALL.iter().collect();
        assert_eq!(unique.len(), LocationId::ALL.len());
    }

    #[test]
    fn test_location_areas() {
        assert_eq!(LocationId::Crossroads.area(), None);
        assert_eq!(LocationId::ChurchAltar.area(), Some(Area::Town));
        assert_eq!(LocationId::SpiderLair.area(), Some(Area::Mine));
        assert_eq!(LocationId::Temple.area(), Some(Area::Forest));
        assert_eq!(LocationId::LakeDepths.area(), Some(Area::Lake));
    }
}
