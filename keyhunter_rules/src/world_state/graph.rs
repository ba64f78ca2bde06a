//! Location graph - a static table from (location, choice) to a transition record.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

use super::LocationId;
use crate::entities::{Area, Inventory, Item};
use crate::error::RulesError;
use crate::mechanics::{Challenge, Combat, DrillKind, Effect, Foe, Hazard, HazardKind};

/// A gating predicate over held items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Has(Item),
    AllSkeletonKeys,
}

impl Condition {
    pub fn holds(&self, inventory: &Inventory) -> bool {
        match self {
            Condition::Has(item) => inventory.has(*item),
            Condition::AllSkeletonKeys => inventory.has_all_skeleton_keys(),
        }
    }
}

/// Routes that go nowhere and send the player back to the same menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeadEnd {
    FloodedTunnel,
    Cliff,
}

/// Why a path was turned down. Refusals are narrative, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Refusal {
    MissingItem(Item),
    MissingSkeletonKeys,
    /// The area's key was already taken; there is nothing left here.
    AlreadyLooted(Area),
    DeadEnd(DeadEnd),
}

/// What choosing an exit does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    To(LocationId),
    /// Report a refusal, then move.
    Refuse { reason: Refusal, to: LocationId },
    When {
        condition: Condition,
        then: Box<Transition>,
        otherwise: Box<Transition>,
    },
    Challenge(Challenge),
    /// The shared life-loss transition.
    LoseLife,
    /// Enter the winning state. The win predicate is re-checked by the caller,
    /// which sends the player to `refused` if it does not hold.
    Win { refused: LocationId },
}

/// A transition with every condition already decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    Move(LocationId),
    Refuse(Refusal, LocationId),
    Challenge(&'a Challenge),
    LoseLife,
    /// Win, or fall back to this location if the win set is incomplete.
    Win(LocationId),
}

impl Transition {
    /// Create a conditional transition.
    pub fn when(condition: Condition, then: Transition, otherwise: Transition) -> Self {
        Transition::When {
            condition,
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    /// Create a refusal that routes to `to`.
    pub fn refuse(reason: Refusal, to: LocationId) -> Self {
        Transition::Refuse { reason, to }
    }

    /// Follow conditions against the inventory until a concrete step remains.
    pub fn resolve(&self, inventory: &Inventory) -> Step<'_> {
        let mut current = self;
        loop {
            match current {
                Transition::When {
                    condition,
                    then,
                    otherwise,
                } => {
                    current = if condition.holds(inventory) {
                        then.as_ref()
                    } else {
                        otherwise.as_ref()
                    };
                }
                Transition::To(location) => return Step::Move(*location),
                Transition::Refuse { reason, to } => return Step::Refuse(*reason, *to),
                Transition::Challenge(challenge) => return Step::Challenge(challenge),
                Transition::LoseLife => return Step::LoseLife,
                Transition::Win { refused } => return Step::Win(*refused),
            }
        }
    }

    /// Every location any branch of this transition can lead to.
    pub fn targets(&self) -> Vec<LocationId> {
        match self {
            Transition::To(location) | Transition::Refuse { to: location, .. } => vec![*location],
            Transition::When {
                then, otherwise, ..
            } => {
                let mut targets = then.targets();
                targets.extend(otherwise.targets());
                targets
            }
            Transition::Challenge(Challenge::Drill { then, .. }) => vec![*then],
            Transition::Challenge(Challenge::Combat(combat)) => {
                vec![combat.victory, LocationGraph::HUB]
            }
            Transition::Challenge(Challenge::Hazard(hazard)) => {
                vec![hazard.safe, LocationGraph::HUB]
            }
            Transition::LoseLife => vec![LocationGraph::HUB],
            Transition::Win { refused } => vec![*refused],
        }
    }
}

/// One numbered option in a location's menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub choice: u8,
    pub label: &'static str,
    pub transition: Transition,
}

/// How a location is left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exits {
    /// Ask the player to pick one of these.
    Menu(Vec<Exit>),
    /// Continue without asking.
    Auto(Transition),
}

/// A node of the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: LocationId,
    /// Applied every time the location is entered.
    pub on_enter: Vec<Effect>,
    pub exits: Exits,
}

impl Location {
    /// Option numbers the menu offers. Empty for automatic exits.
    pub fn choices(&self) -> Vec<u8> {
        match &self.exits {
            Exits::Menu(exits) => exits.iter().map(|exit| exit.choice).collect(),
            Exits::Auto(_) => Vec::new(),
        }
    }

    pub fn exit(&self, choice: u8) -> Option<&Exit> {
        match &self.exits {
            Exits::Menu(exits) => exits.iter().find(|exit| exit.choice == choice),
            Exits::Auto(_) => None,
        }
    }

    /// Every transition leaving this location.
    pub fn transitions(&self) -> Vec<&Transition> {
        match &self.exits {
            Exits::Menu(exits) => exits.iter().map(|exit| &exit.transition).collect(),
            Exits::Auto(transition) => vec![transition],
        }
    }
}

/// The static world map.
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    locations: HashMap<LocationId, Location>,
}

fn to(location: LocationId) -> Transition {
    Transition::To(location)
}

fn exit(choice: u8, label: &'static str, transition: Transition) -> Exit {
    Exit {
        choice,
        label,
        transition,
    }
}

fn menu(id: LocationId, on_enter: Vec<Effect>, exits: Vec<Exit>) -> Location {
    Location {
        id,
        on_enter,
        exits: Exits::Menu(exits),
    }
}

fn auto(id: LocationId, on_enter: Vec<Effect>, transition: Transition) -> Location {
    Location {
        id,
        on_enter,
        exits: Exits::Auto(transition),
    }
}

impl LocationGraph {
    /// Where runs start and where respawns land.
    pub const HUB: LocationId = LocationId::Crossroads;

    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location, replacing any previous entry with the same id.
    pub fn add_location(&mut self, location: Location) -> LocationId {
        let id = location.id;
        self.locations.insert(id, location);
        id
    }

    /// Build the Cranmore map.
    pub fn standard() -> Self {
        use LocationId::*;

        let mut graph = Self::new();
        let locations = vec![
            menu(
                Crossroads,
                vec![],
                vec![
                    exit(1, "North", to(Town)),
                    exit(2, "South", to(MineEntrance)),
                    exit(3, "East", to(Lake)),
                    exit(4, "West", to(ForestClearing)),
                ],
            ),
            // Town
            menu(
                Town,
                vec![],
                vec![
                    exit(1, "Straight", to(Inn)),
                    exit(2, "Left", to(Church)),
                    exit(3, "Right", to(BurntHouse)),
                    exit(4, "Back", to(Crossroads)),
                ],
            ),
            auto(Inn, vec![Effect::RestoreLife], to(LeavingInn)),
            menu(
                LeavingInn,
                vec![],
                vec![
                    exit(2, "Left", to(Church)),
                    exit(3, "Right", to(BurntHouse)),
                    exit(4, "Back", to(Crossroads)),
                ],
            ),
            menu(
                BurntHouse,
                vec![],
                vec![
                    exit(1, "Yes", to(Locker)),
                    exit(2, "No", to(LeavingBurntHouse)),
                    exit(3, "Maybe", to(LeavingBurntHouse)),
                ],
            ),
            auto(Locker, vec![Effect::Grant(Item::OrnateKey)], to(LeavingBurntHouse)),
            menu(
                LeavingBurntHouse,
                vec![],
                vec![
                    exit(1, "Straight", to(Inn)),
                    exit(2, "Left", to(Church)),
                    exit(3, "Back", to(Crossroads)),
                ],
            ),
            auto(
                Church,
                vec![],
                Transition::when(
                    Condition::Has(Item::OrnateKey),
                    to(ChurchAltar),
                    Transition::Challenge(Challenge::Hazard(Hazard {
                        kind: HazardKind::FloodedStairs,
                        safe: LeavingChurch,
                    })),
                ),
            ),
            auto(
                ChurchAltar,
                vec![Effect::Grant(Item::SkeletonKey(Area::Town))],
                to(LeavingChurch),
            ),
            menu(
                LeavingChurch,
                vec![],
                vec![
                    exit(1, "Straight", to(Inn)),
                    exit(2, "Right", to(BurntHouse)),
                    exit(3, "Back", to(Crossroads)),
                ],
            ),
            // Forest
            menu(
                ForestClearing,
                vec![],
                vec![
                    exit(1, "Left", to(ManorGrounds)),
                    exit(
                        2,
                        "Straight",
                        Transition::when(
                            Condition::Has(Item::SkeletonKey(Area::Forest)),
                            Transition::refuse(Refusal::AlreadyLooted(Area::Forest), ForestClearing),
                            to(Graveyard),
                        ),
                    ),
                    exit(3, "Right", to(Temple)),
                    exit(4, "Back", to(Crossroads)),
                ],
            ),
            menu(
                ManorGrounds,
                vec![],
                vec![
                    exit(
                        1,
                        "Try the door",
                        Transition::when(
                            Condition::Has(Item::Crowbar),
                            to(ManorKitchen),
                            Transition::refuse(Refusal::MissingItem(Item::Crowbar), Shed),
                        ),
                    ),
                    exit(2, "Check out the shed", to(Shed)),
                    exit(3, "Go back", to(ForestClearing)),
                ],
            ),
            auto(
                Shed,
                vec![Effect::Grant(Item::Crowbar), Effect::Grant(Item::Machete)],
                to(ManorGrounds),
            ),
            menu(
                ManorKitchen,
                vec![Effect::Grant(Item::Matches)],
                vec![
                    exit(1, "Go into the hallway", Transition::LoseLife),
                    exit(2, "Go into the living room", to(LivingRoom)),
                    exit(3, "Leave the manor", to(ManorGrounds)),
                ],
            ),
            auto(LivingRoom, vec![Effect::Grant(Item::GraveClue)], to(ManorKitchen)),
            auto(
                Graveyard,
                vec![],
                Transition::when(
                    Condition::Has(Item::GraveClue),
                    Transition::Challenge(Challenge::Drill {
                        kind: DrillKind::Dig,
                        then: Coffin,
                    }),
                    Transition::refuse(Refusal::MissingItem(Item::GraveClue), ForestClearing),
                ),
            ),
            auto(
                Coffin,
                vec![Effect::Grant(Item::SkeletonKey(Area::Forest))],
                to(ForestClearing),
            ),
            auto(
                Temple,
                vec![],
                Transition::when(
                    Condition::Has(Item::Machete),
                    Transition::when(
                        Condition::AllSkeletonKeys,
                        Transition::Win {
                            refused: ForestClearing,
                        },
                        Transition::refuse(Refusal::MissingSkeletonKeys, ForestClearing),
                    ),
                    Transition::refuse(Refusal::MissingItem(Item::Machete), ForestClearing),
                ),
            ),
            // Lake
            auto(
                Lake,
                vec![],
                Transition::when(
                    Condition::Has(Item::SkeletonKey(Area::Lake)),
                    Transition::refuse(Refusal::AlreadyLooted(Area::Lake), Crossroads),
                    Transition::when(
                        Condition::Has(Item::DivingGear),
                        to(LakeDepths),
                        Transition::refuse(Refusal::MissingItem(Item::DivingGear), Crossroads),
                    ),
                ),
            ),
            menu(
                LakeFromMine,
                vec![],
                vec![
                    exit(1, "Yes", to(LakeDepths)),
                    exit(2, "No", to(LakeDepths)),
                ],
            ),
            auto(
                LakeDepths,
                vec![Effect::Grant(Item::SkeletonKey(Area::Lake))],
                to(Crossroads),
            ),
            // Mine
            auto(
                MineEntrance,
                vec![],
                Transition::when(
                    Condition::Has(Item::SkeletonKey(Area::Mine)),
                    Transition::refuse(Refusal::AlreadyLooted(Area::Mine), Crossroads),
                    to(MineTunnel),
                ),
            ),
            menu(
                MineTunnel,
                vec![],
                vec![
                    exit(1, "Look around for a source of light", to(Torch)),
                    exit(2, "Leave for now", to(LeaveMine)),
                ],
            ),
            auto(
                Torch,
                vec![],
                Transition::when(
                    Condition::Has(Item::Matches),
                    to(LightTorch),
                    Transition::refuse(Refusal::MissingItem(Item::Matches), LeaveMine),
                ),
            ),
            auto(LeaveMine, vec![], to(Crossroads)),
            menu(
                LightTorch,
                vec![],
                vec![
                    exit(1, "Yes", to(MineCollapse)),
                    exit(2, "No", to(Crossroads)),
                ],
            ),
            auto(MineCollapse, vec![], to(MineRoutes)),
            menu(
                MineRoutes,
                vec![],
                vec![
                    exit(
                        1,
                        "Water route",
                        Transition::refuse(Refusal::DeadEnd(DeadEnd::FloodedTunnel), MineRoutes),
                    ),
                    exit(2, "Spider-web route", to(WebRoute)),
                    exit(3, "Mine cart route", to(CartRide)),
                    exit(
                        4,
                        "Cliff",
                        Transition::refuse(Refusal::DeadEnd(DeadEnd::Cliff), MineRoutes),
                    ),
                ],
            ),
            auto(
                WebRoute,
                vec![Effect::Grant(Item::Pickaxe), Effect::Grant(Item::DivingGear)],
                Transition::Challenge(Challenge::Drill {
                    kind: DrillKind::WebEscape,
                    then: SpiderLair,
                }),
            ),
            auto(
                CartRide,
                vec![Effect::Grant(Item::Pickaxe), Effect::Grant(Item::DivingGear)],
                Transition::Challenge(Challenge::Drill {
                    kind: DrillKind::WebEscape,
                    then: SpiderLair,
                }),
            ),
            auto(
                SpiderLair,
                vec![],
                Transition::Challenge(Challenge::Combat(Combat {
                    foe: Foe::GiantSpider,
                    options: vec![Item::DivingGear, Item::Matches, Item::Pickaxe],
                    winning: Item::Pickaxe,
                    victory: SpiderSlain,
                })),
            ),
            auto(
                SpiderSlain,
                vec![Effect::Grant(Item::SkeletonKey(Area::Mine))],
                to(LakeFromMine),
            ),
        ];

        for location in locations {
            graph.add_location(location);
        }
        graph
    }

    /// Get a location by id.
    pub fn location(&self, id: LocationId) -> Result<&Location, RulesError> {
        self.locations
            .get(&id)
            .ok_or(RulesError::UnknownLocation(id))
    }

    /// Look up the transition behind a menu choice.
    pub fn choose(&self, id: LocationId, choice: u8) -> Result<&Transition, RulesError> {
        self.location(id)?
            .exit(choice)
            .map(|exit| &exit.transition)
            .ok_or(RulesError::InvalidChoice {
                location: id,
                choice,
            })
    }

    /// Get the total number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Get all locations.
    pub fn all_locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Every location reachable from `start` along any branch.
    pub fn reachable_from(&self, start: LocationId) -> HashSet<LocationId> {
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);

        while let Some(id) = queue.pop_front() {
            let Ok(location) = self.location(id) else {
                continue;
            };
            for transition in location.transitions() {
                for target in transition.targets() {
                    if seen.insert(target) {
                        queue.push_back(target);
                    }
                }
            }
        }
        seen
    }
}
