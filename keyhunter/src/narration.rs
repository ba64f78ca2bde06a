//! Narration - the words behind events, menus and prompts.
//!
//! Nothing here affects game state. Consoles render [`Line`]s however they like.

use keyhunter_rules::{
    Area, Combat, DeadEnd, DrillKind, Exits, Foe, Hazard, HazardKind, Item, Location, LocationId,
    Refusal, MAX_LIVES,
};

use crate::events::Event;

/// A styled line of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    /// Game title.
    Title(String),
    /// Inventory entries.
    Highlight(String),
    /// Win and lose banners.
    Banner(String),
    Border,
    Blank,
}

fn text(s: impl Into<String>) -> Line {
    Line::Text(s.into())
}

pub const MAIN_MENU_QUESTION: &str = "Input [1] Start / [2] How-to / [3] Credits / [4] Winners:";
pub const MAIN_MENU_OPTIONS: [u8; 4] = [1, 2, 3, 4];
pub const NAME_PROMPT: &str = "Please enter your name:";
pub const WINNER_NAME_PROMPT: &str = "Please enter a name for the previous winners list!:";
pub const PLAY_AGAIN_QUESTION: &str = "Would you like to play again? Yes [1] / No [2]:";
pub const PLAY_AGAIN_OPTIONS: [u8; 2] = [1, 2];

/// Prompt for one line of a repeated-confirmation minigame.
pub fn drill_prompt(kind: DrillKind, retry: bool) -> &'static str {
    match (kind, retry) {
        (DrillKind::Dig, false) => "Type 'dig' to dig down into the grave:",
        (DrillKind::Dig, true) => "Literally just type the word 'dig'...",
        (DrillKind::WebEscape, false) => "Type 'p' to pull yourself free from the web:",
        (DrillKind::WebEscape, true) => "Just type 'p'...",
    }
}

fn menu_lead(location: LocationId) -> &'static str {
    use LocationId::*;
    match location {
        Crossroads => "You decide to head",
        BurntHouse => "Do you open the locker?",
        ManorKitchen | MineTunnel => "Do you",
        LightTorch => "Do you want to light the torch?",
        MineRoutes => "Input",
        LakeFromMine => "Do you want to dive down and give it a go?",
        _ => "Do you go",
    }
}

/// Question for a location's menu, e.g. `You decide to head [1] North / [2] South:`.
pub fn menu_question(location: &Location) -> String {
    let options = match &location.exits {
        Exits::Menu(exits) => exits
            .iter()
            .map(|exit| format!("[{}] {}", exit.choice, exit.label))
            .collect::<Vec<_>>()
            .join(" / "),
        Exits::Auto(_) => String::new(),
    };
    format!("{} {}:", menu_lead(location.id), options)
}

/// Question for a resource-choice fight.
pub fn combat_question(combat: &Combat) -> String {
    let options = combat
        .options
        .iter()
        .enumerate()
        .map(|(index, item)| format!("[{}] {}", index + 1, item))
        .collect::<Vec<_>>()
        .join(" / ");
    format!("Use: {}:", options)
}

/// Question for a yes/no hazard.
pub fn hazard_question(hazard: &Hazard) -> String {
    let lead = match hazard.kind {
        HazardKind::FloodedStairs => "Do you proceed down the stairs?",
    };
    format!(
        "{} Yes[{}] / No[{}]:",
        lead,
        Hazard::PROCEED,
        Hazard::TURN_BACK
    )
}

/// Text shown when entering a location.
pub fn arrival(location: LocationId, first_visit: bool) -> Vec<&'static str> {
    use LocationId::*;
    match (location, first_visit) {
        (Crossroads, true) => vec![
            "You wake up at a crossroads with no memory of how you got there.",
            "North - Cranmore Town | South - Old Steel Mine | East - Lacey Lake | West - Cranmore Forest",
        ],
        (Crossroads, false) => vec![
            "You are back at the sign post at the crossroads.",
            "North - Cranmore Town | South - Old Steel Mine | East - Lacey Lake | West - Cranmore Forest",
        ],
        (Town, true) => vec![
            "You wander into a small town. It seems deserted, and it makes you uneasy.",
            "Straight - the inn | Left - the church | Right - a burnt down house",
        ],
        (Town, false) => vec![
            "You are back in the empty town square.",
            "Straight - the inn | Left - the church | Right - the burnt down house",
        ],
        (Inn, _) => vec![
            "You step into the inn. It is cozy, but you have no time for a drink.",
            "A hot carvery appears on the table in front of you.",
        ],
        (LeavingInn, _) => vec!["You leave the inn for the town square."],
        (BurntHouse, true) => vec![
            "The burnt down house is a complete mess.",
            "Among the ashes sits a small, charred locker with a cross on top.",
        ],
        (BurntHouse, false) => vec!["The charred locker is still standing among the ashes."],
        (Locker, _) => vec!["You open the top drawer..."],
        (LeavingBurntHouse, _) => vec!["You leave the burnt down house for the town square."],
        (Church, true) => vec![
            "You arrive at an old church. The front door is locked and needs some sort of key.",
        ],
        (Church, false) => vec!["You are back at the locked church door."],
        (ChurchAltar, _) => vec![
            "The ornate key turns, and the church door swings open.",
            "Something glints on the altar.",
        ],
        (LeavingChurch, _) => vec!["You leave the church for the town square."],
        (ForestClearing, true) => vec![
            "The trees rise higher and higher until you reach a small clearing.",
            "Left - an abandoned manor | Straight - an overgrown graveyard | Right - a low hum from the trees",
        ],
        (ForestClearing, false) => vec![
            "You're back at the small clearing.",
            "Left - the manor | Straight - the graveyard | Right - the strange sound",
        ],
        (ManorGrounds, true) => vec![
            "The front door of the manor is bolted shut.",
            "Around the back, a door stands slightly ajar, and a wooden shed sits at the end of the garden.",
        ],
        (ManorGrounds, false) => vec!["You're back outside the back door of the manor."],
        (Shed, true) => vec![
            "The shed door hangs at an angle; you pull it clean off.",
            "The roof is propped up by a few branches and the place smells of mold.",
        ],
        (Shed, false) => vec!["You poke around the shed again."],
        (ManorKitchen, true) => vec![
            "The kitchen air is stale and every surface is coated in dust.",
            "One doorway leads to a hallway, the other to a living room.",
        ],
        (ManorKitchen, false) => vec!["You're back in the dusty kitchen, candles still burning."],
        (LivingRoom, _) => vec![
            "Sheets cover the furniture in the living room.",
            "A note on the mantel mentions a grave where 'what you seek lies beneath'.",
        ],
        (Graveyard, _) => vec![
            "The graves are overgrown and most of the tombstones are falling apart.",
        ],
        (Coffin, _) => vec![
            "Finally the shovel hits wood. Inside the coffin is a small cloth bag.",
        ],
        (Temple, _) => vec!["You arrive at the temple. The entrance is blocked by thick vines."],
        (Lake, _) => vec!["You walk down to the edge of the lake."],
        (LakeFromMine, _) => vec![
            "You feel your way through the underwater tunnels and surface in the middle of Lacey Lake.",
            "Something glimmers in the depths.",
        ],
        (LakeDepths, _) => vec!["You dive down towards the glimmer."],
        (MineEntrance, _) => vec!["You head towards the Old Steel Mine."],
        (MineTunnel, _) => vec![
            "The mine feels eerie. Without a source of light it's impossible to go further.",
        ],
        (Torch, _) => vec!["You search for a while and uncover an old torch hidden behind some vines."],
        (LeaveMine, _) => vec!["You leave the mine and return to the crossroads."],
        (LightTorch, _) => vec!["The torch is dry enough to burn."],
        (MineCollapse, _) => vec![
            "!!!!Rumble!!!! The tunnel collapses behind you and the exit is blocked.",
            "You press on, and the floor gives way beneath you.",
        ],
        (MineRoutes, true) => vec!["You wake up in a new area with four routes ahead."],
        (MineRoutes, false) => vec!["The four routes lie ahead of you."],
        (WebRoute, _) => vec![
            "You battle through the webs and come face to face with a giant spider!",
            "You dash into a side tunnel and find a skeleton clutching a chest.",
        ],
        (CartRide, _) => vec![
            "You ride a mine cart all the way to the bottom.",
            "A skeleton lies slumped against the wall, clutching a chest.",
            "A giant spider appears! You flee down a tunnel into an elevator shaft full of webs.",
        ],
        (SpiderLair, _) => vec!["At the top of the shaft, the giant spider lunges at you!"],
        (SpiderSlain, _) => vec![
            "Behind the spider's nest, you put on the diving gear and swim into an underwater tunnel.",
        ],
    }
}

fn refusal(reason: &Refusal) -> Vec<Line> {
    let message = match reason {
        Refusal::MissingItem(Item::Crowbar) => {
            "The back door is jammed. Maybe there is something in the shed to pry it open?"
                .to_string()
        }
        Refusal::MissingItem(Item::Matches) => {
            "You have nothing to light the torch with. You should return once you find something."
                .to_string()
        }
        Refusal::MissingItem(Item::GraveClue) => {
            "The tombstones you can read carry cryptic messages that mean nothing to you. You leave for now."
                .to_string()
        }
        Refusal::MissingItem(Item::Machete) => {
            "You'll need something to cut through the vines. You head back to the clearing."
                .to_string()
        }
        Refusal::MissingItem(Item::DivingGear) => {
            "The water is deep and something shimmers at the bottom. Maybe with diving gear you could reach it?"
                .to_string()
        }
        Refusal::MissingItem(item) => format!("You need the {} for that.", item),
        Refusal::MissingSkeletonKeys => {
            "You hack through the vines, but the temple door has four locks. You don't have all 4 skeleton keys yet!"
                .to_string()
        }
        Refusal::AlreadyLooted(Area::Mine) => {
            "The mine entrance has caved in. You already explored it.".to_string()
        }
        Refusal::AlreadyLooted(area) => {
            format!("You already have the skeleton key from the {}! There is nothing left here.", area)
        }
        Refusal::DeadEnd(DeadEnd::FloodedTunnel) => {
            "The water route is too deep to navigate without equipment. Choose another way.".to_string()
        }
        Refusal::DeadEnd(DeadEnd::Cliff) => {
            "There is a fourth way, but it's a long drop. You decide to choose another way.".to_string()
        }
    };
    vec![text(message)]
}

fn foe_name(foe: Foe) -> &'static str {
    match foe {
        Foe::GiantSpider => "spider",
    }
}

/// Lines for an event.
pub fn describe(event: &Event) -> Vec<Line> {
    match event {
        Event::Title => vec![
            Line::Border,
            Line::Title("| Welcome to Keyhunter: The Lost Temple of Cranmore |".to_string()),
            Line::Border,
        ],
        Event::HowTo => vec![
            Line::Border,
            text("Keyhunter is a text-based adventure game."),
            text("Type the number shown next to an option and press enter."),
            text("Find the skeleton key in each area, and a way into the temple, to win."),
            text("Be careful: you only have 3 lives, but you'll be warned before danger."),
            Line::Border,
        ],
        Event::Credits => vec![
            Line::Border,
            text("GAME DEVELOPERS"),
            text("Oisin Singleton"),
            text("Conor Lacey"),
            text("Andre Norton"),
            Line::Border,
        ],
        Event::Winners(names) if names.is_empty() => {
            vec![Line::Border, text("No winners found yet!"), Line::Border]
        }
        Event::Winners(names) => {
            let mut lines = vec![Line::Border];
            lines.extend(names.iter().map(|name| text(name.as_str())));
            lines.push(Line::Border);
            lines
        }
        Event::Welcome { name } => vec![Line::Blank, text(format!("Welcome, {}", name))],
        Event::Arrived {
            location,
            first_visit,
        } => {
            let mut lines = vec![Line::Border];
            lines.extend(arrival(*location, *first_visit).into_iter().map(text));
            lines
        }
        Event::Refused(reason) => refusal(reason),
        Event::ItemGained(item) => vec![text(format!("You pick up the {}.", item))],
        Event::ItemAlreadyHeld(Item::SkeletonKey(_)) => {
            vec![text("You already have the key!")]
        }
        Event::ItemAlreadyHeld(item) => {
            vec![text(format!("You already have the {}; there is nothing else of use.", item))]
        }
        Event::InventoryShown(inventory) => {
            let mut lines = vec![Line::Blank, Line::Highlight("Inventory:".to_string())];
            lines.extend(
                inventory
                    .held()
                    .map(|(item, count)| Line::Highlight(format!("{}: {}", item, count))),
            );
            lines.push(Line::Blank);
            lines
        }
        Event::LifeRestored { lives } => vec![
            text("You eat the carvery, even though dinner is waiting at home."),
            text(format!("You gain a life! You now have {} lives.", lives)),
        ],
        Event::LivesAlreadyFull => vec![text(format!(
            "You already have all {} lives and you're not hungry. You leave the carvery alone.",
            MAX_LIVES
        ))],
        Event::DrillStroke {
            kind: DrillKind::Dig,
            ..
        } => vec![text("You dig the grave.")],
        Event::DrillStroke {
            kind: DrillKind::WebEscape,
            ..
        } => vec![text("You pull on the webs with all your might.")],
        Event::DrillCompleted(DrillKind::Dig) => vec![text("The shovel hits something solid.")],
        Event::DrillCompleted(DrillKind::WebEscape) => {
            vec![text("You break free and climb to the top of the elevator shaft.")]
        }
        Event::CombatWon(foe) => vec![text(format!(
            "You swing the pickaxe with all your strength, killing the {}!",
            foe_name(*foe)
        ))],
        Event::CombatLost(foe) => vec![text(format!(
            "Your attempt to fend off the {} fails. It attacks!",
            foe_name(*foe)
        ))],
        Event::HazardTaken(HazardKind::FloodedStairs) => {
            vec![text("You walk down the stairs, slip, and hit your head on a step.")]
        }
        Event::HazardAvoided(HazardKind::FloodedStairs) => {
            vec![text("You decide the stairs are not worth the risk.")]
        }
        Event::LifeLost { remaining } => vec![text(format!(
            "You lose a life. {} remaining.",
            remaining
        ))],
        Event::Respawned { lives } => vec![
            Line::Blank,
            text("You wake up, your head is pounding."),
            text("You're back at the crossroads once again."),
            text(format!(
                "Maybe you should be more careful; you only have {} lives left!",
                lives
            )),
        ],
        Event::Victory => vec![
            Line::Border,
            Line::Banner(" ---- YOU WIN! ---- ".to_string()),
            text("You have all the skeleton keys and the temple door opens!"),
            Line::Border,
        ],
        Event::Defeat => vec![
            Line::Border,
            Line::Banner(" ---- YOU LOSE ---- ".to_string()),
            Line::Border,
        ],
        Event::WinnerRecorded { name } => vec![text(format!(
            "{} has been added to the previous winners list!",
            name
        ))],
        Event::LedgerUnavailable => {
            vec![text("The winners list could not be updated this time.")]
        }
        Event::Farewell => vec![text("Ok! Thanks for playing!")],
    }
}
