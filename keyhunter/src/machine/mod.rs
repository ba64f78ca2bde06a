//! The game state machine.
//!
//! States are `MainMenu`, `Playing`, `Won`, `Lost` and `Finished`. Each call
//! to [`Game::step`] asks the console at most one bounded question (or runs
//! one challenge) and applies exactly one transition, so the location graph is
//! walked iteratively instead of by handlers calling each other.

mod challenge;

use keyhunter_rules::{
    lose_life, EffectOutcome, Exits, Inventory, Item, LifeLoss, LocationGraph, LocationId,
    PlayerState, Refusal, Step, Transition,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::console::Console;
use crate::error::EngineError;
use crate::events::Event;
use crate::ledger::OutcomeLedger;
use crate::narration;

/// Unique identifier for a run, used to correlate logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything belonging to one run. Created on "Start", dropped when the run ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub id: SessionId,
    pub player_name: String,
    pub player: PlayerState,
    pub inventory: Inventory,
}

impl Session {
    /// Create a fresh run at the hub.
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            id: SessionId::new(),
            player_name: player_name.into(),
            player: PlayerState::new(),
            inventory: Inventory::new(),
        }
    }

    /// Place the player at a location.
    pub fn at(mut self, location: LocationId) -> Self {
        self.player.arrive(location);
        self
    }

    /// Add one of an item.
    pub fn with_item(mut self, item: Item) -> Self {
        self.inventory.increment(item, 1);
        self
    }

    /// Set remaining lives.
    pub fn with_lives(mut self, lives: u32) -> Self {
        self.inventory.set_lives(lives);
        self.player.sync_lives(&self.inventory);
        self
    }

    pub fn location(&self) -> LocationId {
        self.player.location
    }
}

/// Where the machine is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    MainMenu,
    Playing(Session),
    Won(Session),
    Lost(Session),
    /// The player declined to play again.
    Finished,
}

impl GameState {
    pub fn name(&self) -> &'static str {
        match self {
            GameState::MainMenu => "main_menu",
            GameState::Playing(_) => "playing",
            GameState::Won(_) => "won",
            GameState::Lost(_) => "lost",
            GameState::Finished => "finished",
        }
    }

    /// The run in progress or just ended, if any.
    pub fn session(&self) -> Option<&Session> {
        match self {
            GameState::Playing(session) | GameState::Won(session) | GameState::Lost(session) => {
                Some(session)
            }
            GameState::MainMenu | GameState::Finished => None,
        }
    }
}

/// State change requested by a handler.
enum Next {
    Stay,
    Start(Session),
    Won,
    Lost,
    Menu,
    Finish,
}

/// The game: a location graph, a winners ledger and the current state.
pub struct Game<L> {
    graph: LocationGraph,
    ledger: L,
    state: GameState,
}

impl<L: OutcomeLedger> Game<L> {
    /// Create a game sitting at the main menu.
    pub fn new(graph: LocationGraph, ledger: L) -> Self {
        Self {
            graph,
            ledger,
            state: GameState::MainMenu,
        }
    }

    /// Create a game already playing a prepared session.
    pub fn resume(graph: LocationGraph, ledger: L, session: Session) -> Self {
        Self {
            graph,
            ledger,
            state: GameState::Playing(session),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.state.session()
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Finished)
    }

    /// Step until the player declines to play again or the input closes.
    pub fn run(&mut self, console: &mut impl Console) -> Result<(), EngineError> {
        while !self.is_finished() {
            match self.step(console) {
                Ok(()) => {}
                Err(e) if e.is_input_closed() => {
                    info!(state = self.state.name(), "input closed, leaving the game");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Apply a single transition.
    pub fn step(&mut self, console: &mut impl Console) -> Result<(), EngineError> {
        let next = match &mut self.state {
            GameState::MainMenu => main_menu(&self.graph, &self.ledger, console)?,
            GameState::Playing(session) => {
                let _span = info_span!("run", session = %session.id).entered();
                play_turn(&self.graph, session, console)?
            }
            GameState::Won(session) => {
                let _span = info_span!("run", session = %session.id).entered();
                record_winner(&mut self.ledger, session, console)?
            }
            GameState::Lost(_) => play_again(console)?,
            GameState::Finished => Next::Stay,
        };
        self.apply(next);
        Ok(())
    }

    fn apply(&mut self, next: Next) {
        let previous = std::mem::replace(&mut self.state, GameState::Finished);
        self.state = match (previous, next) {
            (state, Next::Stay) => state,
            (_, Next::Start(session)) => GameState::Playing(session),
            (GameState::Playing(session), Next::Won) => GameState::Won(session),
            (GameState::Playing(session), Next::Lost) => GameState::Lost(session),
            (state, Next::Won | Next::Lost) => state,
            (_, Next::Menu) => GameState::MainMenu,
            (_, Next::Finish) => GameState::Finished,
        };
        debug!(state = self.state.name(), "state applied");
    }
}

fn main_menu<L: OutcomeLedger>(
    graph: &LocationGraph,
    ledger: &L,
    console: &mut impl Console,
) -> Result<Next, EngineError> {
    console.show(&Event::Title)?;
    match console.choose(narration::MAIN_MENU_QUESTION, &narration::MAIN_MENU_OPTIONS)? {
        1 => {
            let name = read_name(console, narration::NAME_PROMPT)?;
            console.show(&Event::Welcome { name: name.clone() })?;

            let mut session = Session::new(name);
            info!(session = %session.id, "run started");
            enter(graph, &mut session, LocationGraph::HUB, console)?;
            Ok(Next::Start(session))
        }
        2 => {
            console.show(&Event::HowTo)?;
            Ok(Next::Stay)
        }
        3 => {
            console.show(&Event::Credits)?;
            Ok(Next::Stay)
        }
        _ => {
            let names = ledger.list_all().unwrap_or_else(|e| {
                warn!(error = %e, "could not read winners");
                Vec::new()
            });
            console.show(&Event::Winners(names))?;
            Ok(Next::Stay)
        }
    }
}

fn play_turn(
    graph: &LocationGraph,
    session: &mut Session,
    console: &mut impl Console,
) -> Result<Next, EngineError> {
    let location = graph.location(session.location())?;
    let transition = match &location.exits {
        Exits::Menu(_) => {
            let question = narration::menu_question(location);
            let choice = console.choose(&question, &location.choices())?;
            debug!(location = %location.id, choice, "choice made");
            graph.choose(location.id, choice)?
        }
        Exits::Auto(transition) => transition,
    };
    follow(graph, session, transition, console)
}

fn follow(
    graph: &LocationGraph,
    session: &mut Session,
    transition: &Transition,
    console: &mut impl Console,
) -> Result<Next, EngineError> {
    match transition.resolve(&session.inventory) {
        Step::Move(next) => {
            enter(graph, session, next, console)?;
            Ok(Next::Stay)
        }
        Step::Refuse(reason, next) => {
            debug!(?reason, "path refused");
            console.show(&Event::Refused(reason))?;
            enter(graph, session, next, console)?;
            Ok(Next::Stay)
        }
        Step::Challenge(challenge) => challenge::resolve(graph, session, challenge, console),
        Step::LoseLife => life_loss(session, console),
        Step::Win(refused) => win(graph, session, refused, console),
    }
}

/// Move into a location, apply its arrival effects and report them.
fn enter(
    graph: &LocationGraph,
    session: &mut Session,
    id: LocationId,
    console: &mut impl Console,
) -> Result<(), EngineError> {
    let location = graph.location(id)?;
    let first_visit = session.player.arrive(id);
    debug!(location = %id, area = ?id.area(), first_visit, "entered location");
    console.show(&Event::Arrived {
        location: id,
        first_visit,
    })?;

    let mut gained = false;
    for effect in &location.on_enter {
        let outcome = effect.apply(&mut session.inventory);
        match outcome {
            EffectOutcome::Gained(item) => {
                info!(item = %item, "item gained");
                gained = true;
            }
            EffectOutcome::LifeRestored { lives } => info!(lives, "life restored"),
            EffectOutcome::AlreadyHeld(_) | EffectOutcome::LivesFull => {}
        }
        console.show(&Event::from(outcome))?;
    }
    session.player.sync_lives(&session.inventory);

    if gained {
        console.show(&Event::InventoryShown(session.inventory.clone()))?;
    }
    Ok(())
}

/// The shared life-loss transition: respawn at the hub, or lose the run.
fn life_loss(session: &mut Session, console: &mut impl Console) -> Result<Next, EngineError> {
    let outcome = lose_life(&mut session.inventory);
    session.player.sync_lives(&session.inventory);

    match outcome {
        LifeLoss::Dead => {
            info!(player = %session.player_name, "out of lives");
            console.show(&Event::LifeLost { remaining: 0 })?;
            console.show(&Event::Defeat)?;
            Ok(Next::Lost)
        }
        LifeLoss::Respawn { remaining } => {
            info!(remaining, "life lost");
            console.show(&Event::LifeLost { remaining })?;
            session.player.respawn();
            console.show(&Event::Respawned { lives: remaining })?;
            Ok(Next::Stay)
        }
    }
}

fn win(
    graph: &LocationGraph,
    session: &mut Session,
    refused: LocationId,
    console: &mut impl Console,
) -> Result<Next, EngineError> {
    if !session.inventory.is_win_ready() {
        warn!(
            missing = ?session.inventory.missing_skeleton_keys(),
            "win reached without the full key set"
        );
        console.show(&Event::Refused(Refusal::MissingSkeletonKeys))?;
        enter(graph, session, refused, console)?;
        return Ok(Next::Stay);
    }

    info!(player = %session.player_name, "run won");
    console.show(&Event::Victory)?;
    Ok(Next::Won)
}

fn record_winner<L: OutcomeLedger>(
    ledger: &mut L,
    session: &Session,
    console: &mut impl Console,
) -> Result<Next, EngineError> {
    let name = read_name(console, narration::WINNER_NAME_PROMPT)?;
    info!(player = %session.player_name, winner = %name, "recording winner");

    match ledger.append(&name) {
        Ok(()) => console.show(&Event::WinnerRecorded { name })?,
        Err(e) => {
            warn!(error = %e, "could not record winner");
            console.show(&Event::LedgerUnavailable)?;
        }
    }
    play_again(console)
}

/// Ask until the answer has something besides whitespace.
fn read_name(console: &mut impl Console, prompt: &str) -> Result<String, EngineError> {
    loop {
        let name = console.read_line(prompt)?;
        let name = name.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
        debug!("blank name, asking again");
    }
}

fn play_again(console: &mut impl Console) -> Result<Next, EngineError> {
    match console.choose(narration::PLAY_AGAIN_QUESTION, &narration::PLAY_AGAIN_OPTIONS)? {
        1 => Ok(Next::Menu),
        _ => {
            console.show(&Event::Farewell)?;
            Ok(Next::Finish)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::ledger::{MemoryLedger, WinnersFile};
    use keyhunter_rules::{Area, Location, MAX_LIVES};
    use proptest::prelude::*;

    fn game_at(session: Session) -> Game<MemoryLedger> {
        Game::resume(LocationGraph::standard(), MemoryLedger::new(), session)
    }

    fn fresh_game() -> Game<MemoryLedger> {
        Game::new(LocationGraph::standard(), MemoryLedger::new())
    }

    fn play(game: &mut Game<MemoryLedger>, answers: &[&str]) -> ScriptedConsole {
        let mut console = ScriptedConsole::new(answers.iter().copied());
        game.run(&mut console).unwrap();
        assert_eq!(console.remaining(), 0, "script not fully consumed");
        console
    }

    fn playing(game: &Game<MemoryLedger>) -> &Session {
        match game.state() {
            GameState::Playing(session) => session,
            other => panic!("expected playing, got {}", other.name()),
        }
    }

    fn count(console: &ScriptedConsole, predicate: impl Fn(&Event) -> bool) -> usize {
        console.events().iter().filter(|e| predicate(e)).count()
    }

    fn three_keys() -> Session {
        Session::new("Ada")
            .at(LocationId::ForestClearing)
            .with_item(Item::Machete)
            .with_item(Item::SkeletonKey(Area::Town))
            .with_item(Item::SkeletonKey(Area::Mine))
            .with_item(Item::SkeletonKey(Area::Lake))
    }

    #[test]
    fn test_ornate_key_unlocks_church() {
        let mut game = fresh_game();
        let console = play(&mut game, &["1", "Ada", "1", "3", "1", "2"]);

        let session = playing(&game);
        assert_eq!(session.player_name, "Ada");
        assert_eq!(session.location(), LocationId::LeavingChurch);
        assert_eq!(session.inventory.get(Item::SkeletonKey(Area::Town)), 1);
        assert!(console
            .events()
            .contains(&Event::ItemGained(Item::SkeletonKey(Area::Town))));
    }

    #[test]
    fn test_revisiting_never_duplicates_keys() {
        let mut game = fresh_game();
        play(
            &mut game,
            &["1", "Ada", "1", "3", "1", "2", "2", "1", "2"],
        );

        let session = playing(&game);
        assert_eq!(session.location(), LocationId::LeavingChurch);
        assert_eq!(session.inventory.get(Item::OrnateKey), 1);
        assert_eq!(session.inventory.get(Item::SkeletonKey(Area::Town)), 1);
    }

    #[test]
    fn test_mine_without_matches_leaves_safely() {
        let mut game = fresh_game();
        let console = play(&mut game, &["1", "Ada", "2", "1"]);

        let session = playing(&game);
        assert_eq!(session.location(), LocationId::Crossroads);
        assert!(session.player.has_visited(LocationId::LeaveMine));
        assert_eq!(session.inventory.lives(), MAX_LIVES);
        assert!(console
            .events()
            .contains(&Event::Refused(Refusal::MissingItem(Item::Matches))));
        assert_eq!(count(&console, |e| matches!(e, Event::LifeLost { .. })), 0);
    }

    #[test]
    fn test_spider_falls_to_pickaxe() {
        let session = Session::new("Ada")
            .at(LocationId::SpiderLair)
            .with_item(Item::Pickaxe)
            .with_item(Item::DivingGear);
        let mut game = game_at(session);
        let console = play(&mut game, &["3"]);

        let session = playing(&game);
        assert_eq!(session.location(), LocationId::LakeFromMine);
        assert_eq!(session.inventory.get(Item::SkeletonKey(Area::Mine)), 1);
        assert!(console.events().contains(&Event::CombatWon(keyhunter_rules::Foe::GiantSpider)));
    }

    #[test]
    fn test_wrong_weapon_on_last_life_loses() {
        let session = Session::new("Ada")
            .at(LocationId::SpiderLair)
            .with_item(Item::Pickaxe)
            .with_lives(1);
        let mut game = game_at(session);
        let console = play(&mut game, &["1"]);

        let GameState::Lost(session) = game.state() else {
            panic!("expected lost, got {}", game.state().name());
        };
        assert_eq!(session.inventory.lives(), 0);
        assert_eq!(session.player.lives, 0);
        assert!(console.events().contains(&Event::Defeat));
        assert!(!console.events().iter().any(|e| matches!(e, Event::Respawned { .. })));
    }

    #[test]
    fn test_wrong_weapon_respawns_with_items() {
        let session = Session::new("Ada")
            .at(LocationId::SpiderLair)
            .with_item(Item::Pickaxe);
        let mut game = game_at(session);
        let console = play(&mut game, &["2"]);

        let session = playing(&game);
        assert_eq!(session.location(), LocationGraph::HUB);
        assert_eq!(session.inventory.lives(), 2);
        assert!(session.inventory.has(Item::Pickaxe));
        assert!(console.events().contains(&Event::Respawned { lives: 2 }));
    }

    #[test]
    fn test_full_mine_run() {
        let session = Session::new("Ada")
            .at(LocationId::MineTunnel)
            .with_item(Item::Matches);
        let mut game = game_at(session);
        let console = play(
            &mut game,
            &[
                "1", "1", "4", "1", "2", "pull", "p", "p", "P", "p", "p", "3", "1",
            ],
        );

        let session = playing(&game);
        assert_eq!(session.location(), LocationId::Crossroads);
        assert_eq!(session.inventory.get(Item::SkeletonKey(Area::Mine)), 1);
        assert_eq!(session.inventory.get(Item::SkeletonKey(Area::Lake)), 1);
        assert_eq!(session.inventory.get(Item::Pickaxe), 1);
        assert_eq!(count(&console, Event::is_dead_end), 2);
        assert_eq!(count(&console, |e| matches!(e, Event::DrillStroke { .. })), 5);
    }

    #[test]
    fn test_dig_needs_five_confirmations() {
        let session = Session::new("Ada")
            .at(LocationId::ForestClearing)
            .with_item(Item::GraveClue);
        let mut game = game_at(session);
        let console = play(
            &mut game,
            &["2", "dig", "dug", "DIG", "dig", " dig ", "dig", "2"],
        );

        let session = playing(&game);
        assert_eq!(session.location(), LocationId::ForestClearing);
        assert_eq!(session.inventory.get(Item::SkeletonKey(Area::Forest)), 1);
        assert_eq!(count(&console, |e| matches!(e, Event::DrillStroke { .. })), 5);
        assert!(console
            .events()
            .contains(&Event::Refused(Refusal::AlreadyLooted(Area::Forest))));
    }

    #[test]
    fn test_flooded_stairs() {
        let session = Session::new("Ada").at(LocationId::Town);
        let mut game = game_at(session);
        let console = play(&mut game, &["2", "1"]);

        let session = playing(&game);
        assert_eq!(session.location(), LocationGraph::HUB);
        assert_eq!(session.inventory.lives(), 2);
        assert!(console
            .events()
            .contains(&Event::HazardTaken(keyhunter_rules::HazardKind::FloodedStairs)));

        let mut game = game_at(Session::new("Ada").at(LocationId::Town));
        play(&mut game, &["2", "2"]);
        let session = playing(&game);
        assert_eq!(session.location(), LocationId::LeavingChurch);
        assert_eq!(session.inventory.lives(), MAX_LIVES);
    }

    #[test]
    fn test_inn_restores_one_life() {
        let session = Session::new("Ada").at(LocationId::Town).with_lives(1);
        let mut game = game_at(session);
        let console = play(&mut game, &["1"]);

        let session = playing(&game);
        assert_eq!(session.location(), LocationId::LeavingInn);
        assert_eq!(session.inventory.lives(), 2);
        assert_eq!(session.player.lives, 2);
        assert!(console.events().contains(&Event::LifeRestored { lives: 2 }));
    }

    #[test]
    fn test_temple_rejects_three_keys() {
        let mut game = game_at(three_keys());
        let console = play(&mut game, &["3"]);

        let session = playing(&game);
        assert_eq!(session.location(), LocationId::ForestClearing);
        assert!(console
            .events()
            .contains(&Event::Refused(Refusal::MissingSkeletonKeys)));
        assert!(!console.events().iter().any(Event::is_terminal));
    }

    #[test]
    fn test_temple_needs_machete() {
        let session = Session::new("Ada")
            .at(LocationId::ForestClearing)
            .with_item(Item::SkeletonKey(Area::Town))
            .with_item(Item::SkeletonKey(Area::Mine))
            .with_item(Item::SkeletonKey(Area::Lake))
            .with_item(Item::SkeletonKey(Area::Forest));
        let mut game = game_at(session);
        let console = play(&mut game, &["3"]);

        assert_eq!(playing(&game).location(), LocationId::ForestClearing);
        assert!(console
            .events()
            .contains(&Event::Refused(Refusal::MissingItem(Item::Machete))));
    }

    #[test]
    fn test_win_records_name() {
        let session = three_keys().with_item(Item::SkeletonKey(Area::Forest));
        let mut game = game_at(session);
        let console = play(&mut game, &["3", "Grace", "2"]);

        assert!(game.is_finished());
        assert!(console.events().contains(&Event::Victory));
        assert!(console.events().contains(&Event::Farewell));
        assert_eq!(game.ledger().list_all().unwrap(), vec!["Grace"]);

        let mut menu = Game::new(LocationGraph::standard(), game.ledger().clone());
        let console = play(&mut menu, &["4"]);
        assert!(console
            .events()
            .contains(&Event::Winners(vec!["Grace".to_string()])));
    }

    #[test]
    fn test_blank_winner_name_is_asked_again() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = WinnersFile::new(dir.path().join("winners.txt"));
        let session = three_keys().with_item(Item::SkeletonKey(Area::Forest));
        let mut game = Game::resume(LocationGraph::standard(), ledger, session);
        let mut console = ScriptedConsole::new(["3", "  ", "", "Grace", "2"]);
        game.run(&mut console).unwrap();

        assert!(game.is_finished());
        assert_eq!(console.remaining(), 0);
        assert!(console.events().contains(&Event::WinnerRecorded {
            name: "Grace".to_string()
        }));
        assert!(!console
            .events()
            .iter()
            .any(|e| matches!(e, Event::WinnerRecorded { name } if name.is_empty())));
        assert_eq!(game.ledger().list_all().unwrap(), vec!["Grace"]);
    }

    #[test]
    fn test_blank_player_name_is_asked_again() {
        let mut game = fresh_game();
        let console = play(&mut game, &["1", " ", "", "Ada"]);

        assert_eq!(playing(&game).player_name, "Ada");
        assert!(console.events().contains(&Event::Welcome {
            name: "Ada".to_string()
        }));
    }

    fn assert_lost(game: &Game<MemoryLedger>, console: &ScriptedConsole) {
        let GameState::Lost(session) = game.state() else {
            panic!("expected lost, got {}", game.state().name());
        };
        assert_eq!(session.inventory.lives(), 0);
        assert!(console.events().contains(&Event::Defeat));
        assert!(!console
            .events()
            .iter()
            .any(|e| matches!(e, Event::Respawned { .. })));
    }

    #[test]
    fn test_flooded_stairs_on_last_life_loses() {
        let session = Session::new("Ada").at(LocationId::Town).with_lives(1);
        let mut game = game_at(session);
        let console = play(&mut game, &["2", "1"]);

        assert!(console
            .events()
            .contains(&Event::HazardTaken(keyhunter_rules::HazardKind::FloodedStairs)));
        assert_lost(&game, &console);
    }

    #[test]
    fn test_manor_hallway_costs_a_life() {
        let session = Session::new("Ada")
            .at(LocationId::ManorGrounds)
            .with_item(Item::Crowbar);
        let mut game = game_at(session);
        let console = play(&mut game, &["1", "1"]);

        let session = playing(&game);
        assert_eq!(session.location(), LocationGraph::HUB);
        assert_eq!(session.inventory.lives(), 2);
        assert!(session.inventory.has(Item::Matches));
        assert!(console.events().contains(&Event::Respawned { lives: 2 }));

        let session = Session::new("Ada")
            .at(LocationId::ManorGrounds)
            .with_item(Item::Crowbar)
            .with_lives(1);
        let mut game = game_at(session);
        let console = play(&mut game, &["1", "1"]);

        assert!(console.events().contains(&Event::Arrived {
            location: LocationId::ManorKitchen,
            first_visit: true,
        }));
        assert_lost(&game, &console);
    }

    #[test]
    fn test_incomplete_win_set_falls_back() {
        let mut graph = LocationGraph::new();
        graph.add_location(Location {
            id: LocationId::Temple,
            on_enter: Vec::new(),
            exits: Exits::Auto(Transition::Win {
                refused: LocationId::ForestClearing,
            }),
        });
        graph.add_location(Location {
            id: LocationId::ForestClearing,
            on_enter: Vec::new(),
            exits: Exits::Menu(Vec::new()),
        });
        let mut game = Game::resume(graph, MemoryLedger::new(), three_keys().at(LocationId::Temple));
        let console = play(&mut game, &[]);

        assert_eq!(playing(&game).location(), LocationId::ForestClearing);
        assert!(console
            .events()
            .contains(&Event::Refused(Refusal::MissingSkeletonKeys)));
        assert!(!console.events().contains(&Event::Victory));
    }

    #[test]
    fn test_play_again_after_loss() {
        let session = Session::new("Ada").at(LocationId::SpiderLair).with_lives(1);
        let mut game = game_at(session);
        let console = play(&mut game, &["3", "1"]);

        assert_eq!(game.state(), &GameState::MainMenu);
        assert_eq!(count(&console, |e| matches!(e, Event::Title)), 1);
    }

    #[test]
    fn test_main_menu_screens() {
        let mut game = fresh_game();
        let console = play(&mut game, &["2", "3", "4"]);

        assert_eq!(game.state(), &GameState::MainMenu);
        assert!(console.events().contains(&Event::HowTo));
        assert!(console.events().contains(&Event::Credits));
        assert!(console.events().contains(&Event::Winners(Vec::new())));
    }

    #[test]
    fn test_dead_end_loops_to_same_menu() {
        let mut game = game_at(Session::new("Ada").at(LocationId::MineRoutes));
        for _ in 0..3 {
            play(&mut game, &["1"]);
            assert_eq!(playing(&game).location(), LocationId::MineRoutes);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_random_play_stays_consistent(
            answers in proptest::collection::vec(
                prop::sample::select(vec!["1", "2", "3", "4", "p", "dig", "Ada"]),
                0..200,
            )
        ) {
            let mut game = fresh_game();
            let mut console = ScriptedConsole::new(answers);

            while !game.is_finished() {
                if game.step(&mut console).is_err() {
                    break;
                }
                match game.state() {
                    GameState::Playing(session) => {
                        prop_assert!(session.inventory.lives() >= 1);
                        prop_assert!(session.inventory.lives() <= MAX_LIVES);
                        prop_assert_eq!(session.player.lives, session.inventory.lives());
                        for key in Item::SKELETON_KEYS {
                            prop_assert!(session.inventory.get(key) <= 1);
                        }
                    }
                    GameState::Won(session) => prop_assert!(session.inventory.is_win_ready()),
                    GameState::Lost(session) => prop_assert_eq!(session.inventory.lives(), 0),
                    GameState::MainMenu | GameState::Finished => {}
                }
            }
        }
    }
}
