use anyhow::{Context, Result};
use keyhunter::{Config, Game, TerminalConsole, WinnersFile};
use keyhunter_rules::LocationGraph;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let (config, config_error) = Config::load_lenient(Config::DEFAULT_PATH);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = config_error {
        warn!(error = %e, path = Config::DEFAULT_PATH, "ignoring config file, using defaults");
    }

    if !config.color {
        colored::control::set_override(false);
    }

    info!(winners_file = %config.winners_file.display(), "starting keyhunter");

    let ledger = WinnersFile::new(&config.winners_file);
    let mut game = Game::new(LocationGraph::standard(), ledger);
    let mut console = TerminalConsole::stdio().with_pause(config.pause());

    game.run(&mut console).context("game aborted")?;
    Ok(())
}
