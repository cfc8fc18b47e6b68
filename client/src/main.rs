mod command;
mod render;
mod runner;

use std::time::Duration;

use clap::{Parser, ValueEnum};
use gomoku_core::config::{ConfigManager, EngineConfig};
use gomoku_core::games::gomoku::{GameMode, GomokuSession};
use gomoku_core::storage::{FileKeyValueStore, SessionStore};
use gomoku_core::{log, log_warn, logger};
use tokio::io::BufReader;

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Two,
    Computer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Two => GameMode::TwoHuman,
            ModeArg::Computer => GameMode::HumanVsComputer,
        }
    }
}

#[derive(Parser)]
#[command(name = "gomoku_client", about = "Connect-five in the terminal")]
struct Args {
    /// Directory holding gomoku_config.yaml (defaults to the executable's directory)
    #[arg(long)]
    config_dir: Option<String>,

    /// Overrides data_dir from the config
    #[arg(long)]
    data_dir: Option<String>,

    /// Mode for a new game when no saved game exists
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn default_config_dir() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.to_string_lossy().into_owned();
    }
    ".".to_string()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_dir = args.config_dir.unwrap_or_else(default_config_dir);
    let config_manager: ConfigManager<_, EngineConfig> = ConfigManager::from_yaml_dir(&config_dir);
    let mut config = config_manager.get_config()?;

    let prefix = if args.use_log_prefix {
        Some("Gomoku".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, config.log_level);

    match config_manager.has_stored_config() {
        Ok(false) => {
            if let Err(e) = config_manager.set_config(&config) {
                log_warn!("Could not write default config: {}", e);
            }
        }
        Ok(true) => {}
        Err(e) => log_warn!("Could not check for config file: {}", e),
    }

    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(mode) = args.mode {
        config.default_mode = mode.into();
    }

    log!("Saving games to {}", config.data_dir);
    let store = SessionStore::new(FileKeyValueStore::new(config.data_dir.as_str()));
    let mut session = GomokuSession::open(store, config.session_options());

    let input = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    runner::run_game(
        &mut session,
        Duration::from_millis(config.computer_delay_ms),
        input,
        &mut stdout,
    )
    .await?;

    Ok(())
}
