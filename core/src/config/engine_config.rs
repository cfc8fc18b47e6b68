use serde::{Deserialize, Serialize};

use crate::games::gomoku::{GameMode, SessionOptions};
use crate::logger::LogLevel;
use super::Validate;

const MAX_COMPUTER_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct EngineConfig {
    /// Directory holding the saved session.
    pub data_dir: String,
    pub default_mode: GameMode,
    /// Pause before the computer's reply is shown.
    pub computer_delay_ms: u64,
    #[serde(default = "default_autosave")]
    pub autosave: bool,
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_autosave() -> bool {
    true
}

impl EngineConfig {
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            default_mode: self.default_mode,
            autosave: self.autosave,
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        if self.data_dir.trim().is_empty() {
            return Err("data_dir must not be empty".to_string());
        }
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "computer_delay_ms must not exceed {}",
                MAX_COMPUTER_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_dir: "gomoku_data".to_string(),
            default_mode: GameMode::HumanVsComputer,
            computer_delay_ms: 400,
            autosave: true,
            log_level: LogLevel::Info,
        }
    }
}
