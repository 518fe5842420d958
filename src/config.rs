use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{SessionParams, SymbolAlphabet};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub symbols: SymbolConfig,
    pub display: DisplayConfig,
}

/// Parameters used by `--quick` and offered as the custom-game starting point.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_len: usize,
    pub players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        let classic = SessionParams::CLASSIC;
        GameConfig {
            rows: classic.rows,
            cols: classic.cols,
            win_len: classic.win_len,
            players: classic.n_players,
        }
    }
}

impl GameConfig {
    pub fn params(&self) -> SessionParams {
        SessionParams {
            rows: self.rows,
            cols: self.cols,
            win_len: self.win_len,
            n_players: self.players,
        }
    }
}

/// Player symbols: a reserved pair for two-player games plus the pool used
/// for three or more players. Its length caps the player count.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SymbolConfig {
    pub classic: String,
    pub extended: String,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        SymbolConfig {
            classic: "XO".to_string(),
            extended: "ABCDEFGHIJKL".to_string(),
        }
    }
}

impl SymbolConfig {
    pub fn alphabet(&self) -> Result<SymbolAlphabet, ConfigError> {
        SymbolAlphabet::new(&self.classic, &self.extended)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Clear the terminal before each board redraw
    pub clear_screen: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { clear_screen: true }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let alphabet = self.symbols.alphabet()?;
        self.game
            .params()
            .validate(alphabet.max_players())
            .map_err(|e| ConfigError::Validation(format!("game: {e}")))?;
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
