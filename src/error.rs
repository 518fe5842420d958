use std::path::PathBuf;

/// The board grid could not be allocated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not allocate a {rows}x{cols} board")]
pub struct AllocationError {
    pub rows: usize,
    pub cols: usize,
}

/// Errors that can occur when starting a game session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("rows must be in [{min}, {max}], got {got}")]
    Rows { got: usize, min: usize, max: usize },

    #[error("columns must be in [{min}, {max}], got {got}")]
    Cols { got: usize, min: usize, max: usize },

    #[error("win length must be in [{min}, {max}], got {got}")]
    WinLen { got: usize, min: usize, max: usize },

    #[error("players must be in [{min}, {max}], got {got}")]
    Players { got: usize, min: usize, max: usize },

    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

/// A rejected command. The session is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid input '{0}' (type 'help' for commands)")]
    InvalidInput(String),

    #[error("column {column} is out of range (1-{cols})")]
    InvalidColumn { column: i64, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is over")]
    GameOver,
}

/// Undo with no recorded moves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("nothing to undo")]
    Empty,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that end the interactive front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot start game: {0}")]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_display() {
        let err = SessionError::WinLen {
            got: 9,
            min: 4,
            max: 6,
        };
        assert_eq!(err.to_string(), "win length must be in [4, 6], got 9");

        let err: SessionError = AllocationError { rows: 30, cols: 30 }.into();
        assert_eq!(err.to_string(), "could not allocate a 30x30 board");
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::InvalidColumn { column: 9, cols: 7 };
        assert_eq!(err.to_string(), "column 9 is out of range (1-7)");
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 3 is full");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.rows must be in [5, 30]".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.rows must be in [5, 30]"
        );
    }
}
