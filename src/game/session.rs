//! One game from first move to win, draw or quit.
//!
//! The caller owns the input loop: it hands each raw command line to
//! [`Session::step`] and renders the board afterwards.

use std::fmt;

use tracing::{debug, info};

use super::board::{Board, DropError};
use super::history::{Move, MoveHistory};
use super::player::{player_label, SymbolAlphabet, TurnOrder, MIN_PLAYERS};
use super::win::check_win;
use crate::error::{HistoryError, MoveError, SessionError};

/// Smallest allowed rows/cols.
pub const MIN_DIM: usize = 5;
/// Largest allowed rows/cols.
pub const MAX_DIM: usize = 30;
/// Shortest allowed winning line.
pub const MIN_WIN_LEN: usize = 4;

/// Commands accepted by [`Session::step`], as shown by `help`.
pub const HELP_LINES: [&str; 4] = [
    "<n>   play column n",
    "u     undo the last move",
    "help  show this list",
    "q     quit to the menu",
];

/// Board size, line length and player count for a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionParams {
    pub rows: usize,
    pub cols: usize,
    pub win_len: usize,
    pub n_players: usize,
}

impl SessionParams {
    /// 6x7, connect four, two players.
    pub const CLASSIC: SessionParams = SessionParams {
        rows: 6,
        cols: 7,
        win_len: 4,
        n_players: 2,
    };

    /// Check every parameter against its range.
    pub fn validate(&self, max_players: usize) -> Result<(), SessionError> {
        if !(MIN_DIM..=MAX_DIM).contains(&self.rows) {
            return Err(SessionError::Rows {
                got: self.rows,
                min: MIN_DIM,
                max: MAX_DIM,
            });
        }
        if !(MIN_DIM..=MAX_DIM).contains(&self.cols) {
            return Err(SessionError::Cols {
                got: self.cols,
                min: MIN_DIM,
                max: MAX_DIM,
            });
        }
        let max_win_len = self.rows.min(self.cols);
        if !(MIN_WIN_LEN..=max_win_len).contains(&self.win_len) {
            return Err(SessionError::WinLen {
                got: self.win_len,
                min: MIN_WIN_LEN,
                max: max_win_len,
            });
        }
        if !(MIN_PLAYERS..=max_players).contains(&self.n_players) {
            return Err(SessionError::Players {
                got: self.n_players,
                min: MIN_PLAYERS,
                max: max_players,
            });
        }
        Ok(())
    }
}

/// A parsed command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Undo,
    /// 1-based column as typed; range is checked against the board later
    Column(i64),
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, MoveError> {
        let trimmed = line.trim();
        match trimmed {
            "q" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "u" => Ok(Command::Undo),
            _ => trimmed
                .parse::<i64>()
                .map(Command::Column)
                .map_err(|_| MoveError::InvalidInput(trimmed.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won(usize),
    Drawn,
    Quit,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Status::InProgress
    }
}

/// Result of one [`Session::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Keep looping; the notice, if any, should be shown to the players
    Continue(Option<Notice>),
    /// Player index that completed a line
    Won(usize),
    Drawn,
    Quit,
}

/// Feedback for a step that did not end the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Help,
    Rejected(MoveError),
    NothingToUndo,
    Undone(Move),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Help => {
                write!(f, "Commands:")?;
                for line in HELP_LINES {
                    write!(f, "\n  {line}")?;
                }
                Ok(())
            }
            Notice::Rejected(err) => write!(f, "{err}"),
            Notice::NothingToUndo => write!(f, "{}", HistoryError::Empty),
            Notice::Undone(mv) => write!(f, "Took back {} in column {}", mv.symbol, mv.col + 1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    history: MoveHistory,
    turn: TurnOrder,
    win_len: usize,
    symbols: Vec<char>,
    status: Status,
}

impl Session {
    /// Start a fresh game with an empty board and history.
    pub fn new(params: SessionParams, alphabet: &SymbolAlphabet) -> Result<Self, SessionError> {
        params.validate(alphabet.max_players())?;
        let symbols = alphabet
            .symbols_for(params.n_players)
            .ok_or(SessionError::Players {
                got: params.n_players,
                min: MIN_PLAYERS,
                max: alphabet.max_players(),
            })?;
        let board = Board::new(params.rows, params.cols)?;

        info!(
            rows = params.rows,
            cols = params.cols,
            win_len = params.win_len,
            players = params.n_players,
            "session started"
        );

        Ok(Session {
            board,
            history: MoveHistory::new(),
            turn: TurnOrder::new(params.n_players),
            win_len: params.win_len,
            symbols,
            status: Status::InProgress,
        })
    }

    /// Run one command line through the turn state machine.
    pub fn step(&mut self, line: &str) -> Step {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => return Step::Continue(Some(Notice::Rejected(err))),
        };

        match command {
            Command::Quit => {
                if self.status == Status::InProgress {
                    self.status = Status::Quit;
                    info!(moves = self.history.len(), "session quit");
                }
                Step::Quit
            }
            Command::Help => Step::Continue(Some(Notice::Help)),
            Command::Undo => self.undo(),
            Command::Column(column) => self.play(column),
        }
    }

    fn play(&mut self, column: i64) -> Step {
        if self.status.is_terminal() {
            return Step::Continue(Some(Notice::Rejected(MoveError::GameOver)));
        }

        let cols = self.board.cols();
        if column < 1 || column > cols as i64 {
            return Step::Continue(Some(Notice::Rejected(MoveError::InvalidColumn {
                column,
                cols,
            })));
        }

        let col = (column - 1) as usize;
        let symbol = self.current_symbol();
        let row = match self.board.drop_piece(col, symbol) {
            Ok(row) => row,
            Err(DropError::ColumnFull) => {
                return Step::Continue(Some(Notice::Rejected(MoveError::ColumnFull(col + 1))))
            }
            Err(DropError::InvalidColumn) => {
                return Step::Continue(Some(Notice::Rejected(MoveError::InvalidColumn {
                    column,
                    cols,
                })))
            }
        };

        self.history.push(Move { row, col, symbol });
        debug!(player = self.turn.current(), row, col, %symbol, "piece dropped");

        if check_win(&self.board, row, col, symbol, self.win_len) {
            let winner = self.turn.current();
            self.status = Status::Won(winner);
            info!(winner, moves = self.history.len(), "session won");
            return Step::Won(winner);
        }

        if self.board.is_full() {
            self.status = Status::Drawn;
            info!(moves = self.history.len(), "session drawn");
            return Step::Drawn;
        }

        self.turn.advance();
        Step::Continue(None)
    }

    fn undo(&mut self) -> Step {
        if self.status.is_terminal() {
            return Step::Continue(Some(Notice::Rejected(MoveError::GameOver)));
        }

        match self.history.undo_last(&mut self.board, &mut self.turn) {
            Ok(mv) => {
                debug!(row = mv.row, col = mv.col, symbol = %mv.symbol, "move undone");
                Step::Continue(Some(Notice::Undone(mv)))
            }
            Err(HistoryError::Empty) => Step::Continue(Some(Notice::NothingToUndo)),
        }
    }

    /// Text grid of the current board
    pub fn render_board(&self) -> String {
        self.board.to_string()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    pub fn win_len(&self) -> usize {
        self.win_len
    }

    pub fn n_players(&self) -> usize {
        self.turn.n_players()
    }

    /// Index of the player to move next
    pub fn turn(&self) -> usize {
        self.turn.current()
    }

    pub fn current_symbol(&self) -> char {
        self.symbols[self.turn.current()]
    }

    /// Label such as `Player 2 (O)`
    pub fn player_name(&self, index: usize) -> String {
        player_label(index, self.symbols[index])
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn status(&self) -> Status {
        self.status
    }
}
