//! Core Connect-N game logic: board, win detection, move history, players
//! and the session state machine that ties them together.

mod board;
mod history;
mod player;
mod session;
mod win;

pub use board::{Board, Cell, DropError, Lines, EMPTY_GLYPH};
pub use history::{Move, MoveHistory};
pub use player::{player_label, SymbolAlphabet, TurnOrder, MIN_PLAYERS};
pub use session::{
    Command, Notice, Session, SessionParams, Status, Step, HELP_LINES, MAX_DIM, MIN_DIM,
    MIN_WIN_LEN,
};
pub use win::{check_win, run_length};
