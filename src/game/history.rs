use super::board::Board;
use super::player::TurnOrder;
use crate::error::HistoryError;

/// One placed piece. Never mutated once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub symbol: char,
}

/// Chronological log of applied moves, undone from the end.
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        MoveHistory { moves: Vec::new() }
    }

    /// Append a move. `Vec` growth is amortized O(1).
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Remove and return the most recent move.
    pub fn pop_last(&mut self) -> Result<Move, HistoryError> {
        self.moves.pop().ok_or(HistoryError::Empty)
    }

    /// Take back the most recent move: clear its cell and hand the turn back
    /// to the player who made it. Nothing changes when the log is empty.
    pub fn undo_last(&mut self, board: &mut Board, turn: &mut TurnOrder) -> Result<Move, HistoryError> {
        let mv = self.pop_last()?;
        board.remove(mv.row, mv.col);
        turn.rewind();
        Ok(mv)
    }

    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
