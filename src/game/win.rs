//! Win detection through the most recently placed piece.

use super::board::{Board, Cell};

/// The four undirected lines through a cell: horizontal, vertical, `\` and `/`.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Count matching cells from (row, col) stepping by (dr, dc), origin included.
fn count_dir(board: &Board, row: usize, col: usize, (dr, dc): (isize, isize), symbol: char) -> usize {
    let (mut r, mut c) = (row as isize, col as isize);
    let mut count = 0;
    while board.cell_at(r, c) == Some(Cell::Piece(symbol)) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Length of the run of `symbol` through (row, col) along one axis.
pub fn run_length(board: &Board, row: usize, col: usize, axis: (isize, isize), symbol: char) -> usize {
    let ahead = count_dir(board, row, col, axis, symbol);
    let behind = count_dir(board, row, col, (-axis.0, -axis.1), symbol);
    // the origin is counted by both walks
    (ahead + behind).saturating_sub(1)
}

/// Check if the piece at (row, col) completes a line of at least `win_len`.
pub fn check_win(board: &Board, row: usize, col: usize, symbol: char, win_len: usize) -> bool {
    AXES
        .iter()
        .any(|&axis| run_length(board, row, col, axis, symbol) >= win_len)
}
