use std::io::{self, BufRead, Write};

use super::prompt::prompt_in_range;
use crate::game::{
    SessionParams, SymbolAlphabet, HELP_LINES, MAX_DIM, MIN_DIM, MIN_PLAYERS, MIN_WIN_LEN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Classic,
    Custom,
    Rules,
    Quit,
}

impl MenuChoice {
    pub fn parse(line: &str) -> Option<MenuChoice> {
        match line.trim() {
            "1" => Some(MenuChoice::Classic),
            "2" => Some(MenuChoice::Custom),
            "3" => Some(MenuChoice::Rules),
            "0" | "q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "=== Connect-N ===")?;
    writeln!(out, "  1) Classic game (6x7, connect 4, 2 players)")?;
    writeln!(out, "  2) Custom game")?;
    writeln!(out, "  3) Rules")?;
    writeln!(out, "  0) Quit")?;
    write!(out, "Choose an option: ")?;
    out.flush()
}

pub fn render_rules<W: Write>(out: &mut W, alphabet: &SymbolAlphabet) -> io::Result<()> {
    writeln!(out, "Players take turns dropping a piece into a column.")?;
    writeln!(out, "The piece falls to the lowest empty cell of that column.")?;
    writeln!(
        out,
        "The first to line up the required number of pieces horizontally,"
    )?;
    writeln!(out, "vertically or diagonally wins. A full board is a draw.")?;
    writeln!(
        out,
        "Boards are {MIN_DIM}-{MAX_DIM} cells per side; up to {} players.",
        alphabet.max_players()
    )?;
    writeln!(out, "In game commands:")?;
    for line in HELP_LINES {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

/// Ask for every custom-game parameter, each bounded by the ones before it.
pub fn read_custom_params<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    alphabet: &SymbolAlphabet,
) -> io::Result<Option<SessionParams>> {
    let Some(rows) = prompt_in_range(input, out, "Rows", MIN_DIM..=MAX_DIM)? else {
        return Ok(None);
    };
    let Some(cols) = prompt_in_range(input, out, "Columns", MIN_DIM..=MAX_DIM)? else {
        return Ok(None);
    };
    let win_range = MIN_WIN_LEN..=rows.min(cols);
    let Some(win_len) = prompt_in_range(input, out, "Pieces in a row to win", win_range)? else {
        return Ok(None);
    };
    let player_range = MIN_PLAYERS..=alphabet.max_players();
    let Some(n_players) = prompt_in_range(input, out, "Players", player_range)? else {
        return Ok(None);
    };

    Ok(Some(SessionParams {
        rows,
        cols,
        win_len,
        n_players,
    }))
}
