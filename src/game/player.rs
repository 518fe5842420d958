use super::board::EMPTY_GLYPH;
use crate::error::ConfigError;

/// Fewest players a game can have.
pub const MIN_PLAYERS: usize = 2;

/// Symbols players are drawn from. Two-player games use the reserved
/// classic pair; larger games take the first `n` extended symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolAlphabet {
    classic: [char; 2],
    extended: Vec<char>,
}

impl SymbolAlphabet {
    pub fn new(classic: &str, extended: &str) -> Result<Self, ConfigError> {
        let classic_chars: Vec<char> = classic.chars().collect();
        let classic: [char; 2] = classic_chars.as_slice().try_into().map_err(|_| {
            ConfigError::Validation(format!(
                "symbols.classic must have exactly 2 symbols, got {}",
                classic_chars.len()
            ))
        })?;
        let extended: Vec<char> = extended.chars().collect();

        if extended.len() < MIN_PLAYERS {
            return Err(ConfigError::Validation(
                "symbols.extended must have at least 2 symbols".into(),
            ));
        }

        let mut seen = Vec::with_capacity(classic.len() + extended.len());
        for &symbol in classic.iter().chain(&extended) {
            if symbol == EMPTY_GLYPH || symbol.is_whitespace() || symbol.is_control() {
                return Err(ConfigError::Validation(format!(
                    "symbol {symbol:?} is reserved and cannot be used for a player"
                )));
            }
            if seen.contains(&symbol) {
                return Err(ConfigError::Validation(format!(
                    "symbol {symbol:?} appears more than once"
                )));
            }
            seen.push(symbol);
        }

        Ok(SymbolAlphabet { classic, extended })
    }

    /// Largest supported player count.
    pub fn max_players(&self) -> usize {
        self.extended.len().max(MIN_PLAYERS)
    }

    /// Symbols for an `n`-player game, in turn order.
    pub fn symbols_for(&self, n_players: usize) -> Option<Vec<char>> {
        match n_players {
            2 => Some(self.classic.to_vec()),
            n if n > 2 && n <= self.extended.len() => Some(self.extended[..n].to_vec()),
            _ => None,
        }
    }
}

impl Default for SymbolAlphabet {
    fn default() -> Self {
        SymbolAlphabet {
            classic: ['X', 'O'],
            extended: "ABCDEFGHIJKL".chars().collect(),
        }
    }
}

/// Display name for a player index
pub fn player_label(index: usize, symbol: char) -> String {
    format!("Player {} ({})", index + 1, symbol)
}

/// Round-robin turn index in `[0, n_players)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOrder {
    current: usize,
    n_players: usize,
}

impl TurnOrder {
    pub fn new(n_players: usize) -> Self {
        debug_assert!(n_players > 0);
        TurnOrder {
            current: 0,
            n_players,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn n_players(&self) -> usize {
        self.n_players
    }

    /// Pass the turn to the next player
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.n_players;
    }

    /// Hand the turn back to the previous player, wrapping 0 to the last
    pub fn rewind(&mut self) {
        self.current = (self.current + self.n_players - 1) % self.n_players;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alphabet() {
        let alphabet = SymbolAlphabet::default();
        assert_eq!(alphabet.max_players(), 12);
        assert_eq!(alphabet.symbols_for(2), Some(vec!['X', 'O']));
        assert_eq!(alphabet.symbols_for(3), Some(vec!['A', 'B', 'C']));
        assert_eq!(alphabet.symbols_for(12).map(|s| s.len()), Some(12));
        assert_eq!(alphabet.symbols_for(13), None);
        assert_eq!(alphabet.symbols_for(1), None);
    }

    #[test]
    fn test_custom_alphabet() {
        let alphabet = SymbolAlphabet::new("RY", "123456").unwrap();
        assert_eq!(alphabet.max_players(), 6);
        assert_eq!(alphabet.symbols_for(2), Some(vec!['R', 'Y']));
        assert_eq!(alphabet.symbols_for(4), Some(vec!['1', '2', '3', '4']));
        assert_eq!(alphabet.symbols_for(7), None);
    }

    #[test]
    fn test_alphabet_rejects_bad_symbols() {
        assert!(SymbolAlphabet::new("X", "ABC").is_err());
        assert!(SymbolAlphabet::new("XO", "A").is_err());
        assert!(SymbolAlphabet::new("X.", "ABC").is_err());
        assert!(SymbolAlphabet::new("XO", "AB C").is_err());
        assert!(SymbolAlphabet::new("XO", "ABX").is_err());
        assert!(SymbolAlphabet::new("XX", "ABC").is_err());
    }

    #[test]
    fn test_player_label() {
        assert_eq!(player_label(0, 'X'), "Player 1 (X)");
        assert_eq!(player_label(11, 'L'), "Player 12 (L)");
    }

    #[test]
    fn test_turn_order_cycles() {
        let mut turn = TurnOrder::new(3);
        for k in 1..=7 {
            turn.advance();
            assert_eq!(turn.current(), k % 3);
        }
    }

    #[test]
    fn test_turn_order_rewind_wraps() {
        let mut turn = TurnOrder::new(4);
        turn.rewind();
        assert_eq!(turn.current(), 3);
        turn.advance();
        assert_eq!(turn.current(), 0);
    }
}
