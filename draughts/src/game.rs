//! Game session
//!
//! [`Game`] wraps a [`Board`] into a complete playable session: it receives
//! square actions from the outside (say, clicks from a UI), feeds them to
//! the board and keeps track of the winner. Once the game is over, further
//! actions are ignored until the game is reset.

use crate::board::{Action, Board};
use crate::types::{Color, Coord, File, Rank};

/// A running game of draughts.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    winner: Option<Color>,
}

impl Game {
    /// Creates a game in the starting position.
    pub fn new() -> Game {
        Game {
            board: Board::initial(),
            winner: None,
        }
    }

    /// Puts the game back into the starting position.
    pub fn reset(&mut self) {
        self.board = Board::initial();
        self.winner = None;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Applies a user action on the square in column `col` and row `row`,
    /// both counted from zero starting at the top left corner of the board.
    ///
    /// Out-of-range coordinates and actions after the game has ended are
    /// ignored. This is the only entry point that mutates the game.
    pub fn on_board_action(&mut self, col: usize, row: usize) -> Action {
        if self.winner.is_some() || col >= 10 || row >= 10 {
            return Action::Ignored;
        }
        let sq = Coord::from_parts(File::from_index(col), Rank::from_index(row));
        let action = self.board.handle_action(sq);
        self.winner = self.board.winner();
        action
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.board().side(), Color::White);
        assert_eq!(game.winner(), None);
        assert!(!game.is_finished());
    }

    #[test]
    fn test_bounds() {
        let mut game = Game::new();
        assert_eq!(game.on_board_action(10, 0), Action::Ignored);
        assert_eq!(game.on_board_action(0, 10), Action::Ignored);
        assert_eq!(game.on_board_action(usize::MAX, usize::MAX), Action::Ignored);
    }

    #[test]
    fn test_play() {
        let mut game = Game::new();

        // White pushes the man from b4 to a5.
        assert!(matches!(game.on_board_action(1, 6), Action::Selected(_)));
        assert!(matches!(
            game.on_board_action(0, 5),
            Action::Moved { turn_over: true, .. }
        ));
        assert_eq!(game.board().side(), Color::Black);

        // Black answers with a7 to b6.
        assert!(matches!(game.on_board_action(0, 3), Action::Selected(_)));
        assert!(matches!(
            game.on_board_action(1, 4),
            Action::Moved { turn_over: true, .. }
        ));
        assert_eq!(game.board().side(), Color::White);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_finish_and_reset() {
        let mut game = Game::new();
        game.board = crate::board::Board::from_fen("10/10/10/10/10/2m7/1M8/10/10/10 w").unwrap();

        // Capture the last black piece.
        game.on_board_action(1, 6);
        assert!(matches!(game.on_board_action(3, 4), Action::Moved { .. }));
        assert_eq!(game.winner(), Some(Color::White));
        assert!(game.is_finished());

        // The game is over: every further action is ignored.
        assert_eq!(game.on_board_action(9, 0), Action::Ignored);

        game.reset();
        assert_eq!(game.winner(), None);
        assert_eq!(game.board().pieces().count(), 40);
    }
}
