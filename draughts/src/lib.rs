//! # draughts
//!
//! International draughts library for Rust: a 10x10 board, men and flying
//! kings, mandatory captures with multi-jump chains, promotion and win
//! detection.
//!
//! The library is built around interactive play. A [`Game`] consumes square
//! actions one at a time, the way a UI would deliver clicks, and the
//! [`Board`] underneath keeps the legal move lists of every piece up to
//! date. Positions can be exchanged as FEN-like strings.
//!
//! ## Example
//!
//! ```
//! use draughts::{Action, Color, Game};
//!
//! let mut game = Game::new();
//!
//! // White selects the man on b4 and pushes it to a5.
//! assert!(matches!(game.on_board_action(1, 6), Action::Selected(_)));
//! assert!(matches!(game.on_board_action(0, 5), Action::Moved { .. }));
//!
//! assert_eq!(game.board().side(), Color::Black);
//! assert_eq!(game.winner(), None);
//! ```

pub mod board;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod piece;

pub use draughts_base::{geometry, types};

pub use board::{Action, Board, PrettyStyle, RawBoard};
pub use game::Game;
pub use moves::{Move, MoveList};
pub use piece::{Piece, PieceId};
pub use types::{Cell, Color, Coord, File, Kind, Rank};
