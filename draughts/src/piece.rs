//! Piece entity and its per-turn state

use crate::moves::MoveList;
use crate::types::{Cell, Color, Coord, Kind};
use draughts_base::geometry;

/// Reference to a piece in the board's owning piece list.
///
/// Ids are plain indices. The end-of-turn sweep compacts the list and
/// reindexes the grid, so an id is only meaningful until the next sweep;
/// every structure holding ids (the grid and the per-piece move caches) is
/// rebuilt right after it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    pub(crate) const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// A single piece on the board.
///
/// The owner is fixed at creation. The kind goes `Man -> King` exactly once
/// and never back; `captured` is set exactly once and never cleared. A
/// captured piece stays addressable (and keeps its grid cell) until the board
/// sweeps it at the end of the turn, so a multi-jump in progress still sees
/// it as an obstacle.
#[derive(Debug, Clone)]
pub struct Piece {
    owner: Color,
    kind: Kind,
    pos: Coord,
    captured: bool,
    selected: bool,
    moves: MoveList,
    captures: MoveList,
}

impl Piece {
    pub(crate) fn new(owner: Color, kind: Kind, pos: Coord) -> Piece {
        Piece {
            owner,
            kind,
            pos,
            captured: false,
            selected: false,
            moves: MoveList::new(),
            captures: MoveList::new(),
        }
    }

    #[inline]
    pub fn owner(&self) -> Color {
        self.owner
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[inline]
    pub fn pos(&self) -> Coord {
        self.pos
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.kind == Kind::King
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    #[inline]
    pub fn cell(&self) -> Cell {
        Cell::from_parts(self.owner, self.kind)
    }

    /// Returns `true` if the piece may make a quiet move with the given rank
    /// delta. A man only advances toward the opponent's home rank; a king
    /// moves either way. Captures are not subject to this restriction.
    #[inline]
    pub fn can_advance(&self, delta_rank: isize) -> bool {
        self.is_king() || delta_rank == geometry::forward_delta(self.owner)
    }

    /// Quiet destinations cached by the last legality pass.
    #[inline]
    pub fn moves(&self) -> &MoveList {
        &self.moves
    }

    /// Capture landings cached by the last legality pass.
    #[inline]
    pub fn captures(&self) -> &MoveList {
        &self.captures
    }

    #[inline]
    pub fn has_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    /// The list this piece is allowed to play from: captures when a capture
    /// is pending anywhere on the board, quiet moves otherwise.
    #[inline]
    pub fn playable(&self, forced_capture: bool) -> &MoveList {
        if forced_capture {
            &self.captures
        } else {
            &self.moves
        }
    }

    pub(crate) fn set_pos(&mut self, pos: Coord) {
        self.pos = pos;
    }

    pub(crate) fn promote(&mut self) {
        self.kind = Kind::King;
    }

    pub(crate) fn mark_captured(&mut self) {
        self.captured = true;
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Replaces the cached move lists. Only the board calls this; a piece
    /// never recomputes its own legality.
    pub(crate) fn set_legal(&mut self, moves: MoveList, captures: MoveList) {
        self.moves = moves;
        self.captures = captures;
    }

    pub(crate) fn clear_legal(&mut self) {
        self.moves.clear();
        self.captures.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;
    use crate::types::{File, Rank};
    use std::str::FromStr;

    #[test]
    fn test_advance() {
        let white = Piece::new(Color::White, Kind::Man, Coord::from_str("b4").unwrap());
        assert!(white.can_advance(-1));
        assert!(!white.can_advance(1));

        let black = Piece::new(Color::Black, Kind::Man, Coord::from_str("c7").unwrap());
        assert!(black.can_advance(1));
        assert!(!black.can_advance(-1));

        let king = Piece::new(Color::White, Kind::King, Coord::from_str("e5").unwrap());
        assert!(king.can_advance(-1));
        assert!(king.can_advance(1));
    }

    #[test]
    fn test_state_machine() {
        let mut p = Piece::new(Color::Black, Kind::Man, Coord::from_str("d8").unwrap());
        assert!(!p.is_king());
        p.promote();
        assert!(p.is_king());
        p.promote();
        assert!(p.is_king());

        assert!(!p.is_captured());
        p.mark_captured();
        assert!(p.is_captured());
        p.mark_captured();
        assert!(p.is_captured());
        assert_eq!(p.owner(), Color::Black);
    }

    #[test]
    fn test_playable() {
        let mut p = Piece::new(Color::White, Kind::Man, Coord::from_str("b2").unwrap());
        let mut moves = MoveList::new();
        moves.push(Move::quiet(Coord::from_str("a3").unwrap()));
        let mut captures = MoveList::new();
        captures.push(Move::capture(Coord::from_str("d4").unwrap(), PieceId(7)));
        p.set_legal(moves.clone(), captures.clone());

        assert!(p.has_capture());
        assert_eq!(p.playable(false), &moves);
        assert_eq!(p.playable(true), &captures);

        p.clear_legal();
        assert!(!p.has_capture());
        assert!(p.playable(true).is_empty());
    }

    #[test]
    fn test_cell() {
        let p = Piece::new(
            Color::White,
            Kind::Man,
            Coord::from_parts(File::B, Rank::R2),
        );
        assert_eq!(p.cell(), Cell::from_parts(Color::White, Kind::Man));
    }
}
