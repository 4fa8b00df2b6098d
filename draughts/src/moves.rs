//! Moves and move lists

use crate::piece::PieceId;
use crate::types::Coord;

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::slice;

use arrayvec::ArrayVec;

/// A single playable entry from a piece's cached move lists: the landing
/// square, plus the jumped piece for captures.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    dst: Coord,
    victim: Option<PieceId>,
}

impl Move {
    #[inline]
    pub fn quiet(dst: Coord) -> Move {
        Move { dst, victim: None }
    }

    #[inline]
    pub(crate) fn capture(dst: Coord, victim: PieceId) -> Move {
        Move {
            dst,
            victim: Some(victim),
        }
    }

    #[inline]
    pub fn dst(&self) -> Coord {
        self.dst
    }

    #[inline]
    pub fn victim(&self) -> Option<PieceId> {
        self.victim
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.victim.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.victim {
            Some(_) => write!(f, "x{}", self.dst),
            None => write!(f, "-{}", self.dst),
        }
    }
}

/// List of moves for a single piece.
///
/// Both diagonals through a square hold at most 18 other squares, so 32 is
/// a comfortable bound even for a flying king's capture landings.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct MoveList(ArrayVec<Move, 32>);

impl MoveList {
    pub fn new() -> MoveList {
        MoveList(ArrayVec::new())
    }

    pub fn find(&self, dst: Coord) -> Option<Move> {
        self.0.iter().find(|m| m.dst == dst).copied()
    }
}

impl Deref for MoveList {
    type Target = ArrayVec<Move, 32>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        MoveList(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_move() {
        let quiet = Move::quiet(Coord::from_str("b4").unwrap());
        assert!(!quiet.is_capture());
        assert_eq!(quiet.victim(), None);
        assert_eq!(quiet.to_string(), "-b4");

        let capture = Move::capture(Coord::from_str("d6").unwrap(), PieceId(3));
        assert!(capture.is_capture());
        assert_eq!(capture.victim(), Some(PieceId(3)));
        assert_eq!(capture.to_string(), "xd6");
    }

    #[test]
    fn test_find() {
        let mut list = MoveList::new();
        list.push(Move::quiet(Coord::from_str("a3").unwrap()));
        list.push(Move::capture(Coord::from_str("c3").unwrap(), PieceId(0)));

        let hit = list.find(Coord::from_str("c3").unwrap()).unwrap();
        assert_eq!(hit.victim(), Some(PieceId(0)));
        assert!(list.find(Coord::from_str("j9").unwrap()).is_none());
    }
}
