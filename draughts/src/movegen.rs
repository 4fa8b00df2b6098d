//! Move generation
//!
//! Generates the per-piece move and capture lists consumed by the board's
//! legality pass. The board calls into this module once for every piece of
//! the side to move on each turn change, and once more for the moving piece
//! after every move to discover continuation jumps.

use crate::board::Board;
use crate::moves::{Move, MoveList};
use crate::piece::PieceId;

/// The four diagonal directions as (delta_file, delta_rank) pairs.
const DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Computes the quiet moves and capture landings for a single piece.
///
/// The scan walks each diagonal one square at a time. A man stops after the
/// first square of a run; a king keeps walking. At most one enemy piece may
/// be jumped per run, and a king records every empty square behind the
/// jumped piece as a separate landing. Pieces already marked captured block
/// the run and cannot be jumped again, which is what terminates multi-jump
/// chains.
///
/// Quiet moves honor the man's forward-only restriction; captures do not
/// (men capture backwards too). If any capture is found, the quiet list is
/// returned empty: a piece that can capture must capture.
pub fn gen_piece(b: &Board, id: PieceId) -> (MoveList, MoveList) {
    let piece = b.piece(id);
    let mut moves = MoveList::new();
    let mut captures = MoveList::new();

    for (delta_file, delta_rank) in DIRECTIONS {
        let mut at = piece.pos();
        let mut victim: Option<PieceId> = None;

        loop {
            at = match at.try_shift(delta_file, delta_rank) {
                Some(next) => next,
                None => break,
            };

            match b.piece_at(at) {
                None => {
                    if piece.can_advance(delta_rank) {
                        match victim {
                            // Every empty square behind the jumped piece is
                            // a possible landing for a king.
                            Some(v) => captures.push(Move::capture(at, v)),
                            None => moves.push(Move::quiet(at)),
                        }
                    }
                }
                Some(target_id) => {
                    let target = b.piece(target_id);
                    if target.owner() == piece.owner() || target.is_captured() {
                        break;
                    }
                    if victim.is_some() {
                        // Only the first piece on a run may be jumped.
                        break;
                    }
                    let landing = match at.try_shift(delta_file, delta_rank) {
                        Some(landing) => landing,
                        None => break,
                    };
                    if b.piece_at(landing).is_some() {
                        // Two pieces in a row leave no room to land.
                        break;
                    }
                    at = landing;
                    captures.push(Move::capture(at, target_id));
                    victim = Some(target_id);
                }
            }

            if !piece.is_king() {
                break;
            }
        }
    }

    if !captures.is_empty() {
        moves.clear();
    }

    (moves, captures)
}
