use crate::types::{Color, Coord, Rank};

/// Rank delta of a man's forward direction. White men march toward rank 10
/// at the top of the board, Black men toward rank 1 at the bottom.
pub const fn forward_delta(c: Color) -> isize {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// The rank on which a man of color `c` promotes to a king.
pub const fn promotion_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R10,
        Color::Black => Rank::R1,
    }
}

/// Returns `true` if `coord` is a dark square. All play happens on the dark
/// squares; the light ones stay empty for the whole game.
pub const fn is_playable(coord: Coord) -> bool {
    (coord.file().index() + coord.rank().index()) % 2 == 1
}
