//! Board implementation

use crate::movegen;
use crate::moves::{Move, MoveList};
use crate::piece::{Piece, PieceId};
use crate::types::{Cell, Color, ColorParseError, Coord, File, Kind, Rank};
use draughts_base::geometry;

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Error indicating that the board is invalid.
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum ValidateError {
    #[error("piece on light square {0}")]
    NonPlayableSquare(Coord),
    #[error("man on its promotion rank at {0}")]
    UnpromotedMan(Coord),
    #[error("too many pieces of color {0:?}")]
    TooManyPieces(Color),
}

/// Error indicating that the cells section of the position string is invalid.
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum CellsParseError {
    #[error("too many items in rank {0}")]
    RankOverflow(Rank),
    #[error("not enough items in rank {0}")]
    RankUnderflow(Rank),
    #[error("too many ranks")]
    Overflow,
    #[error("not enough ranks")]
    Underflow,
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

/// Error indicating that the position string is invalid.
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum RawFenParseError {
    #[error("non-ASCII data in position")]
    NonAscii,
    #[error("no board found")]
    NoBoard,
    #[error("bad board: {0}")]
    Board(#[from] CellsParseError),
    #[error("no move side found")]
    NoMoveSide,
    #[error("bad move side: {0}")]
    MoveSide(#[from] ColorParseError),
    #[error("extra data in position")]
    ExtraData,
}

/// Error indicating that the position string is invalid or describes an
/// invalid board.
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum FenParseError {
    #[error("cannot parse position: {0}")]
    Fen(#[from] RawFenParseError),
    #[error("invalid position: {0}")]
    Valid(#[from] ValidateError),
}

fn parse_cells(s: &str) -> Result<[Cell; 100], CellsParseError> {
    type Error = CellsParseError;

    let mut cells = [Cell::EMPTY; 100];
    let mut file = 0_usize;
    let mut rank = 0_usize;
    let mut pos = 0_usize;
    let mut run = 0_usize;
    for b in s.bytes() {
        match b {
            b'0'..=b'9' => {
                run = run * 10 + (b - b'0') as usize;
                if file + run > 10 {
                    return Err(Error::RankOverflow(Rank::from_index(rank)));
                }
            }
            b'/' => {
                file += run;
                pos += run;
                run = 0;
                if file < 10 {
                    return Err(Error::RankUnderflow(Rank::from_index(rank)));
                }
                rank += 1;
                file = 0;
                if rank >= 10 {
                    return Err(Error::Overflow);
                }
            }
            _ => {
                file += run;
                pos += run;
                run = 0;
                if file >= 10 {
                    return Err(Error::RankOverflow(Rank::from_index(rank)));
                }
                let ch = b as char;
                cells[pos] = Cell::from_char(ch).ok_or(Error::UnexpectedChar(ch))?;
                file += 1;
                pos += 1;
            }
        }
    }
    file += run;
    pos += run;
    if file < 10 {
        return Err(Error::RankUnderflow(Rank::from_index(rank)));
    }
    if rank < 9 {
        return Err(Error::Underflow);
    }
    debug_assert_eq!(pos, 100);

    Ok(cells)
}

fn format_cells(cells: &[Cell; 100], f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
    for rank in Rank::iter() {
        if rank.index() != 0 {
            write!(f, "/")?;
        }
        let mut empty = 0;
        for file in File::iter() {
            let cell = cells[Coord::from_parts(file, rank).index()];
            if cell.is_free() {
                empty += 1;
                continue;
            }
            if empty != 0 {
                write!(f, "{}", empty)?;
                empty = 0;
            }
            write!(f, "{}", cell)?;
        }
        if empty != 0 {
            write!(f, "{}", empty)?;
        }
    }
    Ok(())
}

/// Position on the board, possibly invalid.
///
/// This structure consists of a raw grid of cells and the side to move,
/// without any validity checks. So, it can be used to build a position
/// square by square before converting it into a [`Board`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RawBoard {
    pub cells: [Cell; 100],
    pub side: Color,
}

impl RawBoard {
    /// An empty board with White to move.
    pub const fn empty() -> RawBoard {
        RawBoard {
            cells: [Cell::EMPTY; 100],
            side: Color::White,
        }
    }

    /// The starting position: twenty men per side on the dark squares of
    /// the four ranks closest to each player.
    pub fn initial() -> RawBoard {
        let mut res = RawBoard::empty();
        for coord in Coord::iter() {
            if !geometry::is_playable(coord) {
                continue;
            }
            let color = match coord.rank().index() {
                0..=3 => Color::Black,
                6..=9 => Color::White,
                _ => continue,
            };
            res.put(coord, Cell::from_parts(color, Kind::Man));
        }
        res
    }

    pub fn from_fen(fen: &str) -> Result<RawBoard, RawFenParseError> {
        RawBoard::from_str(fen)
    }

    #[inline]
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Cell {
        self.get(Coord::from_parts(file, rank))
    }

    #[inline]
    pub fn put(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.index()] = cell;
    }

    #[inline]
    pub fn put2(&mut self, file: File, rank: Rank, cell: Cell) {
        self.put(Coord::from_parts(file, rank), cell);
    }

    pub fn as_fen(&self) -> String {
        self.to_string()
    }

    pub fn pretty(&self, style: PrettyStyle) -> Pretty {
        Pretty { raw: *self, style }
    }
}

impl Default for RawBoard {
    fn default() -> RawBoard {
        RawBoard::empty()
    }
}

impl Display for RawBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        format_cells(&self.cells, f)?;
        write!(f, " {}", self.side)?;
        Ok(())
    }
}

impl FromStr for RawBoard {
    type Err = RawFenParseError;

    fn from_str(s: &str) -> Result<RawBoard, Self::Err> {
        type Error = RawFenParseError;

        if !s.is_ascii() {
            return Err(Error::NonAscii);
        }
        let mut iter = s.split(' ').fuse();

        let mut res = RawBoard::empty();
        res.cells = parse_cells(iter.next().ok_or(Error::NoBoard)?)?;
        res.side = Color::from_str(iter.next().ok_or(Error::NoMoveSide)?)?;

        if iter.next().is_some() {
            return Err(Error::ExtraData);
        }

        Ok(res)
    }
}

/// Style for pretty-printing the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrettyStyle {
    /// Print board using ASCII characters only.
    Ascii,
    /// Print board using Unicode characters for pieces and frame.
    Utf8,
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;

    fn cell(cell: Cell) -> char;
    fn indicator(color: Color) -> char;

    fn fmt(r: &RawBoard, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter() {
            write!(f, "{:>2}{}", rank.number(), Self::VERT_FRAME)?;
            for file in File::iter() {
                write!(f, "{}", Self::cell(r.get2(file, rank)))?;
            }
            writeln!(f)?;
        }
        write!(f, "{0}{0}{1}", Self::HORZ_FRAME, Self::ANGLE_FRAME)?;
        for _ in File::iter() {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, " {}{}", Self::indicator(r.side), Self::VERT_FRAME)?;
        for file in File::iter() {
            write!(f, "{}", file)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';

    fn cell(cell: Cell) -> char {
        cell.as_char()
    }

    fn indicator(color: Color) -> char {
        color.as_char()
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';

    fn cell(cell: Cell) -> char {
        cell.as_utf8_char()
    }

    fn indicator(color: Color) -> char {
        match color {
            Color::White => '○',
            Color::Black => '●',
        }
    }
}

/// Helper structure to pretty-print the board.
pub struct Pretty {
    raw: RawBoard,
    style: PrettyStyle,
}

impl Display for Pretty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(&self.raw, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(&self.raw, f),
        }
    }
}

/// Result of feeding a single square action into the board.
///
/// Piece ids inside a returned [`Move`] follow the usual id contract: they
/// are valid until the turn ends and the captured pieces are swept.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    /// The action had no effect.
    Ignored,
    /// The piece on the acted square became selected.
    Selected(PieceId),
    /// The current selection was dropped without a replacement.
    Deselected,
    /// The selected piece played `mv`. When `turn_over` is `false`, the
    /// move was a capture with at least one continuation jump, so the same
    /// piece stays selected and the same player keeps moving.
    Moved { mv: Move, turn_over: bool },
}

/// Position on the board, always valid.
///
/// Apart from the piece placement and the side to move, the board carries
/// the turn-scoped session state: the cached legal move lists, the pending
/// capture flag and the current selection. See [`RawBoard`] for an
/// unchecked representation.
#[derive(Debug, Clone)]
pub struct Board {
    pieces: Vec<Piece>,
    grid: [Option<PieceId>; 100],
    side: Color,
    selected: Option<PieceId>,
    capture_pending: bool,
}

impl Board {
    /// The board in the starting position.
    pub fn initial() -> Board {
        Board::try_from(RawBoard::initial()).unwrap()
    }

    pub fn from_fen(fen: &str) -> Result<Board, FenParseError> {
        Board::from_str(fen)
    }

    /// Snapshot of the piece placement and the side to move. Pieces captured
    /// earlier in an unfinished turn are still present.
    pub fn raw(&self) -> RawBoard {
        let mut res = RawBoard::empty();
        res.side = self.side;
        for piece in &self.pieces {
            res.put(piece.pos(), piece.cell());
        }
        res
    }

    #[inline]
    pub fn side(&self) -> Color {
        self.side
    }

    #[inline]
    pub fn get(&self, coord: Coord) -> Cell {
        match self.grid[coord.index()] {
            Some(id) => self.piece(id).cell(),
            None => Cell::EMPTY,
        }
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<PieceId> {
        self.grid[coord.index()]
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Returns `true` if any piece of the side to move has a capture, which
    /// makes quiet moves unplayable for the whole turn.
    #[inline]
    pub fn capture_pending(&self) -> bool {
        self.capture_pending
    }

    #[inline]
    pub fn selected(&self) -> Option<PieceId> {
        self.selected
    }

    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selected.map(|id| self.piece(id))
    }

    /// The moves the selected piece may play right now, if any piece is
    /// selected.
    pub fn selected_moves(&self) -> Option<&MoveList> {
        self.selected
            .map(|id| self.piece(id).playable(self.capture_pending))
    }

    /// Returns `true` if acting on the piece selects it: it must belong to
    /// the side to move and, while a capture is pending, be one of the
    /// pieces that can capture.
    pub fn is_selectable(&self, id: PieceId) -> bool {
        let piece = self.piece(id);
        !piece.is_captured()
            && piece.owner() == self.side
            && (!self.capture_pending || piece.has_capture())
    }

    /// The winning side, if the game is over. The game ends only when one
    /// side has no pieces left; a side with pieces but no moves is not
    /// declared lost.
    pub fn winner(&self) -> Option<Color> {
        let mut white = false;
        let mut black = false;
        for piece in &self.pieces {
            if piece.is_captured() {
                continue;
            }
            match piece.owner() {
                Color::White => white = true,
                Color::Black => black = true,
            }
        }
        match (white, black) {
            (true, false) => Some(Color::White),
            (false, true) => Some(Color::Black),
            _ => None,
        }
    }

    pub fn as_fen(&self) -> String {
        self.to_string()
    }

    pub fn pretty(&self, style: PrettyStyle) -> Pretty {
        self.raw().pretty(style)
    }

    /// Applies a single user action on the given square and reports what it
    /// did.
    ///
    /// The rules of the game live behind this single entry point: selecting
    /// a piece, switching or dropping the selection, playing a move from the
    /// selected piece's playable list, continuing a capture chain and
    /// finishing the turn.
    pub fn handle_action(&mut self, sq: Coord) -> Action {
        let had_selection = match self.selected {
            Some(id) => {
                let found = self.piece(id).playable(self.capture_pending).find(sq);
                if let Some(mv) = found {
                    self.move_piece(id, mv);
                    self.refresh_piece(id);
                    let chained = mv.is_capture() && self.piece(id).has_capture();
                    if !chained {
                        self.end_turn();
                    }
                    return Action::Moved {
                        mv,
                        turn_over: !chained,
                    };
                }
                self.deselect();
                true
            }
            None => false,
        };

        if let Some(target) = self.piece_at(sq) {
            if self.is_selectable(target) {
                self.select(target);
                return Action::Selected(target);
            }
        }

        if had_selection {
            Action::Deselected
        } else {
            Action::Ignored
        }
    }

    /// Recomputes the move lists of every piece of the side to move and the
    /// pending capture flag. The opponent's cached lists are cleared.
    pub(crate) fn refresh_legal(&mut self) {
        let mut any_capture = false;
        for idx in 0..self.pieces.len() {
            if self.pieces[idx].owner() != self.side || self.pieces[idx].is_captured() {
                self.pieces[idx].clear_legal();
                continue;
            }
            let id = PieceId(idx as u8);
            let (moves, captures) = movegen::gen_piece(self, id);
            any_capture |= !captures.is_empty();
            self.pieces[idx].set_legal(moves, captures);
        }
        self.capture_pending = any_capture;
    }

    fn refresh_piece(&mut self, id: PieceId) {
        let (moves, captures) = movegen::gen_piece(self, id);
        self.pieces[id.index()].set_legal(moves, captures);
    }

    fn select(&mut self, id: PieceId) {
        self.deselect();
        self.pieces[id.index()].set_selected(true);
        self.selected = Some(id);
    }

    fn deselect(&mut self) {
        if let Some(id) = self.selected.take() {
            self.pieces[id.index()].set_selected(false);
        }
    }

    /// Moves the piece, marks the victim captured and promotes the mover if
    /// it stands on its promotion rank. The victim keeps its grid cell until
    /// the end-of-turn sweep, so it still blocks further jumps.
    fn move_piece(&mut self, id: PieceId, mv: Move) {
        let src = self.pieces[id.index()].pos();
        self.grid[src.index()] = None;
        self.grid[mv.dst().index()] = Some(id);
        self.pieces[id.index()].set_pos(mv.dst());
        if let Some(victim) = mv.victim() {
            self.pieces[victim.index()].mark_captured();
        }
        let piece = &mut self.pieces[id.index()];
        if !piece.is_king() && piece.pos().rank() == geometry::promotion_rank(piece.owner()) {
            piece.promote();
        }
    }

    /// Removes the pieces captured during the turn. Ids are reassigned here;
    /// everything holding them is rebuilt by the caller right after.
    fn sweep_captured(&mut self) {
        self.pieces.retain(|p| !p.is_captured());
        self.grid = [None; 100];
        for (idx, piece) in self.pieces.iter().enumerate() {
            self.grid[piece.pos().index()] = Some(PieceId(idx as u8));
        }
    }

    fn end_turn(&mut self) {
        self.deselect();
        self.sweep_captured();
        self.side = self.side.inv();
        self.refresh_legal();
    }
}

impl TryFrom<RawBoard> for Board {
    type Error = ValidateError;

    fn try_from(raw: RawBoard) -> Result<Board, ValidateError> {
        let mut pieces = Vec::new();
        let mut grid = [None; 100];
        let mut counts = [0_usize; 2];
        for coord in Coord::iter() {
            let cell = raw.get(coord);
            let (color, kind) = match (cell.color(), cell.kind()) {
                (Some(color), Some(kind)) => (color, kind),
                _ => continue,
            };
            if !geometry::is_playable(coord) {
                return Err(ValidateError::NonPlayableSquare(coord));
            }
            if kind == Kind::Man && coord.rank() == geometry::promotion_rank(color) {
                return Err(ValidateError::UnpromotedMan(coord));
            }
            counts[color as usize] += 1;
            if counts[color as usize] > 20 {
                return Err(ValidateError::TooManyPieces(color));
            }
            grid[coord.index()] = Some(PieceId(pieces.len() as u8));
            pieces.push(Piece::new(color, kind, coord));
        }

        let mut res = Board {
            pieces,
            grid,
            side: raw.side,
            selected: None,
            capture_pending: false,
        };
        res.refresh_legal();
        Ok(res)
    }
}

impl TryFrom<&RawBoard> for Board {
    type Error = ValidateError;

    fn try_from(raw: &RawBoard) -> Result<Board, ValidateError> {
        Board::try_from(*raw)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.raw().fmt(f)
    }
}

impl FromStr for Board {
    type Err = FenParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        Ok(Board::try_from(RawBoard::from_str(s)?)?)
    }
}
