//! Operations shared by every packed board layout.
//!
//! A layout only has to say where its cells start, where its turn bit lives
//! and how wide the board is. Everything else (bounds checks, decoding,
//! win detection, rendering) is written once here against those three facts.

use crate::{BoardError, Mark, Player};

/// Width of a single cell field.
pub(crate) const CELL_BITS: u32 = 2;
/// Mask for a single cell field (0b11).
pub(crate) const CELL_MASK: u64 = 0b11;

pub(crate) mod sealed {
    /// Proof of being inside the crate. Only `TOKEN` can build one.
    #[derive(Clone, Copy)]
    pub struct Token(());

    pub(crate) const TOKEN: Token = Token(());

    /// Raw access to the packed word. Every accessor takes a [`Token`], so
    /// callers outside the crate can only reach the bits through `set`,
    /// `toggle_turn` and `to_bits`.
    pub trait Layout: Copy {
        fn raw(&self, _: Token) -> u64;
        fn raw_mut(&mut self, _: Token) -> &mut u64;
        /// Bit offset of cell (0, 0).
        fn cell_base(&self, _: Token) -> u32;
        /// Bit offset of the turn bit.
        fn turn_shift(&self, _: Token) -> u32;
    }
}

use sealed::{Layout, TOKEN};

/// A line of N cells that wins the game when uniformly occupied.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Line {
    /// All cells with the given y.
    Row(usize),
    /// All cells with the given x.
    Column(usize),
    /// (0, 0) to (N-1, N-1).
    Diagonal,
    /// (0, N-1) to (N-1, 0).
    AntiDiagonal,
}

impl Line {
    /// Every line of an N x N board, in win-check order: rows, then
    /// columns, then the two diagonals.
    pub fn all(n: usize) -> impl Iterator<Item = Line> {
        (0..n)
            .map(Line::Row)
            .chain((0..n).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// The i-th cell of this line on an N x N board, `i < n`.
    #[inline]
    pub(crate) fn cell(self, n: usize, i: usize) -> (usize, usize) {
        match self {
            Line::Row(y) => (i, y),
            Line::Column(x) => (x, i),
            Line::Diagonal => (i, i),
            Line::AntiDiagonal => (i, n - 1 - i),
        }
    }

    /// Coordinates of all N cells of this line.
    pub fn cells(self, n: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..n).map(move |i| self.cell(n, i))
    }
}

/// A square board packed into one `u64`.
///
/// Implemented by [`crate::Board`] (variable size) and
/// [`crate::ClassicBoard`] (fixed 3x3). The trait is sealed, and the raw
/// word behind it can only be changed through `set` and `toggle_turn`:
///
/// ```compile_fail
/// use tictac_core::{Board, PackedBoard};
///
/// fn poke<B: PackedBoard>(board: &mut B) {
///     *board.raw_mut() |= 0b11 << board.cell_base();
/// }
///
/// poke(&mut Board::default());
/// ```
pub trait PackedBoard: Layout {
    /// Side length N of the board.
    fn dimension(&self) -> usize;

    /// Get the raw u64 encoding.
    #[inline]
    fn to_bits(&self) -> u64 {
        self.raw(TOKEN)
    }

    /// Mark at (x, y).
    fn get(&self, x: i32, y: i32) -> Result<Mark, BoardError> {
        let (x, y) = checked_coordinate(self, x, y)?;
        Ok(mark_at(self, x, y))
    }

    /// Place `player`'s mark at (x, y).
    ///
    /// Fails if the coordinate is off the board or the cell is already
    /// taken. Does not look at or change whose turn it is.
    fn set(&mut self, x: i32, y: i32, player: Player) -> Result<(), BoardError> {
        let (cx, cy) = checked_coordinate(self, x, y)?;
        if !mark_at(self, cx, cy).is_empty() {
            return Err(BoardError::InvalidMove { x, y });
        }
        let shift = cell_shift(self, cx, cy);
        let raw = self.raw_mut(TOKEN);
        *raw = (*raw & !(CELL_MASK << shift)) | ((player as u64) << shift);
        Ok(())
    }

    /// Player to move next.
    #[inline]
    fn current_player(&self) -> Player {
        Player::from_turn_bit(self.raw(TOKEN) >> self.turn_shift(TOKEN))
    }

    /// Flip the turn bit.
    #[inline]
    fn toggle_turn(&mut self) {
        let shift = self.turn_shift(TOKEN);
        *self.raw_mut(TOKEN) ^= 1 << shift;
    }

    /// First uniformly occupied line and its owner, if any.
    fn winning_line(&self) -> Option<(Line, Player)> {
        let n = self.dimension();
        Line::all(n).find_map(|line| line_owner(self, line).map(|player| (line, player)))
    }

    /// Mark of the first completed line, or `Mark::Empty` if none.
    fn winner(&self) -> Mark {
        self.winning_line()
            .map_or(Mark::Empty, |(_, player)| Mark::from(player))
    }

    /// Coordinates of every empty cell, x-major.
    fn empty_cells(&self) -> Vec<(usize, usize)> {
        let n = self.dimension();
        (0..n)
            .flat_map(|x| (0..n).map(move |y| (x, y)))
            .filter(|&(x, y)| mark_at(self, x, y).is_empty())
            .collect()
    }

    /// True when no empty cell remains.
    fn is_full(&self) -> bool {
        let n = self.dimension();
        (0..n).all(|x| (0..n).all(|y| !mark_at(self, x, y).is_empty()))
    }

    /// Text grid, e.g. for 3x3:
    ///
    /// ```text
    ///  X |   | O
    /// ---+---+---
    ///    | X |
    /// ---+---+---
    ///    |   | X
    /// ```
    fn render(&self) -> String {
        let n = self.dimension();
        let divider = format!("\n{}\n", vec!["---"; n].join("+"));
        (0..n)
            .map(|y| {
                (0..n)
                    .map(|x| format!(" {} ", mark_at(self, x, y)))
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join(&divider)
    }
}

#[inline]
fn checked_coordinate<B: PackedBoard>(
    board: &B,
    x: i32,
    y: i32,
) -> Result<(usize, usize), BoardError> {
    let dimension = board.dimension();
    match (usize::try_from(x), usize::try_from(y)) {
        (Ok(cx), Ok(cy)) if cx < dimension && cy < dimension => Ok((cx, cy)),
        _ => Err(BoardError::InvalidCoordinate { x, y, dimension }),
    }
}

#[inline]
fn cell_shift<B: PackedBoard>(board: &B, x: usize, y: usize) -> u32 {
    board.cell_base(TOKEN) + ((x * board.dimension() + y) as u32) * CELL_BITS
}

/// Decode an in-range cell. Caller has already bounds-checked (x, y).
#[inline]
fn mark_at<B: PackedBoard>(board: &B, x: usize, y: usize) -> Mark {
    let code = (board.raw(TOKEN) >> cell_shift(board, x, y)) & CELL_MASK;
    match Mark::from_bits(code as u8) {
        Some(mark) => mark,
        // Boards are only built by `new` or a validated `from_bits`.
        None => unreachable!("reserved cell code at ({x}, {y})"),
    }
}

fn line_owner<B: PackedBoard>(board: &B, line: Line) -> Option<Player> {
    let n = board.dimension();
    let mut cells = line.cells(n);
    let (x0, y0) = cells.next()?;
    let first = mark_at(board, x0, y0);
    let player = first.player()?;
    cells
        .all(|(x, y)| mark_at(board, x, y) == first)
        .then_some(player)
}

/// Check that `raw` only uses the `n * n` cell fields starting at
/// `cell_base` plus the bits in `meta_mask`, and holds no reserved code.
pub(crate) fn is_valid_encoding(raw: u64, cell_base: u32, n: usize, meta_mask: u64) -> bool {
    let cells = (n * n) as u32;
    let cell_region = ((1u64 << (cells * CELL_BITS)) - 1) << cell_base;
    if raw & !(cell_region | meta_mask) != 0 {
        return false;
    }
    (0..cells).all(|i| (raw >> (cell_base + i * CELL_BITS)) & CELL_MASK != CELL_MASK)
}
