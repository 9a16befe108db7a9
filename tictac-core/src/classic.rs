//! Fixed 3x3 board.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::packed::{is_valid_encoding, sealed, PackedBoard, CELL_BITS};
use crate::BoardError;

/// Classic 3x3 board packed into a single u64.
///
/// ```text
/// Bits 0-17:  Cells, 2 bits each, cell (x, y) at (x * 3 + y) * 2
/// Bit 18:     Current player (0 = A, 1 = B)
/// Bits 19-63: Unused (always zero)
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ClassicBoard(u64);

impl ClassicBoard {
    /// Side length.
    pub const DIMENSION: usize = 3;
    /// Bit position for the current player bit, right after the cells.
    const PLAYER_BIT: u32 = (Self::DIMENSION * Self::DIMENSION) as u32 * CELL_BITS;

    /// Create a new empty board with player A to move.
    #[inline]
    pub fn new() -> ClassicBoard {
        ClassicBoard(0)
    }

    /// Rebuild a board from its raw encoding.
    pub fn from_bits(bits: u64) -> Result<ClassicBoard, BoardError> {
        if is_valid_encoding(bits, 0, Self::DIMENSION, 1 << Self::PLAYER_BIT) {
            Ok(ClassicBoard(bits))
        } else {
            Err(BoardError::CorruptEncoding(bits))
        }
    }
}

impl sealed::Layout for ClassicBoard {
    #[inline]
    fn raw(&self, _: sealed::Token) -> u64 {
        self.0
    }

    #[inline]
    fn raw_mut(&mut self, _: sealed::Token) -> &mut u64 {
        &mut self.0
    }

    #[inline]
    fn cell_base(&self, _: sealed::Token) -> u32 {
        0
    }

    #[inline]
    fn turn_shift(&self, _: sealed::Token) -> u32 {
        Self::PLAYER_BIT
    }
}

impl PackedBoard for ClassicBoard {
    #[inline]
    fn dimension(&self) -> usize {
        Self::DIMENSION
    }
}

impl fmt::Display for ClassicBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl TryFrom<u64> for ClassicBoard {
    type Error = BoardError;

    fn try_from(bits: u64) -> Result<Self, Self::Error> {
        ClassicBoard::from_bits(bits)
    }
}

impl From<ClassicBoard> for u64 {
    fn from(board: ClassicBoard) -> u64 {
        board.0
    }
}
