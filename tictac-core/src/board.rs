//! Variable-size board (2x2 to 5x5).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::packed::{is_valid_encoding, sealed, PackedBoard};
use crate::BoardError;

/// N x N board packed into a single u64, N in 2..=5.
///
/// ```text
/// Bits 0-1:   Dimension code (N - 2)
/// Bit 2:      Current player (0 = A, 1 = B)
/// Bits 3-..:  Cells, 2 bits each, cell (x, y) at 3 + (x * N + y) * 2
///             (up to bit 52 for N = 5; everything above is zero)
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Board(u64);

impl Board {
    /// Width of the metadata region below the cells.
    pub const META_BITS: u32 = 3;
    /// Smallest supported side length.
    pub const MIN_DIMENSION: i32 = 2;
    /// Largest supported side length.
    pub const MAX_DIMENSION: i32 = 5;

    const DIMENSION_MASK: u64 = 0b11;
    const TURN_BIT: u32 = 2;

    /// Create an empty `dimension` x `dimension` board with player A to move.
    pub fn new(dimension: i32) -> Result<Board, BoardError> {
        if !(Self::MIN_DIMENSION..=Self::MAX_DIMENSION).contains(&dimension) {
            return Err(BoardError::InvalidDimension(dimension));
        }
        Ok(Board((dimension - Self::MIN_DIMENSION) as u64))
    }

    /// Rebuild a board from its raw encoding, rejecting words that no
    /// sequence of moves could produce.
    pub fn from_bits(bits: u64) -> Result<Board, BoardError> {
        let n = Self::decode_dimension(bits);
        let meta_mask = (1u64 << Self::META_BITS) - 1;
        if is_valid_encoding(bits, Self::META_BITS, n, meta_mask) {
            Ok(Board(bits))
        } else {
            Err(BoardError::CorruptEncoding(bits))
        }
    }

    #[inline]
    fn decode_dimension(bits: u64) -> usize {
        (bits & Self::DIMENSION_MASK) as usize + Self::MIN_DIMENSION as usize
    }
}

impl sealed::Layout for Board {
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
        Self::META_BITS
    }

    #[inline]
    fn turn_shift(&self, _: sealed::Token) -> u32 {
        Self::TURN_BIT
    }
}

impl PackedBoard for Board {
    #[inline]
    fn dimension(&self) -> usize {
        Self::decode_dimension(self.0)
    }
}

/// 3x3, same as the classic game.
impl Default for Board {
    fn default() -> Self {
        Board(3 - Self::MIN_DIMENSION as u64)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl TryFrom<u64> for Board {
    type Error = BoardError;

    fn try_from(bits: u64) -> Result<Self, Self::Error> {
        Board::from_bits(bits)
    }
}

impl From<Board> for u64 {
    fn from(board: Board) -> u64 {
        board.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Player};

    #[test]
    fn test_board_new() {
        for n in 2..=5 {
            let board = Board::new(n).unwrap();
            assert_eq!(board.dimension(), n as usize);
            assert_eq!(board.current_player(), Player::A);
            assert_eq!(board.to_bits() >> Board::META_BITS, 0);
        }
    }

    #[test]
    fn test_board_invalid_dimension() {
        for n in [-1, 0, 1, 6, 7, 100] {
            assert_eq!(Board::new(n), Err(BoardError::InvalidDimension(n)));
        }
    }

    #[test]
    fn test_board_default_is_3x3() {
        assert_eq!(Board::default(), Board::new(3).unwrap());
    }

    #[test]
    fn test_board_cell_offsets() {
        let mut board = Board::new(4).unwrap();
        board.set(1, 2, Player::B).unwrap();
        // 3 + (1 * 4 + 2) * 2 = 15
        assert_eq!(board.to_bits(), 0b10 | (0b10 << 15));
    }

    #[test]
    fn test_board_switch_player_keeps_cells() {
        let mut board = Board::new(5).unwrap();
        board.set(4, 4, Player::A).unwrap();
        board.toggle_turn();
        assert_eq!(board.current_player(), Player::B);
        assert_eq!(board.dimension(), 5);
        assert_eq!(board.get(4, 4), Ok(Mark::PlayerA));

        board.set(0, 0, Player::B).unwrap();
        assert_eq!(board.current_player(), Player::B);
    }

    #[test]
    fn test_board_from_bits() {
        let mut board = Board::new(5).unwrap();
        board.set(2, 3, Player::A).unwrap();
        board.set(4, 4, Player::B).unwrap();
        board.toggle_turn();
        assert_eq!(Board::from_bits(board.to_bits()), Ok(board));
    }

    #[test]
    fn test_board_from_bits_rejects_corrupt() {
        // Reserved code in cell (0, 0) of a 2x2 board
        let reserved = 0b11 << Board::META_BITS;
        assert_eq!(
            Board::from_bits(reserved),
            Err(BoardError::CorruptEncoding(reserved))
        );

        // Bit just past the last cell of a 2x2 board
        let stray = 1u64 << (Board::META_BITS + 8);
        assert!(Board::from_bits(stray).is_err());

        // Same bit is a legal cell on a 3x3 board
        assert!(Board::from_bits(stray | 1).is_ok());
    }

    #[test]
    fn test_board_serde() {
        let mut board = Board::new(4).unwrap();
        board.set(3, 0, Player::A).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, board.to_bits().to_string());
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);

        assert!(serde_json::from_str::<Board>("24").is_err());
    }
}
