//! N-in-a-row game logic with a bit-packed board representation.
//!
//! # Board Encoding (64-bit)
//!
//! Every cell takes 2 bits:
//!
//! ```text
//! 00 = empty
//! 01 = player A (X)
//! 10 = player B (O)
//! 11 = reserved, never produced
//! ```
//!
//! Classic 3x3 board ([`ClassicBoard`]):
//!
//! ```text
//! Bits 0-17:  9 cells, cell (x, y) at (x * 3 + y) * 2
//! Bit 18:     Current player (0 = A, 1 = B)
//! Bits 19-63: Unused (zero)
//! ```
//!
//! Variable board ([`Board`], N in 2..=5):
//!
//! ```text
//! Bits 0-1:   N - 2
//! Bit 2:      Current player (0 = A, 1 = B)
//! Bits 3-52:  N * N cells, cell (x, y) at 3 + (x * N + y) * 2
//! ```
//!
//! Cell indices on a 3x3 board (x across, y down):
//!
//! ```text
//!   (0,0)=0  (1,0)=3  (2,0)=6
//!   (0,1)=1  (1,1)=4  (2,1)=7
//!   (0,2)=2  (1,2)=5  (2,2)=8
//! ```
//!
//! Both layouts share their operations through [`PackedBoard`]. The board
//! only knows which cells are taken and whose turn it is; [`Session`] adds
//! the rules about who may move and when the game is over.

mod board;
mod classic;
mod error;
mod mark;
mod packed;
pub mod session;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use board::Board;
pub use classic::ClassicBoard;
pub use error::BoardError;
pub use mark::{Mark, Player};
pub use packed::{Line, PackedBoard};
pub use session::{Outcome, Phase, Session, SessionError};
