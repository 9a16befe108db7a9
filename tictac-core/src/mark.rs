//! Cell marks and players.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Player identifier.
///
/// The discriminant is the 2-bit code written into a cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    A = 1,
    B = 2,
}

impl Player {
    /// Get the opponent player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Decode the turn bit (0 = A, 1 = B).
    #[inline]
    pub(crate) fn from_turn_bit(bit: u64) -> Player {
        if bit & 1 == 0 {
            Player::A
        } else {
            Player::B
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Mark::from(*self), f)
    }
}

/// Occupant of a single cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Mark {
    #[default]
    Empty = 0,
    PlayerA = 1,
    PlayerB = 2,
}

impl Mark {
    /// Convert a 2-bit cell code to a mark. The reserved code 3 yields None.
    #[inline]
    pub fn from_bits(bits: u8) -> Option<Mark> {
        match bits {
            0 => Some(Mark::Empty),
            1 => Some(Mark::PlayerA),
            2 => Some(Mark::PlayerB),
            _ => None,
        }
    }

    /// The player owning this mark, if any.
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::PlayerA => Some(Player::A),
            Mark::PlayerB => Some(Player::B),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// One-character glyph used when rendering.
    pub fn glyph(self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::PlayerA => 'X',
            Mark::PlayerB => 'O',
        }
    }
}

impl From<Player> for Mark {
    #[inline]
    fn from(player: Player) -> Mark {
        match player {
            Player::A => Mark::PlayerA,
            Player::B => Mark::PlayerB,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
