use std::fmt;

use super::Player;
use crate::error::BoardError;

pub const WIDTH: usize = 7;
pub const HEIGHT: usize = 6;
pub const CELLS: usize = WIDTH * HEIGHT;

/// Mask with every cell of the grid set.
pub const FULL_MASK: u64 = (1 << CELLS) - 1;

/// A cell position. Row 0 is the top, column 0 is the leftmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Build a coordinate, or `None` if it lies off the grid.
    pub fn new(row: usize, col: usize) -> Option<Coord> {
        (row < HEIGHT && col < WIDTH).then_some(Coord { row, col })
    }

    /// Build a coordinate from signed components, e.g. after stepping in a
    /// direction that may leave the grid.
    pub fn checked(row: isize, col: isize) -> Option<Coord> {
        if row < 0 || col < 0 {
            return None;
        }
        Coord::new(row as usize, col as usize)
    }

    /// Bit position inside an occupancy mask (row-major).
    pub fn bit_index(self) -> usize {
        self.row * WIDTH + self.col
    }

    /// Single-bit mask for this cell.
    pub fn mask(self) -> u64 {
        1 << self.bit_index()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Per-player occupancy packed into 64-bit masks, one bit per cell.
///
/// `occupied` is kept alongside the two player masks and always equals their
/// union; the player masks never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitBoard {
    occupied: u64,
    players: [u64; 2],
}

impl BitBoard {
    /// Create a new empty board
    pub fn new() -> Self {
        BitBoard::default()
    }

    /// Combined mask of every occupied cell
    pub fn occupied(&self) -> u64 {
        self.occupied
    }

    /// Occupancy mask of a single player
    pub fn player_mask(&self, player: Player) -> u64 {
        self.players[player.index()]
    }

    /// Owner of the cell at `coord`, if any
    pub fn owner(&self, coord: Coord) -> Option<Player> {
        let bit = coord.mask();
        if self.players[Player::One.index()] & bit != 0 {
            Some(Player::One)
        } else if self.players[Player::Two.index()] & bit != 0 {
            Some(Player::Two)
        } else {
            None
        }
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.occupied & coord.mask() != 0
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.occupied == FULL_MASK
    }

    /// Number of pieces on the board
    pub fn count(&self) -> u32 {
        self.occupied.count_ones()
    }

    /// Claim `coord` for `player`. Fails if any player already holds it.
    pub fn set(&mut self, player: Player, coord: Coord) -> Result<(), BoardError> {
        let bit = coord.mask();
        if self.occupied & bit != 0 {
            return Err(BoardError::CellOccupied {
                row: coord.row,
                col: coord.col,
            });
        }
        self.occupied |= bit;
        self.players[player.index()] |= bit;

        debug_assert_eq!(self.players[0] & self.players[1], 0);
        debug_assert_eq!(self.players[0] | self.players[1], self.occupied);
        Ok(())
    }
}

impl fmt::Display for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                let coord = Coord { row, col };
                let symbol = self.owner(coord).map_or('.', Player::symbol);
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        for col in 0..WIDTH {
            write!(f, "{}", col + 1)?;
        }
        Ok(())
    }
}
