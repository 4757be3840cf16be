//! Four-in-a-row detection over a single player's occupancy mask.
//!
//! Runs are enumerated by anchor cell and direction, and every member
//! coordinate is bounds-checked on the grid. Testing for four adjacent set
//! bits in the raw integer would join the last column of one row to the first
//! column of the next; working in coordinates rules that out.

use super::board::{Coord, HEIGHT, WIDTH};

/// Length of a winning run.
pub const RUN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Same row, column + 1
    Horizontal,
    /// Same column, row + 1
    Vertical,
    /// row + 1, column + 1 (`\`)
    DiagonalDown,
    /// row + 1, column - 1 (`/`)
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// (row step, column step)
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }
}

/// How the game state decides whether a move won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinCheck {
    /// Scan every anchor on the board.
    Full,
    /// Only runs passing through the cell just played.
    #[default]
    Incremental,
}

impl WinCheck {
    /// Whether `mask` holds a four-in-a-row after `last` was placed.
    pub fn check(self, mask: u64, last: Coord) -> bool {
        match self {
            WinCheck::Full => has_four(mask),
            WinCheck::Incremental => has_four_through(mask, last),
        }
    }
}

/// The four cells starting at `anchor` and stepping in `dir`, if all of them
/// lie on the grid.
pub fn run_from(anchor: Coord, dir: Direction) -> Option<[Coord; RUN]> {
    let (dr, dc) = dir.step();
    let mut cells = [anchor; RUN];
    for (k, cell) in cells.iter_mut().enumerate().skip(1) {
        let k = k as isize;
        *cell = Coord::checked(anchor.row as isize + dr * k, anchor.col as isize + dc * k)?;
    }
    Some(cells)
}

fn run_mask(cells: &[Coord; RUN]) -> u64 {
    cells.iter().fold(0, |acc, c| acc | c.mask())
}

/// First run of four found in `mask`, scanning anchors in row-major order and
/// directions in [`Direction::ALL`] order.
pub fn find_four(mask: u64) -> Option<[Coord; RUN]> {
    // Fewer than four pieces can never win
    if mask.count_ones() < RUN as u32 {
        return None;
    }

    for row in 0..HEIGHT {
        for col in 0..WIDTH {
            let anchor = Coord { row, col };
            if mask & anchor.mask() == 0 {
                continue;
            }
            for dir in Direction::ALL {
                if let Some(cells) = run_from(anchor, dir) {
                    let run = run_mask(&cells);
                    if mask & run == run {
                        log::trace!("four found from {anchor} going {dir:?}");
                        return Some(cells);
                    }
                }
            }
        }
    }
    None
}

/// Full-board check for any four-in-a-row.
pub fn has_four(mask: u64) -> bool {
    find_four(mask).is_some()
}

/// Check only the runs that contain `last`.
///
/// Agrees with [`has_four`] whenever `mask` held no four before `last` was
/// added, which holds for every state reachable by legal play.
pub fn has_four_through(mask: u64, last: Coord) -> bool {
    if mask & last.mask() == 0 {
        return false;
    }

    Direction::ALL.iter().any(|&dir| {
        let (dr, dc) = dir.step();
        (0..RUN as isize).any(|k| {
            let anchor = Coord::checked(last.row as isize - dr * k, last.col as isize - dc * k);
            anchor
                .and_then(|a| run_from(a, dir))
                .is_some_and(|cells| {
                    let run = run_mask(&cells);
                    mask & run == run
                })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_of(cells: &[(usize, usize)]) -> u64 {
        cells
            .iter()
            .fold(0, |acc, &(row, col)| acc | Coord::new(row, col).unwrap().mask())
    }

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_every_run_counted_once() {
        // 24 horizontal, 21 vertical, 12 per diagonal
        let mut total = 0;
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                for dir in Direction::ALL {
                    if run_from(at(row, col), dir).is_some() {
                        total += 1;
                    }
                }
            }
        }
        assert_eq!(total, 69);
    }

    #[test]
    fn test_horizontal_win() {
        let mask = mask_of(&[(5, 2), (5, 3), (5, 4), (5, 5)]);
        assert!(has_four(mask));
        assert_eq!(
            find_four(mask),
            Some([at(5, 2), at(5, 3), at(5, 4), at(5, 5)])
        );
        assert!(has_four_through(mask, at(5, 4)));
    }

    #[test]
    fn test_vertical_win() {
        let mask = mask_of(&[(2, 3), (3, 3), (4, 3), (5, 3)]);
        assert!(has_four(mask));
        assert!(has_four_through(mask, at(2, 3)));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mask = mask_of(&[(2, 0), (3, 1), (4, 2), (5, 3)]);
        assert!(has_four(mask));
        assert!(has_four_through(mask, at(3, 1)));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mask = mask_of(&[(2, 6), (3, 5), (4, 4), (5, 3)]);
        assert!(has_four(mask));
        assert_eq!(
            find_four(mask),
            Some([at(2, 6), at(3, 5), at(4, 4), at(5, 3)])
        );
        assert!(has_four_through(mask, at(5, 3)));
    }

    #[test]
    fn test_no_win_with_three() {
        let mask = mask_of(&[(5, 0), (5, 1), (5, 2)]);
        assert!(!has_four(mask));
        assert!(!has_four_through(mask, at(5, 2)));
    }

    #[test]
    fn test_row_wrap_is_not_a_run() {
        // Bits 4..=7 are consecutive integers but span two rows
        let mask = mask_of(&[(0, 4), (0, 5), (0, 6), (1, 0)]);
        assert_eq!(mask, 0b1111_0000);
        assert!(!has_four(mask));
        assert!(!has_four_through(mask, at(1, 0)));
    }

    #[test]
    fn test_diagonal_wrap_is_not_a_run() {
        // Bit strides of 8 and 6 also exist between wrapped cells
        let down = mask_of(&[(0, 5), (1, 6), (3, 0), (4, 1)]);
        assert_eq!(down, (1 << 5) | (1 << 13) | (1 << 21) | (1 << 29));
        assert!(!has_four(down));

        let up = mask_of(&[(0, 1), (1, 0), (1, 6), (2, 5)]);
        assert_eq!(up, (1 << 1) | (1 << 7) | (1 << 13) | (1 << 19));
        assert!(!has_four(up));
    }

    #[test]
    fn test_incremental_ignores_unrelated_cell() {
        let mask = mask_of(&[(5, 0), (5, 1), (5, 2), (5, 3), (0, 6)]);
        assert!(has_four(mask));
        assert!(!has_four_through(mask, at(0, 6)));
        assert!(!has_four_through(mask, at(4, 4)));
    }

    #[test]
    fn test_win_check_modes() {
        let mask = mask_of(&[(5, 0), (4, 1), (3, 2), (2, 3)]);
        assert!(WinCheck::Full.check(mask, at(2, 3)));
        assert!(WinCheck::Incremental.check(mask, at(2, 3)));
    }

    #[test]
    fn test_empty_mask_has_no_four() {
        assert!(!has_four(0));
        assert_eq!(find_four(0), None);
    }
}
