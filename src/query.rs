//! Reductions over a [`RunLengthIndex`].
//!
//! Every query scans the cells in row-major order and only replaces its
//! best result on a strictly longer line or strictly larger square, so ties
//! go to the first candidate found: topmost, then leftmost, by end cell.

use std::fmt;

use tracing::debug;

use crate::runs::{Orientation, RunLengthIndex};

/// A straight run of 1s, inclusive at both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
}

impl Line {
    pub fn len(&self) -> usize {
        (self.end_row - self.start_row) + (self.end_col - self.start_col) + 1
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.start_row, self.start_col, self.end_row, self.end_col
        )
    }
}

/// A square given by its top-left and bottom-right corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Square {
    pub top_row: usize,
    pub top_col: usize,
    pub bottom_row: usize,
    pub bottom_col: usize,
}

impl Square {
    fn with_corner(row: usize, col: usize, side: usize) -> Self {
        Self {
            top_row: row + 1 - side,
            top_col: col + 1 - side,
            bottom_row: row,
            bottom_col: col,
        }
    }

    pub fn side(&self) -> usize {
        self.bottom_row - self.top_row + 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.top_row, self.top_col, self.bottom_row, self.bottom_col
        )
    }
}

/// Longest run of 1s along `orientation`, or `None` if the grid has no 1s.
pub fn longest_line(index: &RunLengthIndex, orientation: Orientation) -> Option<Line> {
    let mut best = 0;
    let mut end = (0, 0);
    for (row, col) in index.cells() {
        let run = index.run(row, col, orientation);
        if run > best {
            best = run;
            end = (row, col);
        }
    }
    if best == 0 {
        return None;
    }

    let (end_row, end_col) = end;
    let line = match orientation {
        Orientation::Horizontal => Line {
            start_row: end_row,
            start_col: end_col + 1 - best,
            end_row,
            end_col,
        },
        Orientation::Vertical => Line {
            start_row: end_row + 1 - best,
            start_col: end_col,
            end_row,
            end_col,
        },
    };
    debug!(%orientation, len = best, "found longest line");
    Some(line)
}

pub fn longest_row(index: &RunLengthIndex) -> Option<Line> {
    longest_line(index, Orientation::Horizontal)
}

pub fn longest_column(index: &RunLengthIndex) -> Option<Line> {
    longest_line(index, Orientation::Vertical)
}

/// Scan every cell as a bottom-right corner and keep the largest side for
/// which `fits(row, col, side)` holds.
///
/// `min(up, left)` caps the side at each corner. Corners whose cap does not
/// beat the current best are skipped, and sides are tried from the cap
/// downward so the first hit is the largest.
fn largest_by(
    index: &RunLengthIndex,
    fits: impl Fn(usize, usize, usize) -> bool,
) -> Option<Square> {
    let mut best = 0;
    let mut corner = (0, 0);
    for (row, col) in index.cells() {
        let bound = index.bound(row, col);
        if bound <= best {
            continue;
        }
        if let Some(side) = (best + 1..=bound).rev().find(|&k| fits(row, col, k)) {
            best = side;
            corner = (row, col);
        }
    }
    if best == 0 {
        return None;
    }
    Some(Square::with_corner(corner.0, corner.1, best))
}

/// Largest square whose four edges are all 1s.
///
/// The bound at the corner already covers the bottom row and the right
/// column. A side `k` then only needs two more lookups: the top row must
/// run at least `k` leftward into column `col`, and the left column must
/// run at least `k` upward into row `row`. Interior cells are not
/// consulted, so no square table is needed.
pub fn largest_square(index: &RunLengthIndex) -> Option<Square> {
    let square = largest_by(index, |row, col, k| {
        index.left(row + 1 - k, col) >= k && index.up(row, col + 1 - k) >= k
    });
    if let Some(square) = square {
        debug!(side = square.side(), "found largest square");
    }
    square
}

/// Largest square block made entirely of 1s.
///
/// A side `k` fits when each of the `k` rows ending at `row` has a leftward
/// run of at least `k` at column `col`.
pub fn largest_solid_square(index: &RunLengthIndex) -> Option<Square> {
    let square = largest_by(index, |row, col, k| {
        (row + 1 - k..=row).all(|r| index.left(r, col) >= k)
    });
    if let Some(square) = square {
        debug!(side = square.side(), "found largest solid square");
    }
    square
}
