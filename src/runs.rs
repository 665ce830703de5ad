//! Per-cell run lengths.
//!
//! For every cell the index stores how many consecutive 1s end there,
//! counting upward (`up`) and leftward (`left`), the cell itself included.
//! A 0 cell has both runs at 0. Each value depends only on the cell above
//! and the cell to the left, so one row-major pass fills both tables.

use std::fmt;

use tracing::debug;

use crate::{
    error::{LoadError, Result},
    grid::Grid,
    matrix::Matrix,
};

/// Axis along which a line is measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Lines within a single row, measured by the leftward run.
    Horizontal,
    /// Lines within a single column, measured by the upward run.
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "hline"),
            Orientation::Vertical => write!(f, "vline"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunLengthIndex {
    up: Matrix<usize>,
    left: Matrix<usize>,
}

impl RunLengthIndex {
    /// Fill both run tables from `grid`.
    ///
    /// Fails only when the tables themselves cannot be allocated.
    pub fn build(grid: &Grid) -> Result<Self> {
        let (height, width) = (grid.height(), grid.width());
        let no_room = || LoadError::Allocation { height, width };
        let mut up = Matrix::try_filled(height, width, 0).ok_or_else(no_room)?;
        let mut left = Matrix::try_filled(height, width, 0).ok_or_else(no_room)?;

        for (row, col, &bit) in grid.cells().iter() {
            if !bit {
                continue;
            }
            up[(row, col)] = if row == 0 {
                1
            } else {
                up[(row - 1, col)] + 1
            };
            left[(row, col)] = if col == 0 {
                1
            } else {
                left[(row, col - 1)] + 1
            };
        }
        debug!(height, width, "built run-length index");

        Ok(Self { up, left })
    }

    /// Coordinates of every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.up.iter().map(|(row, col, _)| (row, col))
    }

    pub fn height(&self) -> usize {
        self.up.height()
    }

    pub fn width(&self) -> usize {
        self.up.width()
    }

    /// Length of the run of 1s ending at `(row, col)` and extending upward.
    pub fn up(&self, row: usize, col: usize) -> usize {
        self.up[(row, col)]
    }

    /// Length of the run of 1s ending at `(row, col)` and extending leftward.
    pub fn left(&self, row: usize, col: usize) -> usize {
        self.left[(row, col)]
    }

    pub fn run(&self, row: usize, col: usize, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Horizontal => self.left(row, col),
            Orientation::Vertical => self.up(row, col),
        }
    }

    /// Largest side a square with its bottom-right corner at `(row, col)`
    /// could have.
    pub fn bound(&self, row: usize, col: usize) -> usize {
        self.up(row, col).min(self.left(row, col))
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    fn indexed(text: &str) -> (Grid, RunLengthIndex) {
        let grid = Grid::load(text.as_bytes()).unwrap();
        let index = RunLengthIndex::build(&grid).unwrap();
        (grid, index)
    }

    fn table(index: &RunLengthIndex, orientation: Orientation) -> Vec<Vec<usize>> {
        (0..index.height())
            .map(|r| {
                (0..index.width())
                    .map(|c| index.run(r, c, orientation))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn counts_runs_in_both_directions() {
        let (_, index) = indexed(indoc! {"
            3 4
            1101
            0111
            1110
        "});
        assert_eq!(
            table(&index, Orientation::Horizontal),
            vec![vec![1, 2, 0, 1], vec![0, 1, 2, 3], vec![1, 2, 3, 0]]
        );
        assert_eq!(
            table(&index, Orientation::Vertical),
            vec![vec![1, 1, 0, 1], vec![0, 2, 1, 2], vec![1, 3, 2, 0]]
        );
        assert_eq!(index.bound(2, 1), 2);
        assert_eq!(index.bound(1, 3), 2);
    }

    #[test]
    fn empty_grid_has_empty_index() {
        let (_, index) = indexed("0 3\n");
        assert_eq!((index.height(), index.width()), (0, 3));
        assert_eq!(index.cells().count(), 0);

        let (_, index) = indexed(&format!("{} 0\n", usize::MAX));
        assert_eq!(index.height(), usize::MAX);
        assert_eq!(index.cells().next(), None);
    }

    #[test]
    fn cells_visit_row_major() {
        let (_, index) = indexed("2 2\n1111\n");
        let cells: Vec<_> = index.cells().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn runs_respect_grid_edges_and_zeros() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let height = rng.gen_range(1..=10);
            let width = rng.gen_range(1..=10);
            let bits: String = (0..height * width)
                .map(|_| if rng.gen_bool(0.7) { '1' } else { '0' })
                .collect();
            let (grid, index) = indexed(&format!("{height} {width}\n{bits}"));
            for r in 0..height {
                for c in 0..width {
                    assert!(index.up(r, c) <= r + 1);
                    assert!(index.left(r, c) <= c + 1);
                    if !grid.get(r, c) {
                        assert_eq!((index.up(r, c), index.left(r, c)), (0, 0));
                    } else {
                        let up = (0..=r).rev().take_while(|&i| grid.get(i, c)).count();
                        let left = (0..=c).rev().take_while(|&j| grid.get(r, j)).count();
                        assert_eq!((index.up(r, c), index.left(r, c)), (up, left));
                    }
                }
            }
        }
    }
}
