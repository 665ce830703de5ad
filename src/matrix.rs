//! Dense row-major 2D storage shared by the bitmap and its run tables.

use std::ops::{Index, IndexMut};

/// A fixed-size 2D container backed by a single buffer.
///
/// Cell `(row, col)` lives at `row * width + col`. The shape never changes
/// after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    height: usize,
    width: usize,
    cells: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Create a matrix with every cell set to `value`.
    ///
    /// Returns `None` if the buffer cannot be allocated.
    pub fn try_filled(height: usize, width: usize, value: T) -> Option<Self> {
        let len = height.checked_mul(width)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, value);
        Some(Self {
            height,
            width,
            cells,
        })
    }
}

impl<T> Matrix<T> {
    /// Wrap a row-major buffer. Returns `None` if the length does not match.
    pub fn from_vec(height: usize, width: usize, cells: Vec<T>) -> Option<Self> {
        if height.checked_mul(width)? != cells.len() {
            return None;
        }
        Some(Self {
            height,
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// True when the matrix has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.height && col < self.width {
            self.cells.get(row * self.width + col)
        } else {
            None
        }
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate over `(row, col, &value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (i / width, i % width, v))
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(col < self.width, "column {col} out of range");
        &self.cells[row * self.width + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(col < self.width, "column {col} out of range");
        &mut self.cells[row * self.width + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_layout() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m[(0, 2)], 3);
        assert_eq!(m[(1, 0)], 4);
        assert_eq!(m.row(1), &[4, 5, 6]);
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        assert!(Matrix::from_vec(2, 2, vec![0u8; 3]).is_none());
        assert!(Matrix::from_vec(0, 7, Vec::<u8>::new()).is_some());
    }

    #[test]
    fn try_filled_reports_oversized_buffers() {
        assert!(Matrix::try_filled(usize::MAX, 2, 0u8).is_none());
        assert!(Matrix::try_filled(1, usize::MAX / 4, 0usize).is_none());
        let empty = Matrix::try_filled(usize::MAX, 0, 0usize).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.iter().count(), 0);
    }

    #[test]
    fn iter_yields_coordinates() {
        let mut m = Matrix::try_filled(2, 2, 0).unwrap();
        m[(1, 1)] = 9;
        let cells: Vec<_> = m.iter().map(|(r, c, v)| (r, c, *v)).collect();
        assert_eq!(cells, vec![(0, 0, 0), (0, 1, 0), (1, 0, 0), (1, 1, 9)]);
    }

    #[test]
    #[should_panic]
    fn index_checks_column() {
        let m = Matrix::try_filled(2, 2, 0).unwrap();
        let _ = m[(0, 2)];
    }
}
