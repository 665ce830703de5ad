//! Bitmap parsing.
//!
//! The input is a header with two decimal integers, `height` then `width`,
//! followed by `height * width` symbols of `0` or `1` in row-major order.
//! Whitespace and NUL bytes between symbols are ignored.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use tracing::debug;

use crate::{
    error::{LoadError, Result},
    matrix::Matrix,
};

/// A fully populated binary grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Matrix<bool>,
}

fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c | 0)
}

/// Byte cursor over a buffered reader that tracks the stream offset.
struct Cursor<R> {
    reader: R,
    offset: usize,
}

impl<R: BufRead> Cursor<R> {
    fn peek(&mut self) -> Result<Option<u8>> {
        Ok(self.reader.fill_buf()?.first().copied())
    }

    fn bump(&mut self) {
        self.reader.consume(1);
        self.offset += 1;
    }

    fn skip_separators(&mut self) -> Result<()> {
        while let Some(b) = self.peek()? {
            if !is_separator(b) {
                break;
            }
            self.bump();
        }
        Ok(())
    }

    /// Read one non-negative decimal header field.
    fn dimension(&mut self) -> Result<usize> {
        self.skip_separators()?;
        let start = self.offset;
        let mut value: usize = 0;
        loop {
            match self.peek()? {
                Some(b @ b'0'..=b'9') => {
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(usize::from(b - b'0')))
                        .ok_or_else(|| {
                            LoadError::InvalidHeader(format!(
                                "dimension at byte {start} is too large"
                            ))
                        })?;
                    self.bump();
                }
                Some(b) if !is_separator(b) => {
                    return Err(LoadError::InvalidHeader(format!(
                        "unexpected {:?} at byte {}",
                        b as char, self.offset
                    )));
                }
                _ => break,
            }
        }
        if self.offset == start {
            return Err(LoadError::TruncatedHeader);
        }
        Ok(value)
    }

    /// Read `height * width` symbols into a row-major buffer.
    fn symbols(&mut self, height: usize, width: usize) -> Result<Vec<bool>> {
        let expected = height
            .checked_mul(width)
            .ok_or(LoadError::Allocation { height, width })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(expected)
            .map_err(|_| LoadError::Allocation { height, width })?;
        while cells.len() < expected {
            let Some(b) = self.peek()? else {
                return Err(LoadError::TruncatedInput {
                    expected,
                    found: cells.len(),
                });
            };
            match b {
                b'0' => cells.push(false),
                b'1' => cells.push(true),
                b if is_separator(b) => {}
                b => {
                    return Err(LoadError::InvalidSymbol {
                        symbol: b as char,
                        offset: self.offset,
                    })
                }
            }
            self.bump();
        }
        Ok(cells)
    }
}

impl Grid {
    /// Parse a bitmap from `reader`.
    ///
    /// Reading stops as soon as the grid is full; anything after the last
    /// required symbol is never consumed.
    pub fn load(reader: impl Read) -> Result<Self> {
        let mut cursor = Cursor {
            reader: BufReader::new(reader),
            offset: 0,
        };
        let height = cursor.dimension()?;
        let width = cursor.dimension()?;
        debug!(height, width, "parsed bitmap dimensions");

        let cells = cursor.symbols(height, width)?;
        let cells = Matrix::from_vec(height, width, cells)
            .ok_or(LoadError::Allocation { height, width })?;
        Ok(Self { cells })
    }

    /// Open and parse the bitmap stored at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let unreadable = |source| LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(unreadable)?;
        Self::load(file).map_err(|err| match err {
            LoadError::Io(source) => unreadable(source),
            err => err,
        })
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value at `(row, col)`; out-of-range cells read as 0.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells.get(row, col).copied().unwrap_or(false)
    }

    pub fn cells(&self) -> &Matrix<bool> {
        &self.cells
    }
}
