//! Sliding window of pending quantization error.

use crate::color::WorkingColor;

/// Error buffer for raster-order diffusion.
///
/// Keeps only the rows diffusion can still reach: the current row and, for
/// each extra unit of `row_depth`, one row below it.
///
/// # Usage Pattern
///
/// 1. Create buffer with `new(width, row_depth)`
/// 2. For each row:
///    a. Read accumulated error with `get_accumulated(x)`
///    b. After processing a pixel, distribute error with `add_error(x, dy, error)`
///    c. After the row is complete, call `advance_row()`
#[derive(Debug)]
pub struct ErrorBuffer {
    /// rows[0] is the current row, rows[1] the next one
    rows: Vec<Vec<WorkingColor>>,
    width: usize,
}

impl ErrorBuffer {
    /// Create a zeroed buffer for `row_depth` rows of `width` pixels.
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth)
                .map(|_| vec![WorkingColor::default(); width])
                .collect(),
            width,
        }
    }

    /// Error accumulated so far for pixel `x` of the current row.
    #[inline]
    pub fn get_accumulated(&self, x: usize) -> WorkingColor {
        self.rows[0][x]
    }

    /// Add error to pixel `x` of the row `row_offset` rows below the
    /// current one. Out-of-bounds targets are ignored.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: WorkingColor) {
        if x < self.width && row_offset < self.rows.len() {
            let cell = &mut self.rows[row_offset][x];
            *cell = *cell + error;
        }
    }

    /// Drop the current row and start a zeroed one at the bottom.
    pub fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill(WorkingColor::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_is_zeroed() {
        let buf = ErrorBuffer::new(8, 2);
        assert_eq!(buf.rows.len(), 2);
        assert!(buf
            .rows
            .iter()
            .flatten()
            .all(|&e| e == WorkingColor::default()));
    }

    #[test]
    fn test_add_accumulates() {
        let mut buf = ErrorBuffer::new(4, 2);
        buf.add_error(1, 0, WorkingColor::new(1.5, -2.0, 0.25));
        buf.add_error(1, 0, WorkingColor::new(0.5, 1.0, 0.25));
        assert_eq!(buf.get_accumulated(1), WorkingColor::new(2.0, -1.0, 0.5));
        assert_eq!(buf.get_accumulated(0), WorkingColor::default());
    }

    #[test]
    fn test_advance_row_shifts_and_clears() {
        let mut buf = ErrorBuffer::new(3, 2);
        buf.add_error(0, 0, WorkingColor::new(1.0, 0.0, 0.0));
        buf.add_error(0, 1, WorkingColor::new(2.0, 0.0, 0.0));
        buf.advance_row();
        assert_eq!(buf.get_accumulated(0), WorkingColor::new(2.0, 0.0, 0.0));
        assert_eq!(buf.rows[1][0], WorkingColor::default());
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut buf = ErrorBuffer::new(3, 2);
        buf.add_error(3, 0, WorkingColor::new(9.0, 9.0, 9.0));
        buf.add_error(0, 2, WorkingColor::new(9.0, 9.0, 9.0));
        assert!(buf
            .rows
            .iter()
            .flatten()
            .all(|&e| e == WorkingColor::default()));
    }
}
