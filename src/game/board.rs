//! The token grid
//!
//! Row 0 is the bottom of the grid: tokens fall toward row 0 and stack
//! upward, so the occupied cells of a column always form a contiguous block
//! starting at row 0.

use crate::core::Token;
use crate::{C4Error, Result};

pub const MIN_ROWS: usize = 6;
pub const MAX_ROWS: usize = 9;
pub const MIN_COLS: usize = 7;
pub const MAX_COLS: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major, bottom row first
    cells: Vec<Option<Token>>,
}

impl Board {
    /// Create an empty board, rejecting unsupported dimensions
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&rows) || !(MIN_COLS..=MAX_COLS).contains(&cols) {
            return Err(C4Error::InvalidDimensions { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![None; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Bounds check for signed coordinates, used when walking lines that may
    /// step off the grid
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && self.is_in_bounds(row as usize, col as usize)
    }

    /// Get the token at a position, or `None` if the cell is empty
    pub fn get(&self, row: usize, col: usize) -> Result<Option<Token>> {
        if !self.is_in_bounds(row, col) {
            return Err(C4Error::OutOfBounds {
                row: Some(row),
                col,
            });
        }
        Ok(self.cells[self.index(row, col)])
    }

    /// Cell lookup for coordinates already known to be in bounds
    pub(crate) fn cell(&self, row: usize, col: usize) -> Option<Token> {
        self.cells[self.index(row, col)]
    }

    pub(crate) fn place(&mut self, row: usize, col: usize, token: Token) {
        let idx = self.index(row, col);
        self.cells[idx] = Some(token);
    }

    /// Lowest empty row in a column, found by scanning up from row 0.
    /// `None` for a full column or one that is not on the grid.
    pub fn lowest_open_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).find(|&row| self.cell(row, col).is_none())
    }

    /// Number of tokens stacked in a column; 0 for a column not on the grid
    pub fn column_height(&self, col: usize) -> usize {
        if col >= self.cols {
            return 0;
        }
        (0..self.rows)
            .filter(|&row| self.cell(row, col).is_some())
            .count()
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        col >= self.cols || self.cell(self.rows - 1, col).is_some()
    }

    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// True if no token sits above an empty cell in any column
    pub fn is_gap_free(&self) -> bool {
        (0..self.cols).all(|col| {
            let height = self.column_height(col);
            (0..height).all(|row| self.cell(row, col).is_some())
        })
    }

    /// Iterate rows from the top of the grid down, as they are displayed
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[Option<Token>]> + '_ {
        self.cells.chunks(self.cols).rev()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, 7).unwrap();
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.get(row, col).unwrap(), None);
            }
        }
        assert_eq!(board.occupied(), 0);
        assert_eq!(board.capacity(), 42);
    }

    #[test]
    fn test_dimension_limits() {
        for rows in 0..12 {
            for cols in 0..12 {
                let ok = (6..=9).contains(&rows) && (7..=9).contains(&cols);
                match Board::new(rows, cols) {
                    Ok(_) => assert!(ok, "{rows}x{cols} should be rejected"),
                    Err(C4Error::InvalidDimensions { .. }) => {
                        assert!(!ok, "{rows}x{cols} should be accepted")
                    }
                    Err(e) => panic!("unexpected error {e}"),
                }
            }
        }
    }

    #[test]
    fn test_bounds() {
        let board = Board::new(6, 7).unwrap();
        assert!(board.is_in_bounds(0, 0));
        assert!(board.is_in_bounds(5, 6));
        assert!(!board.is_in_bounds(6, 0));
        assert!(!board.is_in_bounds(0, 7));
        assert!(!board.contains(-1, 0));
        assert!(!board.contains(0, -1));
        assert!(board.contains(5, 6));
        assert!(matches!(
            board.get(6, 0),
            Err(C4Error::OutOfBounds { row: Some(6), col: 0 })
        ));
    }

    #[test]
    fn test_lowest_open_row_stacks_up() {
        let mut board = Board::new(6, 7).unwrap();
        assert_eq!(board.lowest_open_row(3), Some(0));
        board.place(0, 3, Token::Red);
        assert_eq!(board.lowest_open_row(3), Some(1));
        board.place(1, 3, Token::Blue);
        assert_eq!(board.lowest_open_row(3), Some(2));
        assert_eq!(board.column_height(3), 2);
        assert!(board.is_gap_free());
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new(6, 7).unwrap();
        for row in 0..6 {
            board.place(row, 0, Token::Red);
        }
        assert!(board.is_column_full(0));
        assert_eq!(board.lowest_open_row(0), None);
        assert!(!board.is_full());
    }

    #[test]
    fn test_columns_off_the_grid() {
        let mut board = Board::new(6, 7).unwrap();
        board.place(0, 2, Token::Red);
        for row in 0..6 {
            board.place(row, 0, Token::Blue);
        }

        // Column 9 would alias cell (1, 2) in the flat storage
        assert_eq!(board.lowest_open_row(9), None);
        assert_eq!(board.lowest_open_row(7), None);
        assert_eq!(board.column_height(7), 0);
        assert_eq!(board.column_height(usize::MAX), 0);
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_gap_detection() {
        let mut board = Board::new(6, 7).unwrap();
        board.place(2, 4, Token::Red);
        assert!(!board.is_gap_free());
    }

    #[test]
    fn test_rows_top_down() {
        let mut board = Board::new(6, 7).unwrap();
        board.place(0, 0, Token::Red);
        let rows: Vec<_> = board.rows_top_down().collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[5][0], Some(Token::Red));
        assert_eq!(rows[0][0], None);
    }
}
