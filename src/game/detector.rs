//! Four-in-a-row detection
//!
//! A winning run through the last drop can hold that token in any of its
//! four positions, so every direction is checked with the run starting up to
//! three cells behind the drop. Windows that would leave the grid are
//! skipped rather than treated as losses.

use super::board::Board;

/// Length of a winning run
pub const RUN_LENGTH: isize = 4;

/// Horizontal, vertical, diagonal and anti-diagonal, as (row, col) steps
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Check whether four equal tokens are connected through `(row, col)`.
///
/// Returns `false` for an empty or out-of-bounds anchor cell. Pure: the
/// board is only read.
pub fn has_connect_four_through(board: &Board, row: usize, col: usize) -> bool {
    if !board.is_in_bounds(row, col) {
        return false;
    }
    let Some(token) = board.cell(row, col) else {
        return false;
    };
    let (row, col) = (row as isize, col as isize);

    DIRECTIONS.iter().any(|&(dr, dc)| {
        (-(RUN_LENGTH - 1)..=0).any(|k| {
            let (start_row, start_col) = (row + k * dr, col + k * dc);
            let (end_row, end_col) = (
                start_row + (RUN_LENGTH - 1) * dr,
                start_col + (RUN_LENGTH - 1) * dc,
            );
            if !board.contains(start_row, start_col) || !board.contains(end_row, end_col) {
                return false;
            }
            (0..RUN_LENGTH).all(|i| {
                let r = (start_row + i * dr) as usize;
                let c = (start_col + i * dc) as usize;
                board.cell(r, c) == Some(token)
            })
        })
    })
}
