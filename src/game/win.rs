//! Four-in-a-row detection.
//!
//! Every occupied cell is probed along the four axes (vertical, horizontal and
//! both diagonals), in both senses, for three further cells of the same state.
//! Offsets are bounds-checked before any cell is read.

use super::board::{BoardView, Cell};
use super::player::Player;

/// Number of identical cells that end the game.
pub const CONNECT: isize = 4;

/// (row step, column step) for each undirected axis.
const AXES: [(isize, isize); 4] = [
    (1, 0),  // vertical
    (0, 1),  // horizontal
    (1, 1),  // diagonal /
    (1, -1), // diagonal \
];

/// True iff some non-empty cell starts a run of four in any direction.
pub fn is_finished(board: BoardView<'_>) -> bool {
    winner(board).is_some()
}

/// The side owning the first run of four found, scanning from the bottom row.
pub fn winner(board: BoardView<'_>) -> Option<Player> {
    for row in 0..board.rows() {
        for column in 0..board.columns() {
            let cell = board.get(row, column);
            if cell == Cell::Empty {
                continue;
            }

            let (row, column) = (row as isize, column as isize);
            let connected = AXES.iter().any(|&(dr, dc)| {
                run_from(board, row, column, dr, dc, cell)
                    || run_from(board, row, column, -dr, -dc, cell)
            });
            if connected {
                return Player::from_cell(cell);
            }
        }
    }
    None
}

/// Whether the `CONNECT - 1` cells after (row, column) along (dr, dc) all hold `cell`.
fn run_from(
    board: BoardView<'_>,
    row: isize,
    column: isize,
    dr: isize,
    dc: isize,
    cell: Cell,
) -> bool {
    (1..CONNECT).all(|step| {
        let (r, c) = (row + dr * step, column + dc * step);
        board.is_within_bounds(c, r) && board.get(r as usize, c as usize) == cell
    })
}
