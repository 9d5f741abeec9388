use crate::game::{BoardView, Cell, Player};

/// Render the grid top row first, followed by a separator line and the
/// zero-based column indices.
pub fn render(board: BoardView<'_>) -> String {
    let mut text = String::new();

    for row in (0..board.rows()).rev() {
        for column in 0..board.columns() {
            text.push_str(cell_symbol(board.get(row, column)));
        }
        text.push('\n');
    }

    text.push_str(&"-.".repeat(board.columns()));
    text.push('\n');

    for column in 0..board.columns() {
        text.push_str(&format!("{column} "));
    }
    text.push('\n');

    text
}

/// Symbol for a single cell, as used by [`render`]
pub fn cell_symbol(cell: Cell) -> &'static str {
    Player::from_cell(cell).map_or("  ", Player::symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Board;

    #[test]
    fn test_render_empty_board() {
        let board = Board::new(2, 3);
        assert_eq!(render(board.snapshot()), "      \n      \n-.-.-.\n0 1 2 \n");
    }

    #[test]
    fn test_render_bottom_row_last() {
        let mut board = Board::new(3, 4);
        board.apply_move(Cell::PlayerA, 0);
        board.apply_move(Cell::PlayerB, 0);
        board.apply_move(Cell::PlayerB, 3);

        let expected = concat!(
            "        \n",
            "X       \n",
            "O     X \n",
            "-.-.-.-.\n",
            "0 1 2 3 \n",
        );
        assert_eq!(render(board.snapshot()), expected);
    }

    #[test]
    fn test_cell_symbols() {
        assert_eq!(cell_symbol(Cell::Empty), "  ");
        assert_eq!(cell_symbol(Cell::PlayerA), "O ");
        assert_eq!(cell_symbol(Cell::PlayerB), "X ");
    }
}
