use crate::game::BoardView;

/// Universal interface for computer players.
///
/// Agents answer synchronously and never perform I/O. The engine only asks
/// when at least one column is open.
pub trait Agent {
    /// Pick a column given the board, the current turn number and the column
    /// the opposing side played last (`None` before its first move).
    fn choose_column(
        &mut self,
        board: BoardView<'_>,
        turn: u32,
        opponent_last_move: Option<isize>,
    ) -> isize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
