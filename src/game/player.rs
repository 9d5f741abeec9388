use super::board::Cell;

/// The two sides. `A` always moves first (odd turns), `B` second (even turns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Side that owns the given turn number (turns start at 1)
    pub fn for_turn(turn: u32) -> Player {
        if turn % 2 == 1 {
            Player::A
        } else {
            Player::B
        }
    }

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::A => Cell::PlayerA,
            Player::B => Cell::PlayerB,
        }
    }

    pub fn from_cell(cell: Cell) -> Option<Player> {
        match cell {
            Cell::Empty => None,
            Cell::PlayerA => Some(Player::A),
            Cell::PlayerB => Some(Player::B),
        }
    }

    /// Two-character board symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Player::A => "O ",
            Player::B => "X ",
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::A => "A",
            Player::B => "B",
        }
    }
}
