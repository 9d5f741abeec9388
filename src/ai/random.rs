use crate::game::BoardView;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that draws columns uniformly at random until it hits an open one.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic agent for reproducible matches
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn choose_column(
        &mut self,
        board: BoardView<'_>,
        _turn: u32,
        _opponent_last_move: Option<isize>,
    ) -> isize {
        assert!(!board.is_full(), "No open columns available");
        loop {
            let column = self.rng.random_range(0..board.columns()) as isize;
            if board.is_column_open(column) {
                return column;
            }
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Cell};

    #[test]
    fn test_random_agent_selects_open_column() {
        let mut agent = RandomAgent::new();
        let board = Board::default();

        for turn in 1..100 {
            let column = agent.choose_column(board.snapshot(), turn, None);
            assert!(
                board.is_column_open(column),
                "Column {} is not open",
                column
            );
        }
    }

    #[test]
    fn test_random_agent_finds_last_open_column() {
        let mut agent = RandomAgent::seeded(7);
        let mut board = Board::default();
        for col in [0, 1, 2, 4, 5, 6] {
            for _ in 0..board.rows() {
                board.apply_move(Cell::PlayerB, col);
            }
        }

        for _ in 0..20 {
            assert_eq!(agent.choose_column(board.snapshot(), 37, Some(2)), 3);
        }
    }

    #[test]
    fn test_seeded_agents_agree() {
        let board = Board::default();
        let mut first = RandomAgent::seeded(42);
        let mut second = RandomAgent::seeded(42);
        for turn in 1..30 {
            assert_eq!(
                first.choose_column(board.snapshot(), turn, None),
                second.choose_column(board.snapshot(), turn, None)
            );
        }
    }

    #[test]
    #[should_panic(expected = "No open columns")]
    fn test_random_agent_refuses_full_board() {
        let mut agent = RandomAgent::seeded(1);
        let mut board = Board::new(1, 2);
        board.apply_move(Cell::PlayerA, 0);
        board.apply_move(Cell::PlayerB, 1);
        agent.choose_column(board.snapshot(), 3, Some(1));
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
