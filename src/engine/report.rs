use std::io;

use crate::game::{BoardView, GameOutcome, Player};

/// A move the engine accepted and applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub player: Player,
    pub turn: u32,
    pub column: usize,
    pub row: usize,
}

/// Receives game progress from [`TurnEngine::run`](super::TurnEngine::run).
pub trait Reporter {
    fn game_started(&mut self, _board: BoardView<'_>) -> io::Result<()> {
        Ok(())
    }

    fn move_applied(&mut self, _applied: AppliedMove, _board: BoardView<'_>) -> io::Result<()> {
        Ok(())
    }

    fn game_over(&mut self, outcome: GameOutcome, board: BoardView<'_>) -> io::Result<()>;
}

/// Results over a series of games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchTally {
    pub wins_a: u64,
    pub wins_b: u64,
    pub draws: u64,
}

impl MatchTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Winner(Player::A) => self.wins_a += 1,
            GameOutcome::Winner(Player::B) => self.wins_b += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn wins(&self, player: Player) -> u64 {
        match player {
            Player::A => self.wins_a,
            Player::B => self.wins_b,
        }
    }

    pub fn total_games(&self) -> u64 {
        self.wins_a + self.wins_b + self.draws
    }
}
