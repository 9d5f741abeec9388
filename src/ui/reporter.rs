use std::io::{self, Stdout, Write};

use super::board_text;
use crate::config::GameMode;
use crate::engine::{MatchTally, Reporter};
use crate::game::{BoardView, GameOutcome, Player};

/// Prints the greeting, final board and result announcement.
pub struct ConsoleReporter<W> {
    out: W,
    mode: GameMode,
}

impl ConsoleReporter<Stdout> {
    pub fn stdout(mode: GameMode) -> Self {
        Self::new(io::stdout(), mode)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, mode: GameMode) -> Self {
        ConsoleReporter { out, mode }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Final standings after a series of games
    pub fn summary(&mut self, tally: &MatchTally) -> io::Result<()> {
        writeln!(
            self.out,
            "{} games: Bot A {} | Bot B {} | Draws {}",
            tally.total_games(),
            tally.wins(Player::A),
            tally.wins(Player::B),
            tally.draws
        )
    }
}

pub fn announcement(mode: GameMode, outcome: GameOutcome) -> &'static str {
    match (mode, outcome) {
        (GameMode::HumanVsAgent, GameOutcome::Winner(Player::A)) => "Connect Four! You win!!",
        (GameMode::HumanVsAgent, GameOutcome::Winner(Player::B)) => {
            "Computer got Connect Four. You lost."
        }
        (GameMode::AgentVsAgent, GameOutcome::Winner(Player::A)) => "Bot A wins!!",
        (GameMode::AgentVsAgent, GameOutcome::Winner(Player::B)) => "Bot B wins!!",
        (_, GameOutcome::Draw) => "The board is full. It's a draw!",
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn game_started(&mut self, _board: BoardView<'_>) -> io::Result<()> {
        writeln!(self.out, "Let's play Connect Four!")
    }

    fn game_over(&mut self, outcome: GameOutcome, board: BoardView<'_>) -> io::Result<()> {
        write!(self.out, "{}", board_text::render(board))?;
        writeln!(self.out, "{}", announcement(self.mode, outcome))?;
        self.out.flush()
    }
}
