use tracing::{debug, info};

use super::provider::{MoveProvider, MoveRequest};
use super::report::{AppliedMove, Reporter};
use crate::error::EngineError;
use crate::game::{win, Board, BoardView, Cell, GameOutcome, Player, TurnState};

/// Drives one game: asks the side to move for a column, applies it, and
/// re-evaluates whether the game is over.
///
/// The engine owns the board for the lifetime of the game; providers and
/// reporters only ever see a [`BoardView`].
pub struct TurnEngine<'p> {
    board: Board,
    turn: u32,
    state: TurnState,
    providers: [Box<dyn MoveProvider + 'p>; 2],
    last_moves: [Option<isize>; 2],
}

impl<'p> TurnEngine<'p> {
    /// Start a game on an empty default-size board. `first` plays A.
    pub fn new(first: Box<dyn MoveProvider + 'p>, second: Box<dyn MoveProvider + 'p>) -> Self {
        Self::with_board(Board::default(), first, second)
    }

    /// Start from an existing position. The turn counter continues from the
    /// number of pieces already on the board.
    pub fn with_board(
        board: Board,
        first: Box<dyn MoveProvider + 'p>,
        second: Box<dyn MoveProvider + 'p>,
    ) -> Self {
        let view = board.snapshot();
        let mut occupied = 0;
        for row in 0..view.rows() {
            for column in 0..view.columns() {
                if view.get(row, column) != Cell::Empty {
                    occupied += 1;
                }
            }
        }

        let mut engine = TurnEngine {
            board,
            turn: occupied + 1,
            state: TurnState::AwaitingMoveProviderA,
            providers: [first, second],
            last_moves: [None, None],
        };
        engine.state = engine.evaluate();
        engine
    }

    pub fn board(&self) -> BoardView<'_> {
        self.board.snapshot()
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }

    pub fn provider_name(&self, player: Player) -> &str {
        self.providers[slot(player)].name()
    }

    /// Resolve exactly one accepted move for the side to play.
    ///
    /// Rejected columns are reported back to the same provider, which is asked
    /// again; the turn only advances once a move lands.
    pub fn step(&mut self) -> Result<AppliedMove, EngineError> {
        let player = self.state.to_move().ok_or(EngineError::GameOver)?;
        let index = slot(player);

        let applied = loop {
            let request = MoveRequest {
                board: self.board.snapshot(),
                turn: self.turn,
                player,
                opponent_last_move: self.last_moves[slot(player.other())],
            };
            let column = self.providers[index].choose_column(request)?;

            match self.board.drop_piece(player.to_cell(), column) {
                Ok(row) => {
                    debug!(
                        turn = self.turn,
                        player = player.name(),
                        column,
                        row,
                        "move applied"
                    );
                    self.last_moves[index] = Some(column);
                    break AppliedMove {
                        player,
                        turn: self.turn,
                        column: column as usize,
                        row,
                    };
                }
                Err(err) => {
                    debug!(
                        turn = self.turn,
                        player = player.name(),
                        column,
                        "move rejected: {err}"
                    );
                    self.providers[index].on_rejected(column, err);
                }
            }
        };

        self.turn += 1;
        self.state = self.evaluate();
        Ok(applied)
    }

    /// Play until the game is won or drawn.
    pub fn run(&mut self, reporter: &mut dyn Reporter) -> Result<GameOutcome, EngineError> {
        info!(
            a = self.provider_name(Player::A),
            b = self.provider_name(Player::B),
            "game started"
        );
        reporter.game_started(self.board.snapshot())?;

        let outcome = loop {
            if let Some(outcome) = self.state.outcome() {
                break outcome;
            }
            let applied = self.step()?;
            reporter.move_applied(applied, self.board.snapshot())?;
        };

        info!(turns = self.turn - 1, "game over: {outcome:?}");
        reporter.game_over(outcome, self.board.snapshot())?;
        Ok(outcome)
    }

    /// A win is checked before a full board so a final winning move is not a draw.
    fn evaluate(&self) -> TurnState {
        let view = self.board.snapshot();
        if let Some(winner) = win::winner(view) {
            // Parity names the side that moved last; the run of four is authoritative.
            if winner != Player::for_turn(self.turn).other() {
                debug!(
                    turn = self.turn,
                    "winner {} does not match turn parity",
                    winner.name()
                );
            }
            return TurnState::Finished(winner);
        }
        if view.is_full() {
            return TurnState::Drawn;
        }
        TurnState::awaiting(self.turn)
    }
}

fn slot(player: Player) -> usize {
    match player {
        Player::A => 0,
        Player::B => 1,
    }
}
