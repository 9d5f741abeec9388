use crate::ai::Agent;
use crate::error::InputError;
use crate::game::{BoardView, MoveError, Player};

/// Everything a provider is told when asked for a move.
#[derive(Debug, Clone, Copy)]
pub struct MoveRequest<'a> {
    pub board: BoardView<'a>,
    pub turn: u32,
    pub player: Player,
    /// Column the other side played most recently, if it has moved yet
    pub opponent_last_move: Option<isize>,
}

/// Source of columns for one side of a game: a person at a console or an agent.
pub trait MoveProvider {
    fn name(&self) -> &str;

    /// Propose a column. The engine validates it and calls
    /// [`on_rejected`](Self::on_rejected) before asking again if it cannot be played.
    fn choose_column(&mut self, request: MoveRequest<'_>) -> Result<isize, InputError>;

    /// The last proposed column could not be played.
    fn on_rejected(&mut self, _column: isize, _error: MoveError) {}
}

impl<P: MoveProvider + ?Sized> MoveProvider for &mut P {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choose_column(&mut self, request: MoveRequest<'_>) -> Result<isize, InputError> {
        (**self).choose_column(request)
    }

    fn on_rejected(&mut self, column: isize, error: MoveError) {
        (**self).on_rejected(column, error)
    }
}

/// Adapts an [`Agent`] to the provider interface. Never fails.
pub struct AgentProvider<A> {
    agent: A,
}

impl<A: Agent> AgentProvider<A> {
    pub fn new(agent: A) -> Self {
        AgentProvider { agent }
    }
}

impl<A: Agent> MoveProvider for AgentProvider<A> {
    fn name(&self) -> &str {
        self.agent.name()
    }

    fn choose_column(&mut self, request: MoveRequest<'_>) -> Result<isize, InputError> {
        Ok(self
            .agent
            .choose_column(request.board, request.turn, request.opponent_last_move))
    }

    fn on_rejected(&mut self, column: isize, error: MoveError) {
        tracing::warn!(
            "agent {} proposed unplayable column {column}: {error}",
            self.agent.name()
        );
    }
}
