use super::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Position of a game in the turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingMoveProviderA,
    AwaitingMoveProviderB,
    Finished(Player),
    Drawn,
}

impl TurnState {
    /// Non-terminal state for the side that owns `turn`
    pub fn awaiting(turn: u32) -> Self {
        match Player::for_turn(turn) {
            Player::A => TurnState::AwaitingMoveProviderA,
            Player::B => TurnState::AwaitingMoveProviderB,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.outcome().is_some()
    }

    pub fn outcome(self) -> Option<GameOutcome> {
        match self {
            TurnState::Finished(player) => Some(GameOutcome::Winner(player)),
            TurnState::Drawn => Some(GameOutcome::Draw),
            TurnState::AwaitingMoveProviderA | TurnState::AwaitingMoveProviderB => None,
        }
    }

    /// Side expected to move next, if the game is still running
    pub fn to_move(self) -> Option<Player> {
        match self {
            TurnState::AwaitingMoveProviderA => Some(Player::A),
            TurnState::AwaitingMoveProviderB => Some(Player::B),
            TurnState::Finished(_) | TurnState::Drawn => None,
        }
    }
}
