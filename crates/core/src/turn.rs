use crate::PlayerId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingDraw,
    AwaitingDecision,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TurnState {
    pub active: PlayerId,
    pub phase: TurnPhase,
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            active: PlayerId::One,
            phase: TurnPhase::AwaitingDraw,
        }
    }

    pub fn begin_decision(&mut self) {
        self.phase = TurnPhase::AwaitingDecision;
    }

    /// Ends the active player's turn: back to AwaitingDraw, other player
    /// becomes active. Returns the new active player.
    pub fn resolve(&mut self) -> PlayerId {
        self.phase = TurnPhase::AwaitingDraw;
        self.active = self.active.other();
        self.active
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
