use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub fn from_number(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub score: u8,
}

impl Player {
    fn with_name(name: String) -> Self {
        Self { name, score: 0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointLedger {
    goal: u8,
    players: [Player; 2],
}

impl PointLedger {
    pub fn new(goal: u8) -> Self {
        Self {
            goal,
            players: [
                Player::with_name("Player 1".to_string()),
                Player::with_name("Player 2".to_string()),
            ],
        }
    }

    fn slot(&self, player: PlayerId) -> &Player {
        &self.players[usize::from(player.number() - 1)]
    }

    fn slot_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[usize::from(player.number() - 1)]
    }

    pub fn goal(&self) -> u8 {
        self.goal
    }

    pub fn score(&self, player: PlayerId) -> u8 {
        self.slot(player).score
    }

    pub fn name(&self, player: PlayerId) -> &str {
        &self.slot(player).name
    }

    pub fn set_name(&mut self, player: PlayerId, name: String) {
        self.slot_mut(player).name = name;
    }

    /// Adds one point, clamped at the goal. Returns true only on the call
    /// that reaches the goal.
    pub fn award(&mut self, player: PlayerId) -> bool {
        let goal = self.goal;
        let slot = self.slot_mut(player);
        let before = slot.score;
        slot.score = (slot.score + 1).min(goal);
        before < goal && slot.score == goal
    }

    /// Scores below the cost clamp to zero rather than failing.
    pub fn spend(&mut self, player: PlayerId, cost: u8) {
        let slot = self.slot_mut(player);
        slot.score = slot.score.saturating_sub(cost);
    }

    pub fn can_afford(&self, player: PlayerId, cost: u8) -> bool {
        self.slot(player).score >= cost
    }
}
