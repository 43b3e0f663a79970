use crate::{CardId, PromptCard, WheelLevel, WheelTier};
use serde::{Deserialize, Serialize};

/// Static game content: the prompt deck and the wheel tiers. Validation
/// lives in the data crate; the core trusts what it is handed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub cards: Vec<PromptCard>,
    pub tiers: Vec<WheelTier>,
}

impl Content {
    pub fn card_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|card| card.id).collect()
    }

    pub fn card_text(&self, id: CardId) -> Option<&str> {
        self.cards
            .iter()
            .find(|card| card.id == id)
            .map(|card| card.text.as_str())
    }

    pub fn tier(&self, level: WheelLevel) -> Option<&WheelTier> {
        self.tiers.iter().find(|tier| tier.level == level)
    }
}
