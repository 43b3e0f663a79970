use serde::{Deserialize, Serialize};

pub const DECK_SIZE: u8 = 30;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct CardId(pub u8);

impl CardId {
    pub fn category(self) -> Category {
        match self.0 {
            1..=10 => Category::Perception,
            11..=20 => Category::Connection,
            _ => Category::Reflection,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Perception,
    Connection,
    Reflection,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::Perception => "Perception",
            Self::Connection => "Connection",
            Self::Reflection => "Reflection",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptCard {
    pub id: CardId,
    pub text: String,
}
