use crate::{CardId, Category, PlayerId, WheelLevel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    CardDrawn {
        id: CardId,
        category: Category,
        remaining: usize,
    },
    DeckExhausted,
    CardCounted {
        player: PlayerId,
        score: u8,
        reached_goal: bool,
    },
    CardSkipped {
        player: PlayerId,
    },
    TurnPassed {
        to: PlayerId,
    },
    WheelOpened {
        level: WheelLevel,
    },
    WheelClosed {
        level: WheelLevel,
    },
    SpinStarted {
        level: WheelLevel,
        index: usize,
        final_rotation: f64,
    },
    SpinRevealed {
        level: WheelLevel,
        player: PlayerId,
        prompt: String,
        score: u8,
    },
    PlayerRenamed {
        player: PlayerId,
        name: String,
    },
    TimerWarning {
        seconds_left: u32,
    },
    TimerExpired,
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
