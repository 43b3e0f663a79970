use crate::{CardId, RngState};
use serde::{Deserialize, Serialize};

/// Depleting collection of unplayed prompt cards. Drawn ids move to the
/// history and never return; there is no reshuffle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    remaining: Vec<CardId>,
    drawn: Vec<CardId>,
}

impl Deck {
    pub fn new(ids: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            remaining: ids.into_iter().collect(),
            drawn: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn drawn(&self) -> &[CardId] {
        &self.drawn
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn draw(&mut self, rng: &mut RngState) -> Option<CardId> {
        let idx = rng.pick_index(self.remaining.len())?;
        let id = self.remaining.swap_remove(idx);
        self.drawn.push(id);
        Some(id)
    }
}
