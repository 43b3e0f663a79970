use crate::RngState;
use serde::{Deserialize, Serialize};

pub const FULL_TURN_DEG: f64 = 360.0;
/// Slice 0 begins at the pointer reference; slices proceed clockwise.
pub const POINTER_OFFSET_DEG: f64 = -90.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WheelLevel {
    L1,
    L2,
    L3,
}

impl WheelLevel {
    pub const ALL: [WheelLevel; 3] = [WheelLevel::L1, WheelLevel::L2, WheelLevel::L3];

    pub fn from_number(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::L1),
            2 => Some(Self::L2),
            3 => Some(Self::L3),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Self::L1 => 1,
            Self::L2 => 2,
            Self::L3 => 3,
        }
    }

    /// Spinning a tier costs as many points as its level.
    pub fn cost(self) -> u8 {
        self.number()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WheelTier {
    pub level: WheelLevel,
    pub prompts: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinOutcome {
    pub index: usize,
    pub final_rotation: f64,
}

/// Picks wheel outcomes and tracks the presentation rotation. The
/// rotation accumulates across spins and never resets within a session,
/// so the wheel always travels forward.
#[derive(Debug, Clone, Default)]
pub struct WheelSelector {
    rotation: f64,
}

impl WheelSelector {
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn slice_center(index: usize, len: usize) -> f64 {
        let slice = FULL_TURN_DEG / len as f64;
        POINTER_OFFSET_DEG + index as f64 * slice + slice / 2.0
    }

    pub fn spin(
        &mut self,
        len: usize,
        extra_turns: u32,
        rng: &mut RngState,
    ) -> Option<SpinOutcome> {
        let index = rng.pick_index(len)?;
        let target = Self::slice_center(index, len);
        let final_rotation = self.rotation + f64::from(extra_turns) * FULL_TURN_DEG - target;
        self.rotation = final_rotation;
        Some(SpinOutcome {
            index,
            final_rotation,
        })
    }
}
