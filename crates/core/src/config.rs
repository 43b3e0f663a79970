use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRules {
    #[serde(default = "default_goal_score")]
    pub goal_score: u8,
    #[serde(default = "default_name_limit")]
    pub name_limit: usize,
    #[serde(default = "default_spin_delay_ms")]
    pub spin_delay_ms: u64,
    #[serde(default = "default_wheel_turns")]
    pub wheel_turns: u32,
    #[serde(default = "default_answer_seconds")]
    pub answer_seconds: u32,
    #[serde(default = "default_warning_seconds")]
    pub warning_seconds: u32,
}

fn default_goal_score() -> u8 {
    3
}

fn default_name_limit() -> usize {
    16
}

fn default_spin_delay_ms() -> u64 {
    2700
}

fn default_wheel_turns() -> u32 {
    6
}

fn default_answer_seconds() -> u32 {
    60
}

fn default_warning_seconds() -> u32 {
    10
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            goal_score: default_goal_score(),
            name_limit: default_name_limit(),
            spin_delay_ms: default_spin_delay_ms(),
            wheel_turns: default_wheel_turns(),
            answer_seconds: default_answer_seconds(),
            warning_seconds: default_warning_seconds(),
        }
    }
}
