use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionDef {
    pub id: u8,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WheelDef {
    pub level: u8,
    pub prompts: Vec<String>,
}
