use crate::schema::{QuestionDef, WheelDef};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tabletalk_core::{
    CardId, Content, GameRules, PromptCard, WheelLevel, WheelTier, DECK_SIZE,
};

const QUESTIONS_FILE: &str = "questions.json";
const WHEELS_FILE: &str = "wheels.json";
const RULES_FILE: &str = "rules.json";
const MIN_TIER_PROMPTS: usize = 2;

fn load_json<T: DeserializeOwned>(path: PathBuf) -> anyhow::Result<T> {
    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

pub fn load_content(dir: &Path) -> anyhow::Result<Content> {
    let questions: Vec<QuestionDef> = load_json(dir.join(QUESTIONS_FILE))?;
    let wheels: Vec<WheelDef> = load_json(dir.join(WHEELS_FILE))?;
    Ok(Content {
        cards: build_cards(questions)?,
        tiers: build_tiers(wheels)?,
    })
}

/// Missing rules file falls back to the built-in defaults.
pub fn load_rules(dir: &Path) -> anyhow::Result<GameRules> {
    let path = dir.join(RULES_FILE);
    if !path.exists() {
        return Ok(GameRules::default());
    }
    load_json(path)
}

fn build_cards(questions: Vec<QuestionDef>) -> anyhow::Result<Vec<PromptCard>> {
    let mut seen = HashSet::new();
    let mut cards = Vec::with_capacity(questions.len());
    for def in questions {
        if def.id < 1 || def.id > DECK_SIZE {
            bail!("question id {} outside 1..={}", def.id, DECK_SIZE);
        }
        if !seen.insert(def.id) {
            bail!("duplicate question id {}", def.id);
        }
        if def.text.trim().is_empty() {
            bail!("question {} has empty text", def.id);
        }
        cards.push(PromptCard {
            id: CardId(def.id),
            text: def.text,
        });
    }
    if cards.len() != usize::from(DECK_SIZE) {
        bail!("expected {} questions, found {}", DECK_SIZE, cards.len());
    }
    cards.sort_by_key(|card| card.id);
    Ok(cards)
}

fn build_tiers(wheels: Vec<WheelDef>) -> anyhow::Result<Vec<WheelTier>> {
    let mut tiers: Vec<WheelTier> = Vec::with_capacity(wheels.len());
    for def in wheels {
        let Some(level) = WheelLevel::from_number(def.level) else {
            bail!("unknown wheel level {}", def.level);
        };
        if tiers.iter().any(|tier| tier.level == level) {
            bail!("duplicate wheel level {}", def.level);
        }
        if def.prompts.len() < MIN_TIER_PROMPTS {
            bail!(
                "wheel level {} needs at least {} prompts, found {}",
                def.level,
                MIN_TIER_PROMPTS,
                def.prompts.len()
            );
        }
        if def.prompts.iter().any(|prompt| prompt.trim().is_empty()) {
            bail!("wheel level {} has an empty prompt", def.level);
        }
        tiers.push(WheelTier {
            level,
            prompts: def.prompts,
        });
    }
    if tiers.len() != WheelLevel::ALL.len() {
        bail!(
            "expected {} wheel tiers, found {}",
            WheelLevel::ALL.len(),
            tiers.len()
        );
    }
    tiers.sort_by_key(|tier| tier.level.number());
    Ok(tiers)
}
