use crate::{
    AnswerTimer, CardId, Category, Content, Deck, Event, EventBus, GameRules, PlayerId,
    PointLedger, RngState, SpinOutcome, TimerSignal, TurnPhase, TurnState, WheelLevel,
    WheelSelector, WheelTier,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("deck is empty")]
    EmptyDeck,
    #[error("drawn card is awaiting a count or skip decision")]
    DecisionPending,
    #[error("no drawn card is awaiting a decision")]
    NoPendingCard,
    #[error("not enough points for the level {} wheel", .0.number())]
    NotEnoughPoints(WheelLevel),
    #[error("a spin is still in flight")]
    SpinInFlight,
    #[error("no wheel is open")]
    WheelNotOpen,
    #[error("a wheel is already open")]
    WheelAlreadyOpen,
    #[error("no tier configured for wheel level {}", .0.number())]
    MissingTier(WheelLevel),
    #[error("player name is empty")]
    InvalidName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnCard {
    pub id: CardId,
    pub category: Category,
    pub text: String,
    pub remaining: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountOutcome {
    pub score: u8,
    pub reached_goal: bool,
    pub next_player: PlayerId,
}

#[derive(Debug, Clone)]
struct PendingReveal {
    level: WheelLevel,
    index: usize,
    due_at_ms: u64,
}

/// One game between two players. Owns every piece of mutable state;
/// construct a fresh session to reset. All validation happens before
/// any mutation, so a rejected action leaves the session untouched.
#[derive(Debug)]
pub struct GameSession {
    rules: GameRules,
    content: Content,
    rng: RngState,
    deck: Deck,
    ledger: PointLedger,
    turn: TurnState,
    wheel: WheelSelector,
    open_wheel: Option<WheelLevel>,
    pending_reveal: Option<PendingReveal>,
    timer: Option<AnswerTimer>,
    now_ms: u64,
}

impl GameSession {
    pub fn new(content: Content, rules: GameRules, seed: u64) -> Self {
        let deck = Deck::new(content.card_ids());
        let ledger = PointLedger::new(rules.goal_score);
        Self {
            rules,
            content,
            rng: RngState::from_seed(seed),
            deck,
            ledger,
            turn: TurnState::new(),
            wheel: WheelSelector::default(),
            open_wheel: None,
            pending_reveal: None,
            timer: None,
            now_ms: 0,
        }
    }

    pub fn draw(&mut self, events: &mut EventBus) -> Result<DrawnCard, SessionError> {
        if self.pending_reveal.is_some() {
            return Err(SessionError::SpinInFlight);
        }
        if self.turn.phase == TurnPhase::AwaitingDecision {
            return Err(SessionError::DecisionPending);
        }
        let id = self.deck.draw(&mut self.rng).ok_or(SessionError::EmptyDeck)?;
        let category = id.category();
        let text = self
            .content
            .card_text(id)
            .unwrap_or_default()
            .to_string();
        let remaining = self.deck.remaining();
        self.turn.begin_decision();
        self.timer = Some(AnswerTimer::start(
            self.now_ms,
            self.rules.answer_seconds,
            self.rules.warning_seconds,
        ));
        events.push(Event::CardDrawn {
            id,
            category,
            remaining,
        });
        if remaining == 0 {
            events.push(Event::DeckExhausted);
        }
        Ok(DrawnCard {
            id,
            category,
            text,
            remaining,
        })
    }

    pub fn count(&mut self, events: &mut EventBus) -> Result<CountOutcome, SessionError> {
        if self.turn.phase != TurnPhase::AwaitingDecision {
            return Err(SessionError::NoPendingCard);
        }
        let player = self.turn.active;
        let reached_goal = self.ledger.award(player);
        let score = self.ledger.score(player);
        self.timer = None;
        events.push(Event::CardCounted {
            player,
            score,
            reached_goal,
        });
        let next_player = self.turn.resolve();
        events.push(Event::TurnPassed { to: next_player });
        Ok(CountOutcome {
            score,
            reached_goal,
            next_player,
        })
    }

    pub fn skip(&mut self, events: &mut EventBus) -> Result<PlayerId, SessionError> {
        if self.turn.phase != TurnPhase::AwaitingDecision {
            return Err(SessionError::NoPendingCard);
        }
        let player = self.turn.active;
        self.timer = None;
        events.push(Event::CardSkipped { player });
        let next = self.turn.resolve();
        events.push(Event::TurnPassed { to: next });
        Ok(next)
    }

    pub fn open_wheel(
        &mut self,
        level: WheelLevel,
        events: &mut EventBus,
    ) -> Result<&WheelTier, SessionError> {
        if self.pending_reveal.is_some() {
            return Err(SessionError::SpinInFlight);
        }
        if self.turn.phase == TurnPhase::AwaitingDecision {
            return Err(SessionError::DecisionPending);
        }
        if self.open_wheel.is_some() {
            return Err(SessionError::WheelAlreadyOpen);
        }
        if !self.ledger.can_afford(self.turn.active, level.cost()) {
            return Err(SessionError::NotEnoughPoints(level));
        }
        if self.content.tier(level).is_none() {
            return Err(SessionError::MissingTier(level));
        }
        self.open_wheel = Some(level);
        events.push(Event::WheelOpened { level });
        self.content
            .tier(level)
            .ok_or(SessionError::MissingTier(level))
    }

    pub fn close_wheel(&mut self, events: &mut EventBus) -> Result<(), SessionError> {
        if self.pending_reveal.is_some() {
            return Err(SessionError::SpinInFlight);
        }
        let level = self.open_wheel.take().ok_or(SessionError::WheelNotOpen)?;
        events.push(Event::WheelClosed { level });
        Ok(())
    }

    /// Chooses the outcome immediately and schedules the reveal for
    /// `spin_delay_ms` from now; points are spent at the reveal.
    pub fn spin(&mut self, events: &mut EventBus) -> Result<SpinOutcome, SessionError> {
        if self.pending_reveal.is_some() {
            return Err(SessionError::SpinInFlight);
        }
        let level = self.open_wheel.ok_or(SessionError::WheelNotOpen)?;
        if !self.ledger.can_afford(self.turn.active, level.cost()) {
            return Err(SessionError::NotEnoughPoints(level));
        }
        let len = self
            .content
            .tier(level)
            .map(|tier| tier.prompts.len())
            .ok_or(SessionError::MissingTier(level))?;
        let outcome = self
            .wheel
            .spin(len, self.rules.wheel_turns, &mut self.rng)
            .ok_or(SessionError::MissingTier(level))?;
        self.pending_reveal = Some(PendingReveal {
            level,
            index: outcome.index,
            due_at_ms: self.now_ms + self.rules.spin_delay_ms,
        });
        events.push(Event::SpinStarted {
            level,
            index: outcome.index,
            final_rotation: outcome.final_rotation,
        });
        Ok(outcome)
    }

    /// Moves the logical clock forward and fires anything that came due:
    /// timer warnings, timer expiry, and the pending spin reveal.
    pub fn advance(&mut self, elapsed_ms: u64, events: &mut EventBus) {
        self.now_ms += elapsed_ms;
        if let Some(timer) = self.timer.as_mut() {
            while let Some(signal) = timer.poll(self.now_ms) {
                match signal {
                    TimerSignal::Warning { seconds_left } => {
                        events.push(Event::TimerWarning { seconds_left });
                    }
                    TimerSignal::Expired => events.push(Event::TimerExpired),
                }
            }
        }
        let due = self
            .pending_reveal
            .as_ref()
            .is_some_and(|pending| self.now_ms >= pending.due_at_ms);
        if due {
            if let Some(pending) = self.pending_reveal.take() {
                self.reveal(pending, events);
            }
        }
    }

    fn reveal(&mut self, pending: PendingReveal, events: &mut EventBus) {
        let player = self.turn.active;
        self.ledger.spend(player, pending.level.cost());
        let prompt = self
            .content
            .tier(pending.level)
            .and_then(|tier| tier.prompts.get(pending.index))
            .cloned()
            .unwrap_or_default();
        let score = self.ledger.score(player);
        events.push(Event::SpinRevealed {
            level: pending.level,
            player,
            prompt,
            score,
        });
        if let Some(level) = self.open_wheel.take() {
            events.push(Event::WheelClosed { level });
        }
        let next = self.turn.resolve();
        events.push(Event::TurnPassed { to: next });
    }

    pub fn rename_player(
        &mut self,
        player: PlayerId,
        name: &str,
        events: &mut EventBus,
    ) -> Result<(), SessionError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SessionError::InvalidName);
        }
        let clipped: String = trimmed.chars().take(self.rules.name_limit).collect();
        self.ledger.set_name(player, clipped.clone());
        events.push(Event::PlayerRenamed {
            player,
            name: clipped,
        });
        Ok(())
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn active_player(&self) -> PlayerId {
        self.turn.active
    }

    pub fn phase(&self) -> TurnPhase {
        self.turn.phase
    }

    pub fn score(&self, player: PlayerId) -> u8 {
        self.ledger.score(player)
    }

    pub fn goal_score(&self) -> u8 {
        self.ledger.goal()
    }

    pub fn player_name(&self, player: PlayerId) -> &str {
        self.ledger.name(player)
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn cards_drawn(&self) -> &[CardId] {
        self.deck.drawn()
    }

    pub fn can_afford(&self, level: WheelLevel) -> bool {
        self.ledger.can_afford(self.turn.active, level.cost())
    }

    pub fn open_tier(&self) -> Option<WheelLevel> {
        self.open_wheel
    }

    pub fn is_spinning(&self) -> bool {
        self.pending_reveal.is_some()
    }

    pub fn rotation(&self) -> f64 {
        self.wheel.rotation()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn seconds_left(&self) -> Option<u32> {
        self.timer
            .as_ref()
            .filter(|timer| !timer.is_expired())
            .map(|timer| timer.seconds_left(self.now_ms))
    }
}
