use tabletalk_core::{
    CardId, Category, Content, Event, EventBus, GameRules, GameSession, PlayerId, PointLedger,
    PromptCard, SessionError, TurnPhase, WheelLevel, WheelTier,
};

fn sample_content() -> Content {
    let cards = (1..=30)
        .map(|id| PromptCard {
            id: CardId(id),
            text: format!("question {id}"),
        })
        .collect();
    let tiers = WheelLevel::ALL
        .iter()
        .map(|&level| WheelTier {
            level,
            prompts: (0..5)
                .map(|idx| format!("level {} prompt {idx}", level.number()))
                .collect(),
        })
        .collect();
    Content { cards, tiers }
}

fn new_session(seed: u64) -> GameSession {
    GameSession::new(sample_content(), GameRules::default(), seed)
}

fn resolve_decision(session: &mut GameSession, events: &mut EventBus) {
    if session.active_player() == PlayerId::One {
        session.count(events).expect("count");
    } else {
        session.skip(events).expect("skip");
    }
}

fn give_player_one_three_points(session: &mut GameSession, events: &mut EventBus) {
    while session.score(PlayerId::One) < 3 {
        session.draw(events).expect("draw");
        resolve_decision(session, events);
    }
    if session.active_player() == PlayerId::Two {
        session.draw(events).expect("draw");
        session.skip(events).expect("skip");
    }
}

macro_rules! category_case {
    ($name:ident, $id:expr, $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!(CardId($id).category(), $expected);
        }
    };
}

category_case!(category_first_perception, 1, Category::Perception);
category_case!(category_last_perception, 10, Category::Perception);
category_case!(category_first_connection, 11, Category::Connection);
category_case!(category_last_connection, 20, Category::Connection);
category_case!(category_first_reflection, 21, Category::Reflection);
category_case!(category_last_reflection, 30, Category::Reflection);

#[test]
fn deck_drains_every_card_exactly_once() {
    let mut session = new_session(42);
    let mut events = EventBus::default();
    let mut ids = Vec::new();
    for _ in 0..30 {
        let card = session.draw(&mut events).expect("draw");
        assert_eq!(card.category, card.id.category());
        ids.push(card.id);
        session.skip(&mut events).expect("skip");
    }
    assert_eq!(session.deck_remaining(), 0);
    ids.sort();
    ids.dedup();
    assert_eq!(ids, (1..=30).map(CardId).collect::<Vec<_>>());
    assert_eq!(session.draw(&mut events), Err(SessionError::EmptyDeck));
}

#[test]
fn last_draw_reports_deck_exhausted_once() {
    let mut session = new_session(7);
    let mut events = EventBus::default();
    for _ in 0..30 {
        session.draw(&mut events).expect("draw");
        session.skip(&mut events).expect("skip");
    }
    let exhausted = events
        .drain()
        .filter(|event| matches!(event, Event::DeckExhausted))
        .count();
    assert_eq!(exhausted, 1);
}

#[test]
fn award_clamps_at_goal_and_reports_crossing_once() {
    let mut ledger = PointLedger::new(3);
    assert!(!ledger.award(PlayerId::One));
    assert!(!ledger.award(PlayerId::One));
    assert!(ledger.award(PlayerId::One));
    assert_eq!(ledger.score(PlayerId::One), 3);
    assert!(!ledger.award(PlayerId::One));
    assert_eq!(ledger.score(PlayerId::One), 3);
}

#[test]
fn spend_clamps_at_zero() {
    let mut ledger = PointLedger::new(3);
    ledger.award(PlayerId::Two);
    ledger.spend(PlayerId::Two, 3);
    assert_eq!(ledger.score(PlayerId::Two), 0);
}

#[test]
fn can_afford_matches_score() {
    let mut ledger = PointLedger::new(3);
    assert!(!ledger.can_afford(PlayerId::One, 1));
    ledger.award(PlayerId::One);
    assert!(ledger.can_afford(PlayerId::One, 1));
    assert!(!ledger.can_afford(PlayerId::One, 2));
}

#[test]
fn counting_awards_the_active_player_and_flips_the_turn() {
    let mut session = new_session(1);
    let mut events = EventBus::default();
    let card = session.draw(&mut events).expect("draw");
    assert_eq!(card.remaining, 29);
    assert_eq!(session.phase(), TurnPhase::AwaitingDecision);

    let outcome = session.count(&mut events).expect("count");
    assert_eq!(outcome.score, 1);
    assert!(!outcome.reached_goal);
    assert_eq!(outcome.next_player, PlayerId::Two);
    assert_eq!(session.score(PlayerId::One), 1);
    assert_eq!(session.active_player(), PlayerId::Two);
    assert_eq!(session.phase(), TurnPhase::AwaitingDraw);
}

#[test]
fn skipping_flips_the_turn_without_scoring() {
    let mut session = new_session(2);
    let mut events = EventBus::default();
    session.draw(&mut events).expect("draw");
    let next = session.skip(&mut events).expect("skip");
    assert_eq!(next, PlayerId::Two);
    assert_eq!(session.score(PlayerId::One), 0);
    assert_eq!(session.phase(), TurnPhase::AwaitingDraw);
}

#[test]
fn count_without_a_drawn_card_changes_nothing() {
    let mut session = new_session(5);
    let mut events = EventBus::default();
    assert_eq!(session.count(&mut events), Err(SessionError::NoPendingCard));
    assert_eq!(session.skip(&mut events), Err(SessionError::NoPendingCard));
    assert_eq!(session.score(PlayerId::One), 0);
    assert_eq!(session.active_player(), PlayerId::One);
    assert_eq!(session.deck_remaining(), 30);
    assert!(events.drain().next().is_none());
}

#[test]
fn drawing_twice_without_deciding_is_rejected() {
    let mut session = new_session(5);
    let mut events = EventBus::default();
    session.draw(&mut events).expect("draw");
    let remaining = session.deck_remaining();
    assert_eq!(session.draw(&mut events), Err(SessionError::DecisionPending));
    assert_eq!(session.deck_remaining(), remaining);
}

#[test]
fn wheel_needs_points_to_open() {
    let mut session = new_session(5);
    let mut events = EventBus::default();
    let err = session.open_wheel(WheelLevel::L1, &mut events).unwrap_err();
    assert_eq!(err, SessionError::NotEnoughPoints(WheelLevel::L1));
    assert!(session.open_tier().is_none());
    assert!(events.drain().next().is_none());
}

#[test]
fn wheel_cannot_open_during_a_card_decision() {
    let mut session = new_session(9);
    let mut events = EventBus::default();
    give_player_one_three_points(&mut session, &mut events);
    session.draw(&mut events).expect("draw");
    let err = session.open_wheel(WheelLevel::L1, &mut events).unwrap_err();
    assert_eq!(err, SessionError::DecisionPending);
}

#[test]
fn only_one_wheel_opens_at_a_time() {
    let mut session = new_session(9);
    let mut events = EventBus::default();
    give_player_one_three_points(&mut session, &mut events);
    session.open_wheel(WheelLevel::L1, &mut events).expect("open");
    let err = session.open_wheel(WheelLevel::L2, &mut events).unwrap_err();
    assert_eq!(err, SessionError::WheelAlreadyOpen);
}

#[test]
fn full_wheel_spin_spends_points_and_flips_after_reveal() {
    let mut session = new_session(9);
    let mut events = EventBus::default();
    give_player_one_three_points(&mut session, &mut events);
    assert_eq!(session.active_player(), PlayerId::One);
    assert_eq!(session.score(PlayerId::One), 3);

    let tier = session
        .open_wheel(WheelLevel::L3, &mut events)
        .expect("open");
    let tier_len = tier.prompts.len();
    assert_eq!(tier_len, 5);

    let outcome = session.spin(&mut events).expect("spin");
    assert!(outcome.index < tier_len);
    assert!(session.is_spinning());

    session.advance(2699, &mut events);
    assert!(session.is_spinning());
    assert_eq!(session.score(PlayerId::One), 3);
    assert_eq!(session.active_player(), PlayerId::One);

    session.advance(1, &mut events);
    assert!(!session.is_spinning());
    assert_eq!(session.score(PlayerId::One), 0);
    assert_eq!(session.active_player(), PlayerId::Two);
    assert!(session.open_tier().is_none());

    let revealed = events
        .drain()
        .find_map(|event| match event {
            Event::SpinRevealed {
                level,
                player,
                prompt,
                score,
            } => Some((level, player, prompt, score)),
            _ => None,
        })
        .expect("reveal event");
    assert_eq!(revealed.0, WheelLevel::L3);
    assert_eq!(revealed.1, PlayerId::One);
    assert_eq!(revealed.2, format!("level 3 prompt {}", outcome.index));
    assert_eq!(revealed.3, 0);
}

#[test]
fn overlapping_actions_are_rejected_while_a_spin_is_in_flight() {
    let mut session = new_session(13);
    let mut events = EventBus::default();
    give_player_one_three_points(&mut session, &mut events);
    session.open_wheel(WheelLevel::L1, &mut events).expect("open");
    session.spin(&mut events).expect("spin");

    assert_eq!(session.spin(&mut events), Err(SessionError::SpinInFlight));
    assert_eq!(session.draw(&mut events), Err(SessionError::SpinInFlight));
    assert_eq!(
        session.close_wheel(&mut events),
        Err(SessionError::SpinInFlight)
    );
    assert_eq!(
        session.open_wheel(WheelLevel::L2, &mut events).unwrap_err(),
        SessionError::SpinInFlight
    );
}

#[test]
fn spin_spends_only_the_tier_cost() {
    let mut session = new_session(17);
    let mut events = EventBus::default();
    give_player_one_three_points(&mut session, &mut events);
    session.open_wheel(WheelLevel::L1, &mut events).expect("open");
    session.spin(&mut events).expect("spin");
    session.advance(2700, &mut events);
    assert_eq!(session.score(PlayerId::One), 2);
}

#[test]
fn closing_a_wheel_without_spinning_costs_nothing() {
    let mut session = new_session(17);
    let mut events = EventBus::default();
    give_player_one_three_points(&mut session, &mut events);
    session.open_wheel(WheelLevel::L2, &mut events).expect("open");
    session.close_wheel(&mut events).expect("close");
    assert_eq!(session.score(PlayerId::One), 3);
    assert_eq!(session.active_player(), PlayerId::One);
    assert!(session.open_tier().is_none());
}

#[test]
fn same_seed_reproduces_draws_and_spins() {
    let mut first = new_session(0xFEED);
    let mut second = new_session(0xFEED);
    let mut events = EventBus::default();

    for _ in 0..6 {
        let a = first.draw(&mut events).expect("draw");
        let b = second.draw(&mut events).expect("draw");
        assert_eq!(a.id, b.id);
        resolve_decision(&mut first, &mut events);
        resolve_decision(&mut second, &mut events);
    }

    give_player_one_three_points(&mut first, &mut events);
    give_player_one_three_points(&mut second, &mut events);
    first.open_wheel(WheelLevel::L1, &mut events).expect("open");
    second.open_wheel(WheelLevel::L1, &mut events).expect("open");
    let spin_a = first.spin(&mut events).expect("spin");
    let spin_b = second.spin(&mut events).expect("spin");
    assert_eq!(spin_a.index, spin_b.index);
    assert_eq!(spin_a.final_rotation, spin_b.final_rotation);
}

#[test]
fn rename_trims_and_clamps_to_sixteen_chars() {
    let mut session = new_session(3);
    let mut events = EventBus::default();
    session
        .rename_player(PlayerId::One, "  Alexandra Hamilton  ", &mut events)
        .expect("rename");
    assert_eq!(session.player_name(PlayerId::One), "Alexandra Hamilt");
    assert_eq!(session.player_name(PlayerId::One).chars().count(), 16);
}

#[test]
fn empty_rename_is_rejected_and_keeps_the_old_name() {
    let mut session = new_session(3);
    let mut events = EventBus::default();
    assert_eq!(
        session.rename_player(PlayerId::Two, "   ", &mut events),
        Err(SessionError::InvalidName)
    );
    assert_eq!(session.player_name(PlayerId::Two), "Player 2");
    assert!(events.drain().next().is_none());
}

#[test]
fn answer_timer_warns_once_and_expires_once() {
    let mut session = new_session(21);
    let mut events = EventBus::default();
    session.draw(&mut events).expect("draw");
    assert_eq!(session.seconds_left(), Some(60));
    for _ in events.drain() {}

    session.advance(49_999, &mut events);
    assert!(events.drain().next().is_none());

    session.advance(1, &mut events);
    let drained: Vec<Event> = events.drain().collect();
    assert_eq!(drained, vec![Event::TimerWarning { seconds_left: 10 }]);

    session.advance(9_999, &mut events);
    assert!(events.drain().next().is_none());

    session.advance(1, &mut events);
    let drained: Vec<Event> = events.drain().collect();
    assert_eq!(drained, vec![Event::TimerExpired]);

    session.advance(60_000, &mut events);
    assert!(events.drain().next().is_none());
}

#[test]
fn timer_stops_when_the_card_decision_resolves() {
    let mut session = new_session(23);
    let mut events = EventBus::default();
    session.draw(&mut events).expect("draw");
    session.count(&mut events).expect("count");
    for _ in events.drain() {}

    session.advance(120_000, &mut events);
    assert!(events.drain().next().is_none());
    assert_eq!(session.seconds_left(), None);
}
