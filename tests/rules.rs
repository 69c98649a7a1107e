use cardtable::Colour::{Black, Blue, Green, Red, Yellow};
use cardtable::uno::{self, Face, Uno};
use cardtable::{
    Action, Card, CardId, Deck, Direction, ExhaustionPolicy, GameBuilder, GameError,
    GameStateView, IllegalPlay, OpeningPolicy, OtherAction, Phase, PlayerId, RuleSet, UnoGame,
};

type Spec = (Face, cardtable::Colour);

/// Deck dealt round-robin into `hands`, then `opening`, then `draws` top-down.
fn stacked_deck(hands: &[Vec<Spec>], opening: Spec, draws: &[Spec]) -> Deck<Uno> {
    let hand_size = hands[0].len();
    let mut order = Vec::new();
    for round in 0..hand_size {
        for hand in hands {
            order.push(hand[round]);
        }
    }
    order.push(opening);
    order.extend_from_slice(draws);
    order.reverse();
    Deck::from_specs(order).expect("deck fits")
}

fn table_with(
    mut rules: RuleSet<Uno>,
    hands: &[Vec<Spec>],
    opening: Spec,
    draws: &[Spec],
) -> Result<(UnoGame, Vec<PlayerId>), GameError> {
    rules.hand_size = hands[0].len();
    let mut game = GameBuilder::new(rules)?
        .with_deck(stacked_deck(hands, opening, draws))
        .without_shuffle()
        .with_first_seat(0)
        .build()?;
    let ids = (0..hands.len())
        .map(|seat| game.add_player(format!("p{seat}")))
        .collect::<Result<Vec<_>, _>>()?;
    game.start_game()?;
    Ok((game, ids))
}

fn table(
    hands: &[Vec<Spec>],
    opening: Spec,
    draws: &[Spec],
) -> Result<(UnoGame, Vec<PlayerId>), GameError> {
    let mut rules = uno::rules();
    rules.opening = OpeningPolicy::IgnoreEffects;
    table_with(rules, hands, opening, draws)
}

fn card(game: &UnoGame, player: PlayerId, face: Face, colour: cardtable::Colour) -> CardId {
    game.hand(player)
        .expect("player is seated")
        .iter()
        .find(|card| card.face() == face && card.suit() == colour)
        .map(Card::id)
        .expect("card is in hand")
}

fn snapshot(game: &UnoGame, ids: &[PlayerId]) -> Vec<GameStateView<Uno>> {
    ids.iter()
        .map(|id| game.state_view(*id).expect("player is seated"))
        .collect()
}

fn three_numbers(colour: cardtable::Colour) -> Vec<Spec> {
    vec![(Face::Six, colour), (Face::Seven, colour), (Face::Eight, colour)]
}

#[test]
fn initial_setup_two_players() -> Result<(), GameError> {
    let mut game = uno::builder()?.with_seed(42).build()?;
    assert_eq!(game.draw_remaining(), 108);
    let alice = game.add_player("alice")?;
    let bob = game.add_player("bob")?;
    game.start_game()?;

    assert_eq!(game.phase(), Phase::InProgress);
    assert_eq!(game.hand(alice)?.owner(), alice);
    assert_eq!(game.hand(bob)?.owner(), bob);
    assert_eq!(game.hand(alice)?.len(), 7);
    assert_eq!(game.hand(bob)?.len(), 7);
    assert_eq!(game.discard_len(), 1);
    assert_eq!(game.draw_remaining(), 108 - 1 - 14);
    assert!(game.current_player().is_some_and(|id| id == alice || id == bob));
    assert_eq!(game.direction(), Direction::Forward);
    // Action cards are redrawn, so the opening card is a plain number.
    let top = game.discard_top().expect("opening card");
    assert!(top.face().value().is_some());
    Ok(())
}

#[test]
fn same_seed_deals_same_hands() -> Result<(), GameError> {
    let deal = |seed| -> Result<Vec<(Face, cardtable::Colour)>, GameError> {
        let mut game = uno::builder()?.with_seed(seed).build()?;
        let first = game.add_player("a")?;
        game.add_player("b")?;
        game.start_game()?;
        Ok(game.hand(first)?.iter().map(|c| (c.face(), c.suit())).collect())
    };
    assert_eq!(deal(9)?, deal(9)?);
    Ok(())
}

#[test]
fn add_player_rejects_full_table() -> Result<(), GameError> {
    let mut game = uno::builder()?.build()?;
    for index in 0..uno::MAX_PLAYERS {
        game.add_player(format!("player {index}"))?;
    }
    let err = game.add_player("late").unwrap_err();
    assert!(matches!(err, GameError::TooManyPlayers { max: 10 }));
    assert_eq!(game.players().len(), uno::MAX_PLAYERS);
    Ok(())
}

#[test]
fn start_game_needs_minimum_players() -> Result<(), GameError> {
    let mut game = uno::builder()?.build()?;
    game.add_player("solo")?;
    let err = game.start_game().unwrap_err();
    assert!(matches!(err, GameError::NotEnoughPlayers { min: 2, joined: 1 }));
    assert_eq!(game.phase(), Phase::Forming);
    assert_eq!(game.draw_remaining(), 108);
    assert!(game.current_player().is_none());
    Ok(())
}

#[test]
fn lifecycle_calls_out_of_order_are_rejected() -> Result<(), GameError> {
    let mut game = uno::builder()?.build()?;
    let alice = game.add_player("alice")?;
    game.add_player("bob")?;
    assert!(matches!(game.next_turn(), Err(GameError::NotStarted)));
    assert!(matches!(
        game.other_actions(alice, OtherAction::Draw),
        Err(GameError::NotStarted)
    ));
    game.start_game()?;
    assert!(matches!(game.start_game(), Err(GameError::AlreadyStarted)));
    assert!(matches!(game.add_player("carol"), Err(GameError::AlreadyStarted)));
    assert_eq!(game.players().len(), 2);
    Ok(())
}

#[test]
fn unknown_player_is_rejected() -> Result<(), GameError> {
    let mut game = uno::builder()?.build()?;
    game.add_player("alice")?;
    game.add_player("bob")?;
    game.start_game()?;
    let mut other = uno::builder()?.build()?;
    let stranger = other.add_player("stranger")?;
    assert!(matches!(
        game.other_actions(stranger, OtherAction::Draw),
        Err(GameError::UnknownPlayer(id)) if id == stranger
    ));
    Ok(())
}

#[test]
fn every_card_is_legal_on_an_empty_discard_pile() -> Result<(), GameError> {
    let game = uno::builder()?.build()?;
    assert!(game.discard_top().is_none());
    assert!(game.draw_pile().iter().all(|card| card.legal_to_play(&game)));
    Ok(())
}

#[test]
fn matching_colour_or_face_is_legal() -> Result<(), GameError> {
    let hands = vec![
        vec![(Face::One, Blue), (Face::Nine, Green), (Face::Two, Red)],
        three_numbers(Yellow),
    ];
    let (mut game, ids) = table(&hands, (Face::Nine, Red), &[(Face::One, Green)])?;
    let nine = card(&game, ids[0], Face::Nine, Green);
    let two = card(&game, ids[0], Face::Two, Red);
    let one = card(&game, ids[0], Face::One, Blue);
    let hand = game.hand(ids[0])?;
    assert!(hand.get(nine).is_some_and(|c| c.legal_to_play(&game)));
    assert!(hand.get(two).is_some_and(|c| c.legal_to_play(&game)));
    assert!(!hand.get(one).is_some_and(|c| c.legal_to_play(&game)));

    game.play_turn(ids[0], nine, None)?;
    assert_eq!(game.discard_top().map(Card::id), Some(nine));
    assert_eq!(game.current_player(), Some(ids[1]));
    assert_eq!(game.hand(ids[0])?.len(), 2);
    Ok(())
}

#[test]
fn playing_a_duplicate_removes_that_exact_card() -> Result<(), GameError> {
    let (mut game, ids) = table(
        &[
            vec![(Face::Five, Red), (Face::Five, Red), (Face::Nine, Blue)],
            three_numbers(Green),
        ],
        (Face::Three, Red),
        &[],
    )?;
    let fives: Vec<CardId> = game
        .hand(ids[0])?
        .iter()
        .filter(|c| c.face() == Face::Five && c.suit() == Red)
        .map(Card::id)
        .collect();
    assert_eq!(fives.len(), 2);

    game.play_turn(ids[0], fives[1], None)?;
    let hand = game.hand(ids[0])?;
    assert_eq!(hand.len(), 2);
    assert!(hand.get(fives[0]).is_some());
    assert!(hand.get(fives[1]).is_none());
    assert_eq!(game.discard_top().map(Card::id), Some(fives[1]));
    Ok(())
}

#[test]
fn illegal_play_leaves_state_untouched() -> Result<(), GameError> {
    let hands = vec![
        vec![(Face::One, Blue), (Face::Two, Blue), (Face::Three, Blue)],
        three_numbers(Red),
    ];
    let (mut game, ids) = table(&hands, (Face::Nine, Red), &[(Face::One, Green)])?;
    let before = snapshot(&game, &ids);

    let blue = card(&game, ids[0], Face::One, Blue);
    let err = game.play_turn(ids[0], blue, None).unwrap_err();
    assert!(matches!(err, GameError::IllegalPlay(IllegalPlay::DoesNotMatch)));

    let red = card(&game, ids[1], Face::Six, Red);
    let err = game.play_turn(ids[1], red, None).unwrap_err();
    assert!(matches!(err, GameError::IllegalPlay(IllegalPlay::NotYourTurn)));

    let err = game.play_turn(ids[0], red, None).unwrap_err();
    assert!(matches!(err, GameError::IllegalPlay(IllegalPlay::CardNotInHand)));

    assert_eq!(snapshot(&game, &ids), before);
    Ok(())
}

#[test]
fn skip_passes_over_exactly_one_player() -> Result<(), GameError> {
    let hands = vec![
        vec![(Face::Skip, Red), (Face::One, Blue), (Face::Two, Blue)],
        three_numbers(Green),
        three_numbers(Yellow),
    ];
    let (mut game, ids) = table(&hands, (Face::Nine, Red), &[(Face::One, Green)])?;
    let skip = card(&game, ids[0], Face::Skip, Red);
    game.play_turn(ids[0], skip, None)?;
    assert_eq!(game.current_seat(), Some(2));
    assert_eq!(game.hand(ids[1])?.len(), 3);
    Ok(())
}

#[test]
fn two_reverses_restore_direction() -> Result<(), GameError> {
    let hands = vec![
        vec![(Face::Reverse, Red), (Face::One, Blue), (Face::Two, Blue)],
        three_numbers(Green),
        vec![(Face::Reverse, Green), (Face::Three, Yellow), (Face::Four, Yellow)],
    ];
    let (mut game, ids) = table(&hands, (Face::Nine, Red), &[(Face::One, Green)])?;
    let first = card(&game, ids[0], Face::Reverse, Red);
    game.play_turn(ids[0], first, None)?;
    assert_eq!(game.direction(), Direction::Backward);
    assert_eq!(game.current_seat(), Some(2));

    let second = card(&game, ids[2], Face::Reverse, Green);
    game.play_turn(ids[2], second, None)?;
    assert_eq!(game.direction(), Direction::Forward);
    assert_eq!(game.current_seat(), Some(0));
    Ok(())
}

#[test]
fn draw_two_feeds_next_player_and_skips_them() -> Result<(), GameError> {
    let hands = vec![
        vec![(Face::DrawTwo, Red), (Face::One, Blue), (Face::Two, Blue)],
        three_numbers(Green),
        three_numbers(Yellow),
    ];
    let draws = [(Face::One, Green), (Face::Two, Green), (Face::Three, Green)];
    let (mut game, ids) = table(&hands, (Face::Nine, Red), &draws)?;
    let draw_two = card(&game, ids[0], Face::DrawTwo, Red);
    game.play_turn(ids[0], draw_two, None)?;

    let victim = game.hand(ids[1])?;
    assert_eq!(victim.len(), 5);
    assert!(victim.iter().any(|c| c.face() == Face::One && c.suit() == Green));
    assert!(victim.iter().any(|c| c.face() == Face::Two && c.suit() == Green));
    assert_eq!(game.draw_remaining(), 1);
    assert_eq!(game.current_seat(), Some(2));
    Ok(())
}

#[test]
fn wild_requires_a_declarable_colour() -> Result<(), GameError> {
    let hands = vec![
        vec![(Face::Wild, Black), (Face::One, Red), (Face::Two, Red)],
        vec![(Face::Three, Red), (Face::Four, Blue), (Face::Five, Green)],
        three_numbers(Yellow),
    ];
    let (mut game, ids) = table(&hands, (Face::Nine, Red), &[(Face::One, Green)])?;
    let wild = card(&game, ids[0], Face::Wild, Black);
    let one = card(&game, ids[0], Face::One, Red);

    let err = game.play_turn(ids[0], wild, None).unwrap_err();
    assert!(matches!(err, GameError::IllegalPlay(IllegalPlay::MissingDeclaration)));
    let err = game.play_turn(ids[0], wild, Some(Black)).unwrap_err();
    assert!(matches!(err, GameError::IllegalPlay(IllegalPlay::UndeclarableSuit)));
    let err = game.play_turn(ids[0], one, Some(Blue)).unwrap_err();
    assert!(matches!(err, GameError::IllegalPlay(IllegalPlay::UnexpectedDeclaration)));

    game.play_turn(ids[0], wild, Some(Blue))?;
    assert_eq!(game.declared_suit(), Some(Blue));
    assert_eq!(game.current_seat(), Some(1));

    let red = card(&game, ids[1], Face::Three, Red);
    let err = game.play_turn(ids[1], red, None).unwrap_err();
    assert!(matches!(err, GameError::IllegalPlay(IllegalPlay::DoesNotMatch)));
    let blue = card(&game, ids[1], Face::Four, Blue);
    game.play_turn(ids[1], blue, None)?;
    assert_eq!(game.declared_suit(), None);
    Ok(())
}

#[test]
fn wild_draw_four_combines_wild_and_forced_draw() -> Result<(), GameError> {
    let hands = vec![
        vec![(Face::WildDrawFour, Black), (Face::One, Red), (Face::Two, Red)],
        vec![(Face::Three, Yellow), (Face::Four, Yellow), (Face::Five, Yellow)],
        vec![(Face::Wild, Black), (Face::Five, Green), (Face::Six, Yellow)],
    ];
    let draws = [
        (Face::One, Blue),
        (Face::Two, Blue),
        (Face::Three, Blue),
        (Face::Four, Blue),
        (Face::Five, Blue),
    ];
    let (mut game, ids) = table(&hands, (Face::Nine, Blue), &draws)?;
    let draw_four = card(&game, ids[0], Face::WildDrawFour, Black);
    game.play_turn(ids[0], draw_four, Some(Green))?;
    assert_eq!(game.hand(ids[1])?.len(), 7);
    assert_eq!(game.draw_remaining(), 1);
    assert_eq!(game.current_seat(), Some(2));

    // No wild over a forced-draw wild.
    let wild = card(&game, ids[2], Face::Wild, Black);
    let err = game.play_turn(ids[2], wild, Some(Yellow)).unwrap_err();
    assert!(matches!(err, GameError::IllegalPlay(IllegalPlay::DoesNotMatch)));
    let actions = game.legal_actions(ids[2])?;
    assert!(actions.iter().all(|action| action.card() != Some(wild)));

    let green = card(&game, ids[2], Face::Five, Green);
    game.play_turn(ids[2], green, None)?;
    assert_eq!(game.current_seat(), Some(0));
    Ok(())
}

#[test]
fn wild_cards_offer_one_action_per_colour() -> Result<(), GameError> {
    let hands = vec![
        vec![(Face::Wild, Black), (Face::One, Blue), (Face::Two, Blue)],
        three_numbers(Green),
    ];
    let (game, ids) = table(&hands, (Face::Nine, Red), &[(Face::One, Green)])?;
    let wild = card(&game, ids[0], Face::Wild, Black);
    let actions = game.legal_actions(ids[0])?;
    let wild_plays = actions
        .iter()
        .filter(|action| action.card() == Some(wild))
        .count();
    assert_eq!(wild_plays, 4);
    assert!(actions.contains(&Action::Draw));
    assert!(!actions.contains(&Action::Pass));
    Ok(())
}

#[test]
fn drawing_a_playable_card_allows_play_or_pass() -> Result<(), GameError> {
    let hands = vec![
        vec![(Face::One, Blue), (Face::Two, Blue)],
        vec![(Face::Three, Green), (Face::Four, Green)],
    ];
    let draws = [(Face::Seven, Red), (Face::Eight, Yellow), (Face::Five, Blue)];
    let (mut game, ids) = table(&hands, (Face::Nine, Red), &draws)?;

    game.other_actions(ids[0], OtherAction::Draw)?;
    let drawn = card(&game, ids[0], Face::Seven, Red);
    assert_eq!(game.pending_draw(), Some(drawn));
    assert_eq!(game.current_seat(), Some(0));
    assert_eq!(
        game.legal_actions(ids[0])?,
        vec![
            Action::Play {
                card: drawn,
                declare: None
            },
            Action::Pass
        ]
    );

    let other = card(&game, ids[0], Face::One, Blue);
    let err = game.play_turn(ids[0], other, None).unwrap_err();
    assert!(matches!(err, GameError::IllegalPlay(IllegalPlay::MustPlayDrawnCard)));
    let err = game.other_actions(ids[0], OtherAction::Draw).unwrap_err();
    assert!(matches!(err, GameError::IllegalPlay(IllegalPlay::AlreadyDrew)));

    game.other_actions(ids[0], OtherAction::Pass)?;
    assert_eq!(game.pending_draw(), None);
    assert_eq!(game.current_seat(), Some(1));
    assert_eq!(game.hand(ids[0])?.len(), 3);

    // Yellow 8 does not fit a red 9, so the turn moves on straight away.
    game.other_actions(ids[1], OtherAction::Draw)?;
    assert_eq!(game.pending_draw(), None);
    assert_eq!(game.current_seat(), Some(0));
    assert_eq!(game.hand(ids[1])?.len(), 3);
    Ok(())
}

#[test]
fn drawn_card_can_be_played_immediately() -> Result<(), GameError> {
    let hands = vec![
        vec![(Face::One, Blue), (Face::Two, Blue)],
        vec![(Face::Three, Green), (Face::Four, Green)],
    ];
    let (mut game, ids) = table(&hands, (Face::Nine, Red), &[(Face::Seven, Red)])?;
    game.other_actions(ids[0], OtherAction::Draw)?;
    let drawn = card(&game, ids[0], Face::Seven, Red);
    game.play_turn(ids[0], drawn, None)?;
    assert_eq!(game.discard_top().map(Card::id), Some(drawn));
    assert_eq!(game.current_seat(), Some(1));
    assert_eq!(game.pending_draw(), None);
    Ok(())
}

#[test]
fn keep_policy_always_ends_the_turn() -> Result<(), GameError> {
    let hands = vec![
        vec![(Face::One, Blue), (Face::Two, Blue)],
        vec![(Face::Three, Green), (Face::Four, Green)],
    ];
    let mut rules = uno::rules();
    rules.opening = OpeningPolicy::IgnoreEffects;
    rules.drawn_card = cardtable::DrawnCardPolicy::Keep;
    let (mut game, ids) = table_with(rules, &hands, (Face::Nine, Red), &[(Face::Seven, Red)])?;
    game.other_actions(ids[0], OtherAction::Draw)?;
    assert_eq!(game.pending_draw(), None);
    assert_eq!(game.current_seat(), Some(1));
    Ok(())
}

#[test]
fn pass_without_drawing_is_rejected() -> Result<(), GameError> {
    let hands = vec![three_numbers(Red), three_numbers(Green)];
    let (mut game, ids) = table(&hands, (Face::Nine, Red), &[(Face::One, Green)])?;
    let err = game.other_actions(ids[0], OtherAction::Pass).unwrap_err();
    assert!(matches!(err, GameError::IllegalPlay(IllegalPlay::NothingToPass)));
    assert_eq!(game.current_seat(), Some(0));
    Ok(())
}

#[test]
fn emptying_the_hand_wins() -> Result<(), GameError> {
    let hands = vec![vec![(Face::Five, Red)], vec![(Face::Six, Blue)]];
    let (mut game, ids) = table(&hands, (Face::Nine, Red), &[(Face::One, Green)])?;
    let last = card(&game, ids[0], Face::Five, Red);
    game.play_turn(ids[0], last, None)?;
    assert!(game.is_finished());
    assert_eq!(game.winner(), Some(ids[0]));
    assert_eq!(game.phase(), Phase::Finished { winner: ids[0] });
    assert!(game.legal_actions(ids[1])?.is_empty());

    let blue = card(&game, ids[1], Face::Six, Blue);
    assert!(matches!(
        game.play_turn(ids[1], blue, None),
        Err(GameError::GameOver)
    ));
    assert!(matches!(game.next_turn(), Err(GameError::GameOver)));
    Ok(())
}

fn exhaustion_table(
    policy: ExhaustionPolicy,
) -> Result<(UnoGame, Vec<PlayerId>), GameError> {
    let hands = vec![
        vec![(Face::Five, Red), (Face::Nine, Red)],
        vec![(Face::DrawTwo, Red), (Face::One, Blue)],
    ];
    let mut rules = uno::rules();
    rules.opening = OpeningPolicy::IgnoreEffects;
    rules.exhaustion = policy;
    let (mut game, ids) = table_with(rules, &hands, (Face::Three, Red), &[])?;
    let five = card(&game, ids[0], Face::Five, Red);
    game.play_turn(ids[0], five, None)?;
    assert_eq!(game.draw_remaining(), 0);
    assert_eq!(game.discard_len(), 2);
    Ok((game, ids))
}

#[test]
fn exhausted_draw_pile_reshuffles_discards() -> Result<(), GameError> {
    let (mut game, ids) = exhaustion_table(ExhaustionPolicy::Reshuffle)?;
    let draw_two = card(&game, ids[1], Face::DrawTwo, Red);
    game.play_turn(ids[1], draw_two, None)?;

    assert_eq!(game.discard_len(), 1);
    assert_eq!(game.discard_top().map(Card::id), Some(draw_two));
    assert_eq!(game.draw_remaining(), 0);
    let victim = game.hand(ids[0])?;
    assert_eq!(victim.len(), 3);
    assert!(victim.iter().any(|c| c.face() == Face::Three && c.suit() == Red));
    assert_eq!(game.current_seat(), Some(1));
    Ok(())
}

#[test]
fn exhausted_draw_pile_fails_without_reshuffle() -> Result<(), GameError> {
    let (mut game, ids) = exhaustion_table(ExhaustionPolicy::Fail)?;
    let before = snapshot(&game, &ids);
    let draw_two = card(&game, ids[1], Face::DrawTwo, Red);
    let err = game.play_turn(ids[1], draw_two, None).unwrap_err();
    assert!(matches!(
        err,
        GameError::EmptyStack {
            requested: 2,
            available: 0
        }
    ));
    assert_eq!(snapshot(&game, &ids), before);

    // Drawing a single card runs into the same empty pile.
    let err = game.other_actions(ids[1], OtherAction::Draw).unwrap_err();
    assert!(matches!(err, GameError::EmptyStack { .. }));

    // The uncovered draw two is not on offer, so the stuck player may pass.
    assert_eq!(game.legal_actions(ids[1])?, vec![Action::Pass]);
    game.other_actions(ids[1], OtherAction::Pass)?;
    assert_eq!(game.current_seat(), Some(0));
    Ok(())
}

#[test]
fn uncoverable_forced_draw_is_not_offered() -> Result<(), GameError> {
    let hands = vec![vec![(Face::DrawTwo, Red)], vec![(Face::Five, Red)]];
    let mut rules = uno::rules();
    rules.opening = OpeningPolicy::IgnoreEffects;
    rules.exhaustion = ExhaustionPolicy::Reshuffle;
    let (mut game, ids) = table_with(rules, &hands, (Face::Three, Red), &[])?;
    assert_eq!(game.draw_remaining(), 0);

    // Only the opening card could be recycled, one short of what the draw two hands out.
    let draw_two = card(&game, ids[0], Face::DrawTwo, Red);
    let err = game.play_turn(ids[0], draw_two, None).unwrap_err();
    assert!(matches!(
        err,
        GameError::EmptyStack {
            requested: 2,
            available: 1
        }
    ));

    let actions = game.legal_actions(ids[0])?;
    assert_eq!(actions, vec![Action::Pass]);
    for action in actions {
        game.apply_action(ids[0], action)?;
    }
    let five = card(&game, ids[1], Face::Five, Red);
    assert_eq!(
        game.legal_actions(ids[1])?,
        vec![Action::Play {
            card: five,
            declare: None
        }]
    );
    game.play_turn(ids[1], five, None)?;
    assert_eq!(game.winner(), Some(ids[1]));
    Ok(())
}

fn opening_table(opening: Spec, draws: &[Spec]) -> Result<(UnoGame, Vec<PlayerId>), GameError> {
    let hands = vec![
        vec![(Face::One, Blue)],
        vec![(Face::Two, Blue)],
        vec![(Face::Three, Blue)],
    ];
    let mut rules = uno::rules();
    rules.opening = OpeningPolicy::ApplyEffects;
    table_with(rules, &hands, opening, draws)
}

#[test]
fn opening_skip_skips_the_first_player() -> Result<(), GameError> {
    let (game, _) = opening_table((Face::Skip, Red), &[(Face::Four, Red), (Face::Five, Red)])?;
    assert_eq!(game.discard_top().map(Card::face), Some(Face::Skip));
    assert_eq!(game.current_seat(), Some(1));
    Ok(())
}

#[test]
fn opening_reverse_flips_direction() -> Result<(), GameError> {
    let (game, _) = opening_table((Face::Reverse, Red), &[(Face::Four, Red), (Face::Five, Red)])?;
    assert_eq!(game.direction(), Direction::Backward);
    assert_eq!(game.current_seat(), Some(0));
    Ok(())
}

#[test]
fn opening_draw_two_hits_the_first_player() -> Result<(), GameError> {
    let draws = [(Face::Four, Red), (Face::Five, Red), (Face::Six, Red)];
    let (game, ids) = opening_table((Face::DrawTwo, Red), &draws)?;
    assert_eq!(game.hand(ids[0])?.len(), 3);
    assert_eq!(game.draw_remaining(), 1);
    assert_eq!(game.current_seat(), Some(1));
    Ok(())
}

#[test]
fn opening_wild_draw_four_is_redrawn() -> Result<(), GameError> {
    let draws = [
        (Face::Four, Red),
        (Face::Five, Red),
        (Face::Six, Red),
        (Face::Seven, Red),
        (Face::Eight, Red),
    ];
    let (game, ids) = opening_table((Face::WildDrawFour, Black), &draws)?;
    assert_eq!(game.discard_top().map(Card::face), Some(Face::Four));
    assert_eq!(game.draw_remaining(), 5);
    assert_eq!(
        game.draw_pile().iter().next().map(Card::face),
        Some(Face::WildDrawFour)
    );
    assert_eq!(game.hand(ids[0])?.len(), 1);
    assert_eq!(game.current_seat(), Some(0));
    Ok(())
}

#[test]
fn redraw_policy_buries_action_openings() -> Result<(), GameError> {
    let hands = vec![vec![(Face::One, Blue)], vec![(Face::Two, Blue)]];
    let (game, _) = table_with(
        uno::rules(),
        &hands,
        (Face::Skip, Red),
        &[(Face::Four, Red), (Face::Five, Red)],
    )?;
    assert_eq!(game.discard_top().map(Card::face), Some(Face::Four));
    assert_eq!(game.draw_remaining(), 2);
    assert_eq!(game.draw_pile().iter().next().map(Card::face), Some(Face::Skip));
    assert_eq!(game.current_seat(), Some(0));
    Ok(())
}

#[test]
fn undeclared_wild_opening_accepts_anything() -> Result<(), GameError> {
    let hands = vec![three_numbers(Blue), three_numbers(Green)];
    let (mut game, ids) = table(&hands, (Face::Wild, Black), &[(Face::One, Red)])?;
    assert_eq!(game.declared_suit(), None);
    let blue = card(&game, ids[0], Face::Six, Blue);
    game.play_turn(ids[0], blue, None)?;
    assert_eq!(game.current_seat(), Some(1));
    Ok(())
}

#[test]
fn empty_table_has_no_next_seat() -> Result<(), GameError> {
    let mut game = uno::builder()?.build()?;
    assert_eq!(game.seat_after(0), None);
    game.add_player("solo")?;
    game.add_player("duo")?;
    assert_eq!(game.seat_after(1), Some(0));
    Ok(())
}

#[test]
fn next_turn_wraps_around_the_table() -> Result<(), GameError> {
    let hands = vec![three_numbers(Red), three_numbers(Green), three_numbers(Blue)];
    let (mut game, _) = table(&hands, (Face::Nine, Red), &[(Face::One, Green)])?;
    let mut visited = Vec::new();
    for _ in 0..4 {
        game.next_turn()?;
        visited.push(game.current_seat());
    }
    assert_eq!(visited, vec![Some(1), Some(2), Some(0), Some(1)]);
    Ok(())
}

#[test]
fn state_view_serializes_to_json() -> Result<(), GameError> {
    let mut game = uno::builder()?.with_seed(3).build()?;
    let alice = game.add_player("alice")?;
    game.add_player("bob")?;
    game.start_game()?;
    let view = game.state_view(alice)?;
    let json = serde_json::to_value(&view).expect("view serializes");
    assert_eq!(json["hand"].as_array().map(Vec::len), Some(7));
    assert_eq!(json["players"][0]["nickname"], "alice");
    assert_eq!(json["direction"], "Forward");
    Ok(())
}
