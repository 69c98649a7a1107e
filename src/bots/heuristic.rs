use crate::action::Action;
use crate::bot::Bot;
use crate::card::CardView;
use crate::state::GameStateView;
use crate::uno::{Colour, Face, Uno};

/// Hand size at which the next player is treated as a threat.
const THREAT_HAND_SIZE: usize = 2;

/// Rule-based Uno bot.
///
/// In plain English:
/// - Play something rather than draw, and play a drawn card when allowed.
/// - Hold wild cards back while a coloured card fits.
/// - When the next player is close to going out, hit them with skips and draws.
/// - Otherwise dump high numbers first.
/// - When calling a colour, name the one most common in the rest of the hand.
#[derive(Default)]
pub struct HeuristicBot;

impl HeuristicBot {
    pub fn new() -> Self {
        Self
    }

    fn find_card(state: &GameStateView<Uno>, action: &Action<Uno>) -> Option<CardView<Uno>> {
        let id = action.card()?;
        state.hand.iter().find(|card| card.id == id).copied()
    }

    fn colour_count(state: &GameStateView<Uno>, colour: Colour, except: CardView<Uno>) -> i32 {
        state
            .hand
            .iter()
            .filter(|card| card.id != except.id && card.suit == colour)
            .count() as i32
    }

    fn score(state: &GameStateView<Uno>, action: &Action<Uno>) -> i32 {
        let Action::Play { declare, .. } = action else {
            return match action {
                Action::Pass => -2_000,
                _ => -1_000,
            };
        };
        let Some(card) = Self::find_card(state, action) else {
            return i32::MIN / 2;
        };
        let next_threat = state
            .seat_after(state.self_seat)
            .is_some_and(|next| next.hand_size <= THREAT_HAND_SIZE);

        let mut score = match card.face {
            Face::WildDrawFour => 100,
            Face::Wild => 200,
            Face::DrawTwo | Face::Skip | Face::Reverse => 600,
            face => 400 + face.value().map(i32::from).unwrap_or(0) * 10,
        };
        if next_threat {
            score += match card.face {
                Face::WildDrawFour => 1_000,
                Face::DrawTwo => 900,
                Face::Skip => 800,
                Face::Reverse if state.players.len() > 2 => 500,
                _ => 0,
            };
        }
        // Keep the colour run going so the next turn has options.
        if let Some(colour) = declare {
            score += Self::colour_count(state, *colour, card) * 5;
        } else {
            score += Self::colour_count(state, card.suit, card) * 3;
        }
        score
    }
}

impl Bot<Uno> for HeuristicBot {
    fn select_action(&mut self, state: &GameStateView<Uno>, legal_actions: &[Action<Uno>]) -> Action<Uno> {
        legal_actions
            .iter()
            .copied()
            .max_by_key(|action| Self::score(state, action))
            .expect("at least one legal action must be available")
    }
}
