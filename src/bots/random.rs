use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::Action;
use crate::bot::{Bot, declarations_for, distinct_moves};
use crate::card::Variant;
use crate::state::GameStateView;

/// Baseline bot that picks a move uniformly at random.
///
/// A wild card is one move however many suits it may declare; the suit is drawn
/// afterwards, so wilds are not favoured over plain cards.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<V: Variant, R: Rng> Bot<V> for RandomBot<R> {
    fn select_action(&mut self, _state: &GameStateView<V>, legal_actions: &[Action<V>]) -> Action<V> {
        let chosen = distinct_moves(legal_actions)
            .choose(&mut self.rng)
            .copied()
            .expect("at least one legal action must be available");
        declarations_for(legal_actions, &chosen)
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(chosen)
    }
}
