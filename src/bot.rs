use crate::action::Action;
use crate::card::Variant;
use crate::state::GameStateView;

/// Interface for defining custom bots.
pub trait Bot<V: Variant> {
    fn select_action(&mut self, state: &GameStateView<V>, legal_actions: &[Action<V>]) -> Action<V>;
}

/// One representative per move, in first-seen order. A wild card offered once per
/// declarable suit collapses to a single entry.
pub fn distinct_moves<V: Variant>(legal_actions: &[Action<V>]) -> Vec<Action<V>> {
    let mut moves: Vec<Action<V>> = Vec::with_capacity(legal_actions.len());
    for action in legal_actions {
        if !moves.iter().any(|seen| seen.same_move(action)) {
            moves.push(*action);
        }
    }
    moves
}

/// Every legal variant of `chosen`: the suits a wild may declare, or just `chosen`.
pub fn declarations_for<V: Variant>(legal_actions: &[Action<V>], chosen: &Action<V>) -> Vec<Action<V>> {
    legal_actions
        .iter()
        .copied()
        .filter(|action| action.same_move(chosen))
        .collect()
}
