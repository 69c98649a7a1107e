use serde::Serialize;

use crate::card::{CardId, Variant};

/// Non-card actions a player can take on their turn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum OtherAction {
    /// Draw one card instead of playing.
    Draw,
    /// Decline to play the card just drawn.
    Pass,
}

/// Action available to an agent during its turn.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(bound = "")]
pub enum Action<V: Variant> {
    /// Play a card from the hand. Wild cards carry the suit the player names.
    Play {
        card: CardId,
        declare: Option<V::Suit>,
    },
    Draw,
    Pass,
}

impl<V: Variant> Action<V> {
    pub fn card(&self) -> Option<CardId> {
        match self {
            Action::Play { card, .. } => Some(*card),
            _ => None,
        }
    }

    /// Same move as `other`, ignoring which suit a wild card would declare.
    pub fn same_move(&self, other: &Self) -> bool {
        match (self, other) {
            (Action::Play { card: a, .. }, Action::Play { card: b, .. }) => a == b,
            (Action::Draw, Action::Draw) | (Action::Pass, Action::Pass) => true,
            _ => false,
        }
    }
}
