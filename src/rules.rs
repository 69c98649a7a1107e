use serde::Serialize;

use crate::card::{Facet, Variant};
use crate::deck::Deck;
use crate::error::GameError;

/// What happens with the house card that opens the discard pile.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum OpeningPolicy {
    /// Cards with any facet go to the bottom of the draw pile until a plain card shows up.
    RedrawActions,
    /// The opening card's facets hit the first player. A forced-draw wild is still
    /// redrawn, since nobody can declare its suit.
    ApplyEffects,
    /// The card is discarded and its facets are ignored.
    IgnoreEffects,
}

/// Recovery when the draw pile runs out.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum ExhaustionPolicy {
    /// Shuffle everything under the top discard back into the draw pile.
    Reshuffle,
    /// Report [`GameError::EmptyStack`].
    Fail,
}

/// What a player may do after drawing instead of playing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum DrawnCardPolicy {
    /// A playable drawn card may be played right away, or the player passes.
    PlayOrPass,
    /// The drawn card is always kept and the turn ends.
    Keep,
}

/// Static parameters of a game variant, passed in when a game is built.
#[derive(Clone, Copy, Debug)]
pub struct RuleSet<V: Variant> {
    pub name: &'static str,
    pub min_players: usize,
    pub max_players: usize,
    pub hand_size: usize,
    pub build_deck: fn() -> Result<Deck<V>, GameError>,
    /// Effect table: the ordered facets carried by each face.
    pub facets: fn(V::Face) -> &'static [Facet],
    /// Suits a player may name when playing a wild card.
    pub declarable_suits: &'static [V::Suit],
    pub opening: OpeningPolicy,
    pub exhaustion: ExhaustionPolicy,
    pub drawn_card: DrawnCardPolicy,
    /// Finish the game as soon as a player empties their hand.
    pub empty_hand_wins: bool,
}

impl<V: Variant> RuleSet<V> {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.min_players == 0 {
            return Err(GameError::InvalidConfiguration(
                "a game needs at least one player",
            ));
        }
        if self.min_players > self.max_players {
            return Err(GameError::InvalidConfiguration(
                "minimum players exceeds maximum players",
            ));
        }
        Ok(())
    }

    pub fn facets_of(&self, face: V::Face) -> &'static [Facet] {
        (self.facets)(face)
    }

    pub fn is_declarable(&self, suit: V::Suit) -> bool {
        self.declarable_suits.contains(&suit)
    }
}
