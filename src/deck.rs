use crate::card::{Card, CardId, CardView, Variant};
use crate::error::GameError;
use crate::stack::Stack;

/// Every card that exists in one game instance. Built once, then consumed into the
/// draw pile.
#[derive(Debug)]
pub struct Deck<V: Variant> {
    cards: Vec<Card<V>>,
}

impl<V: Variant> Deck<V> {
    /// Builds a deck from `(face, suit)` pairs in the given order. Card ids follow that
    /// order, and the last pair ends up on top once the deck becomes the draw pile.
    pub fn from_specs<I>(specs: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = (V::Face, V::Suit)>,
    {
        let cards = specs
            .into_iter()
            .enumerate()
            .map(|(index, (face, suit))| {
                let id = u32::try_from(index).map_err(|_| {
                    GameError::DeckComposition(format!("card {index} is past the last card id"))
                })?;
                Ok(Card::new(CardId(id), face, suit))
            })
            .collect::<Result<Vec<_>, GameError>>()?;
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards carrying exactly this face and suit.
    pub fn count(&self, face: V::Face, suit: V::Suit) -> usize {
        self.cards
            .iter()
            .filter(|card| card.face() == face && card.suit() == suit)
            .count()
    }

    pub fn count_face(&self, face: V::Face) -> usize {
        self.cards.iter().filter(|card| card.face() == face).count()
    }

    pub fn views(&self) -> Vec<CardView<V>> {
        self.cards.iter().map(Card::view).collect()
    }

    pub(crate) fn into_stack(self) -> Stack<V> {
        Stack::from_cards(self.cards)
    }
}
