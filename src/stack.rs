use std::ops::{Deref, DerefMut};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, CardId, CardView, Variant};
use crate::error::GameError;
use crate::player::PlayerId;

/// Ordered pile of cards. The top of the pile is the end of the sequence.
#[derive(Debug)]
pub struct Stack<V: Variant> {
    cards: Vec<Card<V>>,
}

impl<V: Variant> Default for Stack<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> Stack<V> {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub(crate) fn from_cards(cards: Vec<Card<V>>) -> Self {
        Self { cards }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card<V>> {
        self.cards.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card<V>> {
        self.cards.iter()
    }

    pub fn get(&self, id: CardId) -> Option<&Card<V>> {
        self.cards.iter().find(|card| card.id() == id)
    }

    pub fn views(&self) -> Vec<CardView<V>> {
        self.cards.iter().map(Card::view).collect()
    }

    /// Uniform in-place permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes the top `count` cards, topmost first. Leaves the stack untouched when it
    /// holds fewer than `count` cards.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card<V>>, GameError> {
        if count > self.cards.len() {
            return Err(GameError::EmptyStack {
                requested: count,
                available: self.cards.len(),
            });
        }
        let split = self.cards.len() - count;
        let mut drawn = self.cards.split_off(split);
        drawn.reverse();
        Ok(drawn)
    }

    pub fn draw_one(&mut self) -> Result<Card<V>, GameError> {
        self.cards.pop().ok_or(GameError::EmptyStack {
            requested: 1,
            available: 0,
        })
    }

    pub fn push(&mut self, card: Card<V>) {
        self.cards.push(card);
    }

    pub fn extend<I: IntoIterator<Item = Card<V>>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Places a card at the bottom of the pile.
    pub fn bury(&mut self, card: Card<V>) {
        self.cards.insert(0, card);
    }

    /// Removes this exact card instance, if present.
    pub fn take(&mut self, id: CardId) -> Option<Card<V>> {
        let index = self.cards.iter().position(|card| card.id() == id)?;
        Some(self.cards.remove(index))
    }
}

/// The played pile. Its order gates legality, so it offers no shuffle.
#[derive(Debug)]
pub struct DiscardPile<V: Variant> {
    cards: Stack<V>,
}

impl<V: Variant> Default for DiscardPile<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> DiscardPile<V> {
    pub fn new() -> Self {
        Self { cards: Stack::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card<V>> {
        self.cards.top()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card<V>> {
        self.cards.iter()
    }

    pub fn push(&mut self, card: Card<V>) {
        self.cards.push(card);
    }

    /// Takes every card except the top one, leaving the top in place.
    pub(crate) fn reclaim_under_top(&mut self) -> Vec<Card<V>> {
        let Ok(top) = self.cards.draw_one() else {
            return Vec::new();
        };
        let rest = std::mem::take(&mut self.cards.cards);
        self.cards.push(top);
        rest
    }
}

/// A stack owned by exactly one player.
#[derive(Debug)]
pub struct Hand<V: Variant> {
    owner: PlayerId,
    cards: Stack<V>,
}

impl<V: Variant> Hand<V> {
    pub(crate) fn new(owner: PlayerId) -> Self {
        Self {
            owner,
            cards: Stack::new(),
        }
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }
}

impl<V: Variant> Deref for Hand<V> {
    type Target = Stack<V>;

    fn deref(&self) -> &Self::Target {
        &self.cards
    }
}

impl<V: Variant> DerefMut for Hand<V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.cards
    }
}
