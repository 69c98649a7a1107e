use std::fmt;
use std::hash::Hash;

use serde::Serialize;

use crate::game::Game;

/// Type family of a concrete game: the closed sets of suits and faces its cards carry.
///
/// Implementors are zero-sized markers; everything that varies at runtime lives in
/// [`RuleSet`](crate::rules::RuleSet).
pub trait Variant: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    type Suit: Copy + Eq + Hash + fmt::Debug + fmt::Display + Serialize + Send + Sync + 'static;
    type Face: Copy + Eq + Hash + fmt::Debug + fmt::Display + Serialize + Send + Sync + 'static;
}

/// Identity of one physical card within a game instance.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Composable piece of card behaviour. A card's behaviour is the ordered list of its facets.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum Facet {
    /// Playable on anything except a forced-draw wild; the player declares a suit.
    Wild,
    /// The next player loses their turn.
    Skip,
    /// Seating direction flips.
    Reverse,
    /// The next player draws this many cards and loses their turn.
    ForcedDraw(usize),
}

/// Returns true when the facet list contains the wild legality override.
pub fn is_wild(facets: &[Facet]) -> bool {
    facets.contains(&Facet::Wild)
}

/// Total number of cards the facet list forces the victim to draw.
pub fn forced_draw_total(facets: &[Facet]) -> usize {
    facets
        .iter()
        .map(|facet| match facet {
            Facet::ForcedDraw(count) => *count,
            _ => 0,
        })
        .sum()
}

fn is_forced_draw_wild(facets: &[Facet]) -> bool {
    is_wild(facets) && forced_draw_total(facets) > 0
}

/// A playing card. Cards are move-only so a single instance can only ever sit in one
/// container; use [`CardView`] for copies handed to callers.
#[derive(Debug, Eq, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct Card<V: Variant> {
    id: CardId,
    face: V::Face,
    suit: V::Suit,
}

impl<V: Variant> Card<V> {
    pub(crate) fn new(id: CardId, face: V::Face, suit: V::Suit) -> Self {
        Self { id, face, suit }
    }

    #[inline]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[inline]
    pub fn face(&self) -> V::Face {
        self.face
    }

    #[inline]
    pub fn suit(&self) -> V::Suit {
        self.suit
    }

    pub fn view(&self) -> CardView<V> {
        CardView {
            id: self.id,
            face: self.face,
            suit: self.suit,
        }
    }

    /// Checks whether this card may be played on the game's current discard pile.
    pub fn legal_to_play(&self, game: &Game<V>) -> bool {
        let facets = game.rules().facets;
        self.legal_on(game.discard_top(), game.declared_suit(), facets)
    }

    /// Legality against an explicit discard top. An empty pile accepts anything, and an
    /// undeclared wild on top (the house opening) does too.
    pub(crate) fn legal_on(
        &self,
        top: Option<&Card<V>>,
        declared: Option<V::Suit>,
        facets: fn(V::Face) -> &'static [Facet],
    ) -> bool {
        let Some(top) = top else {
            return true;
        };
        let top_facets = facets(top.face);
        if is_wild(top_facets) && declared.is_none() {
            return true;
        }
        let effective_suit = declared.unwrap_or(top.suit);
        let matches = top.face == self.face || effective_suit == self.suit;
        let wild_override = is_wild(facets(self.face)) && !is_forced_draw_wild(top_facets);
        matches || wild_override
    }
}

impl<V: Variant> fmt::Display for Card<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit, self.face)
    }
}

/// Read-only copy of a card's identity.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(bound = "")]
pub struct CardView<V: Variant> {
    pub id: CardId,
    pub face: V::Face,
    pub suit: V::Suit,
}

impl<V: Variant> fmt::Display for CardView<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit, self.face)
    }
}
