//! Uno rule set: colours, faces, the 108-card deck and the effect table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::{Facet, Variant};
use crate::deck::Deck;
use crate::error::GameError;
use crate::game::{Game, GameBuilder};
use crate::rules::{DrawnCardPolicy, ExhaustionPolicy, OpeningPolicy, RuleSet};

pub const DECK_SIZE: usize = 108;
pub const HAND_SIZE: usize = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;
pub const WILD_COPIES: usize = 4;

/// Marker type tying the Uno colours and faces together.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Uno;

impl Variant for Uno {
    type Suit = Colour;
    type Face = Face;
}

pub type UnoGame = Game<Uno>;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Colour {
    Red,
    Green,
    Yellow,
    Blue,
    /// Printed colour of wild cards.
    Black,
}

impl Colour {
    pub const ALL: [Colour; 5] = [
        Colour::Red,
        Colour::Green,
        Colour::Yellow,
        Colour::Blue,
        Colour::Black,
    ];

    /// Colours that carry numbered and action cards, and that a wild can name.
    pub const PLAYABLE: [Colour; 4] = [Colour::Red, Colour::Green, Colour::Yellow, Colour::Blue];

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Colour::Red => (255, 0, 0),
            Colour::Green => (0, 255, 0),
            Colour::Yellow => (255, 255, 0),
            Colour::Blue => (0, 0, 255),
            Colour::Black => (0, 0, 0),
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Colour::Red => "Red",
            Colour::Green => "Green",
            Colour::Yellow => "Yellow",
            Colour::Blue => "Blue",
            Colour::Black => "Black",
        };
        f.write_str(name)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Face {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Face {
    pub const ALL: [Face; 15] = [
        Face::Zero,
        Face::One,
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
        Face::Seven,
        Face::Eight,
        Face::Nine,
        Face::Skip,
        Face::Reverse,
        Face::DrawTwo,
        Face::Wild,
        Face::WildDrawFour,
    ];

    /// Numeric value of number cards.
    pub fn value(self) -> Option<u8> {
        Face::ALL[..10]
            .iter()
            .position(|face| *face == self)
            .map(|index| index as u8)
    }

    #[inline]
    pub fn is_wild(self) -> bool {
        matches!(self, Face::Wild | Face::WildDrawFour)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Face::Zero => "0",
            Face::One => "1",
            Face::Two => "2",
            Face::Three => "3",
            Face::Four => "4",
            Face::Five => "5",
            Face::Six => "6",
            Face::Seven => "7",
            Face::Eight => "8",
            Face::Nine => "9",
            Face::Skip => "Skip",
            Face::Reverse => "Reverse",
            Face::DrawTwo => "Draw Two",
            Face::Wild => "Wild",
            Face::WildDrawFour => "Wild Draw Four",
        };
        f.write_str(name)
    }
}

/// Effect table for Uno faces.
pub fn facets(face: Face) -> &'static [Facet] {
    match face {
        Face::Skip => &[Facet::Skip],
        Face::Reverse => &[Facet::Reverse],
        Face::DrawTwo => &[Facet::ForcedDraw(2)],
        Face::Wild => &[Facet::Wild],
        Face::WildDrawFour => &[Facet::Wild, Facet::ForcedDraw(4)],
        _ => &[],
    }
}

/// Standard deck order (unshuffled): per colour one of every coloured face, then a
/// second copy of everything but the zero, then the black wilds.
pub fn deck_specs() -> Vec<(Face, Colour)> {
    let mut specs = Vec::with_capacity(DECK_SIZE);
    for colour in Colour::PLAYABLE {
        specs.extend(
            Face::ALL
                .iter()
                .filter(|face| !face.is_wild())
                .map(|face| (*face, colour)),
        );
        specs.extend(
            Face::ALL
                .iter()
                .filter(|face| !face.is_wild() && **face != Face::Zero)
                .map(|face| (*face, colour)),
        );
    }
    specs.extend(std::iter::repeat((Face::Wild, Colour::Black)).take(WILD_COPIES));
    specs.extend(std::iter::repeat((Face::WildDrawFour, Colour::Black)).take(WILD_COPIES));
    specs
}

pub fn build_deck() -> Result<Deck<Uno>, GameError> {
    let deck = Deck::from_specs(deck_specs())?;
    verify_deck(&deck)?;
    Ok(deck)
}

/// Checks the total and every per-face, per-colour multiplicity of an Uno deck.
pub fn verify_deck(deck: &Deck<Uno>) -> Result<(), GameError> {
    if deck.len() != DECK_SIZE {
        return Err(GameError::DeckComposition(format!(
            "expected {DECK_SIZE} cards, built {}",
            deck.len()
        )));
    }
    // With the total fixed, exact multiplicities leave no room for stray cards.
    for colour in Colour::PLAYABLE {
        for face in Face::ALL.iter().copied().filter(|face| !face.is_wild()) {
            let expected = if face == Face::Zero { 1 } else { 2 };
            let found = deck.count(face, colour);
            if found != expected {
                return Err(GameError::DeckComposition(format!(
                    "expected {expected} x {colour} {face}, found {found}"
                )));
            }
        }
    }
    for face in [Face::Wild, Face::WildDrawFour] {
        let found = deck.count(face, Colour::Black);
        if found != WILD_COPIES {
            return Err(GameError::DeckComposition(format!(
                "expected {WILD_COPIES} x {face}, found {found}"
            )));
        }
    }
    Ok(())
}

/// Official Uno parameters: 2-10 players, 7-card hands, opening action cards redrawn,
/// the discard pile recycled when the draw pile runs out.
pub fn rules() -> RuleSet<Uno> {
    RuleSet {
        name: "uno",
        min_players: MIN_PLAYERS,
        max_players: MAX_PLAYERS,
        hand_size: HAND_SIZE,
        build_deck,
        facets,
        declarable_suits: &Colour::PLAYABLE,
        opening: OpeningPolicy::RedrawActions,
        exhaustion: ExhaustionPolicy::Reshuffle,
        drawn_card: DrawnCardPolicy::PlayOrPass,
        empty_hand_wins: true,
    }
}

pub fn builder() -> Result<GameBuilder<Uno>, GameError> {
    GameBuilder::new(rules())
}
