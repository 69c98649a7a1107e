use serde::Serialize;

use crate::card::{CardId, CardView, Variant};
use crate::player::PlayerId;

/// Direction in which the turn pointer walks the seating order.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Signed seat offset applied on each turn advance.
    #[inline]
    pub fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub enum Phase {
    /// Players are joining.
    Forming,
    InProgress,
    Finished { winner: PlayerId },
}

/// Public portion of a player's state that all opponents may observe.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PlayerPublicState {
    pub id: PlayerId,
    pub nickname: String,
    pub seat: usize,
    pub hand_size: usize,
    pub is_current: bool,
}

/// Game state snapshot from one player's perspective.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(bound = "")]
pub struct GameStateView<V: Variant> {
    pub phase: Phase,
    pub self_player: PlayerId,
    pub self_seat: usize,
    pub current_seat: Option<usize>,
    pub direction: Direction,
    pub draw_pile_count: usize,
    pub discard_pile_count: usize,
    pub discard_top: Option<CardView<V>>,
    pub declared_suit: Option<V::Suit>,
    /// Card drawn this turn that may still be played.
    pub pending_draw: Option<CardId>,
    pub players: Vec<PlayerPublicState>,
    pub hand: Vec<CardView<V>>,
}

impl<V: Variant> GameStateView<V> {
    pub fn is_my_turn(&self) -> bool {
        self.current_seat == Some(self.self_seat)
    }

    /// Public state of the player seated after `seat` in the current direction.
    pub fn seat_after(&self, seat: usize) -> Option<&PlayerPublicState> {
        let count = self.players.len() as isize;
        if count == 0 {
            return None;
        }
        let next = (seat as isize + self.direction.step()).rem_euclid(count) as usize;
        self.players.get(next)
    }
}
