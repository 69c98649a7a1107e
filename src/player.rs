use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::card::Variant;
use crate::stack::Hand;

/// Process-unique player identity, handed to callers when a player joins.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PlayerId(Uuid);

impl PlayerId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A seated player. Constructed by [`Game::add_player`](crate::game::Game::add_player),
/// which also hands out the player's one and only hand.
#[derive(Debug)]
pub struct Player<V: Variant> {
    id: PlayerId,
    nickname: String,
    hand: Hand<V>,
}

impl<V: Variant> Player<V> {
    pub(crate) fn new(nickname: impl Into<String>) -> Self {
        let id = PlayerId::generate();
        Self {
            id,
            nickname: nickname.into(),
            hand: Hand::new(id),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn hand(&self) -> &Hand<V> {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand<V> {
        &mut self.hand
    }
}
