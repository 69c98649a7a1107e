use thiserror::Error;

use crate::player::PlayerId;

/// Errors that can occur when manipulating the game state.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("table is full ({max} players maximum)")]
    TooManyPlayers { max: usize },
    #[error("not enough players to start: {joined} joined, {min} required")]
    NotEnoughPlayers { min: usize, joined: usize },
    #[error("game has already started")]
    AlreadyStarted,
    #[error("game has not started yet")]
    NotStarted,
    #[error("game is already over")]
    GameOver,
    #[error("player {0} is not seated at this table")]
    UnknownPlayer(PlayerId),
    #[error("illegal play: {0}")]
    IllegalPlay(#[from] IllegalPlay),
    #[error("cannot draw {requested} card(s), only {available} available")]
    EmptyStack { requested: usize, available: usize },
    #[error("deck composition is invalid: {0}")]
    DeckComposition(String),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Details of plays rejected by the turn state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IllegalPlay {
    #[error("it is not this player's turn")]
    NotYourTurn,
    #[error("card is not in the player's hand")]
    CardNotInHand,
    #[error("card does not match the top of the discard pile")]
    DoesNotMatch,
    #[error("a wild card needs a declared suit")]
    MissingDeclaration,
    #[error("the declared suit cannot be chosen")]
    UndeclarableSuit,
    #[error("only wild cards take a declared suit")]
    UnexpectedDeclaration,
    #[error("only the card just drawn may be played")]
    MustPlayDrawnCard,
    #[error("player already drew this turn")]
    AlreadyDrew,
    #[error("passing is only allowed after drawing a playable card or when no move exists")]
    NothingToPass,
}
