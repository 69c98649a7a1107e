//! Turn-based card game engine with pluggable rule sets, plus the rules of Uno.

pub mod action;
pub mod bot;
pub mod bots;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod player;
pub mod rules;
pub mod stack;
pub mod state;
pub mod uno;
pub mod visualize;

pub use crate::action::{Action, OtherAction};
pub use crate::bot::{Bot, declarations_for, distinct_moves};
pub use crate::bots::{HeuristicBot, HumanBot, RandomBot, create_bot_from_spec, label_for_spec};
pub use crate::card::{Card, CardId, CardView, Facet, Variant};
pub use crate::deck::Deck;
pub use crate::error::{GameError, IllegalPlay};
pub use crate::game::{Game, GameBuilder, GameConfig};
pub use crate::player::{Player, PlayerId};
pub use crate::rules::{DrawnCardPolicy, ExhaustionPolicy, OpeningPolicy, RuleSet};
pub use crate::stack::{DiscardPile, Hand, Stack};
pub use crate::state::{Direction, GameStateView, Phase, PlayerPublicState};
pub use crate::uno::{Colour, Face, Uno, UnoGame};
pub use crate::visualize::{VisualOptions, describe_action, render_state, render_state_with_options};
