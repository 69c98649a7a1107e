use std::fmt::Write;

use crate::action::Action;
use crate::card::{CardId, CardView, Variant};
use crate::state::{Direction, GameStateView, Phase};

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_card_ids: bool,
    pub show_pile_sizes: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_card_ids: false,
            show_pile_sizes: true,
        }
    }
}

pub fn render_state<V: Variant>(state: &GameStateView<V>) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options<V: Variant>(
    state: &GameStateView<V>,
    options: VisualOptions,
) -> String {
    let mut out = String::new();
    let phase = match state.phase {
        Phase::Forming => String::from("Waiting for players"),
        Phase::InProgress => String::from("In progress"),
        Phase::Finished { winner } => {
            let name = state
                .players
                .iter()
                .find(|player| player.id == winner)
                .map(|player| player.nickname.as_str())
                .unwrap_or("?");
            format!("Finished (winner: {name})")
        }
    };
    let _ = writeln!(out, "Game status: {phase}");
    let direction = match state.direction {
        Direction::Forward => "forward",
        Direction::Backward => "backward",
    };
    let _ = writeln!(out, "Direction: {direction}");
    let top = state
        .discard_top
        .map(|card| format_card(card, options))
        .unwrap_or_else(|| String::from("--"));
    let declared = state
        .declared_suit
        .map(|suit| format!(" (declared {suit})"))
        .unwrap_or_default();
    let _ = writeln!(out, "Discard top: {top}{declared}");
    if options.show_pile_sizes {
        let _ = writeln!(
            out,
            "Draw pile: {}  |  Discard pile: {}",
            state.draw_pile_count, state.discard_pile_count
        );
    }
    let _ = writeln!(out, "Players:");
    for player in &state.players {
        let label_you = if player.seat == state.self_seat {
            " (You)"
        } else {
            ""
        };
        let current_tag = if player.is_current { " <- current" } else { "" };
        let _ = writeln!(
            out,
            "  [{}] {}{} - {} card(s){}",
            player.seat, player.nickname, label_you, player.hand_size, current_tag
        );
    }
    if state.hand.is_empty() {
        let _ = writeln!(out, "Hand: (empty)");
    } else {
        let hand = state
            .hand
            .iter()
            .map(|card| format_card(*card, options))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "Hand: {hand}");
    }
    out
}

/// Describe an action for logs and prompts.
pub fn describe_action<V: Variant>(state: &GameStateView<V>, action: &Action<V>) -> String {
    match action {
        Action::Play { card, declare } => {
            let name = find_card(state, *card)
                .map(|card| card.to_string())
                .unwrap_or_else(|| format!("card {card}"));
            match declare {
                Some(suit) => format!("Play {name}, calling {suit}"),
                None => format!("Play {name}"),
            }
        }
        Action::Draw => String::from("Draw a card"),
        Action::Pass => String::from("Pass"),
    }
}

fn find_card<V: Variant>(state: &GameStateView<V>, id: CardId) -> Option<CardView<V>> {
    state.hand.iter().find(|card| card.id == id).copied()
}

fn format_card<V: Variant>(card: CardView<V>, options: VisualOptions) -> String {
    if options.show_card_ids {
        format!("{card} {}", card.id)
    } else {
        card.to_string()
    }
}
