use std::io::{self, Write};

use crate::action::Action;
use crate::bot::{Bot, declarations_for, distinct_moves};
use crate::card::Variant;
use crate::state::GameStateView;
use crate::visualize::{VisualOptions, describe_action, render_state_with_options};

/// Interactive bot that queries a human via standard input.
///
/// Wild cards are offered once; the colour to call is asked for after the card is
/// picked.
pub struct HumanBot {
    name: String,
    options: VisualOptions,
}

enum Reply {
    Index(usize),
    Help,
    Invalid(String),
}

impl HumanBot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: VisualOptions::default(),
        }
    }

    pub fn with_options(mut self, options: VisualOptions) -> Self {
        self.options = options;
        self
    }

    fn read_reply(prompt: &str) -> Reply {
        print!("{prompt}");
        if io::stdout().flush().is_err() {
            eprintln!("failed to flush stdout");
        }
        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return Reply::Invalid(String::from("<unreadable>"));
        }
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
            println!("Exiting game at user's request.");
            std::process::exit(0);
        }
        if trimmed.eq_ignore_ascii_case("help") {
            return Reply::Help;
        }
        match trimmed.parse::<usize>() {
            Ok(index) => Reply::Index(index),
            Err(_) => Reply::Invalid(trimmed.to_string()),
        }
    }

    fn print_table<V: Variant>(&self, state: &GameStateView<V>) {
        println!("\n=== {}'s turn (seat {}) ===", self.name, state.self_seat);
        println!("{}", render_state_with_options(state, self.options));
        match (state.declared_suit, state.discard_top) {
            (Some(suit), _) => println!("To match: {suit} (called)"),
            (None, Some(top)) => println!("To match: {} or {}", top.suit, top.face),
            (None, None) => println!("To match: anything"),
        }
        let drawn = state
            .pending_draw
            .and_then(|id| state.hand.iter().find(|card| card.id == id));
        if let Some(card) = drawn {
            println!("You drew {card}: play it or pass.");
        }
    }

    /// Asks which suit to call for a wild card. `None` backs out to the move list.
    fn pick_declaration<V: Variant>(
        state: &GameStateView<V>,
        options: &[Action<V>],
    ) -> Option<Action<V>> {
        loop {
            println!("Call a colour:");
            for (index, action) in options.iter().enumerate() {
                if let Action::Play {
                    declare: Some(suit),
                    ..
                } = action
                {
                    println!("  [{index}] {suit}");
                }
            }
            match Self::read_reply("Colour (or 'help' to go back): ") {
                Reply::Index(choice) => {
                    if let Some(action) = options.get(choice).copied() {
                        println!("You selected: {}", describe_action(state, &action));
                        return Some(action);
                    }
                    println!("Index out of range. Please choose a valid colour.");
                }
                Reply::Help => return None,
                Reply::Invalid(text) => println!("Invalid input: '{text}'. Please enter a number."),
            }
        }
    }
}

impl Default for HumanBot {
    fn default() -> Self {
        Self::new("Human")
    }
}

impl<V: Variant> Bot<V> for HumanBot {
    fn select_action(&mut self, state: &GameStateView<V>, legal_actions: &[Action<V>]) -> Action<V> {
        let moves = distinct_moves(legal_actions);
        assert!(!moves.is_empty(), "at least one legal action must exist");
        loop {
            self.print_table(state);
            println!("Available moves:");
            for (index, action) in moves.iter().enumerate() {
                if declarations_for(legal_actions, action).len() > 1 {
                    let card = action
                        .card()
                        .and_then(|id| state.hand.iter().find(|card| card.id == id));
                    match card {
                        Some(card) => println!("  [{index}] Play {card} and call a colour"),
                        None => println!("  [{index}] {}", describe_action(state, action)),
                    }
                } else {
                    println!("  [{index}] {}", describe_action(state, action));
                }
            }
            println!("Type the move index, 'help' or 'q' to quit.");
            match Self::read_reply("Selection: ") {
                Reply::Index(choice) => {
                    let Some(chosen) = moves.get(choice) else {
                        println!("Index out of range. Please choose a valid option.");
                        continue;
                    };
                    let declarations = declarations_for(legal_actions, chosen);
                    if declarations.len() > 1 {
                        match Self::pick_declaration(state, &declarations) {
                            Some(action) => return action,
                            None => continue,
                        }
                    }
                    println!("You selected: {}", describe_action(state, chosen));
                    return *chosen;
                }
                Reply::Help => {
                    println!("Match the colour or face of the discard top, or play a wild and call a colour.");
                    println!("Draw when nothing fits; a playable drawn card can be played or passed.");
                }
                Reply::Invalid(text) => println!("Invalid input: '{text}'. Please enter a number."),
            }
        }
    }
}
