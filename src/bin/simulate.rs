use std::error::Error;
use std::process;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use cardtable::uno::{self, MAX_PLAYERS, MIN_PLAYERS};
use cardtable::{Bot, GameError, create_bot_from_spec, describe_action, label_for_spec, render_state};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Play a game of Uno between bots and humans.")]
struct Args {
    /// RNG seed for the shuffle and the first player
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Stop after the specified number of turns
    #[arg(long = "max-turns")]
    max_turns: Option<usize>,

    /// Show the game state and chosen actions each turn
    #[arg(long = "visualize", action = ArgAction::SetTrue)]
    visualize: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long = "log-level", default_value = "warn")]
    log_level: String,

    /// Player specs: human[:name], random[:seed], heuristic (2-10 total)
    bots: Vec<String>,
}

fn main() {
    let args = Args::parse();
    init_tracing(&args.log_level);
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut bot_specs = args.bots;
    if bot_specs.is_empty() {
        bot_specs = vec![String::from("human"), String::from("heuristic")];
    }
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&bot_specs.len()) {
        return Err(format!(
            "expected between {MIN_PLAYERS} and {MAX_PLAYERS} players, received {}",
            bot_specs.len()
        )
        .into());
    }

    let mut game = uno::builder()?.with_seed(args.seed).build()?;
    let mut seats = Vec::with_capacity(bot_specs.len());
    for (index, spec) in bot_specs.iter().enumerate() {
        let bot: Box<dyn Bot<uno::Uno>> = create_bot_from_spec(spec, index, args.seed)?;
        let id = game.add_player(format!("{} {index}", label_for_spec(spec)))?;
        seats.push((id, bot));
    }
    game.start_game()?;

    println!("Starting Uno with {} players.\n", seats.len());
    let mut turns = 0usize;
    while !game.is_finished() {
        if let Some(limit) = args.max_turns {
            if turns >= limit {
                println!("Max turn limit {limit} reached. Stopping simulation.");
                break;
            }
        }
        let seat = game.current_seat().ok_or(GameError::NotStarted)?;
        let (player, bot) = &mut seats[seat];
        let state = game.state_view(*player)?;
        let legal_actions = game.legal_actions(*player)?;
        if legal_actions.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "no legal actions available for current player",
            )
            .into());
        }
        if args.visualize {
            println!("{}", render_state(&state));
        }
        let action = bot.select_action(&state, &legal_actions);
        if args.visualize {
            println!("Chosen action: {}\n", describe_action(&state, &action));
        }
        game.apply_action(*player, action)?;
        turns += 1;
    }

    match game.winner().and_then(|winner| game.player(winner)) {
        Some(winner) => println!("Game finished after {turns} turns. Winner: {}.", winner.nickname()),
        None => println!("Simulation stopped before completion."),
    }
    Ok(())
}
