use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Bot;
use crate::bots::{HeuristicBot, HumanBot, RandomBot};
use crate::uno::Uno;

/// Returns a normalized label for a bot spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Create an Uno bot instance from a CLI-style spec.
/// Supported specs:
/// - human[:name]
/// - random[:seed]
/// - heuristic
pub fn create_bot_from_spec(
    spec: &str,
    index: usize,
    seed: u64,
) -> Result<Box<dyn Bot<Uno>>, Box<dyn Error>> {
    match label_for_spec(spec).as_str() {
        "human" => {
            let name = spec
                .split_once(':')
                .map(|(_, name)| name.trim().to_string());
            let name = name.unwrap_or_else(|| format!("Human {index}"));
            Ok(Box::new(HumanBot::new(name)))
        }
        "random" => {
            let custom_seed = spec
                .split_once(':')
                .and_then(|(_, value)| value.parse::<u64>().ok())
                .unwrap_or(seed ^ ((index as u64 + 1) * 0x9E37_79B9));
            Ok(Box::new(RandomBot::new(StdRng::seed_from_u64(custom_seed))))
        }
        "heuristic" => Ok(Box::new(HeuristicBot::new())),
        _ => Err(format!("unrecognized bot spec: {spec}").into()),
    }
}
