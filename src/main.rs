#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;
mod input;

use std::time::Duration;

use clap::Parser;
use layout_gen::search::{find_best_layout, SearchConfig};
use puzzle::puzzle::Puzzle;
use rand::{rngs::StdRng, SeedableRng};
use util::{error::WeaveResult, time::time_fn};

use crate::{args::Args, input::load_words};

fn main() -> WeaveResult {
  let args = Args::parse();
  let words = load_words(&args.words)?;

  let config = SearchConfig {
    time_budget: Duration::from_millis(args.budget_ms),
    max_attempts: args.attempts,
    seed: args.seed,
  };
  let (elapsed, layout) = time_fn(|| find_best_layout(&words, &config));

  let mut rng = match args.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_os_rng(),
  };
  let puzzle = Puzzle::materialize(layout, &mut rng)?;

  if args.solution {
    print!("{}", puzzle.layout());
  } else {
    print!("{puzzle}");
  }

  let layout = puzzle.layout();
  let size = layout.grid_size();
  println!(
    "Placed {}/{} words on a {size}x{size} grid, {} intersections, score {:.1}",
    layout.words_placed(),
    words.len(),
    layout.intersections(),
    layout.score(),
  );
  println!("Took {}s", elapsed.as_secs_f32());

  Ok(())
}
