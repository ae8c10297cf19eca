use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
  /// Path to a JSON word list: an array of {"word", "clue", "info"}
  /// records.
  #[arg(long)]
  pub words: String,

  /// Wall-clock budget for the layout search, in milliseconds.
  #[arg(long, default_value_t = 5000)]
  pub budget_ms: u64,

  /// Maximum number of independent layout attempts.
  #[arg(long, default_value_t = 50)]
  pub attempts: u32,

  /// Pins all randomness for reproducible output.
  #[arg(long)]
  pub seed: Option<u64>,

  /// Print the solution letters instead of the playable grid.
  #[arg(long)]
  pub solution: bool,
}
