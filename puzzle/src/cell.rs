use std::fmt::{self, Display, Formatter};

/// One cell of the materialized puzzle. Cells owned by no word have no
/// `correct_letter`; true intersections carry two entries in `word_ids`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellState {
  pub correct_letter: Option<char>,
  /// The letter currently showing: a preset hint/decoy, a revealed
  /// letter, or whatever the player typed. `None` when blank.
  pub letter: Option<char>,
  /// Pre-filled at materialization time and not editable afterwards.
  pub is_preset: bool,
  pub is_revealed: bool,
  pub word_ids: Vec<u32>,
}

impl CellState {
  pub fn in_word(&self) -> bool {
    self.correct_letter.is_some()
  }

  pub fn is_intersection(&self) -> bool {
    self.word_ids.len() >= 2
  }

  pub fn is_filled_correctly(&self) -> bool {
    self.in_word() && self.letter == self.correct_letter
  }
}

impl Display for CellState {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}",
      match (self.letter, self.in_word()) {
        (Some(c), _) => c,
        (None, true) => '_',
        (None, false) => '.',
      }
    )
  }
}
