use rand::{rngs::StdRng, seq::SliceRandom};
use std::cmp::Reverse;

/// One answer in the puzzle. `word` is assumed to be uppercase alphabetic
/// with no spaces; callers validate before handing entries to the
/// generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordEntry {
  pub id: u32,
  pub word: String,
  pub clue: String,
  pub info: String,
}

impl WordEntry {
  pub fn new(id: u32, word: impl Into<String>, clue: impl Into<String>, info: impl Into<String>) -> Self {
    Self {
      id,
      word: word.into(),
      clue: clue.into(),
      info: info.into(),
    }
  }

  pub fn len(&self) -> usize {
    self.word.chars().count()
  }

  pub fn is_empty(&self) -> bool {
    self.word.is_empty()
  }
}

/// Orders words longest-first for placement. Words of equal length land in
/// a random order, so successive generation attempts explore different
/// placement sequences.
pub fn sort_for_placement(words: &[WordEntry], rng: &mut StdRng) -> Vec<WordEntry> {
  let mut words = words.to_vec();
  words.shuffle(rng);
  // Stable sort keeps the shuffled order within each length class.
  words.sort_by_key(|entry| Reverse(entry.len()));
  words
}
