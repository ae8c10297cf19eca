use util::pos::{Diff, Pos};

use crate::word_list::WordEntry;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Direction {
  Across,
  Down,
}

impl Direction {
  pub fn delta(self) -> Diff {
    match self {
      Direction::Across => Diff::DX,
      Direction::Down => Diff::DY,
    }
  }

  pub fn perpendicular(self) -> Direction {
    match self {
      Direction::Across => Direction::Down,
      Direction::Down => Direction::Across,
    }
  }
}

/// A word committed to the grid: its entry plus the cell of its first
/// letter and the direction its remaining letters follow. Coordinates may
/// be negative while a layout is under construction; they are normalized
/// to be non-negative when the layout is frozen.
#[derive(Clone, Debug)]
pub struct PlacedWord {
  pub entry: WordEntry,
  pub start: Pos,
  pub direction: Direction,
}

impl PlacedWord {
  pub fn new(entry: WordEntry, start: Pos, direction: Direction) -> Self {
    Self { entry, start, direction }
  }

  pub fn len(&self) -> usize {
    self.entry.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entry.is_empty()
  }

  pub fn cell(&self, idx: usize) -> Pos {
    self.start + self.direction.delta() * idx as i32
  }

  pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
    (0..self.len()).map(|idx| self.cell(idx))
  }

  pub fn letter_positions(&self) -> impl Iterator<Item = (char, Pos)> + '_ {
    self
      .entry
      .word
      .chars()
      .enumerate()
      .map(|(idx, c)| (c, self.cell(idx)))
  }
}
