use std::{
  collections::HashMap,
  fmt::{self, Display, Formatter},
};

use itertools::Itertools;
use rand::{rngs::StdRng, seq::IndexedRandom};
use util::pos::Pos;

use crate::{
  placement::{Direction, PlacedWord},
  word_list::WordEntry,
};

const INTERSECTION_SCORE: f64 = 10.0;
const MULTI_CROSS_BONUS: f64 = 5.0;
const MULTI_CROSS_CAP: u32 = 3;
const AREA_GROWTH_PENALTY: f64 = 2.0;
const SQUARENESS_PENALTY: f64 = 5.0;

const WORD_PLACED_SCORE: f64 = 20.0;
const LAYOUT_AREA_DIVISOR: f64 = 10.0;
const LAYOUT_ASPECT_PENALTY: f64 = 10.0;
const LAYOUT_INTERSECTION_SCORE: f64 = 5.0;

#[derive(Clone, Copy, Debug)]
struct Bounds {
  min: Pos,
  max: Pos,
}

impl Bounds {
  fn of(pos: Pos) -> Self {
    Self { min: pos, max: pos }
  }

  fn extended(self, pos: Pos) -> Self {
    Self {
      min: Pos { x: self.min.x.min(pos.x), y: self.min.y.min(pos.y) },
      max: Pos { x: self.max.x.max(pos.x), y: self.max.y.max(pos.y) },
    }
  }

  fn width(&self) -> u32 {
    (self.max.x - self.min.x + 1) as u32
  }

  fn height(&self) -> u32 {
    (self.max.y - self.min.y + 1) as u32
  }

  fn area(&self) -> u64 {
    self.width() as u64 * self.height() as u64
  }

  /// 1.0 for a square bounding box, approaching 0.0 for a long strip.
  fn squareness(&self) -> f64 {
    let long = self.width().max(self.height()) as f64;
    let short = self.width().min(self.height()) as f64;
    short / long
  }
}

#[derive(Clone, Debug)]
struct Occupant {
  letter: char,
  owners: Vec<(u32, Direction)>,
}

/// Incrementally builds one candidate layout: an occupancy map from cell to
/// letter and owning words, plus the running bounding box.
#[derive(Default)]
pub struct LayoutBuilder {
  placed: Vec<PlacedWord>,
  cells: HashMap<Pos, Occupant>,
  bounds: Option<Bounds>,
}

impl LayoutBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Checks a candidate placement against everything already on the grid:
  /// occupied cells must agree on the letter and cross perpendicularly,
  /// interior non-crossing cells may not touch a neighboring word sideways,
  /// and the cells inline before the first and after the last letter must
  /// be empty.
  pub fn is_valid_placement(&self, word: &str, start: Pos, direction: Direction) -> bool {
    let delta = direction.delta();
    let len = word.chars().count();

    if self.cells.contains_key(&(start - delta))
      || self.cells.contains_key(&(start + delta * len as i32))
    {
      return false;
    }

    let perp = direction.perpendicular().delta();
    for (idx, c) in word.chars().enumerate() {
      let pos = start + delta * idx as i32;
      match self.cells.get(&pos) {
        Some(occupant) => {
          if occupant.letter != c {
            return false;
          }
          // A second word through an occupied cell must cross it, never
          // run along it.
          if occupant
            .owners
            .iter()
            .any(|&(_, owner_dir)| owner_dir == direction)
          {
            return false;
          }
        }
        None => {
          if idx != 0
            && idx + 1 != len
            && (self.cells.contains_key(&(pos + perp)) || self.cells.contains_key(&(pos - perp)))
          {
            return false;
          }
        }
      }
    }

    true
  }

  /// Scores a placement already known to be valid: intersections are worth
  /// the most, growing the bounding box or skewing it away from square
  /// costs points.
  pub fn placement_score(&self, word: &str, start: Pos, direction: Direction) -> f64 {
    let delta = direction.delta();
    let mut intersections = 0u32;
    let mut bounds = self.bounds;
    for idx in 0..word.chars().count() {
      let pos = start + delta * idx as i32;
      if self.cells.contains_key(&pos) {
        intersections += 1;
      }
      bounds = Some(bounds.map_or_else(|| Bounds::of(pos), |bounds| bounds.extended(pos)));
    }

    let mut score = INTERSECTION_SCORE * intersections as f64
      + MULTI_CROSS_BONUS * intersections.min(MULTI_CROSS_CAP) as f64;
    if let (Some(old_bounds), Some(new_bounds)) = (self.bounds, bounds) {
      score -= AREA_GROWTH_PENALTY * new_bounds.area().saturating_sub(old_bounds.area()) as f64;
      score -=
        SQUARENESS_PENALTY * (old_bounds.squareness() - new_bounds.squareness()).max(0.0);
    }
    score
  }

  pub fn place(&mut self, entry: &WordEntry, start: Pos, direction: Direction) {
    let placed = PlacedWord::new(entry.clone(), start, direction);
    for (c, pos) in placed.letter_positions() {
      self
        .cells
        .entry(pos)
        .or_insert_with(|| Occupant { letter: c, owners: vec![] })
        .owners
        .push((entry.id, direction));
      self.bounds = Some(
        self
          .bounds
          .map_or_else(|| Bounds::of(pos), |bounds| bounds.extended(pos)),
      );
    }
    self.placed.push(placed);
  }

  /// Every start cell that would align a shared letter of `word`
  /// perpendicularly across an already-placed word.
  fn candidate_positions(&self, word: &str) -> Vec<(Pos, Direction)> {
    let mut candidates = vec![];
    for placed in &self.placed {
      let direction = placed.direction.perpendicular();
      for (own_idx, c) in word.chars().enumerate() {
        for (placed_c, cross) in placed.letter_positions() {
          if placed_c == c {
            candidates.push((cross - direction.delta() * own_idx as i32, direction));
          }
        }
      }
    }
    candidates
  }

  /// Normalizes coordinates so the top-left placed cell is the origin and
  /// freezes the result.
  pub fn freeze(self) -> CrosswordLayout {
    let Some(bounds) = self.bounds else {
      return CrosswordLayout::empty();
    };

    let shift = Pos::zero() - bounds.min;
    let placements = self
      .placed
      .into_iter()
      .map(|mut placed| {
        placed.start += shift;
        placed
      })
      .collect_vec();
    let intersections = self
      .cells
      .values()
      .filter(|occupant| occupant.owners.len() >= 2)
      .count() as u32;
    let score = score_layout(
      placements.len(),
      bounds.width(),
      bounds.height(),
      intersections,
    );

    CrosswordLayout {
      placements,
      grid_size: bounds.width().max(bounds.height()),
      intersections,
      score,
    }
  }
}

/// Whole-layout score. Completeness dominates: one placed word outweighs
/// any plausible area or aspect penalty at this puzzle scale.
pub fn score_layout(word_count: usize, width: u32, height: u32, intersections: u32) -> f64 {
  if word_count == 0 {
    return 0.0;
  }
  // Aspect ratio as short/long, so the penalty tops out at
  // LAYOUT_ASPECT_PENALTY no matter how strip-shaped the grid gets.
  let aspect = width.min(height).max(1) as f64 / width.max(height).max(1) as f64;
  WORD_PLACED_SCORE * word_count as f64
    - (width as u64 * height as u64) as f64 / LAYOUT_AREA_DIVISOR
    - LAYOUT_ASPECT_PENALTY * (1.0 - aspect)
    + LAYOUT_INTERSECTION_SCORE * intersections as f64
}

/// One greedy generation attempt: words arrive longest-first, the first
/// goes across at the origin, and each later word takes its best-scoring
/// valid crossing or is dropped from this attempt.
pub fn generate_layout(words: &[WordEntry], rng: &mut StdRng) -> CrosswordLayout {
  let mut builder = LayoutBuilder::new();
  let mut words = words.iter();

  if let Some(first) = words.next() {
    builder.place(first, Pos::zero(), Direction::Across);
  }

  for entry in words {
    let candidates = builder
      .candidate_positions(&entry.word)
      .into_iter()
      .filter(|&(start, direction)| builder.is_valid_placement(&entry.word, start, direction))
      .map(|(start, direction)| {
        (
          start,
          direction,
          builder.placement_score(&entry.word, start, direction),
        )
      })
      .collect_vec();

    let best_score = candidates
      .iter()
      .map(|&(_, _, score)| score)
      .fold(f64::NEG_INFINITY, f64::max);
    let top: Vec<_> = candidates
      .iter()
      .filter(|&&(_, _, score)| score == best_score)
      .collect();
    if let Some(&&(start, direction, _)) = top.choose(rng) {
      builder.place(entry, start, direction);
    }
    // No valid crossing: the word sits out this attempt.
  }

  builder.freeze()
}

/// A frozen candidate solution: placements in placement order, all
/// coordinates non-negative, with the square grid dimension and global
/// score derived at freeze time.
#[derive(Clone, Debug)]
pub struct CrosswordLayout {
  placements: Vec<PlacedWord>,
  grid_size: u32,
  intersections: u32,
  score: f64,
}

impl CrosswordLayout {
  pub fn empty() -> Self {
    Self {
      placements: vec![],
      grid_size: 0,
      intersections: 0,
      score: 0.0,
    }
  }

  pub fn placements(&self) -> &[PlacedWord] {
    &self.placements
  }

  pub fn words_placed(&self) -> usize {
    self.placements.len()
  }

  pub fn grid_size(&self) -> u32 {
    self.grid_size
  }

  pub fn intersections(&self) -> u32 {
    self.intersections
  }

  pub fn score(&self) -> f64 {
    self.score
  }
}

impl Display for CrosswordLayout {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let size = self.grid_size as usize;
    let mut rows = vec![vec!['.'; size]; size];
    for placed in &self.placements {
      for (c, pos) in placed.letter_positions() {
        rows[pos.y as usize][pos.x as usize] = c;
      }
    }
    for row in rows {
      for c in row {
        write!(f, "{c} ")?;
      }
      writeln!(f)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use std::collections::HashMap;

  use googletest::prelude::*;
  use rand::{rngs::StdRng, SeedableRng};
  use util::pos::Pos;

  use crate::{placement::Direction, word_list::WordEntry};

  use super::{generate_layout, score_layout, CrosswordLayout, LayoutBuilder};

  fn entry(id: u32, word: &str) -> WordEntry {
    WordEntry::new(id, word, "", "")
  }

  fn builder_with(words: &[(&str, Pos, Direction)]) -> LayoutBuilder {
    let mut builder = LayoutBuilder::new();
    for (id, &(word, start, direction)) in words.iter().enumerate() {
      builder.place(&entry(id as u32, word), start, direction);
    }
    builder
  }

  /// Every cell shared by two placements must hold the same letter for
  /// both.
  fn assert_letters_agree(layout: &CrosswordLayout) {
    let mut seen: HashMap<Pos, char> = HashMap::new();
    for placed in layout.placements() {
      for (c, pos) in placed.letter_positions() {
        if let Some(&existing) = seen.get(&pos) {
          assert_that!(existing, eq(c));
        }
        seen.insert(pos, c);
      }
    }
  }

  #[gtest]
  fn test_rejects_letter_mismatch() {
    let builder = builder_with(&[("CAT", Pos::zero(), Direction::Across)]);
    // "DOG" down through the 'A' of CAT: no shared letter at the cross.
    expect_false!(builder.is_valid_placement("DOG", Pos { x: 1, y: 0 }, Direction::Down));
  }

  #[gtest]
  fn test_accepts_perpendicular_crossing() {
    let builder = builder_with(&[("CAT", Pos::zero(), Direction::Across)]);
    // "ART" down through the 'A' of CAT.
    expect_true!(builder.is_valid_placement("ART", Pos { x: 1, y: 0 }, Direction::Down));
  }

  #[gtest]
  fn test_rejects_parallel_overlap() {
    let builder = builder_with(&[("CAT", Pos::zero(), Direction::Across)]);
    // "ATE" across starting on CAT's 'A' would run along the same row.
    expect_false!(builder.is_valid_placement("ATE", Pos { x: 1, y: 0 }, Direction::Across));
  }

  #[gtest]
  fn test_rejects_inline_abutment() {
    let builder = builder_with(&[("CAT", Pos::zero(), Direction::Across)]);
    // "SUN" across immediately after CAT would read as one merged word.
    expect_false!(builder.is_valid_placement("SUN", Pos { x: 3, y: 0 }, Direction::Across));
    expect_false!(builder.is_valid_placement("SUN", Pos { x: -3, y: 0 }, Direction::Across));
  }

  #[gtest]
  fn test_rejects_interior_side_touch() {
    let builder = builder_with(&[("CAT", Pos::zero(), Direction::Across)]);
    // "BOB" down one column right of CAT: its middle letter would sit
    // beside CAT's 'T' without crossing it.
    expect_false!(builder.is_valid_placement("BOB", Pos { x: 3, y: -1 }, Direction::Down));
    // A parallel word directly under CAT touches along its length.
    expect_false!(builder.is_valid_placement("MAD", Pos { x: 0, y: 1 }, Direction::Across));
  }

  #[gtest]
  fn test_crossing_scores_above_sprawl() {
    let builder = builder_with(&[("CAT", Pos::zero(), Direction::Across)]);
    let crossing = builder.placement_score("ART", Pos { x: 1, y: 0 }, Direction::Down);
    let detached = builder.placement_score("ART", Pos { x: 5, y: 3 }, Direction::Down);
    expect_that!(crossing, gt(detached));
  }

  #[gtest]
  fn test_completeness_dominates_layout_score() {
    // A full 5-word layout beats a slightly tighter 4-word layout.
    let all_placed = score_layout(5, 9, 9, 4);
    let one_dropped = score_layout(4, 7, 7, 4);
    expect_that!(all_placed, gt(one_dropped));
  }

  #[gtest]
  fn test_empty_layout_scores_zero() {
    expect_that!(score_layout(0, 0, 0, 0), eq(0.0));
  }

  #[gtest]
  fn test_aspect_penalty_is_bounded() {
    // Same word count, area, and crossings; only the shape differs. The
    // strip loses points, but never more than the full aspect penalty.
    let square = score_layout(4, 6, 6, 3);
    let strip = score_layout(4, 36, 1, 3);
    expect_that!(square, gt(strip));
    expect_that!(square - strip, le(10.0));
  }

  #[gtest]
  fn test_generate_crosses_cat_and_car() {
    let words = [entry(0, "CAT"), entry(1, "CAR")];
    let mut rng = StdRng::seed_from_u64(7);
    let layout = generate_layout(&words, &mut rng);
    assert_that!(layout.words_placed(), eq(2));
    expect_that!(layout.intersections(), eq(1));
    assert_letters_agree(&layout);
  }

  #[gtest]
  fn test_generate_single_word_is_horizontal() {
    let words = [entry(0, "ABCDEFGH")];
    let mut rng = StdRng::seed_from_u64(0);
    let layout = generate_layout(&words, &mut rng);
    assert_that!(layout.words_placed(), eq(1));
    expect_that!(layout.grid_size(), ge(8));
    let placed = &layout.placements()[0];
    expect_that!(placed.direction, eq(Direction::Across));
    expect_that!(placed.start, eq(Pos::zero()));
  }

  #[gtest]
  fn test_generate_drops_disjoint_word() {
    let words = [entry(0, "ABC"), entry(1, "XYZ")];
    let mut rng = StdRng::seed_from_u64(3);
    let layout = generate_layout(&words, &mut rng);
    // No shared letters, so only the anchor word can be placed.
    assert_that!(layout.words_placed(), eq(1));
    expect_that!(layout.placements()[0].entry.word.as_str(), eq("ABC"));
  }

  #[gtest]
  fn test_frozen_coordinates_are_normalized() {
    let words = [
      entry(0, "LETTERS"),
      entry(1, "TABLE"),
      entry(2, "STONE"),
      entry(3, "EAGLE"),
    ];
    let mut rng = StdRng::seed_from_u64(11);
    let layout = generate_layout(&words, &mut rng);
    for placed in layout.placements() {
      for pos in placed.cells() {
        expect_that!(pos.x, ge(0));
        expect_that!(pos.y, ge(0));
        expect_that!(pos.x, lt(layout.grid_size() as i32));
        expect_that!(pos.y, lt(layout.grid_size() as i32));
      }
    }
    assert_letters_agree(&layout);
  }
}
