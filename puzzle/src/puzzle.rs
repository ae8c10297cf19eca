use std::fmt::{self, Display, Formatter};

use layout_gen::layout::CrosswordLayout;
use rand::{
  rngs::StdRng,
  seq::{index, IndexedRandom},
  Rng,
};
use util::{
  error::{WeaveError, WeaveResult},
  grid::Grid,
  pos::Pos,
};

use crate::cell::CellState;

/// Letters used to fill a handful of unused cells so players cannot read
/// word boundaries off the blank shape of the grid.
const DECOY_LETTERS: [char; 12] = ['A', 'E', 'I', 'O', 'U', 'L', 'N', 'R', 'S', 'T', 'M', 'C'];
const DECOY_PROBABILITY: f64 = 0.1;
const MAX_DECOYS: usize = 10;
const MAX_HINTS_PER_WORD: usize = 2;

/// A playable puzzle: the frozen layout it was built from plus the cell
/// grid gameplay mutates. Materialization writes solution letters and
/// owners, then injects preset hint letters and decoys; everything after
/// that is player-driven.
pub struct Puzzle {
  layout: CrosswordLayout,
  grid: Grid<CellState>,
}

impl Puzzle {
  pub fn materialize(layout: CrosswordLayout, rng: &mut StdRng) -> WeaveResult<Self> {
    let size = layout.grid_size();
    let mut grid: Grid<CellState> = Grid::new(size, size);

    for placed in layout.placements() {
      for (c, pos) in placed.letter_positions() {
        let cell = grid
          .get_mut(pos)
          .ok_or_else(|| WeaveError::Internal(format!("Position {pos} is out of bounds")))?;
        match cell.correct_letter {
          Some(existing) => {
            if existing != c {
              return Err(
                WeaveError::Internal(format!(
                  "Conflicting letter assignment at position {pos}: {c} vs {existing}"
                ))
                .into(),
              );
            }
          }
          None => cell.correct_letter = Some(c),
        }
        cell.word_ids.push(placed.entry.id);
      }
    }

    Self::inject_hints(&layout, &mut grid, rng)?;
    Self::inject_decoys(&mut grid, rng);

    Ok(Self { layout, grid })
  }

  /// Pre-fills 1-2 interior letters of every word as immutable hints. The
  /// first and last letters of a word are never chosen; words too short to
  /// have interior letters get no hint.
  fn inject_hints(
    layout: &CrosswordLayout,
    grid: &mut Grid<CellState>,
    rng: &mut StdRng,
  ) -> WeaveResult {
    for placed in layout.placements() {
      let interior = placed.len().saturating_sub(2);
      if interior == 0 {
        continue;
      }
      let hint_count = rng.random_range(1..=interior.min(MAX_HINTS_PER_WORD));
      for interior_idx in index::sample(rng, interior, hint_count) {
        let pos = placed.cell(interior_idx + 1);
        let cell = grid
          .get_mut(pos)
          .ok_or_else(|| WeaveError::Internal(format!("Hint position {pos} is out of bounds")))?;
        cell.letter = cell.correct_letter;
        cell.is_preset = true;
      }
    }
    Ok(())
  }

  /// Scatters preset letters over cells belonging to no word, roughly one
  /// cell in ten, hard-capped so the board stays mostly open.
  fn inject_decoys(grid: &mut Grid<CellState>, rng: &mut StdRng) {
    let mut decoys = 0;
    for pos in grid.positions() {
      if decoys >= MAX_DECOYS {
        break;
      }
      let Some(cell) = grid.get_mut(pos) else {
        continue;
      };
      if cell.in_word() || !rng.random_bool(DECOY_PROBABILITY) {
        continue;
      }
      if let Some(&letter) = DECOY_LETTERS.choose(rng) {
        cell.letter = Some(letter);
        cell.is_preset = true;
        decoys += 1;
      }
    }
  }

  pub fn size(&self) -> u32 {
    self.layout.grid_size()
  }

  pub fn layout(&self) -> &CrosswordLayout {
    &self.layout
  }

  pub fn grid(&self) -> &Grid<CellState> {
    &self.grid
  }

  pub fn cell(&self, pos: Pos) -> WeaveResult<&CellState> {
    self
      .grid
      .get(pos)
      .ok_or_else(|| WeaveError::Internal(format!("Pos is out of bounds: {pos}")).into())
  }

  fn cell_mut(&mut self, pos: Pos) -> WeaveResult<&mut CellState> {
    self.grid.get_mut(pos).ok_or_else(|| {
      WeaveError::Internal(format!("Mutable access pos is out of bounds: {pos}")).into()
    })
  }

  /// Types a letter into a word cell. Preset cells and cells outside every
  /// word are untouchable; returns whether the letter landed.
  pub fn enter_letter(&mut self, pos: Pos, letter: char) -> WeaveResult<bool> {
    let cell = self.cell_mut(pos)?;
    if cell.is_preset || !cell.in_word() {
      return Ok(false);
    }
    cell.letter = Some(letter.to_ascii_uppercase());
    Ok(true)
  }

  pub fn erase_letter(&mut self, pos: Pos) -> WeaveResult<bool> {
    let cell = self.cell_mut(pos)?;
    if cell.is_preset || !cell.in_word() {
      return Ok(false);
    }
    cell.letter = None;
    Ok(true)
  }

  /// Reveals the correct letter of a non-preset word cell as a hint.
  pub fn reveal_cell(&mut self, pos: Pos) -> WeaveResult<bool> {
    let cell = self.cell_mut(pos)?;
    if cell.is_preset || !cell.in_word() {
      return Ok(false);
    }
    cell.letter = cell.correct_letter;
    cell.is_revealed = true;
    Ok(true)
  }

  pub fn word_complete(&self, id: u32) -> bool {
    self
      .layout
      .placements()
      .iter()
      .filter(|placed| placed.entry.id == id)
      .any(|placed| {
        placed.cells().all(|pos| {
          self
            .grid
            .get(pos)
            .is_some_and(CellState::is_filled_correctly)
        })
      })
  }

  pub fn solved(&self) -> bool {
    self
      .layout
      .placements()
      .iter()
      .all(|placed| self.word_complete(placed.entry.id))
  }
}

impl Display for Puzzle {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.grid)
  }
}
