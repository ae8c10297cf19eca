use std::fs;

use layout_gen::word_list::WordEntry;
use serde::Deserialize;
use util::error::{WeaveError, WeaveResult};

#[derive(Debug, Deserialize)]
pub struct WordRecord {
  pub word: String,
  #[serde(default)]
  pub clue: String,
  #[serde(default)]
  pub info: String,
}

/// Reads the word list and normalizes it for the generator, which assumes
/// uppercase alphabetic words. Malformed entries are rejected here so the
/// core never sees them.
pub fn load_words(path: &str) -> WeaveResult<Vec<WordEntry>> {
  let records: Vec<WordRecord> = serde_json::from_str(&fs::read_to_string(path)?)?;
  words_from_records(records)
}

fn words_from_records(records: Vec<WordRecord>) -> WeaveResult<Vec<WordEntry>> {
  records
    .into_iter()
    .enumerate()
    .map(|(idx, record)| {
      let word = record.word.trim().to_uppercase();
      if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(
          WeaveError::InvalidInput(format!(
            "Word {:?} must be non-empty and contain only letters",
            record.word
          ))
          .into(),
        );
      }
      Ok(WordEntry::new(idx as u32, word, record.clue, record.info))
    })
    .collect()
}
