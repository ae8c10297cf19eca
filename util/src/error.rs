use core::fmt;
use std::{
  error::Error,
  fmt::{Display, Formatter},
};

#[derive(Debug)]
pub enum WeaveError {
  Internal(String),
  Parse(String),
  InvalidInput(String),
}

impl Display for WeaveError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      WeaveError::Internal(msg) => write!(f, "Internal error: {msg}"),
      WeaveError::Parse(msg) => write!(f, "Parse error: {msg}"),
      WeaveError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
    }
  }
}

impl Error for WeaveError {}

pub type WeaveResult<T = ()> = Result<T, Box<dyn Error>>;
