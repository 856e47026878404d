//! Errors raised while driving the terminal flow.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
  #[error("invalid menu choice {input:?}, expected 1-{max}")]
  InvalidMenuChoice { input: String, max: u8 },

  /// Standard input was closed. Ends the session loop cleanly.
  #[error("end of input")]
  EndOfInput,

  #[error("terminal i/o error: {0}")]
  Io(#[from] io::Error),

  #[error(transparent)]
  Portal(#[from] smartstudent_core::Error),
}

/// Parse a menu selection in `1..=max`.
pub fn parse_choice(input: &str, max: u8) -> Result<u8, FlowError> {
  input
    .trim()
    .parse::<u8>()
    .ok()
    .filter(|n| (1..=max).contains(n))
    .ok_or_else(|| FlowError::InvalidMenuChoice {
      input: input.trim().to_string(),
      max,
    })
}
