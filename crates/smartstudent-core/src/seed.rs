//! Fixture data loaded once at startup.
//!
//! The built-in fixture is embedded at compile time. Alternative fixtures use
//! the same JSON shape.

use serde::{Deserialize, Serialize};

use crate::{Result, route::Route, student::Mentor};

/// The fixture shipped with the portal.
pub const BUILTIN_SEED: &str = include_str!("../fixtures/seed.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
  pub id:     String,
  pub secret: String,
  pub name:   String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRecord {
  pub id:     String,
  pub title:  String,
  /// Mentor *id*; resolved to the mentor's name when the portal is built.
  pub mentor: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
  pub campus:   String,
  pub students: Vec<StudentRecord>,
  pub mentors:  Vec<Mentor>,
  pub books:    Vec<BookRecord>,
  #[serde(default)]
  pub routes:   Vec<Route>,
}

impl SeedData {
  pub fn builtin() -> Result<Self> { Self::from_json(BUILTIN_SEED) }

  pub fn from_json(raw: &str) -> Result<Self> { Ok(serde_json::from_str(raw)?) }
}
