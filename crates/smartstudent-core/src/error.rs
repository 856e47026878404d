//! Error types for `smartstudent-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid student id or password")]
  InvalidCredentials,

  #[error("student not found: {0}")]
  StudentNotFound(String),

  #[error("mentor not found: {0}")]
  MentorNotFound(String),

  /// No book with this id exists within the requested mentor scope.
  #[error("book not found: {0}")]
  BookNotFound(String),

  #[error("book {id} ({title:?}) is already borrowed")]
  BookUnavailable { id: String, title: String },

  #[error("duplicate book id: {0}")]
  DuplicateBook(String),

  #[error("duplicate student id: {0}")]
  DuplicateStudent(String),

  #[error("duplicate mentor id: {0}")]
  DuplicateMentor(String),

  /// The library is only open to students registered for a consultation.
  #[error("student {0} has not registered for a consultation")]
  ConsultationRequired(String),

  #[error("no route from station {0:?}")]
  UnknownStation(String),

  #[error("seed data error: {0}")]
  Seed(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
