//! Students and mentors, the people the portal knows about.
//!
//! Both are seeded at startup. Mentors never change afterwards; students only
//! grow their two history logs and their consultation registration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Mentor ──────────────────────────────────────────────────────────────────

/// A lecturer students can queue to consult with. Each mentor scopes a subset
/// of the library catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
  pub id:      String,
  pub name:    String,
  pub subject: String,
}

// ─── History ─────────────────────────────────────────────────────────────────

/// One dated line in a student's borrow or activity history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
  pub date: NaiveDate,
  /// Book title for the borrow history, free text for the activity log.
  pub text: String,
}

// ─── Student ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Student {
  pub id:                String,
  pub name:              String,
  secret:                String,
  /// Append-only; insertion order is chronological.
  pub borrow_history:    Vec<HistoryEntry>,
  /// Append-only; insertion order is chronological.
  pub activity_log:      Vec<HistoryEntry>,
  /// Set once the student has queued for a consultation. Opens the library.
  pub consultation:      bool,
  /// Display name of the mentor registered with, empty until registered.
  pub registered_mentor: String,
}

impl Student {
  pub fn new(
    id: impl Into<String>,
    secret: impl Into<String>,
    name: impl Into<String>,
  ) -> Self {
    Self {
      id:                id.into(),
      name:              name.into(),
      secret:            secret.into(),
      borrow_history:    Vec::new(),
      activity_log:      Vec::new(),
      consultation:      false,
      registered_mentor: String::new(),
    }
  }

  /// Exact comparison, no normalisation.
  pub fn verify_secret(&self, secret: &str) -> bool { self.secret == secret }

  /// The mentor scope for library access, if the student has registered.
  pub fn mentor_scope(&self) -> Option<&str> {
    self.consultation.then_some(self.registered_mentor.as_str())
  }

  pub fn record_borrow(&mut self, date: NaiveDate, title: &str) {
    self.borrow_history.push(HistoryEntry {
      date,
      text: title.to_string(),
    });
    self.record_activity(date, format!("Borrowed book \"{title}\""));
  }

  pub fn record_activity(&mut self, date: NaiveDate, text: impl Into<String>) {
    self.activity_log.push(HistoryEntry {
      date,
      text: text.into(),
    });
  }

  /// Mark the student as registered with `mentor_name`. Overwrites any
  /// earlier registration.
  pub fn register_with(&mut self, mentor_name: &str) {
    self.consultation = true;
    self.registered_mentor = mentor_name.to_string();
  }
}
