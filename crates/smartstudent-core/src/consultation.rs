//! Academic consultation queues.
//!
//! Every mentor owns exactly one FIFO queue. Requests are appended at
//! registration and never removed; there is no serve operation.

use std::collections::VecDeque;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  student::{Mentor, Student},
};

/// A student's place in a mentor's queue. The sequence number shown to users
/// is derived from queue position and not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRequest {
  pub student_name:  String,
  pub student_id:    String,
  pub registered_on: NaiveDate,
  pub mentor_name:   String,
}

/// Where a student was found by [`ConsultationQueues::find_position`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuePosition {
  /// 1-based.
  pub position:    usize,
  pub mentor_name: String,
}

#[derive(Debug, Clone)]
struct MentorQueue {
  mentor_id:   String,
  mentor_name: String,
  requests:    VecDeque<ConsultationRequest>,
}

/// One queue per mentor, kept in mentor registration order. Lookups scan the
/// queues in that order.
#[derive(Debug, Clone, Default)]
pub struct ConsultationQueues {
  queues: Vec<MentorQueue>,
}

impl ConsultationQueues {
  pub fn new() -> Self { Self::default() }

  /// Open an empty queue for `mentor`. Opening a second queue for the same
  /// mentor id is rejected.
  pub fn add_mentor(&mut self, mentor: &Mentor) -> Result<()> {
    if self.queue(&mentor.id).is_some() {
      return Err(Error::DuplicateMentor(mentor.id.clone()));
    }
    self.queues.push(MentorQueue {
      mentor_id:   mentor.id.clone(),
      mentor_name: mentor.name.clone(),
      requests:    VecDeque::new(),
    });
    Ok(())
  }

  /// Queue `student` with the mentor identified by `mentor_id`.
  ///
  /// Appends the request to the tail of that mentor's queue, logs the
  /// registration in the student's activity history, and marks the student
  /// as registered. Nothing stops a student from registering again: the new
  /// request is queued as well and the student's registration is overwritten.
  pub fn register(
    &mut self,
    student: &mut Student,
    mentor_id: &str,
    on: NaiveDate,
  ) -> Result<ConsultationRequest> {
    let queue = self
      .queues
      .iter_mut()
      .find(|q| q.mentor_id == mentor_id)
      .ok_or_else(|| Error::MentorNotFound(mentor_id.to_string()))?;

    let request = ConsultationRequest {
      student_name:  student.name.clone(),
      student_id:    student.id.clone(),
      registered_on: on,
      mentor_name:   queue.mentor_name.clone(),
    };
    queue.requests.push_back(request.clone());
    tracing::debug!(
      student = %student.id,
      mentor = %queue.mentor_id,
      position = queue.requests.len(),
      "consultation request queued"
    );

    student.record_activity(
      on,
      format!("Registered for academic consultation with {}", queue.mentor_name),
    );
    student.register_with(&queue.mentor_name);

    Ok(request)
  }

  /// First occurrence of `student_id`, scanning each queue from its head.
  pub fn find_position(&self, student_id: &str) -> Option<QueuePosition> {
    self.queues.iter().find_map(|q| {
      q.requests
        .iter()
        .position(|r| r.student_id == student_id)
        .map(|idx| QueuePosition {
          position:    idx + 1,
          mentor_name: q.mentor_name.clone(),
        })
    })
  }

  /// A copy of the queue for `mentor_name` in FIFO order. Unknown mentors
  /// yield an empty snapshot.
  pub fn snapshot(&self, mentor_name: &str) -> Vec<ConsultationRequest> {
    self
      .queues
      .iter()
      .find(|q| q.mentor_name == mentor_name)
      .map(|q| q.requests.iter().cloned().collect())
      .unwrap_or_default()
  }

  fn queue(&self, mentor_id: &str) -> Option<&MentorQueue> {
    self.queues.iter().find(|q| q.mentor_id == mentor_id)
  }
}
