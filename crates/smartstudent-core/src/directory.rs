//! Student and mentor directory.

use std::collections::BTreeMap;

use crate::{
  Error, Result,
  student::{Mentor, Student},
};

#[derive(Debug, Clone, Default)]
pub struct Directory {
  students: BTreeMap<String, Student>,
  mentors:  BTreeMap<String, Mentor>,
}

impl Directory {
  pub fn new() -> Self { Self::default() }

  pub fn add_student(&mut self, student: Student) -> Result<()> {
    if self.students.contains_key(&student.id) {
      return Err(Error::DuplicateStudent(student.id));
    }
    self.students.insert(student.id.clone(), student);
    Ok(())
  }

  pub fn add_mentor(&mut self, mentor: Mentor) -> Result<()> {
    if self.mentors.contains_key(&mentor.id) {
      return Err(Error::DuplicateMentor(mentor.id));
    }
    self.mentors.insert(mentor.id.clone(), mentor);
    Ok(())
  }

  /// The student with `id`, if `secret` matches exactly.
  pub fn authenticate(&self, id: &str, secret: &str) -> Option<&Student> {
    self.students.get(id).filter(|s| s.verify_secret(secret))
  }

  pub fn student(&self, id: &str) -> Result<&Student> {
    self
      .students
      .get(id)
      .ok_or_else(|| Error::StudentNotFound(id.to_string()))
  }

  pub fn student_mut(&mut self, id: &str) -> Result<&mut Student> {
    self
      .students
      .get_mut(id)
      .ok_or_else(|| Error::StudentNotFound(id.to_string()))
  }

  pub fn mentor(&self, id: &str) -> Option<&Mentor> { self.mentors.get(id) }

  /// All mentors, ordered by id.
  pub fn mentors(&self) -> impl Iterator<Item = &Mentor> {
    self.mentors.values()
  }

  pub fn students(&self) -> impl Iterator<Item = &Student> {
    self.students.values()
  }
}
