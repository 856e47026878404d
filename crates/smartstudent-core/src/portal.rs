//! The `Portal` aggregate and the explicit login `Session`.
//!
//! A [`Portal`] owns every store. Callers act on behalf of a student by
//! passing the [`Session`] returned from [`Portal::login`]; there is no
//! ambient "current user".

use chrono::NaiveDate;

use crate::{
  Error, Result,
  book::{Book, Catalog},
  consultation::{ConsultationQueues, ConsultationRequest},
  directory::Directory,
  route::RouteMap,
  seed::SeedData,
  student::Student,
};

// ─── Session ─────────────────────────────────────────────────────────────────

/// Proof of a successful login. Only [`Portal::login`] creates one; logging
/// out is dropping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
  student_id: String,
}

impl Session {
  pub fn student_id(&self) -> &str { &self.student_id }
}

// ─── Consultation status ─────────────────────────────────────────────────────

/// A student's place in a consultation queue together with that whole queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationStatus {
  /// 1-based.
  pub position:    usize,
  pub mentor_name: String,
  pub queue:       Vec<ConsultationRequest>,
}

// ─── Portal ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Portal {
  directory:     Directory,
  catalog:       Catalog,
  consultations: ConsultationQueues,
  routes:        RouteMap,
}

impl Portal {
  /// Build a portal from the embedded fixture.
  pub fn seeded() -> Result<Self> { Self::from_seed(SeedData::builtin()?) }

  /// Build a portal from `seed`, rejecting duplicate ids and books that
  /// reference an unknown mentor.
  pub fn from_seed(seed: SeedData) -> Result<Self> {
    let mut directory = Directory::new();
    let mut catalog = Catalog::new();
    let mut consultations = ConsultationQueues::new();

    for mentor in seed.mentors {
      consultations.add_mentor(&mentor)?;
      directory.add_mentor(mentor)?;
    }
    for s in seed.students {
      directory.add_student(Student::new(s.id, s.secret, s.name))?;
    }
    for b in seed.books {
      let mentor = directory
        .mentor(&b.mentor)
        .ok_or_else(|| Error::MentorNotFound(b.mentor.clone()))?;
      catalog.insert(Book::new(b.id, b.title, mentor.name.clone()))?;
    }

    tracing::debug!(
      students = directory.students().count(),
      books = catalog.len(),
      routes = seed.routes.len(),
      "portal seeded"
    );

    Ok(Self {
      directory,
      catalog,
      consultations,
      routes: RouteMap::new(seed.campus, seed.routes),
    })
  }

  pub fn directory(&self) -> &Directory { &self.directory }

  pub fn catalog(&self) -> &Catalog { &self.catalog }

  pub fn consultations(&self) -> &ConsultationQueues { &self.consultations }

  pub fn routes(&self) -> &RouteMap { &self.routes }

  #[cfg(test)]
  pub(crate) fn directory_mut(&mut self) -> &mut Directory {
    &mut self.directory
  }

  // ── Session ───────────────────────────────────────────────────────────────

  pub fn login(&self, id: &str, secret: &str) -> Result<Session> {
    match self.directory.authenticate(id, secret) {
      Some(student) => {
        tracing::info!(student = %student.id, "login");
        Ok(Session {
          student_id: student.id.clone(),
        })
      }
      None => {
        tracing::warn!(student = %id, "login rejected");
        Err(Error::InvalidCredentials)
      }
    }
  }

  pub fn student(&self, session: &Session) -> Result<&Student> {
    self.directory.student(&session.student_id)
  }

  // ── Consultation ──────────────────────────────────────────────────────────

  pub fn register_consultation(
    &mut self,
    session: &Session,
    mentor_id: &str,
    on: NaiveDate,
  ) -> Result<ConsultationRequest> {
    let student = self.directory.student_mut(&session.student_id)?;
    let request = self.consultations.register(student, mentor_id, on)?;
    tracing::info!(
      student = %session.student_id,
      mentor = %request.mentor_name,
      "consultation registered"
    );
    Ok(request)
  }

  /// Where the student stands in the consultation queues, if anywhere.
  ///
  /// A student found in a queue without a registration on record is marked
  /// as registered with that queue's mentor. Registration through the portal
  /// always sets both, so this only repairs records changed elsewhere.
  pub fn consultation_status(
    &mut self,
    session: &Session,
  ) -> Result<Option<ConsultationStatus>> {
    let student = self.directory.student_mut(&session.student_id)?;
    let Some(found) = self.consultations.find_position(&student.id) else {
      return Ok(None);
    };

    if !student.consultation {
      student.register_with(&found.mentor_name);
    }

    Ok(Some(ConsultationStatus {
      position:    found.position,
      queue:       self.consultations.snapshot(&found.mentor_name),
      mentor_name: found.mentor_name,
    }))
  }

  // ── Library ───────────────────────────────────────────────────────────────

  /// The mentor scope the student may browse. Fails with
  /// [`Error::ConsultationRequired`] until the student has registered.
  pub fn library_scope(&self, session: &Session) -> Result<&str> {
    let student = self.student(session)?;
    student
      .mentor_scope()
      .ok_or_else(|| Error::ConsultationRequired(student.id.clone()))
  }

  /// Borrow `book_id` from the student's mentor scope and record it in the
  /// student's borrow and activity history.
  pub fn borrow_book(
    &mut self,
    session: &Session,
    book_id: &str,
    on: NaiveDate,
  ) -> Result<Book> {
    let student = self.directory.student_mut(&session.student_id)?;
    let scope = student
      .mentor_scope()
      .ok_or_else(|| Error::ConsultationRequired(student.id.clone()))?;

    let book = self.catalog.borrow(book_id, scope)?;
    student.record_borrow(on, &book.title);
    Ok(book)
  }
}
