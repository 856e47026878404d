//! Menu flow controller.
//!
//! Drives a [`Portal`] from line-based terminal input. The loop alternates
//! between the login screen and the main menu for as long as input lasts; the
//! [`Session`] from a successful login is owned by that loop and lent to each
//! submenu.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use smartstudent_core::{
  Error, Portal, Session,
  book::{Book, Catalog},
};

use crate::{
  error::{FlowError, parse_choice},
  settings::Settings,
  ui::{self, tables},
};

type Result<T, E = FlowError> = std::result::Result<T, E>;

const MAIN_MENU: [&str; 6] = [
  "Academic Consultation",
  "Library",
  "Borrowing History",
  "Activity History",
  "Campus Navigation",
  "Logout",
];

const CONSULTATION_MENU: [&str; 3] = ["Register Consultation", "View Queue", "Back"];

const LIBRARY_MENU: [&str; 5] = [
  "Borrow Book",
  "Search Books",
  "Filter Books (Available)",
  "Reset Filter",
  "Back to Main Menu",
];

// ─── Library view ─────────────────────────────────────────────────────────────

/// What the library table currently shows. Recomputed from the catalog on
/// every redraw, so loans show up immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LibraryView {
  All,
  Search(String),
  Available,
}

impl LibraryView {
  fn books(&self, catalog: &Catalog, scope: &str) -> Vec<Book> {
    match self {
      Self::All => catalog.in_scope(scope),
      Self::Search(keyword) => catalog.search(keyword, scope),
      Self::Available => catalog.filter_available(scope),
    }
  }
}

// ─── Flow ─────────────────────────────────────────────────────────────────────

pub struct Flow<R, W> {
  portal:   Portal,
  input:    R,
  out:      W,
  settings: Settings,
  today:    Box<dyn Fn() -> NaiveDate>,
}

impl<R: BufRead, W: Write> Flow<R, W> {
  pub fn new(portal: Portal, input: R, out: W, settings: Settings) -> Self {
    Self {
      portal,
      input,
      out,
      settings,
      today: Box::new(|| Local::now().date_naive()),
    }
  }

  /// Replace the local-date clock used to stamp registrations and loans.
  #[cfg(test)]
  pub fn with_clock(mut self, today: impl Fn() -> NaiveDate + 'static) -> Self {
    self.today = Box::new(today);
    self
  }

  #[cfg(test)]
  pub fn portal(&self) -> &Portal { &self.portal }

  #[cfg(test)]
  pub fn output(&self) -> &W { &self.out }

  /// Run until input is exhausted. Closing input is a clean exit, not an
  /// error.
  pub fn run(&mut self) -> Result<()> {
    match self.serve() {
      Err(FlowError::EndOfInput) => {
        tracing::debug!("input closed");
        Ok(())
      }
      other => other,
    }
  }

  fn serve(&mut self) -> Result<()> {
    loop {
      let session = self.login()?;
      self.main_menu(session)?;
    }
  }

  // ── Input helpers ─────────────────────────────────────────────────────────

  /// One line without its terminator.
  fn read_line(&mut self) -> Result<String> {
    let mut line = String::new();
    if self.input.read_line(&mut line)? == 0 {
      return Err(FlowError::EndOfInput);
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
  }

  /// Prompt and read a whitespace-trimmed answer.
  fn ask(&mut self, label: &str) -> Result<String> {
    ui::prompt(&mut self.out, label)?;
    Ok(self.read_line()?.trim().to_string())
  }

  /// Prompt for a menu number in `1..=max`. An invalid answer is reported and
  /// acknowledged here and yields `None`.
  fn choose(&mut self, max: u8) -> Result<Option<u8>> {
    let answer = self.ask(&format!("\n   Choose menu (1 - {max}) = "))?;
    match parse_choice(&answer, max) {
      Ok(n) => Ok(Some(n)),
      Err(FlowError::InvalidMenuChoice { input, .. }) => {
        tracing::debug!(%input, max, "invalid menu choice");
        ui::notice(&mut self.out, "Invalid choice. Please try again.")?;
        self.pause()?;
        Ok(None)
      }
      Err(e) => Err(e),
    }
  }

  fn pause(&mut self) -> Result<()> {
    ui::prompt(&mut self.out, "   Press 'Enter' to continue...")?;
    self.read_line()?;
    Ok(())
  }

  fn screen(&mut self) -> Result<()> {
    if self.settings.clear_screen {
      ui::clear(&mut self.out)?;
    }
    ui::banner(&mut self.out, self.portal.routes().campus())?;
    Ok(())
  }

  fn format_date(&self, date: NaiveDate) -> String {
    date.format(&self.settings.date_format).to_string()
  }

  // ── Login ─────────────────────────────────────────────────────────────────

  fn login(&mut self) -> Result<Session> {
    let mut rejected = false;
    loop {
      self.screen()?;
      if rejected {
        writeln!(self.out, "   !!! Username / password is incorrect.\n")?;
      }
      writeln!(self.out, "   LOGIN\n")?;
      let id = self.ask("   > Username (student ID) : ")?;
      let secret = self.ask("   > Password             : ")?;

      match self.portal.login(&id, &secret) {
        Ok(session) => {
          let name = self.portal.student(&session)?.name.clone();
          ui::notice(&mut self.out, &format!("Login successful! Welcome, {name}!"))?;
          self.pause()?;
          return Ok(session);
        }
        Err(Error::InvalidCredentials) => rejected = true,
        Err(e) => return Err(e.into()),
      }
    }
  }

  // ── Main menu ─────────────────────────────────────────────────────────────

  fn main_menu(&mut self, session: Session) -> Result<()> {
    loop {
      self.screen()?;
      let name = self.portal.student(&session)?.name.clone();
      writeln!(self.out, "   Welcome to the Smart.Student portal, {name}\n")?;
      ui::menu(&mut self.out, &MAIN_MENU)?;

      let Some(choice) = self.choose(6)? else {
        continue;
      };
      match choice {
        1 => self.consultation(&session)?,
        2 => self.library(&session)?,
        3 => self.borrow_history(&session)?,
        4 => self.activity_log(&session)?,
        5 => self.navigation()?,
        _ => {
          ui::notice(&mut self.out, &format!("{name} logged out successfully."))?;
          self.pause()?;
          tracing::info!(student = %session.student_id(), "logout");
          return Ok(());
        }
      }
    }
  }

  // ── Consultation ──────────────────────────────────────────────────────────

  fn consultation(&mut self, session: &Session) -> Result<()> {
    self.screen()?;
    writeln!(self.out, "   Academic Consultation Queue\n")?;
    self.queue_status(session)?;

    if self.portal.student(session)?.consultation {
      return self.pause();
    }

    tables::mentors(&mut self.out, self.portal.directory().mentors())?;
    ui::menu(&mut self.out, &CONSULTATION_MENU)?;

    match self.choose(3)? {
      Some(1) => {
        let mentor_id = self.ask("\n   Enter the mentor ID for consultation: ")?;
        let today = (self.today)();
        match self.portal.register_consultation(session, &mentor_id, today) {
          Ok(request) => {
            let msg = format!(
              "{} has successfully registered for consultation with {}.",
              request.student_name, request.mentor_name
            );
            ui::notice(&mut self.out, &msg)?;
          }
          Err(Error::MentorNotFound(_)) => {
            ui::notice(&mut self.out, "Mentor ID not found. Registration failed.")?;
          }
          Err(e) => return Err(e.into()),
        }
        self.pause()
      }
      Some(2) => {
        self.screen()?;
        writeln!(self.out, "   View Academic Consultation Queue\n")?;
        if !self.queue_status(session)? {
          writeln!(self.out, "   No consultation queue registered yet.\n")?;
        }
        self.pause()
      }
      _ => Ok(()),
    }
  }

  /// Print the student's queue and position. Returns whether they were found.
  fn queue_status(&mut self, session: &Session) -> Result<bool> {
    let Some(status) = self.portal.consultation_status(session)? else {
      return Ok(false);
    };
    let dates: Vec<String> = status
      .queue
      .iter()
      .map(|r| self.format_date(r.registered_on))
      .collect();
    tables::queue(&mut self.out, &status.queue, &dates)?;
    writeln!(self.out, "   You are registered in queue: [{}]", status.position)?;
    writeln!(self.out, "   Consultation with {}.\n", status.mentor_name)?;
    Ok(true)
  }

  // ── Library ───────────────────────────────────────────────────────────────

  fn library(&mut self, session: &Session) -> Result<()> {
    let scope = match self.portal.library_scope(session) {
      Ok(scope) => scope.to_string(),
      Err(Error::ConsultationRequired(_)) => {
        self.screen()?;
        writeln!(
          self.out,
          "   !!! You must choose a mentor for academic consultation first.\n"
        )?;
        return self.pause();
      }
      Err(e) => return Err(e.into()),
    };

    let mut view = LibraryView::All;
    loop {
      self.screen()?;
      writeln!(self.out, "   Reference library books ({scope})\n")?;
      let books = view.books(self.portal.catalog(), &scope);
      tables::books(&mut self.out, &books)?;
      ui::menu(&mut self.out, &LIBRARY_MENU)?;

      let Some(choice) = self.choose(5)? else {
        view = LibraryView::All;
        continue;
      };
      match choice {
        1 => {
          let book_id = self.ask("   Enter the book ID: ")?;
          self.borrow(session, &book_id)?;
          view = LibraryView::All;
        }
        2 => {
          ui::prompt(&mut self.out, "   Enter a book keyword: ")?;
          view = LibraryView::Search(self.read_line()?);
        }
        3 => view = LibraryView::Available,
        4 => view = LibraryView::All,
        _ => return Ok(()),
      }
    }
  }

  fn borrow(&mut self, session: &Session, book_id: &str) -> Result<()> {
    let today = (self.today)();
    match self.portal.borrow_book(session, book_id, today) {
      Ok(book) => {
        let msg = format!("Book \"{}\" was borrowed successfully.", book.title);
        ui::notice(&mut self.out, &msg)?;
      }
      Err(Error::BookUnavailable { title, .. }) => {
        let msg = format!("Book \"{title}\" is not available (already borrowed).");
        ui::notice(&mut self.out, &msg)?;
      }
      Err(Error::BookNotFound(_)) => {
        ui::notice(
          &mut self.out,
          "Book ID not found or not referenced by this mentor.",
        )?;
      }
      Err(e) => return Err(e.into()),
    }
    self.pause()
  }

  // ── History ───────────────────────────────────────────────────────────────

  fn borrow_history(&mut self, session: &Session) -> Result<()> {
    self.screen()?;
    let student = self.portal.student(session)?;
    writeln!(self.out, "   Borrowing history of {}\n", student.name)?;
    if student.borrow_history.is_empty() {
      writeln!(self.out, "   !!! No books borrowed yet.")?;
    } else {
      tables::history(
        &mut self.out,
        "Book Title",
        &student.borrow_history,
        &self.settings.date_format,
      )?;
    }
    writeln!(self.out)?;
    self.pause()
  }

  fn activity_log(&mut self, session: &Session) -> Result<()> {
    self.screen()?;
    let student = self.portal.student(session)?;
    writeln!(self.out, "   Activity history of {}\n", student.name)?;
    if student.activity_log.is_empty() {
      writeln!(self.out, "   No activity yet.")?;
    } else {
      tables::history(
        &mut self.out,
        "Activity",
        &student.activity_log,
        &self.settings.date_format,
      )?;
    }
    writeln!(self.out)?;
    self.pause()
  }

  // ── Navigation ────────────────────────────────────────────────────────────

  fn navigation(&mut self) -> Result<()> {
    self.screen()?;
    writeln!(self.out, "   Campus Navigation\n")?;

    let stations: Vec<String> = self
      .portal
      .routes()
      .stations()
      .map(str::to_string)
      .collect();
    let mut entries: Vec<String> = stations.iter().map(|s| format!("{s} Station")).collect();
    entries.push("Back".to_string());
    ui::menu(&mut self.out, &entries)?;

    let max = u8::try_from(entries.len()).unwrap_or(u8::MAX);
    let Some(choice) = self.choose(max)? else {
      return Ok(());
    };
    match stations.get(usize::from(choice) - 1) {
      Some(station) => self.show_route(station),
      None => Ok(()),
    }
  }

  fn show_route(&mut self, station: &str) -> Result<()> {
    let route = match self.portal.routes().route(station) {
      Ok(route) => route.clone(),
      Err(Error::UnknownStation(_)) => {
        ui::notice(&mut self.out, "No route from that station yet.")?;
        return self.pause();
      }
      Err(e) => return Err(e.into()),
    };

    self.screen()?;
    writeln!(
      self.out,
      "   {station} to {}\n",
      self.portal.routes().campus()
    )?;
    for (n, segment) in route.segments.iter().enumerate() {
      writeln!(self.out, "   {}. {segment}", n + 1)?;
    }
    writeln!(self.out)?;
    self.pause()
  }
}
