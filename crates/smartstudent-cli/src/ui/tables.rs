//! Fixed-width tables for books, queues, mentors, and history logs.

use std::io::{self, Write};

use smartstudent_core::{
  book::Book,
  consultation::ConsultationRequest,
  student::{HistoryEntry, Mentor},
};

use super::rule;

pub fn books(out: &mut impl Write, books: &[Book]) -> io::Result<()> {
  rule(out, '-')?;
  writeln!(out, "{:<10}{:<50}{:<15}", "ID", "Title", "Status")?;
  rule(out, '-')?;
  if books.is_empty() {
    writeln!(out, "No books to display.")?;
  }
  for b in books {
    let status = if b.available { "Available" } else { "Unavailable" };
    writeln!(out, "{:<10}{:<50}{:<15}", b.id, b.title, status)?;
  }
  writeln!(out)
}

/// `dates` holds the already formatted registration date of each request.
pub fn queue(
  out: &mut impl Write,
  requests: &[ConsultationRequest],
  dates: &[String],
) -> io::Result<()> {
  rule(out, '-')?;
  writeln!(
    out,
    "{:<5}{:<20}{:<20}{:<30}",
    "No.", "Student Name", "Registered", "Mentor"
  )?;
  rule(out, '-')?;
  for (n, (r, date)) in requests.iter().zip(dates).enumerate() {
    writeln!(
      out,
      "{:<5}{:<20}{:<20}{:<30}",
      n + 1,
      r.student_name,
      date,
      r.mentor_name
    )?;
  }
  writeln!(out)
}

pub fn mentors<'a>(
  out: &mut impl Write,
  mentors: impl IntoIterator<Item = &'a Mentor>,
) -> io::Result<()> {
  rule(out, '-')?;
  writeln!(out, "{:<15}{:<25}{:<40}", "Mentor ID", "Name", "Subject")?;
  rule(out, '-')?;
  for m in mentors {
    writeln!(out, "{:<15}{:<25}{:<40}", m.id, m.name, m.subject)?;
  }
  writeln!(out)
}

/// Two-column log table. `heading` names the text column.
pub fn history(
  out: &mut impl Write,
  heading: &str,
  entries: &[HistoryEntry],
  date_format: &str,
) -> io::Result<()> {
  rule(out, '-')?;
  writeln!(out, "{:<20}{:<60}", "Date", heading)?;
  rule(out, '-')?;
  for e in entries {
    writeln!(
      out,
      "{:<20}{:<60}",
      e.date.format(date_format).to_string(),
      e.text
    )?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
  }

  #[test]
  fn empty_book_table_says_so() {
    let text = render(|out| books(out, &[]));
    assert!(text.contains("No books to display."));
  }

  #[test]
  fn book_rows_show_status_labels() {
    let mentor = "Idrus Madani";
    let mut borrowed = Book::new("A1B2", "Pengantar Python untuk Pemula", mentor);
    borrowed.available = false;
    let free = Book::new("C3D4", "Desain Web Responsif dengan HTML & CSS", mentor);

    let text = render(|out| books(out, &[free, borrowed]));
    let rows: Vec<_> = text
      .lines()
      .filter(|l| l.starts_with("A1B2") || l.starts_with("C3D4"))
      .collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("C3D4"));
    assert!(rows[0].trim_end().ends_with(" Available"));
    assert!(rows[1].starts_with("A1B2"));
    assert!(rows[1].trim_end().ends_with("Unavailable"));
  }

  #[test]
  fn history_uses_date_format() {
    let entry = HistoryEntry {
      date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
      text: "Seni Desain Grafis Digital".into(),
    };
    let text = render(|out| history(out, "Title", &[entry], "%d-%m-%Y"));
    assert!(text.contains("05-01-2026"));
    assert!(text.contains("Seni Desain Grafis Digital"));
  }
}
