//! Scripted terminal sessions against the built-in fixture.

use std::io::Cursor;

use chrono::NaiveDate;
use smartstudent_core::Portal;

use crate::{flow::Flow, settings::Settings};

type ScriptedFlow = Flow<Cursor<Vec<u8>>, Vec<u8>>;

fn today() -> NaiveDate { NaiveDate::from_ymd_opt(2026, 10, 16).unwrap() }

/// Run `lines` as terminal input until it runs out.
fn run(lines: &[&str]) -> ScriptedFlow {
  let mut input = lines.join("\n");
  input.push('\n');
  let settings = Settings {
    clear_screen: false,
    ..Settings::default()
  };
  let mut flow = Flow::new(
    Portal::seeded().expect("seeded portal"),
    Cursor::new(input.into_bytes()),
    Vec::new(),
    settings,
  )
  .with_clock(today);
  flow.run().expect("flow ends cleanly at end of input");
  flow
}

fn output(flow: &ScriptedFlow) -> String {
  String::from_utf8(flow.output().clone()).unwrap()
}

const LOGIN: [&str; 3] = ["217403", "15071999", ""];

/// Log in as Aulia Putri and register with the given mentor.
fn registered_with(mentor: &str) -> Vec<&str> {
  let mut script = LOGIN.to_vec();
  script.extend(["1", "1", mentor, ""]);
  script
}

// ─── Login ───────────────────────────────────────────────────────────────────

#[test]
fn empty_input_exits_cleanly() {
  let flow = run(&[]);
  assert!(output(&flow).contains("LOGIN"));
}

#[test]
fn wrong_password_shows_banner_and_reprompts() {
  let flow = run(&["217403", "wrong"]);
  let out = output(&flow);
  assert!(out.contains("!!! Username / password is incorrect."));
  assert_eq!(out.matches("LOGIN").count(), 2);
}

#[test]
fn successful_login_welcomes_student() {
  let flow = run(&LOGIN);
  assert!(output(&flow).contains("Login successful! Welcome, Aulia Putri!"));
}

#[test]
fn logout_returns_to_login() {
  let mut script = LOGIN.to_vec();
  script.extend(["6", "", "532618", "03082002", ""]);
  let out = output(&run(&script));
  assert!(out.contains("Aulia Putri logged out successfully."));
  assert!(out.contains("Welcome, Rafi Akbar!"));
}

// ─── Main menu ───────────────────────────────────────────────────────────────

#[test]
fn invalid_choices_are_rejected() {
  let mut script = LOGIN.to_vec();
  script.extend(["9", "", "abc", ""]);
  let out = output(&run(&script));
  assert_eq!(out.matches("Invalid choice. Please try again.").count(), 2);
  assert_eq!(out.matches("Welcome to the Smart.Student portal").count(), 3);
}

#[test]
fn library_is_gated_until_registration() {
  let mut script = LOGIN.to_vec();
  script.extend(["2", ""]);
  let out = output(&run(&script));
  assert!(out.contains("You must choose a mentor for academic consultation first."));
  assert!(!out.contains("Reference library books"));
}

#[test]
fn registered_student_sees_only_mentor_books() {
  let mut script = registered_with("DSN2");
  script.extend(["2", "5"]);
  let out = output(&run(&script));
  assert!(out.contains("Reference library books (Dwi Wulan)"));
  assert!(out.contains("K1L2"));
  assert!(out.contains("S9T0"));
  assert!(!out.contains("A1B2"));
}

// ─── Consultation ────────────────────────────────────────────────────────────

#[test]
fn unknown_mentor_registration_fails() {
  let mut script = LOGIN.to_vec();
  script.extend(["1", "1", "DSN3", ""]);
  let flow = run(&script);
  assert!(output(&flow).contains("Mentor ID not found. Registration failed."));

  let student = flow.portal().directory().student("217403").unwrap();
  assert!(!student.consultation);
}

#[test]
fn registered_student_sees_queue_position() {
  let mut script = registered_with("DSN1");
  script.extend(["1", ""]);
  let out = output(&run(&script));
  assert!(out.contains("Aulia Putri has successfully registered for consultation with Idrus Madani."));
  assert!(out.contains("You are registered in queue: [1]"));
  assert!(out.contains("Consultation with Idrus Madani."));
  assert!(out.contains("16-10-2026"));
}

#[test]
fn view_queue_when_unregistered() {
  let mut script = LOGIN.to_vec();
  script.extend(["1", "2", ""]);
  let out = output(&run(&script));
  assert!(out.contains("No consultation queue registered yet."));
}

// ─── Library ─────────────────────────────────────────────────────────────────

#[test]
fn register_borrow_and_reborrow() {
  let mut script = registered_with("DSN1");
  script.extend(["2", "1", "A1B2", "", "1", "A1B2", "", "5", "3", ""]);
  let flow = run(&script);
  let out = output(&flow);

  assert!(out.contains("Book \"Pengantar Python untuk Pemula\" was borrowed successfully."));
  assert!(out.contains(
    "Book \"Pengantar Python untuk Pemula\" is not available (already borrowed)."
  ));

  let student = flow.portal().directory().student("217403").unwrap();
  assert_eq!(student.borrow_history.len(), 1);
  assert_eq!(student.borrow_history[0].date, today());
  assert_eq!(
    student.borrow_history[0].text,
    "Pengantar Python untuk Pemula"
  );
  assert!(!flow.portal().catalog().get("A1B2").unwrap().available);
}

#[test]
fn borrow_outside_scope_is_not_found() {
  let mut script = registered_with("DSN1");
  script.extend(["2", "1", "K1L2", "", "5"]);
  let flow = run(&script);
  assert!(output(&flow).contains("Book ID not found or not referenced by this mentor."));
  assert!(flow.portal().catalog().get("K1L2").unwrap().available);
}

#[test]
fn search_narrows_the_table() {
  let mut script = registered_with("DSN1");
  script.extend(["2", "2", "PYTHON", "5"]);
  let out = output(&run(&script));

  let tail = &out[out.rfind("Enter a book keyword").unwrap()..];
  let table = &tail[..tail.find("Choose menu").unwrap()];
  assert!(table.contains("A1B2"));
  assert!(!table.contains("C3D4"));
}

#[test]
fn filter_hides_borrowed_books() {
  let mut script = registered_with("DSN1");
  script.extend(["2", "1", "E5F6", "", "3", "5"]);
  let out = output(&run(&script));

  // The last table drawn is the filtered one.
  let start = out.rfind("Reference library books").unwrap();
  let table = &out[start..];
  assert!(table.contains("A1B2"));
  assert!(!table.contains("E5F6"));
}

// ─── History and navigation ──────────────────────────────────────────────────

#[test]
fn empty_borrow_history_message() {
  let mut script = LOGIN.to_vec();
  script.extend(["3", ""]);
  assert!(output(&run(&script)).contains("!!! No books borrowed yet."));
}

#[test]
fn activity_log_lists_actions_in_order() {
  let mut script = registered_with("DSN1");
  script.extend(["2", "1", "A1B2", "", "5", "4", ""]);
  let out = output(&run(&script));

  let registered = out
    .find("16-10-2026          Registered for academic consultation with Idrus Madani")
    .unwrap();
  let borrowed = out
    .find("Borrowed book \"Pengantar Python untuk Pemula\"")
    .unwrap();
  assert!(registered < borrowed);
}

#[test]
fn navigation_prints_numbered_route() {
  let mut script = LOGIN.to_vec();
  script.extend(["5", "4", ""]);
  let out = output(&run(&script));
  assert!(out.contains("Tanjung Barat to Universitas Cakrawala"));
  assert!(out.contains("   1. Tanjung Barat\n"));
  assert!(out.contains("   4. Jl. Kemang Timur (Universitas Cakrawala)\n"));
}

#[test]
fn navigation_back_prints_no_route() {
  let mut script = LOGIN.to_vec();
  script.extend(["5", "6"]);
  let out = output(&run(&script));
  assert!(out.contains("Taman Mini Station"));
  assert!(!out.contains(" to Universitas Cakrawala"));
}
