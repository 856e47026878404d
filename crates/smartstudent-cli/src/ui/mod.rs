//! Text rendering: banner, screen clearing, menus, and prompts.

pub mod tables;

use std::io::{self, Write};

use crossterm::{
  cursor::MoveTo,
  execute,
  terminal::{Clear, ClearType},
};

/// Width of the banner and table rules.
pub const RULE_WIDTH: usize = 92;

pub fn rule(out: &mut impl Write, ch: char) -> io::Result<()> {
  writeln!(out, "{}", ch.to_string().repeat(RULE_WIDTH))
}

/// Wipe the terminal and home the cursor.
pub fn clear(out: &mut impl Write) -> io::Result<()> {
  execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

pub fn banner(out: &mut impl Write, campus: &str) -> io::Result<()> {
  rule(out, '=')?;
  writeln!(out, "{:^width$}", "S M A R T . S T U D E N T", width = RULE_WIDTH)?;
  writeln!(out)?;
  writeln!(out, "{:^width$}", campus.to_uppercase(), width = RULE_WIDTH)?;
  rule(out, '=')?;
  writeln!(out)
}

/// Numbered menu entries, one per line.
pub fn menu<S: AsRef<str>>(out: &mut impl Write, entries: &[S]) -> io::Result<()> {
  for (n, entry) in entries.iter().enumerate() {
    writeln!(out, "      {}. > {}", n + 1, entry.as_ref())?;
  }
  Ok(())
}

/// Print `label` without a newline and flush so it shows before input.
pub fn prompt(out: &mut impl Write, label: &str) -> io::Result<()> {
  write!(out, "{label}")?;
  out.flush()
}

/// A single indented message line followed by a blank line.
pub fn notice(out: &mut impl Write, msg: &str) -> io::Result<()> {
  writeln!(out)?;
  writeln!(out, "   {msg}")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn menu_is_numbered_from_one() {
    let mut out = Vec::new();
    menu(&mut out, &["Register", "Back"]).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "      1. > Register\n      2. > Back\n");
  }

  #[test]
  fn banner_shows_campus_in_capitals() {
    let mut out = Vec::new();
    banner(&mut out, "Universitas Cakrawala").unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("UNIVERSITAS CAKRAWALA"));
    assert!(text.starts_with(&"=".repeat(RULE_WIDTH)));
  }
}
