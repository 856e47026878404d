//! `smartstudent`, the terminal front end for the Smart.Student campus portal.
//!
//! # Usage
//!
//! ```
//! smartstudent
//! smartstudent --config ~/.config/smartstudent.toml --no-clear
//! smartstudent --seed fixtures/other-campus.json
//! ```

mod error;
mod flow;
mod settings;
mod ui;

use std::{
  io,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use flow::Flow;
use settings::Settings;
use smartstudent_core::{Portal, seed::SeedData};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "smartstudent", version, about = "Smart.Student campus portal")]
struct Args {
  /// Path to a TOML settings file. Missing files are ignored.
  #[arg(short, long, value_name = "FILE", default_value = "smartstudent.toml")]
  config: PathBuf,

  /// Seed from this JSON fixture instead of the built-in one.
  #[arg(long, value_name = "FILE")]
  seed: Option<PathBuf>,

  /// Do not clear the terminal between screens.
  #[arg(long)]
  no_clear: bool,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Logs go to stderr so they stay out of the menus.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(io::stderr)
    .init();

  let args = Args::parse();

  // CLI flags override the settings file and environment.
  let mut settings = Settings::load(&args.config)?;
  if args.seed.is_some() {
    settings.seed_path = args.seed;
  }
  if args.no_clear {
    settings.clear_screen = false;
  }

  let portal = load_portal(settings.seed_path.as_deref())?;

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut flow = Flow::new(portal, stdin.lock(), stdout.lock(), settings);
  flow.run().context("terminal session failed")?;

  Ok(())
}

fn load_portal(seed_path: Option<&Path>) -> Result<Portal> {
  let seed = match seed_path {
    Some(path) => {
      let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading seed file {}", path.display()))?;
      SeedData::from_json(&raw)
        .with_context(|| format!("parsing seed file {}", path.display()))?
    }
    None => SeedData::builtin().context("parsing built-in seed")?,
  };
  Portal::from_seed(seed).context("seeding portal")
}

#[cfg(test)]
mod tests;
