//! Runtime settings, layered from an optional TOML file and the environment.

use std::{
  fmt::Write as _,
  path::{Path, PathBuf},
};

use anyhow::{Context as _, bail};
use chrono::NaiveDate;
use serde::Deserialize;

/// Display and data-source settings for the terminal front end.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Clear the terminal before each screen.
  pub clear_screen: bool,
  /// `chrono` strftime pattern used for every date shown.
  pub date_format:  String,
  /// JSON fixture to seed from instead of the built-in one.
  pub seed_path:    Option<PathBuf>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      clear_screen: true,
      date_format:  "%d-%m-%Y".to_string(),
      seed_path:    None,
    }
  }
}

impl Settings {
  /// Read `path` if it exists, then `SMARTSTUDENT_*` environment variables.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings: Self = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("SMARTSTUDENT"))
      .build()
      .with_context(|| format!("failed to read settings from {}", path.display()))?
      .try_deserialize()
      .context("failed to deserialise settings")?;
    settings.validate()?;
    Ok(settings)
  }

  /// Reject date formats chrono cannot render for a plain date, including
  /// unknown specifiers and time or offset fields such as `%H` or `%z`.
  pub fn validate(&self) -> anyhow::Result<()> {
    let mut sample = String::new();
    if write!(sample, "{}", NaiveDate::MIN.format(&self.date_format)).is_err() {
      bail!("invalid date_format {:?}", self.date_format);
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_are_valid() {
    let s = Settings::default();
    assert!(s.clear_screen);
    assert_eq!(s.date_format, "%d-%m-%Y");
    assert!(s.validate().is_ok());
  }

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let s = Settings::load(Path::new("does-not-exist/smartstudent.toml")).unwrap();
    assert!(s.seed_path.is_none());
  }

  #[test]
  fn bad_date_format_is_rejected() {
    let s = Settings {
      date_format: "%Q".into(),
      ..Settings::default()
    };
    assert!(s.validate().is_err());
  }

  #[test]
  fn time_fields_are_rejected() {
    for pattern in ["%H:%M", "%d-%m-%Y %H", "%z", "%S"] {
      let s = Settings {
        date_format: pattern.into(),
        ..Settings::default()
      };
      assert!(s.validate().is_err(), "{pattern:?} should be rejected");
    }
  }

  #[test]
  fn date_only_patterns_are_accepted() {
    for pattern in ["%Y-%m-%d", "%e %B %Y", "%A, %d/%m/%y"] {
      let s = Settings {
        date_format: pattern.into(),
        ..Settings::default()
      };
      assert!(s.validate().is_ok(), "{pattern:?} should be accepted");
    }
  }
}
