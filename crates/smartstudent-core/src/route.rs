//! Static campus routes from nearby stations.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The street-by-street way from a station to campus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
  pub station:  String,
  /// Ordered; the last segment is the campus itself.
  pub segments: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RouteMap {
  campus: String,
  routes: Vec<Route>,
}

impl RouteMap {
  pub fn new(campus: impl Into<String>, routes: Vec<Route>) -> Self {
    Self {
      campus: campus.into(),
      routes,
    }
  }

  pub fn campus(&self) -> &str { &self.campus }

  /// Station names in menu order.
  pub fn stations(&self) -> impl Iterator<Item = &str> {
    self.routes.iter().map(|r| r.station.as_str())
  }

  pub fn route(&self, station: &str) -> Result<&Route> {
    self
      .routes
      .iter()
      .find(|r| r.station == station)
      .ok_or_else(|| Error::UnknownStation(station.to_string()))
  }
}
