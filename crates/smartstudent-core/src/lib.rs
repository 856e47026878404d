//! Core types and in-memory stores for the Smart.Student campus portal.
//!
//! This crate has no terminal dependencies. The CLI crate drives a
//! [`Portal`] through an explicit [`Session`] value obtained at login.

pub mod book;
pub mod consultation;
pub mod directory;
pub mod error;
pub mod portal;
pub mod route;
pub mod seed;
pub mod student;

pub use error::{Error, Result};
pub use portal::{ConsultationStatus, Portal, Session};
