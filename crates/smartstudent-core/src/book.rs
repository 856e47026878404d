//! Books and the mentor-scoped library catalog.
//!
//! Books are indexed by id. Every read that produces a listing sorts by title,
//! so display order never depends on storage order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Book ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
  pub id:        String,
  pub title:     String,
  /// Display name of the mentor whose students may see and borrow this book.
  pub mentor:    String,
  /// `false` while the book is on loan.
  pub available: bool,
}

impl Book {
  pub fn new(
    id: impl Into<String>,
    title: impl Into<String>,
    mentor: impl Into<String>,
  ) -> Self {
    Self {
      id:        id.into(),
      title:     title.into(),
      mentor:    mentor.into(),
      available: true,
    }
  }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct Catalog {
  books: BTreeMap<String, Book>,
}

impl Catalog {
  pub fn new() -> Self { Self::default() }

  pub fn len(&self) -> usize { self.books.len() }

  pub fn is_empty(&self) -> bool { self.books.is_empty() }

  pub fn get(&self, id: &str) -> Option<&Book> { self.books.get(id) }

  /// Add a book. Ids are unique; a second insert with the same id is
  /// rejected and leaves the catalog unchanged.
  pub fn insert(&mut self, book: Book) -> Result<()> {
    if self.books.contains_key(&book.id) {
      return Err(Error::DuplicateBook(book.id));
    }
    self.books.insert(book.id.clone(), book);
    Ok(())
  }

  /// Mark the book `id` in `scope` as on loan and return the updated record.
  ///
  /// A book outside `scope` is reported as [`Error::BookNotFound`], exactly
  /// like an unknown id.
  pub fn borrow(&mut self, id: &str, scope: &str) -> Result<Book> {
    let book = self
      .books
      .get_mut(id)
      .filter(|b| b.mentor == scope)
      .ok_or_else(|| Error::BookNotFound(id.to_string()))?;

    if !book.available {
      return Err(Error::BookUnavailable {
        id:    book.id.clone(),
        title: book.title.clone(),
      });
    }

    book.available = false;
    tracing::debug!(book = %book.id, scope, "book borrowed");
    Ok(book.clone())
  }

  /// Books in `scope` whose title contains `keyword`, ignoring case. An empty
  /// keyword matches the whole scope.
  pub fn search(&self, keyword: &str, scope: &str) -> Vec<Book> {
    let needle = keyword.to_lowercase();
    by_title(
      self
        .scoped(scope)
        .filter(|b| b.title.to_lowercase().contains(&needle)),
    )
  }

  pub fn filter_available(&self, scope: &str) -> Vec<Book> {
    by_title(self.scoped(scope).filter(|b| b.available))
  }

  /// Every book in `scope`, unfiltered.
  pub fn in_scope(&self, scope: &str) -> Vec<Book> {
    by_title(self.scoped(scope))
  }

  fn scoped<'a>(&'a self, scope: &'a str) -> impl Iterator<Item = &'a Book> {
    self.books.values().filter(move |b| b.mentor == scope)
  }
}

fn by_title<'a>(books: impl Iterator<Item = &'a Book>) -> Vec<Book> {
  let mut out: Vec<Book> = books.cloned().collect();
  out.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
  out
}
