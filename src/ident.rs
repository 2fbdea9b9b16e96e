//! Creation ids.
//!
//! Every cell receives exactly one id from an [`IdSource`] when it is built.
//! Ids are shared by all cell kinds, so they totally order cells by creation
//! time within one source.

use crate::error::{CellError, Result};

use std::sync::atomic::{AtomicU64, Ordering};

/// Creation id of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(u64);
impl CellId {
  pub fn get(self) -> u64 {
    self.0
  }
}
impl From<CellId> for u64 {
  fn from(id: CellId) -> Self {
    id.0
  }
}
impl std::fmt::Display for CellId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "#{}", self.0)
  }
}

/// Thread-safe issuer of unique, monotonically increasing [`CellId`]s.
///
/// The value `u64::MAX` is never issued. Once the counter reaches it every
/// further request fails with [`CellError::IdsExhausted`].
#[derive(Debug)]
pub struct IdSource {
  next: AtomicU64,
}

static GLOBAL_IDS: IdSource = IdSource::new();

impl Default for IdSource {
  fn default() -> Self {
    Self::new()
  }
}

impl IdSource {
  pub const fn new() -> Self {
    Self::starting_at(0)
  }
  pub const fn starting_at(first: u64) -> Self {
    Self {
      next: AtomicU64::new(first),
    }
  }

  /// The process-wide source used by the plain constructors.
  pub fn global() -> &'static IdSource {
    &GLOBAL_IDS
  }

  /// The id the next successful call to [`Self::next_id`] would return.
  pub fn peek(&self) -> Option<CellId> {
    let next = self.next.load(Ordering::Relaxed);
    (next != u64::MAX).then_some(CellId(next))
  }

  pub fn next_id(&self) -> Result<CellId> {
    self
      .next
      .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |c| c.checked_add(1))
      .map(CellId)
      .map_err(|last| {
        tracing::warn!(last, "id source exhausted");
        CellError::IdsExhausted { last: CellId(last) }
      })
  }
}
