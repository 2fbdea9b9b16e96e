use crate::{cell::CellKind, ident::CellId};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CellError>;

/// Failures of cell construction and cell comparison.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CellError {
  /// The same vertex was passed more than once to an edge or face.
  #[error("{kind} constructed with repeated vertex `{vertex}`")]
  RepeatedVertex { kind: CellKind, vertex: String },
  /// Cells of different kinds have no common creation order.
  #[error("cannot order {found} against {expected}")]
  KindMismatch { expected: CellKind, found: CellKind },
  /// The id source has no representable ids left.
  #[error("id source exhausted after {last}")]
  IdsExhausted { last: CellId },
}
