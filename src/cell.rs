//! Cells: the building blocks of a complex.
//!
//! Every cell is a cheap handle to immutable shared data. Cloning a handle
//! never creates a new cell. Two handles are equal iff they point to the same
//! cell; structural comparison is [`Cell::equivalent`].

mod edge;
mod face;
mod vertex;

pub use edge::Edge;
pub use face::{canonical_rotation, Face, Quad, Triangle};
pub use vertex::Vertex;

use crate::{
  error::{CellError, Result},
  ident::CellId,
  Dim,
};

use itertools::Itertools as _;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
  Vertex,
  Edge,
  Triangle,
  Quad,
}

impl CellKind {
  pub fn dim(self) -> Dim {
    match self {
      Self::Vertex => 0,
      Self::Edge => 1,
      Self::Triangle | Self::Quad => 2,
    }
  }
  pub fn nvertices(self) -> usize {
    match self {
      Self::Vertex => 1,
      Self::Edge => 2,
      Self::Triangle => 3,
      Self::Quad => 4,
    }
  }
  pub fn is_simplex(self) -> bool {
    self.nvertices() == self.dim() + 1
  }
}

impl std::fmt::Display for CellKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      Self::Vertex => "vertex",
      Self::Edge => "edge",
      Self::Triangle => "triangle",
      Self::Quad => "quad",
    };
    f.write_str(name)
  }
}

/// Capabilities shared by all cell kinds.
pub trait Cell {
  fn id(&self) -> CellId;
  fn kind(&self) -> CellKind;

  /// Constituent vertices, in stored order.
  fn vertices(&self) -> &[Vertex];

  fn dim(&self) -> Dim {
    self.kind().dim()
  }
  fn nvertices(&self) -> usize {
    self.vertices().len()
  }

  /// All cell kinds carry their orientation in the vertex order.
  fn is_oriented(&self) -> bool {
    true
  }

  /// Same kind and the same vertices in the same stored order.
  ///
  /// Faces are stored canonically, so rotated constructions of one face
  /// are equivalent. Reversed windings are not.
  fn equivalent(&self, other: &dyn Cell) -> bool {
    self.kind() == other.kind() && self.vertices() == other.vertices()
  }

  /// Creation order. Only cells of the same kind are comparable.
  fn creation_cmp(&self, other: &dyn Cell) -> Result<Ordering> {
    if self.kind() != other.kind() {
      return Err(CellError::KindMismatch {
        expected: self.kind(),
        found: other.kind(),
      });
    }
    Ok(self.id().cmp(&other.id()))
  }
}

/// Rejects vertex lists that mention one vertex more than once.
fn check_distinct(kind: CellKind, vertices: &[Vertex]) -> Result<()> {
  match vertices.iter().duplicates().next() {
    Some(vertex) => Err(CellError::RepeatedVertex {
      kind,
      vertex: vertex.to_string(),
    }),
    None => Ok(()),
  }
}

/// Creation order, with allocation address breaking ties between cells
/// issued by different id sources. Consistent with identity equality.
fn identity_cmp<T>(a: (CellId, *const T), b: (CellId, *const T)) -> Ordering {
  a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1))
}
