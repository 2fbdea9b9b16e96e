use super::{identity_cmp, Cell, CellKind};
use crate::{error::Result, ident::CellId, ident::IdSource};

use std::{
  hash::{Hash, Hasher},
  sync::Arc,
};

/// The unit of identity of a complex.
///
/// Vertices are compared by identity only: two vertices with the same name
/// are still different vertices. This makes it safe to share vertices between
/// several complexes, which plain integer indices are not.
#[derive(Clone)]
pub struct Vertex(Arc<VertexData>);

struct VertexData {
  id: CellId,
  name: String,
}

impl Vertex {
  pub fn new(name: impl Into<String>) -> Result<Self> {
    Self::new_in(IdSource::global(), name)
  }
  pub fn new_in(ids: &IdSource, name: impl Into<String>) -> Result<Self> {
    let id = ids.next_id()?;
    Ok(Self(Arc::new(VertexData {
      id,
      name: name.into(),
    })))
  }

  pub fn name(&self) -> &str {
    &self.0.name
  }
}

impl Cell for Vertex {
  fn id(&self) -> CellId {
    self.0.id
  }
  fn kind(&self) -> CellKind {
    CellKind::Vertex
  }
  fn vertices(&self) -> &[Vertex] {
    std::slice::from_ref(self)
  }
}

impl PartialEq for Vertex {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}
impl Eq for Vertex {}

impl Hash for Vertex {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.0.id.hash(state);
  }
}

impl PartialOrd for Vertex {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}
impl Ord for Vertex {
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    identity_cmp(
      (self.0.id, Arc::as_ptr(&self.0)),
      (other.0.id, Arc::as_ptr(&other.0)),
    )
  }
}

impl std::fmt::Debug for Vertex {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Vertex")
      .field("id", &self.0.id)
      .field("name", &self.0.name)
      .finish()
  }
}
impl std::fmt::Display for Vertex {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0.name)
  }
}
