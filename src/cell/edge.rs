use super::{check_distinct, identity_cmp, Cell, CellKind, Vertex};
use crate::{error::Result, ident::CellId, ident::IdSource};

use std::{
  hash::{Hash, Hasher},
  sync::Arc,
};

/// Directed pair of distinct vertices. The direction is never normalized.
#[derive(Clone)]
pub struct Edge(Arc<EdgeData>);

struct EdgeData {
  id: CellId,
  vertices: [Vertex; 2],
}

impl Edge {
  pub fn new(z0: Vertex, z1: Vertex) -> Result<Self> {
    Self::new_in(IdSource::global(), z0, z1)
  }
  pub fn new_in(ids: &IdSource, z0: Vertex, z1: Vertex) -> Result<Self> {
    let vertices = [z0, z1];
    check_distinct(CellKind::Edge, &vertices)?;
    let id = ids.next_id()?;
    Ok(Self(Arc::new(EdgeData { id, vertices })))
  }

  pub fn z0(&self) -> &Vertex {
    &self.0.vertices[0]
  }
  pub fn z1(&self) -> &Vertex {
    &self.0.vertices[1]
  }
}

impl Cell for Edge {
  fn id(&self) -> CellId {
    self.0.id
  }
  fn kind(&self) -> CellKind {
    CellKind::Edge
  }
  fn vertices(&self) -> &[Vertex] {
    &self.0.vertices
  }
}

impl PartialEq for Edge {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}
impl Eq for Edge {}

impl Hash for Edge {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.0.id.hash(state);
  }
}

impl PartialOrd for Edge {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}
impl Ord for Edge {
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    identity_cmp(
      (self.0.id, Arc::as_ptr(&self.0)),
      (other.0.id, Arc::as_ptr(&other.0)),
    )
  }
}

impl std::fmt::Debug for Edge {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Edge")
      .field("id", &self.0.id)
      .field("vertices", &self.0.vertices)
      .finish()
  }
}
impl std::fmt::Display for Edge {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}->{}", self.z0(), self.z1())
  }
}
