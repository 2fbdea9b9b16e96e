use super::{check_distinct, identity_cmp, Cell, CellKind, Vertex};
use crate::{error::Result, ident::CellId, ident::IdSource};

use itertools::Itertools as _;
use std::{
  hash::{Hash, Hasher},
  sync::Arc,
};

/// Oriented polygonal face with `N` distinct vertices.
///
/// The vertices are stored in canonical rotation: the cycle starts at the
/// vertex with the smallest creation id and keeps the winding it was given.
/// Any rotation of the same cycle therefore stores the same sequence.
#[derive(Clone)]
pub struct Face<const N: usize>(Arc<FaceData<N>>);

struct FaceData<const N: usize> {
  id: CellId,
  vertices: [Vertex; N],
}

/// 2-simplex.
pub type Triangle = Face<3>;
/// Quadrilateral, not a simplex.
pub type Quad = Face<4>;

/// Rotates the cycle `vertices` in place so that it starts at its minimum.
///
/// The cyclic order of the elements is kept, so the winding of a face is
/// unchanged. With pairwise distinct elements the result does not depend on
/// which rotation was passed in.
pub fn canonical_rotation<T: Ord>(vertices: &mut [T]) {
  if let Some(imin) = vertices.iter().position_min() {
    vertices.rotate_left(imin);
  }
}

impl<const N: usize> Face<N> {
  const KIND: CellKind = match N {
    3 => CellKind::Triangle,
    4 => CellKind::Quad,
    _ => panic!("faces have 3 or 4 vertices"),
  };

  pub fn new(vertices: [Vertex; N]) -> Result<Self> {
    Self::new_in(IdSource::global(), vertices)
  }
  pub fn new_in(ids: &IdSource, mut vertices: [Vertex; N]) -> Result<Self> {
    check_distinct(Self::KIND, &vertices)?;
    canonical_rotation(&mut vertices);
    let id = ids.next_id()?;
    Ok(Self(Arc::new(FaceData { id, vertices })))
  }

  pub fn vertex(&self, i: usize) -> &Vertex {
    &self.0.vertices[i]
  }
  pub fn as_array(&self) -> &[Vertex; N] {
    &self.0.vertices
  }
}

impl<const N: usize> Cell for Face<N> {
  fn id(&self) -> CellId {
    self.0.id
  }
  fn kind(&self) -> CellKind {
    Self::KIND
  }
  fn vertices(&self) -> &[Vertex] {
    &self.0.vertices
  }
}

impl<const N: usize> PartialEq for Face<N> {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}
impl<const N: usize> Eq for Face<N> {}

impl<const N: usize> Hash for Face<N> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.0.id.hash(state);
  }
}

impl<const N: usize> PartialOrd for Face<N> {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}
impl<const N: usize> Ord for Face<N> {
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    identity_cmp(
      (self.0.id, Arc::as_ptr(&self.0)),
      (other.0.id, Arc::as_ptr(&other.0)),
    )
  }
}

impl<const N: usize> std::fmt::Debug for Face<N> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Face")
      .field("id", &self.0.id)
      .field("vertices", &self.0.vertices)
      .finish()
  }
}
impl<const N: usize> std::fmt::Display for Face<N> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match Self::KIND {
      CellKind::Quad => write!(f, "Q[{}]", self.0.vertices.iter().join(",")),
      _ => write!(f, "{}", self.0.vertices.iter().join("->")),
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::error::CellError;

  fn vertices<const N: usize>(ids: &IdSource) -> [Vertex; N] {
    std::array::from_fn(|i| Vertex::new_in(ids, format!("v{i}")).unwrap())
  }

  #[test]
  fn rotation_of_integers() {
    let mut a = [5, 2, 9, 7];
    canonical_rotation(&mut a);
    assert_eq!(a, [2, 9, 7, 5]);

    let mut empty: [u8; 0] = [];
    canonical_rotation(&mut empty);
  }

  #[test]
  fn triangle_rotations_agree() {
    let ids = IdSource::new();
    let [v0, v1, v2, _v3] = vertices::<4>(&ids);
    let f1 = Triangle::new_in(&ids, [v1.clone(), v2.clone(), v0.clone()]).unwrap();
    let f2 = Triangle::new_in(&ids, [v2.clone(), v0.clone(), v1.clone()]).unwrap();

    assert_eq!(f1.vertices(), [v0.clone(), v1.clone(), v2.clone()]);
    assert_eq!(f1.vertices(), f2.vertices());
    assert_ne!(f1, f2);
    assert!(f1.equivalent(&f2));
  }

  #[test]
  fn reversed_winding_differs() {
    let ids = IdSource::new();
    let [a, b, c] = vertices::<3>(&ids);
    let abc = Triangle::new_in(&ids, [a.clone(), b.clone(), c.clone()]).unwrap();
    let acb = Triangle::new_in(&ids, [a.clone(), c.clone(), b.clone()]).unwrap();
    assert!(!abc.equivalent(&acb));
    assert_eq!(acb.vertices(), [a, c, b]);
  }

  #[test]
  fn quad_rotations_agree() {
    let ids = IdSource::new();
    let [a, b, c, d] = vertices::<4>(&ids);
    let base = [c.clone(), d.clone(), a.clone(), b.clone()];
    let quads: Vec<_> = (0..4)
      .map(|r| {
        let mut vs = base.clone();
        vs.rotate_left(r);
        Quad::new_in(&ids, vs).unwrap()
      })
      .collect();
    for q in &quads {
      assert_eq!(q.as_array(), &[a.clone(), b.clone(), c.clone(), d.clone()]);
      assert!(q.equivalent(&quads[0]));
    }
    assert_eq!(quads[0].to_string(), "Q[v0,v1,v2,v3]");
    assert_eq!(quads[0].kind(), CellKind::Quad);
  }

  #[test]
  fn triangle_is_not_quad() {
    let ids = IdSource::new();
    let [a, b, c, d] = vertices::<4>(&ids);
    let tri = Triangle::new_in(&ids, [a.clone(), b.clone(), c.clone()]).unwrap();
    let quad = Quad::new_in(&ids, [a, b, c, d]).unwrap();
    assert!(!tri.equivalent(&quad));
    assert!(tri.creation_cmp(&quad).is_err());
    assert_eq!(tri.to_string(), "v0->v1->v2");
  }

  #[test]
  fn rejects_repeated_vertex() {
    let ids = IdSource::new();
    let [a, b, c] = vertices::<3>(&ids);
    let err = Quad::new_in(&ids, [a, b.clone(), c, b]).unwrap_err();
    assert_eq!(
      err,
      CellError::RepeatedVertex {
        kind: CellKind::Quad,
        vertex: "v1".into()
      }
    );
  }
}
