//! Cell complexes: a list of faces plus the vertices they reference.
//!
//! Minimal representation. Nothing checks that the faces form a manifold or
//! that neighbouring faces are consistently oriented.

use crate::cell::{Cell, Face, Vertex};

use indexmap::IndexSet;

/// Common view of triangle and quad complexes.
pub trait CellComplex {
  type Face: Cell;

  /// Distinct vertices of all faces, sorted by creation id.
  fn vertices(&self) -> &IndexSet<Vertex>;
  /// Faces in the order they were supplied.
  fn faces(&self) -> &[Self::Face];

  fn nvertices(&self) -> usize {
    self.vertices().len()
  }
  fn nfaces(&self) -> usize {
    self.faces().len()
  }
}

/// Complex of faces with `N` vertices each.
#[derive(Debug, Clone)]
pub struct Complex<const N: usize> {
  vertices: IndexSet<Vertex>,
  faces: Vec<Face<N>>,
}

pub type TriangleComplex = Complex<3>;
pub type QuadComplex = Complex<4>;

impl<const N: usize> Complex<N> {
  /// Collects the faces and accumulates their vertices.
  ///
  /// The faces are copied out of `faces`, nothing refers back to the
  /// caller's collection. Equivalent faces are kept as given.
  pub fn new(faces: impl IntoIterator<Item = Face<N>>) -> Self {
    let faces: Vec<_> = faces.into_iter().collect();
    let mut vertices: IndexSet<Vertex> = faces
      .iter()
      .flat_map(|face| face.as_array().iter().cloned())
      .collect();
    vertices.sort();

    tracing::debug!(
      nfaces = faces.len(),
      nvertices = vertices.len(),
      "assembled complex"
    );
    Self { vertices, faces }
  }

  pub fn contains_vertex(&self, vertex: &Vertex) -> bool {
    self.vertices.contains(vertex)
  }

  /// Position of `vertex` in [`CellComplex::vertices`].
  ///
  /// This is the slot an embedding uses for the point of the vertex.
  pub fn vertex_index(&self, vertex: &Vertex) -> Option<usize> {
    self.vertices.get_index_of(vertex)
  }

  /// Every face as positions into the vertex list, in stored vertex order.
  pub fn face_vertex_indices(&self) -> Vec<[usize; N]> {
    self
      .faces
      .iter()
      .map(|face| {
        face.as_array().each_ref().map(|v| {
          self
            .vertices
            .get_index_of(v)
            .expect("face vertices are part of the complex")
        })
      })
      .collect()
  }
}

impl<const N: usize> CellComplex for Complex<N> {
  type Face = Face<N>;

  fn vertices(&self) -> &IndexSet<Vertex> {
    &self.vertices
  }
  fn faces(&self) -> &[Face<N>] {
    &self.faces
  }
}

impl<const N: usize> FromIterator<Face<N>> for Complex<N> {
  fn from_iter<I: IntoIterator<Item = Face<N>>>(iter: I) -> Self {
    Self::new(iter)
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::{cell::Quad, cell::Triangle, ident::IdSource};

  fn vertices<const M: usize>(ids: &IdSource) -> [Vertex; M] {
    std::array::from_fn(|i| Vertex::new_in(ids, format!("v{i}")).unwrap())
  }

  #[test]
  fn shared_vertices_are_deduplicated() {
    let ids = IdSource::new();
    let [v0, v1, v2, v3] = vertices(&ids);
    let f0 = Triangle::new_in(&ids, [v2.clone(), v3.clone(), v1.clone()]).unwrap();
    let f1 = Triangle::new_in(&ids, [v1.clone(), v0.clone(), v2.clone()]).unwrap();
    let complex = TriangleComplex::new([f0.clone(), f1.clone()]);

    assert!(complex.vertices().iter().eq([&v0, &v1, &v2, &v3]));
    assert_eq!(complex.faces(), [f0, f1]);
    assert_eq!(complex.nvertices(), 4);
    assert_eq!(complex.nfaces(), 2);
  }

  #[test]
  fn vertex_indices() {
    let ids = IdSource::new();
    let [v0, v1, v2, v3, stray] = vertices(&ids);
    let quad = Quad::new_in(&ids, [v3.clone(), v0.clone(), v2.clone(), v1.clone()]).unwrap();
    let complex: QuadComplex = [quad].into_iter().collect();

    assert_eq!(complex.vertex_index(&v2), Some(2));
    assert_eq!(complex.vertex_index(&stray), None);
    assert!(!complex.contains_vertex(&stray));
    assert_eq!(complex.face_vertex_indices(), [[0, 2, 1, 3]]);
  }

  #[test]
  fn empty() {
    let complex = TriangleComplex::new([]);
    assert_eq!(complex.nvertices(), 0);
    assert!(complex.face_vertex_indices().is_empty());
  }

  #[test]
  fn equivalent_faces_are_kept() {
    let ids = IdSource::new();
    let [a, b, c] = vertices(&ids);
    let f0 = Triangle::new_in(&ids, [a.clone(), b.clone(), c.clone()]).unwrap();
    let f1 = Triangle::new_in(&ids, [b.clone(), c.clone(), a.clone()]).unwrap();
    let complex = TriangleComplex::new([f0, f1]);
    assert_eq!(complex.nfaces(), 2);
    assert_eq!(complex.nvertices(), 3);
  }
}
