//! Combinatorial skeleton of meshes.
//!
//! - Vertices, edges, triangles and quads as shared, immutable cells.
//! - Identity by allocation, structural comparison through [`Cell::equivalent`].
//! - Faces stored in a canonical rotation that keeps their winding.
//! - Complexes: a face list plus the sorted set of vertices it references.
//!
//! No coordinates live here. An embedding maps the vertices of a complex to
//! points elsewhere.

pub mod cell;
pub mod complex;
pub mod error;
pub mod ident;

pub use cell::{canonical_rotation, Cell, CellKind, Edge, Face, Quad, Triangle, Vertex};
pub use complex::{CellComplex, Complex, QuadComplex, TriangleComplex};
pub use error::{CellError, Result};
pub use ident::{CellId, IdSource};

pub type Dim = usize;
