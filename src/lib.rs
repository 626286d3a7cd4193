/*!
This is a halfedge based connectivity kernel for polygon meshes, in the spirit
of [OpenMesh](https://www.graphics.rwth-aachen.de/software/openmesh/).

# Overview

+ A halfedge datastructure is used to represent the topology of a mesh, i.e.
  the connectivity of vertices, edges and faces. The mesh type is
  [`HalfedgeMesh<T>`].

+ `T` is the position of a vertex. The mesh only stores positions and compares
  them for equality, so any type with [`PartialEq`] works. Geometric
  operations are left to the caller.

+ Vertices, halfedges, edges and faces are addressed by the handles [`VH`],
  [`HH`], [`EH`] and [`FH`]. The two halfedges of edge `e` are `2e` and
  `2e + 1`. Handles come with methods to walk the mesh, for example
  [`VH::outgoing_halfedges`] and [`FH::vertices`].

+ Faces are added with [`HalfedgeMesh::add_face`]. Faces can share vertices
  without sharing edges, i.e. a vertex can be the apex of several fans of
  faces. Such non-manifold vertices are handled, and the fans are relinked as
  more faces are added in between them.

+ Elements are removed either with the `remove_*` functions, which also remove
  everything that is left dangling, or with the lower level `erase_*`
  functions. Removing an element leaves a gap in the indices until
  [`HalfedgeMesh::clean_mesh`] is called.

+ [`FaceVertexMesh<T>`] is a simpler representation that stores adjacency as
  lists. A halfedge mesh can be converted into one with
  [`HalfedgeMesh::to_face_vertex_mesh`]. Both representations implement
  [`PolyMesh`].

+ Optionally, this crate provides some concrete mesh types that use the
  [`glam`](https://crates.io/crates/glam) crate for vertex positions. These can
  be found in the [`use_glam`] module. `use_glam` feature is required by
  these.
*/

mod check;
mod clean;
mod edit;
mod element;
mod error;
mod fvmesh;
mod iterator;
mod mesh;
mod obj;
mod topol;
mod traits;

#[cfg(feature = "use_glam")]
pub mod use_glam;

pub use element::{EH, FH, HH, Handle, VH};
pub use error::Error;
pub use fvmesh::FaceVertexMesh;
pub use mesh::HalfedgeMesh;
pub use traits::PolyMesh;
