/*!
This is an optional module that is enabled by the `use_glam` feature. It
provides mesh types that can be used out of the box, that use
[`glam`](https://docs.rs/glam/latest/glam/) vectors as vertex positions.
*/

use crate::{fvmesh::FaceVertexMesh, mesh::HalfedgeMesh};

/// Halfedge mesh with 32 bit floating point positions.
pub type PolyMeshF32 = HalfedgeMesh<glam::Vec3>;

/// Halfedge mesh with 64 bit floating point positions. This can be loaded
/// directly from OBJ files.
pub type PolyMeshF64 = HalfedgeMesh<glam::DVec3>;

pub type FaceVertexMeshF32 = FaceVertexMesh<glam::Vec3>;

pub type FaceVertexMeshF64 = FaceVertexMesh<glam::DVec3>;
