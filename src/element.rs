use crate::{iterator, mesh::HalfedgeMesh};
use std::fmt::{Debug, Display};

/**
 * All elements of the mesh implement this trait. They are identified by their
 * index.
 */
pub trait Handle {
    /**
     * The index of the element.
     */
    fn index(&self) -> u32;
}

/**
 * Vertex handle.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VH {
    idx: u32,
}

/**
 * Halfedge handle.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HH {
    idx: u32,
}

/**
 * Edge handle.
 *
 * An edge is never stored on its own, it is the pair of halfedges `2 * index`
 * and `2 * index + 1`.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EH {
    idx: u32,
}

/**
 * Face handle.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FH {
    idx: u32,
}

macro_rules! impl_handle {
    ($handle:ident, $name:literal) => {
        impl Handle for $handle {
            fn index(&self) -> u32 {
                self.idx
            }
        }

        impl From<u32> for $handle {
            fn from(idx: u32) -> Self {
                $handle { idx }
            }
        }

        impl From<&u32> for $handle {
            fn from(idx: &u32) -> Self {
                $handle { idx: *idx }
            }
        }

        impl Display for $handle {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", $name, self.idx)
            }
        }

        impl Debug for $handle {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", $name, self.idx)
            }
        }
    };
}

impl_handle!(VH, "VH");
impl_handle!(HH, "HH");
impl_handle!(EH, "EH");
impl_handle!(FH, "FH");

impl VH {
    /// The outgoing halfedge of this vertex, if it is connected.
    pub fn halfedge<T>(self, mesh: &HalfedgeMesh<T>) -> Option<HH> {
        mesh.vertex_halfedge(self)
    }

    /// Check if this vertex is present in the `mesh`, i.e. the index is in
    /// range and the vertex has not been erased.
    pub fn is_valid<T>(self, mesh: &HalfedgeMesh<T>) -> bool {
        mesh.is_valid_vertex(self)
    }

    /// Check if this vertex is manifold.
    ///
    /// A vertex is manifold if it has at most 1 outgoing boundary halfedge.
    /// ```text
    ///    .......|     .......|.......     ....\     /...
    ///    .......|     .......|.......     .....\   /....
    ///    .......|     .......|.......     ......\ /.....
    ///    -------v     -------v-------     -------v------
    ///    .......|     .......|.......     ....../ \.....
    ///    .......|     .......|.......     ...../   \....
    ///    .......|     .......|.......     ..../     \...
    ///    Manifold     Manifold            Not manifold
    /// ```
    pub fn is_manifold<T>(self, mesh: &HalfedgeMesh<T>) -> bool {
        mesh.is_manifold_vertex(self)
    }

    /// Check if this vertex is on the boundary of the `mesh`. Isolated
    /// vertices are on the boundary.
    pub fn is_boundary<T>(self, mesh: &HalfedgeMesh<T>) -> bool {
        mesh.is_boundary_vertex(self)
    }

    /// The number of edges incident on this vertex.
    pub fn valence<T>(self, mesh: &HalfedgeMesh<T>) -> usize {
        iterator::voh_ccw_iter(mesh, self).count()
    }

    /// Halfedges leaving this vertex, in counter-clockwise order starting at
    /// the outgoing halfedge of the vertex. Empty for isolated vertices.
    pub fn outgoing_halfedges<T>(
        self,
        mesh: &HalfedgeMesh<T>,
    ) -> impl Iterator<Item = HH> + use<'_, T> {
        iterator::voh_ccw_iter(mesh, self)
    }

    /// Halfedges pointing at this vertex, paired with [`VH::outgoing_halfedges`].
    pub fn incoming_halfedges<T>(
        self,
        mesh: &HalfedgeMesh<T>,
    ) -> impl Iterator<Item = HH> + use<'_, T> {
        iterator::vih_ccw_iter(mesh, self)
    }

    pub fn connected_edges<T>(
        self,
        mesh: &HalfedgeMesh<T>,
    ) -> impl Iterator<Item = EH> + use<'_, T> {
        iterator::ve_ccw_iter(mesh, self)
    }

    pub fn neighbour_vertices<T>(
        self,
        mesh: &HalfedgeMesh<T>,
    ) -> impl Iterator<Item = VH> + use<'_, T> {
        iterator::vv_ccw_iter(mesh, self)
    }

    /// Faces incident on this vertex. A face is visited once for every
    /// outgoing halfedge it owns, which is once unless the vertex is repeated
    /// in that face.
    pub fn adjacent_faces<T>(
        self,
        mesh: &HalfedgeMesh<T>,
    ) -> impl Iterator<Item = FH> + use<'_, T> {
        iterator::vf_ccw_iter(mesh, self)
    }
}

impl HH {
    /// The vertex this halfedge points to.
    pub fn head<T>(self, mesh: &HalfedgeMesh<T>) -> VH {
        mesh.head_vertex(self)
    }

    /// The vertex this halfedge starts from.
    pub fn tail<T>(self, mesh: &HalfedgeMesh<T>) -> VH {
        mesh.tail_vertex(self)
    }

    /// The other halfedge of the pair. This does not need the mesh.
    pub const fn opposite(self) -> HH {
        HH { idx: self.idx ^ 1 }
    }

    /// The edge this halfedge belongs to. This does not need the mesh.
    pub const fn edge(self) -> EH {
        EH { idx: self.idx >> 1 }
    }

    pub fn prev<T>(self, mesh: &HalfedgeMesh<T>) -> HH {
        mesh.prev_halfedge(self)
    }

    pub fn next<T>(self, mesh: &HalfedgeMesh<T>) -> HH {
        mesh.next_halfedge(self)
    }

    pub fn face<T>(self, mesh: &HalfedgeMesh<T>) -> Option<FH> {
        mesh.halfedge_face(self)
    }

    /// Check if this halfedge is present in the `mesh`.
    pub fn is_valid<T>(self, mesh: &HalfedgeMesh<T>) -> bool {
        mesh.is_valid_halfedge(self)
    }

    /// Check if this halfedge is on the boundary of `mesh`.
    ///
    /// A halfedge is considered interior if it has a face incident on it.
    pub fn is_boundary<T>(self, mesh: &HalfedgeMesh<T>) -> bool {
        mesh.is_boundary_halfedge(self)
    }
}

impl EH {
    pub const fn halfedges(self) -> (HH, HH) {
        let hi = self.idx << 1;
        (HH { idx: hi }, HH { idx: hi | 1 })
    }

    pub const fn halfedge(self, flag: bool) -> HH {
        HH {
            idx: (self.idx << 1) | if flag { 1 } else { 0 },
        }
    }

    /// Check if this edge is present in the `mesh`.
    pub fn is_valid<T>(self, mesh: &HalfedgeMesh<T>) -> bool {
        mesh.is_valid_edge(self)
    }

    /// Check if the edge is a boundary edge.
    ///
    /// An edge is on the boundary only if neither of its halfedges has a face,
    /// i.e. it is a loose edge not used by any face.
    pub fn is_boundary<T>(self, mesh: &HalfedgeMesh<T>) -> bool {
        mesh.is_boundary_edge(self)
    }

    /// The faces on either side of this edge.
    pub fn faces<T>(self, mesh: &HalfedgeMesh<T>) -> impl Iterator<Item = FH> + use<'_, T> {
        iterator::ef_iter(mesh, self)
    }

    /// The two end points of this edge.
    pub fn vertices<T>(self, mesh: &HalfedgeMesh<T>) -> [VH; 2] {
        let (h, oh) = self.halfedges();
        [mesh.head_vertex(oh), mesh.head_vertex(h)]
    }
}

impl FH {
    pub fn halfedge<T>(self, mesh: &HalfedgeMesh<T>) -> HH {
        mesh.face_halfedge(self)
    }

    /// Check if this face is present in the `mesh`.
    pub fn is_valid<T>(self, mesh: &HalfedgeMesh<T>) -> bool {
        mesh.is_valid_face(self)
    }

    /// Number of vertices in this face.
    pub fn valence<T>(self, mesh: &HalfedgeMesh<T>) -> usize {
        iterator::fh_ccw_iter(mesh, self).count()
    }

    /// The halfedges of this face, starting at [`FH::halfedge`].
    pub fn halfedges<T>(self, mesh: &HalfedgeMesh<T>) -> impl Iterator<Item = HH> + use<'_, T> {
        iterator::fh_ccw_iter(mesh, self)
    }

    /// The vertices of this face, in the order they were given when the face
    /// was added.
    pub fn vertices<T>(self, mesh: &HalfedgeMesh<T>) -> impl Iterator<Item = VH> + use<'_, T> {
        iterator::fv_ccw_iter(mesh, self)
    }

    pub fn edges<T>(self, mesh: &HalfedgeMesh<T>) -> impl Iterator<Item = EH> + use<'_, T> {
        iterator::fe_ccw_iter(mesh, self)
    }

    /// Faces sharing an edge with this face. A neighbouring face is visited
    /// once for every edge it shares with this face.
    pub fn adjacent_faces<T>(
        self,
        mesh: &HalfedgeMesh<T>,
    ) -> impl Iterator<Item = FH> + use<'_, T> {
        iterator::ff_ccw_iter(mesh, self)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Vertex<T> {
    pub(crate) pos: T,
    pub(crate) halfedge: Option<HH>,
}

#[derive(Debug, Copy, Clone)]
pub(crate) struct Halfedge {
    pub(crate) face: Option<FH>,
    pub(crate) vertex: VH,
    pub(crate) next: HH,
    pub(crate) prev: HH,
}

#[derive(Debug, Copy, Clone)]
pub(crate) struct Edge {
    pub(crate) halfedges: [Halfedge; 2],
}

#[derive(Debug, Copy, Clone)]
pub(crate) struct Face {
    pub(crate) halfedge: HH,
}
