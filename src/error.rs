use std::path::PathBuf;

use thiserror::Error;

use crate::element::{EH, FH, HH, VH};

#[derive(Debug, Error)]
pub enum Error {
    // Lookup.
    #[error("{0} is not in the mesh")]
    VertexNotFound(VH),
    #[error("{0} is not in the mesh")]
    HalfedgeNotFound(HH),
    #[error("{0} is not in the mesh")]
    EdgeNotFound(EH),
    #[error("{0} is not in the mesh")]
    FaceNotFound(FH),
    // Topology.
    #[error("{0} is not on the boundary")]
    ComplexVertex(VH),
    #[error("{0} already has an incident face")]
    ComplexHalfedge(HH),
    #[error("{0} already has two incident faces")]
    ComplexEdge(EH),
    #[error("a face needs at least 3 vertices, got {0}")]
    DegenerateFace(usize),
    #[error("{0} appears more than once in the face")]
    DuplicateFaceVertex(VH),
    /// The face cannot be spliced into the fan around a non-manifold vertex
    /// in the order it was inserted.
    #[error("patch relinking failed")]
    PatchRelinkingFailed,
    #[error("{0} is still connected")]
    VertexStillConnected(VH),
    // Validation.
    #[error("{0} has an outgoing halfedge that is not on the boundary")]
    OutgoingHalfedgeNotBoundary(VH),
    #[error("{0} has an inconsistent ring of outgoing halfedges")]
    InvalidOutgoingHalfedges(VH),
    #[error("{0} is degenerate")]
    DegenerateHalfedge(HH),
    #[error("{0} has inconsistent next / prev links")]
    InvalidHalfedgeLink(HH),
    #[error("{0} is not part of a closed loop")]
    InvalidLoopTopology(HH),
    #[error("{0} has a different face than the rest of its loop")]
    InconsistentFaceInLoop(HH),
    #[error("{0} points to {1}, which does not point back")]
    InvalidFaceHalfedgeLink(FH, HH),
    #[error("the mesh holds {0} live elements but counts {1}")]
    InvalidElementCount(usize, usize),
    // Obj.
    #[error("failed to load obj file: {0}")]
    ObjLoadFailed(String),
    #[error("invalid obj file: {0}")]
    InvalidObjFile(PathBuf),
    #[error("expected a multiple of 3 coordinates, got {0}")]
    IncorrectNumberOfCoordinates(usize),
    // Other.
    #[error("mismatched array lengths: {0} and {1}")]
    MismatchedArrayLengths(usize, usize),
}
