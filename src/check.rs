use crate::{element::Handle, error::Error, iterator, mesh::HalfedgeMesh};

fn check_vertices<T>(mesh: &HalfedgeMesh<T>, hvisited: &mut [bool]) -> Result<(), Error> {
    hvisited.fill(false);
    for v in mesh.vertices() {
        if let Some(h) = mesh.vertex_halfedge(v) {
            if !mesh.is_valid_halfedge(h) {
                return Err(Error::HalfedgeNotFound(h));
            }
            // The outgoing halfedge must be a boundary halfedge, or none of the
            // halfedges are boundary.
            if !mesh.is_boundary_halfedge(h)
                && iterator::voh_ccw_iter(mesh, v).any(|h| mesh.is_boundary_halfedge(h))
            {
                return Err(Error::OutgoingHalfedgeNotBoundary(v));
            }
            // Outgoing halfedge must point back to this vertex.
            if mesh.tail_vertex(h) != v {
                return Err(Error::InvalidOutgoingHalfedges(v));
            }
        }
        // Check ccw iterator.
        for h in iterator::voh_ccw_iter(mesh, v) {
            if std::mem::replace(&mut hvisited[h.index() as usize], true) {
                return Err(Error::InvalidOutgoingHalfedges(v));
            }
        }
        // Check cw iterator.
        for h in iterator::voh_cw_iter(mesh, v) {
            if !std::mem::replace(&mut hvisited[h.index() as usize], false) {
                return Err(Error::InvalidOutgoingHalfedges(v));
            }
        }
    }
    Ok(())
}

fn check_halfedges<T>(mesh: &HalfedgeMesh<T>, hflags: &mut [bool]) -> Result<(), Error> {
    for h in mesh.halfedges() {
        let (head, tail) = (mesh.head_vertex(h), mesh.tail_vertex(h));
        for v in [head, tail] {
            if !mesh.is_valid_vertex(v) {
                return Err(Error::VertexNotFound(v));
            }
        }
        if head == tail {
            return Err(Error::DegenerateHalfedge(h));
        }
        let (prev, next) = (mesh.prev_halfedge(h), mesh.next_halfedge(h));
        for hh in [prev, next] {
            if !mesh.is_valid_halfedge(hh) {
                return Err(Error::HalfedgeNotFound(hh));
            }
        }
        if let Some(f) = mesh.halfedge_face(h) {
            if !mesh.is_valid_face(f) {
                return Err(Error::FaceNotFound(f));
            }
        }
        if mesh.next_halfedge(prev) != h
            || mesh.prev_halfedge(next) != h
            || head != mesh.tail_vertex(next)
            || tail != mesh.head_vertex(prev)
        {
            return Err(Error::InvalidHalfedgeLink(h));
        }
        // Halfedge must be found in the circulators around head and tail.
        if !iterator::voh_ccw_iter(mesh, tail).any(|hh| hh == h)
            || !iterator::vih_ccw_iter(mesh, head).any(|hh| hh == h)
        {
            return Err(Error::InvalidLoopTopology(h));
        }
    }
    // Every halfedge is in exactly one loop, and the loop agrees on the face.
    hflags.fill(false);
    for h in mesh.halfedges() {
        if hflags[h.index() as usize] {
            continue;
        }
        let f = mesh.halfedge_face(h);
        for h in iterator::loop_ccw_iter(mesh, h) {
            if std::mem::replace(&mut hflags[h.index() as usize], true) {
                return Err(Error::InvalidLoopTopology(h));
            }
            if mesh.halfedge_face(h) != f {
                return Err(Error::InconsistentFaceInLoop(h));
            }
        }
    }
    Ok(())
}

fn check_faces<T>(mesh: &HalfedgeMesh<T>) -> Result<(), Error> {
    for f in mesh.faces() {
        let h = mesh.face_halfedge(f);
        if !mesh.is_valid_halfedge(h) {
            return Err(Error::HalfedgeNotFound(h));
        }
        if mesh.halfedge_face(h) != Some(f) {
            return Err(Error::InvalidFaceHalfedgeLink(f, h));
        }
    }
    Ok(())
}

fn check_counts<T>(mesh: &HalfedgeMesh<T>) -> Result<(), Error> {
    for (live, counted, capacity) in [
        (
            mesh.vertices().count(),
            mesh.num_vertices(),
            mesh.next_vertex_index() as usize,
        ),
        (
            mesh.edges().count(),
            mesh.num_edges(),
            (mesh.next_halfedge_index() / 2) as usize,
        ),
        (
            mesh.faces().count(),
            mesh.num_faces(),
            mesh.next_face_index() as usize,
        ),
    ] {
        if live != counted || counted > capacity {
            return Err(Error::InvalidElementCount(live, counted));
        }
    }
    Ok(())
}

impl<T> HalfedgeMesh<T> {
    /// Check the topology of the mesh.
    ///
    /// This function will return an error if any errors are found in the
    /// topology. It checks that the pairs, `next` and `prev` links of all
    /// halfedges are consistent, that every loop agrees on its face, that
    /// faces point at their own halfedges, that connected boundary vertices
    /// point at boundary halfedges, and that the element counts match the
    /// live elements.
    pub fn check_topology(&self) -> Result<(), Error> {
        check_counts(self)?;
        // To keep track of visited halfedges.
        let mut hvisited = vec![false; self.next_halfedge_index() as usize].into_boxed_slice();
        check_vertices(self, &mut hvisited)?;
        check_halfedges(self, &mut hvisited)?;
        check_faces(self)?;
        Ok(())
    }
}
