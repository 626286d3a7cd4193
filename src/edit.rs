use crate::{
    element::{EH, FH, HH, Handle, VH},
    error::Error,
    iterator,
    mesh::HalfedgeMesh,
};

impl<T> HalfedgeMesh<T> {
    /// Erase a vertex that has no edges.
    pub fn erase_vertex(&mut self, v: VH) -> Result<(), Error> {
        self.check_vertex(v)?;
        if self.vertex_halfedge(v).is_some() {
            return Err(Error::VertexStillConnected(v));
        }
        self.vertices[v.index() as usize] = None;
        self.nverts -= 1;
        Ok(())
    }

    /// Erase a face, leaving a hole behind.
    ///
    /// The halfedges of the face become boundary halfedges, and the vertices
    /// of the face are pointed at boundary halfedges. No edges or vertices are
    /// erased.
    pub fn erase_face(&mut self, f: FH) -> Result<(), Error> {
        self.check_face(f)?;
        let halfedges: Vec<HH> = iterator::fh_ccw_iter(self, f).collect();
        for &h in &halfedges {
            self.halfedge_mut(h).face = None;
        }
        self.faces[f.index() as usize] = None;
        self.nfaces -= 1;
        for h in halfedges {
            self.adjust_outgoing_halfedge(self.tail_vertex(h));
        }
        Ok(())
    }

    /// Erase an edge and unsplice it from the loops it belongs to.
    ///
    /// Faces on either side of the edge are erased first. The boundary loops
    /// on either side are merged into one. The end points of the edge are not
    /// erased, even if they end up with no edges.
    pub fn erase_edge(&mut self, e: EH) -> Result<(), Error> {
        self.check_edge(e)?;
        let (h0, h1) = e.halfedges();
        for f in iterator::ef_iter(self, e).collect::<Vec<_>>() {
            self.erase_face(f)?;
        }
        let (v0, next0, prev0) = (
            self.head_vertex(h0),
            self.next_halfedge(h0),
            self.prev_halfedge(h0),
        );
        let (v1, next1, prev1) = (
            self.head_vertex(h1),
            self.next_halfedge(h1),
            self.prev_halfedge(h1),
        );
        // Merge the loops on either side.
        self.link_halfedges(prev0, next1);
        self.link_halfedges(prev1, next0);
        // Rewire vertex -> halfedge.
        for (v, outgoing, next) in [(v0, h1, next0), (v1, h0, next1)] {
            if self.vertex_halfedge(v) == Some(outgoing) {
                self.vertex_mut(v).halfedge = if next == outgoing { None } else { Some(next) };
            }
        }
        self.edges[e.index() as usize] = None;
        self.nedges -= 1;
        for v in [v0, v1] {
            self.adjust_outgoing_halfedge(v);
        }
        Ok(())
    }

    /// Remove a face.
    ///
    /// Edges of the face that end up with no faces on either side are erased,
    /// and so are vertices of the face that end up with no edges.
    pub fn remove_face(&mut self, f: FH) -> Result<(), Error> {
        self.check_face(f)?;
        let halfedges: Vec<HH> = iterator::fh_ccw_iter(self, f).collect();
        let verts: Vec<VH> = halfedges.iter().map(|h| self.head_vertex(*h)).collect();
        self.erase_face(f)?;
        for h in halfedges {
            if self.is_boundary_halfedge(h.opposite()) {
                self.erase_edge(h.edge())?;
            }
        }
        for v in verts {
            if self.vertex_halfedge(v).is_none() {
                self.erase_vertex(v)?;
            }
        }
        Ok(())
    }

    /// Remove an edge.
    ///
    /// A loose edge is erased along with any end point left without edges.
    /// Otherwise the faces on either side of the edge are removed, which in
    /// turn erases the edge.
    pub fn remove_edge(&mut self, e: EH) -> Result<(), Error> {
        self.check_edge(e)?;
        let (h0, h1) = e.halfedges();
        match (self.halfedge_face(h0), self.halfedge_face(h1)) {
            (None, None) => {
                let verts = [self.head_vertex(h0), self.head_vertex(h1)];
                self.erase_edge(e)?;
                for v in verts {
                    if self.vertex_halfedge(v).is_none() {
                        self.erase_vertex(v)?;
                    }
                }
            }
            (Some(f), None) | (None, Some(f)) => self.remove_face(f)?,
            (Some(f0), Some(f1)) => {
                self.remove_face(f0)?;
                if self.is_valid_face(f1) {
                    self.remove_face(f1)?;
                }
            }
        }
        Ok(())
    }

    /// Remove a vertex, and everything attached to it.
    pub fn remove_vertex(&mut self, v: VH) -> Result<(), Error> {
        self.check_vertex(v)?;
        let faces: Vec<FH> = iterator::vf_ccw_iter(self, v).collect();
        for f in faces {
            if self.is_valid_face(f) {
                self.remove_face(f)?;
            }
        }
        if !self.is_valid_vertex(v) {
            return Ok(());
        }
        let edges: Vec<EH> = iterator::ve_ccw_iter(self, v).collect();
        for e in edges {
            if self.is_valid_edge(e) {
                self.remove_edge(e)?;
            }
        }
        if self.is_valid_vertex(v) {
            self.erase_vertex(v)?;
        }
        Ok(())
    }
}
