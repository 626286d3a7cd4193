use crate::{
    element::{FH, Face, HH, VH},
    error::Error,
    mesh::HalfedgeMesh,
};

impl<T> HalfedgeMesh<T> {
    /// Next halfedge of `h`, as if the `relinks` were already applied.
    fn pending_next(&self, relinks: &[(HH, HH)], h: HH) -> HH {
        match relinks.iter().rev().find(|(prev, _)| *prev == h) {
            Some((_, next)) => *next,
            None => self.next_halfedge(h),
        }
    }

    /// Previous halfedge of `h`, as if the `relinks` were already applied.
    fn pending_prev(&self, relinks: &[(HH, HH)], h: HH) -> HH {
        match relinks.iter().rev().find(|(_, next)| *next == h) {
            Some((prev, _)) => *prev,
            None => self.prev_halfedge(h),
        }
    }

    /// Add a face with the given vertices.
    ///
    /// All vertices must be on the boundary, and every existing halfedge
    /// along the loop must be a boundary halfedge. Halfedges that don't exist
    /// yet are created. The vertices of the new face are in the same order as
    /// `verts`.
    ///
    /// If a vertex is shared by several fans of faces that are not connected
    /// to each other, the boundary loops around that vertex are relinked so
    /// the new face fits between the right fans. If no such arrangement
    /// exists, [`Error::PatchRelinkingFailed`] is returned. The mesh is not
    /// modified when an error is returned.
    pub fn add_face(&mut self, verts: &[VH]) -> Result<FH, Error> {
        let n = verts.len();
        if n < 3 {
            return Err(Error::DegenerateFace(n));
        }
        // Check for topological errors.
        for (i, &v) in verts.iter().enumerate() {
            self.check_vertex(v)?;
            if verts[..i].contains(&v) {
                return Err(Error::DuplicateFaceVertex(v));
            }
            if !self.is_boundary_vertex(v) {
                return Err(Error::ComplexVertex(v));
            }
        }
        let mut loop_halfedges: Vec<Option<HH>> = Vec::with_capacity(n);
        for i in 0..n {
            let h = self.find_halfedge(verts[i], verts[(i + 1) % n]);
            if let Some(h) = h {
                if !self.is_boundary_halfedge(h) {
                    return Err(Error::ComplexHalfedge(h));
                }
            }
            loop_halfedges.push(h);
        }
        /* Two consecutive halfedges that already exist must end up next to
         * each other in the new face. If they aren't next to each other on the
         * boundary, the fan between them (the patch) is moved into another gap
         * around the same vertex. This is only possible if the vertex has
         * another boundary gap, i.e. it is non-manifold.
         */
        let mut relinks: Vec<(HH, HH)> = Vec::new();
        for i in 0..n {
            let (prev, next) = match (loop_halfedges[i], loop_halfedges[(i + 1) % n]) {
                (Some(prev), Some(next)) if self.pending_next(&relinks, prev) != next => {
                    (prev, next)
                }
                _ => continue,
            };
            // Search for a free gap.
            let boundprev = {
                let mut out = next.opposite();
                loop {
                    out = self.pending_next(&relinks, out).opposite();
                    if self.is_boundary_halfedge(out) {
                        break;
                    }
                }
                out
            };
            if boundprev == prev {
                return Err(Error::PatchRelinkingFailed);
            }
            let boundnext = self.pending_next(&relinks, boundprev);
            debug_assert!(self.is_boundary_halfedge(boundnext));
            let pstart = self.pending_next(&relinks, prev);
            let pend = self.pending_prev(&relinks, next);
            relinks.extend_from_slice(&[(boundprev, pstart), (pend, boundnext), (prev, next)]);
        }
        // No more errors from this point. Start modifying the mesh.
        for (prev, next) in relinks {
            self.link_halfedges(prev, next);
        }
        let mut is_new = Vec::with_capacity(n);
        let mut halfedges = Vec::with_capacity(n);
        for (i, h) in loop_halfedges.into_iter().enumerate() {
            is_new.push(h.is_none());
            halfedges.push(match h {
                Some(h) => h,
                None => self.new_edge(verts[i], verts[(i + 1) % n]).halfedge(false),
            });
        }
        let mut next_cache: Vec<(HH, HH)> = Vec::with_capacity(n * 3);
        let mut needs_adjust = vec![false; n];
        for i in 0..n {
            let j = (i + 1) % n;
            let v = verts[j];
            let innerprev = halfedges[i];
            let innernext = halfedges[j];
            let outerprev = innernext.opposite();
            let outernext = innerprev.opposite();
            match (is_new[i], is_new[j]) {
                (false, false) => {
                    needs_adjust[j] = self.vertex_halfedge(v) == Some(innernext);
                    continue;
                }
                (true, false) => {
                    let boundprev = self.prev_halfedge(innernext);
                    next_cache.push((boundprev, outernext));
                    self.vertex_mut(v).halfedge = Some(outernext);
                }
                (false, true) => {
                    let boundnext = self.next_halfedge(innerprev);
                    next_cache.push((outerprev, boundnext));
                    self.vertex_mut(v).halfedge = Some(boundnext);
                }
                (true, true) => match self.vertex_halfedge(v) {
                    Some(boundnext) => {
                        // Put the new face into the gap right before the
                        // outgoing boundary halfedge of this vertex.
                        let boundprev = self.prev_halfedge(boundnext);
                        next_cache.extend_from_slice(&[
                            (boundprev, outernext),
                            (outerprev, boundnext),
                        ]);
                    }
                    None => {
                        self.vertex_mut(v).halfedge = Some(outernext);
                        next_cache.push((outerprev, outernext));
                    }
                },
            }
            next_cache.push((innerprev, innernext));
        }
        // Create the face.
        let fnew: FH = (self.faces.len() as u32).into();
        self.faces.push(Some(Face {
            halfedge: halfedges[n - 1],
        }));
        self.nfaces += 1;
        for &h in &halfedges {
            self.halfedge_mut(h).face = Some(fnew);
        }
        for (prev, next) in next_cache {
            self.link_halfedges(prev, next);
        }
        // Adjust vertices' halfedge handles.
        for (i, &v) in verts.iter().enumerate() {
            if needs_adjust[i] {
                self.adjust_outgoing_halfedge(v);
            }
        }
        Ok(fnew)
    }
}
