use crate::{
    element::{EH, FH, HH, Handle, VH},
    error::Error,
    iterator,
    mesh::HalfedgeMesh,
};

/// Move the live slots to the front, keeping their order. Returns the new
/// index of every old slot. Erased slots map to `u32::MAX`, which is never
/// read back because nothing live refers to them.
pub(crate) fn compact<X>(slots: &mut Vec<Option<X>>) -> Vec<u32> {
    let mut map = vec![u32::MAX; slots.len()];
    let mut next = 0u32;
    for (i, slot) in slots.iter().enumerate() {
        if slot.is_some() {
            map[i] = next;
            next += 1;
        }
    }
    slots.retain(|slot| slot.is_some());
    map
}

impl<T> HalfedgeMesh<T> {
    /// Compact the mesh so the indices of vertices, edges and faces are dense
    /// again, and the next free indices come down to the element counts.
    ///
    /// If `cull_isolated` is true, faces with no adjacent faces, edges with no
    /// faces on either side, and vertices with no edges are removed before
    /// compacting. Faces are done first, then edges, then vertices. Each pass
    /// can leave behind elements that the passes after it cull.
    ///
    /// All handles obtained before this call are invalidated.
    pub fn clean_mesh(&mut self, cull_isolated: bool) -> Result<(), Error> {
        self.clean_faces(cull_isolated)?;
        self.clean_edges(cull_isolated)?;
        self.clean_vertices(cull_isolated)?;
        Ok(())
    }

    fn clean_faces(&mut self, cull_isolated: bool) -> Result<(), Error> {
        if cull_isolated {
            let isolated: Vec<FH> = self
                .faces()
                .filter(|f| iterator::ff_ccw_iter(self, *f).next().is_none())
                .collect();
            for f in isolated {
                self.remove_face(f)?;
            }
        }
        let fmap = compact(&mut self.faces);
        for edge in self.edges.iter_mut().flatten() {
            for h in edge.halfedges.iter_mut() {
                h.face = h.face.map(|f| FH::from(fmap[f.index() as usize]));
            }
        }
        Ok(())
    }

    fn clean_edges(&mut self, cull_isolated: bool) -> Result<(), Error> {
        if cull_isolated {
            let isolated: Vec<EH> = self.edges().filter(|e| self.is_boundary_edge(*e)).collect();
            for e in isolated {
                // Removing an edge never touches other loose edges.
                self.remove_edge(e)?;
            }
        }
        let emap = compact(&mut self.edges);
        // Halfedges keep their side of the pair.
        let hmap = |h: HH| -> HH {
            ((emap[(h.index() >> 1) as usize] << 1) | (h.index() & 1)).into()
        };
        for edge in self.edges.iter_mut().flatten() {
            for h in edge.halfedges.iter_mut() {
                h.next = hmap(h.next);
                h.prev = hmap(h.prev);
            }
        }
        for vertex in self.vertices.iter_mut().flatten() {
            vertex.halfedge = vertex.halfedge.map(hmap);
        }
        for face in self.faces.iter_mut().flatten() {
            face.halfedge = hmap(face.halfedge);
        }
        Ok(())
    }

    fn clean_vertices(&mut self, cull_isolated: bool) -> Result<(), Error> {
        if cull_isolated {
            let isolated: Vec<VH> = self
                .vertices()
                .filter(|v| self.vertex_halfedge(*v).is_none())
                .collect();
            for v in isolated {
                self.erase_vertex(v)?;
            }
        }
        let vmap = compact(&mut self.vertices);
        for edge in self.edges.iter_mut().flatten() {
            for h in edge.halfedges.iter_mut() {
                h.vertex = vmap[h.vertex.index() as usize].into();
            }
        }
        Ok(())
    }
}
