use crate::{
    element::{Edge, Face, Halfedge, Handle, Vertex, EH, FH, HH, VH},
    error::Error,
    iterator,
};

/// A polygon mesh that stores its connectivity as halfedges.
///
/// Vertices, edges and faces live in index-keyed slots. Adding an element
/// always takes the next free index, and erasing an element leaves an empty
/// slot behind, so the handles of the remaining elements stay valid until the
/// mesh is compacted with [`HalfedgeMesh::clean_mesh`]. Reading through a
/// handle whose element was erased panics.
///
/// `T` is the position of a vertex. The mesh never does arithmetic on it.
#[derive(Debug, Clone)]
pub struct HalfedgeMesh<T> {
    pub(crate) vertices: Vec<Option<Vertex<T>>>,
    pub(crate) edges: Vec<Option<Edge>>,
    pub(crate) faces: Vec<Option<Face>>,
    pub(crate) nverts: usize,
    pub(crate) nedges: usize,
    pub(crate) nfaces: usize,
}

impl<T> Default for HalfedgeMesh<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HalfedgeMesh<T> {
    pub fn new() -> Self {
        HalfedgeMesh {
            vertices: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
            nverts: 0,
            nedges: 0,
            nfaces: 0,
        }
    }

    pub fn with_capacity(nverts: usize, nedges: usize, nfaces: usize) -> Self {
        HalfedgeMesh {
            vertices: Vec::with_capacity(nverts),
            edges: Vec::with_capacity(nedges),
            faces: Vec::with_capacity(nfaces),
            nverts: 0,
            nedges: 0,
            nfaces: 0,
        }
    }

    pub(crate) fn vertex(&self, v: VH) -> &Vertex<T> {
        match &self.vertices[v.index() as usize] {
            Some(vertex) => vertex,
            None => panic!("{v} has been erased"),
        }
    }

    pub(crate) fn vertex_mut(&mut self, v: VH) -> &mut Vertex<T> {
        match &mut self.vertices[v.index() as usize] {
            Some(vertex) => vertex,
            None => panic!("{v} has been erased"),
        }
    }

    pub(crate) fn halfedge(&self, h: HH) -> &Halfedge {
        match &self.edges[(h.index() >> 1) as usize] {
            Some(edge) => &edge.halfedges[(h.index() & 1) as usize],
            None => panic!("{h} has been erased"),
        }
    }

    pub(crate) fn halfedge_mut(&mut self, h: HH) -> &mut Halfedge {
        match &mut self.edges[(h.index() >> 1) as usize] {
            Some(edge) => &mut edge.halfedges[(h.index() & 1) as usize],
            None => panic!("{h} has been erased"),
        }
    }

    pub(crate) fn face(&self, f: FH) -> &Face {
        match &self.faces[f.index() as usize] {
            Some(face) => face,
            None => panic!("{f} has been erased"),
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.nverts
    }

    pub fn num_edges(&self) -> usize {
        self.nedges
    }

    pub fn num_halfedges(&self) -> usize {
        self.nedges * 2
    }

    pub fn num_faces(&self) -> usize {
        self.nfaces
    }

    /// The index the next added vertex will get. This only comes down to
    /// [`HalfedgeMesh::num_vertices`] when the mesh is compacted.
    pub fn next_vertex_index(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// The index the first halfedge of the next added edge will get.
    pub fn next_halfedge_index(&self) -> u32 {
        (self.edges.len() * 2) as u32
    }

    pub fn next_face_index(&self) -> u32 {
        self.faces.len() as u32
    }

    pub fn is_valid_vertex(&self, v: VH) -> bool {
        matches!(self.vertices.get(v.index() as usize), Some(Some(_)))
    }

    pub fn is_valid_halfedge(&self, h: HH) -> bool {
        self.is_valid_edge(h.edge())
    }

    pub fn is_valid_edge(&self, e: EH) -> bool {
        matches!(self.edges.get(e.index() as usize), Some(Some(_)))
    }

    pub fn is_valid_face(&self, f: FH) -> bool {
        matches!(self.faces.get(f.index() as usize), Some(Some(_)))
    }

    pub(crate) fn check_vertex(&self, v: VH) -> Result<(), Error> {
        match self.is_valid_vertex(v) {
            true => Ok(()),
            false => Err(Error::VertexNotFound(v)),
        }
    }

    pub(crate) fn check_edge(&self, e: EH) -> Result<(), Error> {
        match self.is_valid_edge(e) {
            true => Ok(()),
            false => Err(Error::EdgeNotFound(e)),
        }
    }

    pub(crate) fn check_face(&self, f: FH) -> Result<(), Error> {
        match self.is_valid_face(f) {
            true => Ok(()),
            false => Err(Error::FaceNotFound(f)),
        }
    }

    /// Live vertices in increasing order of their index.
    pub fn vertices(&self) -> impl Iterator<Item = VH> + use<'_, T> {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_ref().map(|_| (i as u32).into()))
    }

    pub fn halfedges(&self) -> impl Iterator<Item = HH> + use<'_, T> {
        self.edges().flat_map(|e| {
            let (h, oh) = e.halfedges();
            [h, oh]
        })
    }

    pub fn edges(&self) -> impl Iterator<Item = EH> + use<'_, T> {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_ref().map(|_| (i as u32).into()))
    }

    pub fn faces(&self) -> impl Iterator<Item = FH> + use<'_, T> {
        self.faces
            .iter()
            .enumerate()
            .filter_map(|(i, f)| f.as_ref().map(|_| (i as u32).into()))
    }

    pub fn point(&self, v: VH) -> Result<&T, Error> {
        self.check_vertex(v)?;
        Ok(&self.vertex(v).pos)
    }

    pub fn point_mut(&mut self, v: VH) -> Result<&mut T, Error> {
        self.check_vertex(v)?;
        Ok(&mut self.vertex_mut(v).pos)
    }

    pub fn vertex_halfedge(&self, v: VH) -> Option<HH> {
        self.vertex(v).halfedge
    }

    pub fn head_vertex(&self, h: HH) -> VH {
        self.halfedge(h).vertex
    }

    pub fn tail_vertex(&self, h: HH) -> VH {
        self.halfedge(h.opposite()).vertex
    }

    pub fn prev_halfedge(&self, h: HH) -> HH {
        self.halfedge(h).prev
    }

    pub fn next_halfedge(&self, h: HH) -> HH {
        self.halfedge(h).next
    }

    pub fn halfedge_face(&self, h: HH) -> Option<FH> {
        self.halfedge(h).face
    }

    pub fn face_halfedge(&self, f: FH) -> HH {
        self.face(f).halfedge
    }

    pub fn is_boundary_halfedge(&self, h: HH) -> bool {
        self.halfedge(h).face.is_none()
    }

    /// An edge is on the boundary when neither of its halfedges has a face.
    pub fn is_boundary_edge(&self, e: EH) -> bool {
        let (h, oh) = e.halfedges();
        self.is_boundary_halfedge(h) && self.is_boundary_halfedge(oh)
    }

    pub fn is_boundary_vertex(&self, v: VH) -> bool {
        match self.vertex(v).halfedge {
            Some(h) => self.is_boundary_halfedge(h),
            None => true,
        }
    }

    pub fn is_manifold_vertex(&self, v: VH) -> bool {
        /* If just the first outgoing halfedge is on the boundary, it just means
         * the vertex is on the boundary. If the first outgoing halfedge is not
         * on the boundary, it implies the vertex is in the interior. In both
         * cases the vertex is manifold. If any outgoing halfedge apart from the
         * first is on the boundary, it implies there are more than one gaps
         * when circulating around the vertex, making it non-manifold. For this
         * reason, we skip the first halfedge and check the rest.
         */
        iterator::voh_ccw_iter(self, v)
            .skip(1)
            .all(|h| !self.is_boundary_halfedge(h))
    }

    pub fn vertex_valence(&self, v: VH) -> usize {
        iterator::voh_ccw_iter(self, v).count()
    }

    pub fn face_valence(&self, f: FH) -> usize {
        iterator::fh_ccw_iter(self, f).count()
    }

    /// Find the halfedge going from `from` to `to` by circulating around
    /// `from`.
    pub fn find_halfedge(&self, from: VH, to: VH) -> Option<HH> {
        iterator::voh_ccw_iter(self, from).find(|h| self.head_vertex(*h) == to)
    }

    /// Point the vertex at one of its boundary halfedges, if it has any.
    pub(crate) fn adjust_outgoing_halfedge(&mut self, v: VH) {
        let h = iterator::voh_ccw_iter(self, v).find(|h| self.is_boundary_halfedge(*h));
        if let Some(h) = h {
            self.vertex_mut(v).halfedge = Some(h);
        }
    }

    pub(crate) fn link_halfedges(&mut self, hprev: HH, hnext: HH) {
        self.halfedge_mut(hprev).next = hnext;
        self.halfedge_mut(hnext).prev = hprev;
    }

    pub fn add_vertex(&mut self, pos: T) -> VH {
        let vi = self.vertices.len() as u32;
        self.vertices.push(Some(Vertex {
            pos,
            halfedge: None,
        }));
        self.nverts += 1;
        vi.into()
    }

    /// Add a vertex for every position, and write their handles into `out`.
    pub fn add_vertices(&mut self, positions: &[T], out: &mut [VH]) -> Result<(), Error>
    where
        T: Clone,
    {
        if positions.len() != out.len() {
            return Err(Error::MismatchedArrayLengths(positions.len(), out.len()));
        }
        self.vertices.reserve(positions.len());
        for (pos, v) in positions.iter().zip(out.iter_mut()) {
            *v = self.add_vertex(pos.clone());
        }
        Ok(())
    }

    /// Find a vertex at the given position.
    pub fn find_vertex(&self, pos: &T) -> Option<VH>
    where
        T: PartialEq,
    {
        self.vertices().find(|v| self.vertex(*v).pos == *pos)
    }

    /// Create a new pair of halfedges between `from` and `to`. The first
    /// halfedge of the pair goes from `from` to `to`. The halfedges are linked
    /// to each other to form a loop of two, and nothing else points to them.
    /// Returns `None` if `from` and `to` are the same vertex, or a halfedge
    /// between them already exists.
    pub(crate) fn add_pair(&mut self, from: VH, to: VH) -> Option<EH> {
        if from == to || self.find_halfedge(from, to).is_some() {
            return None;
        }
        Some(self.new_edge(from, to))
    }

    /// Push a pair of halfedges without looking for existing ones.
    pub(crate) fn new_edge(&mut self, from: VH, to: VH) -> EH {
        let ei = self.edges.len() as u32;
        let (h, oh) = EH::from(ei).halfedges();
        self.edges.push(Some(Edge {
            halfedges: [
                Halfedge {
                    face: None,
                    vertex: to,
                    next: oh,
                    prev: oh,
                },
                Halfedge {
                    face: None,
                    vertex: from,
                    next: h,
                    prev: h,
                },
            ],
        }));
        self.nedges += 1;
        ei.into()
    }

    /// Add a loose edge between two vertices.
    ///
    /// Both vertices must be on the boundary. The new edge is spliced into
    /// the boundary loops at both ends, and has no faces on either side. If
    /// the vertices are the same, or already connected, `None` is returned
    /// and nothing changes.
    pub fn add_edge(&mut self, from: VH, to: VH) -> Result<Option<EH>, Error> {
        for v in [from, to] {
            self.check_vertex(v)?;
            if !self.is_boundary_vertex(v) {
                return Err(Error::ComplexVertex(v));
            }
        }
        let e = match self.add_pair(from, to) {
            Some(e) => e,
            None => return Ok(None),
        };
        let (h, oh) = e.halfedges();
        // `oh` comes into `from` and `h` leaves it. The other end is the
        // mirror image of this.
        for (v, incoming, outgoing) in [(from, oh, h), (to, h, oh)] {
            match self.vertex_halfedge(v) {
                Some(boundnext) => {
                    let boundprev = self.prev_halfedge(boundnext);
                    self.link_halfedges(boundprev, outgoing);
                    self.link_halfedges(incoming, boundnext);
                }
                None => {
                    self.link_halfedges(incoming, outgoing);
                    self.vertex_mut(v).halfedge = Some(outgoing);
                }
            }
        }
        Ok(Some(e))
    }

    pub fn add_tri_face(&mut self, v0: VH, v1: VH, v2: VH) -> Result<FH, Error> {
        self.add_face(&[v0, v1, v2])
    }

    pub fn add_quad_face(&mut self, v0: VH, v1: VH, v2: VH, v3: VH) -> Result<FH, Error> {
        self.add_face(&[v0, v1, v2, v3])
    }
}

#[cfg(test)]
pub(crate) mod test {
    use arrayvec::ArrayVec;

    use crate::{
        element::{Handle, VH},
        error::Error,
    };

    use super::HalfedgeMesh;

    /**
     * Makes a box with the following topology.
     * ```text
     *
     *      7-----------6
     *     /|          /|
     *    / |         / |
     *   4-----------5  |
     *   |  |        |  |
     *   |  3--------|--2
     *   | /         | /
     *   |/          |/
     *   0-----------1
     * ```
     */
    pub(crate) fn quad_box() -> HalfedgeMesh<u32> {
        let mut mesh = HalfedgeMesh::with_capacity(8, 12, 6);
        let verts: Vec<_> = (0..8u32).map(|i| mesh.add_vertex(i).index()).collect();
        assert_eq!(verts, (0u32..8).collect::<Vec<_>>());
        let faces: Vec<_> = [
            [0u32, 3, 2, 1],
            [0, 1, 5, 4],
            [1, 2, 6, 5],
            [2, 3, 7, 6],
            [3, 0, 4, 7],
            [4, 5, 6, 7],
        ]
        .iter()
        .map(|indices| {
            mesh.add_face(&indices.map(|i| i.into()))
                .expect("Unable to add a face")
        })
        .collect();
        assert_eq!(faces, (0..6u32).map(|i| i.into()).collect::<Vec<_>>());
        assert_eq!(mesh.num_vertices(), 8);
        assert_eq!(mesh.num_halfedges(), 24);
        assert_eq!(mesh.num_edges(), 12);
        assert_eq!(mesh.num_faces(), 6);
        mesh
    }

    pub(crate) fn loop_mesh() -> HalfedgeMesh<u32> {
        /*

                            12---------13---------14---------15
                           /          /          /          /
                          /   f5     /   f6     /    f7    /
                         /          /          /          /
                        /          /          /          /
                       8----------9----------10---------11
                      /          /          /          /
                     /    f3    /          /    f4    /
                    /          /          /          /
                   /          /          /          /
                  4----------5----------6----------7
                 /          /          /          /
                /   f0     /    f1    /    f2    /
               /          /          /          /
              /          /          /          /
             0----------1----------2----------3
        */
        let mut mesh = HalfedgeMesh::with_capacity(16, 24, 8);
        for i in 0u32..16 {
            mesh.add_vertex(i);
        }
        for fvi in [
            [0u32, 1, 5, 4],
            [1, 2, 6, 5],
            [2, 3, 7, 6],
            [4, 5, 9, 8],
            [6, 7, 11, 10],
            [8, 9, 13, 12],
            [9, 10, 14, 13],
            [10, 11, 15, 14],
        ] {
            let vs = fvi.iter().map(|i| i.into()).collect::<ArrayVec<VH, 4>>();
            mesh.add_face(&vs).expect("Unable to add face");
        }
        mesh
    }

    /// Triangles of a fan around vertex 0, with the rim vertices starting at
    /// 1. An open fan of `n` triangles has `n + 1` rim vertices, a closed one
    /// wraps back around to vertex 1.
    pub(crate) fn fan(n: u32, closed: bool) -> Vec<[u32; 3]> {
        (0..n)
            .map(|i| match closed {
                true => [0, 1 + i, 1 + (i + 1) % n],
                false => [0, 1 + i, 2 + i],
            })
            .collect()
    }

    #[test]
    fn t_add_vertex_indices() {
        let mut mesh = HalfedgeMesh::new();
        let verts: Vec<_> = (0..5).map(|i| mesh.add_vertex(i * 10)).collect();
        assert_eq!(verts, (0..5u32).map(|i| i.into()).collect::<Vec<VH>>());
        assert_eq!(mesh.num_vertices(), 5);
        assert_eq!(mesh.next_vertex_index(), 5);
        assert!(verts.iter().all(|v| mesh.is_boundary_vertex(*v)));
        assert!(verts.iter().all(|v| mesh.vertex_halfedge(*v).is_none()));
        assert_eq!(*mesh.point(3.into()).expect("Cannot read point"), 30);
        assert_eq!(mesh.find_vertex(&40), Some(4.into()));
        assert_eq!(mesh.find_vertex(&41), None);
    }

    #[test]
    fn t_add_vertices_mismatched() {
        let mut mesh = HalfedgeMesh::new();
        let mut out = [VH::from(0); 2];
        assert!(matches!(
            mesh.add_vertices(&[1, 2, 3], &mut out),
            Err(Error::MismatchedArrayLengths(3, 2))
        ));
        assert_eq!(mesh.num_vertices(), 0);
        let mut out = [VH::from(0); 3];
        mesh.add_vertices(&[1, 2, 3], &mut out)
            .expect("Cannot add vertices");
        assert_eq!(out, [0.into(), 1.into(), 2.into()]);
    }

    #[test]
    fn t_isolated_edge() {
        let mut mesh = HalfedgeMesh::new();
        let a = mesh.add_vertex(0);
        let b = mesh.add_vertex(1);
        let e = mesh
            .add_edge(a, b)
            .expect("Cannot add edge")
            .expect("Edge must be new");
        let (h, oh) = e.halfedges();
        assert_eq!((h.index(), oh.index()), (0, 1));
        assert!(h.is_boundary(&mesh));
        assert!(oh.is_boundary(&mesh));
        assert!(e.is_boundary(&mesh));
        assert_eq!(h.tail(&mesh), a);
        assert_eq!(h.head(&mesh), b);
        assert_eq!(mesh.next_halfedge(h), oh);
        assert_eq!(mesh.next_halfedge(oh), h);
        assert_eq!(mesh.find_halfedge(a, b), Some(h));
        assert_eq!(mesh.find_halfedge(b, a), Some(oh));
        assert_eq!(e.faces(&mesh).count(), 0);
        // Adding the same edge in either direction is a no-op.
        assert!(mesh.add_edge(a, b).expect("Cannot add edge").is_none());
        assert!(mesh.add_edge(b, a).expect("Cannot add edge").is_none());
        assert!(mesh.add_edge(a, a).expect("Cannot add edge").is_none());
        assert_eq!(mesh.num_edges(), 1);
        mesh.check_topology().expect("Topology errors found");
    }

    #[test]
    fn t_edge_chain() {
        let mut mesh = HalfedgeMesh::new();
        let verts: Vec<_> = (0..4).map(|i| mesh.add_vertex(i)).collect();
        for i in 0..3 {
            mesh.add_edge(verts[i], verts[i + 1])
                .expect("Cannot add edge")
                .expect("Edge must be new");
        }
        // Close the chain into a loop, which can then become a face.
        mesh.add_edge(verts[3], verts[0])
            .expect("Cannot add edge")
            .expect("Edge must be new");
        mesh.check_topology().expect("Topology errors found");
        assert_eq!(mesh.vertex_valence(verts[1]), 2);
        let f = mesh.add_face(&verts).expect("Cannot add face");
        assert_eq!(mesh.num_edges(), 4);
        assert_eq!(f.vertices(&mesh).collect::<Vec<_>>(), verts);
        mesh.check_topology().expect("Topology errors found");
    }

    #[test]
    fn t_add_edge_interior_vertex() {
        let mut qbox = quad_box();
        let v = qbox.add_vertex(100);
        assert!(matches!(
            qbox.add_edge(0.into(), v),
            Err(Error::ComplexVertex(w)) if w == VH::from(0)
        ));
        assert!(matches!(
            qbox.add_edge(v, 200.into()),
            Err(Error::VertexNotFound(w)) if w == VH::from(200)
        ));
    }
}
