use crate::{
    clean::compact,
    element::{EH, FH, HH, Handle, VH},
    error::Error,
    iterator,
    mesh::HalfedgeMesh,
    traits::PolyMesh,
};

#[derive(Debug, Clone)]
struct Vertex<T> {
    pos: T,
    edges: Vec<EH>,
}

#[derive(Debug, Clone)]
struct Edge {
    vertices: [VH; 2],
    faces: Vec<FH>,
}

#[derive(Debug, Clone)]
struct Face {
    vertices: Vec<VH>,
    edges: Vec<EH>,
}

/// A polygon mesh that stores adjacency as lists instead of halfedges.
///
/// Every vertex knows the edges connected to it, every edge knows its two
/// vertices and the faces adjacent to it, and every face knows its vertices
/// and edges. The edge at position `i` of a face connects the vertices at
/// positions `i` and `i + 1`. There is no notion of orientation, so an edge can
/// be shared by at most two faces, but the faces are free to traverse it in
/// any direction.
///
/// Elements live in index-keyed slots, like [`HalfedgeMesh`], and use the same
/// handle types.
#[derive(Debug, Clone)]
pub struct FaceVertexMesh<T> {
    vertices: Vec<Option<Vertex<T>>>,
    edges: Vec<Option<Edge>>,
    faces: Vec<Option<Face>>,
    nverts: usize,
    nedges: usize,
    nfaces: usize,
}

impl<T> Default for FaceVertexMesh<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FaceVertexMesh<T> {
    pub fn new() -> Self {
        Self::with_capacity(0, 0, 0)
    }

    pub fn with_capacity(nverts: usize, nedges: usize, nfaces: usize) -> Self {
        FaceVertexMesh {
            vertices: Vec::with_capacity(nverts),
            edges: Vec::with_capacity(nedges),
            faces: Vec::with_capacity(nfaces),
            nverts: 0,
            nedges: 0,
            nfaces: 0,
        }
    }

    fn vertex(&self, v: VH) -> &Vertex<T> {
        match &self.vertices[v.index() as usize] {
            Some(vertex) => vertex,
            None => panic!("{v} has been erased"),
        }
    }

    fn vertex_mut(&mut self, v: VH) -> &mut Vertex<T> {
        match &mut self.vertices[v.index() as usize] {
            Some(vertex) => vertex,
            None => panic!("{v} has been erased"),
        }
    }

    fn edge(&self, e: EH) -> &Edge {
        match &self.edges[e.index() as usize] {
            Some(edge) => edge,
            None => panic!("{e} has been erased"),
        }
    }

    fn edge_mut(&mut self, e: EH) -> &mut Edge {
        match &mut self.edges[e.index() as usize] {
            Some(edge) => edge,
            None => panic!("{e} has been erased"),
        }
    }

    fn face(&self, f: FH) -> &Face {
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

    pub fn num_faces(&self) -> usize {
        self.nfaces
    }

    pub fn is_valid_vertex(&self, v: VH) -> bool {
        matches!(self.vertices.get(v.index() as usize), Some(Some(_)))
    }

    pub fn is_valid_edge(&self, e: EH) -> bool {
        matches!(self.edges.get(e.index() as usize), Some(Some(_)))
    }

    pub fn is_valid_face(&self, f: FH) -> bool {
        matches!(self.faces.get(f.index() as usize), Some(Some(_)))
    }

    fn check_vertex(&self, v: VH) -> Result<(), Error> {
        match self.is_valid_vertex(v) {
            true => Ok(()),
            false => Err(Error::VertexNotFound(v)),
        }
    }

    fn check_edge(&self, e: EH) -> Result<(), Error> {
        match self.is_valid_edge(e) {
            true => Ok(()),
            false => Err(Error::EdgeNotFound(e)),
        }
    }

    fn check_face(&self, f: FH) -> Result<(), Error> {
        match self.is_valid_face(f) {
            true => Ok(()),
            false => Err(Error::FaceNotFound(f)),
        }
    }

    pub fn vertices(&self) -> impl Iterator<Item = VH> + use<'_, T> {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_ref().map(|_| (i as u32).into()))
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

    /// Edges connected to a vertex, in the order they were added.
    pub fn vertex_edges(&self, v: VH) -> &[EH] {
        &self.vertex(v).edges
    }

    pub fn edge_vertices(&self, e: EH) -> [VH; 2] {
        self.edge(e).vertices
    }

    /// Faces adjacent to an edge. There are at most two.
    pub fn edge_faces(&self, e: EH) -> &[FH] {
        &self.edge(e).faces
    }

    pub fn face_vertices(&self, f: FH) -> &[VH] {
        &self.face(f).vertices
    }

    pub fn face_edges(&self, f: FH) -> &[EH] {
        &self.face(f).edges
    }

    /// Find the edge connecting `a` and `b`, in either direction.
    pub fn find_edge(&self, a: VH, b: VH) -> Option<EH> {
        self.vertex(a).edges.iter().copied().find(|e| {
            let [v0, v1] = self.edge(*e).vertices;
            (v0 == a && v1 == b) || (v0 == b && v1 == a)
        })
    }

    pub fn add_vertex(&mut self, pos: T) -> VH {
        let vi = self.vertices.len() as u32;
        self.vertices.push(Some(Vertex {
            pos,
            edges: Vec::new(),
        }));
        self.nverts += 1;
        vi.into()
    }

    fn new_edge(&mut self, from: VH, to: VH) -> EH {
        let e: EH = (self.edges.len() as u32).into();
        self.edges.push(Some(Edge {
            vertices: [from, to],
            faces: Vec::new(),
        }));
        self.nedges += 1;
        self.vertex_mut(from).edges.push(e);
        self.vertex_mut(to).edges.push(e);
        e
    }

    fn new_face(&mut self, vertices: Vec<VH>, edges: Vec<EH>) -> FH {
        let f: FH = (self.faces.len() as u32).into();
        for &e in &edges {
            self.edge_mut(e).faces.push(f);
        }
        self.faces.push(Some(Face { vertices, edges }));
        self.nfaces += 1;
        f
    }

    /// Add an edge between two vertices. If the vertices are the same, or
    /// already connected, `None` is returned and nothing changes.
    pub fn add_edge(&mut self, from: VH, to: VH) -> Result<Option<EH>, Error> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if from == to || self.find_edge(from, to).is_some() {
            return Ok(None);
        }
        Ok(Some(self.new_edge(from, to)))
    }

    /// Add a face with the given vertices, creating the edges that don't exist
    /// yet. Fails without modifying the mesh if an edge of the face already
    /// has two faces.
    pub fn add_face(&mut self, verts: &[VH]) -> Result<FH, Error> {
        let n = verts.len();
        if n < 3 {
            return Err(Error::DegenerateFace(n));
        }
        for (i, &v) in verts.iter().enumerate() {
            self.check_vertex(v)?;
            if verts[..i].contains(&v) {
                return Err(Error::DuplicateFaceVertex(v));
            }
        }
        let mut edges: Vec<Option<EH>> = Vec::with_capacity(n);
        for i in 0..n {
            let e = self.find_edge(verts[i], verts[(i + 1) % n]);
            if let Some(e) = e {
                if self.edge(e).faces.len() > 1 {
                    return Err(Error::ComplexEdge(e));
                }
            }
            edges.push(e);
        }
        let edges: Vec<EH> = edges
            .into_iter()
            .enumerate()
            .map(|(i, e)| match e {
                Some(e) => e,
                None => self.new_edge(verts[i], verts[(i + 1) % n]),
            })
            .collect();
        Ok(self.new_face(verts.to_vec(), edges))
    }

    /// Erase a vertex that has no edges.
    pub fn erase_vertex(&mut self, v: VH) -> Result<(), Error> {
        self.check_vertex(v)?;
        if !self.vertex(v).edges.is_empty() {
            return Err(Error::VertexStillConnected(v));
        }
        self.vertices[v.index() as usize] = None;
        self.nverts -= 1;
        Ok(())
    }

    /// Erase a face. Its edges and vertices are left alone.
    pub fn erase_face(&mut self, f: FH) -> Result<(), Error> {
        self.check_face(f)?;
        if let Some(face) = self.faces[f.index() as usize].take() {
            for e in face.edges {
                self.edge_mut(e).faces.retain(|g| *g != f);
            }
            self.nfaces -= 1;
        }
        Ok(())
    }

    /// Erase an edge and its faces. The end points are left alone.
    pub fn erase_edge(&mut self, e: EH) -> Result<(), Error> {
        self.check_edge(e)?;
        for f in self.edge(e).faces.clone() {
            self.erase_face(f)?;
        }
        if let Some(edge) = self.edges[e.index() as usize].take() {
            for v in edge.vertices {
                self.vertex_mut(v).edges.retain(|x| *x != e);
            }
            self.nedges -= 1;
        }
        Ok(())
    }

    /// Remove a face, and the edges and vertices it leaves without faces and
    /// edges respectively.
    pub fn remove_face(&mut self, f: FH) -> Result<(), Error> {
        self.check_face(f)?;
        let (verts, edges) = {
            let face = self.face(f);
            (face.vertices.clone(), face.edges.clone())
        };
        self.erase_face(f)?;
        for e in edges {
            if self.edge(e).faces.is_empty() {
                self.erase_edge(e)?;
            }
        }
        for v in verts {
            if self.vertex(v).edges.is_empty() {
                self.erase_vertex(v)?;
            }
        }
        Ok(())
    }

    /// Remove an edge. A loose edge is erased along with end points left
    /// without edges, otherwise the faces of the edge are removed.
    pub fn remove_edge(&mut self, e: EH) -> Result<(), Error> {
        self.check_edge(e)?;
        let faces = self.edge(e).faces.clone();
        if faces.is_empty() {
            let verts = self.edge(e).vertices;
            self.erase_edge(e)?;
            for v in verts {
                if self.vertex(v).edges.is_empty() {
                    self.erase_vertex(v)?;
                }
            }
            return Ok(());
        }
        for f in faces {
            if self.is_valid_face(f) {
                self.remove_face(f)?;
            }
        }
        Ok(())
    }

    /// Remove a vertex and everything attached to it.
    pub fn remove_vertex(&mut self, v: VH) -> Result<(), Error> {
        self.check_vertex(v)?;
        let mut faces: Vec<FH> = self
            .vertex(v)
            .edges
            .iter()
            .flat_map(|e| self.edge(*e).faces.iter().copied())
            .collect();
        faces.sort();
        faces.dedup();
        for f in faces {
            if self.is_valid_face(f) {
                self.remove_face(f)?;
            }
        }
        if !self.is_valid_vertex(v) {
            return Ok(());
        }
        for e in self.vertex(v).edges.clone() {
            if self.is_valid_edge(e) {
                self.remove_edge(e)?;
            }
        }
        if self.is_valid_vertex(v) {
            self.erase_vertex(v)?;
        }
        Ok(())
    }

    /// Compact the mesh, optionally culling isolated faces, edges and
    /// vertices first. Same as [`HalfedgeMesh::clean_mesh`].
    pub fn clean_mesh(&mut self, cull_isolated: bool) -> Result<(), Error> {
        // Faces.
        if cull_isolated {
            let isolated: Vec<FH> = self
                .faces()
                .filter(|f| {
                    self.face(*f)
                        .edges
                        .iter()
                        .all(|e| self.edge(*e).faces.len() < 2)
                })
                .collect();
            for f in isolated {
                self.remove_face(f)?;
            }
        }
        let fmap = compact(&mut self.faces);
        for edge in self.edges.iter_mut().flatten() {
            for f in edge.faces.iter_mut() {
                *f = fmap[f.index() as usize].into();
            }
        }
        // Edges.
        if cull_isolated {
            let isolated: Vec<EH> = self
                .edges()
                .filter(|e| self.edge(*e).faces.is_empty())
                .collect();
            for e in isolated {
                self.remove_edge(e)?;
            }
        }
        let emap = compact(&mut self.edges);
        for vertex in self.vertices.iter_mut().flatten() {
            for e in vertex.edges.iter_mut() {
                *e = emap[e.index() as usize].into();
            }
        }
        for face in self.faces.iter_mut().flatten() {
            for e in face.edges.iter_mut() {
                *e = emap[e.index() as usize].into();
            }
        }
        // Vertices.
        if cull_isolated {
            let isolated: Vec<VH> = self
                .vertices()
                .filter(|v| self.vertex(*v).edges.is_empty())
                .collect();
            for v in isolated {
                self.erase_vertex(v)?;
            }
        }
        let vmap = compact(&mut self.vertices);
        for edge in self.edges.iter_mut().flatten() {
            for v in edge.vertices.iter_mut() {
                *v = vmap[v.index() as usize].into();
            }
        }
        for face in self.faces.iter_mut().flatten() {
            for v in face.vertices.iter_mut() {
                *v = vmap[v.index() as usize].into();
            }
        }
        Ok(())
    }
}

impl<T: Clone> HalfedgeMesh<T> {
    /// Copy this mesh into a [`FaceVertexMesh`].
    ///
    /// Vertices are copied first, then edges, filling in the edge list of
    /// every vertex, then faces, filling in the face list of every edge. The
    /// output has dense indices, in the same order as the live elements of
    /// this mesh.
    pub fn to_face_vertex_mesh(&self) -> FaceVertexMesh<T> {
        let mut out =
            FaceVertexMesh::with_capacity(self.num_vertices(), self.num_edges(), self.num_faces());
        let mut vmap = vec![VH::from(u32::MAX); self.next_vertex_index() as usize];
        for v in self.vertices() {
            vmap[v.index() as usize] = out.add_vertex(self.vertex(v).pos.clone());
        }
        let mut emap = vec![EH::from(u32::MAX); (self.next_halfedge_index() / 2) as usize];
        for e in self.edges() {
            let [from, to] = e.vertices(self);
            emap[e.index() as usize] =
                out.new_edge(vmap[from.index() as usize], vmap[to.index() as usize]);
        }
        for f in self.faces() {
            let hs: Vec<HH> = iterator::fh_ccw_iter(self, f).collect();
            let n = hs.len();
            // `hs[i]` points at the i-th vertex, and `hs[i + 1]` leaves it.
            let verts = hs
                .iter()
                .map(|h| vmap[self.head_vertex(*h).index() as usize])
                .collect();
            let edges = (0..n)
                .map(|i| emap[hs[(i + 1) % n].edge().index() as usize])
                .collect();
            out.new_face(verts, edges);
        }
        out
    }
}

impl<T: Clone> PolyMesh<T> for FaceVertexMesh<T> {
    fn num_vertices(&self) -> usize {
        self.nverts
    }

    fn num_edges(&self) -> usize {
        self.nedges
    }

    fn num_faces(&self) -> usize {
        self.nfaces
    }

    fn try_get_vertex(&self, index: u32) -> Option<VH> {
        let v = VH::from(index);
        self.is_valid_vertex(v).then_some(v)
    }

    fn try_get_edge(&self, index: u32) -> Option<EH> {
        let e = EH::from(index);
        self.is_valid_edge(e).then_some(e)
    }

    fn try_get_face(&self, index: u32) -> Option<FH> {
        let f = FH::from(index);
        self.is_valid_face(f).then_some(f)
    }

    fn get_vertices(&self) -> Vec<VH> {
        self.vertices().collect()
    }

    fn get_edges(&self) -> Vec<EH> {
        self.edges().collect()
    }

    fn get_faces(&self) -> Vec<FH> {
        self.faces().collect()
    }

    fn point(&self, v: VH) -> Result<&T, Error> {
        FaceVertexMesh::point(self, v)
    }

    fn add_vertex(&mut self, pos: T) -> VH {
        FaceVertexMesh::add_vertex(self, pos)
    }

    fn add_edge(&mut self, from: VH, to: VH) -> Result<Option<EH>, Error> {
        FaceVertexMesh::add_edge(self, from, to)
    }

    fn add_face(&mut self, verts: &[VH]) -> Result<FH, Error> {
        FaceVertexMesh::add_face(self, verts)
    }

    fn remove_vertex(&mut self, v: VH) -> Result<(), Error> {
        FaceVertexMesh::remove_vertex(self, v)
    }

    fn remove_edge(&mut self, e: EH) -> Result<(), Error> {
        FaceVertexMesh::remove_edge(self, e)
    }

    fn remove_face(&mut self, f: FH) -> Result<(), Error> {
        FaceVertexMesh::remove_face(self, f)
    }

    fn erase_edge(&mut self, e: EH) -> Result<(), Error> {
        FaceVertexMesh::erase_edge(self, e)
    }

    fn clean_mesh(&mut self, cull_isolated: bool) -> Result<(), Error> {
        FaceVertexMesh::clean_mesh(self, cull_isolated)
    }
}

#[cfg(test)]
mod test {
    use super::FaceVertexMesh;
    use crate::{
        element::{EH, Handle, VH},
        error::Error,
        iterator,
        mesh::test::{loop_mesh, quad_box},
    };

    const BOX_FACES: [[u32; 4]; 6] = [
        [0, 3, 2, 1],
        [0, 1, 5, 4],
        [1, 2, 6, 5],
        [2, 3, 7, 6],
        [3, 0, 4, 7],
        [4, 5, 6, 7],
    ];

    fn fv_box() -> FaceVertexMesh<u32> {
        let mut mesh = FaceVertexMesh::with_capacity(8, 12, 6);
        for i in 0..8 {
            mesh.add_vertex(i);
        }
        for fvs in BOX_FACES {
            mesh.add_face(&fvs.map(VH::from)).expect("Cannot add face");
        }
        mesh
    }

    fn check_edge_order(mesh: &FaceVertexMesh<u32>) {
        for f in mesh.faces() {
            let verts = mesh.face_vertices(f);
            let edges = mesh.face_edges(f);
            assert_eq!(verts.len(), edges.len());
            for (i, e) in edges.iter().enumerate() {
                let mut ends = mesh.edge_vertices(*e);
                ends.sort();
                let mut expected = [verts[i], verts[(i + 1) % verts.len()]];
                expected.sort();
                assert_eq!(ends, expected);
                assert!(mesh.edge_faces(*e).contains(&f));
            }
        }
        for e in mesh.edges() {
            for v in mesh.edge_vertices(e) {
                assert!(mesh.vertex_edges(v).contains(&e));
            }
        }
    }

    #[test]
    fn t_box() {
        let mesh = fv_box();
        assert_eq!(mesh.num_vertices(), 8);
        assert_eq!(mesh.num_edges(), 12);
        assert_eq!(mesh.num_faces(), 6);
        assert!(mesh.vertices().all(|v| mesh.vertex_edges(v).len() == 3));
        assert!(mesh.edges().all(|e| mesh.edge_faces(e).len() == 2));
        for (f, fvs) in mesh.faces().zip(BOX_FACES) {
            assert_eq!(mesh.face_vertices(f), fvs.map(VH::from));
        }
        check_edge_order(&mesh);
    }

    #[test]
    fn t_box_conversion() {
        let qbox = quad_box();
        let mesh = qbox.to_face_vertex_mesh();
        assert_eq!(mesh.num_vertices(), 8);
        assert_eq!(mesh.num_edges(), 12);
        assert_eq!(mesh.num_faces(), 6);
        for f in qbox.faces() {
            assert_eq!(
                mesh.face_vertices(f),
                iterator::fv_ccw_iter(&qbox, f).collect::<Vec<_>>()
            );
        }
        for v in qbox.vertices() {
            assert_eq!(mesh.vertex_edges(v).len(), qbox.vertex_valence(v));
        }
        // Edges keep their index and their direction.
        for e in qbox.edges() {
            assert_eq!(mesh.edge_vertices(e), e.vertices(&qbox));
            let mut faces = mesh.edge_faces(e).to_vec();
            faces.sort();
            let mut expected: Vec<_> = e.faces(&qbox).collect();
            expected.sort();
            assert_eq!(faces, expected);
        }
        check_edge_order(&mesh);
    }

    #[test]
    fn t_conversion_after_removal() {
        let mut mesh = loop_mesh();
        mesh.remove_vertex(5.into())
            .expect("Cannot remove vertex");
        let fvmesh = mesh.to_face_vertex_mesh();
        assert_eq!(fvmesh.num_vertices(), mesh.num_vertices());
        assert_eq!(fvmesh.num_edges(), mesh.num_edges());
        assert_eq!(fvmesh.num_faces(), mesh.num_faces());
        // The output is dense.
        assert_eq!(
            fvmesh.vertices().map(|v| v.index()).collect::<Vec<_>>(),
            (0..mesh.num_vertices() as u32).collect::<Vec<_>>()
        );
        assert_eq!(
            fvmesh
                .vertices()
                .map(|v| *fvmesh.point(v).expect("Cannot read point"))
                .collect::<Vec<_>>(),
            mesh.vertices()
                .map(|v| *mesh.point(v).expect("Cannot read point"))
                .collect::<Vec<_>>()
        );
        let face_points = |f| {
            fvmesh
                .face_vertices(f)
                .iter()
                .map(|v| *fvmesh.point(*v).expect("Cannot read point"))
                .collect::<Vec<_>>()
        };
        assert_eq!(
            fvmesh.faces().map(face_points).collect::<Vec<_>>(),
            [
                vec![2, 3, 7, 6],
                vec![6, 7, 11, 10],
                vec![8, 9, 13, 12],
                vec![9, 10, 14, 13],
                vec![10, 11, 15, 14]
            ]
        );
        check_edge_order(&fvmesh);
    }

    #[test]
    fn t_complex_edge() {
        let mut mesh = FaceVertexMesh::new();
        let verts: Vec<_> = (0..5).map(|i| mesh.add_vertex(i)).collect();
        mesh.add_face(&[verts[0], verts[1], verts[2]])
            .expect("Cannot add face");
        // Orientation is not checked.
        mesh.add_face(&[verts[0], verts[1], verts[3]])
            .expect("Cannot add face");
        let e = mesh
            .find_edge(verts[1], verts[0])
            .expect("Cannot find edge");
        assert!(matches!(
            mesh.add_face(&[verts[1], verts[0], verts[4]]),
            Err(Error::ComplexEdge(x)) if x == e
        ));
        assert_eq!(mesh.num_edges(), 5);
        assert_eq!(mesh.num_faces(), 2);
        assert!(matches!(
            mesh.add_face(&[verts[0], verts[1]]),
            Err(Error::DegenerateFace(2))
        ));
    }

    #[test]
    fn t_remove_face_cascade() {
        let mut mesh = FaceVertexMesh::new();
        let verts: Vec<_> = (0..3).map(|i| mesh.add_vertex(i)).collect();
        let f = mesh.add_face(&verts).expect("Cannot add face");
        mesh.remove_face(f).expect("Cannot remove face");
        assert_eq!(mesh.num_vertices(), 0);
        assert_eq!(mesh.num_edges(), 0);
        assert_eq!(mesh.num_faces(), 0);
    }

    #[test]
    fn t_box_remove_and_clean() {
        let mut mesh = fv_box();
        mesh.remove_vertex(7.into())
            .expect("Cannot remove vertex");
        assert_eq!(mesh.num_vertices(), 7);
        assert_eq!(mesh.num_edges(), 9);
        assert_eq!(mesh.num_faces(), 3);
        assert!(matches!(
            mesh.erase_vertex(0.into()),
            Err(Error::VertexStillConnected(v)) if v == VH::from(0)
        ));
        mesh.clean_mesh(false).expect("Cannot clean mesh");
        check_edge_order(&mesh);
        assert_eq!(mesh.edges().last(), Some(EH::from(8)));
        let faces: Vec<Vec<VH>> = mesh
            .faces()
            .map(|f| mesh.face_vertices(f).to_vec())
            .collect();
        assert_eq!(
            faces,
            BOX_FACES[..3]
                .iter()
                .map(|fvs| fvs.map(VH::from).to_vec())
                .collect::<Vec<_>>()
        );
        let copy = mesh.clone();
        mesh.clean_mesh(false).expect("Cannot clean mesh");
        for f in mesh.faces() {
            assert_eq!(mesh.face_vertices(f), copy.face_vertices(f));
            assert_eq!(mesh.face_edges(f), copy.face_edges(f));
        }
    }

    #[test]
    fn t_clean_cull_isolated() {
        let mut mesh = fv_box();
        let tri: Vec<_> = (8..11).map(|i| mesh.add_vertex(i)).collect();
        mesh.add_face(&tri).expect("Cannot add face");
        let lone = mesh.add_vertex(11);
        mesh.add_edge(lone, 0.into())
            .expect("Cannot add edge")
            .expect("Edge must be new");
        mesh.add_vertex(12);
        mesh.clean_mesh(true).expect("Cannot clean mesh");
        assert_eq!(mesh.num_vertices(), 8);
        assert_eq!(mesh.num_edges(), 12);
        assert_eq!(mesh.num_faces(), 6);
        check_edge_order(&mesh);
    }
}
