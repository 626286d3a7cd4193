use crate::{
    element::{EH, FH, VH},
    error::Error,
    mesh::HalfedgeMesh,
};

/// Operations shared by the mesh representations in this crate.
///
/// Elements are addressed by the same handle types in every representation.
/// Adding an element takes the next free index, and removing one leaves a gap
/// until [`PolyMesh::clean_mesh`] is called. Positions are only stored and
/// compared, never computed with.
pub trait PolyMesh<T>: Clone {
    fn num_vertices(&self) -> usize;

    fn num_edges(&self) -> usize;

    fn num_faces(&self) -> usize;

    /// The vertex at `index`, if it exists.
    fn try_get_vertex(&self, index: u32) -> Option<VH>;

    fn try_get_edge(&self, index: u32) -> Option<EH>;

    fn try_get_face(&self, index: u32) -> Option<FH>;

    /// The vertex at `index`. Fails if there is no such vertex.
    fn get_vertex(&self, index: u32) -> Result<VH, Error> {
        self.try_get_vertex(index)
            .ok_or(Error::VertexNotFound(index.into()))
    }

    fn get_edge(&self, index: u32) -> Result<EH, Error> {
        self.try_get_edge(index)
            .ok_or(Error::EdgeNotFound(index.into()))
    }

    fn get_face(&self, index: u32) -> Result<FH, Error> {
        self.try_get_face(index)
            .ok_or(Error::FaceNotFound(index.into()))
    }

    /// All live vertices, in increasing order of their index.
    fn get_vertices(&self) -> Vec<VH>;

    fn get_edges(&self) -> Vec<EH>;

    fn get_faces(&self) -> Vec<FH>;

    fn point(&self, v: VH) -> Result<&T, Error>;

    fn add_vertex(&mut self, pos: T) -> VH;

    /// Connect two vertices with an edge. Returns `None` if the vertices are
    /// the same, or already connected.
    fn add_edge(&mut self, from: VH, to: VH) -> Result<Option<EH>, Error>;

    fn add_face(&mut self, verts: &[VH]) -> Result<FH, Error>;

    /// Remove a vertex along with the faces and edges incident on it.
    fn remove_vertex(&mut self, v: VH) -> Result<(), Error>;

    /// Remove an edge. If the edge has faces, the faces are removed instead,
    /// which takes the edge with them.
    fn remove_edge(&mut self, e: EH) -> Result<(), Error>;

    /// Remove a face along with the edges and vertices it leaves dangling.
    fn remove_face(&mut self, f: FH) -> Result<(), Error>;

    /// Erase an edge and the faces incident on it, without erasing any
    /// vertices.
    fn erase_edge(&mut self, e: EH) -> Result<(), Error>;

    fn clean_mesh(&mut self, cull_isolated: bool) -> Result<(), Error>;
}

impl<T: Clone> PolyMesh<T> for HalfedgeMesh<T> {
    fn num_vertices(&self) -> usize {
        HalfedgeMesh::num_vertices(self)
    }

    fn num_edges(&self) -> usize {
        HalfedgeMesh::num_edges(self)
    }

    fn num_faces(&self) -> usize {
        HalfedgeMesh::num_faces(self)
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
        HalfedgeMesh::point(self, v)
    }

    fn add_vertex(&mut self, pos: T) -> VH {
        HalfedgeMesh::add_vertex(self, pos)
    }

    fn add_edge(&mut self, from: VH, to: VH) -> Result<Option<EH>, Error> {
        HalfedgeMesh::add_edge(self, from, to)
    }

    fn add_face(&mut self, verts: &[VH]) -> Result<FH, Error> {
        HalfedgeMesh::add_face(self, verts)
    }

    fn remove_vertex(&mut self, v: VH) -> Result<(), Error> {
        HalfedgeMesh::remove_vertex(self, v)
    }

    fn remove_edge(&mut self, e: EH) -> Result<(), Error> {
        HalfedgeMesh::remove_edge(self, e)
    }

    fn remove_face(&mut self, f: FH) -> Result<(), Error> {
        HalfedgeMesh::remove_face(self, f)
    }

    fn erase_edge(&mut self, e: EH) -> Result<(), Error> {
        HalfedgeMesh::erase_edge(self, e)
    }

    fn clean_mesh(&mut self, cull_isolated: bool) -> Result<(), Error> {
        HalfedgeMesh::clean_mesh(self, cull_isolated)
    }
}

#[cfg(test)]
mod test {
    use super::PolyMesh;
    use crate::{
        element::{EH, FH, VH},
        error::Error,
        fvmesh::FaceVertexMesh,
        mesh::HalfedgeMesh,
    };

    /// Runs the same edits on any mesh representation.
    fn two_triangles_then_remove<M: PolyMesh<u32> + Default>() {
        let mut mesh = M::default();
        let verts: Vec<VH> = (0..4).map(|i| mesh.add_vertex(i)).collect();
        let f0 = mesh
            .add_face(&[verts[0], verts[1], verts[2]])
            .expect("Cannot add face");
        assert_eq!(mesh.num_faces(), 1);
        assert_eq!(mesh.num_edges(), 3);
        let f1 = mesh
            .add_face(&[verts[0], verts[2], verts[3]])
            .expect("Cannot add face");
        // The shared edge is reused.
        assert_eq!(mesh.num_edges(), 5);
        assert_eq!(mesh.get_faces(), [f0, f1]);
        assert_eq!(mesh.get_vertices(), verts);
        assert_eq!(mesh.get_edges().len(), 5);
        assert_eq!(mesh.get_vertex(3).expect("Cannot get vertex"), verts[3]);
        assert!(mesh.try_get_vertex(4).is_none());
        assert!(matches!(
            mesh.get_face(2),
            Err(Error::FaceNotFound(f)) if f == FH::from(2)
        ));
        assert_eq!(*mesh.point(verts[2]).expect("Cannot read point"), 2);
        // Copies are independent.
        let copy = mesh.clone();
        mesh.remove_face(f0).expect("Cannot remove face");
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_edges(), 3);
        assert_eq!(mesh.num_faces(), 1);
        assert!(mesh.try_get_vertex(1).is_none());
        assert_eq!(copy.num_vertices(), 4);
        assert_eq!(copy.num_edges(), 5);
        assert_eq!(copy.num_faces(), 2);
        mesh.remove_vertex(verts[3])
            .expect("Cannot remove vertex");
        assert_eq!(mesh.num_faces(), 0);
        assert_eq!(mesh.num_edges(), 0);
        assert_eq!(mesh.num_vertices(), 0);
        mesh.clean_mesh(false).expect("Cannot clean mesh");
        assert!(mesh.get_vertices().is_empty());
        assert!(mesh.get_edge(0).is_err());
    }

    fn loose_edges<M: PolyMesh<u32> + Default>() {
        let mut mesh = M::default();
        let verts: Vec<VH> = (0..3).map(|i| mesh.add_vertex(i)).collect();
        let e0 = mesh
            .add_edge(verts[0], verts[1])
            .expect("Cannot add edge")
            .expect("Edge must be new");
        assert!(
            mesh.add_edge(verts[1], verts[0])
                .expect("Cannot add edge")
                .is_none()
        );
        let e1 = mesh
            .add_edge(verts[1], verts[2])
            .expect("Cannot add edge")
            .expect("Edge must be new");
        assert_eq!(mesh.get_edges(), [e0, e1]);
        mesh.erase_edge(e0).expect("Cannot erase edge");
        // Erasing leaves the vertices behind.
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_edges(), 1);
        mesh.remove_edge(e1).expect("Cannot remove edge");
        assert_eq!(mesh.num_vertices(), 1);
        assert!(matches!(
            mesh.remove_edge(e1),
            Err(Error::EdgeNotFound(e)) if e == e1
        ));
        mesh.clean_mesh(true).expect("Cannot clean mesh");
        assert_eq!(mesh.num_vertices(), 0);
        assert!(mesh.get_edge(0).is_err());
        assert_eq!(mesh.try_get_edge(0), None::<EH>);
    }

    #[test]
    fn t_halfedge_mesh_poly_mesh() {
        two_triangles_then_remove::<HalfedgeMesh<u32>>();
        loose_edges::<HalfedgeMesh<u32>>();
    }

    #[test]
    fn t_face_vertex_mesh_poly_mesh() {
        two_triangles_then_remove::<FaceVertexMesh<u32>>();
        loose_edges::<FaceVertexMesh<u32>>();
    }
}
