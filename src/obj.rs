use std::path::Path;

use crate::{element::VH, error::Error, mesh::HalfedgeMesh};

impl<T> HalfedgeMesh<T>
where
    T: From<[f64; 3]>,
{
    /// Load a polygon mesh from an OBJ file.
    ///
    /// All the objects in the file are loaded into one mesh. Faces are added
    /// in the order they appear in the file, with the same checks as
    /// [`HalfedgeMesh::add_face`], so a file describing a non-manifold mesh
    /// fails to load.
    pub fn load_obj(path: &Path) -> Result<Self, Error> {
        let options = tobj::LoadOptions::default();
        let (models, _) =
            tobj::load_obj(path, &options).map_err(|e| Error::ObjLoadFailed(format!("{}", e)))?;
        let (nverts, nfaces) = models
            .iter()
            .fold((0usize, 0usize), |(nverts, nfaces), model| {
                let msh = &model.mesh;
                (
                    nverts + (msh.positions.len() / 3),
                    nfaces + msh.face_arities.len().max(msh.indices.len() / 3),
                )
            });
        let nedges = nfaces * 3 / 2; // Estimate.
        let mut outmesh = Self::with_capacity(nverts, nedges, nfaces);
        let mut voffset = 0u32;
        let mut fvs: Vec<VH> = Vec::new();
        for model in models {
            let mesh = model.mesh;
            if mesh.positions.len() % 3 != 0 {
                return Err(Error::IncorrectNumberOfCoordinates(mesh.positions.len()));
            }
            let nverts = (mesh.positions.len() / 3) as u32;
            for triplet in mesh.positions.chunks_exact(3) {
                outmesh.add_vertex(T::from([triplet[0], triplet[1], triplet[2]]));
            }
            // No arities means every face is a triangle.
            let arities: Vec<usize> = match mesh.face_arities.is_empty() {
                true => vec![3; mesh.indices.len() / 3],
                false => mesh.face_arities.iter().map(|n| *n as usize).collect(),
            };
            let mut start = 0usize;
            for size in arities {
                let indices = mesh
                    .indices
                    .get(start..(start + size))
                    .ok_or_else(|| Error::InvalidObjFile(path.to_path_buf()))?;
                start += size;
                fvs.clear();
                fvs.extend(indices.iter().map(|i| VH::from(i + voffset)));
                outmesh.add_face(&fvs)?;
            }
            voffset += nverts;
        }
        Ok(outmesh)
    }
}
