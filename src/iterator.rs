use crate::{
    element::{EH, FH, HH, VH},
    mesh::HalfedgeMesh,
};

struct OutgoingHalfedgeIter<'a, T, const CCW: bool> {
    mesh: &'a HalfedgeMesh<T>,
    hstart: Option<HH>,
    hcurrent: Option<HH>,
}

impl<T> Iterator for OutgoingHalfedgeIter<'_, T, true> {
    type Item = HH;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.hcurrent?;
        let next = self.mesh.prev_halfedge(current).opposite();
        self.hcurrent = match self.hstart {
            Some(start) if start != next => Some(next),
            _ => None,
        };
        Some(current)
    }
}

impl<T> Iterator for OutgoingHalfedgeIter<'_, T, false> {
    type Item = HH;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.hcurrent?;
        let next = self.mesh.next_halfedge(current.opposite());
        self.hcurrent = match self.hstart {
            Some(start) if start != next => Some(next),
            _ => None,
        };
        Some(current)
    }
}

struct LoopHalfedgeIter<'a, T> {
    mesh: &'a HalfedgeMesh<T>,
    hstart: HH,
    hcurrent: Option<HH>,
}

impl<T> Iterator for LoopHalfedgeIter<'_, T> {
    type Item = HH;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.hcurrent?;
        let next = self.mesh.next_halfedge(current);
        self.hcurrent = if next == self.hstart {
            None
        } else {
            Some(next)
        };
        Some(current)
    }
}

pub(crate) fn voh_ccw_iter<T>(
    mesh: &HalfedgeMesh<T>,
    v: VH,
) -> impl Iterator<Item = HH> + use<'_, T> {
    let h = mesh.vertex_halfedge(v);
    OutgoingHalfedgeIter::<T, true> {
        mesh,
        hstart: h,
        hcurrent: h,
    }
}

pub(crate) fn voh_cw_iter<T>(
    mesh: &HalfedgeMesh<T>,
    v: VH,
) -> impl Iterator<Item = HH> + use<'_, T> {
    let h = mesh.vertex_halfedge(v);
    OutgoingHalfedgeIter::<T, false> {
        mesh,
        hstart: h,
        hcurrent: h,
    }
}

pub(crate) fn vih_ccw_iter<T>(
    mesh: &HalfedgeMesh<T>,
    v: VH,
) -> impl Iterator<Item = HH> + use<'_, T> {
    voh_ccw_iter(mesh, v).map(|h| h.opposite())
}

pub(crate) fn vv_ccw_iter<T>(
    mesh: &HalfedgeMesh<T>,
    v: VH,
) -> impl Iterator<Item = VH> + use<'_, T> {
    voh_ccw_iter(mesh, v).map(|h| mesh.head_vertex(h))
}

pub(crate) fn ve_ccw_iter<T>(
    mesh: &HalfedgeMesh<T>,
    v: VH,
) -> impl Iterator<Item = EH> + use<'_, T> {
    voh_ccw_iter(mesh, v).map(|h| h.edge())
}

pub(crate) fn vf_ccw_iter<T>(
    mesh: &HalfedgeMesh<T>,
    v: VH,
) -> impl Iterator<Item = FH> + use<'_, T> {
    voh_ccw_iter(mesh, v).filter_map(|h| mesh.halfedge_face(h))
}

pub(crate) fn ef_iter<T>(mesh: &HalfedgeMesh<T>, e: EH) -> impl Iterator<Item = FH> + use<'_, T> {
    let (h, oh) = e.halfedges();
    [h, oh].into_iter().filter_map(|h| mesh.halfedge_face(h))
}

/// Walk the `next` links starting at `h` until we get back to `h`. This works
/// for face loops and for boundary loops alike.
pub(crate) fn loop_ccw_iter<T>(
    mesh: &HalfedgeMesh<T>,
    h: HH,
) -> impl Iterator<Item = HH> + use<'_, T> {
    LoopHalfedgeIter {
        mesh,
        hstart: h,
        hcurrent: Some(h),
    }
}

pub(crate) fn fh_ccw_iter<T>(
    mesh: &HalfedgeMesh<T>,
    f: FH,
) -> impl Iterator<Item = HH> + use<'_, T> {
    loop_ccw_iter(mesh, mesh.face_halfedge(f))
}

pub(crate) fn fv_ccw_iter<T>(
    mesh: &HalfedgeMesh<T>,
    f: FH,
) -> impl Iterator<Item = VH> + use<'_, T> {
    fh_ccw_iter(mesh, f).map(|h| mesh.head_vertex(h))
}

pub(crate) fn fe_ccw_iter<T>(
    mesh: &HalfedgeMesh<T>,
    f: FH,
) -> impl Iterator<Item = EH> + use<'_, T> {
    fh_ccw_iter(mesh, f).map(|h| h.edge())
}

pub(crate) fn ff_ccw_iter<T>(
    mesh: &HalfedgeMesh<T>,
    f: FH,
) -> impl Iterator<Item = FH> + use<'_, T> {
    fh_ccw_iter(mesh, f).filter_map(|h| mesh.halfedge_face(h.opposite()))
}
