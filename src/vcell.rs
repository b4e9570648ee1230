//! Velocity-cell composites (spec §4.5): for every interior point, combine
//! three directional stencils of three stress fields with a
//! locally-averaged density to accumulate one velocity component.
//!
//! Each Y-plane of the output array is handed to a `rayon` worker that
//! writes its results in place; no intermediate buffer is collected.

use crate::density;
use crate::dim::Dim;
use crate::fields::{FieldArray, Offset, Real};
use crate::stencil::{stencil_x, stencil_y, stencil_z};
use ndarray::Array1;
use rayon::prelude::*;

#[allow(clippy::too_many_arguments)]
fn compute_component_vcell(
    v_out: &mut FieldArray,
    s_z: &FieldArray,
    s_x: &FieldArray,
    s_y: &FieldArray,
    rho: &Array1<Real>,
    dt: Real,
    dzi: Real,
    dxi: Real,
    dyi: Real,
    nz0: usize,
    nzf: usize,
    nx0: usize,
    nxf: usize,
    ny0: usize,
    nyf: usize,
    sz: Offset,
    sx: Offset,
    sy: Offset,
    dim: &Dim,
    rho_q: impl Fn(&Array1<Real>, usize, usize, usize, &Dim) -> Real + Sync,
) {
    let plane_size = dim.xsize * dim.pitch;
    v_out
        .as_slice_mut()
        .expect("field arrays are contiguous")
        .par_chunks_mut(plane_size)
        .enumerate()
        .filter(|(y, _)| *y >= ny0 && *y < nyf)
        .for_each(|(y, plane)| {
            for x in nx0..nxf {
                for z in nz0..nzf {
                    let stx = stencil_x(sx, s_x, dxi, z, x, y, dim);
                    let sty = stencil_y(sy, s_y, dyi, z, x, y, dim);
                    let stz = stencil_z(sz, s_z, dzi, z, x, y, dim);
                    plane[x * dim.pitch + z] += (stx + sty + stz) * dt * rho_q(rho, z, x, y, dim);
                }
            }
        });
}

#[allow(clippy::too_many_arguments)]
pub fn compute_component_vcell_tl(
    v_out: &mut FieldArray,
    s_z: &FieldArray,
    s_x: &FieldArray,
    s_y: &FieldArray,
    rho: &Array1<Real>,
    dt: Real,
    dzi: Real,
    dxi: Real,
    dyi: Real,
    bounds: crate::propagator::Bounds,
    sz: Offset,
    sx: Offset,
    sy: Offset,
    dim: &Dim,
) {
    compute_component_vcell(
        v_out, s_z, s_x, s_y, rho, dt, dzi, dxi, dyi, bounds.nz0, bounds.nzf, bounds.nx0, bounds.nxf, bounds.ny0,
        bounds.nyf, sz, sx, sy, dim, density::rho_tl,
    );
}

#[allow(clippy::too_many_arguments)]
pub fn compute_component_vcell_tr(
    v_out: &mut FieldArray,
    s_z: &FieldArray,
    s_x: &FieldArray,
    s_y: &FieldArray,
    rho: &Array1<Real>,
    dt: Real,
    dzi: Real,
    dxi: Real,
    dyi: Real,
    bounds: crate::propagator::Bounds,
    sz: Offset,
    sx: Offset,
    sy: Offset,
    dim: &Dim,
) {
    compute_component_vcell(
        v_out, s_z, s_x, s_y, rho, dt, dzi, dxi, dyi, bounds.nz0, bounds.nzf, bounds.nx0, bounds.nxf, bounds.ny0,
        bounds.nyf, sz, sx, sy, dim, density::rho_tr,
    );
}

#[allow(clippy::too_many_arguments)]
pub fn compute_component_vcell_bl(
    v_out: &mut FieldArray,
    s_z: &FieldArray,
    s_x: &FieldArray,
    s_y: &FieldArray,
    rho: &Array1<Real>,
    dt: Real,
    dzi: Real,
    dxi: Real,
    dyi: Real,
    bounds: crate::propagator::Bounds,
    sz: Offset,
    sx: Offset,
    sy: Offset,
    dim: &Dim,
) {
    compute_component_vcell(
        v_out, s_z, s_x, s_y, rho, dt, dzi, dxi, dyi, bounds.nz0, bounds.nzf, bounds.nx0, bounds.nxf, bounds.ny0,
        bounds.nyf, sz, sx, sy, dim, density::rho_bl,
    );
}

#[allow(clippy::too_many_arguments)]
pub fn compute_component_vcell_br(
    v_out: &mut FieldArray,
    s_z: &FieldArray,
    s_x: &FieldArray,
    s_y: &FieldArray,
    rho: &Array1<Real>,
    dt: Real,
    dzi: Real,
    dxi: Real,
    dyi: Real,
    bounds: crate::propagator::Bounds,
    sz: Offset,
    sx: Offset,
    sy: Offset,
    dim: &Dim,
) {
    #[cfg(not(feature = "vcell-br-texture"))]
    let rho_q = density::rho_br;
    #[cfg(feature = "vcell-br-texture")]
    let rho_q = crate::texture::rho_br_texture;

    compute_component_vcell(
        v_out, s_z, s_x, s_y, rho, dt, dzi, dxi, dyi, bounds.nz0, bounds.nzf, bounds.nx0, bounds.nxf, bounds.ny0,
        bounds.nyf, sz, sx, sy, dim, rho_q,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dim::HALO;
    use crate::propagator::Bounds;

    fn test_dim() -> Dim {
        Dim {
            zsize: 16,
            xsize: 16,
            ysize: 16,
            pitch: 16,
        }
    }

    fn random_field(dim: &Dim, seed: u64) -> FieldArray {
        let mut state = seed.wrapping_add(0x9e3779b97f4a7c15);
        let n = dim.len();
        Array1::from_shape_fn(n, |_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 1000) as Real / 100.0 + 0.1
        })
    }

    fn bounds(dim: &Dim) -> Bounds {
        Bounds {
            nz0: HALO,
            nzf: dim.zsize - HALO,
            nx0: HALO,
            nxf: dim.xsize - HALO,
            ny0: HALO,
            nyf: dim.ysize - HALO,
        }
    }

    #[test]
    fn composite_matches_triple_loop_reference() {
        let dim = test_dim();
        let b = bounds(&dim);
        let s_z = random_field(&dim, 1);
        let s_x = random_field(&dim, 2);
        let s_y = random_field(&dim, 3);
        let rho = random_field(&dim, 4);
        let dt = 0.7;
        let (dzi, dxi, dyi) = (1.1, 1.2, 1.3);

        let mut v_cal: FieldArray = Array1::zeros(dim.len());
        compute_component_vcell_tl(&mut v_cal, &s_z, &s_x, &s_y, &rho, dt, dzi, dxi, dyi, b, Offset::Backward, Offset::Forward, Offset::Backward, &dim);

        let mut v_ref: FieldArray = Array1::zeros(dim.len());
        for y in b.ny0..b.nyf {
            for x in b.nx0..b.nxf {
                for z in b.nz0..b.nzf {
                    let stx = stencil_x(Offset::Forward, &s_x, dxi, z, x, y, &dim);
                    let sty = stencil_y(Offset::Backward, &s_y, dyi, z, x, y, &dim);
                    let stz = stencil_z(Offset::Backward, &s_z, dzi, z, x, y, &dim);
                    v_ref[dim.idx(z, x, y)] += (stx + sty + stz) * dt * density::rho_tl(&rho, z, x, y, &dim);
                }
            }
        }

        for i in 0..dim.len() {
            assert_eq!(v_cal[i], v_ref[i], "index {}", i);
        }
    }

    #[test]
    fn zero_dt_leaves_velocity_unchanged() {
        let dim = test_dim();
        let b = bounds(&dim);
        let s_z = random_field(&dim, 5);
        let s_x = random_field(&dim, 6);
        let s_y = random_field(&dim, 7);
        let rho = random_field(&dim, 8);

        let mut v = Array1::from_elem(dim.len(), 2.0 as Real);
        let before = v.clone();
        compute_component_vcell_br(&mut v, &s_z, &s_x, &s_y, &rho, 0.0, 1.0, 1.0, 1.0, b, Offset::Forward, Offset::Forward, Offset::Forward, &dim);
        assert_eq!(v, before);
    }
}
