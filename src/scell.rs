//! Stress-cell composites (spec §4.6): for every interior point, average 21
//! anisotropic coefficients, compute 9 velocity-gradient stencils across
//! three subgrids, and accumulate the xx, yy, zz, yz, xz, xy stress
//! components directly in place, one `rayon` worker per Y-plane across all
//! six output arrays at once.

use crate::coeff::{cell_coeff_artm_bl, cell_coeff_artm_br, cell_coeff_artm_tr, cell_coeff_bl, cell_coeff_br, cell_coeff_tl, cell_coeff_tr};
use crate::dim::Dim;
use crate::fields::{CoeffField, Offset, Real, StressCell, StressField, Subgrid, VelocityCell};
use crate::propagator::Bounds;
use crate::stencil::{stencil_x, stencil_y, stencil_z};
use rayon::prelude::*;

type CoeffFn = fn(&crate::fields::FieldArray, usize, usize, usize, &Dim) -> Real;

fn coeff_fns(q: Subgrid) -> (CoeffFn, CoeffFn) {
    match q {
        Subgrid::Tl => (cell_coeff_tl, crate::coeff::cell_coeff_artm_tl),
        Subgrid::Tr => (cell_coeff_tr, cell_coeff_artm_tr),
        Subgrid::Bl => (cell_coeff_bl, cell_coeff_artm_bl),
        Subgrid::Br => (cell_coeff_br, cell_coeff_artm_br),
    }
}

/// Samples the 21 averaged stiffness entries at `(z, x, y)` for subgrid `q`.
#[allow(clippy::too_many_arguments)]
fn sample_coeffs(q: Subgrid, c: &CoeffField, z: usize, x: usize, y: usize, dim: &Dim) -> [Real; 21] {
    let (harm, artm) = coeff_fns(q);
    [
        harm(&c.c11, z, x, y, dim),
        harm(&c.c12, z, x, y, dim),
        harm(&c.c13, z, x, y, dim),
        artm(&c.c14, z, x, y, dim),
        artm(&c.c15, z, x, y, dim),
        artm(&c.c16, z, x, y, dim),
        harm(&c.c22, z, x, y, dim),
        harm(&c.c23, z, x, y, dim),
        artm(&c.c24, z, x, y, dim),
        artm(&c.c25, z, x, y, dim),
        artm(&c.c26, z, x, y, dim),
        harm(&c.c33, z, x, y, dim),
        artm(&c.c34, z, x, y, dim),
        artm(&c.c35, z, x, y, dim),
        artm(&c.c36, z, x, y, dim),
        harm(&c.c44, z, x, y, dim),
        artm(&c.c45, z, x, y, dim),
        artm(&c.c46, z, x, y, dim),
        harm(&c.c55, z, x, y, dim),
        artm(&c.c56, z, x, y, dim),
        harm(&c.c66, z, x, y, dim),
    ]
}

/// Runs the stress-cell composite for subgrid `q`, writing into `s.q`.
///
/// `v_alpha`/`v_beta`/`v_gamma` are the subgrids the Z-, X- and Y-gradient
/// stencils are sampled from respectively (the same positional order the
/// original harness passes them in); which subgrid plays which role
/// is part of the propagator routing table (spec §4.7) and is passed in by
/// the caller rather than hardcoded here, so this one function serves all
/// four rows of that table.
#[allow(clippy::too_many_arguments)]
pub fn compute_component_scell(
    q: Subgrid,
    s: &mut StressField,
    v_alpha: &VelocityCell,
    v_beta: &VelocityCell,
    v_gamma: &VelocityCell,
    c: &CoeffField,
    dt: Real,
    dzi: Real,
    dxi: Real,
    dyi: Real,
    bounds: Bounds,
    sz: Offset,
    sx: Offset,
    sy: Offset,
    dim: &Dim,
) {
    let Bounds { nz0, nzf, nx0, nxf, ny0, nyf } = bounds;
    let plane_size = dim.xsize * dim.pitch;

    fn chunks(f: &mut crate::fields::FieldArray, plane_size: usize) -> rayon::slice::ChunksMut<'_, Real> {
        f.as_slice_mut().expect("contiguous").par_chunks_mut(plane_size)
    }

    let StressCell { xx, yy, zz, yz, xz, xy } = s.cell_mut(q);

    chunks(xx, plane_size)
        .zip(chunks(yy, plane_size))
        .zip(chunks(zz, plane_size))
        .zip(chunks(yz, plane_size))
        .zip(chunks(xz, plane_size))
        .zip(chunks(xy, plane_size))
        .enumerate()
        .filter(|(y, _)| *y >= ny0 && *y < nyf)
        .for_each(|(y, (((((p_xx, p_yy), p_zz), p_yz), p_xz), p_xy))| {
            for x in nx0..nxf {
                for z in nz0..nzf {
                    let coeffs = sample_coeffs(q, c, z, x, y, dim);
                    let [c11, c12, c13, c14, c15, c16, c22, c23, c24, c25, c26, c33, c34, c35, c36, c44, c45, c46, c55, c56, c66] =
                        coeffs;

                    let u_z = stencil_z(sz, &v_alpha.u, dzi, z, x, y, dim);
                    let v_z = stencil_z(sz, &v_alpha.v, dzi, z, x, y, dim);
                    let w_z = stencil_z(sz, &v_alpha.w, dzi, z, x, y, dim);

                    let u_x = stencil_x(sx, &v_beta.u, dxi, z, x, y, dim);
                    let v_x = stencil_x(sx, &v_beta.v, dxi, z, x, y, dim);
                    let w_x = stencil_x(sx, &v_beta.w, dxi, z, x, y, dim);

                    let u_y = stencil_y(sy, &v_gamma.u, dyi, z, x, y, dim);
                    let v_y = stencil_y(sy, &v_gamma.v, dyi, z, x, y, dim);
                    let w_y = stencil_y(sy, &v_gamma.w, dyi, z, x, y, dim);

                    let row = |c1: Real, c2: Real, c3: Real, c4: Real, c5: Real, c6: Real| {
                        dt * c1 * u_x + dt * c2 * v_y + dt * c3 * w_z + dt * c4 * (w_y + v_z) + dt * c5 * (w_x + u_z) + dt * c6 * (v_x + u_y)
                    };

                    let i = x * dim.pitch + z;
                    p_xx[i] += row(c11, c12, c13, c14, c15, c16);
                    p_yy[i] += row(c12, c22, c23, c24, c25, c26);
                    p_zz[i] += row(c13, c23, c33, c34, c35, c36);
                    p_yz[i] += row(c14, c24, c34, c44, c45, c46);
                    p_xz[i] += row(c15, c25, c35, c45, c55, c56);
                    p_xy[i] += row(c16, c26, c36, c46, c56, c66);
                }
            }
        });
}
