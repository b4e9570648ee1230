//! Stress-update primitive (spec §4.4): one row of the anisotropic
//! constitutive update `sigma_dot = C : epsilon_dot`, accumulated into a
//! single stress component at one grid point.

use crate::dim::Dim;
use crate::fields::{FieldArray, Real};

/// Accumulates
/// `S[z,x,y] += dt * (c1*u_x + c2*v_y + c3*w_z + c4*(w_y+v_z) + c5*(w_x+u_z) + c6*(v_x+u_y))`
/// into `s`.
#[allow(clippy::too_many_arguments)]
pub fn stress_update(
    s: &mut FieldArray,
    c1: Real,
    c2: Real,
    c3: Real,
    c4: Real,
    c5: Real,
    c6: Real,
    z: usize,
    x: usize,
    y: usize,
    dt: Real,
    u_x: Real,
    u_y: Real,
    u_z: Real,
    v_x: Real,
    v_y: Real,
    v_z: Real,
    w_x: Real,
    w_y: Real,
    w_z: Real,
    dim: &Dim,
) {
    let accum =
        dt * c1 * u_x + dt * c2 * v_y + dt * c3 * w_z + dt * c4 * (w_y + v_z) + dt * c5 * (w_x + u_z) + dt * c6 * (v_x + u_y);
    s[dim.idx(z, x, y)] += accum;
}
