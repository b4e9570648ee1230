//! Optional texture-interpolated density path for the BR velocity composite
//! (spec §4.5 "Optional texture-interpolated density path"), gated behind
//! the `vcell-br-texture` Cargo feature (spec §6 `VCELL_BR_TEXTURE`).
//!
//! Hardware trilinear sampling is emulated here with 9-bit fixed-point
//! weights (8 fractional bits) over the 8 corners of `1/rho`. Spec §9's
//! open question notes that the weight computation
//! `increment = 0.5; zb = z - 0.5 + 0.5` algebraically reduces to
//! `zb = z`, an integer, so every weight's fractional part is `0` and the
//! interpolation collapses to the single `(z, x, y)` corner. That
//! collapse is reproduced verbatim rather than "fixed", since spec §4.5
//! requires bit-identical output to this reference emulation.

use crate::dim::Dim;
use crate::fields::Real;
use ndarray::Array1;

const FRACTIONAL_BITS: Real = 256.0;

/// 9-bit fixed-point fractional weight for one axis of the trilinear
/// sample at integer grid coordinate `coord`.
fn fixed_point_weight(coord: usize) -> Real {
    let increment: Real = 0.5;
    let b = coord as Real - 0.5 + increment;
    let frac = b.fract();
    ((frac * FRACTIONAL_BITS + 0.5).floor()) / FRACTIONAL_BITS
}

/// Trilinear interpolation of `1/rho` over the unit cube rooted at
/// `(z, x, y)`, using the fixed-point weights above.
pub fn rho_br_texture(rho: &Array1<Real>, z: usize, x: usize, y: usize, dim: &Dim) -> Real {
    let a = fixed_point_weight(z);
    let b = fixed_point_weight(x);
    let c = fixed_point_weight(y);

    let inv = |zz: usize, xx: usize, yy: usize| 1.0 / rho[dim.idx(zz, xx, yy)];

    inv(z, x, y) * (1.0 - a) * (1.0 - b) * (1.0 - c)
        + inv(z + 1, x, y) * a * (1.0 - b) * (1.0 - c)
        + inv(z, x + 1, y) * (1.0 - a) * b * (1.0 - c)
        + inv(z, x, y + 1) * (1.0 - a) * (1.0 - b) * c
        + inv(z + 1, x + 1, y) * a * b * (1.0 - c)
        + inv(z + 1, x, y + 1) * a * (1.0 - b) * c
        + inv(z, x + 1, y + 1) * (1.0 - a) * b * c
        + inv(z + 1, x + 1, y + 1) * a * b * c
}
