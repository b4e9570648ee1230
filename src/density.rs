//! Density averagers (spec §4.2): harmonic means of `rho` over the 2-, 2-,
//! 2- and 8-neighborhoods appropriate to each staggered subgrid position.

use crate::dim::Dim;
use crate::fields::Real;
use ndarray::Array1;

pub fn rho_tl(rho: &Array1<Real>, z: usize, x: usize, y: usize, dim: &Dim) -> Real {
    2.0 / (rho[dim.idx(z, x, y)] + rho[dim.idx(z, x, y + 1)])
}

pub fn rho_tr(rho: &Array1<Real>, z: usize, x: usize, y: usize, dim: &Dim) -> Real {
    2.0 / (rho[dim.idx(z, x, y)] + rho[dim.idx(z, x + 1, y)])
}

pub fn rho_bl(rho: &Array1<Real>, z: usize, x: usize, y: usize, dim: &Dim) -> Real {
    2.0 / (rho[dim.idx(z, x, y)] + rho[dim.idx(z + 1, x, y)])
}

pub fn rho_br(rho: &Array1<Real>, z: usize, x: usize, y: usize, dim: &Dim) -> Real {
    let sum = rho[dim.idx(z, x, y)]
        + rho[dim.idx(z, x + 1, y)]
        + rho[dim.idx(z + 1, x, y)]
        + rho[dim.idx(z + 1, x + 1, y)]
        + rho[dim.idx(z, x, y + 1)]
        + rho[dim.idx(z, x + 1, y + 1)]
        + rho[dim.idx(z + 1, x, y + 1)]
        + rho[dim.idx(z + 1, x + 1, y + 1)];
    8.0 / sum
}
