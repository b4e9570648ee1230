//! Fourth-order directional stencils (spec §4.1).
//!
//! `stencil_Z`/`stencil_X`/`stencil_Y` each take a forward/backward bias and
//! a reciprocal step and return the derivative of a field along their axis
//! at a point. Callers must stay within `[HALO, size-HALO)` along the
//! active axis (spec §4.1 "Error contract"); this module does not check it.

use crate::dim::Dim;
use crate::fields::{FieldArray, Offset, Real};

const C1: Real = 9.0 / 8.0;
const C2: Real = -1.0 / 24.0;

/// Fourth-order derivative of `f` along Z at `(z, x, y)`.
pub fn stencil_z(offset: Offset, f: &FieldArray, dzi: Real, z: usize, x: usize, y: usize, dim: &Dim) -> Real {
    match offset {
        Offset::Forward => {
            let f0 = f[dim.idx(z, x, y)];
            let f1 = f[dim.idx(z + 1, x, y)];
            let f2 = f[dim.idx(z - 1, x, y)];
            let f3 = f[dim.idx(z + 2, x, y)];
            (C1 * (f1 - f0) + C2 * (f3 - f2)) * dzi
        }
        Offset::Backward => {
            let f0 = f[dim.idx(z, x, y)];
            let f1 = f[dim.idx(z - 1, x, y)];
            let f2 = f[dim.idx(z + 1, x, y)];
            let f3 = f[dim.idx(z - 2, x, y)];
            (C1 * (f0 - f1) + C2 * (f2 - f3)) * dzi
        }
    }
}

/// Fourth-order derivative of `f` along X at `(z, x, y)`.
pub fn stencil_x(offset: Offset, f: &FieldArray, dxi: Real, z: usize, x: usize, y: usize, dim: &Dim) -> Real {
    match offset {
        Offset::Forward => {
            let f0 = f[dim.idx(z, x, y)];
            let f1 = f[dim.idx(z, x + 1, y)];
            let f2 = f[dim.idx(z, x - 1, y)];
            let f3 = f[dim.idx(z, x + 2, y)];
            (C1 * (f1 - f0) + C2 * (f3 - f2)) * dxi
        }
        Offset::Backward => {
            let f0 = f[dim.idx(z, x, y)];
            let f1 = f[dim.idx(z, x - 1, y)];
            let f2 = f[dim.idx(z, x + 1, y)];
            let f3 = f[dim.idx(z, x - 2, y)];
            (C1 * (f0 - f1) + C2 * (f2 - f3)) * dxi
        }
    }
}

/// Fourth-order derivative of `f` along Y at `(z, x, y)`.
pub fn stencil_y(offset: Offset, f: &FieldArray, dyi: Real, z: usize, x: usize, y: usize, dim: &Dim) -> Real {
    match offset {
        Offset::Forward => {
            let f0 = f[dim.idx(z, x, y)];
            let f1 = f[dim.idx(z, x, y + 1)];
            let f2 = f[dim.idx(z, x, y - 1)];
            let f3 = f[dim.idx(z, x, y + 2)];
            (C1 * (f1 - f0) + C2 * (f3 - f2)) * dyi
        }
        Offset::Backward => {
            let f0 = f[dim.idx(z, x, y)];
            let f1 = f[dim.idx(z, x, y - 1)];
            let f2 = f[dim.idx(z, x, y + 1)];
            let f3 = f[dim.idx(z, x, y - 2)];
            (C1 * (f0 - f1) + C2 * (f2 - f3)) * dyi
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dim::HALO;
    use ndarray::Array1;

    fn random_field(dim: &Dim, seed: u64) -> FieldArray {
        let mut state = seed.wrapping_add(0x9e3779b97f4a7c15);
        let n = dim.len();
        Array1::from_shape_fn(n, |_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 1000) as Real / 100.0
        })
    }

    fn test_dim() -> Dim {
        Dim {
            zsize: 32,
            xsize: 16,
            ysize: 16,
            pitch: 32,
        }
    }

    #[test]
    fn shift_duality_z() {
        let dim = test_dim();
        let f = random_field(&dim, 1);
        for y in HALO..dim.ysize - HALO {
            for x in HALO..dim.xsize - HALO {
                for z in HALO..dim.zsize - HALO - 1 {
                    let fwd = stencil_z(Offset::Forward, &f, 1.0, z, x, y, &dim);
                    let bwd = stencil_z(Offset::Backward, &f, 1.0, z + 1, x, y, &dim);
                    assert_eq!(fwd, bwd, "z={} x={} y={}", z, x, y);
                }
            }
        }
    }

    #[test]
    fn shift_duality_x() {
        let dim = test_dim();
        let f = random_field(&dim, 2);
        for y in HALO..dim.ysize - HALO {
            for x in HALO..dim.xsize - HALO - 1 {
                for z in HALO..dim.zsize - HALO {
                    let fwd = stencil_x(Offset::Forward, &f, 1.0, z, x, y, &dim);
                    let bwd = stencil_x(Offset::Backward, &f, 1.0, z, x + 1, y, &dim);
                    assert_eq!(fwd, bwd, "z={} x={} y={}", z, x, y);
                }
            }
        }
    }

    #[test]
    fn shift_duality_y() {
        let dim = test_dim();
        let f = random_field(&dim, 3);
        for y in HALO..dim.ysize - HALO - 1 {
            for x in HALO..dim.xsize - HALO {
                for z in HALO..dim.zsize - HALO {
                    let fwd = stencil_y(Offset::Forward, &f, 1.0, z, x, y, &dim);
                    let bwd = stencil_y(Offset::Backward, &f, 1.0, z, x, y + 1, &dim);
                    assert_eq!(fwd, bwd, "z={} x={} y={}", z, x, y);
                }
            }
        }
    }

    #[test]
    fn constant_field_has_zero_derivative() {
        let dim = test_dim();
        let f = Array1::from_elem(dim.len(), 3.5 as Real);
        let z = HALO + 2;
        let x = HALO + 2;
        let y = HALO + 2;
        assert_eq!(stencil_z(Offset::Forward, &f, 1.0, z, x, y, &dim), 0.0);
        assert_eq!(stencil_x(Offset::Backward, &f, 1.0, z, x, y, &dim), 0.0);
        assert_eq!(stencil_y(Offset::Forward, &f, 1.0, z, x, y, &dim), 0.0);
    }
}
