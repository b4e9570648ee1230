//! Elastic-coefficient averagers (spec §4.3): harmonic form for the
//! Voigt-diagonal-style terms, arithmetic-of-reciprocals form for the
//! off-diagonal couplings.
//!
//! The `2.5` factor in the 4-sample harmonic forms below is reproduced
//! verbatim from the reference implementation (spec §4.3 "Open question");
//! a 4-point arithmetic mean would use `4.0`, not `2.5`. Preserved for
//! bit-comparable output.

use crate::dim::Dim;
use crate::fields::{FieldArray, Real};

const HARM4_FACTOR: Real = 2.5;

pub fn cell_coeff_tl(c: &FieldArray, z: usize, x: usize, y: usize, dim: &Dim) -> Real {
    1.0 / c[dim.idx(z, x, y)]
}

pub fn cell_coeff_tr(c: &FieldArray, z: usize, x: usize, y: usize, dim: &Dim) -> Real {
    let sum = c[dim.idx(z, x, y)] + c[dim.idx(z, x + 1, y)] + c[dim.idx(z, x, y + 1)] + c[dim.idx(z, x + 1, y + 1)];
    1.0 / (HARM4_FACTOR * sum)
}

pub fn cell_coeff_bl(c: &FieldArray, z: usize, x: usize, y: usize, dim: &Dim) -> Real {
    let sum = c[dim.idx(z, x, y)] + c[dim.idx(z, x, y + 1)] + c[dim.idx(z + 1, x, y)] + c[dim.idx(z + 1, x, y + 1)];
    1.0 / (HARM4_FACTOR * sum)
}

pub fn cell_coeff_br(c: &FieldArray, z: usize, x: usize, y: usize, dim: &Dim) -> Real {
    let sum = c[dim.idx(z, x, y)] + c[dim.idx(z, x + 1, y)] + c[dim.idx(z + 1, x, y)] + c[dim.idx(z + 1, x + 1, y)];
    1.0 / (HARM4_FACTOR * sum)
}

pub fn cell_coeff_artm_tl(c: &FieldArray, z: usize, x: usize, y: usize, dim: &Dim) -> Real {
    1.0 / c[dim.idx(z, x, y)]
}

pub fn cell_coeff_artm_tr(c: &FieldArray, z: usize, x: usize, y: usize, dim: &Dim) -> Real {
    0.25
        * (1.0 / c[dim.idx(z, x, y)]
            + 1.0 / c[dim.idx(z, x + 1, y)]
            + 1.0 / c[dim.idx(z, x, y + 1)]
            + 1.0 / c[dim.idx(z, x + 1, y + 1)])
}

pub fn cell_coeff_artm_bl(c: &FieldArray, z: usize, x: usize, y: usize, dim: &Dim) -> Real {
    0.25
        * (1.0 / c[dim.idx(z, x, y)]
            + 1.0 / c[dim.idx(z, x, y + 1)]
            + 1.0 / c[dim.idx(z + 1, x, y)]
            + 1.0 / c[dim.idx(z + 1, x, y + 1)])
}

pub fn cell_coeff_artm_br(c: &FieldArray, z: usize, x: usize, y: usize, dim: &Dim) -> Real {
    0.25
        * (1.0 / c[dim.idx(z, x, y)]
            + 1.0 / c[dim.idx(z, x + 1, y)]
            + 1.0 / c[dim.idx(z + 1, x, y)]
            + 1.0 / c[dim.idx(z + 1, x + 1, y)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dim::HALO;
    use ndarray::Array1;

    fn test_dim() -> Dim {
        Dim {
            zsize: 16,
            xsize: 16,
            ysize: 16,
            pitch: 16,
        }
    }

    #[test]
    fn harmonic_four_sample_uses_2_5_not_4_0() {
        let dim = test_dim();
        let c = Array1::from_elem(dim.len(), 2.0 as Real);
        let (z, x, y) = (HALO, HALO, HALO);
        // sum = 4 * 2.0 = 8.0; 1/(2.5*8.0) = 0.05, NOT 1/(4.0*8.0) = 0.03125
        assert_eq!(cell_coeff_tr(&c, z, x, y, &dim), 1.0 / (2.5 * 8.0));
        assert_ne!(cell_coeff_tr(&c, z, x, y, &dim), 1.0 / (4.0 * 8.0));
    }

    #[test]
    fn constant_field_all_forms_equal_reciprocal() {
        let dim = test_dim();
        let c = Array1::from_elem(dim.len(), 5.0 as Real);
        let (z, x, y) = (HALO, HALO, HALO);
        assert_eq!(cell_coeff_tl(&c, z, x, y, &dim), 0.2);
        assert_eq!(cell_coeff_artm_tl(&c, z, x, y, &dim), 0.2);
        assert_eq!(cell_coeff_artm_tr(&c, z, x, y, &dim), 0.2);
        assert_eq!(cell_coeff_artm_bl(&c, z, x, y, &dim), 0.2);
        assert_eq!(cell_coeff_artm_br(&c, z, x, y, &dim), 0.2);
    }

    #[test]
    fn arithmetic_form_averages_reciprocals() {
        let dim = test_dim();
        let mut c = Array1::from_elem(dim.len(), 1.0 as Real);
        let (z, x, y) = (HALO, HALO, HALO);
        c[dim.idx(z, x + 1, y)] = 2.0;
        c[dim.idx(z, x, y + 1)] = 4.0;
        c[dim.idx(z, x + 1, y + 1)] = 1.0;
        let expect = 0.25 * (1.0 / 1.0 + 1.0 / 2.0 + 1.0 / 4.0 + 1.0 / 1.0);
        assert_eq!(cell_coeff_artm_tr(&c, z, x, y, &dim), expect);
    }
}
